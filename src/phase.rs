// Copyright 2025 Bilinear Labs - MIT License

//! The two airdrop phases. Each phase is one independent run of the same pipeline,
//! parameterized by its record type.

use crate::address::ChecksumMode;
use crate::distribution::{generate_distribution, Distribution, DuplicatePolicy};
use crate::errors::MerkleError;
use crate::hasher::Keccak256Hasher;
use crate::ingest::parse_records;
use crate::leaf::{FieldType, LeafRecord, Phase1Record, Phase2Record};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info_span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneratorOptions {
    pub duplicates: DuplicatePolicy,
    pub checksum: ChecksumMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Address only.
    One,
    /// Address and uint256 allotment.
    Two,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::One, Phase::Two];

    pub fn schema(&self) -> &'static [FieldType] {
        match self {
            Phase::One => Phase1Record::SCHEMA,
            Phase::Two => Phase2Record::SCHEMA,
        }
    }

    pub fn default_input(&self) -> &'static str {
        match self {
            Phase::One => "phase1.csv",
            Phase::Two => "phase2.csv",
        }
    }

    pub fn default_output(&self) -> &'static str {
        match self {
            Phase::One => "phase1-merkle-data.json",
            Phase::Two => "phase2-merkle-data.json",
        }
    }

    /// Runs the whole pipeline for this phase on CSV text: parse, encode, build, prove.
    pub fn generate_from_csv(
        &self,
        input: &str,
        options: &GeneratorOptions,
    ) -> Result<Distribution, MerkleError> {
        let _span = info_span!("phase", phase = %self).entered();
        match self {
            Phase::One => run::<Phase1Record>(input, options),
            Phase::Two => run::<Phase2Record>(input, options),
        }
    }

    /// Reads the CSV file at `path` and runs [`Phase::generate_from_csv`] on it.
    pub fn generate_from_path(
        &self,
        path: &Path,
        options: &GeneratorOptions,
    ) -> Result<Distribution, MerkleError> {
        let input = fs::read_to_string(path)?;
        debug!(phase = %self, path = %path.display(), bytes = input.len(), "read input");
        self.generate_from_csv(&input, options)
    }
}

fn run<R: LeafRecord>(
    input: &str,
    options: &GeneratorOptions,
) -> Result<Distribution, MerkleError> {
    let records: Vec<R> = parse_records(input, options.checksum)?;
    generate_distribution(Keccak256Hasher, &records, options.duplicates)
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::One => f.write_str("phase1"),
            Phase::Two => f.write_str("phase2"),
        }
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "phase1" => Ok(Phase::One),
            "2" | "phase2" => Ok(Phase::Two),
            other => Err(format!("unknown phase `{other}`, expected 1 or 2")),
        }
    }
}
