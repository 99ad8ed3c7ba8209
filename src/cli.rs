// Copyright 2025 Bilinear Labs - MIT License

use airdrop_merkle::{ChecksumMode, DuplicatePolicy, GeneratorOptions, Phase};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// Environment variables
pub const AIRDROP_INPUT_DIR: &str = "AIRDROP_INPUT_DIR";
pub const AIRDROP_OUTPUT_DIR: &str = "AIRDROP_OUTPUT_DIR";
pub const AIRDROP_DUPLICATES: &str = "AIRDROP_DUPLICATES";
pub const AIRDROP_LENIENT_CHECKSUM: &str = "AIRDROP_LENIENT_CHECKSUM";

#[derive(Debug, Parser)]
#[command(name = "airdrop-merkle")]
#[command(about = "Generate Merkle roots and inclusion proofs for airdrop phases")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the artifact of a single phase.
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Generate the artifacts of every phase concurrently.
    All {
        #[command(flatten)]
        args: AllArgs,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Phase to generate: 1 (address) or 2 (address, amount).
    #[arg(long)]
    pub phase: Phase,
    /// CSV input. Defaults to the phase's input file in the current directory.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// JSON artifact path. Defaults to `output/<phase>-merkle-data.json`.
    #[arg(long)]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub options: OptionsArgs,
}

#[derive(Debug, Args)]
pub struct AllArgs {
    /// Directory holding `phase1.csv` and `phase2.csv`.
    #[arg(long, env = AIRDROP_INPUT_DIR, default_value = ".")]
    pub input_dir: PathBuf,
    /// Directory receiving the JSON artifacts.
    #[arg(long, env = AIRDROP_OUTPUT_DIR, default_value = "output")]
    pub output_dir: PathBuf,
    #[command(flatten)]
    pub options: OptionsArgs,
}

#[derive(Debug, Args)]
pub struct OptionsArgs {
    /// How to handle an address appearing in more than one row.
    #[arg(long, env = AIRDROP_DUPLICATES, value_enum, default_value_t = Duplicates::LastWins)]
    pub duplicates: Duplicates,
    /// Accept mixed-case addresses whose EIP-55 checksum does not match.
    #[arg(long, env = AIRDROP_LENIENT_CHECKSUM)]
    pub lenient_checksum: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Duplicates {
    /// Later rows replace earlier entries for the same address.
    LastWins,
    /// Fail the phase on the first repeated address.
    Reject,
}

impl From<&OptionsArgs> for GeneratorOptions {
    fn from(args: &OptionsArgs) -> Self {
        GeneratorOptions {
            duplicates: match args.duplicates {
                Duplicates::LastWins => DuplicatePolicy::LastWins,
                Duplicates::Reject => DuplicatePolicy::Reject,
            },
            checksum: if args.lenient_checksum {
                ChecksumMode::Lenient
            } else {
                ChecksumMode::Strict
            },
        }
    }
}
