// Copyright 2025 Bilinear Labs - MIT License

//! Reads beneficiary records from CSV text. The header names the columns, the first
//! of which must be `address`. Rows are parsed into the typed record of the phase.

use crate::address::ChecksumMode;
use crate::errors::MerkleError;
use crate::leaf::LeafRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

const ADDRESS_COLUMN: &str = "address";

fn csv_error(err: csv::Error) -> MerkleError {
    MerkleError::Csv {
        line: err.position().map_or(0, |p| p.line() as usize),
        reason: err.to_string(),
    }
}

fn line_of(record: &StringRecord) -> usize {
    record.position().map_or(1, |p| p.line() as usize)
}

pub fn parse_records<R: LeafRecord>(
    input: &str,
    mode: ChecksumMode,
) -> Result<Vec<R>, MerkleError> {
    // Row lengths are checked against the schema below, not by the reader.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input.as_bytes());

    let header = reader.headers().map_err(csv_error)?.clone();
    match header.get(0) {
        None => {
            return Err(MerkleError::Csv {
                line: 1,
                reason: "missing header".to_string(),
            })
        }
        Some(ADDRESS_COLUMN) => {}
        Some(other) => {
            return Err(MerkleError::Csv {
                line: line_of(&header),
                reason: format!("first column must be `{ADDRESS_COLUMN}`, found `{other}`"),
            })
        }
    }
    if header.len() != R::SCHEMA.len() {
        return Err(MerkleError::SchemaMismatch {
            expected: R::SCHEMA.len(),
            found: header.len(),
        });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let fields: Vec<&str> = row.iter().collect();
        records.push(R::from_fields(&fields, mode)?);
    }

    debug!(columns = ?header, records = records.len(), "parsed csv records");
    Ok(records)
}
