// Copyright 2025 Bilinear Labs - MIT License

//! Renders a distribution as the published JSON artifact and writes it atomically.

use crate::distribution::Distribution;
use crate::errors::MerkleError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Pretty-printed JSON with a four space indent.
pub fn render_artifact(distribution: &Distribution) -> Result<Vec<u8>, MerkleError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    distribution.serialize(&mut serializer)?;
    Ok(buf)
}

/// Writes to a temporary file next to `path` and renames it into place, so an
/// existing artifact is only replaced by a complete one.
pub fn write_artifact(path: &Path, distribution: &Distribution) -> Result<(), MerkleError> {
    let bytes = render_artifact(distribution)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(&bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    info!(
        path = %path.display(),
        root = %distribution.merkle_root,
        "artifact written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::{GeneratorOptions, Phase};

    #[test]
    fn test_render_layout() {
        let csv = "address\n0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed\n";
        let dist = Phase::One
            .generate_from_csv(csv, &GeneratorOptions::default())
            .unwrap();
        let text = String::from_utf8(render_artifact(&dist).unwrap()).unwrap();
        let root = dist.merkle_root;

        assert_eq!(
            text,
            format!(
                "{{\n    \"0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed\": {{\n        \"leaf\": \"{root}\",\n        \"proof\": []\n    }},\n    \"merkleRoot\": \"{root}\"\n}}"
            )
        );
    }
}
