//! Release version consistency between `library.properties`, `library.json`
//! and the `<PREFIX>_MAJOR/_MINOR/_PATCH` macros of the main header.

use crate::output::VersionReport;
use crate::parser::Cursor;
use eyre::{Result, WrapErr};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    #[error("Version not found in properties file (no `version=` line)")]
    MissingProperty,

    #[error("Version not found in manifest (no string `version` field)")]
    MissingManifestField,

    #[error("Version macro not found in header: {macro_name}")]
    MissingMacro { macro_name: String },

    #[error("Version mismatch detected: properties={properties}, manifest={manifest}, header={header}")]
    Mismatch {
        properties: String,
        manifest: String,
        header: String,
    },
}

/// Value of the first `version=` line
pub fn version_from_properties(text: &str) -> Result<String, VersionError> {
    text.lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("version="))
        .map(|value| value.trim().to_string())
        .ok_or(VersionError::MissingProperty)
}

/// Top-level `version` string of a JSON manifest
pub fn version_from_manifest(text: &str) -> Result<String> {
    let manifest: serde_json::Value = serde_json::from_str(text).wrap_err("Failed to parse manifest JSON")?;
    let version = manifest
        .get("version")
        .and_then(serde_json::Value::as_str)
        .ok_or(VersionError::MissingManifestField)?;
    Ok(version.to_string())
}

/// `MAJOR.MINOR.PATCH` assembled from `#define <prefix>_<PART> <digits>` macros
pub fn version_from_header(text: &str, prefix: &str) -> Result<String, VersionError> {
    let parts = ["MAJOR", "MINOR", "PATCH"]
        .iter()
        .map(|part| {
            let macro_name = format!("{}_{}", prefix, part);
            find_define(text, &macro_name).ok_or(VersionError::MissingMacro { macro_name })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join("."))
}

/// Digits of the first `#define <name> <digits>` anywhere in `text`
fn find_define<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.match_indices("#define").find_map(|(at, _)| {
        let mut cur = Cursor::at(text, at + "#define".len());
        if cur.eat_while(char::is_whitespace) == 0 || !cur.eat(name) {
            return None;
        }
        if cur.eat_while(char::is_whitespace) == 0 {
            return None;
        }
        let start = cur.pos();
        let len = cur.eat_while(|c| c.is_ascii_digit());
        (len > 0).then(|| &text[start..start + len])
    })
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("Failed to read version source: {}", path.display()))
}

/// Read all three sources and compare them.
///
/// Any unreadable or malformed source aborts before the comparison; a
/// disagreement is reported through `matches`, not as an error.
pub fn compare_versions(properties: &Path, manifest: &Path, header: &Path, prefix: &str) -> Result<VersionReport> {
    let props_version =
        version_from_properties(&read(properties)?).wrap_err_with(|| format!("in {}", properties.display()))?;
    let manifest_version = version_from_manifest(&read(manifest)?).wrap_err_with(|| format!("in {}", manifest.display()))?;
    let header_version =
        version_from_header(&read(header)?, prefix).wrap_err_with(|| format!("in {}", header.display()))?;

    let matches = props_version == manifest_version && props_version == header_version;
    Ok(VersionReport {
        properties: props_version,
        manifest: manifest_version,
        header: header_version,
        matches,
    })
}

impl VersionReport {
    /// Turn a disagreeing report into an error carrying all three values
    pub fn ensure_match(&self) -> Result<(), VersionError> {
        if self.matches {
            Ok(())
        } else {
            Err(VersionError::Mismatch {
                properties: self.properties.clone(),
                manifest: self.manifest.clone(),
                header: self.header.clone(),
            })
        }
    }
}
