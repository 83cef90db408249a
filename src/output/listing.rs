use crate::output::{KeywordEntry, KeywordListing, Tag};
use eyre::{Result, WrapErr};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

fn tagged(names: &[String], tag: Tag) -> Vec<KeywordEntry> {
    names
        .iter()
        .map(|name| KeywordEntry {
            name: name.clone(),
            tag,
        })
        .collect()
}

impl KeywordListing {
    /// The KEYWORD1 entry for the library itself
    pub fn library_entry(&self) -> KeywordEntry {
        KeywordEntry {
            name: self.library.clone(),
            tag: Tag::Keyword1,
        }
    }

    /// Sections in output order: functions, types, then one per enum block
    pub fn sections(&self) -> Vec<Vec<KeywordEntry>> {
        let mut sections = vec![tagged(&self.functions, Tag::Keyword2), tagged(&self.types, Tag::Literal1)];
        sections.extend(self.enums.iter().map(|block| tagged(block, Tag::Literal1)));
        sections
    }
}

/// Render a listing as `keywords.txt` text.
///
/// The library line carries its own newline, so a blank line follows it.
/// Every section ends with an empty line, and lines are joined with `\n`.
pub fn render_listing(listing: &KeywordListing) -> String {
    let mut lines = vec![format!("{}\n", listing.library_entry())];

    for section in listing.sections() {
        lines.extend(section.iter().map(ToString::to_string));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Write `text` to `path`, replacing it only once the whole text is on disk
pub fn write_listing(path: &Path, text: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .wrap_err_with(|| format!("Failed to create output in directory: {}", dir.display()))?;
    tmp.write_all(text.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .wrap_err_with(|| format!("Failed to write output: {}", path.display()))?;

    let permissions = match fs::metadata(path) {
        Ok(existing) => fs::set_permissions(tmp.path(), existing.permissions()),
        Err(_) => set_default_permissions(tmp.path()),
    };
    permissions.wrap_err_with(|| format!("Failed to set permissions on output: {}", path.display()))?;

    tmp.persist(path)
        .map_err(|e| e.error)
        .wrap_err_with(|| format!("Failed to replace output: {}", path.display()))?;

    info!(path = %path.display(), bytes = text.len(), "wrote listing");
    Ok(())
}

#[cfg(unix)]
fn set_default_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
