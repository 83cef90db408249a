use crate::output::CopyStats;
use eyre::{Result, WrapErr};
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Copy everything under `src` into `dst`, overwriting files that exist.
///
/// Directories are created as needed, `dst` included. Files that only
/// exist in `dst` are left untouched. Symlinks are followed.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<CopyStats> {
    if !src.is_dir() {
        return Err(eyre::eyre!("Source is not a directory: {}", src.display()));
    }

    fs::create_dir_all(dst).wrap_err_with(|| format!("Failed to create directory: {}", dst.display()))?;
    let mut stats = CopyStats::default();

    for entry in WalkDir::new(src).follow_links(true).min_depth(1).sort_by_file_name() {
        let entry = entry.wrap_err_with(|| format!("Failed to walk directory: {}", src.display()))?;
        let rel = entry.path().strip_prefix(src)?;
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .wrap_err_with(|| format!("Failed to create directory: {}", target.display()))?;
            stats.directories += 1;
        } else {
            fs::copy(entry.path(), &target)
                .wrap_err_with(|| format!("Failed to copy {} to {}", entry.path().display(), target.display()))?;
            debug!(file = %rel.display(), "copied");
            stats.files += 1;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copy_tree_nested() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        write(&src.join("Watch.h"), "header");
        write(&src.join("Watch.cpp"), "source");
        write(&src.join("util/crc.h"), "crc");

        let dst = tmp.path().join(".pio/libdeps/devkit/src");
        let stats = copy_tree(&src, &dst).unwrap();

        assert_eq!(stats, CopyStats { directories: 1, files: 3 });
        assert_eq!(fs::read_to_string(dst.join("Watch.h")).unwrap(), "header");
        assert_eq!(fs::read_to_string(dst.join("util/crc.h")).unwrap(), "crc");
    }

    #[test]
    fn test_copy_tree_overwrites_and_keeps_extra_files() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write(&src.join("Watch.h"), "new");
        write(&dst.join("Watch.h"), "old old old");
        write(&dst.join("local.txt"), "mine");

        copy_tree(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("Watch.h")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dst.join("local.txt")).unwrap(), "mine");
    }

    #[test]
    fn test_copy_tree_empty_source() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        let dst = tmp.path().join("dst");

        let stats = copy_tree(&src, &dst).unwrap();
        assert_eq!(stats, CopyStats::default());
        assert!(dst.is_dir());
    }

    #[test]
    fn test_copy_tree_missing_source() {
        let tmp = TempDir::new().unwrap();
        let result = copy_tree(&tmp.path().join("nope"), &tmp.path().join("dst"));
        assert!(result.is_err());
        assert!(!tmp.path().join("dst").exists());
    }

    #[test]
    fn test_copy_tree_is_repeatable() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        write(&src.join("a/b/c.h"), "c");
        let dst = tmp.path().join("dst");

        let first = copy_tree(&src, &dst).unwrap();
        let second = copy_tree(&src, &dst).unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(dst.join("a/b/c.h")).unwrap(), "c");
    }
}
