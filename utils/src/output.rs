//! Writing build artifacts to disk.
//!
//! Output goes to a temp file in the destination directory and is renamed over
//! the target, so a web server never picks up a half-written page. Where the
//! rename cannot replace an existing file, the old file is moved aside to
//! `<name>.bak` (`index.html.bak`) first and restored if the second rename also fails.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Whether to `fsync` the temp file before it is renamed into place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPolicy {
    #[default]
    Sync,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub sync: SyncPolicy,
    /// Create missing parent directories (`dist/` on a fresh checkout).
    pub create_parents: bool,
    /// Unix permission bits for the published file. Ignored elsewhere.
    pub mode: Option<u32>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            sync: SyncPolicy::Sync,
            create_parents: true,
            // Pages are served, so world-readable.
            mode: Some(0o644),
        }
    }
}

/// Write `bytes` to `path` with [`OutputOptions::default`].
pub fn write_output(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    write_output_with_options(path, bytes, OutputOptions::default())
}

pub fn write_output_with_options(
    path: impl AsRef<Path>,
    bytes: &[u8],
    options: OutputOptions,
) -> io::Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if options.create_parents {
        fs::create_dir_all(parent)?;
    }

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    if options.sync == SyncPolicy::Sync {
        tmp.as_file().sync_all()?;
    }
    set_mode(tmp.path(), options.mode)?;

    if let Err(err) = tmp.persist(path) {
        if !path.exists() {
            return Err(err.error);
        }
        let backup = backup_path(path);
        let _ = fs::remove_file(&backup);
        fs::rename(path, &backup)?;
        if let Err(retry) = err.file.persist(path) {
            let _ = fs::rename(&backup, path);
            return Err(retry.error);
        }
        if let Err(e) = fs::remove_file(&backup) {
            tracing::warn!(path = %backup.display(), "failed to remove backup: {e}");
        }
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}

/// `index.html` → `index.html.bak`, next to the original.
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: Option<u32>) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    match mode {
        Some(mode) => fs::set_permissions(path, fs::Permissions::from_mode(mode)),
        None => Ok(()),
    }
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: Option<u32>) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use std::path::Path;

    use super::{OutputOptions, SyncPolicy, backup_path, write_output, write_output_with_options};

    fn fast() -> OutputOptions {
        OutputOptions {
            sync: SyncPolicy::Skip,
            ..OutputOptions::default()
        }
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dist").join("index.html");

        write_output(&path, b"<html></html>").expect("write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "<html></html>");
    }

    #[test]
    fn overwrites_existing_and_leaves_no_backup() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.html");

        write_output_with_options(&path, b"one", fast()).expect("write one");
        write_output_with_options(&path, b"two", fast()).expect("write two");

        assert_eq!(fs::read_to_string(&path).expect("read"), "two");
        assert!(!backup_path(&path).exists());
        let leftovers = fs::read_dir(dir.path()).expect("read_dir").count();
        assert_eq!(leftovers, 1, "temp file should have been renamed away");
    }

    #[test]
    fn backup_keeps_the_full_file_name() {
        assert_eq!(
            backup_path(Path::new("dist/index.html")),
            Path::new("dist/index.html.bak")
        );
        assert_eq!(backup_path(Path::new("page")), Path::new("page.bak"));
    }

    #[test]
    fn sibling_with_the_stem_and_bak_extension_is_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.html");
        let sibling = dir.path().join("index.bak");
        fs::write(&sibling, "keep me").expect("write sibling");

        write_output_with_options(&path, b"one", fast()).expect("write one");
        write_output_with_options(&path, b"two", fast()).expect("write two");

        assert_eq!(fs::read_to_string(&sibling).expect("read sibling"), "keep me");
        assert_eq!(fs::read_to_string(&path).expect("read"), "two");
    }

    #[test]
    fn missing_parent_is_an_error_when_not_creating() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope").join("index.html");
        let options = OutputOptions {
            create_parents: false,
            ..fast()
        };

        assert!(write_output_with_options(&path, b"x", options).is_err());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn published_pages_are_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.html");

        write_output_with_options(&path, b"page", fast()).expect("write");

        let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
