//! All-or-nothing writes of the finished PNG to every output target
//!
//! Each target is first written to a hidden staging file next to it. Targets
//! are only renamed into place once every staging write has succeeded. An
//! existing file is moved aside to a hidden backup before being replaced, so
//! a failure can put every target back the way it was.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::{Error, OutputTarget, Result};

/// A target renamed into place by the current call.
struct Committed<'a> {
    target: &'a OutputTarget,
    /// Where the previous file was moved, if there was one
    backup: Option<PathBuf>,
}

/// Write `bytes` to every target, or to none of them.
///
/// Returns the targets in the order they were committed.
pub fn write_all(bytes: &[u8], targets: &[OutputTarget]) -> Result<Vec<OutputTarget>> {
    let mut staged: Vec<(PathBuf, &OutputTarget)> = Vec::with_capacity(targets.len());
    for target in targets {
        match stage(&target.path, bytes) {
            Ok(tmp) => staged.push((tmp, target)),
            Err(e) => {
                discard(staged.iter().map(|(tmp, _)| tmp.as_path()));
                return Err(e);
            }
        }
    }

    let mut committed: Vec<Committed<'_>> = Vec::with_capacity(staged.len());
    for (i, (tmp, target)) in staged.iter().enumerate() {
        match commit(tmp, &target.path) {
            Ok(backup) => {
                info!("wrote {} ({} bytes)", target.path.display(), bytes.len());
                committed.push(Committed { target, backup });
            }
            Err(source) => {
                discard(staged[i..].iter().map(|(tmp, _)| tmp.as_path()));
                roll_back(&committed);
                return Err(Error::WriteError {
                    path: target.path.clone(),
                    source,
                });
            }
        }
    }

    discard(committed.iter().filter_map(|c| c.backup.as_deref()));
    Ok(committed.into_iter().map(|c| c.target.clone()).collect())
}

/// Hidden sibling that `dest` is staged under.
pub fn staging_path(dest: &Path) -> io::Result<PathBuf> {
    hidden_sibling(dest, "partial")
}

/// Hidden sibling that an existing `dest` is moved to while it is replaced.
pub fn backup_path(dest: &Path) -> io::Result<PathBuf> {
    hidden_sibling(dest, "bak")
}

fn hidden_sibling(dest: &Path, suffix: &str) -> io::Result<PathBuf> {
    let name = dest.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    Ok(dest.with_file_name(format!(".{}.{}", name.to_string_lossy(), suffix)))
}

/// Move an existing regular file at `dest` aside, then rename `tmp` over it.
/// On failure the previous file is back at `dest`.
fn commit(tmp: &Path, dest: &Path) -> io::Result<Option<PathBuf>> {
    let backup = match fs::metadata(dest) {
        Ok(meta) if meta.is_file() => {
            let backup = backup_path(dest)?;
            fs::rename(dest, &backup)?;
            Some(backup)
        }
        _ => None,
    };

    if let Err(e) = fs::rename(tmp, dest) {
        if let Some(backup) = &backup {
            if let Err(restore) = fs::rename(backup, dest) {
                warn!("could not restore {}: {}", dest.display(), restore);
            }
        }
        return Err(e);
    }
    Ok(backup)
}

/// Undo committed renames, newest first: restore backups, remove new files.
fn roll_back(committed: &[Committed<'_>]) {
    for c in committed.iter().rev() {
        let dest = &c.target.path;
        let result = match &c.backup {
            Some(backup) => fs::rename(backup, dest),
            None => fs::remove_file(dest),
        };
        match result {
            Ok(()) => debug!("rolled back {}", dest.display()),
            Err(e) => warn!("could not roll back {}: {}", dest.display(), e),
        }
    }
}

fn stage(dest: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let write = |tmp: &Path| -> io::Result<()> {
        let mut file = File::create(tmp)?;
        file.write_all(bytes)?;
        file.sync_all()
    };

    let result = staging_path(dest).and_then(|tmp| match write(&tmp) {
        Ok(()) => Ok(tmp),
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    });
    match result {
        Ok(tmp) => {
            debug!("staged {}", tmp.display());
            Ok(tmp)
        }
        Err(source) => Err(Error::WriteError {
            path: dest.to_path_buf(),
            source,
        }),
    }
}

fn discard<'a>(paths: impl Iterator<Item = &'a Path>) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!("could not remove {}: {}", path.display(), e);
            }
        }
    }
}
