//! Where the generated files go, and getting them there.
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};
use crate::render::RenderedArtifacts;

/// Resolves the locations of the two generated files.
///
/// The generator never decides this itself, so that it can be pointed at any repository layout (or a scratch directory
/// in tests).
pub trait OutputLocator {
    fn header_path(&self) -> PathBuf;
    fn source_path(&self) -> PathBuf;
}

/// The layout of the Synthizer repository: `include/synthizer/data/hrtf.hpp` and `src/data/hrtf.cpp` under the root.
#[derive(Clone, Debug)]
pub struct RepoLayout {
    pub root: PathBuf,
}

impl RepoLayout {
    pub fn new(root: impl Into<PathBuf>) -> RepoLayout {
        RepoLayout { root: root.into() }
    }
}

impl OutputLocator for RepoLayout {
    fn header_path(&self) -> PathBuf {
        self.root.join("include/synthizer/data/hrtf.hpp")
    }

    fn source_path(&self) -> PathBuf {
        self.root.join("src/data/hrtf.cpp")
    }
}

#[derive(Clone, Debug)]
pub struct ExplicitPaths {
    pub header: PathBuf,
    pub source: PathBuf,
}

impl OutputLocator for ExplicitPaths {
    fn header_path(&self) -> PathBuf {
        self.header.clone()
    }

    fn source_path(&self) -> PathBuf {
        self.source.clone()
    }
}

/// Distinguishes temporary files of concurrent writes from the same process.
static TEMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace the file at `path` with `contents`, creating parent directories as needed.
///
/// The contents go to a temporary file next to the destination, which is then renamed over it.  Readers see either the
/// old file or the new one, never a half-written file.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| {
            Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "output path has no file name"),
            )
        })?
        .to_string_lossy();
    let temp_path = path.with_file_name(format!(
        ".{}.tmp-{}-{}",
        file_name,
        std::process::id(),
        TEMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));

    if let Err(e) = std::fs::write(&temp_path, contents.as_bytes()) {
        // Might not exist, depending on where the write failed.
        let _ = std::fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(Error::io(path, e));
    }

    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Write both artifacts to the locations the locator gives.
///
/// The source is written first, then the header.  The two writes are not atomic as a pair.
pub fn write_artifacts(artifacts: &RenderedArtifacts, locator: &dyn OutputLocator) -> Result<()> {
    let header_path = locator.header_path();
    let source_path = locator.source_path();

    for (path, contents) in [
        (&source_path, &artifacts.source),
        (&header_path, &artifacts.header),
    ] {
        write_file(path, contents)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_layout() {
        let layout = RepoLayout::new("/repo");
        assert_eq!(
            layout.header_path(),
            Path::new("/repo/include/synthizer/data/hrtf.hpp")
        );
        assert_eq!(layout.source_path(), Path::new("/repo/src/data/hrtf.cpp"));
    }

    #[test]
    fn test_explicit_paths() {
        let paths = ExplicitPaths {
            header: PathBuf::from("a/b.hpp"),
            source: PathBuf::from("c/d.cpp"),
        };
        let by_ref: &dyn OutputLocator = &paths;
        assert_eq!(by_ref.header_path(), PathBuf::from("a/b.hpp"));
        assert_eq!(by_ref.source_path(), PathBuf::from("c/d.cpp"));
    }
}
