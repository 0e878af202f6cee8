//! Avatar resolution.
//!
//! Locates the avatar by matching a regex against the absolute path of every
//! file under the assets directory, then publishes it under a content-hashed
//! directory so the URL changes whenever the image does.
//!
//! ```text
//! assets/images/mychi.jpg ──► public/static/<hash>/mychi.jpg
//!                             FixedImage { src: "{prefix}/static/<hash>/mychi.jpg", 50×50 }
//! ```
//!
//! The file name is percent-encoded in `src` and kept as-is on disk. Publishing
//! a new hash removes older `static/<hash>/` copies of the same file name.

use crate::{
    config::SiteConfig,
    data::{DataError, FixedImage},
};
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Width and height of the rendered avatar, in CSS pixels.
pub const AVATAR_SIZE: u32 = 50;

/// Directory under the output root holding hashed assets.
pub const STATIC_DIR: &str = "static";

/// Bytes of the blake3 digest kept in the directory name.
const HASH_BYTES: usize = 8;

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Turns the configured avatar pattern into a [`FixedImage`].
#[derive(Debug, Clone)]
pub struct AvatarResolver {
    pattern: Regex,
    assets: PathBuf,
    output: PathBuf,
    path_prefix: String,
    /// Copy the image into the output directory while resolving.
    materialize: bool,
}

impl AvatarResolver {
    pub fn from_config(config: &SiteConfig) -> Result<Self, DataError> {
        let pattern = Regex::new(&config.build.avatar)
            .map_err(|err| DataError::Pattern(config.build.avatar.clone(), err))?;

        Ok(Self {
            pattern,
            assets: config.build.assets.clone(),
            output: config.build.output.clone(),
            path_prefix: config.build.path_prefix.clone(),
            materialize: true,
        })
    }

    /// Resolve without touching the output directory.
    pub fn dry_run(mut self) -> Self {
        self.materialize = false;
        self
    }

    /// First asset (in file-name order) whose absolute path matches the pattern.
    pub fn locate(&self) -> Option<PathBuf> {
        WalkDir::new(&self.assets)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                let name = e.file_name().to_str().unwrap_or_default();
                !IGNORED_FILES.contains(&name)
            })
            .map(|e| e.into_path())
            .find(|path| self.pattern.is_match(&absolute(path).to_string_lossy()))
    }

    /// Locate, hash and (unless dry-running) publish the avatar.
    ///
    /// `Ok(None)` when no asset matches.
    pub fn resolve(&self) -> Result<Option<FixedImage>, DataError> {
        let Some(source) = self.locate() else {
            return Ok(None);
        };

        let bytes = fs::read(&source).map_err(|err| DataError::Io(source.clone(), err))?;
        let digest = hex::encode(&blake3::hash(&bytes).as_bytes()[..HASH_BYTES]);
        let name = source.file_name().unwrap_or_default().to_string_lossy();

        if self.materialize {
            self.publish(&digest, &name, &bytes)?;
        }

        let src = format!(
            "{}/{STATIC_DIR}/{digest}/{}",
            self.path_prefix,
            urlencoding::encode(&name)
        );
        Ok(Some(FixedImage {
            src_set: Some(format!("{src} 1x")),
            src,
            width: AVATAR_SIZE,
            height: AVATAR_SIZE,
            base64: None,
        }))
    }

    /// Write `bytes` to `static/<digest>/<name>` and drop older hashes of `name`.
    fn publish(&self, digest: &str, name: &str, bytes: &[u8]) -> Result<(), DataError> {
        let static_dir = self.output.join(STATIC_DIR);
        let dir = static_dir.join(digest);
        fs::create_dir_all(&dir).map_err(|err| DataError::Io(dir.clone(), err))?;

        let dest = dir.join(name);
        fs::write(&dest, bytes).map_err(|err| DataError::Io(dest.clone(), err))?;

        for stale in stale_dirs(&static_dir, digest, name) {
            fs::remove_dir_all(&stale).map_err(|err| DataError::Io(stale.clone(), err))?;
        }
        Ok(())
    }
}

/// Hash directories other than `digest` that hold a copy of `name`.
fn stale_dirs(static_dir: &Path, digest: &str, name: &str) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(static_dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|path| path.is_dir())
        .filter(|path| {
            path.file_name()
                .and_then(|d| d.to_str())
                .is_some_and(|d| d != digest && is_digest(d))
        })
        .filter(|path| path.join(name).is_file())
        .collect()
}

fn is_digest(name: &str) -> bool {
    name.len() == HASH_BYTES * 2 && name.bytes().all(|b| b.is_ascii_hexdigit())
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

// ============================================================================
// Tests
// ============================================================================
