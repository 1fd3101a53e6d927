//! Cache file writer.
//!
//! Persists extracted article text to the fixed cache file the feed reader
//! displays from. Each run fully overwrites the previous content: no
//! history, no metadata, no locking, no atomic rename. Concurrent writers
//! race and the last one wins.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use readcache_shared::{CacheConfig, ReadcacheError, Result};

/// Write `content` verbatim to `path`, truncating any prior content.
///
/// The file handle is scoped to this call and released on every exit path,
/// including write failure. Missing parent directories are NOT created; the
/// cache directory is expected to exist (the feed reader's config dir).
pub fn write_content(content: &str, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ReadcacheError::io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ReadcacheError::io(path, e))?;

    debug!(?path, bytes = content.len(), "cache file written");
    Ok(())
}

/// Write `content` to the cache file resolved from `config`.
///
/// Returns the path written so the caller can report it.
pub fn write_to_cache(content: &str, config: &CacheConfig) -> Result<PathBuf> {
    let path = config.file_path();
    write_content(content, &path)?;
    Ok(path)
}
