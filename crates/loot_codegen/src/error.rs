//! Error taxonomy for the generator.
//!
//! Input failures (missing or malformed catalogs) and output failures are
//! both fatal; the binary logs the chain and exits non-zero. Every variant
//! carries the offending path so the failure report names the actual file
//! involved.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to read catalog {}: {}", .path.display(), .source)]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog {}: {}", .path.display(), .source)]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("bad loot-table glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to scan loot-table directory: {0}")]
    Scan(#[from] glob::GlobError),

    #[error("failed to create output directory {}: {}", .path.display(), .source)]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {}", .path.display(), .source)]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
