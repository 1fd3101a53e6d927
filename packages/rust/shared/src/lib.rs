//! Shared error model and configuration for readcache.
//!
//! This crate is the foundation depended on by the fetcher, cache writer,
//! and CLI. It provides:
//! - [`ReadcacheError`] — the unified error type
//! - Configuration ([`AppConfig`], [`CacheConfig`], [`FetchConfig`], config loading)

pub mod config;
pub mod error;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, CacheConfig, CacheSection, FetchConfig, FetchSection, config_dir,
    config_file_path, load_config, load_config_from,
};
pub use error::{ReadcacheError, Result};
