//! Cityweather Core Library
//!
//! Shared utilities for the dashboard binary:
//! - Configuration loading (XDG-compliant)
//! - File system utilities
//! - Common constants

mod config;
pub mod fs;

pub use config::{find_config_file, load_config, ConfigSource};
pub use fs::{create_dir_all, path_exists};

/// Application name used for XDG paths
pub const APP_NAME: &str = "cityweather";

/// Default dashboard port
pub const DEFAULT_DASHBOARD_PORT: u16 = 8950;

/// Default time-to-live for cached database snapshots (1 hour)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
