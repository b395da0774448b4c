//! Configuration loading and parsing for marklint.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use marklint::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config("rules:\n  final-newline: [2]\n", Path::new(".marklint.yml")).unwrap();
//! assert_eq!(config.rules.len(), 1);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::LintConfig;
