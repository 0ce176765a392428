//! Photo-sharing backend runtime configuration.
//!
//! Exposes the AWS resource identifiers the photo-sharing application
//! reads at startup: the region, the S3 photo bucket, the DynamoDB
//! metadata tables, the describe-execution Lambda, and the Cognito
//! identity pool.
//!
//! # Modules
//!
//! - **config**: the `RuntimeConfig` value, its defaults, and env overrides
//! - **errors**: centralized error handling
//!
//! # Usage
//!
//! ```
//! let config = photoshare_config::get();
//! assert!(!config.region.is_empty());
//! ```

pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{get, RuntimeConfig};
pub use errors::{ConfigError, ConfigResult};
