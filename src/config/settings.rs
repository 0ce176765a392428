//! Runtime configuration loaded at application startup.

use std::env;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_COGNITO_IDENTITY_POOL, DEFAULT_DDB_ALBUM_METADATA_TABLE,
    DEFAULT_DDB_IMAGE_METADATA_TABLE, DEFAULT_DESCRIBE_EXECUTION_LAMBDA, DEFAULT_REGION,
    DEFAULT_S3_PHOTO_REPO_BUCKET, ENV_COGNITO_IDENTITY_POOL, ENV_DDB_ALBUM_METADATA_TABLE,
    ENV_DDB_IMAGE_METADATA_TABLE, ENV_DESCRIBE_EXECUTION_LAMBDA, ENV_REGION,
    ENV_S3_PHOTO_REPO_BUCKET,
};
use crate::errors::{ConfigError, ConfigResult};

/// AWS resource identifiers read by the photo-sharing application.
///
/// Built once at startup and never mutated; the serialized shape uses the
/// field names the web client consumes (`Region`, `S3PhotoRepoBucket`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// AWS region the backend stack runs in.
    #[serde(rename = "Region")]
    pub region: String,

    /// S3 bucket holding uploaded photos.
    #[serde(rename = "S3PhotoRepoBucket")]
    pub s3_photo_repo_bucket: String,

    /// DynamoDB table with per-image metadata records.
    #[serde(rename = "DDBImageMetadataTable")]
    pub ddb_image_metadata_table: String,

    /// DynamoDB table with album metadata records.
    #[serde(rename = "DDBAlbumMetadataTable")]
    pub ddb_album_metadata_table: String,

    /// Lambda function polled for execution status.
    #[serde(rename = "DescribeExecutionLambda")]
    pub describe_execution_lambda: String,

    /// Cognito identity pool used for auth federation.
    #[serde(rename = "CognitoIdentityPool")]
    pub cognito_identity_pool: String,
}

impl Default for RuntimeConfig {
    /// Identifiers of the deployed `photo-sharing-backend` stack.
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            s3_photo_repo_bucket: DEFAULT_S3_PHOTO_REPO_BUCKET.to_string(),
            ddb_image_metadata_table: DEFAULT_DDB_IMAGE_METADATA_TABLE.to_string(),
            ddb_album_metadata_table: DEFAULT_DDB_ALBUM_METADATA_TABLE.to_string(),
            describe_execution_lambda: DEFAULT_DESCRIBE_EXECUTION_LAMBDA.to_string(),
            cognito_identity_pool: DEFAULT_COGNITO_IDENTITY_POOL.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to the deployed-stack defaults. A variable
    /// set to an empty string is a fatal configuration error, reported with
    /// the name of the offending field.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            region: field(ENV_REGION, "Region", DEFAULT_REGION)?,
            s3_photo_repo_bucket: field(
                ENV_S3_PHOTO_REPO_BUCKET,
                "S3PhotoRepoBucket",
                DEFAULT_S3_PHOTO_REPO_BUCKET,
            )?,
            ddb_image_metadata_table: field(
                ENV_DDB_IMAGE_METADATA_TABLE,
                "DDBImageMetadataTable",
                DEFAULT_DDB_IMAGE_METADATA_TABLE,
            )?,
            ddb_album_metadata_table: field(
                ENV_DDB_ALBUM_METADATA_TABLE,
                "DDBAlbumMetadataTable",
                DEFAULT_DDB_ALBUM_METADATA_TABLE,
            )?,
            describe_execution_lambda: field(
                ENV_DESCRIBE_EXECUTION_LAMBDA,
                "DescribeExecutionLambda",
                DEFAULT_DESCRIBE_EXECUTION_LAMBDA,
            )?,
            cognito_identity_pool: field(
                ENV_COGNITO_IDENTITY_POOL,
                "CognitoIdentityPool",
                DEFAULT_COGNITO_IDENTITY_POOL,
            )?,
        };

        tracing::debug!(region = %config.region, "Configuration loaded");
        Ok(config)
    }
}

/// Read one field: env override if set, deployed-stack default otherwise.
fn field(var: &str, name: &'static str, default: &str) -> ConfigResult<String> {
    let value = env::var(var).unwrap_or_else(|_| default.to_string());
    if value.is_empty() {
        return Err(ConfigError::EmptyField { name });
    }
    Ok(value)
}

/// Process-wide configuration accessor.
///
/// The first call loads the configuration; later calls return the same
/// cached value, so the identifiers are stable for the process lifetime.
///
/// # Panics
/// Panics if the first load fails (an empty override); configuration
/// problems are fatal at startup.
pub fn get() -> &'static RuntimeConfig {
    static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();
    CONFIG.get_or_init(|| match RuntimeConfig::from_env() {
        Ok(config) => config,
        Err(e) => panic!("invalid configuration: {e}"),
    })
}
