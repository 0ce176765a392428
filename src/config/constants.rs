//! Application-wide constants
//!
//! Centralized location for the deployed-stack resource identifiers and
//! the environment variables that override them.

// =============================================================================
// Deployed-stack defaults
// =============================================================================

/// Default AWS region the backend stack was launched in
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default S3 bucket holding uploaded photos
pub const DEFAULT_S3_PHOTO_REPO_BUCKET: &str =
    "photo-sharing-backend-photorepos3bucket-1ehh0cpiwmfo9";

/// Default DynamoDB table for per-image metadata records
pub const DEFAULT_DDB_IMAGE_METADATA_TABLE: &str =
    "photo-sharing-backend-ImageMetadataDDBTable-OERXYHZGFL7Q";

/// Default DynamoDB table for album metadata records
pub const DEFAULT_DDB_ALBUM_METADATA_TABLE: &str =
    "photo-sharing-backend-AlbumMetadataDDBTable-D5MEYA5RCNWP";

/// Default Lambda function polled for execution status
pub const DEFAULT_DESCRIBE_EXECUTION_LAMBDA: &str =
    "photo-sharing-backend-DescribeExecutionFunction-XG08R342B4XI";

/// Default Cognito identity pool used for auth federation
pub const DEFAULT_COGNITO_IDENTITY_POOL: &str =
    "us-east-1:ab36615a-7dd4-4740-8c8f-05f8bef9fcd8";

// =============================================================================
// Environment variable overrides
// =============================================================================

/// Overrides the AWS region
pub const ENV_REGION: &str = "PHOTOSHARE_REGION";

/// Overrides the S3 photo bucket name
pub const ENV_S3_PHOTO_REPO_BUCKET: &str = "PHOTOSHARE_S3_PHOTO_REPO_BUCKET";

/// Overrides the image metadata table name
pub const ENV_DDB_IMAGE_METADATA_TABLE: &str = "PHOTOSHARE_DDB_IMAGE_METADATA_TABLE";

/// Overrides the album metadata table name
pub const ENV_DDB_ALBUM_METADATA_TABLE: &str = "PHOTOSHARE_DDB_ALBUM_METADATA_TABLE";

/// Overrides the describe-execution Lambda name
pub const ENV_DESCRIBE_EXECUTION_LAMBDA: &str = "PHOTOSHARE_DESCRIBE_EXECUTION_LAMBDA";

/// Overrides the Cognito identity pool id
pub const ENV_COGNITO_IDENTITY_POOL: &str = "PHOTOSHARE_COGNITO_IDENTITY_POOL";
