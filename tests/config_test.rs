//! Configuration contract tests.

use photoshare_config::{ConfigError, RuntimeConfig};

/// The serialized shape must expose exactly the six field names the web
/// client consumes.
#[test]
fn test_serialized_shape_matches_client_contract() {
    let config = RuntimeConfig::default();
    let value = serde_json::to_value(&config).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 6);
    for key in [
        "Region",
        "S3PhotoRepoBucket",
        "DDBImageMetadataTable",
        "DDBAlbumMetadataTable",
        "DescribeExecutionLambda",
        "CognitoIdentityPool",
    ] {
        assert!(object.contains_key(key), "missing field {key}");
    }
}

#[test]
fn test_deserializes_client_shape() {
    let json = r#"{
        "Region": "eu-west-1",
        "S3PhotoRepoBucket": "bucket",
        "DDBImageMetadataTable": "images",
        "DDBAlbumMetadataTable": "albums",
        "DescribeExecutionLambda": "describe",
        "CognitoIdentityPool": "eu-west-1:pool"
    }"#;

    let config: RuntimeConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.region, "eu-west-1");
    assert_eq!(config.ddb_album_metadata_table, "albums");
}

/// Env overrides and the empty-value check share one test because the
/// process environment is global state.
#[test]
fn test_env_overrides_and_empty_rejection() {
    std::env::set_var("PHOTOSHARE_REGION", "eu-central-1");
    let config = RuntimeConfig::from_env().unwrap();
    assert_eq!(config.region, "eu-central-1");
    // Fields without overrides keep the deployed-stack defaults.
    assert_eq!(
        config.s3_photo_repo_bucket,
        "photo-sharing-backend-photorepos3bucket-1ehh0cpiwmfo9"
    );

    std::env::set_var("PHOTOSHARE_REGION", "");
    let err = RuntimeConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField { name: "Region" }));

    std::env::remove_var("PHOTOSHARE_REGION");
    let config = RuntimeConfig::from_env().unwrap();
    assert_eq!(config, RuntimeConfig::default());
}
