//! HTTP-level tests for the Cognito branding client against a mocked
//! Cognito endpoint.

#![cfg(feature = "integration")]

use aws_sdk_cognitoidentityprovider::config::retry::RetryConfig;
use aws_sdk_cognitoidentityprovider::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_cognitoidentityprovider::{Client, Config};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use loginbrand_connector::client::{
    BrandingAsset, BrandingClient, CreateBrandingRequest, UpdateBrandingRequest,
};
use loginbrand_connector::translate::{AssetCategory, AssetExtension, ColorMode};
use loginbrand_connector_cognito::CognitoBrandingClient;

/// Base64 of `ABCDEFGH`; asset bytes stay base64-encoded both in the host
/// model and on the wire.
const ASSET_BYTES_B64: &str = "QUJDREVGR0g=";

fn client_for(server: &MockServer) -> CognitoBrandingClient {
    let config = Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("test", "test", None, None, "static"))
        .endpoint_url(server.uri())
        .retry_config(RetryConfig::disabled())
        .build();
    CognitoBrandingClient::from_client(Client::from_conf(config))
}

fn target(operation: &str) -> String {
    format!("AWSCognitoIdentityProviderService.{operation}")
}

fn page_background_asset() -> BrandingAsset {
    BrandingAsset {
        category: AssetCategory::PageBackground,
        color_mode: ColorMode::Light,
        extension: AssetExtension::Png,
        bytes: ASSET_BYTES_B64.to_string(),
    }
}

#[tokio::test]
async fn create_transmits_translated_request_and_decodes_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", target("CreateManagedLoginBranding").as_str()))
        .and(body_partial_json(json!({
            "UserPoolId": "abc",
            "ClientId": "abc",
            "UseCognitoProvidedValues": true,
            "Assets": [{
                "Category": "PAGE_BACKGROUND",
                "ColorMode": "LIGHT",
                "Extension": "PNG",
                "Bytes": ASSET_BYTES_B64
            }]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                json!({
                    "ManagedLoginBranding": {
                        "ManagedLoginBrandingId": "mlb-123",
                        "UserPoolId": "abc",
                        "UseCognitoProvidedValues": true,
                        "Assets": [{
                            "Category": "PAGE_BACKGROUND",
                            "ColorMode": "LIGHT",
                            "Extension": "PNG",
                            "Bytes": ASSET_BYTES_B64
                        }]
                    }
                })
                .to_string(),
                "application/x-amz-json-1.1",
            ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .create_branding(&CreateBrandingRequest {
            user_pool_id: "abc".to_string(),
            client_id: "abc".to_string(),
            use_provider_defaults: true,
            settings: None,
            assets: vec![page_background_asset()],
        })
        .await
        .unwrap();

    assert_eq!(created.id, "mlb-123");
    assert_eq!(created.assets.len(), 1);
    assert_eq!(created.assets[0].bytes, ASSET_BYTES_B64);
}

#[tokio::test]
async fn create_with_explicit_empty_settings_sends_the_document() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", target("CreateManagedLoginBranding").as_str()))
        .and(body_partial_json(json!({
            "UseCognitoProvidedValues": false,
            "Settings": {}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                json!({
                    "ManagedLoginBranding": {
                        "ManagedLoginBrandingId": "mlb-456",
                        "UserPoolId": "abc",
                        "UseCognitoProvidedValues": false,
                        "Settings": {}
                    }
                })
                .to_string(),
                "application/x-amz-json-1.1",
            ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .create_branding(&CreateBrandingRequest {
            user_pool_id: "abc".to_string(),
            client_id: "abc".to_string(),
            use_provider_defaults: false,
            settings: Some(json!({})),
            assets: vec![],
        })
        .await
        .unwrap();

    assert_eq!(created.id, "mlb-456");
}

#[tokio::test]
async fn describe_decodes_the_full_description() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", target("DescribeManagedLoginBranding").as_str()))
        .and(body_partial_json(json!({
            "UserPoolId": "abc",
            "ManagedLoginBrandingId": "mlb-123"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                json!({
                    "ManagedLoginBranding": {
                        "ManagedLoginBrandingId": "mlb-123",
                        "UserPoolId": "abc",
                        "UseCognitoProvidedValues": false,
                        "Settings": {"components": {"pageBackground": {"enabled": true}}},
                        "Assets": [{
                            "Category": "PAGE_BACKGROUND",
                            "ColorMode": "LIGHT",
                            "Extension": "PNG",
                            "Bytes": ASSET_BYTES_B64
                        }]
                    }
                })
                .to_string(),
                "application/x-amz-json-1.1",
            ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let description = client.describe_branding("abc", "mlb-123").await.unwrap();

    assert_eq!(description.id, "mlb-123");
    assert_eq!(description.user_pool_id, "abc");
    assert!(!description.use_provider_defaults);
    assert_eq!(
        description.settings,
        Some(json!({"components": {"pageBackground": {"enabled": true}}}))
    );
    assert_eq!(description.assets.len(), 1);
    assert_eq!(description.assets[0].bytes, ASSET_BYTES_B64);
}

#[tokio::test]
async fn update_is_keyed_by_branding_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", target("UpdateManagedLoginBranding").as_str()))
        .and(body_partial_json(json!({
            "UserPoolId": "abc",
            "ManagedLoginBrandingId": "mlb-123",
            "UseCognitoProvidedValues": false,
            "Settings": {}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(json!({}).to_string(), "application/x-amz-json-1.1"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .update_branding(&UpdateBrandingRequest {
            branding_id: "mlb-123".to_string(),
            user_pool_id: "abc".to_string(),
            use_provider_defaults: false,
            settings: Some(json!({})),
            assets: vec![],
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_succeeds_on_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", target("DeleteManagedLoginBranding").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(json!({}).to_string(), "application/x-amz-json-1.1"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_branding("abc", "mlb-123").await.unwrap();
}

#[tokio::test]
async fn resource_not_found_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", target("DescribeManagedLoginBranding").as_str()))
        .respond_with(
            ResponseTemplate::new(400).set_body_raw(
                json!({
                    "__type": "ResourceNotFoundException",
                    "message": "Managed login branding style not found."
                })
                .to_string(),
                "application/x-amz-json-1.1",
            ),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.describe_branding("abc", "mlb-gone").await.unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn not_authorized_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", target("CreateManagedLoginBranding").as_str()))
        .respond_with(
            ResponseTemplate::new(400).set_body_raw(
                json!({
                    "__type": "NotAuthorizedException",
                    "message": "Access denied."
                })
                .to_string(),
                "application/x-amz-json-1.1",
            ),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .create_branding(&CreateBrandingRequest {
            user_pool_id: "abc".to_string(),
            client_id: "abc".to_string(),
            use_provider_defaults: true,
            settings: None,
            assets: vec![],
        })
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "AUTH_FAILED");
}

#[tokio::test]
async fn throttling_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", target("DeleteManagedLoginBranding").as_str()))
        .respond_with(
            ResponseTemplate::new(400).set_body_raw(
                json!({
                    "__type": "TooManyRequestsException",
                    "message": "Rate exceeded."
                })
                .to_string(),
                "application/x-amz-json-1.1",
            ),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.delete_branding("abc", "mlb-123").await.unwrap_err();
    assert_eq!(err.error_code(), "THROTTLED");
    assert!(err.is_transient());
}
