//! SDK type bridging
//!
//! Total mappings between the framework's enumerations and the Cognito SDK's
//! typed enumerants, settings document conversion, and classification of SDK
//! failures into the connector error taxonomy.

use std::collections::HashMap;

use aws_sdk_cognitoidentityprovider::error::{
    DisplayErrorContext, ProvideErrorMetadata, SdkError,
};
use aws_sdk_cognitoidentityprovider::types::{
    AssetCategoryType, AssetExtensionType, AssetType, ColorSchemeModeType,
};
use aws_smithy_types::{Blob, Document, Number};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use loginbrand_connector::client::BrandingAsset;
use loginbrand_connector::error::{ConnectorError, ConnectorResult};
use loginbrand_connector::model::ObservedAsset;
use loginbrand_connector::translate::{AssetCategory, AssetExtension, ColorMode};

pub(crate) fn category_to_sdk(category: AssetCategory) -> AssetCategoryType {
    match category {
        AssetCategory::FaviconIco => AssetCategoryType::FaviconIco,
        AssetCategory::FaviconSvg => AssetCategoryType::FaviconSvg,
        AssetCategory::EmailGraphic => AssetCategoryType::EmailGraphic,
        AssetCategory::SmsGraphic => AssetCategoryType::SmsGraphic,
        AssetCategory::AuthAppGraphic => AssetCategoryType::AuthAppGraphic,
        AssetCategory::PasswordGraphic => AssetCategoryType::PasswordGraphic,
        AssetCategory::PasskeyGraphic => AssetCategoryType::PasskeyGraphic,
        AssetCategory::PageHeaderLogo => AssetCategoryType::PageHeaderLogo,
        AssetCategory::PageHeaderBackground => AssetCategoryType::PageHeaderBackground,
        AssetCategory::PageFooterLogo => AssetCategoryType::PageFooterLogo,
        AssetCategory::PageFooterBackground => AssetCategoryType::PageFooterBackground,
        AssetCategory::PageBackground => AssetCategoryType::PageBackground,
        AssetCategory::FormBackground => AssetCategoryType::FormBackground,
        AssetCategory::FormLogo => AssetCategoryType::FormLogo,
        AssetCategory::IdpButtonIcon => AssetCategoryType::IdpButtonIcon,
    }
}

pub(crate) fn color_mode_to_sdk(mode: ColorMode) -> ColorSchemeModeType {
    match mode {
        ColorMode::Light => ColorSchemeModeType::Light,
        ColorMode::Dark => ColorSchemeModeType::Dark,
        ColorMode::Dynamic => ColorSchemeModeType::Dynamic,
    }
}

pub(crate) fn extension_to_sdk(extension: AssetExtension) -> AssetExtensionType {
    match extension {
        AssetExtension::Ico => AssetExtensionType::Ico,
        AssetExtension::Jpeg => AssetExtensionType::Jpeg,
        AssetExtension::Png => AssetExtensionType::Png,
        AssetExtension::Svg => AssetExtensionType::Svg,
        AssetExtension::Webp => AssetExtensionType::Webp,
    }
}

/// Build the SDK asset tuple from a translated asset, decoding the base64
/// payload into the raw blob the service expects.
pub(crate) fn asset_to_sdk(asset: &BrandingAsset) -> ConnectorResult<AssetType> {
    let payload = STANDARD.decode(&asset.bytes).map_err(|err| {
        ConnectorError::invalid_configuration(format!(
            "{} asset bytes are not valid base64: {err}",
            asset.category
        ))
    })?;
    AssetType::builder()
        .category(category_to_sdk(asset.category))
        .color_mode(color_mode_to_sdk(asset.color_mode))
        .extension(extension_to_sdk(asset.extension))
        .bytes(Blob::new(payload))
        .build()
        .map_err(|err| {
            ConnectorError::invalid_configuration(format!("asset rejected by request builder: {err}"))
        })
}

/// Re-encode the byte payload of a returned asset. Assets are binary image
/// data; base64 keeps them intact in string-typed observed state.
pub(crate) fn observed_asset_from_sdk(asset: &AssetType) -> ObservedAsset {
    ObservedAsset {
        bytes: asset
            .bytes()
            .map(|blob| STANDARD.encode(blob.as_ref()))
            .unwrap_or_default(),
    }
}

/// Convert a parsed settings document into the SDK's generic document type.
pub(crate) fn document_from_json(value: &Value) -> Document {
    match value {
        Value::Null => Document::Null,
        Value::Bool(flag) => Document::Bool(*flag),
        Value::Number(number) => {
            if let Some(unsigned) = number.as_u64() {
                Document::Number(Number::PosInt(unsigned))
            } else if let Some(signed) = number.as_i64() {
                Document::Number(Number::NegInt(signed))
            } else {
                number
                    .as_f64()
                    .map_or(Document::Null, |float| Document::Number(Number::Float(float)))
            }
        }
        Value::String(text) => Document::String(text.clone()),
        Value::Array(items) => Document::Array(items.iter().map(document_from_json).collect()),
        Value::Object(entries) => Document::Object(
            entries
                .iter()
                .map(|(key, entry)| (key.clone(), document_from_json(entry)))
                .collect::<HashMap<_, _>>(),
        ),
    }
}

/// Convert an SDK document back into a JSON value.
pub(crate) fn document_to_json(document: &Document) -> Value {
    match document {
        Document::Null => Value::Null,
        Document::Bool(flag) => Value::Bool(*flag),
        Document::Number(Number::PosInt(unsigned)) => Value::from(*unsigned),
        Document::Number(Number::NegInt(signed)) => Value::from(*signed),
        Document::Number(Number::Float(float)) => {
            serde_json::Number::from_f64(*float).map_or(Value::Null, Value::Number)
        }
        Document::String(text) => Value::String(text.clone()),
        Document::Array(items) => Value::Array(items.iter().map(document_to_json).collect()),
        Document::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, entry)| (key.clone(), document_to_json(entry)))
                .collect(),
        ),
    }
}

/// Classify an SDK failure into the connector taxonomy.
pub(crate) fn classify_remote_error<E>(operation: &'static str, err: SdkError<E>) -> ConnectorError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let code = err.code().map(str::to_owned);
    let message = match err.message() {
        Some(message) => message.to_owned(),
        None => DisplayErrorContext(&err).to_string(),
    };
    match classify_error_code(operation, code.as_deref(), message) {
        ConnectorError::Remote { message, .. } => ConnectorError::remote_with_source(message, err),
        classified => classified,
    }
}

/// Code-level classification, split out so it can be exercised without
/// constructing SDK transport errors.
pub(crate) fn classify_error_code(
    operation: &'static str,
    code: Option<&str>,
    message: String,
) -> ConnectorError {
    match code {
        Some("ResourceNotFoundException") => ConnectorError::not_found(message),
        Some("NotAuthorizedException") | Some("AccessDeniedException") => {
            ConnectorError::auth(message)
        }
        Some("TooManyRequestsException") | Some("LimitExceededException") => {
            ConnectorError::throttled(message)
        }
        _ => ConnectorError::remote(format!("{operation} failed: {message}")),
    }
}
