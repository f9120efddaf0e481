//! Branding enumeration tables
//!
//! String enumerations for asset categories, color modes, and extensions,
//! matching the remote identity service's typed enumerants. Parsing is
//! strict: an unrecognized string yields [`ConnectorError::UnknownVariant`]
//! rather than silently defaulting, so invalid configurations are rejected
//! before any remote call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConnectorError;

/// Extension transmitted for every asset.
///
/// The asset extension is a fixed protocol constant, not a user-supplied
/// field; the remote service receives `PNG` regardless of asset content.
pub const DEFAULT_ASSET_EXTENSION: AssetExtension = AssetExtension::Png;

/// Category of a visual asset on the hosted login surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCategory {
    FaviconIco,
    FaviconSvg,
    EmailGraphic,
    SmsGraphic,
    AuthAppGraphic,
    PasswordGraphic,
    PasskeyGraphic,
    PageHeaderLogo,
    PageHeaderBackground,
    PageFooterLogo,
    PageFooterBackground,
    PageBackground,
    FormBackground,
    FormLogo,
    IdpButtonIcon,
}

impl AssetCategory {
    /// Get all known categories.
    #[must_use]
    pub fn all() -> &'static [AssetCategory] {
        &[
            AssetCategory::FaviconIco,
            AssetCategory::FaviconSvg,
            AssetCategory::EmailGraphic,
            AssetCategory::SmsGraphic,
            AssetCategory::AuthAppGraphic,
            AssetCategory::PasswordGraphic,
            AssetCategory::PasskeyGraphic,
            AssetCategory::PageHeaderLogo,
            AssetCategory::PageHeaderBackground,
            AssetCategory::PageFooterLogo,
            AssetCategory::PageFooterBackground,
            AssetCategory::PageBackground,
            AssetCategory::FormBackground,
            AssetCategory::FormLogo,
            AssetCategory::IdpButtonIcon,
        ]
    }

    /// Get the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::FaviconIco => "FAVICON_ICO",
            AssetCategory::FaviconSvg => "FAVICON_SVG",
            AssetCategory::EmailGraphic => "EMAIL_GRAPHIC",
            AssetCategory::SmsGraphic => "SMS_GRAPHIC",
            AssetCategory::AuthAppGraphic => "AUTH_APP_GRAPHIC",
            AssetCategory::PasswordGraphic => "PASSWORD_GRAPHIC",
            AssetCategory::PasskeyGraphic => "PASSKEY_GRAPHIC",
            AssetCategory::PageHeaderLogo => "PAGE_HEADER_LOGO",
            AssetCategory::PageHeaderBackground => "PAGE_HEADER_BACKGROUND",
            AssetCategory::PageFooterLogo => "PAGE_FOOTER_LOGO",
            AssetCategory::PageFooterBackground => "PAGE_FOOTER_BACKGROUND",
            AssetCategory::PageBackground => "PAGE_BACKGROUND",
            AssetCategory::FormBackground => "FORM_BACKGROUND",
            AssetCategory::FormLogo => "FORM_LOGO",
            AssetCategory::IdpButtonIcon => "IDP_BUTTON_ICON",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetCategory {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetCategory::all()
            .iter()
            .find(|category| category.as_str() == s)
            .copied()
            .ok_or_else(|| ConnectorError::UnknownVariant {
                field: "category",
                value: s.to_string(),
            })
    }
}

/// Color scheme mode an asset applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorMode {
    Light,
    Dark,
    Dynamic,
}

impl ColorMode {
    /// Get all known color modes.
    #[must_use]
    pub fn all() -> &'static [ColorMode] {
        &[ColorMode::Light, ColorMode::Dark, ColorMode::Dynamic]
    }

    /// Get the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "LIGHT",
            ColorMode::Dark => "DARK",
            ColorMode::Dynamic => "DYNAMIC",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIGHT" => Ok(ColorMode::Light),
            "DARK" => Ok(ColorMode::Dark),
            "DYNAMIC" => Ok(ColorMode::Dynamic),
            _ => Err(ConnectorError::UnknownVariant {
                field: "color_mode",
                value: s.to_string(),
            }),
        }
    }
}

/// File format of a transmitted asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetExtension {
    Ico,
    Jpeg,
    Png,
    Svg,
    Webp,
}

impl AssetExtension {
    /// Get all known extensions.
    #[must_use]
    pub fn all() -> &'static [AssetExtension] {
        &[
            AssetExtension::Ico,
            AssetExtension::Jpeg,
            AssetExtension::Png,
            AssetExtension::Svg,
            AssetExtension::Webp,
        ]
    }

    /// Get the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetExtension::Ico => "ICO",
            AssetExtension::Jpeg => "JPEG",
            AssetExtension::Png => "PNG",
            AssetExtension::Svg => "SVG",
            AssetExtension::Webp => "WEBP",
        }
    }
}

impl fmt::Display for AssetExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetExtension {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetExtension::all()
            .iter()
            .find(|extension| extension.as_str() == s)
            .copied()
            .ok_or_else(|| ConnectorError::UnknownVariant {
                field: "extension",
                value: s.to_string(),
            })
    }
}
