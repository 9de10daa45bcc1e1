// SPDX-License-Identifier: MPL-2.0
//! Client-side checks run before any network call.
//!
//! A failed check never reaches the transport and never touches local state.

use crate::domain::{EntityId, MissingId, NewProduct, NewUser, ProductPatch, UserPatch};
use thiserror::Error;
use url::Url;

/// A pre-flight validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("identifier is missing")]
    MissingId,
    /// Holds the i18n key naming the field.
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
    #[error("`{0}` is not a valid URL")]
    InvalidUrl(String),
    #[error("price must be a finite, non-negative number")]
    InvalidPrice,
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::MissingId => "validation-missing-id",
            ValidationError::MissingField(_) => "validation-missing-field",
            ValidationError::InvalidEmail(_) => "validation-invalid-email",
            ValidationError::InvalidUrl(_) => "validation-invalid-url",
            ValidationError::InvalidPrice => "validation-invalid-price",
        }
    }

    /// Returns the i18n key of the offending field, when there is one.
    #[must_use]
    pub fn field_key(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField(field) => Some(*field),
            _ => None,
        }
    }
}

impl From<MissingId> for ValidationError {
    fn from(_: MissingId) -> Self {
        ValidationError::MissingId
    }
}

/// Types that can be checked before being sent.
pub trait Validate {
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Parses a raw identifier, failing fast when it is empty.
///
/// # Errors
///
/// Returns [`ValidationError::MissingId`] for empty or blank input.
pub fn require_id(raw: &str) -> Result<EntityId, ValidationError> {
    Ok(EntityId::parse(raw)?)
}

/// Checks that a required text field is filled in.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] for empty or blank input.
pub fn require_field(field_key: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field_key));
    }
    Ok(())
}

/// Checks the shape `local@domain.tld`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEmail`] when the shape does not match.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let invalid = || ValidationError::InvalidEmail(value.to_owned());

    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if host.is_empty() || tld.is_empty() || host.starts_with('.') || host.ends_with('.') {
        return Err(invalid());
    }
    Ok(())
}

/// Checks that `value` is an absolute http(s) URL.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidUrl`] otherwise.
pub fn validate_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ValidationError::InvalidUrl(value.to_owned())),
    }
}

/// Checks that a price is finite and not negative.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPrice`] otherwise.
pub fn validate_price(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidPrice)
    }
}

/// Blank optional fields are kept at their prior value on merge, so only
/// non-blank ones are checked.
fn filled(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

impl Validate for UserPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(email) = filled(self.email.as_ref()) {
            validate_email(email)?;
        }
        Ok(())
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), ValidationError> {
        require_field("field-full-name", &self.full_name)?;
        require_field("field-email", &self.email)?;
        validate_email(&self.email)?;
        require_field("field-password", &self.password)
    }
}

impl Validate for ProductPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(url) = filled(self.image_url.as_ref()) {
            validate_url(url)?;
        }
        Ok(())
    }
}

impl Validate for NewProduct {
    fn validate(&self) -> Result<(), ValidationError> {
        require_field("field-name", &self.name)?;
        validate_price(self.price)?;
        if !self.image_url.trim().is_empty() {
            validate_url(&self.image_url)?;
        }
        Ok(())
    }
}
