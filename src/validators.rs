/// Input validation utilities.
///
/// Request DTOs build a field -> messages map with `FieldErrors` so the API
/// can answer 422 with per-field human-readable detail.
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use validator::ValidateEmail;

use crate::error::AppError;

/// 11-digit Bangladeshi mobile numbers: 01 followed by operator digit 3-9.
pub static BD_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(01)[3-9][0-9]{8}$").expect("phone pattern must compile"));

pub const PHONE_FORMAT_MESSAGE: &str =
    "The phone number format is invalid. Must be a valid Bangladeshi phone number (01XXXXXXXXX).";

/// Validates email format according to RFC 5322.
pub fn validate_email(email: &str) -> bool {
    email.validate_email()
}

pub fn validate_bd_phone(phone: &str) -> bool {
    BD_PHONE_RE.is_match(phone)
}

/// Accumulated validation failures, keyed by request field name.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages_for(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Ok when empty, otherwise a `Validation` error carrying the map.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

pub fn required_message(field: &str) -> String {
    format!("The {} field is required.", field)
}

pub fn max_length_message(field: &str, max: usize) -> String {
    format!("The {} may not be greater than {} characters.", field, max)
}

pub fn greater_than_message(field: &str, bound: &str) -> String {
    format!("The {} must be greater than {}.", field, bound)
}

pub fn min_value_message(field: &str, bound: &str) -> String {
    format!("The {} must be greater than or equal to {}.", field, bound)
}
