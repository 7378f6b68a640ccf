use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        validate_phone(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_phone(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

pub fn validate_phone(raw: &str) -> Result<PhoneNumber, CoreError> {
    if !looks_like_phone(raw) {
        return Err(CoreError::InvalidPhone(raw.to_string()));
    }
    Ok(PhoneNumber(raw.to_string()))
}

/// Exactly ten ASCII digits, nothing else. No trimming is applied.
pub fn looks_like_phone(token: &str) -> bool {
    token.len() == PHONE_DIGITS && token.bytes().all(|b| b.is_ascii_digit())
}
