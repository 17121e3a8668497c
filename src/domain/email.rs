use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Normalized (trimmed, lowercase) email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    const MAX_LEN: usize = 254;
    const MAX_LOCAL_LEN: usize = 64;
    const MAX_LABEL_LEN: usize = 63;
    const LOCAL_SPECIALS: &'static str = ".!#$%&'*+/=?^_`{|}~-";

    /// Validates and normalizes a raw address
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(BoardError::InvalidEmail(raw.to_string()));
        }
        if !Self::is_valid(&normalized) {
            return Err(BoardError::InvalidEmail(normalized));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(email: &str) -> bool {
        if email.len() > Self::MAX_LEN
            || email.contains("..")
            || email.starts_with('.')
            || email.ends_with('.')
            || email.contains("@.")
            || email.contains(".@")
        {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if domain.contains('@') {
            return false;
        }

        Self::is_valid_local(local) && Self::is_valid_domain(domain)
    }

    fn is_valid_local(local: &str) -> bool {
        !local.is_empty()
            && local.len() <= Self::MAX_LOCAL_LEN
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || Self::LOCAL_SPECIALS.contains(c))
    }

    fn is_valid_domain(domain: &str) -> bool {
        if !domain.contains('.') {
            return false;
        }
        domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= Self::MAX_LABEL_LEN
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
    }
}

impl FromStr for Email {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
