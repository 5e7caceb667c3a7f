//! Shared data types for one processing run.

use crate::email::configured_domain;
use crate::error::VnUserResult;
use serde::{Deserialize, Serialize};

/// Outcome of converting one source name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameResult {
    /// Raw cell text the result was derived from.
    pub original_name: String,
    /// Username before conflict resolution; empty when the name was unusable.
    pub base_username: String,
    /// `base_username` with its occurrence suffix, if any.
    pub final_username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UsernameResult {
    /// Whether the source name produced a username.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.final_username.is_empty()
    }

    /// Whether a numeric suffix was appended to resolve a duplicate.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.final_username != self.base_username
    }
}

/// Options for the name-list entry points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub include_emails: bool,
}

impl ProcessingOptions {
    /// Options that compose emails for `domain`.
    #[must_use]
    pub fn with_emails(domain: &str) -> Self {
        ProcessingOptions {
            domain: Some(domain.to_string()),
            include_emails: true,
        }
    }

    /// Domain to compose emails with, if emails are requested and a domain is set.
    #[must_use]
    pub fn email_domain(&self) -> Option<&str> {
        if self.include_emails {
            configured_domain(self.domain.as_deref())
        } else {
            None
        }
    }
}

/// Where the names live and what to generate for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub sheet_name: String,
    /// Zero-based index of the name column.
    pub column_index: usize,
    #[serde(default = "default_has_header")]
    pub has_header: bool,
    /// Email domain; a non-blank value adds an email column.
    #[serde(default)]
    pub domain: Option<String>,
}

fn default_has_header() -> bool {
    true
}

impl ProcessingConfig {
    #[must_use]
    pub fn new(sheet_name: &str, column_index: usize) -> Self {
        ProcessingConfig {
            sheet_name: sheet_name.to_string(),
            column_index,
            has_header: true,
            domain: None,
        }
    }

    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain = Some(domain.to_string());
        self
    }

    /// Load a configuration from JSON.
    pub fn from_json_str(json: &str) -> VnUserResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The trimmed domain when email generation is configured.
    #[must_use]
    pub fn email_domain(&self) -> Option<&str> {
        configured_domain(self.domain.as_deref())
    }

    /// Options equivalent to this configuration for the name-list entry points.
    #[must_use]
    pub fn options(&self) -> ProcessingOptions {
        ProcessingOptions {
            domain: self.domain.clone(),
            include_emails: self.email_domain().is_some(),
        }
    }

    /// Index of the first data row.
    #[must_use]
    pub fn first_data_row(&self) -> usize {
        usize::from(self.has_header)
    }
}
