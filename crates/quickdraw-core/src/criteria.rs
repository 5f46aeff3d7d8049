//! Compound equality filters over drawing records.

use crate::record::DrawingRecord;

/// Search criteria: every present field must match; absent fields
/// impose no constraint.
///
/// An empty criteria set matches every record.
///
/// # Examples
///
/// ```
/// use quickdraw_core::SearchCriteria;
///
/// let criteria = SearchCriteria::new().recognized(true).country_code("US");
/// assert!(!criteria.is_empty());
/// assert!(SearchCriteria::default().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Required `key_id`, if any.
    pub key_id: Option<u64>,
    /// Required recognized flag, if any.
    pub recognized: Option<bool>,
    /// Required country code, if any.
    pub country_code: Option<String>,
    /// Required timestamp, if any.
    pub timestamp: Option<u32>,
}

impl SearchCriteria {
    /// Criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the given `key_id`.
    pub fn key_id(mut self, key_id: u64) -> Self {
        self.key_id = Some(key_id);
        self
    }

    /// Require the given recognized flag.
    pub fn recognized(mut self, recognized: bool) -> Self {
        self.recognized = Some(recognized);
        self
    }

    /// Require the given country code.
    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    /// Require the given timestamp.
    pub fn timestamp(mut self, timestamp: u32) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Whether no field is constrained.
    pub fn is_empty(&self) -> bool {
        self.key_id.is_none()
            && self.recognized.is_none()
            && self.country_code.is_none()
            && self.timestamp.is_none()
    }

    /// Whether `record` satisfies every present constraint.
    pub fn matches(&self, record: &DrawingRecord) -> bool {
        self.key_id.is_none_or(|k| k == record.key_id)
            && self.recognized.is_none_or(|r| r == record.recognized)
            && self
                .country_code
                .as_deref()
                .is_none_or(|c| record.country_code.matches(c))
            && self.timestamp.is_none_or(|t| t == record.timestamp)
    }
}
