//! Common ID Types
//!
//! Type-safe ID wrappers for stored records.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    pub fn into_uuid(self) -> Uuid {
        self.value
    }

    /// Parse an opaque id from a path segment or token subject
    ///
    /// Returns `None` for anything that is not a UUID; callers treat that
    /// exactly like an id that does not exist.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::from_str(raw.trim()).ok().map(Self::from_uuid)
    }
}

// Manual impls so the marker type does not need to implement these traits.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different record IDs
pub mod markers {
    pub struct User;
    pub struct Transaction;
    pub struct Milestone;
    pub struct Analysis;
}

pub type UserId = Id<markers::User>;
pub type TransactionId = Id<markers::Transaction>;
pub type MilestoneId = Id<markers::Milestone>;
pub type AnalysisId = Id<markers::Analysis>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: TransactionId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_new_ids_are_v4_and_distinct() {
        let a = MilestoneId::new();
        let b = MilestoneId::new();
        assert_ne!(a, b);
        assert_eq!(a.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_parse() {
        let uuid = Uuid::new_v4();
        let parsed = AnalysisId::parse(&uuid.to_string()).unwrap();
        assert_eq!(parsed.into_uuid(), uuid);

        assert!(AnalysisId::parse("64f1c0ffee").is_none());
        assert!(AnalysisId::parse("").is_none());
    }
}
