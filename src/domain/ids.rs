//! Typed UUID identifiers for projects, columns and tickets.

use crate::error::{BoardError, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{cmp::Ordering, fmt, hash, marker::PhantomData, str::FromStr};
use uuid::Uuid;

/// Marker naming the entity an [`Id`] was minted for
pub trait IdKind {
    const NAME: &'static str;
}

#[derive(Debug)]
pub enum ProjectKind {}

#[derive(Debug)]
pub enum ColumnKind {}

#[derive(Debug)]
pub enum TicketKind {}

impl IdKind for ProjectKind {
    const NAME: &'static str = "project";
}

impl IdKind for ColumnKind {
    const NAME: &'static str = "column";
}

impl IdKind for TicketKind {
    const NAME: &'static str = "ticket";
}

pub type ProjectId = Id<ProjectKind>;
pub type ColumnId = Id<ColumnKind>;
pub type TicketId = Id<TicketKind>;

/// Opaque identifier wrapping a canonical lowercase UUID.
///
/// The kind parameter keeps identifiers of different entities apart: a
/// `TicketId` and a `ColumnId` cannot be compared even when they hold the
/// same bytes.
pub struct Id<K> {
    uuid: Uuid,
    kind: PhantomData<fn() -> K>,
}

impl<K: IdKind> Id<K> {
    const HYPHENATED_LEN: usize = 36;

    /// Wraps an existing UUID
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            kind: PhantomData,
        }
    }

    /// Parses the hyphenated 8-4-4-4-12 form, ignoring case
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() != Self::HYPHENATED_LEN {
            return Err(Self::invalid(raw));
        }
        // parse_str also accepts simple, braced and urn forms; the length
        // check above leaves only the hyphenated one.
        Uuid::parse_str(raw)
            .map(Self::from_uuid)
            .map_err(|_| Self::invalid(raw))
    }

    /// Parses a possibly absent raw value
    pub fn parse_optional(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(raw) => Self::parse(raw),
            None => Err(Self::invalid("")),
        }
    }

    pub fn kind(&self) -> &'static str {
        K::NAME
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.uuid
    }

    fn invalid(raw: &str) -> BoardError {
        BoardError::InvalidIdentifier {
            kind: K::NAME,
            value: raw.to_string(),
        }
    }
}

impl<K> Clone for Id<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Id<K> {}

impl<K> PartialEq for Id<K> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl<K> Eq for Id<K> {}

impl<K> PartialOrd for Id<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Id<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uuid.cmp(&other.uuid)
    }
}

impl<K> hash::Hash for Id<K> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl<K: IdKind> fmt::Debug for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::NAME, self.uuid.hyphenated())
    }
}

impl<K> fmt::Display for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uuid.hyphenated())
    }
}

impl<K: IdKind> FromStr for Id<K> {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<K> Serialize for Id<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.uuid.hyphenated())
    }
}

impl<'de, K: IdKind> Deserialize<'de> for Id<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

/// Capability that mints fresh identifiers
pub trait IdGenerator: Send + Sync {
    /// Returns a UUID that has never been handed out before
    fn next_uuid(&self) -> Uuid;

    fn mint<K: IdKind>(&self) -> Id<K>
    where
        Self: Sized,
    {
        Id::from_uuid(self.next_uuid())
    }
}

/// Mints random v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}
