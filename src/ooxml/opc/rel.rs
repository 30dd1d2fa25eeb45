/// Relationship-related objects for OPC packages.
///
/// Relationships connect a source (the package itself or a part) to target
/// parts. Each one is identified by an rId that is unique within its source.
use crate::ooxml::opc::constants::{namespace, target_mode};
use serde::{Serialize, Serializer};
use std::fmt;

/// A relationship ID, rendered as `rId<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelId(u32);

impl RelId {
    /// Relationship ID reserved for the first static relationship of a source
    /// (the office document in `_rels/.rels`, styles in `document.xml.rels`).
    pub const RESERVED: RelId = RelId(1);

    #[inline]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rId{}", self.0)
    }
}

impl Serialize for RelId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    #[serde(rename = "@Id")]
    id: RelId,

    /// Relationship type URI
    #[serde(rename = "@Type")]
    reltype: String,

    /// Target reference, relative to the source part
    #[serde(rename = "@Target")]
    target: String,

    /// `External` for targets outside the package; omitted for internal ones
    #[serde(rename = "@TargetMode", skip_serializing_if = "Option::is_none")]
    target_mode: Option<&'static str>,
}

impl Relationship {
    /// Create an internal relationship.
    pub fn new(id: RelId, reltype: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id,
            reltype: reltype.into(),
            target: target.into(),
            target_mode: None,
        }
    }

    /// Create a relationship to a target outside the package.
    pub fn external(id: RelId, reltype: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            target_mode: Some(target_mode::EXTERNAL),
            ..Self::new(id, reltype, target)
        }
    }

    #[inline]
    pub fn id(&self) -> RelId {
        self.id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.target_mode == Some(target_mode::EXTERNAL)
    }
}

/// The `<Relationships>` root of a `.rels` part.
#[derive(Debug, Clone, Serialize)]
#[serde(rename = "Relationships")]
pub struct Relationships {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,

    #[serde(rename = "Relationship")]
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self {
            xmlns: namespace::OPC_RELATIONSHIPS,
            rels: Vec::new(),
        }
    }

    /// Append a relationship, keeping insertion order.
    pub fn push(&mut self, rel: Relationship) {
        self.rels.push(rel);
    }

    pub fn get(&self, id: RelId) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Whether every relationship ID is unique within this source.
    pub fn has_unique_ids(&self) -> bool {
        let mut ids: Vec<RelId> = self.rels.iter().map(|rel| rel.id).collect();
        ids.sort_unstable();
        ids.windows(2).all(|pair| pair[0] != pair[1])
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Relationship> for Relationships {
    fn extend<I: IntoIterator<Item = Relationship>>(&mut self, iter: I) {
        self.rels.extend(iter);
    }
}
