//! The `[Content_Types].xml` manifest.
//!
//! Maps file extensions (`Default`) and individual part names (`Override`)
//! to content types. Defaults are kept unique by extension: the first
//! registration of an extension wins.

use crate::ooxml::opc::constants::{content_type as ct, namespace};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct DefaultType {
    #[serde(rename = "@Extension")]
    extension: String,
    #[serde(rename = "@ContentType")]
    content_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct OverrideType {
    #[serde(rename = "@PartName")]
    part_name: String,
    #[serde(rename = "@ContentType")]
    content_type: String,
}

/// Builder for `[Content_Types].xml` content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename = "Types")]
pub struct ContentTypes {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,

    #[serde(rename = "Default")]
    defaults: Vec<DefaultType>,

    #[serde(rename = "Override")]
    overrides: Vec<OverrideType>,
}

impl ContentTypes {
    /// Create a manifest with the standard `rels` and `xml` defaults.
    pub fn new() -> Self {
        let mut cti = Self {
            xmlns: namespace::OPC_CONTENT_TYPES,
            defaults: Vec::new(),
            overrides: Vec::new(),
        };
        cti.add_default("rels", ct::OPC_RELATIONSHIPS);
        cti.add_default("xml", ct::XML);
        cti
    }

    /// Register a default content type for an extension.
    ///
    /// Returns `false` (and changes nothing) if the extension is already
    /// registered.
    pub fn add_default(&mut self, extension: &str, content_type: &str) -> bool {
        if self.has_default(extension) {
            return false;
        }
        self.defaults.push(DefaultType {
            extension: extension.to_string(),
            content_type: content_type.to_string(),
        });
        true
    }

    /// Register a content type for one specific part (absolute part name).
    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        if let Some(existing) = self.overrides.iter_mut().find(|o| o.part_name == part_name) {
            existing.content_type = content_type.to_string();
            return;
        }
        self.overrides.push(OverrideType {
            part_name: part_name.to_string(),
            content_type: content_type.to_string(),
        });
    }

    pub fn has_default(&self, extension: &str) -> bool {
        self.defaults
            .iter()
            .any(|d| d.extension.eq_ignore_ascii_case(extension))
    }

    /// Content type registered for an extension, if any.
    pub fn default_for(&self, extension: &str) -> Option<&str> {
        self.defaults
            .iter()
            .find(|d| d.extension.eq_ignore_ascii_case(extension))
            .map(|d| d.content_type.as_str())
    }

    /// Content type override registered for a part, if any.
    pub fn override_for(&self, part_name: &str) -> Option<&str> {
        self.overrides
            .iter()
            .find(|o| o.part_name == part_name)
            .map(|o| o.content_type.as_str())
    }

    pub fn default_count(&self) -> usize {
        self.defaults.len()
    }
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self::new()
    }
}
