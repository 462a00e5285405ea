// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use super::StoreError;

/// Addresses a collection (odd number of segments) or a document (even number of segments).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    segments: Vec<String>,
}

impl DocumentPath {
    /// A top-level collection.
    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// The document `id` inside this collection.
    pub fn doc(&self, id: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(id.into());
        Self { segments }
    }

    /// The subcollection `name` of this document.
    pub fn subcollection(&self, name: impl Into<String>) -> Self {
        self.doc(name)
    }

    pub fn is_collection(&self) -> bool {
        self.segments.len() % 2 == 1
    }

    /// The last segment, i.e. the document identifier for document paths.
    pub fn id(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// The collection containing this document or the document containing this subcollection.
    pub fn parent(&self) -> Option<DocumentPath> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    pub fn starts_with(&self, other: &DocumentPath) -> bool {
        self.segments.starts_with(&other.segments)
    }

    pub(super) fn ensure_collection(&self) -> Result<(), StoreError> {
        if !self.is_collection() || !self.is_well_formed() {
            return Err(StoreError::InvalidPath {
                path: self.to_string(),
            });
        }
        Ok(())
    }

    pub(super) fn ensure_document(&self) -> Result<(), StoreError> {
        if self.is_collection() || !self.is_well_formed() {
            return Err(StoreError::InvalidPath {
                path: self.to_string(),
            });
        }
        Ok(())
    }

    fn is_well_formed(&self) -> bool {
        self.segments
            .iter()
            .all(|s| !s.is_empty() && !s.contains('/'))
    }
}

impl Display for DocumentPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
