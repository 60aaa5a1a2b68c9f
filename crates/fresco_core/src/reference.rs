use crate::FileLocation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque download token issued by the server for one file.
///
/// The bytes carry no client-side structure and expire at the server's
/// discretion. A reference is only ever compared for equality or handed
/// back verbatim with a download request.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct FileReference(Vec<u8>);

impl FileReference {
    /// Wraps raw token bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrows the token bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the token, yielding its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of token bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the server issued a zero-length token.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for FileReference {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for FileReference {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Debug for FileReference {
    /// Renders the token as hex rather than a raw byte list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileReference(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// Batch of fresh references keyed by the file they belong to.
///
/// Produced by scanning one API response. Later inserts for the same
/// location replace earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdatedReferences(BTreeMap<FileLocation, FileReference>);

impl UpdatedReferences {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reference for a location, replacing any earlier entry.
    pub fn insert(&mut self, location: FileLocation, reference: FileReference) {
        self.0.insert(location, reference);
    }

    /// Looks up the reference recorded for a location.
    pub fn get(&self, location: &FileLocation) -> Option<&FileReference> {
        self.0.get(location)
    }

    /// True when the batch holds a reference for the location.
    pub fn contains(&self, location: &FileLocation) -> bool {
        self.0.contains_key(location)
    }

    /// Number of locations in the batch.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the scan found nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the batch in location order.
    pub fn iter(&self) -> impl Iterator<Item = (&FileLocation, &FileReference)> {
        self.0.iter()
    }
}

impl FromIterator<(FileLocation, FileReference)> for UpdatedReferences {
    fn from_iter<I: IntoIterator<Item = (FileLocation, FileReference)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(FileLocation, FileReference)> for UpdatedReferences {
    fn extend<I: IntoIterator<Item = (FileLocation, FileReference)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for UpdatedReferences {
    type Item = (FileLocation, FileReference);
    type IntoIter = std::collections::btree_map::IntoIter<FileLocation, FileReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a UpdatedReferences {
    type Item = (&'a FileLocation, &'a FileReference);
    type IntoIter = std::collections::btree_map::Iter<'a, FileLocation, FileReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
