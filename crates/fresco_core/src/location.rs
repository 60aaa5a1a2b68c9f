use crate::{DocumentId, PhotoId};
use serde::{Deserialize, Serialize};

/// Identity of a downloadable file, independent of any download token.
///
/// Documents and photos live in separate id spaces, so a document and a
/// photo sharing a numeric id are still different locations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
pub enum FileLocation {
    /// A document (file, sticker, gif, audio).
    #[display("document:{}", _0)]
    Document(DocumentId),
    /// A photo.
    #[display("photo:{}", _0)]
    Photo(PhotoId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_and_photo_spaces_are_disjoint() {
        let document = FileLocation::Document(DocumentId(42));
        let photo = FileLocation::Photo(PhotoId(42));
        assert_ne!(document, photo);
    }

    #[test]
    fn test_display_names_the_space() {
        assert_eq!(
            FileLocation::Document(DocumentId(7)).to_string(),
            "document:7"
        );
        assert_eq!(FileLocation::Photo(PhotoId(7)).to_string(), "photo:7");
    }
}
