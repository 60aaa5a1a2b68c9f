//! Decoded response models for origin replays.
//!
//! These models are the shapes the reference extractor consumes. Decoding
//! the wire format into them belongs to the embedding client; only the
//! parts that can carry a file reference are modeled here, and unknown
//! media kinds collapse into [`Media::Unsupported`] instead of failing.

use fresco_core::{DocumentId, FileReference, MessageId, PhotoId};
use serde::{Deserialize, Serialize};

/// A photo object as it appears inside a decoded response.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct Photo {
    /// Photo id (required)
    id: PhotoId,
    /// Current download token (optional)
    #[serde(default)]
    #[builder(default)]
    file_reference: Option<FileReference>,
}

/// A document object as it appears inside a decoded response.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct Document {
    /// Document id (required)
    id: DocumentId,
    /// Current download token (optional)
    #[serde(default)]
    #[builder(default)]
    file_reference: Option<FileReference>,
}

/// A link preview, which may embed a photo, a document or both.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct WebPage {
    /// Preview image (optional)
    #[serde(default)]
    #[builder(default)]
    photo: Option<Photo>,
    /// Attached document (optional)
    #[serde(default)]
    #[builder(default)]
    document: Option<Document>,
}

/// Media attached to a message.
///
/// Kinds this library has no use for decode to `Unsupported` rather than
/// producing a decode error, so one exotic attachment never poisons a
/// whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Media {
    /// A photo attachment.
    Photo(Photo),
    /// A document attachment.
    Document(Document),
    /// A link preview with embedded media.
    WebPage(WebPage),
    /// Any media kind this library does not extract references from.
    #[serde(other)]
    Unsupported,
}

/// A message as it appears inside a decoded response.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct Message {
    /// Message id (required)
    id: MessageId,
    /// Attached media (optional)
    #[serde(default)]
    #[builder(default)]
    media: Option<Media>,
}

/// Response to a message fetch.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct MessagesResponse {
    /// Messages returned by the query.
    #[serde(default)]
    #[builder(default)]
    messages: Vec<Message>,
}

/// Response to a user photo listing.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct PhotosResponse {
    /// Photos returned by the query.
    #[serde(default)]
    #[builder(default)]
    photos: Vec<Photo>,
}

/// Response to a recent stickers listing.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct RecentStickersResponse {
    /// Sticker documents in the recent list.
    #[serde(default)]
    #[builder(default)]
    stickers: Vec<Document>,
}

/// Response to a faved stickers listing.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct FavedStickersResponse {
    /// Sticker documents in the faved list.
    #[serde(default)]
    #[builder(default)]
    stickers: Vec<Document>,
}

/// Response to a sticker set fetch.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct StickerSetResponse {
    /// Sticker documents in the set.
    #[serde(default)]
    #[builder(default)]
    documents: Vec<Document>,
}

/// Response to a saved gifs listing.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct SavedGifsResponse {
    /// Gif documents in the saved list.
    #[serde(default)]
    #[builder(default)]
    gifs: Vec<Document>,
}

/// Response to a wallpaper fetch.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct WallPaperResponse {
    /// Document backing the wallpaper (optional)
    #[serde(default)]
    #[builder(default)]
    document: Option<Document>,
}

/// Response to a full peer info fetch.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct PeerFullResponse {
    /// Current profile photo of the peer (optional)
    #[serde(default)]
    #[builder(default)]
    photo: Option<Photo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_media_kind_decodes_to_unsupported() {
        let media: Media =
            serde_json::from_str(r#"{"kind": "poll", "question": "?"}"#).expect("decode media");
        assert_eq!(media, Media::Unsupported);
    }

    #[test]
    fn test_photo_without_reference_decodes() {
        let photo: Photo = serde_json::from_str(r#"{"id": 42}"#).expect("decode photo");
        assert_eq!(*photo.id(), PhotoId(42));
        assert_eq!(*photo.file_reference(), None);
    }

    #[test]
    fn test_message_with_document_decodes() {
        let message: Message = serde_json::from_str(
            r#"{
                "id": 7,
                "media": {"kind": "document", "id": 99, "file_reference": [1, 2, 3]}
            }"#,
        )
        .expect("decode message");
        let media = message.media().as_ref().expect("media present");
        match media {
            Media::Document(document) => {
                assert_eq!(*document.id(), DocumentId(99));
                assert_eq!(
                    *document.file_reference(),
                    Some(FileReference::new(vec![1, 2, 3]))
                );
            }
            other => panic!("expected document media, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_response_builds() {
        let response = MessagesResponseBuilder::default()
            .build()
            .expect("build response");
        assert!(response.messages().is_empty());
    }
}
