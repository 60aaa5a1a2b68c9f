//! End-to-end refresh flows through the facade: a stale download token is
//! renewed by replaying the origin that produced the file.

use async_trait::async_trait;
use fresco::{
    AccessHash, CLOUD_RECENT_STICKER_SET, ConversationId, Document, DocumentBuilder, DocumentId,
    FAVED_STICKER_SET, FavedStickersResponseBuilder, FileLocation, FileOrigin, FileReference,
    Media, MessageBuilder, MessageId, MessagesResponseBuilder, PeerFullResponseBuilder, PeerId,
    Photo, PhotoBuilder, PhotoId, PhotosResponseBuilder, RecentStickersResponseBuilder,
    RefreshConfig, RefreshCoordinator, RefreshOutcome, ReplayRequest, ReplayResponse,
    RequestSender, SavedGifsResponseBuilder, StickerSetId, StickerSetResponseBuilder,
    TransportResult, UserId, WallPaperId, WallPaperResponseBuilder,
};
use std::sync::Arc;

fn photo(id: u64, reference: &[u8]) -> Photo {
    PhotoBuilder::default()
        .id(PhotoId(id))
        .file_reference(Some(FileReference::from(reference)))
        .build()
        .unwrap()
}

fn document(id: u64, reference: &[u8]) -> Document {
    DocumentBuilder::default()
        .id(DocumentId(id))
        .file_reference(Some(FileReference::from(reference)))
        .build()
        .unwrap()
}

/// Sender that answers every replay with a canned response for its shape,
/// the way a live server would.
struct RoutingSender;

#[async_trait]
impl RequestSender for RoutingSender {
    async fn send(&self, request: ReplayRequest) -> TransportResult<ReplayResponse> {
        let response = match request {
            ReplayRequest::GetMessage { message, .. } => MessagesResponseBuilder::default()
                .messages(vec![
                    MessageBuilder::default()
                        .id(message)
                        .media(Some(Media::Photo(photo(14, b"MS"))))
                        .build()
                        .unwrap(),
                ])
                .build()
                .unwrap()
                .into(),
            ReplayRequest::GetUserPhotos { .. } => PhotosResponseBuilder::default()
                .photos(vec![photo(13, b"UP")])
                .build()
                .unwrap()
                .into(),
            ReplayRequest::GetPeerFull { .. } => PeerFullResponseBuilder::default()
                .photo(Some(photo(11, b"PF")))
                .build()
                .unwrap()
                .into(),
            ReplayRequest::GetStickerSet { .. } => StickerSetResponseBuilder::default()
                .documents(vec![document(7, b"XY")])
                .build()
                .unwrap()
                .into(),
            ReplayRequest::GetRecentStickers => RecentStickersResponseBuilder::default()
                .stickers(vec![document(8, b"RC")])
                .build()
                .unwrap()
                .into(),
            ReplayRequest::GetFavedStickers => FavedStickersResponseBuilder::default()
                .stickers(vec![document(9, b"FV")])
                .build()
                .unwrap()
                .into(),
            ReplayRequest::GetSavedGifs => SavedGifsResponseBuilder::default()
                .gifs(vec![document(12, b"GF")])
                .build()
                .unwrap()
                .into(),
            ReplayRequest::GetWallPaper { .. } => WallPaperResponseBuilder::default()
                .document(Some(document(10, b"WP")))
                .build()
                .unwrap()
                .into(),
        };
        Ok(response)
    }
}

fn coordinator() -> RefreshCoordinator {
    RefreshCoordinator::new(Arc::new(RoutingSender), RefreshConfig::default())
}

#[tokio::test]
async fn test_sticker_download_recovers_with_fresh_reference() {
    let coordinator = coordinator();
    let location = FileLocation::Document(DocumentId(7));
    let origin = FileOrigin::StickerSet {
        set: StickerSetId(300),
        access_hash: AccessHash(44),
    };

    // The download failed with a stale token; nothing cached yet.
    assert_eq!(coordinator.lookup(&location).await, None);

    let outcome = coordinator.request(location, origin).await;

    assert_eq!(
        outcome,
        RefreshOutcome::Refreshed(FileReference::from(b"XY".as_slice()))
    );
    // The retried download can pull the token straight from the store.
    assert_eq!(
        coordinator.lookup(&location).await,
        Some(FileReference::from(b"XY".as_slice()))
    );
}

#[tokio::test]
async fn test_every_refreshable_origin_resolves_end_to_end() {
    let cases: Vec<(FileLocation, FileOrigin, &[u8])> = vec![
        (
            FileLocation::Photo(PhotoId(14)),
            FileOrigin::Message {
                conversation: ConversationId(1),
                message: MessageId(2),
            },
            b"MS",
        ),
        (
            FileLocation::Photo(PhotoId(13)),
            FileOrigin::UserPhoto {
                user: UserId(3),
                photo: PhotoId(13),
            },
            b"UP",
        ),
        (
            FileLocation::Photo(PhotoId(11)),
            FileOrigin::PeerPhoto { peer: PeerId(4) },
            b"PF",
        ),
        (
            FileLocation::Document(DocumentId(7)),
            FileOrigin::StickerSet {
                set: StickerSetId(300),
                access_hash: AccessHash(44),
            },
            b"XY",
        ),
        (FileLocation::Document(DocumentId(12)), FileOrigin::SavedGifs, b"GF"),
        (
            FileLocation::Document(DocumentId(10)),
            FileOrigin::Wallpaper {
                paper: WallPaperId(6),
                access_hash: AccessHash(55),
            },
            b"WP",
        ),
    ];

    let coordinator = coordinator();
    for (location, origin, expected) in cases {
        let outcome = coordinator.request(location, origin).await;
        assert_eq!(
            outcome,
            RefreshOutcome::Refreshed(FileReference::from(expected)),
            "origin {origin} did not refresh its file"
        );
    }
}

#[tokio::test]
async fn test_reserved_sticker_sets_refresh_from_their_lists() {
    let coordinator = coordinator();

    // The recent list is not a real set; its origin replays the list query.
    let recent = coordinator
        .request(
            FileLocation::Document(DocumentId(8)),
            FileOrigin::StickerSet {
                set: CLOUD_RECENT_STICKER_SET,
                access_hash: AccessHash(0),
            },
        )
        .await;
    assert_eq!(
        recent,
        RefreshOutcome::Refreshed(FileReference::from(b"RC".as_slice()))
    );

    let faved = coordinator
        .request(
            FileLocation::Document(DocumentId(9)),
            FileOrigin::StickerSet {
                set: FAVED_STICKER_SET,
                access_hash: AccessHash(0),
            },
        )
        .await;
    assert_eq!(
        faved,
        RefreshOutcome::Refreshed(FileReference::from(b"FV".as_slice()))
    );
}

#[tokio::test]
async fn test_refresh_for_a_file_the_origin_no_longer_carries() {
    let coordinator = coordinator();

    // Document 999 is not in sticker set 300 anymore.
    let outcome = coordinator
        .request(
            FileLocation::Document(DocumentId(999)),
            FileOrigin::StickerSet {
                set: StickerSetId(300),
                access_hash: AccessHash(44),
            },
        )
        .await;

    assert_eq!(outcome, RefreshOutcome::NotFound);
    // The set's actual content was still harvested.
    assert_eq!(
        coordinator.lookup(&FileLocation::Document(DocumentId(7))).await,
        Some(FileReference::from(b"XY".as_slice()))
    );
}

#[tokio::test]
async fn test_file_without_provenance_cannot_refresh() {
    let coordinator = coordinator();

    let outcome = coordinator
        .request(FileLocation::Document(DocumentId(7)), FileOrigin::Empty)
        .await;

    assert_eq!(outcome, RefreshOutcome::OriginInvalid);
    assert_eq!(coordinator.store_len().await, 0);
}
