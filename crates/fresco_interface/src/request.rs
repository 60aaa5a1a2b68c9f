//! Replay request descriptors, one per refreshable origin.

use fresco_core::{
    AccessHash, CLOUD_RECENT_STICKER_SET, ConversationId, FAVED_STICKER_SET, FileOrigin, MessageId,
    PeerId, StickerSetId, UserId, WallPaperId,
};
use serde::{Deserialize, Serialize};

/// The API query that reproduces the context a file origin names.
///
/// Variants mirror the origin table one to one, except that the two
/// reserved cloud sticker sets replay as their list queries instead of a
/// set fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReplayRequest {
    /// Re-fetch a single message.
    GetMessage {
        /// Conversation holding the message.
        conversation: ConversationId,
        /// The message to fetch.
        message: MessageId,
    },
    /// Re-fetch a user's profile photos.
    GetUserPhotos {
        /// Owner of the photos.
        user: UserId,
    },
    /// Re-fetch full info for a peer, including its current photo.
    GetPeerFull {
        /// The peer to fetch.
        peer: PeerId,
    },
    /// Re-fetch a sticker set.
    GetStickerSet {
        /// The set to fetch.
        set: StickerSetId,
        /// Access hash issued alongside the set id.
        access_hash: AccessHash,
    },
    /// Re-fetch the recently-used sticker list.
    GetRecentStickers,
    /// Re-fetch the faved sticker list.
    GetFavedStickers,
    /// Re-fetch the saved gifs list.
    GetSavedGifs,
    /// Re-fetch a wallpaper.
    GetWallPaper {
        /// The wallpaper to fetch.
        paper: WallPaperId,
        /// Access hash issued alongside the wallpaper id.
        access_hash: AccessHash,
    },
}

impl ReplayRequest {
    /// Maps an origin to the request that replays it.
    ///
    /// Returns `None` exactly when the origin carries no replayable
    /// context.
    pub fn for_origin(origin: FileOrigin) -> Option<Self> {
        match origin {
            FileOrigin::Empty => None,
            FileOrigin::Message {
                conversation,
                message,
            } => Some(Self::GetMessage {
                conversation,
                message,
            }),
            FileOrigin::UserPhoto { user, .. } => Some(Self::GetUserPhotos { user }),
            FileOrigin::PeerPhoto { peer } => Some(Self::GetPeerFull { peer }),
            FileOrigin::StickerSet { set, access_hash } => Some(match set {
                CLOUD_RECENT_STICKER_SET => Self::GetRecentStickers,
                FAVED_STICKER_SET => Self::GetFavedStickers,
                _ => Self::GetStickerSet { set, access_hash },
            }),
            FileOrigin::SavedGifs => Some(Self::GetSavedGifs),
            FileOrigin::Wallpaper { paper, access_hash } => {
                Some(Self::GetWallPaper { paper, access_hash })
            }
        }
    }

    /// Static method name for log fields.
    pub fn method(&self) -> &'static str {
        match self {
            Self::GetMessage { .. } => "get_message",
            Self::GetUserPhotos { .. } => "get_user_photos",
            Self::GetPeerFull { .. } => "get_peer_full",
            Self::GetStickerSet { .. } => "get_sticker_set",
            Self::GetRecentStickers => "get_recent_stickers",
            Self::GetFavedStickers => "get_faved_stickers",
            Self::GetSavedGifs => "get_saved_gifs",
            Self::GetWallPaper { .. } => "get_wall_paper",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresco_core::PhotoId;

    #[test]
    fn test_empty_origin_has_no_replay() {
        assert_eq!(ReplayRequest::for_origin(FileOrigin::Empty), None);
    }

    #[test]
    fn test_message_origin_replays_the_message() {
        let origin = FileOrigin::Message {
            conversation: ConversationId(10),
            message: MessageId(20),
        };
        assert_eq!(
            ReplayRequest::for_origin(origin),
            Some(ReplayRequest::GetMessage {
                conversation: ConversationId(10),
                message: MessageId(20),
            })
        );
    }

    #[test]
    fn test_user_photo_origin_replays_the_photo_list() {
        let origin = FileOrigin::UserPhoto {
            user: UserId(3),
            photo: PhotoId(9),
        };
        assert_eq!(
            ReplayRequest::for_origin(origin),
            Some(ReplayRequest::GetUserPhotos { user: UserId(3) })
        );
    }

    #[test]
    fn test_peer_photo_origin_replays_full_peer_info() {
        let origin = FileOrigin::PeerPhoto { peer: PeerId(5) };
        assert_eq!(
            ReplayRequest::for_origin(origin),
            Some(ReplayRequest::GetPeerFull { peer: PeerId(5) })
        );
    }

    #[test]
    fn test_ordinary_sticker_set_replays_a_set_fetch() {
        let origin = FileOrigin::StickerSet {
            set: StickerSetId(77),
            access_hash: AccessHash(12),
        };
        assert_eq!(
            ReplayRequest::for_origin(origin),
            Some(ReplayRequest::GetStickerSet {
                set: StickerSetId(77),
                access_hash: AccessHash(12),
            })
        );
    }

    #[test]
    fn test_reserved_sticker_sets_replay_as_list_queries() {
        let recent = FileOrigin::StickerSet {
            set: CLOUD_RECENT_STICKER_SET,
            access_hash: AccessHash(0),
        };
        assert_eq!(
            ReplayRequest::for_origin(recent),
            Some(ReplayRequest::GetRecentStickers)
        );
        let faved = FileOrigin::StickerSet {
            set: FAVED_STICKER_SET,
            access_hash: AccessHash(0),
        };
        assert_eq!(
            ReplayRequest::for_origin(faved),
            Some(ReplayRequest::GetFavedStickers)
        );
    }

    #[test]
    fn test_list_origins_replay_their_lists() {
        assert_eq!(
            ReplayRequest::for_origin(FileOrigin::SavedGifs),
            Some(ReplayRequest::GetSavedGifs)
        );
        let wallpaper = FileOrigin::Wallpaper {
            paper: WallPaperId(4),
            access_hash: AccessHash(-9),
        };
        assert_eq!(
            ReplayRequest::for_origin(wallpaper),
            Some(ReplayRequest::GetWallPaper {
                paper: WallPaperId(4),
                access_hash: AccessHash(-9),
            })
        );
    }

    #[test]
    fn test_method_names_are_distinct_where_requests_differ() {
        let methods = [
            ReplayRequest::GetRecentStickers.method(),
            ReplayRequest::GetFavedStickers.method(),
            ReplayRequest::GetSavedGifs.method(),
        ];
        assert_eq!(methods.len(), {
            let mut unique = methods.to_vec();
            unique.sort_unstable();
            unique.dedup();
            unique.len()
        });
    }
}
