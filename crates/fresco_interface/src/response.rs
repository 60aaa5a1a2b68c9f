//! Response envelope delivered by a request sender.

use crate::{
    FavedStickersResponse, MessagesResponse, PeerFullResponse, PhotosResponse,
    RecentStickersResponse, SavedGifsResponse, StickerSetResponse, WallPaperResponse,
};
use serde::{Deserialize, Serialize};

/// Decoded response to a replayed request.
///
/// One variant per shape the reference extractor understands. A sender
/// returns the variant matching the request it was given; a mismatched
/// variant extracts nothing rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
pub enum ReplayResponse {
    /// Messages list.
    Messages(MessagesResponse),
    /// User photo list.
    Photos(PhotosResponse),
    /// Recent stickers list.
    RecentStickers(RecentStickersResponse),
    /// Faved stickers list.
    FavedStickers(FavedStickersResponse),
    /// One sticker set.
    StickerSet(StickerSetResponse),
    /// Saved gifs list.
    SavedGifs(SavedGifsResponse),
    /// One wallpaper.
    WallPaper(WallPaperResponse),
    /// Full peer info.
    PeerFull(PeerFullResponse),
}
