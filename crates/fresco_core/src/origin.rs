use crate::{
    AccessHash, ConversationId, MessageId, PeerId, PhotoId, StickerSetId, UserId, WallPaperId,
};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Sticker set id the server reserves for the recently-used sticker list.
pub const CLOUD_RECENT_STICKER_SET: StickerSetId = StickerSetId(0xFFFF_FFFF_FFFF_FFFC);

/// Sticker set id the server reserves for the faved sticker list.
pub const FAVED_STICKER_SET: StickerSetId = StickerSetId(0xFFFF_FFFF_FFFF_FFFA);

/// Where a downloadable file was first seen.
///
/// An origin names the API context that produced a file, which is also the
/// context that can be re-fetched to obtain a fresh download token for it.
/// Two origins with the same variant but different field values are distinct
/// provenances and never compare equal.
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
)]
pub enum FileOrigin {
    /// Provenance is unknown. There is nothing to replay for such a file.
    ///
    /// Declared first: derived ordering sorts `Empty` before every
    /// populated origin.
    #[display("empty")]
    Empty,
    /// The file arrived attached to a message.
    #[display("message({conversation}, {message})")]
    Message {
        /// Conversation holding the message.
        conversation: ConversationId,
        /// The message the file was attached to.
        message: MessageId,
    },
    /// The file is one of a user's profile photos.
    #[display("user_photo({user}, {photo})")]
    UserPhoto {
        /// Owner of the photo.
        user: UserId,
        /// The photo itself.
        photo: PhotoId,
    },
    /// The file is the current profile photo of a peer.
    #[display("peer_photo({peer})")]
    PeerPhoto {
        /// The peer whose photo it is.
        peer: PeerId,
    },
    /// The file belongs to a sticker set.
    #[display("sticker_set({set})")]
    StickerSet {
        /// The set the sticker belongs to.
        set: StickerSetId,
        /// Access hash issued alongside the set id.
        access_hash: AccessHash,
    },
    /// The file appeared in the saved gifs list.
    #[display("saved_gifs")]
    SavedGifs,
    /// The file is a wallpaper.
    #[display("wallpaper({paper})")]
    Wallpaper {
        /// The wallpaper object.
        paper: WallPaperId,
        /// Access hash issued alongside the wallpaper id.
        access_hash: AccessHash,
    },
}

impl FileOrigin {
    /// Returns the fieldless discriminant of this origin.
    pub fn kind(&self) -> OriginKind {
        match self {
            Self::Empty => OriginKind::Empty,
            Self::Message { .. } => OriginKind::Message,
            Self::UserPhoto { .. } => OriginKind::UserPhoto,
            Self::PeerPhoto { .. } => OriginKind::PeerPhoto,
            Self::StickerSet { .. } => OriginKind::StickerSet,
            Self::SavedGifs => OriginKind::SavedGifs,
            Self::Wallpaper { .. } => OriginKind::Wallpaper,
        }
    }

    /// True when the origin carries enough context to replay a request.
    pub fn is_refreshable(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

impl Default for FileOrigin {
    fn default() -> Self {
        Self::Empty
    }
}

/// Discriminant of a [`FileOrigin`], without the identifying fields.
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
    EnumIter,
    derive_more::Display,
)]
pub enum OriginKind {
    /// No provenance recorded.
    #[display("empty")]
    Empty,
    /// Attached to a message.
    #[display("message")]
    Message,
    /// A user profile photo.
    #[display("user_photo")]
    UserPhoto,
    /// A peer's current profile photo.
    #[display("peer_photo")]
    PeerPhoto,
    /// Part of a sticker set.
    #[display("sticker_set")]
    StickerSet,
    /// From the saved gifs list.
    #[display("saved_gifs")]
    SavedGifs,
    /// A wallpaper.
    #[display("wallpaper")]
    Wallpaper,
}
