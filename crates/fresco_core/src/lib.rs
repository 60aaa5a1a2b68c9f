//! Core data types for the fresco file-reference library.
//!
//! This crate provides the foundation data types used across all fresco interfaces:
//! file identities, origins, opaque download tokens and refresh outcomes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod id;
mod location;
mod origin;
mod outcome;
mod reference;

pub use id::{
    AccessHash, ConversationId, DocumentId, MessageId, PeerId, PhotoId, StickerSetId, UserId,
    WallPaperId,
};
pub use location::FileLocation;
pub use origin::{CLOUD_RECENT_STICKER_SET, FAVED_STICKER_SET, FileOrigin, OriginKind};
pub use outcome::RefreshOutcome;
pub use reference::{FileReference, UpdatedReferences};
