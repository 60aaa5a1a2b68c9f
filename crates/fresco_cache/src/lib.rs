//! Reference extraction and storage for the fresco file-reference library.
//!
//! This crate scans decoded API responses for the opaque download tokens
//! they carry and keeps the latest token per file in an in-memory store.

#![warn(missing_docs)]

mod extract;
mod store;

pub use extract::{
    from_faved_stickers, from_messages, from_peer_full, from_photos, from_recent_stickers,
    from_response, from_saved_gifs, from_sticker_set, from_wallpaper,
};
pub use store::ReferenceStore;
