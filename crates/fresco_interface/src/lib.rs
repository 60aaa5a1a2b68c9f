//! Trait and schema definitions for the fresco file-reference library.
//!
//! This crate provides the replay request table, the decoded response
//! shapes the extractor consumes, and the [`RequestSender`] seam that
//! connects the refresh coordinator to a real transport.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod request;
mod response;
mod schema;
mod sender;

pub use request::ReplayRequest;
pub use response::ReplayResponse;
pub use schema::{
    Document, DocumentBuilder, FavedStickersResponse, FavedStickersResponseBuilder, Media, Message,
    MessageBuilder, MessagesResponse, MessagesResponseBuilder, PeerFullResponse,
    PeerFullResponseBuilder, Photo, PhotoBuilder, PhotosResponse, PhotosResponseBuilder,
    RecentStickersResponse, RecentStickersResponseBuilder, SavedGifsResponse,
    SavedGifsResponseBuilder, StickerSetResponse, StickerSetResponseBuilder, WallPaperResponse,
    WallPaperResponseBuilder, WebPage, WebPageBuilder,
};
pub use sender::RequestSender;
