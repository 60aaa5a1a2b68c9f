//! Reference extraction from decoded responses.

use fresco_core::{FileLocation, UpdatedReferences};
use fresco_interface::{
    Document, FavedStickersResponse, Media, MessagesResponse, PeerFullResponse, Photo,
    PhotosResponse, RecentStickersResponse, ReplayResponse, SavedGifsResponse, StickerSetResponse,
    WallPaperResponse,
};

fn push_photo(updated: &mut UpdatedReferences, photo: &Photo) {
    if let Some(reference) = photo.file_reference() {
        updated.insert(FileLocation::Photo(*photo.id()), reference.clone());
    }
}

fn push_document(updated: &mut UpdatedReferences, document: &Document) {
    if let Some(reference) = document.file_reference() {
        updated.insert(FileLocation::Document(*document.id()), reference.clone());
    }
}

fn push_media(updated: &mut UpdatedReferences, media: &Media) {
    match media {
        Media::Photo(photo) => push_photo(updated, photo),
        Media::Document(document) => push_document(updated, document),
        Media::WebPage(page) => {
            if let Some(photo) = page.photo() {
                push_photo(updated, photo);
            }
            if let Some(document) = page.document() {
                push_document(updated, document);
            }
        }
        Media::Unsupported => {}
    }
}

/// Collects references from a messages response.
///
/// Entities without a reference contribute nothing; a malformed or
/// unsupported attachment is skipped rather than failing the scan.
pub fn from_messages(response: &MessagesResponse) -> UpdatedReferences {
    let mut updated = UpdatedReferences::new();
    for message in response.messages() {
        if let Some(media) = message.media() {
            push_media(&mut updated, media);
        }
    }
    updated
}

/// Collects references from a user photo listing.
pub fn from_photos(response: &PhotosResponse) -> UpdatedReferences {
    let mut updated = UpdatedReferences::new();
    for photo in response.photos() {
        push_photo(&mut updated, photo);
    }
    updated
}

/// Collects references from the recent stickers list.
pub fn from_recent_stickers(response: &RecentStickersResponse) -> UpdatedReferences {
    let mut updated = UpdatedReferences::new();
    for document in response.stickers() {
        push_document(&mut updated, document);
    }
    updated
}

/// Collects references from the faved stickers list.
pub fn from_faved_stickers(response: &FavedStickersResponse) -> UpdatedReferences {
    let mut updated = UpdatedReferences::new();
    for document in response.stickers() {
        push_document(&mut updated, document);
    }
    updated
}

/// Collects references from a sticker set.
pub fn from_sticker_set(response: &StickerSetResponse) -> UpdatedReferences {
    let mut updated = UpdatedReferences::new();
    for document in response.documents() {
        push_document(&mut updated, document);
    }
    updated
}

/// Collects references from the saved gifs list.
pub fn from_saved_gifs(response: &SavedGifsResponse) -> UpdatedReferences {
    let mut updated = UpdatedReferences::new();
    for document in response.gifs() {
        push_document(&mut updated, document);
    }
    updated
}

/// Collects the reference of the document backing a wallpaper.
pub fn from_wallpaper(response: &WallPaperResponse) -> UpdatedReferences {
    let mut updated = UpdatedReferences::new();
    if let Some(document) = response.document() {
        push_document(&mut updated, document);
    }
    updated
}

/// Collects the reference of a peer's current profile photo.
pub fn from_peer_full(response: &PeerFullResponse) -> UpdatedReferences {
    let mut updated = UpdatedReferences::new();
    if let Some(photo) = response.photo() {
        push_photo(&mut updated, photo);
    }
    updated
}

/// Collects references from any response shape.
pub fn from_response(response: &ReplayResponse) -> UpdatedReferences {
    match response {
        ReplayResponse::Messages(messages) => from_messages(messages),
        ReplayResponse::Photos(photos) => from_photos(photos),
        ReplayResponse::RecentStickers(stickers) => from_recent_stickers(stickers),
        ReplayResponse::FavedStickers(stickers) => from_faved_stickers(stickers),
        ReplayResponse::StickerSet(set) => from_sticker_set(set),
        ReplayResponse::SavedGifs(gifs) => from_saved_gifs(gifs),
        ReplayResponse::WallPaper(paper) => from_wallpaper(paper),
        ReplayResponse::PeerFull(peer) => from_peer_full(peer),
    }
}
