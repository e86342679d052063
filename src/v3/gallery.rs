/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::macros::{auth_gated_unimplemented, obj_from_url, objs_from_url};
use crate::v3::{Album, Client, Comment, Entity, EntityKind, Image};
use reqwest::Method;
use serde_json::Value;

/// Interactions shared by everything posted to the gallery.
#[derive(Debug, Clone)]
pub struct GalleryItem {
    id: String,
    client: Client,
}

impl GalleryItem {
    fn for_entity(entity: &Entity) -> Self {
        Self {
            id: entity.key().to_string(),
            client: entity.client().clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the comments on this gallery item
    pub async fn comments(&self) -> Result<Vec<Comment>, ImgurError> {
        let url = format!("gallery/{}/comments", self.id);
        objs_from_url!(self.client, &url, Comment)
    }

    pub fn comment_count(&self) -> Result<u64, ImgurError> {
        Err(ImgurError::NotImplemented("use comments().len() instead"))
    }

    pub fn comment_ids(&self) -> Result<Vec<String>, ImgurError> {
        Err(ImgurError::NotImplemented("use comments() and take the ids"))
    }

    /// Returns the up and down votes of this gallery item
    pub async fn votes(&self) -> Result<Value, ImgurError> {
        let url = format!("gallery/{}/votes", self.id);
        self.client.send_request(&url, None, Method::GET).await
    }

    auth_gated_unimplemented! {
        /// Comments on this gallery item
        comment(text: &str) -> Comment;
        upvote() -> bool;
        downvote() -> bool;
    }
}

/// An album posted to the gallery
#[derive(Debug, Clone)]
pub struct GalleryAlbum {
    album: Album,
    gallery: GalleryItem,
}

impl GalleryAlbum {
    /// Returns information for the specified gallery album id
    pub async fn from_id(client: Client, id: &str) -> Result<Self, ImgurError> {
        obj_from_url!(client, &EntityKind::GalleryAlbum.info_path(id), GalleryAlbum)
    }

    pub(crate) fn from_json(json: Value, client: Client, fully_loaded: bool) -> Result<Self, ImgurError> {
        let entity = Entity::new(EntityKind::GalleryAlbum, json, client, fully_loaded)?;
        Ok(Self {
            gallery: GalleryItem::for_entity(&entity),
            album: Album::from_entity(entity),
        })
    }

    pub fn id(&self) -> &str {
        self.album.id()
    }

    pub fn album(&self) -> &Album {
        &self.album
    }

    pub fn album_mut(&mut self) -> &mut Album {
        &mut self.album
    }

    pub fn into_album(self) -> Album {
        self.album
    }

    pub fn gallery(&self) -> &GalleryItem {
        &self.gallery
    }
}

/// An image posted to the gallery
#[derive(Debug, Clone)]
pub struct GalleryImage {
    image: Image,
    gallery: GalleryItem,
}

impl GalleryImage {
    /// Returns information for the specified gallery image id
    pub async fn from_id(client: Client, id: &str) -> Result<Self, ImgurError> {
        obj_from_url!(client, &EntityKind::GalleryImage.info_path(id), GalleryImage)
    }

    pub(crate) fn from_json(json: Value, client: Client, fully_loaded: bool) -> Result<Self, ImgurError> {
        let entity = Entity::new(EntityKind::GalleryImage, json, client, fully_loaded)?;
        Ok(Self {
            gallery: GalleryItem::for_entity(&entity),
            image: Image::from_entity(entity),
        })
    }

    pub fn id(&self) -> &str {
        self.image.id()
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut Image {
        &mut self.image
    }

    pub fn into_image(self) -> Image {
        self.image
    }

    pub fn gallery(&self) -> &GalleryItem {
        &self.gallery
    }
}

/// A gallery record, resolved from its `is_album` flag
#[derive(Debug, Clone)]
pub enum GalleryEntry {
    Album(GalleryAlbum),
    Image(GalleryImage),
}

impl GalleryEntry {
    pub(crate) fn from_json(json: Value, client: Client, fully_loaded: bool) -> Result<Self, ImgurError> {
        let is_album = json
            .get("is_album")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if is_album {
            GalleryAlbum::from_json(json, client, fully_loaded).map(GalleryEntry::Album)
        } else {
            GalleryImage::from_json(json, client, fully_loaded).map(GalleryEntry::Image)
        }
    }

    pub fn id(&self) -> &str {
        match self {
            GalleryEntry::Album(a) => a.id(),
            GalleryEntry::Image(i) => i.id(),
        }
    }

    pub fn is_album(&self) -> bool {
        matches!(self, GalleryEntry::Album(_))
    }

    pub fn entity(&self) -> &Entity {
        match self {
            GalleryEntry::Album(a) => a.album().entity(),
            GalleryEntry::Image(i) => i.image().entity(),
        }
    }

    pub fn gallery(&self) -> &GalleryItem {
        match self {
            GalleryEntry::Album(a) => a.gallery(),
            GalleryEntry::Image(i) => i.gallery(),
        }
    }
}
