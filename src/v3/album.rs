/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::to_payload;
use crate::v3::errors::ImgurError;
use crate::v3::macros::{auth_gated_unimplemented, lazy_fields, obj_from_url, objs_from_url};
use crate::v3::{AlbumLayout, AlbumPrivacy, Client, Entity, EntityKind, Field, Image, User};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// An album, see the [Imgur API Docs](https://apidocs.imgur.com/#album) for
/// details on the individual fields.
///
/// The `account_url` field is held as a lazily loaded [`User`].
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub(crate) entity: Entity,
}

impl Album {
    /// Returns information for the album at the provided url
    pub async fn from_url(client: Client, url: &str) -> Result<Self, ImgurError> {
        obj_from_url!(client, url, Album)
    }

    /// Returns information for the specified album id
    pub async fn from_id(client: Client, id: &str) -> Result<Self, ImgurError> {
        Self::from_url(client, &EntityKind::Album.info_path(id)).await
    }

    /// An album that is loaded the first time an unknown field is requested
    pub fn stub(client: Client, id: &str) -> Self {
        Self::from_entity(Entity::stub(EntityKind::Album, id, client))
    }

    pub(crate) fn from_json(json: Value, client: Client, fully_loaded: bool) -> Result<Self, ImgurError> {
        Entity::new(EntityKind::Album, json, client, fully_loaded).map(Self::from_entity)
    }

    pub(crate) fn from_entity(entity: Entity) -> Self {
        Self { entity }
    }

    pub fn id(&self) -> &str {
        self.entity.key()
    }

    pub fn client(&self) -> &Client {
        self.entity.client()
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn into_entity(self) -> Entity {
        self.entity
    }

    lazy_fields! {
        title: String = "title";
        description: String = "description";
        datetime: DateTime<Utc> = "datetime";
        /// Id of the cover image
        cover: String = "cover";
        privacy: AlbumPrivacy = "privacy";
        layout: AlbumLayout = "layout";
        views: u64 = "views";
        link: String = "link";
        images_count: u64 = "images_count";
        /// The images held by the album record, in album order
        image_list: Vec<Image> = "images";
    }

    /// The account owning this album, `None` for anonymous albums
    pub async fn account(&mut self) -> Result<Option<&mut User>, ImgurError> {
        let field = self.entity.get_field_mut("account_url").await?;
        if field.is_null() {
            return Ok(None);
        }
        field.as_user_mut().map(Some).ok_or_else(|| ImgurError::FieldType {
            field: "account_url".to_string(),
            expected: "user",
        })
    }

    /// The cover as a lazily loaded image
    pub async fn cover_image(&mut self) -> Result<Option<Image>, ImgurError> {
        let client = self.client().clone();
        Ok(self.cover().await?.map(|id| Image::stub(client, &id)))
    }

    /// Only known for albums created by this session, never loaded from the API
    pub fn deletehash(&self) -> Option<&str> {
        self.entity.field("deletehash").and_then(Field::as_str)
    }

    /// Retrieves the images in this album
    pub async fn images(&self) -> Result<Vec<Image>, ImgurError> {
        let url = format!("album/{}/images", self.id());
        objs_from_url!(self.client(), &url, Image)
    }

    /// Deletes the album using its deletehash
    pub async fn delete(&self) -> Result<bool, ImgurError> {
        let deletehash = self
            .deletehash()
            .ok_or(ImgurError::DeleteHashMissing(self.entity.kind()))?;
        let url = format!("album/{}", deletehash);
        let resp = self.client().send_request(&url, None, Method::DELETE).await?;
        Ok(resp.as_bool().unwrap_or(false))
    }

    /// Updates the album using its deletehash. Only the set properties are
    /// sent, and only changed locally once the API reports success.
    pub async fn update(&mut self, props: AlbumProps) -> Result<bool, ImgurError> {
        let deletehash = self
            .deletehash()
            .ok_or(ImgurError::DeleteHashMissing(self.entity.kind()))?;
        let url = format!("album/{}", deletehash);
        let payload = to_payload(&props)?;
        let is_updated = self
            .client()
            .send_request(&url, Some(payload), Method::POST)
            .await?
            .as_bool()
            .unwrap_or(false);
        if is_updated {
            self.apply(props);
        }
        Ok(is_updated)
    }

    fn apply(&mut self, props: AlbumProps) {
        let client = self.client().clone();
        if let Some(title) = props.title {
            self.entity.set_field("title", Field::String(title));
        }
        if let Some(description) = props.description {
            self.entity.set_field("description", Field::String(description));
        }
        if let Some(layout) = props.layout {
            self.entity.set_field("layout", Field::from(<&str>::from(layout)));
        }
        if let Some(privacy) = props.privacy {
            self.entity.set_field("privacy", Field::from(<&str>::from(privacy)));
        }
        if let Some(cover) = props.cover {
            self.entity.set_field("cover", Field::String(cover));
        }
        if let Some(ids) = props.ids {
            let images = ids
                .iter()
                .map(|id| Field::Image(Box::new(Image::stub(client.clone(), id))))
                .collect();
            self.entity.set_field("images", Field::List(images));
        }
    }

    auth_gated_unimplemented! {
        /// Adds images to the album
        add_images(ids: &[&str]) -> bool;
        /// Removes images from the album
        remove_images(ids: &[&str]) -> bool;
        /// Replaces the images in the album
        set_images(ids: &[&str]) -> bool;
        favorite() -> bool;
        /// Adds this album to the gallery
        submit_to_gallery(title: &str) -> bool;
    }
}

impl std::fmt::Display for Album {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.entity)
    }
}

/// Properties used when creating or updating an Album
#[derive(Serialize, Default, Debug, Clone)]
pub struct AlbumProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Image ids making up the album
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,

    /// Id of the cover image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<AlbumLayout>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<AlbumPrivacy>,
}
