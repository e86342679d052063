/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::to_payload;
use crate::v3::errors::ImgurError;
use crate::v3::macros::{auth_gated_unimplemented, lazy_fields, obj_from_url};
use crate::v3::{Client, Entity, EntityKind, Field};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// An image, see the [Imgur API Docs](https://apidocs.imgur.com/#image) for
/// details on the individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub(crate) entity: Entity,
}

impl Image {
    /// Returns information for the image at the provided url
    pub async fn from_url(client: Client, url: &str) -> Result<Self, ImgurError> {
        obj_from_url!(client, url, Image)
    }

    /// Returns information for the specified image id
    pub async fn from_id(client: Client, id: &str) -> Result<Self, ImgurError> {
        Self::from_url(client, &EntityKind::Image.info_path(id)).await
    }

    /// An image that is loaded the first time an unknown field is requested
    pub fn stub(client: Client, id: &str) -> Self {
        Self::from_entity(Entity::stub(EntityKind::Image, id, client))
    }

    pub(crate) fn from_json(json: Value, client: Client, fully_loaded: bool) -> Result<Self, ImgurError> {
        Entity::new(EntityKind::Image, json, client, fully_loaded).map(Self::from_entity)
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
        /// MIME type, e.g. `image/png`
        mime_type: String = "type";
        animated: bool = "animated";
        width: u64 = "width";
        height: u64 = "height";
        /// Size in bytes
        size: u64 = "size";
        views: u64 = "views";
        bandwidth: u64 = "bandwidth";
        nsfw: bool = "nsfw";
        link: String = "link";
    }

    /// Only known for images uploaded by this session, never loaded from the API
    pub fn deletehash(&self) -> Option<&str> {
        self.entity.field("deletehash").and_then(Field::as_str)
    }

    /// Deletes the image using its deletehash
    pub async fn delete(&self) -> Result<bool, ImgurError> {
        let deletehash = self
            .deletehash()
            .ok_or(ImgurError::DeleteHashMissing(self.entity.kind()))?;
        let url = format!("image/{}", deletehash);
        let resp = self.client().send_request(&url, None, Method::DELETE).await?;
        Ok(resp.as_bool().unwrap_or(false))
    }

    /// Sets a new title and/or description. Local fields only change once the
    /// API reports success.
    pub async fn update(
        &mut self,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<bool, ImgurError> {
        let deletehash = self
            .deletehash()
            .ok_or(ImgurError::DeleteHashMissing(self.entity.kind()))?;
        let url = format!("image/{}", deletehash);
        let payload = to_payload(&ImageUpdateProps { title, description })?;
        let is_updated = self
            .client()
            .send_request(&url, Some(payload), Method::POST)
            .await?
            .as_bool()
            .unwrap_or(false);
        if is_updated {
            if let Some(title) = title {
                self.entity.set_field("title", Field::from(title));
            }
            if let Some(description) = description {
                self.entity.set_field("description", Field::from(description));
            }
        }
        Ok(is_updated)
    }

    auth_gated_unimplemented! {
        favorite() -> bool;
        /// Adds this image to the gallery
        submit_to_gallery(title: &str) -> bool;
        /// Removes this image from the gallery
        remove_from_gallery() -> bool;
    }
}

impl std::fmt::Display for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.entity)
    }
}

#[derive(Serialize, Debug)]
struct ImageUpdateProps<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}
