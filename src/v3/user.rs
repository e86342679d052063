/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::Payload;
use crate::v3::errors::ImgurError;
use crate::v3::macros::{auth_gated_unimplemented, lazy_fields, obj_from_url, objs_from_url};
use crate::v3::{Album, Client, Comment, Entity, EntityKind, GalleryEntry, Image};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::Value;

/// An account, see the [Imgur API Docs](https://apidocs.imgur.com/#account)
/// for details on the individual fields.
///
/// Users are keyed by their username (the `url` field) rather than an id.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub(crate) entity: Entity,
}

impl User {
    /// Returns information for the user at the provided url
    pub async fn from_url(client: Client, url: &str) -> Result<Self, ImgurError> {
        obj_from_url!(client, url, User)
    }

    /// Returns information for the specified username
    pub async fn from_id(client: Client, username: &str) -> Result<Self, ImgurError> {
        Self::from_url(client, &EntityKind::User.info_path(username)).await
    }

    /// A user that is loaded the first time an unknown field is requested
    pub fn stub(client: Client, username: &str) -> Self {
        Self {
            entity: Entity::stub(EntityKind::User, username, client),
        }
    }

    pub(crate) fn from_json(json: Value, client: Client, fully_loaded: bool) -> Result<Self, ImgurError> {
        Entity::new(EntityKind::User, json, client, fully_loaded).map(|entity| Self { entity })
    }

    /// The username
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
        bio: String = "bio";
        reputation: f64 = "reputation";
        created: DateTime<Utc> = "created";
    }

    /// Returns the user's albums. Secret and hidden albums are only returned
    /// for the logged in user.
    pub async fn albums(&self, page: u32) -> Result<Vec<Album>, ImgurError> {
        let url = format!("account/{}/albums/{}", self.id(), page);
        objs_from_url!(self.client(), &url, Album)
    }

    /// Returns the images associated with the user
    pub async fn images(&self, page: u32) -> Result<Vec<Image>, ImgurError> {
        let url = format!("account/{}/images/{}", self.id(), page);
        objs_from_url!(self.client(), &url, Image)
    }

    /// Returns the comments made by the user
    pub async fn comments(&self) -> Result<Vec<Comment>, ImgurError> {
        let url = format!("account/{}/comments", self.id());
        objs_from_url!(self.client(), &url, Comment)
    }

    pub async fn gallery_favorites(&self) -> Result<Vec<Image>, ImgurError> {
        let url = format!("account/{}/gallery_favorites", self.id());
        objs_from_url!(self.client(), &url, Image)
    }

    /// Returns the user's gallery submissions
    pub async fn submissions(&self, page: u32) -> Result<Vec<GalleryEntry>, ImgurError> {
        let url = format!("account/{}/submissions/{}", self.id(), page);
        objs_from_url!(self.client(), &url, GalleryEntry)
    }

    pub async fn gallery_profile(&self) -> Result<Value, ImgurError> {
        let url = format!("account/{}/gallery_profile", self.id());
        self.client().send_request(&url, None, Method::GET).await
    }

    pub async fn statistics(&self) -> Result<Value, ImgurError> {
        let url = format!("account/{}/stats", self.id());
        self.client().send_request(&url, None, Method::GET).await
    }

    pub fn album_count(&self) -> Result<u64, ImgurError> {
        Err(ImgurError::NotImplemented("use albums().len() instead"))
    }

    pub fn album_ids(&self) -> Result<Vec<String>, ImgurError> {
        Err(ImgurError::NotImplemented("use albums() and take the ids"))
    }

    pub fn comment_count(&self) -> Result<u64, ImgurError> {
        Err(ImgurError::NotImplemented("use comments().len() instead"))
    }

    pub fn comment_ids(&self) -> Result<Vec<String>, ImgurError> {
        Err(ImgurError::NotImplemented("use comments() and take the ids"))
    }

    pub fn image_count(&self) -> Result<u64, ImgurError> {
        Err(ImgurError::NotImplemented("use images().len() instead"))
    }

    pub fn image_ids(&self) -> Result<Vec<String>, ImgurError> {
        Err(ImgurError::NotImplemented("use images() and take the ids"))
    }

    auth_gated_unimplemented! {
        change_settings(settings: Payload) -> bool;
        /// Deletes this account
        delete() -> bool;
        /// Returns the images the user favorited
        favorites() -> Vec<Image>;
        has_verified_email() -> bool;
        /// Returns the messages sent to this user
        messages(new: bool) -> Vec<Value>;
        notifications(new: bool) -> Vec<Value>;
        /// Returns the reply notifications for this user
        replies() -> Vec<Comment>;
        /// Sends a message to this user from the logged in user
        send_message(body: &str, subject: Option<&str>, parent_id: Option<&str>) -> bool;
        send_verification_email() -> bool;
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.entity)
    }
}
