/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::into_array;
use crate::v3::errors::ImgurError;
use crate::v3::macros::{auth_gated_unimplemented, lazy_fields, obj_from_url};
use crate::v3::{Client, Entity, EntityKind, User};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::Value;

/// A comment on a gallery item, see the
/// [Imgur API Docs](https://apidocs.imgur.com/#comment).
///
/// The `author` field is held as a lazily loaded [`User`].
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub(crate) entity: Entity,
}

impl Comment {
    /// Returns information for the comment at the provided url
    pub async fn from_url(client: Client, url: &str) -> Result<Self, ImgurError> {
        obj_from_url!(client, url, Comment)
    }

    /// Returns information for the specified comment id
    pub async fn from_id(client: Client, id: &str) -> Result<Self, ImgurError> {
        Self::from_url(client, &EntityKind::Comment.info_path(id)).await
    }

    /// A comment that is loaded the first time an unknown field is requested
    pub fn stub(client: Client, id: &str) -> Self {
        Self {
            entity: Entity::stub(EntityKind::Comment, id, client),
        }
    }

    pub(crate) fn from_json(json: Value, client: Client, fully_loaded: bool) -> Result<Self, ImgurError> {
        Entity::new(EntityKind::Comment, json, client, fully_loaded).map(|entity| Self { entity })
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
        /// The comment text
        comment: String = "comment";
        /// Id of the image commented on
        image_id: String = "image_id";
        ups: u64 = "ups";
        downs: u64 = "downs";
        points: i64 = "points";
        datetime: DateTime<Utc> = "datetime";
        /// Id of the comment replied to, `0` for top level comments
        parent_id: u64 = "parent_id";
        on_album: bool = "on_album";
    }

    /// The account that wrote this comment
    pub async fn author(&mut self) -> Result<Option<&mut User>, ImgurError> {
        let field = self.entity.get_field_mut("author").await?;
        if field.is_null() {
            return Ok(None);
        }
        field.as_user_mut().map(Some).ok_or_else(|| ImgurError::FieldType {
            field: "author".to_string(),
            expected: "user",
        })
    }

    /// Returns the replies to this comment
    pub async fn replies(&self) -> Result<Vec<Comment>, ImgurError> {
        let url = format!("comment/{}/replies", self.id());
        let mut json = self.client().send_request(&url, None, Method::GET).await?;
        let children = json
            .get_mut("children")
            .map(Value::take)
            .ok_or(ImgurError::ResponseMissing())?;
        into_array(children)?
            .into_iter()
            .map(|child| Comment::from_json(child, self.client().clone(), true))
            .collect()
    }

    /// Replies to this comment.
    ///
    /// Whether a reply targets the image or this comment is unresolved
    /// upstream, so this is not wired to the API yet.
    pub async fn reply(&self, _image_id: &str, _text: &str) -> Result<Comment, ImgurError> {
        Err(ImgurError::NotImplemented("replying to a comment"))
    }

    auth_gated_unimplemented! {
        /// Deletes the comment
        delete() -> bool;
        upvote() -> bool;
        downvote() -> bool;
        /// Reports the comment for being inappropriate
        report() -> bool;
    }
}

impl std::fmt::Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.entity)
    }
}
