/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::fields::{Field, FromField};
use crate::v3::{Client, Image, User};
use log::debug;
use reqwest::Method;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use strum_macros::Display;

/// The resource an [`Entity`] represents.
///
/// Decides the endpoint used to (re)load the entity and which fields are
/// turned into references to other entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EntityKind {
    Album,
    Image,
    User,
    Comment,
    GalleryAlbum,
    GalleryImage,
}

impl EntityKind {
    /// The JSON member identifying an entity of this kind
    pub fn key_field(self) -> &'static str {
        match self {
            EntityKind::User => "url",
            _ => "id",
        }
    }

    /// Endpoint returning the full representation of the entity
    pub(crate) fn info_path(self, key: &str) -> String {
        match self {
            EntityKind::Album => format!("album/{}", key),
            EntityKind::Image => format!("image/{}", key),
            EntityKind::User => format!("account/{}", key),
            EntityKind::Comment => format!("comment/{}", key),
            EntityKind::GalleryAlbum => format!("gallery/album/{}", key),
            EntityKind::GalleryImage => format!("gallery/image/{}", key),
        }
    }

    // Field holding the username of a related account, if this kind has one
    fn user_reference(self) -> Option<&'static str> {
        match self {
            EntityKind::Album | EntityKind::GalleryAlbum => Some("account_url"),
            EntityKind::Comment => Some("author"),
            _ => None,
        }
    }

    fn holds_images(self) -> bool {
        matches!(self, EntityKind::Album | EntityKind::GalleryAlbum)
    }
}

/// A single API resource backed by an open ended set of fields.
///
/// An entity is either fully loaded from a response or a stub holding only
/// what was known when it was created. Looking up a field a stub does not hold
/// loads the full representation once, after which the entity is fully loaded
/// and further misses fail with [`ImgurError::FieldNotFound`] without touching
/// the network.
#[derive(Clone, Debug)]
pub struct Entity {
    client: Client,
    kind: EntityKind,
    key: String,
    fields: BTreeMap<String, Field>,
    fully_loaded: bool,
}

impl Entity {
    /// Builds an entity from a JSON object which must contain the kind's key field
    pub fn new(
        kind: EntityKind,
        json: Value,
        client: Client,
        fully_loaded: bool,
    ) -> Result<Self, ImgurError> {
        let missing_key = || ImgurError::MissingKey {
            kind,
            key: kind.key_field(),
        };
        let Value::Object(map) = json else {
            return Err(missing_key());
        };
        let key = match map.get(kind.key_field()) {
            Some(Value::String(s)) => s.clone(),
            // Comment ids are numeric
            Some(Value::Number(n)) => n.to_string(),
            _ => return Err(missing_key()),
        };

        let mut entity = Self {
            client,
            kind,
            key,
            fields: BTreeMap::new(),
            fully_loaded,
        };
        entity.populate(map);
        Ok(entity)
    }

    /// Builds an entity that only knows its key
    pub fn stub(kind: EntityKind, key: &str, client: Client) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(kind.key_field().to_string(), Field::from(key));
        Self {
            client,
            kind,
            key: key.to_string(),
            fields,
            fully_loaded: false,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The id, or the username for users
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn is_fully_loaded(&self) -> bool {
        self.fully_loaded
    }

    /// Fields currently held, without loading anything
    pub fn fields(&self) -> &BTreeMap<String, Field> {
        &self.fields
    }

    /// Looks up a field without loading anything
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub(crate) fn set_field(&mut self, name: &str, value: Field) {
        self.fields.insert(name.to_string(), value);
    }

    /// Looks up a field, loading the full representation first if the field is
    /// missing and the entity has not been loaded yet.
    ///
    /// At most one refresh happens per lookup. `Ok(None)` means the field is
    /// not part of the resource.
    pub async fn try_get_field_mut(&mut self, name: &str) -> Result<Option<&mut Field>, ImgurError> {
        if !self.fields.contains_key(name) && !self.fully_loaded {
            debug!("{} missing '{}', loading", self, name);
            self.refresh().await?;
        }
        Ok(self.fields.get_mut(name))
    }

    /// See [`Entity::try_get_field_mut`]
    pub async fn try_get_field(&mut self, name: &str) -> Result<Option<&Field>, ImgurError> {
        Ok(self.try_get_field_mut(name).await?.map(|f| &*f))
    }

    /// Like [`Entity::try_get_field`] but a missing field is an error
    pub async fn get_field(&mut self, name: &str) -> Result<&Field, ImgurError> {
        Ok(&*self.get_field_mut(name).await?)
    }

    pub async fn get_field_mut(&mut self, name: &str) -> Result<&mut Field, ImgurError> {
        let kind = self.kind;
        self.try_get_field_mut(name)
            .await?
            .ok_or_else(|| ImgurError::FieldNotFound {
                kind,
                field: name.to_string(),
            })
    }

    /// Looks up a field and converts it. A JSON `null` is returned as `None`.
    pub async fn get_typed<T: FromField>(&mut self, name: &str) -> Result<Option<T>, ImgurError> {
        let field = self.get_field(name).await?;
        if field.is_null() {
            return Ok(None);
        }
        T::from_field(field)
            .map(Some)
            .ok_or_else(|| ImgurError::FieldType {
                field: name.to_string(),
                expected: T::EXPECTED,
            })
    }

    /// Loads the full representation and merges it into the held fields
    pub async fn refresh(&mut self) -> Result<(), ImgurError> {
        let path = self.kind.info_path(&self.key);
        let json = self.client.send_request(&path, None, Method::GET).await?;
        let Value::Object(map) = json else {
            return Err(ImgurError::ResponseMissing());
        };
        self.populate(map);
        self.fully_loaded = true;
        Ok(())
    }

    fn populate(&mut self, map: Map<String, Value>) {
        for (name, value) in map {
            let field = self.link_field(&name, value);
            self.fields.insert(name, field);
        }
    }

    // Usernames of related accounts become lazily loaded users and album image
    // records become images. A user already held under the same name is kept
    // along with whatever it has loaded.
    fn link_field(&mut self, name: &str, value: Value) -> Field {
        match value {
            Value::String(username) if self.kind.user_reference() == Some(name) => {
                match self.fields.remove(name) {
                    Some(Field::User(user)) if user.id() == username => Field::User(user),
                    _ => Field::User(Box::new(User::stub(self.client.clone(), &username))),
                }
            }
            Value::Array(items) if name == "images" && self.kind.holds_images() => {
                Field::List(items.into_iter().map(|item| self.image_field(item)).collect())
            }
            other => other.into(),
        }
    }

    fn image_field(&self, item: Value) -> Field {
        let Some(id) = item.get("id").and_then(Value::as_str).map(str::to_string) else {
            return item.into();
        };
        let image = Image::from_json(item, self.client.clone(), true)
            .unwrap_or_else(|_| Image::stub(self.client.clone(), &id));
        Field::Image(Box::new(image))
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.key == other.key
            && self.fully_loaded == other.fully_loaded
            && self.fields == other.fields
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "<{} {}>", self.kind, self.key)
    }
}
