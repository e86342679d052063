/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::{AlbumLayout, AlbumPrivacy, Image, User};
use chrono::{DateTime, Utc};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A single value held by an [`Entity`](crate::v3::Entity).
///
/// Mirrors JSON with two extra variants for references to other resources
/// that are replaced with lazily loaded stubs when the entity is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    User(Box<User>),
    Image(Box<Image>),
    List(Vec<Field>),
    Object(BTreeMap<String, Field>),
}

impl Field {
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Field::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Field::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Field::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Field::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Field::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Field::User(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_user_mut(&mut self) -> Option<&mut User> {
        match self {
            Field::User(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Field::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Field]> {
        match self {
            Field::List(l) => Some(l.as_slice()),
            _ => None,
        }
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Field::Null,
            Value::Bool(b) => Field::Bool(b),
            Value::Number(n) => Field::Number(n),
            Value::String(s) => Field::String(s),
            Value::Array(a) => Field::List(a.into_iter().map(Field::from).collect()),
            Value::Object(o) => Field::Object(o.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::String(value.to_string())
    }
}

/// Conversion from a non-null [`Field`] into a typed value.
pub trait FromField: Sized {
    /// Name used in type mismatch errors
    const EXPECTED: &'static str;

    fn from_field(field: &Field) -> Option<Self>;
}

impl FromField for String {
    const EXPECTED: &'static str = "string";

    fn from_field(field: &Field) -> Option<Self> {
        field.as_str().map(str::to_string)
    }
}

impl FromField for bool {
    const EXPECTED: &'static str = "bool";

    fn from_field(field: &Field) -> Option<Self> {
        field.as_bool()
    }
}

impl FromField for u64 {
    const EXPECTED: &'static str = "unsigned integer";

    fn from_field(field: &Field) -> Option<Self> {
        field.as_u64()
    }
}

impl FromField for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_field(field: &Field) -> Option<Self> {
        field.as_i64()
    }
}

impl FromField for f64 {
    const EXPECTED: &'static str = "number";

    fn from_field(field: &Field) -> Option<Self> {
        field.as_f64()
    }
}

// Imgur reports times as seconds since the epoch
impl FromField for DateTime<Utc> {
    const EXPECTED: &'static str = "epoch timestamp";

    fn from_field(field: &Field) -> Option<Self> {
        field.as_i64().and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

// Only holds once every record has been turned into an image
impl FromField for Vec<Image> {
    const EXPECTED: &'static str = "list of images";

    fn from_field(field: &Field) -> Option<Self> {
        field
            .as_list()?
            .iter()
            .map(|f| f.as_image().cloned())
            .collect()
    }
}

macro_rules! from_field_via_str {
    ( $($t:ty => $name:literal),* ) => {
        $(
            impl FromField for $t {
                const EXPECTED: &'static str = $name;

                fn from_field(field: &Field) -> Option<Self> {
                    field.as_str().and_then(|s| <$t>::from_str(s).ok())
                }
            }
        )*
    };
}

from_field_via_str!(AlbumPrivacy => "album privacy", AlbumLayout => "album layout");
