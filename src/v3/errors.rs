/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v3::{ApiStatusCodes, EntityKind};
use num_enum::TryFromPrimitiveError;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum ImgurError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Expected response missing")]
    ResponseMissing(),

    #[error("API Response was error: {0}, msg: {1}")]
    ApiResponse(u16, String),

    #[error("API Response status code is invalid")]
    ApiResponseCode(#[from] TryFromPrimitiveError<ApiStatusCodes>),

    #[error("Failed serializing to JSON: {0}")]
    JsonSerialization(String),

    #[error("Login required to use {0}")]
    AuthenticationRequired(&'static str),

    #[error("{kind} instance has no field '{field}'")]
    FieldNotFound { kind: EntityKind, field: String },

    #[error("Field '{field}' is not a {expected}")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    #[error("{kind} JSON is missing its '{key}' field")]
    MissingKey { kind: EntityKind, key: &'static str },

    #[error("{0} has no deletehash")]
    DeleteHashMissing(EntityKind),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}
