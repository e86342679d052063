/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

mod macros;
pub mod api;
pub mod creds;
pub mod client;
pub mod entity;
pub mod fields;
pub mod album;
pub mod image;
pub mod user;
pub mod comment;
pub mod gallery;
pub mod properties;
pub mod errors;

pub use album::*;
pub use api::*;
pub use client::*;
pub use comment::*;
pub use creds::*;
pub use entity::*;
pub use errors::*;
pub use fields::*;
pub use gallery::*;
pub use image::*;
pub use properties::*;
pub use user::*;
