/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

#[derive(Debug, Default, Clone, Copy, PartialEq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum GallerySection {
    #[default]
    Hot,
    Top,
    User,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum GallerySort {
    #[default]
    Viral,
    Top,
    Time,
    Rising,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum GalleryWindow {
    #[default]
    Day,
    Week,
    Month,
    Year,
    All,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlbumPrivacy {
    Public,
    Hidden,
    Secret,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlbumLayout {
    Blog,
    Grid,
    Horizontal,
    Vertical,
}

/// Options for listing the main gallery
#[derive(Debug, Clone)]
pub struct GalleryQuery {
    pub section: GallerySection,
    pub sort: GallerySort,
    pub window: GalleryWindow,
    pub page: u32,
    pub show_viral: bool,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            section: GallerySection::default(),
            sort: GallerySort::default(),
            window: GalleryWindow::default(),
            page: 0,
            show_viral: true,
        }
    }
}
