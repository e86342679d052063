/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate imgur;

use anyhow::Result;
use dotenvy::dotenv;
use imgur::v3::{Client, Creds, GalleryEntry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // IMGUR_CLIENT_ID is required, IMGUR_ACCESS_TOKEN is optional
    let client = Client::new(Creds::from_env()?);
    let query = std::env::args().nth(1).unwrap_or_else(|| "cats".to_string());

    for entry in client.search_gallery(&query).await? {
        match entry {
            GalleryEntry::Album(mut gallery_album) => {
                let album = gallery_album.album_mut();
                let title = album.title().await?;
                let count = album.images_count().await?;
                println!("album {} {:?} ({:?} images)", album.id(), title, count);
            }
            GalleryEntry::Image(mut gallery_image) => {
                let image = gallery_image.image_mut();
                let link = image.link().await?;
                println!("image {} {:?}", image.id(), link);
            }
        }
    }
    Ok(())
}
