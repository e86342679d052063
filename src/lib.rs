/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Imgur
//!
//! A library for working with the Imgur API v3.
//!
//! For further details on the Rest API refer to the [Imgur API Docs](https://apidocs.imgur.com/)
//!
//! ## Features
//!
//! - Albums, images, users and comments as lazily loaded entities
//!     - An entity built from an id only loads its full representation the first
//!       time a field it doesn't hold is requested
//!     - Account names of album owners and comment authors are turned into
//!       lazily loaded users
//! - Album/Image update and delete through their deletehash
//! - Image upload and album creation
//! - Gallery listing, searching and subreddit galleries
//! - Lower level interface for handling the raw communication
//!
//! *Anonymous access only needs the Client ID of a registered application.
//! Actions on behalf of a user need an OAuth2 access token. Getting the token is
//! left up to the consumer of this library*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! imgur = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use imgur::v3::{Client, Creds, GalleryEntry, GalleryQuery};
//!
//! async fn print_gallery(client_id: &str) -> Result<(), imgur::v3::ImgurError> {
//!     let client = Client::new(Creds::from_client_id(client_id));
//!
//!     for entry in client.get_gallery(&GalleryQuery::default()).await? {
//!         match entry {
//!             GalleryEntry::Album(mut album) => {
//!                 let album = album.album_mut();
//!                 let title = album.title().await?;
//!                 println!("album {}: {:?}", album.id(), title);
//!
//!                 // Loads the owner's account on first use
//!                 if let Some(owner) = album.account().await? {
//!                     let reputation = owner.reputation().await?;
//!                     println!("  by {} ({:?})", owner.id(), reputation);
//!                 }
//!             }
//!             GalleryEntry::Image(image) => println!("image {}", image.id()),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod v3;
