/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v3::api::{API_ORIGIN, API_VERSION_PATH, ApiRequest, HttpTransport, Payload, Transport, to_payload};
use crate::v3::errors::ImgurError;
use crate::v3::macros::objs_from_url;
use crate::v3::{Album, AlbumProps, Comment, Creds, GalleryEntry, GalleryQuery, GallerySort, GalleryWindow, Image, User};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use url::Url;

/// Shared session used by every entity.
///
/// Cloning is cheap, all clones share the same credentials and transport.
///
/// ```rust,no_run
/// use imgur::v3::{Client, Creds};
///
/// # async fn run() -> Result<(), imgur::v3::ImgurError> {
/// let client = Client::new(Creds::from_client_id("my-client-id"));
/// let mut album = client.get_album("lDRB2").await?;
/// println!("{:?}", album.title().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    session: Arc<Session>,
}

struct Session {
    creds: Creds,
    origin: String,
    transport: Arc<dyn Transport>,
    rate_limits: RateLimits,
}

/// Rate limit counters reported by the API.
///
/// Currently never populated: the service stopped reliably returning the
/// `X-RateLimit-*` headers, so the values stay `None`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RateLimits {
    pub client_limit: Option<u64>,
    pub client_remaining: Option<u64>,
    pub user_limit: Option<u64>,
    pub user_remaining: Option<u64>,
    pub user_reset: Option<u64>,
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self::with_origin(creds, API_ORIGIN)
    }

    /// Uses `origin` in place of [`API_ORIGIN`], e.g. for a proxy
    pub fn with_origin(creds: Creds, origin: &str) -> Self {
        Self::with_transport(creds, origin, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(creds: Creds, origin: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            session: Arc::new(Session {
                creds,
                origin: origin.to_string(),
                transport,
                rate_limits: RateLimits::default(),
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.creds.is_authenticated()
    }

    pub fn rate_limits(&self) -> &RateLimits {
        &self.session.rate_limits
    }

    /// Fails without any I/O unless acting as a logged in user
    pub(crate) fn require_auth(&self, operation: &'static str) -> Result<(), ImgurError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(ImgurError::AuthenticationRequired(operation))
        }
    }

    /// Resolves an endpoint relative to the API root. Absolute urls are kept as is.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ImgurError> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }
        Ok(Url::parse(&self.session.origin)?
            .join(API_VERSION_PATH)?
            .join(path)?)
    }

    /// Sends a request with the authorization header added and returns the
    /// `data` member of the response.
    pub async fn send_request(
        &self,
        url: &str,
        params: Option<Payload>,
        method: Method,
    ) -> Result<Value, ImgurError> {
        let request = ApiRequest {
            method,
            url: self.endpoint(url)?,
            payload: params,
            authorization: self.session.creds.authorization_header(),
        };
        self.session.transport.send(request).await
    }

    /// Is the given url an imgur url?
    pub fn is_imgur_url(&self, url: &str) -> bool {
        is_imgur_url(url)
    }

    /// Returns information for the specified album id
    pub async fn get_album(&self, id: &str) -> Result<Album, ImgurError> {
        Album::from_id(self.clone(), id).await
    }

    /// Returns information for the specified image id
    pub async fn get_image(&self, id: &str) -> Result<Image, ImgurError> {
        Image::from_id(self.clone(), id).await
    }

    /// Returns information for the specified comment id
    pub async fn get_comment(&self, id: &str) -> Result<Comment, ImgurError> {
        Comment::from_id(self.clone(), id).await
    }

    /// Returns information for the specified username
    pub async fn get_user(&self, username: &str) -> Result<User, ImgurError> {
        User::from_id(self.clone(), username).await
    }

    /// Returns whatever resource lives at an imgur url
    pub async fn get_at_url(&self, _url: &str) -> Result<GalleryEntry, ImgurError> {
        Err(ImgurError::NotImplemented("resolving resources from an imgur url"))
    }

    /// Creates a new album. The returned album is loaded lazily since the
    /// response only holds its id and deletehash.
    pub async fn create_album(&self, props: AlbumProps) -> Result<Album, ImgurError> {
        let payload = to_payload(&props)?;
        let json = self.send_request("album", Some(payload), Method::POST).await?;
        Album::from_json(json, self.clone(), false)
    }

    /// Uploads the image at `path`.
    ///
    /// The file is read with blocking I/O before the request is sent. Large
    /// files should be uploaded from a context that may block, such as
    /// `tokio::task::spawn_blocking`.
    pub async fn upload_image(
        &self,
        path: impl AsRef<Path>,
        title: Option<&str>,
        description: Option<&str>,
        album_id: Option<&str>,
    ) -> Result<Image, ImgurError> {
        let path = path.as_ref();
        debug!("uploading {}", path.display());
        let image = STANDARD.encode(std::fs::read(path)?);
        let payload = to_payload(&UploadProps {
            image,
            encoding: "base64",
            title,
            description,
            album: album_id,
        })?;
        let json = self.send_request("image", Some(payload), Method::POST).await?;
        Image::from_json(json, self.clone(), false)
    }

    /// Returns the albums and images in the main gallery
    pub async fn get_gallery(&self, query: &GalleryQuery) -> Result<Vec<GalleryEntry>, ImgurError> {
        let url = format!(
            "gallery/{}/{}/{}/{}?showViral={}",
            query.section, query.sort, query.window, query.page, query.show_viral
        );
        objs_from_url!(self, &url, GalleryEntry)
    }

    /// Searches the gallery with the given query string
    pub async fn search_gallery(&self, q: &str) -> Result<Vec<GalleryEntry>, ImgurError> {
        let url = format!("gallery/search?q={}", urlencoding::encode(q));
        objs_from_url!(self, &url, GalleryEntry)
    }

    /// Returns the gallery of a subreddit
    pub async fn get_subreddit_gallery(
        &self,
        subreddit: &str,
        sort: GallerySort,
        window: GalleryWindow,
        page: u32,
    ) -> Result<Vec<GalleryEntry>, ImgurError> {
        let url = format!(
            "gallery/r/{}/{}/{}/{}",
            urlencoding::encode(subreddit),
            sort,
            window,
            page
        );
        objs_from_url!(self, &url, GalleryEntry)
    }

    /// Creates an account for `username`
    pub async fn create_account(&self, _username: &str) -> Result<User, ImgurError> {
        self.require_auth("create_account")?;
        Err(ImgurError::NotImplemented("account creation"))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("creds", &self.session.creds)
            .field("origin", &self.session.origin)
            .finish()
    }
}

/// Is the given url an imgur url?
///
/// Matches `imgur.com`, optionally preceded by a scheme and `www.`, ignoring case.
pub fn is_imgur_url(url: &str) -> bool {
    let url = url.to_ascii_lowercase();
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(&url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.starts_with("imgur.com")
}

// Payload for an image upload
#[derive(Serialize)]
struct UploadProps<'a> {
    image: String,

    #[serde(rename = "type")]
    encoding: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    album: Option<&'a str>,
}
