/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

/// Environment variable holding the registered application's client id
pub const CLIENT_ID_ENV: &str = "IMGUR_CLIENT_ID";

/// Environment variable holding an OAuth2 access token for a user session
pub const ACCESS_TOKEN_ENV: &str = "IMGUR_ACCESS_TOKEN";

/// Credentials used to build the `Authorization` header.
///
/// Anonymous access only needs the client id of a registered application.
/// Acting as a user requires an OAuth2 access token, obtaining it is left up
/// to the consumer of this library.
#[derive(Default, Clone)]
pub struct Creds {
    client_id: String,
    access_token: Option<String>,
}

impl Creds {
    /// Anonymous (application only) credentials
    pub fn from_client_id(client_id: &str) -> Self {
        Self {
            client_id: client_id.into(),
            access_token: None,
        }
    }

    /// Credentials for an authenticated user session
    pub fn from_access_token(client_id: &str, access_token: &str) -> Self {
        Self {
            client_id: client_id.into(),
            access_token: Some(access_token.into()),
        }
    }

    /// Reads [`CLIENT_ID_ENV`] and, if set, [`ACCESS_TOKEN_ENV`]
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let client_id = std::env::var(CLIENT_ID_ENV)?;
        Ok(match std::env::var(ACCESS_TOKEN_ENV) {
            Ok(token) if !token.is_empty() => Self::from_access_token(&client_id, &token),
            _ => Self::from_client_id(&client_id),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub(crate) fn authorization_header(&self) -> String {
        match &self.access_token {
            Some(token) => format!("Bearer {}", token),
            None => format!("Client-ID {}", self.client_id),
        }
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("client_id", &"xxx")
            .field("access_token", &self.access_token.as_ref().map(|_| "xxx"))
            .finish()
    }
}
