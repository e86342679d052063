/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

macro_rules! obj_from_url {
    ( $c:expr, $url:expr, $rt:ty ) => {{
        let json = $c
            .send_request($url, None, reqwest::Method::GET)
            .await?;
        <$rt>::from_json(json, $c.clone(), true)
    }};
}

macro_rules! objs_from_url {
    ( $c:expr, $url:expr, $rt:ty ) => {{
        let json = $c
            .send_request($url, None, reqwest::Method::GET)
            .await?;
        crate::v3::api::into_array(json)?
            .into_iter()
            .map(|item| <$rt>::from_json(item, $c.clone(), true))
            .collect::<Result<Vec<$rt>, ImgurError>>()
    }};
}

// Typed accessors that load the entity on first use
macro_rules! lazy_fields {
    ( $( $(#[$m:meta])* $name:ident : $t:ty = $key:literal; )* ) => {
        $(
            $(#[$m])*
            pub async fn $name(&mut self) -> Result<Option<$t>, ImgurError> {
                self.entity.get_typed::<$t>($key).await
            }
        )*
    };
}

// Operations that need a logged in user but whose request shape is unconfirmed
macro_rules! auth_gated_unimplemented {
    ( $( $(#[$m:meta])* $name:ident ( $($arg:ident : $t:ty),* ) -> $rt:ty; )* ) => {
        $(
            $(#[$m])*
            pub async fn $name(&self, $(_: $t),*) -> Result<$rt, ImgurError> {
                self.client().require_auth(stringify!($name))?;
                Err(ImgurError::NotImplemented(stringify!($name)))
            }
        )*
    };
}

pub(crate) use {auth_gated_unimplemented, lazy_fields, obj_from_url, objs_from_url};
