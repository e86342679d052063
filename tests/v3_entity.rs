/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{SpyTransport, anonymous_client, init_logging};
    use imgur::v3::{Album, Entity, EntityKind, Field, Image, ImgurError, User};
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn stub_loads_once_on_missing_field() {
        init_logging();
        let spy = SpyTransport::new();
        spy.respond(
            Method::GET,
            "/3/album/abc",
            json!({"id": "abc", "title": "Holiday", "views": 12}),
        );
        let mut album = Album::stub(anonymous_client(&spy), "abc");
        assert!(!album.entity().is_fully_loaded());

        assert_eq!(album.title().await.unwrap(), Some("Holiday".to_string()));
        assert_eq!(spy.call_count(), 1);
        assert!(album.entity().is_fully_loaded());

        // Cached from here on
        assert_eq!(album.views().await.unwrap(), Some(12));
        assert_eq!(spy.call_count(), 1);
    }

    #[tokio::test]
    async fn stub_refreshes_at_most_once_for_absent_field() {
        let spy = SpyTransport::new();
        spy.respond(Method::GET, "/3/image/xyz", json!({"id": "xyz", "width": 10}));
        let mut image = Image::stub(anonymous_client(&spy), "xyz");

        let err = image.entity_mut().get_field("no_such_field").await.unwrap_err();
        assert!(matches!(
            err,
            ImgurError::FieldNotFound { kind: EntityKind::Image, ref field } if field == "no_such_field"
        ));
        assert_eq!(spy.call_count(), 1);

        // Loaded now, so another miss doesn't go back to the network
        assert!(image.entity_mut().try_get_field("other").await.unwrap().is_none());
        assert_eq!(spy.call_count(), 1);
        assert_eq!(image.width().await.unwrap(), Some(10));
    }

    #[tokio::test]
    async fn fully_loaded_miss_does_no_io() {
        let spy = SpyTransport::new();
        spy.respond(Method::GET, "/3/album/abc", json!({"id": "abc", "title": null}));
        let client = anonymous_client(&spy);
        let mut album = client.get_album("abc").await.unwrap();
        assert_eq!(spy.call_count(), 1);
        assert!(album.entity().is_fully_loaded());

        let err = album.description().await.unwrap_err();
        assert!(matches!(err, ImgurError::FieldNotFound { .. }));
        assert_eq!(spy.call_count(), 1);

        // Present but null
        assert_eq!(album.title().await.unwrap(), None);
    }

    #[tokio::test]
    async fn peeking_never_loads() {
        let spy = SpyTransport::new();
        let album = Album::stub(anonymous_client(&spy), "abc");
        assert_eq!(album.entity().field("id"), Some(&Field::from("abc")));
        assert!(album.entity().field("title").is_none());
        assert!(album.deletehash().is_none());
        assert_eq!(spy.call_count(), 0);
    }

    #[tokio::test]
    async fn failed_refresh_propagates_and_stays_unloaded() {
        let spy = SpyTransport::new();
        let mut album = Album::stub(anonymous_client(&spy), "missing");

        let err = album.title().await.unwrap_err();
        assert!(matches!(err, ImgurError::ApiResponse(404, _)));
        assert!(!album.entity().is_fully_loaded());
        assert_eq!(spy.call_count(), 1);
    }

    #[tokio::test]
    async fn refresh_merges_into_existing_fields() {
        let spy = SpyTransport::new();
        spy.respond(Method::GET, "/3/image/xyz", json!({"id": "xyz", "title": "new"}));
        let mut image = Entity::new(
            EntityKind::Image,
            json!({"id": "xyz", "title": "old", "deletehash": "secret"}),
            anonymous_client(&spy),
            false,
        )
        .unwrap();

        image.refresh().await.unwrap();
        assert!(image.is_fully_loaded());
        assert_eq!(image.field("title"), Some(&Field::from("new")));
        assert_eq!(image.field("deletehash"), Some(&Field::from("secret")));
    }

    #[tokio::test]
    async fn wrong_type_is_reported() {
        let spy = SpyTransport::new();
        spy.respond(Method::GET, "/3/image/xyz", json!({"id": "xyz", "width": "wide"}));
        let client = anonymous_client(&spy);
        let mut image = client.get_image("xyz").await.unwrap();

        let err = image.width().await.unwrap_err();
        assert!(matches!(
            err,
            ImgurError::FieldType { ref field, expected: "unsigned integer" } if field == "width"
        ));
    }

    #[tokio::test]
    async fn album_owner_becomes_lazy_user() {
        let spy = SpyTransport::new();
        spy.respond(
            Method::GET,
            "/3/album/abc",
            json!({"id": "abc", "account_url": "bob"}),
        );
        spy.respond(
            Method::GET,
            "/3/account/bob",
            json!({"url": "bob", "bio": "hello", "reputation": 42}),
        );
        let client = anonymous_client(&spy);
        let mut album = client.get_album("abc").await.unwrap();

        match album.entity().field("account_url") {
            Some(Field::User(user)) => {
                assert_eq!(user.id(), "bob");
                assert!(!user.entity().is_fully_loaded());
            }
            other => panic!("expected a user, got {:?}", other),
        }
        assert_eq!(spy.call_count(), 1);

        let owner = album.account().await.unwrap().unwrap();
        assert_eq!(owner.bio().await.unwrap(), Some("hello".to_string()));
        assert_eq!(owner.reputation().await.unwrap(), Some(42.0));
        assert_eq!(spy.call_count(), 2);
    }

    #[tokio::test]
    async fn anonymous_album_has_no_owner() {
        let spy = SpyTransport::new();
        spy.respond(Method::GET, "/3/album/abc", json!({"id": "abc", "account_url": null}));
        let mut album = anonymous_client(&spy).get_album("abc").await.unwrap();
        assert!(album.account().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn comment_author_becomes_lazy_user() {
        let spy = SpyTransport::new();
        spy.respond(
            Method::GET,
            "/3/comment/123",
            json!({"id": 123, "author": "alice", "comment": "nice"}),
        );
        let client = anonymous_client(&spy);
        let mut comment = client.get_comment("123").await.unwrap();

        // Numeric ids are kept as strings
        assert_eq!(comment.id(), "123");
        assert_eq!(comment.comment().await.unwrap(), Some("nice".to_string()));

        let author = comment.author().await.unwrap().unwrap();
        assert_eq!(author, &User::stub(client.clone(), "alice"));
    }

    #[tokio::test]
    async fn comment_stub_links_author_after_loading() {
        let spy = SpyTransport::new();
        spy.respond(Method::GET, "/3/comment/5", json!({"id": 5, "author": "carol"}));
        let mut comment = imgur::v3::Comment::stub(anonymous_client(&spy), "5");

        let author = comment.author().await.unwrap().unwrap();
        assert_eq!(author.id(), "carol");
        assert!(!author.entity().is_fully_loaded());
        assert_eq!(spy.call_count(), 1);
    }

    #[tokio::test]
    async fn image_fields_are_not_linked() {
        let spy = SpyTransport::new();
        let image = Entity::new(
            EntityKind::Image,
            json!({"id": "xyz", "account_url": "bob"}),
            anonymous_client(&spy),
            true,
        )
        .unwrap();
        assert_eq!(image.field("account_url"), Some(&Field::from("bob")));
    }

    #[tokio::test]
    async fn missing_key_is_rejected() {
        let spy = SpyTransport::new();
        spy.respond(Method::GET, "/3/album/abc", json!({"title": "no id"}));
        let err = anonymous_client(&spy).get_album("abc").await.unwrap_err();
        assert!(matches!(
            err,
            ImgurError::MissingKey { kind: EntityKind::Album, key: "id" }
        ));

        let err = Entity::new(EntityKind::User, json!({"id": "1"}), anonymous_client(&spy), true)
            .unwrap_err();
        assert!(matches!(err, ImgurError::MissingKey { key: "url", .. }));
    }

    #[tokio::test]
    async fn display_names_kind_and_key() {
        let spy = SpyTransport::new();
        let client = anonymous_client(&spy);
        assert_eq!(Album::stub(client.clone(), "abc").to_string(), "<Album abc>");
        assert_eq!(User::stub(client, "bob").to_string(), "<User bob>");
    }

    #[tokio::test]
    async fn datetimes_are_epoch_seconds() {
        let spy = SpyTransport::new();
        spy.respond(Method::GET, "/3/image/xyz", json!({"id": "xyz", "datetime": 1_700_000_000}));
        let mut image = anonymous_client(&spy).get_image("xyz").await.unwrap();
        let when = image.datetime().await.unwrap().unwrap();
        assert_eq!(when.timestamp(), 1_700_000_000);
    }

    #[tokio::test]
    async fn album_image_records_become_images() {
        let spy = SpyTransport::new();
        spy.respond(
            Method::GET,
            "/3/album/abc",
            json!({"id": "abc", "images": [
                {"id": "i1", "title": "first"},
                {"id": "i2", "title": "second"}
            ]}),
        );
        let mut album = anonymous_client(&spy).get_album("abc").await.unwrap();

        let mut images = album.image_list().await.unwrap().unwrap();
        let ids: Vec<&str> = images.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["i1", "i2"]);
        assert!(images[0].entity().is_fully_loaded());
        assert_eq!(images[1].title().await.unwrap(), Some("second".to_string()));
        assert_eq!(spy.call_count(), 1);

        let typed = album.entity_mut().get_typed::<Vec<Image>>("images").await.unwrap();
        assert_eq!(typed.map(|v| v.len()), Some(2));
    }

    #[tokio::test]
    async fn image_records_without_id_stay_plain() {
        let spy = SpyTransport::new();
        let mut entity = Entity::new(
            EntityKind::GalleryAlbum,
            json!({"id": "abc", "images": [{"id": "i1"}, {"link": "no id"}]}),
            anonymous_client(&spy),
            true,
        )
        .unwrap();

        let images = entity.field("images").and_then(Field::as_list).unwrap();
        assert_eq!(images[0].as_image().map(|i| i.id()), Some("i1"));
        assert!(matches!(images[1], Field::Object(_)));

        let err = entity.get_typed::<Vec<Image>>("images").await.unwrap_err();
        assert!(matches!(err, ImgurError::FieldType { expected: "list of images", .. }));
        assert_eq!(spy.call_count(), 0);
    }

    #[tokio::test]
    async fn refresh_keeps_loaded_owner() {
        let spy = SpyTransport::new();
        spy.respond(Method::GET, "/3/album/abc", json!({"id": "abc", "account_url": "bob"}));
        spy.respond(Method::GET, "/3/account/bob", json!({"url": "bob", "bio": "hello"}));
        let mut album = anonymous_client(&spy).get_album("abc").await.unwrap();

        let owner = album.account().await.unwrap().unwrap();
        assert_eq!(owner.bio().await.unwrap(), Some("hello".to_string()));
        assert_eq!(spy.call_count(), 2);

        album.entity_mut().refresh().await.unwrap();
        assert_eq!(spy.call_count(), 3);

        let owner = album.account().await.unwrap().unwrap();
        assert!(owner.entity().is_fully_loaded());
        assert_eq!(owner.bio().await.unwrap(), Some("hello".to_string()));
        assert_eq!(spy.call_count(), 3);
    }

    #[tokio::test]
    async fn refresh_replaces_owner_when_username_changes() {
        let spy = SpyTransport::new();
        spy.respond(Method::GET, "/3/comment/5", json!({"id": 5, "author": "carol"}));
        let mut comment = imgur::v3::Comment::stub(anonymous_client(&spy), "5");
        assert_eq!(comment.author().await.unwrap().unwrap().id(), "carol");

        spy.respond(Method::GET, "/3/comment/5", json!({"id": 5, "author": "dave"}));
        comment.entity_mut().refresh().await.unwrap();
        let author = comment.author().await.unwrap().unwrap();
        assert_eq!(author.id(), "dave");
        assert!(!author.entity().is_fully_loaded());
    }
}
