//! Integration tests for the Rhymic server client against a mock server.

use rhymic_client::{
    CatalogStore, ClientConfig, ClientError, LikeStatus, RhymicClient,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn song_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "artist": "Test Artist",
        "src": format!("/assets/music/{id}.mp3"),
        "cover": format!("/assets/covers/{id}.jpg"),
    })
}

fn client_for(server: &MockServer) -> RhymicClient {
    RhymicClient::new(ClientConfig::new(server.uri())).expect("valid mock url")
}

fn authed_client_for(server: &MockServer) -> RhymicClient {
    RhymicClient::new(ClientConfig::with_token(server.uri(), "session-token"))
        .expect("valid mock url")
}

#[tokio::test]
async fn login_stores_the_session_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "secret",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "fresh-token",
            "user": { "id": 7, "name": "Ada" },
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(!client.is_authenticated().await);

    let login = client.login("ada@example.com", "secret").await.unwrap();
    assert_eq!(login.user.id, 7);
    assert_eq!(login.user.name, "Ada");

    assert!(client.is_authenticated().await);
    assert_eq!(client.token().await.as_deref(), Some("fresh-token"));
}

#[tokio::test]
async fn login_with_bad_credentials_fails_cleanly() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.login("ada@example.com", "wrong").await.unwrap_err();

    assert!(matches!(err, ClientError::AuthFailed(_)));
    assert!(!client.is_authenticated().await);
}

#[tokio::test]
async fn signup_then_login_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "message": "User created successfully" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "new-user-token",
            "user": { "id": 12, "name": "Grace" },
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let login = client
        .signup("Grace", "grace@example.com", "secret")
        .await
        .unwrap();

    assert_eq!(login.user.name, "Grace");
    assert!(client.is_authenticated().await);
}

#[tokio::test]
async fn signup_with_taken_email_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "message": "Email already registered" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .signup("Grace", "taken@example.com", "secret")
        .await
        .unwrap_err();

    match err {
        ClientError::SignupFailed(message) => {
            assert_eq!(message, "Email already registered");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn song_catalog_parses_without_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/songs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            song_json(1, "First"),
            song_json(2, "Second"),
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let songs = client.songs().await.unwrap();

    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].title, "First");
    assert_eq!(songs[1].src, "/assets/music/2.mp3");
}

#[tokio::test]
async fn likes_require_a_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/likes"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 3])))
        .mount(&server)
        .await;

    let unauthed = client_for(&server);
    assert!(matches!(
        unauthed.catalog().await.unwrap_err(),
        ClientError::AuthRequired
    ));

    let client = authed_client_for(&server);
    let catalog = client.catalog().await.unwrap();
    let likes = catalog.client().likes().await.unwrap();
    assert_eq!(likes, vec![1, 3]);
}

#[tokio::test]
async fn like_toggle_reports_the_server_direction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/likes"))
        .and(body_json(json!({ "song_id": 5 })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "added" })),
        )
        .mount(&server)
        .await;

    let client = authed_client_for(&server);
    let catalog = client.catalog().await.unwrap();
    let status = catalog.client().toggle_like(5).await.unwrap();
    assert_eq!(status, LikeStatus::Added);
}

#[tokio::test]
async fn expired_token_surfaces_auth_required() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/likes"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "msg": "Token has expired" })),
        )
        .mount(&server)
        .await;

    let client = authed_client_for(&server);
    let catalog = client.catalog().await.unwrap();
    let err = catalog.client().likes().await.unwrap_err();
    assert!(matches!(err, ClientError::AuthRequired));
}

#[tokio::test]
async fn playlist_listing_and_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Hindi Hits", "is_system": true },
            { "id": 9, "name": "My Mix", "is_system": false },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/playlists/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9,
            "name": "My Mix",
            "is_system": false,
            "songs": [song_json(4, "Fourth")],
        })))
        .mount(&server)
        .await;

    let client = authed_client_for(&server);
    let catalog = client.catalog().await.unwrap();

    let playlists = catalog.client().playlists().await.unwrap();
    assert_eq!(playlists.len(), 2);
    assert!(playlists[0].is_system);

    let details = catalog.client().playlist_details(9).await.unwrap();
    assert_eq!(details.name, "My Mix");
    assert_eq!(details.songs.len(), 1);
    assert_eq!(details.songs[0].id, 4);
}

#[tokio::test]
async fn create_playlist_and_add_song() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/playlists"))
        .and(body_json(json!({ "name": "Road Trip" })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "id": 42, "name": "Road Trip" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/playlists/add_song"))
        .and(body_json(json!({ "playlist_id": 42, "song_id": 5 })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Added" })),
        )
        .mount(&server)
        .await;

    let client = authed_client_for(&server);
    let catalog = client.catalog().await.unwrap();

    let created = catalog.client().create_playlist("Road Trip").await.unwrap();
    assert_eq!(created.id, 42);

    catalog
        .client()
        .add_song_to_playlist(created.id, 5)
        .await
        .unwrap();
}

#[tokio::test]
async fn recommendations_come_from_the_server_when_it_answers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai/recommend"))
        .and(body_json(json!({ "prompt": "rainy evening" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            song_json(8, "Monsoon"),
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let catalog: Vec<_> = (1..=20)
        .map(|id| {
            serde_json::from_value(song_json(id, "Filler")).expect("valid track json")
        })
        .collect();

    let picks = client.recommend("rainy evening", &catalog).await;
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0].title, "Monsoon");
}

#[tokio::test]
async fn recommendations_fall_back_to_a_local_sample_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai/recommend"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let catalog: Vec<_> = (1..=20)
        .map(|id| {
            serde_json::from_value(song_json(id, "Filler")).expect("valid track json")
        })
        .collect();

    let picks = client.recommend("anything", &catalog).await;
    assert_eq!(picks.len(), 10);
    for pick in &picks {
        assert!(catalog.iter().any(|t| t.id == pick.id));
    }
}

#[tokio::test]
async fn optimistic_like_rolls_back_when_the_server_rejects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/likes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = authed_client_for(&server);
    let catalog = client.catalog().await.unwrap();

    let mut store = CatalogStore::new();
    store.set_songs(vec![serde_json::from_value(song_json(5, "Fifth")).unwrap()]);

    // UI flips immediately
    let pending = store.begin_like_toggle(5);
    assert!(store.is_liked(5));

    // Server says no; the flip is undone
    let outcome = catalog.client().toggle_like(5).await;
    store.resolve_like_toggle(pending, outcome);
    assert!(!store.is_liked(5));
}

#[tokio::test]
async fn rejected_session_token_is_cleared() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "msg": "Token has expired" })),
        )
        .mount(&server)
        .await;

    let client = authed_client_for(&server);
    assert!(client.is_authenticated().await);

    let err = client.current_user().await.unwrap_err();
    assert!(matches!(err, ClientError::AuthRequired));
    assert!(!client.is_authenticated().await);
}

#[tokio::test]
async fn current_user_profile_parses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "Ada",
            "email": "ada@example.com",
            "profile_pic": null,
        })))
        .mount(&server)
        .await;

    let client = authed_client_for(&server);
    let user = client.current_user().await.unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    assert!(user.profile_pic.is_none());
}
