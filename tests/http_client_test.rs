/// Tests for the HTTP adapter against a local mock API
use serde_json::json;
use std::time::Duration;
use user_directory::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_json(id: u32, name: &str, city: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "username": name.split_whitespace().next().unwrap_or(name),
        "email": format!("user{}@example.com", id),
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": city,
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

fn client(server: &MockServer) -> PlaceholderUserRepository {
    PlaceholderUserRepository::with_base_url(&server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_users() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            user_json(1, "Leanne Graham", "Gwenborough"),
            user_json(2, "Ervin Howell", "Wisokyburgh"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let users = client(&server).fetch_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(users[1].address.city, "Wisokyburgh");
    assert_eq!(users[0].company.catch_phrase, "Multi-layered client-server neural-net");
}

#[tokio::test]
async fn test_fetch_user_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(user_json(7, "Kurtis Weissnat", "Howemouth")),
        )
        .mount(&server)
        .await;

    let user = client(&server).fetch_user(7).await.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "Kurtis");
}

#[tokio::test]
async fn test_fetch_unknown_user_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client(&server).fetch_user(99).await.unwrap_err();
    assert!(format!("{:#}", err).contains("404"));
}

#[tokio::test]
async fn test_fetch_posts_filters_by_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("userId", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "userId": 3, "id": 21, "title": "asperiores ea ipsam", "body": "dolor sint quo" },
            { "userId": 3, "id": 22, "title": "dolor sint quo a velit", "body": "illum quis cupiditate" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = client(&server).fetch_posts(3).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.user_id == 3));
}

#[tokio::test]
async fn test_fetch_posts_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("userId", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let posts = client(&server).fetch_posts(5).await.unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    assert!(client(&server).fetch_users().await.is_err());
}

#[tokio::test]
async fn test_server_error_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let repository = CachingUserRepository::new(client(&server));
    assert!(repository.fetch_users().await.is_err());
    assert!(repository.fetch_users().await.is_err());
    assert_eq!(repository.cache_size(), 0);
}

#[tokio::test]
async fn test_caching_repository_hits_api_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([user_json(1, "Leanne Graham", "Gwenborough")]))
                .set_delay(Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let repository = CachingUserRepository::new(client(&server));
    let (a, b) = tokio::join!(repository.fetch_users(), repository.fetch_users());
    assert_eq!(a.unwrap(), b.unwrap());
    repository.fetch_users().await.unwrap();
}
