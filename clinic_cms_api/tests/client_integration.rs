use std::time::Duration;

use clinic_cms_api::{Client, ClientConfig, ContentQuery, Envelope, Error, RequestOptions, SortDirection};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn fetch_collection_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("sort[0]", "publishedDate:desc"))
        .and(query_param("pagination[pageSize]", "100"))
        .and(query_param("populate[0]", "featured_image"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("articles.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let query = ContentQuery::default()
        .with_sort("publishedDate", SortDirection::Desc)
        .with_page_size(100)
        .with_relation("featured_image");
    let env: Envelope<Vec<Value>> = client
        .fetch_content("/articles", &query, &RequestOptions::default())
        .await;

    assert!(env.is_success());
    let pagination = env.meta().unwrap().pagination.clone().unwrap();
    assert_eq!(pagination.total, 2);
    let data = env.into_data().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["slug"], "cham-soc-vung-kin-sau-laser");
}

#[tokio::test]
async fn filter_is_sent_with_nested_keys() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("filters[slug][$eq]", "tre-hoa-vung-kin-la-gi"))
        .and(query_param("pLevel", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("articles_empty.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let query = ContentQuery::default()
        .with_eq("slug", "tre-hoa-vung-kin-la-gi")
        .with_populate_depth(5);
    let env: Envelope<Vec<Value>> = client
        .fetch_content("/articles", &query, &RequestOptions::default())
        .await;

    assert!(env.data().unwrap().is_empty());
}

#[tokio::test]
async fn sends_bearer_token_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/news-page"))
        .and(header("authorization", "Bearer secret-token"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("news_page.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(&mock_server.uri()).with_token("secret-token");
    let client = Client::new(config).unwrap();
    let env: Envelope<Value> = client
        .fetch_content("/news-page", &ContentQuery::default(), &RequestOptions::default())
        .await;

    assert_eq!(env.data().unwrap()["hero_section"]["title"], "Tin tức mới nhất");
}

#[tokio::test]
async fn omits_authorization_without_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/news-page"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("news_page.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let _: Envelope<Value> = client
        .fetch_content("/news-page", &ContentQuery::default(), &RequestOptions::default())
        .await;

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn null_single_type_is_success_without_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/homepage"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("single_type_null.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let env: Envelope<Value> = client
        .fetch_content("/homepage", &ContentQuery::default(), &RequestOptions::default())
        .await;

    assert!(env.is_success());
    assert!(env.data().is_none());
}

#[tokio::test]
async fn backend_error_becomes_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/about-page"))
        .respond_with(ResponseTemplate::new(404).set_body_string(load_fixture("not_found.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let env: Envelope<Value> = client
        .fetch_content("/about-page", &ContentQuery::default(), &RequestOptions::default())
        .await;

    assert!(env.data().is_none());
    match env.error() {
        Some(Error::Backend { status, name, message, .. }) => {
            assert_eq!(*status, 404);
            assert_eq!(name, "NotFoundError");
            assert_eq!(message, "Not Found");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_without_body_becomes_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let env: Envelope<Vec<Value>> = client
        .fetch_content("/articles", &ContentQuery::default(), &RequestOptions::default())
        .await;

    let err = env.error().unwrap();
    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, Error::HttpStatus { .. }));
}

#[tokio::test]
async fn malformed_json_becomes_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let env: Envelope<Vec<Value>> = client
        .fetch_content("/articles", &ContentQuery::default(), &RequestOptions::default())
        .await;

    assert!(matches!(env.error(), Some(Error::Decode(_))));
}

#[tokio::test]
async fn unreachable_backend_becomes_failure() {
    let client = Client::with_base_url("http://127.0.0.1:1").unwrap();
    let env: Envelope<Vec<Value>> = client
        .fetch_content("/articles", &ContentQuery::default(), &RequestOptions::default())
        .await;

    assert!(env.data().is_none());
    assert!(matches!(env.error(), Some(Error::Transport(_))));
}

#[tokio::test]
async fn slow_backend_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("articles.json"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let options = RequestOptions::default().with_timeout(Duration::from_millis(100));
    let env: Envelope<Vec<Value>> = client
        .fetch_content("/articles", &ContentQuery::default(), &options)
        .await;

    assert!(matches!(env.error(), Some(Error::Timeout)));
}

#[tokio::test]
async fn repeated_fetch_is_served_from_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("articles.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    for _ in 0..3 {
        let env: Envelope<Vec<Value>> = client
            .fetch_content("/articles", &ContentQuery::default(), &RequestOptions::default())
            .await;
        assert_eq!(env.data().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn no_store_always_hits_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("articles.json")))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    for _ in 0..2 {
        let env: Envelope<Vec<Value>> = client
            .fetch_content("/articles", &ContentQuery::default(), &RequestOptions::no_store())
            .await;
        assert!(env.is_success());
    }
}

#[tokio::test]
async fn failures_are_not_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("articles.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let first: Envelope<Vec<Value>> = client
        .fetch_content("/articles", &ContentQuery::default(), &RequestOptions::default())
        .await;
    assert!(!first.is_success());

    let second: Envelope<Vec<Value>> = client
        .fetch_content("/articles", &ContentQuery::default(), &RequestOptions::default())
        .await;
    assert_eq!(second.data().unwrap().len(), 2);
}

#[tokio::test]
async fn create_entry_wraps_body_in_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact-submissions"))
        .and(header("authorization", "Bearer tok"))
        .and(body_json(json!({
            "data": { "name": "Lan", "phone": "0901234567", "message": "Tư vấn" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string("{\"data\":{\"id\":1}}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(ClientConfig::new(&mock_server.uri()).with_token("tok")).unwrap();
    let result = client
        .create_entry(
            "/contact-submissions",
            &json!({ "name": "Lan", "phone": "0901234567", "message": "Tư vấn" }),
        )
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn create_entry_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact-submissions"))
        .respond_with(ResponseTemplate::new(403).set_body_string(load_fixture("forbidden.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client
        .create_entry("/contact-submissions", &json!({ "name": "Lan" }))
        .await;
    assert_eq!(result.unwrap_err().status(), Some(403));
}

#[tokio::test]
async fn media_url_uses_configured_origin() {
    let client = Client::with_base_url("https://cms.example.com").unwrap();
    assert_eq!(
        client.media_url(Some("/uploads/a.png")).as_deref(),
        Some("https://cms.example.com/uploads/a.png")
    );
    assert_eq!(client.media_url(None), None);
}
