use dealerdesk_api::{Client, DealerQuery, PromotionQuery, Query, UserQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn list_dealers_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("dealers.json");

    Mock::given(method("GET"))
        .and(path("/dealers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.list_dealers(&DealerQuery::default()).await;
    assert!(result.is_ok());

    let value = result.unwrap();
    assert_eq!(value["data"]["items"].as_array().unwrap().len(), 3);
    assert_eq!(value["data"]["totalResults"], 23);
}

#[tokio::test]
async fn list_dealers_forwards_query_params() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("dealers.json");

    Mock::given(method("GET"))
        .and(path("/dealers"))
        .and(query_param("page", "3"))
        .and(query_param("pageSize", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = DealerQuery::default().with_page(3).with_page_size(5);
    let result = client.list_dealers(&query).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn list_users_bare_array_body() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("users.json");

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let value = client.list_users(&UserQuery::default()).await.unwrap();
    assert!(value.is_array());
    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn list_promotions_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("promotions.json");

    Mock::given(method("GET"))
        .and(path("/promotions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let value = client
        .list_promotions(&PromotionQuery::default())
        .await
        .unwrap();
    assert_eq!(value["data"]["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn list_dealers_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dealers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.list_dealers(&DealerQuery::default()).await;
    match result {
        Err(dealerdesk_api::Error::HttpStatus { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected HttpStatus error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn list_dealers_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dealers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.list_dealers(&DealerQuery::default()).await;
    assert!(result.is_err());
}
