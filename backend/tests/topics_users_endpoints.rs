//! Topics and users endpoint behaviour over the seeded store.

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::Value;

use backend::inbound::http::configure;
use backend::inbound::http::state::HttpState;
use backend::test_support::{empty_state, seeded_state};

async fn app_over(
    state: HttpState,
) -> impl Service<
    actix_http::Request,
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await
}

#[actix_web::test]
async fn topics_listing_returns_every_topic() {
    let app = app_over(seeded_state()).await;
    let req = test::TestRequest::get().uri("/api/topics").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    let topics = body["topics"].as_array().expect("topics array");
    assert_eq!(topics.len(), 3);
    assert!(topics
        .iter()
        .all(|topic| topic["slug"].is_string() && topic["description"].is_string()));
}

#[actix_web::test]
async fn topics_listing_over_an_empty_store_is_an_empty_array() {
    let app = app_over(empty_state()).await;
    let req = test::TestRequest::get().uri("/api/topics").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["topics"], serde_json::json!([]));
}

#[actix_web::test]
async fn user_fetch_returns_the_full_record() {
    let app = app_over(seeded_state()).await;
    let req = test::TestRequest::get()
        .uri("/api/users/paper_crane")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["user"]["username"], "paper_crane");
    assert_eq!(body["user"]["name"], "Ines Kovac");
    assert!(body["user"]["avatar_url"]
        .as_str()
        .expect("avatar url")
        .starts_with("https://"));
}

#[actix_web::test]
async fn user_miss_gets_the_entity_specific_404() {
    let app = app_over(seeded_state()).await;
    let req = test::TestRequest::get()
        .uri("/api/users/not-a-yuser")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["msg"], "User does not exist");
}
