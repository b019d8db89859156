//! Articles endpoint behaviour: listing, filtering, single fetch, and votes.

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use rstest::rstest;
use serde_json::{json, Value};

use backend::inbound::http::configure;
use backend::test_support::seeded_state;

async fn seeded_app() -> impl Service<
    actix_http::Request,
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(seeded_state()))
            .configure(configure),
    )
    .await
}

fn article_ids(body: &Value) -> Vec<i64> {
    body["articles"]
        .as_array()
        .expect("articles array")
        .iter()
        .map(|article| article["article_id"].as_i64().expect("integer id"))
        .collect()
}

#[actix_web::test]
async fn default_listing_is_most_recent_first_without_bodies() {
    let app = seeded_app().await;
    let req = test::TestRequest::get().uri("/api/articles").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(article_ids(&body), [1, 2, 3, 4]);
    for article in body["articles"].as_array().expect("articles array") {
        assert!(article.get("body").is_none());
        assert!(article["comment_count"].is_i64());
    }
}

#[rstest]
#[case("sort_by=votes&order=asc", vec![2, 3, 4, 1])]
#[case("sort_by=votes", vec![1, 4, 3, 2])]
#[case("sort_by=article_id&order=ASC", vec![1, 2, 3, 4])]
#[actix_web::test]
async fn listing_honours_whitelisted_sorts(#[case] query: &str, #[case] expected: Vec<i64>) {
    let app = seeded_app().await;
    let req = test::TestRequest::get()
        .uri(&format!("/api/articles?{query}"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(article_ids(&body), expected);
}

#[actix_web::test]
async fn comment_count_sort_uses_the_derived_aggregation() {
    let app = seeded_app().await;
    let req = test::TestRequest::get()
        .uri("/api/articles?sort_by=comment_count")
        .to_request();
    let res = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(res).await;
    // Article 1 carries three comments; article 2 carries none.
    assert_eq!(article_ids(&body).first(), Some(&1));
    assert_eq!(article_ids(&body).last(), Some(&2));
}

#[rstest]
#[case("sort_by=madeUpColumn")]
#[case("sort_by=body")]
#[case("order=sideways")]
#[case("sort_by=votes&order=sideways")]
#[actix_web::test]
async fn off_whitelist_sorts_are_rejected(#[case] query: &str) {
    let app = seeded_app().await;
    let req = test::TestRequest::get()
        .uri(&format!("/api/articles?{query}"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], 400);
    assert_eq!(body["msg"], "Invalid input data");
}

#[actix_web::test]
async fn author_filter_narrows_the_listing() {
    let app = seeded_app().await;
    let req = test::TestRequest::get()
        .uri("/api/articles?author=marmalade_sky")
        .to_request();
    let res = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(res).await;
    let articles = body["articles"].as_array().expect("articles array");
    assert_eq!(articles.len(), 2);
    assert!(articles
        .iter()
        .all(|article| article["author"] == "marmalade_sky"));
}

#[rstest]
#[case::existing_author_without_articles("author=lurking_fox")]
#[case::existing_topic_without_articles("topic=origami")]
#[actix_web::test]
async fn empty_but_legitimate_filters_answer_200(#[case] query: &str) {
    let app = seeded_app().await;
    let req = test::TestRequest::get()
        .uri(&format!("/api/articles?{query}"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["articles"], json!([]));
}

#[rstest]
#[case("author=nobody", "User does not exist")]
#[case("topic=knitting", "Topic does not exist")]
#[actix_web::test]
async fn filters_naming_missing_entities_answer_404(#[case] query: &str, #[case] msg: &str) {
    let app = seeded_app().await;
    let req = test::TestRequest::get()
        .uri(&format!("/api/articles?{query}"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["msg"], msg);
}

#[actix_web::test]
async fn single_article_carries_body_and_comment_count() {
    let app = seeded_app().await;
    let req = test::TestRequest::get().uri("/api/articles/1").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["article"]["article_id"], 1);
    assert_eq!(body["article"]["votes"], 100);
    assert_eq!(body["article"]["comment_count"], 3);
    assert!(body["article"]["body"].is_string());
}

#[actix_web::test]
async fn commentless_article_reports_a_zero_count() {
    let app = seeded_app().await;
    let req = test::TestRequest::get().uri("/api/articles/2").to_request();
    let res = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["article"]["comment_count"], 0);
}

#[actix_web::test]
async fn well_formed_id_matching_nothing_is_404() {
    let app = seeded_app().await;
    let req = test::TestRequest::get()
        .uri("/api/articles/999")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["msg"], "Article does not exist");
}

#[rstest]
#[case("/api/articles/not-an-id")]
#[case("/api/articles/1.5")]
#[case("/api/articles/-1")]
#[actix_web::test]
async fn malformed_ids_are_400_not_404(#[case] path: &str) {
    let app = seeded_app().await;
    let req = test::TestRequest::get().uri(path).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["msg"], "Invalid input data");
}

#[actix_web::test]
async fn vote_patch_applies_the_delta_and_returns_the_article() {
    let app = seeded_app().await;
    let req = test::TestRequest::patch()
        .uri("/api/articles/1")
        .set_json(json!({ "inc_votes": 1 }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["article"]["votes"], 101);

    // Deltas are relative and may drive the tally negative.
    let req = test::TestRequest::patch()
        .uri("/api/articles/1")
        .set_json(json!({ "inc_votes": -200 }))
        .to_request();
    let res = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["article"]["votes"], -99);
}

#[rstest]
#[case(json!({}))]
#[case(json!({ "inc_votes": "LOADS OF VOTES!" }))]
#[case(json!({ "inc_votes": 1.5 }))]
#[case(json!({ "inc_votes": 1, "author": "newUser" }))]
#[actix_web::test]
async fn malformed_vote_bodies_are_rejected_without_effect(#[case] payload: Value) {
    let app = seeded_app().await;
    let req = test::TestRequest::patch()
        .uri("/api/articles/1")
        .set_json(payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["msg"], "Invalid input data");

    // The rejected mutation left the row untouched.
    let req = test::TestRequest::get().uri("/api/articles/1").to_request();
    let res = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["article"]["votes"], 100);
}

#[actix_web::test]
async fn vote_patch_on_a_missing_article_is_404() {
    let app = seeded_app().await;
    let req = test::TestRequest::patch()
        .uri("/api/articles/999")
        .set_json(json!({ "inc_votes": 1 }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["msg"], "Article does not exist");
}
