//! Route-table behaviour: the index, unknown paths, and unsupported methods.

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use rstest::rstest;
use serde_json::Value;

use backend::inbound::http::configure;
use backend::test_support::seeded_state;
use backend::Trace;

async fn seeded_app() -> impl Service<
    actix_http::Request,
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .wrap(Trace)
            .app_data(web::Data::new(seeded_state()))
            .configure(configure),
    )
    .await
}

#[actix_web::test]
async fn index_lists_the_served_endpoints() {
    let app = seeded_app().await;
    let req = test::TestRequest::get().uri("/api").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    let endpoints = body["endpoints"].as_object().expect("endpoints object");
    assert!(endpoints.contains_key("GET /api/articles"));
    assert!(endpoints.contains_key("DELETE /api/comments/:comment_id"));
}

#[rstest]
#[case::top_level("/not-a-route")]
#[case::under_api("/api/not-a-route")]
#[case::nested("/api/articles/1/authors")]
#[actix_web::test]
async fn unknown_paths_get_the_route_miss_body(#[case] path: &str) {
    let app = seeded_app().await;
    let req = test::TestRequest::get().uri(path).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["msg"], "This route does not exist");
}

#[rstest]
#[case::index("/api", test::TestRequest::post())]
#[case::topics("/api/topics", test::TestRequest::put())]
#[case::topics_delete("/api/topics", test::TestRequest::delete())]
#[case::users("/api/users/paper_crane", test::TestRequest::patch())]
#[case::articles("/api/articles", test::TestRequest::post())]
#[case::article("/api/articles/1", test::TestRequest::delete())]
#[case::article_comments("/api/articles/1/comments", test::TestRequest::patch())]
#[case::comment("/api/comments/1", test::TestRequest::get())]
#[actix_web::test]
async fn unsupported_methods_get_the_uniform_405(
    #[case] path: &str,
    #[case] request: test::TestRequest,
) {
    let app = seeded_app().await;
    let req = request.uri(path).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], 405);
    assert_eq!(body["msg"], "Method not allowed");
}

#[actix_web::test]
async fn responses_carry_a_trace_id_header() {
    let app = seeded_app().await;
    let req = test::TestRequest::get().uri("/api/topics").to_request();
    let res = test::call_service(&app, req).await;
    assert!(res.headers().contains_key("trace-id"));
}
