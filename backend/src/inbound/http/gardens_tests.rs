//! Tests for the garden CRUD handlers, including the sharing rules.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use serde_json::Value;

use super::garden_input;
use crate::inbound::http::forms::FormFields;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{
    create_garden, get_as, get_json, journal_app, journal_state, location, post_form, register,
    user_id,
};

#[fixture]
fn state() -> HttpState {
    let Some(today) = NaiveDate::from_ymd_opt(2024, 6, 1) else {
        panic!("valid date");
    };
    journal_state(today).0
}

#[rstest]
fn garden_input_collects_repeated_shared_users() {
    let fields = FormFields::from_pairs([
        ("name", " Balcony "),
        ("description", ""),
        ("shared_users", "a"),
        ("shared_users", "b"),
    ]);
    let input = garden_input(&fields);
    assert_eq!(input.name, "Balcony");
    assert_eq!(input.description, None);
    assert_eq!(input.shared_users, vec!["a".to_owned(), "b".to_owned()]);
}

#[rstest]
#[actix_web::test]
async fn anonymous_callers_are_sent_to_login(state: HttpState) {
    let app = actix_test::init_service(journal_app(state)).await;
    let req = actix_test::TestRequest::get().uri("/gardens/").to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res).as_deref(), Some("/login/"));
}

#[rstest]
#[actix_web::test]
async fn blank_name_is_rejected(state: HttpState) {
    let app = actix_test::init_service(journal_app(state)).await;
    let ada = register(&app, "ada").await;

    let res = post_form(&app, &ada, "/gardens/add/", &[("name", "   ")]).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["fieldErrors"]["name"][0], "This field is required.");
}

#[rstest]
#[actix_web::test]
async fn unknown_shared_user_is_a_field_error(state: HttpState) {
    let app = actix_test::init_service(journal_app(state)).await;
    let ada = register(&app, "ada").await;

    let res = post_form(
        &app,
        &ada,
        "/gardens/add/",
        &[
            ("name", "Balcony"),
            ("shared_users", "3fa85f64-5717-4562-b3fc-2c963f66afa6"),
        ],
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert!(body["details"]["fieldErrors"]["shared_users"].is_array());
}

#[rstest]
#[actix_web::test]
async fn sharing_grants_plant_edits_but_not_user_edits(state: HttpState) {
    let app = actix_test::init_service(journal_app(state)).await;
    let ada = register(&app, "ada").await;
    let bo = register(&app, "bo").await;
    let cy = register(&app, "cy").await;
    let bo_id = user_id(&app, &bo).await;
    let cy_id = user_id(&app, &cy).await;
    let garden = create_garden(&app, &ada, "Balcony", &[bo_id.as_str()]).await;

    let dashboard = get_json(&app, &bo, "/dashboard/").await;
    assert_eq!(dashboard["sharedGardens"][0]["id"], garden.as_str());

    let form = get_json(&app, &bo, &format!("/gardens/{garden}/edit/")).await;
    assert_eq!(form["canEditUsers"], false);

    let res = post_form(
        &app,
        &bo,
        &format!("/gardens/{garden}/edit/"),
        &[("name", "Sunny balcony"), ("shared_users", cy_id.as_str())],
    )
    .await;
    assert_eq!(location(&res).as_deref(), Some("/gardens/"));
    let detail = get_json(&app, &ada, &format!("/gardens/{garden}/")).await;
    assert_eq!(detail["garden"]["name"], "Sunny balcony");
    assert_eq!(detail["garden"]["sharedUserIds"], serde_json::json!([bo_id]));

    let res = get_as(&app, &cy, &format!("/gardens/{garden}/")).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res).as_deref(), Some("/dashboard/"));
}

#[rstest]
#[actix_web::test]
async fn only_the_owner_deletes(state: HttpState) {
    let app = actix_test::init_service(journal_app(state)).await;
    let ada = register(&app, "ada").await;
    let bo = register(&app, "bo").await;
    let bo_id = user_id(&app, &bo).await;
    let garden = create_garden(&app, &ada, "Balcony", &[bo_id.as_str()]).await;
    let delete_uri = format!("/gardens/{garden}/delete/");

    let res = get_as(&app, &bo, &delete_uri).await;
    assert_eq!(location(&res).as_deref(), Some("/dashboard/"));
    let res = post_form(&app, &bo, &delete_uri, &[]).await;
    assert_eq!(location(&res).as_deref(), Some("/dashboard/"));
    get_json(&app, &ada, &format!("/gardens/{garden}/")).await;

    let res = post_form(&app, &ada, &delete_uri, &[]).await;
    assert_eq!(location(&res).as_deref(), Some("/dashboard/"));
    let res = get_as(&app, &ada, &format!("/gardens/{garden}/")).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case("3fa85f64-5717-4562-b3fc-2c963f66afa6")]
#[case("not-a-uuid")]
#[actix_web::test]
async fn missing_gardens_are_not_found(state: HttpState, #[case] id: &str) {
    let app = actix_test::init_service(journal_app(state)).await;
    let ada = register(&app, "ada").await;
    let res = get_as(&app, &ada, &format!("/gardens/{id}/edit/")).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn list_includes_owned_and_shared_by_name(state: HttpState) {
    let app = actix_test::init_service(journal_app(state)).await;
    let ada = register(&app, "ada").await;
    let bo = register(&app, "bo").await;
    let ada_id = user_id(&app, &ada).await;
    create_garden(&app, &bo, "Allotment", &[ada_id.as_str()]).await;
    create_garden(&app, &ada, "Windowsill", &[]).await;

    let list = get_json(&app, &ada, "/gardens/").await;
    let names: Vec<&str> = list["gardens"]
        .as_array()
        .map(|gardens| gardens.iter().filter_map(|g| g["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, ["Allotment", "Windowsill"]);
}
