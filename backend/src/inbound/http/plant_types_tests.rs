//! Tests for the plant type registry handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use serde_json::Value;

use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{
    create_garden, create_plant, get_as, get_json, journal_app, journal_state, location,
    post_form, register,
};

#[fixture]
fn state() -> HttpState {
    let Some(today) = NaiveDate::from_ymd_opt(2024, 6, 1) else {
        panic!("valid date");
    };
    journal_state(today).0
}

#[rstest]
#[actix_web::test]
async fn registry_requires_a_session(state: HttpState) {
    let app = actix_test::init_service(journal_app(state)).await;
    let req = actix_test::TestRequest::get().uri("/plant-types/").to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(location(&res).as_deref(), Some("/login/"));
}

#[rstest]
#[actix_web::test]
async fn adding_an_existing_name_reuses_it(state: HttpState) {
    let app = actix_test::init_service(journal_app(state)).await;
    let ada = register(&app, "ada").await;

    for _ in 0..2 {
        let res = post_form(&app, &ada, "/plant-types/add/", &[("name", " Tomato ")]).await;
        assert_eq!(location(&res).as_deref(), Some("/plant-types/"));
    }
    let list = get_json(&app, &ada, "/plant-types/").await;
    assert_eq!(list["plantTypes"].as_array().map(Vec::len), Some(1));
    assert_eq!(list["plantTypes"][0]["name"], "Tomato");
}

#[rstest]
#[actix_web::test]
async fn blank_name_is_rejected(state: HttpState) {
    let app = actix_test::init_service(journal_app(state)).await;
    let ada = register(&app, "ada").await;
    let res = post_form(&app, &ada, "/plant-types/add/", &[("name", "")]).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert!(body["details"]["fieldErrors"]["name"].is_array());
}

#[rstest]
#[actix_web::test]
async fn deleting_a_type_leaves_plants_untyped(state: HttpState) {
    let app = actix_test::init_service(journal_app(state)).await;
    let ada = register(&app, "ada").await;
    let garden = create_garden(&app, &ada, "Balcony", &[]).await;
    create_plant(&app, &ada, &garden, "Basil", "Herb").await;

    let list = get_json(&app, &ada, "/plant-types/").await;
    let Some(herb) = list["plantTypes"][0]["id"].as_str().map(str::to_owned) else {
        panic!("plant type missing: {list}");
    };
    let delete_uri = format!("/plant-types/{herb}/delete/");

    let confirm = get_json(&app, &ada, &delete_uri).await;
    assert_eq!(confirm["plantType"]["name"], "Herb");
    let res = post_form(&app, &ada, &delete_uri, &[]).await;
    assert_eq!(location(&res).as_deref(), Some("/plant-types/"));

    let detail = get_json(&app, &ada, &format!("/gardens/{garden}/")).await;
    assert_eq!(detail["selectedPlant"]["name"], "Basil");
    assert_eq!(detail["selectedPlant"]["plantType"], Value::Null);

    let res = get_as(&app, &ada, &delete_uri).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
