//! Behaviour tests for garden sharing over a running server.
//!
//! Each scenario boots the journal routes on an ephemeral port backed by the
//! in-memory store, then drives them with `awc` the way a browser would:
//! form posts, session cookies and `303` redirects.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::dev::ServerHandle;
use actix_web::http::header;
use actix_web::{App, HttpServer, web};
use awc::Client;
use garden_journal::Trace;
use garden_journal::inbound::http::configure;
use garden_journal::inbound::http::state::{HttpState, JournalAdapters};
use garden_journal::outbound::advisor::PlaceholderAdvisor;
use garden_journal::outbound::memory::MemoryStore;
use garden_journal::outbound::security::BcryptPasswordHasher;
use mockable::DefaultClock;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

const PASSWORD: &str = "runner-beans-7";
/// Cheapest bcrypt work factor.
const BCRYPT_COST: u32 = 4;

struct SharingWorld {
    runtime: Runtime,
    local: LocalSet,
    base_url: String,
    server: ServerHandle,
    cookies: HashMap<String, String>,
    gardens: HashMap<String, String>,
    plants: HashMap<String, String>,
    last_status: Option<u16>,
    last_location: Option<String>,
}

type SharedWorld = Rc<RefCell<SharingWorld>>;

struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        let ctx = self.world.borrow();
        let server = ctx.server.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            server.stop(true).await;
        });
    }
}

/// Response fields the steps assert on.
struct Reply {
    status: u16,
    location: Option<String>,
    cookie: Option<String>,
    body: Option<Value>,
}

fn block_on<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

fn journal_state() -> HttpState {
    HttpState::from_adapters(JournalAdapters {
        repositories: MemoryStore::new().repositories(),
        hasher: Arc::new(BcryptPasswordHasher::new(BCRYPT_COST)),
        advisor: Arc::new(PlaceholderAdvisor),
        clock: Arc::new(DefaultClock),
    })
}

async fn spawn_journal_server(state: HttpState) -> Result<(String, ServerHandle), String> {
    let key = Key::generate();
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let data = web::Data::new(state);

    let server = HttpServer::new(move || {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
            .cookie_name("session".to_owned())
            .cookie_secure(false)
            .build();
        App::new()
            .app_data(data.clone())
            .wrap(Trace)
            .service(web::scope("").wrap(session).configure(configure))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);
    Ok((format!("http://{addr}"), handle))
}

#[fixture]
fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();
    let (base_url, server) = local
        .block_on(&runtime, spawn_journal_server(journal_state()))
        .expect("journal server");

    WorldFixture {
        world: Rc::new(RefCell::new(SharingWorld {
            runtime,
            local,
            base_url,
            server,
            cookies: HashMap::new(),
            gardens: HashMap::new(),
            plants: HashMap::new(),
            last_status: None,
            last_location: None,
        })),
    }
}

fn cookie_of(world: &SharedWorld, gardener: &str) -> String {
    world
        .borrow()
        .cookies
        .get(gardener)
        .cloned()
        .unwrap_or_else(|| panic!("{gardener} has no session"))
}

fn garden_id(world: &SharedWorld, garden: &str) -> String {
    world
        .borrow()
        .gardens
        .get(garden)
        .cloned()
        .unwrap_or_else(|| panic!("garden {garden} was never created"))
}

fn plant_id(world: &SharedWorld, plant: &str) -> String {
    world
        .borrow()
        .plants
        .get(plant)
        .cloned()
        .unwrap_or_else(|| panic!("plant {plant} was never planted"))
}

/// Send a request without following redirects.
fn send(
    world: &SharedWorld,
    cookie: Option<String>,
    path: String,
    form: Option<Vec<(String, String)>>,
) -> Reply {
    block_on(world, |base_url| async move {
        let client = Client::builder().disable_redirects().finish();
        let url = format!("{base_url}{path}");
        let mut request = match form {
            Some(_) => client.post(url),
            None => client.get(url),
        };
        if let Some(cookie) = cookie {
            request = request.insert_header((header::COOKIE, cookie));
        }
        let mut response = match form {
            Some(form) => request.send_form(&form).await.expect("form request"),
            None => request.send().await.expect("get request"),
        };

        let header_text = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };
        let location = header_text(header::LOCATION);
        let cookie = header_text(header::SET_COOKIE)
            .and_then(|value| value.split(';').next().map(str::to_owned));
        let status = response.status().as_u16();
        let body = if status == 200 {
            let bytes = response.body().await.expect("response body");
            Some(serde_json::from_slice(&bytes).expect("json body"))
        } else {
            None
        };
        Reply {
            status,
            location,
            cookie,
            body,
        }
    })
}

fn get_json(world: &SharedWorld, gardener: &str, path: String) -> Value {
    let cookie = cookie_of(world, gardener);
    let reply = send(world, Some(cookie), path.clone(), None);
    assert_eq!(reply.status, 200, "GET {path} as {gardener}");
    reply.body.expect("view model")
}

fn post_as(world: &SharedWorld, gardener: &str, path: String, form: &[(&str, &str)]) -> Reply {
    let cookie = cookie_of(world, gardener);
    let form = form
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect();
    let reply = send(world, Some(cookie), path, Some(form));
    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(reply.status);
    ctx.last_location = reply.location.clone();
    reply
}

fn user_id(world: &SharedWorld, gardener: &str) -> String {
    let dashboard = get_json(world, gardener, "/dashboard/".to_owned());
    dashboard["user"]["id"]
        .as_str()
        .expect("user id")
        .to_owned()
}

fn create_garden(world: &SharedWorld, owner: &str, garden: &str, gardener: &str) {
    let shared = user_id(world, gardener);
    let reply = post_as(
        world,
        owner,
        "/gardens/add/".to_owned(),
        &[("name", garden), ("shared_users", shared.as_str())],
    );
    assert_eq!(reply.location.as_deref(), Some("/gardens/"), "creating {garden}");

    let list = get_json(world, owner, "/gardens/".to_owned());
    let id = list["gardens"]
        .as_array()
        .and_then(|gardens| gardens.iter().find(|entry| entry["name"] == garden))
        .and_then(|entry| entry["id"].as_str())
        .expect("created garden is listed")
        .to_owned();
    world.borrow_mut().gardens.insert(garden.to_owned(), id);
}

fn dashboard_names(world: &SharedWorld, gardener: &str, section: &str) -> Vec<String> {
    let dashboard = get_json(world, gardener, "/dashboard/".to_owned());
    dashboard[section]
        .as_array()
        .expect("garden section")
        .iter()
        .filter_map(|garden| garden["name"].as_str().map(str::to_owned))
        .collect()
}

#[given("a running journal server")]
fn a_running_journal_server(world: &WorldFixture) {
    assert!(world.world().borrow().base_url.starts_with("http://"));
}

#[given("the gardener {name} has registered")]
fn the_gardener_has_registered(world: &WorldFixture, name: String) {
    let world = world.world();
    let email = format!("{name}@example.com");
    let form = [
        ("username", name.as_str()),
        ("email", email.as_str()),
        ("password1", PASSWORD),
        ("password2", PASSWORD),
    ]
    .iter()
    .map(|(field, value)| ((*field).to_owned(), (*value).to_owned()))
    .collect();
    let reply = send(&world, None, "/register/".to_owned(), Some(form));
    assert_eq!(reply.status, 303, "registering {name}");
    let cookie = reply.cookie.expect("registration signs the gardener in");
    world.borrow_mut().cookies.insert(name, cookie);
}

#[given("{owner} has created the garden {garden} shared with {gardener}")]
fn has_created_the_garden(world: &WorldFixture, owner: String, garden: String, gardener: String) {
    create_garden(&world.world(), &owner, &garden, &gardener);
}

#[when("{owner} creates the garden {garden} shared with {gardener}")]
fn creates_the_garden(world: &WorldFixture, owner: String, garden: String, gardener: String) {
    create_garden(&world.world(), &owner, &garden, &gardener);
}

#[when("{gardener} opens the garden {garden}")]
fn opens_the_garden(world: &WorldFixture, gardener: String, garden: String) {
    let world = world.world();
    let id = garden_id(&world, &garden);
    let cookie = cookie_of(&world, &gardener);
    let reply = send(&world, Some(cookie), format!("/gardens/{id}/"), None);
    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(reply.status);
    ctx.last_location = reply.location;
}

#[when("{gardener} plants {plant} of type {kind} in {garden}")]
fn plants_in_garden(
    world: &WorldFixture,
    gardener: String,
    plant: String,
    kind: String,
    garden: String,
) {
    let world = world.world();
    let id = garden_id(&world, &garden);
    let reply = post_as(
        &world,
        &gardener,
        format!("/gardens/{id}/plants/add/"),
        &[("name", plant.as_str()), ("plant_type_name", kind.as_str())],
    );
    let target = reply.location.expect("plant creation redirects");
    let (_, plant_id) = target
        .split_once("?plant=")
        .expect("redirect selects the new plant");
    world
        .borrow_mut()
        .plants
        .insert(plant, plant_id.to_owned());
}

#[when("{gardener} writes the note {content} about {plant} in {garden}")]
fn writes_the_note(
    world: &WorldFixture,
    gardener: String,
    content: String,
    plant: String,
    garden: String,
) {
    let world = world.world();
    let garden_id = garden_id(&world, &garden);
    let plant_id = plant_id(&world, &plant);
    let reply = post_as(
        &world,
        &gardener,
        format!("/gardens/{garden_id}/?plant={plant_id}"),
        &[
            ("action", "add_note"),
            ("content", content.as_str()),
            ("plants", plant_id.as_str()),
        ],
    );
    assert_eq!(reply.status, 303, "note accepted");
}

#[when("{gardener} deletes the garden {garden}")]
fn deletes_the_garden(world: &WorldFixture, gardener: String, garden: String) {
    let world = world.world();
    let id = garden_id(&world, &garden);
    post_as(&world, &gardener, format!("/gardens/{id}/delete/"), &[]);
}

#[then("the response redirects to {path}")]
fn the_response_redirects_to(world: &WorldFixture, path: String) {
    let world = world.world();
    let ctx = world.borrow();
    assert_eq!(ctx.last_status, Some(303));
    assert_eq!(ctx.last_location.as_deref(), Some(path.as_str()));
}

#[then("the dashboard of {gardener} lists {garden} as {section}")]
fn the_dashboard_lists(world: &WorldFixture, gardener: String, garden: String, section: String) {
    let key = match section.as_str() {
        "owned" => "ownedGardens",
        "shared" => "sharedGardens",
        other => panic!("unknown dashboard section {other}"),
    };
    let names = dashboard_names(&world.world(), &gardener, key);
    assert_eq!(names, vec![garden]);
}

#[then("the dashboard of {gardener} lists no gardens")]
fn the_dashboard_lists_no_gardens(world: &WorldFixture, gardener: String) {
    let world = world.world();
    for key in ["ownedGardens", "sharedGardens"] {
        assert!(
            dashboard_names(&world, &gardener, key).is_empty(),
            "{gardener} should see no {key}"
        );
    }
}

#[then("{gardener} reads {count} note about {plant} in {garden}")]
fn reads_notes(
    world: &WorldFixture,
    gardener: String,
    count: String,
    plant: String,
    garden: String,
) {
    let world = world.world();
    let garden_id = garden_id(&world, &garden);
    let plant_id = plant_id(&world, &plant);
    let detail = get_json(
        &world,
        &gardener,
        format!("/gardens/{garden_id}/?plant={plant_id}"),
    );
    let expected: usize = count.parse().expect("note count");
    let notes = detail["notes"].as_array().expect("notes");
    assert_eq!(notes.len(), expected);
    assert_eq!(detail["selectedPlant"]["name"], plant.as_str());
}

#[scenario(
    path = "tests/features/garden_sharing.feature",
    name = "A shared garden appears on the gardener's dashboard"
)]
fn shared_garden_on_dashboard(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/garden_sharing.feature",
    name = "Strangers are turned away from a garden"
)]
fn strangers_are_turned_away(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/garden_sharing.feature",
    name = "A shared gardener keeps notes the owner can read"
)]
fn shared_gardener_keeps_notes(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/garden_sharing.feature",
    name = "Shared gardeners cannot delete the garden"
)]
fn shared_gardeners_cannot_delete(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/garden_sharing.feature",
    name = "The owner deletes a shared garden"
)]
fn owner_deletes_shared_garden(world: WorldFixture) {
    drop(world);
}
