//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use team_roulette_web::{
    complete_draw, complete_spin, draw_next_member, partition_teams, reset_assignment,
    spin_wheel, start_assignment, RouletteSession, SessionId, DEFAULT_EXTRA_ROTATIONS,
};

/// Per-session entry: session data + last activity time (for auto-cleanup).
struct SessionEntry {
    session: RouletteSession,
    last_activity: Instant,
}

/// In-memory state: many sessions by ID. Entries are removed after inactivity.
type AppState = Data<RwLock<HashMap<SessionId, SessionEntry>>>;

/// Inactivity threshold: sessions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateSessionBody {
    #[serde(default = "default_extra_rotations")]
    extra_rotations: u32,
}

fn default_extra_rotations() -> u32 {
    DEFAULT_EXTRA_ROTATIONS
}

#[derive(Deserialize)]
struct AddParticipantBody {
    name: String,
}

#[derive(Deserialize)]
struct ImportParticipantsBody {
    csv: String,
}

#[derive(Deserialize)]
struct ExtraRotationsBody {
    extra_rotations: u32,
}

#[derive(Deserialize)]
struct CapacityBody {
    capacity: usize,
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

/// Path segments: session id and participant index
/// (e.g. /api/sessions/{id}/participants/{index})
#[derive(Deserialize)]
struct SessionIndexPath {
    id: SessionId,
    index: usize,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "team-roulette-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new session (returns it with id; client stores id for subsequent requests).
#[post("/api/sessions")]
async fn api_create_session(state: AppState, body: Option<Json<CreateSessionBody>>) -> HttpResponse {
    let extra_rotations = body
        .as_ref()
        .map(|b| b.extra_rotations)
        .unwrap_or_else(default_extra_rotations);
    let session = RouletteSession::with_extra_rotations(extra_rotations);
    let id = session.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        SessionEntry {
            session,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(&g.get(&id).unwrap().session)
}

/// Get a session by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.session)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    }
}

/// Add a participant to the pool.
#[post("/api/sessions/{id}/participants")]
async fn api_add_participant(
    state: AppState,
    path: Path<SessionPath>,
    body: Json<AddParticipantBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match s.add_participant(&body.name) {
        Ok(()) => HttpResponse::Ok().json(s),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Bulk-add participants from CSV text. Returns counts alongside the session.
#[post("/api/sessions/{id}/participants/import")]
async fn api_import_participants(
    state: AppState,
    path: Path<SessionPath>,
    body: Json<ImportParticipantsBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    let (added, skipped) = s.import_participants(&body.csv);
    HttpResponse::Ok().json(serde_json::json!({
        "added": added,
        "skipped": skipped,
        "session": s,
    }))
}

/// Remove a participant by list position.
#[delete("/api/sessions/{id}/participants/{index}")]
async fn api_remove_participant(state: AppState, path: Path<SessionIndexPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match s.remove_participant(path.index) {
        Ok(_) => HttpResponse::Ok().json(s),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Clear the participant list.
#[delete("/api/sessions/{id}/participants")]
async fn api_clear_participants(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    s.clear_participants();
    HttpResponse::Ok().json(s)
}

/// Update the number of extra rotations applied to spin targets.
#[put("/api/sessions/{id}/extra-rotations")]
async fn api_set_extra_rotations(
    state: AppState,
    path: Path<SessionPath>,
    body: Json<ExtraRotationsBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    s.set_extra_rotations(body.extra_rotations);
    HttpResponse::Ok().json(s)
}

/// Spin for a single winner (pool not consumed). The winner and target angle
/// land in the session's last_spin; the page animates toward the angle and
/// then calls spin/complete to release the guard.
#[post("/api/sessions/{id}/spin")]
async fn api_spin(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match spin_wheel(s) {
        Ok(_) => HttpResponse::Ok().json(s),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Wheel animation finished: release the in-flight guard.
#[post("/api/sessions/{id}/spin/complete")]
async fn api_spin_complete(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    complete_spin(s);
    HttpResponse::Ok().json(s)
}

/// Start a team assignment run with the given players-per-team.
#[post("/api/sessions/{id}/teams/start")]
async fn api_start_teams(
    state: AppState,
    path: Path<SessionPath>,
    body: Json<CapacityBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match start_assignment(s, body.capacity) {
        Ok(()) => HttpResponse::Ok().json(s),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Draw the next team member from the run's remaining pool.
#[post("/api/sessions/{id}/teams/draw")]
async fn api_draw_member(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match draw_next_member(s) {
        Ok(_) => HttpResponse::Ok().json(s),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Team-draw animation finished: release the in-flight guard.
#[post("/api/sessions/{id}/teams/draw/complete")]
async fn api_draw_complete(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    complete_draw(s);
    HttpResponse::Ok().json(s)
}

/// Quick mode: shuffle once and chunk into teams, no per-pick animation.
#[post("/api/sessions/{id}/teams/partition")]
async fn api_partition_teams(
    state: AppState,
    path: Path<SessionPath>,
    body: Json<CapacityBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match partition_teams(s, body.capacity) {
        Ok(()) => HttpResponse::Ok().json(s),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Drop the team run (pool untouched).
#[post("/api/sessions/{id}/teams/reset")]
async fn api_reset_teams(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    reset_assignment(s);
    HttpResponse::Ok().json(s)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<SessionId, SessionEntry>::new()));

    // Background task: every 30 minutes, remove sessions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive session(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_session)
            .service(api_get_session)
            .service(api_add_participant)
            .service(api_import_participants)
            .service(api_clear_participants)
            .service(api_remove_participant)
            .service(api_set_extra_rotations)
            .service(api_spin)
            .service(api_spin_complete)
            .service(api_start_teams)
            .service(api_draw_member)
            .service(api_draw_complete)
            .service(api_partition_teams)
            .service(api_reset_teams)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
