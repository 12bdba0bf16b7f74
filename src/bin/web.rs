//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Roster and match state are persisted as JSON under DATA_DIR (default "data")
//! so a restart resumes exactly where the user left off.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use cricket_match_web::{
    back_to_captains, back_to_selection, change_role, confirm_selection, create_player, flip,
    generate_teams, reshuffle_teams, set_captain_a, set_captain_b, toggle_player,
    toggle_select_all, MatchError, MatchSession, MatchStep, Player, PlayerRole, Storage,
    TOSS_DELAY,
};
use serde::Deserialize;
use std::sync::RwLock;
use uuid::Uuid;

/// Whole application state: the roster, the one match session, and the store
/// that keeps both on disk.
struct AppData {
    roster: Vec<Player>,
    session: MatchSession,
    storage: Storage,
}

type AppState = Data<RwLock<AppData>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    full_name: String,
    #[serde(default)]
    role: Option<PlayerRole>,
}

#[derive(Deserialize)]
struct UpdateRoleBody {
    role: Option<PlayerRole>,
}

/// Captain picker body: None clears the slot.
#[derive(Deserialize)]
struct CaptainBody {
    player_id: Option<Uuid>,
}

#[derive(Deserialize)]
struct TossBody {
    /// When true, the outcome is recorded on the match session; otherwise the
    /// result is transient and a fresh flip discards it.
    #[serde(default)]
    remember: bool,
}

/// Path segment: player id (e.g. /api/players/{player_id})
#[derive(Deserialize)]
struct PlayerPath {
    player_id: Uuid,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "cricket-match-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full roster.
#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&g.roster)
}

/// Add a player to the roster (name must be non-empty and unique).
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let g = &mut *g;
    match create_player(&g.roster, &body.full_name, body.role) {
        Ok(player) => {
            g.roster = g.storage.save_player(player);
            HttpResponse::Ok().json(&g.roster)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Update a player's role.
#[put("/api/players/{player_id}")]
async fn api_update_player(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<UpdateRoleBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let g = &mut *g;
    match change_role(&g.roster, path.player_id, body.role) {
        Ok(player) => {
            g.roster = g.storage.update_player(player);
            HttpResponse::Ok().json(&g.roster)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Delete a player. Also scrubs the match session (selection membership and
/// captain slots) in the same update, then persists both files.
#[delete("/api/players/{player_id}")]
async fn api_delete_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let g = &mut *g;
    if !g.roster.iter().any(|p| p.id == path.player_id) {
        let e = MatchError::PlayerNotFound(path.player_id);
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }
    // Roster removal and session scrub happen under the same lock, so no
    // observer ever sees a stale captain or selection entry.
    g.roster = g.storage.delete_player(path.player_id);
    g.session.remove_player(path.player_id);
    g.storage.persist_match_state(&g.session);
    HttpResponse::Ok().json(&g.roster)
}

/// Reset everything: roster, match session, and the persisted files. The
/// frontend asks for confirmation before calling this; it is irreversible.
#[post("/api/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.roster.clear();
    g.session = MatchSession::new();
    g.storage.clear_all();
    log::info!("All roster and match data cleared");
    HttpResponse::Ok().json(&g.session)
}

/// Current match-session snapshot.
#[get("/api/match")]
async fn api_get_match(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&g.session)
}

/// Toggle one player in or out of the match selection.
#[post("/api/match/players/{player_id}/toggle")]
async fn api_toggle_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let g = &mut *g;
    match toggle_player(&mut g.session, &g.roster, path.player_id) {
        Ok(()) => {
            g.storage.persist_match_state(&g.session);
            HttpResponse::Ok().json(&g.session)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Select-all / deselect-all toggle.
#[post("/api/match/select-all")]
async fn api_toggle_select_all(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let g = &mut *g;
    toggle_select_all(&mut g.session, &g.roster);
    g.storage.persist_match_state(&g.session);
    HttpResponse::Ok().json(&g.session)
}

/// Advance select-players -> select-captains (requires >= 2 selected).
#[post("/api/match/next")]
async fn api_match_next(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match confirm_selection(&mut g.session) {
        Ok(()) => {
            g.storage.persist_match_state(&g.session);
            HttpResponse::Ok().json(&g.session)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Step backward from wherever the wizard currently is.
#[post("/api/match/back")]
async fn api_match_back(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let result = match g.session.step {
        MatchStep::SelectCaptains => back_to_selection(&mut g.session),
        MatchStep::ViewTeams => back_to_captains(&mut g.session),
        MatchStep::SelectPlayers => Err(MatchError::InvalidStep),
    };
    match result {
        Ok(()) => {
            g.storage.persist_match_state(&g.session);
            HttpResponse::Ok().json(&g.session)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Set (or clear) captain A.
#[put("/api/match/captain-a")]
async fn api_set_captain_a(state: AppState, body: Json<CaptainBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match set_captain_a(&mut g.session, body.player_id) {
        Ok(()) => {
            g.storage.persist_match_state(&g.session);
            HttpResponse::Ok().json(&g.session)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Set (or clear) captain B.
#[put("/api/match/captain-b")]
async fn api_set_captain_b(state: AppState, body: Json<CaptainBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match set_captain_b(&mut g.session, body.player_id) {
        Ok(()) => {
            g.storage.persist_match_state(&g.session);
            HttpResponse::Ok().json(&g.session)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Generate teams from the chosen pool and captains (select-captains -> view-teams).
#[post("/api/match/generate")]
async fn api_generate_teams(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let g = &mut *g;
    match generate_teams(&mut g.session, &g.roster, &mut rand::thread_rng()) {
        Ok(()) => {
            g.storage.persist_match_state(&g.session);
            HttpResponse::Ok().json(&g.session)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Reshuffle: new random split from the same pool and captains (view-teams only).
#[post("/api/match/reshuffle")]
async fn api_reshuffle_teams(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let g = &mut *g;
    match reshuffle_teams(&mut g.session, &g.roster, &mut rand::thread_rng()) {
        Ok(()) => {
            g.storage.persist_match_state(&g.session);
            HttpResponse::Ok().json(&g.session)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Flip the coin after the animation delay. Stateless unless `remember` is
/// set, in which case the outcome lands on the match session and is persisted.
#[post("/api/toss")]
async fn api_toss(state: AppState, body: Option<Json<TossBody>>) -> HttpResponse {
    tokio::time::sleep(TOSS_DELAY).await;
    let result = flip(&mut rand::thread_rng());
    let remember = body.map(|b| b.remember).unwrap_or(false);
    if remember {
        let mut g = match state.write() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        g.session.toss_result = Some(result);
        g.storage.persist_match_state(&g.session);
    }
    HttpResponse::Ok().json(serde_json::json!({ "result": result }))
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
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let storage = Storage::new(&data_dir)?;
    let roster = storage.load_roster();
    let session = storage.load_match_state();
    log::info!(
        "Loaded {} player(s) from {}; resuming at step {:?}",
        roster.len(),
        data_dir,
        session.step
    );

    let state = Data::new(RwLock::new(AppData {
        roster,
        session,
        storage,
    }));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_update_player)
            .service(api_delete_player)
            .service(api_reset)
            .service(api_get_match)
            .service(api_toggle_player)
            .service(api_toggle_select_all)
            .service(api_match_next)
            .service(api_match_back)
            .service(api_set_captain_a)
            .service(api_set_captain_b)
            .service(api_generate_teams)
            .service(api_reshuffle_teams)
            .service(api_toss)
            .service(Files::new("/static", "static"))
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
