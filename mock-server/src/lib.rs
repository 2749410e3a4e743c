use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub const TEAM_ID: u64 = 1;
const CREATED_AT: &str = "2024-01-01 00:00:00 (Etc/UTC)";
const CREATED_AT_TIMESTAMP: i64 = 1_704_067_200;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub team_id: u64,
    pub created_at: String,
    pub created_at_timestamp: i64,
}

#[derive(Deserialize)]
pub struct CreateProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct UpdateProject {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Key {
    pub key_id: u64,
    pub key_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Fields accepted when creating or updating a key.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct KeyInput {
    pub key_id: Option<u64>,
    pub key_name: Option<String>,
    pub description: Option<String>,
    pub platforms: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct KeysBody {
    pub keys: Vec<KeyInput>,
}

#[derive(Deserialize)]
pub struct KeyIdsBody {
    pub keys: Vec<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TeamUser {
    pub user_id: u64,
    pub email: String,
    pub fullname: String,
    pub role: String,
    pub created_at: String,
}

#[derive(Deserialize)]
pub struct UpdateTeamUser {
    pub role: String,
}

#[derive(Deserialize)]
pub struct UploadFile {
    pub data: String,
    pub filename: String,
    pub lang_iso: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Default)]
pub struct Store {
    projects: BTreeMap<String, Project>,
    keys: HashMap<String, BTreeMap<u64, Key>>,
    files: HashMap<String, Vec<String>>,
    team_users: BTreeMap<u64, TeamUser>,
    next_key_id: u64,
}

impl Store {
    fn seeded() -> Self {
        let mut team_users = BTreeMap::new();
        for (user_id, email, role) in [(1, "owner@example.com", "owner"), (2, "dev@example.com", "member")] {
            team_users.insert(
                user_id,
                TeamUser {
                    user_id,
                    email: email.to_string(),
                    fullname: email.split('@').next().unwrap_or_default().to_string(),
                    role: role.to_string(),
                    created_at: CREATED_AT.to_string(),
                },
            );
        }
        Self {
            team_users,
            next_key_id: 1,
            ..Self::default()
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult = Result<Response, Response>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    let api = Router::new()
        .route("/teams", get(list_teams))
        .route("/teams/{team_id}/users", get(list_team_users))
        .route(
            "/teams/{team_id}/users/{user_id}",
            get(get_team_user).put(update_team_user).delete(delete_team_user),
        )
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{project_id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/projects/{project_id}/empty", put(empty_project))
        .route(
            "/projects/{project_id}/keys",
            get(list_keys)
                .post(create_keys)
                .put(bulk_update_keys)
                .delete(bulk_delete_keys),
        )
        .route(
            "/projects/{project_id}/keys/{key_id}",
            get(get_key).put(update_key).delete(delete_key),
        )
        .route("/projects/{project_id}/files", get(list_files))
        .route("/projects/{project_id}/files/upload", post(upload_file))
        .layer(middleware::from_fn(require_token))
        .with_state(db);

    Router::new()
        .nest("/api2", api)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Error body in the shape the real API uses.
fn api_error(status: StatusCode, message: &str) -> Response {
    let body = json!({"error": {"message": message, "code": status.as_u16()}});
    (status, Json(body)).into_response()
}

fn not_found() -> Response {
    api_error(StatusCode::NOT_FOUND, "Not Found")
}

async fn require_token(req: Request, next: Next) -> Response {
    let token = req.headers().get("x-api-token");
    if token.is_some_and(|t| !t.is_empty()) {
        next.run(req).await
    } else {
        api_error(StatusCode::UNAUTHORIZED, "Invalid `X-Api-Token` header")
    }
}

/// Slice `items` when the caller asked for a page, adding the pagination
/// headers. Without `page` or `limit` the full list is returned bare.
fn paginate<T>(items: Vec<T>, query: &PageQuery) -> (HeaderMap, Vec<T>) {
    let mut headers = HeaderMap::new();
    if query.page.is_none() && query.limit.is_none() {
        return (headers, items);
    }

    let limit = query.limit.unwrap_or(100).max(1);
    let page = query.page.unwrap_or(1).max(1);
    let total = items.len() as u64;
    let page_count = total.div_ceil(limit);
    let start = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
    let slice = items
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .collect();

    for (name, value) in [
        ("x-pagination-total-count", total),
        ("x-pagination-page-count", page_count),
        ("x-pagination-limit", limit),
        ("x-pagination-page", page),
    ] {
        headers.insert(name, HeaderValue::from(value));
    }
    (headers, slice)
}

// --- teams ---

async fn list_teams() -> Json<Value> {
    Json(json!({
        "teams": [{
            "team_id": TEAM_ID,
            "name": "Acme",
            "created_at": CREATED_AT,
            "created_at_timestamp": CREATED_AT_TIMESTAMP,
            "plan": "Essential",
        }]
    }))
}

fn check_team(team_id: u64) -> Result<(), Response> {
    if team_id == TEAM_ID {
        Ok(())
    } else {
        Err(not_found())
    }
}

async fn list_team_users(State(db): State<Db>, Path(team_id): Path<u64>) -> ApiResult {
    check_team(team_id)?;
    let store = db.read().await;
    let users: Vec<TeamUser> = store.team_users.values().cloned().collect();
    Ok(Json(json!({"team_id": team_id, "team_users": users})).into_response())
}

async fn get_team_user(
    State(db): State<Db>,
    Path((team_id, user_id)): Path<(u64, u64)>,
) -> ApiResult {
    check_team(team_id)?;
    let store = db.read().await;
    let user = store.team_users.get(&user_id).ok_or_else(not_found)?;
    Ok(Json(json!({"team_id": team_id, "team_user": user})).into_response())
}

async fn update_team_user(
    State(db): State<Db>,
    Path((team_id, user_id)): Path<(u64, u64)>,
    Json(input): Json<UpdateTeamUser>,
) -> ApiResult {
    check_team(team_id)?;
    let mut store = db.write().await;
    let user = store.team_users.get_mut(&user_id).ok_or_else(not_found)?;
    user.role = input.role;
    Ok(Json(json!({"team_id": team_id, "team_user": user})).into_response())
}

async fn delete_team_user(
    State(db): State<Db>,
    Path((team_id, user_id)): Path<(u64, u64)>,
) -> ApiResult {
    check_team(team_id)?;
    let mut store = db.write().await;
    store.team_users.remove(&user_id).ok_or_else(not_found)?;
    Ok(Json(json!({"team_id": team_id, "team_user_deleted": true})).into_response())
}

// --- projects ---

async fn list_projects(State(db): State<Db>, Query(query): Query<PageQuery>) -> Response {
    let store = db.read().await;
    let (headers, projects) = paginate(store.projects.values().cloned().collect(), &query);
    (headers, Json(json!({"projects": projects}))).into_response()
}

async fn create_project(State(db): State<Db>, Json(input): Json<CreateProject>) -> Json<Project> {
    let project = Project {
        project_id: Uuid::new_v4().simple().to_string(),
        name: input.name,
        description: input.description,
        team_id: TEAM_ID,
        created_at: CREATED_AT.to_string(),
        created_at_timestamp: CREATED_AT_TIMESTAMP,
    };
    let mut store = db.write().await;
    store.keys.insert(project.project_id.clone(), BTreeMap::new());
    store.projects.insert(project.project_id.clone(), project.clone());
    Json(project)
}

async fn get_project(State(db): State<Db>, Path(project_id): Path<String>) -> ApiResult {
    let store = db.read().await;
    let project = store.projects.get(&project_id).ok_or_else(not_found)?;
    Ok(Json(project.clone()).into_response())
}

async fn update_project(
    State(db): State<Db>,
    Path(project_id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> ApiResult {
    let mut store = db.write().await;
    let project = store.projects.get_mut(&project_id).ok_or_else(not_found)?;
    project.name = input.name;
    if let Some(description) = input.description {
        project.description = description;
    }
    Ok(Json(project.clone()).into_response())
}

async fn delete_project(State(db): State<Db>, Path(project_id): Path<String>) -> ApiResult {
    let mut store = db.write().await;
    store.projects.remove(&project_id).ok_or_else(not_found)?;
    store.keys.remove(&project_id);
    store.files.remove(&project_id);
    Ok(Json(json!({"project_id": project_id, "project_deleted": true})).into_response())
}

async fn empty_project(State(db): State<Db>, Path(project_id): Path<String>) -> ApiResult {
    let mut store = db.write().await;
    let keys = store.keys.get_mut(&project_id).ok_or_else(not_found)?;
    keys.clear();
    Ok(Json(json!({"project_id": project_id, "keys_deleted": true})).into_response())
}

// --- keys ---

fn apply(key: &mut Key, input: KeyInput) {
    if let Some(key_name) = input.key_name {
        key.key_name = key_name;
    }
    if let Some(description) = input.description {
        key.description = description;
    }
    if let Some(platforms) = input.platforms {
        key.platforms = platforms;
    }
    if let Some(tags) = input.tags {
        key.tags = tags;
    }
}

async fn list_keys(
    State(db): State<Db>,
    Path(project_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> ApiResult {
    let store = db.read().await;
    let keys = store.keys.get(&project_id).ok_or_else(not_found)?;
    let (headers, keys) = paginate(keys.values().cloned().collect(), &query);
    Ok((headers, Json(json!({"project_id": project_id, "keys": keys}))).into_response())
}

async fn create_keys(
    State(db): State<Db>,
    Path(project_id): Path<String>,
    Json(body): Json<KeysBody>,
) -> ApiResult {
    let mut guard = db.write().await;
    let store = &mut *guard;
    let keys = store.keys.get_mut(&project_id).ok_or_else(not_found)?;

    let mut created = Vec::new();
    let mut errors = Vec::new();
    for input in body.keys {
        let Some(key_name) = input.key_name.clone() else {
            errors.push(json!({"message": "`key_name` is required", "code": 400}));
            continue;
        };
        if keys.values().any(|k| k.key_name == key_name) {
            errors.push(json!({
                "message": "This key name is already taken",
                "code": 400,
                "key": {"key_name": key_name},
            }));
            continue;
        }
        let mut key = Key {
            key_id: store.next_key_id,
            key_name,
            description: String::new(),
            platforms: Vec::new(),
            tags: Vec::new(),
        };
        store.next_key_id += 1;
        apply(&mut key, input);
        keys.insert(key.key_id, key.clone());
        created.push(key);
    }

    Ok(Json(json!({"project_id": project_id, "keys": created, "errors": errors})).into_response())
}

async fn bulk_update_keys(
    State(db): State<Db>,
    Path(project_id): Path<String>,
    Json(body): Json<KeysBody>,
) -> ApiResult {
    let mut store = db.write().await;
    let keys = store.keys.get_mut(&project_id).ok_or_else(not_found)?;

    let mut updated = Vec::new();
    let mut errors = Vec::new();
    for input in body.keys {
        match input.key_id.and_then(|id| keys.get_mut(&id)) {
            Some(key) => {
                apply(key, input);
                updated.push(key.clone());
            }
            None => errors.push(json!({
                "message": "Key not found",
                "code": 404,
                "key": {"key_id": input.key_id},
            })),
        }
    }

    Ok(Json(json!({"project_id": project_id, "keys": updated, "errors": errors})).into_response())
}

async fn bulk_delete_keys(
    State(db): State<Db>,
    Path(project_id): Path<String>,
    Json(body): Json<KeyIdsBody>,
) -> ApiResult {
    let mut store = db.write().await;
    let keys = store.keys.get_mut(&project_id).ok_or_else(not_found)?;
    for key_id in &body.keys {
        keys.remove(key_id);
    }
    Ok(Json(json!({"project_id": project_id, "keys_removed": true, "keys_locked": 0})).into_response())
}

async fn get_key(State(db): State<Db>, Path((project_id, key_id)): Path<(String, u64)>) -> ApiResult {
    let store = db.read().await;
    let key = store
        .keys
        .get(&project_id)
        .and_then(|keys| keys.get(&key_id))
        .ok_or_else(not_found)?;
    Ok(Json(json!({"project_id": project_id, "key": key})).into_response())
}

async fn update_key(
    State(db): State<Db>,
    Path((project_id, key_id)): Path<(String, u64)>,
    Json(input): Json<KeyInput>,
) -> ApiResult {
    let mut store = db.write().await;
    let key = store
        .keys
        .get_mut(&project_id)
        .and_then(|keys| keys.get_mut(&key_id))
        .ok_or_else(not_found)?;
    apply(key, input);
    Ok(Json(json!({"project_id": project_id, "key": key})).into_response())
}

async fn delete_key(
    State(db): State<Db>,
    Path((project_id, key_id)): Path<(String, u64)>,
) -> ApiResult {
    let mut store = db.write().await;
    store
        .keys
        .get_mut(&project_id)
        .and_then(|keys| keys.remove(&key_id))
        .ok_or_else(not_found)?;
    Ok(Json(json!({"project_id": project_id, "key_removed": true, "keys_locked": 0})).into_response())
}

// --- files ---

async fn list_files(State(db): State<Db>, Path(project_id): Path<String>) -> ApiResult {
    let store = db.read().await;
    if !store.projects.contains_key(&project_id) {
        return Err(not_found());
    }
    let files: Vec<Value> = store
        .files
        .get(&project_id)
        .map(|names| {
            names
                .iter()
                .map(|name| json!({"filename": name, "key_count": 0}))
                .collect()
        })
        .unwrap_or_default();
    Ok(Json(json!({"project_id": project_id, "files": files})).into_response())
}

async fn upload_file(
    State(db): State<Db>,
    Path(project_id): Path<String>,
    Json(input): Json<UploadFile>,
) -> ApiResult {
    if input.data.is_empty() || input.lang_iso.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Invalid `data` parameter"));
    }
    let mut store = db.write().await;
    if !store.projects.contains_key(&project_id) {
        return Err(not_found());
    }
    store
        .files
        .entry(project_id.clone())
        .or_default()
        .push(input.filename.clone());

    let process = json!({
        "process_id": Uuid::new_v4().simple().to_string(),
        "type": "file-import",
        "status": "queued",
        "message": "",
        "created_by": 1,
        "created_by_email": "owner@example.com",
        "created_at": CREATED_AT,
        "created_at_timestamp": CREATED_AT_TIMESTAMP,
        "details": {"files": [{"name_original": input.filename, "status": "queued"}]},
    });
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({"project_id": project_id, "process": process})),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_without_query_returns_everything_bare() {
        let (headers, items) = paginate(vec![1, 2, 3], &PageQuery::default());
        assert!(headers.is_empty());
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn paginate_slices_and_sets_headers() {
        let query = PageQuery {
            page: Some(2),
            limit: Some(2),
        };
        let (headers, items) = paginate(vec![1, 2, 3, 4, 5], &query);
        assert_eq!(items, vec![3, 4]);
        assert_eq!(headers["x-pagination-total-count"], "5");
        assert_eq!(headers["x-pagination-page-count"], "3");
        assert_eq!(headers["x-pagination-limit"], "2");
        assert_eq!(headers["x-pagination-page"], "2");
    }

    #[test]
    fn huge_page_number_yields_empty_page() {
        let query = PageQuery {
            page: Some(u64::MAX),
            limit: Some(1000),
        };
        let (headers, items) = paginate(vec![1, 2, 3], &query);
        assert!(items.is_empty());
        assert_eq!(headers["x-pagination-page"], u64::MAX.to_string().as_str());
    }

    #[test]
    fn key_input_fields_are_optional() {
        let input: KeyInput = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.key_name.is_none());
        assert!(input.tags.is_none());
    }

    #[test]
    fn apply_only_touches_supplied_fields() {
        let mut key = Key {
            key_id: 1,
            key_name: "welcome".to_string(),
            description: "Greeting".to_string(),
            platforms: vec!["web".to_string()],
            tags: Vec::new(),
        };
        apply(
            &mut key,
            KeyInput {
                tags: Some(vec!["home".to_string()]),
                ..KeyInput::default()
            },
        );
        assert_eq!(key.key_name, "welcome");
        assert_eq!(key.description, "Greeting");
        assert_eq!(key.tags, vec!["home"]);
    }

    #[test]
    fn seeded_store_has_team_members() {
        let store = Store::seeded();
        assert_eq!(store.team_users.len(), 2);
        assert_eq!(store.team_users[&1].role, "owner");
    }
}
