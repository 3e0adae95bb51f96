#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, HashSet};
use std::net::TcpListener;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use axum::extract::{Path as UrlPath, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Deserialize;

use pickdong::client::Client;
use pickdong::config::ClientConfig;
use pickdong::model::{
    Area, EmailSubscribeUpdate, MemberProfile, PageMeta, SubArea, SubscriptionsResponse, Tour,
    TourDetail, TourDirections, TourId, TourOverview, ToursPage, UpdateSubscriptionRequest,
};

pub const TOKEN: &str = "valid-token";

/// What the fake backend serves and what it has seen.
pub struct BackendState {
    pub valid_token: String,
    pub email: String,
    pub email_subscribe: bool,
    pub areas: Vec<Area>,
    pub pages: Vec<ToursPage>,
    pub details: HashMap<TourId, TourDetail>,

    /// Route labels (`"GET /api/member"`) that answer 500.
    pub fail: HashSet<String>,
    pub fail_pages: HashSet<u32>,

    pub hits: BTreeMap<String, usize>,
    pub auth_headers: Vec<(String, Option<String>)>,
    pub page_queries: Vec<u32>,
    pub updates: Vec<UpdateSubscriptionRequest>,
    pub deleted: bool,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            valid_token: TOKEN.to_string(),
            email: "member@pickdong.test".to_string(),
            email_subscribe: true,
            areas: seoul_and_daegu(),
            pages: vec![page(1..=3, false)],
            details: HashMap::new(),
            fail: HashSet::new(),
            fail_pages: HashSet::new(),
            hits: BTreeMap::new(),
            auth_headers: Vec::new(),
            page_queries: Vec::new(),
            updates: Vec::new(),
            deleted: false,
        }
    }
}

impl BackendState {
    pub fn hits(&self, label: &str) -> usize {
        self.hits.get(label).copied().unwrap_or(0)
    }
}

type Shared = Arc<Mutex<BackendState>>;

pub struct FakeBackend {
    pub base_url: String,
    state: Shared,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl FakeBackend {
    pub fn state(&self) -> MutexGuard<'_, BackendState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn config(&self, data_dir: &Path) -> ClientConfig {
        ClientConfig::for_dir(&self.base_url, data_dir)
    }

    /// A client whose data dir already holds `token` (and `user`, if given).
    pub fn client(&self, data_dir: &Path, token: Option<&str>, user: Option<&str>) -> Result<Client> {
        seed_session(data_dir, token, user)?;
        Client::open(self.config(data_dir))
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

pub fn spawn_backend(state: BackendState) -> Result<FakeBackend> {
    let listener = TcpListener::bind("127.0.0.1:0").context("bind fake backend")?;
    listener
        .set_nonblocking(true)
        .context("set listener nonblocking")?;
    let addr = listener.local_addr().context("listener addr")?;

    let state: Shared = Arc::new(Mutex::new(state));
    let app = router(state.clone());
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let thread = thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("build tokio runtime");
        rt.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("adopt std listener");
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await
                .expect("serve fake backend");
        });
    });

    Ok(FakeBackend {
        base_url: format!("http://{}", addr),
        state,
        shutdown: Some(tx),
        thread: Some(thread),
    })
}

pub fn seed_session(data_dir: &Path, token: Option<&str>, user: Option<&str>) -> Result<()> {
    let mut entries = serde_json::Map::new();
    if let Some(t) = token {
        entries.insert("pickdong_token".to_string(), t.into());
    }
    if let Some(u) = user {
        entries.insert("pickdong_user".to_string(), u.into());
    }
    std::fs::create_dir_all(data_dir).context("create data dir")?;
    std::fs::write(
        data_dir.join("session.json"),
        serde_json::to_vec(&entries).context("serialize session")?,
    )
    .context("write session.json")
}

pub fn read_session(data_dir: &Path) -> serde_json::Map<String, serde_json::Value> {
    std::fs::read(data_dir.join("session.json"))
        .ok()
        .and_then(|b| serde_json::from_slice(&b).ok())
        .unwrap_or_default()
}

pub fn tour(id: TourId) -> Tour {
    Tour {
        tour_id: id,
        title: format!("행사 {}", id),
        start_date: "2025-09-01".to_string(),
        end_date: "2025-09-05".to_string(),
        area: "서울".to_string(),
        sigun_gu: "용산구".to_string(),
        main_image_url: String::new(),
        keywords: vec!["축제".to_string()],
    }
}

pub fn page(ids: impl IntoIterator<Item = TourId>, has_next: bool) -> ToursPage {
    let tours: Vec<Tour> = ids.into_iter().map(tour).collect();
    ToursPage {
        meta: PageMeta {
            content_size: tours.len() as u32,
            has_next,
        },
        tours,
    }
}

pub fn detail(id: TourId) -> TourDetail {
    TourDetail {
        tour_id: id,
        title: format!("행사 {}", id),
        keywords: vec!["축제".to_string()],
        images: Vec::new(),
        overview: TourOverview {
            event_start_date: "20250901".to_string(),
            event_end_date: "20250905".to_string(),
            ..TourOverview::default()
        },
        detail_info: Vec::new(),
        directions: TourDirections::default(),
    }
}

fn sub(code: &str, name: &str, subscribe: bool) -> SubArea {
    SubArea {
        sigun_gu_code: code.to_string(),
        name: name.to_string(),
        subscribe,
    }
}

pub fn seoul_and_daegu() -> Vec<Area> {
    vec![
        Area {
            area_code: "1".to_string(),
            name: "서울".to_string(),
            sub_areas: vec![
                sub("5", "광진구", true),
                sub("21", "용산구", true),
                sub("23", "종로구", false),
            ],
        },
        Area {
            area_code: "4".to_string(),
            name: "대구".to_string(),
            sub_areas: vec![sub("3", "달서구", false)],
        },
    ]
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/api/member", get(get_member).delete(delete_member))
        .route("/api/member/email-subscribe", patch(patch_email))
        .route(
            "/api/member/subscriptions",
            get(get_subscriptions).put(put_subscription),
        )
        .route("/api/member/subscriptions/tours", get(get_tours))
        .route("/api/tours/:id", get(get_detail))
        .with_state(state)
}

fn lock(state: &Shared) -> MutexGuard<'_, BackendState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// Record the request, then reject it if the credential is wrong or the
/// route is set to fail.
fn gate(st: &mut BackendState, label: &str, headers: &HeaderMap) -> Option<Response> {
    *st.hits.entry(label.to_string()).or_default() += 1;
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    st.auth_headers.push((label.to_string(), auth.clone()));

    if auth.as_deref() != Some(format!("Bearer {}", st.valid_token).as_str()) {
        return Some(StatusCode::UNAUTHORIZED.into_response());
    }
    if st.fail.contains(label) {
        return Some(StatusCode::INTERNAL_SERVER_ERROR.into_response());
    }
    None
}

async fn get_member(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut st = lock(&state);
    if let Some(resp) = gate(&mut st, "GET /api/member", &headers) {
        return resp;
    }
    Json(MemberProfile {
        email: st.email.clone(),
        email_subscribe: Some(st.email_subscribe),
    })
    .into_response()
}

async fn delete_member(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut st = lock(&state);
    if let Some(resp) = gate(&mut st, "DELETE /api/member", &headers) {
        return resp;
    }
    st.deleted = true;
    StatusCode::NO_CONTENT.into_response()
}

async fn patch_email(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<EmailSubscribeUpdate>,
) -> Response {
    let mut st = lock(&state);
    if let Some(resp) = gate(&mut st, "PATCH /api/member/email-subscribe", &headers) {
        return resp;
    }
    st.email_subscribe = body.email_subscribe;
    Json(body).into_response()
}

async fn get_subscriptions(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut st = lock(&state);
    if let Some(resp) = gate(&mut st, "GET /api/member/subscriptions", &headers) {
        return resp;
    }
    Json(SubscriptionsResponse {
        areas: st.areas.clone(),
    })
    .into_response()
}

async fn put_subscription(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<UpdateSubscriptionRequest>,
) -> Response {
    let mut st = lock(&state);
    if let Some(resp) = gate(&mut st, "PUT /api/member/subscriptions", &headers) {
        return resp;
    }
    let mut found = false;
    for area in st.areas.iter_mut().filter(|a| a.area_code == body.area_code) {
        for s in area
            .sub_areas
            .iter_mut()
            .filter(|s| s.sigun_gu_code == body.sigun_gu_code)
        {
            s.subscribe = body.subscribe;
            found = true;
        }
    }
    if !found {
        return StatusCode::NOT_FOUND.into_response();
    }
    st.updates.push(body);
    StatusCode::OK.into_response()
}

#[derive(Deserialize)]
struct PageQuery {
    page: u32,
}

async fn get_tours(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(q): Query<PageQuery>,
) -> Response {
    let mut st = lock(&state);
    if let Some(resp) = gate(&mut st, "GET /api/member/subscriptions/tours", &headers) {
        return resp;
    }
    st.page_queries.push(q.page);
    if st.fail_pages.contains(&q.page) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let body = st
        .pages
        .get(q.page as usize)
        .cloned()
        .unwrap_or_else(|| page(std::iter::empty(), false));
    Json(body).into_response()
}

async fn get_detail(
    State(state): State<Shared>,
    headers: HeaderMap,
    UrlPath(id): UrlPath<TourId>,
) -> Response {
    let mut st = lock(&state);
    if let Some(resp) = gate(&mut st, "GET /api/tours/{id}", &headers) {
        return resp;
    }
    match st.details.get(&id) {
        Some(d) => Json(d.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
