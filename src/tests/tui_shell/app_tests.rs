use std::collections::HashSet;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use reqwest::StatusCode;

use super::*;
use crate::api::ApiError;
use crate::feed::{FeedStatus, PageKind, TourSource};
use crate::model::{PageMeta, Tour, TourOverview, ToursPage};
use crate::session::SESSION_EXPIRED_REDIRECT;

#[derive(Default)]
struct FakeEvents {
    pages: Vec<ToursPage>,
    failing: HashSet<u32>,
    requested: Mutex<Vec<u32>>,
}

impl FakeEvents {
    fn requested(&self) -> Vec<u32> {
        self.requested
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl TourSource for FakeEvents {
    fn tours_page(&self, page: u32) -> Result<ToursPage, ApiError> {
        self.requested
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(page);
        if self.failing.contains(&page) {
            return Err(ApiError::Status {
                label: "get subscribed tours".to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(self
            .pages
            .get(page as usize)
            .cloned()
            .unwrap_or_else(|| tours_page(&[], false)))
    }
}

impl EventSource for FakeEvents {
    fn tour_detail(&self, tour_id: TourId) -> Result<TourDetail, ApiError> {
        Ok(TourDetail {
            tour_id,
            title: format!("행사 {}", tour_id),
            keywords: Vec::new(),
            images: Vec::new(),
            overview: TourOverview::default(),
            detail_info: Vec::new(),
            directions: Default::default(),
        })
    }
}

fn tours_page(ids: &[u64], has_next: bool) -> ToursPage {
    ToursPage {
        meta: PageMeta {
            content_size: ids.len() as u32,
            has_next,
        },
        tours: ids
            .iter()
            .map(|id| Tour {
                tour_id: *id,
                title: format!("행사 {}", id),
                start_date: String::new(),
                end_date: String::new(),
                area: String::new(),
                sigun_gu: String::new(),
                main_image_url: String::new(),
                keywords: Vec::new(),
            })
            .collect(),
    }
}

/// The client points at a closed port; nothing here may reach it.
fn app_with(events: Arc<FakeEvents>) -> (tempfile::TempDir, App) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ClientConfig::for_dir("http://127.0.0.1:9", dir.path());
    let client = Client::open(config).expect("open client");
    let app = App::new(client, events);
    (dir, app)
}

fn settle(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.is_fetching() {
        assert!(Instant::now() < deadline, "background fetch never finished");
        thread::sleep(Duration::from_millis(2));
        app.tick(Instant::now());
    }
}

fn open_feed(app: &mut App) {
    app.route = Route::MyPage;
    app.reload_feed();
    settle(app);
}

fn ids(app: &App) -> Vec<u64> {
    app.dashboard.feed.tours().iter().map(|t| t.tour_id).collect()
}

#[test]
fn reaching_last_row_requests_next_page_once() {
    let events = Arc::new(FakeEvents {
        pages: vec![tours_page(&[1, 2, 3], true), tours_page(&[3, 4, 5], false)],
        ..FakeEvents::default()
    });
    let (_dir, mut app) = app_with(events.clone());
    open_feed(&mut app);
    assert_eq!(ids(&app), vec![1, 2, 3]);

    app.move_down();
    assert_eq!(app.selected, 1);
    assert_eq!(app.worker.pending(), 0);

    app.move_down();
    assert_eq!(app.selected, 2);
    assert_eq!(
        app.dashboard.feed.status(),
        FeedStatus::Loading(PageKind::Continuation)
    );

    // Still busy: the sentinel is ignored.
    app.move_down();
    assert_eq!(app.worker.pending(), 1);

    settle(&mut app);
    assert_eq!(ids(&app), vec![1, 2, 3, 4, 5]);
    assert!(!app.dashboard.feed.has_next());

    for _ in 0..5 {
        app.move_down();
    }
    assert_eq!(app.selected, 4);
    assert_eq!(app.worker.pending(), 0);
    assert_eq!(events.requested(), vec![0, 1]);
}

#[test]
fn empty_first_page_with_more_still_pages_forward() {
    let events = Arc::new(FakeEvents {
        pages: vec![tours_page(&[], true), tours_page(&[7, 8], false)],
        ..FakeEvents::default()
    });
    let (_dir, mut app) = app_with(events.clone());
    open_feed(&mut app);
    assert!(app.dashboard.feed.tours().is_empty());

    app.move_down();
    settle(&mut app);

    assert_eq!(ids(&app), vec![7, 8]);
    assert_eq!(app.selected, 0);
    assert_eq!(events.requested(), vec![0, 1]);
}

#[test]
fn failed_continuation_keeps_rows_and_reports() {
    let events = Arc::new(FakeEvents {
        pages: vec![tours_page(&[1, 2], true)],
        failing: HashSet::from([1]),
        ..FakeEvents::default()
    });
    let (_dir, mut app) = app_with(events);
    open_feed(&mut app);

    app.move_down();
    settle(&mut app);

    assert_eq!(ids(&app), vec![1, 2]);
    assert_eq!(app.dashboard.feed.status(), FeedStatus::Loaded);
    assert!(app.dashboard.feed.has_next());
    let status = app.status.clone().expect("status line");
    assert!(status.error);
    assert!(status.text.contains("could not load events"), "{}", status.text);
}

#[test]
fn leaving_my_page_discards_late_page() {
    let events = Arc::new(FakeEvents {
        pages: vec![tours_page(&[1, 2], false)],
        ..FakeEvents::default()
    });
    let (_dir, mut app) = app_with(events);
    app.route = Route::MyPage;
    app.reload_feed();

    app.back();
    assert_eq!(app.route, Route::Landing);
    settle(&mut app);

    assert!(app.dashboard.feed.is_closed());
    assert!(app.dashboard.feed.tours().is_empty());
}

#[test]
fn detail_applies_only_to_the_open_event() {
    let events = Arc::new(FakeEvents::default());
    let (_dir, mut app) = app_with(events);
    app.route = Route::MyPage;

    app.navigate(Route::Event(7));
    settle(&mut app);
    assert_eq!(app.detail.as_ref().map(|d| d.tour_id), Some(7));

    app.navigate(Route::Event(8));
    app.navigate(Route::Landing);
    settle(&mut app);
    assert_eq!(app.detail, None);
}

#[test]
fn forced_logout_shows_notice_then_lands() {
    let events = Arc::new(FakeEvents {
        pages: vec![tours_page(&[1, 2], false)],
        ..FakeEvents::default()
    });
    let (_dir, mut app) = app_with(events);
    open_feed(&mut app);

    app.client.session.force_logout();
    app.tick(Instant::now());

    assert_eq!(app.route, Route::SessionExpired);
    assert!(app.dashboard.feed.is_closed());
    assert!(!app.client.session.snapshot().is_authenticated());

    app.tick(Instant::now());
    assert_eq!(app.route, Route::SessionExpired);

    app.tick(Instant::now() + SESSION_EXPIRED_REDIRECT);
    assert_eq!(app.route, Route::Landing);
    assert!(app.notice.is_none());
}
