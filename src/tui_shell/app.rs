use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::client::Client;
use crate::config::ClientConfig;
use crate::model::{Route, TourDetail, TourId};
use crate::oauth;
use crate::session::SessionExpiredNotice;
use crate::subscriptions::{Dashboard, EmailNotifications};

use super::commands::{self, Command};
use super::input::Input;
use super::worker::{Completion, EventSource, Worker};

mod event_loop;
mod render;
mod runtime;

pub(super) use self::runtime::run;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct StatusLine {
    pub(super) text: String,
    pub(super) error: bool,
}

pub(super) struct App {
    pub(super) client: Client,
    pub(super) route: Route,
    pub(super) quit: bool,
    pub(super) input: Input,
    pub(super) status: Option<StatusLine>,

    pub(super) dashboard: Dashboard,
    pub(super) email: EmailNotifications,
    pub(super) selected: usize,

    pub(super) detail: Option<TourDetail>,
    pub(super) notice: Option<SessionExpiredNotice>,
    pub(super) login_url: String,

    worker: Worker,
}

impl App {
    pub(super) fn load(config: ClientConfig) -> Result<Self> {
        let client = Client::open(config).context("open client")?;
        client.session.bootstrap(&client.api);
        let source = Arc::new(client.api.clone());
        Ok(Self::new(client, source))
    }

    pub(super) fn new(client: Client, source: Arc<dyn EventSource>) -> Self {
        Self {
            client,
            route: Route::Landing,
            quit: false,
            input: Input::default(),
            status: None,
            dashboard: Dashboard::new(),
            email: EmailNotifications::default(),
            selected: 0,
            detail: None,
            notice: None,
            login_url: oauth::authorization_url(),
            worker: Worker::new(source),
        }
    }

    pub(super) fn signed_in_as(&self) -> Option<String> {
        self.client.session.user().map(|u| u.email)
    }

    /// Background requests still outstanding.
    pub(super) fn is_fetching(&self) -> bool {
        self.worker.pending() > 0
    }

    fn info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            error: false,
        });
    }

    fn error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            error: true,
        });
    }

    pub(super) fn navigate(&mut self, route: Route) {
        let route = match route {
            Route::MyPage if !self.client.session.snapshot().is_authenticated() => Route::Login,
            r => r,
        };
        if shows_feed(self.route) && !shows_feed(route) {
            self.dashboard.close();
        }
        let from = self.route;
        self.route = route;
        self.input.clear();
        tracing::debug!(?from, to = ?route, "navigate");

        match route {
            Route::MyPage if !matches!(from, Route::Event(_)) => self.enter_my_page(),
            Route::Event(id) => {
                self.detail = None;
                self.worker.fetch_detail(id);
            }
            Route::SessionExpired => self.notice = Some(SessionExpiredNotice::new(Instant::now())),
            _ => {}
        }
    }

    fn enter_my_page(&mut self) {
        self.dashboard = Dashboard::new();
        self.selected = 0;
        self.email.hydrate(&self.client.api);

        if let Err(err) = self.dashboard.load_summary(&self.client.api) {
            self.error(format!("could not load subscriptions: {}", err));
            return;
        }
        self.reload_feed();
    }

    fn reload_feed(&mut self) {
        if let Some(ticket) = self.dashboard.feed.begin_reload() {
            self.selected = 0;
            self.worker.fetch_page(ticket);
        }
    }

    /// The selection reached the last row: ask for the next page.
    fn request_next_page(&mut self) {
        if let Some(ticket) = self.dashboard.feed.begin_next_page() {
            self.worker.fetch_page(ticket);
        }
    }

    /// Apply finished background work and follow session changes.
    pub(super) fn tick(&mut self, now: Instant) {
        for done in self.worker.drain() {
            self.apply(done);
        }

        let len = self.dashboard.feed.tours().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }

        if self.client.session.take_expired() {
            self.navigate(Route::SessionExpired);
        }
        if self.route == Route::SessionExpired
            && let Some(notice) = self.notice
            && notice.route_at(now) == Route::Landing
        {
            self.notice = None;
            self.navigate(Route::Landing);
        }
    }

    fn apply(&mut self, done: Completion) {
        match done {
            Completion::Page(ticket, result) => {
                let failed = result.as_ref().err().map(|e| e.to_string());
                let update = self.dashboard.feed.complete(ticket, result);
                tracing::debug!(page = ticket.page, ?update, "feed page applied");
                if let Some(msg) = failed
                    && self.route == Route::MyPage
                {
                    self.error(format!("could not load events: {}", msg));
                }
            }
            Completion::Detail(id, result) => {
                if self.route != Route::Event(id) {
                    return;
                }
                match result {
                    Ok(detail) => self.detail = Some(detail),
                    Err(err) => self.error(format!("could not load event {}: {}", id, err)),
                }
            }
        }
    }

    pub(super) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(super) fn move_down(&mut self) {
        let len = self.dashboard.feed.tours().len();
        if len == 0 {
            // An empty page can still report more; the sentinel is the only row.
            self.request_next_page();
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
        if self.selected + 1 == len {
            self.request_next_page();
        }
    }

    pub(super) fn selected_tour(&self) -> Option<TourId> {
        self.dashboard
            .feed
            .tours()
            .get(self.selected)
            .map(|t| t.tour_id)
    }

    /// Enter on an empty command line.
    pub(super) fn activate(&mut self) {
        match self.route {
            Route::Landing => self.navigate(Route::MyPage),
            Route::MyPage => {
                if let Some(id) = self.selected_tour() {
                    self.navigate(Route::Event(id));
                }
            }
            Route::SessionExpired => self.navigate(Route::Landing),
            Route::Login | Route::Event(_) => {}
        }
    }

    pub(super) fn back(&mut self) {
        match self.route {
            Route::Landing => self.quit = true,
            Route::Event(_) => self.navigate(Route::MyPage),
            Route::Login | Route::MyPage | Route::SessionExpired => self.navigate(Route::Landing),
        }
    }

    pub(super) fn submit_input(&mut self) {
        let line = self.input.submit();
        if line.is_empty() {
            return;
        }
        match self.route {
            Route::Login => self.finish_login(&line),
            Route::MyPage => match commands::parse(&line) {
                Ok(cmd) => self.run_command(cmd),
                Err(msg) => self.error(msg),
            },
            _ => {}
        }
    }

    fn finish_login(&mut self, callback: &str) {
        let route = self
            .client
            .session
            .complete_external_login(&self.client.api, callback);
        if route == Route::Login {
            self.error("login failed; paste the full callback URL");
            return;
        }
        if let Some(email) = self.signed_in_as() {
            self.info(format!("signed in as {}", email));
        }
        self.navigate(route);
    }

    fn run_command(&mut self, cmd: Command) {
        match cmd {
            Command::Subscribe { region, sub_region } => {
                match self
                    .dashboard
                    .subscribe(&self.client.api, &region, &sub_region)
                {
                    Ok(_) => {
                        self.selected = 0;
                        self.info(format!("subscribed to {} {}", region, sub_region));
                    }
                    Err(err) => self.error(err.to_string()),
                }
            }
            Command::Unsubscribe { region, sub_region } => {
                match self
                    .dashboard
                    .unsubscribe(&self.client.api, &region, &sub_region)
                {
                    Ok(_) => {
                        self.selected = 0;
                        self.info(format!("unsubscribed from {} {}", region, sub_region));
                    }
                    Err(err) => self.error(err.to_string()),
                }
            }
            Command::Notify(on) => match self.email.set(&self.client.api, on) {
                Ok(()) => self.info(format!(
                    "email notifications {}",
                    if on { "on" } else { "off" }
                )),
                Err(err) => self.error(format!("could not change notifications: {}", err)),
            },
            Command::Reload => self.reload_feed(),
            Command::Logout => {
                self.client.session.logout();
                self.info("logged out");
                self.navigate(Route::Landing);
            }
            Command::DeleteAccount => match self.client.session.delete_account(&self.client.api) {
                Ok(route) => {
                    self.info("account deleted");
                    self.navigate(route);
                }
                Err(err) => self.error(format!("could not delete account: {}", err)),
            },
            Command::Help => self.info(commands::HELP),
        }
    }
}

/// Routes that keep the dashboard alive: the feed itself and an event opened from it.
fn shows_feed(route: Route) -> bool {
    matches!(route, Route::MyPage | Route::Event(_))
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
