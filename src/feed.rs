//! Paginated, deduplicated feed of events for the subscribed regions.
//!
//! Fetching is split into `begin_*` (which decides whether a request may be
//! issued and hands out a [`PageTicket`]) and [`FeedLoader::complete`]
//! (which applies the result). The UI can therefore run the request
//! anywhere and keep receiving input while it is pending; the loader alone
//! enforces the in-flight guard.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::{ApiClient, ApiError};
use crate::model::{Tour, TourId, ToursPage};

pub trait TourSource {
    fn tours_page(&self, page: u32) -> Result<ToursPage, ApiError>;
}

impl TourSource for ApiClient {
    fn tours_page(&self, page: u32) -> Result<ToursPage, ApiError> {
        self.get_subscribed_tours(page)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// Page zero, replacing the feed wholesale.
    Initial,
    /// A later page, merged into the feed.
    Continuation,
}

/// Permission to run one page fetch, issued by the loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTicket {
    pub page: u32,
    pub kind: PageKind,
    loader: u64,
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedStatus {
    Empty,
    Loading(PageKind),
    Loaded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedUpdate {
    Replaced { len: usize },
    Appended { added: usize },
    /// The fetch failed; the feed kept its previous state.
    Failed,
    /// The result no longer applies (loader closed, reset since, or foreign ticket).
    Discarded,
}

static NEXT_LOADER_ID: AtomicU64 = AtomicU64::new(1);

pub struct FeedLoader {
    id: u64,
    tours: Vec<Tour>,
    seen: HashSet<TourId>,
    cursor: Option<u32>,
    has_next: bool,
    in_flight: Vec<PageTicket>,
    generation: u64,
    closed: bool,
}

impl Default for FeedLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedLoader {
    pub fn new() -> Self {
        Self {
            id: NEXT_LOADER_ID.fetch_add(1, Ordering::Relaxed),
            tours: Vec::new(),
            seen: HashSet::new(),
            cursor: None,
            has_next: false,
            in_flight: Vec::new(),
            generation: 0,
            closed: false,
        }
    }

    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Index of the last page merged into the feed; `None` before the first load.
    pub fn cursor(&self) -> Option<u32> {
        self.cursor
    }

    pub fn is_busy(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn status(&self) -> FeedStatus {
        if let Some(t) = self.in_flight.last() {
            return FeedStatus::Loading(t.kind);
        }
        if self.cursor.is_some() {
            FeedStatus::Loaded
        } else {
            FeedStatus::Empty
        }
    }

    /// Start an initial load or a full reset from page zero.
    ///
    /// Always granted on an open loader, even while another fetch is pending;
    /// any continuation still in flight is invalidated.
    pub fn begin_reload(&mut self) -> Option<PageTicket> {
        if self.closed {
            return None;
        }
        self.generation += 1;
        let ticket = PageTicket {
            page: 0,
            kind: PageKind::Initial,
            loader: self.id,
            generation: self.generation,
        };
        self.in_flight.push(ticket);
        Some(ticket)
    }

    /// Request the next page, as triggered by the visibility sentinel.
    ///
    /// Ignored (returns `None`) while any fetch is in flight, when there is
    /// no further page, or before the first page has loaded.
    pub fn begin_next_page(&mut self) -> Option<PageTicket> {
        if self.closed || self.is_busy() || !self.has_next {
            return None;
        }
        let cursor = self.cursor?;
        let ticket = PageTicket {
            page: cursor + 1,
            kind: PageKind::Continuation,
            loader: self.id,
            generation: self.generation,
        };
        self.in_flight.push(ticket);
        Some(ticket)
    }

    pub fn complete(
        &mut self,
        ticket: PageTicket,
        result: Result<ToursPage, ApiError>,
    ) -> FeedUpdate {
        if ticket.loader != self.id || self.closed {
            return FeedUpdate::Discarded;
        }
        let Some(pos) = self.in_flight.iter().position(|t| *t == ticket) else {
            return FeedUpdate::Discarded;
        };
        self.in_flight.remove(pos);

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                tracing::error!(page = ticket.page, error = %err, "feed page fetch failed");
                return FeedUpdate::Failed;
            }
        };

        match ticket.kind {
            PageKind::Initial => {
                self.tours.clear();
                self.seen.clear();
                merge_unique(&mut self.tours, &mut self.seen, page.tours);
                self.cursor = Some(0);
                self.has_next = page.meta.has_next;
                FeedUpdate::Replaced {
                    len: self.tours.len(),
                }
            }
            PageKind::Continuation => {
                if ticket.generation != self.generation {
                    tracing::debug!(page = ticket.page, "dropping page from before feed reset");
                    return FeedUpdate::Discarded;
                }
                let added = merge_unique(&mut self.tours, &mut self.seen, page.tours);
                self.cursor = Some(ticket.page);
                self.has_next = page.meta.has_next;
                FeedUpdate::Appended { added }
            }
        }
    }

    /// Reset to page zero and wait for the result.
    pub fn reload<S: TourSource + ?Sized>(&mut self, source: &S) -> FeedUpdate {
        let Some(ticket) = self.begin_reload() else {
            return FeedUpdate::Discarded;
        };
        let result = source.tours_page(ticket.page);
        self.complete(ticket, result)
    }

    /// Fetch the next page if the guard allows it and wait for the result.
    pub fn load_more<S: TourSource + ?Sized>(&mut self, source: &S) -> Option<FeedUpdate> {
        let ticket = self.begin_next_page()?;
        let result = source.tours_page(ticket.page);
        Some(self.complete(ticket, result))
    }

    /// Drop the feed; results arriving afterwards are discarded.
    pub fn close(&mut self) {
        self.closed = true;
        self.tours.clear();
        self.seen.clear();
        self.in_flight.clear();
        self.cursor = None;
        self.has_next = false;
    }
}

/// Append tours whose id has not been seen, keeping first-seen order.
/// Returns how many were appended.
pub fn merge_unique(
    feed: &mut Vec<Tour>,
    seen: &mut HashSet<TourId>,
    incoming: Vec<Tour>,
) -> usize {
    let before = feed.len();
    for tour in incoming {
        if seen.insert(tour.tour_id) {
            feed.push(tour);
        }
    }
    feed.len() - before
}

#[cfg(test)]
#[path = "tests/feed_tests.rs"]
mod tests;
