use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::api::{ApiClient, ApiError};
use crate::feed::{PageTicket, TourSource};
use crate::model::{TourDetail, TourId, ToursPage};

/// What the background threads fetch: feed pages and event details.
pub(super) trait EventSource: TourSource + Send + Sync {
    fn tour_detail(&self, tour_id: TourId) -> Result<TourDetail, ApiError>;
}

impl EventSource for ApiClient {
    fn tour_detail(&self, tour_id: TourId) -> Result<TourDetail, ApiError> {
        self.get_tour_detail(tour_id)
    }
}

/// A finished background request, handed back to the UI thread.
pub(super) enum Completion {
    Page(PageTicket, Result<ToursPage, ApiError>),
    Detail(TourId, Result<TourDetail, ApiError>),
}

pub(super) struct Worker {
    source: Arc<dyn EventSource>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    pending: usize,
}

impl Worker {
    pub(super) fn new(source: Arc<dyn EventSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tx,
            rx,
            pending: 0,
        }
    }

    pub(super) fn fetch_page(&mut self, ticket: PageTicket) {
        self.spawn(move |src| Completion::Page(ticket, src.tours_page(ticket.page)));
    }

    pub(super) fn fetch_detail(&mut self, tour_id: TourId) {
        self.spawn(move |src| Completion::Detail(tour_id, src.tour_detail(tour_id)));
    }

    /// Requests started but not yet drained.
    pub(super) fn pending(&self) -> usize {
        self.pending
    }

    /// Everything that finished since the last call.
    pub(super) fn drain(&mut self) -> Vec<Completion> {
        let done: Vec<Completion> = self.rx.try_iter().collect();
        self.pending = self.pending.saturating_sub(done.len());
        done
    }

    fn spawn<F>(&mut self, job: F)
    where
        F: FnOnce(&dyn EventSource) -> Completion + Send + 'static,
    {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.pending += 1;
        thread::spawn(move || {
            // The receiver is gone once the UI has exited.
            let _ = tx.send(job(source.as_ref()));
        });
    }
}
