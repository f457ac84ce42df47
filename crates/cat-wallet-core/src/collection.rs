//! CAT721 collection summary screen state.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::domain::{CollectionInfo, CollectionSummary, WalletContext};
use crate::fetch::{CommitOutcome, FetchGuard, FetchTicket};
use crate::format::display_value;
use crate::ports::{ClipboardPort, LinkPort, NotifierPort, PortError};
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionView {
    Loading,
    NotFound,
    Ready {
        info: CollectionInfo,
        local_ids: Vec<String>,
    },
}

/// Parameters of a pending collection summary request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionFetch {
    pub ticket: FetchTicket,
    pub address: String,
    pub collection_id: String,
}

#[derive(Debug, Clone)]
pub struct CollectionScreen {
    collection_id: String,
    address: String,
    view: CollectionView,
    fetch: FetchGuard,
}

impl CollectionScreen {
    pub fn new(collection_id: impl Into<String>, ctx: &WalletContext) -> Self {
        Self {
            collection_id: collection_id.into(),
            address: ctx.address().to_owned(),
            view: CollectionView::Loading,
            fetch: FetchGuard::default(),
        }
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn view(&self) -> &CollectionView {
        &self.view
    }

    /// Start over for another account. The fetch guard is kept, so replies to
    /// requests issued before the remount stay stale.
    pub fn remount(&mut self, ctx: &WalletContext) {
        self.address = ctx.address().to_owned();
        self.view = CollectionView::Loading;
    }

    /// Issue the summary request for this visit.
    pub fn start(&mut self) -> CollectionFetch {
        let ticket = self.fetch.begin();
        debug!(collection_id = %self.collection_id, generation = ticket.generation(), "fetch collection summary");
        CollectionFetch {
            ticket,
            address: self.address.clone(),
            collection_id: self.collection_id.clone(),
        }
    }

    pub fn commit(
        &mut self,
        ticket: FetchTicket,
        result: Result<CollectionSummary, PortError>,
    ) -> CommitOutcome {
        if !self.fetch.is_current(ticket) {
            warn!(generation = ticket.generation(), "dropping stale collection summary");
            return CommitOutcome::Stale;
        }
        match result {
            Ok(CollectionSummary {
                collection_info: Some(info),
                local_ids,
            }) => {
                self.view = CollectionView::Ready { info, local_ids };
                CommitOutcome::Applied
            }
            Ok(CollectionSummary {
                collection_info: None,
                ..
            }) => {
                self.view = CollectionView::NotFound;
                CommitOutcome::Applied
            }
            Err(e) => {
                warn!(error = %e, collection_id = %self.collection_id, "collection summary fetch failed");
                CommitOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn rows(&self) -> Vec<SectionRow> {
        match &self.view {
            CollectionView::Ready { info, .. } => summary_rows(info),
            _ => Vec::new(),
        }
    }

    /// Route to an owned item, carrying the already-loaded collection metadata.
    pub fn item_route(&self, local_id: &str) -> Option<Route> {
        match &self.view {
            CollectionView::Ready { info, local_ids } if local_ids.iter().any(|id| id == local_id) => {
                Some(Route::Cat721Item {
                    collection_info: info.clone(),
                    local_id: local_id.to_owned(),
                })
            }
            _ => None,
        }
    }
}

/// A labelled value row. Clicking it copies the value, or opens `link` if set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRow {
    pub title: &'static str,
    pub value: String,
    pub link: Option<String>,
    pub show_copy_icon: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Copied,
    OpenedLink,
    Failed(String),
}

impl SectionRow {
    pub fn new(title: &'static str, value: impl Into<String>) -> Self {
        Self {
            title,
            value: value.into(),
            link: None,
            show_copy_icon: false,
        }
    }

    pub fn with_copy_icon(mut self) -> Self {
        self.show_copy_icon = true;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn display_text(&self) -> Cow<'_, str> {
        display_value(&self.value)
    }

    pub fn activate(
        &self,
        clipboard: &dyn ClipboardPort,
        links: &dyn LinkPort,
        notifier: &dyn NotifierPort,
    ) -> RowAction {
        if let Some(link) = &self.link {
            return match links.open_link(link) {
                Ok(()) => RowAction::OpenedLink,
                Err(e) => {
                    notifier.toast_error(&e.to_string());
                    RowAction::Failed(e.to_string())
                }
            };
        }
        match clipboard.copy_text(&self.value) {
            Ok(()) => {
                notifier.toast_success("Copied");
                RowAction::Copied
            }
            Err(e) => {
                notifier.toast_error(&e.to_string());
                RowAction::Failed(e.to_string())
            }
        }
    }
}

pub fn summary_rows(info: &CollectionInfo) -> Vec<SectionRow> {
    vec![
        SectionRow::new("Collection Id", info.collection_id.clone()).with_copy_icon(),
        SectionRow::new("Collection", info.symbol.clone()),
        SectionRow::new("Max supply", info.max.clone()),
        SectionRow::new("Premine", info.premine.clone()),
    ]
}

/// Description block, shown whenever the service sent a non-empty string.
pub fn description(info: &CollectionInfo) -> Option<&str> {
    (!info.description.is_empty()).then_some(info.description.as_str())
}
