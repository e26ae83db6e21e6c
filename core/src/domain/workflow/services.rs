use chrono::Utc;
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    export::codec::encode_image,
    food::{entities::FoodRecord, ports::CatalogClient, value_objects::ListFoodsFilter},
    suggestion::filter::filter_suggestions,
    workflow::{
        entities::{DisplayedFood, NO_MATCH_MESSAGE, Phase, QueryState},
        value_objects::{Command, Completion, RequestTicket},
    },
};

/// State machine behind the search box, the suggestion dropdown, the image
/// card and the error dialog.
///
/// Every user action is a synchronous transition that may hand back a
/// [`Command`]. The caller runs it (see [`perform`]) and feeds the
/// [`Completion`] to [`SelectionWorkflow::apply`].
///
/// The outstanding list query is tracked apart from the phase, so a detail
/// fetch or the error dialog can sit on top of it. A list response is only
/// dropped once a newer list query has been issued, and a detail response
/// only when the phase no longer waits for its ticket.
#[derive(Debug, Clone)]
pub struct SelectionWorkflow {
    phase: Phase,
    query: QueryState,
    pending_list: Option<RequestTicket>,
    suggestions: Vec<FoodRecord>,
    highlighted: usize,
    dropdown_open: bool,
    displayed: Option<DisplayedFood>,
    last_ticket: u64,
    generation: u64,
}

impl Default for SelectionWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionWorkflow {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            query: QueryState::default(),
            pending_list: None,
            suggestions: Vec::new(),
            highlighted: 0,
            dropdown_open: false,
            displayed: None,
            last_ticket: 0,
            generation: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn suggestions(&self) -> &[FoodRecord] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn displayed(&self) -> Option<&DisplayedFood> {
        self.displayed.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Whether the dropdown should be drawn.
    pub fn suggestions_visible(&self) -> bool {
        self.dropdown_open && !self.suggestions.is_empty()
    }

    /// The "get image" button is only enabled once something was typed.
    pub fn can_request_image(&self) -> bool {
        !self.query.is_empty()
    }

    /// The input text changed. Returns the list query to issue, if any.
    pub fn on_query_changed(&mut self, text: impl Into<String>) -> Option<Command> {
        let text = text.into();

        if self.is_loading() {
            tracing::debug!(query = %text, "input disabled while loading");
            return None;
        }

        if !self.suggestions.is_empty() {
            self.dropdown_open = true;
        }

        if self.query.auto_filled && self.query.text.as_deref() == Some(text.as_str()) {
            return None;
        }

        self.query = QueryState {
            text: Some(text.clone()),
            auto_filled: false,
        };

        if text.is_empty() {
            self.pending_list = None;
            self.suggestions.clear();
            self.highlighted = 0;
            self.phase = Phase::Idle;
            return None;
        }

        let ticket = self.next_ticket();
        self.pending_list = Some(ticket);
        self.phase = Phase::LoadingList {
            ticket,
            query: text.clone(),
        };

        Some(Command::FetchList {
            ticket,
            filter: ListFoodsFilter::by_title(text),
        })
    }

    /// Move the highlight used by the "get image" button.
    pub fn highlight(&mut self, index: usize) {
        if index < self.suggestions.len() {
            self.highlighted = index;
        }
    }

    /// Request the image for suggestion `index`, falling back to the top
    /// suggestion when `index` is out of range.
    pub fn confirm(&mut self, index: usize) -> Option<Command> {
        if matches!(self.phase, Phase::LoadingDetail { .. }) {
            tracing::debug!(index, "a food is already being fetched");
            return None;
        }

        if self.suggestions.is_empty() {
            self.phase = Phase::Error {
                message: NO_MATCH_MESSAGE.to_string(),
            };
            return None;
        }

        let index = if index < self.suggestions.len() { index } else { 0 };
        let id = self.suggestions[index].id.clone();
        let ticket = self.next_ticket();
        self.phase = Phase::LoadingDetail { ticket, index };

        Some(Command::FetchDetail { ticket, id })
    }

    /// A dropdown row was clicked.
    pub fn select_suggestion(&mut self, index: usize) -> Option<Command> {
        if matches!(self.phase, Phase::LoadingDetail { .. }) {
            return None;
        }

        let title = self.suggestions.get(index)?.title.clone();
        self.query = QueryState {
            text: Some(title),
            auto_filled: true,
        };
        self.dropdown_open = false;
        self.highlighted = index;

        self.confirm(index)
    }

    /// The "get image" button was clicked.
    pub fn request_image(&mut self) -> Option<Command> {
        if !self.can_request_image() {
            return None;
        }
        self.confirm(self.highlighted)
    }

    /// The confirmation key was pressed in the input.
    ///
    /// A query shorter than the top suggestion is first completed to that
    /// title, then the top suggestion is fetched.
    pub fn press_enter(&mut self) -> Option<Command> {
        if self.is_loading() {
            return None;
        }

        if let (Some(top), Some(text)) = (self.suggestions.first(), self.query.text.as_deref())
            && !text.is_empty()
            && text.chars().count() < top.title.chars().count()
        {
            self.query = QueryState {
                text: Some(top.title.clone()),
                auto_filled: true,
            };
            self.dropdown_open = false;
        }

        self.confirm(0)
    }

    pub fn toggle_dropdown(&mut self) {
        if !self.suggestions.is_empty() {
            self.dropdown_open = !self.dropdown_open;
        }
    }

    pub fn hide_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Close the error dialog.
    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, Phase::Error { .. }) {
            self.phase = self.settled_phase();
        }
    }

    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::ListLoaded { ticket, result } => self.on_list_loaded(ticket, result),
            Completion::DetailLoaded { ticket, result } => self.on_detail_loaded(ticket, result),
        }
    }

    pub fn on_list_loaded(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<FoodRecord>, CoreError>,
    ) {
        if self.pending_list != Some(ticket) {
            tracing::debug!(%ticket, "discarding superseded list response");
            return;
        }
        self.pending_list = None;

        // A detail fetch or the error dialog keeps its phase; only the
        // suggestions underneath are refreshed.
        let settle = matches!(self.phase, Phase::LoadingList { .. });
        let query = self.query.as_str().to_string();

        match result {
            Ok(listing) => {
                self.replace_suggestions(filter_suggestions(&listing, &query), settle);
                if settle {
                    self.dropdown_open = true;
                }
                tracing::debug!(
                    query = %query,
                    listed = listing.len(),
                    matched = self.suggestions.len(),
                    "suggestions updated"
                );
            }
            Err(CoreError::NotFound(_)) => self.replace_suggestions(Vec::new(), settle),
            Err(e) => {
                tracing::warn!(error = %e, query = %query, "failed to list foods");
                if settle {
                    self.phase = self.settled_phase();
                }
            }
        }
    }

    pub fn on_detail_loaded(&mut self, ticket: RequestTicket, result: Result<FoodRecord, CoreError>) {
        if !matches!(self.phase, Phase::LoadingDetail { ticket: current, .. } if current == ticket)
        {
            tracing::debug!(%ticket, "discarding stale food response");
            return;
        }

        match result {
            Ok(FoodRecord {
                id,
                title,
                image: Some(image),
            }) => {
                self.generation += 1;
                self.displayed = Some(DisplayedFood {
                    title,
                    image_base64: encode_image(image.bytes()),
                    generation: self.generation,
                    fetched_at: Utc::now(),
                });
                self.query = QueryState::default();
                self.pending_list = None;
                self.suggestions.clear();
                self.highlighted = 0;
                self.dropdown_open = false;
                self.phase = Phase::Idle;

                tracing::info!(%id, generation = self.generation, "food image ready");
            }
            Ok(record) => {
                tracing::warn!(id = %record.id, "food response carried no image");
                self.phase = self.settled_phase();
            }
            Err(CoreError::NotFound(message)) => {
                self.phase = Phase::Error { message };
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch food");
                self.phase = self.settled_phase();
            }
        }
    }

    fn replace_suggestions(&mut self, suggestions: Vec<FoodRecord>, settle: bool) {
        self.suggestions = suggestions;
        self.highlighted = 0;
        if settle {
            self.phase = self.settled_phase();
        }
    }

    /// The resting phase implied by the outstanding list query, the current
    /// query and the suggestions.
    fn settled_phase(&self) -> Phase {
        if let Some(ticket) = self.pending_list {
            Phase::LoadingList {
                ticket,
                query: self.query.as_str().to_string(),
            }
        } else if !self.suggestions.is_empty() {
            Phase::ShowingSuggestions
        } else if self.query.is_empty() {
            Phase::Idle
        } else {
            Phase::NoMatches
        }
    }

    fn next_ticket(&mut self) -> RequestTicket {
        self.last_ticket += 1;
        RequestTicket::new(self.last_ticket)
    }
}

/// Run `command` against the catalog and package the outcome.
#[instrument(skip(client), fields(ticket = %command.ticket()))]
pub async fn perform<C: CatalogClient>(client: &C, command: Command) -> Completion {
    match command {
        Command::FetchList { ticket, filter } => Completion::ListLoaded {
            ticket,
            result: client.list_by_title(filter).await,
        },
        Command::FetchDetail { ticket, id } => Completion::DetailLoaded {
            ticket,
            result: client.get_by_id(id).await,
        },
    }
}
