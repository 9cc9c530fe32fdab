//! TUI application state: provider selection, key input, results.

use ratatui::widgets::TableState;

use crate::core::credential::Credential;
use crate::core::models::{self, FetchError, ModelRecord};
use crate::core::providers::{PROVIDERS, ProviderConfig};

/// Which form field receives typed characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Provider,
    ApiKey,
    Filter,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Provider => Focus::ApiKey,
            Focus::ApiKey => Focus::Filter,
            Focus::Filter => Focus::Provider,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Provider => Focus::Filter,
            Focus::ApiKey => Focus::Provider,
            Focus::Filter => Focus::ApiKey,
        }
    }
}

/// Outcome of the last fetch, shown above the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Fetching,
    /// Number of models fetched.
    Success(usize),
    Error {
        message: String,
        /// Raw HTTP body for non-200 responses.
        detail: Option<String>,
    },
}

pub struct App {
    pub(crate) provider_index: usize,
    /// Typed API key. Never drawn in clear; dropped on quit.
    pub(crate) api_key: String,
    pub(crate) filter: String,
    pub(crate) focus: Focus,
    pub(crate) records: Vec<ModelRecord>,
    pub(crate) status: Status,
    pub(crate) table_state: TableState,
}

impl App {
    pub fn new() -> Self {
        Self {
            provider_index: 0,
            api_key: String::new(),
            filter: String::new(),
            focus: Focus::ApiKey,
            records: Vec::new(),
            status: Status::Idle,
            table_state: TableState::default(),
        }
    }

    pub fn provider(&self) -> &'static ProviderConfig {
        &PROVIDERS[self.provider_index]
    }

    pub fn next_provider(&mut self) {
        self.provider_index = (self.provider_index + 1) % PROVIDERS.len();
    }

    pub fn prev_provider(&mut self) {
        self.provider_index = (self.provider_index + PROVIDERS.len() - 1) % PROVIDERS.len();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            Focus::Provider => {}
            Focus::ApiKey => self.api_key.push(c),
            Focus::Filter => {
                self.filter.push(c);
                self.reset_selection();
            }
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            Focus::Provider => {}
            Focus::ApiKey => {
                self.api_key.pop();
            }
            Focus::Filter => {
                self.filter.pop();
                self.reset_selection();
            }
        }
    }

    /// Records matching the filter field, in fetch order.
    pub fn visible_records(&self) -> Vec<&ModelRecord> {
        models::filter_records(&self.records, &self.filter)
    }

    /// Validate the typed key. On failure the status shows the error and nothing is fetched.
    pub fn take_credential(&mut self) -> Option<Credential> {
        match Credential::new(&self.api_key) {
            Ok(c) => Some(c),
            Err(e) => {
                self.records.clear();
                self.reset_selection();
                self.status = Status::Error {
                    message: e.to_string(),
                    detail: None,
                };
                None
            }
        }
    }

    pub fn begin_fetch(&mut self) {
        self.status = Status::Fetching;
    }

    /// Replace the table with a fetch outcome. Errors clear previous results.
    pub fn apply_result(&mut self, result: Result<Vec<ModelRecord>, FetchError>) {
        match result {
            Ok(records) => {
                self.status = Status::Success(records.len());
                self.records = records;
            }
            Err(e) => {
                self.records.clear();
                self.status = Status::Error {
                    message: e.to_string(),
                    detail: e.detail().map(str::to_string),
                };
            }
        }
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        let any = !self.visible_records().is_empty();
        self.table_state.select(any.then_some(0));
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let len = self.visible_records().len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some((current + rows).min(len - 1)));
    }

    pub fn scroll_up(&mut self, rows: usize) {
        if self.visible_records().is_empty() {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(current.saturating_sub(rows)));
    }

    /// Drop the typed key from memory.
    pub fn clear_secret(&mut self) {
        self.api_key.clear();
        self.api_key.shrink_to_fit();
    }
}
