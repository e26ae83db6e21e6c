use chrono::{DateTime, Utc};

use crate::domain::{
    common::entities::app_errors::CoreError,
    export::codec::{decode_image, image_data_uri},
    workflow::value_objects::RequestTicket,
};

pub const NO_MATCH_MESSAGE: &str = "There is no food that matches your request!";

/// Where the selection workflow currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LoadingList {
        ticket: RequestTicket,
        query: String,
    },
    ShowingSuggestions,
    NoMatches,
    LoadingDetail {
        ticket: RequestTicket,
        index: usize,
    },
    /// The error dialog is open.
    Error {
        message: String,
    },
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::LoadingList { .. } | Phase::LoadingDetail { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// `None` until the user first types, and again after a successful fetch.
    pub text: Option<String>,
    /// Set when `text` was filled from a suggestion rather than typed.
    pub auto_filled: bool,
}

impl QueryState {
    pub fn as_str(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

/// The food currently shown in the image card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedFood {
    pub title: String,
    pub image_base64: String,
    /// Bumped on every successful fetch, even when the same food comes back.
    pub generation: u64,
    pub fetched_at: DateTime<Utc>,
}

impl DisplayedFood {
    pub fn data_uri(&self) -> String {
        image_data_uri(&self.image_base64)
    }

    pub fn image_bytes(&self) -> Result<Vec<u8>, CoreError> {
        decode_image(&self.image_base64)
    }
}
