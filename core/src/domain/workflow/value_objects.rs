use std::fmt;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::{FoodId, FoodRecord},
        value_objects::ListFoodsFilter,
    },
};

/// Sequence number attached to every request the workflow issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn new(seq: u64) -> Self {
        Self(seq)
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A request the workflow wants issued against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchList {
        ticket: RequestTicket,
        filter: ListFoodsFilter,
    },
    FetchDetail {
        ticket: RequestTicket,
        id: FoodId,
    },
}

impl Command {
    pub fn ticket(&self) -> RequestTicket {
        match self {
            Command::FetchList { ticket, .. } | Command::FetchDetail { ticket, .. } => *ticket,
        }
    }
}

/// Outcome of a [`Command`], fed back into the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    ListLoaded {
        ticket: RequestTicket,
        result: Result<Vec<FoodRecord>, CoreError>,
    },
    DetailLoaded {
        ticket: RequestTicket,
        result: Result<FoodRecord, CoreError>,
    },
}
