use crate::api::ApiError;
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// What a page shows for one fetch: exactly one of these at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Empty,
    Populated(T),
}

impl<T> ViewState<T> {
    /// `loading` wins over any settled outcome so a re-fetch shows as loading.
    pub fn from_outcome(
        loading: bool,
        outcome: Option<Result<T, ApiError>>,
        is_empty: impl FnOnce(&T) -> bool,
    ) -> Self {
        if loading {
            return ViewState::Loading;
        }
        match outcome {
            None => ViewState::Loading,
            Some(Err(err)) => ViewState::Error(err.message),
            Some(Ok(data)) if is_empty(&data) => ViewState::Empty,
            Some(Ok(data)) => ViewState::Populated(data),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Populated(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> ViewState<Vec<T>> {
    pub fn from_list(loading: bool, outcome: Option<Result<Vec<T>, ApiError>>) -> Self {
        Self::from_outcome(loading, outcome, Vec::is_empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket(u64);

/// Tags a response with the ticket of the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequenced<T> {
    pub ticket: Ticket,
    pub value: T,
}

/// Monotonic request tokens: only the response to the newest request is applied.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }

    pub fn accept<T>(&self, response: Sequenced<T>) -> Option<T> {
        self.is_current(response.ticket).then_some(response.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_flag_overrides_previous_outcome() {
        let state = ViewState::from_list(true, Some(Ok(vec![1, 2])));
        assert!(state.is_loading());
    }

    #[test]
    fn missing_outcome_is_loading() {
        let state: ViewState<Vec<u8>> = ViewState::from_list(false, None);
        assert_eq!(state, ViewState::Loading);
    }

    #[test]
    fn outcomes_map_to_error_empty_and_populated() {
        let failed: ViewState<Vec<u8>> =
            ViewState::from_list(false, Some(Err(ApiError::network("offline"))));
        assert_eq!(failed.error(), Some("offline"));

        let empty: ViewState<Vec<u8>> = ViewState::from_list(false, Some(Ok(vec![])));
        assert_eq!(empty, ViewState::Empty);

        let populated = ViewState::from_list(false, Some(Ok(vec![3])));
        assert_eq!(populated.data(), Some(&vec![3]));
    }

    #[test]
    fn non_list_outcomes_use_the_supplied_emptiness_check() {
        let state = ViewState::from_outcome(false, Some(Ok(0_u32)), |_| false);
        assert_eq!(state, ViewState::Populated(0));
    }

    #[test]
    fn only_the_latest_ticket_is_accepted() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert_ne!(first, second);

        // The slower first request lands after the second was issued.
        assert_eq!(
            sequencer.accept(Sequenced {
                ticket: first,
                value: "stale"
            }),
            None
        );
        assert_eq!(
            sequencer.accept(Sequenced {
                ticket: second,
                value: "fresh"
            }),
            Some("fresh")
        );
        assert!(sequencer.is_current(second));
    }
}
