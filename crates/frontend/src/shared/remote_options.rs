//! Option provider for a delegated-search select backed by a list endpoint
//!
//! Every search takes a ticket from [`RequestSequence`]. A response is applied
//! only while its ticket is the newest one, so a slow response to "pa" cannot
//! overwrite the results for "panadol".

use contracts::domain::common::ApiRecord;
use contracts::shared::list::ListQuery;
use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api::{ApiError, RestResource};

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic request counter
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// Option list of one select with its in-flight request bookkeeping
#[derive(Debug, Default)]
pub struct OptionsState {
    pub options: Vec<Value>,
    pub loading: bool,
    pub error: Option<String>,
    sequence: RequestSequence,
}

impl OptionsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; loading stays on until the newest one settles
    pub fn begin(&mut self) -> Ticket {
        self.loading = true;
        self.sequence.begin()
    }

    /// Apply a settled request. Returns `false` and changes nothing when a
    /// newer request has been issued since `ticket`.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Vec<Value>, ApiError>) -> bool {
        if !self.sequence.is_current(ticket) {
            return false;
        }
        match result {
            Ok(options) => {
                self.options = options;
                self.error = None;
            }
            Err(e) => {
                self.options.clear();
                self.error = Some(e.user_message());
            }
        }
        self.loading = false;
        true
    }
}

/// Options, loading flag and last error for one select
pub struct RemoteOptions<T: Send + Sync + 'static> {
    pub options: Signal<Vec<Value>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    state: RwSignal<OptionsState>,
    resource: StoredValue<RestResource<T>>,
    per_page: u32,
}

impl<T: Send + Sync + 'static> Clone for RemoteOptions<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteOptions<T> {}

impl<T> RemoteOptions<T>
where
    T: ApiRecord + Send + Sync + 'static,
{
    pub fn new(resource: RestResource<T>, per_page: u32) -> Self {
        let state = RwSignal::new(OptionsState::new());
        Self {
            options: Signal::derive(move || state.with(|s| s.options.clone())),
            loading: Signal::derive(move || state.with(|s| s.loading)),
            error: Signal::derive(move || state.with(|s| s.error.clone())),
            state,
            resource: StoredValue::new(resource),
            per_page,
        }
    }

    /// Fetch options for `term`; blank terms load the first page unfiltered
    pub fn search(&self, term: String) {
        let Some(resource) = self.resource.try_get_value() else {
            return;
        };
        let Some(ticket) = self.state.try_update(OptionsState::begin) else {
            return;
        };
        let query = ListQuery::new(self.per_page).with_search(&term);
        let state = self.state;

        spawn_local(async move {
            let result = resource
                .list(&query)
                .await
                .map(|page| to_option_values(page.data));
            if let Err(e) = &result {
                log::warn!("Failed to load {} options: {}", resource.base(), e);
            }
            let applied = state
                .try_update(|s| s.apply(ticket, result))
                .unwrap_or(false);
            if !applied {
                log::debug!(
                    "Dropping stale {} response for {:?} ({:?})",
                    resource.base(),
                    term,
                    ticket
                );
            }
        });
    }
}

/// Records as JSON objects for the select; records that fail to serialize are skipped
pub fn to_option_values<T: ApiRecord>(records: Vec<T>) -> Vec<Value> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::to_value(&record) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Skipping option that failed to serialize: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_tag::aggregate::Tag;
    use contracts::domain::common::Translation;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut sequence = RequestSequence::new();
        let first = sequence.begin();
        assert!(sequence.is_current(first));

        let second = sequence.begin();
        assert!(second > first);
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    fn brand(id: i64) -> Value {
        serde_json::json!({ "id": id, "name": format!("Brand {}", id) })
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = OptionsState::new();
        let slow = state.begin();
        let fast = state.begin();
        assert!(state.loading);

        assert!(!state.apply(slow, Ok(vec![brand(1)])));
        assert!(state.options.is_empty());
        assert!(state.loading);

        assert!(state.apply(fast, Ok(vec![brand(2)])));
        assert_eq!(state.options, vec![brand(2)]);
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_success_after_newest_keeps_newest_options() {
        let mut state = OptionsState::new();
        let slow = state.begin();
        let fast = state.begin();
        assert!(state.apply(fast, Ok(vec![brand(2)])));

        assert!(!state.apply(slow, Ok(vec![brand(1)])));
        assert_eq!(state.options, vec![brand(2)]);
        assert!(!state.loading);
    }

    #[test]
    fn test_newest_error_clears_options() {
        let mut state = OptionsState::new();
        let first = state.begin();
        assert!(state.apply(first, Ok(vec![brand(1)])));

        let second = state.begin();
        assert!(state.apply(
            second,
            Err(ApiError::Status {
                status: 500,
                message: "boom".to_string()
            })
        ));
        assert!(state.options.is_empty());
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.loading);

        let third = state.begin();
        assert!(state.apply(third, Ok(vec![brand(3)])));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_to_option_values_keeps_wire_names() {
        let tags = vec![Tag {
            id: 3,
            name: "Vitamins".to_string(),
            translations: vec![Translation::new("en", "Vitamins & supplements")],
        }];
        let values = to_option_values(tags);
        assert_eq!(values[0]["id"], 3);
        assert_eq!(values[0]["translations"][0]["languageId"], "en");
    }
}
