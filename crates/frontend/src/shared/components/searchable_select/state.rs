//! Open/closed state machine of the searchable select.
//!
//! The machine owns the search text and the open flag. Side effects are
//! returned as [`ComboboxOutput`] for the component to dispatch.

use super::matcher::SearchMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboboxEvent {
    /// The input received focus
    Focus,
    /// New input text while typing
    Input(String),
    /// Pointer pressed somewhere in the document
    PointerDown { inside: bool },
    /// Escape pressed while focus is within the component
    Escape,
    /// An option row was picked; carries its value key
    Pick(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboboxOutput {
    Change(String),
    Search(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboboxState {
    phase: Phase,
    search: String,
}

impl ComboboxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Text the input shows: search text while open, the label while closed
    pub fn input_text(&self, display_label: &str) -> String {
        match self.phase {
            Phase::Open => self.search.clone(),
            Phase::Closed => display_label.to_string(),
        }
    }

    pub fn handle(&mut self, event: ComboboxEvent, mode: SearchMode) -> Option<ComboboxOutput> {
        log::trace!("searchable select {:?} <- {:?}", self.phase, event);
        match (self.phase, event) {
            (Phase::Closed, ComboboxEvent::Focus) => {
                self.phase = Phase::Open;
                None
            }
            (Phase::Open, ComboboxEvent::Input(text)) => {
                self.search = text.clone();
                mode.is_delegated().then_some(ComboboxOutput::Search(text))
            }
            (Phase::Open, ComboboxEvent::PointerDown { inside: false })
            | (Phase::Open, ComboboxEvent::Escape) => {
                self.close();
                None
            }
            (Phase::Open, ComboboxEvent::Pick(value)) => {
                self.close();
                Some(ComboboxOutput::Change(value))
            }
            // Closed input is read-only; everything else is a no-op
            _ => None,
        }
    }

    fn close(&mut self) {
        self.search.clear();
        self.phase = Phase::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELEGATED: SearchMode = SearchMode::Delegated;
    const LOCAL: SearchMode = SearchMode::Local { filter: false };

    fn open_with(text: &str) -> ComboboxState {
        let mut state = ComboboxState::new();
        state.handle(ComboboxEvent::Focus, LOCAL);
        state.handle(ComboboxEvent::Input(text.to_string()), LOCAL);
        state
    }

    #[test]
    fn test_starts_closed() {
        let state = ComboboxState::new();
        assert_eq!(state.phase(), Phase::Closed);
        assert_eq!(state.search(), "");
    }

    #[test]
    fn test_focus_opens_without_side_effect() {
        let mut state = ComboboxState::new();
        assert_eq!(state.handle(ComboboxEvent::Focus, DELEGATED), None);
        assert!(state.is_open());
        assert_eq!(state.handle(ComboboxEvent::Focus, DELEGATED), None);
        assert!(state.is_open());
    }

    #[test]
    fn test_input_emits_search_only_when_delegated() {
        let mut state = ComboboxState::new();
        state.handle(ComboboxEvent::Focus, DELEGATED);
        assert_eq!(
            state.handle(ComboboxEvent::Input("pa".into()), DELEGATED),
            Some(ComboboxOutput::Search("pa".into()))
        );
        assert_eq!(
            state.handle(ComboboxEvent::Input("pan".into()), DELEGATED),
            Some(ComboboxOutput::Search("pan".into()))
        );
        assert_eq!(state.handle(ComboboxEvent::Input("pana".into()), LOCAL), None);
        assert_eq!(state.search(), "pana");
    }

    #[test]
    fn test_pick_emits_change_once_then_closes() {
        let mut state = open_with("bru");
        let output = state.handle(ComboboxEvent::Pick("2".into()), DELEGATED);
        assert_eq!(output, Some(ComboboxOutput::Change("2".into())));
        assert_eq!(state.phase(), Phase::Closed);
        assert_eq!(state.search(), "");

        assert_eq!(state.handle(ComboboxEvent::Pick("2".into()), DELEGATED), None);
    }

    #[test]
    fn test_outside_pointer_down_closes_and_clears() {
        let mut state = open_with("bru");
        assert_eq!(state.handle(ComboboxEvent::PointerDown { inside: false }, LOCAL), None);
        assert!(!state.is_open());
        assert_eq!(state.search(), "");
    }

    #[test]
    fn test_inside_pointer_down_keeps_open() {
        let mut state = open_with("bru");
        state.handle(ComboboxEvent::PointerDown { inside: true }, LOCAL);
        assert!(state.is_open());
        assert_eq!(state.search(), "bru");
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = open_with("bru");
        state.handle(ComboboxEvent::Escape, LOCAL);
        assert_eq!(state, ComboboxState::new());
    }

    #[test]
    fn test_click_after_escape_reopens() {
        let mut state = open_with("bru");
        state.handle(ComboboxEvent::Escape, LOCAL);
        assert!(!state.is_open());

        // The input keeps focus after Escape; the click sends Focus again
        assert_eq!(state.handle(ComboboxEvent::Focus, DELEGATED), None);
        assert!(state.is_open());
        assert_eq!(state.search(), "");
    }

    #[test]
    fn test_focus_while_open_keeps_search() {
        let mut state = open_with("bru");
        assert_eq!(state.handle(ComboboxEvent::Focus, DELEGATED), None);
        assert!(state.is_open());
        assert_eq!(state.search(), "bru");
    }

    #[test]
    fn test_reopen_starts_with_empty_search() {
        let mut state = open_with("leftover");
        state.handle(ComboboxEvent::PointerDown { inside: false }, LOCAL);
        state.handle(ComboboxEvent::Focus, LOCAL);
        assert!(state.is_open());
        assert_eq!(state.search(), "");
    }

    #[test]
    fn test_closed_ignores_typing() {
        let mut state = ComboboxState::new();
        assert_eq!(state.handle(ComboboxEvent::Input("x".into()), DELEGATED), None);
        assert_eq!(state.search(), "");
        assert!(!state.is_open());
    }

    #[test]
    fn test_input_text_follows_phase() {
        let mut state = ComboboxState::new();
        assert_eq!(state.input_text("Panadol"), "Panadol");
        state.handle(ComboboxEvent::Focus, LOCAL);
        assert_eq!(state.input_text("Panadol"), "");
        state.handle(ComboboxEvent::Input("pa".into()), LOCAL);
        assert_eq!(state.input_text("Panadol"), "pa");
    }
}
