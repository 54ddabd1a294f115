//! Selection state for the report.
//!
//! [`ViewState`] holds the two user-driven selections: which analytics tab
//! is active and which methodology step is selected. It is owned by the
//! [`App`](crate::app::App) and only ever changed through its setters.
//! [`ScrollState`] tracks the page viewport.

mod scroll_state;

pub use scroll_state::ScrollState;

use crate::models::{dataset::METHODOLOGY_STEPS, find_step, AnalyticsTab, MethodologyStep, StepId};

/// Active tab and selected step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    active_tab: AnalyticsTab,
    selected_step: StepId,
}

impl ViewState {
    /// Defaults: the Transactions tab and step 1.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> AnalyticsTab {
        self.active_tab
    }

    pub fn selected_step(&self) -> StepId {
        self.selected_step
    }

    /// The selected step's definition, if the id is part of the step list.
    pub fn selected_step_definition(&self) -> Option<&'static MethodologyStep> {
        find_step(self.selected_step)
    }

    /// Make `tab` the active tab.
    pub fn select_tab(&mut self, tab: AnalyticsTab) {
        self.active_tab = tab;
    }

    /// Make `id` the selected step.
    ///
    /// The id is stored as given; callers only pass ids from the step list.
    pub fn select_step(&mut self, id: StepId) {
        self.selected_step = id;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
    }

    /// Select the step after the current one, wrapping to the first.
    pub fn next_step(&mut self) {
        self.selected_step = step_at_offset(self.selected_step, 1);
    }

    /// Select the step before the current one, wrapping to the last.
    pub fn previous_step(&mut self) {
        self.selected_step = step_at_offset(self.selected_step, -1);
    }
}

/// Step id `offset` positions away from `current` in list order.
///
/// An id outside the list restarts from the first step.
fn step_at_offset(current: StepId, offset: isize) -> StepId {
    let len = METHODOLOGY_STEPS.len() as isize;
    let Some(pos) = METHODOLOGY_STEPS.iter().position(|s| s.id == current) else {
        return METHODOLOGY_STEPS[0].id;
    };
    let next = (pos as isize + offset).rem_euclid(len);
    METHODOLOGY_STEPS[next as usize].id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ViewState::new();
        assert_eq!(state.active_tab(), AnalyticsTab::Transactions);
        assert_eq!(state.selected_step(), StepId(1));
        assert_eq!(
            state.selected_step_definition().map(|s| s.title),
            Some("Data Extraction")
        );
    }

    #[test]
    fn test_select_tab_overwrites() {
        let mut state = ViewState::new();
        state.select_tab(AnalyticsTab::GasUsage);
        assert_eq!(state.active_tab(), AnalyticsTab::GasUsage);
        state.select_tab(AnalyticsTab::GasUsage);
        assert_eq!(state.active_tab(), AnalyticsTab::GasUsage);
    }

    #[test]
    fn test_select_step_keeps_tab() {
        let mut state = ViewState::new();
        state.select_tab(AnalyticsTab::PriceData);
        state.select_step(StepId(3));
        assert_eq!(state.selected_step(), StepId(3));
        assert_eq!(state.active_tab(), AnalyticsTab::PriceData);
    }

    #[test]
    fn test_step_cycling_wraps() {
        let mut state = ViewState::new();
        state.previous_step();
        assert_eq!(state.selected_step(), StepId(4));
        state.next_step();
        assert_eq!(state.selected_step(), StepId(1));
        state.next_step();
        assert_eq!(state.selected_step(), StepId(2));
    }

    #[test]
    fn test_unknown_step_has_no_definition() {
        let mut state = ViewState::new();
        state.select_step(StepId(42));
        assert!(state.selected_step_definition().is_none());
        state.next_step();
        assert_eq!(state.selected_step(), StepId(1));
    }
}
