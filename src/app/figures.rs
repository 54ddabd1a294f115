//! Figure sources and the one-shot image fallback.
//!
//! Each figure starts on its own URL. If the viewer cannot open it, the
//! figure switches to [`FALLBACK_IMAGE_URL`] and remembers that it did; the
//! fallback itself is never re-checked, so a failing fallback cannot loop.

use crate::models::{dataset::FALLBACK_IMAGE_URL, figure, Figure, FigureId};
use crate::traits::ImageViewer;

/// Result of trying to open a figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The viewer accepted the current source.
    Opened,
    /// The original source failed and the fallback URL is now in place.
    FellBack,
    /// The fallback was already in place and the viewer failed again.
    Failed,
}

/// Current source of one figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureState {
    pub id: FigureId,
    src: String,
    fallback_applied: bool,
}

impl FigureState {
    pub fn new(id: FigureId) -> Self {
        Self {
            id,
            src: figure(id).url.to_string(),
            fallback_applied: false,
        }
    }

    /// The fixed figure definition (alt text, caption, original URL).
    pub fn definition(&self) -> &'static Figure {
        figure(self.id)
    }

    /// URL currently used for the figure.
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn fallback_applied(&self) -> bool {
        self.fallback_applied
    }

    /// Record a load failure of the current source.
    ///
    /// Returns true if the source was replaced. Only the first failure does
    /// anything.
    pub fn mark_load_failed(&mut self) -> bool {
        if self.fallback_applied {
            return false;
        }
        self.fallback_applied = true;
        self.src = FALLBACK_IMAGE_URL.to_string();
        true
    }
}

/// All figures of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureGallery {
    figures: Vec<FigureState>,
}

impl Default for FigureGallery {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureGallery {
    pub fn new() -> Self {
        Self {
            figures: FigureId::ALL.into_iter().map(FigureState::new).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FigureState> {
        self.figures.iter()
    }

    pub fn get(&self, id: FigureId) -> Option<&FigureState> {
        self.figures.iter().find(|f| f.id == id)
    }

    fn get_mut(&mut self, id: FigureId) -> Option<&mut FigureState> {
        self.figures.iter_mut().find(|f| f.id == id)
    }

    /// Open a figure in `viewer`, applying the fallback on first failure.
    pub fn open(&mut self, id: FigureId, viewer: &dyn ImageViewer) -> OpenOutcome {
        let Some(state) = self.get_mut(id) else {
            return OpenOutcome::Failed;
        };

        match viewer.open(state.src()) {
            Ok(()) => {
                tracing::debug!(figure = ?id, src = state.src(), "figure opened");
                OpenOutcome::Opened
            }
            Err(e) if state.mark_load_failed() => {
                tracing::warn!(figure = ?id, error = %e, "image failed to load, using fallback");
                OpenOutcome::FellBack
            }
            Err(e) => {
                tracing::warn!(figure = ?id, error = %e, "fallback image failed to load");
                OpenOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockImageViewer;

    #[test]
    fn test_initial_sources() {
        let gallery = FigureGallery::new();
        let graph = gallery.get(FigureId::NetworkGraph).unwrap();
        assert_eq!(graph.src(), figure(FigureId::NetworkGraph).url);
        assert!(!graph.fallback_applied());
    }

    #[test]
    fn test_mark_load_failed_once() {
        let mut state = FigureState::new(FigureId::PriceChart);
        assert!(state.mark_load_failed());
        assert_eq!(state.src(), FALLBACK_IMAGE_URL);
        assert!(!state.mark_load_failed());
        assert_eq!(state.src(), FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_open_success_keeps_source() {
        let viewer = MockImageViewer::new();
        let mut gallery = FigureGallery::new();
        assert_eq!(gallery.open(FigureId::NetworkGraph, &viewer), OpenOutcome::Opened);
        assert!(!gallery.get(FigureId::NetworkGraph).unwrap().fallback_applied());
    }

    #[test]
    fn test_only_failing_figure_falls_back() {
        let viewer = MockImageViewer::new();
        viewer.fail_url(figure(FigureId::PriceChart).url);
        let mut gallery = FigureGallery::new();

        assert_eq!(gallery.open(FigureId::PriceChart, &viewer), OpenOutcome::FellBack);
        assert_eq!(gallery.open(FigureId::NetworkGraph, &viewer), OpenOutcome::Opened);
        assert_eq!(
            gallery.get(FigureId::NetworkGraph).unwrap().src(),
            figure(FigureId::NetworkGraph).url
        );
    }
}
