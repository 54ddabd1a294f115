//! Responsive Layout System
//!
//! `LayoutContext` wraps the page width and height and answers the few sizing
//! questions the report needs: how wide text may run, whether the methodology
//! panels sit side by side, and how many stat cards fit on a row.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Extra small (< 60 cols)
    ExtraSmall,
    /// Small (< 80 cols)
    Small,
    /// Medium (< 120 cols)
    Medium,
    /// Large (>= 120 cols)
    Large,
}

/// Page dimensions used by every section renderer.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Page width in columns
    pub width: u16,
    /// Viewport height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of the page width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Width left for text after a left and right margin of `margin` columns.
    pub fn content_width(&self, margin: u16) -> u16 {
        self.width.saturating_sub(margin * 2).max(1)
    }

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Narrower than 80 columns or shorter than 24 rows.
    pub fn is_compact(&self) -> bool {
        self.width < breakpoints::SM_WIDTH || self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    /// Stack the step list above the code view instead of beside it.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::MD_WIDTH
    }

    /// Split for the step list and code view: `(left, gap, right)`.
    pub fn two_column_widths(&self) -> (u16, u16, u16) {
        let gap = 2;
        let usable = self.width.saturating_sub(gap);
        let left = ((usable as u32 * 40) / 100) as u16;
        (left, gap, usable - left)
    }

    /// Number of stat cards placed on one row.
    pub fn cards_per_row(&self) -> usize {
        match self.width_category() {
            SizeCategory::ExtraSmall => 1,
            SizeCategory::Small => 2,
            SizeCategory::Medium => 3,
            SizeCategory::Large => 4,
        }
    }
}

impl Default for LayoutContext {
    /// Standard 80x24 terminal.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_categories() {
        assert_eq!(LayoutContext::new(40, 24).width_category(), SizeCategory::ExtraSmall);
        assert_eq!(LayoutContext::new(70, 24).width_category(), SizeCategory::Small);
        assert_eq!(LayoutContext::new(100, 24).width_category(), SizeCategory::Medium);
        assert_eq!(LayoutContext::new(160, 24).width_category(), SizeCategory::Large);
    }

    #[test]
    fn test_two_column_widths_fill_page() {
        let ctx = LayoutContext::new(140, 40);
        let (left, gap, right) = ctx.two_column_widths();
        assert_eq!(left + gap + right, 140);
        assert!(left < right);
    }

    #[test]
    fn test_stacking_breakpoint() {
        assert!(LayoutContext::new(119, 40).should_stack_panels());
        assert!(!LayoutContext::new(120, 40).should_stack_panels());
    }

    #[test]
    fn test_cards_per_row() {
        assert_eq!(LayoutContext::new(50, 24).cards_per_row(), 1);
        assert_eq!(LayoutContext::new(130, 24).cards_per_row(), 4);
    }

    #[test]
    fn test_compact() {
        assert!(LayoutContext::new(70, 40).is_compact());
        assert!(LayoutContext::new(100, 20).is_compact());
        assert!(!LayoutContext::default().is_compact());
    }
}
