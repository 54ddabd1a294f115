//! Color theme constants for the report
//!
//! Minimal dark palette; the ocean-blue accent matches the report header.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Box and rule color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for the active tab, selected step and headings
pub const COLOR_ACCENT: Color = Color::Rgb(2, 132, 199); // sky #0284C7

/// Title text
pub const COLOR_HEADER: Color = Color::White;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Highlighted background behind the selected step
pub const COLOR_SELECTED_BG: Color = Color::Rgb(20, 40, 60);

// ============================================================================
// Stat Cards
// ============================================================================

/// Big number on a stat card
pub const COLOR_STAT_VALUE: Color = Color::Rgb(56, 189, 248); // #38BDF8

/// Tooltip marker
pub const COLOR_TOOLTIP: Color = Color::Yellow;

// ============================================================================
// Code Blocks
// ============================================================================

/// Code text
pub const COLOR_CODE: Color = Color::Rgb(226, 232, 240); // slate-200

/// Language tag above a code block
pub const COLOR_CODE_LANG: Color = Color::Rgb(148, 163, 184); // slate-400

/// Background of the "Copy" label
pub const COLOR_COPY_BG: Color = Color::Rgb(60, 60, 80);

/// Background of the "Copied!" label
pub const COLOR_COPIED_BG: Color = Color::Rgb(40, 100, 60);

// ============================================================================
// Figures
// ============================================================================

/// Notice shown when a figure uses the fallback image
pub const COLOR_FALLBACK: Color = Color::Rgb(248, 113, 113);
