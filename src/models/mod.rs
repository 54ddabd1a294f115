//! Static report data types.
//!
//! Everything in this module is immutable and fixed at build time. The
//! concrete tables live in [`dataset`]; the types here describe their shape
//! and the small display rules the report applies to them.

pub mod dataset;

use std::fmt;

// ============================================================================
// Analytics tabs
// ============================================================================

/// One of the fixed analytics categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalyticsTab {
    #[default]
    Transactions,
    TopAddresses,
    GasUsage,
    PriceData,
}

impl AnalyticsTab {
    /// All tabs in display order.
    pub const ALL: [AnalyticsTab; 4] = [
        AnalyticsTab::Transactions,
        AnalyticsTab::TopAddresses,
        AnalyticsTab::GasUsage,
        AnalyticsTab::PriceData,
    ];

    /// The tab's display name, unique within the set.
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsTab::Transactions => "Transactions",
            AnalyticsTab::TopAddresses => "Top Addresses",
            AnalyticsTab::GasUsage => "Gas Usage",
            AnalyticsTab::PriceData => "Price Data",
        }
    }

    /// Short label used on narrow terminals.
    pub fn short_name(&self) -> &'static str {
        match self {
            AnalyticsTab::Transactions => "Txs",
            AnalyticsTab::TopAddresses => "Top",
            AnalyticsTab::GasUsage => "Gas",
            AnalyticsTab::PriceData => "Price",
        }
    }

    /// Look a tab up by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.name() == name)
    }

    /// Position of the tab in [`AnalyticsTab::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|tab| tab == self)
            .unwrap_or_default()
    }

    /// The following tab, wrapping around at the end.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The preceding tab, wrapping around at the start.
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AnalyticsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an analytics tab shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalyticsContent {
    /// A grid of stat cards
    Stats(&'static [StatCard]),
    /// The top-address ranking table
    Ranking(&'static [AddressRankingRow]),
}

impl AnalyticsContent {
    /// The fixed dataset section behind a tab.
    pub fn for_tab(tab: AnalyticsTab) -> Self {
        match tab {
            AnalyticsTab::Transactions => AnalyticsContent::Stats(dataset::TRANSACTION_STATS),
            AnalyticsTab::TopAddresses => AnalyticsContent::Ranking(dataset::TOP_ADDRESSES),
            AnalyticsTab::GasUsage => AnalyticsContent::Stats(dataset::GAS_STATS),
            AnalyticsTab::PriceData => AnalyticsContent::Stats(dataset::PRICE_STATS),
        }
    }
}

// ============================================================================
// Stat cards
// ============================================================================

/// A single headline statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub description: Option<&'static str>,
    /// Extra context; the terminal shows it as a dim footnote inside the card.
    pub tooltip: Option<&'static str>,
}

impl StatCard {
    pub const fn new(title: &'static str, value: &'static str) -> Self {
        Self {
            title,
            value,
            description: None,
            tooltip: None,
        }
    }

    pub const fn with_tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

// ============================================================================
// Address ranking
// ============================================================================

/// One row of the top-address ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddressRankingRow {
    pub rank: u32,
    pub address: &'static str,
    pub transactions: u32,
    /// Total value moved, in ETH.
    pub total_value: f64,
}

impl AddressRankingRow {
    /// The address shortened to its first 8 and last 6 characters.
    ///
    /// Addresses too short to shorten are returned unchanged.
    pub fn short_address(&self) -> String {
        truncate_address(self.address)
    }

    /// Total value with two decimals.
    pub fn formatted_value(&self) -> String {
        format!("{:.2}", self.total_value)
    }
}

/// Shorten a hex address to `head...tail` form (8 leading, 6 trailing chars).
pub fn truncate_address(address: &str) -> String {
    const HEAD: usize = 8;
    const TAIL: usize = 6;

    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= HEAD + TAIL {
        return address.to_string();
    }
    let head: String = chars[..HEAD].iter().collect();
    let tail: String = chars[chars.len() - TAIL..].iter().collect();
    format!("{}...{}", head, tail)
}

// ============================================================================
// Methodology
// ============================================================================

/// Identifier of a methodology step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u32);

impl Default for StepId {
    fn default() -> Self {
        StepId(1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A step of the methodology walkthrough with its code sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodologyStep {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
    pub code_sample: &'static str,
}

impl MethodologyStep {
    /// Heading shown in the step list, e.g. `Step 1: Data Extraction`.
    pub fn heading(&self) -> String {
        format!("Step {}: {}", self.id, self.title)
    }
}

/// Find a step by id in the fixed step list.
pub fn find_step(id: StepId) -> Option<&'static MethodologyStep> {
    dataset::METHODOLOGY_STEPS.iter().find(|step| step.id == id)
}

// ============================================================================
// Copyable snippets
// ============================================================================

/// The report's copyable code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetId {
    /// The code view next to the methodology steps
    Methodology,
    /// The API parameter block in the retrospective
    Retrospective,
}

impl SnippetId {
    pub const ALL: [SnippetId; 2] = [SnippetId::Methodology, SnippetId::Retrospective];

    pub fn label(&self) -> &'static str {
        match self {
            SnippetId::Methodology => "methodology",
            SnippetId::Retrospective => "retrospective",
        }
    }
}

// ============================================================================
// Figures
// ============================================================================

/// The report's image references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureId {
    NetworkGraph,
    PriceChart,
}

impl FigureId {
    pub const ALL: [FigureId; 2] = [FigureId::NetworkGraph, FigureId::PriceChart];
}

/// An image reference with its accessible text and caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    pub id: FigureId,
    pub url: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

/// Look up the fixed figure definition.
pub fn figure(id: FigureId) -> &'static Figure {
    match id {
        FigureId::NetworkGraph => &dataset::FIGURES[0],
        FigureId::PriceChart => &dataset::FIGURES[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_names_are_unique() {
        for (i, a) in AnalyticsTab::ALL.iter().enumerate() {
            for b in &AnalyticsTab::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_tab_from_name() {
        assert_eq!(
            AnalyticsTab::from_name("Top Addresses"),
            Some(AnalyticsTab::TopAddresses)
        );
        assert_eq!(AnalyticsTab::from_name("top addresses"), None);
        assert_eq!(AnalyticsTab::from_name(""), None);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(AnalyticsTab::PriceData.next(), AnalyticsTab::Transactions);
        assert_eq!(AnalyticsTab::Transactions.previous(), AnalyticsTab::PriceData);
        assert_eq!(AnalyticsTab::GasUsage.next(), AnalyticsTab::PriceData);
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(
            truncate_address("0x7a250d5630b4cf539739df2c5dacb4c659f2488d"),
            "0x7a250d...f2488d"
        );
        assert_eq!(truncate_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_formatted_value_two_decimals() {
        let row = AddressRankingRow {
            rank: 1,
            address: "0x0",
            transactions: 0,
            total_value: 0.0,
        };
        assert_eq!(row.formatted_value(), "0.00");
    }

    #[test]
    fn test_content_for_tab() {
        assert!(matches!(
            AnalyticsContent::for_tab(AnalyticsTab::TopAddresses),
            AnalyticsContent::Ranking(rows) if rows.len() == 10
        ));
        assert!(matches!(
            AnalyticsContent::for_tab(AnalyticsTab::GasUsage),
            AnalyticsContent::Stats(cards) if cards.len() == 6
        ));
    }

    #[test]
    fn test_find_step_unknown_id() {
        assert!(find_step(StepId(99)).is_none());
        assert_eq!(find_step(StepId(1)).map(|s| s.title), Some("Data Extraction"));
    }

    #[test]
    fn test_step_heading() {
        let step = find_step(StepId(4)).unwrap();
        assert_eq!(step.heading(), "Step 4: Graph Construction");
    }
}
