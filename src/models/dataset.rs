//! The report's fixed content.
//!
//! These tables are opaque data: nothing in the crate derives or recomputes
//! them, they are only displayed.

use super::{AddressRankingRow, Figure, FigureId, MethodologyStep, StatCard, StepId};

// ============================================================================
// Header & prose
// ============================================================================

pub const REPORT_TITLE: &str = "Decoding the Chain";

pub const REPORT_SUBTITLE: &str = "A Deep Dive into My Ethereum Project";

pub const OVERVIEW_TITLE: &str = "HW4 Overview";

pub const OVERVIEW: &str = "This week I decided to do programming assignment option 2. I was very excited to start learning more about block chain and as i dove deeper I enjoyed it more and more. Overall, I went it thinking it was be pretty straight forward. I would first grab a larger databased of recent transactions, clean up the data, and then start digging for interesting patterns. I was especially curious to see if I could find any connection between the large companies buying certain crypos adn theri effect of crypto prices. All of this was way easier said than done and I found a lot fo errors and bugs through my process. Eventually I came up with a solution I was happy with. Using Etherscan for the raw transaction details and Alpha Vantage for the daily price info. I was able to get a decently sized database and make interesting conlsuions from it.";

pub const METHODOLOGY_TITLE: &str = "Methodology: My Step-by-Step Process";

pub const METHODOLOGY_INTRO: &str = "Bellow I have layed out my step by step appraoch, moving from data extraction and cleaning to in-depth analysis and visualization. Click on any step below to see the the Python code I used on the right.";

pub const ANALYTICS_TITLE: &str = "In-Depth Analytics";

pub const ANALYTICS_INTRO: &str = "I dove deep into the data to uncover patterns in transaction values, gas fees, network structure, and price movements. The transaction data was collected over a period of about 28 minutes on July 4, 2025.";

pub const VISUALS_TITLE: &str = "Visual Evidence";

pub const RETROSPECTIVE_TITLE: &str = "Errors and takeways";

/// Retrospective paragraphs shown before the API parameter snippet.
pub const RETROSPECTIVE_BEFORE: &[&str] = &[
    "I had a lot of debugging errors when going through this project. For one, a lot of crypto API's are paid, which makes sense. Trying to find free large source data was challenging and I ended up having to limit myself and use a pretty small dataset of only about 80 transactions.",
    "Another challenge I ran into was data consistency. Early on, I was making a new API call every day, which meant my data for transactions was always changing. This was cool to see how changes were happening, but ultimately when making a submission I need consistent data. I quickly realized I had to lock in a specific date and time range for my data queries, which you can see in the API parameters I used:",
];

/// Retrospective paragraphs shown after the API parameter snippet.
pub const RETROSPECTIVE_AFTER: &[&str] = &[
    "The iterative process of debugging, redesigning, and refining my visualization was challenging, but rewarding. Something that was interesting to see was how heavily skewed real Ethereum networks are. There are many small nodes but some address nodes are very large.",
];

pub const CHALLENGES_CODE: &str = r#"
# Part of the data fetching function
params = {
    'module': 'account',
    'action': 'txlist',
    'address': addr,
    'startblock': 18000000, # Locked start block
    'endblock': 99999999,   # Essentially 'latest'
    'sort': 'desc',
    'apikey': self.etherscan_api_key
}
  "#;

/// Language tag shown on code blocks.
pub const CODE_LANGUAGE: &str = "python";

// ============================================================================
// Analytics
// ============================================================================

pub const TRANSACTION_STATS: &[StatCard] = &[
    StatCard::new("Total Txs", "80")
        .with_tooltip("The total number of transactions in my dataset."),
    StatCard::new("Unique Addresses", "48")
        .with_tooltip("The number of unique sender/receiver addresses in the time window."),
    StatCard::new("Total Value", "9.58 ETH").with_tooltip("The sum of all ETH transferred."),
    StatCard::new("Max Value", "9.57 ETH")
        .with_tooltip("This single transaction accounted for almost all the value."),
    StatCard::new("Mean Value", "0.12 ETH")
        .with_tooltip("The average is skewed by the one large transaction."),
    StatCard::new("Median Value", "0.00 ETH")
        .with_description("Most txs are small contract interactions.")
        .with_tooltip("This shows the network is dominated by non-value transfers."),
    StatCard::new("Std. Deviation", "~1.07 ETH")
        .with_tooltip("A high standard deviation points to a wide spread in transaction values."),
    StatCard::new("Txs / Minute", "~2.9")
        .with_tooltip("Transaction activity was bursty, not constant."),
];

pub const GAS_STATS: &[StatCard] = &[
    StatCard::new("Mean Gas Price", "~55 Gwei")
        .with_tooltip("Gwei is a smaller denomination of ETH used for gas fees."),
    StatCard::new("Median Gas Price", "55 Gwei"),
    StatCard::new("Min Gas Used", "21,000")
        .with_tooltip("This is the standard amount for a simple ETH transfer."),
    StatCard::new("Max Gas Used", "100,000").with_tooltip(
        "Higher gas usage typically means a more complex smart contract interaction.",
    ),
    StatCard::new("Mean Gas Used", "~60,000"),
    StatCard::new("Median Gas Used", "60,000"),
];

pub const PRICE_STATS: &[StatCard] = &[
    StatCard::new("Data Points", "32 Days")
        .with_tooltip("I pulled over a month's worth of daily closing prices."),
    StatCard::new("Latest Price", "$2,479.55"),
    StatCard::new("Highest Price", "$2,816.15"),
    StatCard::new("Lowest Price", "$2,228.57"),
    StatCard::new("Average Price", "$2,510.80"),
    StatCard::new("Std. Deviation", "~$170")
        .with_tooltip("A measure of the price volatility over the period."),
];

pub const TOP_ADDRESSES: &[AddressRankingRow] = &[
    row(1, "0x7a250d5630b4cf539739df2c5dacb4c659f2488d", 40, 9.57),
    row(2, "0xe592427a0aece92de3edee1f18e0157c05861564", 40, 0.01),
    row(3, "0xf5213a6a2f0890321712520b8048d9886c1a9900", 33, 0.00),
    row(4, "0xb4897d49c5859b9bb5e3d6c4372bdd83d55c8d6c", 3, 0.00),
    row(5, "0x67d729ef227c53eb758c1b4b6e0e540d77f4bfc1", 1, 0.02),
    row(6, "0xb5947550d0e5ddc1ad479935a4ea4f08f01f6a1d", 1, 0.00),
    row(7, "0xfe96ade32d7407c8d8c8ef25ecc558cf4744934f", 1, 0.03),
    row(8, "0xbf2f6981c7a8c34590a2f15491235ad162eb51a5", 1, 0.00),
    row(9, "0x962a7ea7b86ba5d71c0c41984cb1d8d059e21e6b", 1, 0.01),
    row(10, "0x3a1b92a5dc06343ff9c6318d7c4b36b042a980db", 1, 0.00),
];

const fn row(rank: u32, address: &'static str, transactions: u32, total_value: f64) -> AddressRankingRow {
    AddressRankingRow {
        rank,
        address,
        transactions,
        total_value,
    }
}

// ============================================================================
// Methodology
// ============================================================================

pub const METHODOLOGY_STEPS: &[MethodologyStep] = &[
    MethodologyStep {
        id: StepId(1),
        title: "Data Extraction",
        description: "I used two separate APIs for this project: the Etherscan API to get a list of 80 recent transactions, and the Alpha Vantage API to get daily ETH-USD price data.",
        code_sample: r#"def load_data(self, num_transactions=200):
    # Fetches transaction data from Etherscan API
    # ... implementation ...

def load_price(self, days=31):
    # Fetches price data from Alpha Vantage API
    # ... implementation ...

def run(self):
    self.load_data(200)
    try:
        self.load_price(31)
        price_data_success = True
    except Exception:
        self.price_data = None
        price_data_success = False
    # ..."#,
    },
    MethodologyStep {
        id: StepId(2),
        title: "Data Cleaning",
        description: "I converted raw data into usable formats, such as changing timestamps to datetime objects and transaction values from Wei to ETH, and filtered out any malformed records.",
        code_sample: r#"def load_data(...):
    # ... (inside the loop processing transactions)
    txs.append({
        # ...
        'value': float(tx['value']) / 1e18, # Wei to ETH
        'gas_price': float(tx['gasPrice']) / 1e9, # Wei to Gwei
        # ...
    })
    # ...
    df = pd.DataFrame(txs)
    df['timestamp'] = pd.to_datetime(df['timestamp'], unit='s')
    self.transactions_df = df"#,
    },
    MethodologyStep {
        id: StepId(3),
        title: "In-Depth Analytics",
        description: "I computed a wide range of descriptive statistics for transaction values, gas usage, and timing. I then identified the top 10 most active addresses for my network analysis.",
        code_sample: r#"def stats(self):
    total_value = self.transactions_df['value'].sum()
    avg_value = self.transactions_df['value'].mean()
    # ... more stats
    return { ... }

def top_addresses(self, n=10):
    # ... logic to count and sort addresses by activity
    return self.selected_addresses"#,
    },
    MethodologyStep {
        id: StepId(4),
        title: "Graph Construction",
        description: "I used NetworkX to build a directed graph of the top 10 addresses, with edges weighted by the total ETH transferred.",
        code_sample: r#"def make_graph(self):
    G = nx.DiGraph()
    for addr in self.selected_addresses:
        G.add_node(addr, **self.address_stats[addr])
    
    for _, row in self.transactions_df.iterrows():
        if (row['from_address'] in self.selected_addresses and 
            row['to_address'] in self.selected_addresses):
            # ... logic to add/update edges
    return G, { ... graph stats ... }"#,
    },
];

// ============================================================================
// Figures
// ============================================================================

/// Substituted for a figure whose image could not be opened.
pub const FALLBACK_IMAGE_URL: &str =
    "https://placehold.co/800x450/e2e8f0/334155?text=Error+Loading+Image";

pub const FIGURES: [Figure; 2] = [
    Figure {
        id: FigureId::NetworkGraph,
        url: "https://placehold.co/800x450/e2e8f0/334155?text=My+Blockchain+Network+Graph",
        alt: "A network graph showing connections between top 10 Ethereum addresses.",
        caption: "My graph of the top 10 most active Ethereum addresses. Note the few direct connections between major players.",
    },
    Figure {
        id: FigureId::PriceChart,
        url: "https://placehold.co/800x450/e2e8f0/334155?text=My+ETH-USD+Price+Chart",
        alt: "A line chart showing the daily price of ETH in USD over the past month.",
        caption: "ETH-USD price fluctuations over the last 32 days, showing the market's recent volatility.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_dense_and_ordered() {
        for (i, row) in TOP_ADDRESSES.iter().enumerate() {
            assert_eq!(row.rank as usize, i + 1);
        }
    }

    #[test]
    fn test_addresses_are_hex_identifiers() {
        for row in TOP_ADDRESSES {
            assert_eq!(row.address.len(), 42);
            assert!(row.address.starts_with("0x"));
            assert!(row.address[2..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_step_ids_unique() {
        let mut ids: Vec<u32> = METHODOLOGY_STEPS.iter().map(|s| s.id.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_challenges_code_keeps_surrounding_whitespace() {
        assert!(CHALLENGES_CODE.starts_with("\n# Part of the data fetching function"));
        assert!(CHALLENGES_CODE.ends_with("}\n  "));
    }

    #[test]
    fn test_figures_indexed_by_id() {
        assert_eq!(FIGURES[0].id, FigureId::NetworkGraph);
        assert_eq!(FIGURES[1].id, FigureId::PriceChart);
        assert_ne!(FIGURES[0].url, FALLBACK_IMAGE_URL);
    }
}
