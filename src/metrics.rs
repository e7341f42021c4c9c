//! Tracked Metrics Module
//! Fixed mapping between CSV column indexes, chart labels, and summary columns.

/// Column index of the Cy Young voting points in the season CSV.
pub const VOTES_COLUMN: usize = 3;

/// One tracked pitching metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    /// Zero-based column index in the season CSV.
    pub column: usize,
    /// Human-readable name used in chart titles, axis labels, and file names.
    pub name: &'static str,
    /// Column name in the summary CSV row.
    pub summary_key: &'static str,
}

/// The seven metrics correlated against voting points. The input schema is
/// fixed, so these indexes are too.
pub static METRICS: [Metric; 7] = [
    Metric { column: 6, name: "WAR", summary_key: "WAR" },
    Metric { column: 7, name: "Wins", summary_key: "W" },
    Metric { column: 9, name: "W-L%", summary_key: "W-L%" },
    Metric { column: 10, name: "ERA", summary_key: "ERA" },
    Metric { column: 24, name: "Strikeouts", summary_key: "SO" },
    Metric { column: 29, name: "WHIP", summary_key: "WHIP" },
    Metric { column: 30, name: "ERA+", summary_key: "ERA+" },
];

/// Summary CSV columns after `Year`, in output order.
pub const SUMMARY_COLUMNS: [&str; 7] = ["ERA", "SO", "W", "W-L%", "WHIP", "ERA+", "WAR"];
