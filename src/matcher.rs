use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical labels the engine scans for. Matching is case-insensitive
/// substring containment, so "B. TOTAL ASSETS (270)" matches the default
/// `total_assets` label. Overriding the fields supports localized statements
/// and synonyms without touching the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LabelConfig {
    pub total_assets: String,
    pub short_term_assets: String,
    pub short_term_liabilities: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            total_assets: "TOTAL ASSETS".to_string(),
            short_term_assets: "SHORT-TERM ASSETS".to_string(),
            short_term_liabilities: "SHORT-TERM LIABILITIES".to_string(),
        }
    }
}

/// Case-insensitive substring containment over line-item labels.
pub fn label_matches(label: &str, canonical: &str) -> bool {
    label.to_lowercase().contains(&canonical.to_lowercase())
}

/// Index of the first row whose label matches `canonical`, in input order.
/// First match wins when several rows match.
pub fn find_first_match<'a, I>(labels: I, canonical: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .position(|label| label_matches(label, canonical))
}
