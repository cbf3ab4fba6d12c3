use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Substituted for an exactly-zero denominator so ratio derivation stays
/// total while preserving the sign and magnitude behavior of near-zero bases.
pub const ZERO_DIVISOR_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StatementRow {
    #[schemars(description = "Line-item label as it appears in the statement (e.g., 'TOTAL ASSETS')")]
    pub label: String,

    #[schemars(description = "Prior-period value. Always finite; malformed input normalizes to 0.0")]
    pub prior: f64,

    #[schemars(description = "Current-period value. Always finite; malformed input normalizes to 0.0")]
    pub current: f64,
}

/// An ordered comparative statement: one row per line item, three
/// positionally-meaningful columns. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RawStatement {
    pub rows: Vec<StatementRow>,
}

impl RawStatement {
    pub fn new(rows: Vec<StatementRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Content-derived cache key. Hashes labels and value bit patterns so two
    /// uploads with identical content share a key while a re-upload with the
    /// same shape but different values does not.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        for row in &self.rows {
            row.label.hash(&mut hasher);
            row.prior.to_bits().hash(&mut hasher);
            row.current.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EnrichedRow {
    pub label: String,
    pub prior: f64,
    pub current: f64,

    #[schemars(description = "Period-over-period growth, percent")]
    pub growth_pct: f64,

    #[schemars(description = "Prior value as percent of prior total assets")]
    pub prior_share_pct: f64,

    #[schemars(description = "Current value as percent of current total assets")]
    pub current_share_pct: f64,
}

/// Ratio-annotated statement. Rows appear in the same order as the raw input;
/// downstream display and narration both rely on stable row identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EnrichedStatement {
    pub rows: Vec<EnrichedRow>,
}

impl EnrichedStatement {
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Current-liquidity ratio pair: short-term assets over short-term
/// liabilities for each period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LiquidityIndicator {
    pub prior_ratio: f64,
    pub current_ratio: f64,
}

impl LiquidityIndicator {
    /// True when either period's ratio was forced to 0.0 by an exactly-zero
    /// liabilities value. Callers that want to surface the undefined-ratio
    /// case instead of a silent 0 can check this.
    pub fn is_degenerate(&self) -> bool {
        self.prior_ratio == 0.0 || self.current_ratio == 0.0
    }

    pub fn delta(&self) -> f64 {
        self.current_ratio - self.prior_ratio
    }
}

/// Outcome of the liquidity scan. `Unavailable` is a degraded-view signal,
/// not an error: the enriched statement is still valid without it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiquidityOutcome {
    Available(LiquidityIndicator),
    Unavailable { missing: String },
}

impl LiquidityOutcome {
    pub fn indicator(&self) -> Option<&LiquidityIndicator> {
        match self {
            LiquidityOutcome::Available(indicator) => Some(indicator),
            LiquidityOutcome::Unavailable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_statement() -> RawStatement {
        RawStatement::new(vec![
            StatementRow {
                label: "TOTAL ASSETS".to_string(),
                prior: 1000.0,
                current: 1200.0,
            },
            StatementRow {
                label: "SHORT-TERM ASSETS".to_string(),
                prior: 400.0,
                current: 600.0,
            },
        ])
    }

    #[test]
    fn test_fingerprint_stable_for_identical_content() {
        assert_eq!(
            sample_statement().fingerprint(),
            sample_statement().fingerprint()
        );
    }

    #[test]
    fn test_fingerprint_changes_with_values() {
        let mut other = sample_statement();
        other.rows[1].current = 601.0;
        assert_ne!(sample_statement().fingerprint(), other.fingerprint());
    }

    #[test]
    fn test_serialization_round_trip() {
        let statement = sample_statement();
        let json = serde_json::to_string_pretty(&statement).unwrap();
        assert!(json.contains("TOTAL ASSETS"));

        let deserialized: RawStatement = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, statement);
    }

    #[test]
    fn test_schema_generation() {
        let schema = schemars::schema_for!(EnrichedStatement);
        let json = serde_json::to_string_pretty(&schema).unwrap();
        assert!(json.contains("growth_pct"));
        assert!(json.contains("current_share_pct"));
    }
}
