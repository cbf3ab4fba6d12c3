use crate::error::{Result, StatementError};
use crate::matcher::{find_first_match, LabelConfig};
use crate::schema::{
    EnrichedRow, EnrichedStatement, LiquidityIndicator, LiquidityOutcome, RawStatement,
    ZERO_DIVISOR_EPSILON,
};
use log::debug;

/// Pure ratio derivation over a normalized comparative statement. Holds only
/// the canonical-label configuration; every call is independent and
/// referentially transparent.
pub struct RatioEngine {
    labels: LabelConfig,
}

impl Default for RatioEngine {
    fn default() -> Self {
        Self::new(LabelConfig::default())
    }
}

impl RatioEngine {
    pub fn new(labels: LabelConfig) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }

    /// Derives the four ratio columns for every row, in input order.
    ///
    /// Fails only when no row label contains the configured total-assets
    /// label; every numeric condition (zero bases, zero totals) is handled by
    /// epsilon substitution rather than skipping or erroring.
    pub fn derive_enriched_statement(&self, raw: &RawStatement) -> Result<EnrichedStatement> {
        let total_idx = find_first_match(
            raw.rows.iter().map(|r| r.label.as_str()),
            &self.labels.total_assets,
        )
        .ok_or_else(|| {
            StatementError::MissingRequiredLineItem(self.labels.total_assets.clone())
        })?;

        let total_row = &raw.rows[total_idx];
        let total_prior = nonzero_or_epsilon(total_row.prior);
        let total_current = nonzero_or_epsilon(total_row.current);

        debug!(
            "Total-assets row '{}' at index {}: prior {}, current {}",
            total_row.label, total_idx, total_row.prior, total_row.current
        );

        let rows = raw
            .rows
            .iter()
            .map(|row| {
                let base = nonzero_or_epsilon(row.prior);
                EnrichedRow {
                    label: row.label.clone(),
                    prior: row.prior,
                    current: row.current,
                    growth_pct: (row.current - row.prior) / base * 100.0,
                    prior_share_pct: row.prior / total_prior * 100.0,
                    current_share_pct: row.current / total_current * 100.0,
                }
            })
            .collect();

        Ok(EnrichedStatement { rows })
    }

    /// Scans for the short-term asset and liability rows and computes the
    /// current-liquidity ratio pair. Missing rows degrade to `Unavailable`;
    /// an exactly-zero liabilities value yields a 0.0 ratio for that period.
    pub fn derive_liquidity_indicator(&self, enriched: &EnrichedStatement) -> LiquidityOutcome {
        let labels = enriched.rows.iter().map(|r| r.label.as_str());
        let assets_idx = find_first_match(labels.clone(), &self.labels.short_term_assets);
        let liabilities_idx = find_first_match(labels, &self.labels.short_term_liabilities);

        let (assets_idx, liabilities_idx) = match (assets_idx, liabilities_idx) {
            (Some(a), Some(l)) => (a, l),
            (None, _) => {
                debug!(
                    "No row matches '{}'; liquidity indicator unavailable",
                    self.labels.short_term_assets
                );
                return LiquidityOutcome::Unavailable {
                    missing: self.labels.short_term_assets.clone(),
                };
            }
            (_, None) => {
                debug!(
                    "No row matches '{}'; liquidity indicator unavailable",
                    self.labels.short_term_liabilities
                );
                return LiquidityOutcome::Unavailable {
                    missing: self.labels.short_term_liabilities.clone(),
                };
            }
        };

        let assets = &enriched.rows[assets_idx];
        let liabilities = &enriched.rows[liabilities_idx];

        LiquidityOutcome::Available(LiquidityIndicator {
            prior_ratio: ratio_or_zero(assets.prior, liabilities.prior),
            current_ratio: ratio_or_zero(assets.current, liabilities.current),
        })
    }
}

fn nonzero_or_epsilon(value: f64) -> f64 {
    if value == 0.0 {
        ZERO_DIVISOR_EPSILON
    } else {
        value
    }
}

// Zero liabilities conventionally means an undefined ratio; 0.0 is kept for
// compatibility with existing consumers. `LiquidityIndicator::is_degenerate`
// lets callers detect the case.
fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
