//! # Statement Analyzer
//!
//! A library for deriving growth, composition and liquidity ratios from a
//! small comparative financial statement (line-item label, prior-period
//! value, current-period value), with optional AI commentary over the result.
//!
//! ## Core Concepts
//!
//! - **Raw Statement**: an ordered three-column table, values normalized to
//!   finite numbers (malformed cells become 0.0)
//! - **Enriched Statement**: the same rows plus growth and composition
//!   percentages, derived against the total-assets row
//! - **Liquidity Indicator**: short-term assets over short-term liabilities
//!   for each period; missing rows degrade to an unavailable outcome rather
//!   than an error
//! - **Canonical Labels**: rows are located by case-insensitive substring
//!   containment against configurable labels, not exact schema matching
//!
//! ## Example
//!
//! ```rust
//! use statement_analyzer::*;
//!
//! let records = vec![
//!     RawRecord::new("TOTAL ASSETS", "1,000", "1,200"),
//!     RawRecord::new("SHORT-TERM ASSETS", "400", "600"),
//!     RawRecord::new("SHORT-TERM LIABILITIES", "200", "300"),
//! ];
//!
//! let report = analyze_records(&records).unwrap();
//! assert!((report.enriched.rows[0].growth_pct - 20.0).abs() < 1e-9);
//! ```

pub mod engine;
pub mod error;
pub mod ingestion;
pub mod matcher;
pub mod render;
pub mod schema;
pub mod session;

#[cfg(feature = "gemini")]
pub mod llm;

pub use engine::RatioEngine;
pub use error::{Result, StatementError};
pub use ingestion::*;
pub use matcher::{label_matches, LabelConfig};
pub use render::{analysis_context, render_liquidity, render_markdown_table};
pub use schema::*;
pub use session::{AnalysisSession, ChatRole, ChatTurn};

use log::info;

/// Full derivation output for one statement: the ratio-annotated table and
/// the liquidity scan outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub enriched: EnrichedStatement,
    pub liquidity: LiquidityOutcome,
}

pub struct StatementProcessor {
    engine: RatioEngine,
}

impl StatementProcessor {
    pub fn new(labels: LabelConfig) -> Self {
        Self {
            engine: RatioEngine::new(labels),
        }
    }

    pub fn engine(&self) -> &RatioEngine {
        &self.engine
    }

    pub fn process(&self, raw: &RawStatement) -> Result<AnalysisReport> {
        info!("Processing statement with {} rows", raw.len());

        let enriched = self.engine.derive_enriched_statement(raw)?;
        let liquidity = self.engine.derive_liquidity_indicator(&enriched);

        Ok(AnalysisReport {
            enriched,
            liquidity,
        })
    }
}

impl Default for StatementProcessor {
    fn default() -> Self {
        Self::new(LabelConfig::default())
    }
}

/// Convenience entry point: derives a full report from an already-normalized
/// statement using the default canonical labels.
pub fn analyze_statement(raw: &RawStatement) -> Result<AnalysisReport> {
    StatementProcessor::default().process(raw)
}

/// Convenience entry point: normalizes positional text records, then derives
/// a full report using the default canonical labels.
pub fn analyze_records(records: &[RawRecord]) -> Result<AnalysisReport> {
    let raw = convert_records_to_statement(records);
    analyze_statement(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_processing() {
        let records = vec![
            RawRecord::new("A. SHORT-TERM ASSETS", "400", "600"),
            RawRecord::new("B. Long-term assets", "600", "600"),
            RawRecord::new("TOTAL ASSETS", "1,000", "1,200"),
            RawRecord::new("C. SHORT-TERM LIABILITIES", "200", "300"),
        ];

        let report = analyze_records(&records).unwrap();
        assert_eq!(report.enriched.rows.len(), 4);

        let total = &report.enriched.rows[2];
        assert!((total.growth_pct - 20.0).abs() < 1e-9);
        assert!((total.prior_share_pct - 100.0).abs() < 1e-9);

        let indicator = report.liquidity.indicator().expect("liquidity available");
        assert!((indicator.prior_ratio - 2.0).abs() < 1e-9);
        assert!((indicator.current_ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_total_assets_reported() {
        let records = vec![RawRecord::new("Cash", "10", "20")];
        let err = analyze_records(&records).unwrap_err();
        assert!(err.to_string().contains("TOTAL ASSETS"));
    }
}
