//! Presentation formatting. The engine never rounds; every 2-decimal and
//! thousands-grouped rendering lives here.

use crate::schema::{EnrichedStatement, LiquidityIndicator, LiquidityOutcome};

/// Groups an already-rounded integer rendering with comma separators,
/// matching how raw statement values are displayed.
pub fn format_grouped(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Markdown table of the enriched statement: raw values as grouped integers,
/// derived columns as 2-decimal percentages, rows in statement order.
pub fn render_markdown_table(enriched: &EnrichedStatement) -> String {
    let mut out = String::new();
    out.push_str("| Line Item | Prior | Current | Growth (%) | Prior Share (%) | Current Share (%) |\n");
    out.push_str("| --- | ---: | ---: | ---: | ---: | ---: |\n");

    for row in &enriched.rows {
        out.push_str(&format!(
            "| {} | {} | {} | {:.2}% | {:.2}% | {:.2}% |\n",
            row.label,
            format_grouped(row.prior),
            format_grouped(row.current),
            row.growth_pct,
            row.prior_share_pct,
            row.current_share_pct,
        ));
    }

    out
}

/// Metric lines for the liquidity pair, 2 decimals with an "x" unit and the
/// period-over-period delta. The unavailable case renders as a warning line.
pub fn render_liquidity(outcome: &LiquidityOutcome) -> String {
    match outcome {
        LiquidityOutcome::Available(indicator) => format!(
            "Current liquidity (prior): {:.2}x\nCurrent liquidity (current): {:.2}x (delta {:+.2})",
            indicator.prior_ratio,
            indicator.current_ratio,
            indicator.delta(),
        ),
        LiquidityOutcome::Unavailable { missing } => format!(
            "Current liquidity unavailable: no row label contains '{}'",
            missing
        ),
    }
}

/// The serialized context handed to the narration layer: the full enriched
/// table plus the liquidity lines, so commentary and chat answers ground in
/// the same data the user sees.
pub fn analysis_context(enriched: &EnrichedStatement, liquidity: &LiquidityOutcome) -> String {
    format!(
        "{}\n{}",
        render_markdown_table(enriched),
        render_liquidity(liquidity)
    )
}

fn liquidity_value(indicator: &LiquidityIndicator, current: bool) -> f64 {
    if current {
        indicator.current_ratio
    } else {
        indicator.prior_ratio
    }
}

/// Single-period metric rendering, used by callers that display the two
/// periods side by side.
pub fn render_liquidity_metric(indicator: &LiquidityIndicator, current: bool) -> String {
    format!("{:.2}x", liquidity_value(indicator, current))
}
