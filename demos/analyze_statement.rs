use anyhow::Result;
use statement_analyzer::*;

const SAMPLE_CSV: &str = "\
Line Item,Prior,Current
SHORT-TERM ASSETS,\"400,000\",\"600,000\"
Cash,\"150,000\",\"220,000\"
Inventory,\"250,000\",\"380,000\"
Long-term assets,\"600,000\",\"600,000\"
TOTAL ASSETS,\"1,000,000\",\"1,200,000\"
SHORT-TERM LIABILITIES,\"200,000\",\"300,000\"
";

fn load_records(path: Option<&str>) -> Result<Vec<RawRecord>> {
    let input: Box<dyn std::io::Read> = match path {
        Some(path) => Box::new(std::fs::File::open(path)?),
        None => Box::new(SAMPLE_CSV.as_bytes()),
    };
    let mut reader = csv::Reader::from_reader(input);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        // Only the first three columns are positionally meaningful.
        records.push(RawRecord::new(
            record.get(0).unwrap_or_default(),
            record.get(1).unwrap_or_default(),
            record.get(2).unwrap_or_default(),
        ));
    }
    Ok(records)
}

fn main() -> Result<()> {
    let path = std::env::args().nth(1);
    let records = load_records(path.as_deref())?;

    let report = analyze_records(&records)?;

    println!("{}", render_markdown_table(&report.enriched));
    println!("{}", render_liquidity(&report.liquidity));

    if let Some(indicator) = report.liquidity.indicator() {
        if indicator.is_degenerate() {
            println!("⚠️  A period has zero short-term liabilities; its ratio is reported as 0.00x.");
        }
    }

    Ok(())
}
