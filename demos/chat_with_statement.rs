use dotenv::dotenv;
use statement_analyzer::llm::{GeminiClient, StatementAnalyst};
use statement_analyzer::*;
use std::error::Error;
use std::io::{self, Write};

fn sample_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new("SHORT-TERM ASSETS", "400,000", "600,000"),
        RawRecord::new("Long-term assets", "600,000", "600,000"),
        RawRecord::new("TOTAL ASSETS", "1,000,000", "1,200,000"),
        RawRecord::new("SHORT-TERM LIABILITIES", "200,000", "300,000"),
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    let api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");

    let report = analyze_records(&sample_records())?;
    let context = analysis_context(&report.enriched, &report.liquidity);

    println!("{}", render_markdown_table(&report.enriched));
    println!("{}\n", render_liquidity(&report.liquidity));

    let analyst = StatementAnalyst::new(GeminiClient::new(api_key));
    let mut session = AnalysisSession::new();

    println!("📊 Overview commentary:\n");
    println!("{}\n", analyst.summarize(&context).await?);

    println!("🤖 Ready! Ask questions about the statement (type 'quit' to exit).");
    println!("------------------------------------------------------------------");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut question = String::new();
        io::stdin().read_line(&mut question)?;
        let question = question.trim();

        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("quit") {
            break;
        }

        let answer = analyst
            .ask(question, &context, session.history())
            .await?;
        println!("\n{}\n", answer);

        session.push_turn(ChatTurn::user(question));
        session.push_turn(ChatTurn::model(answer));
    }

    Ok(())
}
