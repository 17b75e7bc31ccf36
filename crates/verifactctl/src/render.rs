//! Terminal rendering for fact-check results.

use owo_colors::OwoColorize;
use verifact_core::{FactCheckResult, Verdict};

pub fn print_result(result: &FactCheckResult) {
    println!();
    println!("  Claim: {}", result.normalized_claim);
    print!("  Verdict: ");
    match result.verdict {
        Verdict::True => println!("{}", "TRUE".green().bold()),
        Verdict::False => println!("{}", "FALSE".red().bold()),
        Verdict::Misleading => println!("{}", "MISLEADING".yellow().bold()),
        Verdict::Uncertain => println!("{}", "UNCERTAIN".dimmed().bold()),
    }
    println!("  Confidence: {:.0}%", result.confidence * 100.0);
    println!();
    println!("  {}", result.explanation);

    if !result.citations.is_empty() {
        println!();
        println!("  Sources:");
        for citation in &result.citations {
            match &citation.title {
                Some(title) => println!("    - {} ({})", title, citation.url.dimmed()),
                None => println!("    - {}", citation.url.dimmed()),
            }
        }
    }
    println!();
}
