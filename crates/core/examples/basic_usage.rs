//! Basic usage example of the verbatim library

use tracing_subscriber::EnvFilter;
use verbatim_core::batch::compare_pairs;
use verbatim_core::normalizers::UnicodeNfkc;
use verbatim_core::{
    find_consecutive_word_matches, generate_html_highlight, HtmlRenderer, MatchConfig,
    MatchEngine, WordTokenizer,
};

const LINE: &str = "----------------------------------------";

const ORIGINAL: &str = "It was the best of times, it was the worst of times, \
    it was the age of wisdom, it was the age of foolishness.";
const REVISED: &str = "Critics agree that \"it was the best of times\" opens the novel; \
    the line about the age of wisdom follows soon after.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("verbatim_core=debug".parse()?),
        )
        .init();

    println!("=== Verbatim Overlap Examples ===\n");

    example_simple_matches()?;
    example_custom_config()?;
    example_batch();
    example_html()?;

    Ok(())
}

fn example_simple_matches() -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 1: Simple Matching");
    println!("{}", LINE);

    let matches = find_consecutive_word_matches(ORIGINAL, REVISED, 3)?;
    for (i, m) in matches.iter().enumerate() {
        println!("  {}. \"{}\" <-> \"{}\"", i + 1, m.text1(ORIGINAL)?, m.text2(REVISED)?);
    }
    println!();
    Ok(())
}

fn example_custom_config() -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 2: Custom Configuration");
    println!("{}", LINE);

    let config = MatchConfig::lenient()
        .with_tokenizer(Box::new(WordTokenizer::new().with_normalizer(Box::new(UnicodeNfkc))));
    let engine = MatchEngine::new(config)?;
    let result = engine.compare(ORIGINAL, REVISED);

    println!("{}", result);
    Ok(())
}

fn example_batch() {
    println!("Example 3: Batch Comparison");
    println!("{}", LINE);

    let engine = MatchEngine::default();
    let pairs = [
        (ORIGINAL, REVISED),
        ("the quick brown fox", "the quick brown fox"),
        ("alpha beta", "alpha beta"),
    ];
    for (i, result) in compare_pairs(&engine, &pairs).iter().enumerate() {
        println!("  pair {}: {}", i + 1, result.summary());
    }
    println!();
}

fn example_html() -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 4: HTML Rendering");
    println!("{}", LINE);

    let matches = find_consecutive_word_matches(ORIGINAL, REVISED, 3)?;
    println!("{}", generate_html_highlight(ORIGINAL, REVISED, &matches)?);

    let document = HtmlRenderer::new()
        .with_headings("Original", "Revised")
        .render_document("Overlap report", ORIGINAL, REVISED, &matches)?;
    println!("Standalone document: {} bytes", document.len());
    Ok(())
}
