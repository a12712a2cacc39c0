//! Diagnostics and factor attribution CLI tool.
//!
//! Reads a long-format CSV with `date,ticker,close` columns and prints a JSON
//! document with per-ticker diagnostics and factor attribution against the
//! benchmark.
//!
//! Usage: `cargo run --features cli --bin analyze -- PRICES.csv [TICKER...] [--config FILE]
//! [--benchmark SYMBOL] [--portfolio A,B,..] [--weights W1,W2,..]`

use std::{collections::BTreeMap, env, fs, path::PathBuf};

use factorscope::{
    model::{AnalysisReport, AnalyzerConfig, FactorAnalyzer, report::to_json},
    primitives::Symbol,
    utils::prices_from_frame,
};
use polars::prelude::*;
use serde_json::{Value, json};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    prices: PathBuf,
    tickers: Vec<String>,
    config: Option<PathBuf>,
    benchmark: Option<String>,
    portfolio: Vec<String>,
    weights: Option<Vec<f64>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(args) = parse_args(&args) else {
        eprintln!("Usage: analyze PRICES.csv [TICKER...] [--config FILE] [--benchmark SYMBOL]");
        eprintln!("                [--portfolio A,B,..] [--weights W1,W2,..]");
        eprintln!("Example: analyze prices.csv AAPL MSFT --portfolio AAPL,MSFT,TSLA");
        std::process::exit(1);
    };

    match run(&args) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut parsed = Args::default();
    let mut positional = Vec::new();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => parsed.config = Some(PathBuf::from(iter.next()?)),
            "--benchmark" => parsed.benchmark = Some(iter.next()?.to_uppercase()),
            "--portfolio" => parsed.portfolio = split_list(iter.next()?),
            "--weights" => {
                let weights = iter.next()?.split(',').map(|w| w.trim().parse::<f64>());
                parsed.weights = Some(weights.collect::<Result<_, _>>().ok()?);
            }
            flag if flag.starts_with("--") => return None,
            other => positional.push(other.to_string()),
        }
    }

    let mut positional = positional.into_iter();
    parsed.prices = PathBuf::from(positional.next()?);
    parsed.tickers = positional.map(|t| t.to_uppercase()).collect();
    Some(parsed)
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',').map(|s| s.trim().to_uppercase()).filter(|s| !s.is_empty()).collect()
}

fn load_config(args: &Args) -> Result<AnalyzerConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(benchmark) = &args.benchmark {
        config.benchmark = Symbol::new(benchmark.as_str());
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<Value, Box<dyn std::error::Error>> {
    let config = load_config(args)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(args.prices.clone()))?
        .finish()?;
    let prices = prices_from_frame(&df)?;
    info!(path = %args.prices.display(), n_tickers = prices.len(), "prices loaded");

    let benchmark = config.benchmark.clone();
    let mut analyzer = FactorAnalyzer::with_config(prices, config);

    let tickers: Vec<Symbol> = if args.tickers.is_empty() {
        analyzer.prices().keys().cloned().collect()
    } else {
        args.tickers.iter().map(|t| Symbol::new(t.as_str())).collect()
    };

    let mut diagnostics = BTreeMap::new();
    let mut attribution = BTreeMap::new();
    for ticker in &tickers {
        let report = analyzer.diagnose(ticker.as_str()).map(AnalysisReport::from);
        diagnostics.insert(ticker.to_string(), to_json(&report));

        if *ticker != benchmark {
            let report = analyzer.analyze_asset(ticker.as_str()).map(AnalysisReport::from);
            attribution.insert(ticker.to_string(), to_json(&report));
        }
    }

    let portfolio = if args.portfolio.is_empty() {
        Value::Null
    } else {
        let members: Vec<&str> = args.portfolio.iter().map(String::as_str).collect();
        let report = analyzer
            .analyze_portfolio(&members, args.weights.as_deref())
            .map(AnalysisReport::from);
        to_json(&report)
    };

    Ok(json!({
        "benchmark": benchmark,
        "diagnostics": diagnostics,
        "attribution": attribution,
        "portfolio": portfolio,
    }))
}
