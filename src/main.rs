//! Inference Pathway Advisor
//!
//! Run with: pathway-advisor recommend --model-size=120 --latency=300
//! Or serve the HTTP API: pathway-advisor --serve --port=3000

use anyhow::Result;
use pathway_advisor::{
    catalog, chart::RadarChart, config::ServerConfig, engine::RecommendationEngine,
    estimate::CostEstimate, server, types::*,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage:
  pathway-advisor recommend --model-size=MB --latency=MS [--gpu] [--traffic=Spiky|Steady|Burst|Offline]
                            [--cost=Low|Medium|High] [--cold-start=Low|Medium|High] [--json] [--explain] [--lenient]
  pathway-advisor --chart <recommend flags>
  pathway-advisor --catalog
  pathway-advisor --serve [--host=H] [--port=N] [--timeout=SECS] [--lenient]";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("--serve") => {
            let config = ServerConfig::load(&args[2..])?;
            server::run(config).await
        }
        Some("recommend") => run_recommend(&args[2..]),
        Some("--chart") => run_chart(&args[2..]),
        Some("--catalog") => {
            println!("{}", serde_json::to_string_pretty(catalog::list())?);
            Ok(())
        }
        _ => {
            eprintln!("{}", USAGE);
            Ok(())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the wire request from `--flag=value` arguments
fn request_from_args(args: &[String]) -> AnalyzeRequest {
    let flag = |name: &str| {
        args.iter()
            .find_map(|a| a.strip_prefix(name))
            .map(|v| Value::String(v.to_string()))
            .unwrap_or(Value::Null)
    };
    let gpu = args.iter().any(|a| a == "--gpu") || flag("--gpu=") == Value::from("Yes");

    AnalyzeRequest {
        model_size: flag("--model-size="),
        latency: flag("--latency="),
        gpu_flag: Value::from(if gpu { "Yes" } else { "No" }),
        traffic_flow: flag("--traffic="),
        cost_preference: flag("--cost="),
        boot_tolerance: flag("--cold-start="),
    }
}

fn constraints_from_args(args: &[String]) -> Result<UserConstraints> {
    let constraints = request_from_args(args).normalize();
    if !args.iter().any(|a| a == "--lenient") {
        constraints.validate()?;
    }
    Ok(constraints)
}

fn run_recommend(args: &[String]) -> Result<()> {
    let constraints = constraints_from_args(args)?;
    let engine = RecommendationEngine::new();
    let rec = engine.recommend(&constraints);

    if args.iter().any(|a| a == "--json") {
        println!("{}", serde_json::to_string_pretty(&rec)?);
        return Ok(());
    }

    let estimate = CostEstimate::from_model_size(constraints.model_size_mb);
    let best_icon = catalog::icon_for(&rec.recommended);

    println!("\n┌─────────────────────────────────────────────────────────────┐");
    println!("│ INFERENCE PATHWAY RECOMMENDATION                            │");
    println!("└─────────────────────────────────────────────────────────────┘\n");
    println!("{} {}", best_icon, rec.recommended);
    println!("   {}", rec.reason);
    println!();
    println!("Estimated Monthly Cost: {}", estimate.display());
    println!("   *Estimates based on model size and usage patterns");
    println!();

    println!("RANKING:");
    for (i, s) in rec.comparisons.iter().enumerate() {
        let bar = "█".repeat(s.score as usize);
        println!(
            "  {}. {} {:<34} score {:>2} {}",
            i + 1,
            s.strategy.icon,
            s.name(),
            s.score,
            bar
        );
    }
    println!();

    if let Some(best) = rec.comparisons.first() {
        let d = best.strategy;
        println!("PROFILE: {}", d.id);
        println!("   Latency: {}   Cost: {}   Scalability: {}", d.latency, d.cost, d.scalability);
        println!("   Difficulty: {}   Cold Start: {}", d.difficulty, d.cold_start);
        println!("   Best For: {}", d.best_for);
        println!("   Summary: {}", d.summary);
        for pro in d.advantages {
            println!("   ✓ {}", pro);
        }
        for con in d.limitations {
            println!("   ✗ {}", con);
        }
        println!();
    }

    if args.iter().any(|a| a == "--explain") {
        println!("RULES:");
        for (id, outcomes) in engine.explain(&constraints) {
            println!("  {}", id);
            for o in outcomes {
                let mark = if o.matched { "+" } else { " " };
                println!("    [{}] {:<32} +{}", mark, o.rule, o.weight);
            }
        }
        println!();
    }

    Ok(())
}

fn run_chart(args: &[String]) -> Result<()> {
    let constraints = constraints_from_args(args)?;
    let rec = RecommendationEngine::new().recommend(&constraints);
    let chart = RadarChart::from_comparisons(&rec.comparisons);
    println!("{}", serde_json::to_string_pretty(&chart)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_request_from_args() {
        let c = request_from_args(&args(&[
            "--model-size=500",
            "--latency=50",
            "--gpu",
            "--traffic=Burst",
            "--cost=High",
            "--cold-start=Low",
        ]))
        .normalize();
        assert_eq!(c.model_size_mb, 500.0);
        assert!(c.needs_gpu);
        assert_eq!(c.traffic_pattern, TrafficPattern::Burst);
        assert_eq!(c.cold_start_tolerance, ColdStartTolerance::Low);
    }

    #[test]
    fn test_gpu_flag_value_form() {
        let c = request_from_args(&args(&["--gpu=Yes"])).normalize();
        assert!(c.needs_gpu);
        let c = request_from_args(&args(&["--gpu=No"])).normalize();
        assert!(!c.needs_gpu);
    }

    #[test]
    fn test_constraints_require_size_unless_lenient() {
        assert!(constraints_from_args(&args(&["--latency=10"])).is_err());
        assert!(constraints_from_args(&args(&["--latency=10", "--lenient"])).is_ok());
    }
}
