//! Console and JSON rendering of command results.
//!
//! Table output goes to stdout with `println!`; JSON output is a single
//! pretty-printed document built from the view structs below.

use clap::ValueEnum;
use pitstop_core::types::{Compound, RaceParams, Strategy1Stop};
use pitstop_engine::mc::Evaluation;
use pitstop_optimiser::compare::ComparisonRow;
use pitstop_optimiser::search::{CandidateScore, LambdaResult, SearchReport};
use serde::Serialize;

use crate::Result;

/// Output format for command results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console report
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
}

/// One scored candidate.
#[derive(Debug, Serialize)]
pub struct CandidateView {
    index: usize,
    strategy: String,
    pit_lap: u32,
    first: Compound,
    second: Compound,
    score: f64,
    mean: f64,
    std: f64,
    eval_seconds: f64,
}

impl From<&CandidateScore> for CandidateView {
    fn from(s: &CandidateScore) -> Self {
        Self {
            index: s.index,
            strategy: s.label(),
            pit_lap: s.strategy.pit_lap,
            first: s.strategy.first,
            second: s.strategy.second,
            score: s.score,
            mean: s.mean,
            std: s.std,
            eval_seconds: s.elapsed.as_secs_f64(),
        }
    }
}

/// One λ pass.
#[derive(Debug, Serialize)]
pub struct LambdaView {
    lambda: f64,
    best: CandidateView,
    improvements: Vec<CandidateView>,
    ranked: Vec<CandidateView>,
}

impl From<&LambdaResult> for LambdaView {
    fn from(r: &LambdaResult) -> Self {
        Self {
            lambda: r.lambda,
            best: CandidateView::from(&r.best),
            improvements: r.improvements.iter().map(CandidateView::from).collect(),
            ranked: r.ranked.iter().map(CandidateView::from).collect(),
        }
    }
}

/// A full search.
#[derive(Debug, Serialize)]
pub struct SearchView {
    track: String,
    laps: u32,
    n_candidates: usize,
    n_trials: usize,
    seed: u64,
    elapsed_seconds: f64,
    results: Vec<LambdaView>,
}

/// A single strategy evaluation.
#[derive(Debug, Serialize)]
pub struct EvaluationView {
    strategy: String,
    mean: f64,
    std: f64,
    std_error: f64,
    lambda: f64,
    score: f64,
    n_trials: usize,
    seed: u64,
    eval_seconds: f64,
}

/// One row of a comparison.
#[derive(Debug, Serialize)]
pub struct ComparisonView {
    strategy: String,
    mean: f64,
    std: f64,
    std_error: f64,
    eval_seconds: f64,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn ranked_line(s: &CandidateScore) -> String {
    format!(
        "{}->{} @L{} | score={:.2} mean={:.2} std={:.2}",
        s.strategy.first.code(),
        s.strategy.second.code(),
        s.strategy.pit_lap,
        s.score,
        s.mean,
        s.std
    )
}

fn print_lambda_table(result: &LambdaResult, n_trials: usize) {
    println!("\n=== Risk-adjusted search (lambda={}) ===", result.lambda);
    println!("score = mean + λ·std | N={} sims/candidate", n_trials);

    for s in &result.improvements {
        println!(
            "NEW BEST: {:<22} score={:.4} mean={:.4} sd={:.4} (eval {:.3}s)",
            s.label(),
            s.score,
            s.mean,
            s.std,
            s.elapsed.as_secs_f64()
        );
    }

    let best = &result.best;
    println!("\nBEST (lambda={}): {}", result.lambda, best.label());
    println!("score={:.4} mean={:.4} sd={:.4}", best.score, best.mean, best.std);

    if !result.ranked.is_empty() {
        println!("\nTop {} strategies by risk-adjusted score:", result.ranked.len());
        for s in &result.ranked {
            println!("  {}", ranked_line(s));
        }
    }
}

/// Print a search report
pub fn print_search(report: &SearchReport, params: &RaceParams, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&SearchView {
            track: params.track.clone(),
            laps: params.laps,
            n_candidates: report.n_candidates,
            n_trials: report.n_trials,
            seed: report.seed,
            elapsed_seconds: report.elapsed.as_secs_f64(),
            results: report.results.iter().map(LambdaView::from).collect(),
        }),
        OutputFormat::Table => {
            println!(
                "Optimising 1-stop (compound order + pit lap) on {} ({} laps, {} candidates)...",
                params.track, params.laps, report.n_candidates
            );
            for result in &report.results {
                print_lambda_table(result, report.n_trials);
            }
            println!("\nSearch complete in {:.2}s", report.elapsed.as_secs_f64());
            Ok(())
        }
    }
}

/// Print one strategy evaluation
pub fn print_evaluation(
    strategy: &Strategy1Stop,
    evaluation: &Evaluation,
    lambda: f64,
    seed: u64,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&EvaluationView {
            strategy: strategy.label(),
            mean: evaluation.mean,
            std: evaluation.std,
            std_error: evaluation.std_error(),
            lambda,
            score: evaluation.score(lambda),
            n_trials: evaluation.n_trials,
            seed,
            eval_seconds: evaluation.elapsed.as_secs_f64(),
        }),
        OutputFormat::Table => {
            println!("{}", strategy.label());
            println!("  mean      = {:.4}s", evaluation.mean);
            println!("  sd        = {:.4}s", evaluation.std);
            println!("  std error = {:.4}s", evaluation.std_error());
            println!("  score     = {:.4} (lambda={})", evaluation.score(lambda), lambda);
            println!(
                "  N={} seed={} (eval {:.3}s)",
                evaluation.n_trials,
                seed,
                evaluation.elapsed.as_secs_f64()
            );
            Ok(())
        }
    }
}

/// Print a side-by-side comparison
pub fn print_comparison(rows: &[ComparisonRow], params: &RaceParams, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let views: Vec<ComparisonView> = rows
                .iter()
                .map(|row| ComparisonView {
                    strategy: row.strategy.label(),
                    mean: row.evaluation.mean,
                    std: row.evaluation.std,
                    std_error: row.evaluation.std_error(),
                    eval_seconds: row.evaluation.elapsed.as_secs_f64(),
                })
                .collect();
            print_json(&views)
        }
        OutputFormat::Table => {
            println!("Track: {} | Laps: {}", params.track, params.laps);
            for row in rows {
                println!(
                    "{:35} mean={:9.2}s  std={:5.2}s",
                    row.strategy.label(),
                    row.evaluation.mean,
                    row.evaluation.std
                );
            }
            Ok(())
        }
    }
}
