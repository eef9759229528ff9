//! Request assembly: input file + flags + config -> engine call.
//!
//! Precedence for strategy and count: command-line flag, then the request
//! envelope, then config.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use std::fs;
use std::path::Path;
use taskscore_core::{parse_date, today_in, AnalyzedTask, ScoringEngine, Strategy, SuggestedTask, Task};
use taskscore_ingest::{
    parse_request_json, parse_strategy, parse_tasks_csv, validate_count, validate_tasks, AnalysisRequest,
};

use crate::config::Config;

/// Flags shared by `analyze` and `suggest`.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub strategy: Option<String>,
    pub today: Option<String>,
    pub count: Option<i64>,
}

/// A validated batch ready for scoring.
#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub engine: ScoringEngine,
    pub tasks: Vec<Task>,
    pub count: usize,
}

/// Read a request from `.csv` (tasks only) or JSON (bare array or envelope).
pub fn load_request(path: &Path) -> Result<AnalysisRequest> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    if is_csv {
        let tasks = parse_tasks_csv(path).with_context(|| format!("parsing {}", path.display()))?;
        return Ok(AnalysisRequest {
            tasks,
            ..AnalysisRequest::default()
        });
    }

    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_request_json(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn resolve_strategy(opts: &RunOptions, req: &AnalysisRequest, cfg: &Config) -> Result<Strategy> {
    let name = opts
        .strategy
        .as_deref()
        .or(req.strategy.as_deref())
        .unwrap_or(&cfg.scoring.default_strategy);
    Ok(parse_strategy(name)?)
}

pub fn resolve_count(opts: &RunOptions, req: &AnalysisRequest, cfg: &Config) -> Result<usize> {
    let n = opts.count.or(req.count).unwrap_or(cfg.scoring.suggestion_count);
    Ok(validate_count(n)?)
}

pub fn resolve_today(opts: &RunOptions, cfg: &Config) -> Result<NaiveDate> {
    match opts.today.as_deref() {
        Some(s) => parse_date(s).context("--today"),
        None => today_in(&cfg.profile.timezone, Utc::now())
            .with_context(|| format!("profile.timezone = {:?}", cfg.profile.timezone)),
    }
}

pub fn prepare(req: AnalysisRequest, opts: &RunOptions, cfg: &Config) -> Result<PreparedRun> {
    let strategy = resolve_strategy(opts, &req, cfg)?;
    let count = resolve_count(opts, &req, cfg)?;
    let today = resolve_today(opts, cfg)?;
    let tasks = validate_tasks(req.tasks)?;

    tracing::info!(tasks = tasks.len(), %strategy, %today, "prepared scoring run");

    Ok(PreparedRun {
        engine: ScoringEngine::new(strategy, today),
        tasks,
        count,
    })
}

fn warn_circular<'a>(analyzed: impl Iterator<Item = &'a AnalyzedTask>) {
    for a in analyzed.filter(|a| a.has_circular_dependency) {
        tracing::warn!(
            task_id = a.task.id,
            title = %a.task.title,
            "task participates in a circular dependency"
        );
    }
}

pub fn run_analyze(run: &PreparedRun) -> Vec<AnalyzedTask> {
    let analyzed = run.engine.analyze_tasks(&run.tasks);
    warn_circular(analyzed.iter());
    analyzed
}

pub fn run_suggest(run: &PreparedRun) -> Vec<SuggestedTask> {
    let suggestions = run.engine.get_top_suggestions(&run.tasks, run.count);
    warn_circular(suggestions.iter().map(|s| &s.analyzed));
    suggestions
}
