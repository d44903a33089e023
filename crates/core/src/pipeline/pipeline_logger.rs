use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Timed steps of a pip-counting run, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Load,
    Localize,
    Count,
    Render,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Localize => "localize",
            Stage::Count => "count",
            Stage::Render => "render",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Die candidates accepted by the locator.
    Dice,
    /// Pips summed over all dice.
    Pips,
}

/// Observer for pipeline events. The use case reports to it and never
/// writes to the console itself.
pub trait PipelineLogger: Send {
    /// Called after each die has been counted; `current` is 1-based.
    fn progress(&mut self, current: usize, total: usize);

    fn timing(&mut self, stage: Stage, elapsed: Duration);

    fn metric(&mut self, metric: Metric, value: usize);

    fn info(&mut self, message: &str);

    /// End-of-run report. Default: no-op.
    fn summary(&self) {}
}

/// Discards every event.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: Stage, _elapsed: Duration) {}
    fn metric(&mut self, _metric: Metric, _value: usize) {}
    fn info(&mut self, _message: &str) {}
}

/// Forwards events to the `log` facade and keeps per-stage time plus the
/// dice/pip tallies for a closing summary.
pub struct LogPipelineLogger {
    started: Instant,
    stage_times: BTreeMap<Stage, Duration>,
    dice: Option<usize>,
    pips: Option<usize>,
}

impl LogPipelineLogger {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            stage_times: BTreeMap::new(),
            dice: None,
            pips: None,
        }
    }

    /// Accumulated time spent in `stage`, if it ran.
    pub fn time_in(&self, stage: Stage) -> Option<Duration> {
        self.stage_times.get(&stage).copied()
    }

    pub fn dice(&self) -> Option<usize> {
        self.dice
    }

    pub fn pips(&self) -> Option<usize> {
        self.pips
    }

    /// Multi-line report, or `None` before any stage has run.
    pub fn summary_string(&self) -> Option<String> {
        if self.stage_times.is_empty() {
            return None;
        }

        let total_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let mut report = format!(
            "Pipeline summary ({} dice, {} pips, {total_ms:.1}ms total):",
            self.dice.unwrap_or(0),
            self.pips.unwrap_or(0),
        );
        for (stage, elapsed) in &self.stage_times {
            let ms = elapsed.as_secs_f64() * 1000.0;
            report.push_str(&format!("\n  {stage:<10}{ms:>8.1}ms"));
        }
        Some(report)
    }
}

impl Default for LogPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        log::debug!("Counted die {current}/{total}");
    }

    fn timing(&mut self, stage: Stage, elapsed: Duration) {
        *self.stage_times.entry(stage).or_default() += elapsed;
    }

    fn metric(&mut self, metric: Metric, value: usize) {
        match metric {
            Metric::Dice => self.dice = Some(value),
            Metric::Pips => self.pips = Some(value),
        }
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(report) = self.summary_string() {
            log::info!("\n{report}");
        }
    }
}
