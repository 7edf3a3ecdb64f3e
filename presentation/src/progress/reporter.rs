//! Progress reporting for video analysis

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use summarizer_application::{AnalysisProgress, AnalysisStage};
use summarizer_domain::RemoteFileState;
use tracing::{debug, info};

/// Reports progress with one spinner per stage
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn set_message(&self, message: String) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            pb.set_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProgress for ProgressReporter {
    fn on_stage_start(&self, stage: AnalysisStage) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::stage_style());
        pb.set_prefix(stage.label());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock()
            && let Some(previous) = guard.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_stage_complete(&self, _stage: AnalysisStage, success: bool) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            let mark = if success { "v".green() } else { "x".red() };
            pb.finish_with_message(mark.to_string());
        }
    }

    fn on_state_checked(&self, check: u32, state: &RemoteFileState) {
        self.set_message(format!("{} (check {})", state, check));
    }

    fn on_poll_wait(&self, check: u32, delay: Duration) {
        self.set_message(format!(
            "still processing after {} checks, next in {:.1}s",
            check,
            delay.as_secs_f64()
        ));
    }

    fn on_tool_call(&self, tool_name: &str, turn: usize) {
        self.set_message(format!("{} (turn {})", tool_name, turn));
    }
}

/// Simple line-based progress on stderr (no spinner)
pub struct SimpleProgress;

impl AnalysisProgress for SimpleProgress {
    fn on_stage_start(&self, stage: AnalysisStage) {
        eprintln!("{} {}", "->".cyan(), stage.label().bold());
    }

    fn on_stage_complete(&self, stage: AnalysisStage, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), stage);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), stage);
        }
    }

    fn on_tool_call(&self, tool_name: &str, turn: usize) {
        eprintln!("  {} {} (turn {})", "*".yellow(), tool_name, turn);
    }
}

/// Progress as tracing events, for the web server
pub struct LogProgress;

impl AnalysisProgress for LogProgress {
    fn on_stage_start(&self, stage: AnalysisStage) {
        info!(stage = stage.as_str(), "{}", stage.label());
    }

    fn on_stage_complete(&self, stage: AnalysisStage, success: bool) {
        debug!(stage = stage.as_str(), success, "Stage finished");
    }

    fn on_state_checked(&self, check: u32, state: &RemoteFileState) {
        debug!(check, state = %state, "Checked processing state");
    }

    fn on_tool_call(&self, tool_name: &str, turn: usize) {
        info!(tool = tool_name, turn, "Agent called tool");
    }
}
