//! Progress reporting for debate execution

use colored::Colorize;
use council_application::ports::progress::ProgressNotifier;
use council_domain::{ConsensusVerdict, RoundKind};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports debate progress with per-round progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    round_bar: Mutex<Option<ProgressBar>>,
    synthesis_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            round_bar: Mutex::new(None),
            synthesis_bar: Mutex::new(None),
        }
    }

    fn round_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap()
    }

    fn round_label(kind: RoundKind) -> &'static str {
        match kind {
            RoundKind::Initial => "Initial Answers",
            RoundKind::Refine => "Refinement",
            RoundKind::ConsensusCheck => "Consensus Check",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_round_start(&self, round: usize, kind: RoundKind, total_models: usize) {
        let pb = self.multi.add(ProgressBar::new(total_models as u64));
        pb.set_style(Self::round_style());
        pb.set_prefix(format!("Round {}: {}", round, Self::round_label(kind)));
        pb.set_message("querying models...");

        *self.round_bar.lock().unwrap() = Some(pb);
    }

    fn on_model_complete(&self, _round: usize, model: &str, success: bool) {
        if let Some(pb) = self.round_bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), model)
            } else {
                format!("{} {}", "x".red(), model)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_round_complete(&self, _round: usize, verdict: Option<&ConsensusVerdict>) {
        if let Some(pb) = self.round_bar.lock().unwrap().take() {
            let message = match verdict {
                Some(v) if v.reached => format!(
                    "{}",
                    format!("consensus at {:.0}% agreement", v.agreement_ratio * 100.0).green()
                ),
                Some(v) => format!(
                    "agreement {:.0}%, continuing",
                    v.agreement_ratio * 100.0
                ),
                None => format!("{}", "complete".green()),
            };
            pb.finish_with_message(message);
        }
    }

    fn on_synthesis_start(&self, model: &str) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Synthesis");
        pb.set_message(format!("via {}...", model));
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.synthesis_bar.lock().unwrap() = Some(pb);
    }

    fn on_synthesis_complete(&self, fallback_used: bool) {
        if let Some(pb) = self.synthesis_bar.lock().unwrap().take() {
            let message = if fallback_used {
                format!("{}", "fallback answer (synthesis unavailable)".yellow())
            } else {
                format!("{}", "done".green())
            };
            pb.finish_with_message(message);
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_round_start(&self, round: usize, kind: RoundKind, total_models: usize) {
        println!(
            "{} Round {}: {} ({} models)",
            "->".cyan(),
            round,
            ProgressReporter::round_label(kind).bold(),
            total_models
        );
    }

    fn on_model_complete(&self, _round: usize, model: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), model);
        } else {
            println!("  {} {} (failed)", "x".red(), model);
        }
    }

    fn on_round_complete(&self, _round: usize, verdict: Option<&ConsensusVerdict>) {
        if let Some(v) = verdict {
            if v.reached {
                println!(
                    "  {}",
                    format!("consensus at {:.0}% agreement", v.agreement_ratio * 100.0).green()
                );
            } else {
                println!("  agreement {:.0}%, continuing", v.agreement_ratio * 100.0);
            }
        }
        println!();
    }

    fn on_synthesis_start(&self, model: &str) {
        println!("{} Synthesis via {}", "->".cyan(), model.bold());
    }

    fn on_synthesis_complete(&self, fallback_used: bool) {
        if fallback_used {
            println!("  {}", "fallback answer (synthesis unavailable)".yellow());
        }
        println!();
    }
}
