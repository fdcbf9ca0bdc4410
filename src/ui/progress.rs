//! Progress indicators with CI fallback

use super::context::UiContext;
use super::output::status;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Plain progress lines per run when no bar can be drawn
const PLAIN_REPORTS: usize = 10;

/// A task spinner with CI fallback
pub struct TaskSpinner {
    spinner: Option<cliclack::ProgressBar>,
    ctx: UiContext,
}

impl TaskSpinner {
    /// Create a new spinner
    pub fn new(ctx: &UiContext) -> Self {
        Self {
            spinner: None,
            ctx: ctx.clone(),
        }
    }

    /// Start the spinner with a message
    pub fn start(&mut self, message: &str) {
        if self.ctx.use_fancy_output() {
            let spinner = cliclack::spinner();
            spinner.start(message);
            self.spinner = Some(spinner);
        } else {
            status(&self.ctx, message);
        }
    }

    /// Stop with success message
    pub fn stop(&mut self, message: &str) {
        match self.spinner.take() {
            Some(spinner) => spinner.stop(message),
            None => status(&self.ctx, &format!("{} {}", style("✓").green(), message)),
        }
    }

    /// Stop with error message
    pub fn stop_error(&mut self, message: &str) {
        match self.spinner.take() {
            Some(spinner) => spinner.error(message),
            None => status(&self.ctx, &format!("{} {}", style("✗").red(), message)),
        }
    }
}

/// Per-package progress for an estimation run.
///
/// Shows an indicatif bar when stderr is a terminal. Otherwise a plain
/// `done/len` line is printed about every tenth of the run.
pub struct EstimateProgress {
    bar: Option<ProgressBar>,
    ctx: UiContext,
    top_n: i64,
    len: usize,
    done: AtomicUsize,
}

impl EstimateProgress {
    /// Create a progress indicator for `len` packages out of a requested `top_n`
    pub fn new(ctx: &UiContext, top_n: i64, len: usize) -> Self {
        let bar = if ctx.use_fancy_output() {
            let bar = ProgressBar::new(len as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  {spinner:.cyan} Processing top {prefix} packages  {bar:30.cyan/dim} {pos}/{len} {msg:.dim}  {elapsed:.dim}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                    .progress_chars("━╸─"),
            );
            bar.set_prefix(top_n.to_string());
            bar.enable_steady_tick(Duration::from_millis(120));
            Some(bar)
        } else {
            None
        };
        Self {
            bar,
            ctx: ctx.clone(),
            top_n,
            len,
            done: AtomicUsize::new(0),
        }
    }

    /// A package is about to be processed
    pub fn start_package(&self, package: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(package.to_string());
        }
    }

    /// A package has been processed
    pub fn finish_package(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;

        match self.bar {
            Some(ref bar) => bar.inc(1),
            None if is_plain_checkpoint(done, self.len) => status(
                &self.ctx,
                &format!(
                    "Processing top {} packages: {}/{}",
                    self.top_n, done, self.len
                ),
            ),
            None => {}
        }
    }

    /// Packages processed so far
    pub fn processed(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }

    /// Report a failed lookup without disturbing the bar
    pub fn lookup_failed(&self, package: &str, reason: &str) {
        let line = format!(
            "{} Failed to fetch size for {}: {}",
            style("!").yellow(),
            package,
            reason
        );
        match self.bar {
            Some(ref bar) => bar.println(line),
            None => status(&self.ctx, &line),
        }
    }

    /// Finish and clear the progress bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.disable_steady_tick();
            bar.finish_and_clear();
        }
    }
}

/// Whether the `done`-th package of `len` gets a plain progress line
fn is_plain_checkpoint(done: usize, len: usize) -> bool {
    let every = (len / PLAIN_REPORTS).max(1);
    done == len || done % every == 0
}
