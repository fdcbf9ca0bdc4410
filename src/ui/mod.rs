//! UI module for consistent CLI output
//!
//! Uses `cliclack` for interactive prompts and spinners and `indicatif` for
//! the per-package progress bar, with plain output in CI/non-interactive
//! environments.

mod context;
mod output;
mod progress;
mod prompts;

pub use context::UiContext;
pub use output::{format_gb, status, step_info, step_ok_detail, step_warn_hint};
pub use progress::{EstimateProgress, TaskSpinner};
pub use prompts::{confirm, parse_count, prompt_count, COUNT_PROMPT};
