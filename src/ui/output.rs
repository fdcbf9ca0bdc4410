//! Output functions for consistent CLI formatting

use super::context::UiContext;
use console::style;

/// Print a plain status line, keeping stdout clear for machine output
pub fn status(ctx: &UiContext, line: &str) {
    if ctx.status_to_stderr() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

/// Display a success step with detail
pub fn step_ok_detail(ctx: &UiContext, message: &str, detail: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::success(format!("{} ({})", message, style(detail).dim())).ok();
    } else {
        status(
            ctx,
            &format!("  {} {} ({})", style("[OK]").green(), message, detail),
        );
    }
}

/// Display a warning step with hint
pub fn step_warn_hint(ctx: &UiContext, message: &str, hint: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::warning(format!("{} - {}", message, style(hint).dim())).ok();
    } else {
        status(
            ctx,
            &format!("  {} {} - {}", style("[WARN]").yellow(), message, hint),
        );
    }
}

/// Display an info step
pub fn step_info(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::info(message).ok();
    } else {
        status(ctx, &format!("  {} {}", style("[INFO]").cyan(), message));
    }
}

/// Render a byte count in GiB with two decimals
pub fn format_gb(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / crate::estimate::BYTES_PER_GB)
}
