//! Interactive prompts with CI/non-interactive fallback

use super::context::UiContext;
use crate::error::{PkgSizeError, PkgSizeResult};
use std::io::{self, BufRead, Write};

/// Prompt shown when no package count was given on the command line
pub const COUNT_PROMPT: &str = "Enter the number of top packages to process (e.g., 100, 1000)";

/// Ask the operator how many top packages to process
///
/// Reads one line; anything that is not an integer is an error.
pub async fn prompt_count(ctx: &UiContext) -> PkgSizeResult<i64> {
    let input = if ctx.is_interactive() {
        tokio::task::spawn_blocking(|| cliclack::input(COUNT_PROMPT).interact::<String>())
            .await
            .map_err(|e| PkgSizeError::User(format!("Prompt task failed: {}", e)))?
            .map_err(|e| PkgSizeError::User(format!("Prompt failed: {}", e)))?
    } else {
        let to_stderr = ctx.status_to_stderr();
        tokio::task::spawn_blocking(move || {
            let mut stdin = io::stdin().lock();
            if to_stderr {
                read_line(COUNT_PROMPT, &mut stdin, &mut io::stderr())
            } else {
                read_line(COUNT_PROMPT, &mut stdin, &mut io::stdout())
            }
        })
        .await
        .map_err(|e| PkgSizeError::User(format!("Prompt task failed: {}", e)))??
    };

    parse_count(&input)
}

/// Parse an operator-supplied package count
pub fn parse_count(input: &str) -> PkgSizeResult<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| PkgSizeError::InvalidCount(trimmed.to_string()))
}

fn read_line(
    prompt: &str,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> PkgSizeResult<String> {
    write!(writer, "{}: ", prompt)
        .and_then(|_| writer.flush())
        .map_err(|e| PkgSizeError::io("writing prompt", e))?;

    let mut input = String::new();
    reader
        .read_line(&mut input)
        .map_err(|e| PkgSizeError::io("reading package count", e))?;
    Ok(input)
}

/// Prompt for confirmation, returns default if non-interactive or auto-yes
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> PkgSizeResult<bool> {
    if ctx.auto_yes() {
        println!("  {} (auto-approved)", message);
        return Ok(true);
    }

    if !ctx.is_interactive() {
        return Ok(default);
    }

    let message = message.to_string();
    tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message)
            .initial_value(default)
            .interact()
    })
    .await
    .map_err(|e| PkgSizeError::User(format!("Prompt task failed: {}", e)))?
    .map_err(|e| PkgSizeError::User(format!("Prompt failed: {}", e)))
}
