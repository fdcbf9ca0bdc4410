//! Cache command - inspect or clear the size cache

use crate::cache::SizeCache;
use crate::cli::args::{CacheAction, CacheArgs, OutputFormat};
use crate::config::Config;
use crate::error::PkgSizeResult;
use crate::ui::{self, UiContext};
use std::path::Path;

/// Execute the cache command
pub async fn execute(args: CacheArgs, config: &Config) -> PkgSizeResult<()> {
    let path = config.cache.path.as_path();

    match args.action {
        CacheAction::Show { format } => show_cache(path, format).await,
        CacheAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        CacheAction::Clear { yes } => clear_cache(path, yes).await,
    }
}

async fn show_cache(path: &Path, format: OutputFormat) -> PkgSizeResult<()> {
    let cache = SizeCache::load(path).await?;

    match format {
        OutputFormat::Table => print_cache_table(&cache),
        OutputFormat::Json => print_cache_json(&cache)?,
        OutputFormat::Plain => print_cache_plain(&cache),
    }

    Ok(())
}

fn print_cache_table(cache: &SizeCache) {
    if cache.is_empty() {
        println!("No cached package sizes.");
        return;
    }

    println!("{:<50} {:>16}", "PACKAGE", "BYTES");
    println!("{}", "-".repeat(67));

    for (package, size) in cache.iter() {
        println!("{:<50} {:>16}", package, size);
    }

    println!();
    println!(
        "Total: {} package(s), {}",
        cache.len(),
        ui::format_gb(cache.total_bytes())
    );
}

fn print_cache_json(cache: &SizeCache) -> PkgSizeResult<()> {
    let map: serde_json::Map<String, serde_json::Value> = cache
        .iter()
        .map(|(package, size)| (package.to_string(), size.into()))
        .collect();
    println!("{}", serde_json::to_string_pretty(&map)?);
    Ok(())
}

fn print_cache_plain(cache: &SizeCache) {
    for (package, size) in cache.iter() {
        println!("{} {}", package, size);
    }
}

async fn clear_cache(path: &Path, yes: bool) -> PkgSizeResult<()> {
    let ctx = UiContext::detect().with_auto_yes(yes);

    if !path.exists() {
        ui::step_info(&ctx, &format!("No cache at {}", path.display()));
        return Ok(());
    }

    let prompt = format!("Delete cached sizes at {}?", path.display());
    if !ui::confirm(&ctx, &prompt, false).await? {
        ui::step_warn_hint(&ctx, "Cache not cleared", "Use --yes to skip confirmation");
        return Ok(());
    }

    if SizeCache::clear(path).await? {
        ui::step_ok_detail(&ctx, "Cache cleared", &path.display().to_string());
    }
    Ok(())
}
