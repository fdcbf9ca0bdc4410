//! Estimate command - size the top N packages of the index

use crate::cli::args::EstimateArgs;
use crate::config::Config;
use crate::error::PkgSizeResult;
use crate::estimate::{estimate, Estimate};
use crate::registry::{PypiRegistry, Registry};
use crate::ui::{self, EstimateProgress, TaskSpinner, UiContext};
use serde::Serialize;
use tracing::debug;

/// Execute the estimate command
pub async fn execute(args: EstimateArgs, config: &Config) -> PkgSizeResult<()> {
    let ctx = UiContext::detect().with_machine_output(args.json);
    let config = apply_overrides(config, &args);
    debug!(
        "Ranking: {}, metadata: {}, cache: {}",
        config.sources.ranking_url,
        config.sources.metadata_url,
        config.cache.path.display()
    );

    let registry = PypiRegistry::from_config(&config);
    let result = run(&ctx, &registry, &config, args.count).await?;

    if args.json {
        print_json(&result)?;
    } else {
        println!("{}", result.summary());
    }
    Ok(())
}

/// Fetch the ranking, settle the count, and run the estimator
async fn run(
    ctx: &UiContext,
    registry: &dyn Registry,
    config: &Config,
    count: Option<i64>,
) -> PkgSizeResult<Estimate> {
    let mut spinner = TaskSpinner::new(ctx);
    spinner.start(&format!(
        "Fetching top {} packages...",
        registry.registry_name()
    ));
    let ranking = match registry.fetch_ranking().await {
        Ok(ranking) => {
            spinner.stop(&format!("Fetched ranking of {} packages", ranking.len()));
            ranking
        }
        Err(e) => {
            spinner.stop_error("Failed to fetch ranking");
            return Err(e);
        }
    };

    let top_n = match count {
        Some(n) => n,
        None => ui::prompt_count(ctx).await?,
    };

    let progress = EstimateProgress::new(ctx, top_n, ranking.top(top_n).len());
    estimate(registry, &ranking, top_n, &config.cache.path, &progress).await
}

fn apply_overrides(config: &Config, args: &EstimateArgs) -> Config {
    let mut config = config.clone();
    if let Some(ref url) = args.ranking_url {
        config.sources.ranking_url = url.clone();
    }
    if let Some(ref url) = args.metadata_url {
        config.sources.metadata_url = url.clone();
    }
    config
}

fn print_json(result: &Estimate) -> PkgSizeResult<()> {
    #[derive(Serialize)]
    struct EstimateJson<'a> {
        #[serde(flatten)]
        estimate: &'a Estimate,
        gigabytes: f64,
    }

    let json = serde_json::to_string_pretty(&EstimateJson {
        estimate: result,
        gigabytes: result.gigabytes(),
    })?;
    println!("{}", json);
    Ok(())
}
