//! Policy feed CLI
//!
//! Runs the Airtable pipeline once and writes the normalized resources to
//! stdout as JSON. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Uses AIRTABLE_API_KEY from the environment or .env
//! policy_feed --pretty > resources.json
//!
//! # Point at another table
//! policy_feed --base-id appXXXX --table-id tblYYYY --view-id ""
//!
//! # Only print counts per policy area
//! policy_feed --summary
//! ```

use anyhow::Context;
use clap::Parser;
use policy_feed::config::{
    StoreConfig, ENV_API_BASE, ENV_API_KEY, ENV_BASE_ID, ENV_TABLE_ID, ENV_VIEW_ID,
};
use policy_feed::{AirtableClient, PolicyArea, PolicyResource, PolicyResourcePipeline};
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "policy_feed")]
#[command(version)]
#[command(about = "Fetch and normalize housing policy resources from Airtable")]
struct Args {
    /// Airtable personal access token
    #[arg(long, env = ENV_API_KEY, hide_env_values = true)]
    api_key: Option<String>,

    /// Airtable base id
    #[arg(long, env = ENV_BASE_ID)]
    base_id: Option<String>,

    /// Airtable table id
    #[arg(long, env = ENV_TABLE_ID)]
    table_id: Option<String>,

    /// Airtable view id
    #[arg(long, env = ENV_VIEW_ID)]
    view_id: Option<String>,

    /// API root, for proxies
    #[arg(long, env = ENV_API_BASE)]
    api_base: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print resource counts per policy area instead of the resources
    #[arg(long)]
    summary: bool,
}

impl Args {
    fn store_config(&self) -> policy_feed::Result<StoreConfig> {
        StoreConfig::from_lookup(|key| match key {
            ENV_API_KEY => self.api_key.clone(),
            ENV_BASE_ID => self.base_id.clone(),
            ENV_TABLE_ID => self.table_id.clone(),
            ENV_VIEW_ID => self.view_id.clone(),
            ENV_API_BASE => self.api_base.clone(),
            _ => None,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(EnvFilter::DEFAULT_ENV))
        .init();

    let args = Args::parse();

    let config = args.store_config()?;
    tracing::debug!(?config, "Using Airtable store");

    let client = AirtableClient::new(config)?;
    let resources = PolicyResourcePipeline::new(client)
        .run()
        .await
        .context("Failed to fetch policy resources")?;

    let output = if args.summary {
        render(&summarize(&resources), args.pretty)?
    } else {
        render(&resources, args.pretty)?
    };
    println!("{}", output);

    Ok(())
}

/// Filter from the given env var (`RUST_LOG` in practice), `warn` when unset or unparsable
fn log_filter(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn summarize(resources: &[PolicyResource]) -> BTreeMap<&'static str, usize> {
    let mut counts: BTreeMap<&'static str, usize> =
        PolicyArea::ALL.iter().map(|a| (a.as_str(), 0)).collect();
    for resource in resources {
        *counts.entry(resource.policy_area.as_str()).or_default() += 1;
    }
    counts
}

fn render<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("Failed to serialize output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        let filter = log_filter("POLICY_FEED_TEST_LOG_UNSET");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_env_overrides_default() {
        std::env::set_var("POLICY_FEED_TEST_LOG_DEBUG", "debug");
        let filter = log_filter("POLICY_FEED_TEST_LOG_DEBUG");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
