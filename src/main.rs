//! lblens CLI entrypoint.
//!
//! This is the main entrypoint for the lblens command-line tool.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use lblens::api::{Credential, HttpClbClient, HttpClientFactory};
use lblens::cli::{Cli, Commands, OutputFormatter, parse_tag};
use lblens::config::{ClientOverrides, ConfigValue, ProviderSettings, QueryParams};
use lblens::datasource::{ClbInstancesDataSource, schema, type_name};
use lblens::error::{ConfigError, Result};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Default settings file looked up in the working directory.
const DEFAULT_SETTINGS_FILE: &str = "lblens.yaml";

/// Main entrypoint.
fn main() -> ExitCode {
    // Load .env file if present (secrets are commonly kept there)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Main async entry point.
async fn run(cli: Cli) -> Result<()> {
    let formatter = OutputFormatter::new(cli.output);

    match cli.command {
        Commands::Query {
            id,
            name,
            tags,
            region,
            zone,
        } => cmd_query(cli.settings.as_deref(), id, name, tags, region, zone, &formatter).await,
        Commands::Schema { provider } => {
            println!("{}", formatter.format_schema(&type_name(&provider), &schema()));
            Ok(())
        }
    }
}

/// Runs one inventory query.
async fn cmd_query(
    settings_path: Option<&Path>,
    id: Option<String>,
    name: Option<String>,
    tag_specs: Vec<String>,
    region: Option<String>,
    zone: Option<String>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let settings = load_settings(settings_path)?;

    let default_region = settings
        .region
        .clone()
        .or_else(|| region.clone())
        .ok_or(ConfigError::MissingRegion)?;

    let credential = Credential::new(
        settings.secret_id.clone().unwrap_or_default(),
        settings.secret_key.clone().unwrap_or_default(),
    );
    let client = Arc::new(HttpClbClient::new(credential, &default_region)?);

    let source = ClbInstancesDataSource::new(
        client,
        Arc::new(HttpClientFactory::new()),
        ProviderSettings {
            region: Some(default_region),
            ..settings
        },
    );

    let mut query = QueryParams::new();
    if let Some(id) = id {
        query = query.with_id(id);
    }
    if let Some(name) = name {
        query = query.with_name(name);
    }
    if !tag_specs.is_empty() {
        let mut tags = HashMap::new();
        for spec in &tag_specs {
            let (key, value) = parse_tag(spec)?;
            tags.insert(key, value);
        }
        query = query.with_tags(tags);
    }

    let overrides = ClientOverrides {
        region: region.into(),
        zone: zone.into(),
        secret_id: ConfigValue::Null,
        secret_key: ConfigValue::Null,
    };

    info!("Running load balancer inventory query");
    let state = source.read(&query, &overrides).await?;
    debug!("Query matched {} load balancer(s)", state.load_balancers.len());

    println!("{}", formatter.format_state(&state));
    Ok(())
}

/// Loads provider settings from the given path, the default file, or the
/// environment alone.
fn load_settings(path: Option<&Path>) -> Result<ProviderSettings> {
    let settings = match path {
        Some(path) => ProviderSettings::load_file(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if default_path.exists() {
                ProviderSettings::load_file(&default_path)?
            } else {
                debug!("No settings file found, using environment only");
                ProviderSettings::default()
            }
        }
    };

    Ok(settings.with_env())
}
