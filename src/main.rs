// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use estate_gateway::router::MatchReason;
use estate_gateway::utils::logging::{format_error, format_info, format_success, format_warning};
use estate_gateway::{
    Config, Credentials, QueryClassifier, RequestOptions, SearchDispatcher, SmartFetch, Validator,
};
use reqwest::Method;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "estate_gateway")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Search routing and local-first API access for the estate platform", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify search input as an address or a natural-language query
    Classify {
        query: String,

        /// Show which rule decided the label
        #[arg(long)]
        explain: bool,

        #[arg(long)]
        json: bool,
    },

    /// Classify a query and send it to the matching search endpoint
    Search {
        query: String,

        /// Print the prepared request without sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Send a raw request through the local-first fetch layer
    Fetch {
        /// Path appended to the origin, e.g. /api/properties
        path: String,

        #[arg(short = 'X', long, default_value = "GET")]
        method: String,

        /// JSON request body
        #[arg(short, long)]
        data: Option<String>,

        /// Extra header as 'Name: value', repeatable
        #[arg(short = 'H', long = "header", value_name = "HEADER")]
        headers: Vec<String>,

        #[arg(long)]
        omit_credentials: bool,
    },

    /// Probe the local and production origins
    Health,

    /// Print the effective configuration
    ShowConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    estate_gateway::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Classify {
            query,
            explain,
            json,
        } => {
            cmd_classify(&config, &query, explain, json)?;
        }
        Commands::Search { query, dry_run } => {
            cmd_search(&config, &query, dry_run).await?;
        }
        Commands::Fetch {
            path,
            method,
            data,
            headers,
            omit_credentials,
        } => {
            cmd_fetch(&config, &path, &method, data, &headers, omit_credentials).await?;
        }
        Commands::Health => {
            cmd_health(&config).await?;
        }
        Commands::ShowConfig => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn cmd_classify(config: &Config, query: &str, explain: bool, json: bool) -> Result<()> {
    let classifier = QueryClassifier::with_keywords(&config.search.extra_keywords);
    let (classification, reason) = classifier.explain(query);

    let reason_text = match &reason {
        MatchReason::Keyword(keyword) => format!("signal word '{}'", keyword),
        MatchReason::AddressPattern => "street address pattern".to_string(),
        MatchReason::Default => "no signal, defaulted".to_string(),
    };

    if json {
        let mut value = serde_json::json!({ "query": query, "classification": classification });
        if explain {
            value["reason"] = serde_json::Value::String(reason_text);
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if explain {
        println!("{} ({})", classification, reason_text);
    } else {
        println!("{}", classification);
    }

    Ok(())
}

async fn cmd_search(config: &Config, query: &str, dry_run: bool) -> Result<()> {
    let fetch = SmartFetch::from_config(&config.network)?;
    let dispatcher = SearchDispatcher::new(&fetch, config.search.clone());

    if dry_run {
        let request = dispatcher.prepare(query)?;
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let response = dispatcher.search(query).await.context("Search request failed")?;
    print_response(response).await
}

async fn cmd_fetch(
    config: &Config,
    path: &str,
    method: &str,
    data: Option<String>,
    headers: &[String],
    omit_credentials: bool,
) -> Result<()> {
    let options = fetch_options(path, method, data, headers, omit_credentials)?;
    let fetch = SmartFetch::from_config(&config.network)?;

    let response = fetch.fetch(path, options).await.context("Request failed")?;
    print_response(response).await
}

/// Checks the command line input before anything goes on the wire.
fn fetch_options(
    path: &str,
    method: &str,
    data: Option<String>,
    headers: &[String],
    omit_credentials: bool,
) -> Result<RequestOptions> {
    Validator::validate_request_path(path)?;

    let method = Method::from_str(&method.to_uppercase())
        .with_context(|| format!("Invalid HTTP method: {}", method))?;
    let mut options = RequestOptions::new().method(method);

    for raw in headers {
        let (name, value) = Validator::parse_header(raw)?;
        options = options.header(name, value);
    }

    if let Some(data) = data {
        serde_json::from_str::<serde_json::Value>(&data).context("--data must be valid JSON")?;
        options = options.body(data);
    }

    if omit_credentials {
        options = options.credentials(Credentials::Omit);
    }

    Ok(options)
}

async fn cmd_health(config: &Config) -> Result<()> {
    let fetch = SmartFetch::from_config(&config.network)?;
    let report = fetch.probe(&config.search.health_path).await;

    println!("{}", report.format());

    if !report.any_reachable() {
        eprintln!("{}", format_error("No API origin is reachable"));
        bail!("all origins unreachable");
    }

    Ok(())
}

async fn print_response(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    let url = response.url().to_string();
    let body = response.text().await.context("Failed to read response body")?;

    let line = format!("HTTP {} from {}", status, url);
    if status.is_success() {
        eprintln!("{}", format_success(&line));
    } else if status.is_client_error() {
        eprintln!("{}", format_warning(&line));
    } else if status.is_server_error() {
        eprintln!("{}", format_error(&line));
    } else {
        eprintln!("{}", format_info(&line));
    }

    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", body),
    }

    Ok(())
}
