//! sniplink: tracking-free link copier
//!
//! A CLI tool that strips tracking parameters from URLs, rewrites Amazon
//! product links to short permalinks, and copies the clean result to the clipboard.

mod cli;
mod config;
mod domain;
mod service;

use anyhow::{bail, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

use cli::{Cli, Commands, DomainRuleAction, HistoryAction, ListAction, ParamsAction, TagAction};
use config::{Config, ConfigService, FileSettingsStore};
use domain::params::{tracking_params, DEFAULT_TRACKING_PARAMS};
use domain::UrlCleaner;
use service::history::{format_timestamp, now_millis};
use service::{CleanRequest, CleanService, CommandClipboard, JsonHistoryLog, SettingsService};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = ConfigService::resolve(cli.config.as_deref());
    let config_existed = config_path.exists();

    // Load configuration
    let config = ConfigService::load(Some(&config_path))?;

    // Initialize logging if debug mode
    if cli.debug || config.debug {
        domain::logger::init(&config)?;
    }

    let quiet = cli.quiet;
    let settings = SettingsService::new(config_path.clone());

    // Execute command
    match cli.command {
        Commands::Clean {
            url,
            no_copy,
            no_history,
            json,
        } => {
            let input = read_url(url)?;
            let service = clean_service(&config, &config_path);
            let request = CleanRequest {
                copy: !no_copy,
                record_history: !no_history,
            };
            run_clean(&service, &input, request, json, quiet)?;
        }
        Commands::History { action } => {
            let service = clean_service(&config, &config_path);
            match action.unwrap_or(HistoryAction::List) {
                HistoryAction::List => print_history(&service)?,
                HistoryAction::Clear => {
                    service.clear_history()?;
                    if !quiet {
                        eprintln!("History cleared.");
                    }
                }
                HistoryAction::Copy { index } => {
                    let item = service.copy_from_history(index)?;
                    println!("{}", item.clean_url);
                    if !quiet {
                        eprintln!("✓ Copied to clipboard");
                    }
                }
            }
        }
        Commands::Params { action } => match action {
            ParamsAction::List => {
                for param in tracking_params(&config.clean_options()) {
                    println!("{}", param);
                }
            }
            ParamsAction::Defaults => {
                for param in DEFAULT_TRACKING_PARAMS {
                    if config.disabled_default_params.iter().any(|d| d == param) {
                        println!("{} (disabled)", param);
                    } else {
                        println!("{}", param);
                    }
                }
            }
            ParamsAction::Add { names } => {
                report("Added", &settings.add_custom_params(&names)?, quiet)
            }
            ParamsAction::Remove { names } => {
                report("Removed", &settings.remove_custom_params(&names)?, quiet)
            }
            ParamsAction::Disable { names } => {
                report("Disabled", &settings.disable_defaults(&names)?, quiet)
            }
            ParamsAction::Enable { names } => {
                report("Enabled", &settings.enable_defaults(&names)?, quiet)
            }
        },
        Commands::Whitelist { action } => match action {
            ListAction::List => {
                for domain in &config.whitelist {
                    println!("{}", domain);
                }
            }
            ListAction::Add { entries } => {
                report("Whitelisted", &settings.add_whitelist(&entries)?, quiet)
            }
            ListAction::Remove { entries } => report(
                "Removed from whitelist",
                &settings.remove_whitelist(&entries)?,
                quiet,
            ),
        },
        Commands::DomainRule { action } => match action {
            DomainRuleAction::List => {
                for (i, rule) in config.domain_params.iter().enumerate() {
                    println!(
                        "[{}] {} -> {}",
                        i,
                        rule.domains.join(", "),
                        rule.params.join(", ")
                    );
                }
            }
            DomainRuleAction::Add { domains, params } => {
                let rule = settings.add_domain_rule(&domains, &params)?;
                if !quiet {
                    eprintln!(
                        "Added rule: {} -> {}",
                        rule.domains.join(", "),
                        rule.params.join(", ")
                    );
                }
            }
            DomainRuleAction::Remove { index } => {
                let rule = settings.remove_domain_rule(index)?;
                if !quiet {
                    eprintln!("Removed rule: {}", rule.domains.join(", "));
                }
            }
        },
        Commands::AmazonTag { action } => match action {
            TagAction::Show => {
                if let Some(tag) = config.clean_options().associate_tag() {
                    println!("{}", tag);
                }
            }
            TagAction::Set { tag } => {
                settings.set_associate_tag(Some(tag))?;
                if !quiet {
                    eprintln!("Associate tag saved.");
                }
            }
            TagAction::Clear => {
                settings.set_associate_tag(None)?;
                if !quiet {
                    eprintln!("Associate tag removed.");
                }
            }
        },
        Commands::Init { path, force } => {
            let target = path.unwrap_or_else(|| config_path.clone());
            // Loading above writes a fresh default when the file was missing.
            let fresh = !config_existed && target == config_path;
            ConfigService::init(&target, force || fresh)?;
            if !quiet {
                eprintln!("Configuration file created at: {}", target.display());
            }
        }
        Commands::Check => {
            config::validate(&config)?;
            if !quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Version => {
            println!("sniplink {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Wire the clean service to the config file, clipboard helper and history file.
fn clean_service(config: &Config, config_path: &Path) -> CleanService {
    CleanService::new(
        UrlCleaner::new(Box::new(FileSettingsStore::new(config_path.to_path_buf()))),
        Box::new(CommandClipboard::from_config(&config.clipboard_command)),
        Box::new(JsonHistoryLog::new(config.history_file())),
    )
}

/// Use the argument, or the first non-empty line of stdin.
fn read_url(url: Option<String>) -> Result<String> {
    if let Some(url) = url {
        return Ok(url);
    }

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    match input.lines().map(str::trim).find(|line| !line.is_empty()) {
        Some(line) => Ok(line.to_string()),
        None => bail!("No URL given and nothing read from stdin"),
    }
}

fn run_clean(
    service: &CleanService,
    input: &str,
    request: CleanRequest,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let outcome = service.run(input, request);
    let result = &outcome.result;

    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else if result.error.is_none() {
        println!("{}", result.clean_url);
    }

    if let Some(error) = &result.error {
        bail!("Failed to clean URL: {}", error);
    }

    if outcome.recorded {
        debug!("Saved to history");
    }

    if quiet {
        return Ok(());
    }

    if result.changed() {
        eprintln!("Removed parameters:");
        for param in &result.removed_params {
            eprintln!("  - {}", param);
        }
    }

    match &outcome.copied {
        Some(Ok(())) => eprintln!("✓ {}", result.status_message()),
        Some(Err(e)) => eprintln!("✗ Failed to copy: {}", e),
        None => {}
    }

    Ok(())
}

fn print_history(service: &CleanService) -> Result<()> {
    let items = service.history()?;
    if items.is_empty() {
        println!("No history yet. Start cleaning URLs!");
        return Ok(());
    }

    let now = now_millis();
    for (i, item) in items.iter().enumerate() {
        let count = item.removed_params.len();
        println!("[{}] {}", i + 1, format_timestamp(item.timestamp, now));
        println!("    Original: {}", item.original_url);
        println!("    Clean:    {}", item.clean_url);
        println!(
            "    Removed {} parameter{}",
            count,
            if count == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

/// Print which entries a settings change touched.
fn report(verb: &str, entries: &[String], quiet: bool) {
    if quiet {
        return;
    }
    if entries.is_empty() {
        eprintln!("No changes.");
    } else {
        eprintln!("{}: {}", verb, entries.join(", "));
    }
}
