//! HealthHub CLI
//!
//! Command-line interface for HealthHub operations:
//! - Render the page to a file
//! - Print the derived dashboard
//! - Check a running server
//! - Generate a config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use healthhub::config::{generate_default_config, Config};
use healthhub::logging::init_logging;
use healthhub::monitoring::{DashboardView, Trend};
use healthhub::site::render_page;
use healthhub::store::{SnapshotLoader, StoreClient};

#[derive(Parser)]
#[command(name = "healthhub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AI Healthcare Hub site and health dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the full page once
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the derived dashboard
    Dashboard {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show the status of a running server
    Status {
        /// Server URL
        #[arg(long, default_value = "http://localhost:8080")]
        api_url: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load_with_env(path)?;
            init_logging(&config.logging);
            config
        }
        None => {
            let loaded = Config::load_default();
            init_logging(&loaded.config.logging);
            loaded.log();
            loaded.config
        }
    };

    match cli.command {
        Commands::Render { output } => {
            let snapshot = build_loader(&config)?.load().await;
            let html = render_page(&DashboardView::derive(&snapshot));

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &html)?;
                    println!("Page written to {:?} ({} data)", path, snapshot.origin);
                }
                None => {
                    print!("{}", html);
                }
            }
        }

        Commands::Dashboard { format } => {
            let snapshot = build_loader(&config)?.load().await;
            let view = DashboardView::derive(&snapshot);

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&view)?),
                "table" => print_dashboard(&view),
                other => anyhow::bail!("Unknown format: {}. Use: table, json", other),
            }
        }

        Commands::Status { api_url } => {
            let response = reqwest::Client::new()
                .get(format!("{}/health", api_url.trim_end_matches('/')))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!(
                        "HealthHub v{}",
                        health["version"].as_str().unwrap_or("unknown")
                    );
                    println!();
                    println!("Status: {}", health["status"].as_str().unwrap_or("unknown"));
                    println!("Store:  {}", health["store"].as_str().unwrap_or("unknown"));

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    anyhow::bail!("Server returned error: {}", resp.status());
                }
                Err(e) => {
                    eprintln!("Cannot connect to HealthHub at {}", api_url);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin healthhub");
                    return Err(e.into());
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn build_loader(config: &Config) -> anyhow::Result<SnapshotLoader> {
    let loader = match config.store.client_config() {
        Some(client_config) => SnapshotLoader::new(Arc::new(StoreClient::new(client_config)?)),
        None => SnapshotLoader::offline(),
    };

    Ok(loader.limits(config.store.metrics_limit, config.store.alerts_limit))
}

fn print_dashboard(view: &DashboardView) {
    println!("Data: {} ({} records)", view.origin, view.record_count);

    let Some(latest) = &view.latest else {
        println!("No data");
        return;
    };

    println!("Latest: {}", latest.metric_date);
    println!();

    println!("{:<16} {:>12} {:>10}", "Metric", "Value", "Trend");
    println!("{}", "-".repeat(40));
    print_row(
        "Heart Rate",
        format!("{} BPM", latest.heart_rate),
        Some(&view.trends.heart_rate),
    );
    print_row(
        "Blood Pressure",
        format!(
            "{}/{}",
            latest.blood_pressure_systolic, latest.blood_pressure_diastolic
        ),
        None,
    );
    print_row("Blood Glucose", format!("{} mg/dL", latest.blood_glucose), None);
    print_row(
        "Weight",
        format!("{:.1} kg", latest.weight),
        Some(&view.trends.weight),
    );
    print_row(
        "Steps",
        format!("{}", latest.steps),
        Some(&view.trends.steps),
    );
    print_row("Sleep", format!("{:.1} h", latest.sleep_hours), None);
    print_row("Water", format!("{:.1} L", latest.water_intake), None);

    println!();
    println!(
        "Goals: steps {:.0}%  sleep {:.0}%  water {:.0}%",
        view.progress.steps_percent, view.progress.sleep_percent, view.progress.water_percent
    );

    if !view.alerts.is_empty() {
        println!();
        println!("Unread alerts:");
        for alert in &view.alerts {
            match alert.metric_value() {
                Some(value) => println!("  [{}] {} ({})", alert.alert_type, alert.message, value),
                None => println!("  [{}] {}", alert.alert_type, alert.message),
            }
        }
    }
}

fn print_row(label: &str, value: String, trend: Option<&Trend>) {
    let trend = trend
        .map(|t| {
            let sign = if t.percent >= 0.0 { "+" } else { "-" };
            format!("{}{}", sign, t.magnitude_label())
        })
        .unwrap_or_else(|| "-".to_string());

    println!("{:<16} {:>12} {:>10}", label, value, trend);
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
