//! ossim CLI
//!
//! Runs disk scheduling and page replacement simulations from the command line.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ossim::common::{Direction, DEFAULT_FRAME_CAPACITY};
use ossim::disk::{
    compare_disk_strategies, run_disk_strategy, validate_disk_input, DiskStrategyKind,
    ValidationResult,
};
use ossim::page::{compare_page_strategies, parse_page_input, PageStrategy};
use ossim::report::{self, PageReport};

#[derive(Parser, Debug)]
#[command(name = "ossim")]
#[command(about = "Simulate disk scheduling and page replacement algorithms", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Also write the JSON report to this file
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one disk scheduling strategy
    Disk {
        /// Request cylinders, comma separated (e.g. "98,183,37,122")
        #[arg(short, long)]
        requests: String,

        /// Initial head position
        #[arg(long)]
        head: String,

        /// fcfs, sstf, scan, cscan, look or clook
        #[arg(short, long, default_value = "fcfs")]
        strategy: String,

        /// Initial sweep direction (SCAN and LOOK only)
        #[arg(short, long)]
        direction: Option<String>,
    },

    /// Run every disk scheduling strategy and rank them by seek time
    DiskCompare {
        /// Request cylinders, comma separated
        #[arg(short, long)]
        requests: String,

        /// Initial head position
        #[arg(long)]
        head: String,

        /// Initial sweep direction for SCAN and LOOK
        #[arg(short, long, default_value = "right")]
        direction: String,
    },

    /// Run one page replacement strategy
    Page {
        /// Page references, whitespace separated (e.g. "7 0 1 2 0 3")
        #[arg(short, long)]
        references: String,

        /// Number of page frames
        #[arg(short, long, default_value_t = DEFAULT_FRAME_CAPACITY.to_string())]
        capacity: String,

        /// fifo, lru or optimal
        #[arg(short, long, default_value = "fifo")]
        strategy: String,
    },

    /// Run every page replacement strategy and rank them by fault count
    PageCompare {
        /// Page references, whitespace separated
        #[arg(short, long)]
        references: String,

        /// Number of page frames
        #[arg(short, long, default_value_t = DEFAULT_FRAME_CAPACITY.to_string())]
        capacity: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ossim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Disk {
            requests,
            head,
            strategy,
            direction,
        } => {
            let kind: DiskStrategyKind = strategy.parse()?;
            let direction = direction
                .as_deref()
                .map(str::parse::<Direction>)
                .transpose()?;

            let input = match validate_disk_input(requests, head) {
                ValidationResult::Valid(input) => input,
                ValidationResult::Invalid { message } => bail!(message),
            };

            let result = run_disk_strategy(kind, &input.requests, input.head_position, direction)
                .with_context(|| format!("running {}", kind))?;
            info!(strategy = %kind, seek_time = result.seek_time, "simulation finished");

            emit(&cli, &result, || result.to_string())?;
        }
        Commands::DiskCompare {
            requests,
            head,
            direction,
        } => {
            let direction: Direction = direction.parse()?;
            let input = match validate_disk_input(requests, head) {
                ValidationResult::Valid(input) => input,
                ValidationResult::Invalid { message } => bail!(message),
            };

            let results = compare_disk_strategies(&input.requests, input.head_position, direction)
                .context("comparing disk strategies")?;

            emit(&cli, &results, || {
                let mut text = format!(
                    "{:<8} {:>16} {:>18}\n",
                    "Strategy", "Total seek time", "Average seek time"
                );
                for result in &results {
                    text.push_str(&format!(
                        "{:<8} {:>16} {:>18.2}\n",
                        result.name, result.seek_time, result.average_seek_time
                    ));
                }
                text
            })?;
        }
        Commands::Page {
            references,
            capacity,
            strategy,
        } => {
            let strategy: PageStrategy = strategy.parse()?;
            let input = parse_page_input(references, capacity)?;

            let result = strategy
                .run(&input.references, input.capacity)
                .with_context(|| format!("running {}", strategy))?;
            info!(%strategy, faults = result.faults, "simulation finished");

            emit(&cli, &PageReport::new(strategy, &result), || {
                let mut text = format!("{} with {} frames\n", strategy, input.capacity);
                for (step, (frames, outcome)) in
                    result.history.iter().zip(&result.outcomes).enumerate()
                {
                    let frames = frames
                        .iter()
                        .map(|p| p.to_string())
                        .collect::<Vec<_>>()
                        .join(" ");
                    text.push_str(&format!(
                        "  {:>3}  page {:<4} [{}]  {}\n",
                        step + 1,
                        input.references[step].as_i64(),
                        frames,
                        outcome
                    ));
                }
                text.push_str(&format!(
                    "Page faults: {}  Hits: {}  Hit ratio: {:.2}",
                    result.faults,
                    result.hits(),
                    result.hit_ratio()
                ));
                text
            })?;
        }
        Commands::PageCompare {
            references,
            capacity,
        } => {
            let input = parse_page_input(references, capacity)?;
            let ranked = compare_page_strategies(&input.references, input.capacity)
                .context("comparing page strategies")?;

            let reports: Vec<_> = ranked
                .iter()
                .map(|(strategy, result)| PageReport::new(*strategy, result))
                .collect();

            emit(&cli, &reports, || {
                let mut text = format!("{:<8} {:>7} {:>6}\n", "Strategy", "Faults", "Hits");
                for (strategy, result) in &ranked {
                    text.push_str(&format!(
                        "{:<8} {:>7} {:>6}\n",
                        strategy.name(),
                        result.faults,
                        result.hits()
                    ));
                }
                text
            })?;
        }
    }

    Ok(())
}

/// Prints `value` as JSON or text and writes the report file if requested.
fn emit<T, F>(cli: &Cli, value: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    if cli.json {
        println!("{}", report::to_json(value)?);
    } else {
        println!("{}", text().trim_end());
    }

    if let Some(path) = &cli.output {
        report::write_json(path, value)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }
    Ok(())
}
