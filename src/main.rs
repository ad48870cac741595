use anyhow::Result;
use clap::Parser;
use serde_json::json;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

use learnwithus::{
    cli::{dataset, Cli, Commands},
    model::Material,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let catalog = dataset::reference_catalog()?;

    match cli.command {
        Commands::Show => {
            if cli.format == "json" {
                let payload = json!({
                    "materials": catalog.materials(),
                    "authors": catalog.authors(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                for material in catalog.materials() {
                    println!("{material}");
                }
                println!("---");
                for author in catalog.authors() {
                    println!("{author}");
                }
            }
        }
        Commands::Topic { topic } => {
            let results = catalog.by_topic(topic.parse()?);
            render(&results, &cli.format)?;
        }
        Commands::Title { fragment, limit } => {
            let results = catalog.by_title(&fragment, limit);
            render(&results, &cli.format)?;
        }
        Commands::Rating { min, max, limit } => {
            let results = match limit {
                Some(limit) => catalog.by_rating_range(min, max, limit),
                None => catalog.by_rating_sorted(min, max),
            };
            render(&results, &cli.format)?;
        }
        Commands::Dates { start, end, limit } => {
            let results = catalog.by_date_range(&start, &end, limit)?;
            render(&results, &cli.format)?;
        }
        Commands::Author {
            kind,
            fragment,
            limit,
        } => {
            let results = catalog.by_kind_and_author(kind.parse()?, &fragment, limit);
            render(&results, &cli.format)?;
        }
    }

    Ok(())
}

fn initialize_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Logs to stderr, results to stdout
        .init();
}

fn render(results: &[Rc<Material>], format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else if results.is_empty() {
        println!("(no matches)");
    } else {
        for material in results {
            println!("{material}");
        }
    }
    Ok(())
}
