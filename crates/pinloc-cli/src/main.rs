//! pinloc-cli — Command-line interface for pinloc-core
//!
//! This binary provides a simple way to inspect a location dataset from
//! your terminal. It supports printing basic statistics, listing states,
//! districts and cities, resolving pincodes, and writing binary snapshots.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ pinloc-cli --input pincodes.json stats
//!
//! - List the hierarchy level by level
//!   $ pinloc-cli --input pincodes.json states
//!   $ pinloc-cli --input pincodes.json districts Karnataka
//!   $ pinloc-cli --input pincodes.json cities Karnataka "Bengaluru Urban"
//!
//! - Resolve a full or partial pincode
//!   $ pinloc-cli --input pincodes.json pincode 5600
//!   $ pinloc-cli --input pincodes.json pincode 560001
//!
//! - Build a binary snapshot for fast subsequent loads
//!   $ pinloc-cli --input pincodes.json snapshot pincodes.bin.gz
//!   $ pinloc-cli --input pincodes.bin.gz stats
//!
//! Data source
//! -----------
//!
//! The dataset is a flat JSON array of records with state, district, city,
//! pincode and an optional locality label, like the public All India
//! Pincode Directory dumps. Snapshots written by the `snapshot` command
//! load without re-parsing or re-indexing.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use pinloc_core::loader::{self, JsonFileSource};
use pinloc_core::{DefaultEngine, LocationEngine, StandardBackend};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let input = args
        .input
        .context("--input <dataset> is required (JSON records or a .bin snapshot)")?;

    // Snapshots skip the parse+index step entirely.
    let engine: DefaultEngine = if input.ends_with(".bin") || input.ends_with(".bin.gz") {
        LocationEngine::preloaded(loader::load_snapshot::<StandardBackend>(&input)?)
    } else {
        let engine = match args.limit {
            Some(limit) => {
                LocationEngine::new(JsonFileSource::new(&input)).with_suggestion_limit(limit)
            }
            None => LocationEngine::new(JsonFileSource::new(&input)),
        };
        engine.initialize()?;
        engine
    };

    match args.command {
        Commands::Stats => {
            let stats = engine.stats();
            println!("Dataset statistics:");
            println!("  States: {}", stats.states);
            println!("  Districts: {}", stats.districts);
            println!("  Cities: {}", stats.cities);
            println!("  Pincode records: {}", stats.records);
        }

        Commands::States => {
            for state in engine.states() {
                println!("{state}");
            }
        }

        Commands::Districts { state } => {
            let districts = engine.districts(&state);
            if districts.is_empty() {
                eprintln!("No districts found for state: {state}");
            } else {
                for district in districts {
                    println!("{district}");
                }
            }
        }

        Commands::Cities { state, district } => {
            let cities = engine.cities(&state, &district);
            if cities.is_empty() {
                eprintln!("No cities found for {state} / {district}");
            } else {
                for city in cities {
                    println!("{city}");
                }
            }
        }

        Commands::Pincode { query } => {
            let hits = engine.search(&query)?;
            if hits.is_empty() {
                println!("No locations found for: {query}");
            } else {
                for record in hits {
                    match record.locality() {
                        Some(locality) => println!(
                            "{} — {}, {}, {} ({})",
                            record.pincode(),
                            record.city(),
                            record.district(),
                            record.state(),
                            locality
                        ),
                        None => println!(
                            "{} — {}, {}, {}",
                            record.pincode(),
                            record.city(),
                            record.district(),
                            record.state()
                        ),
                    }
                }
            }
        }

        Commands::Snapshot { out } => {
            let db = engine.db().context("engine not initialized")?;
            loader::save_snapshot(&out, db)?;
            println!("Snapshot written to {out}");
        }
    }

    Ok(())
}
