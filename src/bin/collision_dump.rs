//! Collision Dump
//!
//! Loads a scene fixture, builds its collision update, folds it into a
//! region grid and prints the blocked faces of every touched tile.

use std::path::PathBuf;

use arc_collision::collision::{CollisionGrid, UpdateKind};
use arc_collision::core::error::Result;
use arc_collision::core::GridConfig;
use arc_collision::geometry::{Direction, Tile};
use arc_collision::world::Scene;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Collision Dump - inspect the collision flags a scene produces
#[derive(Parser, Debug)]
#[command(name = "collision_dump")]
#[command(about = "Build collision flags for a scene and print them per tile")]
struct Args {
    /// Scene JSON file (definitions + objects)
    scene: PathBuf,

    /// Grid config TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Build a REMOVING update instead of ADDING
    #[arg(long)]
    removing: bool,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output row
#[derive(Serialize)]
struct TileReport {
    tile: Tile,
    blocked: Vec<Direction>,
    blocks_projectile: Vec<Direction>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("arc_collision=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => GridConfig::load(path)?,
        None => GridConfig::default(),
    };

    let scene = Scene::load(&args.scene)?;
    tracing::info!(
        "Loaded scene {:?}: {} definitions, {} objects",
        scene.name.as_deref().unwrap_or("unnamed"),
        scene.definitions.len(),
        scene.objects.len()
    );

    let kind = if args.removing {
        UpdateKind::Removing
    } else {
        UpdateKind::Adding
    };
    let update = scene.collision_update(kind)?;

    // Removing only makes sense against the grid the scene itself produced
    let mut grid = CollisionGrid::new(config)?;
    if kind == UpdateKind::Removing {
        grid.apply(&update.inverted())?;
    }
    grid.apply(&update)?;

    let mut tiles: Vec<Tile> = update.flags().keys().copied().collect();
    tiles.sort();

    let reports: Vec<TileReport> = tiles
        .into_iter()
        .map(|tile| TileReport {
            tile,
            blocked: Direction::ALL
                .into_iter()
                .filter(|&dir| grid.is_blocked(&tile, dir))
                .collect(),
            blocks_projectile: Direction::ALL
                .into_iter()
                .filter(|&dir| grid.blocks_projectile(&tile, dir))
                .collect(),
        })
        .collect();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("=== {:?} update: {} tiles, {} flags ===", kind, update.len(), update.flag_count());
        for report in &reports {
            println!(
                "({}, {}, {})  blocked: {:?}  projectile: {:?}",
                report.tile.x,
                report.tile.z,
                report.tile.height,
                report.blocked,
                report.blocks_projectile
            );
        }
        if grid.is_empty() {
            println!("grid is empty");
        }
    }

    Ok(())
}
