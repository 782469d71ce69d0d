use std::path::PathBuf;

use clap::Parser;
use nalgebra::Vector2;

use endless_terrain::terrain::{
    generator::HeightmapGenerator,
    ChunkStore, HeadlessScene, Result,
};
use endless_terrain::TerrainConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with terrain settings; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of update ticks to simulate
    #[arg(short, long, default_value_t = 120)]
    ticks: u32,

    /// World units the viewer moves along +X each tick
    #[arg(long, default_value_t = 8.0)]
    speed: f32,

    /// Overrides the noise seed from the config
    #[arg(short, long)]
    seed: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TerrainConfig::load(path)?,
        None => TerrainConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.noise.seed = seed;
    }

    let generator = HeightmapGenerator::from_settings(&config.noise);
    let mut store = ChunkStore::new(config, generator, HeadlessScene::new())?;

    log::info!("Walking viewer for {} ticks at {} units/tick...", args.ticks, args.speed);
    let mut viewer = Vector2::new(0.0f32, 0.0);
    for _ in 0..args.ticks {
        let summary = store.update_visible_chunks(viewer);
        if summary.created > 0 || summary.evicted > 0 {
            log::info!(
                "Tick {} at chunk ({}, {}): {} built, {} visible, {} evicted",
                store.tick(),
                summary.viewer_chunk.x,
                summary.viewer_chunk.z,
                summary.created,
                summary.visible,
                summary.evicted
            );
        }
        viewer.x += args.speed;
    }

    log::info!(
        "Done! {} chunks resident, {} active in scene",
        store.chunk_count(),
        store.scene().active_count()
    );
    Ok(())
}
