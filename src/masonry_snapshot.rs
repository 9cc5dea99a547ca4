// Prints a single render of the masonry grid to stdout
//
// MASONRY_SNAPSHOT_CONFIG may hold a JSON configuration, e.g.
//   {"repeat": 6, "rowSpan": 2, "columnSpan": 2, "minValue": 30}
// Missing fields keep their defaults.

use e_masonry::display::{format_grid_header, format_placement, format_tile_list};
use e_masonry::{render, MasonryConfig, MasonryResult, Placement};
use log::{debug, info};

fn snapshot_config() -> MasonryResult<MasonryConfig> {
    match std::env::var("MASONRY_SNAPSHOT_CONFIG") {
        Ok(json) if !json.trim().is_empty() => Ok(serde_json::from_str(&json)?),
        _ => Ok(MasonryConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = snapshot_config()?;
    info!("Snapshot of {}", serde_json::to_string(&config)?);

    let mut rng = rand::thread_rng();
    let render = render(&config, &mut rng);
    let placement = Placement::compute(&render.tiles, render.template.columns);
    debug!(
        "Placed {} tiles on {} rows",
        placement.tiles.len(),
        placement.rows
    );

    print!("{}", format_grid_header(&render));
    println!();
    print!("{}", format_tile_list(&render));
    println!();
    print!("{}", format_placement(&placement));
    Ok(())
}
