//! The `geocode` command: one-shot place resolution.
//!
//! Resolves a place name exactly like the interactive search would, applies
//! the camera move to a headless map, and prints where the camera lands.

use terrapane::geocode::{Geocoder, PlaceKind};
use terrapane::map::{HeadlessMap, MapControl};
use terrapane::search::{resolve_command, CameraCommand};

use crate::error::CliError;
use crate::runner::CliRunner;

pub fn handle(runner: &CliRunner, query: &str, kind: PlaceKind) -> Result<(), CliError> {
    let query = query.trim();
    if query.is_empty() {
        println!("Nothing to search for.");
        return Ok(());
    }

    let geocoder = runner.geocoder()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Io)?;

    let feature = runtime.block_on(geocoder.geocode(query, kind))?;
    let command = resolve_command(kind, &feature)?;

    let mut map = HeadlessMap::new();
    match command {
        CameraCommand::FlyTo { center, zoom } => {
            println!("Resolved '{}' ({})", query, kind);
            println!("  Center : {}", center);
            map.fly_to(center, zoom);
        }
        CameraCommand::FitBounds { bounds, padding } => {
            println!("Resolved '{}' ({})", query, kind);
            println!("  Bounds : {}", bounds);
            map.fit_bounds(bounds, padding);
        }
    }

    let camera = map.camera();
    println!("  Camera : {} @ zoom {:.2}", camera.center, camera.zoom);

    Ok(())
}
