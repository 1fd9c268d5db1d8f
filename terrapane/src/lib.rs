//! Terrapane - interactive map viewing with geocoded place search
//!
//! This library provides the core of a map viewer: a camera state mirror, a
//! map-control abstraction, a geocoding client, and the orchestration that
//! turns a text search into a camera movement. Rendering is left to a
//! backend implementing [`map::MapControl`]; the bundled terminal frontend
//! lives in the `terrapane-cli` crate.
//!
//! # Example
//!
//! ```no_run
//! use terrapane::geocode::{GeocoderConfig, MapboxGeocoder, PlaceKind};
//! use terrapane::map::{HeadlessMap, MapControl};
//! use terrapane::search::SearchController;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let geocoder = MapboxGeocoder::new(GeocoderConfig::with_token("pk.token"))?;
//!     let mut map = HeadlessMap::new();
//!     let mut search = SearchController::new(geocoder, tokio::runtime::Handle::current());
//!
//!     search.submit("Paris", PlaceKind::City);
//!     loop {
//!         if let Some(command) = search.poll() {
//!             match command {
//!                 terrapane::search::CameraCommand::FlyTo { center, zoom } => {
//!                     map.fly_to(center, zoom)
//!                 }
//!                 terrapane::search::CameraCommand::FitBounds { bounds, padding } => {
//!                     map.fit_bounds(bounds, padding)
//!                 }
//!             }
//!             break;
//!         }
//!         tokio::time::sleep(std::time::Duration::from_millis(10)).await;
//!     }
//!
//!     println!("camera: {} @ {:.2}", map.camera().center, map.camera().zoom);
//!     Ok(())
//! }
//! ```

pub mod camera;
pub mod config;
pub mod coord;
pub mod geocode;
pub mod logging;
pub mod map;
pub mod search;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
