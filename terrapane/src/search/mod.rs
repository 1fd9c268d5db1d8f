//! Search orchestration: free-text input to camera movement.
//!
//! [`SearchController`] owns the lifecycle of a search attempt: it validates
//! the query, spawns one geocoding request, and turns the outcome into a
//! [`CameraCommand`] for whichever map backend the caller drives. Outcomes
//! are delivered over a channel and drained with [`SearchController::poll`]
//! from the UI loop, so the controller never blocks.
//!
//! Each attempt is tagged with a monotonically increasing sequence number;
//! `poll` discards any outcome that is not from the most recent attempt, so
//! overlapping searches cannot apply out of order.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::coord::{BoundingBox, LonLat};
use crate::geocode::{GeocodeError, GeocodeFeature, Geocoder, PlaceKind};

/// Screen pixels kept clear around a fitted bounding box.
pub const FIT_BOUNDS_PADDING: f64 = 50.0;

/// Error message for failures that are not a clean "nothing matched".
pub const GENERIC_SEARCH_ERROR: &str = "Error performing search";

/// UI-visible phase of the search lifecycle.
///
/// Phases are mutually exclusive: entering `Loading` clears a prior error,
/// and every attempt ends in `Idle` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No attempt in flight, no error to show.
    #[default]
    Idle,
    /// A request is in flight; submission is disabled.
    Loading,
    /// The last attempt failed; the message is shown until the next submit.
    Error(String),
}

/// Camera movement produced by a successful search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Animate to a point at a fixed zoom.
    FlyTo { center: LonLat, zoom: f64 },
    /// Frame a bounding box with padding.
    FitBounds { bounds: BoundingBox, padding: f64 },
}

/// Completed attempt, tagged with its sequence number.
struct SearchOutcome {
    seq: u64,
    kind: PlaceKind,
    result: Result<GeocodeFeature, GeocodeError>,
}

/// Orchestrates search attempts against a [`Geocoder`].
pub struct SearchController<G> {
    geocoder: Arc<G>,
    runtime: Handle,
    cancel: CancellationToken,
    phase: SearchPhase,
    latest_seq: u64,
    tx: mpsc::UnboundedSender<SearchOutcome>,
    rx: mpsc::UnboundedReceiver<SearchOutcome>,
}

impl<G: Geocoder + 'static> SearchController<G> {
    /// Creates a controller that spawns requests on `runtime`.
    pub fn new(geocoder: G, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            geocoder: Arc::new(geocoder),
            runtime,
            cancel: CancellationToken::new(),
            phase: SearchPhase::default(),
            latest_seq: 0,
            tx,
            rx,
        }
    }

    /// Ties in-flight requests to an external shutdown token.
    ///
    /// When the token is cancelled, pending requests stop without delivering
    /// an outcome; used at teardown so a dying UI never receives state.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Submits a search attempt.
    ///
    /// A query that trims to empty is a no-op: no request, no phase change,
    /// and `false` is returned. Otherwise the phase moves to `Loading`
    /// (clearing any prior error) and one request is spawned.
    pub fn submit(&mut self, query: &str, kind: PlaceKind) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }

        self.latest_seq += 1;
        let seq = self.latest_seq;
        self.phase = SearchPhase::Loading;

        tracing::debug!(query = query, kind = %kind, seq = seq, "search submitted");

        let geocoder = Arc::clone(&self.geocoder);
        let tx = self.tx.clone();
        let cancel = self.cancel.clone();
        let query = query.to_string();

        self.runtime.spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                result = geocoder.geocode(&query, kind) => {
                    // Every attempt delivers exactly one outcome, success or
                    // not; the receiver side is what ends the loading phase.
                    let _ = tx.send(SearchOutcome { seq, kind, result });
                }
            }
        });

        true
    }

    /// Drains completed attempts and returns the camera command from the
    /// most recent one, if it succeeded.
    ///
    /// Outcomes from superseded attempts are discarded without touching
    /// phase or camera. Call this from the UI loop every tick; a returned
    /// command implies success, so the caller should also clear its query
    /// input.
    pub fn poll(&mut self) -> Option<CameraCommand> {
        let mut command = None;
        while let Ok(outcome) = self.rx.try_recv() {
            if outcome.seq != self.latest_seq {
                tracing::debug!(
                    seq = outcome.seq,
                    latest = self.latest_seq,
                    "discarding stale search response"
                );
                continue;
            }
            command = self.apply(outcome);
        }
        command
    }

    /// Current phase.
    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// The error message to display, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    fn apply(&mut self, outcome: SearchOutcome) -> Option<CameraCommand> {
        match outcome.result {
            Ok(feature) => match resolve_command(outcome.kind, &feature) {
                Ok(command) => {
                    self.phase = SearchPhase::Idle;
                    Some(command)
                }
                Err(e) => {
                    tracing::error!(error = %e, "search result unusable");
                    self.phase = SearchPhase::Error(GENERIC_SEARCH_ERROR.to_string());
                    None
                }
            },
            Err(e) if e.is_no_results() => {
                self.phase = SearchPhase::Error(e.to_string());
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "search failed");
                self.phase = SearchPhase::Error(GENERIC_SEARCH_ERROR.to_string());
                None
            }
        }
    }
}

/// Maps a result to a camera command.
///
/// A bounding box takes precedence over the center point only for country
/// searches; everything else flies to the center at the kind's default zoom.
pub fn resolve_command(
    kind: PlaceKind,
    feature: &GeocodeFeature,
) -> Result<CameraCommand, GeocodeError> {
    if kind == PlaceKind::Country {
        if let Some(bounds) = feature.bounds() {
            return Ok(CameraCommand::FitBounds {
                bounds,
                padding: FIT_BOUNDS_PADDING,
            });
        }
    }

    Ok(CameraCommand::FlyTo {
        center: feature.center()?,
        zoom: kind.default_zoom(),
    })
}
