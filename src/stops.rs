//! Unscheduled stop detection.
//!
//! A single pass over the track with two states. Consecutive samples closer
//! than the distance threshold extend a stationary run; anything else closes
//! it. Closed runs that lasted long enough and are not at the destination are
//! reported as stops.
//!
//! The track must be sorted ascending by timestamp. Use
//! [`sort_chronologically`] or [`validate_track`] at the boundary.

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::TrackError;
use crate::haversine::distance;
use crate::traits::ReverseGeocoder;
use crate::types::{Coordinate, GpsSample, UnscheduledStop};

/// A closed stationary run, as inclusive sample indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub first: usize,
    pub last: usize,
}

impl Run {
    /// Number of samples in the run.
    pub fn sample_count(&self) -> usize {
        self.last - self.first + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Moving,
    Stopped { first: usize, last: usize },
}

impl RunState {
    /// Advance over the sample pair `(prev, curr)`.
    ///
    /// Returns the next state and the run closed by this step, if any.
    pub fn step(self, prev: usize, curr: usize, stationary: bool) -> (RunState, Option<Run>) {
        match (self, stationary) {
            (RunState::Moving, true) => (
                RunState::Stopped {
                    first: prev,
                    last: curr,
                },
                None,
            ),
            (RunState::Moving, false) => (RunState::Moving, None),
            (RunState::Stopped { first, .. }, true) => (RunState::Stopped { first, last: curr }, None),
            (RunState::Stopped { first, last }, false) => (RunState::Moving, Some(Run { first, last })),
        }
    }

    /// Close whatever run is open at the end of the track.
    pub fn finish(self) -> Option<Run> {
        match self {
            RunState::Moving => None,
            RunState::Stopped { first, last } => Some(Run { first, last }),
        }
    }
}

/// Lazy stop iterator over a borrowed track.
///
/// Re-creating it over the same track yields the same stops.
#[derive(Debug, Clone)]
pub struct StopDetector<'a> {
    track: &'a [GpsSample],
    destination: Option<Coordinate>,
    stop_threshold_minutes: f64,
    distance_threshold_meters: f64,
    destination_radius_meters: f64,
    next_index: usize,
    state: RunState,
    finished: bool,
}

impl<'a> StopDetector<'a> {
    /// Creates a detector over a chronologically sorted track.
    pub fn new(track: &'a [GpsSample], destination: Option<Coordinate>, config: &EngineConfig) -> Self {
        Self {
            track,
            destination,
            stop_threshold_minutes: config.stop_threshold_minutes,
            distance_threshold_meters: config.distance_threshold_meters,
            destination_radius_meters: config.destination_radius_meters,
            next_index: 1,
            state: RunState::Moving,
            finished: false,
        }
    }

    fn is_stationary(&self, prev: usize, curr: usize) -> bool {
        let prev_sample = &self.track[prev];
        let curr_sample = &self.track[curr];
        if curr_sample.timestamp < prev_sample.timestamp {
            warn!(index = curr, "gps samples out of chronological order");
        }
        distance(prev_sample.coordinate(), curr_sample.coordinate()) < self.distance_threshold_meters
    }

    fn qualify(&self, run: Run) -> Option<UnscheduledStop> {
        let first = &self.track[run.first];
        let last = &self.track[run.last];
        let duration_minutes =
            (last.timestamp - first.timestamp).num_milliseconds() as f64 / 60_000.0;

        if duration_minutes < self.stop_threshold_minutes {
            return None;
        }

        if let Some(destination) = self.destination {
            let to_destination = distance(first.coordinate(), destination);
            if to_destination <= self.destination_radius_meters {
                debug!(
                    duration_minutes,
                    to_destination, "stationary run at destination, not reported"
                );
                return None;
            }
        }

        debug!(
            lat = first.latitude,
            lng = first.longitude,
            duration_minutes,
            samples = run.sample_count(),
            "unscheduled stop"
        );

        Some(UnscheduledStop {
            latitude: first.latitude,
            longitude: first.longitude,
            start_time: first.timestamp,
            end_time: last.timestamp,
            duration_minutes,
            sample_count: run.sample_count(),
            address: None,
        })
    }
}

impl Iterator for StopDetector<'_> {
    type Item = UnscheduledStop;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_index < self.track.len() {
            let (prev, curr) = (self.next_index - 1, self.next_index);
            self.next_index += 1;

            let (state, closed) = self.state.step(prev, curr, self.is_stationary(prev, curr));
            self.state = state;

            if let Some(stop) = closed.and_then(|run| self.qualify(run)) {
                return Some(stop);
            }
        }

        if self.finished {
            return None;
        }
        self.finished = true;
        let open = self.state.finish();
        self.state = RunState::Moving;
        open.and_then(|run| self.qualify(run))
    }
}

/// All unscheduled stops on `track`, in track order.
pub fn detect(
    track: &[GpsSample],
    destination: Option<Coordinate>,
    config: &EngineConfig,
) -> Vec<UnscheduledStop> {
    StopDetector::new(track, destination, config).collect()
}

/// Stable sort by timestamp, for tracks read back from unordered storage.
pub fn sort_chronologically(track: &mut [GpsSample]) {
    track.sort_by_key(|sample| sample.timestamp);
}

/// Check coordinates and ordering before handing a track to the engine.
pub fn validate_track(track: &[GpsSample]) -> Result<(), TrackError> {
    for (index, sample) in track.iter().enumerate() {
        sample
            .validate()
            .map_err(|source| TrackError::InvalidSample { index, source })?;
        if index > 0 && sample.timestamp < track[index - 1].timestamp {
            return Err(TrackError::OutOfOrder { index });
        }
    }
    Ok(())
}

/// Fill in `address` for each stop the geocoder can resolve.
pub fn annotate_addresses<G>(stops: Vec<UnscheduledStop>, geocoder: &G) -> Vec<UnscheduledStop>
where
    G: ReverseGeocoder,
{
    stops
        .into_iter()
        .map(|stop| match geocoder.address_for(stop.coordinate()) {
            Some(address) => stop.with_address(address),
            None => stop,
        })
        .collect()
}
