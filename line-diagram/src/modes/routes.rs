//! Trains running random routes across the diagram.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use crate::diagram::Frame;
use crate::domain::{Line, Path, Rgb, STATION_COUNT, Station};
use crate::planner::PathFinder;

/// Time between the train advancing one station.
pub const STEP: Duration = Duration::from_millis(150);

/// How many random endpoint pairs to try before giving up for a step.
const MAX_ROUTE_ATTEMPTS: usize = 16;

/// Mode 3 state.
///
/// A route between two random stations is revealed one station per
/// [`STEP`], head first, then retracted from its tail. Once the last
/// station goes dark a new route is picked.
#[derive(Debug, Clone, Default)]
pub struct RouteAnimation {
    path: Path,
    head: usize,
    tail: usize,
    last_step: Option<Duration>,
}

impl RouteAnimation {
    pub const SUBMODES: u8 = 1;

    pub fn submode(&self) -> u8 {
        0
    }

    pub fn set_submode(&mut self, submode: u8) -> bool {
        submode < Self::SUBMODES
    }

    /// The route currently on display.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stations currently lit, oldest first.
    pub fn lit(&self) -> &[Station] {
        &self.path.as_slice()[self.tail..self.head]
    }

    pub fn render<R: Rng>(
        &mut self,
        frame: &mut Frame,
        now: Duration,
        finder: &PathFinder<'_>,
        rng: &mut R,
    ) {
        let due = match self.last_step {
            Some(last) => now.saturating_sub(last) >= STEP,
            None => true,
        };
        if due {
            self.last_step = Some(now);
            self.advance(finder, rng);
        }
        self.draw(frame);
    }

    fn advance<R: Rng>(&mut self, finder: &PathFinder<'_>, rng: &mut R) {
        if self.tail >= self.path.len() {
            self.pick_route(finder, rng);
        } else if self.head < self.path.len() {
            self.head += 1;
        } else {
            self.tail += 1;
        }
    }

    fn pick_route<R: Rng>(&mut self, finder: &PathFinder<'_>, rng: &mut R) {
        self.head = 0;
        self.tail = 0;

        for _ in 0..MAX_ROUTE_ATTEMPTS {
            let from = rng.gen_range(0..STATION_COUNT);
            // Skip `from` so the route has at least two stations.
            let mut to = rng.gen_range(0..STATION_COUNT - 1);
            if to >= from {
                to += 1;
            }

            let path = finder.find(from, to);
            if path.len() >= 2 {
                debug!(from, to, stations = path.len(), "new animated route");
                self.path = path;
                self.head = 1;
                return;
            }
        }

        warn!(attempts = MAX_ROUTE_ATTEMPTS, "no animated route found");
        self.path = Path::new();
    }

    fn draw(&self, frame: &mut Frame) {
        frame.clear();
        let lit = self.lit();
        let growing = self.head < self.path.len();
        for (i, &station) in lit.iter().enumerate() {
            let colour = if growing && i + 1 == lit.len() {
                Rgb::WHITE
            } else {
                Line::of(station).colour()
            };
            frame.set_station(station, colour);
        }
    }
}
