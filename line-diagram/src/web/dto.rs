//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::diagram::{Frame, x_position};
use crate::domain::{Line, Path, Station};
use crate::modes::{ModeController, ModeKind};
use crate::remote::RemoteKey;

/// A station in the station list.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station id (also its pixel on the strip)
    pub id: usize,

    /// Display name
    pub name: &'static str,

    /// Line the station is painted for
    pub line: Line,

    /// Column counting from the left of the panel
    pub x: usize,
}

impl StationResult {
    pub fn from_station(station: Station) -> Self {
        Self {
            id: station.index(),
            name: station.name(),
            line: Line::of(station),
            x: x_position(station),
        }
    }
}

/// Response listing every station.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// Request for a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station id
    pub from: usize,

    /// Destination station id
    pub to: usize,
}

/// One stop on a route.
#[derive(Debug, Serialize)]
pub struct RouteStop {
    pub id: usize,
    pub name: &'static str,
}

/// Response for a route lookup.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Stops in travel order, origin and destination included
    pub stations: Vec<RouteStop>,

    /// Number of stops
    pub length: usize,
}

impl RouteResponse {
    pub fn from_path(path: &Path) -> Self {
        let stations: Vec<RouteStop> = path
            .iter()
            .map(|&s| RouteStop {
                id: s.index(),
                name: s.name(),
            })
            .collect();
        Self {
            length: stations.len(),
            stations,
        }
    }
}

/// Current mode of the panel.
#[derive(Debug, Serialize)]
pub struct ModeStatus {
    pub mode: ModeKind,
    pub submode: u8,
    pub powered: bool,
}

impl ModeStatus {
    pub fn from_controller(controller: &ModeController) -> Self {
        Self {
            mode: controller.kind(),
            submode: controller.mode().submode(),
            powered: controller.is_powered(),
        }
    }
}

/// Snapshot of the strip.
#[derive(Debug, Serialize)]
pub struct FrameResponse {
    #[serde(flatten)]
    pub status: ModeStatus,

    /// Pixel colours in strip order, as `#rrggbb`
    pub pixels: Vec<String>,
}

impl FrameResponse {
    pub fn new(controller: &ModeController, frame: &Frame) -> Self {
        Self {
            status: ModeStatus::from_controller(controller),
            pixels: frame.pixels().iter().map(|p| p.to_hex()).collect(),
        }
    }
}

/// A code received from the IR remote.
#[derive(Debug, Deserialize)]
pub struct RemoteRequest {
    pub code: u32,
}

/// Result of a remote key press.
#[derive(Debug, Serialize)]
pub struct RemoteResponse {
    /// Label of the decoded key
    pub key: &'static str,

    /// Whether the key changed anything
    pub applied: bool,

    #[serde(flatten)]
    pub status: ModeStatus,
}

impl RemoteResponse {
    pub fn new(key: RemoteKey, applied: bool, controller: &ModeController) -> Self {
        Self {
            key: key.label(),
            applied,
            status: ModeStatus::from_controller(controller),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
