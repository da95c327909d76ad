// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Single element of a route file, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Start of a route, with an optional travel speed in km/h.
    Route { speed: Option<f64> },

    /// A maneuver starting a new stretch.
    Turn {
        indication: i32,
        name: String,
        lat: f64,
        lon: f64,
    },

    /// An intermediate shape point of the current stretch.
    Point { lat: f64, lon: f64 },
}
