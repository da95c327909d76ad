// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{earth_distance, Error, Instruction, InstructionList};

/// Helper for creating an [InstructionList] while walking along a route.
///
/// Maneuvers are added with [add_turn](InstructionListBuilder::add_turn), and the
/// geometry between them with [add_point](InstructionListBuilder::add_point).
/// The distance and time of a stretch are only known once the next maneuver
/// (or the end of the route) is reached, and are then written into the
/// previous instruction.
#[derive(Debug, Clone)]
pub struct InstructionListBuilder {
    list: InstructionList,
    meters_per_milli: f64,
    last_point: Option<(f64, f64)>,
    distance: f64,
}

impl InstructionListBuilder {
    /// Creates a new builder, assuming a constant travel speed in km/h.
    pub fn new(speed_kmh: f64) -> Result<Self, Error> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(Error::InvalidSpeed(speed_kmh));
        }

        Ok(Self {
            list: InstructionList::new(),
            meters_per_milli: speed_kmh / 3600.0,
            last_point: None,
            distance: 0.0,
        })
    }

    /// Starts a new stretch with a maneuver at the provided position.
    pub fn add_turn<S: Into<String>>(
        &mut self,
        indication: i32,
        name: S,
        lat: f64,
        lon: f64,
    ) -> Result<(), Error> {
        if !self.list.is_empty() {
            self.extend_stretch(lat, lon);
            self.close_stretch()?;
        }

        self.list.push(Instruction::new(indication, name, 0.0, 0, lat, lon));
        self.last_point = Some((lat, lon));
        self.distance = 0.0;
        Ok(())
    }

    /// Extends the current stretch up to the provided position.
    ///
    /// Returns [Error::EmptyList] if no maneuver was added yet.
    pub fn add_point(&mut self, lat: f64, lon: f64) -> Result<(), Error> {
        if self.list.is_empty() {
            return Err(Error::EmptyList);
        }
        self.extend_stretch(lat, lon);
        Ok(())
    }

    /// Closes the last stretch and returns the complete [InstructionList].
    pub fn finish(mut self) -> Result<InstructionList, Error> {
        if !self.list.is_empty() {
            self.close_stretch()?;
        }
        Ok(self.list)
    }

    fn extend_stretch(&mut self, lat: f64, lon: f64) {
        if let Some((prev_lat, prev_lon)) = self.last_point {
            self.distance += earth_distance(prev_lat, prev_lon, lat, lon) * 1000.0;
        }
        self.last_point = Some((lat, lon));
    }

    fn close_stretch(&mut self) -> Result<(), Error> {
        let millis = (self.distance / self.meters_per_milli).round() as u64;
        log::debug!(
            "instruction {}: {:.1} m, {} ms",
            self.list.len() - 1,
            self.distance,
            millis
        );
        self.list
            .update_last_distance_and_time(self.distance, millis)
    }
}
