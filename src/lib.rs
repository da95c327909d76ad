// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Turn-by-turn instructions for routes found over road networks.
//!
//! A route search produces a sequence of maneuvers, which are collected into an
//! [InstructionList]. The list is then projected into human-readable, localized
//! strings: distances until the next maneuver ("1.25 km", "450 ft"), travel times
//! ("1 h 5 min") and directions ("Turn sharp left onto Main St").
//! Localization is provided by any [Translate] implementation, e.g. the built-in
//! [Translation].
//!
//! # Example
//!
//! ```
//! use turnsheet::{Indication, Instruction, InstructionList, Translation, UnitSystem};
//!
//! let mut instructions = InstructionList::new();
//! instructions.push(Instruction::new(Indication::Continue.into(), "Main St", 0.0, 0, 52.2297, 21.0122));
//! instructions.update_last_distance_and_time(1250.0, 90_000)?;
//! instructions.push(Instruction::new(Indication::Right.into(), "Oak Ave", 0.0, 0, 52.2380, 21.0150));
//! instructions.update_last_distance_and_time(420.0, 20_000)?;
//!
//! let tr = Translation::english();
//! assert_eq!(instructions.descriptions(&tr)?, ["Continue onto Main St", "Turn right onto Oak Ave"]);
//! assert_eq!(instructions.distance_labels(&tr, UnitSystem::Metric), ["1.25 km", "420 m"]);
//! assert_eq!(instructions.time_labels(&tr), ["2 min", "0.3 min"]);
//! # Ok::<(), turnsheet::Error>(())
//! ```

mod builder;
mod distance;
mod error;
pub mod format;
mod instruction_list;
pub mod reader;
mod translation;

use std::fmt;

pub use builder::InstructionListBuilder;
pub use distance::{earth_distance, round, KM_MILE};
pub use error::Error;
pub use format::UnitSystem;
pub use instruction_list::InstructionList;
pub use translation::{Translate, Translation};

/// Direction of a maneuver, as seen by the traveller.
///
/// Indications are stored in [Instructions](Instruction) as plain codes,
/// see [Instruction::indication]; this enum represents the closed set of valid codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Indication {
    SharpLeft = -3,
    Left = -2,
    SlightLeft = -1,
    Continue = 0,
    SlightRight = 1,
    Right = 2,
    SharpRight = 3,
}

impl Indication {
    /// Translation key of the direction noun, or [None] for [Indication::Continue].
    pub fn direction_key(self) -> Option<&'static str> {
        match self {
            Self::SharpLeft => Some("sharp_left"),
            Self::Left => Some("left"),
            Self::SlightLeft => Some("slight_left"),
            Self::Continue => None,
            Self::SlightRight => Some("slight_right"),
            Self::Right => Some("right"),
            Self::SharpRight => Some("sharp_right"),
        }
    }
}

impl TryFrom<i32> for Indication {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -3 => Ok(Self::SharpLeft),
            -2 => Ok(Self::Left),
            -1 => Ok(Self::SlightLeft),
            0 => Ok(Self::Continue),
            1 => Ok(Self::SlightRight),
            2 => Ok(Self::Right),
            3 => Ok(Self::SharpRight),
            _ => Err(Error::InvalidIndication(code)),
        }
    }
}

impl From<Indication> for i32 {
    fn from(indication: Indication) -> Self {
        indication as i32
    }
}

/// A single maneuver of a route.
///
/// `distance` and `millis` describe the stretch *after* the maneuver,
/// until the next [Instruction]. They are usually unknown when the instruction
/// is created, and are later set with
/// [InstructionList::update_last_distance_and_time].
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    indication: i32,
    name: String,
    distance: f64,
    millis: u64,
    lat: f64,
    lon: f64,
}

impl Instruction {
    /// Creates a new instruction. The indication code is not validated,
    /// invalid codes are only reported when generating descriptions.
    pub fn new<S: Into<String>>(
        indication: i32,
        name: S,
        distance: f64,
        millis: u64,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self {
            indication,
            name: name.into(),
            distance,
            millis,
            lat,
            lon,
        }
    }

    /// Raw indication code, see [Indication].
    pub fn indication(&self) -> i32 {
        self.indication
    }

    /// Name of the way the traveller should follow after the maneuver.
    /// Empty for unnamed ways.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distance in meters until the next instruction.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Time in milliseconds until the next instruction.
    pub fn millis(&self) -> u64 {
        self.millis
    }

    /// Latitude of the location where this instruction should take place.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude of the location where this instruction should take place.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub(crate) fn set_distance_and_time(&mut self, distance: f64, millis: u64) {
        self.distance = distance;
        self.millis = millis;
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{:?},{})",
            self.indication, self.name, self.distance, self.millis
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indication_codes() {
        for code in -3..=3 {
            let indication = Indication::try_from(code).unwrap();
            assert_eq!(i32::from(indication), code);
        }

        assert!(matches!(
            Indication::try_from(4),
            Err(Error::InvalidIndication(4))
        ));
        assert!(matches!(
            Indication::try_from(-99),
            Err(Error::InvalidIndication(-99))
        ));
        assert_eq!(Indication::Continue.direction_key(), None);
        assert_eq!(Indication::SharpRight.direction_key(), Some("sharp_right"));
    }

    #[test]
    fn instruction_display() {
        let i = Instruction::new(-2, "Main St", 120.5, 9000, 52.0, 21.0);
        assert_eq!(i.to_string(), "(-2,Main St,120.5,9000)");

        let i = Instruction::new(0, "", 100.0, 0, 52.0, 21.0);
        assert_eq!(i.to_string(), "(0,,100.0,0)");
    }
}
