// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::format::{self, UnitSystem};
use crate::{Error, Instruction, Translate};

/// Ordered sequence of [Instructions](Instruction) describing a route.
///
/// The list is append-only, with one exception: the distance and time of the
/// last instruction can be overwritten with
/// [update_last_distance_and_time](InstructionList::update_last_distance_and_time),
/// as the length of a stretch is only known once the next maneuver is found.
///
/// All projections return vectors index-aligned with the list.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionList(Vec<Instruction>);

impl Default for InstructionList {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionList {
    pub fn new() -> Self {
        Self::with_capacity(10)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Appends an [Instruction] to the end of the list.
    pub fn push(&mut self, instruction: Instruction) {
        self.0.push(instruction);
    }

    /// Returns the number of instructions in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Retrieves the [Instruction] at the provided position.
    pub fn get(&self, index: usize) -> Result<&Instruction, Error> {
        self.0.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.0.len(),
        })
    }

    /// Returns an iterator over all [Instructions](Instruction), in route order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Instruction] {
        &self.0
    }

    /// Sets the distance (in meters) and time (in milliseconds) of the last added [Instruction].
    ///
    /// Returns [Error::EmptyList] without any changes if the list is empty.
    pub fn update_last_distance_and_time(&mut self, distance: f64, millis: u64) -> Result<(), Error> {
        let last = self.0.last_mut().ok_or(Error::EmptyList)?;
        last.set_distance_and_time(distance, millis);
        Ok(())
    }

    /// Returns the indication codes of all instructions, useful for picking images.
    pub fn indications(&self) -> Vec<i32> {
        self.0.iter().map(Instruction::indication).collect()
    }

    /// Returns the distances (in meters) of all instructions.
    pub fn distances(&self) -> Vec<f64> {
        self.0.iter().map(Instruction::distance).collect()
    }

    /// Returns `[lat, lon]` positions of all instructions.
    pub fn segment_start_points(&self) -> Vec<[f64; 2]> {
        self.0.iter().map(|i| [i.lat(), i.lon()]).collect()
    }

    /// Returns localized labels of the distances until the next instruction,
    /// see [format::format_distance].
    pub fn distance_labels<T: Translate + ?Sized>(&self, tr: &T, units: UnitSystem) -> Vec<String> {
        format::distance_labels(&self.0, units, tr)
    }

    /// Returns localized labels of the times until the next instruction,
    /// see [format::format_time].
    pub fn time_labels<T: Translate + ?Sized>(&self, tr: &T) -> Vec<String> {
        format::time_labels(&self.0, tr)
    }

    /// Returns localized descriptions of all maneuvers, see [format::describe].
    pub fn descriptions<T: Translate + ?Sized>(&self, tr: &T) -> Result<Vec<String>, Error> {
        format::descriptions(&self.0, tr)
    }
}

impl<'a> IntoIterator for &'a InstructionList {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for InstructionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, instruction) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", instruction)?;
        }
        f.write_str("]")
    }
}
