// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::io;
use std::sync::Arc;

/// Error conditions which may occur when building, loading or formatting
/// an [InstructionList](crate::InstructionList).
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// [update_last_distance_and_time](crate::InstructionList::update_last_distance_and_time)
    /// was called on a list without any instructions.
    #[error("cannot update last distance and time of an empty instruction list")]
    EmptyList,

    /// Indication code outside of the closed set of [Indications](crate::Indication).
    #[error("indication not found: {0}")]
    InvalidIndication(i32),

    /// Instruction access with an index past the end of the list.
    #[error("index {index} out of range for instruction list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A non-empty line of a translation file without a `key=value` pair.
    #[error("malformed translation line: {line:?}")]
    MalformedTranslation { line: String },

    /// Travel speed must be a positive, finite number of km/h.
    #[error("invalid speed: {0} km/h")]
    InvalidSpeed(f64),

    /// A route file element is missing attributes or has unparsable values.
    #[error("invalid <{element}>: {reason}")]
    InvalidElement {
        element: &'static str,
        reason: String,
    },

    #[error("xml: {0}")]
    Xml(#[from] Arc<quick_xml::Error>),

    #[error("io: {0}")]
    Io(#[from] Arc<io::Error>),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(Arc::new(e))
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Error::Xml(Arc::new(e))
    }
}
