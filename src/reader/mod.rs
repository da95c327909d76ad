// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Loading of [InstructionLists](InstructionList) from route files.
//!
//! A route file is an XML document with a `<route>` root, containing
//! `<turn>` elements for every maneuver and `<point>` elements for the
//! geometry between them:
//!
//! ```xml
//! <route speed="50">
//!   <turn indication="0" name="Main St" lat="52.2297" lon="21.0122"/>
//!   <point lat="52.2330" lon="21.0125"/>
//!   <turn indication="2" name="Oak Ave" lat="52.2380" lon="21.0150"/>
//!   <point lat="52.2391" lon="21.0101"/>
//! </route>
//! ```
//!
//! Distances are computed along the points, and times from the travel speed (in km/h).
//! The `<route>` element must come before any `<turn>` or `<point>`.

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::{Error, InstructionList, InstructionListBuilder};

mod model;
mod xml;

use model::Step;

/// Travel speed used when neither [Options::speed] nor the route file provide one, in km/h.
pub const DEFAULT_SPEED: f64 = 50.0;

/// Format of the input route file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Unknown format - guess the format based on the content
    Unknown,

    /// Force uncompressed XML
    Xml,

    /// Force XML with [gzip](https://en.wikipedia.org/wiki/Gzip) compression
    XmlGz,

    /// Force XML with [bzip2](https://en.wikipedia.org/wiki/Bzip2) compression
    XmlBz2,
}

/// Additional controls for interpreting route files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Format of the input data.
    pub file_format: FileFormat,

    /// Travel speed in km/h, used when the `<route>` element has no `speed` attribute.
    pub speed: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            file_format: FileFormat::Unknown,
            speed: DEFAULT_SPEED,
        }
    }
}

/// Guesses the [FileFormat] from the first bytes of a file.
fn detect_format(magic: &[u8]) -> FileFormat {
    if magic.starts_with(&[0x1f, 0x8b]) {
        FileFormat::XmlGz
    } else if magic.starts_with(b"BZh") {
        FileFormat::XmlBz2
    } else {
        FileFormat::Xml
    }
}

/// Feeds all [Steps](Step) into an [InstructionListBuilder].
fn build<I: Iterator<Item = Result<Step, Error>>>(
    steps: I,
    options: &Options,
) -> Result<InstructionList, Error> {
    let mut speed = options.speed;
    let mut builder: Option<InstructionListBuilder> = None;

    for step in steps {
        match step? {
            Step::Route { .. } if builder.is_some() => {
                return Err(Error::InvalidElement {
                    element: "route",
                    reason: "route after the first turn".to_string(),
                })
            }
            Step::Route { speed: Some(s) } => speed = s,
            Step::Route { speed: None } => {}

            Step::Turn {
                indication,
                name,
                lat,
                lon,
            } => {
                let mut b = match builder.take() {
                    Some(b) => b,
                    None => InstructionListBuilder::new(speed)?,
                };
                b.add_turn(indication, name, lat, lon)?;
                builder = Some(b);
            }

            Step::Point { lat, lon } => match builder {
                Some(ref mut b) => b.add_point(lat, lon)?,
                None => {
                    return Err(Error::InvalidElement {
                        element: "point",
                        reason: "point before the first turn".to_string(),
                    })
                }
            },
        }
    }

    match builder {
        Some(b) => b.finish(),
        None => Ok(InstructionList::new()),
    }
}

/// Parse a route from a reader into an [InstructionList] as per the provided [Options].
///
/// The provided stream will be automatically wrapped in a buffered reader when needed.
pub fn load_from_io<R: io::Read>(options: &Options, reader: R) -> Result<InstructionList, Error> {
    let mut b = io::BufReader::new(reader);

    let file_format = match options.file_format {
        FileFormat::Unknown => detect_format(b.fill_buf()?),
        f => f,
    };

    match file_format {
        FileFormat::Unknown | FileFormat::Xml => build(xml::Reader::from_io(b), options),

        FileFormat::XmlGz => {
            let d = flate2::bufread::MultiGzDecoder::new(b);
            build(xml::Reader::from_io(io::BufReader::new(d)), options)
        }

        FileFormat::XmlBz2 => {
            let d = bzip2::bufread::MultiBzDecoder::new(b);
            build(xml::Reader::from_io(io::BufReader::new(d)), options)
        }
    }
}

/// Parse a route from a file at the provided path into an [InstructionList] as per the provided [Options].
pub fn load_from_file<P: AsRef<Path>>(options: &Options, path: P) -> Result<InstructionList, Error> {
    let f = File::open(path)?;
    load_from_io(options, f)
}

/// Parse a route from a static buffer into an [InstructionList] as per the provided [Options].
pub fn load_from_buffer(options: &Options, data: &[u8]) -> Result<InstructionList, Error> {
    let file_format = match options.file_format {
        FileFormat::Unknown => detect_format(data),
        f => f,
    };

    if file_format == FileFormat::Xml {
        // Fast path is available for in-memory XML data
        build(xml::Reader::from_buffer(data), options)
    } else {
        // Wrap the buffer in a cursor and use the IO path
        let cursor = io::Cursor::new(data);
        load_from_io(options, cursor)
    }
}
