// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::io;
use std::str::{from_utf8, FromStr};

use quick_xml::events::{BytesStart, Event};

use super::model::Step;
use crate::Error;

/// Parser is a trait for objects which can parse XML.
///
/// This trait only exists to fix the mismatch of
/// [quick_xml::Reader::read_event] when working on buffered data
/// and [quick_xml::Reader::read_event_into] when working on IO.
pub(super) trait Parser {
    fn read_event<'a>(&'a mut self) -> quick_xml::Result<Event<'a>>;
}

/// IoParser implements [Parser] over an [std::io::BufRead].
pub(super) struct IoParser<R: io::BufRead>(quick_xml::Reader<R>, Vec<u8>);

impl<R: io::BufRead> IoParser<R> {
    #[inline]
    fn new(reader: R) -> Self {
        Self(quick_xml::Reader::from_reader(reader), Vec::default())
    }
}

impl<R: io::BufRead> Parser for IoParser<R> {
    #[inline]
    fn read_event<'a>(&'a mut self) -> quick_xml::Result<Event<'a>> {
        self.1.clear();
        self.0.read_event_into(&mut self.1)
    }
}

/// BufParser implements [Parser] over a slice of bytes (`&[u8]`).
pub(super) struct BufParser<'a>(quick_xml::Reader<&'a [u8]>);

impl<'a> BufParser<'a> {
    #[inline]
    fn new(data: &'a [u8]) -> Self {
        Self(quick_xml::Reader::from_reader(data))
    }
}

impl<'a> Parser for BufParser<'a> {
    #[inline]
    fn read_event<'b>(&'b mut self) -> quick_xml::Result<Event<'b>> {
        self.0.read_event()
    }
}

/// Reader reads route [Steps](Step) from an XML file.
pub(super) struct Reader<P: Parser> {
    parser: P,
    eof: bool,
}

impl<P: Parser> Reader<P> {
    #[inline]
    fn new(parser: P) -> Self {
        Self { parser, eof: false }
    }
}

impl<'a> Reader<BufParser<'a>> {
    #[inline]
    pub(super) fn from_buffer(data: &'a [u8]) -> Self {
        Self::new(BufParser::new(data))
    }
}

impl<R: io::BufRead> Reader<IoParser<R>> {
    #[inline]
    pub(super) fn from_io(reader: R) -> Self {
        Self::new(IoParser::new(reader))
    }
}

impl<P: Parser> Iterator for Reader<P> {
    type Item = Result<Step, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.eof {
            let event = match self.parser.read_event() {
                Ok(e) => e,
                Err(e) => {
                    self.eof = true;
                    return Some(Err(e.into()));
                }
            };

            match event {
                Event::Empty(start) | Event::Start(start) => {
                    if let Some(step) = parse_step(&start).transpose() {
                        return Some(step);
                    }
                }

                Event::Eof => self.eof = true,

                _ => {}
            }
        }

        None
    }
}

fn parse_step(start: &BytesStart<'_>) -> Result<Option<Step>, Error> {
    match start.local_name().as_ref() {
        b"route" => {
            let mut speed = None;
            for attr in start.attributes() {
                let attr = attr.map_err(quick_xml::Error::from)?;
                if attr.key.as_ref() == b"speed" {
                    speed = Some(parse_number("route", "speed", &attr.value)?);
                }
            }
            Ok(Some(Step::Route { speed }))
        }

        b"turn" => {
            let mut indication = None;
            let mut name = String::new();
            let mut lat = None;
            let mut lon = None;

            for attr in start.attributes() {
                let attr = attr.map_err(quick_xml::Error::from)?;
                match attr.key.as_ref() {
                    b"indication" => {
                        indication = Some(parse_number("turn", "indication", &attr.value)?)
                    }
                    b"name" => name = attr.unescape_value()?.into_owned(),
                    b"lat" => lat = Some(parse_number("turn", "lat", &attr.value)?),
                    b"lon" => lon = Some(parse_number("turn", "lon", &attr.value)?),
                    _ => {}
                }
            }

            Ok(Some(Step::Turn {
                indication: required("turn", "indication", indication)?,
                name,
                lat: required("turn", "lat", lat)?,
                lon: required("turn", "lon", lon)?,
            }))
        }

        b"point" => {
            let mut lat = None;
            let mut lon = None;

            for attr in start.attributes() {
                let attr = attr.map_err(quick_xml::Error::from)?;
                match attr.key.as_ref() {
                    b"lat" => lat = Some(parse_number("point", "lat", &attr.value)?),
                    b"lon" => lon = Some(parse_number("point", "lon", &attr.value)?),
                    _ => {}
                }
            }

            Ok(Some(Step::Point {
                lat: required("point", "lat", lat)?,
                lon: required("point", "lon", lon)?,
            }))
        }

        other => {
            log::warn!(
                "skipping unknown element <{}>",
                String::from_utf8_lossy(other)
            );
            Ok(None)
        }
    }
}

fn parse_number<T: FromStr>(element: &'static str, key: &str, value: &[u8]) -> Result<T, Error> {
    from_utf8(value)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| Error::InvalidElement {
            element,
            reason: format!("invalid {}: {:?}", key, String::from_utf8_lossy(value)),
        })
}

fn required<T>(element: &'static str, key: &str, value: Option<T>) -> Result<T, Error> {
    value.ok_or_else(|| Error::InvalidElement {
        element,
        reason: format!("missing {}", key),
    })
}
