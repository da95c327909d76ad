// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Conversion of [Instructions](Instruction) into localized, human-readable strings.
//!
//! All functions are pure: the output only depends on the instructions,
//! the [UnitSystem] and the provided [Translate] implementation.

use crate::{round, Error, Indication, Instruction, Translate, KM_MILE};

/// Units used for distance labels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// Meters and kilometers
    #[default]
    Metric,

    /// Feet and miles
    Imperial,
}

impl UnitSystem {
    /// Returns the customary unit system for a country with the provided
    /// [ISO 3166-1 alpha-2](https://en.wikipedia.org/wiki/ISO_3166-1_alpha-2) code.
    ///
    /// United Kingdom, Canada, Ireland, Australia, the Bahamas, India, and Malaysia
    /// still use some forms of the Imperial System, but are official Metric Nations.
    pub fn for_country(country: &str) -> Self {
        match country.to_ascii_uppercase().as_str() {
            "US" | "LR" | "MM" => Self::Imperial,
            _ => Self::Metric,
        }
    }
}

/// Formats a decimal number, always keeping at least one fractional digit (`1.0`, `0.95`).
fn decimal(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        format!("{}", x)
    }
}

/// Formats a distance in meters using thresholds to avoid noisy precision:
///
/// | Metric              | Label          | Imperial            | Label          |
/// |---------------------|----------------|---------------------|----------------|
/// | < 950 m             | `123 m`        | < 0.9 mi            | `1234 ft`      |
/// | < 100 km            | `12.34 km`     | < 100 mi            | `12.34 mi`     |
/// | otherwise           | `1234 km`      | otherwise           | `1234 mi`      |
pub fn format_distance<T: Translate + ?Sized>(meters: f64, units: UnitSystem, tr: &T) -> String {
    match units {
        UnitSystem::Metric => {
            if meters < 950.0 {
                format!("{} {}", round(meters, 0) as i64, tr.tr("mAbbr", &[]))
            } else if meters < 100_000.0 {
                format!("{} {}", decimal(round(meters / 1000.0, 2)), tr.tr("kmAbbr", &[]))
            } else {
                format!("{} {}", round(meters / 1000.0, 1) as i64, tr.tr("kmAbbr", &[]))
            }
        }

        UnitSystem::Imperial => {
            let miles = meters / 1000.0 / KM_MILE;
            if miles < 0.9 {
                format!("{} {}", round(miles * 5280.0, 0) as i64, tr.tr("ftAbbr", &[]))
            } else if miles < 100.0 {
                format!("{} {}", decimal(round(miles, 2)), tr.tr("miAbbr", &[]))
            } else {
                format!("{} {}", round(miles, 1) as i64, tr.tr("miAbbr", &[]))
            }
        }
    }
}

/// Formats a duration in milliseconds, cascading through minutes, hours and days.
///
/// Sub-minute durations are shown with a fractional number of minutes (`0.3 min`),
/// durations of at least an hour as `1 h 5 min`, and durations of at least a day
/// as `2 d 3 h`, without minutes. The hour remainder is rounded and may display as 24.
pub fn format_time<T: Translate + ?Sized>(millis: u64, tr: &T) -> String {
    let exact_minutes = millis as f64 / 60_000.0;
    let minutes = exact_minutes.round() as u64;

    if minutes >= 60 {
        let hours = minutes as f64 / 60.0;
        if hours >= 24.0 {
            let days = (hours / 24.0).floor() as u64;
            let hours = (hours % 24.0).round() as u64;
            format!(
                "{} {} {} {}",
                days,
                tr.tr("dayAbbr", &[]),
                hours,
                tr.tr("hourAbbr", &[])
            )
        } else {
            format!(
                "{} {} {} {}",
                hours.floor() as u64,
                tr.tr("hourAbbr", &[]),
                minutes % 60,
                tr.tr("minAbbr", &[])
            )
        }
    } else if minutes > 0 {
        format!("{} {}", minutes, tr.tr("minAbbr", &[]))
    } else {
        format!("{:.1} {}", round(exact_minutes, 1), tr.tr("minAbbr", &[]))
    }
}

/// Describes the maneuver of an [Instruction], e.g. "Turn slight left onto Main St".
///
/// Returns [Error::InvalidIndication] if the instruction's indication is not
/// one of the known [Indications](Indication).
pub fn describe<T: Translate + ?Sized>(instruction: &Instruction, tr: &T) -> Result<String, Error> {
    let name = instruction.name();
    let indication = Indication::try_from(instruction.indication())?;

    let description = match indication.direction_key() {
        None if name.is_empty() => tr.tr("continue", &[]),
        None => tr.tr("continue_onto", &[name]),
        Some(key) => {
            let direction = tr.tr(key, &[]);
            if name.is_empty() {
                tr.tr("turn", &[direction.as_str()])
            } else {
                tr.tr("turn_onto", &[direction.as_str(), name])
            }
        }
    };

    Ok(first_big(&description))
}

/// Upper-cases the first character of a string.
fn first_big(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats [Instruction::distance] of every instruction, see [format_distance].
pub fn distance_labels<T: Translate + ?Sized>(
    instructions: &[Instruction],
    units: UnitSystem,
    tr: &T,
) -> Vec<String> {
    instructions
        .iter()
        .map(|i| format_distance(i.distance(), units, tr))
        .collect()
}

/// Formats [Instruction::millis] of every instruction, see [format_time].
pub fn time_labels<T: Translate + ?Sized>(instructions: &[Instruction], tr: &T) -> Vec<String> {
    instructions
        .iter()
        .map(|i| format_time(i.millis(), tr))
        .collect()
}

/// Describes every instruction, see [describe].
/// Fails on the first instruction with an invalid indication.
pub fn descriptions<T: Translate + ?Sized>(
    instructions: &[Instruction],
    tr: &T,
) -> Result<Vec<String>, Error> {
    instructions.iter().map(|i| describe(i, tr)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Translation;

    /// Translation with full words, to tell apart the units in assertions.
    fn words() -> Translation {
        Translation::from_properties(
            "en_US",
            "mAbbr=m\nkmAbbr=km\nftAbbr=ft\nmiAbbr=mi\nminAbbr=min\nhourAbbr=hour\ndayAbbr=day\n\
             continue=continue\ncontinue_onto=continue onto %s\nturn=turn %s\nturn_onto=turn %s onto %s\n\
             sharp_left=sharp left\nleft=left\nslight_left=slight left\n\
             slight_right=slight right\nright=right\nsharp_right=sharp right\n",
        )
        .unwrap()
    }

    /// Echoes keys and arguments, e.g. `turn_onto(right,Main St)`.
    struct Echo;

    impl Translate for Echo {
        fn tr(&self, key: &str, args: &[&str]) -> String {
            if args.is_empty() {
                key.to_string()
            } else {
                format!("{}({})", key, args.join(","))
            }
        }

        fn country(&self) -> &str {
            ""
        }
    }

    fn miles(m: f64) -> f64 {
        m * KM_MILE * 1000.0
    }

    #[test]
    fn distance_metric() {
        let tr = words();
        let f = |d| format_distance(d, UnitSystem::Metric, &tr);

        assert_eq!(f(0.0), "0 m");
        assert_eq!(f(12.4), "12 m");
        assert_eq!(f(12.5), "13 m");
        assert_eq!(f(949.4), "949 m");
        assert_eq!(f(949.999), "950 m");
        assert_eq!(f(950.0), "0.95 km");
        assert_eq!(f(1000.0), "1.0 km");
        assert_eq!(f(1234.5), "1.23 km");
        assert_eq!(f(12_345.0), "12.35 km");
        assert_eq!(f(99_999.0), "100.0 km");
        assert_eq!(f(100_000.0), "100 km");
        assert_eq!(f(123_456.0), "123 km");
        assert_eq!(f(123_960.0), "124 km");
    }

    #[test]
    fn distance_imperial() {
        let tr = words();
        let f = |d| format_distance(d, UnitSystem::Imperial, &tr);

        assert_eq!(f(0.0), "0 ft");
        assert_eq!(f(miles(0.5)), "2640 ft");
        assert_eq!(f(miles(0.899999)), "4752 ft");
        assert_eq!(f(miles(0.9)), "0.9 mi");
        assert_eq!(f(miles(1.0)), "1.0 mi");
        assert_eq!(f(miles(12.345)), "12.35 mi");
        assert_eq!(f(miles(99.999)), "100.0 mi");
        assert_eq!(f(miles(100.0)), "100 mi");
        assert_eq!(f(miles(250.46)), "250 mi");
    }

    #[test]
    fn distance_approximates_input() {
        let tr = words();
        for d in [3.0, 17.7, 420.0, 949.0, 950.0, 5_000.0, 12_345.6, 99_000.0, 150_000.0] {
            let label = format_distance(d, UnitSystem::Metric, &tr);
            let (value, unit) = label.split_once(' ').unwrap();
            let value: f64 = value.parse().unwrap();
            let (meters, tolerance) = match unit {
                "m" => (value, 0.5),
                "km" if d < 100_000.0 => (value * 1000.0, 5.0),
                "km" => (value * 1000.0, 1000.0),
                _ => panic!("unexpected unit: {}", unit),
            };
            assert!((meters - d).abs() <= tolerance, "{} -> {}", d, label);
        }
    }

    #[test]
    fn time() {
        let tr = words();
        let f = |ms| format_time(ms, &tr);

        assert_eq!(f(0), "0.0 min");
        assert_eq!(f(3_000), "0.1 min");
        assert_eq!(f(15_000), "0.3 min");
        assert_eq!(f(20_000), "0.3 min");
        assert_eq!(f(21_000), "0.4 min");
        assert_eq!(f(27_000), "0.5 min");
        assert_eq!(f(29_999), "0.5 min");
        assert_eq!(f(30_000), "1 min");
        assert_eq!(f(59_999), "1 min");
        assert_eq!(f(5 * 60_000), "5 min");
        assert_eq!(f(59 * 60_000), "59 min");
        assert_eq!(f(60 * 60_000), "1 hour 0 min");
        assert_eq!(f(65 * 60_000), "1 hour 5 min");
        assert_eq!(f(23 * 3_600_000 + 59 * 60_000), "23 hour 59 min");
        assert_eq!(f(1440 * 60_000), "1 day 0 hour");
        assert_eq!(f(1440 * 60_000 + 150 * 60_000), "1 day 3 hour");
        assert_eq!(f(3 * 86_400_000 + 5 * 3_600_000 + 10 * 60_000), "3 day 5 hour");
    }

    #[test]
    fn time_hour_remainder_not_renormalized() {
        let tr = words();
        // 2879 minutes = 47.98 hours, the remainder rounds up to a full day
        assert_eq!(format_time(2879 * 60_000, &tr), "1 day 24 hour");
    }

    #[test]
    fn describe_instructions() {
        let tr = words();
        let d = |code, name: &str| describe(&Instruction::new(code, name, 0.0, 0, 0.0, 0.0), &tr);

        assert_eq!(d(0, "").unwrap(), "Continue");
        assert_eq!(d(0, "Main St").unwrap(), "Continue onto Main St");
        assert_eq!(d(2, "Oak Ave").unwrap(), "Turn right onto Oak Ave");
        assert_eq!(d(2, "").unwrap(), "Turn right");
        assert_eq!(d(-3, "").unwrap(), "Turn sharp left");
        assert_eq!(d(-2, "Elm St").unwrap(), "Turn left onto Elm St");
        assert_eq!(d(-1, "Elm St").unwrap(), "Turn slight left onto Elm St");
        assert_eq!(d(1, "").unwrap(), "Turn slight right");
        assert_eq!(d(3, "Pine Rd").unwrap(), "Turn sharp right onto Pine Rd");
        assert!(matches!(d(99, ""), Err(Error::InvalidIndication(99))));
        assert!(matches!(d(-4, "Main St"), Err(Error::InvalidIndication(-4))));
    }

    #[test]
    fn describe_with_echo() {
        let tr: &dyn Translate = &Echo;
        let d = |code, name: &str| describe(&Instruction::new(code, name, 0.0, 0, 0.0, 0.0), tr);

        assert_eq!(d(0, "").unwrap(), "Continue");
        assert_eq!(d(0, "Main St").unwrap(), "Continue_onto(Main St)");
        assert_eq!(d(2, "Oak Ave").unwrap(), "Turn_onto(right,Oak Ave)");
        assert_eq!(d(-1, "").unwrap(), "Turn(slight_left)");
        assert!(matches!(d(7, ""), Err(Error::InvalidIndication(7))));
    }

    #[test]
    fn distance_with_echo() {
        let tr: &dyn Translate = &Echo;
        assert_eq!(format_distance(12.0, UnitSystem::Metric, tr), "12 mAbbr");
        assert_eq!(format_distance(1500.0, UnitSystem::Metric, tr), "1.5 kmAbbr");
        assert_eq!(format_distance(miles(0.5), UnitSystem::Imperial, tr), "2640 ftAbbr");
        assert_eq!(format_distance(miles(150.0), UnitSystem::Imperial, tr), "150 miAbbr");
        assert_eq!(format_time(65 * 60_000, tr), "1 hourAbbr 5 minAbbr");
    }

    #[test]
    fn describe_german() {
        let tr = Translation::german();
        let i = Instruction::new(-3, "Hauptstraße", 0.0, 0, 0.0, 0.0);
        assert_eq!(describe(&i, &tr).unwrap(), "Scharf links abbiegen auf Hauptstraße");
        let i = Instruction::new(0, "", 0.0, 0, 0.0, 0.0);
        assert_eq!(describe(&i, &tr).unwrap(), "Geradeaus");
    }

    #[test]
    fn first_big_unicode() {
        assert_eq!(first_big(""), "");
        assert_eq!(first_big("ärger"), "Ärger");
        assert_eq!(first_big("Turn"), "Turn");
    }

    #[test]
    fn unit_system_for_country() {
        assert_eq!(UnitSystem::for_country("US"), UnitSystem::Imperial);
        assert_eq!(UnitSystem::for_country("us"), UnitSystem::Imperial);
        assert_eq!(UnitSystem::for_country("GB"), UnitSystem::Metric);
        assert_eq!(UnitSystem::for_country(""), UnitSystem::Metric);
    }
}
