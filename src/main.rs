use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use turnsheet::reader::{FileFormat, Options, DEFAULT_SPEED};
use turnsheet::{Translate, Translation, UnitSystem};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct RouteLoadError(PathBuf, #[source] turnsheet::Error);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Units {
    /// Pick the units customary for the locale's region
    Auto,
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Auto,
    Xml,
    XmlGz,
    XmlBz2,
}

#[derive(Parser)]
struct Cli {
    /// The path to the route file
    route_file: PathBuf,

    /// Locale of the instructions, e.g. "en_US" or "de_DE"
    #[arg(short, long, default_value = "en_US")]
    locale: String,

    /// Path to a .properties file with translations, overriding the built-in ones
    #[arg(short, long)]
    translations: Option<PathBuf>,

    /// Units of distance labels
    #[arg(short, long, value_enum, default_value_t = Units::Auto)]
    units: Units,

    /// Travel speed in km/h, if not provided by the route file
    #[arg(short, long, default_value_t = DEFAULT_SPEED)]
    speed: f64,

    /// Format of the route file
    #[arg(short, long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Log debugging information
    #[arg(short, long)]
    verbose: bool,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    colog::default_builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let tr = match cli.translations {
        Some(ref path) => Translation::from_properties(&cli.locale, &fs::read_to_string(path)?)?,
        None => Translation::for_locale(&cli.locale),
    };

    let units = match cli.units {
        Units::Auto => UnitSystem::for_country(tr.country()),
        Units::Metric => UnitSystem::Metric,
        Units::Imperial => UnitSystem::Imperial,
    };

    let options = Options {
        file_format: match cli.format {
            Format::Auto => FileFormat::Unknown,
            Format::Xml => FileFormat::Xml,
            Format::XmlGz => FileFormat::XmlGz,
            Format::XmlBz2 => FileFormat::XmlBz2,
        },
        speed: cli.speed,
    };

    let instructions = load_route(&options, &cli.route_file)?;

    let descriptions = instructions.descriptions(&tr)?;
    let distances = instructions.distance_labels(&tr, units);
    let times = instructions.time_labels(&tr);
    let points = instructions.segment_start_points();

    for (idx, description) in descriptions.iter().enumerate() {
        let [lat, lon] = points[idx];
        println!(
            "{}. {} ({}, {}) @ {:.6},{:.6}",
            idx + 1,
            description,
            distances[idx],
            times[idx],
            lat,
            lon,
        );
    }

    Ok(())
}

fn load_route<P: AsRef<Path>>(
    options: &Options,
    path: P,
) -> Result<turnsheet::InstructionList, RouteLoadError> {
    match turnsheet::reader::load_from_file(options, path.as_ref()) {
        Ok(l) => Ok(l),
        Err(e) => Err(RouteLoadError(PathBuf::from(path.as_ref()), e)),
    }
}
