use clap::{Parser, Subcommand, ValueEnum};
use libcoords::{
    links::{BingMapStyle, BingMapsLink, GoogleMapType, GoogleMapsLink},
    version, CoordinateParser,
};
use std::{
    error::Error,
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
};
use tracing::{debug, info};

/// Recognize geographic coordinates written as decimal degrees or degrees/minutes/seconds.
#[derive(Debug, Parser)]
#[command(name = version::name(), version)]
struct Args {
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level (error, warn, info, debug, trace); RUST_LOG takes precedence"
    )]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every degree/minute/second coordinate found in the input
    Find {
        /// File to read; standard input when omitted
        file: Option<PathBuf>,

        #[arg(long, help = "Print matches as a JSON array")]
        json: bool,
    },
    /// Convert each argument, which must hold exactly one coordinate pair
    Retrieve {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Replace coordinates in the input with links to an online map
    Replace {
        /// File to read; standard input when omitted
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Provider::Google)]
        provider: Provider,

        #[arg(long = "map-type", value_enum, default_value_t = MapType::Hybrid)]
        map_type: MapType,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Provider {
    Google,
    Bing,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MapType {
    /// Street map
    Map,
    /// Satellite or aerial imagery
    Satellite,
    /// Imagery with street labels
    Hybrid,
    /// Relief map (Google only)
    Terrain,
}

fn main() {
    let args = Args::parse();
    setup_logging(&args.log_level);
    debug!(program = %version::describe(), "starting");

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(log_level: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "libcoords={},{}={}",
            log_level,
            version::name(),
            log_level
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn read_input(file: Option<PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => {
            info!(path = %path.display(), "reading input");
            fs::read_to_string(path)
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let parser = CoordinateParser::default();

    match args.command {
        Command::Find { file, json } => {
            let text = read_input(file)?;
            let matches = parser.find_matches(&text)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                for m in &matches {
                    println!("{}..{}\t{}\t{}", m.start, m.end, m.text, m.coordinate);
                }
            }
        }
        Command::Retrieve { text } => {
            let mut failures = 0;
            for t in &text {
                match parser.retrieve_lat_long(t) {
                    Ok(coordinate) => println!("{}", coordinate.join(",")),
                    Err(e) => {
                        eprintln!("{}", e);
                        failures += 1;
                    }
                }
            }
            if failures > 0 {
                return Err(format!("{} of {} inputs not recognized", failures, text.len()).into());
            }
        }
        Command::Replace {
            file,
            provider,
            map_type,
        } => {
            let text = read_input(file)?;
            let replaced = match provider {
                Provider::Google => {
                    let map_type = match map_type {
                        MapType::Map => GoogleMapType::Map,
                        MapType::Satellite => GoogleMapType::Satellite,
                        MapType::Hybrid => GoogleMapType::Hybrid,
                        MapType::Terrain => GoogleMapType::Terrain,
                    };
                    parser.replace(&text, &GoogleMapsLink::new(map_type))?
                }
                Provider::Bing => {
                    let style = match map_type {
                        MapType::Map => BingMapStyle::Road,
                        MapType::Satellite => BingMapStyle::Aerial,
                        MapType::Hybrid => BingMapStyle::Hybrid,
                        MapType::Terrain => {
                            return Err("Bing maps have no terrain style".into());
                        }
                    };
                    parser.replace(&text, &BingMapsLink::new(style))?
                }
            };
            println!("{}", replaced);
        }
    }

    Ok(())
}
