use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use seaway::config::FileConfig;
use seaway::domain::{Coordinate, MaritimeRoute};
use seaway::land::LandStatus;
use seaway::{LandSource, MaritimeRoutingService};

/// Plan sea routes that steer around land, using canals where they pay off
///
/// Examples:
///   # Singapore to Rotterdam over a Natural Earth land file
///   seaway --from 103.85,1.29 --to 4.47,51.91 --land ne_10m_land.geojson
///
///   # Fetch the land dataset over HTTP and write the route to a file
///   seaway --from -74.0,40.7 --to -9.1,38.7 --land https://example.org/land.geojson -o route.json
///
///   # Direct line only, no land check
///   seaway --from 103.8,1.35 --to 103.9,1.43 --no-avoid-land
#[derive(Parser, Debug)]
#[command(name = "seaway")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches seaway.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start position as LON,LAT in degrees
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    from: Coordinate,

    /// End position as LON,LAT in degrees
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    to: Coordinate,

    /// Land dataset (GeoJSON file path or http(s) URL)
    #[arg(short = 'l', long)]
    land: Option<String>,

    /// Route straight through, ignoring land
    #[arg(long)]
    no_avoid_land: bool,

    /// Never route through canals
    #[arg(long)]
    no_canals: bool,

    /// Warn when the route exceeds this multiple of the direct distance
    #[arg(long)]
    max_detour_factor: Option<f64>,

    /// Kilometres per escape step
    #[arg(long)]
    precision: Option<f64>,

    /// Safety margin around land in kilometres
    #[arg(long)]
    buffer_km: Option<f64>,

    /// Output JSON file path (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (lon, lat) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LON,LAT, got '{}'", s))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| format!("invalid longitude '{}': {}", lon, e))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("invalid latitude '{}': {}", lat, e))?;
    Coordinate::new(lon, lat)
        .validate()
        .map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config: FileConfig = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let verbose = args.verbose || file_config.verbose;
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut engine = file_config.engine;
    if let Some(buffer_km) = args.buffer_km {
        if !buffer_km.is_finite() || buffer_km < 0.0 {
            bail!("--buffer-km must be a non-negative number, got {}", buffer_km);
        }
        engine = engine.with_buffer_km(buffer_km);
    }

    let mut options = file_config.route;
    if args.no_avoid_land {
        options = options.with_avoid_land(false);
    }
    if args.no_canals {
        options = options.with_canals(false);
    }
    if let Some(factor) = args.max_detour_factor {
        options = options.with_max_detour_factor(factor);
    }
    if let Some(precision) = args.precision {
        if precision <= 0.0 {
            bail!("--precision must be positive, got {}", precision);
        }
        options = options.with_precision(precision);
    }

    let land = args.land.clone().or(file_config.land);
    let output = args.output.clone().or(file_config.output);

    eprintln!("seaway - Maritime Route Planner");
    eprintln!("===============================");
    eprintln!();

    if verbose {
        eprintln!("Configuration:");
        eprintln!("  From: ({:.4}, {:.4})", args.from.lon, args.from.lat);
        eprintln!("  To: ({:.4}, {:.4})", args.to.lon, args.to.lat);
        eprintln!("  Land: {}", land.as_deref().unwrap_or("none"));
        eprintln!("  Avoid land: {}", options.avoid_land);
        eprintln!("  Canals: {}", options.use_canals);
        eprintln!("  Buffer: {} km", engine.buffer_km);
        eprintln!("  Precision: {} km", options.precision);
        eprintln!("  Max detour factor: {}", options.max_detour_factor);
        eprintln!();
    }

    let service = MaritimeRoutingService::new(engine);

    match land {
        Some(ref land) => {
            let source = LandSource::parse(land);
            let spinner = create_spinner(&format!("Loading land data from {}...", source));
            let start = Instant::now();
            service.load_land(&source);
            let model = service.land();
            match &model.status {
                LandStatus::Loaded => spinner.finish_with_message(format!(
                    "Loaded {} land polygons [{:.1}s]",
                    model.land.len(),
                    start.elapsed().as_secs_f32()
                )),
                LandStatus::Unavailable(reason) => {
                    spinner.finish_with_message(format!("Land data unavailable: {}", reason))
                }
            }
        }
        None if options.avoid_land => {
            eprintln!("No land dataset given; the route will be a direct line");
        }
        None => {}
    }

    let spinner = create_spinner("Computing route...");
    let start = Instant::now();
    let route = service.calculate_maritime_route(args.from, args.to, Some(options));
    spinner.finish_with_message(format!(
        "Computed route with {} points [{:.1}s]",
        route.coordinates.len(),
        start.elapsed().as_secs_f32()
    ));

    eprintln!();
    print_summary(&route);

    let json = serde_json::to_string_pretty(&route).context("Failed to serialize route")?;
    match output {
        Some(ref path) => {
            std::fs::write(path, json)
                .context(format!("Failed to write route file: {:?}", path))?;
            eprintln!();
            eprintln!("Output: {}", path.display());
        }
        None => println!("{}", json),
    }

    eprintln!();
    eprintln!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn print_summary(route: &MaritimeRoute) {
    eprintln!("Route summary");
    eprintln!("=============");
    eprintln!("  Distance: {:.1} km", route.distance);
    eprintln!(
        "  Estimated time: {:.1} h ({:.1} days)",
        route.estimated_time,
        route.estimated_time / 24.0
    );
    if let Some(ref canal) = route.canal {
        eprintln!("  Canal: {}", canal);
    }
    if !route.waypoints.is_empty() {
        eprintln!("  Waypoints:");
        for waypoint in &route.waypoints {
            eprintln!(
                "    {} ({:.3}, {:.3})",
                waypoint.name, waypoint.coordinate.lon, waypoint.coordinate.lat
            );
        }
    }
    for warning in &route.warnings {
        eprintln!("  Warning: {}", warning);
    }
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
