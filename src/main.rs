use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use caddie::advisor::{Advice, Caddie, Lie, NegativeDistancePolicy, WindDirection};
use caddie::config::{FileConfig, load_bag, load_course, load_round_scores};
use caddie::domain::{Club, CourseData, HoleData, Position};
use caddie::geometry::{Scale, format_distance};
use caddie::round::Round;
use caddie::score::Scorecard;

/// On-course caddie: distance to the pin, plays-like yardage and club advice
///
/// Examples:
///   # Advice from the tee of hole 1 on the default course
///   caddie
///
///   # Approach on hole 4 into a stiff headwind, slightly uphill
///   caddie --hole 4 --x 70 --y 40 --wind-speed 12 --wind-direction headwind --elevation 3
///
///   # Your own course and bag, plus the scorecard so far
///   caddie --course links.json --bag my-bag.json --scorecard round.json
///
///   # Use a config file
///   caddie --config my-caddie.toml
#[derive(Parser, Debug)]
#[command(name = "caddie")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches caddie.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Course JSON file (defaults to the built-in 18-hole layout)
    #[arg(long)]
    course: Option<PathBuf>,

    /// Club bag JSON file (defaults to the standard 16-club bag)
    #[arg(long)]
    bag: Option<PathBuf>,

    /// Hole number
    #[arg(long)]
    hole: Option<u8>,

    /// Ball position across the map, in map units (use with --y)
    #[arg(long, requires = "y", allow_hyphen_values = true)]
    x: Option<f64>,

    /// Ball position down the map, in map units (use with --x)
    #[arg(long, requires = "x", allow_hyphen_values = true)]
    y: Option<f64>,

    /// Wind speed in mph
    #[arg(long)]
    wind_speed: Option<f64>,

    /// Wind direction: headwind, tailwind, left to right, right to left, none
    #[arg(long)]
    wind_direction: Option<String>,

    /// Elevation change in percent, uphill positive
    #[arg(long, allow_hyphen_values = true)]
    elevation: Option<f64>,

    /// Lie: fairway, rough, thick rough, sand, tee, hardpan, pine straw, uphill, downhill
    #[arg(long)]
    lie: Option<String>,

    /// Yards per map unit
    #[arg(long)]
    yards_per_unit: Option<f64>,

    /// What to do when the plays-like distance comes out negative
    #[arg(long)]
    negative_distance: Option<NegativeDistancePolicy>,

    /// Round scores JSON ({"scores": [...], "stats": {...}}) to summarise
    #[arg(long)]
    scorecard: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file_config = if let Some(ref config_path) = args.config {
        if !config_path.exists() {
            bail!("Config file not found: {:?}", config_path);
        }
        FileConfig::from_path(config_path)
            .context(format!("Failed to load config file: {:?}", config_path))?
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let verbose = args.verbose || file_config.verbose;
    let hole_number = args.hole.or(file_config.hole).unwrap_or(1);
    let yards_per_unit = args.yards_per_unit.unwrap_or(file_config.yards_per_unit);
    let policy = args
        .negative_distance
        .unwrap_or(file_config.negative_distance);

    let mut conditions = file_config.conditions;
    if let Some(speed) = args.wind_speed {
        conditions.wind_mph = speed;
    }
    if let Some(ref direction) = args.wind_direction {
        conditions.wind = WindDirection::from_label(direction);
    }
    if let Some(elevation) = args.elevation {
        conditions.elevation_percent = elevation;
    }
    if let Some(ref lie) = args.lie {
        conditions.lie = Lie::from_label(lie);
    }

    let course_path = args.course.clone().or(file_config.course.clone());
    let bag_path = args.bag.clone().or(file_config.bag.clone());

    let course = match course_path {
        Some(ref path) => {
            load_course(path).context(format!("Failed to load course: {:?}", path))?
        }
        None => CourseData::default_layout(),
    };
    let bag = match bag_path {
        Some(ref path) => load_bag(path).context(format!("Failed to load bag: {:?}", path))?,
        None => Club::default_bag(),
    };

    let scale = Scale::new(yards_per_unit).context("Invalid --yards-per-unit")?;
    let caddie = Caddie::new(scale, policy);
    let hole = course.hole(hole_number)?;

    let mut round = Round::start(hole);
    if let (Some(x), Some(y)) = (args.x, args.y) {
        round.set_position(Position::new(x, y));
    }

    if verbose {
        println!("Configuration:");
        match course_path {
            Some(ref path) => println!("  Course: {}", path.display()),
            None => println!("  Course: default layout"),
        }
        match bag_path {
            Some(ref path) => println!("  Bag: {} ({} clubs)", path.display(), bag.len()),
            None => println!("  Bag: standard ({} clubs)", bag.len()),
        }
        println!("  Scale: {} yards per map unit", scale.yards_per_unit());
        println!("  Negative distances: {:?}", policy);
        println!("  Wind: {} mph {}", conditions.wind_mph, conditions.wind);
        println!("  Elevation: {}%", conditions.elevation_percent);
        println!("  Lie: {}", conditions.lie);
        println!();
    }

    let advice = caddie
        .advise(hole, round.position(), &bag, &conditions)
        .context("Failed to compute shot advice")?;
    print_advice(hole, &advice);

    if let Some(ref path) = args.scorecard {
        let scores =
            load_round_scores(path).context(format!("Failed to load scorecard: {:?}", path))?;
        let card = Scorecard::from_round(course.pars(), scores);
        println!();
        print_scorecard(&card);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "caddie=debug" } else { "caddie=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_advice(hole: &HoleData, advice: &Advice<'_>) {
    println!(
        "Hole {} • Par {} • {}",
        hole.number,
        hole.par,
        format_distance(hole.distance as i32, "yards")
    );
    println!();
    println!(
        "Distance to pin: {}",
        format_distance(advice.distance_yards, "yards")
    );
    println!(
        "Plays like:      {}",
        format_distance(advice.plays_like_yards, "yards")
    );
    println!();

    match advice.clubs.recommended {
        Some(club) => {
            println!("Recommended club: {}", club.name);
            println!("  {}", average_label(club));
        }
        None => println!("No club in the bag has a recorded distance"),
    }
    if !advice.clubs.alternatives.is_empty() {
        println!("Alternatives:");
        for club in &advice.clubs.alternatives {
            println!("  {} - {}", club.name, average_label(club));
        }
    }
    println!();
    println!("Strategy: {}", advice.strategy);
}

fn average_label(club: &Club) -> String {
    format!("Your avg: {:.0} yards", club.average_distance)
}

fn print_scorecard(card: &Scorecard) {
    let summary = card.summary();

    println!("Scorecard");
    println!("=========");
    println!(
        "  Score: {} ({}) through {} holes",
        summary.total_score,
        summary.relative_to_par_text(),
        summary.holes_played
    );
    println!(
        "  Front nine: {} (par {})",
        summary.front_nine.score, summary.front_nine.par
    );
    println!(
        "  Back nine:  {} (par {})",
        summary.back_nine.score, summary.back_nine.par
    );
    println!("  Fairways hit: {}%", summary.fairways_hit_pct);
    println!("  Greens in regulation: {}%", summary.greens_in_regulation_pct);
    match summary.average_putts {
        Some(avg) => println!("  Putts per hole: {:.1}", avg),
        None => println!("  Putts per hole: -"),
    }

    let holes: Vec<String> = card
        .hole_classes()
        .iter()
        .zip(card.scores())
        .enumerate()
        .filter_map(|(i, (class, score))| {
            Some(format!("{}:{} {}", i + 1, (*score)?, class.as_ref()?.as_str()))
        })
        .collect();
    if !holes.is_empty() {
        println!("  Holes: {}", holes.join(", "));
    }
}
