//! Evaluates the field of a charged rod at a single point.
//!
//! Usage: `line-field --start X,Y --end X,Y --charge Q --point X,Y [--segments N] [--codata]`

use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use em_linecharge::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "line-field")]
#[command(about = "Electric field of a uniformly charged rod at a point of interest")]
struct Args {
    /// Rod start as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    start: P2,

    /// Rod end as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    end: P2,

    /// Total rod charge in coulombs
    #[arg(long, allow_hyphen_values = true)]
    charge: f64,

    /// Point of interest as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    point: P2,

    /// Number of sub-segments
    #[arg(long, default_value_t = DEFAULT_SEGMENT_COUNT)]
    segments: usize,

    /// Use the CODATA vacuum permittivity instead of 8.85e-12 F/m
    #[arg(long)]
    codata: bool,
}

fn parse_point(s: &str) -> Result<P2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x coordinate `{x}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y coordinate `{y}`: {e}"))?;
    Ok(P2::new(x, y))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,em_linecharge=info"));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn run(args: &Args) -> Result<FieldSample, FieldError> {
    let base = if args.codata { LineChargeConfig::codata() } else { LineChargeConfig::default() };
    let config = base.with_segment_count(args.segments);
    let rod = LineChargeField::from_config(Segment::new(args.start, args.end)?, args.charge, &config)?;
    info!(
        length = rod.segment().length(),
        lambda = rod.linear_charge_density(),
        segments = rod.segment_count(),
        "rod ready"
    );
    rod.sample(args.point)
}

fn main() {
    init_logging();

    let args = Args::parse();

    match run(&args) {
        Ok(sample) => {
            println!(
                "Electric field at ({}, {}) is {} N/C",
                sample.point.x, sample.point.y, sample.magnitude
            );
            println!("  E = ({:.6e}, {:.6e}) N/C", sample.field.x, sample.field.y);
            match sample.direction() {
                Ok(d) => println!("  direction = ({:.6}, {:.6})", d.x, d.y),
                Err(e) => info!("{e}"),
            }
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
