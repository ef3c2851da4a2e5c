use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use projectile_motion::compute_with_intervals;
use projectile_motion::config::{AppConfig, load_config};
use projectile_motion::core::validate::validate_intervals;
use projectile_motion::input::{self, Launch, RawInputs};
use projectile_motion::plot::{render_png, timestamped_path};
use projectile_motion::report::{Run, format_comparison, format_summary, write_samples_csv};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Projectile trajectory under constant gravity on the planets of the solar system",
    after_help = "Values not given as flags are prompted for on stdin.\n\
                  Example: projectile_motion --body 3 --height 0 --velocity 20 --angle 45"
)]
struct Cli {
    /// Body ordinal: 1 Mercury, 2 Venus, 3 Earth, 4 Mars, 5 Jupiter, 6 Saturn, 7 Uranus, 8 Neptune
    #[arg(long, allow_hyphen_values = true)]
    body: Option<String>,

    /// Initial height in meters
    #[arg(long, allow_hyphen_values = true)]
    height: Option<String>,

    /// Initial velocity in m/s
    #[arg(long, allow_hyphen_values = true)]
    velocity: Option<String>,

    /// Launch angle in degrees above horizontal, 0 to 90
    #[arg(long, allow_hyphen_values = true)]
    angle: Option<String>,

    /// Number of equal time intervals to sample (overrides the config file)
    #[arg(long)]
    intervals: Option<usize>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Compute the same launch on every body and compare
    #[arg(long, default_value_t = false)]
    all_bodies: bool,

    /// PNG output path (defaults to a timestamped file in the configured output directory)
    #[arg(long)]
    plot_output: Option<PathBuf>,

    /// Skip rendering the plot
    #[arg(long, default_value_t = false)]
    no_plot: bool,

    /// Write every sample to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("could not load config '{}'", path.display()))?,
        None => AppConfig::default(),
    };
    let table = config.gravity()?;
    let intervals = validate_intervals(cli.intervals.unwrap_or(config.time_intervals))?;

    let raw = RawInputs {
        body: cli.body,
        height: cli.height,
        velocity: cli.velocity,
        angle: cli.angle,
    };
    let mut reader = io::stdin().lock();
    let mut writer = io::stdout();
    let launches: Vec<Launch> = if cli.all_bodies {
        input::collect_all_bodies(raw, &table, &mut reader, &mut writer)?
    } else {
        vec![input::collect(raw, &table, &mut reader, &mut writer)?]
    };

    let runs: Vec<Run> = launches
        .into_iter()
        .map(|launch| Run {
            body: launch.body,
            params: launch.params,
            result: compute_with_intervals(&launch.params, intervals),
        })
        .collect();

    println!();
    if cli.all_bodies {
        print!("{}", format_comparison(&runs));
    } else {
        for run in &runs {
            print!("{}", format_summary(run));
        }
    }

    if let Some(path) = &cli.csv {
        let file = File::create(path)
            .with_context(|| format!("could not create '{}'", path.display()))?;
        write_samples_csv(BufWriter::new(file), &runs)?;
        println!("Samples written to {}", path.display());
    }

    if !cli.no_plot {
        let path = cli
            .plot_output
            .unwrap_or_else(|| timestamped_path(&config.plot.output_dir, &Local::now()));
        render_png(&path, &runs, (config.plot.width, config.plot.height))?;
        println!("Plot saved to {}", path.display());
    }

    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_negative_looking_values_for_validation() {
        let cli = Cli::try_parse_from(["projectile_motion", "--velocity", "-1"]).unwrap();
        assert_eq!(cli.velocity.as_deref(), Some("-1"));
    }

    #[test]
    fn flags_default_to_prompting_and_plotting() {
        let cli = Cli::try_parse_from(["projectile_motion"]).unwrap();
        assert!(cli.body.is_none());
        assert!(!cli.no_plot);
        assert!(!cli.all_bodies);
    }
}
