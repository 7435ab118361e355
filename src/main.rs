use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use bearing_convert::batch::{write_csv, write_csv_file};
use bearing_convert::{
    BatchConverter, Converter, Direction, ProfileName, PromptSession, Quadrant,
    QuadrantBearing, Result,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "bearing-convert", about = "Convert between polar and rectangular survey coordinates")]
struct Cli {
    #[arg(long, value_enum, default_value_t = ProfileName::Survey, help = "Angle unit, normalization and validation preset")]
    profile: ProfileName,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert one polar coordinate (distance, bearing) to northing/easting
    Polar {
        #[arg(allow_negative_numbers = true)]
        distance: f64,
        #[arg(allow_negative_numbers = true)]
        angle: f64,
    },
    /// Convert one northing/easting pair to distance and bearing
    Rect {
        #[arg(allow_negative_numbers = true)]
        northing: f64,
        #[arg(allow_negative_numbers = true)]
        easting: f64,
    },
    /// Convert a file of `<number>, <number>` lines
    Batch {
        #[arg(long, value_enum)]
        direction: Direction,

        #[arg(long, help = "Input file; standard input when omitted")]
        input: Option<PathBuf>,

        #[arg(long, help = "CSV output file; standard output when omitted")]
        output: Option<PathBuf>,

        #[arg(long, help = "Convert lines on all cores")]
        parallel: bool,
    },
    /// Enter coordinates at prompts
    Interactive,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let profile = cli.profile.profile();

    match cli.command {
        Command::Polar { distance, angle } => {
            let converter = Converter::new(profile);
            let polar = converter.polar(distance, angle)?;
            let rect = converter.polar_to_rect(&polar)?;

            println!("Input:    {}", polar);
            println!("Output:   {}", rect);
            println!("Quadrant: {}", Quadrant::of(&rect));
            println!("Bearing:  {}", QuadrantBearing::of(&polar));
        }
        Command::Rect { northing, easting } => {
            let converter = Converter::new(profile);
            let rect = converter.rect(northing, easting)?;
            let polar = converter.rect_to_polar(&rect);

            println!("Input:    {}", rect);
            println!("Output:   {}", polar);
            println!("Quadrant: {}", Quadrant::of(&rect));
            println!("Bearing:  {}", QuadrantBearing::of(&polar));
        }
        Command::Batch {
            direction,
            input,
            output,
            parallel,
        } => {
            let text = match input {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut buffer = String::new();
                    io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };

            let converter = BatchConverter::new(direction, profile);
            let report = if parallel {
                converter.convert_text_parallel(&text)
            } else {
                converter.convert_text(&text)
            };

            for warning in &report.warnings {
                eprintln!("Warning: skipped {}", warning);
            }

            if report.nothing_to_process() {
                eprintln!("No coordinates to process");
                return Ok(());
            }

            match output {
                Some(path) => {
                    write_csv_file(&report, &path)?;
                    eprintln!(
                        "Processed {} of {} lines into {}",
                        report.successful(),
                        report.total(),
                        path.display()
                    );
                }
                None => write_csv(&report, io::stdout().lock())?,
            }
        }
        Command::Interactive => {
            let stdin = io::stdin();
            let mut session = PromptSession::new(stdin.lock(), io::stdout(), profile);
            let collected = session.collect()?;

            let converter = BatchConverter::new(collected.direction, profile);
            let mut out = session.into_output();
            let report = converter.convert_sequence(&collected.coordinates);

            if report.nothing_to_process() {
                writeln!(out, "No coordinates to process")?;
            }
            for row in &report.rows {
                writeln!(out, "{}", row)?;
            }
        }
    }

    Ok(())
}
