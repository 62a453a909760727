use clap::{Parser, Subcommand};
use starscan::cli::{
    self, CliError, DetailOptions, ReportOptions, ScanOptions, SummaryOptions,
};
use starscan::Profile;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "starscan")]
#[command(about = "Starscan - search CRC facility profiles for keys and values")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the whole profile and list matching fields
    Scan {
        /// Profile JSON file (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Substring to look for in keys and string values
        #[arg(short, long, default_value = "altimeter")]
        pattern: String,

        /// Match keys only, ignoring string values
        #[arg(long)]
        keys_only: bool,

        /// Treat the pattern as a regular expression
        #[arg(long)]
        regex: bool,

        /// Only list matches whose path contains this substring
        #[arg(long, default_value = "starsConfiguration")]
        within: String,

        /// Maximum number of matches to list
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Truncate listed values to this many characters
        #[arg(long, default_value_t = 200)]
        truncate: usize,
    },

    /// Per-facility match counts over starsConfiguration
    Summary {
        /// Profile JSON file (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Substring to look for in keys
        #[arg(short, long, default_value = "altimeter")]
        pattern: String,

        /// Truncate listed values to this many characters
        #[arg(long, default_value_t = 100)]
        truncate: usize,
    },

    /// Full match listing for selected facilities
    Detail {
        /// Profile JSON file (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Facility id to detail (repeatable)
        #[arg(short, long = "facility")]
        facilities: Vec<String>,

        /// Substring to look for in keys
        #[arg(short, long, default_value = "altimeter")]
        pattern: String,
    },

    /// Profile-wide report with per-facility summary and totals
    Report {
        /// Profile JSON file (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Facility id to highlight with its matching paths (repeatable)
        #[arg(short, long = "facility")]
        facilities: Vec<String>,

        /// Substring to look for in keys
        #[arg(short, long, default_value = "altimeter")]
        pattern: String,
    },

    /// List the profile's child facilities
    Facilities {
        /// Profile JSON file (reads from stdin if not provided)
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Scan {
            file,
            pattern,
            keys_only,
            regex,
            within,
            limit,
            truncate,
        } => {
            let profile = load_profile(file)?;
            let options = ScanOptions {
                pattern,
                keys_only,
                regex,
                within,
                limit,
                truncate,
            };
            print!("{}", cli::render_scan(&profile, &options)?);
        }
        Commands::Summary {
            file,
            pattern,
            truncate,
        } => {
            let profile = load_profile(file)?;
            let options = SummaryOptions { pattern, truncate };
            print!("{}", cli::render_summary(&profile, &options));
        }
        Commands::Detail {
            file,
            facilities,
            pattern,
        } => {
            let profile = load_profile(file)?;
            let options = DetailOptions {
                ids: facilities,
                pattern,
            };
            print!("{}", cli::render_detail(&profile, &options));
        }
        Commands::Report {
            file,
            facilities,
            pattern,
        } => {
            let profile = load_profile(file)?;
            let options = ReportOptions {
                facilities,
                pattern,
            };
            print!("{}", cli::render_report(&profile, &options));
        }
        Commands::Facilities { file } => {
            let profile = load_profile(file)?;
            print!("{}", cli::render_facilities(&profile));
        }
    }
    Ok(())
}

fn load_profile(file: Option<PathBuf>) -> Result<Profile, CliError> {
    match file {
        Some(path) => Ok(Profile::load(&path)?),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(Profile::from_json_str("<stdin>", &buffer)?)
        }
        None => Err(CliError::NoInput),
    }
}
