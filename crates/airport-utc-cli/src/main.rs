//! `iata2utc` — convert local airport (or zone) time to UTC from the shell.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use airport_utc::{airport_info, all_airports, Converter};

#[derive(Parser)]
#[command(name = "iata2utc", version, about = "Local civil time at an airport to UTC")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a local timestamp to UTC
    Convert(ConvertArgs),
    /// Show timezone and geographic metadata for an airport
    Info {
        /// Three-letter IATA code
        iata: String,
        /// Emit JSON instead of the human-readable form
        #[arg(long)]
        json: bool,
    },
    /// List all airports in the bundled mapping
    List,
}

#[derive(Args)]
struct ConvertArgs {
    /// Local timestamp, YYYY-MM-DDTHH:mm or YYYY-MM-DDTHH:mm:ss
    timestamp: String,
    /// Interpret the timestamp at this airport
    #[arg(long, conflicts_with = "zone", required_unless_present = "zone")]
    airport: Option<String>,
    /// Interpret the timestamp in this IANA timezone
    #[arg(long)]
    zone: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert(args) => {
            let converter = Converter::new();
            let utc = match (&args.airport, &args.zone) {
                (Some(iata), _) => converter.convert_to_utc(&args.timestamp, iata)?,
                (None, Some(zone)) => {
                    converter.convert_local_to_utc_by_zone(&args.timestamp, zone)?
                }
                // clap enforces that one of the two is present
                (None, None) => unreachable!(),
            };
            println!("{utc}");
        }
        Command::Info { iata, json } => {
            let info = airport_info(&iata)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{} ({}, {}, {})", info.name, info.city, info.country_name, info.continent);
                println!("timezone:  {}", info.timezone);
                println!("latitude:  {}", info.latitude);
                println!("longitude: {}", info.longitude);
            }
        }
        Command::List => {
            for airport in all_airports() {
                println!("{}  {:28} {}", airport.iata, airport.info.timezone, airport.info.name);
            }
        }
    }
    Ok(())
}
