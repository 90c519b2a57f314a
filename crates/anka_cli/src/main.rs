use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use serde::Serialize;

use anka_base::Gender;
use anka_engine::{NumerologyReading, ReadingConfig, full_reading};

mod input;

use input::validate_input;

#[derive(Parser)]
#[command(name = "anka", about = "Vedic numerology reading CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full numerology reading
    Reading {
        /// Full name
        #[arg(long)]
        name: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: String,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
        /// First year of the luck projection (defaults to the current year)
        #[arg(long)]
        anchor_year: Option<i32>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Serialize)]
struct SuccessResponse<'a> {
    success: bool,
    name: &'a str,
    date_of_birth: &'a str,
    gender: Gender,
    #[serde(flatten)]
    reading: NumerologyReading,
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Reading { name, dob, gender, anchor_year, pretty } => {
            let today = Local::now().date_naive();
            let request = match validate_input(&name, &dob, &gender, today) {
                Ok(request) => request,
                Err(e) => {
                    let body = ErrorResponse { success: false, error: e.to_string() };
                    println!("{}", serde_json::to_string(&body).expect("serialize error body"));
                    std::process::exit(1);
                }
            };

            let config = ReadingConfig::for_year(anchor_year.unwrap_or_else(|| today.year()));
            let reading = full_reading(&request.birth, request.gender, &request.name, &config);
            let response = SuccessResponse {
                success: true,
                name: &request.name,
                date_of_birth: &dob,
                gender: request.gender,
                reading,
            };

            let body = if pretty {
                serde_json::to_string_pretty(&response)
            } else {
                serde_json::to_string(&response)
            };
            println!("{}", body.expect("serialize reading"));
        }
    }
}
