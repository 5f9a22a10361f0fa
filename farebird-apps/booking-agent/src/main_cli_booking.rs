//!  Farebird Booking Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! CLI for flight search and booking.
//!
//! # Examples
//!
//! ```bash
//! # Cheapest one-way flight, the default
//! farebird-book --date 01/05/2026 --flight_from LHR --to PRG
//!
//! # Fastest direct return trip with 7 nights at the destination and 2 bags
//! farebird-book --date 01/05/2026 --flight_from LHR --to PRG \
//!     --returning 7 --fastest --direct --bags 2
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use farebird_booking_agent::{
    BookingDecision, BookingRequest, Candidate, Criterion, FareApiClient, SearchConfig,
    SearchFilter, TravelerProfile, Trip, WIRE_DATE_FORMAT, confirm_booking, select_best,
};

/// Production fares endpoint for flight search.
const SEARCH_URI: &str = "https://api.skypicker.com/flights";

/// Mock booking endpoint. Before pointing this at the production endpoint, a
/// check-flights step verifying actual price and availability would have to
/// run prior to saving the booking.
const BOOKING_URI: &str =
    "https://private-anon-7a22d853a6-skypickerbookingapi1.apiary-mock.com/api/v0.1/save_booking?v=2";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "farebird-book")]
#[command(author, version, about = "Search for a flight and book it", long_about = None)]
struct CliArgs {
    /// Departure date in "dd/mm/yyyy" format
    #[arg(long, value_parser = parse_wire_date)]
    date: NaiveDate,

    /// Departure airport IATA code
    #[arg(long = "flight_from")]
    flight_from: String,

    /// Destination airport IATA code
    #[arg(long)]
    to: String,

    /// Search only for a one-way ticket, default option
    #[arg(long = "one_way", conflicts_with = "returning")]
    one_way: bool,

    /// Number of nights to stay in destination
    #[arg(long)]
    returning: Option<u32>,

    /// Search for the cheapest flight, default option
    #[arg(long, conflicts_with = "fastest")]
    cheapest: bool,

    /// Search for the fastest flight
    #[arg(long)]
    fastest: bool,

    /// Search only for direct flights
    #[arg(long)]
    direct: bool,

    /// How many big luggage pieces you will carry
    #[arg(long, default_value = "0")]
    bags: u32,

    /// Show the search URL without making any request
    #[arg(long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Configure logging based on verbosity level
fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn parse_wire_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, WIRE_DATE_FORMAT)
        .map_err(|_| format!("Invalid date: {}. Use dd/mm/yyyy", s))
}

/// Format a duration given in seconds as hours/minutes.
fn fmt_duration(seconds: i64) -> String {
    let hrs = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    if hrs == 0 {
        format!("{}m", mins)
    } else if mins == 0 {
        format!("{}h", hrs)
    } else {
        format!("{}h {:02}m", hrs, mins)
    }
}

/// Get terminal width for the separator bars
fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(100)
}

fn dash_bar() -> String {
    "-".repeat(get_terminal_width().min(60))
}

/// Test traveler details. In a production-like scenario these would come
/// from a user profile or a form completed on a webpage.
fn test_traveler() -> TravelerProfile {
    TravelerProfile {
        name: "test".to_string(),
        surname: "test".to_string(),
        title: "ms".to_string(),
        phone: "+44 45662344432".to_string(),
        birthday: 326246400,
        expiration: 1760054400,
        cardno: "XXXXXXXX".to_string(),
        nationality: "CZ".to_string(),
        email: "email.address@gmail.com".to_string(),
        category: "adults".to_string(),
    }
}

fn search_message(config: &SearchConfig) {
    println!(
        "Searching for {}, {} flight, from {} to {}",
        config.criterion.label(),
        config.trip_type().wire_value(),
        config.fly_from,
        config.to
    );
}

/// Details block for the flight about to be booked
fn render_selection(flight: &Candidate, round_trip: bool) {
    println!("\n{}", dash_bar());
    println!("Flight from: {}", flight.fly_from);
    println!("To: {}", flight.fly_to);
    println!("Price: {} EUR", flight.price);
    let outbound = flight
        .fly_duration
        .clone()
        .unwrap_or_else(|| fmt_duration(flight.duration.total));
    println!("Flight duration: {}", outbound);
    if round_trip {
        if let Some(return_duration) = &flight.return_duration {
            println!("Return duration: {}", return_duration);
        }
    }
    println!("{}", dash_bar());
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    // Leaf operations return tagged failures; this is the single place that
    // translates one into an exit code.
    if let Err(error) = run(args).await {
        eprintln!("{:#}", error);
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> Result<()> {
    tracing::info!("Starting farebird-book CLI");
    tracing::debug!("Args: {:?}", args);

    // Cheapest is the default unless the fastest flight was explicitly
    // requested, regardless of the --cheapest flag itself.
    let criterion = if args.fastest {
        Criterion::Fastest
    } else {
        Criterion::Cheapest
    };

    let mut builder = SearchConfig::builder(
        args.flight_from.to_uppercase(),
        args.to.to_uppercase(),
        args.date,
    )
    .criterion(criterion)
    .direct_only(args.direct)
    .bags(args.bags);
    if let Some(nights) = args.returning {
        builder = builder.returning_nights(nights);
    }
    let config = builder
        .build()
        .context("Failed to build search configuration")?;
    let filter = SearchFilter::from_config(&config);

    if args.dry_run {
        println!(
            "🔗 Search URL:\n{}?{}",
            SEARCH_URI,
            filter.to_query_string()
        );
        return Ok(());
    }

    search_message(&config);

    let client = FareApiClient::new(SEARCH_URI, BOOKING_URI, REQUEST_TIMEOUT_SECS)?;
    let candidates = client.search_flights(&filter).await?;
    tracing::info!("Search returned {} candidate(s)", candidates.len());

    let Some(flight) = select_best(candidates, config.criterion) else {
        println!("No suitable flights were found based on your criteria");
        return Ok(());
    };

    render_selection(&flight, config.trip_type() == Trip::RoundTrip);

    println!();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let decision =
        confirm_booking(&mut input, &mut output).context("Failed to read confirmation")?;

    if decision == BookingDecision::Declined {
        println!("Flight wasn't booked");
        return Ok(());
    }

    let request = BookingRequest::new(flight.booking_token.clone(), config.bags, test_traveler());
    println!("\nBooking flight with {} bags", request.bags);

    let confirmation = client.book_flight(&request).await?;
    println!(
        "Your flight was booked, booking id: {}",
        confirmation.booking_id
    );
    Ok(())
}
