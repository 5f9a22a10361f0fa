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

// Library for the farebird booking agent
// CLI flight search and booking against the fares API

mod api_client;
mod booking_payload;
mod booking_prompt;
mod flights_query_builder;
mod flights_results_parser;
mod flights_selection;

pub use api_client::{ApiError, FareApiClient};

pub use booking_payload::{BookingConfirmation, BookingRequest, TravelerProfile};

pub use booking_prompt::{BookingDecision, MAX_PROMPT_ATTEMPTS, confirm_booking};

pub use flights_query_builder::{
    Criterion, SearchConfig, SearchConfigBuilder, SearchFilter, Trip, WIRE_DATE_FORMAT,
};

pub use flights_results_parser::{Candidate, FlightDuration, parse_search_response};

pub use flights_selection::select_best;
