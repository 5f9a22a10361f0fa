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

//! # Flights Results Parser
//!
//! Side-effect free JSON decoding of the fares API search response.

use serde::{Deserialize, Serialize};

/// Duration breakdown of one candidate, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightDuration {
    pub total: i64,
}

/// One flight offer returned by the search call. Carries the opaque
/// booking token required by the booking call. Fields this tool does not
/// consume are ignored during decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "flyFrom")]
    pub fly_from: String,
    #[serde(rename = "flyTo")]
    pub fly_to: String,
    pub price: f64,
    pub duration: FlightDuration,
    /// Human-readable outbound duration, e.g. "2h 30m".
    #[serde(default)]
    pub fly_duration: Option<String>,
    /// Present only for round trips.
    #[serde(default)]
    pub return_duration: Option<String>,
    pub booking_token: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Candidate>,
}

/// Extracts the candidate array from a search response body. An absent or
/// empty `data` field is an empty list, not an error.
pub fn parse_search_response(body: &str) -> Result<Vec<Candidate>, serde_json::Error> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.data)
}
