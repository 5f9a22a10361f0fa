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

//! # Booking Payload
//!
//! Side-effect free assembly of the booking POST body.

use serde::{Deserialize, Serialize};

/// Passenger identity, contact and payment fields. Opaque to this tool's
/// logic: supplied externally and passed through unchanged into the booking
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelerProfile {
    pub name: String,
    pub surname: String,
    pub title: String,
    pub phone: String,
    /// Unix timestamp, seconds.
    pub birthday: i64,
    /// Travel document expiration, unix timestamp in seconds.
    pub expiration: i64,
    pub cardno: String,
    pub nationality: String,
    pub email: String,
    pub category: String,
}

/// Body of the booking POST: fixed locale/currency/customer constants, the
/// bag count, the traveler wrapped in a one-element passenger list and the
/// chosen flight's booking token.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub lang: String,
    pub bags: u32,
    pub passengers: Vec<TravelerProfile>,
    pub locale: String,
    pub currency: String,
    #[serde(rename = "customerLoginID")]
    pub customer_login_id: String,
    #[serde(rename = "customerLoginName")]
    pub customer_login_name: String,
    pub booking_token: String,
    pub affily: String,
    pub booked_at: String,
}

impl BookingRequest {
    pub fn new(booking_token: String, bags: u32, traveler: TravelerProfile) -> Self {
        Self {
            lang: "en".to_string(),
            bags,
            passengers: vec![traveler],
            locale: "en".to_string(),
            currency: "gbp".to_string(),
            customer_login_id: "unknown".to_string(),
            customer_login_name: "unknown".to_string(),
            booking_token,
            affily: "affil_id".to_string(),
            booked_at: "affil_id".to_string(),
        }
    }
}

/// Successful booking response.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfirmation {
    pub booking_id: String,
}
