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

//! # Flights Query Builder
//!
//! Side-effect free construction of the search filter sent as query
//! parameters to the fares API.

use anyhow::{Result, ensure};
use chrono::NaiveDate;

/// Date format the fares API expects on the wire.
pub const WIRE_DATE_FORMAT: &str = "%d/%m/%Y";

const PARTNER_TAG: &str = "picky";

/// Optimization key used to pick one candidate from the search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Cheapest,
    Fastest,
}

impl Criterion {
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Cheapest => "cheapest",
            Criterion::Fastest => "fastest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trip {
    OneWay,
    RoundTrip,
}

impl Trip {
    /// Value of the `typeFlight` query parameter.
    pub fn wire_value(self) -> &'static str {
        match self {
            Trip::OneWay => "oneway",
            Trip::RoundTrip => "round",
        }
    }
}

/// Validated, normalized search criteria. Built once at startup, immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub fly_from: String,
    pub to: String,
    pub departure_date: NaiveDate,
    /// Nights to stay in the destination. `None` means a one-way trip.
    pub returning_nights: Option<u32>,
    pub criterion: Criterion,
    pub direct_only: bool,
    pub bags: u32,
}

impl SearchConfig {
    pub fn builder(fly_from: String, to: String, departure_date: NaiveDate) -> SearchConfigBuilder {
        SearchConfigBuilder {
            fly_from,
            to,
            departure_date,
            returning_nights: None,
            criterion: Criterion::Cheapest,
            direct_only: false,
            bags: 0,
        }
    }

    /// The trip type is derived from the presence of a stay length, so the
    /// one-way/round-trip states can never both be active.
    pub fn trip_type(&self) -> Trip {
        if self.returning_nights.is_some() {
            Trip::RoundTrip
        } else {
            Trip::OneWay
        }
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.fly_from.is_empty(), "Origin airport is required");
        ensure!(!self.to.is_empty(), "Destination airport is required");
        Ok(())
    }
}

#[derive(Clone)]
pub struct SearchConfigBuilder {
    fly_from: String,
    to: String,
    departure_date: NaiveDate,
    returning_nights: Option<u32>,
    criterion: Criterion,
    direct_only: bool,
    bags: u32,
}

impl SearchConfigBuilder {
    pub fn returning_nights(mut self, nights: u32) -> Self {
        self.returning_nights = Some(nights);
        self
    }

    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn direct_only(mut self, direct_only: bool) -> Self {
        self.direct_only = direct_only;
        self
    }

    pub fn bags(mut self, bags: u32) -> Self {
        self.bags = bags;
        self
    }

    pub fn build(self) -> Result<SearchConfig> {
        let config = SearchConfig {
            fly_from: self.fly_from,
            to: self.to,
            departure_date: self.departure_date,
            returning_nights: self.returning_nights,
            criterion: self.criterion,
            direct_only: self.direct_only,
            bags: self.bags,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Query filter derived deterministically from a [`SearchConfig`].
/// Consumed by exactly one search call.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    pub fly_from: String,
    pub to: String,
    pub date_from: String,
    pub date_to: String,
    pub partner: &'static str,
    pub direct_flights: u8,
    /// Narrows the results to one cheapest flight per destination city.
    /// Set exactly when the criterion is [`Criterion::Cheapest`].
    pub one_for_city: u8,
    pub type_flight: &'static str,
    pub days_in_destination: Option<u32>,
}

impl SearchFilter {
    pub fn from_config(config: &SearchConfig) -> Self {
        let date = config.departure_date.format(WIRE_DATE_FORMAT).to_string();
        Self {
            fly_from: config.fly_from.clone(),
            to: config.to.clone(),
            date_from: date.clone(),
            date_to: date,
            partner: PARTNER_TAG,
            direct_flights: config.direct_only as u8,
            one_for_city: (config.criterion == Criterion::Cheapest) as u8,
            type_flight: config.trip_type().wire_value(),
            days_in_destination: config.returning_nights,
        }
    }

    /// Query parameters in wire order. The stay-length range is omitted
    /// entirely for one-way trips.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("flyFrom", self.fly_from.clone()),
            ("to", self.to.clone()),
            ("dateFrom", self.date_from.clone()),
            ("dateTo", self.date_to.clone()),
            ("partner", self.partner.to_string()),
            ("directFlights", self.direct_flights.to_string()),
            ("oneforcity", self.one_for_city.to_string()),
            ("typeFlight", self.type_flight.to_string()),
        ];
        if let Some(nights) = self.days_in_destination {
            pairs.push(("daysInDestinationFrom", nights.to_string()));
            pairs.push(("daysInDestinationTo", nights.to_string()));
        }
        pairs
    }

    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
