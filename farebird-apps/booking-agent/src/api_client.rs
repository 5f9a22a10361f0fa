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

//! # Fares API Client
//!
//! Effectful (network) operations against the fares search and booking
//! endpoints. One request per call, no retries; failures come back as
//! tagged [`ApiError`] values and the caller decides how they terminate
//! the run.

use crate::booking_payload::{BookingConfirmation, BookingRequest};
use crate::flights_query_builder::SearchFilter;
use crate::flights_results_parser::{Candidate, parse_search_response};
use std::time::Duration;
use thiserror::Error;
use wreq::redirect::Policy;

const BODY_PREVIEW_CHARS: usize = 500;

/// Transport failure taxonomy shared by the search and booking calls.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to build HTTP client")]
    Build(#[source] wreq::Error),

    #[error("Failed to establish connection, check your internet settings and try again")]
    Network(#[source] wreq::Error),

    #[error("Connection timed out")]
    Timeout(#[source] wreq::Error),

    #[error("HTTP error {status}: {body_preview}")]
    Http { status: u16, body_preview: String },

    #[error("Malformed response body")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    fn from_transport(error: wreq::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout(error)
        } else {
            ApiError::Network(error)
        }
    }
}

#[derive(Clone)]
pub struct FareApiClient {
    client: wreq::Client,
    search_url: String,
    booking_url: String,
}

impl FareApiClient {
    pub fn new(
        search_url: impl Into<String>,
        booking_url: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, ApiError> {
        let client = wreq::Client::builder()
            .redirect(Policy::default())
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(ApiError::Build)?;
        Ok(Self {
            client,
            search_url: search_url.into(),
            booking_url: booking_url.into(),
        })
    }

    /// One GET against the search endpoint with the filter as query
    /// parameters. An absent or empty candidate array in the response is an
    /// empty list, not an error.
    pub async fn search_flights(&self, filter: &SearchFilter) -> Result<Vec<Candidate>, ApiError> {
        let url = format!("{}?{}", self.search_url, filter.to_query_string());
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from_transport)?;
        let body = read_success_body(response).await?;

        let candidates = parse_search_response(&body).map_err(ApiError::Decode)?;
        tracing::debug!("Search returned {} candidate(s)", candidates.len());
        Ok(candidates)
    }

    /// One POST against the booking endpoint.
    pub async fn book_flight(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, ApiError> {
        tracing::debug!("POST {}", self.booking_url);

        let response = self
            .client
            .post(&self.booking_url)
            .json(request)
            .send()
            .await
            .map_err(ApiError::from_transport)?;
        let body = read_success_body(response).await?;

        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}

async fn read_success_body(response: wreq::Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(ApiError::from_transport)?;

    tracing::debug!(
        "HTTP Status: {} {}, body {} bytes",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown"),
        body.len()
    );

    if !status.is_success() {
        let body_preview = body.chars().take(BODY_PREVIEW_CHARS).collect();
        return Err(ApiError::Http {
            status: status.as_u16(),
            body_preview,
        });
    }
    Ok(body)
}
