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

//! End-to-end tests for the search and booking calls against local HTTP
//! doubles. Every network-visible behavior is exercised here: candidate
//! extraction, the empty-result path, transport failures and booking
//! submission.
//!
//! Run with:
//!     cargo test --test t_search_booking_mock

use chrono::NaiveDate;
use farebird_booking_agent::{
    ApiError, BookingRequest, Criterion, FareApiClient, SearchConfig, SearchFilter,
    TravelerProfile, select_best,
};
use mockito::{Matcher, Server, ServerGuard};

const TWO_CANDIDATES: &str = r#"{
    "data": [
        {
            "flyFrom": "LHR",
            "flyTo": "PRG",
            "price": 100,
            "duration": {"total": 300},
            "fly_duration": "0h 05m",
            "booking_token": "tok-a"
        },
        {
            "flyFrom": "LHR",
            "flyTo": "PRG",
            "price": 80,
            "duration": {"total": 500},
            "fly_duration": "0h 08m",
            "booking_token": "tok-b"
        }
    ]
}"#;

fn sample_filter(criterion: Criterion) -> SearchFilter {
    let config = SearchConfig::builder(
        "LHR".to_string(),
        "PRG".to_string(),
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
    )
    .criterion(criterion)
    .build()
    .unwrap();
    SearchFilter::from_config(&config)
}

fn sample_traveler() -> TravelerProfile {
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

fn client_for(server: &ServerGuard) -> FareApiClient {
    FareApiClient::new(
        format!("{}/flights", server.url()),
        format!("{}/booking", server.url()),
        5,
    )
    .expect("build client")
}

#[tokio::test]
async fn test_search_sends_filter_and_extracts_candidates() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/flights")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("flyFrom".into(), "LHR".into()),
            Matcher::UrlEncoded("to".into(), "PRG".into()),
            Matcher::UrlEncoded("dateFrom".into(), "01/05/2026".into()),
            Matcher::UrlEncoded("partner".into(), "picky".into()),
            Matcher::UrlEncoded("oneforcity".into(), "1".into()),
            Matcher::UrlEncoded("typeFlight".into(), "oneway".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TWO_CANDIDATES)
        .create_async()
        .await;

    let client = client_for(&server);
    let candidates = client
        .search_flights(&sample_filter(Criterion::Cheapest))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].booking_token, "tok-a");
    assert_eq!(candidates[1].price, 80.0);
}

#[tokio::test]
async fn test_selection_over_live_parsed_candidates() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/flights")
        .with_status(200)
        .with_body(TWO_CANDIDATES)
        .create_async()
        .await;

    let client = client_for(&server);

    let candidates = client
        .search_flights(&sample_filter(Criterion::Cheapest))
        .await
        .unwrap();
    let cheapest = select_best(candidates, Criterion::Cheapest).unwrap();
    assert_eq!(cheapest.booking_token, "tok-b");

    let candidates = client
        .search_flights(&sample_filter(Criterion::Fastest))
        .await
        .unwrap();
    let fastest = select_best(candidates, Criterion::Fastest).unwrap();
    assert_eq!(fastest.booking_token, "tok-a");
}

#[tokio::test]
async fn test_empty_candidate_array_skips_booking() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/flights")
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;
    let booking_mock = server
        .mock("POST", "/booking")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let candidates = client
        .search_flights(&sample_filter(Criterion::Cheapest))
        .await
        .unwrap();

    assert!(candidates.is_empty());
    assert!(select_best(candidates, Criterion::Cheapest).is_none());
    booking_mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_data_field_is_an_empty_result() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/flights")
        .with_status(200)
        .with_body(r#"{"search_id": "xyz"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let candidates = client
        .search_flights(&sample_filter(Criterion::Cheapest))
        .await
        .unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_non_2xx_search_is_an_http_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/flights")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client
        .search_flights(&sample_filter(Criterion::Cheapest))
        .await
        .unwrap_err();

    match error {
        ApiError::Http {
            status,
            body_preview,
        } => {
            assert_eq!(status, 502);
            assert!(body_preview.contains("bad gateway"));
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_search_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/flights")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client
        .search_flights(&sample_filter(Criterion::Cheapest))
        .await
        .unwrap_err();
    assert!(matches!(error, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_a_network_error() {
    let server = Server::new_async().await;
    let dead_url = server.url();
    drop(server);

    let client = FareApiClient::new(
        format!("{}/flights", dead_url),
        format!("{}/booking", dead_url),
        5,
    )
    .expect("build client");

    let error = client
        .search_flights(&sample_filter(Criterion::Cheapest))
        .await
        .unwrap_err();
    assert!(matches!(error, ApiError::Network(_)));
    assert_eq!(
        error.to_string(),
        "Failed to establish connection, check your internet settings and try again"
    );
}

#[tokio::test]
async fn test_booking_submits_payload_and_returns_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/booking")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "lang": "en",
            "locale": "en",
            "currency": "gbp",
            "bags": 2,
            "booking_token": "tok-b",
            "customerLoginID": "unknown",
            "passengers": [{"name": "test", "nationality": "CZ"}]
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"booking_id": "abc123"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = BookingRequest::new("tok-b".to_string(), 2, sample_traveler());
    let confirmation = client.book_flight(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(confirmation.booking_id, "abc123");
}

#[tokio::test]
async fn test_booking_http_error_is_terminal() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/booking")
        .with_status(500)
        .with_body("booking backend down")
        .create_async()
        .await;

    let client = client_for(&server);
    let request = BookingRequest::new("tok".to_string(), 0, sample_traveler());
    let error = client.book_flight(&request).await.unwrap_err();

    assert!(matches!(error, ApiError::Http { status: 500, .. }));
}
