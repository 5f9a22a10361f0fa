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

//! # Flights Selection
//!
//! Picks the single best candidate from the search results.

use crate::flights_query_builder::Criterion;
use crate::flights_results_parser::Candidate;

/// Returns the best candidate for the given criterion, or `None` when the
/// list is empty. A single candidate is trivially both the cheapest and the
/// fastest.
pub fn select_best(candidates: Vec<Candidate>, criterion: Criterion) -> Option<Candidate> {
    if candidates.is_empty() {
        return None;
    }
    if candidates.len() == 1 {
        return candidates.into_iter().next();
    }
    Some(match criterion {
        Criterion::Cheapest => find_cheapest(candidates),
        Criterion::Fastest => find_fastest(candidates),
    })
}

// The scans below seed the running best from the first element, so callers
// must never hand them an empty list; `select_best` routes that case.

/// Single left-to-right scan keyed on price. Ties keep the first seen.
fn find_cheapest(candidates: Vec<Candidate>) -> Candidate {
    let mut iter = candidates.into_iter();
    let mut cheapest = iter.next().expect("non-empty candidate list");
    for candidate in iter {
        if candidate.price < cheapest.price {
            cheapest = candidate;
        }
    }
    cheapest
}

/// Identical scan keyed on total duration, same tie policy.
fn find_fastest(candidates: Vec<Candidate>) -> Candidate {
    let mut iter = candidates.into_iter();
    let mut fastest = iter.next().expect("non-empty candidate list");
    for candidate in iter {
        if candidate.duration.total < fastest.duration.total {
            fastest = candidate;
        }
    }
    fastest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flights_results_parser::FlightDuration;

    fn candidate(token: &str, price: f64, total_seconds: i64) -> Candidate {
        Candidate {
            fly_from: "LHR".to_string(),
            fly_to: "PRG".to_string(),
            price,
            duration: FlightDuration {
                total: total_seconds,
            },
            fly_duration: None,
            return_duration: None,
            booking_token: token.to_string(),
        }
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        assert!(select_best(Vec::new(), Criterion::Cheapest).is_none());
        assert!(select_best(Vec::new(), Criterion::Fastest).is_none());
    }

    #[test]
    fn test_single_candidate_wins_under_either_criterion() {
        let only = candidate("solo", 199.0, 7200);
        let picked = select_best(vec![only.clone()], Criterion::Cheapest).unwrap();
        assert_eq!(picked.booking_token, "solo");
        let picked = select_best(vec![only], Criterion::Fastest).unwrap();
        assert_eq!(picked.booking_token, "solo");
    }

    #[test]
    fn test_cheapest_picks_minimum_price() {
        // Scenario: {price 100, duration 300} vs {price 80, duration 500}.
        let candidates = vec![candidate("a", 100.0, 300), candidate("b", 80.0, 500)];
        let picked = select_best(candidates, Criterion::Cheapest).unwrap();
        assert_eq!(picked.booking_token, "b");
        assert_eq!(picked.price, 80.0);
    }

    #[test]
    fn test_fastest_picks_minimum_duration() {
        let candidates = vec![candidate("a", 100.0, 300), candidate("b", 80.0, 500)];
        let picked = select_best(candidates, Criterion::Fastest).unwrap();
        assert_eq!(picked.booking_token, "a");
        assert_eq!(picked.duration.total, 300);
    }

    #[test]
    fn test_price_ties_keep_the_first_seen() {
        let candidates = vec![
            candidate("first", 50.0, 900),
            candidate("second", 50.0, 100),
            candidate("third", 50.0, 500),
        ];
        let picked = select_best(candidates, Criterion::Cheapest).unwrap();
        assert_eq!(picked.booking_token, "first");
    }

    #[test]
    fn test_duration_ties_keep_the_first_seen() {
        let candidates = vec![
            candidate("first", 90.0, 300),
            candidate("second", 10.0, 300),
        ];
        let picked = select_best(candidates, Criterion::Fastest).unwrap();
        assert_eq!(picked.booking_token, "first");
    }

    #[test]
    fn test_minimum_in_any_position() {
        let candidates = vec![
            candidate("a", 70.0, 400),
            candidate("b", 95.0, 200),
            candidate("c", 40.0, 800),
            candidate("d", 60.0, 600),
        ];
        let picked = select_best(candidates.clone(), Criterion::Cheapest).unwrap();
        assert_eq!(picked.booking_token, "c");
        let picked = select_best(candidates, Criterion::Fastest).unwrap();
        assert_eq!(picked.booking_token, "b");
    }
}
