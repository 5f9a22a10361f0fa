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

//! # Booking Prompt
//!
//! Interactive confirmation protocol, over injected reader/writer handles.

use std::io::{BufRead, Write};

/// Upper bound on confirmation prompts before the run counts as declined.
pub const MAX_PROMPT_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingDecision {
    Proceed,
    Declined,
}

/// Prompts until the answer is exactly `y` or `n`, case-insensitively, with
/// surrounding whitespace trimmed. Anything else re-prompts, up to
/// [`MAX_PROMPT_ATTEMPTS`] times. Exhausting the attempts, or hitting end of
/// input, counts as a decline: booking never proceeds without an explicit yes.
pub fn confirm_booking(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<BookingDecision> {
    for _ in 0..MAX_PROMPT_ATTEMPTS {
        write!(output, "Do you wish to book the flight? y/n: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(BookingDecision::Declined);
        }
        match line.trim().to_lowercase().as_str() {
            "y" => return Ok(BookingDecision::Proceed),
            "n" => return Ok(BookingDecision::Declined),
            _ => {}
        }
    }
    Ok(BookingDecision::Declined)
}
