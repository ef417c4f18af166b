// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! ISO-8601 durations (`Edm.Duration`).
//!
//! Calendar components (years, months) are kept separate from the clock
//! components because they have no fixed length; `to_std` only converts
//! durations that do not use them.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// An ISO-8601 duration such as `P1DT2H30M` or `-PT0.25S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl IsoDuration {
    /// Build a clock duration from a millisecond count.
    pub fn from_millis(total: u64) -> Self {
        let millis = (total % 1000) as u32;
        let total_secs = total / 1000;
        let seconds = (total_secs % 60) as u32;
        let total_mins = total_secs / 60;
        let minutes = (total_mins % 60) as u32;
        let total_hours = total_mins / 60;
        Self {
            hours: (total_hours % 24) as u32,
            days: (total_hours / 24).min(u64::from(u32::MAX)) as u32,
            minutes,
            seconds,
            millis,
            ..Self::default()
        }
    }

    /// True when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.millis == 0
    }

    /// Convert to a `std::time::Duration`.
    ///
    /// Returns `None` for negative durations and for durations that use
    /// years or months.
    pub fn to_std(&self) -> Option<Duration> {
        if self.negative || self.years != 0 || self.months != 0 {
            return None;
        }
        let days = u64::from(self.weeks) * 7 + u64::from(self.days);
        let secs = days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds);
        Some(Duration::from_secs(secs) + Duration::from_millis(u64::from(self.millis)))
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        for (amount, unit) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if amount > 0 {
                write!(f, "{}{}", amount, unit)?;
            }
        }
        if self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.millis == 0 {
            return Ok(());
        }
        f.write_str("T")?;
        if self.hours > 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes > 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if self.millis > 0 {
            let frac = format!("{:03}", self.millis);
            write!(f, "{}.{}S", self.seconds, frac.trim_end_matches('0'))?;
        } else if self.seconds > 0 {
            write!(f, "{}S", self.seconds)?;
        }
        Ok(())
    }
}

impl FromStr for IsoDuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Duration(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let rest = rest.strip_prefix('P').ok_or_else(invalid)?;
        let (date_part, time_part) = match rest.split_once('T') {
            Some((date, time)) => {
                if time.is_empty() {
                    return Err(invalid());
                }
                (date, time)
            }
            None => (rest, ""),
        };
        if date_part.is_empty() && time_part.is_empty() {
            return Err(invalid());
        }

        let mut out = IsoDuration {
            negative,
            ..Self::default()
        };

        let mut number = String::new();
        for c in date_part.chars() {
            if c.is_ascii_digit() {
                number.push(c);
                continue;
            }
            let amount: u32 = number.parse().map_err(|_| invalid())?;
            match c {
                'Y' => out.years = amount,
                'M' => out.months = amount,
                'W' => out.weeks = amount,
                'D' => out.days = amount,
                _ => return Err(invalid()),
            }
            number.clear();
        }
        if !number.is_empty() {
            return Err(invalid());
        }

        for c in time_part.chars() {
            if c.is_ascii_digit() || c == '.' {
                number.push(c);
                continue;
            }
            match c {
                'H' => out.hours = number.parse().map_err(|_| invalid())?,
                'M' => out.minutes = number.parse().map_err(|_| invalid())?,
                'S' => {
                    let (whole, frac) = number.split_once('.').unwrap_or((number.as_str(), ""));
                    out.seconds = whole.parse().map_err(|_| invalid())?;
                    if !frac.is_empty() {
                        if !frac.bytes().all(|b| b.is_ascii_digit()) {
                            return Err(invalid());
                        }
                        // Millisecond precision; extra digits are truncated.
                        let mut digits: String = frac.chars().take(3).collect();
                        while digits.len() < 3 {
                            digits.push('0');
                        }
                        out.millis = digits.parse().map_err(|_| invalid())?;
                    }
                }
                _ => return Err(invalid()),
            }
            number.clear();
        }
        if !number.is_empty() {
            return Err(invalid());
        }

        Ok(out)
    }
}
