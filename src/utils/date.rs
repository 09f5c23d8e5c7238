//! Calendar dates for blog posts.
//!
//! Post dates are plain `YYYY-MM-DD` strings in `content.toml`. `PostDate`
//! parses and validates them, orders them for "newest first" listings, and
//! renders them for pages (`October 13, 2025`) and feeds (RFC 2822 / 3339).
//!
//! ```ignore
//! let date = PostDate::parse("2025-10-13").unwrap();
//! assert_eq!(date.to_long_date(), "October 13, 2025");
//! assert_eq!(date.to_rfc2822(), "Mon, 13 Oct 2025 00:00:00 GMT");
//! ```

use anyhow::{Result, bail};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A validated calendar date (UTC midnight when a time is needed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PostDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse `YYYY-MM-DD`. Anything else, or an impossible date, is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let date = Self::new(
            parse_digits(&bytes[0..4])?,
            u8::try_from(parse_digits(&bytes[5..7])?).ok()?,
            u8::try_from(parse_digits(&bytes[8..10])?).ok()?,
        );
        date.validate().ok()?;
        Some(date)
    }

    pub fn validate(self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            bail!("month is invalid: {}", self.month);
        }
        if self.day == 0 || self.day > Self::days_in_month(self.year, self.month) {
            bail!("day is invalid: {}", self.day);
        }
        Ok(())
    }

    #[inline]
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// US-style long date used on post pages: `October 13, 2025`.
    pub fn to_long_date(self) -> String {
        format!(
            "{} {}, {}",
            MONTH_NAMES[usize::from(self.month - 1)],
            self.day,
            self.year
        )
    }

    /// RFC 3339 at midnight UTC, for Atom feeds.
    pub fn to_rfc3339(self) -> String {
        format!("{self}T00:00:00Z")
    }

    /// RFC 2822 at midnight UTC, for RSS feeds.
    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
        format!(
            "{}, {:02} {} {:04} 00:00:00 GMT",
            WEEKDAYS[self.weekday_index()],
            self.day,
            &MONTH_NAMES[usize::from(self.month - 1)][..3],
            self.year
        )
    }

    /// Zeller's congruence, 0 = Saturday.
    #[allow(clippy::cast_sign_loss)]
    fn weekday_index(self) -> usize {
        let (y, m) = if self.month < 3 {
            (i32::from(self.year) - 1, i32::from(self.month) + 12)
        } else {
            (i32::from(self.year), i32::from(self.month))
        };
        let d = i32::from(self.day);
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parse a run of ASCII digits.
#[inline]
fn parse_digits(bytes: &[u8]) -> Option<u16> {
    bytes.iter().try_fold(0u16, |acc, &b| {
        let d = b.wrapping_sub(b'0');
        (d <= 9).then(|| acc * 10 + u16::from(d))
    })
}
