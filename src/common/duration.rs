use lazy_static::lazy_static;
use regex::Regex;
use time::OffsetDateTime;
use tracing::debug;

use crate::engine::GiveawayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
pub enum DurationUnit {
    #[strum(serialize = "m")]
    Minutes,
    #[strum(serialize = "h")]
    Hours,
    #[strum(serialize = "d")]
    Days,
}

impl DurationUnit {
    pub fn millis(self) -> u64 {
        match self {
            DurationUnit::Minutes => 60 * 1000,
            DurationUnit::Hours => 60 * 60 * 1000,
            DurationUnit::Days => 24 * 60 * 60 * 1000,
        }
    }
}

/// A giveaway duration such as `30m`, `1h` or `7d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GiveawayDuration {
    millis: u64,
}

impl GiveawayDuration {
    pub fn parse(string: &str) -> Result<GiveawayDuration, GiveawayError> {
        debug!("Parsing duration: {}", string);

        lazy_static! {
            static ref DURATION_REGEX: Regex = Regex::new(r"^([0-9]+)([hmd])$").unwrap();
        }

        let invalid = || GiveawayError::InvalidDuration(string.to_string());

        let captures = DURATION_REGEX.captures(string).ok_or_else(invalid)?;
        let value = captures[1].parse::<u64>().map_err(|_| invalid())?;
        let unit = captures[2]
            .parse::<DurationUnit>()
            .map_err(|_| invalid())?;

        if value == 0 {
            return Err(invalid());
        }

        let millis = value.checked_mul(unit.millis()).ok_or_else(invalid)?;
        debug!("Parsed duration: {} {} ({}ms)", value, unit, millis);
        Ok(GiveawayDuration { millis })
    }

    pub fn as_millis(&self) -> u64 {
        self.millis
    }

    pub fn to_std(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.millis)
    }

    /// The instant this duration ends if it starts at `start`, if representable.
    pub fn end_from(&self, start: OffsetDateTime) -> Option<OffsetDateTime> {
        let millis = i64::try_from(self.millis).ok()?;
        start.checked_add(time::Duration::milliseconds(millis))
    }
}
