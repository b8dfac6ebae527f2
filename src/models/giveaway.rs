use std::{fmt, num::ParseIntError, str::FromStr};

use time::OffsetDateTime;

use crate::engine::GiveawayError;

/// Identifier of a giveaway, which is the id of the message announcing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GiveawayId(pub u64);

impl fmt::Display for GiveawayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GiveawayId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(GiveawayId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The channel an announcement lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelRef(pub u64);

/// Winner count as typed by a user or passed as a number by a command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinnerCountInput {
    Text(String),
    Number(i64),
}

impl WinnerCountInput {
    pub fn parse(&self) -> Result<u32, GiveawayError> {
        let parsed = match self {
            WinnerCountInput::Text(text) => text.trim().parse::<u32>().ok(),
            WinnerCountInput::Number(number) => u32::try_from(*number).ok(),
        };

        match parsed {
            Some(count) if count > 0 => Ok(count),
            _ => Err(GiveawayError::InvalidWinnerCount(self.to_string())),
        }
    }
}

impl fmt::Display for WinnerCountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinnerCountInput::Text(text) => write!(f, "{text}"),
            WinnerCountInput::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for WinnerCountInput {
    fn from(value: &str) -> Self {
        WinnerCountInput::Text(value.to_string())
    }
}

impl From<String> for WinnerCountInput {
    fn from(value: String) -> Self {
        WinnerCountInput::Text(value)
    }
}

impl From<i64> for WinnerCountInput {
    fn from(value: i64) -> Self {
        WinnerCountInput::Number(value)
    }
}

/// Everything needed to open a giveaway, before any of it has been validated.
#[derive(Debug, Clone)]
pub struct GiveawayRequest {
    pub prize: String,
    pub duration: String,
    pub winners: WinnerCountInput,
    pub location: ChannelRef,
    pub host: MemberId,
    pub host_name: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Giveaway {
    pub id: GiveawayId,
    pub prize: String,
    pub number_of_winners: u32,
    pub ends_at: OffsetDateTime,
    pub participants: Vec<MemberId>,
    pub host: MemberId,
    pub host_name: String,
    pub location: ChannelRef,
    pub image: Option<String>,
}

impl Giveaway {
    pub fn end_time_ms(&self) -> i128 {
        self.ends_at.unix_timestamp_nanos() / 1_000_000
    }

    pub fn summary(&self) -> GiveawaySummary {
        GiveawaySummary {
            prize: self.prize.clone(),
            number_of_winners: self.number_of_winners,
            ends_at: self.ends_at,
            participants: self.participants.len(),
            host_name: self.host_name.clone(),
            image: self.image.clone(),
        }
    }
}

/// What an open giveaway announcement displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiveawaySummary {
    pub prize: String,
    pub number_of_winners: u32,
    pub ends_at: OffsetDateTime,
    pub participants: usize,
    pub host_name: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nobody entered, so there was nobody to draw from.
    NoParticipants,
    Winners(Vec<MemberId>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conclusion {
    pub id: GiveawayId,
    pub prize: String,
    pub outcome: Outcome,
    pub total_participants: usize,
    pub manual: bool,
    pub host: MemberId,
    pub host_name: String,
    pub location: ChannelRef,
}

impl Conclusion {
    pub fn winners(&self) -> &[MemberId] {
        match &self.outcome {
            Outcome::NoParticipants => &[],
            Outcome::Winners(winners) => winners,
        }
    }
}
