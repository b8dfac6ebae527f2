use thiserror::Error;

use crate::models::giveaway::GiveawayId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GiveawayError {
    #[error("invalid duration `{0}`, expected a number followed by h, m or d")]
    InvalidDuration(String),
    #[error("invalid number of winners `{0}`, expected a positive integer")]
    InvalidWinnerCount(String),
    #[error("the prize of a giveaway cannot be empty")]
    InvalidPrize,
    #[error("no active giveaway with id {0}")]
    NotFound(GiveawayId),
    #[error("participant has already entered this giveaway")]
    AlreadyEntered,
    #[error("only the host or an administrator can end this giveaway")]
    Unauthorized,
    #[error("could not post the giveaway announcement: {0}")]
    Announcement(String),
}
