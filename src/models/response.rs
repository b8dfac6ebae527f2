use serenity::builder::{
    CreateActionRow, CreateAllowedMentions, CreateEmbed, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EditInteractionResponse,
};

use crate::engine::GiveawayError;

pub struct Response {
    pub content: Option<String>,
    pub embeds: Option<Vec<CreateEmbed>>,
    pub allowed_mentions: Option<CreateAllowedMentions>,
    pub components: Option<Vec<CreateActionRow>>,
    pub ephemeral: bool,
}

#[derive(Debug)]
pub enum ResponseError {
    Serenity(serenity::Error),
    Execution(&'static str, Option<String>),
}

pub type ResponseResult = Result<(), ResponseError>;

impl Response {
    pub fn new() -> Self {
        Response {
            content: None,
            embeds: None,
            allowed_mentions: None,
            components: None,
            ephemeral: false,
        }
    }

    pub fn content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    pub fn embed(mut self, embed: CreateEmbed) -> Self {
        self.embeds = Some(vec![embed]);
        self
    }

    pub fn allowed_mentions(mut self, allowed_mentions: CreateAllowedMentions) -> Self {
        self.allowed_mentions = Some(allowed_mentions);
        self
    }

    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    pub fn error(err: &ResponseError) -> Self {
        let (title, description) = match err {
            ResponseError::Execution(title, description) => (*title, description.clone()),
            ResponseError::Serenity(err) => (
                "There was an error while executing this command!",
                Some(err.to_string()),
            ),
        };

        let mut embed = CreateEmbed::new().title(title).color(0xed4245);
        if let Some(description) = description {
            embed = embed.description(description);
        }
        Response::new().embed(embed).ephemeral(true)
    }

    pub fn into_message(self) -> CreateInteractionResponseMessage {
        let mut reply = CreateInteractionResponseMessage::new();
        if let Some(content) = self.content {
            reply = reply.content(content);
        }
        if let Some(embeds) = self.embeds {
            reply = reply.embeds(embeds);
        }
        if let Some(allowed_mentions) = self.allowed_mentions {
            reply = reply.allowed_mentions(allowed_mentions);
        }
        if let Some(components) = self.components {
            reply = reply.components(components);
        }
        reply.ephemeral(self.ephemeral)
    }

    pub fn into_edit(self) -> EditInteractionResponse {
        let mut edit = EditInteractionResponse::new();
        if let Some(content) = self.content {
            edit = edit.content(content);
        }
        if let Some(embeds) = self.embeds {
            edit = edit.embeds(embeds);
        }
        if let Some(allowed_mentions) = self.allowed_mentions {
            edit = edit.allowed_mentions(allowed_mentions);
        }
        if let Some(components) = self.components {
            edit = edit.components(components);
        }
        edit
    }

    pub fn into_followup(self) -> CreateInteractionResponseFollowup {
        let mut followup = CreateInteractionResponseFollowup::new();
        if let Some(content) = self.content {
            followup = followup.content(content);
        }
        if let Some(embeds) = self.embeds {
            followup = followup.embeds(embeds);
        }
        if let Some(allowed_mentions) = self.allowed_mentions {
            followup = followup.allowed_mentions(allowed_mentions);
        }
        if let Some(components) = self.components {
            followup = followup.components(components);
        }
        followup.ephemeral(self.ephemeral)
    }
}

impl From<serenity::Error> for ResponseError {
    fn from(err: serenity::Error) -> Self {
        ResponseError::Serenity(err)
    }
}

impl From<GiveawayError> for ResponseError {
    fn from(err: GiveawayError) -> Self {
        match err {
            GiveawayError::InvalidDuration(_) => ResponseError::Execution(
                "Invalid duration",
                Some("Please use formats like 1h, 30m, 1d.".to_string()),
            ),
            GiveawayError::InvalidWinnerCount(_) => ResponseError::Execution(
                "Invalid number of winners",
                Some("Please enter a positive number.".to_string()),
            ),
            GiveawayError::InvalidPrize => ResponseError::Execution(
                "Invalid prize",
                Some("Please describe what the winners will receive.".to_string()),
            ),
            GiveawayError::NotFound(_) => ResponseError::Execution(
                "No active giveaway found with that message ID.",
                Some("It may have already ended.".to_string()),
            ),
            GiveawayError::AlreadyEntered => {
                ResponseError::Execution("You have already joined this giveaway!", None)
            }
            GiveawayError::Unauthorized => ResponseError::Execution(
                "You do not have permission to end this giveaway",
                Some(
                    "You can only end giveaways that you have hosted, or if you are an Administrator."
                        .to_string(),
                ),
            ),
            GiveawayError::Announcement(err) => ResponseError::Execution(
                "Could not post the giveaway announcement",
                Some(format!(
                    "Ensure the bot can send messages in this channel. ({err})"
                )),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::giveaway::GiveawayId;

    #[test]
    fn test_giveaway_errors_become_execution_errors() {
        let err = ResponseError::from(GiveawayError::NotFound(GiveawayId(1)));
        assert!(matches!(
            err,
            ResponseError::Execution("No active giveaway found with that message ID.", Some(_))
        ));

        let err = ResponseError::from(GiveawayError::AlreadyEntered);
        assert!(matches!(
            err,
            ResponseError::Execution("You have already joined this giveaway!", None)
        ));
    }

    #[test]
    fn test_error_response_is_ephemeral() {
        let response = Response::error(&ResponseError::Execution("Invalid duration", None));
        assert!(response.ephemeral);
        assert_eq!(response.embeds.map(|embeds| embeds.len()), Some(1));
        assert!(response.content.is_none());
    }
}
