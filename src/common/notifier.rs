use std::sync::{Arc, OnceLock};

use serenity::{
    all::{ButtonStyle, ChannelId, MessageId, Timestamp, UserId},
    builder::{
        CreateActionRow, CreateAllowedMentions, CreateButton, CreateEmbed, CreateEmbedFooter,
        CreateMessage, EditMessage,
    },
    http::Http,
};
use tracing::debug;

use crate::{
    commands::giveaway::JOIN_BUTTON_ID,
    engine::{
        notifier::{NotifyResult, Notifier},
        Announcement, Notice,
    },
    models::giveaway::{ChannelRef, Conclusion, GiveawayId, GiveawaySummary, MemberId, Outcome},
};

const OPEN_COLOR: u32 = 0x5865f2;
const WON_COLOR: u32 = 0x57f287;
const EMPTY_COLOR: u32 = 0xed4245;

/// Posts giveaway announcements and notices through the Discord REST API.
pub struct DiscordNotifier {
    http: Arc<Http>,
    avatar: OnceLock<String>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        DiscordNotifier {
            http,
            avatar: OnceLock::new(),
        }
    }

    /// Sets the thumbnail shown on open giveaways. Only the first call has an effect.
    pub fn set_avatar(&self, url: String) {
        if self.avatar.set(url).is_err() {
            debug!("Bot avatar already set, keeping the first one");
        }
    }

    fn open_embed(&self, summary: &GiveawaySummary) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .title(format!("🎉 Giveaway: {} 🎉", summary.prize))
            .description(open_description(summary))
            .footer(CreateEmbedFooter::new(format!(
                "Hosted by {}",
                summary.host_name
            )))
            .color(OPEN_COLOR);

        if let Ok(ends_at) = Timestamp::from_unix_timestamp(summary.ends_at.unix_timestamp()) {
            embed = embed.timestamp(ends_at);
        }
        if let Some(avatar) = self.avatar.get() {
            embed = embed.thumbnail(avatar);
        }
        if let Some(image) = &summary.image {
            embed = embed.image(image);
        }
        embed
    }
}

fn mentions(members: &[MemberId]) -> String {
    members
        .iter()
        .map(|member| format!("<@{member}>"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_button() -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(JOIN_BUTTON_ID)
        .label("🎁 Join Giveaway")
        .style(ButtonStyle::Primary)])
}

fn open_description(summary: &GiveawaySummary) -> String {
    format!(
        "Click the button below to enter!\n\n**Ends:** <t:{}:R>\n**Winners:** {}\n**Participants:** {}\n\n**CREATE A TICKET IF YOU WIN TO CLAIM YOUR REWARD**",
        summary.ends_at.unix_timestamp(),
        summary.number_of_winners,
        summary.participants
    )
}

fn concluded_embed(conclusion: &Conclusion) -> CreateEmbed {
    match &conclusion.outcome {
        Outcome::NoParticipants => CreateEmbed::new()
            .title("🎉 Giveaway Ended 🎉")
            .description(format!(
                "No one entered the giveaway for **{}**.",
                conclusion.prize
            ))
            .color(EMPTY_COLOR),
        Outcome::Winners(winners) => {
            let mut description = format!(
                "The giveaway for **{}** has ended!\n\n**Winner(s):** {}\n\n**Total Participants:** {}",
                conclusion.prize,
                mentions(winners),
                conclusion.total_participants
            );
            if conclusion.manual {
                description.push_str(&format!(
                    "\n\n*(Ended manually by <@{}>)*",
                    conclusion.host
                ));
            }

            CreateEmbed::new()
                .title("🎉 Giveaway Ended! 🎉")
                .description(description)
                .footer(CreateEmbedFooter::new(format!(
                    "Hosted by {}",
                    conclusion.host_name
                )))
                .timestamp(Timestamp::now())
                .color(WON_COLOR)
        }
    }
}

fn notice_message(notice: &Notice) -> CreateMessage {
    match notice {
        Notice::Launched { prize } => CreateMessage::new()
            .content(format!(
                "🎉 **A new giveaway has started!** Everyone, check out the prize: **{prize}**!\n@everyone"
            ))
            .allowed_mentions(CreateAllowedMentions::new().everyone(true)),
        Notice::Concluded(conclusion) => match &conclusion.outcome {
            Outcome::NoParticipants => CreateMessage::new().content(format!(
                "The giveaway for **{}** has ended with no participants.",
                conclusion.prize
            )),
            Outcome::Winners(winners) => CreateMessage::new()
                .content(format!(
                    "Congratulations {}! You won the **{}**!",
                    mentions(winners),
                    conclusion.prize
                ))
                .allowed_mentions(
                    CreateAllowedMentions::new()
                        .users(winners.iter().map(|winner| UserId::new(winner.0))),
                ),
        },
    }
}

#[async_trait::async_trait]
impl Notifier for DiscordNotifier {
    async fn post_announcement(
        &self,
        location: ChannelRef,
        summary: &GiveawaySummary,
    ) -> NotifyResult<GiveawayId> {
        let message = CreateMessage::new()
            .embed(self.open_embed(summary))
            .components(vec![join_button()]);

        let message = ChannelId::new(location.0)
            .send_message(&*self.http, message)
            .await?;
        debug!(
            "Posted giveaway announcement {} in channel {}",
            message.id, location.0
        );
        Ok(GiveawayId(message.id.get()))
    }

    async fn update_announcement(
        &self,
        location: ChannelRef,
        id: GiveawayId,
        announcement: &Announcement,
    ) -> NotifyResult<()> {
        let edit = match announcement {
            Announcement::Open(summary) => EditMessage::new()
                .embed(self.open_embed(summary))
                .components(vec![join_button()]),
            Announcement::Concluded(conclusion) => EditMessage::new()
                .embed(concluded_embed(conclusion))
                .components(vec![]),
        };

        ChannelId::new(location.0)
            .edit_message(&*self.http, MessageId::new(id.0), edit)
            .await?;
        Ok(())
    }

    async fn send_notice(&self, location: ChannelRef, notice: &Notice) -> NotifyResult<()> {
        ChannelId::new(location.0)
            .send_message(&*self.http, notice_message(notice))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::*;

    #[test]
    fn test_open_description_asks_winners_to_claim() {
        let summary = GiveawaySummary {
            prize: "Gift Card".to_string(),
            number_of_winners: 2,
            ends_at: OffsetDateTime::from_unix_timestamp(1_700_003_600).unwrap(),
            participants: 7,
            host_name: "host#0001".to_string(),
            image: None,
        };

        let description = open_description(&summary);
        assert!(description.contains("<t:1700003600:R>"));
        assert!(description.contains("**Winners:** 2"));
        assert!(description.contains("**Participants:** 7"));
        assert!(description.ends_with("**CREATE A TICKET IF YOU WIN TO CLAIM YOUR REWARD**"));
    }

    #[test]
    fn test_mentions() {
        assert_eq!(mentions(&[]), "");
        assert_eq!(
            mentions(&[MemberId(1), MemberId(22)]),
            "<@1>, <@22>"
        );
    }
}
