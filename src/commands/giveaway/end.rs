use serenity::{
    all::{CommandInteraction, CommandOptionType},
    builder::{CreateCommand, CreateCommandOption, CreateEmbed},
};
use tracing::info;

use crate::{
    common::options::Options,
    models::{
        command::{Command, CommandContext, CommandContextReply},
        giveaway::{GiveawayId, MemberId, Outcome},
        handler::Handler,
        response::{Response, ResponseError, ResponseResult},
    },
};

pub struct EndGiveawayCommand;

#[async_trait::async_trait]
impl Command for EndGiveawayCommand {
    fn name(&self) -> &'static str {
        "endgiveaway"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("endgiveaway")
            .description("Ends an ongoing giveaway and picks winner(s).")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "message_id",
                    "The message ID of the giveaway to end.",
                )
                .required(true),
            )
            .dm_permission(false)
    }

    async fn router(
        &self,
        handler: &Handler,
        ctx: &CommandContext,
        cmd: &CommandInteraction,
    ) -> ResponseResult {
        let options = Options {
            options: cmd.data.options(),
        };

        let Some(id_string) = options.get_string("message_id") else {
            return Err(ResponseError::Execution(
                "Could not get giveaway ID",
                Some("Please notify the developer of this issue".to_string()),
            ));
        };

        let Ok(id) = id_string.parse::<GiveawayId>() else {
            return Err(ResponseError::Execution(
                "No active giveaway found with that message ID.",
                Some("Please use the message ID of the giveaway announcement".to_string()),
            ));
        };

        let is_admin = cmd
            .member
            .as_ref()
            .and_then(|member| member.permissions)
            .is_some_and(|permissions| permissions.administrator());

        ctx.defer(cmd, true).await?;

        let conclusion = handler
            .giveaways
            .end_by_request(id, MemberId(cmd.user.id.get()), is_admin)
            .await?;
        info!("{} ended giveaway {}", cmd.user.id, id);

        let description = match &conclusion.outcome {
            Outcome::NoParticipants => "Nobody had entered, so there are no winners.".to_string(),
            Outcome::Winners(_) => format!(
                "Drew {} winner(s) from {} participant(s).",
                conclusion.winners().len(),
                conclusion.total_participants
            ),
        };

        ctx.reply(
            cmd,
            Response::new()
                .embed(
                    CreateEmbed::new()
                        .title("Giveaway has been successfully ended!")
                        .description(description)
                        .color(0x57f287),
                )
                .ephemeral(true),
        )
        .await
    }
}
