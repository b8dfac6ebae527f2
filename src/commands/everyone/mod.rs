use serenity::{
    all::{CommandInteraction, CommandOptionType, Permissions},
    builder::{CreateAllowedMentions, CreateCommand, CreateCommandOption},
};
use tracing::info;

use crate::{
    common::options::Options,
    models::{
        command::{Command, CommandContext, CommandContextReply},
        handler::Handler,
        response::{Response, ResponseError, ResponseResult},
    },
};

pub struct EveryoneCommand;

fn can_mention_everyone(permissions: Option<Permissions>) -> bool {
    permissions.is_some_and(|permissions| {
        permissions.mention_everyone() || permissions.administrator()
    })
}

#[async_trait::async_trait]
impl Command for EveryoneCommand {
    fn name(&self) -> &'static str {
        "everyone"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("everyone")
            .description("Pings everyone in the server with a message.")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "message",
                    "The message to send with the @everyone ping.",
                )
                .required(true),
            )
            .default_member_permissions(Permissions::MENTION_EVERYONE)
            .dm_permission(false)
    }

    async fn router(
        &self,
        _handler: &Handler,
        ctx: &CommandContext,
        cmd: &CommandInteraction,
    ) -> ResponseResult {
        let permissions = cmd.member.as_ref().and_then(|member| member.permissions);
        if !can_mention_everyone(permissions) {
            return Err(ResponseError::Execution(
                "You do not have permission to use this command",
                Some("You need the Mention Everyone permission to ping everyone.".to_string()),
            ));
        }

        let options = Options {
            options: cmd.data.options(),
        };

        let Some(message) = options.get_string("message") else {
            return Err(ResponseError::Execution(
                "Could not get the message to send",
                Some("Please provide a message to send with the ping.".to_string()),
            ));
        };

        info!("{} pinged everyone in channel {}", cmd.user.id, cmd.channel_id);
        ctx.reply(
            cmd,
            Response::new()
                .content(format!("**Pinging @everyone:**\n{message}\n@everyone"))
                .allowed_mentions(CreateAllowedMentions::new().everyone(true)),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_everyone_is_required() {
        assert!(!can_mention_everyone(None));
        assert!(!can_mention_everyone(Some(Permissions::SEND_MESSAGES)));
        assert!(can_mention_everyone(Some(
            Permissions::SEND_MESSAGES | Permissions::MENTION_EVERYONE
        )));
        assert!(can_mention_everyone(Some(Permissions::ADMINISTRATOR)));
    }
}
