use serenity::{
    all::CommandInteraction,
    builder::{CreateCommand, CreateEmbed},
};

use crate::models::{
    command::{Command, CommandContext, CommandContextReply},
    handler::Handler,
    response::{Response, ResponseResult},
};

pub struct InfoCommand;

#[async_trait::async_trait]
impl Command for InfoCommand {
    fn name(&self) -> &'static str {
        "info"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("info").description("Get information about the bot")
    }

    async fn router(
        &self,
        handler: &Handler,
        ctx: &CommandContext,
        cmd: &CommandInteraction,
    ) -> ResponseResult {
        let start = std::time::Instant::now();
        ctx.defer(cmd, true).await?;
        let latency = start.elapsed();

        ctx.reply(
            cmd,
            Response::new().embed(
                CreateEmbed::new()
                    .title("Bot Information")
                    .fields(vec![
                        (
                            "Network",
                            format!(
                                "Shard ID {}\nLatency: {}",
                                ctx.ctx.shard_id,
                                pretty_duration::pretty_duration(&latency, None)
                            ),
                            true,
                        ),
                        (
                            "Giveaways",
                            format!("Running {} giveaways", handler.giveaways.active_count()),
                            true,
                        ),
                        (
                            "Meta",
                            format!(
                                "Version: {}\nUptime: {}",
                                env!("CARGO_PKG_VERSION"),
                                pretty_duration::pretty_duration(
                                    &handler.start_time.elapsed(),
                                    None
                                )
                            ),
                            true,
                        ),
                    ])
                    .color(0x5865f2),
            ),
        )
        .await
    }
}
