use serenity::{all::CommandInteraction, prelude::Context as IncomingContext};
use tracing::{debug, error, warn};

use crate::{
    commands::get_command_list,
    models::{
        command::{CommandContext, CommandContextReply},
        handler::Handler,
        response::ResponseError,
    },
};

impl Handler {
    pub async fn on_command(&self, ctx: IncomingContext, command: CommandInteraction) {
        let start = std::time::Instant::now();

        let Some(existing_command) = get_command_list()
            .into_iter()
            .find(|existing_command| existing_command.name() == command.data.name)
        else {
            warn!("No command matching {} was found", command.data.name);
            return;
        };

        let command_context = CommandContext::new(ctx);
        if let Err(err) = existing_command
            .router(self, &command_context, &command)
            .await
        {
            match &err {
                ResponseError::Execution(title, _) => {
                    debug!("Command {} was refused: {}", command.data.name, title);
                }
                ResponseError::Serenity(_) => {
                    error!("Failed to handle command {}: {:?}", command.data.name, err);
                }
            }
            if let Err(err) = command_context.error_message(&command, &err).await {
                error!("Failed to reply to command: {:?}", err);
            }
        }

        debug!("Took {:?} to handle a command", start.elapsed());
    }
}
