use std::sync::atomic::Ordering;

use serenity::{all::CommandInteraction, builder::CreateInteractionResponse};
use tracing::{debug, error};

use crate::{
    impl_interaction_reply,
    models::{
        command::{
            CommandContext, CommandContextReply, InteractionContext, InteractionContextReply,
            ModalContext,
        },
        response::{Response, ResponseError, ResponseResult},
    },
};

#[async_trait::async_trait]
impl CommandContextReply for CommandContext {
    async fn defer(&self, cmd: &CommandInteraction, ephemeral: bool) -> ResponseResult {
        let result = if ephemeral {
            cmd.defer_ephemeral(&self.ctx.http).await
        } else {
            cmd.defer(&self.ctx.http).await
        };

        if let Err(err) = result {
            error!("Attempted to defer a command, failed with error: {err}");
            return Err(ResponseError::Serenity(err));
        }
        self.has_responsed.store(true, Ordering::Relaxed);
        Ok(())
    }

    async fn reply(&self, cmd: &CommandInteraction, response: Response) -> ResponseResult {
        let start = std::time::Instant::now();
        if self.has_responsed.load(Ordering::Relaxed) {
            if let Err(err) = cmd
                .edit_response(&self.ctx.http, response.into_edit())
                .await
            {
                error!("Attempted to edit a response to a command, failed with error: {err}");
                return Err(ResponseError::Serenity(err));
            }
        } else {
            if let Err(err) = cmd
                .create_response(
                    &self.ctx.http,
                    CreateInteractionResponse::Message(response.into_message()),
                )
                .await
            {
                error!("Attempted to create a response to a command, failed with error: {err}");
                return Err(ResponseError::Serenity(err));
            }
            self.has_responsed.store(true, Ordering::Relaxed);
        }

        debug!("Took {:?} to reply to a command", start.elapsed());
        Ok(())
    }
}

impl_interaction_reply!(InteractionContext, interaction);
impl_interaction_reply!(ModalContext, modal);
