use std::sync::atomic::AtomicBool;

use serenity::{
    all::{CommandInteraction, ComponentInteraction, ModalInteraction},
    builder::CreateCommand,
    prelude::Context as IncomingContext,
};

use super::{
    handler::Handler,
    response::{Response, ResponseError, ResponseResult},
};

pub struct CommandContext {
    pub ctx: IncomingContext,
    pub has_responsed: AtomicBool,
}

pub struct InteractionContext {
    pub ctx: IncomingContext,
    pub interaction: ComponentInteraction,
    pub has_responsed: AtomicBool,
}

pub struct ModalContext {
    pub ctx: IncomingContext,
    pub modal: ModalInteraction,
    pub has_responsed: AtomicBool,
}

impl CommandContext {
    pub fn new(ctx: IncomingContext) -> Self {
        CommandContext {
            ctx,
            has_responsed: AtomicBool::new(false),
        }
    }
}

impl InteractionContext {
    pub fn new(ctx: IncomingContext, interaction: ComponentInteraction) -> Self {
        InteractionContext {
            ctx,
            interaction,
            has_responsed: AtomicBool::new(false),
        }
    }
}

impl ModalContext {
    pub fn new(ctx: IncomingContext, modal: ModalInteraction) -> Self {
        ModalContext {
            ctx,
            modal,
            has_responsed: AtomicBool::new(false),
        }
    }
}

#[async_trait::async_trait]
pub trait CommandContextReply: Sync {
    async fn defer(&self, cmd: &CommandInteraction, ephemeral: bool) -> ResponseResult;
    async fn reply(&self, cmd: &CommandInteraction, response: Response) -> ResponseResult;

    async fn error_message(&self, cmd: &CommandInteraction, err: &ResponseError) -> ResponseResult {
        self.reply(cmd, Response::error(err)).await
    }
}

/// Replies to a button press or modal submission.
#[async_trait::async_trait]
pub trait InteractionContextReply: Sync {
    async fn defer(&self) -> ResponseResult;
    async fn reply(&self, response: Response) -> ResponseResult;
    async fn followup(&self, response: Response) -> ResponseResult;

    async fn error_message(&self, err: &ResponseError) -> ResponseResult {
        self.reply(Response::error(err)).await
    }
}

#[async_trait::async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn register(&self) -> CreateCommand;
    async fn router(
        &self,
        handler: &Handler,
        ctx: &CommandContext,
        command: &CommandInteraction,
    ) -> ResponseResult;
}
