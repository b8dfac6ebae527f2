use serenity::{
    all::{CommandInteraction, InputTextStyle},
    builder::{CreateActionRow, CreateCommand, CreateInputText, CreateInteractionResponse, CreateModal},
};
use std::sync::atomic::Ordering;
use tracing::error;

use crate::models::{
    command::{Command, CommandContext},
    handler::Handler,
    response::{ResponseError, ResponseResult},
};

pub mod end;
pub mod interaction;
pub mod new;

pub const MODAL_ID: &str = "giveaway_modal";
pub const JOIN_BUTTON_ID: &str = "join_giveaway";

pub const DURATION_FIELD: &str = "giveaway_duration";
pub const PRIZE_FIELD: &str = "giveaway_prize";
pub const IMAGE_FIELD: &str = "giveaway_image";
pub const WINNERS_FIELD: &str = "giveaway_winners";

fn giveaway_modal() -> CreateModal {
    CreateModal::new(MODAL_ID, "Start a New Giveaway").components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(
                InputTextStyle::Short,
                "Duration (e.g., 1h, 30m, 1d)",
                DURATION_FIELD,
            )
            .placeholder("1h")
            .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Paragraph, "What's the prize?", PRIZE_FIELD)
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Image URL (optional)", IMAGE_FIELD)
                .required(false),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Number of winners?", WINNERS_FIELD)
                .placeholder("1")
                .required(true),
        ),
    ])
}

pub struct GiveawayCommand;

#[async_trait::async_trait]
impl Command for GiveawayCommand {
    fn name(&self) -> &'static str {
        "giveaway"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("giveaway")
            .description("Starts a new giveaway!")
            .dm_permission(false)
    }

    async fn router(
        &self,
        _handler: &Handler,
        ctx: &CommandContext,
        cmd: &CommandInteraction,
    ) -> ResponseResult {
        if let Err(err) = cmd
            .create_response(
                &ctx.ctx.http,
                CreateInteractionResponse::Modal(giveaway_modal()),
            )
            .await
        {
            error!("Could not open the giveaway modal. Failed with error: {:?}", err);
            return Err(ResponseError::Serenity(err));
        }
        ctx.has_responsed.store(true, Ordering::Relaxed);
        Ok(())
    }
}
