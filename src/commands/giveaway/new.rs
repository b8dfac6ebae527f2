use tracing::{error, info};

use crate::{
    common::options::ModalFields,
    engine::{Notice, Notifier},
    models::{
        command::{InteractionContextReply, ModalContext},
        giveaway::{ChannelRef, GiveawayRequest, MemberId},
        handler::Handler,
        response::{Response, ResponseResult},
    },
};

use super::{DURATION_FIELD, IMAGE_FIELD, PRIZE_FIELD, WINNERS_FIELD};

/// Starts a giveaway from a submitted giveaway modal.
pub async fn new(handler: &Handler, ctx: &ModalContext) -> ResponseResult {
    ctx.defer().await?;

    let fields = ModalFields::from(ctx.modal.data.components.as_slice());
    let location = ChannelRef(ctx.modal.channel_id.get());
    let request = GiveawayRequest {
        prize: fields.get_or_empty(PRIZE_FIELD),
        duration: fields.get_or_empty(DURATION_FIELD),
        winners: fields.get_or_empty(WINNERS_FIELD).into(),
        location,
        host: MemberId(ctx.modal.user.id.get()),
        host_name: ctx.modal.user.tag(),
        image: fields.get(IMAGE_FIELD).map(|image| image.trim().to_string()),
    };

    let prize = request.prize.trim().to_string();

    let id = handler.giveaways.create(request).await?;
    info!(
        "{} started giveaway {} in channel {}",
        ctx.modal.user.id, id, location.0
    );

    ctx.reply(Response::new().content("Giveaway started successfully!".to_string()))
        .await?;

    if let Err(err) = handler
        .notifier
        .send_notice(location, &Notice::Launched { prize })
        .await
    {
        error!(
            "Failed to send @everyone ping for giveaway {} in channel {}. Failed with error: {:?}",
            id, location.0, err
        );
        ctx.followup(
            Response::new()
                .content("Failed to send @everyone ping for the giveaway. Ensure the bot has the \"Mention Everyone\" permission.".to_string())
                .ephemeral(true),
        )
        .await?;
    }

    Ok(())
}
