use tracing::debug;

use crate::{
    engine::GiveawayError,
    models::{
        command::{InteractionContext, InteractionContextReply},
        giveaway::{GiveawayId, MemberId},
        handler::Handler,
        response::{Response, ResponseError, ResponseResult},
    },
};

/// Enters the user who pressed the join button into the giveaway it belongs to.
pub async fn join(handler: &Handler, ctx: &InteractionContext) -> ResponseResult {
    ctx.defer().await?;

    let id = GiveawayId(ctx.interaction.message.id.get());
    let member = MemberId(ctx.interaction.user.id.get());

    match handler.giveaways.enter(id, member).await {
        Ok(participants) => {
            debug!(
                "{} joined giveaway {} as participant {}",
                member, id, participants
            );
            ctx.reply(
                Response::new()
                    .content("You have successfully joined the giveaway!".to_string())
                    .ephemeral(true),
            )
            .await
        }
        Err(GiveawayError::NotFound(_)) => Err(ResponseError::Execution(
            "This giveaway is no longer active or could not be found.",
            None,
        )),
        Err(err) => Err(err.into()),
    }
}
