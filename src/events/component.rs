use serenity::{all::ComponentInteraction, prelude::Context as IncomingContext};
use tracing::{debug, error};

use crate::{
    commands::giveaway::{interaction::join, JOIN_BUTTON_ID},
    models::{
        command::{InteractionContext, InteractionContextReply},
        handler::Handler,
    },
};

impl Handler {
    pub async fn on_component(&self, ctx: IncomingContext, component: ComponentInteraction) {
        if component.data.custom_id != JOIN_BUTTON_ID {
            debug!("Ignoring component {}", component.data.custom_id);
            return;
        }

        let interaction_context = InteractionContext::new(ctx, component);
        if let Err(err) = join(self, &interaction_context).await {
            debug!("Giveaway entry was refused: {:?}", err);
            if let Err(err) = interaction_context.error_message(&err).await {
                error!(
                    "Could not notify user of failed giveaway entry. Failed with error: {:?}",
                    err
                );
            }
        }
    }
}
