use serenity::{all::ModalInteraction, prelude::Context as IncomingContext};
use tracing::{debug, error};

use crate::{
    commands::giveaway::{new::new, MODAL_ID},
    models::{
        command::{InteractionContextReply, ModalContext},
        handler::Handler,
    },
};

impl Handler {
    pub async fn on_modal(&self, ctx: IncomingContext, modal: ModalInteraction) {
        if modal.data.custom_id != MODAL_ID {
            debug!("Ignoring modal {}", modal.data.custom_id);
            return;
        }

        let modal_context = ModalContext::new(ctx, modal);
        if let Err(err) = new(self, &modal_context).await {
            debug!("Giveaway could not be started: {:?}", err);
            if let Err(err) = modal_context.error_message(&err).await {
                error!(
                    "Could not notify user of failed giveaway creation. Failed with error: {:?}",
                    err
                );
            }
        }
    }
}
