/// Implements `InteractionContextReply` for a context wrapping a component or modal
/// interaction stored in the field `$field`.
#[macro_export]
macro_rules! impl_interaction_reply {
    ($context: ident, $field: ident) => {
        #[async_trait::async_trait]
        impl InteractionContextReply for $context {
            async fn defer(&self) -> ResponseResult {
                if let Err(err) = self.$field.defer_ephemeral(&self.ctx.http).await {
                    error!("Attempted to defer an interaction, failed with error: {err}");
                    return Err(ResponseError::Serenity(err));
                }
                self.has_responsed.store(true, Ordering::Relaxed);
                Ok(())
            }

            async fn reply(&self, response: Response) -> ResponseResult {
                let start = std::time::Instant::now();
                if self.has_responsed.load(Ordering::Relaxed) {
                    if let Err(err) = self
                        .$field
                        .edit_response(&self.ctx.http, response.into_edit())
                        .await
                    {
                        error!("Attempted to edit an interaction response, failed with error: {err}");
                        return Err(ResponseError::Serenity(err));
                    }
                } else {
                    if let Err(err) = self
                        .$field
                        .create_response(
                            &self.ctx.http,
                            CreateInteractionResponse::Message(response.into_message()),
                        )
                        .await
                    {
                        error!("Attempted to create an interaction response, failed with error: {err}");
                        return Err(ResponseError::Serenity(err));
                    }
                    self.has_responsed.store(true, Ordering::Relaxed);
                }

                debug!("Took {:?} to reply to an interaction", start.elapsed());
                Ok(())
            }

            async fn followup(&self, response: Response) -> ResponseResult {
                if let Err(err) = self
                    .$field
                    .create_followup(&self.ctx.http, response.into_followup())
                    .await
                {
                    error!("Attempted to send an interaction followup, failed with error: {err}");
                    return Err(ResponseError::Serenity(err));
                }
                Ok(())
            }
        }
    };
}
