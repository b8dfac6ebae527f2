use crate::models::giveaway::{ChannelRef, Conclusion, GiveawayId, GiveawaySummary};

pub type NotifyError = Box<dyn std::error::Error + Send + Sync>;
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Content of the message advertising a giveaway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    Open(GiveawaySummary),
    Concluded(Conclusion),
}

/// A standalone message posted next to an announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Launched { prize: String },
    Concluded(Conclusion),
}

/// Sends and edits the messages giveaways are displayed through.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Posts the announcement of a newly opened giveaway. Its message id becomes the giveaway id.
    async fn post_announcement(
        &self,
        location: ChannelRef,
        summary: &GiveawaySummary,
    ) -> NotifyResult<GiveawayId>;

    async fn update_announcement(
        &self,
        location: ChannelRef,
        id: GiveawayId,
        announcement: &Announcement,
    ) -> NotifyResult<()>;

    async fn send_notice(&self, location: ChannelRef, notice: &Notice) -> NotifyResult<()>;
}
