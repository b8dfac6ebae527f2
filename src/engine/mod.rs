//! Lifecycle of active giveaways: creation, entries, timed expiry and manual ends.
//!
//! A giveaway is open while its id is a key of the active map. Conclusion removes it with a
//! single `remove`, so whichever of the expiry timer or a manual end reaches it first draws
//! the winners and the other finds nothing to do.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use dashmap::DashMap;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, error, info};

use crate::{
    common::duration::GiveawayDuration,
    models::giveaway::{
        ChannelRef, Conclusion, Giveaway, GiveawayId, GiveawayRequest, GiveawaySummary, MemberId,
    },
};

pub mod clock;
pub mod draw;
pub mod error;
pub mod notifier;
#[cfg(test)]
pub mod testing;

pub use clock::{Clock, TimerHandle, TokioClock};
pub use error::GiveawayError;
pub use notifier::{Announcement, Notice, Notifier};

struct ActiveGiveaway {
    giveaway: Giveaway,
    timer: Option<TimerHandle>,
}

struct EngineInner {
    giveaways: DashMap<GiveawayId, ActiveGiveaway>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    rng: Mutex<StdRng>,
}

#[derive(Clone)]
pub struct GiveawayEngine {
    inner: Arc<EngineInner>,
}

impl GiveawayEngine {
    pub fn new(clock: Arc<dyn Clock>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_rng(clock, notifier, StdRng::from_entropy())
    }

    pub fn with_rng(clock: Arc<dyn Clock>, notifier: Arc<dyn Notifier>, rng: StdRng) -> Self {
        GiveawayEngine {
            inner: Arc::new(EngineInner {
                giveaways: DashMap::new(),
                clock,
                notifier,
                rng: Mutex::new(rng),
            }),
        }
    }

    /// Validates the request, posts the announcement and schedules the giveaway's expiry.
    pub async fn create(&self, request: GiveawayRequest) -> Result<GiveawayId, GiveawayError> {
        let prize = request.prize.trim().to_string();
        if prize.is_empty() {
            return Err(GiveawayError::InvalidPrize);
        }
        let duration = GiveawayDuration::parse(&request.duration)?;
        let number_of_winners = request.winners.parse()?;
        let ends_at = duration
            .end_from(self.inner.clock.now())
            .ok_or_else(|| GiveawayError::InvalidDuration(request.duration.clone()))?;

        let mut giveaway = Giveaway {
            id: GiveawayId(0),
            prize,
            number_of_winners,
            ends_at,
            participants: Vec::new(),
            host: request.host,
            host_name: request.host_name,
            location: request.location,
            image: request.image,
        };

        let id = match self
            .inner
            .notifier
            .post_announcement(giveaway.location, &giveaway.summary())
            .await
        {
            Ok(id) => id,
            Err(err) => {
                error!(
                    "Could not post announcement for giveaway of {}. Failed with error: {:?}",
                    giveaway.prize, err
                );
                return Err(GiveawayError::Announcement(err.to_string()));
            }
        };
        giveaway.id = id;

        info!(
            "Giveaway {} for {} created by {}, ends at {}ms with {} winner(s)",
            id,
            giveaway.prize,
            giveaway.host,
            giveaway.end_time_ms(),
            giveaway.number_of_winners
        );
        self.inner.giveaways.insert(
            id,
            ActiveGiveaway {
                giveaway,
                timer: None,
            },
        );

        let engine = Arc::downgrade(&self.inner);
        let timer = self
            .inner
            .clock
            .after(duration.to_std(), Box::pin(expire(engine, id)));

        match self.inner.giveaways.get_mut(&id) {
            Some(mut active) => active.timer = Some(timer),
            None => timer.cancel(),
        }

        Ok(id)
    }

    /// Adds a participant and returns how many have entered so far.
    ///
    /// The announcement's participant count is refreshed in a background task, so a slow or
    /// failing edit never holds up the entry.
    pub async fn enter(&self, id: GiveawayId, participant: MemberId) -> Result<usize, GiveawayError> {
        let (location, summary) = {
            let mut active = self
                .inner
                .giveaways
                .get_mut(&id)
                .ok_or(GiveawayError::NotFound(id))?;
            let giveaway = &mut active.giveaway;

            if giveaway.participants.contains(&participant) {
                return Err(GiveawayError::AlreadyEntered);
            }
            giveaway.participants.push(participant);
            (giveaway.location, giveaway.summary())
        };

        let participants = summary.participants;
        debug!(
            "{} entered giveaway {}, {} participant(s)",
            participant, id, participants
        );

        tokio::spawn(refresh(Arc::downgrade(&self.inner), location, id, summary));

        Ok(participants)
    }

    /// Ends a giveaway on behalf of `requester`, who must be its host or an administrator.
    pub async fn end_by_request(
        &self,
        id: GiveawayId,
        requester: MemberId,
        is_admin: bool,
    ) -> Result<Conclusion, GiveawayError> {
        {
            let active = self
                .inner
                .giveaways
                .get(&id)
                .ok_or(GiveawayError::NotFound(id))?;
            if active.giveaway.host != requester && !is_admin {
                return Err(GiveawayError::Unauthorized);
            }
        }

        let conclusion = self.conclude(id, true).ok_or(GiveawayError::NotFound(id))?;
        info!("Giveaway {} ended manually by {}", id, requester);
        self.publish(&conclusion).await;
        Ok(conclusion)
    }

    /// Removes the giveaway and draws its winners, or returns `None` if it already ended.
    pub fn conclude(&self, id: GiveawayId, manual: bool) -> Option<Conclusion> {
        let (_, active) = self.inner.giveaways.remove(&id)?;

        if manual {
            if let Some(timer) = active.timer {
                timer.cancel();
            }
        }

        let giveaway = active.giveaway;
        let outcome = {
            let mut rng = self.inner.rng.lock().unwrap_or_else(PoisonError::into_inner);
            draw::draw_winners(&giveaway.participants, giveaway.number_of_winners, &mut *rng)
        };

        Some(Conclusion {
            id,
            prize: giveaway.prize,
            outcome,
            total_participants: giveaway.participants.len(),
            manual,
            host: giveaway.host,
            host_name: giveaway.host_name,
            location: giveaway.location,
        })
    }

    pub fn get(&self, id: GiveawayId) -> Option<Giveaway> {
        self.inner
            .giveaways
            .get(&id)
            .map(|active| active.giveaway.clone())
    }

    pub fn active_count(&self) -> usize {
        self.inner.giveaways.len()
    }

    async fn publish(&self, conclusion: &Conclusion) {
        let notifier = &self.inner.notifier;

        if let Err(err) = notifier
            .update_announcement(
                conclusion.location,
                conclusion.id,
                &Announcement::Concluded(conclusion.clone()),
            )
            .await
        {
            error!(
                "Could not update announcement to end giveaway {}. Failed with error: {:?}",
                conclusion.id, err
            );
        }

        if let Err(err) = notifier
            .send_notice(conclusion.location, &Notice::Concluded(conclusion.clone()))
            .await
        {
            error!(
                "Could not send result notice for giveaway {}. Failed with error: {:?}",
                conclusion.id, err
            );
        }
    }
}

async fn refresh(
    engine: Weak<EngineInner>,
    location: ChannelRef,
    id: GiveawayId,
    summary: GiveawaySummary,
) {
    let Some(inner) = engine.upgrade() else {
        return;
    };
    // An open embed must not replace the concluded one.
    if !inner.giveaways.contains_key(&id) {
        debug!("Skipping participant refresh for giveaway {} which has ended", id);
        return;
    }

    let notifier = inner.notifier.clone();
    drop(inner);

    if let Err(err) = notifier
        .update_announcement(location, id, &Announcement::Open(summary))
        .await
    {
        error!(
            "Could not refresh participant count for giveaway {}. Failed with error: {:?}",
            id, err
        );
    }
}

async fn expire(engine: Weak<EngineInner>, id: GiveawayId) {
    let Some(inner) = engine.upgrade() else {
        return;
    };
    let engine = GiveawayEngine { inner };

    match engine.conclude(id, false) {
        Some(conclusion) => {
            info!(
                "Giveaway {} expired with {} participant(s)",
                id, conclusion.total_participants
            );
            engine.publish(&conclusion).await;
        }
        None => debug!("Timer fired for giveaway {} which had already ended", id),
    }
}
