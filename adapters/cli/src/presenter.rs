//! Presenter that reports visual lifecycle callbacks through `tracing`.

use lawn_defence_core::LossReason;
use lawn_defence_presentation::{EntityKey, Presenter, Sprite};
use tracing::{debug, info, trace};

/// Counts visual lifecycle callbacks and logs them.
#[derive(Debug, Default)]
pub(crate) struct LogPresenter {
    pub(crate) created: u64,
    pub(crate) destroyed: u64,
    pub(crate) updates: u64,
}

impl Presenter for LogPresenter {
    fn create(&mut self, sprite: &Sprite) {
        self.created += 1;
        debug!(
            key = ?sprite.key,
            visual = ?sprite.visual,
            lane = ?sprite.lane,
            x = sprite.position.x,
            y = sprite.position.y,
            "visual created"
        );
    }

    fn update(&mut self, sprite: &Sprite) {
        self.updates += 1;
        trace!(key = ?sprite.key, x = sprite.position.x, y = sprite.position.y, "visual updated");
    }

    fn destroy(&mut self, key: EntityKey) {
        self.destroyed += 1;
        debug!(?key, "visual destroyed");
    }

    fn currency_changed(&mut self, balance: u32, delta: i64) {
        debug!(balance, delta, "currency changed");
    }

    fn session_ended(&mut self, reason: LossReason, score: u32) {
        info!(?reason, score, "game over");
    }
}
