//! Currency balance and session counters.

use lawn_defence_core::{PlacementError, Scoreboard, ZOMBIE_KILL_SCORE};

#[derive(Clone, Copy, Debug)]
pub(crate) struct Economy {
    board: Scoreboard,
}

impl Economy {
    pub(crate) fn new(starting_balance: u32) -> Self {
        Self {
            board: Scoreboard {
                balance: starting_balance,
                ..Scoreboard::default()
            },
        }
    }

    pub(crate) fn scoreboard(&self) -> Scoreboard {
        self.board
    }

    pub(crate) fn balance(&self) -> u32 {
        self.board.balance
    }

    /// Withdraws `cost`, refusing when the balance cannot cover it.
    pub(crate) fn try_debit(&mut self, cost: u32) -> Result<u32, PlacementError> {
        let remaining = self
            .board
            .balance
            .checked_sub(cost)
            .ok_or(PlacementError::InsufficientFunds)?;
        self.board.balance = remaining;
        Ok(remaining)
    }

    pub(crate) fn credit(&mut self, amount: u32) -> u32 {
        self.board.balance = self.board.balance.saturating_add(amount);
        self.board.balance
    }

    pub(crate) fn record_kill(&mut self) {
        self.board.zombies_killed = self.board.zombies_killed.saturating_add(1);
        self.board.score = self.board.score.saturating_add(ZOMBIE_KILL_SCORE);
    }

    pub(crate) fn record_plant_lost(&mut self) -> u32 {
        self.board.plants_lost = self.board.plants_lost.saturating_add(1);
        self.board.plants_lost
    }
}
