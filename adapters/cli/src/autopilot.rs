//! Scripted player used by the headless runner.

use std::collections::VecDeque;

use lawn_defence_core::{Event, PlacementError};
use lawn_defence_simulation::{OpeningMove, PlayerInput, Session};
use lawn_defence_system_planting::CardState;
use lawn_defence_world::query;
use tracing::{debug, warn};

/// Plays the opening script from the session config and picks up suns.
#[derive(Debug)]
pub(crate) struct Autopilot {
    script: VecDeque<OpeningMove>,
    attempt: Option<OpeningMove>,
    collect_suns: bool,
}

impl Autopilot {
    /// Creates an autopilot that performs `opening` in time order.
    pub(crate) fn new(opening: &[OpeningMove], collect_suns: bool) -> Self {
        let mut script = opening.to_vec();
        script.sort_by_key(|step| step.at_ms);
        Self {
            script: script.into(),
            attempt: None,
            collect_suns,
        }
    }

    /// Number of scripted placements not yet performed.
    pub(crate) fn remaining(&self) -> usize {
        self.script.len() + usize::from(self.attempt.is_some())
    }

    /// Chooses the input for the next step.
    pub(crate) fn input(&mut self, session: &Session) -> PlayerInput {
        self.settle(session.events());

        let world = session.world();
        if let Some(step) = self.script.front().copied() {
            let due = query::clock(world) >= step.at();
            let ready =
                session.planting().card_state(step.kind, query::balance(world)) == CardState::Ready;
            if due && ready {
                let _ = self.script.pop_front();
                self.attempt = Some(step);
                debug!(kind = ?step.kind, cell = ?step.cell(), "autopilot planting");
                return PlayerInput {
                    select: Some(step.kind),
                    cancel_selection: false,
                    click: Some(query::geometry(world).cell_center(step.cell())),
                };
            }
        }

        if !self.collect_suns {
            return PlayerInput::default();
        }
        PlayerInput {
            click: query::suns(world)
                .into_iter()
                .find(|sun| sun.phase.is_collectable())
                .map(|sun| sun.position),
            ..PlayerInput::default()
        }
    }

    fn settle(&mut self, events: &[Event]) {
        let Some(step) = self.attempt.take() else {
            return;
        };

        for event in events {
            match *event {
                Event::PlantPlaced { cell, .. } if cell == step.cell() => return,
                Event::PlantPlacementRejected { cell, reason, .. } if cell == step.cell() => {
                    if reason == PlacementError::InsufficientFunds {
                        self.script.push_front(step);
                    } else {
                        warn!(kind = ?step.kind, cell = ?step.cell(), %reason, "scripted placement dropped");
                    }
                    return;
                }
                _ => {}
            }
        }

        // The click landed on a sun instead of the cell.
        self.script.push_front(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use lawn_defence_core::{CellCoord, PlantKind};
    use lawn_defence_simulation::SessionConfig;

    const FRAME: Duration = Duration::from_millis(16);

    fn session_with(opening: &[OpeningMove], balance: u32) -> Session {
        let mut config = SessionConfig {
            opening: opening.to_vec(),
            ..SessionConfig::default()
        };
        config.economy.starting_balance = balance;
        Session::new(&config)
    }

    fn run(session: &mut Session, autopilot: &mut Autopilot, steps: usize) {
        for _ in 0..steps {
            let input = autopilot.input(session);
            let _ = session.step(FRAME, input);
        }
    }

    fn step(at_ms: u64, kind: PlantKind, column: u32, row: u32) -> OpeningMove {
        OpeningMove {
            at_ms,
            kind,
            column,
            row,
        }
    }

    #[test]
    fn scripted_moves_are_planted_in_time_order() {
        let opening = [
            step(500, PlantKind::WallNut, 4, 1),
            step(0, PlantKind::Sunflower, 0, 1),
        ];
        let mut session = session_with(&opening, 500);
        let mut autopilot = Autopilot::new(&opening, false);

        run(&mut session, &mut autopilot, 10);
        let planted = query::plants(session.world());
        assert_eq!(planted.len(), 1);
        assert_eq!(planted[0].kind, PlantKind::Sunflower);

        run(&mut session, &mut autopilot, 40);
        assert_eq!(query::plants(session.world()).len(), 2);
        assert_eq!(autopilot.remaining(), 0);
    }

    #[test]
    fn unaffordable_moves_wait_for_currency() {
        let opening = [step(0, PlantKind::Peashooter, 0, 0)];
        let mut session = session_with(&opening, 50);
        let mut autopilot = Autopilot::new(&opening, false);

        run(&mut session, &mut autopilot, 20);
        assert!(query::plants(session.world()).is_empty());
        assert_eq!(autopilot.remaining(), 1);
    }

    #[test]
    fn occupied_cells_drop_the_move() {
        let opening = [
            step(0, PlantKind::Sunflower, 2, 2),
            step(0, PlantKind::WallNut, 2, 2),
        ];
        let mut session = session_with(&opening, 500);
        let mut autopilot = Autopilot::new(&opening, false);

        run(&mut session, &mut autopilot, 20);
        assert_eq!(autopilot.remaining(), 0);
        let planted = query::plants(session.world());
        assert_eq!(planted.len(), 1);
        assert_eq!(planted[0].cell, CellCoord::new(2, 2));
    }

    #[test]
    fn idle_autopilot_collects_suns() {
        let mut session = session_with(&[], 50);
        let mut autopilot = Autopilot::new(&[], true);

        run(&mut session, &mut autopilot, 3);
        assert!(session.scoreboard().balance > 50);
    }
}
