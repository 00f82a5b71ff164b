#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure planting system responsible for plant selection, card recharges and
//! emitting placement commands.

use std::{collections::BTreeMap, time::Duration};

use lawn_defence_core::{CellCoord, Command, Event, PlantKind};

/// Input snapshot distilled from adapter-provided frame input data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlantingInput {
    /// Plant card the player picked on this frame, if any.
    pub select: Option<PlantKind>,
    /// Indicates whether the player dropped the current selection.
    pub cancel: bool,
    /// Lawn cell the player clicked on this frame, if any.
    pub target: Option<CellCoord>,
}

/// Why a plant card cannot be picked right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    /// The card can be picked.
    Ready,
    /// The balance does not cover the plant's cost.
    Unaffordable,
    /// The card is recharging for the given remaining time.
    Recharging(Duration),
}

/// Planting system that translates selection and clicks into placement commands.
#[derive(Debug, Default)]
pub struct Planting {
    selected: Option<PlantKind>,
    pending: Option<PlantKind>,
    recharges: BTreeMap<PlantKind, Duration>,
}

impl Planting {
    /// Creates a new planting system with every card ready.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant kind currently held by the player.
    #[must_use]
    pub fn selected(&self) -> Option<PlantKind> {
        self.selected
    }

    /// Reports whether the card for `kind` can be picked with `balance`.
    #[must_use]
    pub fn card_state(&self, kind: PlantKind, balance: u32) -> CardState {
        match self.recharges.get(&kind) {
            Some(remaining) if !remaining.is_zero() => CardState::Recharging(*remaining),
            _ if balance < kind.cost() => CardState::Unaffordable,
            _ => CardState::Ready,
        }
    }

    /// Consumes world events and adapter input to emit placement commands.
    ///
    /// A click only produces a command while no earlier placement awaits its
    /// outcome, so one selection never plants twice.
    pub fn handle(
        &mut self,
        events: &[Event],
        input: PlantingInput,
        balance: u32,
        out: &mut Vec<Command>,
    ) {
        for event in events {
            self.observe(event);
        }

        if input.cancel {
            self.selected = None;
        }

        if let Some(kind) = input.select {
            if self.card_state(kind, balance) == CardState::Ready {
                self.selected = Some(kind);
            }
        }

        if self.pending.is_some() {
            return;
        }

        if let (Some(kind), Some(cell)) = (self.selected, input.target) {
            self.pending = Some(kind);
            out.push(Command::PlacePlant { kind, cell });
        }
    }

    fn observe(&mut self, event: &Event) {
        match event {
            Event::TimeAdvanced { dt } => {
                for remaining in self.recharges.values_mut() {
                    *remaining = remaining.saturating_sub(*dt);
                }
            }
            Event::PlantPlaced { kind, .. } => {
                let _ = self.recharges.insert(*kind, kind.stats().recharge);
                if self.pending == Some(*kind) {
                    self.pending = None;
                    self.selected = None;
                }
            }
            Event::PlantPlacementRejected { kind, .. } => {
                if self.pending == Some(*kind) {
                    self.pending = None;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawn_defence_core::{LawnPoint, PlacementError, PlantId};

    fn click(cell: CellCoord) -> PlantingInput {
        PlantingInput {
            target: Some(cell),
            ..PlantingInput::default()
        }
    }

    fn select(kind: PlantKind) -> PlantingInput {
        PlantingInput {
            select: Some(kind),
            ..PlantingInput::default()
        }
    }

    fn placed(kind: PlantKind, cell: CellCoord) -> Event {
        Event::PlantPlaced {
            plant: PlantId::new(0),
            kind,
            cell,
            position: LawnPoint::default(),
        }
    }

    #[test]
    fn click_without_selection_does_nothing() {
        let mut planting = Planting::new();
        let mut commands = Vec::new();
        planting.handle(&[], click(CellCoord::new(0, 0)), 500, &mut commands);
        assert!(commands.is_empty());
    }

    #[test]
    fn selected_kind_is_placed_on_click() {
        let mut planting = Planting::new();
        let mut commands = Vec::new();
        planting.handle(&[], select(PlantKind::Peashooter), 100, &mut commands);
        planting.handle(&[], click(CellCoord::new(2, 3)), 100, &mut commands);

        assert_eq!(
            commands,
            vec![Command::PlacePlant {
                kind: PlantKind::Peashooter,
                cell: CellCoord::new(2, 3),
            }]
        );
    }

    #[test]
    fn unaffordable_kind_cannot_be_selected() {
        let mut planting = Planting::new();
        let mut commands = Vec::new();
        planting.handle(&[], select(PlantKind::CherryBomb), 149, &mut commands);
        assert_eq!(planting.selected(), None);
        assert_eq!(
            planting.card_state(PlantKind::CherryBomb, 149),
            CardState::Unaffordable
        );
    }

    #[test]
    fn confirmed_placement_clears_selection_and_starts_recharge() {
        let mut planting = Planting::new();
        let mut commands = Vec::new();
        let cell = CellCoord::new(1, 1);
        planting.handle(&[], select(PlantKind::WallNut), 50, &mut commands);
        planting.handle(&[], click(cell), 50, &mut commands);

        planting.handle(
            &[placed(PlantKind::WallNut, cell)],
            PlantingInput::default(),
            500,
            &mut commands,
        );
        assert_eq!(planting.selected(), None);
        assert_eq!(
            planting.card_state(PlantKind::WallNut, 500),
            CardState::Recharging(Duration::from_secs(30))
        );

        planting.handle(
            &[Event::TimeAdvanced {
                dt: Duration::from_secs(30),
            }],
            select(PlantKind::WallNut),
            500,
            &mut commands,
        );
        assert_eq!(planting.selected(), Some(PlantKind::WallNut));
    }

    #[test]
    fn pending_placement_blocks_second_click() {
        let mut planting = Planting::new();
        let mut commands = Vec::new();
        planting.handle(&[], select(PlantKind::Sunflower), 100, &mut commands);
        planting.handle(&[], click(CellCoord::new(0, 0)), 100, &mut commands);
        planting.handle(&[], click(CellCoord::new(1, 0)), 100, &mut commands);
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn rejected_placement_keeps_selection() {
        let mut planting = Planting::new();
        let mut commands = Vec::new();
        let cell = CellCoord::new(0, 0);
        planting.handle(&[], select(PlantKind::Sunflower), 100, &mut commands);
        planting.handle(&[], click(cell), 100, &mut commands);

        let rejection = Event::PlantPlacementRejected {
            kind: PlantKind::Sunflower,
            cell,
            reason: PlacementError::Occupied,
        };
        planting.handle(&[rejection], click(CellCoord::new(1, 0)), 100, &mut commands);

        assert_eq!(planting.selected(), Some(PlantKind::Sunflower));
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn cancel_drops_selection() {
        let mut planting = Planting::new();
        let mut commands = Vec::new();
        planting.handle(&[], select(PlantKind::Sunflower), 100, &mut commands);
        planting.handle(
            &[],
            PlantingInput {
                cancel: true,
                target: Some(CellCoord::new(0, 0)),
                ..PlantingInput::default()
            },
            100,
            &mut commands,
        );
        assert_eq!(planting.selected(), None);
        assert!(commands.is_empty());
    }
}
