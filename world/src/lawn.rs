//! Dense placement grid mapping lawn cells to the plant that occupies them.

use lawn_defence_core::{CellCoord, PlantId};

#[derive(Clone, Debug)]
pub(crate) struct LawnGrid {
    columns: u32,
    rows: u32,
    cells: Vec<Option<PlantId>>,
}

impl LawnGrid {
    pub(crate) fn new(columns: u32, rows: u32) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            columns,
            rows,
            cells: vec![None; capacity],
        }
    }

    pub(crate) fn occupant(&self, cell: CellCoord) -> Option<PlantId> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied().flatten())
    }

    /// Reports whether the cell lies inside the grid and holds no plant.
    pub(crate) fn is_free(&self, cell: CellCoord) -> bool {
        self.index(cell).is_some() && self.occupant(cell).is_none()
    }

    pub(crate) fn occupy(&mut self, plant: PlantId, cell: CellCoord) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = Some(plant);
            }
        }
    }

    /// Frees the cell, but only while it still belongs to `plant`.
    pub(crate) fn vacate(&mut self, plant: PlantId, cell: CellCoord) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                if *slot == Some(plant) {
                    *slot = None;
                }
            }
        }
    }

    pub(crate) fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }

    pub(crate) fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = LawnGrid::new(9, 5);
        assert_eq!(grid.occupied_count(), 0);
        assert!(grid.is_free(CellCoord::new(8, 4)));
    }

    #[test]
    fn cells_outside_grid_are_never_free() {
        let grid = LawnGrid::new(9, 5);
        assert!(!grid.is_free(CellCoord::new(9, 0)));
        assert!(!grid.is_free(CellCoord::new(0, 5)));
        assert_eq!(grid.index(CellCoord::new(9, 0)), None);
    }

    #[test]
    fn index_is_row_major() {
        let grid = LawnGrid::new(9, 5);
        assert_eq!(grid.index(CellCoord::new(0, 0)), Some(0));
        assert_eq!(grid.index(CellCoord::new(3, 2)), Some(21));
    }

    #[test]
    fn occupy_and_vacate_round_trip() {
        let mut grid = LawnGrid::new(3, 3);
        let cell = CellCoord::new(1, 2);
        grid.occupy(PlantId::new(4), cell);
        assert_eq!(grid.occupant(cell), Some(PlantId::new(4)));
        assert!(!grid.is_free(cell));

        grid.vacate(PlantId::new(4), cell);
        assert!(grid.is_free(cell));
    }

    #[test]
    fn vacate_ignores_foreign_occupant() {
        let mut grid = LawnGrid::new(3, 3);
        let cell = CellCoord::new(0, 0);
        grid.occupy(PlantId::new(1), cell);
        grid.vacate(PlantId::new(2), cell);
        assert_eq!(grid.occupant(cell), Some(PlantId::new(1)));
    }
}
