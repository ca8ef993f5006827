use std::slice;

use itertools::Itertools;
use log::{debug, trace};
use rayon::prelude::*;

use crate::{
    cell::{Cell, CellColor},
    error::GridError,
    pos::Position,
    random::RandomSource,
    rule::Rule,
};

const NEIGHBOR_RELATIVE_POSITIONS: [[i64; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Fixed-size toroidal grid of [`Cell`]s stored row-major.
///
/// Every position resolves to a cell: rows and columns wrap around, so the top
/// edge touches the bottom edge and the left edge touches the right edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    columns: u32,
    rule: Rule,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: u32, columns: u32) -> Result<Self, GridError> {
        Self::with_rule(rows, columns, Rule::CONWAY)
    }

    pub fn with_rule(rows: u32, columns: u32, rule: Rule) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimension { rows, columns });
        }

        debug!("Creating {rows}x{columns} grid with rule {rule}");

        Ok(Self {
            rows,
            columns,
            rule,
            cells: vec![Cell::default(); rows as usize * columns as usize],
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn set_rule(&mut self, rule: Rule) {
        self.rule = rule;
    }

    pub fn cell<P>(&self, pos: P) -> &Cell
    where
        P: Into<Position>,
    {
        &self.cells[self.pos_to_index(pos.into())]
    }

    pub fn cell_mut<P>(&mut self, pos: P) -> &mut Cell
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos.into());
        &mut self.cells[index]
    }

    /// All cells in row-major order. Call again to restart.
    pub fn iter(&self) -> slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), cell))
    }

    /// One slice per row, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns as usize)
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// The 8 wrapped Moore neighbors of `pos`. On grids narrower than 3 in
    /// either direction the same cell may show up more than once.
    pub fn neighbors<P>(&self, pos: P) -> impl Iterator<Item = &Cell>
    where
        P: Into<Position>,
    {
        // Wrap the center first so the offsets below can't overflow.
        let pos = self.index_to_pos(self.pos_to_index(pos.into()));

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .map(move |[row_offset, column_offset]| self.cell(pos.offset(*row_offset, *column_offset)))
    }

    pub fn alive_neighbor_count<P>(&self, pos: P) -> u8
    where
        P: Into<Position>,
    {
        self.neighbors(pos).filter(|cell| cell.is_alive()).count() as u8
    }

    /// Majority color among the alive neighbors of `pos`. Ties, including no
    /// colored neighbors at all, go to [`CellColor::Blue`].
    pub fn majority_color<P>(&self, pos: P) -> CellColor
    where
        P: Into<Position>,
    {
        let (red, blue) = self
            .neighbors(pos)
            .filter_map(|cell| cell.visible_color())
            .fold((0, 0), |(red, blue), color| match color {
                CellColor::Red => (red + 1, blue),
                CellColor::Blue => (red, blue + 1),
            });

        if red > blue {
            CellColor::Red
        } else {
            CellColor::Blue
        }
    }

    /// Advances every cell by one generation.
    ///
    /// All next states are computed from the current buffer, which stays
    /// untouched until the complete next buffer replaces it. Newborn cells take
    /// the majority color of their neighbors, survivors keep their color.
    pub fn next_generation(&mut self) {
        let next_cells: Vec<Cell> = (0..self.cells.len())
            .into_par_iter()
            .with_min_len(self.columns as usize)
            .map(|index| self.next_cell(index))
            .collect();

        self.cells = next_cells;

        trace!("Advanced grid, {} cells alive", self.alive_count());
    }

    fn next_cell(&self, index: usize) -> Cell {
        let pos = self.index_to_pos(index);
        let cell = self.cells[index];
        let alive = cell.next_alive_state_under(&self.rule, self.alive_neighbor_count(pos));

        let mut next_cell = cell;
        if alive {
            if cell.is_dead() {
                next_cell.set_color(self.majority_color(pos));
            }
            next_cell.set_alive();
        } else {
            next_cell.set_dead();
        }

        next_cell
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set_dead();
        }

        debug!("Cleared grid");
    }

    /// Draws one boolean per cell in row-major order. `true` makes the cell
    /// alive and red, `false` kills it.
    pub fn random_generation<R>(&mut self, random: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        for cell in &mut self.cells {
            if random.next_bool() {
                cell.set_color(CellColor::Red);
                cell.set_alive();
            } else {
                cell.set_dead();
            }
        }

        debug!("Seeded grid, {} cells alive", self.alive_count());
    }

    /// Marks the given positions alive with `color`, leaving every other cell as is.
    pub fn seed_alive<I, P>(&mut self, positions: I, color: CellColor)
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        for pos in positions {
            let cell = self.cell_mut(pos);
            cell.set_color(color);
            cell.set_alive();
        }
    }

    pub fn alive_positions(&self) -> Vec<Position> {
        self.enumerate_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| pos)
            .collect_vec()
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        let row = wrap(pos.row, self.rows);
        let column = wrap(pos.column, self.columns);
        row * self.columns as usize + column
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let columns = self.columns as usize;
        Position {
            row: (index / columns) as i64,
            column: (index % columns) as i64,
        }
    }
}

fn wrap(index: i64, len: u32) -> usize {
    index.rem_euclid(len as i64) as usize
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
