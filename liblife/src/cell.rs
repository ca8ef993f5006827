use strum::{Display, EnumString};

use crate::rule::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CellColor {
    Red,
    Blue,
}

/// A single grid slot. Created dead and uncolored.
///
/// A dead cell may keep the color it had while alive. The color only carries
/// meaning while the cell is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    alive: bool,
    color: Option<CellColor>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_dead(&self) -> bool {
        !self.alive
    }

    pub fn set_alive(&mut self) {
        self.alive = true;
    }

    pub fn set_dead(&mut self) {
        self.alive = false;
    }

    pub fn toggle_state(&mut self) {
        self.alive = !self.alive;
    }

    pub fn color(&self) -> Option<CellColor> {
        self.color
    }

    pub fn set_color(&mut self, color: CellColor) {
        self.color = Some(color);
    }

    /// The color worth showing: `None` for dead cells, whatever they carry.
    pub fn visible_color(&self) -> Option<CellColor> {
        self.color.filter(|_| self.alive)
    }

    /// Whether this cell is alive in the next generation under Conway's B3/S23.
    pub fn next_alive_state(&self, alive_neighbor_count: u8) -> bool {
        self.next_alive_state_under(&Rule::CONWAY, alive_neighbor_count)
    }

    pub fn next_alive_state_under(&self, rule: &Rule, alive_neighbor_count: u8) -> bool {
        rule.next_alive_state(self.alive, alive_neighbor_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive() -> Cell {
        let mut cell = Cell::new();
        cell.set_alive();
        cell
    }

    #[test]
    fn new_cell_is_dead_and_uncolored() {
        let cell = Cell::new();
        assert!(cell.is_dead());
        assert!(!cell.is_alive());
        assert_eq!(cell.color(), None);
    }

    #[test]
    fn state_setters_are_idempotent() {
        let mut cell = Cell::new();
        cell.set_alive();
        cell.set_alive();
        assert!(cell.is_alive());
        cell.set_dead();
        cell.set_dead();
        assert!(cell.is_dead());
    }

    #[test]
    fn toggle_flips_state() {
        let mut cell = Cell::new();
        cell.toggle_state();
        assert!(cell.is_alive());
        cell.toggle_state();
        assert!(cell.is_dead());
    }

    #[test]
    fn color_does_not_touch_state() {
        let mut cell = Cell::new();
        cell.set_color(CellColor::Blue);
        assert!(cell.is_dead());
        assert_eq!(cell.color(), Some(CellColor::Blue));
        assert_eq!(cell.visible_color(), None);

        cell.set_alive();
        cell.set_color(CellColor::Red);
        assert!(cell.is_alive());
        assert_eq!(cell.visible_color(), Some(CellColor::Red));
    }

    #[test]
    fn dead_cell_keeps_stale_color() {
        let mut cell = alive();
        cell.set_color(CellColor::Red);
        cell.set_dead();
        assert_eq!(cell.color(), Some(CellColor::Red));
    }

    #[test]
    fn alive_cell_rule() {
        let cell = alive();
        for count in 0..=8 {
            assert_eq!(cell.next_alive_state(count), count == 2 || count == 3, "count {count}");
        }
    }

    #[test]
    fn dead_cell_rule() {
        let cell = Cell::new();
        for count in 0..=8 {
            assert_eq!(cell.next_alive_state(count), count == 3, "count {count}");
        }
    }

    #[test]
    fn next_alive_state_is_pure() {
        let cell = alive();
        let before = cell;
        assert_eq!(cell.next_alive_state(1), cell.next_alive_state(1));
        assert_eq!(cell, before);
    }

    #[test]
    fn colors_parse_case_insensitively() {
        assert_eq!("RED".parse::<CellColor>(), Ok(CellColor::Red));
        assert_eq!("blue".parse::<CellColor>(), Ok(CellColor::Blue));
        assert!("green".parse::<CellColor>().is_err());
        assert_eq!(CellColor::Red.to_string(), "red");
    }
}
