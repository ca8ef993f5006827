use log::{debug, trace};

pub use cell::{Cell, CellColor};
pub use error::{GridError, RuleParseError};
pub use grid::Grid;
pub use pos::Position;
pub use random::{BoolSequence, RandomSource};
pub use rule::Rule;

pub mod cell;
pub mod error;
pub mod grid;
pub mod pos;
pub mod random;
pub mod rule;

/// Owns a [`Grid`] and counts the generations played on it.
///
/// The grid is seeded once from `random` on construction and again on every
/// [`reset`](Simulation::reset). Stepping is purely computational, pacing
/// belongs to whoever drives the simulation.
#[derive(Debug, Clone)]
pub struct Simulation<R> {
    grid: Grid,
    random: R,
    generation_number: u64,
}

impl<R> Simulation<R>
where
    R: RandomSource,
{
    pub fn new(mut grid: Grid, mut random: R) -> Self {
        grid.random_generation(&mut random);

        Self {
            grid,
            random,
            generation_number: 0,
        }
    }

    pub fn next(&mut self) {
        self.grid.next_generation();
        self.generation_number += 1;

        trace!("Generation {}", self.generation_number);
    }

    /// Steps exactly `max_generations` times, handing the new generation
    /// number and the grid to `on_step` after each step.
    pub fn play<F>(&mut self, max_generations: u32, mut on_step: F)
    where
        F: FnMut(u64, &Grid),
    {
        for _ in 0..max_generations {
            self.next();
            on_step(self.generation_number, &self.grid);
        }
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation_number = 0;
    }

    pub fn reset(&mut self) {
        self.clear();
        self.grid.random_generation(&mut self.random);

        debug!("Reset simulation, {} cells alive", self.grid.alive_count());
    }

    pub fn generation_number(&self) -> u64 {
        self.generation_number
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn simulation(seed: u64) -> Simulation<StdRng> {
        Simulation::new(Grid::new(16, 16).unwrap(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn new_seeds_the_grid() {
        let sim = Simulation::new(Grid::new(2, 2).unwrap(), BoolSequence::new([true, false, false, true]));
        assert_eq!(sim.generation_number(), 0);
        assert!(sim.grid().cell((0, 0)).is_alive());
        assert!(sim.grid().cell((0, 1)).is_dead());
        assert_eq!(sim.grid().cell((1, 1)).color(), Some(CellColor::Red));
    }

    #[test]
    fn next_counts_generations() {
        let mut sim = simulation(1);
        for expected in 1..=10 {
            sim.next();
            assert_eq!(sim.generation_number(), expected);
        }
    }

    #[test]
    fn next_matches_grid_transition() {
        let mut sim = simulation(2);
        let mut expected = sim.grid().clone();

        sim.next();
        expected.next_generation();

        assert_eq!(sim.grid(), &expected);
    }

    #[test]
    fn play_reports_every_step() {
        let mut sim = simulation(3);
        sim.next();

        let mut reported = Vec::new();
        sim.play(5, |generation, grid| {
            assert_eq!(grid.rows(), 16);
            reported.push(generation);
        });

        assert_eq!(reported, [2, 3, 4, 5, 6]);
        assert_eq!(sim.generation_number(), 6);
    }

    #[test]
    fn play_zero_does_nothing() {
        let mut sim = simulation(4);
        let before = sim.grid().clone();

        sim.play(0, |_, _| panic!("no steps expected"));

        assert_eq!(sim.generation_number(), 0);
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn clear_kills_everything_and_resets_count() {
        let mut sim = simulation(5);
        sim.play(3, |_, _| {});

        sim.clear();

        assert_eq!(sim.generation_number(), 0);
        assert_eq!(sim.grid().alive_count(), 0);
    }

    #[test]
    fn reset_reseeds() {
        let mut sim = Simulation::new(
            Grid::new(1, 4).unwrap(),
            BoolSequence::new([false, false, false, false, true, true, false, true]),
        );
        assert_eq!(sim.grid().alive_count(), 0);
        sim.next();

        sim.reset();

        assert_eq!(sim.generation_number(), 0);
        let states: Vec<bool> = sim.grid().iter().map(Cell::is_alive).collect();
        assert_eq!(states, [true, true, false, true]);
    }

    #[test]
    fn grid_mut_edits_are_visible() {
        let mut sim = simulation(6);
        sim.clear();
        sim.grid_mut().seed_alive([(0, 0), (0, 1), (1, 0), (1, 1)], CellColor::Blue);

        sim.next();

        assert_eq!(sim.grid().alive_count(), 4);
        assert_eq!(sim.grid().cell((1, 1)).visible_color(), Some(CellColor::Blue));
    }
}
