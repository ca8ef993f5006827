use std::{
    path::PathBuf,
    sync::{Arc, RwLock},
};

use anyhow::Context;
use clap::Parser;
use config::ClientConfig;
use liblife::{Grid, Rule, Simulation};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use ticker::{sleeper::Sleeper, TickerHost};

mod cli;
mod config;
mod renderer;
mod ticker;

pub struct State {
    simulation: Simulation<StdRng>,
    ticker: Option<TickerHost>,
    tick_millis: u64,
}

impl State {
    pub fn new(simulation: Simulation<StdRng>, tick_millis: u64) -> Self {
        Self {
            simulation,
            ticker: None,
            tick_millis,
        }
    }
}

/// Colored Game of Life on a wrapping grid.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON config file. Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<u32>,

    #[arg(long)]
    columns: Option<u32>,

    /// Rule in B/S notation, e.g. B3/S23.
    #[arg(long)]
    rule: Option<Rule>,

    #[arg(long)]
    tick_millis: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Generations to play before exiting. Ignored with --interactive.
    #[arg(long)]
    generations: Option<u32>,

    /// Read commands from stdin instead of playing straight through.
    #[arg(short, long)]
    interactive: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::load(path)
                .with_context(|| format!("Loading config from {}", path.display()))?,
            None => ClientConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(rule) = self.rule {
            config.rule = rule;
        }
        if let Some(tick_millis) = self.tick_millis {
            config.tick_millis = tick_millis;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(generations) = self.generations {
            config.max_generations = generations;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config()?;

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let simulation = new_simulation(&config)?;

    info!(
        "Starting {}x{} grid with rule {}, {} cells alive",
        config.rows,
        config.columns,
        config.rule,
        simulation.grid().alive_count()
    );

    if args.interactive {
        renderer::draw(simulation.grid(), simulation.generation_number());

        let state_arc = Arc::new(RwLock::new(State::new(simulation, config.tick_millis)));
        cli::run_cli(state_arc)
    } else {
        play(simulation, &config);
        Ok(())
    }
}

fn new_simulation(config: &ClientConfig) -> anyhow::Result<Simulation<StdRng>> {
    let grid = Grid::with_rule(config.rows, config.columns, config.rule)
        .context("Couldn't create grid")?;

    let random = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Ok(Simulation::new(grid, random))
}

fn play(mut simulation: Simulation<StdRng>, config: &ClientConfig) {
    let mut sleeper = Sleeper::from_millis(config.tick_millis);

    renderer::draw(simulation.grid(), simulation.generation_number());
    sleeper.sleep();

    simulation.play(config.max_generations, |generation, grid| {
        renderer::draw(grid, generation);
        sleeper.sleep();
    });

    info!(
        "Played {} generations, {} cells alive",
        simulation.generation_number(),
        simulation.grid().alive_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from(["life", "--rows", "8", "--rule", "B36/S23", "--seed", "3"]);
        let config = args.config().unwrap();

        assert_eq!(config.rows, 8);
        assert_eq!(config.columns, ClientConfig::default().columns);
        assert_eq!(config.rule, Rule::new(&[3, 6], &[2, 3]));
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn invalid_rule_flag_is_rejected() {
        assert!(Args::try_parse_from(["life", "--rule", "B3"]).is_err());
    }

    #[test]
    fn zero_sized_grid_is_an_error() {
        let config = ClientConfig {
            rows: 0,
            ..ClientConfig::default()
        };
        assert!(new_simulation(&config).is_err());
    }

    #[test]
    fn same_seed_same_simulation() {
        let config = ClientConfig {
            rows: 10,
            columns: 10,
            seed: Some(99),
            ..ClientConfig::default()
        };

        let a = new_simulation(&config).unwrap();
        let b = new_simulation(&config).unwrap();
        assert_eq!(a.grid(), b.grid());
    }
}
