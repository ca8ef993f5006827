use std::{
    io,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use anyhow::{anyhow, bail, Context};
use liblife::{CellColor, Position, Rule};

use crate::{renderer, ticker::TickerHost, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub fn run_cli(state_arc: Arc<RwLock<State>>) -> anyhow::Result<()> {
    for line_res in io::stdin().lines() {
        let line = line_res.context("Couldn't read command")?;
        if line.trim().is_empty() {
            continue;
        }

        match handle_cmd(&state_arc, line.split_whitespace()) {
            Ok(Flow::Continue) => println!("OK"),
            Ok(Flow::Exit) => break,
            Err(e) => eprintln!("! {e:?}"),
        }
    }

    stop_ticker(&state_arc)
}

fn handle_cmd<'a, I>(state_arc: &Arc<RwLock<State>>, mut args: I) -> anyhow::Result<Flow>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<u32>()?;

            let mut state = write_state(state_arc)?;
            state.simulation.play(times, |_, _| {});
            draw(&state);
        }

        "run" => {
            let rate = args.next().map(str::parse::<u64>).transpose()?;
            start_ticker(state_arc, rate)?;
        }

        "stop" => {
            stop_ticker(state_arc)?;
        }

        "clear" => {
            let mut state = write_state(state_arc)?;
            state.simulation.clear();
            draw(&state);
        }

        "reset" => {
            let mut state = write_state(state_arc)?;
            state.simulation.reset();
            draw(&state);
        }

        "set" => {
            let pos = parse_pos(&mut args)?;
            let color = args
                .next()
                .map(str::parse::<CellColor>)
                .transpose()
                .context("expected red or blue")?
                .unwrap_or(CellColor::Red);

            let mut state = write_state(state_arc)?;
            state.simulation.grid_mut().seed_alive([pos], color);
            draw(&state);
        }

        "toggle" => {
            let pos = parse_pos(&mut args)?;

            let mut state = write_state(state_arc)?;
            state.simulation.grid_mut().cell_mut(pos).toggle_state();
            draw(&state);
        }

        "rule" => {
            let rule = args.next().context("missing rule")?.parse::<Rule>()?;

            let mut state = write_state(state_arc)?;
            state.simulation.grid_mut().set_rule(rule);
        }

        "show" => {
            draw(&*read_state(state_arc)?);
        }

        "exit" => return Ok(Flow::Exit),

        _ => bail!("Unknown command"),
    }

    Ok(Flow::Continue)
}

fn parse_pos<'a, I>(args: &mut I) -> anyhow::Result<Position>
where
    I: Iterator<Item = &'a str>,
{
    let row = args.next().context("missing row")?.parse::<i64>()?;
    let column = args.next().context("missing column")?.parse::<i64>()?;
    Ok(Position::new(row, column))
}

fn read_state(state_arc: &RwLock<State>) -> anyhow::Result<RwLockReadGuard<'_, State>> {
    state_arc
        .read()
        .map_err(|_| anyhow!("State lock poisoned"))
}

fn write_state(state_arc: &RwLock<State>) -> anyhow::Result<RwLockWriteGuard<'_, State>> {
    state_arc
        .write()
        .map_err(|_| anyhow!("State lock poisoned"))
}

fn draw(state: &State) {
    renderer::draw(state.simulation.grid(), state.simulation.generation_number());
}

fn start_ticker(state_arc: &Arc<RwLock<State>>, rate: Option<u64>) -> anyhow::Result<()> {
    let mut guard = write_state(state_arc)?;
    let state = &mut *guard;

    if let Some(rate) = rate {
        state.tick_millis = rate;
    }

    match &mut state.ticker {
        Some(ticker) => ticker.set_rate(state.tick_millis)?,
        None => state.ticker = Some(TickerHost::start(state_arc.clone(), state.tick_millis)),
    }

    Ok(())
}

fn stop_ticker(state_arc: &RwLock<State>) -> anyhow::Result<()> {
    // Take the ticker out first, it needs the state lock to wind down.
    let ticker = write_state(state_arc)?.ticker.take();

    match ticker {
        Some(ticker) => ticker.stop(),
        None => Ok(()),
    }
}
