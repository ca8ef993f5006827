use std::{
    fmt::Write as _,
    io::{self, IsTerminal, Write},
};

use colored::Colorize;
use liblife::{Cell, CellColor, Grid};

const ALIVE_GLYPH: &str = "██";
const DEAD_GLYPH: &str = "· ";

/// Moves the cursor home and clears the screen.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

pub fn draw(grid: &Grid, generation: u64) {
    let mut stdout = io::stdout().lock();

    let frame = render(grid, generation);

    let result = if stdout.is_terminal() {
        write!(stdout, "{CLEAR_SCREEN}{frame}")
    } else {
        write!(stdout, "{frame}")
    };

    if let Err(e) = result.and_then(|_| stdout.flush()) {
        log::warn!("Couldn't draw frame: {e}");
    }
}

pub fn render(grid: &Grid, generation: u64) -> String {
    let mut frame = String::new();

    for row in grid.iter_rows() {
        for cell in row {
            let _ = write!(frame, "{}", render_cell(cell));
        }
        frame.push('\n');
    }

    let _ = writeln!(
        frame,
        "generation {generation} | {} alive | {}",
        grid.alive_count(),
        grid.rule()
    );

    frame
}

fn render_cell(cell: &Cell) -> colored::ColoredString {
    if cell.is_dead() {
        return DEAD_GLYPH.dimmed();
    }

    match cell.visible_color() {
        Some(CellColor::Red) => ALIVE_GLYPH.red(),
        Some(CellColor::Blue) => ALIVE_GLYPH.blue(),
        None => ALIVE_GLYPH.white(),
    }
}
