//! rover-cli — interactive console session for the rover plateau simulation.
//!
//! Drives one [`Session`] through the line protocol: a grid prompt, then for
//! each rover a starting-position prompt and a movement-plan prompt,
//! printing `Rover N Output: x y H` once the plan has executed.  Typing
//! `Exit` (any case) at any prompt ends the session; so does end of input.
//!
//! Every validation failure prints the error and re-prompts — the session
//! state is never torn down by bad input.

mod parse;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use rover_core::Grid;
use rover_sim::Session;

use parse::Line;

/// Interactive rover plateau simulation.
#[derive(Parser)]
#[command(name = "rover")]
struct Cli {
    /// Read the session's input lines from a file instead of stdin
    /// (end of file behaves like typing Exit).
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    run_session(&mut input)
}

fn run_session(input: &mut dyn BufRead) -> Result<()> {
    // ── Grid prompt ───────────────────────────────────────────────────────
    let grid = loop {
        prompt("Enter Graph Upper Right Coordinate (type Exit to quit anytime): ")?;
        let Some(line) = read_line(input)? else { return Ok(()) };
        match parse::grid_line(&line) {
            Ok(Line::Exit) => return Ok(()),
            Ok(Line::Value((max_x, max_y))) => match Grid::new(max_x, max_y) {
                Ok(grid) => break grid,
                Err(e) => println!("{e}"),
            },
            Err(e) => println!("{e}"),
        }
    };

    let mut session = Session::new(grid);

    // ── Per-rover loop: place, plan, execute, report ──────────────────────
    loop {
        let n = session.next_ordinal();

        let id = loop {
            prompt(&format!("Rover {n} Starting Position (type Exit to quit anytime): "))?;
            let Some(line) = read_line(input)? else { return Ok(()) };
            match parse::position_line(&line) {
                Ok(Line::Exit) => return Ok(()),
                Ok(Line::Value((x, y, heading))) => match session.place_rover(x, y, heading) {
                    Ok(id) => break id,
                    Err(e) => println!("{e}"),
                },
                Err(e) => println!("{e}"),
            }
        };

        loop {
            prompt(&format!("Rover {n} Movement Plan (type Exit to quit anytime): "))?;
            let Some(line) = read_line(input)? else { return Ok(()) };
            match parse::plan_line(&line) {
                Ok(Line::Exit) => return Ok(()),
                Ok(Line::Value(plan)) => match session.assign_plan(id, &plan) {
                    Ok(()) => break,
                    Err(e) => println!("{e}"),
                },
                Err(e) => println!("{e}"),
            }
        }

        let rover = session.execute_plan(id)?;
        println!("Rover {n} Output: {rover}");
    }
}

/// Print a prompt without a trailing newline and flush it out.
fn prompt(text: &str) -> io::Result<()> {
    print!("{text}");
    io::stdout().flush()
}

/// One line of input, newline stripped; `None` on end of input.
fn read_line(input: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}
