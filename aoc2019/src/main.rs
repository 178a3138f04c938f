use anyhow::{bail, Result};
use aoc_runner::{output, Solver};
use clap::Parser;

mod day;
mod prelude;
use day::*;

fn main() -> Result<()> {
    let app = App::parse();
    app.run()
}

/// Advent of code 2019
#[derive(Debug, Parser)]
struct App {
    /// Day to run
    #[arg(short, long)]
    day: usize,
}

impl App {
    fn run(&self) -> Result<()> {
        output::print_header(2019);
        match self.day {
            1 => day01::Answer.solve(self.day)?,
            3 => day03::Answer.solve(self.day)?,
            4 => day04::Answer.solve(self.day)?,
            6 => day06::Answer.solve(self.day)?,
            8 => day08::Answer.solve(self.day)?,
            _ => bail!("Not yet implemented"),
        };
        Ok(())
    }
}
