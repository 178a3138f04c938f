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

/// Advent of code 2025
#[derive(Debug, Parser)]
struct App {
    /// Day to run
    #[arg(short, long)]
    day: usize,
}

impl App {
    fn run(&self) -> Result<()> {
        output::print_header(2025);
        match self.day {
            1 => day01::Answer.solve(self.day)?,
            2 => day02::Answer.solve(self.day)?,
            3 => day03::Answer.solve(self.day)?,
            5 => day05::Answer.solve(self.day)?,
            _ => bail!("Not yet implemented"),
        };
        Ok(())
    }
}
