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

/// Advent of code 2021
#[derive(Debug, Parser)]
struct App {
    /// Day to run
    #[arg(short, long)]
    day: usize,
}

impl App {
    fn run(&self) -> Result<()> {
        output::print_header(2021);
        match self.day {
            1 => day01::Answer.solve(self.day)?,
            2 => day02::Answer.solve(self.day)?,
            6 => day06::Answer.solve(self.day)?,
            13 => day13::Answer.solve(self.day)?,
            14 => day14::Answer.solve(self.day)?,
            25 => day25::Answer.solve(self.day)?,
            _ => bail!("Not yet implemented"),
        };
        Ok(())
    }
}
