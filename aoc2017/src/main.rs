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

/// Advent of code 2017
#[derive(Debug, Parser)]
struct App {
    /// Day to run
    #[arg(short, long)]
    day: usize,
}

impl App {
    fn run(&self) -> Result<()> {
        output::print_header(2017);
        match self.day {
            1 => day01::Answer.solve(self.day)?,
            2 => day02::Answer.solve(self.day)?,
            4 => day04::Answer.solve(self.day)?,
            5 => day05::Answer.solve(self.day)?,
            6 => day06::Answer.solve(self.day)?,
            10 => day10::Answer.solve(self.day)?,
            11 => day11::Answer.solve(self.day)?,
            12 => day12::Answer.solve(self.day)?,
            14 => day14::Answer.solve(self.day)?,
            _ => bail!("Not yet implemented"),
        };
        Ok(())
    }
}
