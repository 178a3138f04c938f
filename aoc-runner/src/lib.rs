//! Shared harness for the per-day puzzle binaries: input acquisition, a few
//! parsing helpers, and the [`Solver`] trait every day implements.

pub mod output;

use anyhow::{Context, Result};
use colored::Colorize;
use std::{
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, Read, Seek},
    num::ParseIntError,
    path::Path,
    str::FromStr,
    time::{Duration, Instant},
};
use thiserror::Error;

/// Inputs live next to each year's crate, one file per day.
fn input_path(day: usize) -> String {
    format!("input/day/{:02}.txt", day)
}

/// Failure to acquire a puzzle input. Fatal; nothing retries.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unable to open {path}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{path} is a directory, not a puzzle input")]
    IsDirectory { path: String },
}

/// Anything a day's parser can consume: the bundled input file or an
/// in-memory example string behind a [`io::Cursor`].
pub trait Reader: Seek + Read + BufRead {}

impl<T> Reader for T where T: BufRead + Seek + Read {}

pub fn file_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, InputError> {
    let path_str = path.as_ref().display().to_string();
    let file = File::open(&path).map_err(|source| InputError::Open {
        path: path_str.clone(),
        source,
    })?;

    if file.metadata().map(|m| m.is_dir()).unwrap_or(false) {
        return Err(InputError::IsDirectory { path: path_str });
    }

    Ok(BufReader::new(file))
}

pub fn read_lines<R: Reader>(r: R) -> impl Iterator<Item = String> {
    r.lines().map(Result::unwrap)
}

/// One integer per line.
pub fn parse_to<R: Reader, T: FromStr<Err = ParseIntError>>(r: R) -> Vec<T> {
    read_lines(r)
        .map(|l| l.parse::<T>().expect("malformed integer line"))
        .collect()
}

pub fn parse_string<R: Reader>(mut r: R) -> String {
    let mut buf = String::new();
    r.read_to_string(&mut buf).expect("input is not valid UTF-8");
    buf
}

/// Separator-delimited values on a single trimmed line.
pub fn parse_list<T>(input: &str, sep: &str) -> Vec<T>
where
    T: FromStr,
    T::Err: std::fmt::Debug,
{
    input
        .trim()
        .split(sep)
        .map(|x| x.parse::<T>().expect("malformed list entry"))
        .collect()
}

pub trait Solver {
    type Input;
    type Output1: Display;
    type Output2: Display;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input;
    fn solve_first(&self, input: &Self::Input) -> Self::Output1;
    fn solve_second(&self, input: &Self::Input) -> Self::Output2;

    /// Answers the site has accepted for the bundled input, once known.
    /// Checked after every run; a mismatch aborts.
    fn accepted(&self) -> (Option<&'static str>, Option<&'static str>) {
        (None, None)
    }

    fn load_input<P: AsRef<Path>>(&self, p: P) -> Result<Self::Input> {
        let mut f = file_reader(p)?;
        Ok(self.parse_input(&mut f))
    }

    fn solve(&self, day: usize) -> Result<()> {
        let input = self
            .load_input(input_path(day))
            .with_context(|| "unable to open input file")?;
        let (want_one, want_two) = self.accepted();

        output::print_day(day);

        let now = Instant::now();
        let one = self.solve_first(&input);
        let spent = now.elapsed();
        println!(
            "{}: {}",
            "PART 1".red().bold(),
            format!("{}", one).red().bold()
        );
        print_time(spent);
        check_accepted(1, &one, want_one);

        let now = Instant::now();
        let two = self.solve_second(&input);
        let spent = now.elapsed();
        println!(
            "{}: {}",
            "PART 2".green().bold(),
            format!("{}", two).green().bold()
        );
        print_time(spent);
        check_accepted(2, &two, want_two);

        Ok(())
    }
}

fn check_accepted<T: Display>(part: usize, got: &T, want: Option<&str>) {
    if let Some(want) = want {
        let got = got.to_string();
        assert_eq!(
            got, want,
            "part {} no longer matches the accepted answer",
            part
        );
    }
}

fn print_time(d: Duration) {
    println!(
        "- {}.{}{}{:03} {}",
        format!("{:03}", d.as_secs()).bright_red(),
        format!("{:03}", d.subsec_millis()).red(),
        format!("{:03}", d.subsec_micros() % 1_000).yellow(),
        d.subsec_nanos() % 1_000,
        "seconds".bold(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_to_reads_one_integer_per_line() {
        let nums: Vec<i64> = parse_to(Cursor::new("1\n-2\n3\n"));
        assert_eq!(nums, vec![1, -2, 3]);
    }

    #[test]
    fn parse_list_splits_on_separator() {
        let nums: Vec<usize> = parse_list("3, 4, 1, 5\n", ", ");
        assert_eq!(nums, vec![3, 4, 1, 5]);
    }

    #[test]
    fn missing_input_is_an_open_error() {
        let err = file_reader("input/day/99.txt").unwrap_err();
        assert!(matches!(err, InputError::Open { .. }));
    }
}
