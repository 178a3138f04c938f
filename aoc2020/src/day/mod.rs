pub mod day01;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day08;
pub mod day10;
pub mod day11;
