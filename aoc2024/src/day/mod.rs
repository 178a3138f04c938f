pub mod day01;
pub mod day02;
pub mod day05;
pub mod day07;
pub mod day10;
pub mod day11;
pub mod day19;
