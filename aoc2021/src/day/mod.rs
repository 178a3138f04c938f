pub mod day01;
pub mod day02;
pub mod day06;
pub mod day13;
pub mod day14;
pub mod day25;
