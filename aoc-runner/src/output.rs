use colored::Colorize;

pub const NUMBER_DASHES: usize = 80;

pub fn print_header(year: usize) {
    let title = format!("Advent of Code {}", year);
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
    println!(
        "{} {} {}",
        "-".repeat(NUMBER_DASHES / 2 - 10).red().bold(),
        title.bold(),
        "-".repeat(NUMBER_DASHES / 2 - 11).red().bold()
    );
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
}

pub fn print_day(day: usize) {
    println!("- {}", format!("Day {:02}", day).bold());
}
