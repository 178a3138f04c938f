use crate::prelude::*;

pub struct Answer;

#[derive(Debug, Clone)]
pub struct Onsen {
    towels: Vec<String>,
    designs: Vec<String>,
}

impl Solver for Answer {
    type Input = Onsen;
    type Output1 = usize;
    type Output2 = u64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        let text = parse_string(r);
        let (towels, designs) = text.split_once("\n\n").expect("missing design list");

        Onsen {
            towels: towels.trim().split(", ").map(str::to_owned).collect(),
            designs: designs.trim().lines().map(str::to_owned).collect(),
        }
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input
            .designs
            .iter()
            .filter(|design| arrangements(design, &input.towels) > 0)
            .count()
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input
            .designs
            .iter()
            .map(|design| arrangements(design, &input.towels))
            .sum()
    }
}

/// Ways to cover the design with towels. The memo table is keyed by suffix
/// position and rebuilt per design; results from one design are meaningless
/// for the next.
fn arrangements(design: &str, towels: &[String]) -> u64 {
    let mut cache: HashMap<usize, u64> = HashMap::default();
    ways(design, towels, 0, &mut cache)
}

fn ways(design: &str, towels: &[String], from: usize, cache: &mut HashMap<usize, u64>) -> u64 {
    if from == design.len() {
        return 1;
    }
    if let Some(&known) = cache.get(&from) {
        return known;
    }

    let total = towels
        .iter()
        .filter(|towel| design[from..].starts_with(towel.as_str()))
        .map(|towel| ways(design, towels, from + towel.len(), cache))
        .sum();

    cache.insert(from, total);
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const STOCK: &str = "r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb";

    #[test]
    fn part_one() {
        let onsen = Answer.parse_input(Cursor::new(STOCK));
        assert_eq!(Answer.solve_first(&onsen), 6);
    }

    #[test]
    fn part_two() {
        let onsen = Answer.parse_input(Cursor::new(STOCK));
        assert_eq!(Answer.solve_second(&onsen), 16);
    }

    #[test]
    fn arrangement_counts_per_design() {
        let onsen = Answer.parse_input(Cursor::new(STOCK));
        assert_eq!(arrangements("gbbr", &onsen.towels), 4);
        assert_eq!(arrangements("rrbgbr", &onsen.towels), 6);
        assert_eq!(arrangements("ubwu", &onsen.towels), 0);
    }
}
