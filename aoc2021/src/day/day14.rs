use crate::prelude::*;

pub struct Answer;

#[derive(Debug, Clone)]
pub struct Polymer {
    template: Vec<char>,
    rules: HashMap<(char, char), char>,
}

impl Solver for Answer {
    type Input = Polymer;
    type Output1 = u64;
    type Output2 = u64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        let text = parse_string(r);
        let (template, rules) = text.split_once("\n\n").expect("missing insertion rules");

        let rules = rules
            .trim()
            .lines()
            .map(|line| {
                let (pair, insert) = line.split_once(" -> ").expect("malformed rule");
                let (a, b) = pair
                    .chars()
                    .collect_tuple()
                    .expect("rule pairs are two elements");
                let insert = insert.chars().exactly_one().expect("rule inserts one");
                ((a, b), insert)
            })
            .collect();

        Polymer {
            template: template.trim().chars().collect(),
            rules,
        }
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        spread_after(input, 10)
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        spread_after(input, 40)
    }
}

/// Difference between the most and least common element. The polymer is
/// tracked as pair counts; elements are recovered from pair heads plus the
/// fixed last element.
fn spread_after(polymer: &Polymer, steps: usize) -> u64 {
    let mut pairs: HashMap<(char, char), u64> = HashMap::default();
    for (a, b) in polymer.template.iter().copied().tuple_windows() {
        *pairs.entry((a, b)).or_insert(0) += 1;
    }

    for _ in 0..steps {
        let mut next: HashMap<(char, char), u64> = HashMap::default();
        for (&(a, b), &n) in &pairs {
            match polymer.rules.get(&(a, b)) {
                Some(&m) => {
                    *next.entry((a, m)).or_insert(0) += n;
                    *next.entry((m, b)).or_insert(0) += n;
                }
                None => *next.entry((a, b)).or_insert(0) += n,
            }
        }
        pairs = next;
    }

    let mut elements: HashMap<char, u64> = HashMap::default();
    for (&(a, _), &n) in &pairs {
        *elements.entry(a).or_insert(0) += n;
    }
    *elements
        .entry(*polymer.template.last().expect("empty template"))
        .or_insert(0) += 1;

    match elements.values().minmax() {
        itertools::MinMaxResult::MinMax(min, max) => max - min,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const RULES: &str = "NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C";

    #[test]
    fn part_one() {
        let polymer = Answer.parse_input(Cursor::new(RULES));
        assert_eq!(spread_after(&polymer, 10), 1588);
    }

    #[test]
    fn part_two() {
        let polymer = Answer.parse_input(Cursor::new(RULES));
        assert_eq!(spread_after(&polymer, 40), 2_188_189_693_529);
    }
}
