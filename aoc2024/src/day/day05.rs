use crate::prelude::*;
use std::cmp::Ordering;

pub struct Answer;

#[derive(Debug, Clone)]
pub struct PrintQueue {
    /// `(before, after)` pairs; only pairs that appear are ordered.
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl Solver for Answer {
    type Input = PrintQueue;
    type Output1 = u32;
    type Output2 = u32;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        let text = parse_string(r);
        let (rules, updates) = text.split_once("\n\n").expect("missing update list");

        PrintQueue {
            rules: rules
                .lines()
                .map(|line| {
                    let (before, after) = line.split_once('|').expect("malformed rule");
                    (
                        before.parse().expect("malformed rule"),
                        after.parse().expect("malformed rule"),
                    )
                })
                .collect(),
            updates: updates
                .trim()
                .lines()
                .map(|line| parse_list(line, ","))
                .collect(),
        }
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input
            .updates
            .iter()
            .filter(|update| ordered(update, &input.rules))
            .map(|update| middle(update))
            .sum()
    }

    /// Reorder the offending updates by the rule relation, then the same sum.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input
            .updates
            .iter()
            .filter(|update| !ordered(update, &input.rules))
            .map(|update| {
                let fixed: Vec<u32> = update
                    .iter()
                    .copied()
                    .sorted_by(|&a, &b| {
                        if input.rules.contains(&(a, b)) {
                            Ordering::Less
                        } else if input.rules.contains(&(b, a)) {
                            Ordering::Greater
                        } else {
                            Ordering::Equal
                        }
                    })
                    .collect();
                middle(&fixed)
            })
            .sum()
    }
}

fn ordered(update: &[u32], rules: &HashSet<(u32, u32)>) -> bool {
    update
        .iter()
        .tuple_combinations()
        .all(|(&a, &b)| !rules.contains(&(b, a)))
}

fn middle(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const MANUAL: &str = "47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47";

    #[test]
    fn part_one() {
        let queue = Answer.parse_input(Cursor::new(MANUAL));
        assert_eq!(Answer.solve_first(&queue), 143);
    }

    #[test]
    fn part_two() {
        let queue = Answer.parse_input(Cursor::new(MANUAL));
        assert_eq!(Answer.solve_second(&queue), 123);
    }
}
