use crate::prelude::*;
use common::span::{merge, Span};

pub struct Answer;

#[derive(Debug, Clone)]
pub struct Inventory {
    fresh: Vec<Span>,
    ids: Vec<i64>,
}

impl Solver for Answer {
    type Input = Inventory;
    type Output1 = usize;
    type Output2 = i64;

    /// Fresh ranges, a blank line, then the ids on hand.
    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        let text = parse_string(r);
        let (ranges, ids) = text.split_once("\n\n").expect("missing id list");

        Inventory {
            fresh: ranges
                .lines()
                .map(|line| {
                    let (lo, hi) = line.split_once('-').expect("malformed range");
                    Span::new(
                        lo.parse().expect("malformed range"),
                        hi.parse().expect("malformed range"),
                    )
                })
                .collect(),
            ids: ids
                .trim()
                .lines()
                .map(|line| line.parse().expect("malformed id"))
                .collect(),
        }
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input
            .ids
            .iter()
            .filter(|&&id| input.fresh.iter().any(|span| span.contains(id)))
            .count()
    }

    /// Total ids the ranges cover, overlaps counted once.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        merge(input.fresh.clone()).iter().map(Span::count).sum()
    }
}
