use crate::prelude::*;
use petgraph::{algo::dijkstra, graphmap::UnGraphMap};

pub struct Answer;

/// Orbit pairs as `(center, satellite)`.
pub type Orbits = Vec<(String, String)>;

impl Solver for Answer {
    type Input = Orbits;
    type Output1 = usize;
    type Output2 = usize;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| {
                let (center, satellite) =
                    line.split_once(')').expect("malformed orbit line");
                (center.to_owned(), satellite.to_owned())
            })
            .collect()
    }

    /// Total direct and indirect orbits: the sum of every body's depth below
    /// the universal center of mass.
    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        let parent: HashMap<&str, &str> = input
            .iter()
            .map(|(center, satellite)| (satellite.as_str(), center.as_str()))
            .collect();

        parent
            .keys()
            .map(|&body| {
                itertools::iterate(Some(body), |b| b.and_then(|b| parent.get(b).copied()))
                    .take_while(Option::is_some)
                    .count()
                    - 1
            })
            .sum()
    }

    /// Minimal orbital transfers between what YOU and SAN are orbiting.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        let graph: UnGraphMap<&str, ()> = UnGraphMap::from_edges(
            input
                .iter()
                .map(|(center, satellite)| (center.as_str(), satellite.as_str())),
        );

        let hops = dijkstra(&graph, "YOU", Some("SAN"), |_| 1usize);
        hops["SAN"] - 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const MAP: &str = "COM)B
B)C
C)D
D)E
E)F
B)G
G)H
D)I
E)J
J)K
K)L";

    #[test]
    fn part_one() {
        let orbits = Answer.parse_input(Cursor::new(MAP));
        assert_eq!(Answer.solve_first(&orbits), 42);
    }

    #[test]
    fn part_two() {
        let extended = format!("{}\nK)YOU\nI)SAN", MAP);
        let orbits = Answer.parse_input(Cursor::new(extended.as_str().as_bytes()));
        assert_eq!(Answer.solve_second(&orbits), 4);
    }
}
