use crate::prelude::*;
use petgraph::unionfind::UnionFind;

pub struct Answer;

/// One line per program: the program id and everything it talks to.
/// Self-loops (`1 <-> 1`) are legal and connect nothing new.
pub type Links = Vec<(usize, Vec<usize>)>;

impl Solver for Answer {
    type Input = Links;
    type Output1 = usize;
    type Output2 = usize;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| {
                let (node, peers) = line
                    .split_once(" <-> ")
                    .expect("malformed pipe line");
                (
                    node.parse().expect("malformed program id"),
                    parse_list(peers, ", "),
                )
            })
            .collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        let labels = grouped(input).into_labeling();
        let zero_group = labels[0];
        labels.iter().filter(|&&label| label == zero_group).count()
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        grouped(input).into_labeling().iter().unique().count()
    }
}

fn grouped(links: &Links) -> UnionFind<usize> {
    let size = links
        .iter()
        .flat_map(|(node, peers)| peers.iter().chain([node]).copied())
        .max()
        .expect("no programs")
        + 1;

    let mut groups = UnionFind::new(size);
    for (node, peers) in links {
        for &peer in peers {
            groups.union(*node, peer);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXAMPLE: &str = "0 <-> 2
1 <-> 1
2 <-> 0, 3, 4
3 <-> 2, 4
4 <-> 2, 3, 6
5 <-> 6
6 <-> 4, 5";

    #[test]
    fn part_one() {
        let links = Answer.parse_input(Cursor::new(EXAMPLE));
        assert_eq!(Answer.solve_first(&links), 6);
    }

    #[test]
    fn part_two() {
        let links = Answer.parse_input(Cursor::new(EXAMPLE));
        assert_eq!(Answer.solve_second(&links), 2);
    }
}
