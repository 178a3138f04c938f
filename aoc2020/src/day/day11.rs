use crate::prelude::*;
use predicates::prelude::*;

pub struct Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Floor,
    Empty,
    Occupied,
}

pub type Grid = Vec<Vec<Cell>>;

impl Solver for Answer {
    type Input = Grid;
    type Output1 = usize;
    type Output2 = usize;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '.' => Cell::Floor,
                        'L' => Cell::Empty,
                        '#' => Cell::Occupied,
                        other => panic!("unknown seat map cell {:?}", other),
                    })
                    .collect()
            })
            .collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        occupied_at_fixed_point(input, 4, adjacent_occupied)
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        occupied_at_fixed_point(input, 5, visible_occupied)
    }
}

fn directions() -> impl Iterator<Item = (i64, i64)> {
    let not_center = predicate::ne((0i64, 0i64));
    iproduct!(-1i64..=1, -1i64..=1).filter(move |&d| not_center.eval(&d))
}

fn adjacent_occupied(grid: &Grid, row: usize, col: usize) -> usize {
    directions()
        .filter(|&(dr, dc)| {
            seat_at(grid, row as i64 + dr, col as i64 + dc) == Some(Cell::Occupied)
        })
        .count()
}

/// First seat visible along each of the eight rays.
fn visible_occupied(grid: &Grid, row: usize, col: usize) -> usize {
    directions()
        .filter(|&(dr, dc)| {
            let mut r = row as i64 + dr;
            let mut c = col as i64 + dc;
            loop {
                match seat_at(grid, r, c) {
                    Some(Cell::Floor) => {
                        r += dr;
                        c += dc;
                    }
                    Some(Cell::Occupied) => return true,
                    Some(Cell::Empty) | None => return false,
                }
            }
        })
        .count()
}

fn seat_at(grid: &Grid, row: i64, col: i64) -> Option<Cell> {
    let row = usize::try_from(row).ok()?;
    let col = usize::try_from(col).ok()?;
    grid.get(row)?.get(col).copied()
}

/// Run rounds until the whole grid stops changing; generations are compared
/// in full, not by a summary.
fn occupied_at_fixed_point(
    grid: &Grid,
    crowded: usize,
    count: fn(&Grid, usize, usize) -> usize,
) -> usize {
    let mut current = grid.clone();

    loop {
        let next: Grid = current
            .iter()
            .enumerate()
            .map(|(r, seats)| {
                seats
                    .iter()
                    .enumerate()
                    .map(|(c, &seat)| match seat {
                        Cell::Empty if count(&current, r, c) == 0 => Cell::Occupied,
                        Cell::Occupied if count(&current, r, c) >= crowded => Cell::Empty,
                        unchanged => unchanged,
                    })
                    .collect()
            })
            .collect();

        if next == current {
            return current
                .iter()
                .flatten()
                .filter(|&&seat| seat == Cell::Occupied)
                .count();
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LAYOUT: &str = "L.LL.LL.LL
LLLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLLL
L.LLLLLL.L
L.LLLLL.LL";

    #[test]
    fn part_one() {
        let grid = Answer.parse_input(Cursor::new(LAYOUT));
        assert_eq!(Answer.solve_first(&grid), 37);
    }

    #[test]
    fn part_two() {
        let grid = Answer.parse_input(Cursor::new(LAYOUT));
        assert_eq!(Answer.solve_second(&grid), 26);
    }
}
