use crate::prelude::*;
use bitvec::prelude::*;
use rayon::prelude::*;

pub struct Answer;

const SIDE: usize = 128;

pub type Row = BitVec<u8, Msb0>;

impl Solver for Answer {
    type Input = String;
    type Output1 = usize;
    type Output2 = usize;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_string(r).trim().to_owned()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        grid(input).iter().map(|row| row.count_ones()).sum()
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        regions(&grid(input))
    }
}

/// One knot hash per row; each hash is exactly one 128-bit row.
fn grid(key: &str) -> Vec<Row> {
    (0..SIDE)
        .into_par_iter()
        .map(|row| Row::from_slice(&knot::dense_hash(&format!("{}-{}", key, row))))
        .collect()
}

/// Count 4-connected groups of used squares.
fn regions(grid: &[Row]) -> usize {
    let mut seen: HashSet<(usize, usize)> = HashSet::default();
    let mut count = 0;

    for (r, c) in (0..SIDE).cartesian_product(0..SIDE) {
        if !grid[r][c] || seen.contains(&(r, c)) {
            continue;
        }

        count += 1;
        let mut stack = vec![(r, c)];
        while let Some((r, c)) = stack.pop() {
            if !seen.insert((r, c)) {
                continue;
            }
            let neighbors = [
                (r.wrapping_sub(1), c),
                (r + 1, c),
                (r, c.wrapping_sub(1)),
                (r, c + 1),
            ];
            stack.extend(
                neighbors
                    .iter()
                    .filter(|&&(nr, nc)| nr < SIDE && nc < SIDE && grid[nr][nc])
                    .copied(),
            );
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_squares_and_regions() {
        let grid = grid("flqrgnkx");
        assert_eq!(grid.iter().map(|row| row.count_ones()).sum::<usize>(), 8108);
        assert_eq!(regions(&grid), 1242);
    }
}
