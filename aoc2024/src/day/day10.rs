use crate::prelude::*;

pub struct Answer;

pub type Grid = Vec<Vec<u32>>;

impl Solver for Answer {
    type Input = Grid;
    type Output1 = usize;
    type Output2 = u64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| {
                line.chars()
                    .map(|c| c.to_digit(10).expect("malformed height"))
                    .collect()
            })
            .collect()
    }

    /// A trailhead's score is how many distinct peaks it reaches.
    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        trailheads(input)
            .map(|start| {
                let mut peaks: HashSet<(usize, usize)> = HashSet::default();
                collect_peaks(input, start, &mut peaks);
                peaks.len()
            })
            .sum()
    }

    /// A trailhead's rating is how many distinct trails leave it.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        trailheads(input).map(|start| trails(input, start)).sum()
    }
}

fn trailheads(grid: &Grid) -> impl Iterator<Item = (usize, usize)> + '_ {
    grid.iter().enumerate().flat_map(|(r, row)| {
        row.iter()
            .enumerate()
            .filter(|&(_, &height)| height == 0)
            .map(move |(c, _)| (r, c))
    })
}

fn uphill_neighbors(
    grid: &Grid,
    (r, c): (usize, usize),
) -> impl Iterator<Item = (usize, usize)> + '_ {
    let want = grid[r][c] + 1;
    [
        (r.wrapping_sub(1), c),
        (r + 1, c),
        (r, c.wrapping_sub(1)),
        (r, c + 1),
    ]
    .into_iter()
    .filter(move |&(nr, nc)| {
        grid.get(nr)
            .and_then(|row| row.get(nc))
            .map_or(false, |&height| height == want)
    })
}

fn collect_peaks(grid: &Grid, at: (usize, usize), peaks: &mut HashSet<(usize, usize)>) {
    if grid[at.0][at.1] == 9 {
        peaks.insert(at);
        return;
    }
    for next in uphill_neighbors(grid, at) {
        collect_peaks(grid, next, peaks);
    }
}

fn trails(grid: &Grid, at: (usize, usize)) -> u64 {
    if grid[at.0][at.1] == 9 {
        return 1;
    }
    uphill_neighbors(grid, at)
        .map(|next| trails(grid, next))
        .sum()
}
