use crate::prelude::*;

pub struct Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    Left(i64),
    Up(i64),
}

pub type Marks = HashSet<(i64, i64)>;

#[derive(Debug, Clone)]
pub struct Sheet {
    marks: Marks,
    folds: Vec<Fold>,
}

impl Solver for Answer {
    type Input = Sheet;
    type Output1 = usize;
    type Output2 = String;

    /// Dot coordinates, a blank line, then the fold instructions.
    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        let text = parse_string(r);
        let (dots, folds) = text
            .split_once("\n\n")
            .expect("missing fold instructions");

        let marks = dots
            .lines()
            .map(|line| {
                let (x, y) = line.split_once(',').expect("malformed dot");
                (
                    x.parse().expect("malformed dot"),
                    y.parse().expect("malformed dot"),
                )
            })
            .collect();

        let folds = folds
            .trim()
            .lines()
            .map(|line| {
                let (axis, at) = line
                    .trim_start_matches("fold along ")
                    .split_once('=')
                    .expect("malformed fold");
                let at = at.parse().expect("malformed fold");
                match axis {
                    "x" => Fold::Left(at),
                    "y" => Fold::Up(at),
                    other => panic!("unknown fold axis {:?}", other),
                }
            })
            .collect();

        Sheet { marks, folds }
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        fold(&input.marks, input.folds[0]).len()
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        let code = input
            .folds
            .iter()
            .fold(input.marks.clone(), |marks, &f| fold(&marks, f));
        render(&code)
    }
}

/// Mirror every dot past the crease onto the near side. Dots that land on
/// each other coincide, so folding can only reduce the count.
fn fold(marks: &Marks, fold: Fold) -> Marks {
    marks
        .iter()
        .map(|&(x, y)| match fold {
            Fold::Left(line) if x > line => (2 * line - x, y),
            Fold::Up(line) if y > line => (x, 2 * line - y),
            _ => (x, y),
        })
        .collect()
}

fn render(marks: &Marks) -> String {
    let width = marks.iter().map(|&(x, _)| x).max().unwrap_or(0);
    let height = marks.iter().map(|&(_, y)| y).max().unwrap_or(0);

    (0..=height)
        .map(|y| {
            (0..=width)
                .map(|x| if marks.contains(&(x, y)) { '#' } else { '.' })
                .collect::<String>()
        })
        .join("\n")
}
