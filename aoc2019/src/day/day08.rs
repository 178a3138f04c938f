use crate::prelude::*;

pub struct Answer;

const WIDTH: usize = 25;
const HEIGHT: usize = 6;

impl Solver for Answer {
    type Input = Vec<u8>;
    type Output1 = usize;
    type Output2 = String;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_string(r)
            .trim()
            .bytes()
            .map(|b| {
                assert!(b.is_ascii_digit(), "malformed pixel {:?}", b as char);
                b - b'0'
            })
            .collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        checksum(input, WIDTH * HEIGHT)
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        decode(input, WIDTH, HEIGHT)
    }
}

/// On the layer with the fewest 0 pixels, ones times twos.
fn checksum(pixels: &[u8], layer_size: usize) -> usize {
    let flattest = pixels
        .chunks(layer_size)
        .min_by_key(|layer| layer.iter().filter(|&&p| p == 0).count())
        .expect("empty image");

    let ones = flattest.iter().filter(|&&p| p == 1).count();
    let twos = flattest.iter().filter(|&&p| p == 2).count();
    ones * twos
}

/// Stack the layers front to back; 2 is transparent.
fn decode(pixels: &[u8], width: usize, height: usize) -> String {
    let layer_size = width * height;
    let composite: Vec<u8> = (0..layer_size)
        .map(|i| {
            pixels
                .iter()
                .skip(i)
                .step_by(layer_size)
                .copied()
                .find(|&p| p != 2)
                .unwrap_or(2)
        })
        .collect();

    composite
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|&p| if p == 1 { '#' } else { '.' })
                .collect::<String>()
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn part_one() {
        let pixels = Answer.parse_input(Cursor::new("123456789012"));
        assert_eq!(checksum(&pixels, 6), 1);
    }

    #[test]
    fn part_two() {
        let pixels = Answer.parse_input(Cursor::new("0222112222120000"));
        assert_eq!(decode(&pixels, 2, 2), ".#\n#.");
    }
}
