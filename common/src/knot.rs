//! Knot hash: repeated reversal of runs on a circular ring of marks,
//! reduced to a 16-byte digest by xor-folding. Bit-for-bit compatible with
//! the worked examples, which more than one day depends on.

const SUFFIX: [usize; 5] = [17, 31, 73, 47, 23];
const ROUNDS: usize = 64;

/// Run `rounds` passes of the length list over a ring of `size` marks.
/// Position and skip carry over between rounds.
pub fn sparse_hash(size: usize, lengths: &[usize], rounds: usize) -> Vec<usize> {
    let mut marks: Vec<usize> = (0..size).collect();
    let mut pos = 0;
    let mut skip = 0;

    for _ in 0..rounds {
        for &len in lengths {
            for i in 0..len / 2 {
                let a = (pos + i) % size;
                let b = (pos + len - 1 - i) % size;
                marks.swap(a, b);
            }
            pos = (pos + len + skip) % size;
            skip += 1;
        }
    }

    marks
}

/// Interpret the input as raw ASCII lengths, append the fixed suffix, and
/// xor-fold the 64-round sparse hash into 16 bytes.
pub fn dense_hash(input: &str) -> [u8; 16] {
    let lengths: Vec<usize> = input
        .bytes()
        .map(usize::from)
        .chain(SUFFIX.iter().copied())
        .collect();
    let sparse = sparse_hash(256, &lengths, ROUNDS);

    let mut digest = [0u8; 16];
    for (slot, block) in digest.iter_mut().zip(sparse.chunks(16)) {
        *slot = block.iter().fold(0, |acc, &mark| acc ^ mark as u8);
    }
    digest
}

pub fn hex_digest(input: &str) -> String {
    dense_hash(input)
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_round_on_a_five_mark_ring() {
        assert_eq!(sparse_hash(5, &[3, 4, 1, 5], 1), vec![3, 4, 2, 1, 0]);
    }

    #[test]
    fn digests_match_the_worked_examples() {
        assert_eq!(hex_digest(""), "a2582a3a0e66e6e86e3812dcb672a272");
        assert_eq!(hex_digest("1,2,3"), "3efbe78a8d82f29979031a4aa0b16a9d");
        assert_eq!(hex_digest("1,2,4"), "63960835bcdc130f0b66d7ff4f6a5a8e");
        assert_eq!(hex_digest("AoC 2017"), "33efeb34ea91902bb2f59c9920caa6cd");
    }

    #[test]
    fn digest_is_a_pure_function_of_its_input() {
        assert_eq!(dense_hash("flqrgnkx-0"), dense_hash("flqrgnkx-0"));
    }
}
