use crate::prelude::*;
use common::cpu::{Cpu, Op};

pub struct Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// An instruction was about to run a second time.
    Loops(i64),
    /// The machine fetched past the end of the program.
    Halts(i64),
}

impl Solver for Answer {
    type Input = Vec<Op>;
    type Output1 = i64;
    type Output2 = i64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| line.parse().expect("malformed instruction line"))
            .collect()
    }

    /// Correct: `1816`
    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        match run(input) {
            Outcome::Loops(acc) => acc,
            Outcome::Halts(_) => panic!("boot code unexpectedly terminated"),
        }
    }

    /// Exactly one jmp/nop swap lets the program run off the end.
    /// Correct: `1149`
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input
            .iter()
            .enumerate()
            .filter(|&(_, &op)| matches!(op, Op::Jmp(_) | Op::Nop(_)))
            .find_map(|(i, &op)| {
                let mut patched = input.clone();
                patched[i] = match op {
                    Op::Jmp(n) => Op::Nop(n),
                    Op::Nop(n) => Op::Jmp(n),
                    Op::Acc(_) => unreachable!(),
                };
                match run(&patched) {
                    Outcome::Halts(acc) => Some(acc),
                    Outcome::Loops(_) => None,
                }
            })
            .expect("no single swap fixes the boot code")
    }

    fn accepted(&self) -> (Option<&'static str>, Option<&'static str>) {
        (Some("1816"), Some("1149"))
    }
}

/// Single-step until an instruction repeats or the machine halts on an
/// out-of-bounds fetch.
fn run(program: &[Op]) -> Outcome {
    let mut seen: HashSet<usize> = HashSet::default();
    let mut cpu = Cpu::default();

    loop {
        if !seen.insert(cpu.pc) {
            return Outcome::Loops(cpu.acc);
        }
        match cpu.step(program) {
            Ok(next) => cpu = next,
            Err(halt) => return Outcome::Halts(halt.acc),
        }
    }
}
