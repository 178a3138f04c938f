//! The handheld game console: three opcodes, a program counter, and an
//! accumulator. Programs are immutable once parsed; the machine state is a
//! small value that [`Cpu::step`] maps to its successor.

use scan_fmt::scan_fmt;
use std::{num::ParseIntError, str::FromStr};
use thiserror::Error;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Op {
    Acc(i64),
    Jmp(i64),
    Nop(i64),
}

impl FromStr for Op {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mnemonic, n) =
            scan_fmt!(s, "{} {d}", String, i64).expect("malformed instruction line");

        match mnemonic.as_str() {
            "acc" => Ok(Op::Acc(n)),
            "jmp" => Ok(Op::Jmp(n)),
            "nop" => Ok(Op::Nop(n)),
            other => panic!("unknown mnemonic {:?}", other),
        }
    }
}

/// Fetch past the end of the instruction list. This is how the machine
/// reports normal termination, not a bug; the accumulator at that point is
/// the program's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("fetch past end of program (pc {pc}, acc {acc})")]
pub struct Halted {
    pub pc: usize,
    pub acc: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cpu {
    pub pc: usize,
    pub acc: i64,
}

impl Cpu {
    /// Execute the instruction under `pc` and return the post-step state.
    /// A jump that leaves the list is only detected at the next fetch.
    pub fn step(self, program: &[Op]) -> Result<Cpu, Halted> {
        let op = program.get(self.pc).copied().ok_or(Halted {
            pc: self.pc,
            acc: self.acc,
        })?;

        Ok(match op {
            Op::Acc(n) => Cpu {
                pc: self.pc + 1,
                acc: self.acc + n,
            },
            Op::Jmp(n) => Cpu {
                // A backwards jump below zero wraps and halts on fetch.
                pc: (self.pc as i64 + n) as usize,
                acc: self.acc,
            },
            Op::Nop(_) => Cpu {
                pc: self.pc + 1,
                acc: self.acc,
            },
        })
    }
}

pub fn parse_program(text: &str) -> Vec<Op> {
    text.trim()
        .lines()
        .map(|l| l.parse().expect("malformed instruction line"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const LOOPING: &str = "nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6";

    #[test]
    fn parses_signed_operands() {
        assert_eq!(
            parse_program("nop +0\nacc -99\njmp +4"),
            vec![Op::Nop(0), Op::Acc(-99), Op::Jmp(4)]
        );
    }

    #[test]
    fn accumulator_is_five_at_first_revisit() {
        let program = parse_program(LOOPING);
        let mut seen = HashSet::new();
        let mut cpu = Cpu::default();

        while seen.insert(cpu.pc) {
            cpu = cpu.step(&program).unwrap();
        }

        assert_eq!(cpu.pc, 1);
        assert_eq!(cpu.acc, 5);
    }

    #[test]
    fn running_off_the_end_halts() {
        let program = parse_program("nop +0\nacc +8\njmp +1");
        let mut cpu = Cpu::default();

        let halt = loop {
            match cpu.step(&program) {
                Ok(next) => cpu = next,
                Err(halt) => break halt,
            }
        };

        assert_eq!(halt, Halted { pc: 3, acc: 8 });
    }

    #[test]
    fn backwards_jump_out_of_bounds_halts() {
        let program = parse_program("jmp -7");
        let halt = Cpu::default().step(&program).unwrap().step(&program);
        assert!(halt.is_err());
    }
}
