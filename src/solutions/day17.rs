use anyhow::{bail, ensure, Context, Result};
use itertools::Itertools;

use crate::{ints, Answer};

struct Vm {
    a: i64,
    b: i64,
    c: i64,
    program: Vec<i64>,
}

impl Vm {
    fn parse(input: &str) -> Result<Vm> {
        let (registers, program) = input
            .split_once("\n\n")
            .context("expected registers and program separated by a blank line")?;
        let &[a, b, c] = ints(registers).as_slice() else {
            bail!("expected exactly three register values");
        };
        let program = ints(program);
        ensure!(!program.is_empty(), "empty program");
        ensure!(program.len() % 2 == 0, "dangling opcode without an operand");
        for chunk in program.chunks(2) {
            ensure!(
                (0..8).contains(&chunk[0]) && (0..8).contains(&chunk[1]),
                "program values must be 3-bit"
            );
            // opcodes 0, 2, 5, 6, 7 take a combo operand and 7 is reserved
            ensure!(
                !(matches!(chunk[0], 0 | 2 | 5 | 6 | 7) && chunk[1] == 7),
                "reserved combo operand 7"
            );
        }
        Ok(Vm { a, b, c, program })
    }

    fn combo(&self, operand: i64) -> i64 {
        match operand {
            0..=3 => operand,
            4 => self.a,
            5 => self.b,
            6 => self.c,
            _ => unreachable!("combo operands validated at parse time"),
        }
    }

    fn run(&self, a: i64) -> Vec<i64> {
        let mut vm = Vm {
            a,
            b: self.b,
            c: self.c,
            program: Vec::new(),
        };
        let mut output = Vec::new();
        let mut idx = 0;
        while idx + 1 < self.program.len() {
            let operand = self.program[idx + 1];
            match self.program[idx] {
                0 => vm.a >>= vm.combo(operand),
                1 => vm.b ^= operand,
                2 => vm.b = vm.combo(operand) % 8,
                3 => {
                    if vm.a != 0 {
                        idx = operand as usize;
                        continue;
                    }
                }
                4 => vm.b ^= vm.c,
                5 => output.push(vm.combo(operand) % 8),
                6 => vm.b = vm.a >> vm.combo(operand),
                _ => vm.c = vm.a >> vm.combo(operand),
            }
            idx += 2;
        }
        output
    }
}

/// Searches for the smallest `a` that makes the program print itself. Each
/// output value depends only on `a >> 3*idx`, so the register is built three
/// bits at a time from the most significant output backwards, keeping only
/// digits that reproduce the program's tail.
fn quine_register(vm: &Vm) -> Option<i64> {
    fn extend(vm: &Vm, remaining: usize, a: i64) -> Option<i64> {
        if remaining == 0 {
            return (vm.run(a) == vm.program).then_some(a);
        }
        (0..8)
            .map(|digit| a * 8 + digit)
            .filter(|&candidate| candidate != 0)
            .filter(|&candidate| vm.run(candidate) == vm.program[remaining - 1..])
            .find_map(|candidate| extend(vm, remaining - 1, candidate))
    }
    extend(vm, vm.program.len(), 0)
}

pub fn day17(input: &str) -> Result<(Answer, Answer)> {
    let vm = Vm::parse(input)?;
    let output = vm.run(vm.a).iter().join(",");
    let quine = quine_register(&vm).context("no register value reproduces the program")?;
    Ok((output.into(), quine.into()))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const EXAMPLE: &str = indoc! {"
        Register A: 729
        Register B: 0
        Register C: 0

        Program: 0,1,5,4,3,0
    "};

    const QUINE_EXAMPLE: &str = indoc! {"
        Register A: 2024
        Register B: 0
        Register C: 0

        Program: 0,3,5,4,3,0
    "};

    #[test]
    fn test_day17() -> Result<()> {
        let vm = Vm::parse(EXAMPLE)?;
        assert_eq!(vm.run(vm.a).iter().join(","), "4,6,3,5,6,3,5,2,1,0");
        Ok(())
    }

    #[test]
    fn test_day17_quine_search() -> Result<()> {
        let vm = Vm::parse(QUINE_EXAMPLE)?;
        let a = quine_register(&vm).context("expected a quine register")?;
        assert_eq!(a, 117440);
        assert_eq!(vm.run(a), vm.program);
        Ok(())
    }

    #[test]
    fn test_day17_instruction_semantics() -> Result<()> {
        // examples from the puzzle statement's opcode walkthrough
        let vm = Vm::parse("Register A: 0\nRegister B: 0\nRegister C: 9\n\nProgram: 2,6\n")?;
        assert_eq!(vm.run(0), []);
        let vm = Vm::parse("Register A: 10\nRegister B: 0\nRegister C: 0\n\nProgram: 5,0,5,1,5,4\n")?;
        assert_eq!(vm.run(10), [0, 1, 2]);
        let vm = Vm::parse("Register A: 2024\nRegister B: 0\nRegister C: 0\n\nProgram: 0,1,5,4,3,0\n")?;
        assert_eq!(vm.run(2024), [4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]);
        Ok(())
    }

    #[test]
    fn test_day17_rejects_reserved_combo_operand() {
        assert!(Vm::parse("Register A: 0\nRegister B: 0\nRegister C: 0\n\nProgram: 5,7\n").is_err());
    }
}
