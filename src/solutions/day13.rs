use anyhow::{bail, Result};
use num::Integer;

use crate::{ints, Answer};

struct Machine {
    ax: i64,
    ay: i64,
    bx: i64,
    by: i64,
    px: i64,
    py: i64,
}

pub fn day13(input: &str) -> Result<(Answer, Answer)> {
    let machines: Vec<Machine> = input
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| {
            let &[ax, ay, bx, by, px, py] = ints(block).as_slice() else {
                bail!("expected six numbers per machine: {block:?}");
            };
            Ok(Machine {
                ax,
                ay,
                bx,
                by,
                px,
                py,
            })
        })
        .collect::<Result<_>>()?;

    let part1: i64 = machines.iter().filter_map(|m| tokens(m, 0)).sum();
    let part2: i64 = machines
        .iter()
        .filter_map(|m| tokens(m, 10_000_000_000_000))
        .sum();

    Ok((part1.into(), part2.into()))
}

/// Solves the 2x2 integer system exactly; a prize is unreachable when the
/// system is singular or the solution is not integral.
fn tokens(m: &Machine, offset: i64) -> Option<i64> {
    let (px, py) = (m.px + offset, m.py + offset);
    let denominator = m.ay * m.bx - m.ax * m.by;
    if denominator == 0 {
        return None;
    }
    let (a, remainder) = (py * m.bx - px * m.by).div_rem(&denominator);
    if remainder != 0 {
        return None;
    }
    let (b, remainder) = (px - a * m.ax).div_rem(&m.bx);
    if remainder != 0 {
        return None;
    }
    Some(3 * a + b)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const EXAMPLE: &str = indoc! {"
        Button A: X+94, Y+34
        Button B: X+22, Y+67
        Prize: X=8400, Y=5400

        Button A: X+26, Y+66
        Button B: X+67, Y+21
        Prize: X=12748, Y=12176

        Button A: X+17, Y+86
        Button B: X+84, Y+37
        Prize: X=7870, Y=6450

        Button A: X+69, Y+23
        Button B: X+27, Y+71
        Prize: X=18641, Y=10279
    "};

    #[test]
    fn test_day13() -> Result<()> {
        let (part1, part2) = day13(EXAMPLE)?;
        assert_eq!(part1, 480);
        assert_eq!(part2, 875318608908);
        Ok(())
    }
}
