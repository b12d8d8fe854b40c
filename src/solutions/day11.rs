use anyhow::Result;
use rustc_hash::FxHashMap;

use crate::{ints, Answer};

pub fn day11(input: &str) -> Result<(Answer, Answer)> {
    let stones = ints(input);
    let mut memo = FxHashMap::default();
    let part1: i64 = stones.iter().map(|&s| blink(&mut memo, 25, s)).sum();
    let part2: i64 = stones.iter().map(|&s| blink(&mut memo, 75, s)).sum();
    Ok((part1.into(), part2.into()))
}

/// How many stones `stone` turns into after `depth` blinks. Distinct values
/// collapse hard under the rewrite rules, so the memo stays small.
fn blink(memo: &mut FxHashMap<(u32, i64), i64>, depth: u32, stone: i64) -> i64 {
    if depth == 0 {
        return 1;
    }
    if let Some(&count) = memo.get(&(depth, stone)) {
        return count;
    }
    let count = if stone == 0 {
        blink(memo, depth - 1, 1)
    } else {
        let digits = stone.ilog10() + 1;
        if digits % 2 == 0 {
            let split = 10i64.pow(digits / 2);
            blink(memo, depth - 1, stone / split) + blink(memo, depth - 1, stone % split)
        } else {
            blink(memo, depth - 1, stone * 2024)
        }
    };
    memo.insert((depth, stone), count);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day11() -> Result<()> {
        assert_eq!(day11("125 17")?.0, 55312);
        Ok(())
    }

    #[test]
    fn test_day11_short_runs() {
        let mut memo = FxHashMap::default();
        // 125 17 -> 253000 1 7 -> 253 0 2024 14168 -> ...
        let after = |memo: &mut _, depth| blink(memo, depth, 125) + blink(memo, depth, 17);
        assert_eq!(after(&mut memo, 1), 3);
        assert_eq!(after(&mut memo, 2), 4);
        assert_eq!(after(&mut memo, 3), 5);
        assert_eq!(after(&mut memo, 6), 22);
    }
}
