use anyhow::{bail, Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{ints, Answer};

pub fn day5(input: &str) -> Result<(Answer, Answer)> {
    let (rules_block, updates_block) = input
        .split_once("\n\n")
        .context("expected ordering rules and updates separated by a blank line")?;

    let mut successors: FxHashMap<i64, FxHashSet<i64>> = FxHashMap::default();
    for line in rules_block.lines() {
        let &[before, after] = ints(line).as_slice() else {
            bail!("malformed ordering rule: {line:?}");
        };
        successors.entry(before).or_default().insert(after);
    }
    // a|b means a must come before b, so (b, a) in page order is a violation
    let out_of_order =
        |earlier: i64, later: i64| successors.get(&later).is_some_and(|s| s.contains(&earlier));

    let mut correct = 0i64;
    let mut reordered = 0i64;
    for line in updates_block.lines() {
        let mut update = ints(line);
        if update.is_empty() {
            continue;
        }
        let ordered = (0..update.len())
            .all(|i| (i + 1..update.len()).all(|j| !out_of_order(update[i], update[j])));
        if ordered {
            correct += update[update.len() / 2];
        } else {
            for i in 0..update.len() {
                for j in i + 1..update.len() {
                    if out_of_order(update[i], update[j]) {
                        update.swap(i, j);
                    }
                }
            }
            reordered += update[update.len() / 2];
        }
    }

    Ok((correct.into(), reordered.into()))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_day5() -> Result<()> {
        let example = indoc! {"
            47|53
            97|13
            97|61
            97|47
            75|29
            61|13
            75|53
            29|13
            97|29
            53|29
            61|53
            97|53
            61|29
            47|13
            75|47
            97|75
            47|61
            75|61
            47|29
            75|13
            53|13

            75,47,61,53,29
            97,61,53,29,13
            75,29,13
            75,97,47,61,53
            61,13,29
            97,13,75,29,47
        "};
        let (part1, part2) = day5(example)?;
        assert_eq!(part1, 143);
        assert_eq!(part2, 123);
        Ok(())
    }
}
