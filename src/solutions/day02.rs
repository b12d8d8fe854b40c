use anyhow::Result;
use itertools::Itertools;

use crate::{ints, Answer};

pub fn day2(input: &str) -> Result<(Answer, Answer)> {
    let reports: Vec<Vec<i64>> = input.lines().map(ints).filter(|r| !r.is_empty()).collect();

    let safe = reports
        .iter()
        .filter(|report| is_safe(report.iter().copied()))
        .count();
    let dampened = reports
        .iter()
        .filter(|report| {
            is_safe(report.iter().copied())
                || (0..report.len()).any(|skip| {
                    is_safe(
                        report
                            .iter()
                            .enumerate()
                            .filter(|&(i, _)| i != skip)
                            .map(|(_, &level)| level),
                    )
                })
        })
        .count();

    Ok((safe.into(), dampened.into()))
}

fn is_safe(levels: impl Iterator<Item = i64> + Clone) -> bool {
    let diffs = levels.tuple_windows().map(|(a, b)| b - a);
    diffs.clone().all(|d| (1..=3).contains(&d)) || diffs.clone().all(|d| (-3..=-1).contains(&d))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_day2() -> Result<()> {
        let example = indoc! {"
            7 6 4 2 1
            1 2 7 8 9
            9 7 6 2 1
            1 3 2 4 5
            8 6 4 4 1
            1 3 6 7 9
        "};
        let (part1, part2) = day2(example)?;
        assert_eq!(part1, 2);
        assert_eq!(part2, 4);
        Ok(())
    }
}
