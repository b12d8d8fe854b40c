use anyhow::{bail, Result};
use itertools::Itertools;

use crate::{ints, Answer};

pub fn day1(input: &str) -> Result<(Answer, Answer)> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for line in input.lines() {
        let &[l, r] = ints(line).as_slice() else {
            bail!("expected two location ids per line: {line:?}");
        };
        left.push(l);
        right.push(r);
    }

    left.sort_unstable();
    right.sort_unstable();
    let distance: i64 = left.iter().zip(&right).map(|(l, r)| (l - r).abs()).sum();

    let occurrences = right.iter().counts();
    let similarity: i64 = left
        .iter()
        .map(|l| l * occurrences.get(l).copied().unwrap_or(0) as i64)
        .sum();

    Ok((distance.into(), similarity.into()))
}
