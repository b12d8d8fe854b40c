use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::Answer;

pub fn day10(input: &str) -> Result<(Answer, Answer)> {
    let grid: Vec<&[u8]> = input.lines().map(str::as_bytes).collect();
    let rows = grid.len() as i64;
    let cols = grid.first().map_or(0, |line| line.len()) as i64;
    let height = |r: i64, c: i64| -> u8 {
        if (0..rows).contains(&r) && (0..cols).contains(&c) {
            grid[r as usize][c as usize]
        } else {
            0
        }
    };

    let mut score = 0i64;
    let mut rating = 0i64;
    for r in 0..rows {
        for c in 0..cols {
            if height(r, c) == b'0' {
                let mut summits = FxHashSet::default();
                rating += count_trails(&height, &mut summits, r, c);
                score += summits.len() as i64;
            }
        }
    }

    Ok((score.into(), rating.into()))
}

fn count_trails(
    height: &impl Fn(i64, i64) -> u8,
    summits: &mut FxHashSet<(i64, i64)>,
    r: i64,
    c: i64,
) -> i64 {
    let here = height(r, c);
    if here == b'9' {
        summits.insert((r, c));
        return 1;
    }
    [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]
        .into_iter()
        .filter(|&(nr, nc)| height(nr, nc) == here + 1)
        .map(|(nr, nc)| count_trails(height, summits, nr, nc))
        .sum()
}
