use anyhow::{ensure, Context, Result};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::Answer;

const SAVINGS_THRESHOLD: i64 = 100;

struct Track {
    /// every track cell in race order, start first
    path: Vec<(i64, i64)>,
    /// picoseconds from the start to each track cell
    index: FxHashMap<(i64, i64), i64>,
}

impl Track {
    fn parse(input: &str) -> Result<Track> {
        let mut open = FxHashSet::default();
        let mut start = None;
        let mut end = None;
        for (r, line) in input.lines().enumerate() {
            for (c, b) in line.bytes().enumerate() {
                let cell = (r as i64, c as i64);
                match b {
                    b'S' => start = Some(cell),
                    b'E' => end = Some(cell),
                    b'.' => {}
                    _ => continue,
                }
                open.insert(cell);
            }
        }
        let start = start.context("no start (S) on track")?;
        let end = end.context("no end (E) on track")?;

        // the track is a single corridor; walk it once, indexing every cell
        let mut path = vec![start];
        let mut index = FxHashMap::default();
        index.insert(start, 0);
        let mut at = start;
        while at != end {
            let (r, c) = at;
            let mut next = None;
            for neighbor in [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)] {
                if open.contains(&neighbor) && !index.contains_key(&neighbor) {
                    ensure!(next.is_none(), "track forks at {:?}", at);
                    next = Some(neighbor);
                }
            }
            at = next.context("track dead-ends before reaching the end")?;
            index.insert(at, path.len() as i64);
            path.push(at);
        }
        Ok(Track { path, index })
    }

    /// Counts cheats that skip through walls for at most `radius` steps and
    /// save at least `threshold` picoseconds. A cheat is an ordered pair of
    /// track cells within Manhattan distance `radius`; the saving is the
    /// track distance between them minus the cheat's own length.
    fn count_cheats(&self, radius: i64, threshold: i64) -> usize {
        self.path
            .par_iter()
            .map(|&(r, c)| {
                let from = self.index[&(r, c)];
                let mut cheats = 0;
                for dr in -radius..=radius {
                    let budget = radius - dr.abs();
                    for dc in -budget..=budget {
                        let Some(&to) = self.index.get(&(r + dr, c + dc)) else {
                            continue;
                        };
                        if to - from - (dr.abs() + dc.abs()) >= threshold {
                            cheats += 1;
                        }
                    }
                }
                cheats
            })
            .sum()
    }
}

pub fn day20(input: &str) -> Result<(Answer, Answer)> {
    let track = Track::parse(input)?;
    Ok((
        track.count_cheats(2, SAVINGS_THRESHOLD).into(),
        track.count_cheats(20, SAVINGS_THRESHOLD).into(),
    ))
}
