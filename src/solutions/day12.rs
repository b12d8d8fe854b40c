use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::Answer;

const SIDES: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn day12(input: &str) -> Result<(Answer, Answer)> {
    let grid: Vec<&[u8]> = input.lines().map(str::as_bytes).collect();
    let rows = grid.len() as i64;
    let cols = grid.first().map_or(0, |line| line.len()) as i64;
    let plot = |r: i64, c: i64| -> u8 {
        if (0..rows).contains(&r) && (0..cols).contains(&c) {
            grid[r as usize][c as usize]
        } else {
            0
        }
    };

    let mut fenced = FxHashSet::default();
    let mut fencing = 0i64;
    let mut bulk_fencing = 0i64;
    for r in 0..rows {
        for c in 0..cols {
            if !fenced.insert((r, c)) {
                continue;
            }
            let mut region = FxHashSet::default();
            region.insert((r, c));
            let mut frontier = vec![(r, c)];
            while let Some((fr, fc)) = frontier.pop() {
                for (dr, dc) in SIDES {
                    let next = (fr + dr, fc + dc);
                    if plot(next.0, next.1) == plot(r, c) && region.insert(next) {
                        frontier.push(next);
                    }
                }
            }
            fenced.extend(&region);

            // fence segments as (cell, outward normal) pairs
            let mut normals = FxHashSet::default();
            for &(pr, pc) in &region {
                for (dr, dc) in SIDES {
                    if !region.contains(&(pr + dr, pc + dc)) {
                        normals.insert(((pr, pc), (dr, dc)));
                    }
                }
            }

            // a straight side ends wherever the segment has no continuation
            // with the same normal; every side has exactly two ends
            let mut side_ends = 0i64;
            for &((pr, pc), (dr, dc)) in &normals {
                let (ar, ac) = (dc, -dr);
                side_ends += !normals.contains(&((pr + ar, pc + ac), (dr, dc))) as i64;
                side_ends += !normals.contains(&((pr - ar, pc - ac), (dr, dc))) as i64;
            }

            let area = region.len() as i64;
            fencing += area * normals.len() as i64;
            bulk_fencing += area * side_ends / 2;
        }
    }

    Ok((fencing.into(), bulk_fencing.into()))
}
