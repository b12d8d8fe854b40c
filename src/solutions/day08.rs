use anyhow::Result;
use nalgebra::Vector2;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::Answer;

pub fn day8(input: &str) -> Result<(Answer, Answer)> {
    let mut antennas: FxHashMap<u8, Vec<Vector2<i64>>> = FxHashMap::default();
    let mut rows = 0i64;
    let mut cols = 0i64;
    for (row, line) in input.lines().enumerate() {
        if row == 0 {
            cols = line.len() as i64;
        }
        for (col, b) in line.bytes().enumerate() {
            if b != b'.' && b != b'#' {
                antennas
                    .entry(b)
                    .or_default()
                    .push(Vector2::new(row as i64, col as i64));
            }
        }
        rows += 1;
    }
    let in_bounds = |p: Vector2<i64>| (0..rows).contains(&p.x) && (0..cols).contains(&p.y);

    let mut antinodes = FxHashSet::default();
    let mut harmonics = FxHashSet::default();
    for positions in antennas.values() {
        for (i, &a) in positions.iter().enumerate() {
            for (j, &b) in positions.iter().enumerate() {
                if i == j {
                    continue;
                }
                let delta = b - a;
                let antinode = b + delta;
                if in_bounds(antinode) {
                    antinodes.insert(antinode);
                }
                let mut harmonic = b;
                while in_bounds(harmonic) {
                    harmonics.insert(harmonic);
                    harmonic += delta;
                }
            }
        }
    }

    Ok((antinodes.len().into(), harmonics.len().into()))
}
