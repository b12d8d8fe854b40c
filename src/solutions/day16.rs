use std::cmp::Reverse;
use std::collections::BinaryHeap;

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{do_slow_tasks, Answer};

const DELTAS: [(i64, i64); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
const EAST: u8 = 1;

type State = ((i64, i64), u8);

struct Maze {
    open: FxHashSet<(i64, i64)>,
    start: (i64, i64),
    end: (i64, i64),
}

impl Maze {
    fn parse(input: &str) -> Result<Maze> {
        let mut open = FxHashSet::default();
        let mut start = None;
        let mut end = None;
        for (r, line) in input.lines().enumerate() {
            for (c, b) in line.bytes().enumerate() {
                let cell = (r as i64, c as i64);
                match b {
                    b'#' => continue,
                    b'S' => start = Some(cell),
                    b'E' => end = Some(cell),
                    _ => {}
                }
                open.insert(cell);
            }
        }
        Ok(Maze {
            open,
            start: start.context("no start tile (S) in maze")?,
            end: end.context("no end tile (E) in maze")?,
        })
    }
}

/// Dijkstra over (tile, facing) states: a step ahead costs 1, a quarter turn
/// in place costs 1000. Settles the whole reachable state space so the best
/// paths can be walked backwards afterwards.
fn distances(maze: &Maze) -> FxHashMap<State, i64> {
    let mut dist: FxHashMap<State, i64> = FxHashMap::default();
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0, (maze.start, EAST))));
    while let Some(Reverse((score, (pos, dir)))) = heap.pop() {
        if dist.contains_key(&(pos, dir)) {
            continue;
        }
        dist.insert((pos, dir), score);
        let (dr, dc) = DELTAS[dir as usize];
        let ahead = (pos.0 + dr, pos.1 + dc);
        if maze.open.contains(&ahead) {
            heap.push(Reverse((score + 1, (ahead, dir))));
        }
        for turned in [(dir + 1) % 4, (dir + 3) % 4] {
            heap.push(Reverse((score + 1000, (pos, turned))));
        }
    }
    dist
}

/// Returns the lowest score from start to end plus the number of tiles that
/// lie on at least one lowest-score path.
fn best_paths(maze: &Maze) -> Result<(i64, usize)> {
    let dist = distances(maze);
    let best = (0u8..4)
        .filter_map(|dir| dist.get(&(maze.end, dir)).copied())
        .min()
        .context("end tile is unreachable")?;

    // walk the distance map backwards from every optimal end state; a state
    // is on an optimal path iff its distance plus the edge cost reproduces
    // its successor's distance
    let mut stack: Vec<State> = (0u8..4)
        .filter(|&dir| dist.get(&(maze.end, dir)) == Some(&best))
        .map(|dir| (maze.end, dir))
        .collect();
    let mut on_best: FxHashSet<State> = stack.iter().copied().collect();
    while let Some((pos, dir)) = stack.pop() {
        let score = dist[&(pos, dir)];
        let (dr, dc) = DELTAS[dir as usize];
        let behind = (pos.0 - dr, pos.1 - dc);
        let mut predecessors = vec![((behind, dir), score - 1)];
        for turned in [(dir + 1) % 4, (dir + 3) % 4] {
            predecessors.push(((pos, turned), score - 1000));
        }
        for (state, expected) in predecessors {
            if dist.get(&state) == Some(&expected) && on_best.insert(state) {
                stack.push(state);
            }
        }
    }

    let tiles: FxHashSet<(i64, i64)> = on_best.into_iter().map(|(pos, _)| pos).collect();
    Ok((best, tiles.len()))
}

pub fn day16(input: &str) -> Result<(Answer, Answer)> {
    if !do_slow_tasks() {
        return Ok((Answer::Skipped, Answer::Skipped));
    }
    let maze = Maze::parse(input)?;
    let (score, tiles) = best_paths(&maze)?;
    Ok((score.into(), tiles.into()))
}
