use std::collections::VecDeque;

use anyhow::{bail, ensure, Context, Result};
use rustc_hash::FxHashSet;

use crate::{ints, Answer};

const PART1_PREFIX: usize = 1024;

fn parse(input: &str) -> Result<(Vec<(i64, i64)>, i64)> {
    let bytes: Vec<(i64, i64)> = input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let &[x, y] = ints(line).as_slice() else {
                bail!("expected two coordinates per line: {line:?}");
            };
            ensure!(x >= 0 && y >= 0, "coordinates must be non-negative");
            Ok((x, y))
        })
        .collect::<Result<_>>()?;
    let size = bytes
        .iter()
        .map(|&(x, y)| x.max(y))
        .max()
        .context("no falling bytes")?
        + 1;
    Ok((bytes, size))
}

/// BFS from the top-left to the bottom-right corner; all moves cost one step
/// so a heap buys nothing over a queue.
fn shortest_path(blocked: &[(i64, i64)], size: i64) -> Option<usize> {
    let blocked: FxHashSet<(i64, i64)> = blocked.iter().copied().collect();
    let goal = (size - 1, size - 1);
    let mut seen = FxHashSet::default();
    let mut queue = VecDeque::from([((0, 0), 0)]);
    seen.insert((0, 0));
    while let Some(((x, y), depth)) = queue.pop_front() {
        if (x, y) == goal {
            return Some(depth);
        }
        for next in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
            let inside = (0..size).contains(&next.0) && (0..size).contains(&next.1);
            if inside && !blocked.contains(&next) && seen.insert(next) {
                queue.push_back((next, depth + 1));
            }
        }
    }
    None
}

/// Bisection over the fallen-byte prefix length: reachability is monotone in
/// the number of walls, so the first blocking byte sits at the low/high
/// boundary.
fn first_blocking_byte(bytes: &[(i64, i64)], size: i64) -> Result<(i64, i64)> {
    ensure!(
        shortest_path(bytes, size).is_none(),
        "the exit is never cut off"
    );
    let mut low = 0;
    let mut high = bytes.len();
    while high - low > 1 {
        let middle = (high + low) / 2;
        if shortest_path(&bytes[..middle], size).is_some() {
            low = middle;
        } else {
            high = middle;
        }
    }
    Ok(bytes[high - 1])
}

pub fn day18(input: &str) -> Result<(Answer, Answer)> {
    let (bytes, size) = parse(input)?;
    let prefix = bytes.len().min(PART1_PREFIX);
    let steps = shortest_path(&bytes[..prefix], size)
        .context("exit unreachable after the first kilobyte")?;
    let (x, y) = first_blocking_byte(&bytes, size)?;
    Ok((steps.into(), format!("{},{}", x, y).into()))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const EXAMPLE: &str = indoc! {"
        5,4
        4,2
        4,5
        3,0
        2,1
        6,3
        2,4
        1,5
        0,6
        3,3
        2,6
        5,1
        1,2
        5,5
        2,5
        6,5
        1,4
        0,4
        6,4
        1,1
        6,1
        1,0
        0,5
        1,6
        2,0
    "};

    #[test]
    fn test_day18() -> Result<()> {
        let (bytes, size) = parse(EXAMPLE)?;
        assert_eq!(size, 7);
        assert_eq!(shortest_path(&bytes[..12], size), Some(22));
        assert_eq!(first_blocking_byte(&bytes, size)?, (6, 1));
        Ok(())
    }

    #[test]
    fn test_day18_empty_grid_walks_the_manhattan_distance() -> Result<()> {
        let (bytes, size) = parse("6,6")?;
        assert_eq!(shortest_path(&bytes[..0], size), Some(12));
        Ok(())
    }

    #[test]
    fn test_day18_never_blocked_is_an_error() -> Result<()> {
        let (bytes, size) = parse("1,1\n2,0")?;
        assert!(first_blocking_byte(&bytes, size).is_err());
        Ok(())
    }
}
