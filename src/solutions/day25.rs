use anyhow::{ensure, Result};
use itertools::Itertools;
use memchr::memchr_iter;

use crate::Answer;

const WIDTH: usize = 5;

/// Pin heights per column. Locks hang from the top row, keys stand on the
/// bottom row; both leave five interior rows for the pins.
fn parse(input: &str) -> Result<(Vec<[u8; WIDTH]>, Vec<[u8; WIDTH]>)> {
    let mut locks = Vec::new();
    let mut keys = Vec::new();
    for schematic in input.split("\n\n").filter(|s| !s.trim().is_empty()) {
        let lines: Vec<&str> = schematic.lines().collect();
        ensure!(lines.len() == 7, "schematic must be seven rows");
        ensure!(
            lines.iter().all(|line| line.len() == WIDTH),
            "schematic must be five columns"
        );
        let interior = lines[1..6].join("\n");
        let mut heights = [0u8; WIDTH];
        for offset in memchr_iter(b'#', interior.as_bytes()) {
            heights[offset % (WIDTH + 1)] += 1;
        }
        if lines[0].bytes().all(|b| b == b'#') {
            locks.push(heights);
        } else {
            keys.push(heights);
        }
    }
    ensure!(
        !locks.is_empty() && !keys.is_empty(),
        "input needs at least one lock and one key"
    );
    Ok((locks, keys))
}

pub fn day25(input: &str) -> Result<(Answer, Answer)> {
    let (locks, keys) = parse(input)?;
    let fitting = locks
        .iter()
        .cartesian_product(&keys)
        .filter(|(lock, key)| lock.iter().zip(*key).all(|(l, k)| l + k <= 5))
        .count();
    // the event's final part is a freebie
    Ok((fitting.into(), 0i64.into()))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const EXAMPLE: &str = indoc! {"
        #####
        .####
        .####
        .####
        .#.#.
        .#...
        .....

        #####
        ##.##
        .#.##
        ...##
        ...#.
        ...#.
        .....

        .....
        #....
        #....
        #...#
        #.#.#
        #.###
        #####

        .....
        .....
        #.#..
        ###..
        ###.#
        ###.#
        #####

        .....
        .....
        .....
        #....
        #.#..
        #.#.#
        #####
    "};

    #[test]
    fn test_day25() -> Result<()> {
        let (part1, part2) = day25(EXAMPLE)?;
        assert_eq!(part1, 3);
        assert_eq!(part2, 0);
        Ok(())
    }

    #[test]
    fn test_day25_heights() -> Result<()> {
        let (locks, keys) = parse(EXAMPLE)?;
        assert_eq!(locks, [[0, 5, 3, 4, 3], [1, 2, 0, 5, 3]]);
        assert_eq!(keys[0], [5, 0, 2, 1, 3]);
        Ok(())
    }
}
