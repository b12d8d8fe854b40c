use anyhow::{bail, Context, Result};
use rustc_hash::FxHashSet;

use crate::Answer;

pub fn day15(input: &str) -> Result<(Answer, Answer)> {
    let (map, moves) = input
        .split_once("\n\n")
        .context("expected map and moves separated by a blank line")?;
    let moves: Vec<u8> = moves.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    Ok((
        simulate(map, &moves, false)?.into(),
        simulate(map, &moves, true)?.into(),
    ))
}

/// Pushes boxes around the warehouse and sums their GPS coordinates. With
/// `widen` everything but the robot doubles in width and a single push can
/// fan out over a whole tree of touching boxes.
fn simulate(map: &str, moves: &[u8], widen: bool) -> Result<i64> {
    let scale = if widen { 2 } else { 1 };
    let mut walls = FxHashSet::default();
    let mut boxes = FxHashSet::default(); // a box is its leftmost cell
    let mut robot = None;
    for (r, line) in map.lines().enumerate() {
        for (c, b) in line.bytes().enumerate() {
            let (r, c) = (r as i64, scale * c as i64);
            match b {
                b'#' => {
                    for i in 0..scale {
                        walls.insert((r, c + i));
                    }
                }
                b'O' => {
                    boxes.insert((r, c));
                }
                b'@' => robot = Some((r, c)),
                _ => {}
            }
        }
    }
    let mut robot = robot.context("no robot (@) in map")?;

    for &m in &moves.to_vec() {
        let (dr, dc) = match m {
            b'^' => (-1, 0),
            b'v' => (1, 0),
            b'<' => (0, -1),
            b'>' => (0, 1),
            other => bail!("unknown move {:?}", other as char),
        };

        let box_at = |cell: (i64, i64)| -> Option<(i64, i64)> {
            if boxes.contains(&cell) {
                Some(cell)
            } else if widen && boxes.contains(&(cell.0, cell.1 - 1)) {
                Some((cell.0, cell.1 - 1))
            } else {
                None
            }
        };

        // collect every box the push reaches; bail out on the first wall
        let mut pushed = Vec::new();
        let mut seen = FxHashSet::default();
        let mut frontier = vec![(robot.0 + dr, robot.1 + dc)];
        let mut blocked = false;
        while let Some(cell) = frontier.pop() {
            if walls.contains(&cell) {
                blocked = true;
                break;
            }
            let Some(left) = box_at(cell) else { continue };
            if !seen.insert(left) {
                continue;
            }
            pushed.push(left);
            for i in 0..scale {
                frontier.push((left.0 + dr, left.1 + i + dc));
            }
        }
        if blocked {
            continue;
        }

        for left in &pushed {
            boxes.remove(left);
        }
        for left in &pushed {
            boxes.insert((left.0 + dr, left.1 + dc));
        }
        robot = (robot.0 + dr, robot.1 + dc);
    }

    Ok(boxes.iter().map(|&(r, c)| 100 * r + c).sum())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_day15() -> Result<()> {
        let example = indoc! {"
            ##########
            #..O..O.O#
            #......O.#
            #.OO..O.O#
            #..O@..O.#
            #O#..O...#
            #O..O..O.#
            #.OO.O.OO#
            #....O...#
            ##########

            <vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
            vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
            ><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
            <<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
            ^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
            ^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
            >^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
            <><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
            ^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
            v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^
        "};
        let (part1, part2) = day15(example)?;
        assert_eq!(part1, 10092);
        assert_eq!(part2, 9021);
        Ok(())
    }

    #[test]
    fn test_day15_small_example() -> Result<()> {
        let map = indoc! {"
            ########
            #..O.O.#
            ##@.O..#
            #...O..#
            #.#.O..#
            #...O..#
            #......#
            ########
        "};
        let moves = b"<^^>>>vv<v>>v<<";
        assert_eq!(simulate(map, moves, false)?, 2028);
        Ok(())
    }

    #[test]
    fn test_day15_wide_push() -> Result<()> {
        let map = indoc! {"
            #######
            #...#.#
            #.....#
            #..OO@#
            #..O..#
            #.....#
            #######
        "};
        let moves = b"<vv<<^^<<^^";
        assert_eq!(simulate(map, moves, true)?, 618);
        Ok(())
    }
}
