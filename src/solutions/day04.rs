use anyhow::Result;

use crate::Answer;

const DIRECTIONS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn day4(input: &str) -> Result<(Answer, Answer)> {
    let grid: Vec<&[u8]> = input.lines().map(str::as_bytes).collect();
    let at = |row: i64, col: i64| -> u8 {
        if row < 0 || col < 0 {
            return 0;
        }
        grid.get(row as usize)
            .and_then(|line| line.get(col as usize))
            .copied()
            .unwrap_or(0)
    };

    let mut words = 0i64;
    let mut crosses = 0i64;
    for row in 0..grid.len() as i64 {
        for col in 0..grid[row as usize].len() as i64 {
            match at(row, col) {
                b'X' => {
                    for (dr, dc) in DIRECTIONS {
                        if (1..4).all(|i| at(row + i * dr, col + i * dc) == b"XMAS"[i as usize]) {
                            words += 1;
                        }
                    }
                }
                b'A' => {
                    let is_mas = |(a, b): (u8, u8)| (a, b) == (b'M', b'S') || (a, b) == (b'S', b'M');
                    if is_mas((at(row - 1, col - 1), at(row + 1, col + 1)))
                        && is_mas((at(row - 1, col + 1), at(row + 1, col - 1)))
                    {
                        crosses += 1;
                    }
                }
                _ => {}
            }
        }
    }

    Ok((words.into(), crosses.into()))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_day4() -> Result<()> {
        let example = indoc! {"
            MMMSXXMASM
            MSAMXMSMSA
            AMXSXMAAMM
            MSAMASMSMX
            XMASAMXAMM
            XXAMMXXAMA
            SMSMSASXSS
            SAXAMASAAA
            MAMMMXMMMM
            MXMXAXMASX
        "};
        let (part1, part2) = day4(example)?;
        assert_eq!(part1, 18);
        assert_eq!(part2, 9);
        Ok(())
    }
}
