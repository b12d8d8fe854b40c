use aho_corasick::AhoCorasick;
use anyhow::{Context, Result};

use crate::Answer;

pub fn day19(input: &str) -> Result<(Answer, Answer)> {
    let (patterns, designs) = input
        .split_once("\n\n")
        .context("expected patterns and designs separated by a blank line")?;
    let patterns: Vec<&str> = patterns.trim().split(", ").collect();
    let ac = AhoCorasick::new(&patterns)?;

    let mut possible = 0usize;
    let mut total_ways = 0i64;
    for design in designs.lines().filter(|line| !line.is_empty()) {
        let ways = arrangements(&ac, design);
        possible += (ways > 0) as usize;
        total_ways += ways;
    }
    Ok((possible.into(), total_ways.into()))
}

/// Suffix DP: `ways[i]` counts the arrangements of `design[i..]`, summing
/// over every pattern that matches at position `i`. One unanchored
/// overlapping scan collects all matches, bucketed by start position.
fn arrangements(ac: &AhoCorasick, design: &str) -> i64 {
    let mut ends_at: Vec<Vec<usize>> = vec![Vec::new(); design.len()];
    for m in ac.find_overlapping_iter(design) {
        ends_at[m.start()].push(m.end());
    }

    let mut ways = vec![0i64; design.len() + 1];
    ways[design.len()] = 1;
    for i in (0..design.len()).rev() {
        let total: i64 = ends_at[i].iter().map(|&end| ways[end]).sum();
        ways[i] = total;
    }
    ways[0]
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const EXAMPLE: &str = indoc! {"
        r, wr, b, g, bwu, rb, gb, br

        brwrr
        bggr
        gbbr
        rrbgbr
        ubwu
        bwurrg
        brgr
        bbrgwb
    "};

    #[test]
    fn test_day19() -> Result<()> {
        let (part1, part2) = day19(EXAMPLE)?;
        assert_eq!(part1, 6);
        assert_eq!(part2, 16);
        Ok(())
    }

    #[test]
    fn test_day19_arrangement_counts() -> Result<()> {
        let patterns = ["r", "wr", "b", "g", "bwu", "rb", "gb", "br"];
        let ac = AhoCorasick::new(patterns.as_slice())?;
        assert_eq!(arrangements(&ac, "brwrr"), 2);
        assert_eq!(arrangements(&ac, "rrbgbr"), 6);
        assert_eq!(arrangements(&ac, "ubwu"), 0);
        assert_eq!(arrangements(&ac, ""), 1);
        Ok(())
    }

    #[test]
    fn test_day19_interior_matches_do_not_count() -> Result<()> {
        // "wr" matches inside "awrb" but nothing composes the whole design
        let ac = AhoCorasick::new(["wr", "b"].as_slice())?;
        assert_eq!(arrangements(&ac, "awrb"), 0);
        assert_eq!(arrangements(&ac, "wrb"), 1);
        Ok(())
    }
}
