use anyhow::{ensure, Context, Result};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::{do_slow_tasks, Answer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    fn from_marker(b: u8) -> Option<Heading> {
        match b {
            b'^' => Some(Heading::Up),
            b'>' => Some(Heading::Right),
            b'v' => Some(Heading::Down),
            b'<' => Some(Heading::Left),
            _ => None,
        }
    }

    fn clockwise(self) -> Heading {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    fn delta(self) -> (i64, i64) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Right => (0, 1),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Cell {
    row: i64,
    col: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Agent {
    position: Cell,
    heading: Heading,
}

#[derive(Debug, Clone)]
struct Grid {
    rows: i64,
    cols: i64,
    blocked: Vec<bool>,
    start: Agent,
}

impl Grid {
    fn parse(input: &str) -> Result<Grid> {
        let mut blocked = Vec::new();
        let mut start = None;
        let mut rows = 0i64;
        let mut cols = None;
        for (row, line) in input.lines().enumerate() {
            match cols {
                None => cols = Some(line.len()),
                Some(width) => ensure!(
                    line.len() == width,
                    "ragged map: row {} is {} wide, expected {}",
                    row,
                    line.len(),
                    width
                ),
            }
            for (col, b) in line.bytes().enumerate() {
                blocked.push(b == b'#');
                if let Some(heading) = Heading::from_marker(b) {
                    ensure!(start.is_none(), "more than one guard marker in map");
                    start = Some(Agent {
                        position: Cell {
                            row: row as i64,
                            col: col as i64,
                        },
                        heading,
                    });
                }
            }
            rows += 1;
        }
        Ok(Grid {
            rows,
            cols: cols.context("empty map")? as i64,
            blocked,
            start: start.context("no guard marker (one of ^>v<) in map")?,
        })
    }

    fn contains(&self, cell: Cell) -> bool {
        (0..self.rows).contains(&cell.row) && (0..self.cols).contains(&cell.col)
    }

    fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked[(cell.row * self.cols + cell.col) as usize]
    }

    /// A copy of the grid with one extra obstacle; `self` stays untouched so
    /// many what-if copies can be derived from one base.
    fn with_obstacle(&self, cell: Cell) -> Grid {
        let mut grid = self.clone();
        grid.blocked[(cell.row * self.cols + cell.col) as usize] = true;
        grid
    }
}

enum Step {
    Moved(Agent),
    Rotated(Agent),
    Escaped,
}

fn step(grid: &Grid, agent: Agent) -> Step {
    let (dr, dc) = agent.heading.delta();
    let tentative = Cell {
        row: agent.position.row + dr,
        col: agent.position.col + dc,
    };
    if !grid.contains(tentative) {
        Step::Escaped
    } else if grid.is_blocked(tentative) {
        Step::Rotated(Agent {
            heading: agent.heading.clockwise(),
            ..agent
        })
    } else {
        Step::Moved(Agent {
            position: tentative,
            ..agent
        })
    }
}

fn visited_cells(grid: &Grid) -> FxHashSet<Cell> {
    let mut agent = grid.start;
    let mut visited = FxHashSet::default();
    visited.insert(agent.position);
    loop {
        match step(grid, agent) {
            Step::Moved(next) => {
                visited.insert(next.position);
                agent = next;
            }
            Step::Rotated(next) => agent = next,
            Step::Escaped => return visited,
        }
    }
}

/// Runs the patrol on a grid with an extra obstacle until it either escapes
/// or revisits a (position, heading) pair, which a deterministic walk can
/// never leave again.
fn induces_loop(grid: &Grid) -> bool {
    let mut agent = grid.start;
    let mut seen = FxHashSet::default();
    seen.insert(agent);
    loop {
        match step(grid, agent) {
            Step::Escaped => return false,
            Step::Moved(next) | Step::Rotated(next) => {
                if !seen.insert(next) {
                    return true;
                }
                agent = next;
            }
        }
    }
}

/// An obstacle off the unobstructed path can never deflect the patrol, so
/// only visited cells (minus the start) are worth trying.
fn loop_candidates(grid: &Grid) -> FxHashSet<Cell> {
    let mut candidates = visited_cells(grid);
    candidates.remove(&grid.start.position);
    candidates
}

fn count_loop_placements(grid: &Grid) -> usize {
    loop_candidates(grid)
        .into_par_iter()
        .filter(|&cell| induces_loop(&grid.with_obstacle(cell)))
        .count()
}

fn render(grid: &Grid, visited: &FxHashSet<Cell>) -> String {
    let mut out = String::new();
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let cell = Cell { row, col };
            out.push(if grid.is_blocked(cell) {
                '#'
            } else if visited.contains(&cell) {
                'X'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}

pub fn day6(input: &str) -> Result<(Answer, Answer)> {
    let grid = Grid::parse(input)?;
    let visited = visited_cells(&grid);
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("patrol:\n{}", render(&grid, &visited));
    }

    let placements = if do_slow_tasks() {
        count_loop_placements(&grid).into()
    } else {
        Answer::Skipped
    };

    Ok((visited.len().into(), placements))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const EXAMPLE: &str = indoc! {"
        ....#.....
        .........#
        ..........
        ..#.......
        .......#..
        ..........
        .#..^.....
        ........#.
        #.........
        ......#...
    "};

    #[test]
    fn test_day6() -> Result<()> {
        let (part1, _) = day6(EXAMPLE)?;
        assert_eq!(part1, 41);

        let grid = Grid::parse(EXAMPLE)?;
        assert_eq!(visited_cells(&grid).len(), 41);
        assert_eq!(count_loop_placements(&grid), 6);
        Ok(())
    }

    #[test]
    fn test_day6_single_cell_map() -> Result<()> {
        let (part1, _) = day6("^")?;
        assert_eq!(part1, 1);

        let grid = Grid::parse("^")?;
        assert_eq!(count_loop_placements(&grid), 0);
        assert!(matches!(step(&grid, grid.start), Step::Escaped));
        Ok(())
    }

    #[test]
    fn test_day6_trace_is_deterministic() -> Result<()> {
        let grid = Grid::parse(EXAMPLE)?;
        let visited = visited_cells(&grid);
        assert!(!visited.is_empty());
        assert!(visited.contains(&grid.start.position));
        assert_eq!(visited, visited_cells(&grid));
        Ok(())
    }

    #[test]
    fn test_day6_candidates_lie_on_the_patrol_path() -> Result<()> {
        let grid = Grid::parse(EXAMPLE)?;
        let visited = visited_cells(&grid);
        let candidates = loop_candidates(&grid);
        assert!(!candidates.contains(&grid.start.position));
        assert!(candidates.iter().all(|cell| visited.contains(cell)));
        assert_eq!(candidates.len(), visited.len() - 1);
        Ok(())
    }

    #[test]
    fn test_day6_with_obstacle_leaves_base_grid_untouched() -> Result<()> {
        let grid = Grid::parse(EXAMPLE)?;
        let cell = Cell { row: 6, col: 3 };
        let derived = grid.with_obstacle(cell);
        assert!(derived.is_blocked(cell));
        assert!(!grid.is_blocked(cell));
        Ok(())
    }

    #[test]
    fn test_day6_rotation_keeps_position() -> Result<()> {
        let grid = Grid::parse("#\n^")?;
        match step(&grid, grid.start) {
            Step::Rotated(next) => {
                assert_eq!(next.position, grid.start.position);
                assert_eq!(next.heading, Heading::Right);
            }
            _ => panic!("expected a rotation in front of the obstacle"),
        }
        Ok(())
    }

    #[test]
    fn test_day6_loops_repeat_within_the_state_bound() -> Result<()> {
        let grid = Grid::parse(EXAMPLE)?;
        let looping: Vec<Cell> = loop_candidates(&grid)
            .into_iter()
            .filter(|&cell| induces_loop(&grid.with_obstacle(cell)))
            .collect();
        assert_eq!(looping.len(), 6);

        // every counted placement must revisit a (position, heading) pair
        // within area * 4 transitions, the size of the whole state space
        let cap = (grid.rows * grid.cols * 4) as usize;
        for cell in looping {
            let obstructed = grid.with_obstacle(cell);
            let mut agent = obstructed.start;
            let mut seen = FxHashSet::default();
            seen.insert(agent);
            let mut repeated = false;
            for _ in 0..cap {
                match step(&obstructed, agent) {
                    Step::Escaped => break,
                    Step::Moved(next) | Step::Rotated(next) => {
                        if !seen.insert(next) {
                            repeated = true;
                            break;
                        }
                        agent = next;
                    }
                }
            }
            assert!(repeated, "placement {cell:?} did not loop within the cap");
        }
        Ok(())
    }

    #[test]
    fn test_day6_rejects_malformed_maps() {
        assert!(Grid::parse("..#\n...").is_err(), "no guard marker");
        assert!(Grid::parse("^.\n...").is_err(), "ragged map");
        assert!(Grid::parse("^.\n.<").is_err(), "two guard markers");
        assert!(Grid::parse("").is_err(), "empty map");
    }
}
