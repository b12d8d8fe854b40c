use anyhow::{bail, Context, Result};
use nalgebra::Vector2;
use num::integer::lcm;
use rustc_hash::FxHashSet;

use crate::{ints, Answer};

struct Robot {
    position: Vector2<i64>,
    velocity: Vector2<i64>,
}

pub fn day14(input: &str) -> Result<(Answer, Answer)> {
    let robots = parse_robots(input)?;
    // the bathroom is exactly as large as the robots' starting spread
    let width = robots
        .iter()
        .map(|r| r.position.x)
        .max()
        .context("no robots")?
        + 1;
    let height = robots
        .iter()
        .map(|r| r.position.y)
        .max()
        .context("no robots")?
        + 1;

    let mut quadrants = [0i64; 4];
    for robot in &robots {
        let x = (robot.position.x + 100 * robot.velocity.x).rem_euclid(width);
        let y = (robot.position.y + 100 * robot.velocity.y).rem_euclid(height);
        if x == width / 2 || y == height / 2 {
            continue;
        }
        quadrants[(x > width / 2) as usize * 2 + (y > height / 2) as usize] += 1;
    }
    let safety: i64 = quadrants.iter().product();

    Ok((safety.into(), first_distinct_time(&robots, width, height)?.into()))
}

fn parse_robots(input: &str) -> Result<Vec<Robot>> {
    input
        .lines()
        .map(|line| {
            let &[px, py, vx, vy] = ints(line).as_slice() else {
                bail!("expected p=x,y v=x,y: {line:?}");
            };
            Ok(Robot {
                position: Vector2::new(px, py),
                velocity: Vector2::new(vx, vy),
            })
        })
        .collect()
}

/// The easter egg shows at the first step where no two robots overlap. Both
/// axes wrap independently, so everything repeats after lcm(width, height).
fn first_distinct_time(robots: &[Robot], width: i64, height: i64) -> Result<i64> {
    let mut positions = FxHashSet::default();
    for t in 0..lcm(width, height) {
        positions.clear();
        let distinct = robots.iter().all(|r| {
            positions.insert((
                (r.position.x + t * r.velocity.x).rem_euclid(width),
                (r.position.y + t * r.velocity.y).rem_euclid(height),
            ))
        });
        if distinct {
            if log::log_enabled!(log::Level::Debug) {
                log::debug!("after {} seconds:\n{}", t, render(&positions, width, height));
            }
            return Ok(t);
        }
    }
    bail!("the robots never spread out within one period")
}

fn render(positions: &FxHashSet<(i64, i64)>, width: i64, height: i64) -> String {
    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push(if positions.contains(&(x, y)) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
