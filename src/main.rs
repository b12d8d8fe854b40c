use std::time::{Duration, Instant};

use anyhow::{ensure, Result};

use aoc2024::{default_input, Solution, ALL_SOLUTIONS};

fn main() -> Result<()> {
    env_logger::init();

    let mut total = Duration::default();
    match std::env::args().nth(1) {
        Some(arg) => {
            let n: usize = arg.parse()?;
            ensure!(
                (1..=ALL_SOLUTIONS.len()).contains(&n),
                "day must be between 1 and {}",
                ALL_SOLUTIONS.len()
            );
            total += execute_day(n, ALL_SOLUTIONS[n - 1])?;
        }
        None => {
            for (i, &day) in ALL_SOLUTIONS.iter().enumerate() {
                total += execute_day(i + 1, day)?;
            }
        }
    }
    println!("Total processing time: {}", format_duration(total));
    Ok(())
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

fn execute_day(n: usize, f: Solution) -> Result<Duration> {
    println!("Day {}:", n);
    let input = default_input(n);

    let start = Instant::now();
    let (part1, part2) = f(&input)?;
    let elapsed = start.elapsed();

    println!("  Part 1: {}", part1);
    println!("  Part 2: {}", part2);
    println!("  Finished in {}", format_duration(elapsed));
    println!("---------------------");
    Ok(elapsed)
}
