use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::Answer;

const ROUNDS: usize = 2000;
/// change windows are four deltas in -9..=9, packed base 19
const WINDOWS: usize = 19 * 19 * 19 * 19;

fn next_secret(mut secret: u64) -> u64 {
    secret = (secret ^ (secret << 6)) & 0xFF_FFFF;
    secret = (secret ^ (secret >> 5)) & 0xFF_FFFF;
    (secret ^ (secret << 11)) & 0xFF_FFFF
}

/// Adds each buyer's price for every change window they see first-come
/// first-served into a flat tally indexed by the packed window. `epoch`
/// marks windows already sold to this buyer without reallocating per buyer.
fn tally_buyer(seed: u64, buyer: u32, tally: &mut [i64], epoch: &mut [u32]) {
    let mut secret = seed;
    let mut window = 0usize;
    for round in 0..ROUNDS {
        let next = next_secret(secret);
        let change = (next % 10 + 9 - secret % 10) as usize;
        window = window % (19 * 19 * 19) * 19 + change;
        secret = next;
        if round >= 3 && epoch[window] != buyer + 1 {
            epoch[window] = buyer + 1;
            tally[window] += (next % 10) as i64;
        }
    }
}

pub fn day22(input: &str) -> Result<(Answer, Answer)> {
    let seeds: Vec<u64> = input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.parse().context("seeds must be decimal integers"))
        .collect::<Result<_>>()?;

    let part1: i64 = seeds
        .par_iter()
        .map(|&seed| (0..ROUNDS).fold(seed, |s, _| next_secret(s)) as i64)
        .sum();

    let tally = seeds
        .par_iter()
        .enumerate()
        .fold(
            || (vec![0i64; WINDOWS], vec![0u32; WINDOWS]),
            |(mut tally, mut epoch), (buyer, &seed)| {
                tally_buyer(seed, buyer as u32, &mut tally, &mut epoch);
                (tally, epoch)
            },
        )
        .map(|(tally, _)| tally)
        .reduce(
            || vec![0i64; WINDOWS],
            |mut left, right| {
                for (l, r) in left.iter_mut().zip(right) {
                    *l += r;
                }
                left
            },
        );
    let part2 = tally.into_iter().max().context("no buyers")?;

    Ok((part1.into(), part2.into()))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_day22() -> Result<()> {
        let (part1, _) = day22(indoc! {"
            1
            10
            100
            2024
        "})?;
        assert_eq!(part1, 37327623);

        let (_, part2) = day22(indoc! {"
            1
            2
            3
            2024
        "})?;
        assert_eq!(part2, 23);
        Ok(())
    }

    #[test]
    fn test_day22_secret_evolution() {
        let mut secret = 123;
        let expected = [
            15887950, 16495136, 527345, 704524, 1553684, 12683156, 11100544, 12249484, 7753432,
            5908254,
        ];
        for want in expected {
            secret = next_secret(secret);
            assert_eq!(secret, want);
        }
    }

    #[test]
    fn test_day22_window_is_only_sold_once_per_buyer() -> Result<()> {
        // buyer 123 first sees the (-1,-1,0,2) window when the price is 6
        let mut tally = vec![0i64; WINDOWS];
        let mut epoch = vec![0u32; WINDOWS];
        tally_buyer(123, 0, &mut tally, &mut epoch);
        let window = ((((-1 + 9) * 19 + (-1 + 9)) * 19 + 9) * 19 + (2 + 9)) as usize;
        assert_eq!(tally[window], 6);
        Ok(())
    }
}
