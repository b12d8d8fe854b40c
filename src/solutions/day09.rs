use anyhow::{ensure, Result};

use crate::{do_slow_tasks, Answer};

pub fn day9(input: &str) -> Result<(Answer, Answer)> {
    let widths: Vec<i64> = input
        .trim()
        .bytes()
        .map(|b| {
            ensure!(
                b.is_ascii_digit(),
                "disk map must be decimal digits, got {:?}",
                b as char
            );
            Ok((b - b'0') as i64)
        })
        .collect::<Result<_>>()?;

    let part2 = if do_slow_tasks() {
        compact_whole_files(&widths).into()
    } else {
        Answer::Skipped
    };

    Ok((compact_blocks(&widths).into(), part2))
}

/// Moves single blocks from the back of the disk into the frontmost holes.
fn compact_blocks(widths: &[i64]) -> i64 {
    let mut disk: Vec<Option<i64>> = Vec::new();
    for (i, &width) in widths.iter().enumerate() {
        let id = (i % 2 == 0).then_some((i / 2) as i64);
        disk.extend(std::iter::repeat(id).take(width as usize));
    }

    let mut lo = 0;
    let mut hi = disk.len();
    while lo < hi {
        if disk[lo].is_some() {
            lo += 1;
        } else if disk[hi - 1].is_none() {
            hi -= 1;
        } else {
            disk.swap(lo, hi - 1);
        }
    }

    disk.iter()
        .enumerate()
        .filter_map(|(position, id)| id.map(|id| position as i64 * id))
        .sum()
}

/// Moves each file once, in decreasing id order, into the leftmost gap that
/// fits entirely to its left. Files that fit nowhere stay put.
fn compact_whole_files(widths: &[i64]) -> i64 {
    let mut files = Vec::new(); // (start, width), indexed by id
    let mut gaps = Vec::new(); // (start, width), sorted by start
    let mut position = 0i64;
    for (i, &width) in widths.iter().enumerate() {
        if i % 2 == 0 {
            files.push((position, width));
        } else if width > 0 {
            gaps.push((position, width));
        }
        position += width;
    }

    for id in (0..files.len()).rev() {
        let (start, width) = files[id];
        if let Some(gap) = gaps
            .iter_mut()
            .take_while(|&&mut (gap_start, _)| gap_start < start)
            .find(|&&mut (_, gap_width)| gap_width >= width)
        {
            files[id].0 = gap.0;
            gap.0 += width;
            gap.1 -= width;
        }
    }

    files
        .iter()
        .enumerate()
        .map(|(id, &(start, width))| id as i64 * (start..start + width).sum::<i64>())
        .sum()
}
