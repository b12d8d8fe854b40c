use anyhow::{bail, ensure, Result};
use rustc_hash::FxHashMap;

use crate::{do_slow_tasks, Answer};

type Pos = (i64, i64);
type Memo = FxHashMap<(Pos, Pos, u32), i64>;

const NUMERIC_GAP: Pos = (0, 3);
const ARROW_GAP: Pos = (0, 0);
const ARROW_A: Pos = (2, 0);

/// Column/row of a key on the door's numeric pad.
fn numeric_pos(key: u8) -> Result<Pos> {
    Ok(match key {
        b'7' => (0, 0),
        b'8' => (1, 0),
        b'9' => (2, 0),
        b'4' => (0, 1),
        b'5' => (1, 1),
        b'6' => (2, 1),
        b'1' => (0, 2),
        b'2' => (1, 2),
        b'3' => (2, 2),
        b'0' => (1, 3),
        b'A' => (2, 3),
        other => bail!("no key {:?} on the numeric pad", other as char),
    })
}

/// Column/row of an arrow key on a robot's directional pad.
fn arrow_pos(key: u8) -> Pos {
    match key {
        b'^' => (1, 0),
        b'<' => (0, 1),
        b'v' => (1, 1),
        _ => (2, 1), // '>'
    }
}

/// Human keypresses needed to move a pad's arm from `from` to `to` and
/// press, with `layers` expansions through chained arrow pads below. An
/// optimal route moves in at most one L shape, so only the horizontal-first
/// and vertical-first routes are tried, dropping whichever would sweep the
/// arm over the pad's gap.
///
/// The memo is shared between the numeric pad and the arrow pads: the
/// numeric pad only ever sits at the topmost layer, so its entries cannot
/// collide with arrow entries at lower layers.
fn press_cost(from: Pos, to: Pos, gap: Pos, layers: u32, memo: &mut Memo) -> i64 {
    if layers == 0 {
        return 1;
    }
    if let Some(&cost) = memo.get(&(from, to, layers)) {
        return cost;
    }
    let (fx, fy) = from;
    let (tx, ty) = to;
    let horizontal = if tx < fx { b'<' } else { b'>' };
    let vertical = if ty < fy { b'^' } else { b'v' };
    let h = vec![horizontal; fx.abs_diff(tx) as usize];
    let v = vec![vertical; fy.abs_diff(ty) as usize];

    let mut best = i64::MAX;
    for (route, corner) in [([&h, &v], (tx, fy)), ([&v, &h], (fx, ty))] {
        if corner == gap {
            continue;
        }
        let mut cost = 0;
        let mut arm = ARROW_A;
        for key in route.into_iter().flatten().map(|&k| arrow_pos(k)).chain([ARROW_A]) {
            cost += press_cost(arm, key, ARROW_GAP, layers - 1, memo);
            arm = key;
        }
        best = best.min(cost);
    }
    memo.insert((from, to, layers), best);
    best
}

fn sequence_length(code: &str, layers: u32, memo: &mut Memo) -> Result<i64> {
    let mut length = 0;
    let mut arm = numeric_pos(b'A')?;
    for key in code.bytes() {
        let to = numeric_pos(key)?;
        length += press_cost(arm, to, NUMERIC_GAP, layers, memo);
        arm = to;
    }
    Ok(length)
}

fn complexity(input: &str, layers: u32) -> Result<i64> {
    let mut memo = Memo::default();
    let mut total = 0;
    for code in input.lines().filter(|line| !line.is_empty()) {
        ensure!(code.ends_with('A'), "code {code:?} must end in A");
        let digits: i64 = code.trim_end_matches('A').parse()?;
        total += digits * sequence_length(code, layers, &mut memo)?;
    }
    Ok(total)
}

pub fn day21(input: &str) -> Result<(Answer, Answer)> {
    let part2 = if do_slow_tasks() {
        complexity(input, 26)?.into()
    } else {
        Answer::Skipped
    };
    Ok((complexity(input, 3)?.into(), part2))
}
