use anyhow::{ensure, Result};
use rayon::prelude::*;

use crate::{do_slow_tasks, ints, Answer};

pub fn day7(input: &str) -> Result<(Answer, Answer)> {
    let equations: Vec<Vec<i64>> = input.lines().map(ints).filter(|e| !e.is_empty()).collect();
    for equation in &equations {
        ensure!(
            equation.len() >= 2,
            "equation needs a test value and at least one operand"
        );
    }

    let calibration: i64 = equations
        .par_iter()
        .filter(|eq| reachable(eq[0], &eq[1..], false))
        .map(|eq| eq[0])
        .sum();

    let with_concat = if do_slow_tasks() {
        equations
            .par_iter()
            .filter(|eq| reachable(eq[0], &eq[1..], true))
            .map(|eq| eq[0])
            .sum::<i64>()
            .into()
    } else {
        Answer::Skipped
    };

    Ok((calibration.into(), with_concat))
}

/// Works backwards from the test value: the final operator application must
/// be undoable, which prunes much harder than enumerating operators forwards.
fn reachable(target: i64, operands: &[i64], with_concat: bool) -> bool {
    let Some((&last, rest)) = operands.split_last() else {
        return false;
    };
    if rest.is_empty() {
        return target == last;
    }
    if last != 0 && target % last == 0 && reachable(target / last, rest, with_concat) {
        return true;
    }
    if with_concat {
        let shift = 10i64.pow(last.max(1).ilog10() + 1);
        if target % shift == last && reachable(target / shift, rest, with_concat) {
            return true;
        }
    }
    target >= last && reachable(target - last, rest, with_concat)
}
