use anyhow::Result;
use regex::Regex;

use crate::Answer;

pub fn day3(input: &str) -> Result<(Answer, Answer)> {
    // ASCII classes only; the crate builds regex without unicode support
    let instructions = Regex::new(r"mul\(([0-9]+),([0-9]+)\)|do\(\)|don't\(\)")?;

    let mut total = 0i64;
    let mut enabled_total = 0i64;
    let mut enabled = true;
    for caps in instructions.captures_iter(input) {
        match &caps[0] {
            "do()" => enabled = true,
            "don't()" => enabled = false,
            _ => {
                let product = caps[1].parse::<i64>()? * caps[2].parse::<i64>()?;
                total += product;
                if enabled {
                    enabled_total += product;
                }
            }
        }
    }

    Ok((total.into(), enabled_total.into()))
}
