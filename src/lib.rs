use std::{env, fmt, fs};

use anyhow::Result;

pub mod solutions;

pub use solutions::*;

pub type Solution = fn(&str) -> Result<(Answer, Answer)>;

pub const ALL_SOLUTIONS: [Solution; 25] = [
    day1, day2, day3, day4, day5, day6, day7, day8, day9, day10, day11, day12, day13, day14,
    day15, day16, day17, day18, day19, day20, day21, day22, day23, day24, day25,
];

/// Set to `1` to also run the brute-force parts; they answer
/// [`Answer::Skipped`] otherwise.
pub const DO_SLOW_TASKS_ENV: &str = "DO_SLOW_TASKS";

pub fn do_slow_tasks() -> bool {
    env::var(DO_SLOW_TASKS_ENV).is_ok_and(|v| v == "1")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Num(i64),
    Text(String),
    Skipped,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Num(n) => write!(f, "{}", n),
            Answer::Text(s) => f.write_str(s),
            Answer::Skipped => write!(f, "skipped (set {}=1)", DO_SLOW_TASKS_ENV),
        }
    }
}

impl From<i64> for Answer {
    fn from(n: i64) -> Answer {
        Answer::Num(n)
    }
}

impl From<usize> for Answer {
    fn from(n: usize) -> Answer {
        Answer::Num(n as i64)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Answer {
        Answer::Text(s)
    }
}

impl PartialEq<i64> for Answer {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Answer::Num(n) if n == other)
    }
}

impl PartialEq<&str> for Answer {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Answer::Text(s) if s == other)
    }
}

/// Scans every decimal integer out of `s`, ignoring everything else. A `-`
/// directly in front of a digit run makes it negative.
pub fn ints(s: &str) -> Vec<i64> {
    let bytes = s.as_bytes();
    let mut ret = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let negative = bytes[i] == b'-' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if negative {
            i += 1;
        }
        if bytes[i].is_ascii_digit() {
            let mut n = 0i64;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                n = n * 10 + (bytes[i] - b'0') as i64;
                i += 1;
            }
            ret.push(if negative { -n } else { n });
        } else {
            i += 1;
        }
    }
    ret
}

pub fn load_input(name: &str) -> String {
    fs::read_to_string("inputs/".to_string() + name).unwrap()
}

pub fn default_input(n: usize) -> String {
    load_input(&format!("{}.txt", n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ints() {
        assert_eq!(ints("p=0,4 v=3,-3"), [0, 4, 3, -3]);
        assert_eq!(ints("190: 10 19"), [190, 10, 19]);
        assert_eq!(ints("Prize: X=8400, Y=5400"), [8400, 5400]);
        assert_eq!(ints("no numbers here"), []);
        assert_eq!(ints("17-3"), [17, -3]);
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer::Num(-7).to_string(), "-7");
        assert_eq!(Answer::Text("6,1".into()).to_string(), "6,1");
        assert_eq!(Answer::Skipped.to_string(), "skipped (set DO_SLOW_TASKS=1)");
    }
}
