use anyhow::Result;

use crate::input::expand_key;
use crate::model::day::Day;

const RELATIVE_KEYWORDS: [&str; 3] = ["today", "tomorrow", "yesterday"];

/// Turns user input into a weekday, relative to `today`.
///
/// Accepts `today`/`tod`, `tomorrow`/`tom`, `yesterday`, and weekday names
/// or any unambiguous prefix of one (`mon`, `th` is ambiguous, `thu` is not).
pub fn parse_human_day(input: &str, today: Day) -> Result<Day> {
    let input = input.trim().to_lowercase();

    let names: Vec<String> = Day::ALL.iter().map(|d| d.as_str().to_lowercase()).collect();
    let mut candidates: Vec<&str> = names.iter().map(String::as_str).collect();
    candidates.extend(RELATIVE_KEYWORDS);

    match expand_key(&input, &candidates)?.as_str() {
        "today" => Ok(today),
        "tomorrow" => Ok(today.succ()),
        "yesterday" => Ok(today.pred()),
        name => Ok(name.parse::<Day>()?),
    }
}

/// The weekday to act on: the parsed `--day` value, or today.
pub fn resolve_day(input: Option<&str>) -> Result<Day> {
    let today = Day::today();
    match input {
        Some(input) => parse_human_day(input, today),
        None => Ok(today),
    }
}
