use std::{fmt::Display, str::FromStr};

fn parse_at_least<T>(s: &str, min: T) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .replace('_', "")
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    Ok(value)
}

/// Parse a positive `u64` (>= 1) from CLI input.
pub fn parse_positive_u64(s: &str) -> Result<u64, String> {
    parse_at_least(s, 1)
}
