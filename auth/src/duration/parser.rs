use chrono::Duration;

use super::errors::DurationError;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Parse a compact `<integer><unit>` duration such as `15m` or `7d`.
///
/// Units are case-sensitive: `s` seconds, `m` minutes, `h` hours, `d` days,
/// `w` weeks, `M` months of 30 days and `y` years of 365 days. Months and
/// years are fixed approximations, not calendar arithmetic.
///
/// The numeric prefix accepts an optional sign, so `-1h` parses to a
/// negative duration.
///
/// # Errors
/// * `InvalidFormat` - Input shorter than two bytes
/// * `InvalidNumber` - Prefix is not an integer, or the result overflows
/// * `InvalidUnit` - Trailing character is not a known unit
pub fn parse(input: &str) -> Result<Duration, DurationError> {
    if input.len() < 2 {
        return Err(DurationError::InvalidFormat(input.to_string()));
    }

    let Some(unit) = input.chars().next_back() else {
        return Err(DurationError::InvalidFormat(input.to_string()));
    };
    let number = &input[..input.len() - unit.len_utf8()];

    let amount: i64 = number
        .parse()
        .map_err(|_| DurationError::InvalidNumber(number.to_string()))?;

    let unit_seconds = unit_in_seconds(unit)?;

    amount
        .checked_mul(unit_seconds)
        .and_then(Duration::try_seconds)
        .ok_or_else(|| DurationError::InvalidNumber(number.to_string()))
}

fn unit_in_seconds(unit: char) -> Result<i64, DurationError> {
    match unit {
        's' => Ok(1),
        'm' => Ok(MINUTE),
        'h' => Ok(HOUR),
        'd' => Ok(DAY),
        'w' => Ok(7 * DAY),
        'M' => Ok(30 * DAY),
        'y' => Ok(365 * DAY),
        other => Err(DurationError::InvalidUnit(other)),
    }
}
