//! Abbreviated human-readable durations for the report's duration column.

/// Unit table in descending magnitude, expressed in whole microseconds.
/// Working in integers avoids float floor-division artifacts at unit
/// boundaries (0.5 / 0.001 lands just under 500 in f64).
const UNITS: [(&str, u64); 5] = [
    ("h", 3_600_000_000),
    ("m", 60_000_000),
    ("s", 1_000_000),
    ("ms", 1_000),
    ("us", 1),
];

const MAX_TERMS: usize = 2;

/// Format a seconds count as at most two unit terms, largest unit first,
/// e.g. `3725.0` becomes `"1h 2m"`. An input below every unit threshold
/// (notably `0.0`) yields the empty string.
pub fn format_duration(seconds: f64) -> String {
    let mut remaining = (seconds * 1_000_000.0).round() as u64;
    let mut terms: Vec<String> = Vec::with_capacity(MAX_TERMS);

    for (suffix, divisor) in UNITS {
        let quotient = remaining / divisor;
        if quotient >= 1 {
            terms.push(format!("{}{}", quotient, suffix));
            remaining -= quotient * divisor;
        }
        if terms.len() == MAX_TERMS {
            break;
        }
    }

    terms.join(" ")
}
