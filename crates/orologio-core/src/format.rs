//! Rendering a time sample into display text.

use crate::clock::TimeSample;

/// Formats a time sample using a strftime-like format string.
///
/// Supports: `%H` (hour), `%M` (minute), `%S` (second), `%A` (weekday),
/// `%d` (day), `%B` (month name), `%Y` (year), `%%` (literal %).
/// Numeric fields are always zero-padded to two digits. Unrecognized
/// escapes are passed through unchanged.
pub fn format_sample(sample: &TimeSample, fmt: &str) -> String {
    let weekdays = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];
    let months = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    let mut result = String::with_capacity(fmt.len() + 16);
    let mut chars = fmt.chars();

    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.next() {
                Some('H') => result.push_str(&format!("{:02}", sample.hour)),
                Some('M') => result.push_str(&format!("{:02}", sample.minute)),
                Some('S') => result.push_str(&format!("{:02}", sample.second)),
                Some('A') => {
                    let day = sample.weekday as usize;
                    result.push_str(weekdays.get(day).unwrap_or(&"???"));
                }
                Some('d') => result.push_str(&format!("{:02}", sample.day)),
                Some('B') => {
                    let mon = sample.month.wrapping_sub(1) as usize;
                    result.push_str(months.get(mon).unwrap_or(&"???"));
                }
                Some('Y') => result.push_str(&format!("{}", sample.year)),
                Some('%') => result.push('%'),
                Some(other) => {
                    result.push('%');
                    result.push(other);
                }
                None => result.push('%'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(hour: u32, minute: u32, second: u32) -> TimeSample {
        TimeSample {
            hour,
            minute,
            second,
            weekday: 2,
            day: 7,
            month: 4,
            year: 2025,
        }
    }

    #[test]
    fn clock_format_pads_single_digits() {
        assert_eq!(format_sample(&sample(9, 5, 3), "%H:%M:%S"), "09:05:03");
    }

    #[test]
    fn clock_format_midnight() {
        assert_eq!(format_sample(&sample(0, 0, 0), "%H:%M:%S"), "00:00:00");
    }

    #[test]
    fn clock_format_last_hour() {
        assert_eq!(format_sample(&sample(23, 0, 0), "%H:%M:%S"), "23:00:00");
    }

    #[test]
    fn clock_format_two_digit_fields() {
        assert_eq!(format_sample(&sample(12, 34, 56), "%H:%M:%S"), "12:34:56");
    }

    #[test]
    fn every_numeric_field_is_two_chars() {
        for hour in [0, 1, 9, 10, 23] {
            for unit in [0, 1, 9, 10, 59] {
                let text = format_sample(&sample(hour, unit, unit), "%H %M %S");
                for part in text.split(' ') {
                    assert_eq!(part.len(), 2, "field {part:?} in {text:?}");
                }
            }
        }
    }

    #[test]
    fn formatting_is_deterministic() {
        let s = sample(8, 15, 42);
        assert_eq!(
            format_sample(&s, "%H:%M:%S"),
            format_sample(&s, "%H:%M:%S")
        );
    }

    #[test]
    fn date_tokens_render() {
        let s = sample(10, 0, 0);
        assert_eq!(format_sample(&s, "%A %d %B %Y"), "Tuesday 07 April 2025");
    }

    #[test]
    fn literal_percent() {
        assert_eq!(format_sample(&sample(1, 2, 3), "100%%"), "100%");
    }

    #[test]
    fn unknown_escape_passes_through() {
        assert_eq!(format_sample(&sample(1, 2, 3), "%H%x"), "01%x");
    }

    #[test]
    fn trailing_percent_is_kept() {
        assert_eq!(format_sample(&sample(1, 2, 3), "%S%"), "03%");
    }

    #[test]
    fn out_of_range_weekday_renders_placeholder() {
        let s = TimeSample {
            weekday: 9,
            ..sample(1, 2, 3)
        };
        assert_eq!(format_sample(&s, "%A"), "???");
    }
}
