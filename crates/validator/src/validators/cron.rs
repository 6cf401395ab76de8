//! Cron expression rule
//!
//! Accepts five fields (minute, hour, day of month, month, day of week), an
//! optional sixth year field, or one of the `@` macros. Each field is a
//! comma-separated list of `*`, values, ranges and steps. Months and weekdays
//! also accept three-letter names. Day of month takes `L`, `LW` and `nW`;
//! day of week takes `nL` and `n#k`.

use runval_expression::Value;

use super::expect_string;
use crate::error::{RuleError, RuleResult};

const MACROS: &[&str] = &[
    "@yearly",
    "@annually",
    "@monthly",
    "@weekly",
    "@daily",
    "@hourly",
    "@always",
    "@everysecond",
    "@5minutes",
    "@10minutes",
    "@15minutes",
    "@30minutes",
];

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

impl Field {
    const ORDER: [Self; 6] = [
        Self::Minute,
        Self::Hour,
        Self::DayOfMonth,
        Self::Month,
        Self::DayOfWeek,
        Self::Year,
    ];

    const fn bounds(self) -> (u32, u32) {
        match self {
            Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (0, 7),
            Self::Year => (1, 9999),
        }
    }

    fn names(self) -> &'static [&'static str] {
        match self {
            Self::Month => &MONTHS,
            Self::DayOfWeek => &WEEKDAYS,
            _ => &[],
        }
    }

    /// Parses a single value: a number in range or a name.
    fn value(self, text: &str) -> Option<u32> {
        let (min, max) = self.bounds();
        if let Ok(n) = text.parse::<u32>() {
            return (min..=max).contains(&n).then_some(n);
        }
        let offset = if self == Self::Month { 1 } else { 0 };
        self.names()
            .iter()
            .position(|name| name.eq_ignore_ascii_case(text))
            .map(|i| i as u32 + offset)
    }

    fn is_valid(self, text: &str) -> bool {
        !text.is_empty() && text.split(',').all(|item| self.is_valid_item(item))
    }

    fn is_valid_item(self, item: &str) -> bool {
        if let Some(special) = self.special(item) {
            return special;
        }

        let (range, step) = match item.split_once('/') {
            Some((range, step)) => (range, Some(step)),
            None => (item, None),
        };
        if let Some(step) = step {
            let (_, max) = self.bounds();
            if !matches!(step.parse::<u32>(), Ok(n) if (1..=max).contains(&n)) {
                return false;
            }
        }

        if range == "*" || (range == "?" && self.allows_question_mark()) {
            return true;
        }
        match range.split_once('-') {
            Some((start, end)) => matches!(
                (self.value(start), self.value(end)),
                (Some(a), Some(b)) if a <= b
            ),
            None => self.value(range).is_some(),
        }
    }

    const fn allows_question_mark(self) -> bool {
        matches!(self, Self::DayOfMonth | Self::DayOfWeek)
    }

    /// Day-of-month and day-of-week modifiers. `None` when `item` has none.
    fn special(self, item: &str) -> Option<bool> {
        match self {
            Self::DayOfMonth => {
                if item.eq_ignore_ascii_case("L") || item.eq_ignore_ascii_case("LW") {
                    return Some(true);
                }
                let day = item.strip_suffix('W').or_else(|| item.strip_suffix('w'))?;
                Some(self.value(day).is_some())
            }
            Self::DayOfWeek => {
                if let Some((day, nth)) = item.split_once('#') {
                    let nth_ok = matches!(nth.parse::<u32>(), Ok(1..=5));
                    return Some(nth_ok && self.value(day).is_some());
                }
                let day = item.strip_suffix('L').or_else(|| item.strip_suffix('l'))?;
                Some(self.value(day).is_some())
            }
            _ => None,
        }
    }
}

/// Returns true when `expr` is a valid cron expression.
pub fn is_valid_cron(expr: &str) -> bool {
    let expr = expr.trim();
    if expr.starts_with('@') {
        return MACROS.iter().any(|m| m.eq_ignore_ascii_case(expr));
    }

    let fields: Vec<&str> = expr.split_whitespace().collect();
    if !(5..=6).contains(&fields.len()) {
        return false;
    }
    fields
        .iter()
        .zip(Field::ORDER)
        .all(|(text, field)| field.is_valid(text))
}

/// Cron expression, see the module docs for the accepted syntax.
pub fn cron(value: &Value) -> RuleResult {
    let input = expect_string(value)?;
    if is_valid_cron(input) {
        Ok(())
    } else {
        Err(RuleError::invalid("cron", input))
    }
}
