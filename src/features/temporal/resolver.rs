//! Time expression parser and resolver.
//!
//! Parses strings like "at 17:30", "in 2 hours", "tomorrow", or
//! "every 30 minutes" into a structured `TimeExpr`, and resolves it against
//! a reference instant supplied by the caller.
//!
//! Precedence when several patterns appear in one text:
//! interval > clock time > single-unit relative > numeric relative > named day.
//! A named day co-occurring with a clock time combines into one expression
//! ("tomorrow at 17:30").

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Smallest accepted recurrence period.
pub const MIN_INTERVAL_MINUTES: i64 = 1;
/// Largest accepted recurrence period (one day).
pub const MAX_INTERVAL_MINUTES: i64 = 1440;
/// Time-of-day used when a day is named without a clock time.
pub const DEFAULT_HOUR: u32 = 9;

/// Unit of a relative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl RelativeUnit {
    /// Parse a unit word ("minute", "mins", "hr", ...).
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        match word.trim_end_matches('s') {
            "minute" | "min" => Some(Self::Minute),
            "hour" | "hr" => Some(Self::Hour),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    /// Convert an amount of this unit to a duration.
    ///
    /// Months and years use simple day arithmetic (30 and 365 days).
    #[must_use]
    pub const fn to_duration(self, amount: i64) -> Duration {
        match self {
            Self::Minute => Duration::minutes(amount),
            Self::Hour => Duration::hours(amount),
            Self::Day => Duration::days(amount),
            Self::Week => Duration::weeks(amount),
            Self::Month => Duration::days(amount * 30),
            Self::Year => Duration::days(amount * 365),
        }
    }
}

/// Unit of a recurring interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    Minute,
    Hour,
}

impl IntervalUnit {
    fn parse(word: &str) -> Option<Self> {
        match word.trim_end_matches('s') {
            "minute" | "min" => Some(Self::Minute),
            "hour" | "hr" => Some(Self::Hour),
            _ => None,
        }
    }

    const fn minutes(self, amount: i64) -> i64 {
        match self {
            Self::Minute => amount,
            Self::Hour => amount * 60,
        }
    }
}

/// A day named without a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedDay {
    Tomorrow,
    DayAfterTomorrow,
    NextWeek,
    NextMonth,
    NextYear,
    ThisWeek,
    ThisMonth,
}

impl NamedDay {
    fn parse(phrase: &str) -> Option<Self> {
        match phrase {
            "tomorrow" => Some(Self::Tomorrow),
            "day after tomorrow" => Some(Self::DayAfterTomorrow),
            "next week" => Some(Self::NextWeek),
            "next month" => Some(Self::NextMonth),
            "next year" => Some(Self::NextYear),
            "this week" => Some(Self::ThisWeek),
            "this month" => Some(Self::ThisMonth),
            _ => None,
        }
    }

    /// The date this name refers to, relative to `today`.
    fn to_date(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Tomorrow => today + Duration::days(1),
            Self::DayAfterTomorrow => today + Duration::days(2),
            Self::NextWeek => today + Duration::days(7),
            Self::NextMonth => today.checked_add_months(Months::new(1)).unwrap_or(today),
            Self::NextYear => today.checked_add_months(Months::new(12)).unwrap_or(today),
            // Sunday of the current week.
            Self::ThisWeek => {
                today + Duration::days(6 - i64::from(today.weekday().num_days_from_monday()))
            }
            // Last day of the current month.
            Self::ThisMonth => {
                let next = today.checked_add_months(Months::new(1)).unwrap_or(today);
                NaiveDate::from_ymd_opt(next.year(), next.month(), 1)
                    .map_or(today, |first| first - Duration::days(1))
            }
        }
    }
}

/// A parsed time expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeExpr {
    /// An absolute clock time, resolved against today or tomorrow.
    ClockTime { hour: u32, minute: u32 },
    /// An offset from the reference instant.
    Relative { amount: i64, unit: RelativeUnit },
    /// A named day, optionally with an explicit clock time.
    Named {
        day: NamedDay,
        time: Option<(u32, u32)>,
    },
    /// A recurrence, not a timestamp.
    Interval { amount: i64, unit: IntervalUnit },
}

impl TimeExpr {
    /// Whether this expression describes a recurrence rather than an instant.
    #[must_use]
    pub const fn is_recurrence(&self) -> bool {
        matches!(self, Self::Interval { .. })
    }

    /// The recurrence period in minutes, for interval expressions.
    #[must_use]
    pub const fn interval_minutes(&self) -> Option<i64> {
        match self {
            Self::Interval { amount, unit } => Some(unit.minutes(*amount)),
            _ => None,
        }
    }

    /// Resolve this expression to a concrete firing instant.
    ///
    /// Returns `None` for interval expressions. The result is always
    /// strictly after `now`: a clock time that already elapsed today moves
    /// to tomorrow, and a relative offset that truncates onto `now` is
    /// advanced by exactly one minute.
    #[must_use]
    pub fn resolve_instant(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::ClockTime { hour, minute } => {
                let time = NaiveTime::from_hms_opt(*hour, *minute, 0)?;
                let candidate = now.date_naive().and_time(time).and_utc();
                if candidate <= now {
                    Some(candidate + Duration::days(1))
                } else {
                    Some(candidate)
                }
            }
            Self::Relative { amount, unit } => {
                let target = now + unit.to_duration(*amount);
                let truncated = target.with_nanosecond(0).unwrap_or(target);
                if truncated <= now {
                    Some(truncated + Duration::minutes(1))
                } else {
                    Some(truncated)
                }
            }
            Self::Named { day, time } => {
                let (hour, minute) = time.unwrap_or((DEFAULT_HOUR, 0));
                let tod = NaiveTime::from_hms_opt(hour, minute, 0)?;
                let candidate = day.to_date(now.date_naive()).and_time(tod).and_utc();
                if candidate <= now {
                    Some(candidate + Duration::minutes(1))
                } else {
                    Some(candidate)
                }
            }
            Self::Interval { .. } => None,
        }
    }
}

impl std::fmt::Display for TimeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClockTime { hour, minute } => write!(f, "at {hour:02}:{minute:02}"),
            Self::Relative { amount, unit } => {
                write!(f, "in {amount} {unit}{}", plural(*amount))
            }
            Self::Named { day, time } => {
                write!(f, "{day}")?;
                if let Some((hour, minute)) = time {
                    write!(f, " at {hour:02}:{minute:02}")?;
                }
                Ok(())
            }
            Self::Interval { amount, unit } => {
                write!(f, "every {amount} {unit}{}", plural(*amount))
            }
        }
    }
}

impl std::fmt::Display for RelativeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        })
    }
}

impl std::fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
        })
    }
}

impl std::fmt::Display for NamedDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Tomorrow => "tomorrow",
            Self::DayAfterTomorrow => "day after tomorrow",
            Self::NextWeek => "next week",
            Self::NextMonth => "next month",
            Self::NextYear => "next year",
            Self::ThisWeek => "this week",
            Self::ThisMonth => "this month",
        })
    }
}

const fn plural(amount: i64) -> &'static str {
    if amount == 1 {
        ""
    } else {
        "s"
    }
}

/// A matched time expression with the byte spans it occupied in the input.
///
/// The spans anchor residual-text extraction: stripping them (and nothing
/// else) from the input yields the semantic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMatch {
    /// The parsed expression.
    pub expr: TimeExpr,
    /// Byte ranges of the matched text, in input order.
    pub spans: Vec<(usize, usize)>,
}

// Compiled patterns. Matching happens on a lowercased copy of the input;
// spans are valid for the original when lowercasing preserved byte offsets.
static INTERVAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bevery\s+(?:(\d+|a\s+couple(?:\s+of)?|a\s+few|one|two|three|four|five|six|seven|eight|nine|ten)\s+)?(minutes?|mins?|hours?|hrs?)\b",
    )
    .unwrap_or_else(|e| panic!("Invalid interval regex: {e}"))
});

static CLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:(?:at|by|for)\s+)?([01]?\d|2[0-3]):([0-5]\d)\b")
        .unwrap_or_else(|e| panic!("Invalid clock regex: {e}"))
});

static RELATIVE_WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bin\s+(a\s+couple(?:\s+of)?|a\s+few|an|a|one|two|three|four|five|six|seven|eight|nine|ten)\s+(minutes?|mins?|hours?|hrs?|days?|weeks?|months?|years?)\b",
    )
    .unwrap_or_else(|e| panic!("Invalid relative word regex: {e}"))
});

static RELATIVE_NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bin\s+(\d+)\s+(minutes?|mins?|hours?|hrs?|days?|weeks?|months?|years?)\b")
        .unwrap_or_else(|e| panic!("Invalid relative numeric regex: {e}"))
});

static NAMED_DAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(day after tomorrow|tomorrow|next week|next month|next year|this week|this month)\b")
        .unwrap_or_else(|e| panic!("Invalid named day regex: {e}"))
});

/// Map a spelled-out amount to a number. Unparseable amounts default to 1.
fn parse_amount(raw: &str) -> i64 {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if let Ok(n) = collapsed.parse::<i64>() {
        return n;
    }
    match collapsed.as_str() {
        "a" | "an" | "one" => 1,
        "two" | "a couple" | "a couple of" => 2,
        "three" | "a few" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        _ => 1,
    }
}

/// Extract the highest-precedence time expression from `text`.
///
/// Returns `None` when no supported pattern matches; callers treat that the
/// same as "no time found".
#[must_use]
pub fn resolve(text: &str, _now: DateTime<Utc>) -> Option<TimeMatch> {
    let lower = text.to_lowercase();

    // Interval phrases win outright.
    if let Some(caps) = INTERVAL_PATTERN.captures(&lower) {
        let amount = caps.get(1).map_or(1, |m| parse_amount(m.as_str()));
        let unit = IntervalUnit::parse(caps.get(2)?.as_str())?;
        let full = caps.get(0)?;
        return Some(TimeMatch {
            expr: TimeExpr::Interval { amount, unit },
            spans: vec![(full.start(), full.end())],
        });
    }

    // A clock time combines with a named day when both are present;
    // alone, it outranks everything below.
    if let Some(caps) = CLOCK_PATTERN.captures(&lower) {
        let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
        let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
        let clock_span = {
            let m = caps.get(0)?;
            (m.start(), m.end())
        };

        if let Some(day_caps) = NAMED_DAY_PATTERN.captures(&lower) {
            let day = NamedDay::parse(day_caps.get(1)?.as_str())?;
            let day_match = day_caps.get(0)?;
            let mut spans = vec![(day_match.start(), day_match.end()), clock_span];
            spans.sort_unstable();
            return Some(TimeMatch {
                expr: TimeExpr::Named {
                    day,
                    time: Some((hour, minute)),
                },
                spans,
            });
        }

        return Some(TimeMatch {
            expr: TimeExpr::ClockTime { hour, minute },
            spans: vec![clock_span],
        });
    }

    // Single-unit relative with a spelled-out amount ("in an hour").
    if let Some(caps) = RELATIVE_WORD_PATTERN.captures(&lower) {
        let amount = parse_amount(caps.get(1)?.as_str());
        let unit = RelativeUnit::parse(caps.get(2)?.as_str())?;
        let full = caps.get(0)?;
        return Some(TimeMatch {
            expr: TimeExpr::Relative { amount, unit },
            spans: vec![(full.start(), full.end())],
        });
    }

    // Numeric relative ("in 10 minutes").
    if let Some(caps) = RELATIVE_NUMERIC_PATTERN.captures(&lower) {
        let amount: i64 = caps.get(1)?.as_str().parse().ok()?;
        let unit = RelativeUnit::parse(caps.get(2)?.as_str())?;
        let full = caps.get(0)?;
        return Some(TimeMatch {
            expr: TimeExpr::Relative { amount, unit },
            spans: vec![(full.start(), full.end())],
        });
    }

    // Named day on its own.
    if let Some(caps) = NAMED_DAY_PATTERN.captures(&lower) {
        let day = NamedDay::parse(caps.get(1)?.as_str())?;
        let full = caps.get(0)?;
        return Some(TimeMatch {
            expr: TimeExpr::Named { day, time: None },
            spans: vec![(full.start(), full.end())],
        });
    }

    None
}

/// Remove the matched spans from `text`, collapsing leftover whitespace.
///
/// Stripping is anchored to the spans, so incidental words elsewhere in the
/// text survive untouched.
#[must_use]
pub fn strip_spans(text: &str, spans: &[(usize, usize)]) -> String {
    // Spans were computed on a lowercased copy; fall back to it if
    // lowercasing shifted byte offsets (non-ASCII edge case).
    let lower = text.to_lowercase();
    let source = if lower.len() == text.len() { text } else { &lower };

    let mut kept = String::with_capacity(source.len());
    let mut cursor = 0;
    for &(start, end) in spans {
        if start >= cursor && end <= source.len() {
            kept.push_str(&source[cursor..start]);
            cursor = end;
        }
    }
    kept.push_str(&source[cursor..]);

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, h, m, 0).single().unwrap()
    }

    // =================
    // Pattern Matching
    // =================

    #[test]
    fn test_interval_every_minute() {
        let m = resolve("drink water every minute", at(10, 0)).unwrap();
        assert_eq!(
            m.expr,
            TimeExpr::Interval {
                amount: 1,
                unit: IntervalUnit::Minute
            }
        );
    }

    #[test]
    fn test_interval_every_n_minutes() {
        let m = resolve("remind me to drink water every 30 minutes", at(10, 0)).unwrap();
        assert_eq!(m.expr.interval_minutes(), Some(30));
    }

    #[test]
    fn test_interval_every_hour() {
        let m = resolve("stretch every hour", at(10, 0)).unwrap();
        assert_eq!(m.expr.interval_minutes(), Some(60));
    }

    #[test]
    fn test_interval_every_two_hours_word() {
        let m = resolve("check the oven every two hours", at(10, 0)).unwrap();
        assert_eq!(m.expr.interval_minutes(), Some(120));
    }

    #[test]
    fn test_interval_beats_clock_time() {
        let m = resolve("every 30 minutes until 18:00", at(10, 0)).unwrap();
        assert!(m.expr.is_recurrence());
    }

    #[test]
    fn test_clock_time_with_preposition() {
        let m = resolve("buy milk at 17:30", at(10, 0)).unwrap();
        assert_eq!(
            m.expr,
            TimeExpr::ClockTime {
                hour: 17,
                minute: 30
            }
        );
    }

    #[test]
    fn test_clock_time_without_preposition() {
        let m = resolve("standup 9:15", at(7, 0)).unwrap();
        assert_eq!(m.expr, TimeExpr::ClockTime { hour: 9, minute: 15 });
    }

    #[test]
    fn test_clock_beats_relative() {
        let m = resolve("at 17:30 in 3 days", at(10, 0)).unwrap();
        assert!(matches!(m.expr, TimeExpr::ClockTime { .. }));
    }

    #[test]
    fn test_single_unit_relative_an_hour() {
        let m = resolve("call mom in an hour", at(10, 0)).unwrap();
        assert_eq!(
            m.expr,
            TimeExpr::Relative {
                amount: 1,
                unit: RelativeUnit::Hour
            }
        );
    }

    #[test]
    fn test_relative_word_amounts() {
        let m = resolve("tea in five minutes", at(10, 0)).unwrap();
        assert_eq!(
            m.expr,
            TimeExpr::Relative {
                amount: 5,
                unit: RelativeUnit::Minute
            }
        );

        let m = resolve("leave in a couple of hours", at(10, 0)).unwrap();
        assert_eq!(
            m.expr,
            TimeExpr::Relative {
                amount: 2,
                unit: RelativeUnit::Hour
            }
        );

        let m = resolve("ping me in a few minutes", at(10, 0)).unwrap();
        assert_eq!(
            m.expr,
            TimeExpr::Relative {
                amount: 3,
                unit: RelativeUnit::Minute
            }
        );
    }

    #[test]
    fn test_numeric_relative() {
        let m = resolve("meeting in 2 days", at(10, 0)).unwrap();
        assert_eq!(
            m.expr,
            TimeExpr::Relative {
                amount: 2,
                unit: RelativeUnit::Day
            }
        );
    }

    #[test]
    fn test_named_day_alone() {
        let m = resolve("call mom tomorrow", at(10, 0)).unwrap();
        assert_eq!(
            m.expr,
            TimeExpr::Named {
                day: NamedDay::Tomorrow,
                time: None
            }
        );
    }

    #[test]
    fn test_day_after_tomorrow_wins_over_tomorrow() {
        let m = resolve("dentist day after tomorrow", at(10, 0)).unwrap();
        assert_eq!(
            m.expr,
            TimeExpr::Named {
                day: NamedDay::DayAfterTomorrow,
                time: None
            }
        );
    }

    #[test]
    fn test_named_day_combines_with_clock() {
        let m = resolve("call mom tomorrow at 08:00", at(10, 0)).unwrap();
        assert_eq!(
            m.expr,
            TimeExpr::Named {
                day: NamedDay::Tomorrow,
                time: Some((8, 0))
            }
        );
        assert_eq!(m.spans.len(), 2);
    }

    #[test]
    fn test_no_time_found() {
        assert!(resolve("call mom", at(10, 0)).is_none());
        assert!(resolve("", at(10, 0)).is_none());
    }

    // ===========
    // Resolution
    // ===========

    #[test]
    fn test_clock_time_today_when_still_ahead() {
        let now = at(10, 0);
        let expr = TimeExpr::ClockTime {
            hour: 17,
            minute: 30,
        };
        let fire = expr.resolve_instant(now).unwrap();
        assert_eq!(fire, at(17, 30));
    }

    #[test]
    fn test_clock_time_tomorrow_when_elapsed() {
        let now = at(18, 0);
        let expr = TimeExpr::ClockTime {
            hour: 17,
            minute: 30,
        };
        let fire = expr.resolve_instant(now).unwrap();
        assert_eq!(fire, at(17, 30) + Duration::days(1));
    }

    #[test]
    fn test_clock_time_exactly_now_goes_to_tomorrow() {
        let now = at(17, 30);
        let expr = TimeExpr::ClockTime {
            hour: 17,
            minute: 30,
        };
        let fire = expr.resolve_instant(now).unwrap();
        assert_eq!(fire, at(17, 30) + Duration::days(1));
    }

    #[test]
    fn test_relative_strictly_after_now() {
        let now = at(10, 0);
        for amount in [0, 1, 10, 90] {
            let expr = TimeExpr::Relative {
                amount,
                unit: RelativeUnit::Minute,
            };
            let fire = expr.resolve_instant(now).unwrap();
            assert!(fire > now, "amount {amount} resolved to {fire} <= {now}");
        }
    }

    #[test]
    fn test_relative_truncates_subseconds() {
        let now = at(10, 0) + Duration::milliseconds(750);
        let expr = TimeExpr::Relative {
            amount: 10,
            unit: RelativeUnit::Minute,
        };
        let fire = expr.resolve_instant(now).unwrap();
        assert_eq!(fire.nanosecond(), 0);
        assert!(fire > now);
    }

    #[test]
    fn test_relative_units() {
        let now = at(10, 0);
        let cases = [
            (RelativeUnit::Hour, Duration::hours(2)),
            (RelativeUnit::Day, Duration::days(2)),
            (RelativeUnit::Week, Duration::weeks(2)),
            (RelativeUnit::Month, Duration::days(60)),
            (RelativeUnit::Year, Duration::days(730)),
        ];
        for (unit, expected) in cases {
            let expr = TimeExpr::Relative { amount: 2, unit };
            assert_eq!(expr.resolve_instant(now).unwrap(), now + expected);
        }
    }

    #[test]
    fn test_named_day_default_hour() {
        let now = at(10, 0);
        let expr = TimeExpr::Named {
            day: NamedDay::Tomorrow,
            time: None,
        };
        let fire = expr.resolve_instant(now).unwrap();
        assert_eq!(fire, at(DEFAULT_HOUR, 0) + Duration::days(1));
    }

    #[test]
    fn test_named_day_with_explicit_time() {
        let now = at(10, 0);
        let expr = TimeExpr::Named {
            day: NamedDay::Tomorrow,
            time: Some((17, 30)),
        };
        let fire = expr.resolve_instant(now).unwrap();
        assert_eq!(fire, at(17, 30) + Duration::days(1));
    }

    #[test]
    fn test_next_week_simple_arithmetic() {
        let now = at(10, 0);
        let expr = TimeExpr::Named {
            day: NamedDay::NextWeek,
            time: None,
        };
        let fire = expr.resolve_instant(now).unwrap();
        assert_eq!(fire.date_naive(), now.date_naive() + Duration::days(7));
    }

    #[test]
    fn test_interval_has_no_instant() {
        let expr = TimeExpr::Interval {
            amount: 30,
            unit: IntervalUnit::Minute,
        };
        assert!(expr.resolve_instant(at(10, 0)).is_none());
        assert!(expr.is_recurrence());
    }

    // ====================
    // Residual Extraction
    // ====================

    #[test]
    fn test_strip_single_span() {
        let m = resolve("buy milk at 17:30", at(10, 0)).unwrap();
        assert_eq!(strip_spans("buy milk at 17:30", &m.spans), "buy milk");
    }

    #[test]
    fn test_strip_preserves_incidental_words() {
        let m = resolve("buy milk in 10 minutes for the party", at(10, 0)).unwrap();
        assert_eq!(
            strip_spans("buy milk in 10 minutes for the party", &m.spans),
            "buy milk for the party"
        );
    }

    #[test]
    fn test_strip_combined_spans() {
        let m = resolve("call mom tomorrow at 08:00", at(10, 0)).unwrap();
        assert_eq!(strip_spans("call mom tomorrow at 08:00", &m.spans), "call mom");
    }

    #[test]
    fn test_amount_defaults_to_one() {
        assert_eq!(parse_amount("gibberish"), 1);
        assert_eq!(parse_amount("ten"), 10);
        assert_eq!(parse_amount("7"), 7);
    }

    #[test]
    fn test_display() {
        let clock = TimeExpr::ClockTime {
            hour: 17,
            minute: 30,
        };
        assert_eq!(clock.to_string(), "at 17:30");

        let relative = TimeExpr::Relative {
            amount: 1,
            unit: RelativeUnit::Hour,
        };
        assert_eq!(relative.to_string(), "in 1 hour");

        let interval = TimeExpr::Interval {
            amount: 30,
            unit: IntervalUnit::Minute,
        };
        assert_eq!(interval.to_string(), "every 30 minutes");

        let named = TimeExpr::Named {
            day: NamedDay::Tomorrow,
            time: Some((8, 0)),
        };
        assert_eq!(named.to_string(), "tomorrow at 08:00");
    }
}
