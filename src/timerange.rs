use crate::{CronRangeError, Result};
use std::fmt::Display;

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 3_600;

/// Time period within a day, measured in seconds since midnight.
///
/// Both boundaries of a span are inclusive. A span whose end is less than
/// its start wraps across midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum TimeRange {
    /// Matches any time of day.
    AllDay,
    /// Closed `[start, end]` interval.
    Span {
        start: u32,
        end: u32,
        /// Whether the original text carried a seconds component,
        /// used only for re-rendering width.
        has_seconds: bool,
    },
}

impl TimeRange {
    /// Parses a time range token: `*` for the whole day, or two
    /// `HH:MM`/`HH:MM:SS` times separated by a single dash.
    pub(crate) fn parse(input: &str) -> Result<Self> {
        if input == "*" {
            return Ok(Self::AllDay);
        }

        let parts: Vec<&str> = input.split('-').collect();
        if parts.len() != 2 {
            return Err(CronRangeError::InvalidTimeFormat(input.to_owned()));
        }

        let (start, start_has_seconds) = parse_time_of_day(parts[0])?;
        let (end, end_has_seconds) = parse_time_of_day(parts[1])?;

        Ok(Self::Span {
            start,
            end,
            has_seconds: start_has_seconds || end_has_seconds,
        })
    }

    /// `true` when the span wraps across midnight, a pure function of the
    /// boundaries.
    pub(crate) fn is_overnight(&self) -> bool {
        match self {
            Self::AllDay => false,
            Self::Span { start, end, .. } => end < start,
        }
    }

    pub(crate) fn matches(&self, seconds_since_midnight: u32) -> bool {
        match *self {
            Self::AllDay => true,
            Self::Span { start, end, .. } => {
                if end < start {
                    // Overnight span, e.g. 23:00-02:00: matches after the
                    // start or before the end.
                    seconds_since_midnight >= start || seconds_since_midnight <= end
                } else {
                    seconds_since_midnight >= start && seconds_since_midnight <= end
                }
            }
        }
    }
}

/// Parses a `HH:MM` or `HH:MM:SS` time of day into seconds since midnight,
/// reporting whether the seconds component was present.
fn parse_time_of_day(input: &str) -> Result<(u32, bool)> {
    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(CronRangeError::InvalidTimeFormat(input.to_owned()));
    }

    let hours = parse_component(parts[0])?;
    let minutes = parse_component(parts[1])?;
    let has_seconds = parts.len() == 3;
    let seconds = if has_seconds { parse_component(parts[2])? } else { 0 };

    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err(CronRangeError::InvalidTimeValue(input.to_owned()));
    }

    Ok((
        hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds,
        has_seconds,
    ))
}

fn parse_component(input: &str) -> Result<u32> {
    input
        .parse()
        .map_err(|_| CronRangeError::NonIntegerToken(input.to_owned()))
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::AllDay => write!(f, "*"),
            Self::Span {
                start,
                end,
                has_seconds,
            } => {
                let (start_h, start_m, start_s) = split_time(start);
                let (end_h, end_m, end_s) = split_time(end);

                if has_seconds {
                    write!(
                        f,
                        "{start_h:02}:{start_m:02}:{start_s:02}-{end_h:02}:{end_m:02}:{end_s:02}"
                    )
                } else {
                    write!(f, "{start_h:02}:{start_m:02}-{end_h:02}:{end_m:02}")
                }
            }
        }
    }
}

fn split_time(seconds_since_midnight: u32) -> (u32, u32, u32) {
    (
        seconds_since_midnight / SECONDS_PER_HOUR,
        seconds_since_midnight % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
        seconds_since_midnight % SECONDS_PER_MINUTE,
    )
}
