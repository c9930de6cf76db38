use crate::{CronRangeError, Result};
use std::fmt::Display;

pub(crate) type FieldValueType = u8;

/// Bounded field domains with their inclusive bounds and diagnostic labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum FieldKind {
    Dows,
    Doms,
    Months,
}

impl FieldKind {
    pub(crate) fn min_max(&self) -> (FieldValueType, FieldValueType) {
        match self {
            Self::Dows => (0, 6),
            Self::Doms => (1, 31),
            Self::Months => (1, 12),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Dows => "dow",
            Self::Doms => "dom",
            Self::Months => "month",
        }
    }
}

/// Set of allowed integer values within a field's bounds, or a wildcard
/// matching every value.
///
/// Explicit sets are stored as a bitmask: every field domain fits into
/// `0..=31`, so membership and union are single bit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Field {
    All,
    Set(u32),
}

impl Field {
    /// Parses a field token: `*`, or a comma-separated list of values and
    /// `a-b` ranges, each validated against the kind's bounds.
    pub(crate) fn parse(kind: FieldKind, input: &str) -> Result<Self> {
        if input == "*" {
            return Ok(Self::All);
        }

        let (min, max) = kind.min_max();
        let mut mask = 0u32;

        for item in input.split(',') {
            if item.contains('-') {
                let parts: Vec<&str> = item.split('-').collect();
                if parts.len() != 2 {
                    return Err(CronRangeError::InvalidRangeFormat(item.to_owned()));
                }

                let start = parse_value(parts[0], min, max)?;
                let end = parse_value(parts[1], min, max)?;
                if start > end {
                    return Err(CronRangeError::InvalidRangeOrder(item.to_owned()));
                }

                for value in start..=end {
                    mask |= 1 << value;
                }
            } else {
                mask |= 1 << parse_value(item, min, max)?;
            }
        }

        Ok(Self::Set(mask))
    }

    pub(crate) fn matches(&self, value: FieldValueType) -> bool {
        match self {
            Self::All => true,
            Self::Set(mask) => value < 32 && mask & (1 << value) != 0,
        }
    }
}

/// Converts a token into a value within `[min, max]` bounds.
fn parse_value(input: &str, min: FieldValueType, max: FieldValueType) -> Result<FieldValueType> {
    let value = input
        .parse::<FieldValueType>()
        .map_err(|_| CronRangeError::NonIntegerToken(input.to_owned()))?;

    if value < min || value > max {
        return Err(CronRangeError::ValueOutOfRange(input.to_owned()));
    }

    Ok(value)
}

impl Display for Field {
    /// Renders the canonical form: values sorted ascending with maximal
    /// contiguous runs compressed into `a-b` ranges.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = match self {
            Self::All => return write!(f, "*"),
            Self::Set(mask) => *mask,
        };

        let values: Vec<FieldValueType> = (0..32).filter(|v| mask & (1 << v) != 0).collect();
        if values.is_empty() {
            return write!(f, "*");
        }

        let mut runs: Vec<String> = vec![];
        let mut start = values[0];
        let mut prev = values[0];

        for &value in &values[1..] {
            if value != prev + 1 {
                runs.push(render_run(start, prev));
                start = value;
            }
            prev = value;
        }
        runs.push(render_run(start, prev));

        write!(f, "{}", runs.join(","))
    }
}

fn render_run(start: FieldValueType, end: FieldValueType) -> String {
    if start == end {
        format!("{start}")
    } else {
        format!("{start}-{end}")
    }
}
