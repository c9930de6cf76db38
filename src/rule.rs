use crate::{
    field::{Field, FieldKind, FieldValueType},
    timerange::TimeRange,
    CronRangeError, Result,
};
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::{fmt::Display, io::Read, str::FromStr};

/// Single time-range rule: a conjunction of a time range with day of week,
/// day of month and month constraints.
///
/// Immutable once parsed. Rendering via [`Display`] produces the canonical
/// form with sorted, run-length-compressed field values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    time: TimeRange,
    dow: Field,
    dom: Field,
    month: Field,
}

impl Rule {
    /// Parses a single rule segment of the fixed shape `time dow dom month`.
    pub(crate) fn parse(segment: &str) -> Result<Self> {
        let tokens: Vec<&str> = segment.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(CronRangeError::WrongFieldCount(segment.to_owned()));
        }

        Ok(Self {
            time: TimeRange::parse(tokens[0])?,
            dow: parse_labeled_field(FieldKind::Dows, tokens[1])?,
            dom: parse_labeled_field(FieldKind::Doms, tokens[2])?,
            month: parse_labeled_field(FieldKind::Months, tokens[3])?,
        })
    }

    /// Returns `true` if the provided instant falls inside this rule.
    ///
    /// All four constraints must hold. Weekday numbering follows the
    /// expression format: 0 is Sunday, 6 is Saturday.
    pub fn matches<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        self.month.matches(instant.month() as FieldValueType)
            && self.dom.matches(instant.day() as FieldValueType)
            && self
                .dow
                .matches(instant.weekday().num_days_from_sunday() as FieldValueType)
            && self.time.matches(instant.num_seconds_from_midnight())
    }

    /// `true` when the rule's time range wraps across midnight.
    pub fn is_overnight(&self) -> bool {
        self.time.is_overnight()
    }
}

/// Wraps a field parser failure with the field's diagnostic label.
fn parse_labeled_field(kind: FieldKind, token: &str) -> Result<Field> {
    Field::parse(kind, token).map_err(|e| CronRangeError::InvalidField {
        field: kind.name(),
        source: Box::new(e),
    })
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.time, self.dow, self.dom, self.month)
    }
}

/// Ordered set of [`Rule`]s combined with logical OR.
///
/// For expression format clarification and usage examples, please refer to
/// the [crate documentation](crate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Parses and validates an expression of one or more `;`-separated rules
    /// and constructs a [`RuleSet`] instance.
    ///
    /// Alternative way to construct [`RuleSet`] is to use one of `try_from`
    /// or `from_str` methods.
    ///
    /// Fails fast: the first segment that doesn't parse aborts the whole
    /// operation, and the returned [`CronRangeError`] carries the offending
    /// segment's text together with the underlying cause.
    pub fn new(expression: impl Into<String>) -> Result<Self> {
        let expression = expression.into();
        let mut rules = vec![];

        for segment in expression.split(';') {
            let rule = Rule::parse(segment.trim()).map_err(|e| CronRangeError::InvalidRule {
                rule: segment.to_owned(),
                source: Box::new(e),
            })?;
            rules.push(rule);
        }

        Ok(Self { rules })
    }

    /// Loads newline-delimited expressions from a reader and aggregates
    /// their rules, in stream order, into a single [`RuleSet`].
    ///
    /// Lines blank after trimming are skipped. An empty stream yields an
    /// empty set. The load is all-or-nothing: the first invalid line aborts
    /// it with the failing segment's context.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut buf = String::new();
        reader
            .read_to_string(&mut buf)
            .map_err(|e| CronRangeError::ReadFailure(e.to_string()))?;

        let mut rules = vec![];
        for line in buf.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            rules.extend(Self::new(line)?.rules);
        }

        Ok(Self { rules })
    }

    /// Returns `true` if the provided instant falls inside any of the rules.
    ///
    /// Short-circuits on the first match. An empty set never matches.
    pub fn matches<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        self.rules.iter().any(|rule| rule.matches(instant))
    }

    /// Rules in their original textual order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .rules
            .iter()
            .map(|rule| rule.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{rendered}")
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl From<RuleSet> for String {
    fn from(value: RuleSet) -> Self {
        value.to_string()
    }
}

impl From<&RuleSet> for String {
    fn from(value: &RuleSet) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for RuleSet {
    type Error = CronRangeError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for RuleSet {
    type Error = CronRangeError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RuleSet {
    type Error = CronRangeError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for RuleSet {
    type Err = CronRangeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
