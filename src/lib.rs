//! Crontab-like time ranges parser and matcher.
#![deny(unsafe_code, warnings, missing_docs)]

//! Unlike a traditional crontab that defines moments in time, a cronrange
//! expression defines periods when something should be active. This is a tiny
//! crate, intended to:
//! - parse such expressions into an immutable set of rules;
//! - answer whether a given instant falls inside any of them.
//!
//! _This is not a scheduler or runner._ The crate evaluates a single
//! point-in-time predicate; it never sets timers or triggers anything.
//!
//! ## Expression format
//!
//! An expression is one or more rules separated by `;`. Each rule has a
//! 4-fields format: time range, day of week, day of month and month:
//!
//! | Field        | Allowed values | Allowed patterns |
//! |--------------|----------------|------------------|
//! | Time range   | `HH:MM-HH:MM` or `HH:MM:SS-HH:MM:SS` | `*` |
//! | Day of week  | 0-6 (0 is Sunday) | `*` `,` `-`   |
//! | Day of month | 1-31           | `*` `,` `-`      |
//! | Month        | 1-12           | `*` `,` `-`      |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. the whole day for the time range field;
//! - `,` - list of values or ranges, i.e. `1,7,12` or `1-3,5`;
//! - `-` - range of values, i.e. `1-5`.
//!
//! A time range whose end is before its start spans across midnight:
//! `23:00-02:00` covers late evening and early morning. Both boundaries of a
//! time range are inclusive.
//!
//! Examples:
//!
//! | Expression                  | Meaning                                  |
//! |-----------------------------|------------------------------------------|
//! | `17:20-21:35 1-5 * *`       | weekdays from 5:20 PM to 9:35 PM         |
//! | `* 0,6 * *`                 | all day on weekends                      |
//! | `09:00-17:00 1-5 * 4-9`     | weekdays 9 AM to 5 PM, April-September   |
//! | `12:00-13:00 * 1,15 *`      | noon hour on the 1st and 15th            |
//! | `23:00-02:00 * * *`         | nightly, spanning midnight               |
//!
//! ## How to use
//!
//! The single public entry point is the [`RuleSet`] structure, with three
//! basic methods:
//! - [new()](RuleSet::new): parses and validates an expression;
//! - [from_reader()](RuleSet::from_reader): loads newline-delimited
//!   expressions from a stream;
//! - [matches()](RuleSet::matches): checks an instant against the rules.
//!
//! ### Example
//! ```rust
//! use chrono::DateTime;
//! use cronrange::{Result, RuleSet};
//!
//! fn example() -> Result<()> {
//!     let rules = RuleSet::new("17:20-21:35 1-5 * *; * 0,6 * *")?;
//!
//!     // Monday evening is covered by the first rule.
//!     let monday = DateTime::parse_from_rfc3339("2024-01-01T18:30:00Z").unwrap();
//!     assert!(rules.matches(&monday));
//!
//!     // Saturday noon is covered by the second one.
//!     let saturday = DateTime::parse_from_rfc3339("2024-01-06T12:00:00Z").unwrap();
//!     assert!(rules.matches(&saturday));
//!
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Rendering a [`RuleSet`] back to text produces the canonical form: field
//! values are sorted and contiguous runs are compressed, so `1-2,3` becomes
//! `1-3` and `1,3-3,5` becomes `1,3,5`.
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html)
//!   and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html)
//!   trait implementation for [`RuleSet`].
//! * `cli`: builds the `cronrange` binary which checks the current time
//!   against an expression and optionally runs a command.

/// Crate specific Error implementation.
pub mod error;
mod field;
/// Rules parser and instant matcher.
pub mod rule;
mod timerange;

// Re-export of public entities.
pub use error::CronRangeError;
pub use rule::{Rule, RuleSet};

/// Convenient alias for `Result`.
pub type Result<T, E = CronRangeError> = std::result::Result<T, E>;
