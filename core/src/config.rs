//! Config types for loading matchers from JSON/YAML.
//!
//! The wire shape is the one date-pickers already use for modifier matchers:
//!
//! ```json
//! true
//! false
//! { "daysOfWeek": [0, 6] }
//! { "daysOfWeek": [], "before": "2024-01-01" }
//! ```
//!
//! Keys other than `daysOfWeek` belong to other matcher kinds and are ignored.
//!
//! | Config type | Runtime type | Loader |
//! |-------------|--------------|--------|
//! | [`MatcherConfig`] | [`DayMatcher`] | [`MatcherConfig::load()`] |
//! | [`StructuredConfig`] | `DayMatcher::Structured` | via `MatcherConfig::load()` |

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

use crate::{DayMatcher, DaysOfWeek, MatcherError, MAX_DAYS_OF_WEEK_ENTRIES};

const DAYS_OF_WEEK_KEY: &str = "daysOfWeek";

/// Configuration for a [`DayMatcher`].
///
/// A boolean becomes [`Flag`](Self::Flag), a map becomes
/// [`Structured`](Self::Structured). Anything else, arrays included, is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MatcherConfig {
    /// `true` or `false`.
    Flag(bool),

    /// A map, possibly carrying `daysOfWeek`.
    Structured(StructuredConfig),
}

/// Configuration for a structured matcher.
///
/// Indices are kept as wide signed integers so that `-1` or
/// `18446744073709551615` is reported as an out-of-range weekday rather than a
/// type error. Only numbers beyond the `i128` range fail as `InvalidConfig`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuredConfig {
    /// Sunday-first weekday indices.
    #[serde(
        rename = "daysOfWeek",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub days_of_week: Option<Vec<i128>>,
}

/// Accepts a boolean or a map.
struct MatcherConfigVisitor;

impl<'de> Visitor<'de> for MatcherConfigVisitor {
    type Value = MatcherConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean or a map")
    }

    fn visit_bool<E: de::Error>(self, flag: bool) -> Result<MatcherConfig, E> {
        Ok(MatcherConfig::Flag(flag))
    }

    fn visit_map<M: MapAccess<'de>>(self, map: M) -> Result<MatcherConfig, M::Error> {
        StructuredConfigVisitor
            .visit_map(map)
            .map(MatcherConfig::Structured)
    }
}

/// Accepts only a map. Sequences are rejected rather than filled by position.
struct StructuredConfigVisitor;

impl<'de> Visitor<'de> for StructuredConfigVisitor {
    type Value = StructuredConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<StructuredConfig, M::Error> {
        let mut days_of_week: Option<Option<Vec<i128>>> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == DAYS_OF_WEEK_KEY {
                if days_of_week.is_some() {
                    return Err(de::Error::duplicate_field(DAYS_OF_WEEK_KEY));
                }
                days_of_week = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(StructuredConfig {
            days_of_week: days_of_week.flatten(),
        })
    }
}

impl<'de> Deserialize<'de> for MatcherConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MatcherConfigVisitor)
    }
}

impl<'de> Deserialize<'de> for StructuredConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StructuredConfigVisitor)
    }
}

impl MatcherConfig {
    /// Validate this config and build a runtime [`DayMatcher`].
    ///
    /// # Errors
    ///
    /// - [`MatcherError::TooManyEntries`] if `daysOfWeek` is longer than
    ///   [`MAX_DAYS_OF_WEEK_ENTRIES`].
    /// - [`MatcherError::InvalidWeekday`] for any index outside `0..=6`.
    pub fn load(&self) -> Result<DayMatcher, MatcherError> {
        let matcher = match self {
            Self::Flag(flag) => DayMatcher::AlwaysOrNever(*flag),
            Self::Structured(StructuredConfig { days_of_week: None }) => {
                DayMatcher::without_days_of_week()
            }
            Self::Structured(StructuredConfig {
                days_of_week: Some(indices),
            }) => {
                if indices.len() > MAX_DAYS_OF_WEEK_ENTRIES {
                    return Err(MatcherError::TooManyEntries {
                        count: indices.len(),
                        max: MAX_DAYS_OF_WEEK_ENTRIES,
                    });
                }
                let days = DaysOfWeek::from_indices(indices.iter().copied())?;
                if days.len() < indices.len() {
                    warn!(
                        entries = indices.len(),
                        distinct = days.len(),
                        "duplicate daysOfWeek entries collapsed"
                    );
                }
                DayMatcher::days_of_week(days)
            }
        };
        debug!(?matcher, "loaded day matcher");
        Ok(matcher)
    }
}

impl From<&DayMatcher> for MatcherConfig {
    fn from(matcher: &DayMatcher) -> Self {
        match *matcher {
            DayMatcher::AlwaysOrNever(flag) => Self::Flag(flag),
            DayMatcher::Structured { days_of_week } => Self::Structured(StructuredConfig {
                days_of_week: days_of_week.map(|days| days.iter().map(i128::from).collect()),
            }),
        }
    }
}

impl Serialize for DayMatcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatcherConfig::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DayMatcher {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        MatcherConfig::deserialize(deserializer)?
            .load()
            .map_err(serde::de::Error::custom)
    }
}

/// Parse a JSON matcher config and load it.
///
/// ```
/// let matcher = daymatch::load_matcher_json(r#"{ "daysOfWeek": [0, 6] }"#)?;
/// assert!(matcher.matches(&chrono::Weekday::Sat));
/// # Ok::<(), daymatch::MatcherError>(())
/// ```
///
/// # Errors
///
/// [`MatcherError::InvalidConfig`] if the text is not a matcher config, or any
/// error from [`MatcherConfig::load()`].
pub fn load_matcher_json(json: &str) -> Result<DayMatcher, MatcherError> {
    let config: MatcherConfig =
        serde_json::from_str(json).map_err(|e| MatcherError::InvalidConfig {
            message: e.to_string(),
        })?;
    config.load()
}

/// Parse a YAML matcher config and load it.
///
/// # Errors
///
/// [`MatcherError::InvalidConfig`] if the text is not a matcher config, or any
/// error from [`MatcherConfig::load()`].
pub fn load_matcher_yaml(yaml: &str) -> Result<DayMatcher, MatcherError> {
    let config: MatcherConfig =
        serde_yaml::from_str(yaml).map_err(|e| MatcherError::InvalidConfig {
            message: e.to_string(),
        })?;
    config.load()
}
