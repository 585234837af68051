use crate::WardrobeError;

/// Engine defaults applied when a request omits the knob, overridable from
/// the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Default cap on returned co-worn pairs (`WARDROBE_PAIR_LIMIT`).
    pub pair_limit: usize,
    /// Default minimum joint count for a pair (`WARDROBE_PAIR_MIN_COUNT`).
    pub pair_min_count: u64,
    /// Default all-time wear count at or below which a garment counts as
    /// sleeping (`WARDROBE_SLEEP_THRESHOLD`).
    pub dormancy_threshold: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pair_limit: 10,
            pair_min_count: 1,
            dormancy_threshold: 1,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, WardrobeError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, WardrobeError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            pair_limit: parse_or(
                "WARDROBE_PAIR_LIMIT",
                get("WARDROBE_PAIR_LIMIT"),
                defaults.pair_limit,
            )?,
            pair_min_count: parse_or(
                "WARDROBE_PAIR_MIN_COUNT",
                get("WARDROBE_PAIR_MIN_COUNT"),
                defaults.pair_min_count,
            )?,
            dormancy_threshold: parse_or(
                "WARDROBE_SLEEP_THRESHOLD",
                get("WARDROBE_SLEEP_THRESHOLD"),
                defaults.dormancy_threshold,
            )?,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &str,
    raw: Option<String>,
    default: T,
) -> Result<T, WardrobeError> {
    match raw {
        None => Ok(default),
        Some(s) => s.trim().parse().map_err(|_| {
            WardrobeError::Config(format!("{key} must be a non-negative integer, got {s:?}"))
        }),
    }
}
