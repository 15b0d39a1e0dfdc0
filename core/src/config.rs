// SPDX-FileCopyrightText: 2026 Commcal Contributors
//
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

/// Tunables for the event-creation form.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Maximum calendar-day span between the first and last occurrence.
    /// The schedule-step validation message embeds this value.
    #[serde(default = "default_max_span_days")]
    pub max_span_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_span_days: default_max_span_days(),
        }
    }
}

const fn default_max_span_days() -> u32 {
    90
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ninety_days() {
        assert_eq!(Config::default().max_span_days, 90);

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.max_span_days, 90);
    }

    #[test]
    fn reads_the_span_limit_from_toml() {
        let config: Config = toml::from_str("max_span_days = 30").unwrap();
        assert_eq!(config.max_span_days, 30);
    }
}
