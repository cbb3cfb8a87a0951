//! Review writing styles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tone a review is written in.
///
/// The set is closed: a request naming any other style is rejected while the
/// body is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Sharp, sarcastic, darkly funny.
    Toxic,
    /// Pretentious literary hipster.
    Literary,
    /// Overdramatic teenager with secret powers.
    Chuunibyou,
    /// Palace-drama court intrigue.
    Zhenhuan,
    /// Lu Xun's cold social criticism.
    Luxun,
    /// Florid, theatrical, slightly pompous.
    Shakespeare,
}

impl Style {
    /// Every supported style, in declaration order.
    pub const ALL: [Style; 6] = [
        Style::Toxic,
        Style::Literary,
        Style::Chuunibyou,
        Style::Zhenhuan,
        Style::Luxun,
        Style::Shakespeare,
    ];

    /// Wire identifier of the style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Toxic => "toxic",
            Style::Literary => "literary",
            Style::Chuunibyou => "chuunibyou",
            Style::Zhenhuan => "zhenhuan",
            Style::Luxun => "luxun",
            Style::Shakespeare => "shakespeare",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
