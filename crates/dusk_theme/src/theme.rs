//! The discrete light / dark mode

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual theme selected by the user
///
/// Serialized as `"light"` / `"dark"`. Deserialization goes through
/// [`FromStr`], so it accepts the same spellings as parsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Map a switch position to a theme (on = dark)
    pub fn from_switch(on: bool) -> Self {
        if on {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Uppercase label shown on screen
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "LIGHT",
            Theme::Dark => "DARK",
        }
    }

    /// Resting value of the animation progress for this theme
    pub fn target_progress(self) -> f32 {
        match self {
            Theme::Light => 0.0,
            Theme::Dark => 1.0,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for Theme {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_uppercase_name() {
        for theme in Theme::ALL {
            assert_eq!(theme.label(), theme.as_str().to_uppercase());
        }
    }

    #[test]
    fn test_switch_mapping() {
        assert_eq!(Theme::from_switch(true), Theme::Dark);
        assert_eq!(Theme::from_switch(false), Theme::Light);
        assert!(Theme::from_switch(true).is_dark());
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ThemeError::Unknown("sepia".to_string()))
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_serde_accepts_what_parse_accepts() {
        for input in ["Dark", " light ", "DARK"] {
            let parsed: Theme = input.parse().unwrap();
            let json = serde_json::to_string(input).unwrap();
            let deserialized: Theme = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, parsed, "{input:?}");
        }

        let err = serde_json::from_str::<Theme>("\"sepia\"").unwrap_err();
        assert!(err.to_string().contains("unknown theme 'sepia'"));
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::default().target_progress(), 0.0);
    }
}
