use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Output shape of the generated code.
///
/// `Generic` emits nested `HTML.*` constructor calls; `ElementFactory` emits
/// `React.createElement(name, attrs, ...children)` calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Generic,
    ElementFactory,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::ElementFactory => "element_factory",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`Mode::from_str`] for an unrecognised mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(Self::Generic),
            "element_factory" | "element-factory" => Ok(Self::ElementFactory),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_generic() {
        assert_eq!(Mode::default(), Mode::Generic);
    }

    #[test]
    fn parse_and_display_agree() {
        for mode in [Mode::Generic, Mode::ElementFactory] {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
        assert_eq!("element-factory".parse::<Mode>(), Ok(Mode::ElementFactory));
        assert_eq!(
            "jsx".parse::<Mode>(),
            Err(UnknownMode("jsx".to_string()))
        );
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Mode::ElementFactory).unwrap();
        assert_eq!(json, r#""element_factory""#);
        let mode: Mode = serde_json::from_str(r#""generic""#).unwrap();
        assert_eq!(mode, Mode::Generic);
    }
}
