//! Viewport-relative trigger positions such as `"top 80%"`.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TriggerBandError {
    #[error("trigger band {0:?} must be \"<element> <viewport>\", e.g. \"top 80%\"")]
    Arity(String),
    #[error("unknown trigger position {0:?}")]
    Position(String),
}

/// Fires when the point `element_anchor` of the way down the element meets
/// the point `viewport_anchor` of the way down the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerBand {
    pub element_anchor: f32,
    pub viewport_anchor: f32,
}

impl TriggerBand {
    pub const fn new(element_anchor: f32, viewport_anchor: f32) -> Self {
        Self {
            element_anchor,
            viewport_anchor,
        }
    }

    /// The document scroll offset at which this band is crossed.
    pub fn resolve(&self, element_top: f32, element_height: f32, viewport_height: f32) -> f32 {
        element_top + self.element_anchor * element_height - self.viewport_anchor * viewport_height
    }
}

fn parse_position(token: &str) -> Result<f32, TriggerBandError> {
    match token {
        "top" => Ok(0.0),
        "center" => Ok(0.5),
        "bottom" => Ok(1.0),
        _ => token
            .strip_suffix('%')
            .and_then(|pct| pct.parse::<f32>().ok())
            .map(|pct| pct / 100.0)
            .ok_or_else(|| TriggerBandError::Position(token.to_string())),
    }
}

impl FromStr for TriggerBand {
    type Err = TriggerBandError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let [element, viewport] = tokens.as_slice() else {
            return Err(TriggerBandError::Arity(raw.to_string()));
        };
        Ok(Self::new(parse_position(element)?, parse_position(viewport)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords_and_percentages() {
        assert_eq!("top 80%".parse(), Ok(TriggerBand::new(0.0, 0.8)));
        assert_eq!("center center".parse(), Ok(TriggerBand::new(0.5, 0.5)));
        assert_eq!("bottom 0%".parse(), Ok(TriggerBand::new(1.0, 0.0)));
    }

    #[test]
    fn rejects_malformed_bands() {
        assert_eq!(
            "top".parse::<TriggerBand>(),
            Err(TriggerBandError::Arity("top".into()))
        );
        assert_eq!(
            "top middle".parse::<TriggerBand>(),
            Err(TriggerBandError::Position("middle".into()))
        );
    }

    #[test]
    fn resolves_against_element_and_viewport() {
        let band: TriggerBand = "top 80%".parse().unwrap();
        assert_eq!(band.resolve(1440.0, 720.0, 720.0), 1440.0 - 576.0);
    }
}
