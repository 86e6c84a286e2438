//! Engine configuration as supplied by the page.
//!
//! Every struct deserializes from camelCase JSON with all fields optional;
//! missing fields take the defaults below. `validate` rejects values outside
//! the domain an engine can animate.

use crate::constants::*;
use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Parse and validate a JSON config. Blank input yields the defaults.
pub fn parse_config<T>(json: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default + Validate,
{
    let config = if json.trim().is_empty() {
        T::default()
    } else {
        serde_json::from_str::<T>(json)?
    };
    config.validate()?;
    Ok(config)
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(field, "finite and > 0", value))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(field, "finite and >= 0", value))
    }
}

/// Tuning profile for a node field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldProfile {
    /// Sparse, slow, pointer-reactive page background.
    #[default]
    Ambient,
    /// Larger, faster particles with faint links for the showcase section.
    Showcase,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeFieldConfig {
    pub density: f32,
    pub color: String,
    pub interactive: bool,
    pub profile: FieldProfile,
}

impl Default for NodeFieldConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            color: DEFAULT_NODE_COLOR.to_string(),
            interactive: true,
            profile: FieldProfile::Ambient,
        }
    }
}

impl Validate for NodeFieldConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive("density", self.density as f64)?;
        if self.density > MAX_DENSITY {
            return Err(ConfigError::out_of_range(
                "density",
                "<= 100",
                self.density as f64,
            ));
        }
        Ok(())
    }
}

/// Axis and sign of a parallax displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallaxConfig {
    pub speed: f32,
    pub direction: Direction,
    pub easing: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_PARALLAX_SPEED,
            direction: Direction::Up,
            easing: DEFAULT_PARALLAX_EASING,
        }
    }
}

impl Validate for ParallaxConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() {
            return Err(ConfigError::out_of_range(
                "speed",
                "finite",
                self.speed as f64,
            ));
        }
        if !(self.easing > 0.0 && self.easing <= 1.0) {
            return Err(ConfigError::out_of_range(
                "easing",
                "in (0, 1]",
                self.easing as f64,
            ));
        }
        Ok(())
    }
}

/// How reveal text is split into animation units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    #[default]
    Letter,
    Word,
}

/// Staggered text reveal parameters.
///
/// `delay` is in milliseconds, `duration` and `stagger_interval` in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub text: String,
    pub once: bool,
    pub delay: f64,
    pub duration: f64,
    pub stagger_interval: f64,
    pub split_granularity: SplitMode,
    pub glow: bool,
    pub typing_mode: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            once: true,
            delay: 0.0,
            duration: DEFAULT_REVEAL_DURATION_SEC,
            stagger_interval: DEFAULT_STAGGER_SEC,
            split_granularity: SplitMode::Letter,
            glow: false,
            typing_mode: false,
        }
    }
}

impl RevealConfig {
    pub fn delay_sec(&self) -> f64 {
        self.delay / 1000.0
    }
}

impl Validate for RevealConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        non_negative("delay", self.delay)?;
        non_negative("duration", self.duration)?;
        non_negative("staggerInterval", self.stagger_interval)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverMode {
    /// 3D card tilt toward the pointer.
    #[default]
    Tilt,
    /// Translate after the pointer (hero glow orb).
    Follow,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoverConfig {
    pub mode: HoverMode,
    pub max_degrees: f32,
    pub perspective: f32,
    pub factor: f32,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            mode: HoverMode::Tilt,
            max_degrees: TILT_MAX_DEG,
            perspective: TILT_PERSPECTIVE_PX,
            factor: FOLLOW_FACTOR_PX,
        }
    }
}

impl Validate for HoverConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        non_negative("maxDegrees", self.max_degrees as f64)?;
        positive("perspective", self.perspective as f64)?;
        if !self.factor.is_finite() {
            return Err(ConfigError::out_of_range(
                "factor",
                "finite",
                self.factor as f64,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_json_yields_defaults() {
        let cfg: NodeFieldConfig = parse_config("  ").unwrap();
        assert_eq!(cfg, NodeFieldConfig::default());
        assert!(cfg.interactive);
    }

    #[test]
    fn camel_case_fields_and_lowercase_enums() {
        let cfg: RevealConfig = parse_config(
            r#"{"text":"AI","staggerInterval":0.05,"splitGranularity":"word","typingMode":true}"#,
        )
        .unwrap();
        assert_eq!(cfg.text, "AI");
        assert_eq!(cfg.split_granularity, SplitMode::Word);
        assert!(cfg.typing_mode);
        assert!(cfg.once);
        assert!((cfg.stagger_interval - 0.05).abs() < 1e-12);

        let p: ParallaxConfig = parse_config(r#"{"direction":"left"}"#).unwrap();
        assert_eq!(p.direction, Direction::Left);
    }

    #[test]
    fn rejects_out_of_domain_values() {
        assert!(matches!(
            parse_config::<NodeFieldConfig>(r#"{"density":0}"#),
            Err(ConfigError::OutOfRange { field: "density", .. })
        ));
        assert!(matches!(
            parse_config::<NodeFieldConfig>(r#"{"density":1e7}"#),
            Err(ConfigError::OutOfRange { field: "density", .. })
        ));
        assert!(matches!(
            parse_config::<ParallaxConfig>(r#"{"easing":1.5}"#),
            Err(ConfigError::OutOfRange { field: "easing", .. })
        ));
        assert!(matches!(
            parse_config::<RevealConfig>(r#"{"delay":-1}"#),
            Err(ConfigError::OutOfRange { field: "delay", .. })
        ));
        assert!(matches!(
            parse_config::<HoverConfig>("{"),
            Err(ConfigError::Malformed(_))
        ));
    }
}
