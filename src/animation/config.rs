use std::{fmt, fs::File, io::BufReader, num::NonZeroU32, path::Path, str::FromStr};

use anyhow::Context as _;

use crate::foundation::error::{SvgLineError, SvgLineResult};

/// Parameters of the injected `animation` shorthand.
///
/// A config is built once per run and only borrowed by the transform. JSON config files may
/// omit any field; missing fields take the [`Default`] values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Animation duration in milliseconds. Must be greater than zero.
    pub duration_ms: u64,
    /// Delay before the animation starts, in milliseconds.
    pub delay_ms: u64,
    /// How many times the animation runs.
    pub iteration_count: IterationCount,
    /// Easing curve.
    pub timing: TimingFunction,
    /// Trailing keyword of the shorthand (direction or fill mode).
    pub direction: Direction,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1500,
            delay_ms: 0,
            iteration_count: IterationCount::default(),
            timing: TimingFunction::Linear,
            direction: Direction::Forwards,
        }
    }
}

impl AnimationConfig {
    /// Check the invariants that the field types alone cannot express.
    pub fn validate(&self) -> SvgLineResult<()> {
        if self.duration_ms == 0 {
            return Err(SvgLineError::config("duration must be greater than 0 ms"));
        }
        if let TimingFunction::CubicBezier(x1, y1, x2, y2) = self.timing {
            check_cubic_bezier(x1, y1, x2, y2)?;
        }
        Ok(())
    }

    /// Parse and validate a config from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> SvgLineResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| SvgLineError::config(format!("parse animation config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SvgLineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open animation config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }
}

/// `animation-iteration-count` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "IterationRepr", into = "IterationRepr")]
pub enum IterationCount {
    /// Run a fixed number of times.
    Count(NonZeroU32),
    /// Repeat forever.
    Infinite,
}

impl Default for IterationCount {
    fn default() -> Self {
        Self::Count(NonZeroU32::MIN)
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Infinite => f.write_str("infinite"),
        }
    }
}

impl FromStr for IterationCount {
    type Err = SvgLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "infinite" {
            return Ok(Self::Infinite);
        }
        s.parse::<NonZeroU32>().map(Self::Count).map_err(|_| {
            SvgLineError::config(format!(
                "iteration count must be a positive integer or 'infinite', got '{s}'"
            ))
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum IterationRepr {
    Count(u32),
    Keyword(String),
}

impl TryFrom<IterationRepr> for IterationCount {
    type Error = SvgLineError;

    fn try_from(v: IterationRepr) -> Result<Self, Self::Error> {
        match v {
            IterationRepr::Count(n) => NonZeroU32::new(n)
                .map(Self::Count)
                .ok_or_else(|| SvgLineError::config("iteration count must be greater than 0")),
            IterationRepr::Keyword(s) => s.parse(),
        }
    }
}

impl From<IterationCount> for IterationRepr {
    fn from(v: IterationCount) -> Self {
        match v {
            IterationCount::Count(n) => Self::Count(n.get()),
            IterationCount::Infinite => Self::Keyword("infinite".to_string()),
        }
    }
}

/// `animation-timing-function` value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimingFunction {
    /// `linear`
    Linear,
    /// `ease`
    Ease,
    /// `ease-in`
    EaseIn,
    /// `ease-out`
    EaseOut,
    /// `ease-in-out`
    EaseInOut,
    /// `step-start`
    StepStart,
    /// `step-end`
    StepEnd,
    /// `cubic-bezier(x1,y1,x2,y2)`; both x values lie in `[0, 1]`.
    CubicBezier(f64, f64, f64, f64),
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Ease => f.write_str("ease"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::StepStart => f.write_str("step-start"),
            Self::StepEnd => f.write_str("step-end"),
            Self::CubicBezier(x1, y1, x2, y2) => write!(f, "cubic-bezier({x1},{y1},{x2},{y2})"),
        }
    }
}

impl FromStr for TimingFunction {
    type Err = SvgLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let keyword = match s {
            "linear" => Some(Self::Linear),
            "ease" => Some(Self::Ease),
            "ease-in" => Some(Self::EaseIn),
            "ease-out" => Some(Self::EaseOut),
            "ease-in-out" => Some(Self::EaseInOut),
            "step-start" => Some(Self::StepStart),
            "step-end" => Some(Self::StepEnd),
            _ => None,
        };
        if let Some(k) = keyword {
            return Ok(k);
        }

        let args = s
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| SvgLineError::config(format!("unknown timing function '{s}'")))?;
        let nums = args
            .split(',')
            .map(|a| a.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SvgLineError::config(format!("bad cubic-bezier argument in '{s}': {e}")))?;
        let [x1, y1, x2, y2] = nums[..] else {
            return Err(SvgLineError::config(format!(
                "cubic-bezier takes 4 arguments, got {} in '{s}'",
                nums.len()
            )));
        };
        check_cubic_bezier(x1, y1, x2, y2)?;
        Ok(Self::CubicBezier(x1, y1, x2, y2))
    }
}

impl TryFrom<String> for TimingFunction {
    type Error = SvgLineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimingFunction> for String {
    fn from(v: TimingFunction) -> Self {
        v.to_string()
    }
}

fn check_cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> SvgLineResult<()> {
    if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
        return Err(SvgLineError::config("cubic-bezier arguments must be finite"));
    }
    if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
        return Err(SvgLineError::config(
            "cubic-bezier x coordinates must lie in [0, 1]",
        ));
    }
    Ok(())
}

/// Trailing keyword of the `animation` shorthand.
///
/// Holds both `animation-direction` and `animation-fill-mode` keywords, since the shorthand
/// accepts either in that slot and the default run leaves the final frame in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// `normal`
    Normal,
    /// `reverse`
    Reverse,
    /// `alternate`
    Alternate,
    /// `alternate-reverse`
    AlternateReverse,
    /// `forwards`
    #[default]
    Forwards,
    /// `backwards`
    Backwards,
    /// `both`
    Both,
}

impl Direction {
    /// CSS keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Reverse => "reverse",
            Self::Alternate => "alternate",
            Self::AlternateReverse => "alternate-reverse",
            Self::Forwards => "forwards",
            Self::Backwards => "backwards",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SvgLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(Self::Normal),
            "reverse" => Ok(Self::Reverse),
            "alternate" => Ok(Self::Alternate),
            "alternate-reverse" => Ok(Self::AlternateReverse),
            "forwards" => Ok(Self::Forwards),
            "backwards" => Ok(Self::Backwards),
            "both" => Ok(Self::Both),
            other => Err(SvgLineError::config(format!(
                "unknown animation direction '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;
