//! Tolerance domain: the ε slider range and the validated `Tolerance` value.
//!
//! - `SliderRange`: closed interval, step granularity and initial value of a
//!   range input, with the same value sanitization a browser applies.
//! - `Tolerance`: an ε known to lie inside `EPSILON_SLIDER`.
//! - `ToleranceError`: why a raw value was rejected.

use std::fmt;

use super::cfg::DISPLAY_DECIMALS;

/// Range input description (`min`, `max`, `step`, initial `value`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub initial: f64,
}

/// The ε slider: `[0.1, 2.0]`, step `0.01`, starts at `1.0`.
pub const EPSILON_SLIDER: SliderRange = SliderRange {
    min: 0.1,
    max: 2.0,
    step: 0.01,
    initial: 1.0,
};

impl SliderRange {
    /// Steps per unit (100 for a step of 0.01).
    #[inline]
    fn scale(&self) -> f64 {
        (1.0 / self.step).round()
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Clamp to `[min, max]` and snap to the nearest step.
    ///
    /// The result is computed as `ticks / scale`, so a snapped value is the
    /// same double as the parsed decimal text (`1.23` stays `1.23`).
    /// NaN falls back to the initial value.
    pub fn sanitize(&self, raw: f64) -> f64 {
        if raw.is_nan() {
            return self.initial;
        }
        let scale = self.scale();
        let lo = (self.min * scale).round();
        let hi = (self.max * scale).round();
        let ticks = (raw * scale).round().clamp(lo, hi);
        ticks / scale
    }

    /// Every position the slider can take, in increasing order.
    pub fn positions(&self) -> Vec<f64> {
        let scale = self.scale();
        let lo = (self.min * scale).round() as i64;
        let hi = (self.max * scale).round() as i64;
        (lo..=hi).map(|t| t as f64 / scale).collect()
    }
}

/// Reasons a raw ε is rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ToleranceError {
    /// NaN or infinite.
    NotFinite,
    /// Outside the slider interval.
    OutOfRange { value: f64, min: f64, max: f64 },
    /// Slider text that is not a finite decimal number.
    Unparsable { text: String },
}

impl fmt::Display for ToleranceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToleranceError::NotFinite => write!(f, "tolerance must be a finite number"),
            ToleranceError::OutOfRange { value, min, max } => {
                write!(f, "tolerance {value} is outside [{min}, {max}]")
            }
            ToleranceError::Unparsable { text } => {
                write!(f, "slider value {text:?} is not a number")
            }
        }
    }
}

impl std::error::Error for ToleranceError {}

/// Longest decimal prefix of `text` after leading whitespace: optional sign,
/// digits with an optional fraction, optional exponent, or `Infinity`.
/// `None` when no digit is found. Never returns NaN.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();
    let int_digits = digits(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    s[..end].parse::<f64>().ok()
}

/// Vertical tolerance ε, guaranteed to lie in `EPSILON_SLIDER`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    pub fn new(value: f64) -> Result<Self, ToleranceError> {
        if !value.is_finite() {
            return Err(ToleranceError::NotFinite);
        }
        if !EPSILON_SLIDER.contains(value) {
            return Err(ToleranceError::OutOfRange {
                value,
                min: EPSILON_SLIDER.min,
                max: EPSILON_SLIDER.max,
            });
        }
        Ok(Self(value))
    }

    /// Value of a freshly mounted visualizer.
    #[inline]
    pub fn initial() -> Self {
        Self(EPSILON_SLIDER.initial)
    }

    /// Any finite value, clamped and snapped onto the slider grid.
    pub fn from_slider(raw: f64) -> Result<Self, ToleranceError> {
        if !raw.is_finite() {
            return Err(ToleranceError::NotFinite);
        }
        Ok(Self(EPSILON_SLIDER.sanitize(raw)))
    }

    /// Parse the text of a slider input event, then sanitize it.
    ///
    /// Parsing reads the longest numeric prefix (`"1.5abc"` is `1.5`);
    /// `Infinity` clamps to the slider's max, `-Infinity` to its min.
    pub fn from_slider_text(text: &str) -> Result<Self, ToleranceError> {
        let parsed = parse_float_prefix(text).ok_or_else(|| ToleranceError::Unparsable {
            text: text.to_string(),
        })?;
        Ok(Self(EPSILON_SLIDER.sanitize(parsed)))
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::initial()
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ToleranceError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", DISPLAY_DECIMALS, self.0)
    }
}
