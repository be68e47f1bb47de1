//! Style property values.

use std::fmt::{self, Display, Formatter};

/// Opaque style expression.
///
/// Expressions are stored in their JSON text form. Parsing and evaluation are
/// the responsibility of the native expression engine.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct Expression(String);

impl Expression {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the expression's JSON text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value assigned to a style property.
#[derive(PartialEq, Clone, Debug)]
pub enum PropertyValue<T> {
    /// Constant value, identical for every feature and zoom level.
    Constant(T),
    /// Data or zoom driven value.
    Expression(Expression),
}

impl<T> PropertyValue<T> {
    /// Get the constant value, if this is not an expression.
    pub fn constant(&self) -> Option<&T> {
        match self {
            Self::Constant(value) => Some(value),
            Self::Expression(_) => None,
        }
    }
}

impl<T> From<T> for PropertyValue<T> {
    fn from(value: T) -> Self {
        Self::Constant(value)
    }
}

/// RGBA color.
#[derive(Hash, PartialEq, Eq, Copy, Clone, Default, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a packed `0xAARRGGBB` integer.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack this color into a `0xAARRGGBB` integer.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Format as `#rrggbbaa` hex string.
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:0>2x}{:0>2x}{:0>2x}{:0>2x}", self.r, self.g, self.b, self.a)
    }
}

/// Time unit used by a native platform's transition API.
#[derive(Hash, PartialEq, Eq, Copy, Clone, Default, Debug)]
pub enum TimeUnit {
    /// Android's `TransitionOptions`.
    #[default]
    Milliseconds,
    /// iOS' `MLNTransition`.
    Seconds,
}

impl TimeUnit {
    /// Convert milliseconds to this unit.
    pub fn from_millis(&self, millis: u64) -> f64 {
        match self {
            Self::Milliseconds => millis as f64,
            Self::Seconds => millis as f64 / 1000.,
        }
    }
}

/// Native paint property transition.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct TransitionOptions {
    /// Transition duration in [`Self::unit`].
    pub duration: f64,
    /// Delay before the transition starts in [`Self::unit`].
    pub delay: f64,
    pub unit: TimeUnit,
}

impl TransitionOptions {
    pub fn new(duration: f64, delay: f64, unit: TimeUnit) -> Self {
        Self { duration, delay, unit }
    }
}

/// Closed style enum backed by style specification strings.
pub trait StyleEnum: Sized + Copy {
    /// Parse the enum from its style specification string.
    fn from_style_str(value: &str) -> Option<Self>;

    /// Get the style specification string of this variant.
    fn as_style_str(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_roundtrip() {
        let color = Color::from_argb(0x80ff0010);
        assert_eq!(color, Color::new(255, 0, 16, 128));
        assert_eq!(color.to_argb(), 0x80ff0010);
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::new(255, 0, 16, 128).to_string(), "#ff001080");
        assert_eq!(Color::default().to_string(), "#00000000");
    }

    #[test]
    fn time_units() {
        assert_eq!(TimeUnit::Milliseconds.from_millis(300), 300.);
        assert_eq!(TimeUnit::Seconds.from_millis(300), 0.3);
    }
}
