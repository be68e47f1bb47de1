//! Style value coercion.
//!
//! Raw JSON values are classified as either a literal or a style expression.
//! Expressions are detected by shape alone and handed to the native
//! expression engine without being parsed.

use maplibre_style::{
    Alignment, Anchor, Color, DemEncoding, Expression, IconTextFit, IlluminationAnchor, LineCap,
    LineJoin, PitchScale, PropertyValue, RasterResampling, StyleEnum, SymbolPlacement,
    SymbolZOrder, TextJustify, TextTransform, TextWritingMode, TileScheme, TranslateAnchor,
    Visibility,
};
use serde_json::Value;
use tracing::debug;

/// Classified raw style value.
#[derive(PartialEq, Clone, Debug)]
pub enum StyleValue<'a> {
    Literal(&'a Value),
    Expression(Expression),
}

/// Check if a string is a style expression.
///
/// Any string wrapped in brackets is considered an expression, which means
/// literal strings like `"[draft]"` are misclassified.
pub fn is_expression(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// Classify a raw value.
pub fn coerce(raw: &Value) -> StyleValue<'_> {
    match raw {
        Value::String(text) if is_expression(text) => StyleValue::Expression(Expression::new(text)),
        _ => StyleValue::Literal(raw),
    }
}

/// Check if a property expects a color value.
pub fn is_color_property(name: &str) -> bool {
    name.ends_with("-color")
}

/// Coerce a raw value into a typed property value.
///
/// Returns `None` if the value is neither an expression nor a valid literal.
pub fn property<T: FromLiteral>(raw: &Value) -> Option<PropertyValue<T>> {
    match coerce(raw) {
        StyleValue::Expression(expression) => Some(PropertyValue::Expression(expression)),
        StyleValue::Literal(literal) => T::from_literal(literal).map(PropertyValue::Constant),
    }
}

/// Coerce a raw value into an enum property value.
///
/// Unknown enum strings resolve to the `fallback` variant.
pub fn enum_property<T: StyleEnum>(
    name: &str,
    raw: &Value,
    fallback: T,
) -> Option<PropertyValue<T>> {
    let literal = match coerce(raw) {
        StyleValue::Expression(expression) => return Some(PropertyValue::Expression(expression)),
        StyleValue::Literal(Value::String(literal)) => literal,
        StyleValue::Literal(_) => return None,
    };

    let value = T::from_style_str(literal).unwrap_or_else(|| {
        debug!("Unknown {name} value {literal:?}, using {:?}", fallback.as_style_str());
        fallback
    });

    Some(PropertyValue::Constant(value))
}

/// Conversion from a JSON literal.
pub trait FromLiteral: Sized {
    fn from_literal(value: &Value) -> Option<Self>;
}

impl FromLiteral for f64 {
    fn from_literal(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromLiteral for bool {
    fn from_literal(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromLiteral for String {
    fn from_literal(value: &Value) -> Option<Self> {
        value.as_str().map(String::from)
    }
}

impl FromLiteral for Value {
    fn from_literal(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

/// Parse a color from a packed ARGB integer or a hex string.
impl FromLiteral for Color {
    fn from_literal(value: &Value) -> Option<Self> {
        match value {
            Value::String(hex) => parse_hex_color(hex),
            // Platform colors are signed 32-bit integers.
            Value::Number(number) => match number.as_i64()? {
                argb @ 0..=0xFFFF_FFFF => Some(Color::from_argb(argb as u32)),
                argb @ -0x8000_0000..0 => Some(Color::from_argb(argb as i32 as u32)),
                _ => None,
            },
            _ => None,
        }
    }
}

impl<const N: usize> FromLiteral for [f64; N] {
    fn from_literal(value: &Value) -> Option<Self> {
        let values = Vec::<f64>::from_literal(value)?;
        values.try_into().ok()
    }
}

impl<T: FromLiteral> FromLiteral for Vec<T> {
    fn from_literal(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_literal).collect()
    }
}

macro_rules! enum_literal {
    ($($name:ty),+) => {
        $(
            impl FromLiteral for $name {
                fn from_literal(value: &Value) -> Option<Self> {
                    StyleEnum::from_style_str(value.as_str()?)
                }
            }
        )+
    };
}

enum_literal!(
    Alignment,
    Anchor,
    DemEncoding,
    IconTextFit,
    IlluminationAnchor,
    LineCap,
    LineJoin,
    PitchScale,
    RasterResampling,
    SymbolPlacement,
    SymbolZOrder,
    TextJustify,
    TextTransform,
    TextWritingMode,
    TileScheme,
    TranslateAnchor,
    Visibility
);

/// Parse `#RRGGBB` or `#RRGGBBAA` hex colors.
fn parse_hex_color(value: &str) -> Option<Color> {
    let channels = value.strip_prefix('#')?;

    let digits = channels.len();
    if digits != 6 && digits != 8 {
        debug!("Color {value:?} has {digits} digits; expected 6 or 8");
        return None;
    }

    // Reject signs, which are accepted by `from_str_radix`.
    let mut color = match u32::from_str_radix(channels, 16) {
        Ok(color) if channels.bytes().all(|byte| byte.is_ascii_hexdigit()) => color,
        _ => {
            debug!("Color {value:?} contains non-hex digits");
            return None;
        },
    };

    let a = if digits == 8 {
        let a = (color & 0xFF) as u8;
        color >>= 8;
        a
    } else {
        u8::MAX
    };
    let b = (color & 0xFF) as u8;
    color >>= 8;
    let g = (color & 0xFF) as u8;
    color >>= 8;
    let r = color as u8;

    Some(Color::new(r, g, b, a))
}
