//! Rating display formatting.

use serde::{Deserialize, Serialize};

/// Format a rating value for display.
///
/// Positive values get an explicit `+` prefix; zero and negative values
/// render with their natural sign.
pub fn format_rating(value: i32) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// A rating annotated for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingView {
    /// Rating name (e.g. "Cool").
    pub name: String,
    /// Numeric value used as the roll modifier.
    pub value: i32,
    /// Value as shown on the sheet ("+2", "0", "-1").
    pub display: String,
}

impl RatingView {
    /// Annotate a named rating value.
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
            display: format_rating(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_gain_a_plus() {
        assert_eq!(format_rating(3), "+3");
        assert_eq!(format_rating(1), "+1");
    }

    #[test]
    fn zero_has_no_prefix() {
        assert_eq!(format_rating(0), "0");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format_rating(-1), "-1");
        assert_eq!(format_rating(-2), "-2");
    }

    #[test]
    fn view_carries_value_and_display() {
        let view = RatingView::new("Cool", 2);
        assert_eq!(view.name, "Cool");
        assert_eq!(view.value, 2);
        assert_eq!(view.display, "+2");
    }
}
