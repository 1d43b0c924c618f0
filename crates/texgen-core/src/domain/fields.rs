//! The five texture-generation form fields and their validators.
//!
//! The form has a fixed set of inputs: three numeric simulation parameters
//! and two colours.  Each [`FieldId`] knows its element id in the page, its
//! key in the `/calculate` request body, its default text, and its
//! [`FieldSpec`] (rule + human-readable message).
//!
//! # Validation rules
//!
//! | Field       | Element id  | Rule                                |
//! |-------------|-------------|-------------------------------------|
//! | `Stiffness` | `kValue`    | number in `[0.1, 5.0]`              |
//! | `MaxTime`   | `tMaxValue` | number in `[1.0, 10000.0]`          |
//! | `TimeStep`  | `deltaT`    | number in `[0.001, 1.0]`            |
//! | `Color1`    | `color1`    | `#` followed by exactly 6 hex digits |
//! | `Color2`    | `color2`    | `#` followed by exactly 6 hex digits |
//!
//! Numeric text is read like a browser's `parseFloat`: the leading number
//! counts and trailing text is ignored.  Both range bounds are inclusive.
//! Validators are pure: the same text always
//! produces the same [`Validation`].

use std::fmt;

/// Identifies one of the five form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    /// Reaction stiffness coefficient `K`.
    Stiffness,
    /// Maximum simulated time `t_max`.
    MaxTime,
    /// Simulation time step `delta_t`.
    TimeStep,
    /// Activator colour.
    Color1,
    /// Inhibitor colour.
    Color2,
}

impl FieldId {
    /// Every field, in form order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Stiffness,
        FieldId::MaxTime,
        FieldId::TimeStep,
        FieldId::Color1,
        FieldId::Color2,
    ];

    /// The id of the input element bound to this field.
    pub fn element_id(self) -> &'static str {
        match self {
            FieldId::Stiffness => "kValue",
            FieldId::MaxTime => "tMaxValue",
            FieldId::TimeStep => "deltaT",
            FieldId::Color1 => "color1",
            FieldId::Color2 => "color2",
        }
    }

    /// Resolves an input element id back to its field.
    ///
    /// Returns `None` for element ids that are not one of the five inputs.
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.element_id() == id)
    }

    /// The key this field is sent under in the `/calculate` request body.
    pub fn param_key(self) -> &'static str {
        match self {
            FieldId::Stiffness => "K",
            FieldId::MaxTime => "t_max",
            FieldId::TimeStep => "delta_t",
            FieldId::Color1 => "color1",
            FieldId::Color2 => "color2",
        }
    }

    /// Text placed into the input when the page is initialised and the
    /// input is still empty.
    pub fn default_value(self) -> &'static str {
        match self {
            FieldId::Stiffness => "1.0",
            FieldId::MaxTime => "10.0",
            FieldId::TimeStep => "0.1",
            FieldId::Color1 => "#0000ff",
            FieldId::Color2 => "#ff0000",
        }
    }

    /// Returns the validation rule for this field.
    pub fn spec(self) -> FieldSpec {
        match self {
            FieldId::Stiffness => FieldSpec {
                id: self,
                rule: FieldRule::Range { min: 0.1, max: 5.0 },
                message: "K must be between 0.1 and 5.0",
            },
            FieldId::MaxTime => FieldSpec {
                id: self,
                rule: FieldRule::Range { min: 1.0, max: 10000.0 },
                message: "Max time must be between 1.0 and 10000.0",
            },
            FieldId::TimeStep => FieldSpec {
                id: self,
                rule: FieldRule::Range { min: 0.001, max: 1.0 },
                message: "Time step must be between 0.001 and 1.0",
            },
            FieldId::Color1 | FieldId::Color2 => FieldSpec {
                id: self,
                rule: FieldRule::HexColor,
                message: "Invalid color format",
            },
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// The check a field's text must pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    /// The text starts with a number (after leading whitespace) in `[min, max]`.
    Range { min: f64, max: f64 },
    /// The text is `#` followed by exactly six hexadecimal digits (any case).
    HexColor,
}

impl FieldRule {
    /// Applies the rule to `value`.
    pub fn check(&self, value: &str) -> bool {
        match *self {
            FieldRule::Range { min, max } => match leading_number(value) {
                Some(n) => n >= min && n <= max,
                None => false,
            },
            FieldRule::HexColor => is_hex_color(value),
        }
    }
}

/// A field's validator: the rule plus the message shown when it fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub rule: FieldRule,
    /// Human-readable message attached next to the input on failure.
    pub message: &'static str,
}

impl FieldSpec {
    /// Validates the current text of the field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use texgen_core::FieldId;
    ///
    /// let outcome = FieldId::Stiffness.spec().validate("10");
    /// assert!(!outcome.valid);
    /// assert_eq!(outcome.message, "K must be between 0.1 and 5.0");
    /// ```
    pub fn validate(&self, value: &str) -> Validation {
        Validation {
            valid: self.rule.check(value),
            message: self.message,
        }
    }
}

/// Result of running a [`FieldSpec`] against a value.
///
/// `message` is always the rule's message; callers only display it when
/// `valid` is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub message: &'static str,
}

/// Parses the longest decimal number at the start of `value`, after leading
/// whitespace, and ignores whatever follows it: `"2.5abc"` reads as `2.5`,
/// `"abc2.5"` as nothing.
///
/// Accepts an optional sign, digits with an optional fraction (`5.`, `.5`),
/// and an exponent only when digits follow the `e`.  `NaN` and `inf` spellings
/// are not numbers here.
fn leading_number(value: &str) -> Option<f64> {
    let text = value.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(field: FieldId, value: &str) -> bool {
        field.spec().validate(value).valid
    }

    // ── Numeric ranges ────────────────────────────────────────────────────────

    #[test]
    fn test_stiffness_accepts_values_inside_range() {
        assert!(valid(FieldId::Stiffness, "1.0"));
        assert!(valid(FieldId::Stiffness, "2.5"));
        assert!(valid(FieldId::Stiffness, "4.99"));
    }

    #[test]
    fn test_stiffness_bounds_are_inclusive() {
        assert!(valid(FieldId::Stiffness, "0.1"));
        assert!(valid(FieldId::Stiffness, "5.0"));
        assert!(valid(FieldId::Stiffness, "5"));
    }

    #[test]
    fn test_stiffness_rejects_values_outside_range() {
        assert!(!valid(FieldId::Stiffness, "0.09"));
        assert!(!valid(FieldId::Stiffness, "5.01"));
        assert!(!valid(FieldId::Stiffness, "-1"));
    }

    #[test]
    fn test_stiffness_ten_fails_with_documented_message() {
        // Arrange / Act
        let outcome = FieldId::Stiffness.spec().validate("10");

        // Assert
        assert!(!outcome.valid);
        assert_eq!(outcome.message, "K must be between 0.1 and 5.0");
    }

    #[test]
    fn test_max_time_range() {
        assert!(valid(FieldId::MaxTime, "1.0"));
        assert!(valid(FieldId::MaxTime, "10000.0"));
        assert!(valid(FieldId::MaxTime, "500"));
        assert!(!valid(FieldId::MaxTime, "0.99"));
        assert!(!valid(FieldId::MaxTime, "10000.5"));
    }

    #[test]
    fn test_time_step_range() {
        assert!(valid(FieldId::TimeStep, "0.001"));
        assert!(valid(FieldId::TimeStep, "1.0"));
        assert!(valid(FieldId::TimeStep, "0.1"));
        assert!(!valid(FieldId::TimeStep, "0.0009"));
        assert!(!valid(FieldId::TimeStep, "1.5"));
    }

    #[test]
    fn test_numeric_fields_reject_non_numbers() {
        for field in [FieldId::Stiffness, FieldId::MaxTime, FieldId::TimeStep] {
            assert!(!valid(field, ""), "{field} must reject empty text");
            assert!(!valid(field, "abc"), "{field} must reject letters");
            assert!(!valid(field, "NaN"), "{field} must reject NaN");
            assert!(!valid(field, "inf"), "{field} must reject infinity");
        }
    }

    #[test]
    fn test_numeric_fields_ignore_surrounding_whitespace() {
        assert!(valid(FieldId::Stiffness, " 1.5 "));
    }

    #[test]
    fn test_numeric_fields_read_leading_number_and_ignore_trailing_text() {
        assert!(valid(FieldId::Stiffness, "2.5abc"));
        assert!(valid(FieldId::Stiffness, "1.0 K"));
        assert!(valid(FieldId::MaxTime, "1e2steps"));
        assert!(valid(FieldId::TimeStep, ".5"));
        assert!(valid(FieldId::Stiffness, "5."));
        assert!(!valid(FieldId::Stiffness, "abc2.5"));
        assert!(!valid(FieldId::Stiffness, "9.5abc"), "prefix still range-checked");
    }

    #[test]
    fn test_leading_number_prefix_rules() {
        assert_eq!(leading_number("  -1.25e1xyz"), Some(-12.5));
        assert_eq!(leading_number("3e"), Some(3.0), "dangling exponent is ignored");
        assert_eq!(leading_number("3e+"), Some(3.0));
        assert_eq!(leading_number("+.75"), Some(0.75));
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number("Infinity"), None);
        assert_eq!(leading_number(""), None);
    }

    // ── Colours ───────────────────────────────────────────────────────────────

    #[test]
    fn test_color_accepts_six_hex_digits_in_any_case() {
        assert!(valid(FieldId::Color1, "#0000ff"));
        assert!(valid(FieldId::Color1, "#FF00AA"));
        assert!(valid(FieldId::Color2, "#aBc123"));
    }

    #[test]
    fn test_color_rejects_malformed_values() {
        assert!(!valid(FieldId::Color1, "0000ff"), "missing #");
        assert!(!valid(FieldId::Color1, "#fff"), "short form");
        assert!(!valid(FieldId::Color1, "#0000ff0"), "seven digits");
        assert!(!valid(FieldId::Color2, "#gggggg"), "non-hex digits");
        assert!(!valid(FieldId::Color2, ""), "empty");
    }

    #[test]
    fn test_color_message() {
        let outcome = FieldId::Color2.spec().validate("red");
        assert_eq!(outcome.message, "Invalid color format");
    }

    // ── Field metadata ────────────────────────────────────────────────────────

    #[test]
    fn test_defaults_pass_their_own_validators() {
        for field in FieldId::ALL {
            assert!(
                valid(field, field.default_value()),
                "default of {field} must be valid"
            );
        }
    }

    #[test]
    fn test_element_ids_resolve_back_to_fields() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::from_element_id(field.element_id()), Some(field));
        }
        assert_eq!(FieldId::from_element_id("generateBtn"), None);
    }

    #[test]
    fn test_param_keys_match_wire_names() {
        let keys: Vec<_> = FieldId::ALL.iter().map(|f| f.param_key()).collect();
        assert_eq!(keys, ["K", "t_max", "delta_t", "color1", "color2"]);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let spec = FieldId::TimeStep.spec();
        assert_eq!(spec.validate("0.5"), spec.validate("0.5"));
        assert_eq!(spec.validate("7"), spec.validate("7"));
    }
}
