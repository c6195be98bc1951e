//! rgba() rendering of hex colors: clamping, fallbacks, shorthand and alpha forms.

use ascendimed_frontend::color::{
    self, clamp_opacity, opaque, parse_hex, try_with_opacity, with_opacity, with_opacity_opt,
    ColorError, Rgb, Rgba,
};
use pretty_assertions::assert_eq;

#[test]
fn opacity_is_clamped_into_unit_range() {
    assert_eq!(with_opacity("#2196F3", -5.0), "rgba(33, 150, 243, 0)");
    assert_eq!(with_opacity("#2196F3", 0.0), "rgba(33, 150, 243, 0)");
    assert_eq!(with_opacity("#2196F3", 0.5), "rgba(33, 150, 243, 0.5)");
    assert_eq!(with_opacity("#2196F3", 1.0), "rgba(33, 150, 243, 1)");
    assert_eq!(with_opacity("#2196F3", 5.0), "rgba(33, 150, 243, 1)");
    assert_eq!(with_opacity_opt(Some("#2196F3"), None), "rgba(33, 150, 243, 1)");
}

#[test]
fn negative_zero_renders_as_zero() {
    assert_eq!(with_opacity("#2196F3", -0.0), "rgba(33, 150, 243, 0)");
    assert_eq!(clamp_opacity(-0.0).to_string(), "0");
}

#[test]
fn missing_or_empty_color_falls_back_to_black() {
    assert_eq!(with_opacity_opt(None, Some(0.3)), "rgba(0, 0, 0, 0.3)");
    assert_eq!(with_opacity("", 0.3), "rgba(0, 0, 0, 0.3)");
    assert_eq!(with_opacity_opt(Some(""), Some(0.3)), "rgba(0, 0, 0, 0.3)");
    assert_eq!(with_opacity_opt(None, None), "rgba(0, 0, 0, 1)");
}

#[test]
fn fallback_still_clamps_opacity() {
    assert_eq!(with_opacity_opt(None, Some(7.0)), "rgba(0, 0, 0, 1)");
    assert_eq!(with_opacity("nope", -1.0), "rgba(0, 0, 0, 0)");
}

#[test]
fn unsupported_length_falls_back_to_black() {
    assert_eq!(with_opacity("#1234567", 0.2), "rgba(0, 0, 0, 0.2)");
    assert_eq!(with_opacity("#12", 0.2), "rgba(0, 0, 0, 0.2)");
    assert_eq!(with_opacity("#", 0.2), "rgba(0, 0, 0, 0.2)");
    assert_eq!(with_opacity("123456789", 0.2), "rgba(0, 0, 0, 0.2)");
}

#[test]
fn shorthand_rgb_doubles_each_digit() {
    assert_eq!(with_opacity("#f0a", 1.0), "rgba(255, 0, 170, 1)");
    assert_eq!(with_opacity("fff", 0.5), "rgba(255, 255, 255, 0.5)");
}

#[test]
fn shorthand_rgba_drops_alpha_after_doubling() {
    assert_eq!(with_opacity("#3f0a", 1.0), "rgba(255, 0, 170, 1)");
}

#[test]
fn six_digit_passthrough() {
    assert_eq!(with_opacity("2196F3", 0.12), "rgba(33, 150, 243, 0.12)");
    assert_eq!(with_opacity("#ff5722", 0.06), "rgba(255, 87, 34, 0.06)");
}

#[test]
fn eight_digit_drops_leading_alpha_pair() {
    assert_eq!(with_opacity("FF2196F3", 0.12), "rgba(33, 150, 243, 0.12)");
    assert_eq!(with_opacity("#002196F3", 0.12), "rgba(33, 150, 243, 0.12)");
}

#[test]
fn input_alpha_is_never_composed_with_opacity() {
    assert_eq!(with_opacity("#802196F3", 0.5), with_opacity("#2196F3", 0.5));
}

#[test]
fn repeated_calls_are_identical() {
    let first = with_opacity("#4CAF50", 0.08);
    let second = with_opacity("#4CAF50", 0.08);
    assert_eq!(first, second);
    assert_eq!(first, "rgba(76, 175, 80, 0.08)");
}

#[test]
fn leading_hash_is_optional() {
    assert_eq!(with_opacity("2196F3", 1.0), with_opacity("#2196F3", 1.0));
    assert_eq!(opaque("#2196F3"), "rgba(33, 150, 243, 1)");
}

#[test]
fn only_one_leading_hash_is_stripped() {
    // "#f0a" remains: four chars, so the second '#' lands in the dropped alpha pair.
    assert_eq!(with_opacity("##f0a", 1.0), "rgba(255, 0, 170, 1)");
    assert_eq!(with_opacity("##2196F3", 1.0), "rgba(0, 0, 0, 1)");
}

#[test]
fn non_hex_channels_render_nan() {
    assert_eq!(with_opacity("#zz0000", 1.0), "rgba(NaN, 0, 0, 1)");
    assert!(!Rgba::from_hex(Some("#zz0000"), 1.0).is_valid());
}

#[test]
fn channel_parse_keeps_leading_hex_digits() {
    // "0g" parses as 0, "fz" as 15.
    assert_eq!(with_opacity("#0gfz10", 1.0), "rgba(0, 15, 16, 1)");
}

#[test]
fn non_ascii_input_does_not_panic() {
    assert_eq!(with_opacity("#é0a", 1.0), "rgba(NaN, 0, 170, 1)");
    assert_eq!(with_opacity("日本語の色", 0.4), "rgba(0, 0, 0, 0.4)");
}

#[test]
fn nan_opacity_passes_through() {
    assert_eq!(with_opacity("#000", f64::NAN), "rgba(0, 0, 0, NaN)");
}

#[test]
fn rgba_display_matches_string_api() {
    let rgba = Rgba::from_hex(Some("#2196F3"), 0.12);
    assert_eq!(rgba.red, Some(33));
    assert_eq!(rgba.green, Some(150));
    assert_eq!(rgba.blue, Some(243));
    assert_eq!(rgba.to_string(), with_opacity("#2196F3", 0.12));
}

#[test]
fn strict_parse_accepts_all_supported_forms() {
    let expected = Rgb { red: 255, green: 0, blue: 170 };
    assert_eq!(parse_hex("#f0a"), Ok(expected));
    assert_eq!(parse_hex("3f0a"), Ok(expected));
    assert_eq!(parse_hex("#FF00AA"), Ok(expected));
    assert_eq!(parse_hex("80ff00aa"), Ok(expected));
}

#[test]
fn strict_parse_reports_errors() {
    assert_eq!(parse_hex(""), Err(ColorError::Empty));
    assert_eq!(parse_hex("#12345"), Err(ColorError::InvalidLength(5)));
    assert_eq!(
        parse_hex("#12x456"),
        Err(ColorError::InvalidDigit { position: 3, found: 'x' })
    );
}

#[test]
fn strict_render_matches_permissive_on_valid_input() {
    assert_eq!(
        try_with_opacity("#2196F3", 0.12).as_deref(),
        Ok("rgba(33, 150, 243, 0.12)")
    );
    assert_eq!(try_with_opacity("#2196F3", 3.0).as_deref(), Ok("rgba(33, 150, 243, 1)"));
    assert!(try_with_opacity("#zz0000", 1.0).is_err());
}

#[test]
fn default_opacity_is_opaque() {
    assert_eq!(color::DEFAULT_OPACITY, 1.0);
}

#[test]
fn rgba_serializes_unparsed_channel_as_null() {
    let json = serde_json::to_value(Rgba::from_hex(Some("#zz0000"), 0.5)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "red": null, "green": 0, "blue": 0, "alpha": 0.5 })
    );
}
