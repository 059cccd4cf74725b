use sci_notation::types::{NotationConfig, NotationOptions};
use sci_notation::{engineering_notation, format_value};

fn eng(value: f64, options: &NotationOptions) -> String {
    format_value(value, &NotationConfig::engineering(options.clone())).unwrap()
}

/// Split a plain `{mantissa}x10^{exponent}` result, treating a suppressed mantissa as 1
fn split_plain(formatted: &str) -> (f64, i32) {
    let (mantissa, exponent) = match formatted.split_once("x10^") {
        Some((mantissa, exponent)) => (mantissa.parse().unwrap(), exponent),
        None => (1.0, formatted.trim_start_matches("10^")),
    };
    (mantissa, exponent.parse().unwrap())
}

#[test]
fn test_exponent_multiple_of_three() {
    let options = NotationOptions::default();
    assert_eq!(eng(1500.0, &options), "1.5x10^3");
    assert_eq!(eng(12345.0, &options), "12.345x10^3");
    assert_eq!(eng(0.015, &options), "15x10^-3");
    assert_eq!(eng(0.00015, &options), "150x10^-6");
    assert_eq!(eng(6.02214076e23, &options), "602.214x10^21");
    assert_eq!(eng(1e-7, &options), "100x10^-9");
}

#[test]
fn test_unit_mantissa() {
    let options = NotationOptions::default();
    assert_eq!(eng(1e6, &options), "10^6");
    assert_eq!(eng(1e6, &options.with_e_notation(true)), "1E6");
}

#[test]
fn test_significant_figures() {
    let three = NotationOptions::default().with_significant_figures(Some(3));
    assert_eq!(eng(12345.0, &three), "12.3x10^3");
    assert_eq!(eng(100.0, &three), "100x10^0");

    let zero = NotationOptions::default().with_significant_figures(Some(0));
    assert_eq!(eng(12345.0, &zero), "12x10^3");

    let two_latex = NotationOptions::default()
        .with_latex(true)
        .with_significant_figures(Some(2));
    assert_eq!(eng(45600.0, &two_latex), "46$\\times10^{3}$");
    assert_eq!(eng(0.5, &two_latex), "500$\\times10^{-3}$");

    let kept = NotationOptions::default()
        .with_significant_figures(Some(2))
        .with_suppress_extras(false);
    assert_eq!(eng(4.2e-5, &kept), "42x10^-6");
    assert_eq!(
        eng(1.0, &kept.with_significant_figures(Some(3))),
        "1.000x10^0"
    );
}

#[test]
fn test_lower_case_e() {
    let options = NotationOptions::default()
        .with_e_notation(true)
        .with_upper_case(false);
    assert_eq!(eng(2.5e-8, &options), "25e-9");
}

#[test]
fn test_rollover_moves_three_places() {
    assert_eq!(eng(999.9996, &NotationOptions::default()), "10^3");
    let three = NotationOptions::default().with_significant_figures(Some(3));
    assert_eq!(eng(999.7, &three), "10^3");
}

#[test]
fn test_rollover_keeps_requested_figures() {
    let four = NotationOptions::default()
        .with_significant_figures(Some(4))
        .with_suppress_extras(false);
    assert_eq!(eng(999.96, &four), "1.0000x10^3");
    assert_eq!(eng(999.96, &four), eng(1000.0, &four));

    let five = four.with_significant_figures(Some(5));
    assert_eq!(eng(999.9996, &five), "1.00000x10^3");
    assert_eq!(eng(999.9996, &five), eng(1000.0, &five));
}

#[test]
fn test_negative_value() {
    assert_eq!(eng(-0.015, &NotationOptions::default()), "-15x10^-3");
}

#[test]
fn test_mantissa_range_and_reconstruction() {
    let options = NotationOptions::default();
    let mut value = 3.7e-12;
    while value < 1e15 {
        let formatted = eng(value, &options);
        let (mantissa, exponent) = split_plain(&formatted);
        assert_eq!(exponent.rem_euclid(3), 0, "{formatted}");
        assert!((1.0..1000.0).contains(&mantissa), "{formatted}");
        let rebuilt = mantissa * 10f64.powi(exponent);
        assert!(((rebuilt - value) / value).abs() < 1e-5, "{formatted} vs {value}");
        value *= 7.3;
    }
}

#[test]
fn test_sequence_entry_point() {
    let result = engineering_notation([1.0, 10.0, 100.0], &NotationOptions::default()).unwrap();
    assert_eq!(result.into_vec(), vec!["10^0", "10x10^0", "100x10^0"]);
}
