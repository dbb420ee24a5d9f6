//! 변환 엔진 회귀 테스트. 대표 시나리오와 온도 고정점, 오류 경로를 검증한다.
use engineering_unit_converter::catalog;
use engineering_unit_converter::conversion::{
    convert, parse_category, swap_units, ConversionError,
};
use engineering_unit_converter::quantity::Category;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn length_km_to_mile() {
    let r = convert(Category::Length, 1.0, "km", "mile").expect("length");
    assert_close("km->mile", r, 0.621371, 1e-5);
}

#[test]
fn pressure_atm_to_psi() {
    let r = convert(Category::Pressure, 1.0, "atm", "psi").expect("pressure");
    assert_close("atm->psi", r, 14.6959, 1e-5);
}

#[test]
fn energy_kwh_to_btu() {
    let r = convert(Category::Energy, 1.0, "kWh", "BTU").expect("energy");
    assert_close("kWh->BTU", r, 3412.14, 1e-5);
}

#[test]
fn temperature_celsius_to_kelvin_fixed_point() {
    let r = convert(Category::Temperature, 0.0, "°C", "K (SI)").expect("temperature");
    assert_eq!(r, 273.15);
}

#[test]
fn temperature_fahrenheit_to_celsius_fixed_point() {
    let r = convert(Category::Temperature, 32.0, "°F", "°C").expect("temperature");
    assert_eq!(r, 0.0);
}

#[test]
fn temperature_boiling_point_f_to_k() {
    let r = convert(Category::Temperature, 212.0, "°F", "K (SI)").expect("temperature");
    assert_close("212F->K", r, 373.15, 1e-9);
}

#[test]
fn temperature_all_directed_pairs() {
    // 섭씨 100도를 기준으로 여섯 방향을 교차 검증한다.
    let c = 100.0;
    let f = convert(Category::Temperature, c, "°C", "°F").unwrap();
    assert_close("C->F", f, 212.0, 1e-12);
    let k = convert(Category::Temperature, c, "°C", "K (SI)").unwrap();
    assert_close("C->K", k, 373.15, 1e-12);
    assert_close(
        "F->C",
        convert(Category::Temperature, f, "°F", "°C").unwrap(),
        c,
        1e-9,
    );
    assert_close(
        "K->C",
        convert(Category::Temperature, k, "K (SI)", "°C").unwrap(),
        c,
        1e-9,
    );
    assert_close(
        "F->K",
        convert(Category::Temperature, f, "°F", "K (SI)").unwrap(),
        k,
        1e-9,
    );
    assert_close(
        "K->F",
        convert(Category::Temperature, k, "K (SI)", "°F").unwrap(),
        f,
        1e-9,
    );
}

#[test]
fn identity_returns_value_exactly() {
    // 같은 단위 쌍은 모든 물리량에서 값이 그대로 나와야 한다.
    let v = 12.3456789;
    for category in Category::ALL {
        let units = catalog::units_for(category);
        for unit in units {
            let r = convert(category, v, unit, unit).expect("identity");
            assert_eq!(r, v, "{} {unit}", category.label());
        }
    }
}

#[test]
fn unknown_unit_is_rejected() {
    let err = convert(Category::Length, 1.0, "furlong", "m (SI)").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(_)), "{err}");
}

#[test]
fn unknown_unit_same_on_both_sides_is_rejected() {
    // 동일 기호라도 카탈로그에 없으면 항등 반환 대신 오류여야 한다.
    let err = convert(Category::Mass, 1.0, "stone", "stone").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(_)), "{err}");
}

#[test]
fn unit_from_other_category_is_rejected() {
    let err = convert(Category::Length, 1.0, "m (SI)", "psi").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(_)), "{err}");
}

#[test]
fn non_finite_value_is_rejected() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = convert(Category::Length, v, "m (SI)", "km").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidValue(_)), "{err}");
    }
}

#[test]
fn parse_category_accepts_every_label() {
    for category in Category::ALL {
        let parsed = parse_category(category.label()).expect("label");
        assert_eq!(parsed, category);
    }
}

#[test]
fn parse_category_rejects_unknown_label() {
    let err = parse_category("Luminosity").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownCategory(_)), "{err}");
}

#[test]
fn swap_units_is_an_involution() {
    let (from, to) = ("km", "mile");
    let swapped = swap_units(from, to);
    assert_eq!(swapped, ("mile", "km"));
    assert_eq!(swap_units(swapped.0, swapped.1), (from, to));
}
