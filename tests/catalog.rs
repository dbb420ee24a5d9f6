//! 단위 카탈로그 불변식 검증. 기호 중복, 기준 단위, 왕복 변환을 확인한다.
use std::collections::HashSet;

use engineering_unit_converter::catalog::{base_unit, factor_for, linear_units, units_for};
use engineering_unit_converter::conversion::{convert, ConversionError};
use engineering_unit_converter::quantity::Category;

#[test]
fn every_category_has_at_least_two_units() {
    for category in Category::ALL {
        let units = units_for(category);
        assert!(
            units.len() >= 2,
            "{} has {} units",
            category.label(),
            units.len()
        );
    }
}

#[test]
fn symbols_are_unique_within_each_category() {
    for category in Category::ALL {
        let units = units_for(category);
        let distinct: HashSet<&str> = units.iter().copied().collect();
        assert_eq!(distinct.len(), units.len(), "{}", category.label());
    }
}

#[test]
fn each_linear_category_has_exactly_one_base_unit_listed_first() {
    for category in Category::ALL {
        let Some(table) = linear_units(category) else {
            continue;
        };
        let base_count = table.iter().filter(|u| u.factor == 1.0).count();
        assert_eq!(base_count, 1, "{}", category.label());
        assert_eq!(table[0].factor, 1.0, "{}", category.label());
        assert_eq!(base_unit(category), table[0].symbol);
    }
}

#[test]
fn factors_are_positive_and_finite() {
    for category in Category::ALL {
        let Some(table) = linear_units(category) else {
            continue;
        };
        for unit in table {
            assert!(
                unit.factor.is_finite() && unit.factor > 0.0,
                "{} {}",
                category.label(),
                unit.symbol
            );
        }
    }
}

#[test]
fn temperature_has_no_linear_factors() {
    assert!(!Category::Temperature.is_linear());
    assert!(linear_units(Category::Temperature).is_none());
    let err = factor_for(Category::Temperature, "°C").unwrap_err();
    assert!(matches!(err, ConversionError::NotLinear(_)), "{err}");
    assert_eq!(units_for(Category::Temperature), vec!["K (SI)", "°C", "°F"]);
}

#[test]
fn factor_lookup_rejects_unregistered_symbol() {
    let err = factor_for(Category::Volume, "barrel").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(_)), "{err}");
}

#[test]
fn converting_to_base_unit_multiplies_by_factor() {
    let v = 2.5;
    for category in Category::ALL {
        let Some(table) = linear_units(category) else {
            continue;
        };
        let base = base_unit(category);
        for unit in table {
            let r = convert(category, v, unit.symbol, base).expect("to base");
            let expected = v * unit.factor;
            let diff = (r - expected).abs();
            assert!(
                diff <= 1e-12 * expected.abs().max(1.0),
                "{} {}: {r} vs {expected}",
                category.label(),
                unit.symbol
            );
        }
    }
}

#[test]
fn linear_round_trips_recover_the_input() {
    // 모든 선형 물리량의 모든 단위 쌍에서 왕복 오차가 1e-9(상대) 이내여야 한다.
    let samples = [1.0, 123.456, -7.25, 0.0];
    for category in Category::ALL {
        let Some(table) = linear_units(category) else {
            continue;
        };
        for from in table {
            for to in table {
                for v in samples {
                    let out = convert(category, v, from.symbol, to.symbol).expect("forward");
                    let back = convert(category, out, to.symbol, from.symbol).expect("back");
                    let diff = (back - v).abs();
                    assert!(
                        diff <= 1e-9 * v.abs().max(1.0),
                        "{} {}->{} v={v}: back={back}",
                        category.label(),
                        from.symbol,
                        to.symbol
                    );
                }
            }
        }
    }
}

#[test]
fn temperature_round_trips_recover_the_input() {
    let units = units_for(Category::Temperature);
    for from in &units {
        for to in &units {
            for v in [-40.0, 0.0, 36.6, 451.0] {
                let out = convert(Category::Temperature, v, from, to).expect("forward");
                let back = convert(Category::Temperature, out, to, from).expect("back");
                let diff = (back - v).abs();
                assert!(
                    diff <= 1e-9 * v.abs().max(1.0),
                    "{from}->{to} v={v}: back={back}"
                );
            }
        }
    }
}
