//! 물리량별 단위 카탈로그. 프로세스 시작 시점에 고정되는 정적 데이터이며
//! 이후 어떤 경로로도 변경되지 않는다.

use crate::conversion::ConversionError;
use crate::quantity::Category;

/// 단위 하나의 정의. `factor`는 SI 기준 단위 환산 계수이다.
/// (해당 단위의 값 × factor = 기준 단위 값)
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    pub symbol: &'static str,
    pub factor: f64,
}

const fn unit(symbol: &'static str, factor: f64) -> UnitDef {
    UnitDef { symbol, factor }
}

/// 각 선형 물리량의 단위 표. 첫 항목이 기준(SI) 단위이며 factor는 항상 1이다.
pub const LENGTH_UNITS: &[UnitDef] = &[
    unit("m (SI)", 1.0),
    unit("cm", 0.01),
    unit("mm", 0.001),
    unit("km", 1000.0),
    unit("inch", 0.0254),
    unit("ft", 0.3048),
    unit("mile", 1609.344),
    unit("yard", 0.9144),
];

pub const PRESSURE_UNITS: &[UnitDef] = &[
    unit("Pa (SI)", 1.0),
    unit("kPa", 1000.0),
    unit("bar", 100_000.0),
    unit("psi", 6_894.757),
    unit("atm", 101_325.0),
    unit("mmHg (Torr)", 133.322),
    unit("mmH₂O", 9.80665),
    unit("inHg", 3_386.389),
    unit("kg/cm²", 98_066.5),
];

pub const AREA_UNITS: &[UnitDef] = &[
    unit("m² (SI)", 1.0),
    unit("cm²", 0.0001),
    unit("mm²", 0.000001),
    unit("ft²", 0.092903),
    unit("in²", 0.00064516),
    unit("hectare", 10_000.0),
];

pub const VOLUME_UNITS: &[UnitDef] = &[
    unit("m³ (SI)", 1.0),
    unit("cm³", 0.000001),
    unit("mm³", 0.000000001),
    unit("km³", 1_000_000_000.0),
    unit("L", 0.001),
    unit("mL", 0.000001),
    unit("ft³", 0.0283168),
    unit("in³", 0.0000163871),
    unit("gal", 0.00378541),
];

pub const WEIGHT_UNITS: &[UnitDef] = &[
    unit("N (SI)", 1.0),
    unit("kgf", 9.80665),
    unit("lbf", 4.44822),
];

pub const MASS_UNITS: &[UnitDef] = &[
    unit("kg (SI)", 1.0),
    unit("g", 0.001),
    unit("mg", 0.000001),
    unit("t", 1000.0),
    unit("lb", 0.453592),
    unit("oz", 0.0283495),
];

pub const VELOCITY_UNITS: &[UnitDef] = &[
    unit("m/s (SI)", 1.0),
    unit("km/h", 0.277778),
    unit("mph", 0.44704),
    unit("ft/s", 0.3048),
    unit("in/s", 0.0254),
];

pub const VOLUMETRIC_FLOW_UNITS: &[UnitDef] = &[
    unit("m³/s (SI)", 1.0),
    unit("L/min", 0.001 / 60.0),
    unit("ft³/s", 0.0283168),
    unit("gal/min", 0.00378541 / 60.0),
];

pub const MASS_FLOW_UNITS: &[UnitDef] = &[
    unit("kg/s (SI)", 1.0),
    unit("g/s", 0.001),
    unit("lb/s", 0.453592),
    unit("t/h", 0.277778),
];

pub const POWER_UNITS: &[UnitDef] = &[
    unit("W (SI)", 1.0),
    unit("kW", 1000.0),
    unit("hp", 745.7),
    unit("BTU/h", 0.293071),
    unit("cal/s", 4.184),
    unit("kcal/s", 4184.0),
];

pub const ENERGY_UNITS: &[UnitDef] = &[
    unit("J (SI)", 1.0),
    unit("kJ", 1000.0),
    unit("cal", 4.184),
    unit("kcal", 4184.0),
    unit("Wh", 3600.0),
    unit("kWh", 3_600_000.0),
    unit("BTU", 1055.06),
];

/// 온도 단위 기호. 아핀 변환을 사용하므로 계수 표가 없다.
pub const TEMPERATURE_UNITS: &[&str] = &["K (SI)", "°C", "°F"];

/// 선형 물리량의 단위 표를 반환한다. 온도는 None.
pub fn linear_units(category: Category) -> Option<&'static [UnitDef]> {
    match category {
        Category::Length => Some(LENGTH_UNITS),
        Category::Temperature => None,
        Category::Pressure => Some(PRESSURE_UNITS),
        Category::Area => Some(AREA_UNITS),
        Category::Volume => Some(VOLUME_UNITS),
        Category::Weight => Some(WEIGHT_UNITS),
        Category::Mass => Some(MASS_UNITS),
        Category::Velocity => Some(VELOCITY_UNITS),
        Category::VolumetricFlowRate => Some(VOLUMETRIC_FLOW_UNITS),
        Category::MassFlowRate => Some(MASS_FLOW_UNITS),
        Category::Power => Some(POWER_UNITS),
        Category::Energy => Some(ENERGY_UNITS),
    }
}

/// 물리량의 단위 기호 목록을 표시 순서대로 반환한다. 빈 목록은 없다.
///
/// 물리량 자체가 enum 으로 닫혀 있으므로 이 함수는 전 범위에서 정의된다.
/// 문자열 라벨 경계의 검증은 `conversion::parse_category`가 담당한다.
pub fn units_for(category: Category) -> Vec<&'static str> {
    match linear_units(category) {
        Some(table) => table.iter().map(|u| u.symbol).collect(),
        None => TEMPERATURE_UNITS.to_vec(),
    }
}

/// 물리량의 기준(SI) 단위 기호를 반환한다. 목록의 첫 항목이다.
pub fn base_unit(category: Category) -> &'static str {
    match linear_units(category) {
        Some(table) => table[0].symbol,
        None => TEMPERATURE_UNITS[0],
    }
}

/// 선형 물리량에서 단위 기호의 SI 환산 계수를 조회한다.
///
/// 등록되지 않은 기호는 `UnknownUnit`, 온도에 대한 호출은 `NotLinear`로
/// 실패한다. 온도는 계수 개념이 없다.
pub fn factor_for(category: Category, symbol: &str) -> Result<f64, ConversionError> {
    let table = linear_units(category)
        .ok_or(ConversionError::NotLinear(category.label()))?;
    table
        .iter()
        .find(|u| u.symbol == symbol)
        .map(|u| u.factor)
        .ok_or_else(|| ConversionError::UnknownUnit(symbol.to_string()))
}
