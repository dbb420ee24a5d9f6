use crate::catalog;
use crate::quantity::Category;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 물리량 라벨
    UnknownCategory(String),
    /// 해당 물리량에 등록되지 않은 단위 기호
    UnknownUnit(String),
    /// 유한한 실수가 아닌 입력 값 (NaN, ±∞)
    InvalidValue(String),
    /// 선형 계수가 없는 물리량에 계수를 요청함
    NotLinear(&'static str),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownCategory(c) => write!(f, "알 수 없는 물리량: {c}"),
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::InvalidValue(v) => write!(f, "유효하지 않은 값: {v}"),
            ConversionError::NotLinear(q) => write!(f, "선형 계수가 없는 물리량: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 온도 단위. 아핀 변환 전용이며 카탈로그의 기호와 1:1 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

fn parse_temperature_unit(symbol: &str) -> Result<TemperatureUnit, ConversionError> {
    match symbol {
        "K (SI)" => Ok(TemperatureUnit::Kelvin),
        "°C" => Ok(TemperatureUnit::Celsius),
        "°F" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(symbol.to_string())),
    }
}

/// 물리량 라벨 문자열을 enum으로 변환한다. UI가 전달하는 문자열 경계이다.
pub fn parse_category(label: &str) -> Result<Category, ConversionError> {
    Category::ALL
        .into_iter()
        .find(|c| c.label() == label)
        .ok_or_else(|| ConversionError::UnknownCategory(label.to_string()))
}

/// 온도를 방향별 아핀 공식으로 변환한다. 같은 단위를 포함해 공식에
/// 해당하지 않는 조합은 값을 그대로 돌려준다.
fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;
    match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Celsius, Kelvin) => value + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        _ => value,
    }
}

/// `value`를 `from_unit`에서 `to_unit`으로 변환한다.
///
/// 선형 물리량은 SI 계수의 비율로, 온도는 방향별 아핀 공식으로 계산한다.
/// 두 단위가 같으면 값을 그대로 반환한다. 단위 기호는 계산 전에 카탈로그로
/// 검증하므로 등록되지 않은 기호가 조용히 통과하는 일은 없다.
pub fn convert(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value.to_string()));
    }
    match category {
        Category::Temperature => {
            let from = parse_temperature_unit(from_unit)?;
            let to = parse_temperature_unit(to_unit)?;
            Ok(convert_temperature(value, from, to))
        }
        _ => {
            let from_factor = catalog::factor_for(category, from_unit)?;
            let to_factor = catalog::factor_for(category, to_unit)?;
            if from_unit == to_unit {
                return Ok(value);
            }
            Ok(value * from_factor / to_factor)
        }
    }
}

/// 선택된 (from, to) 단위 쌍을 맞바꾼다. 실패 경로가 없는 순수 함수이다.
pub fn swap_units<'a>(from_unit: &'a str, to_unit: &'a str) -> (&'a str, &'a str) {
    (to_unit, from_unit)
}
