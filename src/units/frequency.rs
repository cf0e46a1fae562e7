use serde::{Deserialize, Serialize};

/// 주파수 단위. 내부 기준은 헤르츠이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequencyUnit {
    Hertz,
    Kilohertz,
    Megahertz,
    Gigahertz,
}

fn to_hertz(value: f64, unit: FrequencyUnit) -> f64 {
    match unit {
        FrequencyUnit::Hertz => value,
        FrequencyUnit::Kilohertz => value * 1e3,
        FrequencyUnit::Megahertz => value * 1e6,
        FrequencyUnit::Gigahertz => value * 1e9,
    }
}

fn from_hertz(value_hz: f64, unit: FrequencyUnit) -> f64 {
    match unit {
        FrequencyUnit::Hertz => value_hz,
        FrequencyUnit::Kilohertz => value_hz / 1e3,
        FrequencyUnit::Megahertz => value_hz / 1e6,
        FrequencyUnit::Gigahertz => value_hz / 1e9,
    }
}

/// 주파수를 다른 단위로 변환한다.
pub fn convert_frequency(value: f64, from: FrequencyUnit, to: FrequencyUnit) -> f64 {
    let hz = to_hertz(value, from);
    from_hertz(hz, to)
}
