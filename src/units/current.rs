use serde::{Deserialize, Serialize};

/// 전류 단위. 내부 기준은 암페어이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrentUnit {
    Ampere,
    Milliampere,
    Microampere,
    Kiloampere,
}

fn to_ampere(value: f64, unit: CurrentUnit) -> f64 {
    match unit {
        CurrentUnit::Ampere => value,
        CurrentUnit::Milliampere => value / 1000.0,
        CurrentUnit::Microampere => value / 1_000_000.0,
        CurrentUnit::Kiloampere => value * 1000.0,
    }
}

fn from_ampere(value_a: f64, unit: CurrentUnit) -> f64 {
    match unit {
        CurrentUnit::Ampere => value_a,
        CurrentUnit::Milliampere => value_a * 1000.0,
        CurrentUnit::Microampere => value_a * 1_000_000.0,
        CurrentUnit::Kiloampere => value_a / 1000.0,
    }
}

/// 전류를 다른 단위로 변환한다.
pub fn convert_current(value: f64, from: CurrentUnit, to: CurrentUnit) -> f64 {
    let a = to_ampere(value, from);
    from_ampere(a, to)
}
