use serde::{Deserialize, Serialize};

/// 정전용량 단위. 내부 기준은 패럿이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacitanceUnit {
    Farad,
    Millifarad,
    Microfarad,
    Nanofarad,
    Picofarad,
}

fn to_farad(value: f64, unit: CapacitanceUnit) -> f64 {
    match unit {
        CapacitanceUnit::Farad => value,
        CapacitanceUnit::Millifarad => value * 1e-3,
        CapacitanceUnit::Microfarad => value * 1e-6,
        CapacitanceUnit::Nanofarad => value * 1e-9,
        CapacitanceUnit::Picofarad => value * 1e-12,
    }
}

fn from_farad(value_f: f64, unit: CapacitanceUnit) -> f64 {
    match unit {
        CapacitanceUnit::Farad => value_f,
        CapacitanceUnit::Millifarad => value_f / 1e-3,
        CapacitanceUnit::Microfarad => value_f / 1e-6,
        CapacitanceUnit::Nanofarad => value_f / 1e-9,
        CapacitanceUnit::Picofarad => value_f / 1e-12,
    }
}

/// 정전용량을 다른 단위로 변환한다.
pub fn convert_capacitance(value: f64, from: CapacitanceUnit, to: CapacitanceUnit) -> f64 {
    let f = to_farad(value, from);
    from_farad(f, to)
}
