use serde::{Deserialize, Serialize};

/// 저항/리액턴스/임피던스 단위. 내부 기준은 옴이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResistanceUnit {
    Ohm,
    Milliohm,
    Kiloohm,
    Megaohm,
}

fn to_ohm(value: f64, unit: ResistanceUnit) -> f64 {
    match unit {
        ResistanceUnit::Ohm => value,
        ResistanceUnit::Milliohm => value / 1000.0,
        ResistanceUnit::Kiloohm => value * 1000.0,
        ResistanceUnit::Megaohm => value * 1_000_000.0,
    }
}

fn from_ohm(value_ohm: f64, unit: ResistanceUnit) -> f64 {
    match unit {
        ResistanceUnit::Ohm => value_ohm,
        ResistanceUnit::Milliohm => value_ohm * 1000.0,
        ResistanceUnit::Kiloohm => value_ohm / 1000.0,
        ResistanceUnit::Megaohm => value_ohm / 1_000_000.0,
    }
}

/// 저항값을 다른 단위로 변환한다.
pub fn convert_resistance(value: f64, from: ResistanceUnit, to: ResistanceUnit) -> f64 {
    let ohm = to_ohm(value, from);
    from_ohm(ohm, to)
}
