use serde::{Deserialize, Serialize};

/// 인덕턴스 단위. 내부 기준은 헨리이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InductanceUnit {
    Henry,
    Millihenry,
    Microhenry,
}

fn to_henry(value: f64, unit: InductanceUnit) -> f64 {
    match unit {
        InductanceUnit::Henry => value,
        InductanceUnit::Millihenry => value / 1000.0,
        InductanceUnit::Microhenry => value / 1_000_000.0,
    }
}

fn from_henry(value_h: f64, unit: InductanceUnit) -> f64 {
    match unit {
        InductanceUnit::Henry => value_h,
        InductanceUnit::Millihenry => value_h * 1000.0,
        InductanceUnit::Microhenry => value_h * 1_000_000.0,
    }
}

/// 인덕턴스를 다른 단위로 변환한다.
pub fn convert_inductance(value: f64, from: InductanceUnit, to: InductanceUnit) -> f64 {
    let h = to_henry(value, from);
    from_henry(h, to)
}
