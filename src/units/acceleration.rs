use serde::{Deserialize, Serialize};

/// 가속도 단위. 내부 기준은 m/s²이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccelerationUnit {
    MeterPerSecondSquared,
    CentimeterPerSecondSquared,
    FootPerSecondSquared,
    StandardGravity,
}

fn to_base(value: f64, unit: AccelerationUnit) -> f64 {
    match unit {
        AccelerationUnit::MeterPerSecondSquared => value,
        AccelerationUnit::CentimeterPerSecondSquared => value / 100.0,
        AccelerationUnit::FootPerSecondSquared => value * 0.3048,
        AccelerationUnit::StandardGravity => value * 9.806_65,
    }
}

fn from_base(value: f64, unit: AccelerationUnit) -> f64 {
    match unit {
        AccelerationUnit::MeterPerSecondSquared => value,
        AccelerationUnit::CentimeterPerSecondSquared => value * 100.0,
        AccelerationUnit::FootPerSecondSquared => value / 0.3048,
        AccelerationUnit::StandardGravity => value / 9.806_65,
    }
}

/// 가속도를 다른 단위로 변환한다.
pub fn convert_acceleration(value: f64, from: AccelerationUnit, to: AccelerationUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
