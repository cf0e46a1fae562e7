use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    KilometerPerHour,
    FootPerSecond,
    MilePerHour,
    Knot,
}

fn to_base(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value / 3.6,
        VelocityUnit::FootPerSecond => value * 0.3048,
        VelocityUnit::MilePerHour => value * 0.447_04,
        VelocityUnit::Knot => value * 0.514_444_444,
    }
}

fn from_base(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value * 3.6,
        VelocityUnit::FootPerSecond => value / 0.3048,
        VelocityUnit::MilePerHour => value / 0.447_04,
        VelocityUnit::Knot => value / 0.514_444_444,
    }
}

/// 속도를 다른 단위로 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
