use serde::{Deserialize, Serialize};

/// 운동량/충격량 단위. 내부 기준은 kg·m/s이며 N·s와 크기가 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentumUnit {
    KilogramMeterPerSecond,
    NewtonSecond,
    PoundFootPerSecond,
}

fn to_base(value: f64, unit: MomentumUnit) -> f64 {
    match unit {
        MomentumUnit::KilogramMeterPerSecond | MomentumUnit::NewtonSecond => value,
        MomentumUnit::PoundFootPerSecond => value * 0.138_254_954_376,
    }
}

fn from_base(value: f64, unit: MomentumUnit) -> f64 {
    match unit {
        MomentumUnit::KilogramMeterPerSecond | MomentumUnit::NewtonSecond => value,
        MomentumUnit::PoundFootPerSecond => value / 0.138_254_954_376,
    }
}

/// 운동량을 다른 단위로 변환한다.
pub fn convert_momentum(value: f64, from: MomentumUnit, to: MomentumUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
