use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    Milliliter,
    CubicFoot,
}

fn to_base(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::Milliliter => value / 1_000_000.0,
        VolumeUnit::CubicFoot => value * 0.028_316_846_592,
    }
}

fn from_base(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value * 1000.0,
        VolumeUnit::Milliliter => value * 1_000_000.0,
        VolumeUnit::CubicFoot => value / 0.028_316_846_592,
    }
}

/// 체적을 다른 단위로 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
