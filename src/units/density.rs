use serde::{Deserialize, Serialize};

/// 밀도 단위. 내부 기준은 kg/m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KilogramPerCubicMeter,
    GramPerCubicCentimeter,
    PoundPerCubicFoot,
}

fn to_base(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KilogramPerCubicMeter => value,
        DensityUnit::GramPerCubicCentimeter => value * 1000.0,
        DensityUnit::PoundPerCubicFoot => value * 16.018_463_37,
    }
}

fn from_base(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KilogramPerCubicMeter => value,
        DensityUnit::GramPerCubicCentimeter => value / 1000.0,
        DensityUnit::PoundPerCubicFoot => value / 16.018_463_37,
    }
}

/// 밀도를 다른 단위로 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
