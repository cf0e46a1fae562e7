use serde::{Deserialize, Serialize};

/// 전기장 세기 단위. 내부 기준은 V/m이다. N/C는 V/m과 동일한 크기이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectricFieldUnit {
    VoltPerMeter,
    NewtonPerCoulomb,
    KilovoltPerMeter,
    VoltPerCentimeter,
}

fn to_base(value: f64, unit: ElectricFieldUnit) -> f64 {
    match unit {
        ElectricFieldUnit::VoltPerMeter | ElectricFieldUnit::NewtonPerCoulomb => value,
        ElectricFieldUnit::KilovoltPerMeter => value * 1000.0,
        ElectricFieldUnit::VoltPerCentimeter => value * 100.0,
    }
}

fn from_base(value: f64, unit: ElectricFieldUnit) -> f64 {
    match unit {
        ElectricFieldUnit::VoltPerMeter | ElectricFieldUnit::NewtonPerCoulomb => value,
        ElectricFieldUnit::KilovoltPerMeter => value / 1000.0,
        ElectricFieldUnit::VoltPerCentimeter => value / 100.0,
    }
}

/// 전기장 세기를 변환한다.
pub fn convert_electric_field(value: f64, from: ElectricFieldUnit, to: ElectricFieldUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
