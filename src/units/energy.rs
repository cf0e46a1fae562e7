use serde::{Deserialize, Serialize};

/// 에너지 단위. 내부 기준은 줄이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    Calorie,
    KilowattHour,
    Btu,
}

fn to_joule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value,
        EnergyUnit::Kilojoule => value * 1000.0,
        EnergyUnit::Calorie => value * 4.184,
        EnergyUnit::KilowattHour => value * 3_600_000.0,
        EnergyUnit::Btu => value * 1055.056,
    }
}

fn from_joule(value_j: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value_j,
        EnergyUnit::Kilojoule => value_j / 1000.0,
        EnergyUnit::Calorie => value_j / 4.184,
        EnergyUnit::KilowattHour => value_j / 3_600_000.0,
        EnergyUnit::Btu => value_j / 1055.056,
    }
}

/// 에너지를 다른 단위로 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let j = to_joule(value, from);
    from_joule(j, to)
}
