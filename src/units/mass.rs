use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 킬로그램이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Milligram,
    Tonne,
    Pound,
    Ounce,
}

fn to_kilogram(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value / 1000.0,
        MassUnit::Milligram => value / 1_000_000.0,
        MassUnit::Tonne => value * 1000.0,
        MassUnit::Pound => value * 0.453_592_37,
        MassUnit::Ounce => value * 0.028_349_523_125,
    }
}

fn from_kilogram(value_kg: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value_kg,
        MassUnit::Gram => value_kg * 1000.0,
        MassUnit::Milligram => value_kg * 1_000_000.0,
        MassUnit::Tonne => value_kg / 1000.0,
        MassUnit::Pound => value_kg / 0.453_592_37,
        MassUnit::Ounce => value_kg / 0.028_349_523_125,
    }
}

/// 질량을 다른 단위로 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let kg = to_kilogram(value, from);
    from_kilogram(kg, to)
}
