use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 파스칼(절대압)이다.
/// 베르누이 식의 정압/정체압은 모두 절대 기준으로 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    Kilopascal,
    Megapascal,
    Bar,
    Millibar,
    Psi,
    Atmosphere,
    MmHg,
}

const ATM_PA: f64 = 101_325.0;
const PSI_PA: f64 = 6_894.757_293;
const MMHG_PA: f64 = 133.322_387;

fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::Kilopascal => value * 1000.0,
        PressureUnit::Megapascal => value * 1_000_000.0,
        PressureUnit::Bar => value * 100_000.0,
        PressureUnit::Millibar => value * 100.0,
        PressureUnit::Psi => value * PSI_PA,
        PressureUnit::Atmosphere => value * ATM_PA,
        PressureUnit::MmHg => value * MMHG_PA,
    }
}

fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::Kilopascal => value_pa / 1000.0,
        PressureUnit::Megapascal => value_pa / 1_000_000.0,
        PressureUnit::Bar => value_pa / 100_000.0,
        PressureUnit::Millibar => value_pa / 100.0,
        PressureUnit::Psi => value_pa / PSI_PA,
        PressureUnit::Atmosphere => value_pa / ATM_PA,
        PressureUnit::MmHg => value_pa / MMHG_PA,
    }
}

/// 압력을 다른 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
