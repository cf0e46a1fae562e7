use serde::{Deserialize, Serialize};

/// 힘 단위. 내부 기준은 뉴턴이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    Newton,
    Kilonewton,
    Dyne,
    PoundForce,
}

fn to_newton(value: f64, unit: ForceUnit) -> f64 {
    match unit {
        ForceUnit::Newton => value,
        ForceUnit::Kilonewton => value * 1000.0,
        ForceUnit::Dyne => value * 1e-5,
        ForceUnit::PoundForce => value * 4.448_221_615,
    }
}

fn from_newton(value_n: f64, unit: ForceUnit) -> f64 {
    match unit {
        ForceUnit::Newton => value_n,
        ForceUnit::Kilonewton => value_n / 1000.0,
        ForceUnit::Dyne => value_n / 1e-5,
        ForceUnit::PoundForce => value_n / 4.448_221_615,
    }
}

/// 힘을 다른 단위로 변환한다.
pub fn convert_force(value: f64, from: ForceUnit, to: ForceUnit) -> f64 {
    let n = to_newton(value, from);
    from_newton(n, to)
}
