use serde::{Deserialize, Serialize};

/// 전하량 단위. 내부 기준은 쿨롱이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeUnit {
    Coulomb,
    Millicoulomb,
    Microcoulomb,
    Nanocoulomb,
}

fn to_coulomb(value: f64, unit: ChargeUnit) -> f64 {
    match unit {
        ChargeUnit::Coulomb => value,
        ChargeUnit::Millicoulomb => value * 1e-3,
        ChargeUnit::Microcoulomb => value * 1e-6,
        ChargeUnit::Nanocoulomb => value * 1e-9,
    }
}

fn from_coulomb(value_c: f64, unit: ChargeUnit) -> f64 {
    match unit {
        ChargeUnit::Coulomb => value_c,
        ChargeUnit::Millicoulomb => value_c / 1e-3,
        ChargeUnit::Microcoulomb => value_c / 1e-6,
        ChargeUnit::Nanocoulomb => value_c / 1e-9,
    }
}

/// 전하량을 다른 단위로 변환한다.
pub fn convert_charge(value: f64, from: ChargeUnit, to: ChargeUnit) -> f64 {
    let c = to_coulomb(value, from);
    from_coulomb(c, to)
}
