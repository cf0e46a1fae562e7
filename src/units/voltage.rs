use serde::{Deserialize, Serialize};

/// 전압 단위. 내부 기준은 볼트이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoltageUnit {
    Volt,
    Millivolt,
    Kilovolt,
    Megavolt,
}

fn to_volt(value: f64, unit: VoltageUnit) -> f64 {
    match unit {
        VoltageUnit::Volt => value,
        VoltageUnit::Millivolt => value / 1000.0,
        VoltageUnit::Kilovolt => value * 1000.0,
        VoltageUnit::Megavolt => value * 1_000_000.0,
    }
}

fn from_volt(value_v: f64, unit: VoltageUnit) -> f64 {
    match unit {
        VoltageUnit::Volt => value_v,
        VoltageUnit::Millivolt => value_v * 1000.0,
        VoltageUnit::Kilovolt => value_v / 1000.0,
        VoltageUnit::Megavolt => value_v / 1_000_000.0,
    }
}

/// 전압을 다른 단위로 변환한다.
pub fn convert_voltage(value: f64, from: VoltageUnit, to: VoltageUnit) -> f64 {
    let v = to_volt(value, from);
    from_volt(v, to)
}
