use serde::{Deserialize, Serialize};

/// 전력/열량률 단위. 내부 기준은 와트이다.
/// 피상전력(VA)과 무효전력(var)도 수치상 와트와 같은 배율을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Milliwatt,
    Kilowatt,
    Megawatt,
    Horsepower,
    BtuPerHour,
}

const HP_W: f64 = 745.699_872;
const BTU_PER_H_W: f64 = 0.293_071_07;

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Milliwatt => value / 1000.0,
        PowerUnit::Kilowatt => value * 1000.0,
        PowerUnit::Megawatt => value * 1_000_000.0,
        PowerUnit::Horsepower => value * HP_W,
        PowerUnit::BtuPerHour => value * BTU_PER_H_W,
    }
}

fn from_watt(value_w: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value_w,
        PowerUnit::Milliwatt => value_w * 1000.0,
        PowerUnit::Kilowatt => value_w / 1000.0,
        PowerUnit::Megawatt => value_w / 1_000_000.0,
        PowerUnit::Horsepower => value_w / HP_W,
        PowerUnit::BtuPerHour => value_w / BTU_PER_H_W,
    }
}

/// 전력을 다른 단위로 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let w = to_watt(value, from);
    from_watt(w, to)
}
