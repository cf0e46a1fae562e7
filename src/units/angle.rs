use serde::{Deserialize, Serialize};

/// 각도 단위. 내부 기준은 도(degree)이며, 공식 계산 직전에만 라디안으로 바꾼다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    Degree,
    Radian,
}

fn to_degree(value: f64, unit: AngleUnit) -> f64 {
    match unit {
        AngleUnit::Degree => value,
        AngleUnit::Radian => value.to_degrees(),
    }
}

fn from_degree(value_deg: f64, unit: AngleUnit) -> f64 {
    match unit {
        AngleUnit::Degree => value_deg,
        AngleUnit::Radian => value_deg.to_radians(),
    }
}

/// 각도를 다른 단위로 변환한다.
pub fn convert_angle(value: f64, from: AngleUnit, to: AngleUnit) -> f64 {
    let deg = to_degree(value, from);
    from_degree(deg, to)
}
