use serde::{Deserialize, Serialize};

/// 시간 단위. 내부 기준은 초이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Millisecond,
    Minute,
    Hour,
}

fn to_second(value: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => value,
        TimeUnit::Millisecond => value / 1000.0,
        TimeUnit::Minute => value * 60.0,
        TimeUnit::Hour => value * 3600.0,
    }
}

fn from_second(value_s: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => value_s,
        TimeUnit::Millisecond => value_s * 1000.0,
        TimeUnit::Minute => value_s / 60.0,
        TimeUnit::Hour => value_s / 3600.0,
    }
}

/// 시간을 다른 단위로 변환한다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    let s = to_second(value, from);
    from_second(s, to)
}
