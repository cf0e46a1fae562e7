use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 m²이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareCentimeter,
    SquareMillimeter,
    SquareInch,
    SquareFoot,
}

fn to_base(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value,
        AreaUnit::SquareCentimeter => value * 1e-4,
        AreaUnit::SquareMillimeter => value * 1e-6,
        AreaUnit::SquareInch => value * 0.000_645_16,
        AreaUnit::SquareFoot => value * 0.092_903_04,
    }
}

fn from_base(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value,
        AreaUnit::SquareCentimeter => value / 1e-4,
        AreaUnit::SquareMillimeter => value / 1e-6,
        AreaUnit::SquareInch => value / 0.000_645_16,
        AreaUnit::SquareFoot => value / 0.092_903_04,
    }
}

/// 면적을 다른 단위로 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
