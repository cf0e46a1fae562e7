use std::f64::consts::PI;

use crate::constants::{COPPER_DENSITY, COPPER_RESISTIVITY};
use crate::format::format_value;
use crate::material_db;
use crate::units::{convert_length, LengthUnit};

/// 도체 단면을 지정하는 방법.
#[derive(Debug, Clone, Copy)]
pub enum DiameterSpec {
    /// 직경 직접 입력
    Direct { value: f64, unit: LengthUnit },
    /// AWG 게이지 번호 (4/0 = -3)
    Awg(i32),
}

/// 구리 전선 중량 계산 입력.
#[derive(Debug, Clone)]
pub struct WireWeightInput {
    pub diameter: DiameterSpec,
    pub length: f64,
    pub length_unit: LengthUnit,
}

/// 구리 전선 중량/저항 계산 결과.
#[derive(Debug, Clone)]
pub struct WireWeightResult {
    /// 도체 직경 [m]
    pub diameter_m: f64,
    /// 단면적 [m²]
    pub area_m2: f64,
    /// 중량 [kg]
    pub weight_kg: f64,
    /// 직류 저항 [Ω]
    pub resistance_ohm: f64,
    pub steps: Vec<String>,
}

/// 전선 계산 오류.
#[derive(Debug, Clone)]
pub enum WireWeightError {
    /// 직경이 0 이하
    NonPositiveDiameter,
    /// 길이가 0 이하
    NonPositiveLength,
    /// 지원 범위 밖 게이지 번호
    UnknownGauge(i32),
}

impl std::fmt::Display for WireWeightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireWeightError::NonPositiveDiameter => write!(f, "직경은 0보다 커야 합니다"),
            WireWeightError::NonPositiveLength => write!(f, "길이는 0보다 커야 합니다"),
            WireWeightError::UnknownGauge(g) => write!(f, "지원하지 않는 AWG 번호: {g}"),
        }
    }
}

impl std::error::Error for WireWeightError {}

/// 직경(또는 AWG)과 길이에서 구리 전선의 중량과 직류 저항을 구한다.
pub fn compute_wire_weight(input: WireWeightInput) -> Result<WireWeightResult, WireWeightError> {
    let d_m = match input.diameter {
        DiameterSpec::Direct { value, unit } => convert_length(value, unit, LengthUnit::Meter),
        DiameterSpec::Awg(gauge) => {
            material_db::awg_diameter_m(gauge).ok_or(WireWeightError::UnknownGauge(gauge))?
        }
    };
    if d_m <= 0.0 {
        return Err(WireWeightError::NonPositiveDiameter);
    }
    let l_m = convert_length(input.length, input.length_unit, LengthUnit::Meter);
    if l_m <= 0.0 {
        return Err(WireWeightError::NonPositiveLength);
    }

    let r = d_m / 2.0;
    let area = PI * r * r;
    let weight = area * l_m * COPPER_DENSITY;
    let resistance = COPPER_RESISTIVITY * l_m / area;

    let steps = vec![
        format!("A = π·r² = π·({})² = {} m²", format_value(r), format_value(area)),
        format!(
            "W = A·L·ρ = {}·{}·{} = {} kg",
            format_value(area),
            format_value(l_m),
            format_value(COPPER_DENSITY),
            format_value(weight)
        ),
        format!(
            "R = ρₑ·L/A = {}·{} / {} = {} Ω",
            format_value(COPPER_RESISTIVITY),
            format_value(l_m),
            format_value(area),
            format_value(resistance)
        ),
    ];

    Ok(WireWeightResult {
        diameter_m: d_m,
        area_m2: area,
        weight_kg: weight,
        resistance_ohm: resistance,
        steps,
    })
}
