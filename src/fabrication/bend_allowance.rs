use std::f64::consts::PI;

use crate::format::format_value;
use crate::units::{convert_angle, convert_length, AngleUnit, LengthUnit};

/// 판금 굽힘 계산 입력.
#[derive(Debug, Clone)]
pub struct BendAllowanceInput {
    /// 판 두께
    pub thickness: f64,
    pub thickness_unit: LengthUnit,
    /// 내측 굽힘 반경
    pub bend_radius: f64,
    pub bend_radius_unit: LengthUnit,
    /// 굽힘 각도(보각 기준, 0 < A ≤ 180)
    pub bend_angle: f64,
    pub bend_angle_unit: AngleUnit,
    /// K-팩터(중립축 위치 비율, 0 ≤ K ≤ 1)
    pub k_factor: f64,
}

/// 판금 굽힘 계산 결과. 길이 값은 모두 미터이다.
#[derive(Debug, Clone)]
pub struct BendAllowanceResult {
    /// 굽힘 허용량 BA
    pub bend_allowance_m: f64,
    /// 외측 세트백 OSSB
    pub outside_setback_m: f64,
    /// 굽힘 공제 BD
    pub bend_deduction_m: f64,
    /// 중립축 호 길이(R+T 기준)
    pub arc_length_m: f64,
    pub steps: Vec<String>,
}

/// 판금 굽힘 계산 오류.
#[derive(Debug, Clone)]
pub enum BendAllowanceError {
    /// 두께가 0 이하
    NonPositiveThickness,
    /// 각도가 (0, 180] 밖
    AngleOutOfRange(f64),
    /// 반경이 음수
    NegativeRadius,
    /// K-팩터가 [0,1] 밖
    KFactorOutOfRange(f64),
}

impl std::fmt::Display for BendAllowanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BendAllowanceError::NonPositiveThickness => {
                write!(f, "판 두께는 0보다 커야 합니다")
            }
            BendAllowanceError::AngleOutOfRange(a) => {
                write!(f, "굽힘 각도는 0° 초과 180° 이하여야 합니다: {a}")
            }
            BendAllowanceError::NegativeRadius => write!(f, "굽힘 반경은 음수일 수 없습니다"),
            BendAllowanceError::KFactorOutOfRange(k) => {
                write!(f, "K-팩터는 0~1 사이여야 합니다: {k}")
            }
        }
    }
}

impl std::error::Error for BendAllowanceError {}

/// BA/OSSB/BD/호 길이를 구한다.
///
/// BA = (π/180)·(R + K·T)·A,  OSSB = tan(A/2)·(R + T),
/// BD = 2·OSSB − BA,  Arc = (π/180)·(R + T)·A.
pub fn compute_bend_allowance(
    input: BendAllowanceInput,
) -> Result<BendAllowanceResult, BendAllowanceError> {
    let t = convert_length(input.thickness, input.thickness_unit, LengthUnit::Meter);
    if t <= 0.0 {
        return Err(BendAllowanceError::NonPositiveThickness);
    }
    let r = convert_length(input.bend_radius, input.bend_radius_unit, LengthUnit::Meter);
    if r < 0.0 {
        return Err(BendAllowanceError::NegativeRadius);
    }
    let a_deg = convert_angle(input.bend_angle, input.bend_angle_unit, AngleUnit::Degree);
    if !(a_deg > 0.0 && a_deg <= 180.0) {
        return Err(BendAllowanceError::AngleOutOfRange(a_deg));
    }
    let k = input.k_factor;
    if !(0.0..=1.0).contains(&k) {
        return Err(BendAllowanceError::KFactorOutOfRange(k));
    }

    let ba = (PI / 180.0) * (r + k * t) * a_deg;
    let ossb = (a_deg.to_radians() / 2.0).tan() * (r + t);
    let bd = 2.0 * ossb - ba;
    let arc = (PI / 180.0) * (r + t) * a_deg;

    let steps = vec![
        format!(
            "BA = (π/180)·(R + K·T)·A = (π/180)·({} + {}·{})·{} = {} m",
            format_value(r),
            format_value(k),
            format_value(t),
            format_value(a_deg),
            format_value(ba)
        ),
        format!(
            "OSSB = tan(A/2)·(R + T) = tan({}°/2)·({} + {}) = {} m",
            format_value(a_deg),
            format_value(r),
            format_value(t),
            format_value(ossb)
        ),
        format!("BD = 2·OSSB − BA = {} m", format_value(bd)),
        format!("Arc = (π/180)·(R + T)·A = {} m", format_value(arc)),
    ];

    Ok(BendAllowanceResult {
        bend_allowance_m: ba,
        outside_setback_m: ossb,
        bend_deduction_m: bd,
        arc_length_m: arc,
        steps,
    })
}
