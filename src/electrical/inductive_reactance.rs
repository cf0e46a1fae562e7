use std::f64::consts::PI;

use crate::format::format_value;
use crate::units::{
    convert_frequency, convert_inductance, convert_resistance, FrequencyUnit, InductanceUnit,
    ResistanceUnit,
};

/// XL = 2πfL 관계에서 풀 변수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactanceSolveFor {
    Reactance,
    Inductance,
    Frequency,
}

/// 유도성 리액턴스 계산 입력. 풀이 대상 필드의 값은 무시된다.
#[derive(Debug, Clone)]
pub struct ReactanceInput {
    pub solve_for: ReactanceSolveFor,
    pub frequency: f64,
    pub frequency_unit: FrequencyUnit,
    pub inductance: f64,
    pub inductance_unit: InductanceUnit,
    pub reactance: f64,
    pub reactance_unit: ResistanceUnit,
}

/// 유도성 리액턴스 계산 결과(SI 기준).
#[derive(Debug, Clone)]
pub struct ReactanceResult {
    pub frequency_hz: f64,
    pub inductance_h: f64,
    pub reactance_ohm: f64,
    pub steps: Vec<String>,
}

/// RL 직렬 회로 해석 결과.
#[derive(Debug, Clone)]
pub struct RlImpedanceResult {
    pub impedance_ohm: f64,
    pub phase_deg: f64,
    pub power_factor: f64,
    pub steps: Vec<String>,
}

/// 리액턴스/임피던스 계산 오류.
#[derive(Debug, Clone)]
pub enum ReactanceError {
    /// 0보다 커야 하는 입력이 0 이하
    NonPositive(&'static str),
}

impl std::fmt::Display for ReactanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReactanceError::NonPositive(field) => {
                write!(f, "0보다 커야 하는 입력입니다: {field}")
            }
        }
    }
}

impl std::error::Error for ReactanceError {}

/// XL = 2πfL에서 선택된 변수를 푼다.
pub fn compute_reactance(input: ReactanceInput) -> Result<ReactanceResult, ReactanceError> {
    let f_hz = convert_frequency(input.frequency, input.frequency_unit, FrequencyUnit::Hertz);
    let l_h = convert_inductance(input.inductance, input.inductance_unit, InductanceUnit::Henry);
    let xl_ohm = convert_resistance(input.reactance, input.reactance_unit, ResistanceUnit::Ohm);
    let mut steps = Vec::new();

    let (f_hz, l_h, xl_ohm) = match input.solve_for {
        ReactanceSolveFor::Reactance => {
            check_positive(f_hz, "주파수")?;
            check_positive(l_h, "인덕턴스")?;
            let xl = 2.0 * PI * f_hz * l_h;
            steps.push(format!(
                "XL = 2πfL = 2π·{}·{} = {} Ω",
                format_value(f_hz),
                format_value(l_h),
                format_value(xl)
            ));
            (f_hz, l_h, xl)
        }
        ReactanceSolveFor::Inductance => {
            check_positive(f_hz, "주파수")?;
            check_positive(xl_ohm, "리액턴스")?;
            let l = xl_ohm / (2.0 * PI * f_hz);
            steps.push(format!(
                "L = XL / (2πf) = {} / (2π·{}) = {} H",
                format_value(xl_ohm),
                format_value(f_hz),
                format_value(l)
            ));
            (f_hz, l, xl_ohm)
        }
        ReactanceSolveFor::Frequency => {
            check_positive(l_h, "인덕턴스")?;
            check_positive(xl_ohm, "리액턴스")?;
            let f = xl_ohm / (2.0 * PI * l_h);
            steps.push(format!(
                "f = XL / (2πL) = {} / (2π·{}) = {} Hz",
                format_value(xl_ohm),
                format_value(l_h),
                format_value(f)
            ));
            (f, l_h, xl_ohm)
        }
    };

    Ok(ReactanceResult {
        frequency_hz: f_hz,
        inductance_h: l_h,
        reactance_ohm: xl_ohm,
        steps,
    })
}

/// RL 직렬 임피던스 Z = √(R²+XL²), 위상각 φ = arctan(XL/R), 역률 cos φ.
pub fn compute_rl_impedance(
    resistance: f64,
    resistance_unit: ResistanceUnit,
    reactance: f64,
    reactance_unit: ResistanceUnit,
) -> Result<RlImpedanceResult, ReactanceError> {
    let r = convert_resistance(resistance, resistance_unit, ResistanceUnit::Ohm);
    let xl = convert_resistance(reactance, reactance_unit, ResistanceUnit::Ohm);
    check_positive(r, "저항")?;
    if xl < 0.0 {
        return Err(ReactanceError::NonPositive("리액턴스"));
    }

    let z = (r * r + xl * xl).sqrt();
    let phase_rad = (xl / r).atan();
    let phase_deg = phase_rad.to_degrees();
    let pf = phase_rad.cos();

    let steps = vec![
        format!(
            "Z = √(R² + XL²) = √({}² + {}²) = {} Ω",
            format_value(r),
            format_value(xl),
            format_value(z)
        ),
        format!("φ = arctan(XL/R) = {}°", format_value(phase_deg)),
        format!("PF = cos φ = {}", format_value(pf)),
    ];

    Ok(RlImpedanceResult {
        impedance_ohm: z,
        phase_deg,
        power_factor: pf,
        steps,
    })
}

fn check_positive(value: f64, field: &'static str) -> Result<(), ReactanceError> {
    if value <= 0.0 {
        return Err(ReactanceError::NonPositive(field));
    }
    Ok(())
}
