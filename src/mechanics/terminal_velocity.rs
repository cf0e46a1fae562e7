use crate::constants::STANDARD_GRAVITY;
use crate::format::format_value;
use crate::units::{
    convert_area, convert_density, convert_mass, convert_velocity, AreaUnit, DensityUnit, MassUnit,
    VelocityUnit,
};

/// v = √(2mg/(ρAC_d)) 관계에서 풀 변수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalVelocitySolveFor {
    Velocity,
    Mass,
    Area,
    DragCoefficient,
}

/// 종단속도 계산 입력. 풀이 대상 필드의 값은 무시된다.
#[derive(Debug, Clone)]
pub struct TerminalVelocityInput {
    pub solve_for: TerminalVelocitySolveFor,
    pub mass: f64,
    pub mass_unit: MassUnit,
    pub area: f64,
    pub area_unit: AreaUnit,
    pub drag_coefficient: f64,
    /// 유체 밀도 (기본은 해수면 공기 1.225 kg/m³)
    pub fluid_density: f64,
    pub fluid_density_unit: DensityUnit,
    pub velocity: f64,
    pub velocity_unit: VelocityUnit,
}

/// 종단속도 계산 결과(SI 기준).
#[derive(Debug, Clone)]
pub struct TerminalVelocityResult {
    pub velocity_ms: f64,
    pub mass_kg: f64,
    pub area_m2: f64,
    pub drag_coefficient: f64,
    pub steps: Vec<String>,
}

/// 종단속도 계산 오류.
#[derive(Debug, Clone)]
pub enum TerminalVelocityError {
    /// 0보다 커야 하는 입력이 0 이하
    NonPositive(&'static str),
}

impl std::fmt::Display for TerminalVelocityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalVelocityError::NonPositive(field) => {
                write!(f, "0보다 커야 하는 입력입니다: {field}")
            }
        }
    }
}

impl std::error::Error for TerminalVelocityError {}

/// 항력 평형식에서 선택된 변수를 푼다. g = 9.80665 고정.
pub fn compute_terminal_velocity(
    input: TerminalVelocityInput,
) -> Result<TerminalVelocityResult, TerminalVelocityError> {
    let g = STANDARD_GRAVITY;
    let m = convert_mass(input.mass, input.mass_unit, MassUnit::Kilogram);
    let a = convert_area(input.area, input.area_unit, AreaUnit::SquareMeter);
    let cd = input.drag_coefficient;
    let rho = convert_density(
        input.fluid_density,
        input.fluid_density_unit,
        DensityUnit::KilogramPerCubicMeter,
    );
    let v = convert_velocity(
        input.velocity,
        input.velocity_unit,
        VelocityUnit::MeterPerSecond,
    );
    check_positive(rho, "유체 밀도")?;
    let mut steps = Vec::new();

    let (v, m, a, cd) = match input.solve_for {
        TerminalVelocitySolveFor::Velocity => {
            check_positive(m, "질량")?;
            check_positive(a, "투영 면적")?;
            check_positive(cd, "항력계수")?;
            let radicand = 2.0 * m * g / (rho * a * cd);
            let v = radicand.sqrt();
            steps.push(format!(
                "v = √(2mg/(ρAC_d)) = √(2·{}·{} / ({}·{}·{})) = {} m/s",
                format_value(m),
                format_value(g),
                format_value(rho),
                format_value(a),
                format_value(cd),
                format_value(v)
            ));
            (v, m, a, cd)
        }
        TerminalVelocitySolveFor::Mass => {
            check_positive(v, "종단속도")?;
            check_positive(a, "투영 면적")?;
            check_positive(cd, "항력계수")?;
            let m = v * v * rho * a * cd / (2.0 * g);
            steps.push(format!(
                "m = v²ρAC_d/(2g) = {}²·{}·{}·{} / (2·{}) = {} kg",
                format_value(v),
                format_value(rho),
                format_value(a),
                format_value(cd),
                format_value(g),
                format_value(m)
            ));
            (v, m, a, cd)
        }
        TerminalVelocitySolveFor::Area => {
            check_positive(v, "종단속도")?;
            check_positive(m, "질량")?;
            check_positive(cd, "항력계수")?;
            let a = 2.0 * m * g / (rho * v * v * cd);
            steps.push(format!(
                "A = 2mg/(ρv²C_d) = 2·{}·{} / ({}·{}²·{}) = {} m²",
                format_value(m),
                format_value(g),
                format_value(rho),
                format_value(v),
                format_value(cd),
                format_value(a)
            ));
            (v, m, a, cd)
        }
        TerminalVelocitySolveFor::DragCoefficient => {
            check_positive(v, "종단속도")?;
            check_positive(m, "질량")?;
            check_positive(a, "투영 면적")?;
            let cd = 2.0 * m * g / (rho * v * v * a);
            steps.push(format!(
                "C_d = 2mg/(ρv²A) = 2·{}·{} / ({}·{}²·{}) = {}",
                format_value(m),
                format_value(g),
                format_value(rho),
                format_value(v),
                format_value(a),
                format_value(cd)
            ));
            (v, m, a, cd)
        }
    };

    Ok(TerminalVelocityResult {
        velocity_ms: v,
        mass_kg: m,
        area_m2: a,
        drag_coefficient: cd,
        steps,
    })
}

fn check_positive(value: f64, field: &'static str) -> Result<(), TerminalVelocityError> {
    if value <= 0.0 {
        return Err(TerminalVelocityError::NonPositive(field));
    }
    Ok(())
}
