use crate::constants::BERNOULLI_GRAVITY;
use crate::format::format_value;
use crate::units::{
    convert_density, convert_length, convert_pressure, convert_velocity, DensityUnit, LengthUnit,
    PressureUnit, VelocityUnit,
};

/// 베르누이 식에서 풀 변수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BernoulliSolveFor {
    Pressure1,
    Pressure2,
    Velocity1,
    Velocity2,
    Height1,
    Height2,
    Density,
}

/// 베르누이 계산 입력. 풀이 대상 필드의 값은 무시된다.
#[derive(Debug, Clone)]
pub struct BernoulliInput {
    pub solve_for: BernoulliSolveFor,
    pub pressure1: f64,
    pub pressure2: f64,
    pub pressure_unit: PressureUnit,
    pub velocity1: f64,
    pub velocity2: f64,
    pub velocity_unit: VelocityUnit,
    pub height1: f64,
    pub height2: f64,
    pub height_unit: LengthUnit,
    pub density: f64,
    pub density_unit: DensityUnit,
}

/// 베르누이 계산 결과. 풀린 값은 SI 기준(Pa, m/s, m, kg/m³)이다.
#[derive(Debug, Clone)]
pub struct BernoulliResult {
    pub value: f64,
    pub steps: Vec<String>,
}

/// 베르누이 계산 오류.
#[derive(Debug, Clone)]
pub enum BernoulliError {
    /// 밀도가 0 이하
    NonPositiveDensity,
    /// 속도를 풀 때 근호 안이 음수
    NegativeRadicand(f64),
    /// 밀도를 풀 때 분모가 0
    ZeroEnergyDifference,
    /// 계산된 밀도가 0 이하(입력 불일치)
    InconsistentDensity(f64),
}

impl std::fmt::Display for BernoulliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BernoulliError::NonPositiveDensity => write!(f, "밀도는 0보다 커야 합니다"),
            BernoulliError::NegativeRadicand(v) => {
                write!(f, "근호 안이 음수라 속도를 풀 수 없습니다: {v:.4}")
            }
            BernoulliError::ZeroEnergyDifference => {
                write!(f, "두 지점의 운동·위치 에너지 항이 같아 밀도를 풀 수 없습니다")
            }
            BernoulliError::InconsistentDensity(v) => {
                write!(f, "계산된 밀도가 물리적으로 유효하지 않습니다: {v:.4}")
            }
        }
    }
}

impl std::error::Error for BernoulliError {}

/// P₁ + ½ρv₁² + ρgh₁ = P₂ + ½ρv₂² + ρgh₂ 에서 선택된 변수를 푼다. g = 9.81.
pub fn compute_bernoulli(input: BernoulliInput) -> Result<BernoulliResult, BernoulliError> {
    let g = BERNOULLI_GRAVITY;
    let p1 = convert_pressure(input.pressure1, input.pressure_unit, PressureUnit::Pascal);
    let p2 = convert_pressure(input.pressure2, input.pressure_unit, PressureUnit::Pascal);
    let v1 = convert_velocity(input.velocity1, input.velocity_unit, VelocityUnit::MeterPerSecond);
    let v2 = convert_velocity(input.velocity2, input.velocity_unit, VelocityUnit::MeterPerSecond);
    let h1 = convert_length(input.height1, input.height_unit, LengthUnit::Meter);
    let h2 = convert_length(input.height2, input.height_unit, LengthUnit::Meter);
    let rho = convert_density(
        input.density,
        input.density_unit,
        DensityUnit::KilogramPerCubicMeter,
    );

    if input.solve_for != BernoulliSolveFor::Density && rho <= 0.0 {
        return Err(BernoulliError::NonPositiveDensity);
    }

    let mut steps = Vec::new();
    let value = match input.solve_for {
        BernoulliSolveFor::Pressure1 => {
            let total2 = p2 + 0.5 * rho * v2 * v2 + rho * g * h2;
            let out = total2 - 0.5 * rho * v1 * v1 - rho * g * h1;
            steps.push(format!(
                "P₁ = P₂ + ½ρv₂² + ρgh₂ − ½ρv₁² − ρgh₁ = {} Pa",
                format_value(out)
            ));
            out
        }
        BernoulliSolveFor::Pressure2 => {
            let total1 = p1 + 0.5 * rho * v1 * v1 + rho * g * h1;
            let out = total1 - 0.5 * rho * v2 * v2 - rho * g * h2;
            steps.push(format!(
                "P₂ = P₁ + ½ρv₁² + ρgh₁ − ½ρv₂² − ρgh₂ = {} Pa",
                format_value(out)
            ));
            out
        }
        BernoulliSolveFor::Velocity1 => {
            let total2 = p2 + 0.5 * rho * v2 * v2 + rho * g * h2;
            let radicand = 2.0 * (total2 - p1 - rho * g * h1) / rho;
            if radicand < 0.0 {
                return Err(BernoulliError::NegativeRadicand(radicand));
            }
            let out = radicand.sqrt();
            steps.push(format!(
                "v₁ = √(2(P₂ + ½ρv₂² + ρgh₂ − P₁ − ρgh₁)/ρ) = {} m/s",
                format_value(out)
            ));
            out
        }
        BernoulliSolveFor::Velocity2 => {
            let total1 = p1 + 0.5 * rho * v1 * v1 + rho * g * h1;
            let radicand = 2.0 * (total1 - p2 - rho * g * h2) / rho;
            if radicand < 0.0 {
                return Err(BernoulliError::NegativeRadicand(radicand));
            }
            let out = radicand.sqrt();
            steps.push(format!(
                "v₂ = √(2(P₁ + ½ρv₁² + ρgh₁ − P₂ − ρgh₂)/ρ) = {} m/s",
                format_value(out)
            ));
            out
        }
        BernoulliSolveFor::Height1 => {
            let total2 = p2 + 0.5 * rho * v2 * v2 + rho * g * h2;
            let out = (total2 - p1 - 0.5 * rho * v1 * v1) / (rho * g);
            steps.push(format!(
                "h₁ = (P₂ + ½ρv₂² + ρgh₂ − P₁ − ½ρv₁²)/(ρg) = {} m",
                format_value(out)
            ));
            out
        }
        BernoulliSolveFor::Height2 => {
            let total1 = p1 + 0.5 * rho * v1 * v1 + rho * g * h1;
            let out = (total1 - p2 - 0.5 * rho * v2 * v2) / (rho * g);
            steps.push(format!(
                "h₂ = (P₁ + ½ρv₁² + ρgh₁ − P₂ − ½ρv₂²)/(ρg) = {} m",
                format_value(out)
            ));
            out
        }
        BernoulliSolveFor::Density => {
            // P₁ − P₂ = ρ·(½(v₂²−v₁²) + g(h₂−h₁))
            let energy_diff = 0.5 * (v2 * v2 - v1 * v1) + g * (h2 - h1);
            if energy_diff == 0.0 {
                return Err(BernoulliError::ZeroEnergyDifference);
            }
            let out = (p1 - p2) / energy_diff;
            steps.push(format!(
                "ρ = (P₁ − P₂) / (½(v₂²−v₁²) + g(h₂−h₁)) = {} kg/m³",
                format_value(out)
            ));
            if out <= 0.0 {
                return Err(BernoulliError::InconsistentDensity(out));
            }
            out
        }
    };

    Ok(BernoulliResult { value, steps })
}
