use crate::format::format_value;
use crate::units::{
    convert_force, convert_mass, convert_momentum, convert_time, convert_velocity, ForceUnit,
    MassUnit, MomentumUnit, TimeUnit, VelocityUnit,
};

/// J = F·t 관계에서 풀 변수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpulseSolveFor {
    Impulse,
    Force,
    Time,
}

/// p = m·v 관계에서 풀 변수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MomentumSolveFor {
    Momentum,
    Mass,
    Velocity,
}

/// 충격량 계산 입력. 풀이 대상 필드의 값은 무시된다.
#[derive(Debug, Clone)]
pub struct ImpulseInput {
    pub solve_for: ImpulseSolveFor,
    pub force: f64,
    pub force_unit: ForceUnit,
    pub time: f64,
    pub time_unit: TimeUnit,
    pub impulse: f64,
    pub impulse_unit: MomentumUnit,
}

/// 운동량 계산 입력. 풀이 대상 필드의 값은 무시된다.
#[derive(Debug, Clone)]
pub struct MomentumInput {
    pub solve_for: MomentumSolveFor,
    pub mass: f64,
    pub mass_unit: MassUnit,
    pub velocity: f64,
    pub velocity_unit: VelocityUnit,
    pub momentum: f64,
    pub momentum_unit: MomentumUnit,
}

/// 충격량-운동량 계산 결과(SI 기준).
#[derive(Debug, Clone)]
pub struct ImpulseMomentumResult {
    /// 풀이된 주 결과값 (모드별 의미가 다르다)
    pub value: f64,
    pub steps: Vec<String>,
}

/// 충격량-운동량 계산 오류.
#[derive(Debug, Clone)]
pub enum ImpulseMomentumError {
    /// 0으로 나눌 수 없는 입력
    ZeroDivisor(&'static str),
    /// 시간이 0 이하
    NonPositiveTime,
    /// 질량이 0 이하
    NonPositiveMass,
}

impl std::fmt::Display for ImpulseMomentumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImpulseMomentumError::ZeroDivisor(field) => {
                write!(f, "0으로 나눌 수 없습니다: {field}")
            }
            ImpulseMomentumError::NonPositiveTime => write!(f, "시간은 0보다 커야 합니다"),
            ImpulseMomentumError::NonPositiveMass => write!(f, "질량은 0보다 커야 합니다"),
        }
    }
}

impl std::error::Error for ImpulseMomentumError {}

/// J = F·t에서 선택된 변수를 푼다. 결과는 각각 N·s, N, s 단위이다.
pub fn compute_impulse(input: ImpulseInput) -> Result<ImpulseMomentumResult, ImpulseMomentumError> {
    let f_n = convert_force(input.force, input.force_unit, ForceUnit::Newton);
    let t_s = convert_time(input.time, input.time_unit, TimeUnit::Second);
    let j = convert_momentum(
        input.impulse,
        input.impulse_unit,
        MomentumUnit::NewtonSecond,
    );
    let mut steps = Vec::new();

    let value = match input.solve_for {
        ImpulseSolveFor::Impulse => {
            if t_s <= 0.0 {
                return Err(ImpulseMomentumError::NonPositiveTime);
            }
            let out = f_n * t_s;
            steps.push(format!(
                "J = F·t = {}·{} = {} N·s",
                format_value(f_n),
                format_value(t_s),
                format_value(out)
            ));
            out
        }
        ImpulseSolveFor::Force => {
            if t_s <= 0.0 {
                return Err(ImpulseMomentumError::NonPositiveTime);
            }
            let out = j / t_s;
            steps.push(format!(
                "F = J/t = {} / {} = {} N",
                format_value(j),
                format_value(t_s),
                format_value(out)
            ));
            out
        }
        ImpulseSolveFor::Time => {
            if f_n == 0.0 {
                return Err(ImpulseMomentumError::ZeroDivisor("힘"));
            }
            let out = j / f_n;
            steps.push(format!(
                "t = J/F = {} / {} = {} s",
                format_value(j),
                format_value(f_n),
                format_value(out)
            ));
            out
        }
    };

    Ok(ImpulseMomentumResult { value, steps })
}

/// p = m·v에서 선택된 변수를 푼다. 결과는 각각 kg·m/s, kg, m/s 단위이다.
pub fn compute_momentum(
    input: MomentumInput,
) -> Result<ImpulseMomentumResult, ImpulseMomentumError> {
    let m_kg = convert_mass(input.mass, input.mass_unit, MassUnit::Kilogram);
    let v_ms = convert_velocity(
        input.velocity,
        input.velocity_unit,
        VelocityUnit::MeterPerSecond,
    );
    let p = convert_momentum(
        input.momentum,
        input.momentum_unit,
        MomentumUnit::KilogramMeterPerSecond,
    );
    let mut steps = Vec::new();

    let value = match input.solve_for {
        MomentumSolveFor::Momentum => {
            if m_kg <= 0.0 {
                return Err(ImpulseMomentumError::NonPositiveMass);
            }
            let out = m_kg * v_ms;
            steps.push(format!(
                "p = m·v = {}·{} = {} kg·m/s",
                format_value(m_kg),
                format_value(v_ms),
                format_value(out)
            ));
            out
        }
        MomentumSolveFor::Mass => {
            if v_ms == 0.0 {
                return Err(ImpulseMomentumError::ZeroDivisor("속도"));
            }
            let out = p / v_ms;
            steps.push(format!(
                "m = p/v = {} / {} = {} kg",
                format_value(p),
                format_value(v_ms),
                format_value(out)
            ));
            out
        }
        MomentumSolveFor::Velocity => {
            if m_kg <= 0.0 {
                return Err(ImpulseMomentumError::NonPositiveMass);
            }
            let out = p / m_kg;
            steps.push(format!(
                "v = p/m = {} / {} = {} m/s",
                format_value(p),
                format_value(m_kg),
                format_value(out)
            ));
            out
        }
    };

    Ok(ImpulseMomentumResult { value, steps })
}

/// 운동량 변화 Δp = m(v_f − v_i). 충격량-운동량 정리로 J와 같다.
pub fn compute_momentum_change(
    mass: f64,
    mass_unit: MassUnit,
    initial_velocity: f64,
    final_velocity: f64,
    velocity_unit: VelocityUnit,
) -> Result<ImpulseMomentumResult, ImpulseMomentumError> {
    let m_kg = convert_mass(mass, mass_unit, MassUnit::Kilogram);
    if m_kg <= 0.0 {
        return Err(ImpulseMomentumError::NonPositiveMass);
    }
    let vi = convert_velocity(initial_velocity, velocity_unit, VelocityUnit::MeterPerSecond);
    let vf = convert_velocity(final_velocity, velocity_unit, VelocityUnit::MeterPerSecond);
    let dp = m_kg * (vf - vi);
    let steps = vec![
        format!(
            "Δp = m(v_f − v_i) = {}·({} − {}) = {} kg·m/s",
            format_value(m_kg),
            format_value(vf),
            format_value(vi),
            format_value(dp)
        ),
        "J = Δp (충격량-운동량 정리)".to_string(),
    ];
    Ok(ImpulseMomentumResult { value: dp, steps })
}
