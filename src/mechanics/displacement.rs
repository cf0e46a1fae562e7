use crate::format::format_value;
use crate::units::{
    convert_acceleration, convert_length, convert_time, convert_velocity, AccelerationUnit,
    LengthUnit, TimeUnit, VelocityUnit,
};

/// 변위 계산 모드. 다섯 가지 운동학 공식 중 하나를 고른다.
#[derive(Debug, Clone)]
pub enum DisplacementMode {
    /// Δx = x − x₀
    PositionDifference {
        initial: f64,
        end: f64,
        unit: LengthUnit,
    },
    /// s = v·t
    ConstantVelocity {
        velocity: f64,
        velocity_unit: VelocityUnit,
        time: f64,
        time_unit: TimeUnit,
    },
    /// s = v₀t + ½at²
    UniformAcceleration {
        initial_velocity: f64,
        velocity_unit: VelocityUnit,
        time: f64,
        time_unit: TimeUnit,
        acceleration: f64,
        acceleration_unit: AccelerationUnit,
    },
    /// s = (v₀+v)t/2
    AverageVelocity {
        initial_velocity: f64,
        final_velocity: f64,
        velocity_unit: VelocityUnit,
        time: f64,
        time_unit: TimeUnit,
    },
    /// s = (v²−v₀²)/(2a)
    VelocitySquared {
        initial_velocity: f64,
        final_velocity: f64,
        velocity_unit: VelocityUnit,
        acceleration: f64,
        acceleration_unit: AccelerationUnit,
    },
}

/// 변위 계산 결과.
#[derive(Debug, Clone)]
pub struct DisplacementResult {
    /// 변위 [m]
    pub displacement_m: f64,
    pub steps: Vec<String>,
}

/// 변위 계산 오류.
#[derive(Debug, Clone)]
pub enum DisplacementError {
    /// 시간이 0 이하
    NonPositiveTime,
    /// 가속도가 0이라 나눌 수 없음
    ZeroAcceleration,
}

impl std::fmt::Display for DisplacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplacementError::NonPositiveTime => write!(f, "시간은 0보다 커야 합니다"),
            DisplacementError::ZeroAcceleration => {
                write!(f, "가속도가 0이면 이 공식을 쓸 수 없습니다")
            }
        }
    }
}

impl std::error::Error for DisplacementError {}

/// 선택된 운동학 공식으로 변위를 구한다.
pub fn compute_displacement(
    mode: DisplacementMode,
) -> Result<DisplacementResult, DisplacementError> {
    let mut steps = Vec::new();
    let s = match mode {
        DisplacementMode::PositionDifference {
            initial,
            end,
            unit,
        } => {
            let x0 = convert_length(initial, unit, LengthUnit::Meter);
            let x = convert_length(end, unit, LengthUnit::Meter);
            let s = x - x0;
            steps.push(format!(
                "Δx = x − x₀ = {} − {} = {} m",
                format_value(x),
                format_value(x0),
                format_value(s)
            ));
            s
        }
        DisplacementMode::ConstantVelocity {
            velocity,
            velocity_unit,
            time,
            time_unit,
        } => {
            let v = convert_velocity(velocity, velocity_unit, VelocityUnit::MeterPerSecond);
            let t = convert_time(time, time_unit, TimeUnit::Second);
            check_time(t)?;
            let s = v * t;
            steps.push(format!(
                "s = v·t = {}·{} = {} m",
                format_value(v),
                format_value(t),
                format_value(s)
            ));
            s
        }
        DisplacementMode::UniformAcceleration {
            initial_velocity,
            velocity_unit,
            time,
            time_unit,
            acceleration,
            acceleration_unit,
        } => {
            let v0 = convert_velocity(initial_velocity, velocity_unit, VelocityUnit::MeterPerSecond);
            let t = convert_time(time, time_unit, TimeUnit::Second);
            let a = convert_acceleration(
                acceleration,
                acceleration_unit,
                AccelerationUnit::MeterPerSecondSquared,
            );
            check_time(t)?;
            let s = v0 * t + 0.5 * a * t * t;
            steps.push(format!(
                "s = v₀t + ½at² = {}·{} + ½·{}·{}² = {} m",
                format_value(v0),
                format_value(t),
                format_value(a),
                format_value(t),
                format_value(s)
            ));
            s
        }
        DisplacementMode::AverageVelocity {
            initial_velocity,
            final_velocity,
            velocity_unit,
            time,
            time_unit,
        } => {
            let v0 = convert_velocity(initial_velocity, velocity_unit, VelocityUnit::MeterPerSecond);
            let v = convert_velocity(final_velocity, velocity_unit, VelocityUnit::MeterPerSecond);
            let t = convert_time(time, time_unit, TimeUnit::Second);
            check_time(t)?;
            let s = (v0 + v) * t / 2.0;
            steps.push(format!(
                "s = (v₀+v)t/2 = ({} + {})·{} / 2 = {} m",
                format_value(v0),
                format_value(v),
                format_value(t),
                format_value(s)
            ));
            s
        }
        DisplacementMode::VelocitySquared {
            initial_velocity,
            final_velocity,
            velocity_unit,
            acceleration,
            acceleration_unit,
        } => {
            let v0 = convert_velocity(initial_velocity, velocity_unit, VelocityUnit::MeterPerSecond);
            let v = convert_velocity(final_velocity, velocity_unit, VelocityUnit::MeterPerSecond);
            let a = convert_acceleration(
                acceleration,
                acceleration_unit,
                AccelerationUnit::MeterPerSecondSquared,
            );
            if a == 0.0 {
                return Err(DisplacementError::ZeroAcceleration);
            }
            let s = (v * v - v0 * v0) / (2.0 * a);
            steps.push(format!(
                "s = (v² − v₀²)/(2a) = ({}² − {}²) / (2·{}) = {} m",
                format_value(v),
                format_value(v0),
                format_value(a),
                format_value(s)
            ));
            s
        }
    };

    Ok(DisplacementResult {
        displacement_m: s,
        steps,
    })
}

fn check_time(t: f64) -> Result<(), DisplacementError> {
    if t <= 0.0 {
        return Err(DisplacementError::NonPositiveTime);
    }
    Ok(())
}
