use crate::constants::SPEED_OF_LIGHT;
use crate::format::format_value;
use crate::units::{convert_angle, convert_velocity, AngleUnit, VelocityUnit};

/// 굴절 계산 모드.
#[derive(Debug, Clone)]
pub enum RefractionMode {
    /// n = c/v 에서 굴절률을 구한다.
    IndexFromSpeed {
        speed: f64,
        speed_unit: VelocityUnit,
    },
    /// n = c/v 에서 매질 내 광속을 구한다.
    SpeedFromIndex { index: f64 },
    /// 스넬 법칙으로 굴절각 θ₂를 구한다.
    SnellAngle {
        n1: f64,
        n2: f64,
        incident_angle: f64,
        angle_unit: AngleUnit,
    },
    /// 스넬 법칙으로 제2매질 굴절률 n₂를 구한다.
    SnellIndex {
        n1: f64,
        incident_angle: f64,
        refracted_angle: f64,
        angle_unit: AngleUnit,
    },
    /// 임계각 θc = arcsin(n₂/n₁). n₁ > n₂ 필요.
    CriticalAngle { n1: f64, n2: f64 },
}

/// 굴절 계산 결과. 각도는 도, 속도는 m/s 기준이다.
#[derive(Debug, Clone)]
pub struct RefractionResult {
    pub value: f64,
    pub steps: Vec<String>,
}

/// 굴절 계산 오류.
#[derive(Debug, Clone)]
pub enum RefractionError {
    /// 속도가 0 이하
    NonPositiveSpeed,
    /// 굴절률이 1 미만(진공 기준)
    IndexBelowUnity(f64),
    /// 굴절률이 0 이하
    NonPositiveIndex,
    /// 입사각이 [0, 90°] 밖
    AngleOutOfRange(f64),
    /// 전반사: |sin θ₂| > 1 이라 굴절각이 존재하지 않음
    TotalInternalReflection { sin_refracted: f64 },
    /// 굴절각의 사인이 0이라 n₂를 풀 수 없음
    ZeroRefractedSine,
    /// n₁ ≤ n₂ 라 임계각이 정의되지 않음
    NoCriticalAngle { n1: f64, n2: f64 },
}

impl std::fmt::Display for RefractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefractionError::NonPositiveSpeed => write!(f, "속도는 0보다 커야 합니다"),
            RefractionError::IndexBelowUnity(n) => {
                write!(f, "굴절률은 1 이상이어야 합니다: {n}")
            }
            RefractionError::NonPositiveIndex => write!(f, "굴절률은 0보다 커야 합니다"),
            RefractionError::AngleOutOfRange(a) => {
                write!(f, "각도는 0°~90° 사이여야 합니다: {a}")
            }
            RefractionError::TotalInternalReflection { sin_refracted } => write!(
                f,
                "전반사 조건입니다(sin θ₂ = {sin_refracted:.4} > 1). 굴절각이 존재하지 않습니다"
            ),
            RefractionError::ZeroRefractedSine => {
                write!(f, "굴절각이 0°이면 n₂를 풀 수 없습니다")
            }
            RefractionError::NoCriticalAngle { n1, n2 } => write!(
                f,
                "임계각은 밀한 매질에서 소한 매질로 갈 때만 정의됩니다 (n₁={n1} ≤ n₂={n2})"
            ),
        }
    }
}

impl std::error::Error for RefractionError {}

/// 선택된 굴절 계산을 수행한다. 전반사 등 정의역 밖 조건은 NaN 대신 오류로 보고한다.
pub fn compute_refraction(mode: RefractionMode) -> Result<RefractionResult, RefractionError> {
    let mut steps = Vec::new();
    let value = match mode {
        RefractionMode::IndexFromSpeed { speed, speed_unit } => {
            let v = convert_velocity(speed, speed_unit, VelocityUnit::MeterPerSecond);
            if v <= 0.0 {
                return Err(RefractionError::NonPositiveSpeed);
            }
            let n = SPEED_OF_LIGHT / v;
            steps.push(format!(
                "n = c/v = {} / {} = {}",
                format_value(SPEED_OF_LIGHT),
                format_value(v),
                format_value(n)
            ));
            n
        }
        RefractionMode::SpeedFromIndex { index } => {
            if index < 1.0 {
                return Err(RefractionError::IndexBelowUnity(index));
            }
            let v = SPEED_OF_LIGHT / index;
            steps.push(format!(
                "v = c/n = {} / {} = {} m/s",
                format_value(SPEED_OF_LIGHT),
                format_value(index),
                format_value(v)
            ));
            v
        }
        RefractionMode::SnellAngle {
            n1,
            n2,
            incident_angle,
            angle_unit,
        } => {
            check_index(n1)?;
            check_index(n2)?;
            let theta1 = check_angle(convert_angle(incident_angle, angle_unit, AngleUnit::Degree))?;
            let sin2 = n1 * theta1.to_radians().sin() / n2;
            steps.push(format!(
                "sin θ₂ = n₁·sin θ₁ / n₂ = {}·sin({}°) / {} = {}",
                format_value(n1),
                format_value(theta1),
                format_value(n2),
                format_value(sin2)
            ));
            if sin2.abs() > 1.0 {
                return Err(RefractionError::TotalInternalReflection { sin_refracted: sin2 });
            }
            let theta2 = sin2.asin().to_degrees();
            steps.push(format!("θ₂ = arcsin({}) = {}°", format_value(sin2), format_value(theta2)));
            theta2
        }
        RefractionMode::SnellIndex {
            n1,
            incident_angle,
            refracted_angle,
            angle_unit,
        } => {
            check_index(n1)?;
            let theta1 = check_angle(convert_angle(incident_angle, angle_unit, AngleUnit::Degree))?;
            let theta2 = check_angle(convert_angle(refracted_angle, angle_unit, AngleUnit::Degree))?;
            let sin2 = theta2.to_radians().sin();
            if sin2 == 0.0 {
                return Err(RefractionError::ZeroRefractedSine);
            }
            let n2 = n1 * theta1.to_radians().sin() / sin2;
            steps.push(format!(
                "n₂ = n₁·sin θ₁ / sin θ₂ = {}·sin({}°) / sin({}°) = {}",
                format_value(n1),
                format_value(theta1),
                format_value(theta2),
                format_value(n2)
            ));
            n2
        }
        RefractionMode::CriticalAngle { n1, n2 } => {
            check_index(n1)?;
            check_index(n2)?;
            if n1 <= n2 {
                return Err(RefractionError::NoCriticalAngle { n1, n2 });
            }
            let ratio = n2 / n1;
            let theta_c = ratio.asin().to_degrees();
            steps.push(format!(
                "θc = arcsin(n₂/n₁) = arcsin({}) = {}°",
                format_value(ratio),
                format_value(theta_c)
            ));
            theta_c
        }
    };

    Ok(RefractionResult { value, steps })
}

fn check_index(n: f64) -> Result<(), RefractionError> {
    if n <= 0.0 {
        return Err(RefractionError::NonPositiveIndex);
    }
    Ok(())
}

fn check_angle(deg: f64) -> Result<f64, RefractionError> {
    if !(0.0..=90.0).contains(&deg) {
        return Err(RefractionError::AngleOutOfRange(deg));
    }
    Ok(deg)
}
