use crate::format::format_value;
use crate::units::{
    convert_current, convert_power, convert_voltage, CurrentUnit, PowerUnit, VoltageUnit,
};

/// 상 구분. 3상은 √3 배율이 곱해진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseType {
    Single,
    Three,
}

impl PhaseType {
    pub fn multiplier(self) -> f64 {
        match self {
            PhaseType::Single => 1.0,
            PhaseType::Three => 3.0_f64.sqrt(),
        }
    }
}

/// 어느 변수를 풀지 선택한다. 나머지 세 값은 입력으로 간주한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcPowerSolveFor {
    RealPower,
    Voltage,
    Current,
    PowerFactor,
}

/// AC 전력 계산 입력. 풀이 대상 필드의 값은 무시된다.
#[derive(Debug, Clone)]
pub struct AcPowerInput {
    pub phase: PhaseType,
    pub solve_for: AcPowerSolveFor,
    pub voltage: f64,
    pub voltage_unit: VoltageUnit,
    pub current: f64,
    pub current_unit: CurrentUnit,
    pub power_factor: f64,
    pub real_power: f64,
    pub real_power_unit: PowerUnit,
}

/// AC 전력 계산 결과. 모든 값은 SI 기준(V, A, W, VA, var)이다.
#[derive(Debug, Clone)]
pub struct AcPowerResult {
    pub voltage_v: f64,
    pub current_a: f64,
    pub power_factor: f64,
    pub real_power_w: f64,
    pub apparent_power_va: f64,
    pub reactive_power_var: f64,
    /// 풀이 과정 설명 줄
    pub steps: Vec<String>,
}

/// AC 전력 계산 중 발생 가능한 오류.
#[derive(Debug, Clone)]
pub enum AcPowerError {
    /// 역률 입력이 [0,1] 밖
    PowerFactorOutOfRange(f64),
    /// 0 또는 음수가 허용되지 않는 입력
    NonPositive(&'static str),
    /// 0으로 나누게 되는 조합
    ZeroDivisor(&'static str),
    /// 계산된 역률이 1을 초과(피상전력보다 큰 유효전력)
    ImpossiblePowerFactor(f64),
    /// S² < P² 라서 무효전력을 정의할 수 없음
    InconsistentPower { apparent_va: f64, real_w: f64 },
}

impl std::fmt::Display for AcPowerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcPowerError::PowerFactorOutOfRange(v) => {
                write!(f, "역률은 0~1 사이여야 합니다: {v}")
            }
            AcPowerError::NonPositive(field) => write!(f, "0보다 커야 하는 입력입니다: {field}"),
            AcPowerError::ZeroDivisor(field) => write!(f, "0으로 나눌 수 없습니다: {field}"),
            AcPowerError::ImpossiblePowerFactor(v) => {
                write!(f, "계산된 역률이 1을 넘습니다(입력 불일치): {v:.4}")
            }
            AcPowerError::InconsistentPower { apparent_va, real_w } => write!(
                f,
                "피상전력({apparent_va:.3} VA)이 유효전력({real_w:.3} W)보다 작아 무효전력을 구할 수 없습니다"
            ),
        }
    }
}

impl std::error::Error for AcPowerError {}

/// P = φ·V·I·PF 관계에서 선택된 변수를 푼다.
///
/// 파생 출력(S, Q)도 주 출력과 같은 수준으로 검증한다. 근호 안이 음수이면
/// NaN을 내보내지 않고 오류로 돌려준다.
pub fn compute_ac_power(input: AcPowerInput) -> Result<AcPowerResult, AcPowerError> {
    let phi = input.phase.multiplier();
    let mut steps = Vec::new();
    match input.phase {
        PhaseType::Single => steps.push("φ = 1 (단상)".to_string()),
        PhaseType::Three => steps.push(format!("φ = √3 ≈ {}", format_value(phi))),
    }

    // 입력을 한꺼번에 기준 단위로 환산한다.
    let v_in = convert_voltage(input.voltage, input.voltage_unit, VoltageUnit::Volt);
    let i_in = convert_current(input.current, input.current_unit, CurrentUnit::Ampere);
    let p_in = convert_power(input.real_power, input.real_power_unit, PowerUnit::Watt);
    let pf_in = input.power_factor;

    let (v, i, pf, p) = match input.solve_for {
        AcPowerSolveFor::RealPower => {
            check_positive(v_in, "전압")?;
            check_positive(i_in, "전류")?;
            check_pf(pf_in)?;
            let p = phi * v_in * i_in * pf_in;
            steps.push(format!(
                "P = φ·V·I·PF = {}·{}·{}·{} = {} W",
                format_value(phi),
                format_value(v_in),
                format_value(i_in),
                format_value(pf_in),
                format_value(p)
            ));
            (v_in, i_in, pf_in, p)
        }
        AcPowerSolveFor::Voltage => {
            check_positive(p_in, "유효전력")?;
            check_positive(i_in, "전류")?;
            check_pf(pf_in)?;
            if pf_in == 0.0 {
                return Err(AcPowerError::ZeroDivisor("역률"));
            }
            let v = p_in / (phi * i_in * pf_in);
            steps.push(format!(
                "V = P / (φ·I·PF) = {} / ({}·{}·{}) = {} V",
                format_value(p_in),
                format_value(phi),
                format_value(i_in),
                format_value(pf_in),
                format_value(v)
            ));
            (v, i_in, pf_in, p_in)
        }
        AcPowerSolveFor::Current => {
            check_positive(p_in, "유효전력")?;
            check_positive(v_in, "전압")?;
            check_pf(pf_in)?;
            if pf_in == 0.0 {
                return Err(AcPowerError::ZeroDivisor("역률"));
            }
            let i = p_in / (phi * v_in * pf_in);
            steps.push(format!(
                "I = P / (φ·V·PF) = {} / ({}·{}·{}) = {} A",
                format_value(p_in),
                format_value(phi),
                format_value(v_in),
                format_value(pf_in),
                format_value(i)
            ));
            (v_in, i, pf_in, p_in)
        }
        AcPowerSolveFor::PowerFactor => {
            check_positive(p_in, "유효전력")?;
            check_positive(v_in, "전압")?;
            check_positive(i_in, "전류")?;
            let pf = p_in / (phi * v_in * i_in);
            steps.push(format!(
                "PF = P / (φ·V·I) = {} / ({}·{}·{}) = {}",
                format_value(p_in),
                format_value(phi),
                format_value(v_in),
                format_value(i_in),
                format_value(pf)
            ));
            if pf > 1.0 {
                return Err(AcPowerError::ImpossiblePowerFactor(pf));
            }
            (v_in, i_in, pf, p_in)
        }
    };

    // 파생량: 피상전력과 무효전력
    let s = phi * v * i;
    steps.push(format!(
        "S = φ·V·I = {} VA",
        format_value(s)
    ));
    let radicand = s * s - p * p;
    let q = if radicand >= 0.0 {
        radicand.sqrt()
    } else if radicand > -1e-9 * s * s {
        // 부동소수점 오차로 생긴 미세 음수는 0으로 취급
        0.0
    } else {
        return Err(AcPowerError::InconsistentPower {
            apparent_va: s,
            real_w: p,
        });
    };
    steps.push(format!("Q = √(S² − P²) = {} var", format_value(q)));

    Ok(AcPowerResult {
        voltage_v: v,
        current_a: i,
        power_factor: pf,
        real_power_w: p,
        apparent_power_va: s,
        reactive_power_var: q,
        steps,
    })
}

fn check_positive(value: f64, field: &'static str) -> Result<(), AcPowerError> {
    if value <= 0.0 {
        return Err(AcPowerError::NonPositive(field));
    }
    Ok(())
}

fn check_pf(pf: f64) -> Result<(), AcPowerError> {
    if !(0.0..=1.0).contains(&pf) {
        return Err(AcPowerError::PowerFactorOutOfRange(pf));
    }
    Ok(())
}
