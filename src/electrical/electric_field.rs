use crate::constants::COULOMB_CONSTANT;
use crate::format::format_value;
use crate::units::{
    convert_charge, convert_force, convert_length, convert_voltage, ChargeUnit, ForceUnit,
    LengthUnit, VoltageUnit,
};

/// 전기장 계산 모드. 각 모드가 자기 입력을 들고 다닌다.
#[derive(Debug, Clone)]
pub enum ElectricFieldMode {
    /// 점전하: E = kQ/r²
    PointCharge {
        charge: f64,
        charge_unit: ChargeUnit,
        distance: f64,
        distance_unit: LengthUnit,
    },
    /// 시험 전하가 받는 힘: E = F/q
    ForceOnCharge {
        force: f64,
        force_unit: ForceUnit,
        charge: f64,
        charge_unit: ChargeUnit,
    },
    /// 평행판 전위차: E = V/d
    UniformField {
        voltage: f64,
        voltage_unit: VoltageUnit,
        distance: f64,
        distance_unit: LengthUnit,
    },
}

/// 전기장 계산 결과.
#[derive(Debug, Clone)]
pub struct ElectricFieldResult {
    /// 전기장 세기 [V/m] (= N/C)
    pub field_v_per_m: f64,
    pub steps: Vec<String>,
}

/// 전기장 계산 오류.
#[derive(Debug, Clone)]
pub enum ElectricFieldError {
    /// 거리가 0 이하
    NonPositiveDistance,
    /// 시험 전하가 0
    ZeroCharge,
}

impl std::fmt::Display for ElectricFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElectricFieldError::NonPositiveDistance => {
                write!(f, "거리는 0보다 커야 합니다")
            }
            ElectricFieldError::ZeroCharge => write!(f, "전하량이 0이면 나눌 수 없습니다"),
        }
    }
}

impl std::error::Error for ElectricFieldError {}

/// 선택된 모드의 전기장 세기를 구한다.
pub fn compute_electric_field(
    mode: ElectricFieldMode,
) -> Result<ElectricFieldResult, ElectricFieldError> {
    let mut steps = Vec::new();
    let field = match mode {
        ElectricFieldMode::PointCharge {
            charge,
            charge_unit,
            distance,
            distance_unit,
        } => {
            let q = convert_charge(charge, charge_unit, ChargeUnit::Coulomb);
            let r = convert_length(distance, distance_unit, LengthUnit::Meter);
            if r <= 0.0 {
                return Err(ElectricFieldError::NonPositiveDistance);
            }
            let e = COULOMB_CONSTANT * q / (r * r);
            steps.push(format!(
                "E = kQ/r² = {}·{} / {}² = {} V/m",
                format_value(COULOMB_CONSTANT),
                format_value(q),
                format_value(r),
                format_value(e)
            ));
            e
        }
        ElectricFieldMode::ForceOnCharge {
            force,
            force_unit,
            charge,
            charge_unit,
        } => {
            let f_n = convert_force(force, force_unit, ForceUnit::Newton);
            let q = convert_charge(charge, charge_unit, ChargeUnit::Coulomb);
            if q == 0.0 {
                return Err(ElectricFieldError::ZeroCharge);
            }
            let e = f_n / q;
            steps.push(format!(
                "E = F/q = {} / {} = {} N/C",
                format_value(f_n),
                format_value(q),
                format_value(e)
            ));
            e
        }
        ElectricFieldMode::UniformField {
            voltage,
            voltage_unit,
            distance,
            distance_unit,
        } => {
            let v = convert_voltage(voltage, voltage_unit, VoltageUnit::Volt);
            let d = convert_length(distance, distance_unit, LengthUnit::Meter);
            if d <= 0.0 {
                return Err(ElectricFieldError::NonPositiveDistance);
            }
            let e = v / d;
            steps.push(format!(
                "E = V/d = {} / {} = {} V/m",
                format_value(v),
                format_value(d),
                format_value(e)
            ));
            e
        }
    };

    Ok(ElectricFieldResult {
        field_v_per_m: field,
        steps,
    })
}
