use crate::constants::STEFAN_BOLTZMANN;
use crate::format::format_value;
use crate::units::{
    convert_area, convert_conductivity, convert_heat_transfer, convert_length, convert_power,
    temperature, AreaUnit, ConductivityUnit, HeatTransferUnit, LengthUnit, PowerUnit,
    TemperatureUnit,
};

/// 전도 모드에서 풀 변수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConductionSolveFor {
    HeatRate,
    Conductivity,
    Area,
    Thickness,
    HotTemp,
    ColdTemp,
}

/// 대류 모드에서 풀 변수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvectionSolveFor {
    HeatRate,
    Coefficient,
    Area,
    SurfaceTemp,
    FluidTemp,
}

/// 복사 모드에서 풀 변수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiationSolveFor {
    HeatRate,
    Emissivity,
    Area,
    HotTemp,
    ColdTemp,
}

/// 전도 계산 입력. 풀이 대상 필드의 값은 무시된다.
#[derive(Debug, Clone)]
pub struct ConductionInput {
    pub solve_for: ConductionSolveFor,
    pub heat_rate: f64,
    pub heat_rate_unit: PowerUnit,
    pub conductivity: f64,
    pub conductivity_unit: ConductivityUnit,
    pub area: f64,
    pub area_unit: AreaUnit,
    pub thickness: f64,
    pub thickness_unit: LengthUnit,
    pub hot_temp: f64,
    pub cold_temp: f64,
    pub temp_unit: TemperatureUnit,
}

/// 대류 계산 입력. 풀이 대상 필드의 값은 무시된다.
#[derive(Debug, Clone)]
pub struct ConvectionInput {
    pub solve_for: ConvectionSolveFor,
    pub heat_rate: f64,
    pub heat_rate_unit: PowerUnit,
    pub coefficient: f64,
    pub coefficient_unit: HeatTransferUnit,
    pub area: f64,
    pub area_unit: AreaUnit,
    pub surface_temp: f64,
    pub fluid_temp: f64,
    pub temp_unit: TemperatureUnit,
}

/// 복사 계산 입력. 풀이 대상 필드의 값은 무시된다.
#[derive(Debug, Clone)]
pub struct RadiationInput {
    pub solve_for: RadiationSolveFor,
    pub heat_rate: f64,
    pub heat_rate_unit: PowerUnit,
    pub emissivity: f64,
    pub area: f64,
    pub area_unit: AreaUnit,
    pub hot_temp: f64,
    pub cold_temp: f64,
    pub temp_unit: TemperatureUnit,
}

/// 열전달 계산 결과. 풀린 값은 SI 기준이며 의미는 모드에 따른다.
#[derive(Debug, Clone)]
pub struct HeatTransferResult {
    pub value: f64,
    pub steps: Vec<String>,
}

/// 열전달 계산 오류.
#[derive(Debug, Clone)]
pub enum HeatTransferError {
    /// 0보다 커야 하는 입력이 0 이하
    NonPositive(&'static str),
    /// 방사율 입력이 [0,1] 밖
    EmissivityOutOfRange(f64),
    /// 온도차가 0이라 나눌 수 없음
    ZeroTemperatureDifference,
    /// 절대온도가 0 K 미만
    BelowAbsoluteZero,
    /// 온도를 풀 때 네제곱근 안이 음수
    NegativeRadicand(f64),
    /// 계산된 방사율이 [0,1] 밖(입력 불일치)
    InconsistentEmissivity(f64),
}

impl std::fmt::Display for HeatTransferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeatTransferError::NonPositive(field) => {
                write!(f, "0보다 커야 하는 입력입니다: {field}")
            }
            HeatTransferError::EmissivityOutOfRange(e) => {
                write!(f, "방사율은 0~1 사이여야 합니다: {e}")
            }
            HeatTransferError::ZeroTemperatureDifference => {
                write!(f, "두 온도가 같으면 풀 수 없습니다")
            }
            HeatTransferError::BelowAbsoluteZero => {
                write!(f, "절대온도 0 K 미만은 허용되지 않습니다")
            }
            HeatTransferError::NegativeRadicand(v) => {
                write!(f, "근호 안이 음수라 온도를 풀 수 없습니다: {v:.4}")
            }
            HeatTransferError::InconsistentEmissivity(e) => {
                write!(f, "계산된 방사율이 0~1을 벗어납니다(입력 불일치): {e:.4}")
            }
        }
    }
}

impl std::error::Error for HeatTransferError {}

/// 전도: Q = kA(T₁−T₂)/d 에서 선택된 변수를 푼다.
pub fn compute_conduction(input: ConductionInput) -> Result<HeatTransferResult, HeatTransferError> {
    let q = convert_power(input.heat_rate, input.heat_rate_unit, PowerUnit::Watt);
    let k = convert_conductivity(
        input.conductivity,
        input.conductivity_unit,
        ConductivityUnit::WPerMeterK,
    );
    let a = convert_area(input.area, input.area_unit, AreaUnit::SquareMeter);
    let d = convert_length(input.thickness, input.thickness_unit, LengthUnit::Meter);
    let t1 = temperature::to_kelvin(input.hot_temp, input.temp_unit);
    let t2 = temperature::to_kelvin(input.cold_temp, input.temp_unit);
    let dt = t1 - t2;
    let mut steps = Vec::new();

    let value = match input.solve_for {
        ConductionSolveFor::HeatRate => {
            check_positive(k, "열전도율")?;
            check_positive(a, "면적")?;
            check_positive(d, "두께")?;
            let out = k * a * dt / d;
            steps.push(format!(
                "Q = kA(T₁−T₂)/d = {}·{}·{} / {} = {} W",
                format_value(k),
                format_value(a),
                format_value(dt),
                format_value(d),
                format_value(out)
            ));
            out
        }
        ConductionSolveFor::Conductivity => {
            check_positive(a, "면적")?;
            check_positive(d, "두께")?;
            check_dt(dt)?;
            let out = q * d / (a * dt);
            steps.push(format!(
                "k = Q·d/(A·(T₁−T₂)) = {} W/m·K",
                format_value(out)
            ));
            out
        }
        ConductionSolveFor::Area => {
            check_positive(k, "열전도율")?;
            check_positive(d, "두께")?;
            check_dt(dt)?;
            let out = q * d / (k * dt);
            steps.push(format!("A = Q·d/(k·(T₁−T₂)) = {} m²", format_value(out)));
            out
        }
        ConductionSolveFor::Thickness => {
            check_positive(k, "열전도율")?;
            check_positive(a, "면적")?;
            check_dt(dt)?;
            check_positive(q.abs(), "열전달률")?;
            let out = k * a * dt / q;
            steps.push(format!("d = kA(T₁−T₂)/Q = {} m", format_value(out)));
            if out <= 0.0 {
                return Err(HeatTransferError::NonPositive("두께"));
            }
            out
        }
        ConductionSolveFor::HotTemp => {
            check_positive(k, "열전도율")?;
            check_positive(a, "면적")?;
            check_positive(d, "두께")?;
            let out_k = t2 + q * d / (k * a);
            check_absolute(out_k)?;
            steps.push(format!(
                "T₁ = T₂ + Q·d/(kA) = {} K",
                format_value(out_k)
            ));
            temperature::from_kelvin(out_k, input.temp_unit)
        }
        ConductionSolveFor::ColdTemp => {
            check_positive(k, "열전도율")?;
            check_positive(a, "면적")?;
            check_positive(d, "두께")?;
            let out_k = t1 - q * d / (k * a);
            check_absolute(out_k)?;
            steps.push(format!(
                "T₂ = T₁ − Q·d/(kA) = {} K",
                format_value(out_k)
            ));
            temperature::from_kelvin(out_k, input.temp_unit)
        }
    };

    Ok(HeatTransferResult { value, steps })
}

/// 대류: Q = hA(T_s−T_f) 에서 선택된 변수를 푼다.
pub fn compute_convection(input: ConvectionInput) -> Result<HeatTransferResult, HeatTransferError> {
    let q = convert_power(input.heat_rate, input.heat_rate_unit, PowerUnit::Watt);
    let h = convert_heat_transfer(
        input.coefficient,
        input.coefficient_unit,
        HeatTransferUnit::WPerSquareMeterK,
    );
    let a = convert_area(input.area, input.area_unit, AreaUnit::SquareMeter);
    let ts = temperature::to_kelvin(input.surface_temp, input.temp_unit);
    let tf = temperature::to_kelvin(input.fluid_temp, input.temp_unit);
    let dt = ts - tf;
    let mut steps = Vec::new();

    let value = match input.solve_for {
        ConvectionSolveFor::HeatRate => {
            check_positive(h, "열전달계수")?;
            check_positive(a, "면적")?;
            let out = h * a * dt;
            steps.push(format!(
                "Q = hA(T_s−T_f) = {}·{}·{} = {} W",
                format_value(h),
                format_value(a),
                format_value(dt),
                format_value(out)
            ));
            out
        }
        ConvectionSolveFor::Coefficient => {
            check_positive(a, "면적")?;
            check_dt(dt)?;
            let out = q / (a * dt);
            steps.push(format!("h = Q/(A·(T_s−T_f)) = {} W/m²·K", format_value(out)));
            out
        }
        ConvectionSolveFor::Area => {
            check_positive(h, "열전달계수")?;
            check_dt(dt)?;
            let out = q / (h * dt);
            steps.push(format!("A = Q/(h·(T_s−T_f)) = {} m²", format_value(out)));
            out
        }
        ConvectionSolveFor::SurfaceTemp => {
            check_positive(h, "열전달계수")?;
            check_positive(a, "면적")?;
            let out_k = tf + q / (h * a);
            check_absolute(out_k)?;
            steps.push(format!("T_s = T_f + Q/(hA) = {} K", format_value(out_k)));
            temperature::from_kelvin(out_k, input.temp_unit)
        }
        ConvectionSolveFor::FluidTemp => {
            check_positive(h, "열전달계수")?;
            check_positive(a, "면적")?;
            let out_k = ts - q / (h * a);
            check_absolute(out_k)?;
            steps.push(format!("T_f = T_s − Q/(hA) = {} K", format_value(out_k)));
            temperature::from_kelvin(out_k, input.temp_unit)
        }
    };

    Ok(HeatTransferResult { value, steps })
}

/// 복사: Q = εσA(T₁⁴−T₂⁴) 에서 선택된 변수를 푼다. σ = 5.670374419e-8.
pub fn compute_radiation(input: RadiationInput) -> Result<HeatTransferResult, HeatTransferError> {
    let sigma = STEFAN_BOLTZMANN;
    let q = convert_power(input.heat_rate, input.heat_rate_unit, PowerUnit::Watt);
    let eps = input.emissivity;
    let a = convert_area(input.area, input.area_unit, AreaUnit::SquareMeter);
    let t1 = temperature::to_kelvin(input.hot_temp, input.temp_unit);
    let t2 = temperature::to_kelvin(input.cold_temp, input.temp_unit);
    let mut steps = Vec::new();

    // 복사는 절대온도 4제곱 항이므로 입력 온도부터 0 K 이상이어야 한다.
    if input.solve_for != RadiationSolveFor::HotTemp && t1 < 0.0 {
        return Err(HeatTransferError::BelowAbsoluteZero);
    }
    if input.solve_for != RadiationSolveFor::ColdTemp && t2 < 0.0 {
        return Err(HeatTransferError::BelowAbsoluteZero);
    }

    let value = match input.solve_for {
        RadiationSolveFor::HeatRate => {
            check_emissivity(eps)?;
            check_positive(a, "면적")?;
            let out = eps * sigma * a * (t1.powi(4) - t2.powi(4));
            steps.push(format!(
                "Q = εσA(T₁⁴−T₂⁴) = {}·σ·{}·({}⁴ − {}⁴) = {} W",
                format_value(eps),
                format_value(a),
                format_value(t1),
                format_value(t2),
                format_value(out)
            ));
            out
        }
        RadiationSolveFor::Emissivity => {
            check_positive(a, "면적")?;
            let t4_diff = t1.powi(4) - t2.powi(4);
            if t4_diff == 0.0 {
                return Err(HeatTransferError::ZeroTemperatureDifference);
            }
            let out = q / (sigma * a * t4_diff);
            steps.push(format!("ε = Q/(σA(T₁⁴−T₂⁴)) = {}", format_value(out)));
            if !(0.0..=1.0).contains(&out) {
                return Err(HeatTransferError::InconsistentEmissivity(out));
            }
            out
        }
        RadiationSolveFor::Area => {
            check_emissivity(eps)?;
            if eps == 0.0 {
                return Err(HeatTransferError::NonPositive("방사율"));
            }
            let t4_diff = t1.powi(4) - t2.powi(4);
            if t4_diff == 0.0 {
                return Err(HeatTransferError::ZeroTemperatureDifference);
            }
            let out = q / (eps * sigma * t4_diff);
            steps.push(format!("A = Q/(εσ(T₁⁴−T₂⁴)) = {} m²", format_value(out)));
            out
        }
        RadiationSolveFor::HotTemp => {
            check_emissivity(eps)?;
            if eps == 0.0 {
                return Err(HeatTransferError::NonPositive("방사율"));
            }
            check_positive(a, "면적")?;
            let radicand = q / (eps * sigma * a) + t2.powi(4);
            if radicand < 0.0 {
                return Err(HeatTransferError::NegativeRadicand(radicand));
            }
            let out_k = radicand.powf(0.25);
            steps.push(format!(
                "T₁ = (Q/(εσA) + T₂⁴)^(1/4) = {} K",
                format_value(out_k)
            ));
            temperature::from_kelvin(out_k, input.temp_unit)
        }
        RadiationSolveFor::ColdTemp => {
            check_emissivity(eps)?;
            if eps == 0.0 {
                return Err(HeatTransferError::NonPositive("방사율"));
            }
            check_positive(a, "면적")?;
            let radicand = t1.powi(4) - q / (eps * sigma * a);
            if radicand < 0.0 {
                return Err(HeatTransferError::NegativeRadicand(radicand));
            }
            let out_k = radicand.powf(0.25);
            steps.push(format!(
                "T₂ = (T₁⁴ − Q/(εσA))^(1/4) = {} K",
                format_value(out_k)
            ));
            temperature::from_kelvin(out_k, input.temp_unit)
        }
    };

    Ok(HeatTransferResult { value, steps })
}

fn check_positive(value: f64, field: &'static str) -> Result<(), HeatTransferError> {
    if value <= 0.0 {
        return Err(HeatTransferError::NonPositive(field));
    }
    Ok(())
}

fn check_dt(dt: f64) -> Result<(), HeatTransferError> {
    if dt == 0.0 {
        return Err(HeatTransferError::ZeroTemperatureDifference);
    }
    Ok(())
}

fn check_emissivity(eps: f64) -> Result<(), HeatTransferError> {
    if !(0.0..=1.0).contains(&eps) {
        return Err(HeatTransferError::EmissivityOutOfRange(eps));
    }
    Ok(())
}

fn check_absolute(t_k: f64) -> Result<(), HeatTransferError> {
    if t_k < 0.0 {
        return Err(HeatTransferError::BelowAbsoluteZero);
    }
    Ok(())
}
