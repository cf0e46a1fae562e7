use crate::config::Config;
use crate::conversion;
use crate::electrical::{
    ac_power, capacitor_network, electric_field, inductive_reactance, wire_weight,
};
use crate::fabrication::bend_allowance;
use crate::fluids::bernoulli;
use crate::i18n::{self, Translator};
use crate::mechanics::{displacement, impulse_momentum, terminal_velocity};
use crate::optics::refraction;
use crate::thermal::heat_transfer;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// AC 전력 계산 오류
    AcPower(ac_power::AcPowerError),
    /// 커패시터 합성 오류
    Capacitor(capacitor_network::CapacitorNetworkError),
    /// 전기장 계산 오류
    ElectricField(electric_field::ElectricFieldError),
    /// 리액턴스 계산 오류
    Reactance(inductive_reactance::ReactanceError),
    /// 전선 계산 오류
    Wire(wire_weight::WireWeightError),
    /// 변위 계산 오류
    Displacement(displacement::DisplacementError),
    /// 충격량/운동량 계산 오류
    Impulse(impulse_momentum::ImpulseMomentumError),
    /// 종단속도 계산 오류
    TerminalVelocity(terminal_velocity::TerminalVelocityError),
    /// 판금 굽힘 계산 오류
    Bend(bend_allowance::BendAllowanceError),
    /// 베르누이 계산 오류
    Bernoulli(bernoulli::BernoulliError),
    /// 열전달 계산 오류
    HeatTransfer(heat_transfer::HeatTransferError),
    /// 굴절 계산 오류
    Refraction(refraction::RefractionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::AcPower(e) => write!(f, "AC 전력 계산 오류: {e}"),
            AppError::Capacitor(e) => write!(f, "커패시터 계산 오류: {e}"),
            AppError::ElectricField(e) => write!(f, "전기장 계산 오류: {e}"),
            AppError::Reactance(e) => write!(f, "리액턴스 계산 오류: {e}"),
            AppError::Wire(e) => write!(f, "전선 계산 오류: {e}"),
            AppError::Displacement(e) => write!(f, "변위 계산 오류: {e}"),
            AppError::Impulse(e) => write!(f, "충격량/운동량 계산 오류: {e}"),
            AppError::TerminalVelocity(e) => write!(f, "종단속도 계산 오류: {e}"),
            AppError::Bend(e) => write!(f, "판금 굽힘 계산 오류: {e}"),
            AppError::Bernoulli(e) => write!(f, "베르누이 계산 오류: {e}"),
            AppError::HeatTransfer(e) => write!(f, "열전달 계산 오류: {e}"),
            AppError::Refraction(e) => write!(f, "굴절 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<ac_power::AcPowerError> for AppError {
    fn from(value: ac_power::AcPowerError) -> Self {
        AppError::AcPower(value)
    }
}

impl From<capacitor_network::CapacitorNetworkError> for AppError {
    fn from(value: capacitor_network::CapacitorNetworkError) -> Self {
        AppError::Capacitor(value)
    }
}

impl From<electric_field::ElectricFieldError> for AppError {
    fn from(value: electric_field::ElectricFieldError) -> Self {
        AppError::ElectricField(value)
    }
}

impl From<inductive_reactance::ReactanceError> for AppError {
    fn from(value: inductive_reactance::ReactanceError) -> Self {
        AppError::Reactance(value)
    }
}

impl From<wire_weight::WireWeightError> for AppError {
    fn from(value: wire_weight::WireWeightError) -> Self {
        AppError::Wire(value)
    }
}

impl From<displacement::DisplacementError> for AppError {
    fn from(value: displacement::DisplacementError) -> Self {
        AppError::Displacement(value)
    }
}

impl From<impulse_momentum::ImpulseMomentumError> for AppError {
    fn from(value: impulse_momentum::ImpulseMomentumError) -> Self {
        AppError::Impulse(value)
    }
}

impl From<terminal_velocity::TerminalVelocityError> for AppError {
    fn from(value: terminal_velocity::TerminalVelocityError) -> Self {
        AppError::TerminalVelocity(value)
    }
}

impl From<bend_allowance::BendAllowanceError> for AppError {
    fn from(value: bend_allowance::BendAllowanceError) -> Self {
        AppError::Bend(value)
    }
}

impl From<bernoulli::BernoulliError> for AppError {
    fn from(value: bernoulli::BernoulliError) -> Self {
        AppError::Bernoulli(value)
    }
}

impl From<heat_transfer::HeatTransferError> for AppError {
    fn from(value: heat_transfer::HeatTransferError) -> Self {
        AppError::HeatTransfer(value)
    }
}

impl From<refraction::RefractionError> for AppError {
    fn from(value: refraction::RefractionError) -> Self {
        AppError::Refraction(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 계산 오류는 상호작용 한 번에 국한되므로 루프를 끊지 않고
/// 메시지만 출력한 뒤 메뉴로 돌아간다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu(tr)? {
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr, config),
            MenuChoice::Electrical => ui_cli::handle_electrical(tr, config),
            MenuChoice::Mechanics => ui_cli::handle_mechanics(tr, config),
            MenuChoice::FluidsThermal => ui_cli::handle_fluids_thermal(tr, config),
            MenuChoice::Optics => ui_cli::handle_optics(tr, config),
            MenuChoice::Fabrication => ui_cli::handle_fabrication(tr, config),
            MenuChoice::Settings => {
                let res = ui_cli::handle_settings(tr, config);
                if res.is_ok() {
                    config.save()?;
                }
                res
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        if let Err(err) = outcome {
            match err {
                // 입출력/설정 문제는 복구 불가로 보고 전파한다.
                AppError::Io(_) | AppError::Config(_) => return Err(err),
                other => println!("{}: {other}", tr.t(i18n::keys::ERROR_PREFIX)),
            }
        }
    }
    Ok(())
}
