use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::electrical::{
    ac_power, capacitor_network, electric_field, inductive_reactance, wire_weight,
};
use crate::fabrication::bend_allowance;
use crate::fluids::bernoulli;
use crate::format::format_with_unit;
use crate::i18n::{keys, Translator};
use crate::mechanics::{displacement, impulse_momentum, terminal_velocity};
use crate::optics::refraction;
use crate::quantity::QuantityKind;
use crate::thermal::heat_transfer;
use crate::units::*;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    Electrical,
    Mechanics,
    FluidsThermal,
    Optics,
    Fabrication,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_ELECTRICAL));
    println!("{}", tr.t(keys::MAIN_MENU_MECHANICS));
    println!("{}", tr.t(keys::MAIN_MENU_FLUIDS_THERMAL));
    println!("{}", tr.t(keys::MAIN_MENU_OPTICS));
    println!("{}", tr.t(keys::MAIN_MENU_FABRICATION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::Electrical),
            "3" => return Ok(MenuChoice::Mechanics),
            "4" => return Ok(MenuChoice::FluidsThermal),
            "5" => return Ok(MenuChoice::Optics),
            "6" => return Ok(MenuChoice::Fabrication),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS_LINE1));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS_LINE2));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS_LINE3));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        format_with_unit(result, to_unit.trim())
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Voltage),
        2 => Some(QuantityKind::Current),
        3 => Some(QuantityKind::Power),
        4 => Some(QuantityKind::Resistance),
        5 => Some(QuantityKind::Inductance),
        6 => Some(QuantityKind::Capacitance),
        7 => Some(QuantityKind::Frequency),
        8 => Some(QuantityKind::Charge),
        9 => Some(QuantityKind::ElectricField),
        10 => Some(QuantityKind::Length),
        11 => Some(QuantityKind::Area),
        12 => Some(QuantityKind::Volume),
        13 => Some(QuantityKind::Mass),
        14 => Some(QuantityKind::Density),
        15 => Some(QuantityKind::Time),
        16 => Some(QuantityKind::Velocity),
        17 => Some(QuantityKind::Acceleration),
        18 => Some(QuantityKind::Force),
        19 => Some(QuantityKind::Pressure),
        20 => Some(QuantityKind::Temperature),
        21 => Some(QuantityKind::TemperatureDifference),
        22 => Some(QuantityKind::Angle),
        23 => Some(QuantityKind::Momentum),
        24 => Some(QuantityKind::Energy),
        _ => None,
    }
}

/// 전기 계산 메뉴를 처리한다.
pub fn handle_electrical(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ELECTRICAL_HEADING));
    println!("{}", tr.t(keys::ELECTRICAL_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => handle_ac_power(tr),
        "2" => handle_electric_field(tr),
        "3" => handle_capacitors(tr),
        "4" => handle_reactance(tr),
        "5" => handle_wire_weight(tr),
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            Ok(())
        }
    }
}

fn handle_ac_power(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::AC_POWER_HEADING));
    println!("{}", tr.t(keys::AC_POWER_SOLVE_OPTIONS));
    let solve_for = loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => break ac_power::AcPowerSolveFor::RealPower,
            "2" => break ac_power::AcPowerSolveFor::Voltage,
            "3" => break ac_power::AcPowerSolveFor::Current,
            "4" => break ac_power::AcPowerSolveFor::PowerFactor,
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    let phase = loop {
        let sel = read_line(tr.t(keys::AC_POWER_PHASE_PROMPT))?;
        match sel.trim() {
            "1" => break ac_power::PhaseType::Single,
            "3" => break ac_power::PhaseType::Three,
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };

    let mut input = ac_power::AcPowerInput {
        phase,
        solve_for,
        voltage: 0.0,
        voltage_unit: VoltageUnit::Volt,
        current: 0.0,
        current_unit: CurrentUnit::Ampere,
        power_factor: 0.0,
        real_power: 0.0,
        real_power_unit: PowerUnit::Watt,
    };
    if solve_for != ac_power::AcPowerSolveFor::Voltage {
        input.voltage = read_f64(tr, tr.t(keys::PROMPT_VOLTAGE))?;
    }
    if solve_for != ac_power::AcPowerSolveFor::Current {
        input.current = read_f64(tr, tr.t(keys::PROMPT_CURRENT))?;
    }
    if solve_for != ac_power::AcPowerSolveFor::PowerFactor {
        input.power_factor = read_f64(tr, tr.t(keys::PROMPT_POWER_FACTOR))?;
    }
    if solve_for != ac_power::AcPowerSolveFor::RealPower {
        input.real_power = read_f64(tr, tr.t(keys::PROMPT_REAL_POWER))?;
    }
    let result = ac_power::compute_ac_power(input)?;
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!("  P = {}", format_with_unit(result.real_power_w, "W"));
    println!("  V = {}", format_with_unit(result.voltage_v, "V"));
    println!("  I = {}", format_with_unit(result.current_a, "A"));
    println!("  PF = {}", format_with_unit(result.power_factor, ""));
    println!("  S = {}", format_with_unit(result.apparent_power_va, "VA"));
    println!("  Q = {}", format_with_unit(result.reactive_power_var, "var"));
    print_steps(tr, &result.steps);
    Ok(())
}

fn handle_electric_field(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EFIELD_HEADING));
    println!("{}", tr.t(keys::EFIELD_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let mode = match sel.trim() {
        "1" => electric_field::ElectricFieldMode::PointCharge {
            charge: read_f64(tr, tr.t(keys::PROMPT_CHARGE))?,
            charge_unit: ChargeUnit::Coulomb,
            distance: read_f64(tr, tr.t(keys::PROMPT_DISTANCE))?,
            distance_unit: LengthUnit::Meter,
        },
        "2" => electric_field::ElectricFieldMode::ForceOnCharge {
            force: read_f64(tr, tr.t(keys::PROMPT_FORCE))?,
            force_unit: ForceUnit::Newton,
            charge: read_f64(tr, tr.t(keys::PROMPT_CHARGE))?,
            charge_unit: ChargeUnit::Coulomb,
        },
        "3" => electric_field::ElectricFieldMode::UniformField {
            voltage: read_f64(tr, tr.t(keys::PROMPT_VOLTAGE))?,
            voltage_unit: VoltageUnit::Volt,
            distance: read_f64(tr, tr.t(keys::PROMPT_DISTANCE))?,
            distance_unit: LengthUnit::Meter,
        },
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    let result = electric_field::compute_electric_field(mode)?;
    println!(
        "{} E = {}",
        tr.t(keys::RESULT_HEADING),
        format_with_unit(result.field_v_per_m, "V/m")
    );
    print_steps(tr, &result.steps);
    Ok(())
}

fn handle_capacitors(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CAP_HEADING));
    let kind = loop {
        let sel = read_line(tr.t(keys::CAP_KIND_PROMPT))?;
        match sel.trim() {
            "1" => break capacitor_network::NetworkKind::Series,
            "2" => break capacitor_network::NetworkKind::Parallel,
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    let count = loop {
        let sel = read_line(tr.t(keys::CAP_COUNT_PROMPT))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if n > 0 {
                break n;
            }
        }
        println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
    };
    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let prompt = format!("{}{}", i + 1, tr.t(keys::CAP_VALUE_PROMPT));
        let value = read_f64(tr, &prompt)?;
        entries.push(capacitor_network::CapacitorEntry {
            value,
            unit: CapacitanceUnit::Microfarad,
        });
    }
    let result = capacitor_network::compute_equivalent(kind, &entries)?;
    let ceq_uf = convert_capacitance(
        result.equivalent_f,
        CapacitanceUnit::Farad,
        CapacitanceUnit::Microfarad,
    );
    println!(
        "{} Ceq = {}",
        tr.t(keys::RESULT_HEADING),
        format_with_unit(ceq_uf, "µF")
    );
    print_steps(tr, &result.steps);
    Ok(())
}

fn handle_reactance(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::REACTANCE_HEADING));
    println!("{}", tr.t(keys::REACTANCE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" | "2" | "3" => {
            let solve_for = match sel.trim() {
                "1" => inductive_reactance::ReactanceSolveFor::Reactance,
                "2" => inductive_reactance::ReactanceSolveFor::Inductance,
                _ => inductive_reactance::ReactanceSolveFor::Frequency,
            };
            let mut input = inductive_reactance::ReactanceInput {
                solve_for,
                frequency: 0.0,
                frequency_unit: FrequencyUnit::Hertz,
                inductance: 0.0,
                inductance_unit: InductanceUnit::Henry,
                reactance: 0.0,
                reactance_unit: ResistanceUnit::Ohm,
            };
            if solve_for != inductive_reactance::ReactanceSolveFor::Frequency {
                input.frequency = read_f64(tr, tr.t(keys::PROMPT_FREQUENCY))?;
            }
            if solve_for != inductive_reactance::ReactanceSolveFor::Inductance {
                input.inductance = read_f64(tr, tr.t(keys::PROMPT_INDUCTANCE))?;
            }
            if solve_for != inductive_reactance::ReactanceSolveFor::Reactance {
                input.reactance = read_f64(tr, tr.t(keys::PROMPT_REACTANCE))?;
            }
            let result = inductive_reactance::compute_reactance(input)?;
            println!("{}", tr.t(keys::RESULT_HEADING));
            println!("  XL = {}", format_with_unit(result.reactance_ohm, "Ω"));
            println!("  L = {}", format_with_unit(result.inductance_h, "H"));
            println!("  f = {}", format_with_unit(result.frequency_hz, "Hz"));
            print_steps(tr, &result.steps);
        }
        "4" => {
            let r = read_f64(tr, tr.t(keys::PROMPT_RESISTANCE))?;
            let xl = read_f64(tr, tr.t(keys::PROMPT_REACTANCE))?;
            let result = inductive_reactance::compute_rl_impedance(
                r,
                ResistanceUnit::Ohm,
                xl,
                ResistanceUnit::Ohm,
            )?;
            println!("{}", tr.t(keys::RESULT_HEADING));
            println!("  Z = {}", format_with_unit(result.impedance_ohm, "Ω"));
            println!("  φ = {}", format_with_unit(result.phase_deg, "°"));
            println!("  PF = {}", format_with_unit(result.power_factor, ""));
            print_steps(tr, &result.steps);
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

fn handle_wire_weight(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WIRE_HEADING));
    let diameter = loop {
        let sel = read_line(tr.t(keys::WIRE_OPTIONS))?;
        match sel.trim() {
            "1" => {
                let d = read_f64(tr, tr.t(keys::PROMPT_DIAMETER))?;
                break wire_weight::DiameterSpec::Direct {
                    value: d,
                    unit: LengthUnit::Millimeter,
                };
            }
            "2" => {
                let g = loop {
                    let s = read_line(tr.t(keys::PROMPT_AWG))?;
                    if let Ok(v) = s.trim().parse::<i32>() {
                        break v;
                    }
                    println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
                };
                break wire_weight::DiameterSpec::Awg(g);
            }
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    let length = read_f64(tr, tr.t(keys::PROMPT_WIRE_LENGTH))?;
    let result = wire_weight::compute_wire_weight(wire_weight::WireWeightInput {
        diameter,
        length,
        length_unit: LengthUnit::Meter,
    })?;
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "  d = {}",
        format_with_unit(result.diameter_m * 1000.0, "mm")
    );
    println!("  A = {}", format_with_unit(result.area_m2, "m²"));
    println!("  W = {}", format_with_unit(result.weight_kg, "kg"));
    println!("  R = {}", format_with_unit(result.resistance_ohm, "Ω"));
    print_steps(tr, &result.steps);
    Ok(())
}

/// 역학 계산 메뉴를 처리한다.
pub fn handle_mechanics(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MECHANICS_HEADING));
    println!("{}", tr.t(keys::MECHANICS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => handle_displacement(tr),
        "2" => handle_impulse_momentum(tr),
        "3" => handle_terminal_velocity(tr),
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            Ok(())
        }
    }
}

fn handle_displacement(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DISPLACEMENT_HEADING));
    println!("{}", tr.t(keys::DISPLACEMENT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let mode = match sel.trim() {
        "1" => displacement::DisplacementMode::PositionDifference {
            initial: read_f64(tr, tr.t(keys::PROMPT_INITIAL_POSITION))?,
            end: read_f64(tr, tr.t(keys::PROMPT_FINAL_POSITION))?,
            unit: LengthUnit::Meter,
        },
        "2" => displacement::DisplacementMode::ConstantVelocity {
            velocity: read_f64(tr, tr.t(keys::PROMPT_VELOCITY))?,
            velocity_unit: VelocityUnit::MeterPerSecond,
            time: read_f64(tr, tr.t(keys::PROMPT_TIME))?,
            time_unit: TimeUnit::Second,
        },
        "3" => displacement::DisplacementMode::UniformAcceleration {
            initial_velocity: read_f64(tr, tr.t(keys::PROMPT_INITIAL_VELOCITY))?,
            velocity_unit: VelocityUnit::MeterPerSecond,
            time: read_f64(tr, tr.t(keys::PROMPT_TIME))?,
            time_unit: TimeUnit::Second,
            acceleration: read_f64(tr, tr.t(keys::PROMPT_ACCELERATION))?,
            acceleration_unit: AccelerationUnit::MeterPerSecondSquared,
        },
        "4" => displacement::DisplacementMode::AverageVelocity {
            initial_velocity: read_f64(tr, tr.t(keys::PROMPT_INITIAL_VELOCITY))?,
            final_velocity: read_f64(tr, tr.t(keys::PROMPT_FINAL_VELOCITY))?,
            velocity_unit: VelocityUnit::MeterPerSecond,
            time: read_f64(tr, tr.t(keys::PROMPT_TIME))?,
            time_unit: TimeUnit::Second,
        },
        "5" => displacement::DisplacementMode::VelocitySquared {
            initial_velocity: read_f64(tr, tr.t(keys::PROMPT_INITIAL_VELOCITY))?,
            final_velocity: read_f64(tr, tr.t(keys::PROMPT_FINAL_VELOCITY))?,
            velocity_unit: VelocityUnit::MeterPerSecond,
            acceleration: read_f64(tr, tr.t(keys::PROMPT_ACCELERATION))?,
            acceleration_unit: AccelerationUnit::MeterPerSecondSquared,
        },
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    let result = displacement::compute_displacement(mode)?;
    println!(
        "{} s = {}",
        tr.t(keys::RESULT_HEADING),
        format_with_unit(result.displacement_m, "m")
    );
    print_steps(tr, &result.steps);
    Ok(())
}

fn handle_impulse_momentum(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::IMPULSE_HEADING));
    println!("{}", tr.t(keys::IMPULSE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            println!("1) J  2) F  3) t");
            let solve_sel = read_line(tr.t(keys::IMPULSE_SOLVE_PROMPT))?;
            let solve_for = match solve_sel.trim() {
                "1" => impulse_momentum::ImpulseSolveFor::Impulse,
                "2" => impulse_momentum::ImpulseSolveFor::Force,
                "3" => impulse_momentum::ImpulseSolveFor::Time,
                _ => {
                    println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                    return Ok(());
                }
            };
            let mut input = impulse_momentum::ImpulseInput {
                solve_for,
                force: 0.0,
                force_unit: ForceUnit::Newton,
                time: 0.0,
                time_unit: TimeUnit::Second,
                impulse: 0.0,
                impulse_unit: MomentumUnit::NewtonSecond,
            };
            if solve_for != impulse_momentum::ImpulseSolveFor::Force {
                input.force = read_f64(tr, tr.t(keys::PROMPT_FORCE))?;
            }
            if solve_for != impulse_momentum::ImpulseSolveFor::Time {
                input.time = read_f64(tr, tr.t(keys::PROMPT_TIME))?;
            }
            if solve_for != impulse_momentum::ImpulseSolveFor::Impulse {
                input.impulse = read_f64(tr, tr.t(keys::PROMPT_IMPULSE))?;
            }
            let result = impulse_momentum::compute_impulse(input)?;
            let unit = match solve_for {
                impulse_momentum::ImpulseSolveFor::Impulse => "N·s",
                impulse_momentum::ImpulseSolveFor::Force => "N",
                impulse_momentum::ImpulseSolveFor::Time => "s",
            };
            println!(
                "{} {}",
                tr.t(keys::RESULT_HEADING),
                format_with_unit(result.value, unit)
            );
            print_steps(tr, &result.steps);
        }
        "2" => {
            println!("1) p  2) m  3) v");
            let solve_sel = read_line(tr.t(keys::IMPULSE_SOLVE_PROMPT))?;
            let solve_for = match solve_sel.trim() {
                "1" => impulse_momentum::MomentumSolveFor::Momentum,
                "2" => impulse_momentum::MomentumSolveFor::Mass,
                "3" => impulse_momentum::MomentumSolveFor::Velocity,
                _ => {
                    println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                    return Ok(());
                }
            };
            let mut input = impulse_momentum::MomentumInput {
                solve_for,
                mass: 0.0,
                mass_unit: MassUnit::Kilogram,
                velocity: 0.0,
                velocity_unit: VelocityUnit::MeterPerSecond,
                momentum: 0.0,
                momentum_unit: MomentumUnit::KilogramMeterPerSecond,
            };
            if solve_for != impulse_momentum::MomentumSolveFor::Mass {
                input.mass = read_f64(tr, tr.t(keys::PROMPT_MASS))?;
            }
            if solve_for != impulse_momentum::MomentumSolveFor::Velocity {
                input.velocity = read_f64(tr, tr.t(keys::PROMPT_VELOCITY))?;
            }
            if solve_for != impulse_momentum::MomentumSolveFor::Momentum {
                input.momentum = read_f64(tr, tr.t(keys::PROMPT_MOMENTUM))?;
            }
            let result = impulse_momentum::compute_momentum(input)?;
            let unit = match solve_for {
                impulse_momentum::MomentumSolveFor::Momentum => "kg·m/s",
                impulse_momentum::MomentumSolveFor::Mass => "kg",
                impulse_momentum::MomentumSolveFor::Velocity => "m/s",
            };
            println!(
                "{} {}",
                tr.t(keys::RESULT_HEADING),
                format_with_unit(result.value, unit)
            );
            print_steps(tr, &result.steps);
        }
        "3" => {
            let mass = read_f64(tr, tr.t(keys::PROMPT_MASS))?;
            let vi = read_f64(tr, tr.t(keys::PROMPT_INITIAL_VELOCITY))?;
            let vf = read_f64(tr, tr.t(keys::PROMPT_FINAL_VELOCITY))?;
            let result = impulse_momentum::compute_momentum_change(
                mass,
                MassUnit::Kilogram,
                vi,
                vf,
                VelocityUnit::MeterPerSecond,
            )?;
            println!(
                "{} Δp = {}",
                tr.t(keys::RESULT_HEADING),
                format_with_unit(result.value, "kg·m/s")
            );
            print_steps(tr, &result.steps);
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

fn handle_terminal_velocity(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TERMINAL_HEADING));
    println!("{}", tr.t(keys::TERMINAL_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let solve_for = match sel.trim() {
        "1" => terminal_velocity::TerminalVelocitySolveFor::Velocity,
        "2" => terminal_velocity::TerminalVelocitySolveFor::Mass,
        "3" => terminal_velocity::TerminalVelocitySolveFor::Area,
        "4" => terminal_velocity::TerminalVelocitySolveFor::DragCoefficient,
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    let mut input = terminal_velocity::TerminalVelocityInput {
        solve_for,
        mass: 0.0,
        mass_unit: MassUnit::Kilogram,
        area: 0.0,
        area_unit: AreaUnit::SquareMeter,
        drag_coefficient: 0.0,
        fluid_density: 0.0,
        fluid_density_unit: DensityUnit::KilogramPerCubicMeter,
        velocity: 0.0,
        velocity_unit: VelocityUnit::MeterPerSecond,
    };
    if solve_for != terminal_velocity::TerminalVelocitySolveFor::Mass {
        input.mass = read_f64(tr, tr.t(keys::PROMPT_MASS))?;
    }
    if solve_for != terminal_velocity::TerminalVelocitySolveFor::Area {
        input.area = read_f64(tr, tr.t(keys::PROMPT_AREA))?;
    }
    if solve_for != terminal_velocity::TerminalVelocitySolveFor::DragCoefficient {
        input.drag_coefficient = read_f64(tr, tr.t(keys::PROMPT_DRAG_COEFF))?;
    }
    if solve_for != terminal_velocity::TerminalVelocitySolveFor::Velocity {
        input.velocity = read_f64(tr, tr.t(keys::PROMPT_TERMINAL_VELOCITY))?;
    }
    input.fluid_density = read_f64(tr, tr.t(keys::PROMPT_FLUID_DENSITY))?;

    let result = terminal_velocity::compute_terminal_velocity(input)?;
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!("  v = {}", format_with_unit(result.velocity_ms, "m/s"));
    println!("  m = {}", format_with_unit(result.mass_kg, "kg"));
    println!("  A = {}", format_with_unit(result.area_m2, "m²"));
    println!("  C_d = {}", format_with_unit(result.drag_coefficient, ""));
    print_steps(tr, &result.steps);
    Ok(())
}

/// 유체/열전달 계산 메뉴를 처리한다.
pub fn handle_fluids_thermal(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FLUIDS_THERMAL_HEADING));
    println!("{}", tr.t(keys::FLUIDS_THERMAL_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => handle_bernoulli(tr),
        "2" => handle_heat_transfer(tr),
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            Ok(())
        }
    }
}

fn handle_bernoulli(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::BERNOULLI_HEADING));
    println!("{}", tr.t(keys::BERNOULLI_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let solve_for = match sel.trim() {
        "1" => bernoulli::BernoulliSolveFor::Pressure1,
        "2" => bernoulli::BernoulliSolveFor::Pressure2,
        "3" => bernoulli::BernoulliSolveFor::Velocity1,
        "4" => bernoulli::BernoulliSolveFor::Velocity2,
        "5" => bernoulli::BernoulliSolveFor::Height1,
        "6" => bernoulli::BernoulliSolveFor::Height2,
        "7" => bernoulli::BernoulliSolveFor::Density,
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    let mut input = bernoulli::BernoulliInput {
        solve_for,
        pressure1: 0.0,
        pressure2: 0.0,
        pressure_unit: PressureUnit::Pascal,
        velocity1: 0.0,
        velocity2: 0.0,
        velocity_unit: VelocityUnit::MeterPerSecond,
        height1: 0.0,
        height2: 0.0,
        height_unit: LengthUnit::Meter,
        density: 0.0,
        density_unit: DensityUnit::KilogramPerCubicMeter,
    };
    if solve_for != bernoulli::BernoulliSolveFor::Pressure1 {
        input.pressure1 = read_f64(tr, tr.t(keys::PROMPT_PRESSURE1))?;
    }
    if solve_for != bernoulli::BernoulliSolveFor::Pressure2 {
        input.pressure2 = read_f64(tr, tr.t(keys::PROMPT_PRESSURE2))?;
    }
    if solve_for != bernoulli::BernoulliSolveFor::Velocity1 {
        input.velocity1 = read_f64(tr, tr.t(keys::PROMPT_VELOCITY1))?;
    }
    if solve_for != bernoulli::BernoulliSolveFor::Velocity2 {
        input.velocity2 = read_f64(tr, tr.t(keys::PROMPT_VELOCITY2))?;
    }
    if solve_for != bernoulli::BernoulliSolveFor::Height1 {
        input.height1 = read_f64(tr, tr.t(keys::PROMPT_HEIGHT1))?;
    }
    if solve_for != bernoulli::BernoulliSolveFor::Height2 {
        input.height2 = read_f64(tr, tr.t(keys::PROMPT_HEIGHT2))?;
    }
    if solve_for != bernoulli::BernoulliSolveFor::Density {
        input.density = read_f64(tr, tr.t(keys::PROMPT_DENSITY))?;
    }
    let unit = match solve_for {
        bernoulli::BernoulliSolveFor::Pressure1 | bernoulli::BernoulliSolveFor::Pressure2 => "Pa",
        bernoulli::BernoulliSolveFor::Velocity1 | bernoulli::BernoulliSolveFor::Velocity2 => "m/s",
        bernoulli::BernoulliSolveFor::Height1 | bernoulli::BernoulliSolveFor::Height2 => "m",
        bernoulli::BernoulliSolveFor::Density => "kg/m³",
    };
    let result = bernoulli::compute_bernoulli(input)?;
    println!(
        "{} {}",
        tr.t(keys::RESULT_HEADING),
        format_with_unit(result.value, unit)
    );
    print_steps(tr, &result.steps);
    Ok(())
}

fn handle_heat_transfer(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HEAT_HEADING));
    println!("{}", tr.t(keys::HEAT_MODE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            println!("{}", tr.t(keys::HEAT_CONDUCTION_SOLVE_OPTIONS));
            let solve_sel = read_line(tr.t(keys::HEAT_SOLVE_PROMPT))?;
            let solve_for = match solve_sel.trim() {
                "1" => heat_transfer::ConductionSolveFor::HeatRate,
                "2" => heat_transfer::ConductionSolveFor::Conductivity,
                "3" => heat_transfer::ConductionSolveFor::Area,
                "4" => heat_transfer::ConductionSolveFor::Thickness,
                "5" => heat_transfer::ConductionSolveFor::HotTemp,
                "6" => heat_transfer::ConductionSolveFor::ColdTemp,
                _ => {
                    println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                    return Ok(());
                }
            };
            let mut input = heat_transfer::ConductionInput {
                solve_for,
                heat_rate: 0.0,
                heat_rate_unit: PowerUnit::Watt,
                conductivity: 0.0,
                conductivity_unit: ConductivityUnit::WPerMeterK,
                area: 0.0,
                area_unit: AreaUnit::SquareMeter,
                thickness: 0.0,
                thickness_unit: LengthUnit::Meter,
                hot_temp: 0.0,
                cold_temp: 0.0,
                temp_unit: TemperatureUnit::Celsius,
            };
            if solve_for != heat_transfer::ConductionSolveFor::HeatRate {
                input.heat_rate = read_f64(tr, tr.t(keys::PROMPT_HEAT_RATE))?;
            }
            if solve_for != heat_transfer::ConductionSolveFor::Conductivity {
                input.conductivity = read_f64(tr, tr.t(keys::PROMPT_CONDUCTIVITY))?;
            }
            if solve_for != heat_transfer::ConductionSolveFor::Area {
                input.area = read_f64(tr, tr.t(keys::PROMPT_AREA))?;
            }
            if solve_for != heat_transfer::ConductionSolveFor::Thickness {
                input.thickness = read_f64(tr, tr.t(keys::PROMPT_THICKNESS))?;
            }
            if solve_for != heat_transfer::ConductionSolveFor::HotTemp {
                input.hot_temp = read_f64(tr, tr.t(keys::PROMPT_HOT_TEMP))?;
            }
            if solve_for != heat_transfer::ConductionSolveFor::ColdTemp {
                input.cold_temp = read_f64(tr, tr.t(keys::PROMPT_COLD_TEMP))?;
            }
            let result = heat_transfer::compute_conduction(input)?;
            println!(
                "{} {}",
                tr.t(keys::RESULT_HEADING),
                format_with_unit(result.value, conduction_unit(solve_for))
            );
            print_steps(tr, &result.steps);
        }
        "2" => {
            println!("{}", tr.t(keys::HEAT_CONVECTION_SOLVE_OPTIONS));
            let solve_sel = read_line(tr.t(keys::HEAT_SOLVE_PROMPT))?;
            let solve_for = match solve_sel.trim() {
                "1" => heat_transfer::ConvectionSolveFor::HeatRate,
                "2" => heat_transfer::ConvectionSolveFor::Coefficient,
                "3" => heat_transfer::ConvectionSolveFor::Area,
                "4" => heat_transfer::ConvectionSolveFor::SurfaceTemp,
                "5" => heat_transfer::ConvectionSolveFor::FluidTemp,
                _ => {
                    println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                    return Ok(());
                }
            };
            let mut input = heat_transfer::ConvectionInput {
                solve_for,
                heat_rate: 0.0,
                heat_rate_unit: PowerUnit::Watt,
                coefficient: 0.0,
                coefficient_unit: HeatTransferUnit::WPerSquareMeterK,
                area: 0.0,
                area_unit: AreaUnit::SquareMeter,
                surface_temp: 0.0,
                fluid_temp: 0.0,
                temp_unit: TemperatureUnit::Celsius,
            };
            if solve_for != heat_transfer::ConvectionSolveFor::HeatRate {
                input.heat_rate = read_f64(tr, tr.t(keys::PROMPT_HEAT_RATE))?;
            }
            if solve_for != heat_transfer::ConvectionSolveFor::Coefficient {
                input.coefficient = read_f64(tr, tr.t(keys::PROMPT_COEFFICIENT))?;
            }
            if solve_for != heat_transfer::ConvectionSolveFor::Area {
                input.area = read_f64(tr, tr.t(keys::PROMPT_AREA))?;
            }
            if solve_for != heat_transfer::ConvectionSolveFor::SurfaceTemp {
                input.surface_temp = read_f64(tr, tr.t(keys::PROMPT_SURFACE_TEMP))?;
            }
            if solve_for != heat_transfer::ConvectionSolveFor::FluidTemp {
                input.fluid_temp = read_f64(tr, tr.t(keys::PROMPT_FLUID_TEMP))?;
            }
            let result = heat_transfer::compute_convection(input)?;
            println!(
                "{} {}",
                tr.t(keys::RESULT_HEADING),
                format_with_unit(result.value, convection_unit(solve_for))
            );
            print_steps(tr, &result.steps);
        }
        "3" => {
            println!("{}", tr.t(keys::HEAT_RADIATION_SOLVE_OPTIONS));
            let solve_sel = read_line(tr.t(keys::HEAT_SOLVE_PROMPT))?;
            let solve_for = match solve_sel.trim() {
                "1" => heat_transfer::RadiationSolveFor::HeatRate,
                "2" => heat_transfer::RadiationSolveFor::Emissivity,
                "3" => heat_transfer::RadiationSolveFor::Area,
                "4" => heat_transfer::RadiationSolveFor::HotTemp,
                "5" => heat_transfer::RadiationSolveFor::ColdTemp,
                _ => {
                    println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                    return Ok(());
                }
            };
            let mut input = heat_transfer::RadiationInput {
                solve_for,
                heat_rate: 0.0,
                heat_rate_unit: PowerUnit::Watt,
                emissivity: 0.0,
                area: 0.0,
                area_unit: AreaUnit::SquareMeter,
                hot_temp: 0.0,
                cold_temp: 0.0,
                temp_unit: TemperatureUnit::Celsius,
            };
            if solve_for != heat_transfer::RadiationSolveFor::HeatRate {
                input.heat_rate = read_f64(tr, tr.t(keys::PROMPT_HEAT_RATE))?;
            }
            if solve_for != heat_transfer::RadiationSolveFor::Emissivity {
                input.emissivity = read_f64(tr, tr.t(keys::PROMPT_EMISSIVITY))?;
            }
            if solve_for != heat_transfer::RadiationSolveFor::Area {
                input.area = read_f64(tr, tr.t(keys::PROMPT_AREA))?;
            }
            if solve_for != heat_transfer::RadiationSolveFor::HotTemp {
                input.hot_temp = read_f64(tr, tr.t(keys::PROMPT_HOT_TEMP))?;
            }
            if solve_for != heat_transfer::RadiationSolveFor::ColdTemp {
                input.cold_temp = read_f64(tr, tr.t(keys::PROMPT_COLD_TEMP))?;
            }
            let result = heat_transfer::compute_radiation(input)?;
            println!(
                "{} {}",
                tr.t(keys::RESULT_HEADING),
                format_with_unit(result.value, radiation_unit(solve_for))
            );
            print_steps(tr, &result.steps);
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

fn conduction_unit(solve_for: heat_transfer::ConductionSolveFor) -> &'static str {
    match solve_for {
        heat_transfer::ConductionSolveFor::HeatRate => "W",
        heat_transfer::ConductionSolveFor::Conductivity => "W/m·K",
        heat_transfer::ConductionSolveFor::Area => "m²",
        heat_transfer::ConductionSolveFor::Thickness => "m",
        heat_transfer::ConductionSolveFor::HotTemp | heat_transfer::ConductionSolveFor::ColdTemp => {
            "°C"
        }
    }
}

fn convection_unit(solve_for: heat_transfer::ConvectionSolveFor) -> &'static str {
    match solve_for {
        heat_transfer::ConvectionSolveFor::HeatRate => "W",
        heat_transfer::ConvectionSolveFor::Coefficient => "W/m²·K",
        heat_transfer::ConvectionSolveFor::Area => "m²",
        heat_transfer::ConvectionSolveFor::SurfaceTemp
        | heat_transfer::ConvectionSolveFor::FluidTemp => "°C",
    }
}

fn radiation_unit(solve_for: heat_transfer::RadiationSolveFor) -> &'static str {
    match solve_for {
        heat_transfer::RadiationSolveFor::HeatRate => "W",
        heat_transfer::RadiationSolveFor::Emissivity => "",
        heat_transfer::RadiationSolveFor::Area => "m²",
        heat_transfer::RadiationSolveFor::HotTemp | heat_transfer::RadiationSolveFor::ColdTemp => {
            "°C"
        }
    }
}

/// 광학 계산 메뉴를 처리한다.
pub fn handle_optics(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::OPTICS_HEADING));
    println!("{}", tr.t(keys::OPTICS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let mode = match sel.trim() {
        "1" => refraction::RefractionMode::IndexFromSpeed {
            speed: read_f64(tr, tr.t(keys::PROMPT_LIGHT_SPEED))?,
            speed_unit: VelocityUnit::MeterPerSecond,
        },
        "2" => refraction::RefractionMode::SpeedFromIndex {
            index: read_f64(tr, tr.t(keys::PROMPT_INDEX))?,
        },
        "3" => refraction::RefractionMode::SnellAngle {
            n1: read_f64(tr, tr.t(keys::PROMPT_INDEX_N1))?,
            n2: read_f64(tr, tr.t(keys::PROMPT_INDEX_N2))?,
            incident_angle: read_f64(tr, tr.t(keys::PROMPT_INCIDENT_ANGLE))?,
            angle_unit: AngleUnit::Degree,
        },
        "4" => refraction::RefractionMode::SnellIndex {
            n1: read_f64(tr, tr.t(keys::PROMPT_INDEX_N1))?,
            incident_angle: read_f64(tr, tr.t(keys::PROMPT_INCIDENT_ANGLE))?,
            refracted_angle: read_f64(tr, tr.t(keys::PROMPT_REFRACTED_ANGLE))?,
            angle_unit: AngleUnit::Degree,
        },
        "5" => refraction::RefractionMode::CriticalAngle {
            n1: read_f64(tr, tr.t(keys::PROMPT_INDEX_N1))?,
            n2: read_f64(tr, tr.t(keys::PROMPT_INDEX_N2))?,
        },
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    let unit = match &mode {
        refraction::RefractionMode::IndexFromSpeed { .. }
        | refraction::RefractionMode::SnellIndex { .. } => "",
        refraction::RefractionMode::SpeedFromIndex { .. } => "m/s",
        refraction::RefractionMode::SnellAngle { .. }
        | refraction::RefractionMode::CriticalAngle { .. } => "°",
    };
    let result = refraction::compute_refraction(mode)?;
    println!(
        "{} {}",
        tr.t(keys::RESULT_HEADING),
        format_with_unit(result.value, unit)
    );
    print_steps(tr, &result.steps);
    Ok(())
}

/// 판금 계산 메뉴를 처리한다.
pub fn handle_fabrication(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FAB_HEADING));
    let thickness = read_f64(tr, tr.t(keys::PROMPT_SHEET_THICKNESS))?;
    let radius = read_f64(tr, tr.t(keys::PROMPT_BEND_RADIUS))?;
    let angle = read_f64(tr, tr.t(keys::PROMPT_BEND_ANGLE))?;
    let k_factor = read_f64(tr, tr.t(keys::PROMPT_K_FACTOR))?;
    let result = bend_allowance::compute_bend_allowance(bend_allowance::BendAllowanceInput {
        thickness,
        thickness_unit: LengthUnit::Millimeter,
        bend_radius: radius,
        bend_radius_unit: LengthUnit::Millimeter,
        bend_angle: angle,
        bend_angle_unit: AngleUnit::Degree,
        k_factor,
    })?;
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "  BA = {}",
        format_with_unit(result.bend_allowance_m * 1000.0, "mm")
    );
    println!(
        "  OSSB = {}",
        format_with_unit(result.outside_setback_m * 1000.0, "mm")
    );
    println!(
        "  BD = {}",
        format_with_unit(result.bend_deduction_m * 1000.0, "mm")
    );
    println!(
        "  Arc = {}",
        format_with_unit(result.arc_length_m * 1000.0, "mm")
    );
    print_steps(tr, &result.steps);
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:?}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.unit_system = match sel.trim() {
        "1" => UnitSystem::SI,
        "2" => UnitSystem::CGS,
        "3" => UnitSystem::Imperial,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.unit_system
        }
    };
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

fn print_steps(tr: &Translator, steps: &[String]) {
    if steps.is_empty() {
        return;
    }
    println!("{}", tr.t(keys::STEPS_HEADING));
    for step in steps {
        println!("  {step}");
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
