//! AC 전력 계산기 회귀 테스트.
use physics_engineering_toolbox::electrical::ac_power::{
    compute_ac_power, AcPowerError, AcPowerInput, AcPowerSolveFor, PhaseType,
};
use physics_engineering_toolbox::units::{CurrentUnit, PowerUnit, VoltageUnit};

fn base_input(solve_for: AcPowerSolveFor) -> AcPowerInput {
    AcPowerInput {
        phase: PhaseType::Single,
        solve_for,
        voltage: 240.0,
        voltage_unit: VoltageUnit::Volt,
        current: 20.0,
        current_unit: CurrentUnit::Ampere,
        power_factor: 0.85,
        real_power: 4080.0,
        real_power_unit: PowerUnit::Watt,
    }
}

#[test]
fn single_phase_scenario_240v_20a() {
    // 240 V, 20 A, PF 0.85 => P=4080 W, S=4800 VA, Q≈2528.5 var
    let res = compute_ac_power(base_input(AcPowerSolveFor::RealPower)).expect("ac power");
    assert!((res.real_power_w - 4080.0).abs() < 1e-9);
    assert!((res.apparent_power_va - 4800.0).abs() < 1e-9);
    assert!((res.reactive_power_var - 2528.555).abs() < 0.01, "Q={}", res.reactive_power_var);
    assert!(res.apparent_power_va >= res.real_power_w);
}

#[test]
fn voltage_roundtrip() {
    let forward = compute_ac_power(base_input(AcPowerSolveFor::RealPower)).unwrap();
    let mut back = base_input(AcPowerSolveFor::Voltage);
    back.real_power = forward.real_power_w;
    let res = compute_ac_power(back).unwrap();
    assert!((res.voltage_v - 240.0).abs() < 1e-9);
}

#[test]
fn current_roundtrip() {
    let mut input = base_input(AcPowerSolveFor::Current);
    input.real_power = 4080.0;
    let res = compute_ac_power(input).unwrap();
    assert!((res.current_a - 20.0).abs() < 1e-9);
}

#[test]
fn solved_power_factor_matches() {
    let res = compute_ac_power(base_input(AcPowerSolveFor::PowerFactor)).unwrap();
    assert!((res.power_factor - 0.85).abs() < 1e-12);
}

#[test]
fn three_phase_uses_sqrt3() {
    let mut input = base_input(AcPowerSolveFor::RealPower);
    input.phase = PhaseType::Three;
    input.voltage = 400.0;
    input.current = 10.0;
    input.power_factor = 0.9;
    let res = compute_ac_power(input).unwrap();
    let expected = 3.0_f64.sqrt() * 400.0 * 10.0 * 0.9;
    assert!((res.real_power_w - expected).abs() < 1e-9);
}

#[test]
fn power_factor_out_of_range_rejected() {
    let mut input = base_input(AcPowerSolveFor::RealPower);
    input.power_factor = 1.2;
    assert!(matches!(
        compute_ac_power(input),
        Err(AcPowerError::PowerFactorOutOfRange(_))
    ));
}

#[test]
fn impossible_power_factor_reported() {
    // P > φ·V·I 이면 역률이 1을 넘는다.
    let mut input = base_input(AcPowerSolveFor::PowerFactor);
    input.real_power = 6000.0;
    assert!(matches!(
        compute_ac_power(input),
        Err(AcPowerError::ImpossiblePowerFactor(_))
    ));
}

#[test]
fn unity_power_factor_gives_zero_reactive() {
    // PF=1 이면 S=P 이고 Q는 부동소수점 오차 수준에서 0이어야 한다.
    let mut input = base_input(AcPowerSolveFor::RealPower);
    input.power_factor = 1.0;
    let res = compute_ac_power(input).unwrap();
    assert!(res.reactive_power_var.abs() < 1e-6, "Q={}", res.reactive_power_var);
}

#[test]
fn zero_current_rejected() {
    let mut input = base_input(AcPowerSolveFor::RealPower);
    input.current = 0.0;
    assert!(matches!(
        compute_ac_power(input),
        Err(AcPowerError::NonPositive(_))
    ));
}

#[test]
fn kilovolt_input_converts_to_base() {
    let mut input = base_input(AcPowerSolveFor::RealPower);
    input.voltage = 0.24;
    input.voltage_unit = VoltageUnit::Kilovolt;
    let res = compute_ac_power(input).unwrap();
    assert!((res.real_power_w - 4080.0).abs() < 1e-9);
}
