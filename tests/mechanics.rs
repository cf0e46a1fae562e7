//! 역학 계산기(변위/충격량/종단속도) 회귀 테스트.
use physics_engineering_toolbox::mechanics::displacement::{
    compute_displacement, DisplacementError, DisplacementMode,
};
use physics_engineering_toolbox::mechanics::impulse_momentum::{
    compute_impulse, compute_momentum, compute_momentum_change, ImpulseInput, ImpulseSolveFor,
    MomentumInput, MomentumSolveFor,
};
use physics_engineering_toolbox::mechanics::terminal_velocity::{
    compute_terminal_velocity, TerminalVelocityError, TerminalVelocityInput,
    TerminalVelocitySolveFor,
};
use physics_engineering_toolbox::units::{
    AccelerationUnit, AreaUnit, DensityUnit, ForceUnit, LengthUnit, MassUnit, MomentumUnit,
    TimeUnit, VelocityUnit,
};

fn terminal_input(solve_for: TerminalVelocitySolveFor) -> TerminalVelocityInput {
    TerminalVelocityInput {
        solve_for,
        mass: 75.0,
        mass_unit: MassUnit::Kilogram,
        area: 0.7,
        area_unit: AreaUnit::SquareMeter,
        drag_coefficient: 0.82,
        fluid_density: 1.225,
        fluid_density_unit: DensityUnit::KilogramPerCubicMeter,
        velocity: 0.0,
        velocity_unit: VelocityUnit::MeterPerSecond,
    }
}

#[test]
fn skydiver_terminal_velocity() {
    // 75 kg, 0.7 m², C_d 0.82, 공기 1.225 kg/m³ => 약 45.7~45.8 m/s
    let res = compute_terminal_velocity(terminal_input(TerminalVelocitySolveFor::Velocity))
        .expect("terminal velocity");
    assert!((res.velocity_ms - 45.74).abs() < 0.1, "v={}", res.velocity_ms);
}

#[test]
fn terminal_velocity_mass_roundtrip() {
    let v = compute_terminal_velocity(terminal_input(TerminalVelocitySolveFor::Velocity))
        .unwrap()
        .velocity_ms;
    let mut input = terminal_input(TerminalVelocitySolveFor::Mass);
    input.velocity = v;
    let res = compute_terminal_velocity(input).unwrap();
    assert!((res.mass_kg - 75.0).abs() < 1e-9);
}

#[test]
fn terminal_velocity_drag_roundtrip() {
    let v = compute_terminal_velocity(terminal_input(TerminalVelocitySolveFor::Velocity))
        .unwrap()
        .velocity_ms;
    let mut input = terminal_input(TerminalVelocitySolveFor::DragCoefficient);
    input.velocity = v;
    let res = compute_terminal_velocity(input).unwrap();
    assert!((res.drag_coefficient - 0.82).abs() < 1e-9);
}

#[test]
fn terminal_velocity_rejects_zero_area() {
    let mut input = terminal_input(TerminalVelocitySolveFor::Velocity);
    input.area = 0.0;
    assert!(matches!(
        compute_terminal_velocity(input),
        Err(TerminalVelocityError::NonPositive(_))
    ));
}

#[test]
fn displacement_uniform_acceleration() {
    // 자유낙하 2초: s = ½·9.81·4 = 19.62 m
    let res = compute_displacement(DisplacementMode::UniformAcceleration {
        initial_velocity: 0.0,
        velocity_unit: VelocityUnit::MeterPerSecond,
        time: 2.0,
        time_unit: TimeUnit::Second,
        acceleration: 9.81,
        acceleration_unit: AccelerationUnit::MeterPerSecondSquared,
    })
    .unwrap();
    assert!((res.displacement_m - 19.62).abs() < 1e-9);
}

#[test]
fn displacement_velocity_squared_roundtrip() {
    // s = (v²−v₀²)/(2a) 와 v² = v₀² + 2as 는 서로 역이다.
    let res = compute_displacement(DisplacementMode::VelocitySquared {
        initial_velocity: 0.0,
        final_velocity: 10.0,
        velocity_unit: VelocityUnit::MeterPerSecond,
        acceleration: 5.0,
        acceleration_unit: AccelerationUnit::MeterPerSecondSquared,
    })
    .unwrap();
    assert!((res.displacement_m - 10.0).abs() < 1e-9);
    let v_final = (2.0_f64 * 5.0 * res.displacement_m).sqrt();
    assert!((v_final - 10.0).abs() < 1e-9);
}

#[test]
fn displacement_position_difference_converts_units() {
    let res = compute_displacement(DisplacementMode::PositionDifference {
        initial: 100.0,
        end: 250.0,
        unit: LengthUnit::Centimeter,
    })
    .unwrap();
    assert!((res.displacement_m - 1.5).abs() < 1e-12);
}

#[test]
fn displacement_zero_acceleration_rejected() {
    assert!(matches!(
        compute_displacement(DisplacementMode::VelocitySquared {
            initial_velocity: 0.0,
            final_velocity: 10.0,
            velocity_unit: VelocityUnit::MeterPerSecond,
            acceleration: 0.0,
            acceleration_unit: AccelerationUnit::MeterPerSecondSquared,
        }),
        Err(DisplacementError::ZeroAcceleration)
    ));
}

#[test]
fn displacement_negative_time_rejected() {
    assert!(matches!(
        compute_displacement(DisplacementMode::ConstantVelocity {
            velocity: 5.0,
            velocity_unit: VelocityUnit::MeterPerSecond,
            time: -1.0,
            time_unit: TimeUnit::Second,
        }),
        Err(DisplacementError::NonPositiveTime)
    ));
}

#[test]
fn impulse_force_time_roundtrip() {
    let j = compute_impulse(ImpulseInput {
        solve_for: ImpulseSolveFor::Impulse,
        force: 100.0,
        force_unit: ForceUnit::Newton,
        time: 0.5,
        time_unit: TimeUnit::Second,
        impulse: 0.0,
        impulse_unit: MomentumUnit::NewtonSecond,
    })
    .unwrap();
    assert!((j.value - 50.0).abs() < 1e-12);

    let f = compute_impulse(ImpulseInput {
        solve_for: ImpulseSolveFor::Force,
        force: 0.0,
        force_unit: ForceUnit::Newton,
        time: 0.5,
        time_unit: TimeUnit::Second,
        impulse: j.value,
        impulse_unit: MomentumUnit::NewtonSecond,
    })
    .unwrap();
    assert!((f.value - 100.0).abs() < 1e-12);
}

#[test]
fn momentum_mass_velocity_roundtrip() {
    let p = compute_momentum(MomentumInput {
        solve_for: MomentumSolveFor::Momentum,
        mass: 5.0,
        mass_unit: MassUnit::Kilogram,
        velocity: 10.0,
        velocity_unit: VelocityUnit::MeterPerSecond,
        momentum: 0.0,
        momentum_unit: MomentumUnit::KilogramMeterPerSecond,
    })
    .unwrap();
    assert!((p.value - 50.0).abs() < 1e-12);

    let v = compute_momentum(MomentumInput {
        solve_for: MomentumSolveFor::Velocity,
        mass: 5.0,
        mass_unit: MassUnit::Kilogram,
        velocity: 0.0,
        velocity_unit: VelocityUnit::MeterPerSecond,
        momentum: p.value,
        momentum_unit: MomentumUnit::KilogramMeterPerSecond,
    })
    .unwrap();
    assert!((v.value - 10.0).abs() < 1e-12);
}

#[test]
fn momentum_change_equals_impulse() {
    // Δp = m(v_f − v_i) = 5·(10−0) = 50 = J
    let dp = compute_momentum_change(
        5.0,
        MassUnit::Kilogram,
        0.0,
        10.0,
        VelocityUnit::MeterPerSecond,
    )
    .unwrap();
    assert!((dp.value - 50.0).abs() < 1e-12);
}
