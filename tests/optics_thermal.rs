//! 광학/유체/열전달/판금 계산기 회귀 테스트.
use physics_engineering_toolbox::fabrication::bend_allowance::{
    compute_bend_allowance, BendAllowanceError, BendAllowanceInput,
};
use physics_engineering_toolbox::fluids::bernoulli::{
    compute_bernoulli, BernoulliError, BernoulliInput, BernoulliSolveFor,
};
use physics_engineering_toolbox::optics::refraction::{
    compute_refraction, RefractionError, RefractionMode,
};
use physics_engineering_toolbox::thermal::heat_transfer::{
    compute_conduction, compute_convection, compute_radiation, ConductionInput,
    ConductionSolveFor, ConvectionInput, ConvectionSolveFor, HeatTransferError, RadiationInput,
    RadiationSolveFor,
};
use physics_engineering_toolbox::units::{
    AngleUnit, AreaUnit, ConductivityUnit, DensityUnit, HeatTransferUnit, LengthUnit,
    PowerUnit, PressureUnit, TemperatureUnit, VelocityUnit,
};

#[test]
fn critical_angle_glass_to_air() {
    // n₁=1.5, n₂=1.0 => θc = arcsin(2/3) ≈ 41.81°
    let res = compute_refraction(RefractionMode::CriticalAngle { n1: 1.5, n2: 1.0 }).unwrap();
    assert!((res.value - 41.810).abs() < 0.01, "θc={}", res.value);
}

#[test]
fn total_internal_reflection_is_domain_error() {
    // 밀한 매질에서 60° 입사 시 sinθ₂ > 1 이므로 NaN이 아니라 오류여야 한다.
    let out = compute_refraction(RefractionMode::SnellAngle {
        n1: 1.5,
        n2: 1.0,
        incident_angle: 60.0,
        angle_unit: AngleUnit::Degree,
    });
    assert!(matches!(
        out,
        Err(RefractionError::TotalInternalReflection { .. })
    ));
}

#[test]
fn no_critical_angle_into_denser_medium() {
    assert!(matches!(
        compute_refraction(RefractionMode::CriticalAngle { n1: 1.0, n2: 1.5 }),
        Err(RefractionError::NoCriticalAngle { .. })
    ));
}

#[test]
fn snell_refraction_angle() {
    let res = compute_refraction(RefractionMode::SnellAngle {
        n1: 1.0,
        n2: 1.5,
        incident_angle: 30.0,
        angle_unit: AngleUnit::Degree,
    })
    .unwrap();
    assert!((res.value - 19.471).abs() < 0.01, "θ₂={}", res.value);
}

#[test]
fn index_from_speed() {
    let res = compute_refraction(RefractionMode::IndexFromSpeed {
        speed: 2.0e8,
        speed_unit: VelocityUnit::MeterPerSecond,
    })
    .unwrap();
    assert!((res.value - 1.499).abs() < 0.001);
}

fn bernoulli_base(solve_for: BernoulliSolveFor) -> BernoulliInput {
    BernoulliInput {
        solve_for,
        pressure1: 101_325.0,
        pressure2: 101_325.0,
        pressure_unit: PressureUnit::Pascal,
        velocity1: 0.0,
        velocity2: 0.0,
        velocity_unit: VelocityUnit::MeterPerSecond,
        height1: 0.0,
        height2: 0.0,
        height_unit: LengthUnit::Meter,
        density: 1000.0,
        density_unit: DensityUnit::KilogramPerCubicMeter,
    }
}

#[test]
fn bernoulli_hydrostatic_special_case() {
    // v₁=v₂=0 이면 ΔP = ρgΔh = 1000·9.81·10 = 98100 Pa
    let mut input = bernoulli_base(BernoulliSolveFor::Pressure2);
    input.height1 = 10.0;
    let res = compute_bernoulli(input).unwrap();
    assert!((res.value - (101_325.0 + 98_100.0)).abs() < 1e-6);
}

#[test]
fn bernoulli_velocity_negative_radicand_rejected() {
    // 하류 전수두가 상류보다 크면 속도 해가 없다.
    let mut input = bernoulli_base(BernoulliSolveFor::Velocity2);
    input.pressure2 = 1.0e6;
    assert!(matches!(
        compute_bernoulli(input),
        Err(BernoulliError::NegativeRadicand(_))
    ));
}

#[test]
fn bernoulli_density_solve() {
    // P₁−P₂ = ρg(h₂−h₁) 를 ρ에 대해 되풀면 1000이 나와야 한다.
    let mut input = bernoulli_base(BernoulliSolveFor::Density);
    input.height2 = 5.0;
    input.pressure1 = 101_325.0 + 1000.0 * 9.81 * 5.0;
    let res = compute_bernoulli(input).unwrap();
    assert!((res.value - 1000.0).abs() < 1e-9);
}

#[test]
fn conduction_heat_rate() {
    // Q = 0.6·1·(100−20)/0.05 = 960 W
    let res = compute_conduction(ConductionInput {
        solve_for: ConductionSolveFor::HeatRate,
        heat_rate: 0.0,
        heat_rate_unit: PowerUnit::Watt,
        conductivity: 0.6,
        conductivity_unit: ConductivityUnit::WPerMeterK,
        area: 1.0,
        area_unit: AreaUnit::SquareMeter,
        thickness: 0.05,
        thickness_unit: LengthUnit::Meter,
        hot_temp: 100.0,
        cold_temp: 20.0,
        temp_unit: TemperatureUnit::Celsius,
    })
    .unwrap();
    assert!((res.value - 960.0).abs() < 1e-9);
}

#[test]
fn convection_coefficient_roundtrip() {
    let q = compute_convection(ConvectionInput {
        solve_for: ConvectionSolveFor::HeatRate,
        heat_rate: 0.0,
        heat_rate_unit: PowerUnit::Watt,
        coefficient: 25.0,
        coefficient_unit: HeatTransferUnit::WPerSquareMeterK,
        area: 2.0,
        area_unit: AreaUnit::SquareMeter,
        surface_temp: 80.0,
        fluid_temp: 20.0,
        temp_unit: TemperatureUnit::Celsius,
    })
    .unwrap();
    assert!((q.value - 3000.0).abs() < 1e-9);

    let h = compute_convection(ConvectionInput {
        solve_for: ConvectionSolveFor::Coefficient,
        heat_rate: q.value,
        heat_rate_unit: PowerUnit::Watt,
        coefficient: 0.0,
        coefficient_unit: HeatTransferUnit::WPerSquareMeterK,
        area: 2.0,
        area_unit: AreaUnit::SquareMeter,
        surface_temp: 80.0,
        fluid_temp: 20.0,
        temp_unit: TemperatureUnit::Celsius,
    })
    .unwrap();
    assert!((h.value - 25.0).abs() < 1e-9);
}

fn radiation_base(solve_for: RadiationSolveFor) -> RadiationInput {
    RadiationInput {
        solve_for,
        heat_rate: 0.0,
        heat_rate_unit: PowerUnit::Watt,
        emissivity: 0.9,
        area: 1.5,
        area_unit: AreaUnit::SquareMeter,
        hot_temp: 400.0,
        cold_temp: 300.0,
        temp_unit: TemperatureUnit::Kelvin,
    }
}

#[test]
fn radiation_emissivity_roundtrip() {
    let q = compute_radiation(radiation_base(RadiationSolveFor::HeatRate)).unwrap();
    let mut back = radiation_base(RadiationSolveFor::Emissivity);
    back.heat_rate = q.value;
    let eps = compute_radiation(back).unwrap();
    assert!((eps.value - 0.9).abs() < 1e-9);
}

#[test]
fn radiation_hot_temp_roundtrip() {
    let q = compute_radiation(radiation_base(RadiationSolveFor::HeatRate)).unwrap();
    let mut back = radiation_base(RadiationSolveFor::HotTemp);
    back.heat_rate = q.value;
    let t1 = compute_radiation(back).unwrap();
    assert!((t1.value - 400.0).abs() < 1e-6, "T₁={}", t1.value);
}

#[test]
fn radiation_emissivity_out_of_range_rejected() {
    let mut input = radiation_base(RadiationSolveFor::HeatRate);
    input.emissivity = 1.5;
    assert!(matches!(
        compute_radiation(input),
        Err(HeatTransferError::EmissivityOutOfRange(_))
    ));
}

#[test]
fn conduction_same_temps_cannot_solve_conductivity() {
    let res = compute_conduction(ConductionInput {
        solve_for: ConductionSolveFor::Conductivity,
        heat_rate: 100.0,
        heat_rate_unit: PowerUnit::Watt,
        conductivity: 0.0,
        conductivity_unit: ConductivityUnit::WPerMeterK,
        area: 1.0,
        area_unit: AreaUnit::SquareMeter,
        thickness: 0.05,
        thickness_unit: LengthUnit::Meter,
        hot_temp: 50.0,
        cold_temp: 50.0,
        temp_unit: TemperatureUnit::Celsius,
    });
    assert!(matches!(
        res,
        Err(HeatTransferError::ZeroTemperatureDifference)
    ));
}

fn bend_input(thickness_mm: f64, radius_mm: f64, angle_deg: f64, k: f64) -> BendAllowanceInput {
    BendAllowanceInput {
        thickness: thickness_mm,
        thickness_unit: LengthUnit::Millimeter,
        bend_radius: radius_mm,
        bend_radius_unit: LengthUnit::Millimeter,
        bend_angle: angle_deg,
        bend_angle_unit: AngleUnit::Degree,
        k_factor: k,
    }
}

#[test]
fn bend_allowance_sharp_bend_limit() {
    // K=0.5, R→0 이면 BA → 0.5·T·A·(π/180)
    let res = compute_bend_allowance(bend_input(2.0, 0.0, 90.0, 0.5)).unwrap();
    let expected = 0.5 * 0.002 * 90.0 * std::f64::consts::PI / 180.0;
    assert!((res.bend_allowance_m - expected).abs() < 1e-12);
}

#[test]
fn bend_deduction_relation_holds() {
    let res = compute_bend_allowance(bend_input(2.0, 3.0, 90.0, 0.44)).unwrap();
    let reconstructed = 2.0 * res.outside_setback_m - res.bend_allowance_m;
    assert!((res.bend_deduction_m - reconstructed).abs() < 1e-12);
    assert!(res.arc_length_m > res.bend_allowance_m);
}

#[test]
fn bend_angle_out_of_range_rejected() {
    assert!(matches!(
        compute_bend_allowance(bend_input(2.0, 3.0, 200.0, 0.44)),
        Err(BendAllowanceError::AngleOutOfRange(_))
    ));
    assert!(matches!(
        compute_bend_allowance(bend_input(2.0, 3.0, 90.0, 1.5)),
        Err(BendAllowanceError::KFactorOutOfRange(_))
    ));
}
