//! 전기 계산기(전기장/커패시터/리액턴스/전선) 회귀 테스트.
use physics_engineering_toolbox::electrical::capacitor_network::{
    compute_equivalent, CapacitorEntry, CapacitorNetworkError, NetworkKind,
};
use physics_engineering_toolbox::electrical::electric_field::{
    compute_electric_field, ElectricFieldError, ElectricFieldMode,
};
use physics_engineering_toolbox::electrical::inductive_reactance::{
    compute_reactance, compute_rl_impedance, ReactanceInput, ReactanceSolveFor,
};
use physics_engineering_toolbox::electrical::wire_weight::{
    compute_wire_weight, DiameterSpec, WireWeightError, WireWeightInput,
};
use physics_engineering_toolbox::material_db;
use physics_engineering_toolbox::units::{
    CapacitanceUnit, ChargeUnit, ForceUnit, FrequencyUnit, InductanceUnit, LengthUnit,
    ResistanceUnit, VoltageUnit,
};

#[test]
fn series_capacitors_10_and_22_microfarad() {
    // 1/Ceq = 1/10 + 1/22 => Ceq = 6.875 µF
    let entries = [
        CapacitorEntry {
            value: 10.0,
            unit: CapacitanceUnit::Microfarad,
        },
        CapacitorEntry {
            value: 22.0,
            unit: CapacitanceUnit::Microfarad,
        },
    ];
    let res = compute_equivalent(NetworkKind::Series, &entries).unwrap();
    assert!((res.equivalent_f - 6.875e-6).abs() < 1e-12);
}

#[test]
fn parallel_capacitors_sum() {
    let entries = [
        CapacitorEntry {
            value: 10.0,
            unit: CapacitanceUnit::Microfarad,
        },
        CapacitorEntry {
            value: 22.0,
            unit: CapacitanceUnit::Microfarad,
        },
    ];
    let res = compute_equivalent(NetworkKind::Parallel, &entries).unwrap();
    assert!((res.equivalent_f - 32.0e-6).abs() < 1e-12);
}

#[test]
fn capacitor_guards() {
    assert!(matches!(
        compute_equivalent(NetworkKind::Series, &[]),
        Err(CapacitorNetworkError::EmptyList)
    ));
    let entries = [
        CapacitorEntry {
            value: 10.0,
            unit: CapacitanceUnit::Microfarad,
        },
        CapacitorEntry {
            value: 0.0,
            unit: CapacitanceUnit::Microfarad,
        },
    ];
    assert!(matches!(
        compute_equivalent(NetworkKind::Series, &entries),
        Err(CapacitorNetworkError::NonPositiveEntry(1))
    ));
}

#[test]
fn point_charge_field() {
    // E = 8.99e9 · 1e-6 / 0.5² = 35960 V/m
    let res = compute_electric_field(ElectricFieldMode::PointCharge {
        charge: 1.0,
        charge_unit: ChargeUnit::Microcoulomb,
        distance: 0.5,
        distance_unit: LengthUnit::Meter,
    })
    .unwrap();
    assert!((res.field_v_per_m - 35_960.0).abs() < 1e-6);
}

#[test]
fn field_from_force_and_plates() {
    let from_force = compute_electric_field(ElectricFieldMode::ForceOnCharge {
        force: 2.0,
        force_unit: ForceUnit::Newton,
        charge: 4.0,
        charge_unit: ChargeUnit::Coulomb,
    })
    .unwrap();
    assert!((from_force.field_v_per_m - 0.5).abs() < 1e-12);

    let from_plates = compute_electric_field(ElectricFieldMode::UniformField {
        voltage: 120.0,
        voltage_unit: VoltageUnit::Volt,
        distance: 0.01,
        distance_unit: LengthUnit::Meter,
    })
    .unwrap();
    assert!((from_plates.field_v_per_m - 12_000.0).abs() < 1e-9);
}

#[test]
fn electric_field_guards() {
    assert!(matches!(
        compute_electric_field(ElectricFieldMode::PointCharge {
            charge: 1.0,
            charge_unit: ChargeUnit::Microcoulomb,
            distance: 0.0,
            distance_unit: LengthUnit::Meter,
        }),
        Err(ElectricFieldError::NonPositiveDistance)
    ));
    assert!(matches!(
        compute_electric_field(ElectricFieldMode::ForceOnCharge {
            force: 1.0,
            force_unit: ForceUnit::Newton,
            charge: 0.0,
            charge_unit: ChargeUnit::Coulomb,
        }),
        Err(ElectricFieldError::ZeroCharge)
    ));
}

fn reactance_input(solve_for: ReactanceSolveFor) -> ReactanceInput {
    ReactanceInput {
        solve_for,
        frequency: 60.0,
        frequency_unit: FrequencyUnit::Hertz,
        inductance: 10.0,
        inductance_unit: InductanceUnit::Millihenry,
        reactance: 0.0,
        reactance_unit: ResistanceUnit::Ohm,
    }
}

#[test]
fn reactance_at_60hz_10mh() {
    // XL = 2π·60·0.01 ≈ 3.7699 Ω
    let res = compute_reactance(reactance_input(ReactanceSolveFor::Reactance)).unwrap();
    assert!((res.reactance_ohm - 3.769_911).abs() < 1e-5);
}

#[test]
fn reactance_inverse_solves_roundtrip() {
    let xl = compute_reactance(reactance_input(ReactanceSolveFor::Reactance))
        .unwrap()
        .reactance_ohm;

    let mut for_l = reactance_input(ReactanceSolveFor::Inductance);
    for_l.reactance = xl;
    let l = compute_reactance(for_l).unwrap();
    assert!((l.inductance_h - 0.01).abs() < 1e-12);

    let mut for_f = reactance_input(ReactanceSolveFor::Frequency);
    for_f.reactance = xl;
    let f = compute_reactance(for_f).unwrap();
    assert!((f.frequency_hz - 60.0).abs() < 1e-9);
}

#[test]
fn rl_impedance_three_four_five() {
    let res = compute_rl_impedance(3.0, ResistanceUnit::Ohm, 4.0, ResistanceUnit::Ohm).unwrap();
    assert!((res.impedance_ohm - 5.0).abs() < 1e-12);
    assert!((res.power_factor - 0.6).abs() < 1e-12);
    assert!((res.phase_deg - 53.130).abs() < 0.01);
}

#[test]
fn awg_12_diameter_matches_standard() {
    // AWG 12 공칭 직경 ≈ 2.052 mm
    let d = material_db::awg_diameter_m(12).unwrap();
    assert!((d * 1000.0 - 2.052).abs() < 0.01, "d={}", d * 1000.0);
    assert!(material_db::awg_diameter_m(99).is_none());
}

#[test]
fn wire_weight_and_resistance_2mm_100m() {
    // A = π·(0.001)² ≈ 3.1416e-6 m², W = A·100·8960 ≈ 2.815 kg, R ≈ 0.535 Ω
    let res = compute_wire_weight(WireWeightInput {
        diameter: DiameterSpec::Direct {
            value: 2.0,
            unit: LengthUnit::Millimeter,
        },
        length: 100.0,
        length_unit: LengthUnit::Meter,
    })
    .unwrap();
    assert!((res.weight_kg - 2.8149).abs() < 0.001, "W={}", res.weight_kg);
    assert!((res.resistance_ohm - 0.5348).abs() < 0.001, "R={}", res.resistance_ohm);
}

#[test]
fn wire_awg_lookup_used_for_area() {
    let direct = compute_wire_weight(WireWeightInput {
        diameter: DiameterSpec::Direct {
            value: material_db::awg_diameter_m(12).unwrap(),
            unit: LengthUnit::Meter,
        },
        length: 10.0,
        length_unit: LengthUnit::Meter,
    })
    .unwrap();
    let by_awg = compute_wire_weight(WireWeightInput {
        diameter: DiameterSpec::Awg(12),
        length: 10.0,
        length_unit: LengthUnit::Meter,
    })
    .unwrap();
    assert!((direct.weight_kg - by_awg.weight_kg).abs() < 1e-12);
}

#[test]
fn wire_guards() {
    assert!(matches!(
        compute_wire_weight(WireWeightInput {
            diameter: DiameterSpec::Awg(77),
            length: 10.0,
            length_unit: LengthUnit::Meter,
        }),
        Err(WireWeightError::UnknownGauge(77))
    ));
    assert!(matches!(
        compute_wire_weight(WireWeightInput {
            diameter: DiameterSpec::Direct {
                value: 2.0,
                unit: LengthUnit::Millimeter,
            },
            length: 0.0,
            length_unit: LengthUnit::Meter,
        }),
        Err(WireWeightError::NonPositiveLength)
    ));
}
