//! 단위 변환 왕복 성질과 표시 포맷터 회귀 테스트.
use physics_engineering_toolbox::conversion::{self, convert};
use physics_engineering_toolbox::format::{format_value, format_with_unit};
use physics_engineering_toolbox::quantity::QuantityKind;

const KINDS_AND_UNITS: &[(QuantityKind, &[&str])] = &[
    (QuantityKind::Voltage, &["V", "mV", "kV", "MV"]),
    (QuantityKind::Current, &["A", "mA", "uA", "kA"]),
    (QuantityKind::Power, &["W", "mW", "kW", "MW", "hp", "Btu/h"]),
    (QuantityKind::Resistance, &["ohm", "mohm", "kohm", "megohm"]),
    (QuantityKind::Inductance, &["H", "mH", "uH"]),
    (QuantityKind::Capacitance, &["F", "mF", "uF", "nF", "pF"]),
    (QuantityKind::Frequency, &["Hz", "kHz", "MHz", "GHz"]),
    (QuantityKind::Charge, &["C", "mC", "uC", "nC"]),
    (QuantityKind::ElectricField, &["V/m", "N/C", "kV/m", "V/cm"]),
    (
        QuantityKind::Length,
        &["m", "mm", "cm", "km", "in", "ft", "yd", "mi"],
    ),
    (QuantityKind::Area, &["m2", "cm2", "mm2", "in2", "ft2"]),
    (QuantityKind::Volume, &["m3", "L", "mL", "ft3"]),
    (QuantityKind::Mass, &["kg", "g", "mg", "t", "lb", "oz"]),
    (QuantityKind::Density, &["kg/m3", "g/cm3", "lb/ft3"]),
    (QuantityKind::Time, &["s", "ms", "min", "h"]),
    (QuantityKind::Velocity, &["m/s", "km/h", "ft/s", "mph", "kn"]),
    (QuantityKind::Acceleration, &["m/s2", "cm/s2", "ft/s2", "g"]),
    (QuantityKind::Force, &["N", "kN", "dyn", "lbf"]),
    (
        QuantityKind::Pressure,
        &["Pa", "kPa", "MPa", "bar", "mbar", "psi", "atm", "mmHg"],
    ),
    (QuantityKind::Angle, &["deg", "rad"]),
    (QuantityKind::Momentum, &["kg·m/s", "N·s", "lb·ft/s"]),
    (QuantityKind::Energy, &["J", "kJ", "cal", "kWh", "Btu"]),
];

#[test]
fn roundtrip_is_identity_for_every_scale_unit() {
    // convert(x, u, u)는 to_base 후 from_base를 거치므로 왕복 성질 그 자체다.
    for (kind, units) in KINDS_AND_UNITS {
        for unit in *units {
            for magnitude in [1e-9, 1.0, 123.456, 1e9] {
                let out = convert(*kind, magnitude, unit, unit).unwrap();
                let rel = ((out - magnitude) / magnitude).abs();
                assert!(rel < 1e-12, "{kind:?} {unit} {magnitude} -> {out}");
            }
        }
    }
}

#[test]
fn temperature_roundtrip_with_offset() {
    for unit in ["C", "K", "F", "R"] {
        for value in [-40.0, 0.0, 100.0, 1e4] {
            let out = convert(QuantityKind::Temperature, value, unit, unit).unwrap();
            assert!((out - value).abs() < 1e-9, "{unit} {value} -> {out}");
        }
    }
}

#[test]
fn known_conversions() {
    let mm = convert(QuantityKind::Length, 1.0, "in", "mm").unwrap();
    assert!((mm - 25.4).abs() < 1e-12);

    let kelvin = convert(QuantityKind::Temperature, 0.0, "C", "K").unwrap();
    assert!((kelvin - 273.15).abs() < 1e-12);

    let celsius = convert(QuantityKind::Temperature, 32.0, "F", "C").unwrap();
    assert!(celsius.abs() < 1e-12);

    // 온도차는 오프셋 없이 배율만 적용된다.
    let dk = convert(QuantityKind::TemperatureDifference, 9.0, "F", "K").unwrap();
    assert!((dk - 5.0).abs() < 1e-12);

    let pa = convert(QuantityKind::Pressure, 1.0, "atm", "Pa").unwrap();
    assert!((pa - 101_325.0).abs() < 1e-6);

    let watt = convert(QuantityKind::Power, 1.0, "hp", "W").unwrap();
    assert!((watt - 745.699_872).abs() < 1e-6);

    let rad = convert(QuantityKind::Angle, 180.0, "deg", "rad").unwrap();
    assert!((rad - std::f64::consts::PI).abs() < 1e-12);
}

#[test]
fn unknown_unit_is_a_typed_error() {
    let err = convert(QuantityKind::Voltage, 1.0, "furlong", "V").unwrap_err();
    assert!(matches!(err, conversion::ConversionError::UnknownUnit(_)));
}

#[test]
fn formatter_fixed_range_trims_zeros() {
    assert_eq!(format_value(2.5), "2.5");
    assert_eq!(format_value(100.0), "100");
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(12345.678), "12345.678");
}

#[test]
fn formatter_switches_to_scientific() {
    assert!(format_value(1.0e7).contains('e'), "{}", format_value(1.0e7));
    assert!(format_value(5.0e-5).contains('e'), "{}", format_value(5.0e-5));
    // 경계 바로 안쪽은 고정 소수점으로 남는다.
    assert!(!format_value(999_999.0).contains('e'));
    assert!(!format_value(1.0e-4).contains('e'));
}

#[test]
fn formatter_appends_unit() {
    assert_eq!(format_with_unit(2.5, "V"), "2.5 V");
    assert_eq!(format_with_unit(0.85, ""), "0.85");
}
