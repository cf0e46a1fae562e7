use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `V`, `kW`, `uF`, `m/s`, `deg`, `kg/m3` 등을 사용할 수 있다.
/// 알 수 없는 단위 문자열은 배율 1로 넘기지 않고 오류로 돌려준다. UI 콤보/입력을
/// 거친 문자열이 실제 입력 경계이기 때문이다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Voltage => {
            let from = parse_voltage_unit(from_unit_str)?;
            let to = parse_voltage_unit(to_unit_str)?;
            Ok(convert_voltage(value, from, to))
        }
        QuantityKind::Current => {
            let from = parse_current_unit(from_unit_str)?;
            let to = parse_current_unit(to_unit_str)?;
            Ok(convert_current(value, from, to))
        }
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
        QuantityKind::Resistance => {
            let from = parse_resistance_unit(from_unit_str)?;
            let to = parse_resistance_unit(to_unit_str)?;
            Ok(convert_resistance(value, from, to))
        }
        QuantityKind::Inductance => {
            let from = parse_inductance_unit(from_unit_str)?;
            let to = parse_inductance_unit(to_unit_str)?;
            Ok(convert_inductance(value, from, to))
        }
        QuantityKind::Capacitance => {
            let from = parse_capacitance_unit(from_unit_str)?;
            let to = parse_capacitance_unit(to_unit_str)?;
            Ok(convert_capacitance(value, from, to))
        }
        QuantityKind::Frequency => {
            let from = parse_frequency_unit(from_unit_str)?;
            let to = parse_frequency_unit(to_unit_str)?;
            Ok(convert_frequency(value, from, to))
        }
        QuantityKind::Charge => {
            let from = parse_charge_unit(from_unit_str)?;
            let to = parse_charge_unit(to_unit_str)?;
            Ok(convert_charge(value, from, to))
        }
        QuantityKind::ElectricField => {
            let from = parse_electric_field_unit(from_unit_str)?;
            let to = parse_electric_field_unit(to_unit_str)?;
            Ok(convert_electric_field(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
        QuantityKind::Density => {
            let from = parse_density_unit(from_unit_str)?;
            let to = parse_density_unit(to_unit_str)?;
            Ok(convert_density(value, from, to))
        }
        QuantityKind::Time => {
            let from = parse_time_unit(from_unit_str)?;
            let to = parse_time_unit(to_unit_str)?;
            Ok(convert_time(value, from, to))
        }
        QuantityKind::Velocity => {
            let from = parse_velocity_unit(from_unit_str)?;
            let to = parse_velocity_unit(to_unit_str)?;
            Ok(convert_velocity(value, from, to))
        }
        QuantityKind::Acceleration => {
            let from = parse_acceleration_unit(from_unit_str)?;
            let to = parse_acceleration_unit(to_unit_str)?;
            Ok(convert_acceleration(value, from, to))
        }
        QuantityKind::Force => {
            let from = parse_force_unit(from_unit_str)?;
            let to = parse_force_unit(to_unit_str)?;
            Ok(convert_force(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::TemperatureDifference => {
            let from = parse_temperature_diff_unit(from_unit_str)?;
            let to = parse_temperature_diff_unit(to_unit_str)?;
            Ok(convert_temperature_diff(value, from, to))
        }
        QuantityKind::Angle => {
            let from = parse_angle_unit(from_unit_str)?;
            let to = parse_angle_unit(to_unit_str)?;
            Ok(convert_angle(value, from, to))
        }
        QuantityKind::Momentum => {
            let from = parse_momentum_unit(from_unit_str)?;
            let to = parse_momentum_unit(to_unit_str)?;
            Ok(convert_momentum(value, from, to))
        }
        QuantityKind::Energy => {
            let from = parse_energy_unit(from_unit_str)?;
            let to = parse_energy_unit(to_unit_str)?;
            Ok(convert_energy(value, from, to))
        }
    }
}

// 전압/전력은 milli와 mega가 소문자화하면 충돌하므로(mV vs MV) 대소문자를 구분한다.
pub fn parse_voltage_unit(s: &str) -> Result<VoltageUnit, ConversionError> {
    match s.trim() {
        "V" | "v" | "volt" => Ok(VoltageUnit::Volt),
        "mV" | "millivolt" => Ok(VoltageUnit::Millivolt),
        "kV" | "kv" | "kilovolt" => Ok(VoltageUnit::Kilovolt),
        "MV" | "megavolt" => Ok(VoltageUnit::Megavolt),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_current_unit(s: &str) -> Result<CurrentUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "a" | "amp" | "ampere" => Ok(CurrentUnit::Ampere),
        "ma" | "milliamp" => Ok(CurrentUnit::Milliampere),
        "ua" | "µa" | "microamp" => Ok(CurrentUnit::Microampere),
        "ka" | "kiloamp" => Ok(CurrentUnit::Kiloampere),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.trim() {
        "W" | "w" | "watt" | "VA" | "var" => Ok(PowerUnit::Watt),
        "mW" | "milliwatt" => Ok(PowerUnit::Milliwatt),
        "kW" | "kw" | "kVA" | "kvar" => Ok(PowerUnit::Kilowatt),
        "MW" | "megawatt" | "MVA" => Ok(PowerUnit::Megawatt),
        "hp" | "HP" => Ok(PowerUnit::Horsepower),
        "Btu/h" | "btu/h" | "btu/hr" => Ok(PowerUnit::BtuPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_resistance_unit(s: &str) -> Result<ResistanceUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "ohm" => Ok(ResistanceUnit::Ohm),
        "mohm" | "milliohm" => Ok(ResistanceUnit::Milliohm),
        "kohm" => Ok(ResistanceUnit::Kiloohm),
        "megohm" => Ok(ResistanceUnit::Megaohm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_inductance_unit(s: &str) -> Result<InductanceUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "h" | "henry" => Ok(InductanceUnit::Henry),
        "mh" => Ok(InductanceUnit::Millihenry),
        "uh" | "µh" => Ok(InductanceUnit::Microhenry),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_capacitance_unit(s: &str) -> Result<CapacitanceUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "f" | "farad" => Ok(CapacitanceUnit::Farad),
        "mf" => Ok(CapacitanceUnit::Millifarad),
        "uf" | "µf" => Ok(CapacitanceUnit::Microfarad),
        "nf" => Ok(CapacitanceUnit::Nanofarad),
        "pf" => Ok(CapacitanceUnit::Picofarad),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_frequency_unit(s: &str) -> Result<FrequencyUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "hz" | "hertz" => Ok(FrequencyUnit::Hertz),
        "khz" => Ok(FrequencyUnit::Kilohertz),
        "mhz" => Ok(FrequencyUnit::Megahertz),
        "ghz" => Ok(FrequencyUnit::Gigahertz),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_charge_unit(s: &str) -> Result<ChargeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "c" | "coulomb" => Ok(ChargeUnit::Coulomb),
        "mc" => Ok(ChargeUnit::Millicoulomb),
        "uc" | "µc" => Ok(ChargeUnit::Microcoulomb),
        "nc" => Ok(ChargeUnit::Nanocoulomb),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_electric_field_unit(s: &str) -> Result<ElectricFieldUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "v/m" => Ok(ElectricFieldUnit::VoltPerMeter),
        "n/c" => Ok(ElectricFieldUnit::NewtonPerCoulomb),
        "kv/m" => Ok(ElectricFieldUnit::KilovoltPerMeter),
        "v/cm" => Ok(ElectricFieldUnit::VoltPerCentimeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "km" => Ok(LengthUnit::Kilometer),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        "yd" | "yard" => Ok(LengthUnit::Yard),
        "mi" | "mile" => Ok(LengthUnit::Mile),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "cm2" | "cm^2" => Ok(AreaUnit::SquareCentimeter),
        "mm2" | "mm^2" => Ok(AreaUnit::SquareMillimeter),
        "in2" | "in^2" | "sqin" => Ok(AreaUnit::SquareInch),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "ml" | "milliliter" => Ok(VolumeUnit::Milliliter),
        "ft3" | "ft^3" | "cuft" => Ok(VolumeUnit::CubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg" => Ok(MassUnit::Kilogram),
        "g" => Ok(MassUnit::Gram),
        "mg" => Ok(MassUnit::Milligram),
        "t" | "ton" | "tonne" => Ok(MassUnit::Tonne),
        "lb" | "lbs" | "lbm" => Ok(MassUnit::Pound),
        "oz" => Ok(MassUnit::Ounce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg/m3" | "kg/m^3" => Ok(DensityUnit::KilogramPerCubicMeter),
        "g/cm3" | "g/cm^3" | "g/cc" => Ok(DensityUnit::GramPerCubicCentimeter),
        "lb/ft3" | "lb/ft^3" => Ok(DensityUnit::PoundPerCubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "s" | "sec" | "second" => Ok(TimeUnit::Second),
        "ms" => Ok(TimeUnit::Millisecond),
        "min" | "minute" => Ok(TimeUnit::Minute),
        "h" | "hr" | "hour" => Ok(TimeUnit::Hour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "km/h" | "kph" => Ok(VelocityUnit::KilometerPerHour),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        "mph" => Ok(VelocityUnit::MilePerHour),
        "kn" | "knot" => Ok(VelocityUnit::Knot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_acceleration_unit(s: &str) -> Result<AccelerationUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m/s2" | "m/s^2" => Ok(AccelerationUnit::MeterPerSecondSquared),
        "cm/s2" | "cm/s^2" | "gal" => Ok(AccelerationUnit::CentimeterPerSecondSquared),
        "ft/s2" | "ft/s^2" => Ok(AccelerationUnit::FootPerSecondSquared),
        "g" | "g0" => Ok(AccelerationUnit::StandardGravity),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_force_unit(s: &str) -> Result<ForceUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "n" | "newton" => Ok(ForceUnit::Newton),
        "kn" => Ok(ForceUnit::Kilonewton),
        "dyn" | "dyne" => Ok(ForceUnit::Dyne),
        "lbf" => Ok(ForceUnit::PoundForce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" => Ok(PressureUnit::Kilopascal),
        "mpa" => Ok(PressureUnit::Megapascal),
        "bar" => Ok(PressureUnit::Bar),
        "mbar" | "millibar" => Ok(PressureUnit::Millibar),
        "psi" => Ok(PressureUnit::Psi),
        "atm" => Ok(PressureUnit::Atmosphere),
        "mmhg" | "torr" => Ok(PressureUnit::MmHg),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_temperature_diff_unit(s: &str) -> Result<TemperatureDiffUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureDiffUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureDiffUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureDiffUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureDiffUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_angle_unit(s: &str) -> Result<AngleUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "deg" | "degree" | "°" => Ok(AngleUnit::Degree),
        "rad" | "radian" => Ok(AngleUnit::Radian),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_momentum_unit(s: &str) -> Result<MomentumUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg·m/s" | "kgm/s" | "kg.m/s" => Ok(MomentumUnit::KilogramMeterPerSecond),
        "n·s" | "ns" | "n.s" => Ok(MomentumUnit::NewtonSecond),
        "lb·ft/s" | "lbft/s" => Ok(MomentumUnit::PoundFootPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_energy_unit(s: &str) -> Result<EnergyUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "j" | "joule" => Ok(EnergyUnit::Joule),
        "kj" | "kilojoule" => Ok(EnergyUnit::Kilojoule),
        "cal" | "calorie" => Ok(EnergyUnit::Calorie),
        "kwh" => Ok(EnergyUnit::KilowattHour),
        "btu" => Ok(EnergyUnit::Btu),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
