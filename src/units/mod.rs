//! 단위 정의 및 변환 모듈 모음.

pub mod acceleration;
pub mod angle;
pub mod area;
pub mod capacitance;
pub mod charge;
pub mod conductivity;
pub mod current;
pub mod density;
pub mod electric_field;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod heat_transfer;
pub mod inductance;
pub mod length;
pub mod mass;
pub mod momentum;
pub mod power;
pub mod pressure;
pub mod resistance;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod voltage;
pub mod volume;

pub use acceleration::{convert_acceleration, AccelerationUnit};
pub use angle::{convert_angle, AngleUnit};
pub use area::{convert_area, AreaUnit};
pub use capacitance::{convert_capacitance, CapacitanceUnit};
pub use charge::{convert_charge, ChargeUnit};
pub use conductivity::{convert_conductivity, ConductivityUnit};
pub use current::{convert_current, CurrentUnit};
pub use density::{convert_density, DensityUnit};
pub use electric_field::{convert_electric_field, ElectricFieldUnit};
pub use energy::{convert_energy, EnergyUnit};
pub use force::{convert_force, ForceUnit};
pub use frequency::{convert_frequency, FrequencyUnit};
pub use heat_transfer::{convert_heat_transfer, HeatTransferUnit};
pub use inductance::{convert_inductance, InductanceUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use momentum::{convert_momentum, MomentumUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use resistance::{convert_resistance, ResistanceUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
pub use time::{convert_time, TimeUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use voltage::{convert_voltage, VoltageUnit};
pub use volume::{convert_volume, VolumeUnit};
