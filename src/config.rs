use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::*;

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI 기준. 내부 계산 기본값.
    SI,
    /// CGS 혼합 (cm, g, dyn)
    CGS,
    /// 영국식/야드파운드법
    Imperial,
}

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub voltage: VoltageUnit,
    pub current: CurrentUnit,
    pub power: PowerUnit,
    pub resistance: ResistanceUnit,
    pub inductance: InductanceUnit,
    pub capacitance: CapacitanceUnit,
    pub frequency: FrequencyUnit,
    pub charge: ChargeUnit,
    pub electric_field: ElectricFieldUnit,
    pub length: LengthUnit,
    pub area: AreaUnit,
    pub volume: VolumeUnit,
    pub mass: MassUnit,
    pub density: DensityUnit,
    pub time: TimeUnit,
    pub velocity: VelocityUnit,
    pub acceleration: AccelerationUnit,
    pub force: ForceUnit,
    pub pressure: PressureUnit,
    pub temperature: TemperatureUnit,
    pub temperature_diff: TemperatureDiffUnit,
    pub angle: AngleUnit,
    pub momentum: MomentumUnit,
    pub energy: EnergyUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            voltage: VoltageUnit::Volt,
            current: CurrentUnit::Ampere,
            power: PowerUnit::Watt,
            resistance: ResistanceUnit::Ohm,
            inductance: InductanceUnit::Millihenry,
            capacitance: CapacitanceUnit::Microfarad,
            frequency: FrequencyUnit::Hertz,
            charge: ChargeUnit::Microcoulomb,
            electric_field: ElectricFieldUnit::VoltPerMeter,
            length: LengthUnit::Meter,
            area: AreaUnit::SquareMeter,
            volume: VolumeUnit::CubicMeter,
            mass: MassUnit::Kilogram,
            density: DensityUnit::KilogramPerCubicMeter,
            time: TimeUnit::Second,
            velocity: VelocityUnit::MeterPerSecond,
            acceleration: AccelerationUnit::MeterPerSecondSquared,
            force: ForceUnit::Newton,
            pressure: PressureUnit::Kilopascal,
            temperature: TemperatureUnit::Celsius,
            temperature_diff: TemperatureDiffUnit::Kelvin,
            angle: AngleUnit::Degree,
            momentum: MomentumUnit::KilogramMeterPerSecond,
            energy: EnergyUnit::Joule,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    /// 언어 코드(auto/en-us/ko-kr)
    pub language: String,
    /// 외부 언어팩 디렉터리 (없으면 내장 팩 사용)
    pub language_pack_dir: Option<String>,
    /// GUI 창 투명도
    pub window_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::SI,
            default_units: DefaultUnits::default(),
            language: "auto".to_string(),
            language_pack_dir: None,
            window_alpha: 1.0,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
