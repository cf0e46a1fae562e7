//! 여러 계산기가 공유하는 물리 상수 모음.

/// 쿨롱 상수 k [N·m²/C²]
pub const COULOMB_CONSTANT: f64 = 8.99e9;

/// 슈테판-볼츠만 상수 σ [W/m²·K⁴]
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;

/// 표준 중력가속도 [m/s²]. 종단속도 등 일반 역학 계산에 사용한다.
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// 베르누이 식에서 쓰는 중력가속도 [m/s²]. 교과서 관례대로 9.81 고정.
pub const BERNOULLI_GRAVITY: f64 = 9.81;

/// 진공 중 빛의 속도 [m/s]
pub const SPEED_OF_LIGHT: f64 = 2.997_924_58e8;

/// 구리 밀도 [kg/m³]
pub const COPPER_DENSITY: f64 = 8960.0;

/// 구리 비저항 [Ω·m] (20°C 기준)
pub const COPPER_RESISTIVITY: f64 = 1.68e-8;

/// 해수면 표준 공기 밀도 [kg/m³]
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;
