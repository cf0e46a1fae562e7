use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const RESULT_HEADING: &str = "general.result_heading";
    pub const STEPS_HEADING: &str = "general.steps_heading";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_ELECTRICAL: &str = "main_menu.electrical";
    pub const MAIN_MENU_MECHANICS: &str = "main_menu.mechanics";
    pub const MAIN_MENU_FLUIDS_THERMAL: &str = "main_menu.fluids_thermal";
    pub const MAIN_MENU_OPTICS: &str = "main_menu.optics";
    pub const MAIN_MENU_FABRICATION: &str = "main_menu.fabrication";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS_LINE1: &str = "unit_conversion.options_line1";
    pub const UNIT_CONVERSION_OPTIONS_LINE2: &str = "unit_conversion.options_line2";
    pub const UNIT_CONVERSION_OPTIONS_LINE3: &str = "unit_conversion.options_line3";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const ELECTRICAL_HEADING: &str = "electrical.heading";
    pub const ELECTRICAL_OPTIONS: &str = "electrical.options";

    pub const AC_POWER_HEADING: &str = "ac_power.heading";
    pub const AC_POWER_SOLVE_OPTIONS: &str = "ac_power.solve_options";
    pub const AC_POWER_PHASE_PROMPT: &str = "ac_power.phase_prompt";
    pub const PROMPT_VOLTAGE: &str = "prompt.voltage";
    pub const PROMPT_CURRENT: &str = "prompt.current";
    pub const PROMPT_POWER_FACTOR: &str = "prompt.power_factor";
    pub const PROMPT_REAL_POWER: &str = "prompt.real_power";

    pub const EFIELD_HEADING: &str = "efield.heading";
    pub const EFIELD_OPTIONS: &str = "efield.options";
    pub const PROMPT_CHARGE: &str = "prompt.charge";
    pub const PROMPT_DISTANCE: &str = "prompt.distance";
    pub const PROMPT_FORCE: &str = "prompt.force";

    pub const CAP_HEADING: &str = "capacitor.heading";
    pub const CAP_KIND_PROMPT: &str = "capacitor.kind_prompt";
    pub const CAP_COUNT_PROMPT: &str = "capacitor.count_prompt";
    pub const CAP_VALUE_PROMPT: &str = "capacitor.value_prompt";

    pub const REACTANCE_HEADING: &str = "reactance.heading";
    pub const REACTANCE_OPTIONS: &str = "reactance.options";
    pub const PROMPT_FREQUENCY: &str = "prompt.frequency";
    pub const PROMPT_INDUCTANCE: &str = "prompt.inductance";
    pub const PROMPT_REACTANCE: &str = "prompt.reactance";
    pub const PROMPT_RESISTANCE: &str = "prompt.resistance";

    pub const WIRE_HEADING: &str = "wire.heading";
    pub const WIRE_OPTIONS: &str = "wire.options";
    pub const PROMPT_DIAMETER: &str = "prompt.diameter";
    pub const PROMPT_AWG: &str = "prompt.awg";
    pub const PROMPT_WIRE_LENGTH: &str = "prompt.wire_length";

    pub const MECHANICS_HEADING: &str = "mechanics.heading";
    pub const MECHANICS_OPTIONS: &str = "mechanics.options";

    pub const DISPLACEMENT_HEADING: &str = "displacement.heading";
    pub const DISPLACEMENT_OPTIONS: &str = "displacement.options";
    pub const PROMPT_INITIAL_POSITION: &str = "prompt.initial_position";
    pub const PROMPT_FINAL_POSITION: &str = "prompt.final_position";
    pub const PROMPT_VELOCITY: &str = "prompt.velocity";
    pub const PROMPT_INITIAL_VELOCITY: &str = "prompt.initial_velocity";
    pub const PROMPT_FINAL_VELOCITY: &str = "prompt.final_velocity";
    pub const PROMPT_TIME: &str = "prompt.time";
    pub const PROMPT_ACCELERATION: &str = "prompt.acceleration";

    pub const IMPULSE_HEADING: &str = "impulse.heading";
    pub const IMPULSE_OPTIONS: &str = "impulse.options";
    pub const IMPULSE_SOLVE_PROMPT: &str = "impulse.solve_prompt";
    pub const PROMPT_IMPULSE: &str = "prompt.impulse";
    pub const PROMPT_MASS: &str = "prompt.mass";
    pub const PROMPT_MOMENTUM: &str = "prompt.momentum";

    pub const TERMINAL_HEADING: &str = "terminal.heading";
    pub const TERMINAL_OPTIONS: &str = "terminal.options";
    pub const PROMPT_AREA: &str = "prompt.area";
    pub const PROMPT_DRAG_COEFF: &str = "prompt.drag_coeff";
    pub const PROMPT_FLUID_DENSITY: &str = "prompt.fluid_density";
    pub const PROMPT_TERMINAL_VELOCITY: &str = "prompt.terminal_velocity";

    pub const FLUIDS_THERMAL_HEADING: &str = "fluids_thermal.heading";
    pub const FLUIDS_THERMAL_OPTIONS: &str = "fluids_thermal.options";

    pub const BERNOULLI_HEADING: &str = "bernoulli.heading";
    pub const BERNOULLI_OPTIONS: &str = "bernoulli.options";
    pub const PROMPT_PRESSURE1: &str = "prompt.pressure1";
    pub const PROMPT_PRESSURE2: &str = "prompt.pressure2";
    pub const PROMPT_VELOCITY1: &str = "prompt.velocity1";
    pub const PROMPT_VELOCITY2: &str = "prompt.velocity2";
    pub const PROMPT_HEIGHT1: &str = "prompt.height1";
    pub const PROMPT_HEIGHT2: &str = "prompt.height2";
    pub const PROMPT_DENSITY: &str = "prompt.density";

    pub const HEAT_HEADING: &str = "heat.heading";
    pub const HEAT_MODE_OPTIONS: &str = "heat.mode_options";
    pub const HEAT_SOLVE_PROMPT: &str = "heat.solve_prompt";
    pub const HEAT_CONDUCTION_SOLVE_OPTIONS: &str = "heat.conduction_solve_options";
    pub const HEAT_CONVECTION_SOLVE_OPTIONS: &str = "heat.convection_solve_options";
    pub const HEAT_RADIATION_SOLVE_OPTIONS: &str = "heat.radiation_solve_options";
    pub const PROMPT_CONDUCTIVITY: &str = "prompt.conductivity";
    pub const PROMPT_COEFFICIENT: &str = "prompt.coefficient";
    pub const PROMPT_THICKNESS: &str = "prompt.thickness";
    pub const PROMPT_HOT_TEMP: &str = "prompt.hot_temp";
    pub const PROMPT_COLD_TEMP: &str = "prompt.cold_temp";
    pub const PROMPT_SURFACE_TEMP: &str = "prompt.surface_temp";
    pub const PROMPT_FLUID_TEMP: &str = "prompt.fluid_temp";
    pub const PROMPT_EMISSIVITY: &str = "prompt.emissivity";
    pub const PROMPT_HEAT_RATE: &str = "prompt.heat_rate";

    pub const OPTICS_HEADING: &str = "optics.heading";
    pub const OPTICS_OPTIONS: &str = "optics.options";
    pub const PROMPT_INDEX_N1: &str = "prompt.index_n1";
    pub const PROMPT_INDEX_N2: &str = "prompt.index_n2";
    pub const PROMPT_INCIDENT_ANGLE: &str = "prompt.incident_angle";
    pub const PROMPT_REFRACTED_ANGLE: &str = "prompt.refracted_angle";
    pub const PROMPT_LIGHT_SPEED: &str = "prompt.light_speed";
    pub const PROMPT_INDEX: &str = "prompt.index";

    pub const FAB_HEADING: &str = "fabrication.heading";
    pub const PROMPT_SHEET_THICKNESS: &str = "prompt.sheet_thickness";
    pub const PROMPT_BEND_RADIUS: &str = "prompt.bend_radius";
    pub const PROMPT_BEND_ANGLE: &str = "prompt.bend_angle";
    pub const PROMPT_K_FACTOR: &str = "prompt.k_factor";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 팩/문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(value) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&value) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        RESULT_HEADING => "결과:",
        STEPS_HEADING => "풀이 과정:",
        PROMPT_SELECT => "선택: ",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        MAIN_MENU_TITLE => "\n=== Physics Engineering Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) 단위 변환기",
        MAIN_MENU_ELECTRICAL => "2) 전기 계산",
        MAIN_MENU_MECHANICS => "3) 역학 계산",
        MAIN_MENU_FLUIDS_THERMAL => "4) 유체/열전달 계산",
        MAIN_MENU_OPTICS => "5) 광학 계산",
        MAIN_MENU_FABRICATION => "6) 판금 계산",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS_LINE1 => {
            "1) 전압  2) 전류  3) 전력  4) 저항  5) 인덕턴스  6) 정전용량  7) 주파수  8) 전하량"
        }
        UNIT_CONVERSION_OPTIONS_LINE2 => {
            "9) 전기장 10) 길이 11) 면적 12) 체적 13) 질량 14) 밀도 15) 시간 16) 속도"
        }
        UNIT_CONVERSION_OPTIONS_LINE3 => {
            "17) 가속도 18) 힘 19) 압력 20) 온도 21) 온도차 22) 각도 23) 운동량 24) 에너지"
        }
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: V, kW, m/s): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: mV, hp, km/h): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        ELECTRICAL_HEADING => "\n-- 전기 계산 --",
        ELECTRICAL_OPTIONS => {
            "1) AC 전력  2) 전기장  3) 커패시터 합성  4) 유도성 리액턴스/RL  5) 전선 중량"
        }
        AC_POWER_HEADING => "\n-- AC 전력 (P = φ·V·I·PF) --",
        AC_POWER_SOLVE_OPTIONS => "풀 변수: 1) 유효전력 P  2) 전압 V  3) 전류 I  4) 역률 PF",
        AC_POWER_PHASE_PROMPT => "상 선택 (1=단상, 3=3상): ",
        PROMPT_VOLTAGE => "전압 [V]: ",
        PROMPT_CURRENT => "전류 [A]: ",
        PROMPT_POWER_FACTOR => "역률 (0~1): ",
        PROMPT_REAL_POWER => "유효전력 [W]: ",
        EFIELD_HEADING => "\n-- 전기장 --",
        EFIELD_OPTIONS => "1) 점전하 E=kQ/r²  2) 힘/전하 E=F/q  3) 평행판 E=V/d",
        PROMPT_CHARGE => "전하량 [C]: ",
        PROMPT_DISTANCE => "거리 [m]: ",
        PROMPT_FORCE => "힘 [N]: ",
        CAP_HEADING => "\n-- 커패시터 합성 --",
        CAP_KIND_PROMPT => "연결 방식 (1=직렬, 2=병렬): ",
        CAP_COUNT_PROMPT => "커패시터 개수: ",
        CAP_VALUE_PROMPT => "번째 커패시터 [µF]: ",
        REACTANCE_HEADING => "\n-- 유도성 리액턴스 (XL = 2πfL) --",
        REACTANCE_OPTIONS => {
            "1) XL 계산  2) L 계산  3) f 계산  4) RL 임피던스/위상각"
        }
        PROMPT_FREQUENCY => "주파수 [Hz]: ",
        PROMPT_INDUCTANCE => "인덕턴스 [H]: ",
        PROMPT_REACTANCE => "리액턴스 [Ω]: ",
        PROMPT_RESISTANCE => "저항 [Ω]: ",
        WIRE_HEADING => "\n-- 구리 전선 중량/저항 --",
        WIRE_OPTIONS => "직경 입력 방식 (1=직접 입력[mm], 2=AWG 번호): ",
        PROMPT_DIAMETER => "직경 [mm]: ",
        PROMPT_AWG => "AWG 번호 (4/0은 -3): ",
        PROMPT_WIRE_LENGTH => "길이 [m]: ",
        MECHANICS_HEADING => "\n-- 역학 계산 --",
        MECHANICS_OPTIONS => "1) 변위  2) 충격량/운동량  3) 종단속도",
        DISPLACEMENT_HEADING => "\n-- 변위 --",
        DISPLACEMENT_OPTIONS => {
            "1) Δx=x−x₀  2) s=vt  3) s=v₀t+½at²  4) s=(v₀+v)t/2  5) s=(v²−v₀²)/(2a)"
        }
        PROMPT_INITIAL_POSITION => "초기 위치 x₀ [m]: ",
        PROMPT_FINAL_POSITION => "최종 위치 x [m]: ",
        PROMPT_VELOCITY => "속도 [m/s]: ",
        PROMPT_INITIAL_VELOCITY => "초기 속도 v₀ [m/s]: ",
        PROMPT_FINAL_VELOCITY => "최종 속도 v [m/s]: ",
        PROMPT_TIME => "시간 [s]: ",
        PROMPT_ACCELERATION => "가속도 [m/s²]: ",
        IMPULSE_HEADING => "\n-- 충격량/운동량 --",
        IMPULSE_OPTIONS => "1) J=F·t  2) p=m·v  3) Δp=m(v_f−v_i)",
        IMPULSE_SOLVE_PROMPT => "풀 변수 번호: ",
        PROMPT_IMPULSE => "충격량 [N·s]: ",
        PROMPT_MASS => "질량 [kg]: ",
        PROMPT_MOMENTUM => "운동량 [kg·m/s]: ",
        TERMINAL_HEADING => "\n-- 종단속도 --",
        TERMINAL_OPTIONS => "풀 변수: 1) 속도 v  2) 질량 m  3) 면적 A  4) 항력계수 C_d",
        PROMPT_AREA => "면적 [m²]: ",
        PROMPT_DRAG_COEFF => "항력계수 C_d: ",
        PROMPT_FLUID_DENSITY => "유체 밀도 [kg/m³] (공기 1.225): ",
        PROMPT_TERMINAL_VELOCITY => "종단속도 [m/s]: ",
        FLUIDS_THERMAL_HEADING => "\n-- 유체/열전달 계산 --",
        FLUIDS_THERMAL_OPTIONS => "1) 베르누이 방정식  2) 열전달(전도/대류/복사)",
        BERNOULLI_HEADING => "\n-- 베르누이 방정식 (g=9.81) --",
        BERNOULLI_OPTIONS => {
            "풀 변수: 1) P₁  2) P₂  3) v₁  4) v₂  5) h₁  6) h₂  7) ρ"
        }
        PROMPT_PRESSURE1 => "압력 P₁ [Pa]: ",
        PROMPT_PRESSURE2 => "압력 P₂ [Pa]: ",
        PROMPT_VELOCITY1 => "유속 v₁ [m/s]: ",
        PROMPT_VELOCITY2 => "유속 v₂ [m/s]: ",
        PROMPT_HEIGHT1 => "높이 h₁ [m]: ",
        PROMPT_HEIGHT2 => "높이 h₂ [m]: ",
        PROMPT_DENSITY => "밀도 ρ [kg/m³]: ",
        HEAT_HEADING => "\n-- 열전달 --",
        HEAT_MODE_OPTIONS => "1) 전도 Q=kA(T₁−T₂)/d  2) 대류 Q=hA(T_s−T_f)  3) 복사 Q=εσA(T₁⁴−T₂⁴)",
        HEAT_SOLVE_PROMPT => "풀 변수 번호: ",
        HEAT_CONDUCTION_SOLVE_OPTIONS => {
            "풀 변수: 1) Q  2) k  3) A  4) d  5) T₁  6) T₂"
        }
        HEAT_CONVECTION_SOLVE_OPTIONS => "풀 변수: 1) Q  2) h  3) A  4) T_s  5) T_f",
        HEAT_RADIATION_SOLVE_OPTIONS => "풀 변수: 1) Q  2) ε  3) A  4) T₁  5) T₂",
        PROMPT_CONDUCTIVITY => "열전도율 k [W/m·K]: ",
        PROMPT_COEFFICIENT => "열전달계수 h [W/m²·K]: ",
        PROMPT_THICKNESS => "두께 d [m]: ",
        PROMPT_HOT_TEMP => "고온측 온도 T₁ [°C]: ",
        PROMPT_COLD_TEMP => "저온측 온도 T₂ [°C]: ",
        PROMPT_SURFACE_TEMP => "표면 온도 T_s [°C]: ",
        PROMPT_FLUID_TEMP => "유체 온도 T_f [°C]: ",
        PROMPT_EMISSIVITY => "방사율 ε (0~1): ",
        PROMPT_HEAT_RATE => "열전달률 Q [W]: ",
        OPTICS_HEADING => "\n-- 굴절/스넬 법칙 --",
        OPTICS_OPTIONS => {
            "1) n=c/v  2) v=c/n  3) 굴절각 θ₂  4) 굴절률 n₂  5) 임계각 θc"
        }
        PROMPT_INDEX_N1 => "굴절률 n₁: ",
        PROMPT_INDEX_N2 => "굴절률 n₂: ",
        PROMPT_INCIDENT_ANGLE => "입사각 θ₁ [°]: ",
        PROMPT_REFRACTED_ANGLE => "굴절각 θ₂ [°]: ",
        PROMPT_LIGHT_SPEED => "매질 내 광속 [m/s]: ",
        PROMPT_INDEX => "굴절률 n: ",
        FAB_HEADING => "\n-- 판금 굽힘 (BA/OSSB/BD) --",
        PROMPT_SHEET_THICKNESS => "판 두께 T [mm]: ",
        PROMPT_BEND_RADIUS => "굽힘 반경 R [mm]: ",
        PROMPT_BEND_ANGLE => "굽힘 각도 A [°]: ",
        PROMPT_K_FACTOR => "K-팩터 (0~1, 일반적으로 0.33~0.5): ",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) SI  2) CGS  3) Imperial",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        RESULT_HEADING => "Result:",
        STEPS_HEADING => "Derivation:",
        PROMPT_SELECT => "Select: ",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        MAIN_MENU_TITLE => "\n=== Physics Engineering Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) Unit Converter",
        MAIN_MENU_ELECTRICAL => "2) Electrical",
        MAIN_MENU_MECHANICS => "3) Mechanics",
        MAIN_MENU_FLUIDS_THERMAL => "4) Fluids / Heat Transfer",
        MAIN_MENU_OPTICS => "5) Optics",
        MAIN_MENU_FABRICATION => "6) Sheet Metal",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS_LINE1 => {
            "1) Voltage  2) Current  3) Power  4) Resistance  5) Inductance  6) Capacitance  7) Frequency  8) Charge"
        }
        UNIT_CONVERSION_OPTIONS_LINE2 => {
            "9) E-field 10) Length 11) Area 12) Volume 13) Mass 14) Density 15) Time 16) Velocity"
        }
        UNIT_CONVERSION_OPTIONS_LINE3 => {
            "17) Acceleration 18) Force 19) Pressure 20) Temperature 21) ΔTemperature 22) Angle 23) Momentum 24) Energy"
        }
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: V, kW, m/s): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: mV, hp, km/h): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        ELECTRICAL_HEADING => "\n-- Electrical --",
        ELECTRICAL_OPTIONS => {
            "1) AC power  2) Electric field  3) Capacitor network  4) Inductive reactance/RL  5) Wire weight"
        }
        AC_POWER_HEADING => "\n-- AC Power (P = φ·V·I·PF) --",
        AC_POWER_SOLVE_OPTIONS => "Solve for: 1) Real power P  2) Voltage V  3) Current I  4) Power factor PF",
        AC_POWER_PHASE_PROMPT => "Phase (1=single, 3=three): ",
        PROMPT_VOLTAGE => "Voltage [V]: ",
        PROMPT_CURRENT => "Current [A]: ",
        PROMPT_POWER_FACTOR => "Power factor (0~1): ",
        PROMPT_REAL_POWER => "Real power [W]: ",
        EFIELD_HEADING => "\n-- Electric Field --",
        EFIELD_OPTIONS => "1) Point charge E=kQ/r²  2) Force/charge E=F/q  3) Parallel plates E=V/d",
        PROMPT_CHARGE => "Charge [C]: ",
        PROMPT_DISTANCE => "Distance [m]: ",
        PROMPT_FORCE => "Force [N]: ",
        CAP_HEADING => "\n-- Capacitor Network --",
        CAP_KIND_PROMPT => "Connection (1=series, 2=parallel): ",
        CAP_COUNT_PROMPT => "Number of capacitors: ",
        CAP_VALUE_PROMPT => "th capacitor [µF]: ",
        REACTANCE_HEADING => "\n-- Inductive Reactance (XL = 2πfL) --",
        REACTANCE_OPTIONS => "1) Solve XL  2) Solve L  3) Solve f  4) RL impedance/phase",
        PROMPT_FREQUENCY => "Frequency [Hz]: ",
        PROMPT_INDUCTANCE => "Inductance [H]: ",
        PROMPT_REACTANCE => "Reactance [Ω]: ",
        PROMPT_RESISTANCE => "Resistance [Ω]: ",
        WIRE_HEADING => "\n-- Copper Wire Weight/Resistance --",
        WIRE_OPTIONS => "Diameter input (1=direct [mm], 2=AWG number): ",
        PROMPT_DIAMETER => "Diameter [mm]: ",
        PROMPT_AWG => "AWG number (-3 for 4/0): ",
        PROMPT_WIRE_LENGTH => "Length [m]: ",
        MECHANICS_HEADING => "\n-- Mechanics --",
        MECHANICS_OPTIONS => "1) Displacement  2) Impulse/Momentum  3) Terminal velocity",
        DISPLACEMENT_HEADING => "\n-- Displacement --",
        DISPLACEMENT_OPTIONS => {
            "1) Δx=x−x₀  2) s=vt  3) s=v₀t+½at²  4) s=(v₀+v)t/2  5) s=(v²−v₀²)/(2a)"
        }
        PROMPT_INITIAL_POSITION => "Initial position x₀ [m]: ",
        PROMPT_FINAL_POSITION => "Final position x [m]: ",
        PROMPT_VELOCITY => "Velocity [m/s]: ",
        PROMPT_INITIAL_VELOCITY => "Initial velocity v₀ [m/s]: ",
        PROMPT_FINAL_VELOCITY => "Final velocity v [m/s]: ",
        PROMPT_TIME => "Time [s]: ",
        PROMPT_ACCELERATION => "Acceleration [m/s²]: ",
        IMPULSE_HEADING => "\n-- Impulse / Momentum --",
        IMPULSE_OPTIONS => "1) J=F·t  2) p=m·v  3) Δp=m(v_f−v_i)",
        IMPULSE_SOLVE_PROMPT => "Variable to solve: ",
        PROMPT_IMPULSE => "Impulse [N·s]: ",
        PROMPT_MASS => "Mass [kg]: ",
        PROMPT_MOMENTUM => "Momentum [kg·m/s]: ",
        TERMINAL_HEADING => "\n-- Terminal Velocity --",
        TERMINAL_OPTIONS => "Solve for: 1) Velocity v  2) Mass m  3) Area A  4) Drag coeff C_d",
        PROMPT_AREA => "Area [m²]: ",
        PROMPT_DRAG_COEFF => "Drag coefficient C_d: ",
        PROMPT_FLUID_DENSITY => "Fluid density [kg/m³] (air 1.225): ",
        PROMPT_TERMINAL_VELOCITY => "Terminal velocity [m/s]: ",
        FLUIDS_THERMAL_HEADING => "\n-- Fluids / Heat Transfer --",
        FLUIDS_THERMAL_OPTIONS => "1) Bernoulli equation  2) Heat transfer (conduction/convection/radiation)",
        BERNOULLI_HEADING => "\n-- Bernoulli Equation (g=9.81) --",
        BERNOULLI_OPTIONS => "Solve for: 1) P₁  2) P₂  3) v₁  4) v₂  5) h₁  6) h₂  7) ρ",
        PROMPT_PRESSURE1 => "Pressure P₁ [Pa]: ",
        PROMPT_PRESSURE2 => "Pressure P₂ [Pa]: ",
        PROMPT_VELOCITY1 => "Velocity v₁ [m/s]: ",
        PROMPT_VELOCITY2 => "Velocity v₂ [m/s]: ",
        PROMPT_HEIGHT1 => "Height h₁ [m]: ",
        PROMPT_HEIGHT2 => "Height h₂ [m]: ",
        PROMPT_DENSITY => "Density ρ [kg/m³]: ",
        HEAT_HEADING => "\n-- Heat Transfer --",
        HEAT_MODE_OPTIONS => "1) Conduction Q=kA(T₁−T₂)/d  2) Convection Q=hA(T_s−T_f)  3) Radiation Q=εσA(T₁⁴−T₂⁴)",
        HEAT_SOLVE_PROMPT => "Variable to solve: ",
        HEAT_CONDUCTION_SOLVE_OPTIONS => "Solve for: 1) Q  2) k  3) A  4) d  5) T₁  6) T₂",
        HEAT_CONVECTION_SOLVE_OPTIONS => "Solve for: 1) Q  2) h  3) A  4) T_s  5) T_f",
        HEAT_RADIATION_SOLVE_OPTIONS => "Solve for: 1) Q  2) ε  3) A  4) T₁  5) T₂",
        PROMPT_CONDUCTIVITY => "Thermal conductivity k [W/m·K]: ",
        PROMPT_COEFFICIENT => "Heat transfer coeff h [W/m²·K]: ",
        PROMPT_THICKNESS => "Thickness d [m]: ",
        PROMPT_HOT_TEMP => "Hot-side temperature T₁ [°C]: ",
        PROMPT_COLD_TEMP => "Cold-side temperature T₂ [°C]: ",
        PROMPT_SURFACE_TEMP => "Surface temperature T_s [°C]: ",
        PROMPT_FLUID_TEMP => "Fluid temperature T_f [°C]: ",
        PROMPT_EMISSIVITY => "Emissivity ε (0~1): ",
        PROMPT_HEAT_RATE => "Heat rate Q [W]: ",
        OPTICS_HEADING => "\n-- Refraction / Snell's Law --",
        OPTICS_OPTIONS => "1) n=c/v  2) v=c/n  3) Refraction angle θ₂  4) Index n₂  5) Critical angle θc",
        PROMPT_INDEX_N1 => "Index n₁: ",
        PROMPT_INDEX_N2 => "Index n₂: ",
        PROMPT_INCIDENT_ANGLE => "Incident angle θ₁ [°]: ",
        PROMPT_REFRACTED_ANGLE => "Refracted angle θ₂ [°]: ",
        PROMPT_LIGHT_SPEED => "Light speed in medium [m/s]: ",
        PROMPT_INDEX => "Refractive index n: ",
        FAB_HEADING => "\n-- Sheet Metal Bend (BA/OSSB/BD) --",
        PROMPT_SHEET_THICKNESS => "Sheet thickness T [mm]: ",
        PROMPT_BEND_RADIUS => "Bend radius R [mm]: ",
        PROMPT_BEND_ANGLE => "Bend angle A [°]: ",
        PROMPT_K_FACTOR => "K-factor (0~1, typically 0.33~0.5): ",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) SI  2) CGS  3) Imperial",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        _ => return None,
    })
}
