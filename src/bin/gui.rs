#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use physics_engineering_toolbox::{
    config, constants, conversion,
    electrical::{ac_power, capacitor_network, electric_field, inductive_reactance, wire_weight},
    fabrication::bend_allowance,
    fluids::bernoulli,
    format::{format_value, format_with_unit},
    i18n, material_db,
    mechanics::{displacement, impulse_momentum, terminal_velocity},
    optics::refraction,
    quantity::QuantityKind,
    thermal::heat_transfer,
    units::*,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Physics Engineering Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font warning: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["PE_Calc.png", "icon.png", "assets/icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 기본 폰트를 찾는다.
/// 1) assets/fonts/ 아래의 ttf
/// 2) Windows 시스템 폰트(맑은 고딕/굴림 등)
/// 3) 모두 실패 시 Err를 반환해 설정의 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_candidates = ["assets/fonts/malgun.ttf", "assets/fonts/NotoSansKR.ttf"];
    for cand in asset_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    Err("CJK font not found. Set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    UnitConv,
    AcPower,
    ElectricField,
    Capacitors,
    Reactance,
    WireWeight,
    Displacement,
    Impulse,
    TerminalVelocity,
    Bernoulli,
    HeatTransfer,
    BendAllowance,
    Refraction,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ImpulseTabMode {
    ForceTime,
    MassVelocity,
    MomentumChange,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum HeatTabMode {
    Conduction,
    Convection,
    Radiation,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum WireDiameterMode {
    Direct,
    Awg,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    show_formula_modal: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    theme: ThemeChoice,
    font_size_scale: f32,
    always_on_top: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
    // 단위 변환
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_kind: QuantityKind,
    conv_result: Option<String>,
    // AC 전력
    ac_solve: ac_power::AcPowerSolveFor,
    ac_phase: ac_power::PhaseType,
    ac_voltage: f64,
    ac_voltage_unit: String,
    ac_current: f64,
    ac_current_unit: String,
    ac_power_factor: f64,
    ac_real_power: f64,
    ac_power_unit: String,
    ac_result: Option<String>,
    // 전기장
    ef_mode: u8,
    ef_charge_uc: f64,
    ef_distance_m: f64,
    ef_force_n: f64,
    ef_voltage_v: f64,
    ef_result: Option<String>,
    // 커패시터
    cap_kind: capacitor_network::NetworkKind,
    cap_values_uf: Vec<f64>,
    cap_result: Option<String>,
    // 리액턴스
    react_solve: inductive_reactance::ReactanceSolveFor,
    react_frequency_hz: f64,
    react_inductance_mh: f64,
    react_reactance_ohm: f64,
    react_rl_resistance_ohm: f64,
    react_rl_enabled: bool,
    react_result: Option<String>,
    // 전선
    wire_mode: WireDiameterMode,
    wire_diameter: f64,
    wire_diameter_unit: String,
    wire_awg: i32,
    wire_length: f64,
    wire_length_unit: String,
    wire_result: Option<String>,
    // 변위
    disp_mode: u8,
    disp_x0: f64,
    disp_x: f64,
    disp_v: f64,
    disp_v0: f64,
    disp_vf: f64,
    disp_t: f64,
    disp_a: f64,
    disp_result: Option<String>,
    // 충격량/운동량
    imp_mode: ImpulseTabMode,
    imp_solve: u8,
    imp_force_n: f64,
    imp_time_s: f64,
    imp_impulse_ns: f64,
    imp_mass_kg: f64,
    imp_velocity_ms: f64,
    imp_momentum: f64,
    imp_vi_ms: f64,
    imp_vf_ms: f64,
    imp_result: Option<String>,
    // 종단속도
    term_solve: terminal_velocity::TerminalVelocitySolveFor,
    term_mass_kg: f64,
    term_area_m2: f64,
    term_cd: f64,
    term_shape: String,
    term_density: f64,
    term_velocity_ms: f64,
    term_result: Option<String>,
    // 베르누이
    bern_solve: bernoulli::BernoulliSolveFor,
    bern_p1: f64,
    bern_p2: f64,
    bern_pressure_unit: String,
    bern_v1: f64,
    bern_v2: f64,
    bern_h1: f64,
    bern_h2: f64,
    bern_rho: f64,
    bern_result: Option<String>,
    // 열전달
    heat_mode: HeatTabMode,
    heat_solve: u8,
    heat_q_w: f64,
    heat_k: f64,
    heat_h: f64,
    heat_area_m2: f64,
    heat_thickness_m: f64,
    heat_t1: f64,
    heat_t2: f64,
    heat_temp_unit: String,
    heat_emissivity: f64,
    heat_result: Option<String>,
    // 판금 굽힘
    bend_thickness: f64,
    bend_radius: f64,
    bend_angle_deg: f64,
    bend_k_factor: f64,
    bend_length_unit: String,
    bend_result: Option<String>,
    // 굴절
    refr_mode: u8,
    refr_n1: f64,
    refr_n2: f64,
    refr_theta1_deg: f64,
    refr_theta2_deg: f64,
    refr_speed_ms: f64,
    refr_index: f64,
    refr_result: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let (conv_from, conv_to) = default_units_for_kind(QuantityKind::Voltage);
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let mut s = Self {
            config: config.clone(),
            tr,
            lang_input,
            lang_save_status: None,
            tab: Tab::UnitConv,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            show_formula_modal: false,
            show_settings_modal: false,
            show_help_modal: false,
            theme: ThemeChoice::System,
            font_size_scale: 1.0,
            always_on_top: false,
            custom_font_path: String::new(),
            font_load_error: None,
            conv_value: 100.0,
            conv_from: conv_from.into(),
            conv_to: conv_to.into(),
            conv_kind: QuantityKind::Voltage,
            conv_result: None,
            ac_solve: ac_power::AcPowerSolveFor::RealPower,
            ac_phase: ac_power::PhaseType::Single,
            ac_voltage: 240.0,
            ac_voltage_unit: "V".into(),
            ac_current: 20.0,
            ac_current_unit: "A".into(),
            ac_power_factor: 0.85,
            ac_real_power: 4000.0,
            ac_power_unit: "W".into(),
            ac_result: None,
            ef_mode: 1,
            ef_charge_uc: 1.0,
            ef_distance_m: 0.5,
            ef_force_n: 1.0,
            ef_voltage_v: 100.0,
            ef_result: None,
            cap_kind: capacitor_network::NetworkKind::Series,
            cap_values_uf: vec![10.0, 22.0],
            cap_result: None,
            react_solve: inductive_reactance::ReactanceSolveFor::Reactance,
            react_frequency_hz: 60.0,
            react_inductance_mh: 10.0,
            react_reactance_ohm: 3.77,
            react_rl_resistance_ohm: 10.0,
            react_rl_enabled: false,
            react_result: None,
            wire_mode: WireDiameterMode::Direct,
            wire_diameter: 2.05,
            wire_diameter_unit: "mm".into(),
            wire_awg: 12,
            wire_length: 100.0,
            wire_length_unit: "m".into(),
            wire_result: None,
            disp_mode: 3,
            disp_x0: 0.0,
            disp_x: 10.0,
            disp_v: 5.0,
            disp_v0: 0.0,
            disp_vf: 10.0,
            disp_t: 2.0,
            disp_a: 9.81,
            disp_result: None,
            imp_mode: ImpulseTabMode::ForceTime,
            imp_solve: 1,
            imp_force_n: 100.0,
            imp_time_s: 0.5,
            imp_impulse_ns: 50.0,
            imp_mass_kg: 5.0,
            imp_velocity_ms: 10.0,
            imp_momentum: 50.0,
            imp_vi_ms: 0.0,
            imp_vf_ms: 10.0,
            imp_result: None,
            term_solve: terminal_velocity::TerminalVelocitySolveFor::Velocity,
            term_mass_kg: 75.0,
            term_area_m2: 0.7,
            term_cd: 0.82,
            term_shape: "Long cylinder".into(),
            term_density: constants::AIR_DENSITY_SEA_LEVEL,
            term_velocity_ms: 45.0,
            term_result: None,
            bern_solve: bernoulli::BernoulliSolveFor::Pressure2,
            bern_p1: 101_325.0,
            bern_p2: 101_325.0,
            bern_pressure_unit: "Pa".into(),
            bern_v1: 0.0,
            bern_v2: 0.0,
            bern_h1: 0.0,
            bern_h2: 0.0,
            bern_rho: 1000.0,
            bern_result: None,
            heat_mode: HeatTabMode::Conduction,
            heat_solve: 1,
            heat_q_w: 100.0,
            heat_k: 0.6,
            heat_h: 25.0,
            heat_area_m2: 1.0,
            heat_thickness_m: 0.05,
            heat_t1: 100.0,
            heat_t2: 20.0,
            heat_temp_unit: "C".into(),
            heat_emissivity: 0.9,
            heat_result: None,
            bend_thickness: 2.0,
            bend_radius: 3.0,
            bend_angle_deg: 90.0,
            bend_k_factor: 0.44,
            bend_length_unit: "mm".into(),
            bend_result: None,
            refr_mode: 3,
            refr_n1: 1.5,
            refr_n2: 1.0,
            refr_theta1_deg: 30.0,
            refr_theta2_deg: 48.6,
            refr_speed_ms: 2.0e8,
            refr_index: 1.5,
            refr_result: None,
        };
        s.apply_unit_preset(s.config.unit_system);
        s
    }

    /// 단위 시스템 프리셋을 UI 기본 단위에 적용한다.
    pub(crate) fn apply_unit_preset(&mut self, system: config::UnitSystem) {
        match system {
            config::UnitSystem::SI => {
                self.ac_voltage_unit = "V".into();
                self.ac_current_unit = "A".into();
                self.ac_power_unit = "W".into();
                self.wire_diameter_unit = "mm".into();
                self.wire_length_unit = "m".into();
                self.bern_pressure_unit = "Pa".into();
                self.heat_temp_unit = "C".into();
                self.bend_length_unit = "mm".into();
            }
            config::UnitSystem::CGS => {
                self.ac_voltage_unit = "V".into();
                self.ac_current_unit = "A".into();
                self.ac_power_unit = "W".into();
                self.wire_diameter_unit = "cm".into();
                self.wire_length_unit = "cm".into();
                self.bern_pressure_unit = "mbar".into();
                self.heat_temp_unit = "C".into();
                self.bend_length_unit = "cm".into();
            }
            config::UnitSystem::Imperial => {
                self.ac_voltage_unit = "V".into();
                self.ac_current_unit = "A".into();
                self.ac_power_unit = "hp".into();
                self.wire_diameter_unit = "in".into();
                self.wire_length_unit = "ft".into();
                self.bern_pressure_unit = "psi".into();
                self.heat_temp_unit = "F".into();
                self.bend_length_unit = "in".into();
            }
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Calculators"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::UnitConv, txt("gui.tab.unit_conv", "Unit Converter")),
            (Tab::AcPower, txt("gui.tab.ac_power", "AC Power")),
            (Tab::ElectricField, txt("gui.tab.efield", "Electric Field")),
            (Tab::Capacitors, txt("gui.tab.capacitors", "Capacitors")),
            (Tab::Reactance, txt("gui.tab.reactance", "Inductive Reactance")),
            (Tab::WireWeight, txt("gui.tab.wire", "Wire Weight")),
            (Tab::Displacement, txt("gui.tab.displacement", "Displacement")),
            (Tab::Impulse, txt("gui.tab.impulse", "Impulse / Momentum")),
            (
                Tab::TerminalVelocity,
                txt("gui.tab.terminal", "Terminal Velocity"),
            ),
            (Tab::Bernoulli, txt("gui.tab.bernoulli", "Bernoulli")),
            (Tab::HeatTransfer, txt("gui.tab.heat", "Heat Transfer")),
            (Tab::BendAllowance, txt("gui.tab.bend", "Bend Allowance")),
            (Tab::Refraction, txt("gui.tab.refraction", "Refraction")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 28.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(3.0);
        }
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.unit.heading", "Unit Converter"),
            &txt(
                "gui.unit.tip",
                "Convert values between units of a physical quantity.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.unit.quantity", "Quantity"),
                        &txt("gui.unit.quantity_tip", "Select the quantity kind"),
                    );
                    let before = self.conv_kind;
                    let selected_label = quantity_label(self.conv_kind);
                    egui::ComboBox::from_id_source("conv_kind")
                        .selected_text(selected_label)
                        .show_ui(ui, |ui| {
                            for (k, label) in quantity_options() {
                                ui.selectable_value(&mut self.conv_kind, k, label);
                            }
                        });
                    if before != self.conv_kind {
                        let (f, t) = default_units_for_kind(self.conv_kind);
                        self.conv_from = f.to_string();
                        self.conv_to = t.to_string();
                    }
                    ui.end_row();

                    ui.label(txt("gui.unit.value", "Value"));
                    ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                    ui.end_row();

                    ui.label(txt("gui.unit.from", "From unit"));
                    egui::ComboBox::from_id_source("conv_from")
                        .selected_text(self.conv_from.clone())
                        .show_ui(ui, |ui| {
                            for code in unit_options(self.conv_kind) {
                                ui.selectable_value(&mut self.conv_from, code.to_string(), *code);
                            }
                        });
                    ui.end_row();

                    ui.label(txt("gui.unit.to", "To unit"));
                    egui::ComboBox::from_id_source("conv_to")
                        .selected_text(self.conv_to.clone())
                        .show_ui(ui, |ui| {
                            for code in unit_options(self.conv_kind) {
                                ui.selectable_value(&mut self.conv_to, code.to_string(), *code);
                            }
                        });
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                self.conv_result = match conversion::convert(
                    self.conv_kind,
                    self.conv_value,
                    self.conv_from.trim(),
                    self.conv_to.trim(),
                ) {
                    Ok(v) => Some(format_with_unit(v, self.conv_to.trim())),
                    Err(e) => Some(format!("{}: {e}", txt("gui.common.error", "Error"))),
                };
            }
            if let Some(res) = &self.conv_result {
                ui.label(res);
            }
        });
    }

    fn ui_ac_power(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.ac.heading", "AC Power (P = φ·V·I·PF)"),
            &txt(
                "gui.ac.tip",
                "Solve one of P/V/I/PF; apparent and reactive power are derived.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(txt("gui.ac.phase", "Phase"));
                ui.selectable_value(
                    &mut self.ac_phase,
                    ac_power::PhaseType::Single,
                    txt("gui.ac.phase_single", "Single"),
                );
                ui.selectable_value(
                    &mut self.ac_phase,
                    ac_power::PhaseType::Three,
                    txt("gui.ac.phase_three", "Three"),
                );
            });
            ui.horizontal(|ui| {
                ui.label(txt("gui.common.solve_for", "Solve for"));
                for (v, label) in [
                    (ac_power::AcPowerSolveFor::RealPower, "P"),
                    (ac_power::AcPowerSolveFor::Voltage, "V"),
                    (ac_power::AcPowerSolveFor::Current, "I"),
                    (ac_power::AcPowerSolveFor::PowerFactor, "PF"),
                ] {
                    ui.selectable_value(&mut self.ac_solve, v, label);
                }
            });
            ui.separator();
            egui::Grid::new("ac_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    if self.ac_solve != ac_power::AcPowerSolveFor::Voltage {
                        ui.label(txt("gui.ac.voltage", "Voltage"));
                        ui.add(egui::DragValue::new(&mut self.ac_voltage).speed(1.0));
                        unit_combo(ui, "ac_v_unit", &mut self.ac_voltage_unit, &["V", "mV", "kV"]);
                        ui.end_row();
                    }
                    if self.ac_solve != ac_power::AcPowerSolveFor::Current {
                        ui.label(txt("gui.ac.current", "Current"));
                        ui.add(egui::DragValue::new(&mut self.ac_current).speed(0.1));
                        unit_combo(ui, "ac_i_unit", &mut self.ac_current_unit, &["A", "mA", "kA"]);
                        ui.end_row();
                    }
                    if self.ac_solve != ac_power::AcPowerSolveFor::PowerFactor {
                        ui.label(txt("gui.ac.pf", "Power factor"));
                        ui.add(
                            egui::DragValue::new(&mut self.ac_power_factor)
                                .speed(0.01)
                                .clamp_range(0.0..=1.0),
                        );
                        ui.label("");
                        ui.end_row();
                    }
                    if self.ac_solve != ac_power::AcPowerSolveFor::RealPower {
                        ui.label(txt("gui.ac.real_power", "Real power"));
                        ui.add(egui::DragValue::new(&mut self.ac_real_power).speed(10.0));
                        unit_combo(ui, "ac_p_unit", &mut self.ac_power_unit, &["W", "kW", "MW", "hp"]);
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                let input = ac_power::AcPowerInput {
                    phase: self.ac_phase,
                    solve_for: self.ac_solve,
                    voltage: self.ac_voltage,
                    voltage_unit: parse_voltage_gui(&self.ac_voltage_unit),
                    current: self.ac_current,
                    current_unit: parse_current_gui(&self.ac_current_unit),
                    power_factor: self.ac_power_factor,
                    real_power: self.ac_real_power,
                    real_power_unit: parse_power_gui(&self.ac_power_unit),
                };
                self.ac_result = Some(match ac_power::compute_ac_power(input) {
                    Ok(r) => {
                        let mut out = vec![
                            format!("P = {}", format_with_unit(r.real_power_w, "W")),
                            format!("V = {}", format_with_unit(r.voltage_v, "V")),
                            format!("I = {}", format_with_unit(r.current_a, "A")),
                            format!("PF = {}", format_value(r.power_factor)),
                            format!("S = {}", format_with_unit(r.apparent_power_va, "VA")),
                            format!("Q = {}", format_with_unit(r.reactive_power_var, "var")),
                        ];
                        out.extend(r.steps);
                        out.join("\n")
                    }
                    Err(e) => format!("{}: {e}", txt("gui.common.error", "Error")),
                });
            }
            if let Some(res) = &self.ac_result {
                ui.label(res);
            }
        });
    }

    fn ui_electric_field(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.ef.heading", "Electric Field"),
            &txt("gui.ef.tip", "E = kQ/r², E = F/q or E = V/d."),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.ef_mode, 1, txt("gui.ef.point", "Point charge"));
                ui.selectable_value(&mut self.ef_mode, 2, txt("gui.ef.force", "Force / charge"));
                ui.selectable_value(&mut self.ef_mode, 3, txt("gui.ef.plates", "Parallel plates"));
            });
            ui.separator();
            egui::Grid::new("ef_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    match self.ef_mode {
                        1 => {
                            ui.label(txt("gui.ef.charge", "Charge [µC]"));
                            ui.add(egui::DragValue::new(&mut self.ef_charge_uc).speed(0.1));
                            ui.end_row();
                            ui.label(txt("gui.ef.distance", "Distance [m]"));
                            ui.add(egui::DragValue::new(&mut self.ef_distance_m).speed(0.01));
                            ui.end_row();
                        }
                        2 => {
                            ui.label(txt("gui.ef.force_n", "Force [N]"));
                            ui.add(egui::DragValue::new(&mut self.ef_force_n).speed(0.1));
                            ui.end_row();
                            ui.label(txt("gui.ef.charge", "Charge [µC]"));
                            ui.add(egui::DragValue::new(&mut self.ef_charge_uc).speed(0.1));
                            ui.end_row();
                        }
                        _ => {
                            ui.label(txt("gui.ef.voltage", "Voltage [V]"));
                            ui.add(egui::DragValue::new(&mut self.ef_voltage_v).speed(1.0));
                            ui.end_row();
                            ui.label(txt("gui.ef.distance", "Distance [m]"));
                            ui.add(egui::DragValue::new(&mut self.ef_distance_m).speed(0.01));
                            ui.end_row();
                        }
                    }
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                let mode = match self.ef_mode {
                    1 => electric_field::ElectricFieldMode::PointCharge {
                        charge: self.ef_charge_uc,
                        charge_unit: ChargeUnit::Microcoulomb,
                        distance: self.ef_distance_m,
                        distance_unit: LengthUnit::Meter,
                    },
                    2 => electric_field::ElectricFieldMode::ForceOnCharge {
                        force: self.ef_force_n,
                        force_unit: ForceUnit::Newton,
                        charge: self.ef_charge_uc,
                        charge_unit: ChargeUnit::Microcoulomb,
                    },
                    _ => electric_field::ElectricFieldMode::UniformField {
                        voltage: self.ef_voltage_v,
                        voltage_unit: VoltageUnit::Volt,
                        distance: self.ef_distance_m,
                        distance_unit: LengthUnit::Meter,
                    },
                };
                self.ef_result = Some(result_text(
                    electric_field::compute_electric_field(mode).map(|r| {
                        let mut lines = vec![format!(
                            "E = {}",
                            format_with_unit(r.field_v_per_m, "V/m")
                        )];
                        lines.extend(r.steps);
                        lines
                    }),
                    &txt("gui.common.error", "Error"),
                ));
            }
            if let Some(res) = &self.ef_result {
                ui.label(res);
            }
        });
    }

    fn ui_capacitors(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.cap.heading", "Capacitor Network"),
            &txt(
                "gui.cap.tip",
                "Series: 1/Ceq = Σ1/Ci. Parallel: Ceq = ΣCi.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut self.cap_kind,
                    capacitor_network::NetworkKind::Series,
                    txt("gui.cap.series", "Series"),
                );
                ui.selectable_value(
                    &mut self.cap_kind,
                    capacitor_network::NetworkKind::Parallel,
                    txt("gui.cap.parallel", "Parallel"),
                );
            });
            ui.separator();
            let mut remove_idx = None;
            for (i, value) in self.cap_values_uf.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(format!("C{} [µF]", i + 1));
                    ui.add(egui::DragValue::new(value).speed(0.1));
                    if ui.small_button("−").clicked() {
                        remove_idx = Some(i);
                    }
                });
            }
            if let Some(i) = remove_idx {
                self.cap_values_uf.remove(i);
            }
            if ui.button(txt("gui.cap.add", "+ Add capacitor")).clicked() {
                self.cap_values_uf.push(1.0);
            }
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                let entries: Vec<_> = self
                    .cap_values_uf
                    .iter()
                    .map(|v| capacitor_network::CapacitorEntry {
                        value: *v,
                        unit: CapacitanceUnit::Microfarad,
                    })
                    .collect();
                self.cap_result = Some(result_text(
                    capacitor_network::compute_equivalent(self.cap_kind, &entries).map(|r| {
                        let ceq_uf = convert_capacitance(
                            r.equivalent_f,
                            CapacitanceUnit::Farad,
                            CapacitanceUnit::Microfarad,
                        );
                        let mut lines =
                            vec![format!("Ceq = {}", format_with_unit(ceq_uf, "µF"))];
                        lines.extend(r.steps);
                        lines
                    }),
                    &txt("gui.common.error", "Error"),
                ));
            }
            if let Some(res) = &self.cap_result {
                ui.label(res);
            }
        });
    }

    fn ui_reactance(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.react.heading", "Inductive Reactance (XL = 2πfL)"),
            &txt(
                "gui.react.tip",
                "Solve XL/L/f, optionally with RL impedance and phase.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(txt("gui.common.solve_for", "Solve for"));
                for (v, label) in [
                    (inductive_reactance::ReactanceSolveFor::Reactance, "XL"),
                    (inductive_reactance::ReactanceSolveFor::Inductance, "L"),
                    (inductive_reactance::ReactanceSolveFor::Frequency, "f"),
                ] {
                    ui.selectable_value(&mut self.react_solve, v, label);
                }
            });
            ui.separator();
            egui::Grid::new("react_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    if self.react_solve != inductive_reactance::ReactanceSolveFor::Frequency {
                        ui.label(txt("gui.react.frequency", "Frequency [Hz]"));
                        ui.add(egui::DragValue::new(&mut self.react_frequency_hz).speed(1.0));
                        ui.end_row();
                    }
                    if self.react_solve != inductive_reactance::ReactanceSolveFor::Inductance {
                        ui.label(txt("gui.react.inductance", "Inductance [mH]"));
                        ui.add(egui::DragValue::new(&mut self.react_inductance_mh).speed(0.1));
                        ui.end_row();
                    }
                    if self.react_solve != inductive_reactance::ReactanceSolveFor::Reactance {
                        ui.label(txt("gui.react.reactance", "Reactance [Ω]"));
                        ui.add(egui::DragValue::new(&mut self.react_reactance_ohm).speed(0.1));
                        ui.end_row();
                    }
                });
            ui.checkbox(
                &mut self.react_rl_enabled,
                txt("gui.react.rl", "RL impedance (with series resistance)"),
            );
            if self.react_rl_enabled {
                ui.horizontal(|ui| {
                    ui.label(txt("gui.react.resistance", "Resistance [Ω]"));
                    ui.add(egui::DragValue::new(&mut self.react_rl_resistance_ohm).speed(0.1));
                });
            }
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                let input = inductive_reactance::ReactanceInput {
                    solve_for: self.react_solve,
                    frequency: self.react_frequency_hz,
                    frequency_unit: FrequencyUnit::Hertz,
                    inductance: self.react_inductance_mh,
                    inductance_unit: InductanceUnit::Millihenry,
                    reactance: self.react_reactance_ohm,
                    reactance_unit: ResistanceUnit::Ohm,
                };
                let rl_enabled = self.react_rl_enabled;
                let rl_r = self.react_rl_resistance_ohm;
                self.react_result = Some(result_text(
                    inductive_reactance::compute_reactance(input).and_then(|r| {
                        let mut lines = vec![
                            format!("XL = {}", format_with_unit(r.reactance_ohm, "Ω")),
                            format!("L = {}", format_with_unit(r.inductance_h, "H")),
                            format!("f = {}", format_with_unit(r.frequency_hz, "Hz")),
                        ];
                        lines.extend(r.steps.clone());
                        if rl_enabled {
                            let rl = inductive_reactance::compute_rl_impedance(
                                rl_r,
                                ResistanceUnit::Ohm,
                                r.reactance_ohm,
                                ResistanceUnit::Ohm,
                            )?;
                            lines.push(format!(
                                "Z = {}",
                                format_with_unit(rl.impedance_ohm, "Ω")
                            ));
                            lines.push(format!("φ = {}", format_with_unit(rl.phase_deg, "°")));
                            lines.push(format!("PF = {}", format_value(rl.power_factor)));
                            lines.extend(rl.steps);
                        }
                        Ok(lines)
                    }),
                    &txt("gui.common.error", "Error"),
                ));
            }
            if let Some(res) = &self.react_result {
                ui.label(res);
            }
        });
    }

    fn ui_wire_weight(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.wire.heading", "Copper Wire Weight / Resistance"),
            &txt(
                "gui.wire.tip",
                "Weight = πr²·L·ρ(copper), R = ρₑL/A. Diameter direct or by AWG.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut self.wire_mode,
                    WireDiameterMode::Direct,
                    txt("gui.wire.direct", "Diameter"),
                );
                ui.selectable_value(
                    &mut self.wire_mode,
                    WireDiameterMode::Awg,
                    txt("gui.wire.awg", "AWG gauge"),
                );
            });
            ui.separator();
            egui::Grid::new("wire_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    match self.wire_mode {
                        WireDiameterMode::Direct => {
                            ui.label(txt("gui.wire.diameter", "Diameter"));
                            ui.add(egui::DragValue::new(&mut self.wire_diameter).speed(0.01));
                            unit_combo(
                                ui,
                                "wire_d_unit",
                                &mut self.wire_diameter_unit,
                                &["mm", "cm", "in"],
                            );
                            ui.end_row();
                        }
                        WireDiameterMode::Awg => {
                            ui.label(txt("gui.wire.awg_no", "AWG number"));
                            let selected = material_db::AWG_GAUGES
                                .iter()
                                .find(|e| e.gauge == self.wire_awg)
                                .map(|e| e.label)
                                .unwrap_or("12");
                            egui::ComboBox::from_id_source("wire_awg")
                                .selected_text(selected)
                                .show_ui(ui, |ui| {
                                    for entry in material_db::AWG_GAUGES {
                                        ui.selectable_value(
                                            &mut self.wire_awg,
                                            entry.gauge,
                                            entry.label,
                                        );
                                    }
                                });
                            ui.label("");
                            ui.end_row();
                        }
                    }
                    ui.label(txt("gui.wire.length", "Length"));
                    ui.add(egui::DragValue::new(&mut self.wire_length).speed(1.0));
                    unit_combo(
                        ui,
                        "wire_l_unit",
                        &mut self.wire_length_unit,
                        &["m", "cm", "km", "ft"],
                    );
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                let diameter = match self.wire_mode {
                    WireDiameterMode::Direct => wire_weight::DiameterSpec::Direct {
                        value: self.wire_diameter,
                        unit: parse_length_gui(&self.wire_diameter_unit),
                    },
                    WireDiameterMode::Awg => wire_weight::DiameterSpec::Awg(self.wire_awg),
                };
                let input = wire_weight::WireWeightInput {
                    diameter,
                    length: self.wire_length,
                    length_unit: parse_length_gui(&self.wire_length_unit),
                };
                self.wire_result = Some(result_text(
                    wire_weight::compute_wire_weight(input).map(|r| {
                        let mut lines = vec![
                            format!("d = {}", format_with_unit(r.diameter_m * 1000.0, "mm")),
                            format!("A = {}", format_with_unit(r.area_m2, "m²")),
                            format!("W = {}", format_with_unit(r.weight_kg, "kg")),
                            format!("R = {}", format_with_unit(r.resistance_ohm, "Ω")),
                        ];
                        lines.extend(r.steps);
                        lines
                    }),
                    &txt("gui.common.error", "Error"),
                ));
            }
            if let Some(res) = &self.wire_result {
                ui.label(res);
            }
        });
    }

    fn ui_displacement(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.disp.heading", "Displacement"),
            &txt("gui.disp.tip", "Five kinematic forms; pick one."),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            for (mode, label) in [
                (1u8, "Δx = x − x₀"),
                (2, "s = v·t"),
                (3, "s = v₀t + ½at²"),
                (4, "s = (v₀+v)t/2"),
                (5, "s = (v²−v₀²)/(2a)"),
            ] {
                ui.radio_value(&mut self.disp_mode, mode, label);
            }
            ui.separator();
            egui::Grid::new("disp_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    match self.disp_mode {
                        1 => {
                            ui.label("x₀ [m]");
                            ui.add(egui::DragValue::new(&mut self.disp_x0).speed(0.1));
                            ui.end_row();
                            ui.label("x [m]");
                            ui.add(egui::DragValue::new(&mut self.disp_x).speed(0.1));
                            ui.end_row();
                        }
                        2 => {
                            ui.label("v [m/s]");
                            ui.add(egui::DragValue::new(&mut self.disp_v).speed(0.1));
                            ui.end_row();
                            ui.label("t [s]");
                            ui.add(egui::DragValue::new(&mut self.disp_t).speed(0.1));
                            ui.end_row();
                        }
                        3 => {
                            ui.label("v₀ [m/s]");
                            ui.add(egui::DragValue::new(&mut self.disp_v0).speed(0.1));
                            ui.end_row();
                            ui.label("t [s]");
                            ui.add(egui::DragValue::new(&mut self.disp_t).speed(0.1));
                            ui.end_row();
                            ui.label("a [m/s²]");
                            ui.add(egui::DragValue::new(&mut self.disp_a).speed(0.1));
                            ui.end_row();
                        }
                        4 => {
                            ui.label("v₀ [m/s]");
                            ui.add(egui::DragValue::new(&mut self.disp_v0).speed(0.1));
                            ui.end_row();
                            ui.label("v [m/s]");
                            ui.add(egui::DragValue::new(&mut self.disp_vf).speed(0.1));
                            ui.end_row();
                            ui.label("t [s]");
                            ui.add(egui::DragValue::new(&mut self.disp_t).speed(0.1));
                            ui.end_row();
                        }
                        _ => {
                            ui.label("v₀ [m/s]");
                            ui.add(egui::DragValue::new(&mut self.disp_v0).speed(0.1));
                            ui.end_row();
                            ui.label("v [m/s]");
                            ui.add(egui::DragValue::new(&mut self.disp_vf).speed(0.1));
                            ui.end_row();
                            ui.label("a [m/s²]");
                            ui.add(egui::DragValue::new(&mut self.disp_a).speed(0.1));
                            ui.end_row();
                        }
                    }
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                let mode = match self.disp_mode {
                    1 => displacement::DisplacementMode::PositionDifference {
                        initial: self.disp_x0,
                        end: self.disp_x,
                        unit: LengthUnit::Meter,
                    },
                    2 => displacement::DisplacementMode::ConstantVelocity {
                        velocity: self.disp_v,
                        velocity_unit: VelocityUnit::MeterPerSecond,
                        time: self.disp_t,
                        time_unit: TimeUnit::Second,
                    },
                    3 => displacement::DisplacementMode::UniformAcceleration {
                        initial_velocity: self.disp_v0,
                        velocity_unit: VelocityUnit::MeterPerSecond,
                        time: self.disp_t,
                        time_unit: TimeUnit::Second,
                        acceleration: self.disp_a,
                        acceleration_unit: AccelerationUnit::MeterPerSecondSquared,
                    },
                    4 => displacement::DisplacementMode::AverageVelocity {
                        initial_velocity: self.disp_v0,
                        final_velocity: self.disp_vf,
                        velocity_unit: VelocityUnit::MeterPerSecond,
                        time: self.disp_t,
                        time_unit: TimeUnit::Second,
                    },
                    _ => displacement::DisplacementMode::VelocitySquared {
                        initial_velocity: self.disp_v0,
                        final_velocity: self.disp_vf,
                        velocity_unit: VelocityUnit::MeterPerSecond,
                        acceleration: self.disp_a,
                        acceleration_unit: AccelerationUnit::MeterPerSecondSquared,
                    },
                };
                self.disp_result = Some(result_text(
                    displacement::compute_displacement(mode).map(|r| {
                        let mut lines =
                            vec![format!("s = {}", format_with_unit(r.displacement_m, "m"))];
                        lines.extend(r.steps);
                        lines
                    }),
                    &txt("gui.common.error", "Error"),
                ));
            }
            if let Some(res) = &self.disp_result {
                ui.label(res);
            }
        });
    }

    fn ui_impulse(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.imp.heading", "Impulse / Momentum"),
            &txt("gui.imp.tip", "J = F·t, p = m·v, Δp = m(v_f − v_i) = J."),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.imp_mode, ImpulseTabMode::ForceTime, "J = F·t");
                ui.selectable_value(&mut self.imp_mode, ImpulseTabMode::MassVelocity, "p = m·v");
                ui.selectable_value(
                    &mut self.imp_mode,
                    ImpulseTabMode::MomentumChange,
                    "Δp = m(v_f−v_i)",
                );
            });
            ui.separator();
            match self.imp_mode {
                ImpulseTabMode::ForceTime => {
                    ui.horizontal(|ui| {
                        ui.label(txt("gui.common.solve_for", "Solve for"));
                        ui.selectable_value(&mut self.imp_solve, 1, "J");
                        ui.selectable_value(&mut self.imp_solve, 2, "F");
                        ui.selectable_value(&mut self.imp_solve, 3, "t");
                    });
                    egui::Grid::new("imp_grid1").num_columns(2).show(ui, |ui| {
                        if self.imp_solve != 2 {
                            ui.label("F [N]");
                            ui.add(egui::DragValue::new(&mut self.imp_force_n).speed(1.0));
                            ui.end_row();
                        }
                        if self.imp_solve != 3 {
                            ui.label("t [s]");
                            ui.add(egui::DragValue::new(&mut self.imp_time_s).speed(0.01));
                            ui.end_row();
                        }
                        if self.imp_solve != 1 {
                            ui.label("J [N·s]");
                            ui.add(egui::DragValue::new(&mut self.imp_impulse_ns).speed(0.1));
                            ui.end_row();
                        }
                    });
                }
                ImpulseTabMode::MassVelocity => {
                    ui.horizontal(|ui| {
                        ui.label(txt("gui.common.solve_for", "Solve for"));
                        ui.selectable_value(&mut self.imp_solve, 1, "p");
                        ui.selectable_value(&mut self.imp_solve, 2, "m");
                        ui.selectable_value(&mut self.imp_solve, 3, "v");
                    });
                    egui::Grid::new("imp_grid2").num_columns(2).show(ui, |ui| {
                        if self.imp_solve != 2 {
                            ui.label("m [kg]");
                            ui.add(egui::DragValue::new(&mut self.imp_mass_kg).speed(0.1));
                            ui.end_row();
                        }
                        if self.imp_solve != 3 {
                            ui.label("v [m/s]");
                            ui.add(egui::DragValue::new(&mut self.imp_velocity_ms).speed(0.1));
                            ui.end_row();
                        }
                        if self.imp_solve != 1 {
                            ui.label("p [kg·m/s]");
                            ui.add(egui::DragValue::new(&mut self.imp_momentum).speed(0.1));
                            ui.end_row();
                        }
                    });
                }
                ImpulseTabMode::MomentumChange => {
                    egui::Grid::new("imp_grid3").num_columns(2).show(ui, |ui| {
                        ui.label("m [kg]");
                        ui.add(egui::DragValue::new(&mut self.imp_mass_kg).speed(0.1));
                        ui.end_row();
                        ui.label("v_i [m/s]");
                        ui.add(egui::DragValue::new(&mut self.imp_vi_ms).speed(0.1));
                        ui.end_row();
                        ui.label("v_f [m/s]");
                        ui.add(egui::DragValue::new(&mut self.imp_vf_ms).speed(0.1));
                        ui.end_row();
                    });
                }
            }
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                self.imp_result = Some(match self.imp_mode {
                    ImpulseTabMode::ForceTime => {
                        let solve_for = match self.imp_solve {
                            2 => impulse_momentum::ImpulseSolveFor::Force,
                            3 => impulse_momentum::ImpulseSolveFor::Time,
                            _ => impulse_momentum::ImpulseSolveFor::Impulse,
                        };
                        let input = impulse_momentum::ImpulseInput {
                            solve_for,
                            force: self.imp_force_n,
                            force_unit: ForceUnit::Newton,
                            time: self.imp_time_s,
                            time_unit: TimeUnit::Second,
                            impulse: self.imp_impulse_ns,
                            impulse_unit: MomentumUnit::NewtonSecond,
                        };
                        result_text(
                            impulse_momentum::compute_impulse(input).map(|r| {
                                let mut lines = vec![format_value(r.value)];
                                lines.extend(r.steps);
                                lines
                            }),
                            &txt("gui.common.error", "Error"),
                        )
                    }
                    ImpulseTabMode::MassVelocity => {
                        let solve_for = match self.imp_solve {
                            2 => impulse_momentum::MomentumSolveFor::Mass,
                            3 => impulse_momentum::MomentumSolveFor::Velocity,
                            _ => impulse_momentum::MomentumSolveFor::Momentum,
                        };
                        let input = impulse_momentum::MomentumInput {
                            solve_for,
                            mass: self.imp_mass_kg,
                            mass_unit: MassUnit::Kilogram,
                            velocity: self.imp_velocity_ms,
                            velocity_unit: VelocityUnit::MeterPerSecond,
                            momentum: self.imp_momentum,
                            momentum_unit: MomentumUnit::KilogramMeterPerSecond,
                        };
                        result_text(
                            impulse_momentum::compute_momentum(input).map(|r| {
                                let mut lines = vec![format_value(r.value)];
                                lines.extend(r.steps);
                                lines
                            }),
                            &txt("gui.common.error", "Error"),
                        )
                    }
                    ImpulseTabMode::MomentumChange => result_text(
                        impulse_momentum::compute_momentum_change(
                            self.imp_mass_kg,
                            MassUnit::Kilogram,
                            self.imp_vi_ms,
                            self.imp_vf_ms,
                            VelocityUnit::MeterPerSecond,
                        )
                        .map(|r| {
                            let mut lines =
                                vec![format!("Δp = {}", format_with_unit(r.value, "kg·m/s"))];
                            lines.extend(r.steps);
                            lines
                        }),
                        &txt("gui.common.error", "Error"),
                    ),
                });
            }
            if let Some(res) = &self.imp_result {
                ui.label(res);
            }
        });
    }

    fn ui_terminal_velocity(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.term.heading", "Terminal Velocity"),
            &txt("gui.term.tip", "v = √(2mg/(ρAC_d)), g = 9.80665."),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(txt("gui.common.solve_for", "Solve for"));
                for (v, label) in [
                    (terminal_velocity::TerminalVelocitySolveFor::Velocity, "v"),
                    (terminal_velocity::TerminalVelocitySolveFor::Mass, "m"),
                    (terminal_velocity::TerminalVelocitySolveFor::Area, "A"),
                    (
                        terminal_velocity::TerminalVelocitySolveFor::DragCoefficient,
                        "C_d",
                    ),
                ] {
                    ui.selectable_value(&mut self.term_solve, v, label);
                }
            });
            ui.separator();
            egui::Grid::new("term_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    if self.term_solve != terminal_velocity::TerminalVelocitySolveFor::Mass {
                        ui.label("m [kg]");
                        ui.add(egui::DragValue::new(&mut self.term_mass_kg).speed(0.5));
                        ui.end_row();
                    }
                    if self.term_solve != terminal_velocity::TerminalVelocitySolveFor::Area {
                        ui.label("A [m²]");
                        ui.add(egui::DragValue::new(&mut self.term_area_m2).speed(0.01));
                        ui.end_row();
                    }
                    if self.term_solve
                        != terminal_velocity::TerminalVelocitySolveFor::DragCoefficient
                    {
                        ui.label("C_d");
                        ui.add(egui::DragValue::new(&mut self.term_cd).speed(0.01));
                        ui.end_row();
                        ui.label(txt("gui.term.shape", "Reference shape"));
                        egui::ComboBox::from_id_source("term_shape")
                            .selected_text(self.term_shape.clone())
                            .show_ui(ui, |ui| {
                                for shape in material_db::DRAG_SHAPES {
                                    if ui
                                        .selectable_value(
                                            &mut self.term_shape,
                                            shape.name.to_string(),
                                            format!("{} (C_d {})", shape.name, shape.cd),
                                        )
                                        .clicked()
                                    {
                                        self.term_cd = shape.cd;
                                    }
                                }
                            });
                        ui.end_row();
                    }
                    if self.term_solve != terminal_velocity::TerminalVelocitySolveFor::Velocity {
                        ui.label("v [m/s]");
                        ui.add(egui::DragValue::new(&mut self.term_velocity_ms).speed(0.5));
                        ui.end_row();
                    }
                    ui.label(txt("gui.term.density", "Fluid density [kg/m³]"));
                    ui.add(egui::DragValue::new(&mut self.term_density).speed(0.01));
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                let input = terminal_velocity::TerminalVelocityInput {
                    solve_for: self.term_solve,
                    mass: self.term_mass_kg,
                    mass_unit: MassUnit::Kilogram,
                    area: self.term_area_m2,
                    area_unit: AreaUnit::SquareMeter,
                    drag_coefficient: self.term_cd,
                    fluid_density: self.term_density,
                    fluid_density_unit: DensityUnit::KilogramPerCubicMeter,
                    velocity: self.term_velocity_ms,
                    velocity_unit: VelocityUnit::MeterPerSecond,
                };
                self.term_result = Some(result_text(
                    terminal_velocity::compute_terminal_velocity(input).map(|r| {
                        let mut lines = vec![
                            format!("v = {}", format_with_unit(r.velocity_ms, "m/s")),
                            format!("m = {}", format_with_unit(r.mass_kg, "kg")),
                            format!("A = {}", format_with_unit(r.area_m2, "m²")),
                            format!("C_d = {}", format_value(r.drag_coefficient)),
                        ];
                        lines.extend(r.steps);
                        lines
                    }),
                    &txt("gui.common.error", "Error"),
                ));
            }
            if let Some(res) = &self.term_result {
                ui.label(res);
            }
        });
    }

    fn ui_bernoulli(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.bern.heading", "Bernoulli Equation"),
            &txt(
                "gui.bern.tip",
                "P₁ + ½ρv₁² + ρgh₁ = P₂ + ½ρv₂² + ρgh₂ with g = 9.81.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(txt("gui.common.solve_for", "Solve for"));
                for (v, label) in [
                    (bernoulli::BernoulliSolveFor::Pressure1, "P₁"),
                    (bernoulli::BernoulliSolveFor::Pressure2, "P₂"),
                    (bernoulli::BernoulliSolveFor::Velocity1, "v₁"),
                    (bernoulli::BernoulliSolveFor::Velocity2, "v₂"),
                    (bernoulli::BernoulliSolveFor::Height1, "h₁"),
                    (bernoulli::BernoulliSolveFor::Height2, "h₂"),
                    (bernoulli::BernoulliSolveFor::Density, "ρ"),
                ] {
                    ui.selectable_value(&mut self.bern_solve, v, label);
                }
            });
            ui.separator();
            egui::Grid::new("bern_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    if self.bern_solve != bernoulli::BernoulliSolveFor::Pressure1 {
                        ui.label("P₁");
                        ui.add(egui::DragValue::new(&mut self.bern_p1).speed(10.0));
                        unit_combo(
                            ui,
                            "bern_p_unit",
                            &mut self.bern_pressure_unit,
                            &["Pa", "kPa", "bar", "mbar", "psi", "atm"],
                        );
                        ui.end_row();
                    }
                    if self.bern_solve != bernoulli::BernoulliSolveFor::Pressure2 {
                        ui.label("P₂");
                        ui.add(egui::DragValue::new(&mut self.bern_p2).speed(10.0));
                        ui.label(self.bern_pressure_unit.clone());
                        ui.end_row();
                    }
                    if self.bern_solve != bernoulli::BernoulliSolveFor::Velocity1 {
                        ui.label("v₁ [m/s]");
                        ui.add(egui::DragValue::new(&mut self.bern_v1).speed(0.1));
                        ui.label("");
                        ui.end_row();
                    }
                    if self.bern_solve != bernoulli::BernoulliSolveFor::Velocity2 {
                        ui.label("v₂ [m/s]");
                        ui.add(egui::DragValue::new(&mut self.bern_v2).speed(0.1));
                        ui.label("");
                        ui.end_row();
                    }
                    if self.bern_solve != bernoulli::BernoulliSolveFor::Height1 {
                        ui.label("h₁ [m]");
                        ui.add(egui::DragValue::new(&mut self.bern_h1).speed(0.1));
                        ui.label("");
                        ui.end_row();
                    }
                    if self.bern_solve != bernoulli::BernoulliSolveFor::Height2 {
                        ui.label("h₂ [m]");
                        ui.add(egui::DragValue::new(&mut self.bern_h2).speed(0.1));
                        ui.label("");
                        ui.end_row();
                    }
                    if self.bern_solve != bernoulli::BernoulliSolveFor::Density {
                        ui.label("ρ [kg/m³]");
                        ui.add(egui::DragValue::new(&mut self.bern_rho).speed(1.0));
                        ui.label("");
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                let input = bernoulli::BernoulliInput {
                    solve_for: self.bern_solve,
                    pressure1: self.bern_p1,
                    pressure2: self.bern_p2,
                    pressure_unit: parse_pressure_gui(&self.bern_pressure_unit),
                    velocity1: self.bern_v1,
                    velocity2: self.bern_v2,
                    velocity_unit: VelocityUnit::MeterPerSecond,
                    height1: self.bern_h1,
                    height2: self.bern_h2,
                    height_unit: LengthUnit::Meter,
                    density: self.bern_rho,
                    density_unit: DensityUnit::KilogramPerCubicMeter,
                };
                let unit = match self.bern_solve {
                    bernoulli::BernoulliSolveFor::Pressure1
                    | bernoulli::BernoulliSolveFor::Pressure2 => "Pa",
                    bernoulli::BernoulliSolveFor::Velocity1
                    | bernoulli::BernoulliSolveFor::Velocity2 => "m/s",
                    bernoulli::BernoulliSolveFor::Height1
                    | bernoulli::BernoulliSolveFor::Height2 => "m",
                    bernoulli::BernoulliSolveFor::Density => "kg/m³",
                };
                self.bern_result = Some(result_text(
                    bernoulli::compute_bernoulli(input).map(|r| {
                        let mut lines = vec![format_with_unit(r.value, unit)];
                        lines.extend(r.steps);
                        lines
                    }),
                    &txt("gui.common.error", "Error"),
                ));
            }
            if let Some(res) = &self.bern_result {
                ui.label(res);
            }
        });
    }

    fn ui_heat_transfer(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.heat.heading", "Heat Transfer"),
            &txt(
                "gui.heat.tip",
                "Conduction kAΔT/d, convection hAΔT, radiation εσA(T₁⁴−T₂⁴).",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut self.heat_mode,
                    HeatTabMode::Conduction,
                    txt("gui.heat.conduction", "Conduction"),
                );
                ui.selectable_value(
                    &mut self.heat_mode,
                    HeatTabMode::Convection,
                    txt("gui.heat.convection", "Convection"),
                );
                ui.selectable_value(
                    &mut self.heat_mode,
                    HeatTabMode::Radiation,
                    txt("gui.heat.radiation", "Radiation"),
                );
            });
            ui.horizontal(|ui| {
                ui.label(txt("gui.common.solve_for", "Solve for"));
                let labels: &[(u8, &str)] = match self.heat_mode {
                    HeatTabMode::Conduction => {
                        &[(1, "Q"), (2, "k"), (3, "A"), (4, "d"), (5, "T₁"), (6, "T₂")]
                    }
                    HeatTabMode::Convection => {
                        &[(1, "Q"), (2, "h"), (3, "A"), (4, "T_s"), (5, "T_f")]
                    }
                    HeatTabMode::Radiation => {
                        &[(1, "Q"), (2, "ε"), (3, "A"), (4, "T₁"), (5, "T₂")]
                    }
                };
                for (v, label) in labels {
                    ui.selectable_value(&mut self.heat_solve, *v, *label);
                }
            });
            ui.separator();
            egui::Grid::new("heat_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    if self.heat_solve != 1 {
                        ui.label("Q [W]");
                        ui.add(egui::DragValue::new(&mut self.heat_q_w).speed(1.0));
                        ui.label("");
                        ui.end_row();
                    }
                    match self.heat_mode {
                        HeatTabMode::Conduction => {
                            if self.heat_solve != 2 {
                                ui.label("k [W/m·K]");
                                ui.add(egui::DragValue::new(&mut self.heat_k).speed(0.01));
                                ui.label("");
                                ui.end_row();
                            }
                            if self.heat_solve != 4 {
                                ui.label("d [m]");
                                ui.add(egui::DragValue::new(&mut self.heat_thickness_m).speed(0.001));
                                ui.label("");
                                ui.end_row();
                            }
                        }
                        HeatTabMode::Convection => {
                            if self.heat_solve != 2 {
                                ui.label("h [W/m²·K]");
                                ui.add(egui::DragValue::new(&mut self.heat_h).speed(0.1));
                                ui.label("");
                                ui.end_row();
                            }
                        }
                        HeatTabMode::Radiation => {
                            if self.heat_solve != 2 {
                                ui.label("ε (0~1)");
                                ui.add(
                                    egui::DragValue::new(&mut self.heat_emissivity)
                                        .speed(0.01)
                                        .clamp_range(0.0..=1.0),
                                );
                                ui.label("");
                                ui.end_row();
                            }
                        }
                    }
                    if self.heat_solve != 3 {
                        ui.label("A [m²]");
                        ui.add(egui::DragValue::new(&mut self.heat_area_m2).speed(0.01));
                        ui.label("");
                        ui.end_row();
                    }
                    let (t1_label, t2_label, t1_solve, t2_solve): (&str, &str, u8, u8) =
                        match self.heat_mode {
                            HeatTabMode::Conduction => ("T₁", "T₂", 5, 6),
                            HeatTabMode::Convection => ("T_s", "T_f", 4, 5),
                            HeatTabMode::Radiation => ("T₁", "T₂", 4, 5),
                        };
                    if self.heat_solve != t1_solve {
                        ui.label(t1_label);
                        ui.add(egui::DragValue::new(&mut self.heat_t1).speed(1.0));
                        unit_combo(ui, "heat_t_unit", &mut self.heat_temp_unit, &["C", "K", "F"]);
                        ui.end_row();
                    }
                    if self.heat_solve != t2_solve {
                        ui.label(t2_label);
                        ui.add(egui::DragValue::new(&mut self.heat_t2).speed(1.0));
                        ui.label(self.heat_temp_unit.clone());
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                let temp_unit = parse_temperature_gui(&self.heat_temp_unit);
                let outcome = match self.heat_mode {
                    HeatTabMode::Conduction => {
                        let solve_for = match self.heat_solve {
                            2 => heat_transfer::ConductionSolveFor::Conductivity,
                            3 => heat_transfer::ConductionSolveFor::Area,
                            4 => heat_transfer::ConductionSolveFor::Thickness,
                            5 => heat_transfer::ConductionSolveFor::HotTemp,
                            6 => heat_transfer::ConductionSolveFor::ColdTemp,
                            _ => heat_transfer::ConductionSolveFor::HeatRate,
                        };
                        heat_transfer::compute_conduction(heat_transfer::ConductionInput {
                            solve_for,
                            heat_rate: self.heat_q_w,
                            heat_rate_unit: PowerUnit::Watt,
                            conductivity: self.heat_k,
                            conductivity_unit: ConductivityUnit::WPerMeterK,
                            area: self.heat_area_m2,
                            area_unit: AreaUnit::SquareMeter,
                            thickness: self.heat_thickness_m,
                            thickness_unit: LengthUnit::Meter,
                            hot_temp: self.heat_t1,
                            cold_temp: self.heat_t2,
                            temp_unit,
                        })
                    }
                    HeatTabMode::Convection => {
                        let solve_for = match self.heat_solve {
                            2 => heat_transfer::ConvectionSolveFor::Coefficient,
                            3 => heat_transfer::ConvectionSolveFor::Area,
                            4 => heat_transfer::ConvectionSolveFor::SurfaceTemp,
                            5 => heat_transfer::ConvectionSolveFor::FluidTemp,
                            _ => heat_transfer::ConvectionSolveFor::HeatRate,
                        };
                        heat_transfer::compute_convection(heat_transfer::ConvectionInput {
                            solve_for,
                            heat_rate: self.heat_q_w,
                            heat_rate_unit: PowerUnit::Watt,
                            coefficient: self.heat_h,
                            coefficient_unit: HeatTransferUnit::WPerSquareMeterK,
                            area: self.heat_area_m2,
                            area_unit: AreaUnit::SquareMeter,
                            surface_temp: self.heat_t1,
                            fluid_temp: self.heat_t2,
                            temp_unit,
                        })
                    }
                    HeatTabMode::Radiation => {
                        let solve_for = match self.heat_solve {
                            2 => heat_transfer::RadiationSolveFor::Emissivity,
                            3 => heat_transfer::RadiationSolveFor::Area,
                            4 => heat_transfer::RadiationSolveFor::HotTemp,
                            5 => heat_transfer::RadiationSolveFor::ColdTemp,
                            _ => heat_transfer::RadiationSolveFor::HeatRate,
                        };
                        heat_transfer::compute_radiation(heat_transfer::RadiationInput {
                            solve_for,
                            heat_rate: self.heat_q_w,
                            heat_rate_unit: PowerUnit::Watt,
                            emissivity: self.heat_emissivity,
                            area: self.heat_area_m2,
                            area_unit: AreaUnit::SquareMeter,
                            hot_temp: self.heat_t1,
                            cold_temp: self.heat_t2,
                            temp_unit,
                        })
                    }
                };
                self.heat_result = Some(result_text(
                    outcome.map(|r| {
                        let mut lines = vec![format_value(r.value)];
                        lines.extend(r.steps);
                        lines
                    }),
                    &txt("gui.common.error", "Error"),
                ));
            }
            if let Some(res) = &self.heat_result {
                ui.label(res);
            }
        });
    }

    fn ui_bend_allowance(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.bend.heading", "Sheet Metal Bend Allowance"),
            &txt(
                "gui.bend.tip",
                "BA = (π/180)(R + K·T)·A, OSSB = tan(A/2)(R+T), BD = 2·OSSB − BA.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("bend_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.bend.thickness", "Thickness T"));
                    ui.add(egui::DragValue::new(&mut self.bend_thickness).speed(0.1));
                    unit_combo(
                        ui,
                        "bend_unit",
                        &mut self.bend_length_unit,
                        &["mm", "cm", "in"],
                    );
                    ui.end_row();
                    ui.label(txt("gui.bend.radius", "Bend radius R"));
                    ui.add(egui::DragValue::new(&mut self.bend_radius).speed(0.1));
                    ui.label(self.bend_length_unit.clone());
                    ui.end_row();
                    ui.label(txt("gui.bend.angle", "Bend angle A [°]"));
                    ui.add(
                        egui::DragValue::new(&mut self.bend_angle_deg)
                            .speed(1.0)
                            .clamp_range(0.0..=180.0),
                    );
                    ui.label("");
                    ui.end_row();
                    ui.label(txt("gui.bend.k_factor", "K-factor"));
                    ui.add(
                        egui::DragValue::new(&mut self.bend_k_factor)
                            .speed(0.01)
                            .clamp_range(0.0..=1.0),
                    );
                    ui.label("");
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                let unit = parse_length_gui(&self.bend_length_unit);
                let input = bend_allowance::BendAllowanceInput {
                    thickness: self.bend_thickness,
                    thickness_unit: unit,
                    bend_radius: self.bend_radius,
                    bend_radius_unit: unit,
                    bend_angle: self.bend_angle_deg,
                    bend_angle_unit: AngleUnit::Degree,
                    k_factor: self.bend_k_factor,
                };
                self.bend_result = Some(result_text(
                    bend_allowance::compute_bend_allowance(input).map(|r| {
                        let mut lines = vec![
                            format!(
                                "BA = {}",
                                format_with_unit(r.bend_allowance_m * 1000.0, "mm")
                            ),
                            format!(
                                "OSSB = {}",
                                format_with_unit(r.outside_setback_m * 1000.0, "mm")
                            ),
                            format!(
                                "BD = {}",
                                format_with_unit(r.bend_deduction_m * 1000.0, "mm")
                            ),
                            format!(
                                "Arc = {}",
                                format_with_unit(r.arc_length_m * 1000.0, "mm")
                            ),
                        ];
                        lines.extend(r.steps);
                        lines
                    }),
                    &txt("gui.common.error", "Error"),
                ));
            }
            if let Some(res) = &self.bend_result {
                ui.label(res);
            }
        });
    }

    fn ui_refraction(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.refr.heading", "Refraction / Snell's Law"),
            &txt(
                "gui.refr.tip",
                "n = c/v, n₁sinθ₁ = n₂sinθ₂, θc = arcsin(n₂/n₁).",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            for (mode, label) in [
                (1u8, txt("gui.refr.index", "Index n = c/v")),
                (2, txt("gui.refr.speed", "Speed v = c/n")),
                (3, txt("gui.refr.angle", "Refraction angle θ₂")),
                (4, txt("gui.refr.n2", "Second index n₂")),
                (5, txt("gui.refr.critical", "Critical angle θc")),
            ] {
                ui.radio_value(&mut self.refr_mode, mode, label);
            }
            ui.separator();
            egui::Grid::new("refr_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    match self.refr_mode {
                        1 => {
                            ui.label(txt("gui.refr.v", "Speed in medium [m/s]"));
                            ui.add(egui::DragValue::new(&mut self.refr_speed_ms).speed(1e6));
                            ui.end_row();
                        }
                        2 => {
                            ui.label("n");
                            ui.add(egui::DragValue::new(&mut self.refr_index).speed(0.01));
                            ui.end_row();
                        }
                        3 => {
                            ui.label("n₁");
                            ui.add(egui::DragValue::new(&mut self.refr_n1).speed(0.01));
                            ui.end_row();
                            ui.label("n₂");
                            ui.add(egui::DragValue::new(&mut self.refr_n2).speed(0.01));
                            ui.end_row();
                            ui.label("θ₁ [°]");
                            ui.add(egui::DragValue::new(&mut self.refr_theta1_deg).speed(0.5));
                            ui.end_row();
                        }
                        4 => {
                            ui.label("n₁");
                            ui.add(egui::DragValue::new(&mut self.refr_n1).speed(0.01));
                            ui.end_row();
                            ui.label("θ₁ [°]");
                            ui.add(egui::DragValue::new(&mut self.refr_theta1_deg).speed(0.5));
                            ui.end_row();
                            ui.label("θ₂ [°]");
                            ui.add(egui::DragValue::new(&mut self.refr_theta2_deg).speed(0.5));
                            ui.end_row();
                        }
                        _ => {
                            ui.label("n₁");
                            ui.add(egui::DragValue::new(&mut self.refr_n1).speed(0.01));
                            ui.end_row();
                            ui.label("n₂");
                            ui.add(egui::DragValue::new(&mut self.refr_n2).speed(0.01));
                            ui.end_row();
                        }
                    }
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.run", "Calculate")).clicked() {
                let mode = match self.refr_mode {
                    1 => refraction::RefractionMode::IndexFromSpeed {
                        speed: self.refr_speed_ms,
                        speed_unit: VelocityUnit::MeterPerSecond,
                    },
                    2 => refraction::RefractionMode::SpeedFromIndex {
                        index: self.refr_index,
                    },
                    3 => refraction::RefractionMode::SnellAngle {
                        n1: self.refr_n1,
                        n2: self.refr_n2,
                        incident_angle: self.refr_theta1_deg,
                        angle_unit: AngleUnit::Degree,
                    },
                    4 => refraction::RefractionMode::SnellIndex {
                        n1: self.refr_n1,
                        incident_angle: self.refr_theta1_deg,
                        refracted_angle: self.refr_theta2_deg,
                        angle_unit: AngleUnit::Degree,
                    },
                    _ => refraction::RefractionMode::CriticalAngle {
                        n1: self.refr_n1,
                        n2: self.refr_n2,
                    },
                };
                let unit = match self.refr_mode {
                    2 => "m/s",
                    3 | 5 => "°",
                    _ => "",
                };
                self.refr_result = Some(result_text(
                    refraction::compute_refraction(mode).map(|r| {
                        let mut lines = vec![format_with_unit(r.value, unit)];
                        lines.extend(r.steps);
                        lines
                    }),
                    &txt("gui.common.error", "Error"),
                ));
            }
            if let Some(res) = &self.refr_result {
                ui.label(res);
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 매 프레임 기본 비주얼에서 새로 시작해야 알파가 중첩 적용되지 않는다.
        let mut visuals = match self.theme {
            ThemeChoice::System => {
                if ctx.style().visuals.dark_mode {
                    egui::Visuals::dark()
                } else {
                    egui::Visuals::light()
                }
            }
            ThemeChoice::Light => egui::Visuals::light(),
            ThemeChoice::Dark => egui::Visuals::dark(),
        };
        if self.window_alpha < 1.0 {
            visuals.panel_fill = visuals.panel_fill.gamma_multiply(self.window_alpha);
            visuals.window_fill = visuals.window_fill.gamma_multiply(self.window_alpha);
        }
        ctx.set_visuals(visuals);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Physics Engineering Toolbox"));
                ui.separator();
                if ui
                    .button(txt("gui.formula.button", "Formula reference"))
                    .clicked()
                {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut new_unit_system = self.config.unit_system;
            let mut font_path_to_load: Option<String> = None;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(txt("gui.settings.unit_preset", "Unit system preset"));
                    ui.horizontal(|ui| {
                        for (label, us) in [
                            ("SI", config::UnitSystem::SI),
                            ("CGS", config::UnitSystem::CGS),
                            ("Imperial", config::UnitSystem::Imperial),
                        ] {
                            ui.selectable_value(&mut new_unit_system, us, label);
                        }
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.theme", "Theme"));
                    ui.horizontal(|ui| {
                        ui.selectable_value(&mut self.theme, ThemeChoice::System, "System");
                        ui.selectable_value(&mut self.theme, ThemeChoice::Light, "Light");
                        ui.selectable_value(&mut self.theme, ThemeChoice::Dark, "Dark");
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider =
                        egui::Slider::new(&mut self.font_size_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.font_size_scale);
                    }
                    if ui
                        .checkbox(
                            &mut self.always_on_top,
                            txt("gui.settings.always_on_top", "Always on top"),
                        )
                        .changed()
                    {
                        let level = if self.always_on_top {
                            egui::WindowLevel::AlwaysOnTop
                        } else {
                            egui::WindowLevel::Normal
                        };
                        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
                    }
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    ui.label(txt("gui.settings.custom_font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button(txt("gui.settings.browse", "Browse…")).clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.custom_font_path = path.display().to_string();
                            }
                        }
                        if ui.button(txt("gui.settings.load_font", "Load")).clicked() {
                            font_path_to_load = Some(self.custom_font_path.clone());
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(egui::Color32::LIGHT_RED, err);
                    }
                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(
                                &mut self.lang_input,
                                "en-us".into(),
                                "English (US)",
                            );
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    if ui
                        .button(txt("gui.settings.save", "Save settings"))
                        .clicked()
                    {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        let resolved = i18n::resolve_language(
                            &self.config.language,
                            Some(self.config.language.as_str()),
                        );
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        self.lang_save_status = Some(match self.config.save() {
                            Ok(()) => txt("gui.settings.saved", "Saved."),
                            Err(e) => format!("Save error: {e}"),
                        });
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            if let Some(path) = font_path_to_load {
                self.font_load_error = load_custom_font(ctx, &path).err();
            }
            if new_unit_system != self.config.unit_system {
                self.config.unit_system = new_unit_system;
                self.apply_unit_preset(new_unit_system);
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline physics/engineering calculators",
                    ));
                    ui.label(txt("gui.about.version", "Version: 0.4"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.units",
                        "All calculations run in SI base units; unit presets only change input defaults.",
                    ));
                    ui.label(txt(
                        "gui.about.errors",
                        "Domain errors (negative radicand, PF > 1, total internal reflection) are reported instead of NaN.",
                    ));
                });
        }

        // 공식 참고 모달
        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.heading(txt("gui.formula.electrical", "Electrical"));
                    ui.label("P = φ·V·I·PF, S = φ·V·I, Q = √(S² − P²); φ = 1 or √3");
                    ui.label("E = kQ/r² (k = 8.99e9), E = F/q, E = V/d");
                    ui.label("Series 1/Ceq = Σ1/Ci; parallel Ceq = ΣCi");
                    ui.label("XL = 2πfL; Z = √(R² + XL²); PF = cos(arctan(XL/R))");
                    ui.label("W = πr²·L·8960 kg/m³; R = 1.68e-8·L/A");
                    ui.separator();
                    ui.heading(txt("gui.formula.mechanics", "Mechanics"));
                    ui.label("s = vt, v₀t + ½at², (v₀+v)t/2, (v² − v₀²)/(2a)");
                    ui.label("J = F·t, p = m·v, Δp = m(v_f − v_i)");
                    ui.label("v_t = √(2mg/(ρAC_d)), g = 9.80665");
                    ui.separator();
                    ui.heading(txt("gui.formula.fluids", "Fluids / Thermal"));
                    ui.label("P₁ + ½ρv₁² + ρgh₁ = P₂ + ½ρv₂² + ρgh₂ (g = 9.81)");
                    ui.label("Q = kA(T₁−T₂)/d, Q = hA(T_s−T_f), Q = εσA(T₁⁴−T₂⁴)");
                    ui.separator();
                    ui.heading(txt("gui.formula.optics", "Optics / Sheet metal"));
                    ui.label("n = c/v, n₁sinθ₁ = n₂sinθ₂, θc = arcsin(n₂/n₁)");
                    ui.label("BA = (π/180)(R + K·T)A, OSSB = tan(A/2)(R+T), BD = 2·OSSB − BA");
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(150.0)
            .default_width(210.0)
            .max_width(360.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::UnitConv => self.ui_unit_conv(ui),
                    Tab::AcPower => self.ui_ac_power(ui),
                    Tab::ElectricField => self.ui_electric_field(ui),
                    Tab::Capacitors => self.ui_capacitors(ui),
                    Tab::Reactance => self.ui_reactance(ui),
                    Tab::WireWeight => self.ui_wire_weight(ui),
                    Tab::Displacement => self.ui_displacement(ui),
                    Tab::Impulse => self.ui_impulse(ui),
                    Tab::TerminalVelocity => self.ui_terminal_velocity(ui),
                    Tab::Bernoulli => self.ui_bernoulli(ui),
                    Tab::HeatTransfer => self.ui_heat_transfer(ui),
                    Tab::BendAllowance => self.ui_bend_allowance(ui),
                    Tab::Refraction => self.ui_refraction(ui),
                });
        });
    }
}

fn result_text<E: std::fmt::Display>(
    outcome: Result<Vec<String>, E>,
    error_prefix: &str,
) -> String {
    match outcome {
        Ok(lines) => lines.join("\n"),
        Err(e) => format!("{error_prefix}: {e}"),
    }
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.clone())
        .show_ui(ui, |ui| {
            for code in options {
                ui.selectable_value(value, code.to_string(), *code);
            }
        });
}

fn quantity_options() -> Vec<(QuantityKind, &'static str)> {
    vec![
        (QuantityKind::Voltage, "Voltage"),
        (QuantityKind::Current, "Current"),
        (QuantityKind::Power, "Power"),
        (QuantityKind::Resistance, "Resistance"),
        (QuantityKind::Inductance, "Inductance"),
        (QuantityKind::Capacitance, "Capacitance"),
        (QuantityKind::Frequency, "Frequency"),
        (QuantityKind::Charge, "Charge"),
        (QuantityKind::ElectricField, "Electric field"),
        (QuantityKind::Length, "Length"),
        (QuantityKind::Area, "Area"),
        (QuantityKind::Volume, "Volume"),
        (QuantityKind::Mass, "Mass"),
        (QuantityKind::Density, "Density"),
        (QuantityKind::Time, "Time"),
        (QuantityKind::Velocity, "Velocity"),
        (QuantityKind::Acceleration, "Acceleration"),
        (QuantityKind::Force, "Force"),
        (QuantityKind::Pressure, "Pressure"),
        (QuantityKind::Temperature, "Temperature"),
        (QuantityKind::TemperatureDifference, "ΔTemperature"),
        (QuantityKind::Angle, "Angle"),
        (QuantityKind::Momentum, "Momentum"),
        (QuantityKind::Energy, "Energy"),
    ]
}

fn quantity_label(kind: QuantityKind) -> &'static str {
    quantity_options()
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, l)| *l)
        .unwrap_or("Quantity")
}

fn unit_options(kind: QuantityKind) -> &'static [&'static str] {
    match kind {
        QuantityKind::Voltage => &["V", "mV", "kV", "MV"],
        QuantityKind::Current => &["A", "mA", "uA", "kA"],
        QuantityKind::Power => &["W", "mW", "kW", "MW", "hp", "Btu/h"],
        QuantityKind::Resistance => &["ohm", "mohm", "kohm", "megohm"],
        QuantityKind::Inductance => &["H", "mH", "uH"],
        QuantityKind::Capacitance => &["F", "mF", "uF", "nF", "pF"],
        QuantityKind::Frequency => &["Hz", "kHz", "MHz", "GHz"],
        QuantityKind::Charge => &["C", "mC", "uC", "nC"],
        QuantityKind::ElectricField => &["V/m", "N/C", "kV/m", "V/cm"],
        QuantityKind::Length => &["m", "mm", "cm", "km", "in", "ft", "yd", "mi"],
        QuantityKind::Area => &["m2", "cm2", "mm2", "in2", "ft2"],
        QuantityKind::Volume => &["m3", "L", "mL", "ft3"],
        QuantityKind::Mass => &["kg", "g", "mg", "t", "lb", "oz"],
        QuantityKind::Density => &["kg/m3", "g/cm3", "lb/ft3"],
        QuantityKind::Time => &["s", "ms", "min", "h"],
        QuantityKind::Velocity => &["m/s", "km/h", "ft/s", "mph", "kn"],
        QuantityKind::Acceleration => &["m/s2", "cm/s2", "ft/s2", "g"],
        QuantityKind::Force => &["N", "kN", "dyn", "lbf"],
        QuantityKind::Pressure => &["Pa", "kPa", "MPa", "bar", "mbar", "psi", "atm", "mmHg"],
        QuantityKind::Temperature => &["C", "K", "F", "R"],
        QuantityKind::TemperatureDifference => &["K", "C", "F", "R"],
        QuantityKind::Angle => &["deg", "rad"],
        QuantityKind::Momentum => &["kg·m/s", "N·s", "lb·ft/s"],
        QuantityKind::Energy => &["J", "kJ", "cal", "kWh", "Btu"],
    }
}

fn default_units_for_kind(kind: QuantityKind) -> (&'static str, &'static str) {
    let options = unit_options(kind);
    let from = options.first().copied().unwrap_or("");
    let to = options.get(1).copied().unwrap_or(from);
    (from, to)
}

fn parse_voltage_gui(s: &str) -> VoltageUnit {
    conversion::parse_voltage_unit(s).unwrap_or(VoltageUnit::Volt)
}

fn parse_current_gui(s: &str) -> CurrentUnit {
    conversion::parse_current_unit(s).unwrap_or(CurrentUnit::Ampere)
}

fn parse_power_gui(s: &str) -> PowerUnit {
    conversion::parse_power_unit(s).unwrap_or(PowerUnit::Watt)
}

fn parse_length_gui(s: &str) -> LengthUnit {
    conversion::parse_length_unit(s).unwrap_or(LengthUnit::Meter)
}

fn parse_pressure_gui(s: &str) -> PressureUnit {
    conversion::parse_pressure_unit(s).unwrap_or(PressureUnit::Pascal)
}

fn parse_temperature_gui(s: &str) -> TemperatureUnit {
    conversion::parse_temperature_unit(s).unwrap_or(TemperatureUnit::Celsius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_si_applies_si_defaults() {
        let mut app = GuiApp::new(config::Config::default());
        app.apply_unit_preset(config::UnitSystem::SI);
        assert_eq!(app.wire_diameter_unit, "mm");
        assert_eq!(app.wire_length_unit, "m");
        assert_eq!(app.bern_pressure_unit, "Pa");
        assert_eq!(app.heat_temp_unit, "C");
        assert_eq!(app.bend_length_unit, "mm");
    }

    #[test]
    fn preset_imperial_applies_imperial_defaults() {
        let mut app = GuiApp::new(config::Config::default());
        app.apply_unit_preset(config::UnitSystem::Imperial);
        assert_eq!(app.wire_diameter_unit, "in");
        assert_eq!(app.wire_length_unit, "ft");
        assert_eq!(app.bern_pressure_unit, "psi");
        assert_eq!(app.heat_temp_unit, "F");
        assert_eq!(app.ac_power_unit, "hp");
    }

    #[test]
    fn every_quantity_has_unit_options() {
        for (kind, _) in quantity_options() {
            assert!(!unit_options(kind).is_empty());
        }
    }

    #[test]
    fn gui_unit_strings_parse_back() {
        for (kind, _) in quantity_options() {
            for code in unit_options(kind) {
                let out = conversion::convert(kind, 1.0, code, code).unwrap();
                assert!((out - 1.0).abs() < 1e-12, "{kind:?} {code}");
            }
        }
    }
}
