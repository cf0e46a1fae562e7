//! 계산기에서 쓰는 정적 참조 테이블 모음.
//! 값은 참고용 공칭치이며 정밀 설계에는 해당 규격 원문을 확인해야 한다.

/// AWG 게이지 항목. 직경은 ASTM B258 공칭값이다.
#[derive(Debug, Clone, Copy)]
pub struct AwgEntry {
    pub gauge: i32,
    pub label: &'static str,
}

/// UI 목록에 노출하는 대표 게이지들.
pub const AWG_GAUGES: &[AwgEntry] = &[
    AwgEntry { gauge: -3, label: "0000 (4/0)" },
    AwgEntry { gauge: -2, label: "000 (3/0)" },
    AwgEntry { gauge: -1, label: "00 (2/0)" },
    AwgEntry { gauge: 0, label: "0 (1/0)" },
    AwgEntry { gauge: 2, label: "2" },
    AwgEntry { gauge: 4, label: "4" },
    AwgEntry { gauge: 6, label: "6" },
    AwgEntry { gauge: 8, label: "8" },
    AwgEntry { gauge: 10, label: "10" },
    AwgEntry { gauge: 12, label: "12" },
    AwgEntry { gauge: 14, label: "14" },
    AwgEntry { gauge: 16, label: "16" },
    AwgEntry { gauge: 18, label: "18" },
    AwgEntry { gauge: 20, label: "20" },
    AwgEntry { gauge: 22, label: "22" },
    AwgEntry { gauge: 24, label: "24" },
    AwgEntry { gauge: 26, label: "26" },
    AwgEntry { gauge: 28, label: "28" },
    AwgEntry { gauge: 30, label: "30" },
    AwgEntry { gauge: 32, label: "32" },
    AwgEntry { gauge: 36, label: "36" },
    AwgEntry { gauge: 40, label: "40" },
];

/// AWG 번호에서 도체 직경[m]을 구한다. 0000(4/0)은 -3으로 표기한다.
/// 표준 기하급수 공식 d(mm) = 0.127 · 92^((36-n)/39).
pub fn awg_diameter_m(gauge: i32) -> Option<f64> {
    if !(-3..=40).contains(&gauge) {
        return None;
    }
    let n = gauge as f64;
    let d_mm = 0.127 * 92_f64.powf((36.0 - n) / 39.0);
    Some(d_mm / 1000.0)
}

/// 굴절률 참조 항목.
#[derive(Debug)]
pub struct RefractiveMedium {
    pub name: &'static str,
    /// 589nm(나트륨 D선) 부근 공칭 굴절률
    pub index: f64,
}

pub const REFRACTIVE_MEDIA: &[RefractiveMedium] = &[
    RefractiveMedium { name: "Vacuum", index: 1.0 },
    RefractiveMedium { name: "Air", index: 1.000_293 },
    RefractiveMedium { name: "Ice", index: 1.31 },
    RefractiveMedium { name: "Water", index: 1.333 },
    RefractiveMedium { name: "Acrylic", index: 1.49 },
    RefractiveMedium { name: "Crown glass", index: 1.52 },
    RefractiveMedium { name: "Flint glass", index: 1.62 },
    RefractiveMedium { name: "Sapphire", index: 1.77 },
    RefractiveMedium { name: "Diamond", index: 2.417 },
];

/// 이름으로 굴절 매질을 찾는다.
pub fn find_medium(name: &str) -> Option<&'static RefractiveMedium> {
    REFRACTIVE_MEDIA
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
}

/// 항력계수 참조 항목.
#[derive(Debug)]
pub struct DragShape {
    pub name: &'static str,
    pub cd: f64,
}

/// 대표 형상의 항력계수. 종단속도 계산 기본값 채우기에 쓴다.
pub const DRAG_SHAPES: &[DragShape] = &[
    DragShape { name: "Sphere", cd: 0.47 },
    DragShape { name: "Half-sphere", cd: 0.42 },
    DragShape { name: "Cone", cd: 0.50 },
    DragShape { name: "Cube", cd: 1.05 },
    DragShape { name: "Long cylinder", cd: 0.82 },
    DragShape { name: "Flat plate", cd: 1.28 },
    DragShape { name: "Skydiver (belly)", cd: 1.0 },
    DragShape { name: "Streamlined body", cd: 0.04 },
];

/// 이름으로 항력 형상을 찾는다.
pub fn find_drag_shape(name: &str) -> Option<&'static DragShape> {
    DRAG_SHAPES
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
}
