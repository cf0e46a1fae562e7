use crate::format::format_value;
use crate::units::{convert_capacitance, CapacitanceUnit};

/// 커패시터 연결 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    Series,
    Parallel,
}

/// 목록의 커패시터 하나.
#[derive(Debug, Clone, Copy)]
pub struct CapacitorEntry {
    pub value: f64,
    pub unit: CapacitanceUnit,
}

/// 커패시터 합성 결과.
#[derive(Debug, Clone)]
pub struct CapacitorNetworkResult {
    /// 등가 정전용량 [F]
    pub equivalent_f: f64,
    pub steps: Vec<String>,
}

/// 커패시터 합성 계산 오류.
#[derive(Debug, Clone)]
pub enum CapacitorNetworkError {
    /// 입력 목록이 비어 있음
    EmptyList,
    /// index 위치의 값이 0 이하
    NonPositiveEntry(usize),
}

impl std::fmt::Display for CapacitorNetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacitorNetworkError::EmptyList => write!(f, "커패시터를 하나 이상 입력하세요"),
            CapacitorNetworkError::NonPositiveEntry(i) => {
                write!(f, "{}번째 커패시터 값은 0보다 커야 합니다", i + 1)
            }
        }
    }
}

impl std::error::Error for CapacitorNetworkError {}

/// 직렬(1/Ceq = Σ1/Cᵢ) 또는 병렬(Ceq = ΣCᵢ) 등가 용량을 구한다.
pub fn compute_equivalent(
    kind: NetworkKind,
    entries: &[CapacitorEntry],
) -> Result<CapacitorNetworkResult, CapacitorNetworkError> {
    if entries.is_empty() {
        return Err(CapacitorNetworkError::EmptyList);
    }
    let mut base_values = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let f = convert_capacitance(entry.value, entry.unit, CapacitanceUnit::Farad);
        if f <= 0.0 {
            return Err(CapacitorNetworkError::NonPositiveEntry(i));
        }
        base_values.push(f);
    }

    let mut steps = Vec::new();
    let equivalent_f = match kind {
        NetworkKind::Series => {
            let reciprocal_sum: f64 = base_values.iter().map(|c| 1.0 / c).sum();
            steps.push(format!(
                "1/Ceq = {} = {} 1/F",
                base_values
                    .iter()
                    .map(|c| format!("1/{}", format_value(*c)))
                    .collect::<Vec<_>>()
                    .join(" + "),
                format_value(reciprocal_sum)
            ));
            let ceq = 1.0 / reciprocal_sum;
            steps.push(format!("Ceq = {} F", format_value(ceq)));
            ceq
        }
        NetworkKind::Parallel => {
            let sum: f64 = base_values.iter().sum();
            steps.push(format!(
                "Ceq = {} = {} F",
                base_values
                    .iter()
                    .map(|c| format_value(*c))
                    .collect::<Vec<_>>()
                    .join(" + "),
                format_value(sum)
            ));
            sum
        }
    };

    Ok(CapacitorNetworkResult {
        equivalent_f,
        steps,
    })
}
