//! 판금/가공 계산기 모음.

pub mod bend_allowance;
