//! 전기 계산기 모음.

pub mod ac_power;
pub mod capacitor_network;
pub mod electric_field;
pub mod inductive_reactance;
pub mod wire_weight;
