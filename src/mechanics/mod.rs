//! 역학 계산기 모음.

pub mod displacement;
pub mod impulse_momentum;
pub mod terminal_velocity;
