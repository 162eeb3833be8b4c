use crate::state::State;
use mathtext_traits::UniformMetrics;

pub fn state() -> State {
    State::new("it", 12.0, 72.0)
}

pub fn uniform() -> UniformMetrics {
    UniformMetrics::new()
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
