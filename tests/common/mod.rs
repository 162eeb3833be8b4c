#![allow(dead_code)]

use mathtext::{List, MathText, Node, UniformMetrics};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An engine over 10x10 glyphs with x-height 5 and unit rules, at 12pt/72dpi.
pub fn uniform_engine() -> MathText<UniformMetrics> {
    MathText::new(UniformMetrics::new())
}

/// The list built for the first math segment of a root produced from
/// `"$...$"`.
pub fn first_math(root: &Node) -> Result<&List, Box<dyn std::error::Error>> {
    root.as_list()
        .and_then(|l| l.children.get(1))
        .and_then(Node::as_list)
        .ok_or_else(|| "root has no math segment".into())
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
