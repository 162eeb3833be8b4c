//! TeX layout parameters.
//!
//! Script placement constants are fractions of the current x-height, as in
//! Appendix G of the TeXbook.

/// How much a node shrinks when it moves to the next script level.
pub const SHRINK_FACTOR: f32 = 0.7;

/// Shrinking stops having an effect once a node reaches this size level.
pub const NUM_SIZE_LEVELS: u8 = 6;

/// Space after a superscript.
pub const SCRIPT_SPACE: f32 = 0.2;

/// Drop of a script's baseline below the nucleus top (or bottom for drop-sub
/// nuclei).
pub const SUBDROP: f32 = 0.3;

/// Minimum superscript raise.
pub const SUP1: f32 = 0.5;

/// Minimum subscript drop.
pub const SUB1: f32 = 0.0;

/// Superscript shear on slanted nuclei.
pub const DELTA: f32 = 0.18;

/// Number of glue orders: normal, fil, fill, filll.
pub const GLUE_ORDERS: usize = 4;
