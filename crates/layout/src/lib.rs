//! The TeX box model used by mathtext.
//!
//! Layout happens bottom-up while the parser runs: every construct builds a
//! [`Node`] whose width, height and depth are final once it is packed. Only
//! [`Node::shrink`] changes a node afterwards, when it becomes a script.

pub mod auto;
pub mod config;
pub mod list;
pub mod node;
pub mod node_kind;
pub mod state;

pub use self::auto::{auto_height_char, auto_width_char, size_alternatives};
pub use self::list::{GlueSign, List, PackMode};
pub use self::node::{Char, EmptyBox, Glue, GlueSpec, GlyphInfo, Kern, Node, Rule};
pub use self::node_kind::ListKind;
pub use self::state::State;

// Re-export the metrics contract so downstream crates see one set of types
pub use mathtext_traits::{GlyphMetrics, MetricsProvider, SizedGlyph};

#[cfg(test)]
mod test_utils;
