//! `varspan` — inline template-variable substitution with position tracking.
//!
//! Rewrites `{{ .BK_BSCP_* }}` placeholders in template text to their
//! current values and reports exactly where each value landed in the
//! rewritten text, so a host editor can highlight substituted spans and
//! answer hover queries with the original placeholder name.
//!
//! The core pass ([`substitute`]) is a pure function of the text and the
//! variable table; [`run_substitution_pass`] drives it against a
//! [`TextSurface`] and wires up decorations and hover.

mod engine;
mod mapper;
mod scanner;
mod surface;
mod vars;

pub use engine::{Decoration, DecorationIndex, PassOutput, substitute};
pub use mapper::{RangeSpan, next_line_number, split_across_lines};
pub use scanner::{Substitution, scan_line};
pub use surface::{
    HoverHandler, HoverRegistration, SUBSTITUTED_STYLE_CLASS, StyledRange, TextSurface,
    run_substitution_pass,
};
pub use vars::{VariableDef, VariableTable};
