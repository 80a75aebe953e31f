//! Editor-side adapter: drives one substitution pass against a host text
//! surface and wires up highlighting and hover.

use crate::engine::substitute;
use crate::mapper::RangeSpan;
use crate::vars::{VariableDef, VariableTable};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Style class applied to every substituted span.
pub const SUBSTITUTED_STYLE_CLASS: &str = "template-variable-item";

/// A span plus the style class the editor should render it with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyledRange {
    pub span: RangeSpan,
    pub class_name: &'static str,
}

/// Hover callback handed to the surface: (line, column) → tooltip content.
pub type HoverHandler = Box<dyn Fn(usize, usize) -> Option<String> + Send + Sync>;

/// The host text-display surface the engine talks to.
///
/// The engine reads the text once at pass start and writes it once at pass
/// end; it never retains the surface. `register_hover_handler` must
/// *replace* any previously registered handler — the surface holds exactly
/// one handler slot.
pub trait TextSurface {
    fn full_text(&self) -> Result<String>;
    fn set_full_text(&mut self, text: &str) -> Result<()>;
    fn apply_decorations(&mut self, ranges: &[StyledRange]) -> Result<()>;
    fn register_hover_handler(&mut self, handler: HoverHandler) -> Result<()>;
}

/// Handle for one pass's hover resolver, owned by the caller.
///
/// Dispose it (or drop it) when the pass's results are superseded; the
/// registered handler then stops answering, so a stale resolver never
/// reports ranges from a previous rewrite.
#[derive(Debug)]
pub struct HoverRegistration {
    active: Arc<AtomicBool>,
}

impl HoverRegistration {
    pub fn dispose(self) {}

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl Drop for HoverRegistration {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
    }
}

/// Run one substitution pass against `surface`.
///
/// Builds the variable table from `defs` (last write wins), rewrites the
/// surface text, decorates every substituted span, and registers a hover
/// handler that answers with the originating placeholder name. Collaborator
/// failures are propagated to the caller.
pub fn run_substitution_pass(
    surface: &mut dyn TextSurface,
    defs: &[VariableDef],
) -> Result<HoverRegistration> {
    let table = VariableTable::from_defs(defs);

    let text = surface.full_text().context("read surface text")?;
    let output = substitute(&text, &table);
    surface
        .set_full_text(&output.text)
        .context("write substituted text")?;

    let styled: Vec<StyledRange> = output
        .index
        .entries()
        .iter()
        .map(|d| StyledRange {
            span: d.span,
            class_name: SUBSTITUTED_STYLE_CLASS,
        })
        .collect();
    surface
        .apply_decorations(&styled)
        .context("apply decorations")?;

    let index = Arc::new(output.index);
    let active = Arc::new(AtomicBool::new(true));
    let handler = {
        let index = Arc::clone(&index);
        let active = Arc::clone(&active);
        Box::new(move |line: usize, column: usize| {
            if !active.load(Ordering::Acquire) {
                return None;
            }
            index.hover(line, column).map(str::to_owned)
        })
    };
    surface
        .register_hover_handler(handler)
        .context("register hover handler")?;

    Ok(HoverRegistration { active })
}
