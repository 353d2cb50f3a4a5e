use std::collections::BTreeMap;

use crate::boxes::date::DateBox;
use crate::boxes::event::EventBox;
use crate::boxes::month::MonthBox;
use crate::boxes::simple::SimpleBox;
use crate::canvas::surface::Canvas;
use crate::config::model::ResolvedConfig;
use crate::foundation::core::PageRect;
use crate::foundation::error::{PhotocalError, PhotocalResult};

/// Renders one calendar box type into its page slot.
pub trait BoxRenderer {
    /// Draw the box into `rect`.
    fn render(
        &self,
        canvas: &mut dyn Canvas,
        cfg: &ResolvedConfig,
        rect: PageRect,
    ) -> PhotocalResult<()>;
}

/// Box renderers addressable by their format-string letter.
#[derive(Default)]
pub struct BoxRegistry {
    renderers: BTreeMap<char, Box<dyn BoxRenderer>>,
}

impl BoxRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the renderer for `kind`.
    pub fn register(&mut self, kind: char, renderer: Box<dyn BoxRenderer>) {
        self.renderers.insert(kind, renderer);
    }

    /// The renderer for `kind`, or [`PhotocalError::UnknownBoxType`].
    pub fn resolve(&self, kind: char) -> PhotocalResult<&dyn BoxRenderer> {
        self.renderers
            .get(&kind)
            .map(|r| r.as_ref())
            .ok_or(PhotocalError::UnknownBoxType(kind))
    }

    /// Whether `kind` has a renderer.
    pub fn contains(&self, kind: char) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// The registered letters, sorted.
    pub fn kinds(&self) -> Vec<char> {
        self.renderers.keys().copied().collect()
    }
}

/// The blank box: `_` reserves its slot and draws nothing.
struct BlankBox;

impl BoxRenderer for BlankBox {
    fn render(
        &self,
        _canvas: &mut dyn Canvas,
        _cfg: &ResolvedConfig,
        _rect: PageRect,
    ) -> PhotocalResult<()> {
        Ok(())
    }
}

/// Registry with the built-in boxes: `d` (date), `m` (month grid), `e`
/// (upcoming events), `s` (simple date strip) and `_` (blank).
pub fn default_registry() -> BoxRegistry {
    let mut registry = BoxRegistry::new();
    registry.register('d', Box::new(DateBox));
    registry.register('m', Box::new(MonthBox));
    registry.register('e', Box::new(EventBox));
    registry.register('s', Box::new(SimpleBox));
    registry.register('_', Box::new(BlankBox));
    registry
}

#[cfg(test)]
#[path = "../../tests/unit/boxes/registry.rs"]
mod tests;
