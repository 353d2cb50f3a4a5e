use super::*;

use crate::canvas::testing::RecordingCanvas;
use crate::config::model::PageSettings;
use crate::foundation::core::Orientation;

struct MarkerBox;

impl BoxRenderer for MarkerBox {
    fn render(
        &self,
        canvas: &mut dyn Canvas,
        _cfg: &ResolvedConfig,
        rect: PageRect,
    ) -> PhotocalResult<()> {
        canvas.fill_rect(rect, Some(crate::foundation::core::Rgba8::BLACK), None)
    }
}

#[test]
fn the_default_registry_knows_every_format_letter() {
    let registry = default_registry();
    assert_eq!(registry.kinds(), ['_', 'd', 'e', 'm', 's']);
    assert!(registry.contains('d'));
    assert!(!registry.contains('q'));
}

#[test]
fn unknown_letters_resolve_to_an_error() {
    let registry = default_registry();
    assert!(registry.resolve('d').is_ok());
    assert!(matches!(
        registry.resolve('q'),
        Err(PhotocalError::UnknownBoxType('q'))
    ));
}

#[test]
fn the_blank_box_reserves_its_slot_without_drawing() {
    let registry = default_registry();
    let mut canvas = RecordingCanvas::new(100, 100);
    let cfg = PageSettings::default()
        .resolve(Orientation::Landscape, Vec::new())
        .unwrap();
    let rect = PageRect {
        x0: 0,
        y0: 0,
        x1: 50,
        y1: 50,
    };
    registry.resolve('_').unwrap().render(&mut canvas, &cfg, rect).unwrap();
    assert!(canvas.calls.is_empty());
}

#[test]
fn registering_a_letter_replaces_the_renderer() {
    let mut registry = default_registry();
    registry.register('d', Box::new(MarkerBox));
    let mut canvas = RecordingCanvas::new(100, 100);
    let cfg = PageSettings::default()
        .resolve(Orientation::Landscape, Vec::new())
        .unwrap();
    let rect = PageRect {
        x0: 0,
        y0: 0,
        x1: 50,
        y1: 50,
    };
    registry.resolve('d').unwrap().render(&mut canvas, &cfg, rect).unwrap();
    assert_eq!(canvas.calls.len(), 1);
}
