use trace_plot::PlotError;
use trace_plot::core::Viewport;
use trace_plot::render::{
    Color, DrawCommandKind, NullRenderer, PolygonPrimitive, PolylinePrimitive, RenderFrame,
    Renderer,
};

fn black() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

#[test]
fn frame_preserves_insertion_order() {
    let frame = RenderFrame::new(Viewport::new(10, 10))
        .with_polyline(PolylinePrimitive::new(vec![(0.0, 0.0), (1.0, 1.0)], 1.0, black()))
        .with_polygon(PolygonPrimitive::filled(
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
            black(),
        ))
        .with_polyline(PolylinePrimitive::new(vec![(2.0, 2.0)], 1.0, black()));

    assert_eq!(
        frame.command_kinds(),
        vec![
            DrawCommandKind::Polyline,
            DrawCommandKind::Polygon,
            DrawCommandKind::Polyline,
        ]
    );
    frame.validate().expect("valid frame");
}

#[test]
fn invalid_primitives_fail_validation() {
    let viewport = Viewport::new(10, 10);

    let nan_line = RenderFrame::new(viewport).with_polyline(PolylinePrimitive::new(
        vec![(0.0, f64::NAN)],
        1.0,
        black(),
    ));
    assert!(matches!(nan_line.validate(), Err(PlotError::InvalidGeometry(_))));

    let zero_width = RenderFrame::new(viewport).with_polyline(PolylinePrimitive::new(
        vec![(0.0, 0.0)],
        0.0,
        black(),
    ));
    assert!(matches!(zero_width.validate(), Err(PlotError::InvalidData(_))));

    let bad_color = RenderFrame::new(viewport).with_polygon(PolygonPrimitive::filled(
        vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
        Color::rgba(0.0, 0.0, 0.0, 1.5),
    ));
    assert!(bad_color.validate().is_err());

    let bad_outline = RenderFrame::new(viewport).with_polygon(
        PolygonPrimitive::filled(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)], black())
            .with_stroke(black(), -1.0),
    );
    assert!(bad_outline.validate().is_err());
}

#[test]
fn null_renderer_rejects_invalid_viewport() {
    let mut renderer = NullRenderer::default();
    let err = renderer
        .render(&RenderFrame::new(Viewport::new(0, 10)))
        .expect_err("viewport");

    assert!(matches!(err, PlotError::InvalidViewport { width: 0, height: 10 }));
    assert!(renderer.last_commands.is_empty());
}
