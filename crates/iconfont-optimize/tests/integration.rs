//! Integration tests for the SVG minifier
//!
//! Assembled documents must come out of optimization with the same viewBox
//! and the same number of shapes.

use iconfont_core::{
    CircleShape, IconDocument, OptimizeOptions, PathShape, Shape, SvgAssembler, SvgOptimizer,
};
use iconfont_optimize::SvgMinifier;
use proptest::prelude::*;

fn count_shapes(svg: &str) -> usize {
    svg.matches("<path").count() + svg.matches("<circle").count()
}

fn path(d: &str) -> Shape {
    Shape::Path(PathShape::new(d))
}

#[test]
fn test_assembled_document_round_trip() {
    let doc = IconDocument::new(
        "mixed",
        "0 0 24 24",
        vec![
            Shape::Path(PathShape {
                d: "M4 6a2 2 0 012-2h12a2 2 0 012 2v12a2 2 0 01-2 2H6a2 2 0 01-2-2V6z".into(),
                fill_rule: Some("evenodd".into()),
                clip_rule: Some("evenodd".into()),
            }),
            path("M 12.000 4.500 L 12 19.5"),
            Shape::Circle(CircleShape {
                cx: "12".into(),
                cy: "12".into(),
                r: "5".into(),
            }),
        ],
    )
    .unwrap();

    let assembled = SvgAssembler::new().assemble(&doc);
    let optimized = SvgMinifier::new()
        .optimize(&assembled, &OptimizeOptions::default())
        .unwrap();

    assert!(optimized.contains(r#"viewBox="0 0 24 24""#));
    assert_eq!(count_shapes(&optimized), 3);
    assert!(optimized.contains(r#"<path d="M12 4.5 12 19.5"/>"#));
    assert!(optimized.contains(r#"fill-rule="evenodd" clip-rule="evenodd""#));
    assert!(optimized.ends_with(r#"<circle cx="12" cy="12" r="5"/></svg>"#));
}

#[test]
fn test_optimizer_is_idempotent() {
    let doc = IconDocument::new("one", "0 0 20 20", vec![path("M 1.25 1.25 L 18.75 18.75")]).unwrap();
    let optimizer = SvgMinifier::new();
    let options = OptimizeOptions::default();

    let once = optimizer
        .optimize(&SvgAssembler::new().assemble(&doc), &options)
        .unwrap();
    let twice = optimizer.optimize(&once, &options).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_object_safe() {
    let optimizer: Box<dyn SvgOptimizer> = Box::new(SvgMinifier::new());
    assert_eq!(optimizer.name(), "minify");
}

fn segment() -> impl Strategy<Value = String> {
    let coord = || (-500i32..500).prop_map(|v| f64::from(v) / 4.0);
    prop_oneof![
        (coord(), coord()).prop_map(|(x, y)| format!("L{} {}", x, y)),
        (coord(), coord()).prop_map(|(x, y)| format!("l{} {}", x, y)),
        coord().prop_map(|x| format!("H{}", x)),
        coord().prop_map(|y| format!("v{}", y)),
        (coord(), coord(), coord(), coord()).prop_map(|(a, b, c, d)| format!("Q{} {} {} {}", a, b, c, d)),
        Just("z".to_string()),
    ]
}

// Property: optimization keeps the viewBox and every shape
proptest! {
    #[test]
    fn prop_view_box_and_shape_count_preserved(
        view_box in "0 0 [1-9][0-9]{0,2} [1-9][0-9]{0,2}",
        bodies in prop::collection::vec(prop::collection::vec(segment(), 0..8), 1..5),
        circles in 0usize..3,
    ) {
        let mut shapes: Vec<Shape> = bodies
            .iter()
            .map(|body| path(&format!("M0 0{}", body.concat())))
            .collect();
        for i in 0..circles {
            shapes.push(Shape::Circle(CircleShape {
                cx: i.to_string(),
                cy: "1.50".into(),
                r: "2".into(),
            }));
        }
        let expected = shapes.len();
        let doc = IconDocument::new("prop", view_box.clone(), shapes).unwrap();

        let optimized = SvgMinifier::new()
            .optimize(&SvgAssembler::new().assemble(&doc), &OptimizeOptions::default())
            .unwrap();

        let expected_view_box = format!("viewBox=\"{}\"", view_box);
        prop_assert!(optimized.contains(&expected_view_box));
        prop_assert_eq!(count_shapes(&optimized), expected);
    }
}
