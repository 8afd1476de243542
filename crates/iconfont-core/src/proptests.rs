use super::*;
use proptest::prelude::*;

fn module_text(view_box: &str, paths: &[String], circles: &[(String, String, String)]) -> String {
    let mut text = format!(
        "var icon = (0, import_jsx_runtime.jsxs)(import_primitives.SVG, {{ xmlns: \"http://www.w3.org/2000/svg\", viewBox: \"{}\", children: [\n",
        view_box
    );
    for (cx, cy, r) in circles {
        text.push_str(&format!(
            "  (0, import_jsx_runtime.jsx)(import_primitives.Circle, {{ cx: \"{}\", cy: \"{}\", r: \"{}\" }}),\n",
            cx, cy, r
        ));
    }
    for d in paths {
        text.push_str(&format!(
            "  (0, import_jsx_runtime.jsx)(import_primitives.Path, {{ d: \"{}\" }}),\n",
            d
        ));
    }
    text.push_str("] });\n");
    text
}

fn path_data() -> impl Strategy<Value = String> {
    "[MLHVCZmlhvcz0-9 .-]{1,24}"
}

fn number() -> impl Strategy<Value = String> {
    "[0-9]{1,3}(\\.[0-9]{1,2})?"
}

// Property: one shape per construct, paths first, each in source order
proptest! {
    #[test]
    fn prop_shape_count_and_order(
        paths in prop::collection::vec(path_data(), 0..6),
        circles in prop::collection::vec((number(), number(), number()), 0..4),
    ) {
        prop_assume!(!paths.is_empty() || !circles.is_empty());
        let text = module_text("0 0 24 24", &paths, &circles);
        let source = IconSource::new("prop", "prop.js", text);

        let document = build_document(&source, &ShapeExtractor::new(), &AttributeAssociator::default()).unwrap();
        prop_assert_eq!(document.shapes().len(), paths.len() + circles.len());

        for (shape, d) in document.shapes().iter().zip(&paths) {
            match shape {
                Shape::Path(p) => prop_assert_eq!(&p.d, d),
                Shape::Circle(_) => prop_assert!(false, "circle before path"),
            }
        }
        for (shape, (cx, cy, r)) in document.shapes()[paths.len()..].iter().zip(&circles) {
            prop_assert_eq!(shape, &Shape::Circle(CircleShape { cx: cx.clone(), cy: cy.clone(), r: r.clone() }));
        }
    }
}

// Property: the assembled root carries the extracted viewBox untouched
proptest! {
    #[test]
    fn prop_view_box_preserved(
        view_box in "[0-9]{1,3} [0-9]{1,3} [0-9]{1,3} [0-9]{1,3}",
        d in path_data(),
    ) {
        let text = module_text(&view_box, &[d], &[]);
        let source = IconSource::new("vb", "vb.js", text);
        let document = build_document(&source, &ShapeExtractor::new(), &AttributeAssociator::default()).unwrap();
        let svg = SvgAssembler::new().assemble(&document);
        let expected = format!("viewBox=\"{}\"", view_box);
        prop_assert!(svg.contains(&expected));
    }
}

// Property: a rule further than the radius from the path never attaches
proptest! {
    #[test]
    fn prop_rules_outside_window_never_attach(
        radius in 1usize..200,
        extra in 0usize..64,
        before in any::<bool>(),
    ) {
        let pad = " ".repeat(radius + extra);
        let rule = "fillRule: \"evenodd\"";
        let text = if before {
            format!("{}{}d: \"M1 1\"", rule, pad)
        } else {
            format!("d: \"M1 1\"{}{}", pad, rule)
        };
        let offset = text.find("d: ").unwrap();
        let rules = AttributeAssociator::window(radius).rules_in_window(&text, offset);
        prop_assert_eq!(rules.fill_rule, None);
    }
}

// Property: extraction is a pure function of the text
proptest! {
    #[test]
    fn prop_extraction_deterministic(text in "\\PC{0,200}") {
        let extractor = ShapeExtractor::new();
        prop_assert_eq!(extractor.extract(&text), extractor.extract(&text));
    }
}
