//! Round-trip tests: every valid document survives serialize → deserialize
//! unchanged, preserving absence vs presence of optional fields.

use pretty_assertions::assert_eq;

use desmos_state::{
    parse_state, parse_state_value, to_json_value, ClickableInfo, ClickableRule, Domain,
    DotplotXMode, ExpressionState, FolderState, ImageState, ItemState, LabelSize,
    LineStyle, LoopMode, PlayDirection, RuleId, SimulationClickableInfo, SimulationState, Slider,
    State, TableColumn, TableState, TextState, VizProps,
};

fn roundtrip(state: &State) -> State {
    let json = to_json_value(state).unwrap();
    parse_state_value(json).unwrap()
}

// ============================================================================
// 1. Minimal document: standard viewport, one parabola
// ============================================================================

#[test]
fn test_minimal_parabola_roundtrips_exactly() {
    let text = r##"{
        "version": 8,
        "graph": { "viewport": { "xmin": -10.0, "ymin": -10.0, "xmax": 10.0, "ymax": 10.0 } },
        "expressions": { "list": [
            { "id": "1", "type": "expression", "color": "#000", "latex": "y=x^2" }
        ] }
    }"##;
    let state = parse_state(text).unwrap();
    assert_eq!(state.graph.viewport.xmin, -10.0);
    assert_eq!(state.item("1").unwrap().type_name(), "expression");

    // wire-level fidelity: same tree back out, absent options stay absent
    let original: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(to_json_value(&state).unwrap(), original);

    // typed-level fidelity
    assert_eq!(roundtrip(&state), state);
}

// ============================================================================
// 2. Every variant at once
// ============================================================================

fn kitchen_sink() -> State {
    let expr = ExpressionState {
        secret: Some(true),
        hidden: Some(false),
        line_style: Some(LineStyle::Dotted),
        label_size: Some(LabelSize::Custom("1.5".into())),
        slider: Some(Slider {
            loop_mode: Some(LoopMode::LoopForwardReverse),
            play_direction: Some(PlayDirection::Reverse),
            min: Some("0".into()),
            max: Some("2\\pi".into()),
            ..Slider::default()
        }),
        parametric_domain: Some(Domain::new("0", "1")),
        domain: Some(Domain::new("0", "1")),
        viz_props: Some(VizProps {
            dotplot_x_mode: Some(DotplotXMode::Exact),
            ..VizProps::default()
        }),
        clickable_info: Some(ClickableInfo {
            enabled: Some(true),
            description: Some("tap to bump a".into()),
            rules: Some(vec![
                ClickableRule {
                    id: RuleId::from("7"),
                    expression: "a+1".into(),
                    assignment: "a".into(),
                },
                ClickableRule {
                    id: RuleId::from(7),
                    expression: "a-1".into(),
                    assignment: "a".into(),
                },
            ]),
        }),
        regression_parameters: Some([("a".to_owned(), 1.5), ("b".to_owned(), -0.25)].into()),
        ..ExpressionState::new("e1", "#2d70b3")
    };

    let mut sim = SimulationState::new("s1");
    sim.fps = Some("30".into());
    sim.clickable_info = Some(SimulationClickableInfo {
        rules: vec![ClickableRule {
            id: RuleId::from("r1"),
            expression: "t+1".into(),
            assignment: "t".into(),
        }],
        enabled: None,
    });

    let mut state = State::new()
        .with_item(FolderState::new("f1").with_title("data"))
        .with_item(expr)
        .with_item(ImageState::new("i1", "data:image/png;base64,AAAA", "photo").with_center("(0,0)"))
        .with_item(
            TableState::new("t1")
                .with_column(TableColumn::new("c1", "#388c46").with_values(["1", "2"])),
        )
        .with_item(TextState::new("n1").with_text("see folder"))
        .with_item(sim);
    state.random_seed = Some("abc123".into());
    state.graph.show_grid = Some(false);
    state.graph.polar_mode = Some(true);
    state
}

#[test]
fn test_kitchen_sink_roundtrips() {
    let state = kitchen_sink();
    assert_eq!(roundtrip(&state), state);
}

#[test]
fn test_absent_fields_are_omitted_not_null() {
    let json = to_json_value(&kitchen_sink()).unwrap();
    let items = json["expressions"]["list"].as_array().unwrap();

    // folder: only the fields that were set
    assert_eq!(items[0]["type"], "folder");
    assert!(items[0].get("hidden").is_none());
    assert!(items[0].get("collapsed").is_none());

    // nothing anywhere serializes as an explicit null
    fn no_nulls(v: &serde_json::Value) -> bool {
        match v {
            serde_json::Value::Null => false,
            serde_json::Value::Array(a) => a.iter().all(no_nulls),
            serde_json::Value::Object(o) => o.values().all(no_nulls),
            _ => true,
        }
    }
    assert!(no_nulls(&json));
}

#[test]
fn test_mixed_rule_ids_stay_distinct() {
    let state = roundtrip(&kitchen_sink());
    let ItemState::Expression(expr) = state.item("e1").unwrap() else {
        panic!("e1 should be an expression");
    };
    let rules = expr.clickable_info.as_ref().unwrap().rules.as_ref().unwrap();
    assert_eq!(rules[0].id, RuleId::from("7"));
    assert_eq!(rules[1].id, RuleId::from(7));
    assert_ne!(rules[0].id, rules[1].id);
}

#[test]
fn test_domain_twins_survive_independently() {
    let json = to_json_value(&kitchen_sink()).unwrap();
    let expr = &json["expressions"]["list"][1];
    assert!(expr.get("parametricDomain").is_some());
    assert!(expr.get("domain").is_some());
    assert!(expr.get("polarDomain").is_none());
}

// ============================================================================
// 3. Property: generated expression lines round-trip
// ============================================================================

mod prop {
    use super::*;
    use proptest::option;
    use proptest::prelude::*;

    fn arb_line_style() -> impl Strategy<Value = LineStyle> {
        prop_oneof![
            Just(LineStyle::Solid),
            Just(LineStyle::Dashed),
            Just(LineStyle::Dotted)
        ]
    }

    fn arb_expression() -> impl Strategy<Value = ExpressionState> {
        (
            "[a-z0-9]{1,8}",
            "#[0-9a-f]{6}",
            option::of("[-a-zA-Z0-9\\\\^=+*/ ]{0,20}"),
            option::of(any::<bool>()),
            option::of(arb_line_style()),
            option::of(any::<bool>()),
        )
            .prop_map(|(id, color, latex, hidden, line_style, secret)| ExpressionState {
                latex,
                hidden,
                line_style,
                secret,
                ..ExpressionState::new(id, color)
            })
    }

    proptest! {
        #[test]
        fn prop_expression_documents_roundtrip(exprs in proptest::collection::vec(arb_expression(), 0..8)) {
            let mut state = State::new();
            for (i, mut e) in exprs.into_iter().enumerate() {
                // ids must be unique within the list
                e.id = format!("{i}-{}", e.id);
                state.expressions.list.push(e.into());
            }
            prop_assert_eq!(roundtrip(&state), state);
        }
    }
}
