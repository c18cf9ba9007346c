use super::{deserialize, import_course};
use crate::app::{reduce, DrawingMode, EditingState, EditorAction};
use crate::core::{CourseElement, ElementId, ElementType, Position};
use crate::persistence::{serialize, ImportError};
use crate::shared::EditorOptions;

fn sample_state(options: &EditorOptions) -> EditingState {
    let actions = vec![
        EditorAction::AddElement {
            element: CourseElement::new_point(1, ElementType::Tee, Position::new(46.0, 2.0))
                .unwrap(),
        },
        EditorAction::AddElement {
            element: CourseElement::new_point(1, ElementType::Basket, Position::new(46.0, 2.001))
                .unwrap(),
        },
        EditorAction::AddHole { number: 2 },
    ];
    actions.into_iter().fold(EditingState::new(options), |state, action| {
        reduce(state, action, options)
    })
}

#[test]
fn round_trip_preserves_holes_and_history() {
    let options = EditorOptions::default();
    let state = sample_state(&options);

    let json = serialize(&state).expect("Serialisierung sollte funktionieren");
    let restored = deserialize(&json, &options);

    assert_eq!(restored.holes, state.holes);
    assert_eq!(restored.current_hole, 2);
    assert_eq!(restored.history.past().len(), 3);
    assert!(!restored.can_redo());
}

#[test]
fn serialized_keys_are_camel_case() {
    let options = EditorOptions::default();
    let json = serialize(&sample_state(&options)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    for key in [
        "holes",
        "currentHole",
        "drawingMode",
        "selectedElement",
        "isDrawing",
        "tempPath",
        "past",
        "future",
    ] {
        assert!(value.get(key).is_some(), "Schlüssel {key} fehlt");
    }
}

#[test]
fn garbage_falls_back_to_default_state() {
    let options = EditorOptions::default();

    let state = deserialize("{not json", &options);

    assert_eq!(state.holes.len(), 1);
    assert_eq!(state.holes[0].number, 1);
    assert_eq!(state.current_hole, 1);
}

#[test]
fn empty_hole_list_falls_back_to_default_state() {
    let state = deserialize(r#"{"holes":[],"currentHole":1}"#, &EditorOptions::default());

    assert_eq!(state.holes.len(), 1);
    assert_eq!(state.holes[0].par, 3);
}

#[test]
fn missing_history_defaults_to_empty_and_distance_is_recomputed() {
    let json = r#"{
        "holes": [{
            "number": 4,
            "par": 3,
            "distance": 9999.0,
            "elements": [
                {"id":"6f1c1c2e-8c57-4b7a-9d43-0b6f6f1f0a11","holeNumber":4,"type":"tee","position":{"lat":46.0,"lng":2.0}},
                {"id":"6f1c1c2e-8c57-4b7a-9d43-0b6f6f1f0a12","holeNumber":4,"type":"basket","position":{"lat":46.0,"lng":2.001}}
            ]
        }],
        "currentHole": 9
    }"#;

    let state = deserialize(json, &EditorOptions::default());

    assert_eq!(state.current_hole, 4);
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    let distance = state.holes[0].distance.unwrap();
    assert!((distance - 77.2).abs() < 1.0);
}

#[test]
fn history_is_truncated_to_configured_depth() {
    let options = EditorOptions::default();
    let mut state = EditingState::new(&options);
    for number in 2..=12 {
        state = reduce(state, EditorAction::AddHole { number }, &options);
    }
    let json = serialize(&state).unwrap();

    let small = EditorOptions {
        history_max_depth: 4,
        ..EditorOptions::default()
    };
    let restored = deserialize(&json, &small);

    assert_eq!(restored.history.past().len(), 4);
    assert_eq!(restored.history.past()[3].holes.len(), 11);
}

#[test]
fn transient_drawing_state_survives_reload() {
    let options = EditorOptions::default();
    let mut state = EditingState::new(&options);
    for action in [
        EditorAction::SetDrawingMode {
            mode: Some(DrawingMode::Measure),
        },
        EditorAction::StartDrawing {
            position: Position::new(46.0, 2.0),
        },
        EditorAction::ContinueDrawing {
            position: Position::new(46.0, 2.001),
        },
    ] {
        state = reduce(state, action, &options);
    }

    let restored = deserialize(&serialize(&state).unwrap(), &options);

    assert_eq!(restored.drawing_mode, Some(DrawingMode::Measure));
    assert!(restored.is_drawing);
    assert_eq!(restored.temp_path.len(), 2);
}

#[test]
fn import_accepts_bare_course_document() {
    let json = r#"{"holes":[{"number":2,"par":4},{"number":1,"par":3}]}"#;

    let state = import_course(json, &EditorOptions::default()).expect("Import sollte funktionieren");

    let numbers: Vec<u32> = state.holes.iter().map(|h| h.number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(state.current_hole, 1);
    assert!(!state.can_undo());
}

#[test]
fn import_reports_structural_errors() {
    let options = EditorOptions::default();

    assert!(matches!(
        import_course("[1,2", &options),
        Err(ImportError::Parse(_))
    ));
    assert!(matches!(
        import_course(r#"{"holes":[]}"#, &options),
        Err(ImportError::NoHoles)
    ));
    assert!(matches!(
        import_course(r#"{"holes":[{"number":1,"par":3},{"number":1,"par":4}]}"#, &options),
        Err(ImportError::DuplicateHole(1))
    ));
    assert!(matches!(
        import_course(r#"{"holes":[{"number":1,"par":12}]}"#, &options),
        Err(ImportError::InvalidPar { hole: 1, par: 12 })
    ));
}

#[test]
fn import_rejects_degenerate_path() {
    let json = r#"{"holes":[{"number":1,"par":3,"elements":[
        {"id":"6f1c1c2e-8c57-4b7a-9d43-0b6f6f1f0a11","holeNumber":1,"type":"hazard",
         "path":[{"lat":46.0,"lng":2.0},{"lat":46.1,"lng":2.0}]}
    ]}]}"#;

    let result = import_course(json, &EditorOptions::default());

    assert!(matches!(result, Err(ImportError::DegeneratePath { .. })));
}

#[test]
fn import_accepts_non_uuid_element_ids() {
    let json = r#"{"holes":[{"number":1,"par":3,"elements":[
        {"id":"tee-1700000000000","holeNumber":1,"type":"tee","position":{"lat":46.0,"lng":2.0}},
        {"id":"42","holeNumber":1,"type":"basket","position":{"lat":46.0,"lng":2.001}}
    ]}]}"#;

    let state = import_course(json, &EditorOptions::default()).expect("Fremd-IDs sind erlaubt");

    let tee_id = ElementId::from("tee-1700000000000");
    assert_eq!(
        state.find_element(&tee_id).map(CourseElement::element_type),
        Some(ElementType::Tee)
    );
    assert!(state.find_element(&ElementId::from("42")).is_some());
    assert!(state.holes[0].distance.is_some());
}

#[test]
fn import_rejects_empty_element_id() {
    let json = r#"{"holes":[{"number":3,"par":3,"elements":[
        {"id":"  ","holeNumber":3,"type":"tee","position":{"lat":46.0,"lng":2.0}}
    ]}]}"#;

    let result = import_course(json, &EditorOptions::default());

    assert!(matches!(result, Err(ImportError::EmptyElementId { hole: 3 })));
}
