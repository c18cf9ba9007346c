use approx::assert_abs_diff_eq;
use course_editor::{
    DrawingMode, DrawingPhase, EditorAction, EditorKey, EditorOptions, EditorStore, ElementType,
    InputEvent, Position,
};

fn store() -> EditorStore {
    EditorStore::new(EditorOptions::default())
}

fn click(store: &mut EditorStore, lat: f64, lng: f64) {
    store.handle_input(InputEvent::MapClicked {
        position: Position::new(lat, lng),
    });
}

fn select_mode(store: &mut EditorStore, mode: DrawingMode) {
    store.handle_input(InputEvent::DrawingModeRequested { mode: Some(mode) });
}

#[test]
fn test_tee_and_basket_then_undo_twice() {
    let mut store = store();

    select_mode(&mut store, DrawingMode::Tee);
    click(&mut store, 46.0, 2.0);
    select_mode(&mut store, DrawingMode::Basket);
    click(&mut store, 46.0, 2.001);

    let distance = store.state().holes[0]
        .distance
        .expect("Distanz sollte nach Tee und Korb gesetzt sein");
    assert_abs_diff_eq!(distance, 77.2, epsilon = 1.0);
    assert_eq!(store.state().drawing_phase(), DrawingPhase::Idle);

    store.dispatch(EditorAction::Undo);
    store.dispatch(EditorAction::Undo);

    assert!(store.state().holes[0].elements.is_empty());
    assert_eq!(store.state().holes[0].distance, None);
}

#[test]
fn test_polygon_drawn_by_clicks_and_double_click() {
    let mut store = store();

    select_mode(&mut store, DrawingMode::ObZone);
    click(&mut store, 46.0, 2.0);
    click(&mut store, 46.001, 2.0);
    click(&mut store, 46.001, 2.001);
    store.handle_input(InputEvent::MapDoubleClicked {
        position: Position::new(46.001, 2.001),
    });

    let state = store.state();
    let zone = state
        .elements()
        .next()
        .expect("OB-Zone sollte übernommen sein");
    assert_eq!(zone.element_type(), ElementType::ObZone);
    assert_eq!(zone.path().map(<[Position]>::len), Some(3));
    assert_eq!(state.drawing_phase(), DrawingPhase::Idle);
    assert!(zone.perimeter_m() > 0.0);
}

#[test]
fn test_escape_discards_unfinished_path() {
    let mut store = store();

    select_mode(&mut store, DrawingMode::Hazard);
    click(&mut store, 46.0, 2.0);
    click(&mut store, 46.001, 2.0);
    store.handle_input(InputEvent::KeyPressed {
        key: EditorKey::Escape,
    });

    let state = store.state();
    assert_eq!(state.elements().count(), 0);
    assert!(!state.is_drawing);
    assert!(state.temp_path.is_empty());
    assert_eq!(state.drawing_mode, None);
}

#[test]
fn test_double_click_with_two_points_discards_path() {
    let mut store = store();

    select_mode(&mut store, DrawingMode::Hazard);
    click(&mut store, 46.0, 2.0);
    store.handle_input(InputEvent::MapDoubleClicked {
        position: Position::new(46.001, 2.0),
    });

    assert_eq!(store.state().elements().count(), 0);
    assert_eq!(store.state().drawing_phase(), DrawingPhase::Idle);
}

#[test]
fn test_double_click_point_completes_third_vertex() {
    let mut store = store();

    select_mode(&mut store, DrawingMode::Hazard);
    click(&mut store, 46.0, 2.0);
    click(&mut store, 46.001, 2.0);
    store.handle_input(InputEvent::MapDoubleClicked {
        position: Position::new(46.001, 2.001),
    });

    let state = store.state();
    assert_eq!(state.elements().count(), 1);
    let hazard = state.elements().next().expect("Hazard sollte übernommen sein");
    assert_eq!(hazard.element_type(), ElementType::Hazard);
    assert_eq!(
        hazard.path().map(<[Position]>::to_vec),
        Some(vec![
            Position::new(46.0, 2.0),
            Position::new(46.001, 2.0),
            Position::new(46.001, 2.001),
        ])
    );
    assert_eq!(state.drawing_phase(), DrawingPhase::Idle);
    assert_eq!(state.history.past().len(), 1);
}

#[test]
fn test_add_hole_after_maximum_number_does_not_overflow() {
    let mut store = store();
    store
        .import_json(r#"{"holes":[{"number":4294967295,"par":3}]}"#)
        .expect("Import sollte funktionieren");

    store.handle_input(InputEvent::AddHoleRequested);

    let numbers: Vec<u32> = store.state().holes.iter().map(|h| h.number).collect();
    assert_eq!(numbers, vec![1, u32::MAX]);
    assert_eq!(store.state().current_hole, 1);
}

#[test]
fn test_measure_shows_running_distance() {
    let mut store = store();

    select_mode(&mut store, DrawingMode::Measure);
    click(&mut store, 46.0, 2.0);
    click(&mut store, 46.0, 2.001);
    click(&mut store, 46.0, 2.002);

    let measured = store
        .state()
        .measure_distance_m()
        .expect("Messmodus ist aktiv");
    assert_abs_diff_eq!(measured, 154.5, epsilon = 2.0);
    let smoothed = store
        .smoothed_measure_distance_m()
        .expect("Messmodus ist aktiv");
    assert_abs_diff_eq!(smoothed, measured, epsilon = 1.0);

    store.handle_input(InputEvent::KeyPressed {
        key: EditorKey::Escape,
    });
    assert_eq!(store.state().measure_distance_m(), None);
    assert_eq!(store.state().elements().count(), 0);
}

#[test]
fn test_select_and_delete_with_keyboard() {
    let mut store = store();
    select_mode(&mut store, DrawingMode::Mandatory);
    click(&mut store, 46.0, 2.0);
    let id = store
        .state()
        .elements()
        .next()
        .map(|e| e.id.clone())
        .expect("Mandatory sollte existieren");

    store.handle_input(InputEvent::ElementClicked {
        id: id.clone(),
        position: Position::new(46.0, 2.0),
    });
    assert_eq!(store.state().selected_element.as_ref(), Some(&id));

    store.handle_input(InputEvent::KeyPressed {
        key: EditorKey::Delete,
    });
    assert_eq!(store.state().elements().count(), 0);
    assert_eq!(store.state().selected_element, None);

    store.handle_input(InputEvent::KeyPressed { key: EditorKey::Undo });
    assert!(store.state().find_element(&id).is_some());
}

#[test]
fn test_holes_are_added_switched_and_protected() {
    let mut store = store();

    store.handle_input(InputEvent::AddHoleRequested);
    store.handle_input(InputEvent::AddHoleRequested);
    assert_eq!(store.state().holes.len(), 3);
    assert_eq!(store.state().current_hole, 3);

    store.handle_input(InputEvent::HoleSelected { number: 2 });
    assert_eq!(store.state().current_hole, 2);

    store.handle_input(InputEvent::ParChanged { number: 2, par: 5 });
    assert_eq!(store.state().hole(2).map(|h| h.par), Some(5));

    for number in [1, 2, 3] {
        store.handle_input(InputEvent::DeleteHoleRequested { number });
    }
    assert_eq!(store.state().holes.len(), 1);
    assert_eq!(store.state().holes[0].number, 3);
    assert_eq!(store.state().current_hole, 3);
}

#[test]
fn test_point_placed_on_current_hole() {
    let mut store = store();
    store.handle_input(InputEvent::AddHoleRequested);

    select_mode(&mut store, DrawingMode::Tee);
    click(&mut store, 46.0, 2.0);

    let tee = store.state().elements().next().expect("Tee sollte existieren");
    assert_eq!(tee.hole_number, 2);
    assert!(store.state().hole(1).is_some_and(|h| h.elements.is_empty()));
}

#[test]
fn test_last_change_tracks_only_course_mutations() {
    let mut store = store();
    assert_eq!(store.last_change(), None);

    store.dispatch(EditorAction::DeleteHole { number: 1 });
    assert_eq!(store.last_change(), None, "abgelehnte Action zählt nicht");

    store.dispatch(EditorAction::AddHole { number: 2 });
    assert_eq!(store.last_change(), Some("ADD_HOLE"));

    select_mode(&mut store, DrawingMode::Hazard);
    click(&mut store, 46.0, 2.0);
    click(&mut store, 46.001, 2.0);
    assert_eq!(store.last_change(), Some("ADD_HOLE"), "Zeichnen ist keine Mutation");

    store.handle_input(InputEvent::KeyPressed { key: EditorKey::Undo });
    assert_eq!(store.last_change(), Some("UNDO"));

    store.dispatch(EditorAction::Redo);
    assert_eq!(store.last_change(), Some("REDO"));
}
