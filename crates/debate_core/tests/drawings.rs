use debate_core::{DebateStore, Point, StoreConfig};

#[test]
fn create_drawing_starts_empty_with_canvas_size() {
    let mut store = DebateStore::new();
    let id = store.create_drawing(800.0, 600.0, "note-3");
    let drawing = store.get_drawing(id).unwrap();

    assert_eq!(drawing.id, id);
    assert_eq!(drawing.canvas_width, 800.0);
    assert_eq!(drawing.canvas_height, 600.0);
    assert_eq!(drawing.associated_note_id.as_deref(), Some("note-3"));
    assert!(drawing.strokes.is_empty());
}

#[test]
fn strokes_append_in_order_with_points() {
    let mut store = DebateStore::with_config(StoreConfig::empty());
    let id = store.create_drawing(320.0, 240.0, "");

    assert!(store.add_stroke(
        id,
        vec![Point::new(1.0, 2.0), Point::new(3.5, 4.5)],
        2.0,
        "red"
    ));
    assert!(store.add_stroke(id, vec![(10.0_f32, 10.0_f32).into()], 6.0, "#00ff00"));

    let drawing = store.get_drawing(id).unwrap();
    assert_eq!(drawing.associated_note_id, None);
    assert_eq!(drawing.strokes.len(), 2);
    assert_eq!(drawing.strokes[0].points, vec![Point::new(1.0, 2.0), Point::new(3.5, 4.5)]);
    assert_eq!(drawing.strokes[0].color, "red");
    assert_eq!(drawing.strokes[1].stroke_width, 6.0);
    assert!(drawing.strokes[0].timestamp <= drawing.strokes[1].timestamp);
}

#[test]
fn stroke_on_unknown_drawing_is_a_no_op() {
    let mut store = DebateStore::with_config(StoreConfig::empty());
    let id = store.create_drawing(10.0, 10.0, "");
    let note = store.create_general_note("not a drawing", "t");

    assert!(!store.add_stroke(77, vec![Point::new(0.0, 0.0)], 1.0, "black"));
    assert!(!store.add_stroke(note, vec![Point::new(0.0, 0.0)], 1.0, "black"));
    assert!(store.get_drawing(id).unwrap().strokes.is_empty());
}

#[test]
fn unknown_drawing_ids_report_absence() {
    let mut store = DebateStore::new();
    let note = store.create_general_note("n", "t");

    for id in [-1, 0, 1, note, 10_000] {
        assert!(store.get_drawing(id).is_none(), "id {id} should be absent");
    }
}

#[test]
fn returned_drawing_is_a_copy() {
    let mut store = DebateStore::with_config(StoreConfig::empty());
    let id = store.create_drawing(50.0, 50.0, "");
    store.add_stroke(id, vec![Point::new(1.0, 1.0)], 1.0, "black");

    let mut drawing = store.get_drawing(id).unwrap();
    drawing.strokes.clear();
    drawing.canvas_width = 1.0;

    let stored = store.get_drawing(id).unwrap();
    assert_eq!(stored.strokes.len(), 1);
    assert_eq!(stored.canvas_width, 50.0);
}
