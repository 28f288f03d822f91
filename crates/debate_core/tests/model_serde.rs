use debate_core::{DebateStore, Drawing, Note, Point, StoreConfig, Topic, UserBelief};

#[test]
fn topic_serializes_with_expected_wire_fields() {
    let store = DebateStore::new();
    let topic = store.get_topic(4).unwrap();

    let json = serde_json::to_value(&topic).unwrap();
    assert_eq!(json["id"], 4);
    assert_eq!(json["title"], "Gun Control");
    assert_eq!(json["complexity_level"], 9);
    assert_eq!(json["category"], "Politics");

    let decoded: Topic = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, topic);
}

#[test]
fn note_serializes_links_and_timestamps() {
    let mut store = DebateStore::with_config(StoreConfig::empty());
    let a = store.create_note("claim text", "tag", "claim");
    let b = store.create_general_note("other", "tag");
    store.link_notes(a, b);

    let note = store.get_note(a).unwrap();
    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["topic_tag"], "tag");
    assert_eq!(json["note_type"], "claim");
    assert_eq!(json["linked_notes"], serde_json::json!([b]));
    assert_eq!(json["created_at"], json["updated_at"]);

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn belief_serializes_with_expected_wire_fields() {
    let belief = UserBelief::new(3, 12, "against", 1_700_000_000_000);
    let json = serde_json::to_value(&belief).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "topic_id": 3,
            "conviction_level": 10,
            "position": "against",
            "recorded_at": 1_700_000_000_000_i64
        })
    );
}

#[test]
fn drawing_points_serialize_as_xy_pairs() {
    let mut store = DebateStore::with_config(StoreConfig::empty());
    let id = store.create_drawing(100.0, 50.0, "");
    store.add_stroke(id, vec![Point::new(1.5, 2.0)], 3.0, "blue");

    let drawing = store.get_drawing(id).unwrap();
    let json = serde_json::to_value(&drawing).unwrap();
    assert_eq!(json["canvas_width"], 100.0);
    assert_eq!(json["associated_note_id"], serde_json::Value::Null);
    assert_eq!(
        json["strokes"][0]["points"],
        serde_json::json!([{ "x": 1.5, "y": 2.0 }])
    );
    assert_eq!(json["strokes"][0]["stroke_width"], 3.0);
    assert_eq!(json["strokes"][0]["color"], "blue");

    let decoded: Drawing = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, drawing);
}
