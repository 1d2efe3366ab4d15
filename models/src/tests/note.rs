use crate::{NOTE_SEARCH_KEYS, NewNote, NoteOrder, NoteSearch, NoteSort};

/// **VALUE**: Documents that note search always sends all eight allow-listed keys.
///
/// **WHY THIS MATTERS**: The query shape is fixed regardless of which filters are set;
/// unset keys travel with an empty value. This is regression coverage for current
/// behaviour, so a change here has to be deliberate.
///
/// **BUG THIS CATCHES**: Would catch keys being dropped, reordered or rendered with a
/// placeholder other than the empty string.
#[test]
fn given_only_sort_when_building_query_pairs_then_all_eight_keys_are_present() {
    // GIVEN: A search with only sort populated
    let search = NoteSearch::default().with_sort(NoteSort::CreatedAt);

    // WHEN: Building the pairs
    let pairs = search.query_pairs();

    // THEN: Every allow-listed key appears once, in order, with empty values for the rest
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, NOTE_SEARCH_KEYS.to_vec());

    for (key, value) in &pairs {
        if *key == "sort" {
            assert_eq!(value, "created_at");
        } else {
            assert_eq!(value, "", "key {key} should be empty");
        }
    }
}

#[test]
fn given_text_when_building_query_pairs_then_q_comes_first() {
    let search = NoteSearch::default()
        .with_text("bench")
        .with_limit(50)
        .with_closed(-1)
        .with_order(NoteOrder::Newest);

    let pairs = search.query_pairs();

    assert_eq!(pairs.len(), 9);
    assert_eq!(pairs[0], ("q", String::from("bench")));
    assert_eq!(pairs[1], ("limit", String::from("50")));
    assert_eq!(pairs[2], ("closed", String::from("-1")));
    assert_eq!(pairs[8], ("order", String::from("newest")));
}

#[test]
fn given_new_note_when_serialized_then_has_lat_lon_text() {
    let note = NewNote::new(51.5, -0.12, "Broken bench");

    let json = serde_json::to_value(&note).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"lat": 51.5, "lon": -0.12, "text": "Broken bench"})
    );
}
