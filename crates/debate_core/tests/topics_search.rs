use debate_core::{DebateStore, SearchMode, StoreConfig, Topic};

fn titles(topics: &[Topic]) -> Vec<&str> {
    topics.iter().map(|topic| topic.title.as_str()).collect()
}

#[test]
fn search_climate_returns_single_seeded_topic() {
    let store = DebateStore::new();
    let hits = store.search_topics("Climate");
    assert_eq!(titles(&hits), vec!["Climate Change"]);
}

#[test]
fn search_is_case_insensitive_and_covers_category() {
    let store = DebateStore::new();
    let hits = store.search_topics("politics");
    assert_eq!(titles(&hits), vec!["Gun Control", "Immigration Policy"]);
    assert!(hits.iter().all(|topic| topic.category == "Politics"));
}

#[test]
fn substring_search_matches_inside_words_and_across_fields() {
    let store = DebateStore::new();
    assert_eq!(titles(&store.search_topics("CLIM")), vec!["Climate Change"]);
    assert_eq!(
        titles(&store.search_topics("penalty be abolished")),
        vec!["Death Penalty"]
    );
    assert!(store.search_topics("no such debate").is_empty());
}

#[test]
fn empty_substring_query_matches_every_topic() {
    let store = DebateStore::new();
    assert_eq!(store.search_topics("").len(), 12);
}

#[test]
fn complexity_range_on_seed_returns_three_topics_in_order() {
    let store = DebateStore::new();
    let hits = store.get_topics_by_complexity(8, 10);
    assert_eq!(
        titles(&hits),
        vec!["Artificial Intelligence Ethics", "Gun Control", "Death Penalty"]
    );
    let levels = hits.iter().map(|t| t.complexity_level).collect::<Vec<_>>();
    assert_eq!(levels, vec![8, 9, 8]);
}

#[test]
fn complexity_range_is_inclusive_and_inverted_range_is_empty() {
    let store = DebateStore::new();
    assert_eq!(titles(&store.get_topics_by_complexity(2, 2)), vec!["School Start Times"]);
    assert!(store.get_topics_by_complexity(9, 3).is_empty());
}

#[test]
fn complexity_is_clamped_on_create() {
    let mut store = DebateStore::with_config(StoreConfig::empty());
    let low = store.create_topic("Low", "d", -4, "c");
    let high = store.create_topic("High", "d", 42, "c");
    let mid = store.create_topic("Mid", "d", 6, "c");

    assert_eq!(store.get_topic(low).unwrap().complexity_level, 1);
    assert_eq!(store.get_topic(high).unwrap().complexity_level, 10);
    assert_eq!(store.get_topic(mid).unwrap().complexity_level, 6);
}

#[test]
fn created_topic_is_searchable_and_listed_last() {
    let mut store = DebateStore::new();
    let id = store.create_topic("Nuclear Power", "Is nuclear energy safe?", 6, "Energy");

    let hits = store.search_topics("nuclear");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, id);
    assert_eq!(store.topics().last().map(|t| t.id), Some(id));
    assert_eq!(store.counts().topics, 13);
}

#[test]
fn returned_topics_are_copies() {
    let store = DebateStore::new();
    let mut hits = store.search_topics("Climate");
    hits[0].title = "Edited".to_string();
    assert_eq!(store.search_topics("Climate")[0].title, "Climate Change");
}

#[test]
fn token_mode_requires_whole_tokens() {
    let store = DebateStore::with_config(StoreConfig::default().with_search_mode(SearchMode::Token));

    assert_eq!(titles(&store.search_topics("Climate")), vec!["Climate Change"]);
    assert_eq!(
        titles(&store.search_topics("POLITICS")),
        vec!["Gun Control", "Immigration Policy"]
    );
    assert!(store.search_topics("clim").is_empty());
    assert!(store.search_topics("").is_empty());
}

#[test]
fn token_mode_ands_query_tokens_and_keeps_collection_order() {
    let store = DebateStore::with_config(StoreConfig::default().with_search_mode(SearchMode::Token));

    let hits = store.search_topics("should governments");
    assert_eq!(titles(&hits), vec!["Climate Change", "Space Exploration"]);
    assert_eq!(titles(&store.search_topics("governments earth")), vec!["Space Exploration"]);
}

#[test]
fn topic_index_is_built_in_substring_mode_too() {
    let store = DebateStore::new();
    assert_eq!(store.topic_ids_for_token("Politics"), vec![4, 5]);
    assert!(store.topic_ids_for_token("should").len() >= 8);
}
