use f1_paddock::modules::helpers::general::Helpers;
use f1_paddock::modules::models::article::Article;
use f1_paddock::modules::models::driver::Driver;
use f1_paddock::modules::models::race::Race;
use f1_paddock::modules::models::race_result::RaceResult;
use f1_paddock::modules::models::track::Track;
use f1_paddock::modules::store_api::StoreClient;

// Rows come off the wire as a JSON array, optional references as nulls.
#[test]
fn test_decode_race_rows() {
    let body = r#"[
        {"race_id":"a1","race_name":"Monaco GP","track_id":"t1","race_date":"2024-05-26","laps":78,"winner_driver_id":null},
        {"race_id":"a2","race_name":"Dutch GP","track_id":"t2","race_date":"2024-08-25","laps":72,"winner_driver_id":"d1"}
    ]"#;

    let races: Vec<Race> = serde_json::from_str(body).unwrap();

    assert_eq!(races.len(), 2);
    assert_eq!(races[0].race_name, "Monaco GP");
    assert!(races[0].winner_driver_id.is_none());
    assert_eq!(races[1].winner_driver_id.as_deref(), Some("d1"));
}

#[test]
fn test_decode_driver_rows() {
    let body = r#"[
        {"driver_id":"d1","first_name":"Max","last_name":"Verstappen","nationality":"Dutch","date_of_birth":"1997-09-30","team_id":"t1"},
        {"driver_id":"d2","first_name":"Free","last_name":"Agent","nationality":null,"date_of_birth":null,"team_id":null}
    ]"#;

    let drivers: Vec<Driver> = serde_json::from_str(body).unwrap();

    assert_eq!(drivers[0].full_name(), "Max Verstappen");
    assert!(drivers[1].team_id.is_none());
}

#[test]
fn test_races_sort_chronologically() {
    let mut races: Vec<Race> = serde_json::from_str(
        r#"[
        {"race_id":"a1","race_name":"Late","track_id":"t","race_date":"2024-09-01","laps":50,"winner_driver_id":null},
        {"race_id":"a2","race_name":"Broken","track_id":"t","race_date":"someday","laps":50,"winner_driver_id":null},
        {"race_id":"a3","race_name":"Early","track_id":"t","race_date":"2024-03-01","laps":50,"winner_driver_id":null}
    ]"#,
    )
    .unwrap();

    Race::sort_by_date(&mut races);

    assert_eq!(races[0].race_name, "Early");
    assert_eq!(races[1].race_name, "Late");
    // rows with an unparseable date go last
    assert_eq!(races[2].race_name, "Broken");
}

#[test]
fn test_articles_sort_newest_first() {
    let mut articles: Vec<Article> = serde_json::from_str(
        r#"[
        {"article_id":"a1","title":"Old","content":"x","created_at":"2024-01-01T08:00:00.000000Z","updated_at":null,"author_id":null},
        {"article_id":"a2","title":"New","content":"x","created_at":"2024-06-01T08:00:00.000000Z","updated_at":null,"author_id":"u1"}
    ]"#,
    )
    .unwrap();

    Article::sort_newest_first(&mut articles);

    assert_eq!(articles[0].title, "New");
    assert_eq!(articles[1].title, "Old");
}

#[test]
fn test_article_preview_truncates_long_content() {
    let article = Article {
        article_id: "a1".to_string(),
        title: "T".to_string(),
        content: "word ".repeat(100),
        created_at: "2024-01-01T08:00:00.000000Z".to_string(),
        updated_at: None,
        author_id: None,
    };

    let preview = article.preview(200);
    assert_eq!(preview.chars().count(), 203);
    assert!(preview.ends_with("..."));

    let short = Article {
        content: "short".to_string(),
        ..article
    };
    assert_eq!(short.preview(200), "short");
}

#[test]
fn test_find_by_id_helpers() {
    let tracks: Vec<Track> = serde_json::from_str(
        r#"[{"track_id":"t1","track_name":"Zandvoort","location":"Netherlands","length":4.259,"lap_record":null}]"#,
    )
    .unwrap();

    assert!(Track::find_by_id(&tracks, "t1").is_some());
    assert!(Track::find_by_id(&tracks, "t2").is_none());
}

#[test]
fn test_results_for_race() {
    let results: Vec<RaceResult> = serde_json::from_str(
        r#"[
        {"result_id":"r1","race_id":"race1","driver_id":"d1","position":1,"points":25},
        {"result_id":"r2","race_id":"race2","driver_id":"d1","position":2,"points":18}
    ]"#,
    )
    .unwrap();

    let of_race = RaceResult::for_race(&results, "race1");
    assert_eq!(of_race.len(), 1);
    assert_eq!(of_race[0].result_id, "r1");
}

// Inputs keep the wire field names; optional references serialize as null.
#[test]
fn test_input_serialization() {
    use f1_paddock::modules::models::race::RaceInput;

    let input = RaceInput {
        race_name: "Monaco GP".to_string(),
        track_id: "t1".to_string(),
        race_date: "2024-05-26".to_string(),
        laps: 78,
        winner_driver_id: None,
    };

    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["race_name"], "Monaco GP");
    assert_eq!(value["laps"], 78);
    assert!(value["winner_driver_id"].is_null());
    assert!(value.get("race_id").is_none());
}

// One remote path per table, rooted under /rest/v1.
#[test]
fn test_store_table_url() {
    let client = StoreClient::new("https://example.supabase.co/", "anon-key");
    assert_eq!(
        client.table_url("Races"),
        "https://example.supabase.co/rest/v1/Races"
    );
}

#[test]
fn test_dedupe_preserving_order() {
    let ids = vec![
        "u1".to_string(),
        "u2".to_string(),
        "u1".to_string(),
        "u3".to_string(),
    ];

    assert_eq!(
        Helpers::dedupe_preserving_order(&ids),
        vec!["u1".to_string(), "u2".to_string(), "u3".to_string()]
    );
}
