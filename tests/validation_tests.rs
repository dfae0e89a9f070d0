use f1_paddock::modules::helpers::validation::ValidationHelpers;
use f1_paddock::modules::models::driver::Driver;
use f1_paddock::modules::models::race_result::RaceResult;

fn result(id: &str, race_id: &str, driver_id: &str, position: i32) -> RaceResult {
    RaceResult {
        result_id: id.to_string(),
        race_id: race_id.to_string(),
        driver_id: driver_id.to_string(),
        position,
        points: 0,
    }
}

fn driver(id: &str) -> Driver {
    Driver {
        driver_id: id.to_string(),
        first_name: "Test".to_string(),
        last_name: id.to_string(),
        nationality: None,
        date_of_birth: None,
        team_id: None,
    }
}

// Malformed addresses are rejected locally, before any remote call.
#[test]
fn test_email_validation() {
    assert!(ValidationHelpers::is_valid_email("fan@example.com"));
    assert!(ValidationHelpers::is_valid_email("first.last+tag@mail.co"));

    assert!(!ValidationHelpers::is_valid_email(""));
    assert!(!ValidationHelpers::is_valid_email("no-at-sign"));
    assert!(!ValidationHelpers::is_valid_email("two@@example.com"));
    assert!(!ValidationHelpers::is_valid_email("spaces in@example.com"));
}

#[test]
fn test_position_range() {
    assert!(ValidationHelpers::is_valid_position(1));
    assert!(ValidationHelpers::is_valid_position(10));
    assert!(ValidationHelpers::is_valid_position(20));

    assert!(!ValidationHelpers::is_valid_position(0));
    assert!(!ValidationHelpers::is_valid_position(21));
    assert!(!ValidationHelpers::is_valid_position(-1));
}

// Assigning position 1 in a race that already has a position 1 result is
// rejected as taken; other races do not interfere.
#[test]
fn test_position_taken_within_race() {
    let results = vec![
        result("r1", "race1", "d1", 1),
        result("r2", "race1", "d2", 2),
    ];

    assert!(ValidationHelpers::is_position_taken(&results, "race1", 1, None));
    assert!(ValidationHelpers::is_position_taken(&results, "race1", 2, None));
    assert!(!ValidationHelpers::is_position_taken(&results, "race1", 3, None));
    assert!(!ValidationHelpers::is_position_taken(&results, "race2", 1, None));
}

// While editing a result, its own position must not count as a duplicate,
// but another row's position still does.
#[test]
fn test_position_taken_excludes_edited_row() {
    let results = vec![
        result("r1", "race1", "d1", 1),
        result("r2", "race1", "d2", 2),
    ];

    assert!(!ValidationHelpers::is_position_taken(
        &results,
        "race1",
        1,
        Some("r1")
    ));
    assert!(ValidationHelpers::is_position_taken(
        &results,
        "race1",
        2,
        Some("r1")
    ));
}

// One result per driver per race: the create form only offers drivers
// that have no result in the selected race yet.
#[test]
fn test_drivers_without_result() {
    let drivers = vec![driver("d1"), driver("d2"), driver("d3")];
    let results = vec![
        result("r1", "race1", "d1", 1),
        result("r2", "race2", "d2", 1),
    ];

    assert!(ValidationHelpers::driver_has_result(&results, "race1", "d1"));
    assert!(!ValidationHelpers::driver_has_result(&results, "race1", "d2"));

    let available = ValidationHelpers::drivers_without_result(&drivers, &results, "race1");
    let ids: Vec<&str> = available.iter().map(|d| d.driver_id.as_str()).collect();
    assert_eq!(ids, vec!["d2", "d3"]);
}

// The whole submit time chain for the result form: a second result on an
// already taken position is rejected as "position taken" before any
// remote write happens.
#[test]
fn test_validate_result_submission() {
    use f1_paddock::errors::Error;

    let results = vec![
        result("r1", "race1", "d1", 1),
        result("r2", "race1", "d2", 2),
    ];

    // new result on a free position passes and yields the parsed position
    let position =
        ValidationHelpers::validate_result_submission(&results, "race1", "d3", "3", None).unwrap();
    assert_eq!(position, 3);

    // position 1 is taken in race1
    let taken =
        ValidationHelpers::validate_result_submission(&results, "race1", "d3", "1", None)
            .unwrap_err();
    assert!(matches!(taken, Error::PositionTakenError { position: 1 }));

    // editing r1 may keep its own position
    assert!(ValidationHelpers::validate_result_submission(
        &results,
        "race1",
        "d1",
        "1",
        Some("r1")
    )
    .is_ok());

    // missing fields and out of range positions never pass
    assert!(
        ValidationHelpers::validate_result_submission(&results, "", "d3", "3", None).is_err()
    );
    assert!(
        ValidationHelpers::validate_result_submission(&results, "race1", "d3", "21", None)
            .is_err()
    );
    assert!(
        ValidationHelpers::validate_result_submission(&results, "race1", "d3", "first", None)
            .is_err()
    );

    // d1 already has a result in race1
    let duplicate =
        ValidationHelpers::validate_result_submission(&results, "race1", "d1", "4", None)
            .unwrap_err();
    assert!(matches!(duplicate, Error::ValidationError { .. }));
}

#[test]
fn test_date_validation() {
    assert!(ValidationHelpers::is_valid_date("2024-05-01"));

    assert!(!ValidationHelpers::is_valid_date("01.05.2024"));
    assert!(!ValidationHelpers::is_valid_date("2024-13-01"));
    assert!(!ValidationHelpers::is_valid_date("soon"));
}

// Optional form fields: blank and whitespace only input becomes None.
#[test]
fn test_non_empty() {
    assert_eq!(ValidationHelpers::non_empty(""), None);
    assert_eq!(ValidationHelpers::non_empty("   "), None);
    assert_eq!(
        ValidationHelpers::non_empty(" Monaco "),
        Some("Monaco".to_string())
    );
}
