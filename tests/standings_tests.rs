use f1_paddock::modules::helpers::standings::StandingsHelpers;
use f1_paddock::modules::models::driver::Driver;
use f1_paddock::modules::models::race_result::RaceResult;
use f1_paddock::modules::models::team::Team;

fn driver(id: &str, first: &str, last: &str, team_id: Option<&str>) -> Driver {
    Driver {
        driver_id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        nationality: None,
        date_of_birth: None,
        team_id: team_id.map(|t| t.to_string()),
    }
}

fn team(id: &str, name: &str) -> Team {
    Team {
        team_id: id.to_string(),
        team_name: name.to_string(),
        nationality: None,
        founded_year: None,
    }
}

fn result(id: &str, race_id: &str, driver_id: &str, position: i32) -> RaceResult {
    RaceResult {
        result_id: id.to_string(),
        race_id: race_id.to_string(),
        driver_id: driver_id.to_string(),
        position,
        points: StandingsHelpers::points_for_position(position),
    }
}

// The public points table: 25,18,15,12,10,8,6,4,2,1 for positions 1..=10,
// nothing outside it.
#[test]
fn test_points_table() {
    let expected = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];
    for (index, points) in expected.iter().enumerate() {
        assert_eq!(
            StandingsHelpers::points_for_position(index as i32 + 1),
            *points
        );
    }

    assert_eq!(StandingsHelpers::points_for_position(0), 0);
    assert_eq!(StandingsHelpers::points_for_position(11), 0);
    assert_eq!(StandingsHelpers::points_for_position(20), 0);
    assert_eq!(StandingsHelpers::points_for_position(-3), 0);
}

// A driver's total is the sum of points over all of their results.
#[test]
fn test_driver_totals_sum_across_races() {
    let drivers = vec![
        driver("d1", "Max", "Verstappen", None),
        driver("d2", "Lando", "Norris", None),
    ];
    let results = vec![
        result("r1", "race1", "d1", 1),
        result("r2", "race1", "d2", 2),
        result("r3", "race2", "d1", 3),
        result("r4", "race2", "d2", 1),
    ];

    let standings = StandingsHelpers::driver_standings(&results, &drivers, &[]);

    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].driver.driver_id, "d2");
    assert_eq!(standings[0].points, 18 + 25);
    assert_eq!(standings[1].driver.driver_id, "d1");
    assert_eq!(standings[1].points, 25 + 15);
}

// Ties keep first encounter order: d1 appears in the results before d2,
// both end up on 25 points.
#[test]
fn test_driver_ties_keep_encounter_order() {
    let drivers = vec![
        driver("d1", "Charles", "Leclerc", None),
        driver("d2", "Oscar", "Piastri", None),
    ];
    let results = vec![
        result("r1", "race1", "d1", 1),
        result("r2", "race2", "d2", 1),
    ];

    let standings = StandingsHelpers::driver_standings(&results, &drivers, &[]);

    assert_eq!(standings[0].driver.driver_id, "d1");
    assert_eq!(standings[1].driver.driver_id, "d2");
}

// A result referencing a driver that is not in the driver list still
// counts, under a synthesized placeholder.
#[test]
fn test_unknown_driver_gets_placeholder() {
    let results = vec![result("r1", "race1", "ghost", 1)];

    let standings = StandingsHelpers::driver_standings(&results, &[], &[]);

    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].driver.first_name, "Unknown");
    assert_eq!(standings[0].driver.last_name, "Driver");
    assert_eq!(standings[0].points, 25);
}

// Drivers without any result do not show up at all.
#[test]
fn test_drivers_without_results_are_omitted() {
    let drivers = vec![
        driver("d1", "Max", "Verstappen", None),
        driver("d2", "Lando", "Norris", None),
    ];
    let results = vec![result("r1", "race1", "d1", 5)];

    let standings = StandingsHelpers::driver_standings(&results, &drivers, &[]);

    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].driver.driver_id, "d1");
}

// Each standing entry resolves the driver's team when there is one.
#[test]
fn test_driver_standing_resolves_team() {
    let teams = vec![team("t1", "Red Bull")];
    let drivers = vec![
        driver("d1", "Max", "Verstappen", Some("t1")),
        driver("d2", "Lando", "Norris", None),
    ];
    let results = vec![
        result("r1", "race1", "d1", 1),
        result("r2", "race1", "d2", 2),
    ];

    let standings = StandingsHelpers::driver_standings(&results, &drivers, &teams);

    assert_eq!(
        standings[0].team.as_ref().map(|t| t.team_name.as_str()),
        Some("Red Bull")
    );
    assert!(standings[1].team.is_none());
}

// A team's total is the sum over all its drivers' totals. Drivers without
// a team contribute to no team.
#[test]
fn test_team_totals() {
    let teams = vec![team("t1", "McLaren"), team("t2", "Ferrari")];
    let drivers = vec![
        driver("d1", "Lando", "Norris", Some("t1")),
        driver("d2", "Oscar", "Piastri", Some("t1")),
        driver("d3", "Charles", "Leclerc", Some("t2")),
        driver("d4", "Nyck", "Privateer", None),
    ];
    let results = vec![
        result("r1", "race1", "d1", 1),
        result("r2", "race1", "d2", 3),
        result("r3", "race1", "d3", 2),
        result("r4", "race1", "d4", 4),
        result("r5", "race2", "d1", 2),
    ];

    let standings = StandingsHelpers::team_standings(&results, &drivers, &teams);

    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].team.team_id, "t1");
    assert_eq!(standings[0].points, 25 + 15 + 18);
    assert_eq!(standings[1].team.team_id, "t2");
    assert_eq!(standings[1].points, 18);
}

// Teams without drivers never appear; a team id missing from the team
// list appears as a placeholder.
#[test]
fn test_team_edge_cases() {
    let teams = vec![team("t1", "McLaren"), team("empty", "Backmarkers")];
    let drivers = vec![
        driver("d1", "Lando", "Norris", Some("t1")),
        driver("d2", "Lost", "Soul", Some("gone")),
    ];
    let results = vec![
        result("r1", "race1", "d1", 1),
        result("r2", "race1", "d2", 2),
    ];

    let standings = StandingsHelpers::team_standings(&results, &drivers, &teams);

    assert_eq!(standings.len(), 2);
    assert!(standings.iter().all(|s| s.team.team_id != "empty"));

    let ghost = standings
        .iter()
        .find(|s| s.team.team_id == "gone")
        .expect("placeholder team missing");
    assert_eq!(ghost.team.team_name, "Unknown Team");
    assert_eq!(ghost.points, 18);
}

// A team whose drivers have no results yet still shows up, on zero points.
#[test]
fn test_team_with_resultless_drivers_scores_zero() {
    let teams = vec![team("t1", "Williams")];
    let drivers = vec![driver("d1", "Alex", "Albon", Some("t1"))];

    let standings = StandingsHelpers::team_standings(&[], &drivers, &teams);

    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].points, 0);
    assert_eq!(standings[0].drivers.len(), 1);
}
