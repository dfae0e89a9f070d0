use std::collections::HashMap;

use crate::modules::models::driver::Driver;
use crate::modules::models::race_result::RaceResult;
use crate::modules::models::team::Team;
use crate::{DriverStanding, TeamStanding};

pub struct StandingsHelpers {}

impl StandingsHelpers {
    /// Points awarded for a finishing position. Positions outside the top
    /// ten score nothing.
    pub fn points_for_position(position: i32) -> i32 {
        match position {
            1 => 25,
            2 => 18,
            3 => 15,
            4 => 12,
            5 => 10,
            6 => 8,
            7 => 6,
            8 => 4,
            9 => 2,
            10 => 1,
            _ => 0,
        }
    }

    /// Rank drivers by total points across all results.
    ///
    /// Totals accumulate per driver id in first encounter order, so the
    /// descending sort (stable) keeps that order on ties. Drivers without
    /// any result do not appear. A result pointing at a driver that is not
    /// in `drivers` still counts, under a synthesized placeholder.
    pub fn driver_standings(
        results: &[RaceResult],
        drivers: &[Driver],
        teams: &[Team],
    ) -> Vec<DriverStanding> {
        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, i32> = HashMap::new();

        for result in results {
            if !totals.contains_key(&result.driver_id) {
                order.push(result.driver_id.clone());
            }
            *totals.entry(result.driver_id.clone()).or_insert(0) += result.points;
        }

        let mut standings: Vec<DriverStanding> = order
            .iter()
            .map(|driver_id| {
                let driver = Driver::find_by_id(drivers, driver_id)
                    .cloned()
                    .unwrap_or_else(|| Driver::unknown(driver_id));
                let team = driver
                    .team_id
                    .as_deref()
                    .and_then(|team_id| Team::find_by_id(teams, team_id))
                    .cloned();

                DriverStanding {
                    driver,
                    team,
                    points: totals[driver_id],
                }
            })
            .collect();

        standings.sort_by(|a, b| b.points.cmp(&a.points));
        standings
    }

    /// Rank teams by the summed points of all their drivers.
    ///
    /// Drivers without a team contribute to no team. Teams without any
    /// driver do not appear. A team id that is not in `teams` shows up as
    /// a synthesized placeholder.
    pub fn team_standings(
        results: &[RaceResult],
        drivers: &[Driver],
        teams: &[Team],
    ) -> Vec<TeamStanding> {
        let mut order: Vec<String> = Vec::new();
        let mut members: HashMap<String, Vec<Driver>> = HashMap::new();

        for driver in drivers {
            if let Some(team_id) = &driver.team_id {
                if !members.contains_key(team_id) {
                    order.push(team_id.clone());
                }
                members
                    .entry(team_id.clone())
                    .or_default()
                    .push(driver.clone());
            }
        }

        let mut standings: Vec<TeamStanding> = order
            .iter()
            .map(|team_id| {
                let team_drivers = members[team_id].clone();
                let points = team_drivers
                    .iter()
                    .map(|driver| {
                        results
                            .iter()
                            .filter(|result| result.driver_id == driver.driver_id)
                            .map(|result| result.points)
                            .sum::<i32>()
                    })
                    .sum();

                let team = Team::find_by_id(teams, team_id)
                    .cloned()
                    .unwrap_or_else(|| Team::unknown(team_id));

                TeamStanding {
                    team,
                    drivers: team_drivers,
                    points,
                }
            })
            .collect();

        standings.sort_by(|a, b| b.points.cmp(&a.points));
        standings
    }
}
