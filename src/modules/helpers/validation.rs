use chrono::NaiveDate;
use regex::Regex;
use snafu::{ensure, OptionExt};

use crate::errors::{CustomResult, PositionTakenSnafu, ValidationSnafu};
use crate::modules::models::driver::Driver;
use crate::modules::models::race_result::RaceResult;

const EMAIL_PATTERN: &str = "^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$";

pub struct ValidationHelpers {}

impl ValidationHelpers {
    /// Checked locally before any remote auth call is issued.
    pub fn is_valid_email(email: &str) -> bool {
        Regex::new(EMAIL_PATTERN).unwrap().is_match(email)
    }

    pub fn is_valid_position(position: i32) -> bool {
        (1..=20).contains(&position)
    }

    pub fn is_valid_date(date: &str) -> bool {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
    }

    /// Whether `position` is already taken by another result of the same
    /// race. When editing, the row being edited is excluded so keeping its
    /// own position does not count as a duplicate.
    pub fn is_position_taken(
        results: &[RaceResult],
        race_id: &str,
        position: i32,
        exclude_result_id: Option<&str>,
    ) -> bool {
        results.iter().any(|result| {
            result.race_id == race_id
                && result.position == position
                && exclude_result_id != Some(result.result_id.as_str())
        })
    }

    /// Whether the driver already has a result in the race. One result per
    /// driver per race.
    pub fn driver_has_result(results: &[RaceResult], race_id: &str, driver_id: &str) -> bool {
        results
            .iter()
            .any(|result| result.race_id == race_id && result.driver_id == driver_id)
    }

    /// Optional form fields arrive as empty strings, the store expects
    /// nulls instead.
    pub fn non_empty(value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// The full submit time check for a result form. Returns the parsed
    /// position; the error message is what the screen shows. Runs before
    /// any remote write is issued.
    pub fn validate_result_submission(
        results: &[RaceResult],
        race_id: &str,
        driver_id: &str,
        position_raw: &str,
        exclude_result_id: Option<&str>,
    ) -> CustomResult<i32> {
        ensure!(
            !race_id.is_empty() && !driver_id.is_empty() && !position_raw.trim().is_empty(),
            ValidationSnafu {
                message: "Please fill in all required fields",
            }
        );

        let position: i32 = position_raw
            .trim()
            .parse()
            .ok()
            .filter(|position| Self::is_valid_position(*position))
            .context(ValidationSnafu {
                message: "Position must be a number from 1 to 20",
            })?;

        ensure!(
            !Self::is_position_taken(results, race_id, position, exclude_result_id),
            PositionTakenSnafu { position }
        );

        if exclude_result_id.is_none() {
            ensure!(
                !Self::driver_has_result(results, race_id, driver_id),
                ValidationSnafu {
                    message: "This driver already has a result in this race",
                }
            );
        }

        Ok(position)
    }

    /// Drivers still without a result in the race, the only ones offered
    /// when a new result is entered.
    pub fn drivers_without_result<'a>(
        drivers: &'a [Driver],
        results: &[RaceResult],
        race_id: &str,
    ) -> Vec<&'a Driver> {
        drivers
            .iter()
            .filter(|driver| !Self::driver_has_result(results, race_id, &driver.driver_id))
            .collect()
    }
}
