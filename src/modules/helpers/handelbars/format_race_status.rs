use chrono::{Local, NaiveDate};
use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};

/// # race status formatting helper
///
/// ### usage
/// ```handlebars
/// {{formatRaceStatus race.race_date}}
/// ```
///
/// ### output
/// ```text
/// Finished
/// Upcoming
/// ```
#[derive(Clone, Copy)]
pub struct FormatRaceStatus;

impl HelperDef for FormatRaceStatus {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        let date_param = h.param(0);

        if date_param.is_none() {
            return Ok(());
        }

        let race_date: String = serde_json::from_value(date_param.unwrap().value().clone()).unwrap();
        out.write(race_status(&race_date))?;

        Ok(())
    }
}

pub fn race_status(race_date: &str) -> &'static str {
    race_status_on(race_date, Local::now().date_naive())
}

/// A race is finished once its date lies before today. An unparseable
/// date counts as upcoming.
pub fn race_status_on(race_date: &str, today: NaiveDate) -> &'static str {
    match NaiveDate::parse_from_str(race_date, "%Y-%m-%d") {
        Ok(date) if date < today => "Finished",
        _ => "Upcoming",
    }
}
