use chrono::DateTime;
use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};

/// # timestamp formatting helper
///
/// ### usage
/// ```handlebars
/// {{formatDate article.created_at}}
/// ```
///
/// ### output
/// ```text
/// 01.05.2024 10:00
/// ```
#[derive(Clone, Copy)]
pub struct FormatDateHelper;

impl HelperDef for FormatDateHelper {
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

        let raw: String = serde_json::from_value(date_param.unwrap().value().clone()).unwrap();
        out.write(&format_timestamp(&raw))?;

        Ok(())
    }
}

/// Render an RFC 3339 timestamp as `DD.MM.YYYY HH:mm`. Anything that does
/// not parse is returned unchanged so a bad row never breaks a page.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
