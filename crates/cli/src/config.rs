//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use woocsv_export::EXPORT_FILE_NAME;
use woocsv_observability::LogFormat;

/// Assemble storefront product sheets from form submissions.
///
/// Forms are JSON files holding one submission or an array of them. They are
/// added in the order given, after the rows of `--import` if present.
#[derive(Debug, Parser)]
#[command(name = "woocsv", version, about, long_about = None)]
pub struct Config {
    /// Form submission file (repeatable).
    #[arg(short, long = "form", value_name = "PATH")]
    pub forms: Vec<PathBuf>,

    /// Existing product sheet to merge before the forms.
    #[arg(short, long, value_name = "PATH")]
    pub import: Option<PathBuf>,

    /// Image path pattern for forms that do not set their own.
    #[arg(long, env = "WOOCSV_IMAGE_PATTERN")]
    pub image_pattern: Option<String>,

    /// SKU written to `Genitore` on variation rows. Defaults to the SKU of the
    /// last form.
    #[arg(long, env = "WOOCSV_PARENT_SKU")]
    pub parent_sku: Option<String>,

    /// Where to write the sheet.
    #[arg(short, long, env = "WOOCSV_OUTPUT", default_value = EXPORT_FILE_NAME)]
    pub output: PathBuf,

    /// Log output format (`pretty` or `json`).
    #[arg(long, env = "WOOCSV_LOG_FORMAT", default_value = "pretty", value_parser = parse_log_format)]
    pub log_format: LogFormat,
}

impl Config {
    /// SKU for `Genitore`: the explicit setting if any, else the last form's SKU.
    pub fn resolve_parent_sku(&self, last_form_sku: Option<String>) -> String {
        self.parent_sku
            .clone()
            .or(last_form_sku)
            .unwrap_or_default()
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    LogFormat::parse(value).ok_or_else(|| format!("unknown log format `{value}`"))
}
