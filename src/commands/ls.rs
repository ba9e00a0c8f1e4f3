//! List command (`portal ls companies|projects`)

use serde_json::json;

use super::{CommandOutput, configured_source, fetch_error};
use crate::display::{format_company_table, format_project_table};
use crate::error::Result;
use crate::query::filter_records;
use crate::remote::RecordSource;
use crate::types::RecordKind;

/// Fetch one record list, filter it and print it as a table or JSON
pub async fn cmd_ls(kind: RecordKind, search: Option<&str>, output_json: bool) -> Result<()> {
    let source = configured_source()?;
    let query = search.unwrap_or("");

    let (json, text, count) = match kind {
        RecordKind::Company => {
            let companies = source
                .fetch_companies()
                .await
                .map_err(|f| fetch_error(kind, f))?;
            let matching = filter_records(&companies, query);
            (
                json!(matching),
                format_company_table(&matching),
                matching.len(),
            )
        }
        RecordKind::Project => {
            let projects = source
                .fetch_projects()
                .await
                .map_err(|f| fetch_error(kind, f))?;
            let matching = filter_records(&projects, query);
            (
                json!(matching),
                format_project_table(&matching),
                matching.len(),
            )
        }
    };

    let text = if count == 0 {
        format!("No {} found", kind.plural_title().to_lowercase())
    } else {
        text
    };

    CommandOutput::new(json).with_text(text).print(output_json)
}
