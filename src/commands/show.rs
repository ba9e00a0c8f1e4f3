//! Show command (`portal show company|project <ID>`)

use serde_json::json;

use super::{CommandOutput, configured_source, fetch_error};
use crate::display::{format_company_detail, format_project_detail};
use crate::error::{PortalError, Result};
use crate::remote::RecordSource;
use crate::types::RecordKind;

/// Print the full detail of one record
pub async fn cmd_show(kind: RecordKind, id: &str, output_json: bool) -> Result<()> {
    let source = configured_source()?;
    let not_found = || PortalError::RecordNotFound {
        kind: kind.noun(),
        id: id.to_string(),
    };

    let output = match kind {
        RecordKind::Company => {
            let companies = source
                .fetch_companies()
                .await
                .map_err(|f| fetch_error(kind, f))?;
            let company = companies
                .into_iter()
                .find(|c| c.id.as_deref() == Some(id))
                .ok_or_else(not_found)?;
            CommandOutput::new(json!(company)).with_text(format_company_detail(&company))
        }
        RecordKind::Project => {
            let projects = source
                .fetch_projects()
                .await
                .map_err(|f| fetch_error(kind, f))?;
            let project = projects
                .into_iter()
                .find(|p| p.id.as_deref() == Some(id))
                .ok_or_else(not_found)?;
            CommandOutput::new(json!(project)).with_text(format_project_detail(&project))
        }
    };

    output.print(output_json)
}
