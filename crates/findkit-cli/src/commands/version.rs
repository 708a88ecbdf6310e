use findkit_core::{FindingRequest, FindingService};

use crate::error::CliError;

use super::Output;

pub async fn run(service: &FindingService, dry_run: bool) -> Result<Output, CliError> {
    let mut request = service.version_request();
    if dry_run {
        return Ok(Output::Body(request.body()?));
    }

    let response = request.execute().await?;
    Ok(Output::Document(serde_json::to_value(response)?))
}
