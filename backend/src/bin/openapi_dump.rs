//! Print the OpenAPI document as JSON.

use account_service::doc::ApiDoc;
use color_eyre::eyre::Result;
use std::io::Write;
use utoipa::OpenApi;

fn main() -> Result<()> {
    color_eyre::install()?;
    let json = ApiDoc::openapi().to_pretty_json()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
