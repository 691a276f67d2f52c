use atelier_api::router::ApiDoc;
use utoipa::OpenApi;

/// Writes the generated OpenAPI specification to the given path, or to
/// `openapi.json` in the working directory when no path is supplied.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "openapi.json".to_string());
    let spec_json = ApiDoc::openapi().to_pretty_json()?;
    std::fs::write(&path, spec_json)?;
    Ok(())
}
