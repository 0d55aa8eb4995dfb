//! Single calculation command.

use anyhow::Result;
use rating_core::RatingRequest;
use serde_json::json;
use tracing::debug;

/// Evaluate one request and print the result
pub fn run(request: &RatingRequest, json: bool) -> Result<()> {
    debug!("Evaluating {} request: {:?}", request.game(), request);
    let outcome = request.evaluate()?;

    if json {
        let body = json!({ "request": request, "result": outcome });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", outcome);
    }

    Ok(())
}
