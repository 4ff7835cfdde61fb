//! AWS Lambda handler serving the projection engine over HTTP
//!
//! Routes mirror the original dashboard API:
//! - `GET  /api/v1/models`                  -> model catalog
//! - `GET  /api/v1/models/{id}/variables`   -> default assumption table
//! - `POST /api/v1/models/{id}/calculate`   -> run a projection
//!
//! Supports Lambda Function URLs for direct HTTP access. The handler stores
//! nothing; persistence of results belongs to the caller.

use std::collections::HashMap;

use chrono::Utc;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

use financial_modeling::{catalog, compute, Archetype, AssumptionSet, ModelError};

/// Calculation request body
#[derive(Debug, Deserialize)]
struct CalculationRequest {
    /// Sparse assumption overrides; missing keys fall back to model defaults
    #[serde(default)]
    variables: HashMap<String, f64>,

    /// Number of years to project (default: 5)
    #[serde(default = "default_projection_years")]
    projection_years: i32,

    /// Calendar year of the first snapshot (default: 2024)
    #[serde(default = "default_base_year")]
    base_year: i32,
}

fn default_projection_years() -> i32 {
    5
}

fn default_base_year() -> i32 {
    2024
}

#[derive(Debug, Serialize)]
struct VariablesResponse<'a> {
    model_id: &'a str,
    variables: &'a HashMap<String, f64>,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response<T: Serialize>(body: &T) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// HTTP status for an engine error
///
/// Unknown model ids are a routing miss (404); bad horizons and undefined
/// aggregations are bad input (400).
fn status_for(error: &ModelError) -> u16 {
    match error {
        ModelError::UnknownArchetype(_) => 404,
        ModelError::InvalidHorizon(_) | ModelError::DivisionByZero(_) => 400,
    }
}

fn handle_calculate(model_id: &str, body_str: &str) -> Response<Body> {
    let request: CalculationRequest = match serde_json::from_str(body_str) {
        Ok(r) => r,
        Err(e) => {
            return error_response(400, &format!("Invalid JSON: {}", e));
        }
    };

    log::info!(
        "calculate model={} years={} base_year={} overrides={}",
        model_id,
        request.projection_years,
        request.base_year,
        request.variables.len()
    );

    match compute(
        model_id,
        &request.variables,
        request.projection_years,
        request.base_year,
    ) {
        Ok(result) => json_response(&result),
        Err(e) => error_response(status_for(&e), &e.to_string()),
    }
}

fn handle_variables(model_id: &str) -> Response<Body> {
    match Archetype::from_id(model_id) {
        Ok(archetype) => {
            let defaults = AssumptionSet::defaults(archetype);
            json_response(&VariablesResponse {
                model_id,
                variables: defaults.values(),
            })
        }
        Err(e) => error_response(status_for(&e), &e.to_string()),
    }
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    let method = event.method().as_str().to_string();
    let path = event.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let response = match (method.as_str(), segments.as_slice()) {
        ("GET", []) => json_response(&serde_json::json!({
            "message": "Financial Modeling API",
            "version": "0.1.0",
        })),
        ("GET", ["health"]) => json_response(&serde_json::json!({
            "status": "healthy",
            "timestamp": Utc::now(),
        })),
        ("GET", ["api", "v1", "models"]) => {
            json_response(&serde_json::json!({ "models": catalog() }))
        }
        ("GET", ["api", "v1", "models", model_id, "variables"]) => handle_variables(model_id),
        ("POST", ["api", "v1", "models", model_id, "calculate"]) => {
            handle_calculate(model_id, &body_str)
        }
        _ => error_response(404, &format!("Route not found: {} {}", method, path)),
    };

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
