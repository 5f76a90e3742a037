//! AWS Lambda handler for EMI calculations
//!
//! Accepts loan inputs as JSON and returns the monthly installment, totals,
//! principal/interest composition and (optionally) the full schedule.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use emi_engine::{loan::parse_number, CalculatorConfig, LoanParameters, LoanReport};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::Deserialize;
use serde_json::{json, Value};

/// Input for one calculation; numbers may also arrive as strings
#[derive(Debug, Deserialize)]
pub struct EmiRequest {
    /// Loan amount (missing or non-numeric counts as 0)
    #[serde(default)]
    pub principal: Option<Value>,

    /// Nominal annual rate in percent
    #[serde(default)]
    pub rate: Option<Value>,

    /// Tenure in months
    #[serde(default)]
    pub months: Option<Value>,

    /// Include the monthly rows in the response (default: true)
    #[serde(default = "default_true")]
    pub include_schedule: bool,

    /// Include the year-by-year grouping
    #[serde(default)]
    pub by_year: bool,
}

fn default_true() -> bool {
    true
}

/// Lenient numeric read of a JSON value
fn as_number(value: &Option<Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_number(s),
        _ => None,
    }
}

impl EmiRequest {
    fn loan(&self) -> LoanParameters {
        LoanParameters::from_optional(
            as_number(&self.principal),
            as_number(&self.rate),
            as_number(&self.months),
        )
    }
}

fn cors_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "POST, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type",
    })
}

fn response(status: u16, body: Value) -> Value {
    json!({
        "statusCode": status,
        "headers": cors_headers(),
        "body": body.to_string(),
    })
}

fn error_body(message: &str) -> Value {
    json!({ "error": message })
}

/// Route one HTTP request to a status code and JSON body
fn handle(method: &str, body: Option<&str>, config: &CalculatorConfig) -> (u16, Value) {
    if method.eq_ignore_ascii_case("OPTIONS") {
        return (200, Value::Null);
    }

    let body = body.filter(|b| !b.trim().is_empty()).unwrap_or("{}");
    let request: EmiRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            warn!("Rejected request body: {}", e);
            return (400, error_body(&format!("Invalid JSON: {}", e)));
        }
    };

    let params = request.loan();
    if let Err(e) = config.check_term(&params) {
        return (400, error_body(&e.to_string()));
    }

    let mut report = LoanReport::calculate(&params);
    if request.by_year {
        report = report.with_years();
    }
    if !request.include_schedule {
        report = report.without_schedule();
    }

    match serde_json::to_value(&report) {
        Ok(value) => (200, value),
        Err(e) => (500, error_body(&format!("Failed to serialize report: {}", e))),
    }
}

/// Lambda handler function
async fn handler(
    event: LambdaEvent<LambdaFunctionUrlRequest>,
    config: &CalculatorConfig,
) -> Result<Value, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    let method = request
        .request_context
        .http
        .method
        .clone()
        .unwrap_or_else(|| "POST".to_string());

    if request.is_base64_encoded {
        return Ok(response(400, error_body("base64-encoded bodies are not supported")));
    }

    let (status, mut body) = handle(&method, request.body.as_deref(), config);
    if let Value::Object(map) = &mut body {
        map.insert(
            "execution_time_ms".to_string(),
            json!(start.elapsed().as_millis() as u64),
        );
    }

    info!("{} request answered with {} in {:?}", method, status, start.elapsed());

    if body.is_null() {
        return Ok(json!({ "statusCode": status, "headers": cors_headers() }));
    }
    Ok(response(status, body))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = CalculatorConfig::from_env()?;
    let shared = &config;
    run(service_fn(move |event| async move { handler(event, shared).await })).await
}
