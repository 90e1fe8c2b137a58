// src/main.rs

mod input;
mod setup;

use std::process::ExitCode;

use forms::{FormKind, Redirect};
use serde_json::json;
use services::Submission;
use setup::{set_up_tracing, AppConfig};
use transport::HttpTransport;

const USAGE: &str =
    "usage: fitcheck <create-account|login|daily-check-in|initial-survey> [values.json]";

/// Exit code for usage, input and configuration errors.
const USAGE_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(USAGE_ERROR);
        }
    };
    set_up_tracing(config.log_format);

    let mut args = std::env::args().skip(1);
    let form: FormKind = match args.next().map(|name| name.parse::<FormKind>()) {
        Some(Ok(form)) => form,
        Some(Err(err)) => {
            eprintln!("{}\n{}", err, USAGE);
            return ExitCode::from(USAGE_ERROR);
        }
        None => {
            eprintln!("{}", USAGE);
            return ExitCode::from(USAGE_ERROR);
        }
    };

    let values = match input::read_values(args.next().as_deref()) {
        Ok(values) => values,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(USAGE_ERROR);
        }
    };

    let transport = match HttpTransport::new(&config.backend_url, config.request_timeout) {
        Ok(transport) => transport,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(USAGE_ERROR);
        }
    };

    tracing::info!(form = %form, backend = %config.backend_url, "submitting form");
    let submission = match form.submit(&transport, values).await {
        Ok(submission) => submission,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(USAGE_ERROR);
        }
    };
    println!("{}", report(&submission));

    ExitCode::from(exit_code(&submission))
}

/// 0 when the form was submitted or skipped, 1 when it was invalid or failed.
fn exit_code(submission: &Option<Submission<Redirect>>) -> u8 {
    match submission {
        Some(submission) if !submission.is_success() => 1,
        _ => 0,
    }
}

fn report(submission: &Option<Submission<Redirect>>) -> String {
    let report = match submission {
        Some(submission) => json!(submission),
        None => json!({ "status": "skipped" }),
    };
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| report.to_string())
}
