use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let context = self.0.current_context();
        match context {
            KernelError::NotFound => (StatusCode::NOT_FOUND, error_body(context)).into_response(),
            KernelError::Conflict => (StatusCode::CONFLICT, error_body(context)).into_response(),
            KernelError::Timeout => {
                (StatusCode::REQUEST_TIMEOUT, error_body(context)).into_response()
            }
            // internal details stay in the log
            KernelError::Internal => {
                tracing::error!("{:?}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

fn error_body(context: &KernelError) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "error": context.to_string() }))
}
