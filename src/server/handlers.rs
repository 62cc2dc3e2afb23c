//! HTTP handlers for the spam detection API.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::SmishError;
use crate::server::AppState;

/// JSON error body, `{ "error": true, "message": ... }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
}

impl ErrorBody {
    fn new<S: Into<String>>(message: S) -> Self {
        ErrorBody {
            error: true,
            message: message.into(),
        }
    }
}

/// Prediction request body. Both `text` and `message` are accepted for
/// compatibility with older clients.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PredictRequest {
    fn content(&self) -> Option<&str> {
        self.text.as_deref().or(self.message.as_deref())
    }
}

/// `GET /health` response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    message: &'static str,
    models_loaded: bool,
}

#[derive(Debug, Serialize)]
struct EndpointMap {
    predict: &'static str,
    health: &'static str,
    info: &'static str,
}

const ENDPOINTS: EndpointMap = EndpointMap {
    predict: "/predict or /api/predict (POST)",
    health: "/health or /api/health (GET)",
    info: "/api/info (GET)",
};

#[derive(Debug, Serialize)]
struct ModelInfo {
    algorithm: &'static str,
    vectorizer: &'static str,
    features: usize,
}

/// `GET /api/info` response body.
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    service: &'static str,
    version: &'static str,
    endpoints: EndpointMap,
    model_info: ModelInfo,
}

#[derive(Debug, Serialize)]
struct NotFoundBody {
    error: bool,
    message: &'static str,
    available_endpoints: EndpointMap,
}

fn bad_request<S: Into<String>>(message: S) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
}

/// `POST /predict` and `POST /api/predict`.
///
/// Empty or missing text is rejected here, before the classifier is
/// invoked; inference failures are isolated to this request.
pub async fn predict_handler(
    State(state): State<Arc<AppState>>,
    body: Option<Json<PredictRequest>>,
) -> Response {
    let Some(Json(request)) = body else {
        return bad_request("No text or message provided");
    };
    let Some(content) = request.content() else {
        return bad_request("No text or message provided");
    };

    let text = content.trim();
    if text.is_empty() {
        return bad_request("Empty text provided");
    }

    match state.classifier.predict(text) {
        Ok(prediction) => Json(prediction).into_response(),
        Err(error) => {
            log::error!("prediction failed: {error}");
            let status = match &error {
                SmishError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(ErrorBody::new(error.to_string()))).into_response()
        }
    }
}

/// `GET /health` and `GET /api/health`.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "SMS Spam Detection API is running",
        models_loaded: state.classifier.is_loaded(),
    })
}

/// `GET /api/info`.
pub async fn info_handler(State(state): State<Arc<AppState>>) -> Json<ApiInfo> {
    let features = state
        .classifier
        .get()
        .map(|classifier| classifier.feature_count())
        .unwrap_or(0);

    Json(ApiInfo {
        service: "SMS Spam Detection",
        version: crate::VERSION,
        endpoints: ENDPOINTS,
        model_info: ModelInfo {
            algorithm: "Multinomial Naive Bayes",
            vectorizer: "TF-IDF",
            features,
        },
    })
}

/// Fallback for unknown routes.
pub async fn not_found_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error: true,
            message: "Endpoint not found",
            available_endpoints: ENDPOINTS,
        }),
    )
        .into_response()
}
