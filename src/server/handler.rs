//! Request handlers.

use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
};
use log::debug;
use serde::{Deserialize, Serialize};

use super::AppState;
use super::html;
use crate::classifier::{Class, ScoreResult};

/// Fields of the scoring form. Missing fields are empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoreForm {
    pub name: String,
    pub message: String,
}

impl ScoreForm {
    /// Builds the form from decoded key/value pairs. The first value of a
    /// repeated field wins; unknown fields are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut name = None;
        let mut message = None;
        for (key, value) in pairs {
            match key.as_str() {
                "name" if name.is_none() => name = Some(value),
                "message" if message.is_none() => message = Some(value),
                _ => {}
            }
        }

        ScoreForm {
            name: name.unwrap_or_default(),
            message: message.unwrap_or_default(),
        }
    }
}

/// Body of `POST /api/score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub message: String,
}

/// Response of `POST /api/score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub classes: [Class; 2],
    pub scores: [f64; 2],
    pub matched_tokens: usize,
    pub strict: bool,
    /// `scores[1] - scores[0]`, as shown on the HTML report.
    pub prob_is_bad: f64,
    /// Normalised probability of the Bad class.
    pub bad_probability: f64,
}

impl From<ScoreResult> for ScoreResponse {
    fn from(result: ScoreResult) -> Self {
        ScoreResponse {
            prob_is_bad: result.bad_margin(),
            bad_probability: result.probability(Class::Bad),
            classes: result.classes,
            scores: result.scores,
            matched_tokens: result.matched_tokens,
            strict: result.strict,
        }
    }
}

/// Response of `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub learned_count: u64,
    pub vocabulary_size: usize,
    pub good_tokens: u64,
    pub bad_tokens: u64,
}

/// `GET /`
pub async fn home() -> Html<&'static str> {
    Html(html::HOME_PAGE)
}

/// `POST /`
///
/// Accepts url-encoded and multipart bodies. Any other body, including one
/// without a `Content-Type`, scores as if both fields were empty. A body that
/// cannot be decoded is reported in plain text with status 200.
pub async fn submit(State(state): State<AppState>, request: Request) -> Response {
    let form = match read_form(request).await {
        Ok(form) => form,
        Err(err) => return format!("ParseForm() err: {err}").into_response(),
    };

    let result = state.score(&form.message);
    Html(html::render_report(&form.name, &form.message, result.bad_margin())).into_response()
}

async fn read_form(request: Request) -> Result<ScoreForm, String> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &())
            .await
            .map_err(|rejection| rejection.body_text())?;
        Ok(ScoreForm::from_pairs(pairs))
    } else if content_type.starts_with("multipart/form-data") {
        Ok(read_multipart(request).await)
    } else {
        debug!("unsupported form content type {content_type:?}");
        Ok(ScoreForm::default())
    }
}

/// Reads multipart fields, keeping whatever was decoded before a malformed part.
async fn read_multipart(request: Request) -> ScoreForm {
    let mut pairs = Vec::new();

    let mut multipart = match Multipart::from_request(request, &()).await {
        Ok(multipart) => multipart,
        Err(rejection) => {
            debug!("multipart form rejected: {}", rejection.body_text());
            return ScoreForm::default();
        }
    };

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let Some(name) = field.name().map(str::to_owned) else {
                    continue;
                };
                match field.text().await {
                    Ok(value) => pairs.push((name, value)),
                    Err(err) => {
                        debug!("multipart field {name:?} unreadable: {err}");
                        break;
                    }
                }
            }
            Ok(None) => break,
            Err(err) => {
                debug!("multipart form malformed: {err}");
                break;
            }
        }
    }

    ScoreForm::from_pairs(pairs)
}

/// `POST /api/score`
pub async fn api_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    Json(state.score(&request.message).into())
}

/// `GET /api/stats`
pub async fn api_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let classifier = state.classifier();
    let table = classifier.table();

    Json(StatsResponse {
        learned_count: classifier.learned_count(),
        vocabulary_size: table.vocabulary_size(),
        good_tokens: table.total_for(Class::Good),
        bad_tokens: table.total_for(Class::Bad),
    })
}

/// Anything not routed above.
pub async fn not_found() -> (StatusCode, &'static str) {
    debug!("unrouted request");
    (StatusCode::NOT_FOUND, "404 not found.\n")
}
