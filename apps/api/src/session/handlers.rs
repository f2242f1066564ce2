//! Axum route handlers for card submission and result lookup.

use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use num_bigint::{BigInt, BigUint, Sign};
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::mapping::{derive_card, AttributeInput, EngineOutput};
use crate::session::view::ResultView;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Form-encoded submission. Every field may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    pub salary_expect: Option<String>,
    pub age: Option<String>,
    pub nationality: Option<String>,
    pub mbti_type: Option<String>,
    pub bachelor_uni: Option<String>,
    pub master_uni: Option<String>,
    pub major: Option<String>,
}

/// Coerces the raw form into engine input. Absent numbers read as 0;
/// present-but-malformed numbers are a validation error.
pub fn parse_attributes(form: SubmitForm) -> Result<AttributeInput, AppError> {
    Ok(AttributeInput {
        salary_expectation: parse_int_field("salary_expect", form.salary_expect.as_deref())?,
        age: parse_int_field("age", form.age.as_deref())?,
        nationality: form.nationality.unwrap_or_default(),
        personality_type: form.mbti_type.unwrap_or_default(),
        undergraduate_institution: form.bachelor_uni.unwrap_or_default(),
        graduate_institution: form.master_uni.unwrap_or_default(),
        field_of_study: form.major.unwrap_or_default(),
    })
}

/// Integer of any width. Accepts surrounding whitespace, one leading sign,
/// leading zeros and single `_` separators between digits (`1_000`).
fn parse_int_field(name: &str, raw: Option<&str>) -> Result<BigInt, AppError> {
    let Some(value) = raw else {
        return Ok(BigInt::default());
    };
    parse_integer(value.trim())
        .ok_or_else(|| AppError::Validation(format!("{name} must be an integer, got {value:?}")))
}

fn parse_integer(text: &str) -> Option<BigInt> {
    let (sign, digits) = match text.as_bytes().first()? {
        b'-' => (Sign::Minus, &text[1..]),
        b'+' => (Sign::Plus, &text[1..]),
        _ => (Sign::Plus, text),
    };

    let well_formed = !digits.is_empty()
        && digits.split('_').all(|group| {
            !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit())
        });
    if !well_formed {
        return None;
    }

    let magnitude: BigUint = digits.replace('_', "").parse().ok()?;
    Some(BigInt::from_biguint(sign, magnitude))
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

/// Runs the engine once and stores the result under a fresh token.
pub async fn submit(state: &AppState, input: AttributeInput) -> Result<Uuid, AppError> {
    debug!(
        has_undergraduate = !input.undergraduate_institution.trim().is_empty(),
        has_graduate = input.has_graduate_institution(),
        "Deriving card"
    );
    let output = {
        let mut rng = state
            .rng
            .lock()
            .map_err(|_| AppError::Internal(anyhow!("random source lock poisoned")))?;
        derive_card(&input, &mut *rng)
    };
    let layout = output.display.layout_id.clone();

    let token = state.sessions.insert(output).await;
    info!("Stored card {token} (layout {layout})");
    Ok(token)
}

/// Looks up a stored result. Malformed and unknown tokens are both not-found.
pub async fn fetch(state: &AppState, token: &str) -> Result<EngineOutput, AppError> {
    let not_found = || AppError::NotFound(format!("Result {token} not found"));

    let id = Uuid::parse_str(token).map_err(|_| {
        debug!("Rejected malformed result token {token:?}");
        not_found()
    })?;

    match state.sessions.get(&id).await {
        Some(output) => Ok(output),
        None => {
            debug!("No stored result for {id}");
            Err(not_found())
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /submit
///
/// Accepts the attribute form, derives the card and redirects to its result.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Result<Redirect, AppError> {
    let input = parse_attributes(form)?;
    let token = submit(&state, input).await?;
    Ok(Redirect::to(&format!("/result/{token}")))
}

/// GET /result/:token
///
/// Returns the stored card with asset ids unpacked into named slots.
pub async fn handle_result(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ResultView>, AppError> {
    let output = fetch(&state, &token).await?;
    Ok(Json(ResultView::from_output(&output)))
}
