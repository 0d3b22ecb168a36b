//! JSON REST handlers for quotes.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use quotesvc_app::ports::QuoteRepository;
use quotesvc_domain::error::{QuoteError, ValidationError};
use quotesvc_domain::id::QuoteId;
use quotesvc_domain::quote::Quote;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a quote.
#[derive(Deserialize)]
pub struct CreateQuoteRequest {
    pub author: String,
    pub quote: String,
}

/// Query parameters accepted by the list endpoint.
#[derive(Deserialize)]
pub struct ListQuotesParams {
    pub author: Option<String>,
}

/// Wire representation of a stored quote.
#[derive(Serialize)]
pub struct QuoteDto {
    pub id: String,
    pub author: String,
    pub quote: String,
}

impl From<&Quote> for QuoteDto {
    fn from(quote: &Quote) -> Self {
        Self {
            id: quote.id.to_string(),
            author: quote.author.clone(),
            quote: quote.quote.clone(),
        }
    }
}

/// Response body of the list endpoint.
#[derive(Serialize)]
pub struct ListQuotesBody {
    pub quotes: Vec<QuoteDto>,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<QuoteDto>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ListQuotesBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the random endpoint.
pub enum RandomResponse {
    Ok(Json<QuoteDto>),
}

impl IntoResponse for RandomResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// `POST /quotes`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<CreateQuoteRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: QuoteRepository + Send + Sync + 'static,
{
    let created = state
        .quote_service
        .create_new_quote(req.author, req.quote)
        .await?;
    Ok(CreateResponse::Created(Json(QuoteDto::from(&created))))
}

/// `GET /quotes`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<ListQuotesParams>,
) -> Result<ListResponse, ApiError>
where
    R: QuoteRepository + Send + Sync + 'static,
{
    let quotes = state
        .quote_service
        .get_quotes_with_filter(params.author)
        .await?;
    let quotes = quotes.iter().map(QuoteDto::from).collect();
    Ok(ListResponse::Ok(Json(ListQuotesBody { quotes })))
}

/// `GET /quotes/random`
pub async fn random<R>(State(state): State<AppState<R>>) -> Result<RandomResponse, ApiError>
where
    R: QuoteRepository + Send + Sync + 'static,
{
    let quote = state.quote_service.get_random_quote().await?;
    Ok(RandomResponse::Ok(Json(QuoteDto::from(&quote))))
}

/// `DELETE /quotes/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: QuoteRepository + Send + Sync + 'static,
{
    let quote_id = QuoteId::from_str(&id)
        .map_err(|_| ApiError::from(QuoteError::from(ValidationError::MalformedId)))?;
    state.quote_service.delete_by_id(quote_id).await?;
    Ok(DeleteResponse::Ok)
}
