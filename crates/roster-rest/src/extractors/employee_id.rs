//! Employee id extraction from the path or the query string.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use roster_core::{EmployeeId, RosterError};
use serde::Deserialize;

/// Parses a raw id, rejecting non-numeric input as a bad request.
pub fn parse_employee_id(raw: &str) -> Result<EmployeeId, AppError> {
    EmployeeId::parse(raw)
        .map_err(|_| AppError(RosterError::bad_request(format!("Invalid employee id: {}", raw))))
}

/// Employee id taken from the `/:id` path segment.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeIdPath(pub EmployeeId);

#[async_trait]
impl<S> FromRequestParts<S> for EmployeeIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        parse_employee_id(&raw).map(Self)
    }
}

#[derive(Debug, Deserialize)]
struct IdParams {
    id: Option<String>,
}

/// Employee id taken from the `?id=` query parameter. Required.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeIdQuery(pub EmployeeId);

#[async_trait]
impl<S> FromRequestParts<S> for EmployeeIdQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<IdParams>::from_request_parts(parts, state).await?;
        let raw = params
            .id
            .ok_or_else(|| AppError(RosterError::bad_request("Missing id query parameter")))?;
        parse_employee_id(&raw).map(Self)
    }
}
