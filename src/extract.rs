use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body whose rejections render as [`AppError`] bodies.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Query string whose rejections render as [`AppError`] bodies.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
