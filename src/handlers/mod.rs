//! HTTP handlers per domain. Each depends only on its service.

pub mod breeder;
pub mod cat;
pub mod dog;

use crate::error::AppError;
use axum::extract::rejection::JsonRejection;
use axum::Json;

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    match id_str.parse::<i32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::BadRequest(format!("invalid id '{}'", id_str))),
    }
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(v)| v)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}
