use common::{tictactoe::BoardError, CalcError, TodoError};
use std::convert::Infallible;
use thiserror::Error;
use tracing::{error, warn};
use warp::{http::StatusCode, Rejection, Reply};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request")]
    InvalidBoard(#[from] BoardError),
    #[error("{0}")]
    Calc(#[from] CalcError),
    #[error("{0}")]
    Todo(#[from] TodoError),
}

impl warp::reject::Reject for ApiError {}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBoard(_) | ApiError::Calc(_) => StatusCode::BAD_REQUEST,
            ApiError::Todo(TodoError::TitleRequired) => StatusCode::BAD_REQUEST,
            ApiError::Todo(TodoError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }
}

pub fn reject<E: Into<ApiError>>(err: E) -> Rejection {
    warp::reject::custom(err.into())
}

// Turn every rejection into a plain-text body with a matching status code
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "404 page not found".to_string())
    } else if let Some(api_err) = err.find::<ApiError>() {
        warn!("rejected request: {:?}", api_err);
        (api_err.status(), api_err.to_string())
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        (StatusCode::BAD_REQUEST, "Invalid request".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed".to_string(),
        )
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported media type".to_string(),
        )
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Length required".to_string())
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large".to_string())
    } else {
        error!("unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };
    Ok(warp::reply::with_status(message, status))
}
