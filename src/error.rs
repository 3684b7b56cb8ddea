use crate::cards::Street;

/// Rejections of malformed caller input, raised before any solving.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid card `{0}`")]
    Card(String),
    #[error("hole cards must be exactly two cards, got `{0}`")]
    Hole(String),
    #[error("card {0} appears more than once")]
    Duplicate(String),
    #[error("unknown street `{0}`")]
    Street(String),
    #[error("{street} board must hold {expected} cards, got {actual}")]
    Board {
        street: Street,
        expected: usize,
        actual: usize,
    },
    #[error("decision state needs at least two players, got {0}")]
    Players(usize),
    #[error("duplicate seat id {0}")]
    Seat(usize),
    #[error("acting player index {index} out of range for {players} players")]
    Acting { index: usize, players: usize },
    #[error("acting player at index {0} has folded")]
    Folded(usize),
    #[error("history references unknown seat {0}")]
    History(usize),
    #[error("{field} must be finite and non-negative, got {value}")]
    Amount { field: &'static str, value: f64 },
    #[error("iterations must be between 1 and {max}, got {got}")]
    Iterations { got: usize, max: usize },
    #[error("batch contains no scenarios")]
    EmptyBatch,
}

/// Service-level failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("solver failure: {0}")]
    Solver(String),
    #[error("{0} not found")]
    NotFound(String),
}

#[cfg(feature = "server")]
impl actix_web::ResponseError for Error {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Solver(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "detail": self.to_string() }))
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn validation_maps_to_client_error() {
        let err = Error::from(ValidationError::Players(1));
        assert!(err.status_code() == StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("at least two players"));
    }

    #[test]
    fn solver_failure_maps_to_server_error() {
        let err = Error::Solver(String::from("boom"));
        assert!(err.status_code() == StatusCode::INTERNAL_SERVER_ERROR);
    }
}
