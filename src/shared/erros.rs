// src/shared/erros.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use super::shared_structs::GenericResponse;

/// Erro padrão dos handlers da API.
///
/// Erros de validação viram respostas 400 com mensagem legível; recursos
/// inexistentes viram 404; qualquer falha inesperada vira 500 com a mensagem
/// subjacente quando disponível.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validacao(String),

    #[error("{0} não encontrado")]
    NaoEncontrado(String),

    #[error("Erro interno: {0}")]
    Interno(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validacao(_) => StatusCode::BAD_REQUEST,
            ApiError::NaoEncontrado(_) => StatusCode::NOT_FOUND,
            ApiError::Interno(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(GenericResponse::erro(self.to_string()))
    }
}
