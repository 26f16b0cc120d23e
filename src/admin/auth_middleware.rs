// src/admin/auth_middleware.rs

use actix_web::{
    dev::Payload,
    http::{header, StatusCode},
    web, FromRequest, HttpRequest, HttpResponse, ResponseError,
};

use futures::future::{ready, Ready};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use thiserror::Error;
use tracing::warn;

// Importa as Claims do módulo de structs administrativas
use super::admin_structs::Claims;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Cookie HTTP-only que carrega o token da sessão administrativa.
pub const COOKIE_SESSAO_ADMIN: &str = "sessao_admin";
/// Duração fixa da sessão administrativa.
pub const SESSAO_VALIDADE_HORAS: i64 = 8;

/// Rejeição do guarda administrativo: em vez de 401, a requisição é
/// redirecionada para a página de login com o caminho original preservado.
#[derive(Debug, Error)]
#[error("Sessão administrativa ausente ou inválida")]
pub struct RedirecionarLogin {
    pub destino: String,
}

impl ResponseError for RedirecionarLogin {
    fn status_code(&self) -> StatusCode {
        StatusCode::FOUND
    }

    fn error_response(&self) -> HttpResponse {
        // O caminho original vai codificado no parâmetro de consulta, para
        // sobreviver a destinos com `&`, `?` ou `#`.
        let consulta = serde_urlencoded::to_string([("redirect", self.destino.as_str())])
            .unwrap_or_default();

        HttpResponse::Found()
            .insert_header((header::LOCATION, format!("/admin/login?{consulta}")))
            .finish()
    }
}

/// Decodifica e valida o token do cookie de sessão, quando presente.
pub fn sessao_do_cookie(req: &HttpRequest, jwt_secret: &str) -> Option<Claims> {
    let cookie = req.cookie(COOKIE_SESSAO_ADMIN)?;

    match decode::<Claims>(
        cookie.value(),
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    ) {
        Ok(dados) => Some(dados.claims),
        Err(e) => {
            warn!("Cookie de sessão administrativa rejeitado: {e}");
            None
        }
    }
}

/// Sessão administrativa validada, extraída das rotas protegidas.
#[derive(Debug, Clone)]
pub struct SessaoAdmin {
    pub usuario: String,
}

/// Extrator de autenticação das rotas /admin.
/// Sem cookie válido, a requisição é redirecionada para /admin/login
/// com o caminho original no parâmetro `redirect`.
impl FromRequest for SessaoAdmin {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let redirecionar = || RedirecionarLogin {
            destino: req.path().to_string(),
        };

        // Acessa o AppState para obter a chave secreta do token
        let Some(app_state) = req.app_data::<web::Data<AppState>>() else {
            warn!("AppState indisponível no extrator de sessão administrativa");
            return ready(Err(redirecionar().into()));
        };

        match sessao_do_cookie(req, &app_state.config.jwt_secret) {
            Some(claims) => ready(Ok(SessaoAdmin { usuario: claims.sub })),
            None => ready(Err(redirecionar().into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirecionamento_codifica_o_caminho_original() {
        let rejeicao = RedirecionarLogin {
            destino: "/admin/pedidos?status=pendente&pagina=2".to_string(),
        };

        let resposta = rejeicao.error_response();
        let location = resposta
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap();

        assert_eq!(
            location,
            "/admin/login?redirect=%2Fadmin%2Fpedidos%3Fstatus%3Dpendente%26pagina%3D2"
        );
    }
}
