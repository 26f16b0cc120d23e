// src/admin/admin_router.rs

use actix_web::cookie::{time::Duration as DuracaoCookie, Cookie};
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use bcrypt::verify;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use tracing::{info, warn};

// Importa as structs administrativas e o guarda de sessão
use super::admin_structs::{AtualizacaoStatus, Claims, LoginAdmin, StatusSessao};
use super::auth_middleware::{
    sessao_do_cookie, SessaoAdmin, COOKIE_SESSAO_ADMIN, SESSAO_VALIDADE_HORAS,
};
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;
use crate::shared::erros::ApiError;
use crate::shared::shared_structs::GenericResponse;

/// Gera o token assinado da sessão com validade fixa.
fn gerar_token(usuario: &str, jwt_secret: &str) -> Result<String, ApiError> {
    let claims = Claims {
        sub: usuario.to_string(),
        exp: (Utc::now() + Duration::hours(SESSAO_VALIDADE_HORAS)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )
    .map_err(|e| ApiError::Interno(format!("Falha ao gerar token de sessão: {e}")))
}

/// Rota de login administrativo.
///
/// Compara o usuário e verifica a senha contra o hash bcrypt configurado
/// no ambiente; sucesso grava o token assinado num cookie HTTP-only.
#[post("/admin/login")]
pub async fn login_admin(
    data: web::Data<AppState>,
    credenciais: web::Json<LoginAdmin>,
) -> Result<HttpResponse, ApiError> {
    let usuario_confere = credenciais.usuario == data.config.admin_usuario;
    // A verificação roda mesmo com usuário errado, para não encurtar a resposta
    let senha_confere =
        verify(&credenciais.senha, &data.config.admin_senha_hash).unwrap_or(false);

    if !usuario_confere || !senha_confere {
        warn!("Tentativa de login administrativo rejeitada para '{}'", credenciais.usuario);
        return Ok(HttpResponse::Unauthorized().json(GenericResponse::erro("Credenciais inválidas")));
    }

    let token = gerar_token(&credenciais.usuario, &data.config.jwt_secret)?;
    let cookie = Cookie::build(COOKIE_SESSAO_ADMIN, token)
        .path("/")
        .http_only(true)
        .max_age(DuracaoCookie::hours(SESSAO_VALIDADE_HORAS))
        .finish();

    info!("Sessão administrativa aberta para '{}'", credenciais.usuario);
    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(GenericResponse::ok("Login realizado com sucesso")))
}

/// Rota de consulta da sessão: informa se o cookie atual é válido.
#[get("/admin/login")]
pub async fn status_sessao(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    let status = match sessao_do_cookie(&req, &data.config.jwt_secret) {
        Some(claims) => StatusSessao {
            autenticado: true,
            usuario: Some(claims.sub),
        },
        None => StatusSessao {
            autenticado: false,
            usuario: None,
        },
    };

    HttpResponse::Ok().json(status)
}

/// Rota de logout: expira o cookie de sessão.
#[post("/admin/logout")]
pub async fn logout_admin() -> HttpResponse {
    let mut cookie = Cookie::new(COOKIE_SESSAO_ADMIN, "");
    cookie.set_path("/");
    cookie.make_removal();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(GenericResponse::ok("Sessão encerrada"))
}

/// Rota do painel: lista todos os pedidos com as contagens por status.
/// Protegida pelo guarda de sessão — sem cookie válido, redireciona ao login.
#[get("/admin/pedidos")]
pub async fn painel_pedidos(sessao: SessaoAdmin, data: web::Data<AppState>) -> HttpResponse {
    info!("Painel de pedidos consultado por '{}'", sessao.usuario);

    let (pedidos, contagens) = {
        let store = data.pedidos.read().unwrap(); // Obtém um lock de leitura
        (store.listar(), store.contar_por_status())
    };

    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"))
        .json(serde_json::json!({
            "pedidos": pedidos,
            "contagens": contagens,
        }))
}

/// Rota do painel: detalhe de um pedido pelo identificador.
#[get("/admin/pedidos/{id}")]
pub async fn painel_detalhe_pedido(
    _sessao: SessaoAdmin,
    data: web::Data<AppState>,
    caminho: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = caminho.into_inner();

    let pedido = data
        .pedidos
        .read()
        .unwrap()
        .buscar_por_id(&id)
        .ok_or_else(|| ApiError::NaoEncontrado(format!("Pedido '{id}'")))?;

    Ok(HttpResponse::Ok().json(pedido))
}

/// Rota administrativa de mudança de status de um pedido.
#[post("/admin/pedidos/{id}/status")]
pub async fn atualizar_status_pedido(
    sessao: SessaoAdmin,
    data: web::Data<AppState>,
    caminho: web::Path<String>,
    mudanca: web::Json<AtualizacaoStatus>,
) -> Result<HttpResponse, ApiError> {
    let id = caminho.into_inner();

    let atualizado = data
        .pedidos
        .write()
        .unwrap()
        .atualizar_status(&id, mudanca.status)
        .ok_or_else(|| ApiError::NaoEncontrado(format!("Pedido '{id}'")))?;

    info!(
        "Pedido {id} movido para {:?} por '{}'",
        atualizado.status, sessao.usuario
    );
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso("Status atualizado", atualizado)))
}
