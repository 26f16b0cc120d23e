// src/admin/admin_structs.rs

use serde::{Deserialize, Serialize};

use crate::pedidos::pedidos_structs::StatusPedido;

/// Credenciais recebidas no login administrativo.
#[derive(Deserialize)]
pub struct LoginAdmin {
    pub usuario: String,
    pub senha: String,
}

/// Payload do token assinado guardado no cookie de sessão.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Usuário administrativo
    pub exp: i64,    // Expiração (timestamp Unix)
}

/// Resposta da consulta de sessão (GET /admin/login).
#[derive(Serialize)]
pub struct StatusSessao {
    pub autenticado: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario: Option<String>,
}

/// Corpo da atualização de status de um pedido pelo painel.
#[derive(Deserialize)]
pub struct AtualizacaoStatus {
    pub status: StatusPedido,
}
