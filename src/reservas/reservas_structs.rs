// src/reservas/reservas_structs.rs

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::notificacoes::notificacao_structs::RelatorioNotificacoes;
use crate::pedidos::pedidos_structs::Cliente;
use crate::shared::util::sufixo_aleatorio;

/// Corpo da submissão de reserva de mesa.
///
/// A reserva não é persistida: o ciclo de vida dela termina no disparo
/// das notificações de confirmação.
#[derive(Deserialize)]
pub struct NovaReserva {
    /// Número gerado no cliente; quando ausente, o servidor gera.
    pub numero: Option<String>,
    pub cliente: Cliente,
    /// Data no formato AAAA-MM-DD.
    pub data: String,
    /// Hora no formato HH:MM.
    pub hora: String,
    pub pessoas: u32,
    #[serde(default)]
    pub preferencias: Option<String>,
}

/// Gera um número de reserva no padrão `RES-<data>-<sufixo>`.
pub fn gerar_numero_reserva() -> String {
    format!(
        "RES-{}-{}",
        Utc::now().format("%Y%m%d%H%M%S"),
        sufixo_aleatorio(4).to_uppercase()
    )
}

/// Resposta da submissão: a reserva é confirmada uma vez validada,
/// independentemente do desfecho das notificações.
#[derive(Serialize)]
pub struct RespostaReserva {
    pub sucesso: bool,
    pub numero: String,
    pub notificacoes: RelatorioNotificacoes,
}
