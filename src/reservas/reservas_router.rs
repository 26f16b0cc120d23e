// src/reservas/reservas_router.rs

use actix_web::{post, web, HttpResponse};
use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};

// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;
use crate::notificacoes::notificacao_structs::{
    MensagemEmail, MensagemSms, RelatorioNotificacoes,
};
use crate::shared::erros::ApiError;
use crate::shared::util::{email_valido, preenchido};

use super::reservas_structs::{gerar_numero_reserva, NovaReserva, RespostaReserva};

/// Valida a reserva: contato completo, data e hora bem formadas e ao menos
/// uma pessoa na mesa.
fn validar_reserva(reserva: &NovaReserva) -> Result<(), ApiError> {
    if !preenchido(&reserva.cliente.nome) {
        return Err(ApiError::Validacao("Nome do cliente é obrigatório".to_string()));
    }
    if !preenchido(&reserva.cliente.email) || !email_valido(&reserva.cliente.email) {
        return Err(ApiError::Validacao("E-mail do cliente é inválido".to_string()));
    }
    if !preenchido(&reserva.cliente.telefone) {
        return Err(ApiError::Validacao("Telefone do cliente é obrigatório".to_string()));
    }
    if NaiveDate::parse_from_str(&reserva.data, "%Y-%m-%d").is_err() {
        return Err(ApiError::Validacao(
            "Data da reserva inválida (esperado AAAA-MM-DD)".to_string(),
        ));
    }
    if NaiveTime::parse_from_str(&reserva.hora, "%H:%M").is_err() {
        return Err(ApiError::Validacao(
            "Hora da reserva inválida (esperado HH:MM)".to_string(),
        ));
    }
    if reserva.pessoas == 0 {
        return Err(ApiError::Validacao(
            "A reserva precisa de pelo menos uma pessoa".to_string(),
        ));
    }
    Ok(())
}

/// Rota de submissão de reserva de mesa.
///
/// Mesma forma da submissão de pedidos: validada a entrada, a confirmação
/// ao cliente e o alerta ao restaurante são disparados em paralelo com
/// desfechos independentes, e a reserva é confirmada de qualquer maneira.
#[post("/reservas")]
pub async fn submeter_reserva(
    data: web::Data<AppState>,
    nova: web::Json<NovaReserva>,
) -> Result<HttpResponse, ApiError> {
    let nova = nova.into_inner();
    validar_reserva(&nova)?;

    let numero = nova
        .numero
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(gerar_numero_reserva);

    let confirmacao = MensagemEmail {
        para: nova.cliente.email.clone(),
        assunto: format!("Reserva {numero} confirmada — Bella Forno"),
        corpo: format!(
            "Olá {}, sua mesa para {} pessoa(s) está confirmada em {} às {}.{}",
            nova.cliente.nome,
            nova.pessoas,
            nova.data,
            nova.hora,
            nova.preferencias
                .as_deref()
                .map(|p| format!("\nPreferências: {p}"))
                .unwrap_or_default()
        ),
    };
    let alerta = MensagemSms {
        para: data.config.sms_admin.clone(),
        corpo: format!(
            "Nova reserva {numero}: {} pessoa(s) em {} às {} ({})",
            nova.pessoas, nova.data, nova.hora, nova.cliente.nome
        ),
    };

    let (email, sms) = futures::join!(
        data.notificador.enviar_email(&confirmacao),
        data.notificador.enviar_sms(&alerta),
    );

    if !email.enviado || !sms.enviado {
        warn!(
            "Reserva {numero} confirmada com falha de notificação (email: {}, sms: {})",
            email.enviado, sms.enviado
        );
    } else {
        info!("Reserva {numero} confirmada e notificada");
    }

    Ok(HttpResponse::Ok().json(RespostaReserva {
        sucesso: true,
        numero,
        notificacoes: RelatorioNotificacoes { email, sms },
    }))
}
