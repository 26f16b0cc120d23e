// src/contato/contato_router.rs

use actix_web::{post, web, HttpResponse};
use tracing::{error, info};

// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;
use crate::notificacoes::notificacao_structs::MensagemEmail;
use crate::shared::erros::ApiError;
use crate::shared::shared_structs::GenericResponse;
use crate::shared::util::{email_valido, preenchido};

use super::contato_structs::MensagemContato;

fn validar_contato(contato: &MensagemContato) -> Result<(), ApiError> {
    if !preenchido(&contato.nome) {
        return Err(ApiError::Validacao("Nome é obrigatório".to_string()));
    }
    if !preenchido(&contato.email) {
        return Err(ApiError::Validacao("E-mail é obrigatório".to_string()));
    }
    if !email_valido(&contato.email) {
        return Err(ApiError::Validacao("E-mail inválido".to_string()));
    }
    if !preenchido(&contato.motivo) {
        return Err(ApiError::Validacao("Motivo é obrigatório".to_string()));
    }
    if !preenchido(&contato.mensagem) {
        return Err(ApiError::Validacao("Mensagem é obrigatória".to_string()));
    }
    Ok(())
}

/// Rota do formulário de contato: valida e encaminha a mensagem como e-mail
/// para a caixa do restaurante.
///
/// Sem a chave da API de e-mail: em desenvolvimento o envio é simulado;
/// fora dele a rota responde 500, já que o encaminhamento é o próprio
/// propósito da operação.
#[post("/contato")]
pub async fn enviar_contato(
    data: web::Data<AppState>,
    contato: web::Json<MensagemContato>,
) -> Result<HttpResponse, ApiError> {
    let contato = contato.into_inner();
    validar_contato(&contato)?;

    if data.config.email_api_key.is_empty() {
        if data.config.modo_dev {
            info!(
                "Modo de desenvolvimento sem chave de e-mail: contato de {} apenas registrado",
                contato.email
            );
            return Ok(HttpResponse::Ok()
                .json(GenericResponse::ok("Mensagem registrada (envio simulado)")));
        }
        return Err(ApiError::Interno(
            "Serviço de e-mail não configurado".to_string(),
        ));
    }

    let encaminhada = MensagemEmail {
        para: data.config.email_contato.clone(),
        assunto: format!("[Contato] {} — {}", contato.motivo, contato.nome),
        corpo: format!(
            "De: {} <{}>{}\n\n{}",
            contato.nome,
            contato.email,
            contato
                .telefone
                .as_deref()
                .map(|t| format!("\nTelefone: {t}"))
                .unwrap_or_default(),
            contato.mensagem
        ),
    };

    let resultado = data.notificador.enviar_email(&encaminhada).await;
    if !resultado.enviado {
        error!(
            "Falha ao encaminhar contato de {}: {:?}",
            contato.email, resultado.erro
        );
        return Err(ApiError::Interno(
            resultado
                .erro
                .unwrap_or_else(|| "Falha ao encaminhar a mensagem".to_string()),
        ));
    }

    Ok(HttpResponse::Ok().json(GenericResponse::ok("Mensagem enviada com sucesso")))
}
