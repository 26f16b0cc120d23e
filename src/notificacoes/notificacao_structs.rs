// src/notificacoes/notificacao_structs.rs

use serde::Serialize;

/// Mensagem enviada pelo canal de e-mail.
pub struct MensagemEmail {
    pub para: String,
    pub assunto: String,
    pub corpo: String,
}

/// Mensagem enviada pelo canal de SMS.
pub struct MensagemSms {
    pub para: String,
    pub corpo: String,
}

/// Desfecho individual de um envio. Falhas de envio nunca viram `Err`:
/// são capturadas aqui e reportadas como sub-resultado na resposta.
#[derive(Serialize, Clone)]
pub struct ResultadoNotificacao {
    pub enviado: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erro: Option<String>,
}

impl ResultadoNotificacao {
    pub fn sucesso() -> Self {
        Self {
            enviado: true,
            erro: None,
        }
    }

    pub fn falha(erro: impl Into<String>) -> Self {
        Self {
            enviado: false,
            erro: Some(erro.into()),
        }
    }
}

/// Resultado combinado dos dois canais disparados por uma submissão.
#[derive(Serialize)]
pub struct RelatorioNotificacoes {
    pub email: ResultadoNotificacao,
    pub sms: ResultadoNotificacao,
}
