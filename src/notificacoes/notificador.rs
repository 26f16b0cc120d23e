// src/notificacoes/notificador.rs

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{error, info};

use crate::config::Config;

use super::notificacao_structs::{MensagemEmail, MensagemSms, ResultadoNotificacao};

/// Colaborador de notificação. Os handlers de submissão dependem apenas
/// deste trait, o que permite substituir os canais reais por simulados
/// nos testes.
#[async_trait]
pub trait Notificador: Send + Sync {
    async fn enviar_email(&self, mensagem: &MensagemEmail) -> ResultadoNotificacao;
    async fn enviar_sms(&self, mensagem: &MensagemSms) -> ResultadoNotificacao;
}

/// Implementação que fala com as APIs transacionais de e-mail e SMS por HTTP.
///
/// Sem timeouts explícitos: valem os padrões do cliente HTTP.
pub struct NotificadorHttp {
    http: Client,
    email_api_url: String,
    email_api_key: String,
    email_remetente: String,
    sms_api_url: String,
    sms_api_key: String,
}

impl NotificadorHttp {
    pub fn novo(config: &Config) -> Self {
        Self {
            http: Client::new(),
            email_api_url: config.email_api_url.clone(),
            email_api_key: config.email_api_key.clone(),
            email_remetente: config.email_remetente.clone(),
            sms_api_url: config.sms_api_url.clone(),
            sms_api_key: config.sms_api_key.clone(),
        }
    }
}

#[async_trait]
impl Notificador for NotificadorHttp {
    async fn enviar_email(&self, mensagem: &MensagemEmail) -> ResultadoNotificacao {
        if self.email_api_key.is_empty() {
            return ResultadoNotificacao::falha("Chave da API de e-mail não configurada");
        }

        let resultado = self
            .http
            .post(&self.email_api_url)
            .bearer_auth(&self.email_api_key)
            .json(&json!({
                "from": self.email_remetente,
                "to": mensagem.para,
                "subject": mensagem.assunto,
                "text": mensagem.corpo,
            }))
            .send()
            .await;

        match resultado {
            Ok(resposta) if resposta.status().is_success() => {
                info!("E-mail enviado para {}", mensagem.para);
                ResultadoNotificacao::sucesso()
            }
            Ok(resposta) => {
                let status = resposta.status();
                error!("API de e-mail respondeu {status} para {}", mensagem.para);
                ResultadoNotificacao::falha(format!("API de e-mail respondeu {status}"))
            }
            Err(e) => {
                error!("Falha ao chamar a API de e-mail: {e}");
                ResultadoNotificacao::falha(format!("Falha ao chamar a API de e-mail: {e}"))
            }
        }
    }

    async fn enviar_sms(&self, mensagem: &MensagemSms) -> ResultadoNotificacao {
        if self.sms_api_key.is_empty() {
            return ResultadoNotificacao::falha("Chave da API de SMS não configurada");
        }

        let resultado = self
            .http
            .post(&self.sms_api_url)
            .bearer_auth(&self.sms_api_key)
            .json(&json!({
                "to": mensagem.para,
                "body": mensagem.corpo,
            }))
            .send()
            .await;

        match resultado {
            Ok(resposta) if resposta.status().is_success() => {
                info!("SMS enviado para {}", mensagem.para);
                ResultadoNotificacao::sucesso()
            }
            Ok(resposta) => {
                let status = resposta.status();
                error!("API de SMS respondeu {status} para {}", mensagem.para);
                ResultadoNotificacao::falha(format!("API de SMS respondeu {status}"))
            }
            Err(e) => {
                error!("Falha ao chamar a API de SMS: {e}");
                ResultadoNotificacao::falha(format!("Falha ao chamar a API de SMS: {e}"))
            }
        }
    }
}
