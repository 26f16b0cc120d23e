// src/notificacoes/mock.rs

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::notificacao_structs::{MensagemEmail, MensagemSms, ResultadoNotificacao};
use super::notificador::Notificador;

/// Notificador simulado para os testes dos handlers: os desfechos de cada
/// canal são roteirizados na construção e as chamadas são contadas.
pub struct NotificadorMock {
    falhar_email: bool,
    falhar_sms: bool,
    chamadas_email: AtomicUsize,
    chamadas_sms: AtomicUsize,
}

impl NotificadorMock {
    pub fn novo() -> Self {
        Self {
            falhar_email: false,
            falhar_sms: false,
            chamadas_email: AtomicUsize::new(0),
            chamadas_sms: AtomicUsize::new(0),
        }
    }

    pub fn com_falha_no_email() -> Self {
        Self {
            falhar_email: true,
            ..Self::novo()
        }
    }

    pub fn chamadas_email(&self) -> usize {
        self.chamadas_email.load(Ordering::SeqCst)
    }

    pub fn chamadas_sms(&self) -> usize {
        self.chamadas_sms.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notificador for NotificadorMock {
    async fn enviar_email(&self, _mensagem: &MensagemEmail) -> ResultadoNotificacao {
        self.chamadas_email.fetch_add(1, Ordering::SeqCst);
        if self.falhar_email {
            ResultadoNotificacao::falha("Falha simulada no canal de e-mail")
        } else {
            ResultadoNotificacao::sucesso()
        }
    }

    async fn enviar_sms(&self, _mensagem: &MensagemSms) -> ResultadoNotificacao {
        self.chamadas_sms.fetch_add(1, Ordering::SeqCst);
        if self.falhar_sms {
            ResultadoNotificacao::falha("Falha simulada no canal de SMS")
        } else {
            ResultadoNotificacao::sucesso()
        }
    }
}
