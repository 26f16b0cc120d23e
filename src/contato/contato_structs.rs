// src/contato/contato_structs.rs

use serde::Deserialize;

/// Mensagem enviada pelo formulário de contato do site.
#[derive(Deserialize)]
pub struct MensagemContato {
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub telefone: Option<String>,
    /// Motivo do contato (ex.: "eventos", "elogio", "reclamação").
    pub motivo: String,
    pub mensagem: String,
}
