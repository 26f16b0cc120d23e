// src/config.rs

use std::{env, fmt::Display, str::FromStr};

use bcrypt::DEFAULT_COST;
use tracing::{info, warn};

/// Configuração da aplicação, carregada de variáveis de ambiente na subida.
///
/// Em modo de desenvolvimento (`MODO_DEV`, padrão ligado) os segredos ausentes
/// recebem valores de desenvolvimento com um aviso no log. Fora do modo de
/// desenvolvimento, um segredo ausente derruba a aplicação na subida.
#[derive(Clone)]
pub struct Config {
    pub porta: u16,
    pub caminho_cardapio: String,
    pub modo_dev: bool,

    // Sessão administrativa
    pub admin_usuario: String,
    pub admin_senha_hash: String,
    pub jwt_secret: String,

    // Canal de e-mail (API transacional)
    pub email_api_url: String,
    pub email_api_key: String,
    pub email_remetente: String,
    pub email_contato: String,

    // Canal de SMS
    pub sms_api_url: String,
    pub sms_api_key: String,
    pub sms_admin: String,
}

impl Config {
    pub fn load() -> Self {
        let modo_dev = carregar("MODO_DEV", "true");

        Self {
            porta: carregar("PORTA", "8080"),
            caminho_cardapio: carregar("CAMINHO_CARDAPIO", "dados/cardapio.json"),
            modo_dev,

            admin_usuario: carregar("ADMIN_USUARIO", "admin"),
            admin_senha_hash: segredo("ADMIN_SENHA_HASH", modo_dev, || {
                // Hash da senha de desenvolvimento "admin123"
                bcrypt::hash("admin123", DEFAULT_COST).expect("Falha ao gerar hash de desenvolvimento")
            }),
            jwt_secret: segredo("JWT_SECRET", modo_dev, || {
                "segredo_de_desenvolvimento_nao_usar_em_producao".to_string()
            }),

            email_api_url: carregar("EMAIL_API_URL", "https://api.resend.com/emails"),
            email_api_key: segredo("EMAIL_API_KEY", modo_dev, String::new),
            email_remetente: carregar("EMAIL_REMETENTE", "pedidos@bellaforno.com.br"),
            email_contato: carregar("EMAIL_CONTATO", "contato@bellaforno.com.br"),

            sms_api_url: carregar("SMS_API_URL", "https://api.sms.example/messages"),
            sms_api_key: segredo("SMS_API_KEY", modo_dev, String::new),
            sms_admin: carregar("SMS_ADMIN", "+5511999990000"),
        }
    }

    /// Configuração fixa para os testes, sem tocar no ambiente do processo.
    #[cfg(test)]
    pub fn de_teste() -> Self {
        Self {
            porta: 0,
            caminho_cardapio: String::new(),
            modo_dev: true,

            admin_usuario: "admin".to_string(),
            // Custo mínimo para não atrasar a suíte
            admin_senha_hash: bcrypt::hash("admin123", 4).expect("hash de teste"),
            jwt_secret: "segredo_de_teste".to_string(),

            email_api_url: "http://localhost/emails".to_string(),
            email_api_key: "chave-de-teste".to_string(),
            email_remetente: "pedidos@teste.local".to_string(),
            email_contato: "contato@teste.local".to_string(),

            sms_api_url: "http://localhost/sms".to_string(),
            sms_api_key: "chave-de-teste".to_string(),
            sms_admin: "+5511988887777".to_string(),
        }
    }
}

fn var(chave: &str) -> Result<String, ()> {
    env::var(chave).map_err(|_| ())
}

/// Carrega uma variável de ambiente com valor padrão, convertendo para o tipo pedido.
fn carregar<T: FromStr>(chave: &str, padrao: &str) -> T
where
    T::Err: Display,
{
    var(chave)
        .unwrap_or_else(|_| {
            info!("{chave} não definida, usando padrão: {padrao}");
            padrao.to_string()
        })
        .parse()
        .map_err(|e| warn!("Valor inválido em {chave}: {e}"))
        .expect("Ambiente mal configurado!")
}

/// Carrega um segredo obrigatório. Fora do modo de desenvolvimento a ausência
/// derruba a aplicação; em desenvolvimento cai no valor fornecido.
fn segredo(chave: &str, modo_dev: bool, padrao_dev: impl FnOnce() -> String) -> String {
    match var(chave) {
        Ok(valor) => valor,
        Err(_) if modo_dev => {
            warn!("{chave} não definida, usando valor de desenvolvimento");
            padrao_dev()
        }
        Err(_) => panic!("{chave} é obrigatória fora do modo de desenvolvimento"),
    }
}
