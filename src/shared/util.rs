// src/shared/util.rs

use rand::{distributions::Alphanumeric, Rng};

/// Gera um sufixo alfanumérico aleatório com o tamanho pedido.
/// Usado nos identificadores de pedidos, reservas e linhas do carrinho.
pub fn sufixo_aleatorio(tamanho: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(tamanho)
        .map(char::from)
        .collect()
}

/// Validação simples de formato de e-mail: exige algo antes do '@'
/// e um domínio com pelo menos um ponto depois dele.
pub fn email_valido(email: &str) -> bool {
    let email = email.trim();
    let Some((local, dominio)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && dominio.contains('.')
        && !dominio.starts_with('.')
        && !dominio.ends_with('.')
}

/// Verifica se um campo textual obrigatório foi preenchido.
pub fn preenchido(valor: &str) -> bool {
    !valor.trim().is_empty()
}
