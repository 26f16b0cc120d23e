// src/cardapio/cardapio_data.rs

use std::fs;

use thiserror::Error;
use tracing::info;

use super::cardapio_structs::ItemCardapio;

#[derive(Debug, Error)]
pub enum ErroCardapio {
    #[error("Falha ao ler o arquivo do cardápio: {0}")]
    Leitura(#[from] std::io::Error),

    #[error("Cardápio malformado: {0}")]
    Formato(#[from] serde_json::Error),
}

/// Carrega o cardápio do arquivo JSON estático indicado na configuração.
pub fn carregar_cardapio(caminho: &str) -> Result<Vec<ItemCardapio>, ErroCardapio> {
    let conteudo = fs::read_to_string(caminho)?;
    let itens: Vec<ItemCardapio> = serde_json::from_str(&conteudo)?;

    info!("Cardápio carregado: {} itens de {caminho}", itens.len());
    Ok(itens)
}
