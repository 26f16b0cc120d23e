// src/cardapio/cardapio_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Preço de uma porção específica de um item (ex.: "média", "grande").
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PrecoPorcao {
    pub tamanho: String,
    pub preco: BigDecimal,
}

/// Item do cardápio. Dado de referência imutável, carregado uma única vez
/// do arquivo estático na subida da aplicação.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ItemCardapio {
    pub id: String,
    pub nome: String,
    pub descricao: String,
    /// Preço base do item. Quando há porções, é o preço da porção padrão.
    pub preco: BigDecimal,
    /// Preços por porção, quando o item é vendido em mais de um tamanho.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub porcoes: Vec<PrecoPorcao>,
    pub categoria: String,
    /// Marcações dietéticas (ex.: "vegetariano", "sem-gluten").
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "padrao_disponivel")]
    pub disponivel: bool,
}

fn padrao_disponivel() -> bool {
    true
}

impl ItemCardapio {
    /// Resolve o preço unitário para o tamanho pedido.
    /// Um tamanho desconhecido (ou ausente) cai no preço base.
    pub fn preco_para(&self, tamanho: Option<&str>) -> BigDecimal {
        if let Some(tamanho) = tamanho {
            for porcao in &self.porcoes {
                if porcao.tamanho == tamanho {
                    return porcao.preco.clone();
                }
            }
        }
        self.preco.clone()
    }
}
