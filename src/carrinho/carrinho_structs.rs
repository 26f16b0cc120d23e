// src/carrinho/carrinho_structs.rs

use std::collections::HashMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cardapio::cardapio_structs::ItemCardapio;
use crate::shared::util::sufixo_aleatorio;

/// Máximo de linhas por carrinho.
pub const MAX_LINHAS: usize = 50;
/// Quantidade mínima e máxima por linha.
pub const QTD_MINIMA: i32 = 1;
pub const QTD_MAXIMA: i32 = 99;
/// Um carrinho sem mutações há 24 horas é descartado no próximo acesso.
pub const VALIDADE_HORAS: i64 = 24;

/// Alíquota fixa de imposto sobre o subtotal.
pub fn taxa_imposto() -> BigDecimal {
    BigDecimal::from_str("0.08").expect("alíquota inválida")
}

/// Tarifa de entrega, isenta a partir do limiar.
pub fn tarifa_entrega() -> BigDecimal {
    BigDecimal::from_str("8.00").expect("tarifa inválida")
}

pub fn limiar_entrega_gratis() -> BigDecimal {
    BigDecimal::from_str("80.00").expect("limiar inválido")
}

/// Personalização de uma linha do carrinho. Duas linhas do mesmo item só
/// são mescladas quando a personalização é idêntica.
#[derive(Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Personalizacao {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tamanho: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacao: Option<String>,
}

/// Linha do carrinho: referência a um item do cardápio com quantidade
/// e personalização. O subtotal é derivado, nunca armazenado.
#[derive(Serialize, Clone)]
pub struct ItemCarrinho {
    pub id: String,
    pub item_id: String,
    pub nome: String,
    pub preco_unitario: BigDecimal,
    pub quantidade: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalizacao: Option<Personalizacao>,
}

impl ItemCarrinho {
    pub fn subtotal(&self) -> BigDecimal {
        &self.preco_unitario * BigDecimal::from(self.quantidade)
    }
}

/// Totais derivados do carrinho, recalculados a cada leitura.
#[derive(Serialize)]
pub struct Totais {
    pub subtotal: BigDecimal,
    pub imposto: BigDecimal,
    pub entrega: BigDecimal,
    pub total: BigDecimal,
}

#[derive(Debug, Error, PartialEq)]
pub enum ErroCarrinho {
    #[error("O carrinho atingiu o limite de {MAX_LINHAS} itens")]
    CapacidadeExcedida,

    #[error("Item não encontrado no carrinho")]
    LinhaNaoEncontrada,
}

/// Carrinho de uma sessão de cliente.
#[derive(Default)]
pub struct Carrinho {
    pub itens: Vec<ItemCarrinho>,
    pub atualizado_em: Option<DateTime<Utc>>,
}

impl Carrinho {
    pub fn expirado(&self, agora: DateTime<Utc>) -> bool {
        match self.atualizado_em {
            Some(quando) => agora - quando > Duration::hours(VALIDADE_HORAS),
            None => false,
        }
    }

    /// Adiciona um item do cardápio ao carrinho.
    ///
    /// Quando já existe uma linha do mesmo item com a mesma personalização,
    /// as quantidades são somadas (limitadas a QTD_MAXIMA). Caso contrário,
    /// uma nova linha é criada — desde que o limite de linhas não seja
    /// ultrapassado; nesse caso nada é mutado e o erro é devolvido.
    pub fn adicionar(
        &mut self,
        item: &ItemCardapio,
        quantidade: i32,
        personalizacao: Option<Personalizacao>,
    ) -> Result<String, ErroCarrinho> {
        let quantidade = quantidade.clamp(QTD_MINIMA, QTD_MAXIMA);
        let tamanho = personalizacao.as_ref().and_then(|p| p.tamanho.as_deref());
        let preco_unitario = item.preco_para(tamanho);

        // Procura uma linha com a mesma assinatura (item + personalização)
        for linha in self.itens.iter_mut() {
            if linha.item_id == item.id && linha.personalizacao == personalizacao {
                linha.quantidade = (linha.quantidade + quantidade).min(QTD_MAXIMA);
                self.atualizado_em = Some(Utc::now());
                return Ok(linha.id.clone());
            }
        }

        if self.itens.len() >= MAX_LINHAS {
            return Err(ErroCarrinho::CapacidadeExcedida);
        }

        let id = sufixo_aleatorio(8);
        self.itens.push(ItemCarrinho {
            id: id.clone(),
            item_id: item.id.clone(),
            nome: item.nome.clone(),
            preco_unitario,
            quantidade,
            personalizacao,
        });
        self.atualizado_em = Some(Utc::now());
        Ok(id)
    }

    /// Ajusta a quantidade de uma linha, limitada a [QTD_MINIMA, QTD_MAXIMA].
    /// Quantidade zero (ou negativa) remove a linha.
    pub fn atualizar_quantidade(&mut self, id: &str, quantidade: i32) -> Result<(), ErroCarrinho> {
        if quantidade <= 0 {
            return self.remover(id);
        }

        let linha = self
            .itens
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(ErroCarrinho::LinhaNaoEncontrada)?;

        linha.quantidade = quantidade.clamp(QTD_MINIMA, QTD_MAXIMA);
        self.atualizado_em = Some(Utc::now());
        Ok(())
    }

    pub fn remover(&mut self, id: &str) -> Result<(), ErroCarrinho> {
        let antes = self.itens.len();
        self.itens.retain(|l| l.id != id);

        if self.itens.len() == antes {
            return Err(ErroCarrinho::LinhaNaoEncontrada);
        }
        self.atualizado_em = Some(Utc::now());
        Ok(())
    }

    pub fn limpar(&mut self) {
        self.itens.clear();
        self.atualizado_em = Some(Utc::now());
    }

    /// Recalcula os totais a cada chamada — O(n), sem cache, adequado
    /// ao tamanho máximo de 50 linhas.
    pub fn totais(&self) -> Totais {
        let subtotal = self
            .itens
            .iter()
            .fold(BigDecimal::from(0), |acumulado, linha| {
                acumulado + linha.subtotal()
            });
        let imposto = (&subtotal * taxa_imposto()).round(2);

        let entrega = if self.itens.is_empty() || subtotal >= limiar_entrega_gratis() {
            BigDecimal::from(0)
        } else {
            tarifa_entrega()
        };

        let total = &subtotal + &imposto + &entrega;
        Totais {
            subtotal,
            imposto,
            entrega,
            total,
        }
    }
}

/// Carrinhos em memória, um por sessão de cliente. A posse é exclusiva da
/// sessão: nenhuma requisição enxerga o carrinho de outra sessão.
#[derive(Default)]
pub struct CarrinhoStore {
    carrinhos: HashMap<String, Carrinho>,
}

impl CarrinhoStore {
    /// Devolve o carrinho da sessão, criando um vazio quando necessário.
    /// Todo acesso varre as sessões expiradas do mapa, de modo que
    /// carrinhos abandonados não se acumulam em memória.
    pub fn da_sessao(&mut self, sessao: &str) -> &mut Carrinho {
        let agora = Utc::now();
        self.carrinhos.retain(|_, carrinho| !carrinho.expirado(agora));

        // Carrinhos nascem com marca de tempo para que uma sessão nunca
        // mutada também expire.
        self.carrinhos
            .entry(sessao.to_string())
            .or_insert_with(|| Carrinho {
                atualizado_em: Some(agora),
                ..Carrinho::default()
            })
    }
}
