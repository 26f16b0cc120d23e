// src/pedidos/pedidos_structs.rs

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::carrinho::carrinho_structs::Personalizacao;
use crate::notificacoes::notificacao_structs::RelatorioNotificacoes;
use crate::shared::util::sufixo_aleatorio;

/// Dados de contato do cliente. Todos os campos textuais são obrigatórios
/// na submissão; o endereço só é exigido em pedidos de entrega.
#[derive(Serialize, Deserialize, Clone)]
pub struct Cliente {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TipoPedido {
    Entrega,
    Retirada,
}

/// Linha de um pedido submetido, já com o preço resolvido no cliente.
#[derive(Serialize, Deserialize, Clone)]
pub struct ItemPedido {
    pub item_id: String,
    pub nome: String,
    pub quantidade: i32,
    pub preco_unitario: BigDecimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalizacao: Option<Personalizacao>,
}

/// Decomposição do pagamento informada na submissão.
#[derive(Serialize, Deserialize, Clone)]
pub struct Pagamento {
    pub subtotal: BigDecimal,
    pub imposto: BigDecimal,
    pub entrega: BigDecimal,
    pub total: BigDecimal,
}

/// Estado de preparo de um pedido armazenado.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum StatusPedido {
    Pendente,
    Preparando,
    Pronto,
    SaiuParaEntrega,
    Entregue,
    Cancelado,
}

/// Corpo da submissão de pedido.
#[derive(Deserialize)]
pub struct NovoPedido {
    /// Identificador gerado no cliente; quando ausente, o servidor gera.
    pub pedido_id: Option<String>,
    pub tipo: TipoPedido,
    pub cliente: Cliente,
    pub itens: Vec<ItemPedido>,
    #[serde(default)]
    pub observacoes: Option<String>,
    pub pagamento: Pagamento,
}

/// Pedido registrado no armazenamento em memória.
#[derive(Serialize, Clone)]
pub struct PedidoArmazenado {
    pub id: String,
    pub tipo: TipoPedido,
    pub cliente: Cliente,
    pub itens: Vec<ItemPedido>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    pub pagamento: Pagamento,
    pub status: StatusPedido,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

impl PedidoArmazenado {
    /// Materializa um pedido validado com status inicial pendente.
    pub fn de_submissao(submissao: NovoPedido) -> Self {
        let agora = Utc::now();
        let id = submissao
            .pedido_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(gerar_id_pedido);

        Self {
            id,
            tipo: submissao.tipo,
            cliente: submissao.cliente,
            itens: submissao.itens,
            observacoes: submissao.observacoes,
            pagamento: submissao.pagamento,
            status: StatusPedido::Pendente,
            criado_em: agora,
            atualizado_em: agora,
        }
    }
}

/// Gera um identificador no padrão `PED-<data>-<sufixo>`.
pub fn gerar_id_pedido() -> String {
    format!(
        "PED-{}-{}",
        Utc::now().format("%Y%m%d%H%M%S"),
        sufixo_aleatorio(4).to_uppercase()
    )
}

/// Resposta da submissão: o pedido é autoritativo depois da validação,
/// então `sucesso` é verdadeiro mesmo quando algum canal de notificação falha.
#[derive(Serialize)]
pub struct RespostaPedido {
    pub sucesso: bool,
    pub pedido_id: String,
    pub notificacoes: RelatorioNotificacoes,
}
