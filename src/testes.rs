// src/testes.rs

//! Auxiliares compartilhados pelos testes dos routers: estado da aplicação
//! com cardápio fixo, notificador simulado e fábrica de pedidos.

use std::str::FromStr;
use std::sync::{Arc, RwLock};

use actix_web::web;
use bigdecimal::BigDecimal;
use chrono::Utc;

use crate::cardapio::cardapio_structs::{ItemCardapio, PrecoPorcao};
use crate::carrinho::carrinho_structs::CarrinhoStore;
use crate::config::Config;
use crate::notificacoes::mock::NotificadorMock;
use crate::pedidos::pedidos_storage::PedidoStore;
use crate::pedidos::pedidos_structs::{
    Cliente, Pagamento, PedidoArmazenado, StatusPedido, TipoPedido,
};
use crate::AppState;

fn decimal(valor: &str) -> BigDecimal {
    BigDecimal::from_str(valor).unwrap()
}

/// Cardápio pequeno e fixo usado pelos testes de rota.
pub fn cardapio_de_teste() -> Vec<ItemCardapio> {
    vec![
        ItemCardapio {
            id: "margherita".to_string(),
            nome: "Pizza Margherita".to_string(),
            descricao: "Molho de tomate, muçarela e manjericão".to_string(),
            preco: decimal("45.90"),
            porcoes: vec![
                PrecoPorcao {
                    tamanho: "média".to_string(),
                    preco: decimal("45.90"),
                },
                PrecoPorcao {
                    tamanho: "grande".to_string(),
                    preco: decimal("59.90"),
                },
            ],
            categoria: "pizzas".to_string(),
            tags: vec!["vegetariano".to_string()],
            disponivel: true,
        },
        ItemCardapio {
            id: "lasanha".to_string(),
            nome: "Lasanha à Bolonhesa".to_string(),
            descricao: "Massa fresca com ragu da casa".to_string(),
            preco: decimal("25.00"),
            porcoes: vec![],
            categoria: "massas".to_string(),
            tags: vec![],
            disponivel: true,
        },
        ItemCardapio {
            id: "polpettone".to_string(),
            nome: "Polpettone Recheado".to_string(),
            descricao: "Fora de linha nesta estação".to_string(),
            preco: decimal("38.00"),
            porcoes: vec![],
            categoria: "massas".to_string(),
            tags: vec![],
            disponivel: false,
        },
    ]
}

/// Estado da aplicação com a configuração de teste e um notificador simulado
/// que registra sucesso em todos os canais.
pub fn estado_de_teste() -> (web::Data<AppState>, Arc<NotificadorMock>) {
    estado_com_notificador(Arc::new(NotificadorMock::novo()))
}

/// Estado da aplicação com um notificador simulado específico.
pub fn estado_com_notificador(
    mock: Arc<NotificadorMock>,
) -> (web::Data<AppState>, Arc<NotificadorMock>) {
    estado_com_config(Config::de_teste(), mock)
}

/// Estado da aplicação com configuração e notificador sob controle do teste.
pub fn estado_com_config(
    config: Config,
    mock: Arc<NotificadorMock>,
) -> (web::Data<AppState>, Arc<NotificadorMock>) {
    let estado = web::Data::new(AppState {
        config,
        cardapio: cardapio_de_teste(),
        pedidos: RwLock::new(PedidoStore::new()),
        notificador: mock.clone(),
    });
    (estado, mock)
}

/// Armazenamento de carrinhos vazio para os testes de rota do carrinho.
pub fn carrinhos_de_teste() -> web::Data<RwLock<CarrinhoStore>> {
    web::Data::new(RwLock::new(CarrinhoStore::default()))
}

/// Fabrica um pedido armazenado mínimo com o id e o status pedidos.
pub fn pedido_de_teste(id: &str, status: StatusPedido) -> PedidoArmazenado {
    let agora = Utc::now();
    PedidoArmazenado {
        id: id.to_string(),
        tipo: TipoPedido::Retirada,
        cliente: Cliente {
            nome: "Cliente Teste".to_string(),
            email: "cliente@teste.local".to_string(),
            telefone: "+5511900000000".to_string(),
            endereco: None,
        },
        itens: vec![],
        observacoes: None,
        pagamento: Pagamento {
            subtotal: decimal("50.00"),
            imposto: decimal("4.00"),
            entrega: decimal("0.00"),
            total: decimal("54.00"),
        },
        status,
        criado_em: agora,
        atualizado_em: agora,
    }
}
