// src/main.rs

use std::sync::{Arc, RwLock};

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Importa os módulos
//
// Cada domínio vive na sua pasta com as structs e as rotas; o Rust encontra
// o arquivo `src/<domínio>/mod.rs` e, a partir dele, os submódulos.
mod admin;        // Sessão administrativa e painel
mod cardapio;     // Cardápio (dados de referência)
mod carrinho;     // Carrinho por sessão
mod config;       // Configuração por variáveis de ambiente
mod contato;      // Formulário de contato
mod notificacoes; // Canais de e-mail e SMS
mod pedidos;      // Submissão e armazenamento de pedidos
mod reservas;     // Reserva de mesas
mod shared;       // Módulo shared

// Auxiliares compartilhados pelos testes dos routers
#[cfg(test)]
mod testes;

use cardapio::cardapio_structs::ItemCardapio;
use config::Config;
use notificacoes::notificador::{Notificador, NotificadorHttp};
use pedidos::pedidos_storage::PedidoStore;

// Estado compartilhado da aplicação: configuração, cardápio imutável,
// armazenamento de pedidos em memória e o colaborador de notificações.
pub struct AppState {
    pub config: Config,
    pub cardapio: Vec<ItemCardapio>,
    pub pedidos: RwLock<PedidoStore>,
    pub notificador: Arc<dyn Notificador>,
}

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::load();
    let porta = config.porta;

    // Cardápio é dado de referência: carregado uma única vez na subida.
    // O .expect() derruba a aplicação se o arquivo estiver ausente ou malformado.
    let itens_cardapio = cardapio::cardapio_data::carregar_cardapio(&config.caminho_cardapio)
        .expect("Falha ao carregar o cardápio");

    let notificador: Arc<dyn Notificador> = Arc::new(NotificadorHttp::novo(&config));

    // web::Data é usado para compartilhar dados entre as rotas.
    let app_state = web::Data::new(AppState {
        config,
        cardapio: itens_cardapio,
        pedidos: RwLock::new(PedidoStore::new()),
        notificador,
    });

    // Cria e compartilha os carrinhos em memória, um por sessão de cliente.
    // RwLock permite múltiplos leitores ou um único escritor.
    let carrinho_state = web::Data::new(RwLock::new(
        carrinho::carrinho_structs::CarrinhoStore::default(),
    ));

    info!("Iniciando API Bella Forno na porta {porta}...");

    // Configura e inicia o servidor HTTP.
    HttpServer::new(move || {
        App::new()
            // Adiciona o estado compartilhado à aplicação.
            // .clone() é necessário porque a closure é movida
            // e pode ser executada várias vezes.
            .app_data(app_state.clone())
            .app_data(carrinho_state.clone())

            // Módulo de Cardápio
            .service(cardapio::cardapio_router::buscar_cardapio)
            .service(cardapio::cardapio_router::buscar_item_por_id)

            // Módulo de Carrinho
            .service(carrinho::carrinho_router::ver_carrinho)
            .service(carrinho::carrinho_router::adicionar_ao_carrinho)
            .service(carrinho::carrinho_router::atualizar_quantidade)
            .service(carrinho::carrinho_router::remover_do_carrinho)
            .service(carrinho::carrinho_router::limpar_carrinho)

            // Módulo de Pedidos
            .service(pedidos::pedidos_router::submeter_pedido)
            .service(pedidos::pedidos_router::listar_pedidos)

            // Módulo de Reservas
            .service(reservas::reservas_router::submeter_reserva)

            // Módulo de Contato
            .service(contato::contato_router::enviar_contato)

            // Módulo Administrativo
            .service(admin::admin_router::login_admin)
            .service(admin::admin_router::status_sessao)
            .service(admin::admin_router::logout_admin)
            .service(admin::admin_router::painel_pedidos)
            .service(admin::admin_router::painel_detalhe_pedido)
            .service(admin::admin_router::atualizar_status_pedido)
    })
    // Vincula o servidor ao endereço IP e porta. O '?' propaga erros.
    .bind(("0.0.0.0", porta))?
    // Inicia o servidor.
    .run()
    // Aguarda a finalização do servidor.
    .await
}
