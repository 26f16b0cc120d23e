// src/pedidos/pedidos_router.rs

use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;
use crate::notificacoes::notificacao_structs::{
    MensagemEmail, MensagemSms, RelatorioNotificacoes,
};
use crate::shared::erros::ApiError;
use crate::shared::util::{email_valido, preenchido};

use super::pedidos_storage::ContagemStatus;
use super::pedidos_structs::{
    NovoPedido, PedidoArmazenado, RespostaPedido, StatusPedido, TipoPedido,
};

/// Teto do parâmetro `limit` da listagem.
const LIMITE_MAXIMO: usize = 1000;
const LIMITE_PADRAO: usize = 50;

/// Valida a submissão: contato completo, e-mail bem formado, lista de itens
/// não vazia e endereço presente em pedidos de entrega.
fn validar_pedido(pedido: &NovoPedido) -> Result<(), ApiError> {
    if !preenchido(&pedido.cliente.nome) {
        return Err(ApiError::Validacao("Nome do cliente é obrigatório".to_string()));
    }
    if !preenchido(&pedido.cliente.email) {
        return Err(ApiError::Validacao("E-mail do cliente é obrigatório".to_string()));
    }
    if !email_valido(&pedido.cliente.email) {
        return Err(ApiError::Validacao("E-mail do cliente é inválido".to_string()));
    }
    if !preenchido(&pedido.cliente.telefone) {
        return Err(ApiError::Validacao("Telefone do cliente é obrigatório".to_string()));
    }
    if pedido.itens.is_empty() {
        return Err(ApiError::Validacao("O pedido precisa de pelo menos um item".to_string()));
    }
    if pedido.tipo == TipoPedido::Entrega
        && !pedido.cliente.endereco.as_deref().map(preenchido).unwrap_or(false)
    {
        return Err(ApiError::Validacao(
            "Endereço é obrigatório em pedidos de entrega".to_string(),
        ));
    }
    Ok(())
}

/// Monta o corpo do e-mail de confirmação enviado ao cliente.
fn corpo_confirmacao(pedido: &PedidoArmazenado) -> String {
    let mut linhas = vec![format!("Olá {}, recebemos o seu pedido {}.", pedido.cliente.nome, pedido.id)];
    for item in &pedido.itens {
        linhas.push(format!("- {}x {}", item.quantidade, item.nome));
    }
    linhas.push(format!("Total: R$ {}", pedido.pagamento.total));
    linhas.join("\n")
}

/// Rota de submissão de pedido.
///
/// Depois da validação o pedido é autoritativo: os dois canais de
/// notificação são disparados em paralelo e aguardados até o fim
/// (nunca fail-fast), e cada desfecho entra na resposta como
/// sub-resultado — uma falha de canal não derruba a submissão.
#[post("/pedidos")]
pub async fn submeter_pedido(
    data: web::Data<AppState>,
    novo: web::Json<NovoPedido>,
) -> Result<HttpResponse, ApiError> {
    let novo = novo.into_inner();
    validar_pedido(&novo)?;

    let pedido = PedidoArmazenado::de_submissao(novo);

    let confirmacao = MensagemEmail {
        para: pedido.cliente.email.clone(),
        assunto: format!("Pedido {} recebido — Bella Forno", pedido.id),
        corpo: corpo_confirmacao(&pedido),
    };
    let alerta = MensagemSms {
        para: data.config.sms_admin.clone(),
        corpo: format!(
            "Novo pedido {} de {} — total R$ {}",
            pedido.id, pedido.cliente.nome, pedido.pagamento.total
        ),
    };

    // Disparo paralelo dos dois canais, coletando os dois desfechos
    let (email, sms) = futures::join!(
        data.notificador.enviar_email(&confirmacao),
        data.notificador.enviar_sms(&alerta),
    );

    if !email.enviado || !sms.enviado {
        warn!(
            "Pedido {} registrado com falha de notificação (email: {}, sms: {})",
            pedido.id, email.enviado, sms.enviado
        );
    } else {
        info!("Pedido {} registrado e notificado", pedido.id);
    }

    let resposta = RespostaPedido {
        sucesso: true,
        pedido_id: pedido.id.clone(),
        notificacoes: RelatorioNotificacoes { email, sms },
    };

    // Registra o pedido para a listagem administrativa
    data.pedidos.write().unwrap().inserir(pedido);

    Ok(HttpResponse::Ok().json(resposta))
}

#[derive(Deserialize)]
pub struct ParametrosLista {
    pub status: Option<StatusPedido>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Serialize)]
pub struct Paginacao {
    pub limit: usize,
    pub offset: usize,
    pub retornados: usize,
    pub tem_mais: bool,
}

#[derive(Serialize)]
pub struct PaginaPedidos {
    pub pedidos: Vec<PedidoArmazenado>,
    pub contagens: ContagemStatus,
    pub total: usize,
    pub paginacao: Paginacao,
}

/// Rota de listagem paginada de pedidos, do mais recente para o mais antigo.
/// As contagens por status cobrem sempre o conjunto completo, sem filtro.
#[get("/pedidos/lista")]
pub async fn listar_pedidos(
    data: web::Data<AppState>,
    parametros: web::Query<ParametrosLista>,
) -> HttpResponse {
    let limit = parametros.limit.unwrap_or(LIMITE_PADRAO).min(LIMITE_MAXIMO);
    let offset = parametros.offset.unwrap_or(0);

    let pagina = {
        let store = data.pedidos.read().unwrap(); // Obtém um lock de leitura
        let contagens = store.contar_por_status();
        let total = store.total();

        let filtrados = match parametros.status {
            Some(status) => store.filtrar_por_status(status),
            None => store.listar(),
        };
        let total_filtrado = filtrados.len();
        let pedidos: Vec<PedidoArmazenado> =
            filtrados.into_iter().skip(offset).take(limit).collect();

        let retornados = pedidos.len();
        PaginaPedidos {
            pedidos,
            contagens,
            total,
            paginacao: Paginacao {
                limit,
                offset,
                retornados,
                tem_mais: offset + retornados < total_filtrado,
            },
        }
    };

    // A listagem alimenta o painel administrativo: nunca deve ser cacheada
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"))
        .insert_header((header::PRAGMA, "no-cache"))
        .json(pagina)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    use crate::notificacoes::mock::NotificadorMock;
    use crate::testes::{estado_com_notificador, estado_de_teste, pedido_de_teste};

    fn corpo_pedido_valido() -> serde_json::Value {
        serde_json::json!({
            "tipo": "retirada",
            "cliente": {
                "nome": "Maria Souza",
                "email": "maria@exemplo.com.br",
                "telefone": "+5511912345678"
            },
            "itens": [
                { "item_id": "lasanha", "nome": "Lasanha à Bolonhesa", "quantidade": 2, "preco_unitario": "25.00" }
            ],
            "pagamento": { "subtotal": "50.00", "imposto": "4.00", "entrega": "0.00", "total": "54.00" }
        })
    }

    #[actix_web::test]
    async fn pedido_sem_email_retorna_400_sem_disparar_notificacoes() {
        let (estado, mock) = estado_de_teste();
        let app =
            test::init_service(App::new().app_data(estado.clone()).service(submeter_pedido)).await;

        let mut corpo = corpo_pedido_valido();
        corpo["cliente"]["email"] = serde_json::json!("");

        let req = test::TestRequest::post()
            .uri("/pedidos")
            .set_json(corpo)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(mock.chamadas_email(), 0);
        assert_eq!(mock.chamadas_sms(), 0);
        assert_eq!(estado.pedidos.read().unwrap().total(), 0);
    }

    #[actix_web::test]
    async fn pedido_sem_itens_retorna_400() {
        let (estado, _mock) = estado_de_teste();
        let app = test::init_service(App::new().app_data(estado).service(submeter_pedido)).await;

        let mut corpo = corpo_pedido_valido();
        corpo["itens"] = serde_json::json!([]);

        let req = test::TestRequest::post()
            .uri("/pedidos")
            .set_json(corpo)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn falha_no_email_nao_derruba_a_submissao() {
        let mock = Arc::new(NotificadorMock::com_falha_no_email());
        let (estado, mock) = estado_com_notificador(mock);
        let app =
            test::init_service(App::new().app_data(estado.clone()).service(submeter_pedido)).await;

        let req = test::TestRequest::post()
            .uri("/pedidos")
            .set_json(corpo_pedido_valido())
            .to_request();
        let corpo: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(corpo["sucesso"], true);
        assert_eq!(corpo["notificacoes"]["email"]["enviado"], false);
        assert_eq!(corpo["notificacoes"]["sms"]["enviado"], true);
        assert_eq!(mock.chamadas_email(), 1);
        assert_eq!(mock.chamadas_sms(), 1);

        // O pedido foi registrado apesar da falha de canal
        let id = corpo["pedido_id"].as_str().unwrap();
        assert!(estado.pedidos.read().unwrap().buscar_por_id(id).is_some());
    }

    #[actix_web::test]
    async fn entrega_sem_endereco_retorna_400() {
        let (estado, _mock) = estado_de_teste();
        let app = test::init_service(App::new().app_data(estado).service(submeter_pedido)).await;

        let mut corpo = corpo_pedido_valido();
        corpo["tipo"] = serde_json::json!("entrega");

        let req = test::TestRequest::post()
            .uri("/pedidos")
            .set_json(corpo)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn listagem_pagina_e_conta_por_status() {
        let (estado, _mock) = estado_de_teste();
        {
            let mut store = estado.pedidos.write().unwrap();
            for n in 0..15 {
                store.inserir(pedido_de_teste(&format!("PED-P{n}"), StatusPedido::Pendente));
            }
            for n in 0..3 {
                store.inserir(pedido_de_teste(&format!("PED-E{n}"), StatusPedido::Entregue));
            }
        }
        let app =
            test::init_service(App::new().app_data(estado.clone()).service(listar_pedidos)).await;

        let req = test::TestRequest::get()
            .uri("/pedidos/lista?status=pendente&limit=10&offset=0")
            .to_request();
        let resp = test::call_service(&app, req).await;

        let cache = resp
            .headers()
            .get(header::CACHE_CONTROL)
            .expect("cabeçalho de cache");
        assert!(cache.to_str().unwrap().contains("no-store"));

        let corpo: serde_json::Value = test::read_body_json(resp).await;
        let pedidos = corpo["pedidos"].as_array().unwrap();
        assert_eq!(pedidos.len(), 10);
        // Mais recente primeiro
        assert_eq!(pedidos[0]["id"], "PED-P14");
        assert!(pedidos.iter().all(|p| p["status"] == "pendente"));

        // Contagens cobrem o conjunto completo, não só a página filtrada
        assert_eq!(corpo["contagens"]["pendente"], 15);
        assert_eq!(corpo["contagens"]["entregue"], 3);
        assert_eq!(corpo["contagens"]["total"], 18);
        assert_eq!(corpo["paginacao"]["tem_mais"], true);

        // Segunda página fecha a listagem dos pendentes
        let req = test::TestRequest::get()
            .uri("/pedidos/lista?status=pendente&limit=10&offset=10")
            .to_request();
        let corpo: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(corpo["pedidos"].as_array().unwrap().len(), 5);
        assert_eq!(corpo["paginacao"]["tem_mais"], false);
    }

    #[actix_web::test]
    async fn limite_da_listagem_e_grampeado_em_1000() {
        let (estado, _mock) = estado_de_teste();
        let app = test::init_service(App::new().app_data(estado).service(listar_pedidos)).await;

        let req = test::TestRequest::get()
            .uri("/pedidos/lista?limit=5000")
            .to_request();
        let corpo: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(corpo["paginacao"]["limit"], 1000);
    }
}
