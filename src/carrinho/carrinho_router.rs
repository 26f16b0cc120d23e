// src/carrinho/carrinho_router.rs

use std::sync::RwLock;

use actix_web::cookie::{time::Duration as DuracaoCookie, Cookie};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;
use crate::shared::erros::ApiError;
use crate::shared::shared_structs::GenericResponse;
use crate::shared::util::sufixo_aleatorio;

use super::carrinho_structs::{
    Carrinho, CarrinhoStore, ErroCarrinho, ItemCarrinho, Personalizacao, Totais, VALIDADE_HORAS,
};

/// Cookie que identifica a sessão dona do carrinho.
pub const COOKIE_SESSAO: &str = "sessao_carrinho";

#[derive(Deserialize)]
pub struct AdicionarItem {
    pub item_id: String,
    #[serde(default = "quantidade_padrao")]
    pub quantidade: i32,
    pub personalizacao: Option<Personalizacao>,
}

fn quantidade_padrao() -> i32 {
    1
}

#[derive(Deserialize)]
pub struct AtualizarLinha {
    pub id: String,
    pub quantidade: i32,
}

#[derive(Deserialize)]
pub struct RemoverLinha {
    pub id: String,
}

/// Visão do carrinho devolvida após cada operação: linhas + totais derivados.
#[derive(Serialize)]
pub struct VisaoCarrinho {
    pub itens: Vec<ItemCarrinho>,
    pub totais: Totais,
}

impl VisaoCarrinho {
    fn de(carrinho: &Carrinho) -> Self {
        Self {
            itens: carrinho.itens.clone(),
            totais: carrinho.totais(),
        }
    }
}

/// Recupera a sessão do cookie, gerando uma nova quando ausente.
/// O segundo campo indica se o cookie precisa ser gravado na resposta.
fn sessao_da_requisicao(req: &HttpRequest) -> (String, bool) {
    match req.cookie(COOKIE_SESSAO) {
        Some(cookie) if !cookie.value().is_empty() => (cookie.value().to_string(), false),
        _ => (sufixo_aleatorio(16), true),
    }
}

/// Anexa o cookie de sessão quando ele acabou de ser criado.
fn responder_com_sessao(
    mut resposta: actix_web::HttpResponseBuilder,
    sessao: &str,
    sessao_nova: bool,
    corpo: impl Serialize,
) -> HttpResponse {
    if sessao_nova {
        let cookie = Cookie::build(COOKIE_SESSAO, sessao.to_string())
            .path("/")
            .http_only(true)
            .max_age(DuracaoCookie::hours(VALIDADE_HORAS))
            .finish();
        resposta.cookie(cookie);
    }
    resposta.json(corpo)
}

fn mapear(erro: ErroCarrinho) -> ApiError {
    match erro {
        ErroCarrinho::CapacidadeExcedida => ApiError::Validacao(erro.to_string()),
        ErroCarrinho::LinhaNaoEncontrada => ApiError::NaoEncontrado("Item do carrinho".to_string()),
    }
}

/// Rota para visualizar o carrinho da sessão com os totais recalculados.
#[get("/carrinho")]
pub async fn ver_carrinho(
    req: HttpRequest,
    carrinhos: web::Data<RwLock<CarrinhoStore>>,
) -> HttpResponse {
    let (sessao, sessao_nova) = sessao_da_requisicao(&req);

    let visao = {
        let mut store = carrinhos.write().unwrap(); // Obtém um lock de escrita
        VisaoCarrinho::de(store.da_sessao(&sessao))
    };

    responder_com_sessao(HttpResponse::Ok(), &sessao, sessao_nova, visao)
}

/// Rota para adicionar um item do cardápio ao carrinho da sessão.
#[post("/carrinho/adicionar")]
pub async fn adicionar_ao_carrinho(
    req: HttpRequest,
    data: web::Data<AppState>,
    carrinhos: web::Data<RwLock<CarrinhoStore>>,
    pedido: web::Json<AdicionarItem>,
) -> Result<HttpResponse, ApiError> {
    let pedido = pedido.into_inner();

    // 1. Verifica se o item existe no cardápio e está disponível
    let item = data
        .cardapio
        .iter()
        .find(|i| i.id == pedido.item_id)
        .ok_or_else(|| {
            ApiError::Validacao(format!(
                "Item '{}' não existe no cardápio",
                pedido.item_id
            ))
        })?;

    if !item.disponivel {
        return Err(ApiError::Validacao(format!(
            "Item '{}' está indisponível no momento",
            item.nome
        )));
    }

    // 2. Adiciona (ou mescla) no carrinho da sessão
    let (sessao, sessao_nova) = sessao_da_requisicao(&req);
    let visao = {
        let mut store = carrinhos.write().unwrap();
        let carrinho = store.da_sessao(&sessao);
        carrinho
            .adicionar(item, pedido.quantidade, pedido.personalizacao)
            .map_err(mapear)?;
        VisaoCarrinho::de(carrinho)
    };

    Ok(responder_com_sessao(
        HttpResponse::Ok(),
        &sessao,
        sessao_nova,
        GenericResponse::sucesso(format!("{} adicionado ao carrinho", item.nome), visao),
    ))
}

/// Rota para ajustar a quantidade de uma linha. Quantidade zero remove a linha.
#[post("/carrinho/atualizar")]
pub async fn atualizar_quantidade(
    req: HttpRequest,
    carrinhos: web::Data<RwLock<CarrinhoStore>>,
    mudanca: web::Json<AtualizarLinha>,
) -> Result<HttpResponse, ApiError> {
    let (sessao, sessao_nova) = sessao_da_requisicao(&req);

    let visao = {
        let mut store = carrinhos.write().unwrap();
        let carrinho = store.da_sessao(&sessao);
        carrinho
            .atualizar_quantidade(&mudanca.id, mudanca.quantidade)
            .map_err(mapear)?;
        VisaoCarrinho::de(carrinho)
    };

    Ok(responder_com_sessao(
        HttpResponse::Ok(),
        &sessao,
        sessao_nova,
        GenericResponse::sucesso("Carrinho atualizado", visao),
    ))
}

/// Rota para remover uma linha do carrinho.
#[post("/carrinho/remover")]
pub async fn remover_do_carrinho(
    req: HttpRequest,
    carrinhos: web::Data<RwLock<CarrinhoStore>>,
    remocao: web::Json<RemoverLinha>,
) -> Result<HttpResponse, ApiError> {
    let (sessao, sessao_nova) = sessao_da_requisicao(&req);

    let visao = {
        let mut store = carrinhos.write().unwrap();
        let carrinho = store.da_sessao(&sessao);
        carrinho.remover(&remocao.id).map_err(mapear)?;
        VisaoCarrinho::de(carrinho)
    };

    Ok(responder_com_sessao(
        HttpResponse::Ok(),
        &sessao,
        sessao_nova,
        GenericResponse::sucesso("Item removido do carrinho", visao),
    ))
}

/// Rota para esvaziar o carrinho da sessão.
#[post("/carrinho/limpar")]
pub async fn limpar_carrinho(
    req: HttpRequest,
    carrinhos: web::Data<RwLock<CarrinhoStore>>,
) -> HttpResponse {
    let (sessao, sessao_nova) = sessao_da_requisicao(&req);

    let visao = {
        let mut store = carrinhos.write().unwrap();
        let carrinho = store.da_sessao(&sessao);
        carrinho.limpar();
        VisaoCarrinho::de(carrinho)
    };

    responder_com_sessao(
        HttpResponse::Ok(),
        &sessao,
        sessao_nova,
        GenericResponse::sucesso("Carrinho esvaziado", visao),
    )
}
