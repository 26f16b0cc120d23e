// src/cardapio/cardapio_router.rs

use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;

// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;
// Importa o erro padrão da API
use crate::shared::erros::ApiError;

use super::cardapio_structs::ItemCardapio;

#[derive(Deserialize)]
pub struct FiltroCardapio {
    pub categoria: Option<String>,
}

/// Rota para listar os itens disponíveis do cardápio,
/// com filtro opcional por categoria.
#[get("/cardapio")]
pub async fn buscar_cardapio(
    data: web::Data<AppState>,
    filtro: web::Query<FiltroCardapio>,
) -> impl Responder {
    let itens: Vec<&ItemCardapio> = data
        .cardapio
        .iter()
        .filter(|item| item.disponivel)
        .filter(|item| match &filtro.categoria {
            Some(categoria) => &item.categoria == categoria,
            None => true,
        })
        .collect();

    HttpResponse::Ok().json(itens)
}

/// Rota para buscar um item do cardápio pelo identificador.
#[get("/cardapio/{id}")]
pub async fn buscar_item_por_id(
    data: web::Data<AppState>,
    caminho: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = caminho.into_inner();

    let item = data
        .cardapio
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| ApiError::NaoEncontrado(format!("Item '{id}'")))?;

    Ok(HttpResponse::Ok().json(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::testes::estado_de_teste;

    #[actix_web::test]
    async fn listar_cardapio_filtra_indisponiveis_e_categoria() {
        let (estado, _mock) = estado_de_teste();
        let app = test::init_service(
            App::new()
                .app_data(estado)
                .service(buscar_cardapio)
                .service(buscar_item_por_id),
        )
        .await;

        let req = test::TestRequest::get().uri("/cardapio").to_request();
        let corpo: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let itens = corpo.as_array().expect("lista de itens");
        assert!(itens.iter().all(|i| i["disponivel"] == true));

        let req = test::TestRequest::get()
            .uri("/cardapio?categoria=pizzas")
            .to_request();
        let corpo: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let itens = corpo.as_array().expect("lista de itens");
        assert!(!itens.is_empty());
        assert!(itens.iter().all(|i| i["categoria"] == "pizzas"));
    }

    #[actix_web::test]
    async fn buscar_item_inexistente_retorna_404() {
        let (estado, _mock) = estado_de_teste();
        let app = test::init_service(App::new().app_data(estado).service(buscar_item_por_id)).await;

        let req = test::TestRequest::get()
            .uri("/cardapio/nao-existe")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
