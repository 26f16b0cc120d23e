// src/pedidos/pedidos_storage.rs

use std::collections::VecDeque;

use chrono::Utc;
use serde::Serialize;

use super::pedidos_structs::{PedidoArmazenado, StatusPedido};

/// Capacidade do registro em memória: ao exceder, o pedido mais antigo cai.
pub const CAPACIDADE_MAXIMA: usize = 1000;

/// Contagem de pedidos por status sobre o conjunto completo (varredura integral).
#[derive(Serialize, Default, PartialEq, Eq, Debug)]
pub struct ContagemStatus {
    pub pendente: usize,
    pub preparando: usize,
    pub pronto: usize,
    pub saiu_para_entrega: usize,
    pub entregue: usize,
    pub cancelado: usize,
    pub total: usize,
}

/// Armazenamento em memória dos pedidos, sem durabilidade.
///
/// Registro append-only com descarte do mais antigo acima da capacidade.
/// Buscas são varreduras lineares — sem índice, adequado ao teto de 1000
/// entradas. O acesso concorrente é disciplinado pelo lock no AppState.
#[derive(Default)]
pub struct PedidoStore {
    pedidos: VecDeque<PedidoArmazenado>,
}

impl PedidoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insere um pedido, descartando o mais antigo se a capacidade estourar.
    pub fn inserir(&mut self, pedido: PedidoArmazenado) {
        self.pedidos.push_back(pedido);
        if self.pedidos.len() > CAPACIDADE_MAXIMA {
            self.pedidos.pop_front();
        }
    }

    /// Lista todos os pedidos, do mais recente para o mais antigo.
    pub fn listar(&self) -> Vec<PedidoArmazenado> {
        self.pedidos.iter().rev().cloned().collect()
    }

    /// Lista os pedidos de um status, do mais recente para o mais antigo.
    pub fn filtrar_por_status(&self, status: StatusPedido) -> Vec<PedidoArmazenado> {
        self.pedidos
            .iter()
            .rev()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    pub fn buscar_por_id(&self, id: &str) -> Option<PedidoArmazenado> {
        self.pedidos.iter().find(|p| p.id == id).cloned()
    }

    /// Muda o status de um pedido, registrando o instante da atualização.
    /// Devolve o pedido atualizado, ou None quando o id não existe.
    pub fn atualizar_status(
        &mut self,
        id: &str,
        status: StatusPedido,
    ) -> Option<PedidoArmazenado> {
        let pedido = self.pedidos.iter_mut().find(|p| p.id == id)?;
        pedido.status = status;
        pedido.atualizado_em = Utc::now();
        Some(pedido.clone())
    }

    pub fn contar_por_status(&self) -> ContagemStatus {
        let mut contagem = ContagemStatus::default();
        for pedido in &self.pedidos {
            match pedido.status {
                StatusPedido::Pendente => contagem.pendente += 1,
                StatusPedido::Preparando => contagem.preparando += 1,
                StatusPedido::Pronto => contagem.pronto += 1,
                StatusPedido::SaiuParaEntrega => contagem.saiu_para_entrega += 1,
                StatusPedido::Entregue => contagem.entregue += 1,
                StatusPedido::Cancelado => contagem.cancelado += 1,
            }
        }
        contagem.total = self.pedidos.len();
        contagem
    }

    pub fn total(&self) -> usize {
        self.pedidos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testes::pedido_de_teste as pedido;

    #[test]
    fn inserir_descarta_o_mais_antigo_acima_da_capacidade() {
        let mut store = PedidoStore::new();
        for n in 0..=CAPACIDADE_MAXIMA {
            store.inserir(pedido(&format!("PED-{n}"), StatusPedido::Pendente));
        }

        assert_eq!(store.total(), CAPACIDADE_MAXIMA);
        assert!(store.buscar_por_id("PED-0").is_none());
        assert!(store.buscar_por_id(&format!("PED-{CAPACIDADE_MAXIMA}")).is_some());
    }

    #[test]
    fn listar_devolve_do_mais_recente_para_o_mais_antigo() {
        let mut store = PedidoStore::new();
        store.inserir(pedido("PED-1", StatusPedido::Pendente));
        store.inserir(pedido("PED-2", StatusPedido::Pendente));
        store.inserir(pedido("PED-3", StatusPedido::Pendente));

        let ids: Vec<String> = store.listar().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["PED-3", "PED-2", "PED-1"]);
    }

    #[test]
    fn filtrar_por_status_ignora_os_demais() {
        let mut store = PedidoStore::new();
        store.inserir(pedido("PED-1", StatusPedido::Pendente));
        store.inserir(pedido("PED-2", StatusPedido::Entregue));
        store.inserir(pedido("PED-3", StatusPedido::Pendente));

        let pendentes = store.filtrar_por_status(StatusPedido::Pendente);
        assert_eq!(pendentes.len(), 2);
        assert_eq!(pendentes[0].id, "PED-3");
    }

    #[test]
    fn atualizar_status_registra_o_instante() {
        let mut store = PedidoStore::new();
        store.inserir(pedido("PED-1", StatusPedido::Pendente));
        let criado_em = store.buscar_por_id("PED-1").unwrap().criado_em;

        let atualizado = store
            .atualizar_status("PED-1", StatusPedido::Preparando)
            .expect("pedido existe");
        assert_eq!(atualizado.status, StatusPedido::Preparando);
        assert!(atualizado.atualizado_em >= criado_em);

        assert!(store.atualizar_status("PED-404", StatusPedido::Pronto).is_none());
    }

    #[test]
    fn contar_por_status_varre_o_conjunto_completo() {
        let mut store = PedidoStore::new();
        store.inserir(pedido("PED-1", StatusPedido::Pendente));
        store.inserir(pedido("PED-2", StatusPedido::Pendente));
        store.inserir(pedido("PED-3", StatusPedido::Cancelado));

        let contagem = store.contar_por_status();
        assert_eq!(contagem.pendente, 2);
        assert_eq!(contagem.cancelado, 1);
        assert_eq!(contagem.total, 3);
    }
}
