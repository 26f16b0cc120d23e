// src/notificacoes/mod.rs

// Declara o submódulo com as estruturas de mensagens e resultados
pub mod notificacao_structs;
// Declara o submódulo com o trait Notificador e a implementação HTTP
pub mod notificador;
// Implementação simulada usada pelos testes dos handlers
#[cfg(test)]
pub mod mock;
