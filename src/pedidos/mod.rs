// src/pedidos/mod.rs

// Declara o submódulo que contém as definições das structs de pedidos
pub mod pedidos_structs;
// Declara o submódulo com o armazenamento em memória dos pedidos
pub mod pedidos_storage;
// Declara o submódulo que contém as funções de rota de pedidos
pub mod pedidos_router;
