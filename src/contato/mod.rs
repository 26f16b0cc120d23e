// src/contato/mod.rs

// Declara o submódulo que contém as definições das structs de contato
pub mod contato_structs;
// Declara o submódulo que contém a função de rota de contato
pub mod contato_router;
