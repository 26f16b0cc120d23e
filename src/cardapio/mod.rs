// src/cardapio/mod.rs

// Declara o submódulo que contém as definições das structs do cardápio
pub mod cardapio_structs;
// Declara o submódulo que carrega o cardápio do arquivo de dados
pub mod cardapio_data;
// Declara o submódulo que contém as funções de rota do cardápio
pub mod cardapio_router;
