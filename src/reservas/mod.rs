// src/reservas/mod.rs

// Declara o submódulo que contém as definições das structs de reservas
pub mod reservas_structs;
// Declara o submódulo que contém as funções de rota de reservas
pub mod reservas_router;
