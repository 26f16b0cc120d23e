// src/admin/mod.rs

// Declara o submódulo que contém as definições das structs administrativas
pub mod admin_structs;
// Declara o submódulo que contém as funções de rota administrativas
pub mod admin_router;
// Declara o submódulo com o extrator de sessão que protege as rotas /admin
pub mod auth_middleware;
