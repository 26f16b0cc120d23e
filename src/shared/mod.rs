// src/shared/mod.rs

// Declara o submódulo com as estruturas compartilhadas entre os domínios
pub mod shared_structs;
// Declara o submódulo com o tipo de erro padrão da API
pub mod erros;
// Declara o submódulo com utilitários de validação e geração de códigos
pub mod util;
