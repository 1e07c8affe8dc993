mod atleta;
mod categoria;
mod centro_treinamento;

pub use atleta::{Atleta, AtletaDetalhado};
pub use categoria::Categoria;
pub use centro_treinamento::CentroTreinamento;
