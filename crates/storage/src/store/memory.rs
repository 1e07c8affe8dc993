//! In-memory implementation of [`WorkoutStore`].
//!
//! All three tables live behind a single `tokio::sync::RwLock`, so checks
//! that span tables (name uniqueness, references held by atletas) and the
//! write that depends on them happen under one write guard. State is lost on
//! restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::WorkoutStore;
use crate::dto::atleta::{CreateAtletaRequest, UpdateAtletaRequest};
use crate::dto::categoria::{CreateCategoriaRequest, UpdateCategoriaRequest};
use crate::dto::centro_treinamento::{
    CreateCentroTreinamentoRequest, UpdateCentroTreinamentoRequest,
};
use crate::error::{Reference, Result, StorageError};
use crate::models::{Atleta, AtletaDetalhado, Categoria, CentroTreinamento};
use crate::repository::atleta::duplicate_cpf;
use crate::repository::categoria::duplicate_nome as duplicate_categoria;
use crate::repository::centro_treinamento::duplicate_nome as duplicate_centro;

#[derive(Debug, Default)]
struct Tables {
    categorias: HashMap<Uuid, Categoria>,
    centros: HashMap<Uuid, CentroTreinamento>,
    atletas: HashMap<Uuid, Atleta>,
}

impl Tables {
    fn detalhar(&self, atleta: &Atleta) -> Result<AtletaDetalhado> {
        let categoria = self
            .categorias
            .get(&atleta.categoria_id)
            .ok_or(StorageError::NotFound)?;
        let centro = self
            .centros
            .get(&atleta.centro_treinamento_id)
            .ok_or(StorageError::NotFound)?;

        Ok(AtletaDetalhado {
            atleta: atleta.clone(),
            categoria_nome: categoria.nome.clone(),
            centro_treinamento_nome: centro.nome.clone(),
        })
    }

    fn categoria_nome_taken(&self, nome: &str, except: Option<Uuid>) -> bool {
        self.categorias
            .values()
            .any(|c| c.nome == nome && Some(c.id) != except)
    }

    fn centro_nome_taken(&self, nome: &str, except: Option<Uuid>) -> bool {
        self.centros
            .values()
            .any(|c| c.nome == nome && Some(c.id) != except)
    }

    fn cpf_taken(&self, cpf: &str, except: Option<Uuid>) -> bool {
        self.atletas
            .values()
            .any(|a| a.cpf == cpf && Some(a.id) != except)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn now() -> chrono::NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

#[async_trait]
impl WorkoutStore for MemoryStore {
    async fn list_categorias(&self) -> Result<Vec<Categoria>> {
        let tables = self.tables.read().await;
        let mut categorias: Vec<Categoria> = tables.categorias.values().cloned().collect();
        categorias.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(categorias)
    }

    async fn get_categoria(&self, id: Uuid) -> Result<Categoria> {
        let tables = self.tables.read().await;
        tables
            .categorias
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn find_categoria_by_nome(&self, nome: &str) -> Result<Option<Categoria>> {
        let tables = self.tables.read().await;
        Ok(tables.categorias.values().find(|c| c.nome == nome).cloned())
    }

    async fn create_categoria(&self, req: &CreateCategoriaRequest) -> Result<Categoria> {
        let mut tables = self.tables.write().await;
        if tables.categoria_nome_taken(&req.nome, None) {
            return Err(StorageError::ConstraintViolation(duplicate_categoria(
                &req.nome,
            )));
        }

        let categoria = Categoria {
            id: Uuid::new_v4(),
            nome: req.nome.clone(),
        };
        tables.categorias.insert(categoria.id, categoria.clone());
        Ok(categoria)
    }

    async fn update_categoria(&self, id: Uuid, req: &UpdateCategoriaRequest) -> Result<Categoria> {
        let mut tables = self.tables.write().await;
        if !tables.categorias.contains_key(&id) {
            return Err(StorageError::NotFound);
        }
        if let Some(nome) = &req.nome {
            if tables.categoria_nome_taken(nome, Some(id)) {
                return Err(StorageError::ConstraintViolation(duplicate_categoria(
                    nome,
                )));
            }
        }

        let existing = tables
            .categorias
            .get_mut(&id)
            .ok_or(StorageError::NotFound)?;
        if let Some(nome) = &req.nome {
            existing.nome = nome.clone();
        }
        Ok(existing.clone())
    }

    async fn delete_categoria(&self, id: Uuid) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.categorias.contains_key(&id) {
            return Err(StorageError::NotFound);
        }
        if tables.atletas.values().any(|a| a.categoria_id == id) {
            return Err(StorageError::ConstraintViolation(format!(
                "Categoria {} is still referenced by atletas",
                id
            )));
        }

        tables.categorias.remove(&id);
        Ok(())
    }

    async fn list_centros(&self) -> Result<Vec<CentroTreinamento>> {
        let tables = self.tables.read().await;
        let mut centros: Vec<CentroTreinamento> = tables.centros.values().cloned().collect();
        centros.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(centros)
    }

    async fn get_centro(&self, id: Uuid) -> Result<CentroTreinamento> {
        let tables = self.tables.read().await;
        tables
            .centros
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn find_centro_by_nome(&self, nome: &str) -> Result<Option<CentroTreinamento>> {
        let tables = self.tables.read().await;
        Ok(tables.centros.values().find(|c| c.nome == nome).cloned())
    }

    async fn create_centro(
        &self,
        req: &CreateCentroTreinamentoRequest,
    ) -> Result<CentroTreinamento> {
        let mut tables = self.tables.write().await;
        if tables.centro_nome_taken(&req.nome, None) {
            return Err(StorageError::ConstraintViolation(
                duplicate_centro(&req.nome),
            ));
        }

        let centro = CentroTreinamento {
            id: Uuid::new_v4(),
            nome: req.nome.clone(),
            endereco: req.endereco.clone(),
            proprietario: req.proprietario.clone(),
            created_at: now(),
        };
        tables.centros.insert(centro.id, centro.clone());
        Ok(centro)
    }

    async fn update_centro(
        &self,
        id: Uuid,
        req: &UpdateCentroTreinamentoRequest,
    ) -> Result<CentroTreinamento> {
        let mut tables = self.tables.write().await;
        if !tables.centros.contains_key(&id) {
            return Err(StorageError::NotFound);
        }
        if let Some(nome) = &req.nome {
            if tables.centro_nome_taken(nome, Some(id)) {
                return Err(StorageError::ConstraintViolation(
                    duplicate_centro(nome),
                ));
            }
        }

        let existing = tables.centros.get_mut(&id).ok_or(StorageError::NotFound)?;
        if let Some(nome) = &req.nome {
            existing.nome = nome.clone();
        }
        if let Some(endereco) = &req.endereco {
            existing.endereco = endereco.clone();
        }
        if let Some(proprietario) = &req.proprietario {
            existing.proprietario = proprietario.clone();
        }
        Ok(existing.clone())
    }

    async fn delete_centro(&self, id: Uuid) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.centros.contains_key(&id) {
            return Err(StorageError::NotFound);
        }
        if tables.atletas.values().any(|a| a.centro_treinamento_id == id) {
            return Err(StorageError::ConstraintViolation(format!(
                "Centro de treinamento {} is still referenced by atletas",
                id
            )));
        }

        tables.centros.remove(&id);
        Ok(())
    }

    async fn list_atletas(&self) -> Result<Vec<AtletaDetalhado>> {
        let tables = self.tables.read().await;
        let mut atletas = tables
            .atletas
            .values()
            .map(|a| tables.detalhar(a))
            .collect::<Result<Vec<_>>>()?;
        atletas.sort_by(|a, b| {
            a.atleta
                .nome
                .cmp(&b.atleta.nome)
                .then_with(|| a.atleta.cpf.cmp(&b.atleta.cpf))
        });
        Ok(atletas)
    }

    async fn get_atleta(&self, id: Uuid) -> Result<AtletaDetalhado> {
        let tables = self.tables.read().await;
        let atleta = tables.atletas.get(&id).ok_or(StorageError::NotFound)?;
        tables.detalhar(atleta)
    }

    async fn create_atleta(
        &self,
        req: &CreateAtletaRequest,
        categoria: &Categoria,
        centro: &CentroTreinamento,
    ) -> Result<AtletaDetalhado> {
        let mut tables = self.tables.write().await;
        // The referenced rows may have been removed since they were resolved.
        if !tables.categorias.contains_key(&categoria.id) {
            return Err(StorageError::MissingReference(Reference::Categoria));
        }
        if !tables.centros.contains_key(&centro.id) {
            return Err(StorageError::MissingReference(
                Reference::CentroTreinamento,
            ));
        }
        if tables.cpf_taken(&req.cpf, None) {
            return Err(StorageError::ConstraintViolation(duplicate_cpf(
                &req.cpf,
            )));
        }

        let novo = Atleta {
            id: Uuid::new_v4(),
            nome: req.nome.clone(),
            cpf: req.cpf.clone(),
            idade: req.idade,
            peso: req.peso,
            altura: req.altura,
            sexo: req.sexo.clone(),
            created_at: now(),
            categoria_id: categoria.id,
            centro_treinamento_id: centro.id,
        };
        let detalhado = tables.detalhar(&novo)?;
        tables.atletas.insert(novo.id, novo);
        Ok(detalhado)
    }

    async fn update_atleta(&self, id: Uuid, req: &UpdateAtletaRequest) -> Result<AtletaDetalhado> {
        let mut tables = self.tables.write().await;
        if !tables.atletas.contains_key(&id) {
            return Err(StorageError::NotFound);
        }
        if let Some(cpf) = &req.cpf {
            if tables.cpf_taken(cpf, Some(id)) {
                return Err(StorageError::ConstraintViolation(duplicate_cpf(cpf)));
            }
        }

        let existing = tables.atletas.get_mut(&id).ok_or(StorageError::NotFound)?;
        if let Some(nome) = &req.nome {
            existing.nome = nome.clone();
        }
        if let Some(cpf) = &req.cpf {
            existing.cpf = cpf.clone();
        }
        if let Some(idade) = req.idade {
            existing.idade = idade;
        }
        if let Some(peso) = req.peso {
            existing.peso = peso;
        }
        if let Some(altura) = req.altura {
            existing.altura = altura;
        }
        if let Some(sexo) = &req.sexo {
            existing.sexo = sexo.clone();
        }

        let updated = existing.clone();
        tables.detalhar(&updated)
    }

    async fn delete_atleta(&self, id: Uuid) -> Result<AtletaDetalhado> {
        let mut tables = self.tables.write().await;
        let atleta = tables.atletas.get(&id).ok_or(StorageError::NotFound)?;
        let snapshot = tables.detalhar(atleta)?;
        tables.atletas.remove(&id);
        Ok(snapshot)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
