use std::fmt;

use thiserror::Error;

/// Row an atleta points at through a foreign key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Categoria,
    CentroTreinamento,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Categoria => write!(f, "categoria"),
            Reference::CentroTreinamento => write!(f, "centro de treinamento"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Referenced {0} does not exist")]
    MissingReference(Reference),
}

pub type Result<T> = std::result::Result<T, StorageError>;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some(UNIQUE_VIOLATION)
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
        )
    }

    /// Name of the constraint a database error reports, if any
    pub fn violated_constraint(&self) -> Option<&str> {
        match self {
            StorageError::Database(sqlx::Error::Database(e)) => e.constraint(),
            _ => None,
        }
    }

    /// Rewrites a unique violation into a `ConstraintViolation` carrying `message`.
    /// Any other error passes through untouched.
    pub fn on_unique_violation(self, message: impl FnOnce() -> String) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(message())
        } else {
            self
        }
    }

    /// Same as [`StorageError::on_unique_violation`] for foreign key violations.
    pub fn on_foreign_key_violation(self, message: impl FnOnce() -> String) -> Self {
        if self.is_foreign_key_violation() {
            StorageError::ConstraintViolation(message())
        } else {
            self
        }
    }
}
