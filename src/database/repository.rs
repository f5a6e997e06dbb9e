pub mod assignments;
pub mod faculties;
pub mod sessions;
pub mod students;
pub mod trainers;
pub mod users;
pub mod variables;

pub use assignments::AssignmentRepository;
pub use faculties::FacultyRepository;
pub use sessions::SessionRepository;
pub use students::StudentRepository;
pub use trainers::TrainerRepository;
pub use users::UserRepository;
pub use variables::VariableRepository;

use sqlx::{self, postgres::PgRow, FromRow, PgPool};

use crate::database::manager::DatabaseError;
use crate::database::models::CreatedRow;

/// Read access to one of the `vw_*` views keyed by an integer id column
pub struct ViewRepository<T> {
    view: &'static str,
    id_column: &'static str,
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> ViewRepository<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub fn new(view: &'static str, id_column: &'static str, pool: PgPool) -> Self {
        Self {
            view,
            id_column,
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn view(&self) -> &'static str {
        self.view
    }

    pub async fn select_all(&self, order_by: &str) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT * FROM {} ORDER BY {}", self.view, order_by);
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn select_one(&self, id: i32) -> Result<Option<T>, DatabaseError> {
        let sql = format!("SELECT * FROM {} WHERE {} = $1", self.view, self.id_column);
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn select_404(&self, id: i32, label: &str) -> Result<T, DatabaseError> {
        self.select_one(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("{} {} not found", label, id)))
    }
}

/// Collapse the optional row of a `*_uft` creation call
pub(crate) fn created_or_empty(row: Option<CreatedRow>) -> CreatedRow {
    row.unwrap_or(CreatedRow {
        message: None,
        id: None,
    })
}
