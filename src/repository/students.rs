//! Students repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::student::{NewStudent, Student},
};

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Postgres>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get student by ID
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(student)
    }

    /// Check whether a student with this exact (name, student_id) pair exists
    pub async fn exists(&self, name: &str, student_id: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM students WHERE name = $1 AND student_id = $2)",
        )
        .bind(name)
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Create a new student
    pub async fn create(&self, student: &NewStudent) -> AppResult<Student> {
        let created = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, student_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&student.name)
        .bind(&student.student_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
