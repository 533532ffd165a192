// src/services/internship_service.rs
use crate::{
    error::AppResult,
    models::{
        filter::OwnerFilter,
        internship::{Internship, InternshipRow, NewInternship},
    },
};
use sqlx::{SqliteConnection, SqlitePool};

const SELECT_INTERNSHIPS: &str = r#"
    SELECT
        i.id, i.company, i.position, i.description, i.start_date, i.end_date, i.user_id,
        i.created_at, i.updated_at,
        u.id AS owner_id, u.username AS owner_username, u.role AS owner_role, u.name AS owner_name
    FROM internships i
    LEFT JOIN users u ON u.id = i.user_id
"#;

pub async fn list_internships(db_pool: &SqlitePool, filter: OwnerFilter) -> AppResult<Vec<Internship>> {
    let rows = match filter {
        OwnerFilter::Nobody => Vec::new(),
        OwnerFilter::Everyone => {
            sqlx::query_as::<_, InternshipRow>(&format!("{} ORDER BY i.id ASC", SELECT_INTERNSHIPS))
                .fetch_all(db_pool)
                .await?
        }
        OwnerFilter::Owner(user_id) => {
            sqlx::query_as::<_, InternshipRow>(&format!(
                "{} WHERE i.user_id = ?1 ORDER BY i.id ASC",
                SELECT_INTERNSHIPS
            ))
            .bind(user_id)
            .fetch_all(db_pool)
            .await?
        }
    };

    tracing::debug!("Encontrados {} estágios ({:?}).", rows.len(), filter);
    Ok(rows.into_iter().map(Internship::from).collect())
}

pub async fn insert_internship(conn: &mut SqliteConnection, new: &NewInternship) -> AppResult<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO internships (company, position, description, start_date, end_date, user_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(&new.company)
    .bind(&new.position)
    .bind(&new.description)
    .bind(&new.start_date)
    .bind(&new.end_date)
    .bind(new.user_id)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();
    Ok(id)
}

pub async fn create_internship(db_pool: &SqlitePool, new: &NewInternship) -> AppResult<i64> {
    tracing::info!("Criando estágio em '{}' para user {}", new.company, new.user_id);
    let mut tx = db_pool.begin().await?;

    let id = match insert_internship(&mut *tx, new).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Falha ao inserir estágio: {:?}", e);
            tx.rollback().await?;
            return Err(e);
        }
    };

    tx.commit().await?;
    tracing::info!("✅ Estágio criado com ID {}.", id);
    Ok(id)
}

pub async fn delete_internship(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    super::delete_by_id(db_pool, "internships", "Internship", id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::test_pool, error::AppError};

    fn internship(company: &str, user_id: i64) -> NewInternship {
        NewInternship {
            company: company.into(),
            position: "Intern".into(),
            description: "Learned things".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-06-01".into(),
            user_id,
        }
    }

    #[tokio::test]
    async fn create_list_delete() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO users (id, username, password_hash, role, name) VALUES (3, 'student1', 'h', 'student', 'Student One')")
            .execute(&pool)
            .await
            .unwrap();

        let id = create_internship(&pool, &internship("Data Analytics Co.", 3)).await.unwrap();
        let listed = list_internships(&pool, OwnerFilter::Owner(3)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].company, "Data Analytics Co.");
        assert_eq!(listed[0].user.as_ref().map(|u| u.name.as_str()), Some("Student One"));

        delete_internship(&pool, id).await.unwrap();
        assert!(list_internships(&pool, OwnerFilter::Everyone).await.unwrap().is_empty());
        assert!(matches!(delete_internship(&pool, id).await, Err(AppError::NotFound("Internship"))));
    }

    #[tokio::test]
    async fn orphan_internship_is_not_written() {
        let pool = test_pool().await;
        assert!(create_internship(&pool, &internship("Nowhere", 404)).await.is_err());
        assert!(list_internships(&pool, OwnerFilter::Everyone).await.unwrap().is_empty());
    }
}
