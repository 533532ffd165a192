// src/services/project_service.rs
use crate::{
    error::AppResult,
    models::{
        filter::OwnerFilter,
        project::{NewProject, Project, ProjectRow},
    },
};
use sqlx::{SqliteConnection, SqlitePool};

const SELECT_PROJECTS: &str = r#"
    SELECT
        p.id, p.title, p.description, p.start_date, p.end_date, p.user_id, p.created_at, p.updated_at,
        u.id AS owner_id, u.username AS owner_username, u.role AS owner_role, u.name AS owner_name
    FROM projects p
    LEFT JOIN users u ON u.id = p.user_id
"#;

pub async fn list_projects(db_pool: &SqlitePool, filter: OwnerFilter) -> AppResult<Vec<Project>> {
    let rows = match filter {
        OwnerFilter::Nobody => Vec::new(),
        OwnerFilter::Everyone => {
            sqlx::query_as::<_, ProjectRow>(&format!("{} ORDER BY p.id ASC", SELECT_PROJECTS))
                .fetch_all(db_pool)
                .await?
        }
        OwnerFilter::Owner(user_id) => {
            sqlx::query_as::<_, ProjectRow>(&format!(
                "{} WHERE p.user_id = ?1 ORDER BY p.id ASC",
                SELECT_PROJECTS
            ))
            .bind(user_id)
            .fetch_all(db_pool)
            .await?
        }
    };

    tracing::debug!("Encontrados {} projetos ({:?}).", rows.len(), filter);
    Ok(rows.into_iter().map(Project::from).collect())
}

pub async fn insert_project(conn: &mut SqliteConnection, new: &NewProject) -> AppResult<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO projects (title, description, start_date, end_date, user_id)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.start_date)
    .bind(&new.end_date)
    .bind(new.user_id)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();
    Ok(id)
}

pub async fn create_project(db_pool: &SqlitePool, new: &NewProject) -> AppResult<i64> {
    tracing::info!("Criando projeto '{}' para user {}", new.title, new.user_id);
    let mut tx = db_pool.begin().await?;

    let id = match insert_project(&mut *tx, new).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Falha ao inserir projeto: {:?}", e);
            tx.rollback().await?;
            return Err(e);
        }
    };

    tx.commit().await?;
    tracing::info!("✅ Projeto criado com ID {}.", id);
    Ok(id)
}

pub async fn delete_project(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    super::delete_by_id(db_pool, "projects", "Project", id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::test_pool, error::AppError};

    async fn owner(pool: &SqlitePool, id: i64) {
        sqlx::query("INSERT INTO users (id, username, password_hash, role, name) VALUES (?1, ?2, 'h', 'student', 'N')")
            .bind(id)
            .bind(format!("s{}", id))
            .execute(pool)
            .await
            .unwrap();
    }

    fn project(title: &str, user_id: i64) -> NewProject {
        NewProject {
            title: title.into(),
            description: "Something built".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-02-01".into(),
            user_id,
        }
    }

    #[tokio::test]
    async fn owner_filter_is_exact() {
        let pool = test_pool().await;
        owner(&pool, 1).await;
        owner(&pool, 11).await;
        create_project(&pool, &project("One", 1)).await.unwrap();
        let eleven = create_project(&pool, &project("Eleven", 11)).await.unwrap();

        let listed = list_projects(&pool, OwnerFilter::Owner(11)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, eleven);
        assert_eq!(listed[0].description, "Something built");

        assert_eq!(list_projects(&pool, OwnerFilter::Everyone).await.unwrap().len(), 2);
        assert!(list_projects(&pool, OwnerFilter::Owner(5)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_then_missing() {
        let pool = test_pool().await;
        owner(&pool, 1).await;
        let id = create_project(&pool, &project("Gone", 1)).await.unwrap();
        delete_project(&pool, id).await.unwrap();
        assert!(matches!(delete_project(&pool, id).await, Err(AppError::NotFound("Project"))));
    }
}
