// src/services/seed_service.rs
use crate::{
    config::AppConfig,
    db,
    error::AppResult,
    models::{
        certificate::NewCertificate, internship::NewInternship, project::NewProject, user::Role,
    },
    services::{
        auth_service, certificate_service, internship_service, project_service,
        user_service::{self, SeedUser},
    },
};
use chrono::{Duration, Local, NaiveDate};
use sqlx::{SqliteConnection, SqlitePool};

pub const DEFAULT_PASSWORD: &str = "password123";

// (id, username, role, nome) das contas criadas em cada arranque
const DEFAULT_ACCOUNTS: &[(i64, &str, Role, &str)] = &[
    (1, "administrator1", Role::Admin, "Administrator"),
    (2, "rishil", Role::Teacher, "Rishil"),
];

/// Dono de todos os dados de exemplo.
pub const SAMPLE_OWNER_ID: i64 = 3;
const SAMPLE_STUDENT: (i64, &str, Role, &str) = (SAMPLE_OWNER_ID, "student1", Role::Student, "Student One");

/// Prepara a base de dados no arranque.
///
/// Com `reset_on_start` o schema é recriado do zero e as contas por defeito
/// (mais os dados de exemplo, se pedidos) são inseridas. Sem reset apenas
/// garante que as tabelas existem e não semeia nada.
pub async fn bootstrap(db_pool: &SqlitePool, config: &AppConfig) -> AppResult<()> {
    db::init_schema(db_pool, config.reset_on_start).await?;

    if config.reset_on_start {
        seed_database(db_pool, config.bcrypt_cost, config.seed_sample_data).await?;
    } else {
        tracing::info!("Reset desativado: a manter os dados existentes, sem seeding.");
    }
    Ok(())
}

pub async fn seed_database(db_pool: &SqlitePool, bcrypt_cost: u32, with_samples: bool) -> AppResult<()> {
    tracing::info!("Criando utilizadores por defeito...");

    let mut accounts = DEFAULT_ACCOUNTS.to_vec();
    if with_samples {
        accounts.push(SAMPLE_STUDENT);
    }

    // Hash fora da transação (bcrypt é lento)
    let mut users = Vec::with_capacity(accounts.len());
    for (id, username, role, name) in accounts {
        users.push(SeedUser {
            id,
            username: username.to_string(),
            password_hash: auth_service::hash_password(DEFAULT_PASSWORD, bcrypt_cost).await?,
            role,
            name: name.to_string(),
        });
    }

    let mut tx = db_pool.begin().await?;
    if let Err(e) = insert_seed(&mut *tx, &users, with_samples).await {
        tracing::error!("❌ Erro ao semear a base de dados: {:?}", e);
        tx.rollback().await?;
        return Err(e);
    }
    tx.commit().await?;

    tracing::info!("✅ {} utilizadores por defeito criados.", users.len());
    Ok(())
}

async fn insert_seed(conn: &mut SqliteConnection, users: &[SeedUser], with_samples: bool) -> AppResult<()> {
    for user in users {
        user_service::insert_user(conn, user).await?;
    }

    if !with_samples {
        return Ok(());
    }

    let today = Local::now().date_naive();
    for cert in sample_certificates(today) {
        certificate_service::insert_certificate(conn, &cert).await?;
    }
    for project in sample_projects(today) {
        project_service::insert_project(conn, &project).await?;
    }
    for internship in sample_internships(today) {
        internship_service::insert_internship(conn, &internship).await?;
    }
    tracing::info!("Dados de exemplo criados para user {}.", SAMPLE_OWNER_ID);
    Ok(())
}

fn days_ago(today: NaiveDate, days: i64) -> String {
    (today - Duration::days(days)).format("%Y-%m-%d").to_string()
}

fn sample_certificates(today: NaiveDate) -> Vec<NewCertificate> {
    vec![
        NewCertificate {
            title: "Python Programming Certificate".into(),
            issuer: "Coursera".into(),
            date_issued: days_ago(today, 30),
            user_id: SAMPLE_OWNER_ID,
        },
        NewCertificate {
            title: "Web Development Certificate".into(),
            issuer: "Udemy".into(),
            date_issued: days_ago(today, 60),
            user_id: SAMPLE_OWNER_ID,
        },
    ]
}

fn sample_projects(today: NaiveDate) -> Vec<NewProject> {
    vec![
        NewProject {
            title: "Student Management System".into(),
            description: "A web application for managing student records and academic information.".into(),
            start_date: days_ago(today, 90),
            end_date: days_ago(today, 30),
            user_id: SAMPLE_OWNER_ID,
        },
        NewProject {
            title: "E-commerce Website".into(),
            description: "An online shopping platform with user authentication and payment processing.".into(),
            start_date: days_ago(today, 120),
            end_date: days_ago(today, 60),
            user_id: SAMPLE_OWNER_ID,
        },
    ]
}

fn sample_internships(today: NaiveDate) -> Vec<NewInternship> {
    vec![
        NewInternship {
            company: "Tech Solutions Inc.".into(),
            position: "Software Development Intern".into(),
            description: "Worked on developing and maintaining web applications using React and Python.".into(),
            start_date: days_ago(today, 180),
            end_date: days_ago(today, 90),
            user_id: SAMPLE_OWNER_ID,
        },
        NewInternship {
            company: "Data Analytics Co.".into(),
            position: "Data Science Intern".into(),
            description: "Analyzed large datasets and created predictive models using Python and machine learning.".into(),
            start_date: days_ago(today, 270),
            end_date: days_ago(today, 180),
            user_id: SAMPLE_OWNER_ID,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::test_pool, models::filter::OwnerFilter};

    fn config(reset_on_start: bool, seed_sample_data: bool) -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
            reset_on_start,
            seed_sample_data,
            bcrypt_cost: crate::db::TEST_BCRYPT_COST,
        }
    }

    async fn user_count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users").fetch_one(pool).await.unwrap()
    }

    #[test]
    fn days_ago_formats_plain_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(days_ago(today, 1), "2024-02-29");
        assert_eq!(days_ago(today, 0), "2024-03-01");
    }

    #[tokio::test]
    async fn default_accounts_have_verifiable_hashes() {
        let pool = test_pool().await;
        bootstrap(&pool, &config(true, false)).await.unwrap();

        assert_eq!(user_count(&pool).await, 2);
        let admin = user_service::find_user_by_username(&pool, "administrator1").await.unwrap().unwrap();
        assert_eq!((admin.id, admin.role), (1, Role::Admin));
        assert_ne!(admin.password_hash, DEFAULT_PASSWORD);
        assert!(auth_service::verify_password(DEFAULT_PASSWORD, &admin.password_hash).await.unwrap());

        let teacher = user_service::find_user_by_username(&pool, "rishil").await.unwrap().unwrap();
        assert_eq!((teacher.id, teacher.role), (2, Role::Teacher));
    }

    #[tokio::test]
    async fn reset_is_destructive_and_repeatable() {
        let pool = test_pool().await;
        bootstrap(&pool, &config(true, true)).await.unwrap();
        bootstrap(&pool, &config(true, true)).await.unwrap();
        assert_eq!(user_count(&pool).await, 3);
    }

    #[tokio::test]
    async fn without_reset_nothing_is_seeded_or_dropped() {
        let pool = test_pool().await;
        bootstrap(&pool, &config(true, false)).await.unwrap();
        bootstrap(&pool, &config(false, true)).await.unwrap();
        assert_eq!(user_count(&pool).await, 2);
        assert!(user_service::find_user_by_username(&pool, "student1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sample_data_belongs_to_the_sample_student() {
        let pool = test_pool().await;
        bootstrap(&pool, &config(true, true)).await.unwrap();

        let owner = OwnerFilter::Owner(SAMPLE_OWNER_ID);
        assert_eq!(certificate_service::list_certificates(&pool, owner).await.unwrap().len(), 2);
        assert_eq!(project_service::list_projects(&pool, owner).await.unwrap().len(), 2);
        assert_eq!(internship_service::list_internships(&pool, owner).await.unwrap().len(), 2);
        assert!(certificate_service::list_certificates(&pool, OwnerFilter::Owner(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_seed_leaves_no_partial_rows() {
        let pool = test_pool().await;
        let users = vec![
            SeedUser { id: 1, username: "a".into(), password_hash: "h".into(), role: Role::Admin, name: "A".into() },
            SeedUser { id: 1, username: "b".into(), password_hash: "h".into(), role: Role::Admin, name: "B".into() },
        ];
        let mut tx = pool.begin().await.unwrap();
        assert!(insert_seed(&mut *tx, &users, false).await.is_err());
        tx.rollback().await.unwrap();
        assert_eq!(user_count(&pool).await, 0);
    }
}
