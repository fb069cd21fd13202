use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Открыть соединение и создать недостающие таблицы.
///
/// `db_path = None` — путь берётся из config.toml (или встроенного дефолта).
/// Повторный вызов — no-op: соединение глобальное и создаётся один раз.
pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    if DB_CONN.get().is_some() {
        return Ok(());
    }

    let db_file = match db_path {
        Some(p) => p.to_string(),
        None => {
            let config = crate::shared::config::load_config()?;
            crate::shared::config::get_database_path(&config)?
                .to_string_lossy()
                .to_string()
        }
    };

    if let Some(parent) = std::path::Path::new(&db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(&db_file).is_absolute() {
        std::path::PathBuf::from(&db_file)
    } else {
        std::env::current_dir()?.join(&db_file)
    };
    // Windows: нормализуем разделители и добавляем ведущий слэш
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;

    // Соседний вызов мог успеть первым — это не ошибка
    let _ = DB_CONN.set(conn);
    Ok(())
}

/// Глобальное соединение. Паника до initialize_database — ошибка программиста.
pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("database is not initialized, call initialize_database first")
}

/// Идемпотентное создание схемы
async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS a001_influencer (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            platform TEXT,
            platform_account_id TEXT NOT NULL DEFAULT '',
            follower_count INTEGER NOT NULL DEFAULT 0,
            contact TEXT,
            region TEXT,
            bd_owner TEXT,
            tags TEXT NOT NULL DEFAULT '[]',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a002_product (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            sku TEXT NOT NULL DEFAULT '',
            unit_price REAL NOT NULL DEFAULT 0,
            commission_rate REAL NOT NULL DEFAULT 0,
            sample_available INTEGER NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a003_cooperation_plan (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            product_id TEXT,
            cooperation_type TEXT,
            fee_amount REAL NOT NULL DEFAULT 0,
            deliverable TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a004_fulfillment_record (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            influencer_id TEXT,
            product_id TEXT,
            plan_id TEXT,
            stage TEXT NOT NULL DEFAULT 'pending',
            priority TEXT NOT NULL DEFAULT 'medium',
            remark TEXT,
            tracking_number TEXT,
            received_at TEXT,
            video_url TEXT,
            video_id TEXT,
            ad_code TEXT,
            ad_roi REAL,
            tags TEXT NOT NULL DEFAULT '[]',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a005_tag (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            description TEXT,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sys_user (
            id TEXT PRIMARY KEY NOT NULL,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            full_name TEXT,
            is_admin INTEGER NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sys_refresh_token (
            token_hash TEXT PRIMARY KEY NOT NULL,
            user_id TEXT NOT NULL,
            expires_at TEXT NOT NULL,
            created_at TEXT
        );
        "#,
    ];

    for sql in statements {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}
