mod demo;

use std::{io::IsTerminal, time::Duration};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use platform_db::{DEFAULT_DATABASE_URL, DatabaseSettings, Directory};
use platform_obs::{ObsConfig, init_tracing};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "employee-directory", version, about = "Employee directory store")]
struct Cli {
    #[command(flatten)]
    database: DatabaseArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug)]
struct DatabaseArgs {
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,
    #[arg(long, env = "DATABASE_CONNECT_TIMEOUT_SECS", default_value_t = 8)]
    connect_timeout_secs: u64,
    #[arg(long, help = "Log every SQL statement")]
    log_sql: bool,
}

impl From<DatabaseArgs> for DatabaseSettings {
    fn from(value: DatabaseArgs) -> Self {
        DatabaseSettings {
            url: value.database_url,
            max_connections: value.max_connections,
            connect_timeout: Duration::from_secs(value.connect_timeout_secs),
            sqlx_logging: value.log_sql,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply migrations, then run the scripted create/update/query sequence.
    Demo,
    /// Manage the database schema.
    #[command(subcommand)]
    Migrate(MigrateCommand),
}

#[derive(Subcommand, Debug)]
enum MigrateCommand {
    /// Apply pending migrations.
    Up,
    /// Rollback the most recent migration.
    Down,
    /// Rollback every migration.
    Reset,
    /// List pending migrations.
    Status,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing(ObsConfig {
        ansi: std::io::stderr().is_terminal(),
        ..ObsConfig::default()
    })?;
    let cli = Cli::parse();
    let settings = DatabaseSettings::from(cli.database);

    let directory = Directory::open(&settings)
        .await
        .context("opening directory database")?;
    let outcome = match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(&directory).await,
        Command::Migrate(action) => migrate(&directory, action).await,
    };
    // Release the pool before reporting, whichever way the command went.
    let closed = directory.close().await;
    outcome?;
    closed.context("closing directory database")?;
    Ok(())
}

async fn run_demo(directory: &Directory) -> Result<()> {
    Migrator::up(directory.connection(), None)
        .await
        .context("applying migrations")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let records = demo::run(directory, Utc::now(), &mut out).await?;
    info!(
        role_id = records.role_id,
        employee_id = records.employee_id,
        task_id = records.task_id,
        notification_id = records.notification_id,
        report_id = records.report_id,
        "demo sequence finished"
    );
    Ok(())
}

async fn migrate(directory: &Directory, action: MigrateCommand) -> Result<()> {
    let db = directory.connection();
    match action {
        MigrateCommand::Up => {
            Migrator::up(db, None).await?;
            info!("database migrations applied");
        }
        MigrateCommand::Down => {
            Migrator::down(db, Some(1)).await?;
            info!("most recent migration rolled back");
        }
        MigrateCommand::Reset => {
            Migrator::reset(db).await?;
            info!("all migrations rolled back");
        }
        MigrateCommand::Status => {
            let pending = Migrator::get_pending_migrations(db).await?;
            if pending.is_empty() {
                println!("schema is up to date");
            }
            for step in &pending {
                println!("pending: {}", step.name());
            }
        }
    }
    Ok(())
}
