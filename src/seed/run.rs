//! Seed command runner.

use anyhow::Context;
use seed_generator::RecordGenerator;
use seed_runner::{format_summary, write_json_report, SeedingRun, Supervisor};
use seed_store::{MemoryStore, Store, WriteError};
use seed_store_mysql::MySQLStore;
use seed_store_postgresql::PostgreSQLStore;
use std::sync::Arc;

use super::mask_connection_password;
use crate::config::{parse_duration, SeedArgs, SeedConfig};
use crate::SeedTarget;

/// Run the seed command against the selected store and print the summary.
///
/// Worker failures do not make this return an error; callers inspect
/// [`SeedingRun::is_success`] to decide the exit status.
pub async fn run_seed(target: SeedTarget) -> anyhow::Result<SeedingRun> {
    match target {
        SeedTarget::PostgreSQL {
            connection_string,
            args,
        } => {
            let config = resolve_config(&args)?;
            tracing::info!(
                "Seeding PostgreSQL table '{}' (connection: {})",
                config.table_name(),
                mask_connection_password(&connection_string)
            );

            let store = PostgreSQLStore::new(
                &connection_string,
                config.table_name(),
                config.pool_size(),
            )
            .await
            .context("Failed to connect to PostgreSQL")?;
            if args.recreate_table {
                store
                    .recreate_table()
                    .await
                    .with_context(|| format!("Failed to recreate table '{}'", config.table_name()))?;
            }

            let store = Arc::new(store);
            let run = seed_store(store.clone(), &config).await;
            match store.row_count().await {
                Ok(rows) => tracing::info!("Table '{}' now holds {} rows", config.table_name(), rows),
                Err(e) => tracing::warn!("Failed to count rows: {}", e),
            }
            finish(run, &args)
        }
        SeedTarget::MySQL {
            connection_string,
            args,
        } => {
            let config = resolve_config(&args)?;
            tracing::info!(
                "Seeding MySQL table '{}' (connection: {})",
                config.table_name(),
                mask_connection_password(&connection_string)
            );

            let store = MySQLStore::new(&connection_string, config.table_name(), config.pool_size())
                .await
                .context("Failed to connect to MySQL")?;
            if args.recreate_table {
                store
                    .recreate_table()
                    .await
                    .with_context(|| format!("Failed to recreate table '{}'", config.table_name()))?;
            }

            let store = Arc::new(store);
            let run = seed_store(store.clone(), &config).await;
            match store.row_count().await {
                Ok(rows) => tracing::info!("Table '{}' now holds {} rows", config.table_name(), rows),
                Err(e) => tracing::warn!("Failed to count rows: {}", e),
            }
            match Arc::try_unwrap(store) {
                Ok(store) => {
                    if let Err(e) = store.disconnect().await {
                        tracing::warn!("Failed to disconnect from MySQL: {}", e);
                    }
                }
                Err(_) => tracing::warn!("MySQL store still in use; skipping disconnect"),
            }
            finish(run, &args)
        }
        SeedTarget::Memory {
            insert_delay,
            fail_worker,
            fail_at,
            args,
        } => {
            let config = resolve_config(&args)?;
            tracing::info!("[DRY-RUN] Seeding the in-memory store");

            let mut store = MemoryStore::new();
            if let Some(delay) = insert_delay {
                let delay = parse_duration(&delay)
                    .with_context(|| format!("Invalid insert delay: {delay}"))?;
                store = store.with_insert_delay(delay);
            }
            if let Some(worker_id) = fail_worker {
                tracing::info!(
                    "[DRY-RUN] Worker {} will fail on insert {}",
                    worker_id,
                    fail_at
                );
                store = store.fail_insert(
                    worker_id,
                    fail_at,
                    WriteError::Store("injected failure".to_string()),
                );
            }

            let run = seed_store(Arc::new(store.clone()), &config).await;
            tracing::info!(
                "[DRY-RUN] Memory store holds {} rows",
                store.row_count().await
            );
            finish(run, &args)
        }
    }
}

/// Run one seeding pass of `config` against `store`.
pub async fn seed_store(store: Arc<dyn Store>, config: &SeedConfig) -> SeedingRun {
    tracing::info!(
        "Seeding {} records (seed={}, scope={:?})",
        config.total_records(),
        config.options().seed(),
        config.options().transaction_scope()
    );

    let generator = RecordGenerator::new(config.generator().clone());
    let supervisor = Supervisor::new(store, generator, config.options().clone());
    supervisor
        .seed(config.total_records(), config.worker_count())
        .await
}

fn resolve_config(args: &SeedArgs) -> anyhow::Result<SeedConfig> {
    args.load_settings()?
        .validate()
        .context("Invalid seeding configuration")
}

fn finish(run: SeedingRun, args: &SeedArgs) -> anyhow::Result<SeedingRun> {
    println!("{}", format_summary(&run));

    if let Some(path) = &args.report_json {
        write_json_report(&run, path)
            .with_context(|| format!("Failed to write JSON report to {path:?}"))?;
        tracing::info!("Wrote JSON report to {:?}", path);
    }

    Ok(run)
}
