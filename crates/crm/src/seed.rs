//! Startup seeding from a CSV file.
//!
//! Expected columns, after a header row: `name, role, email, phone_number,
//! contacted`. Every row gets a fresh ID and goes through the repository, so
//! the usual validation and uniqueness rules apply.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crm_core::customer::{Customer, CustomerRole};
use crm_core::storage::CustomerRepository;

const COLUMNS: usize = 5;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed seed data: {0}")]
    Csv(#[from] csv::Error),
}

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
}

/// Parses customers from CSV data with a header row.
///
/// Rows with too few columns are skipped. Unparsable `role` values become
/// `0` and unparsable `contacted` values become `false`, both with a warning.
pub fn parse_customers<R: io::Read>(reader: R) -> Result<Vec<Customer>, SeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut customers = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = index + 2;

        if record.len() < COLUMNS {
            tracing::warn!(line, columns = record.len(), "Skipping short seed row");
            continue;
        }

        let role = record[1].parse::<i32>().unwrap_or_else(|err| {
            tracing::warn!(line, value = &record[1], error = %err, "Failed parsing role column");
            0
        });
        let contacted = parse_flag(&record[4]).unwrap_or_else(|| {
            tracing::warn!(line, value = &record[4], "Failed parsing contacted column");
            false
        });

        customers.push(
            Customer::new(
                &record[0],
                CustomerRole::from(role),
                &record[2],
                &record[3],
            )
            .with_contacted(contacted),
        );
    }

    Ok(customers)
}

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Creates each customer, logging and skipping the ones the repository rejects.
pub async fn seed_repository(repo: &dyn CustomerRepository, customers: &[Customer]) -> SeedReport {
    let mut report = SeedReport::default();

    for customer in customers {
        match repo.create_customer(customer).await {
            Ok(()) => report.created += 1,
            Err(err) => {
                tracing::warn!(email = %customer.email, error = %err, "Skipping seed customer");
                report.skipped += 1;
            }
        }
    }

    report
}

/// Reads `path` and seeds `repo` with its rows.
pub async fn seed_from_file(
    repo: &dyn CustomerRepository,
    path: &Path,
) -> Result<SeedReport, SeedError> {
    let data = tokio::fs::read(path).await.map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let customers = parse_customers(data.as_slice())?;
    let report = seed_repository(repo, &customers).await;

    tracing::info!(
        path = %path.display(),
        created = report.created,
        skipped = report.skipped,
        "Seeded customers"
    );

    Ok(report)
}
