//! Command-line interface
//!
//! Reads a catalog snapshot file, runs the engine and renders the result
//! as an `ApiResponse` JSON envelope.

use chrono::Utc;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{CatalogPayload, MembershipTier, Role};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::catalog::{CatalogSnapshot, MappedCatalog, Rejected};
use crate::core::EngineConfig;
use crate::eligibility::{Decision, EligibilityEngine};
use crate::membership::{Quote, TierProgress};
use crate::models::{InstrumentKind, Subject};
use crate::session::SessionContext;

#[derive(Debug, Parser)]
#[command(name = "discount-engine")]
#[command(about = "Resolve coupon and bonus-service eligibility for a booking")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a catalog snapshot for one subject
    Evaluate {
        /// Catalog snapshot JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Subject role (tourist, agency, host)
        #[arg(long)]
        role: Role,

        /// Lifetime spend; omit for a subject without membership
        #[arg(long)]
        total_spent: Option<u64>,

        /// Tier reported by the backend, used as a floor
        #[arg(long)]
        tier: Option<MembershipTier>,

        /// Base price of the booking
        #[arg(long)]
        price: u64,

        /// Evaluation time in Unix millis (defaults to the current time)
        #[arg(long)]
        now: Option<i64>,
    },

    /// Validate every instrument in a catalog snapshot
    Validate {
        /// Catalog snapshot JSON file
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Show the membership tier for a lifetime spend
    Tier {
        /// Lifetime spend
        #[arg(long)]
        total_spent: u64,
    },
}

/// Output of `evaluate`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub subject: Subject,
    pub base_price: u64,
    pub now: i64,
    pub snapshot_age_ms: i64,
    pub decisions: Vec<Decision>,
    pub best_coupon: Option<Decision>,
    pub quote: Quote,
    pub rejected: Vec<Rejected>,
}

/// One accepted instrument in a `validate` run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedInstrument {
    pub instrument_id: i64,
    pub kind: InstrumentKind,
    pub audience: String,
}

/// Output of `validate`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub accepted: Vec<AcceptedInstrument>,
    pub rejected: Vec<Rejected>,
}

/// Output of `tier`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierReport {
    pub total_spent: u64,
    pub tier: MembershipTier,
    pub member_discount_percent: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<TierProgress>,
}

/// Run a command and render the success envelope
pub fn execute(command: &Commands, config: &EngineConfig) -> AppResult<String> {
    match command {
        Commands::Evaluate {
            catalog,
            role,
            total_spent,
            tier,
            price,
            now,
        } => {
            let now = now.unwrap_or_else(|| Utc::now().timestamp_millis());
            let mut session = SessionContext::new(*role);
            if let Some(spent) = total_spent {
                session.observe_total_spent(*spent);
            }
            if let Some(tier) = tier {
                session.observe_tier(*tier);
            }
            let report = evaluate(config, load_catalog(catalog, now)?, &session, *price, now);
            render(ApiResponse::success(report))
        }
        Commands::Validate { catalog } => {
            let report = validate(load_catalog(catalog, Utc::now().timestamp_millis())?);
            let message = match report.rejected.len() {
                0 => "OK".to_string(),
                n => format!("{n} instrument(s) rejected"),
            };
            render(ApiResponse::success_with_message(message, report))
        }
        Commands::Tier { total_spent } => render(ApiResponse::success(tier(config, *total_spent))),
    }
}

/// Render an error envelope
pub fn render_error(err: &AppError) -> String {
    serde_json::to_string_pretty(&ApiResponse::error(err))
        .unwrap_or_else(|_| format!(r#"{{"code":{},"message":"{}"}}"#, err.code.code(), err.code))
}

pub fn evaluate(
    config: &EngineConfig,
    mapped: MappedCatalog,
    session: &SessionContext,
    base_price: u64,
    now: i64,
) -> EvaluationReport {
    let engine = EligibilityEngine::new(config);
    let subject = session.subject(&config.thresholds);
    let snapshot = &mapped.snapshot;

    let decisions = engine.evaluate(&subject, snapshot, base_price, now);
    let best_coupon = engine.best_coupon(&subject, snapshot, base_price, now);
    let quote = engine.quote(&subject, snapshot, base_price, now);

    info!(
        role = %subject.role,
        tier = %subject.tier,
        decisions = decisions.len(),
        payable = quote.payable,
        "Evaluation complete"
    );

    EvaluationReport {
        subject,
        base_price,
        now,
        snapshot_age_ms: now.saturating_sub(snapshot.fetched_at()),
        decisions,
        best_coupon,
        quote,
        rejected: mapped.rejected,
    }
}

pub fn validate(mapped: MappedCatalog) -> ValidationReport {
    let accepted = mapped
        .snapshot
        .instruments()
        .iter()
        .map(|instrument| AcceptedInstrument {
            instrument_id: instrument.id(),
            kind: instrument.kind(),
            audience: instrument.audience().to_string(),
        })
        .collect();

    ValidationReport {
        accepted,
        rejected: mapped.rejected,
    }
}

pub fn tier(config: &EngineConfig, total_spent: u64) -> TierReport {
    let tier = config.thresholds.tier_for(total_spent);
    TierReport {
        total_spent,
        tier,
        member_discount_percent: config.member_discounts.rate_for(tier),
        progress: config.thresholds.progress(total_spent),
    }
}

/// Read and map a catalog snapshot file
pub fn load_catalog(path: &Path, now: i64) -> AppResult<MappedCatalog> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_message(ErrorCode::FileReadFailed, format!("cannot read catalog: {e}"))
            .with_detail("path", path.display().to_string())
    })?;
    let payload: CatalogPayload = serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_format(format!("catalog is not valid JSON: {e}"))
            .with_detail("path", path.display().to_string())
    })?;
    CatalogSnapshot::from_payload(payload, now)
}

fn render<T: Serialize>(response: ApiResponse<T>) -> AppResult<String> {
    serde_json::to_string_pretty(&response)
        .map_err(|e| AppError::internal(format!("failed to render response: {e}")))
}
