use actix_web::{web, get, HttpResponse};
use humantime::format_duration;
use chrono::Utc;
use parking_lot::RwLock;
use std::time::Duration;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};
use serde::Serialize;
use crate::{constants::START_TIME, db::store::StoreCounts, errors::AppError, AppState};

const CACHE_TTL_SECS: i64 = 5;

#[derive(Serialize, Clone, Debug)]
struct SystemInfo {
    os: String,
    kernel: String,
    hostname: String,
    cpu_count: usize,
    memory_total: String,
}

#[derive(Clone, Debug)]
struct HostSnapshot {
    memory_usage: String,
    system: SystemInfo,
}

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: String,
    memory_usage: String,
    records: StoreCounts,
    rate_limited_emails: usize,
    system: SystemInfo,
}

/// Host metrics reused between health checks. Record counts are never cached.
#[derive(Default)]
pub struct HealthCache {
    snapshot: RwLock<Option<(i64, HostSnapshot)>>,
}

impl HealthCache {
    fn fresh(&self, now: i64) -> Option<HostSnapshot> {
        self.snapshot
            .read()
            .as_ref()
            .filter(|(taken_at, _)| now - taken_at <= CACHE_TTL_SECS)
            .map(|(_, snapshot)| snapshot.clone())
    }

    fn store(&self, now: i64, snapshot: HostSnapshot) {
        *self.snapshot.write() = Some((now, snapshot));
    }
}

fn collect_host_snapshot() -> HostSnapshot {
    let mut sys = System::new();
    sys.refresh_memory();

    let memory_usage = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| {
            sys.refresh_processes_specifics(
                ProcessesToUpdate::Some(&[pid]),
                true,
                ProcessRefreshKind::nothing().with_memory(),
            );
            sys.process(pid)
                .map(|p| format!("{:.2} MB", p.memory() as f64 / 1024.0 / 1024.0))
        })
        .unwrap_or_else(|| "Unknown".to_string());

    HostSnapshot {
        memory_usage,
        system: SystemInfo {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
            cpu_count: num_cpus::get(),
            memory_total: format!("{:.2} GB", sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0),
        },
    }
}

/// Health report for this instance's store. Host metrics are refreshed at
/// most every few seconds, off the worker thread.
#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let now_utc = Utc::now();
    let now = now_utc.timestamp();

    let host = match state.health_cache.fresh(now) {
        Some(snapshot) => snapshot,
        None => {
            let snapshot = web::block(collect_host_snapshot)
                .await
                .map_err(|e| AppError::InternalError(format!("Host snapshot failed: {}", e)))?;
            state.health_cache.store(now, snapshot.clone());
            snapshot
        }
    };

    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    Ok(HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        memory_usage: host.memory_usage,
        records: state.store.counts(),
        rate_limited_emails: state.contact_limiter.as_ref().map_or(0, |l| l.tracked_keys()),
        system: host.system,
    }))
}
