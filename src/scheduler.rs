use crate::controller::calendar_age;
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};
use uuid::Uuid;

/// Every day at midnight, host local time.
/// Cron format: "second minute hour day month day_of_week"
const DAILY_AT_MIDNIGHT: &str = "0 0 0 * * *";

/// Shared, lock-free holder of the current age.
#[derive(Debug, Clone, Default)]
pub struct AgeCell(Arc<AtomicU32>);

impl AgeCell {
    pub fn new(age: u32) -> Self {
        Self(Arc::new(AtomicU32::new(age)))
    }

    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, age: u32) {
        self.0.store(age, Ordering::Relaxed);
    }

    /// Recompute from `birth_date` for `today` and store the result.
    pub fn refresh(&self, birth_date: NaiveDate, today: NaiveDate) -> u32 {
        let age = calendar_age(birth_date, today);
        let previous = self.0.swap(age, Ordering::Relaxed);
        if previous != age {
            info!("Age updated: {} -> {}", previous, age);
        }
        age
    }
}

/// Daily age recomputation task.
///
/// Created at startup, it refreshes the age immediately and then once per
/// day. It must be torn down with [`AgeRefresher::shutdown`].
pub struct AgeRefresher {
    scheduler: JobScheduler,
    job_id: Uuid,
    cell: AgeCell,
}

impl AgeRefresher {
    /// Refresh `cell` now and register the daily job.
    pub async fn start(birth_date: NaiveDate, cell: AgeCell) -> Result<Self> {
        let age = cell.refresh(birth_date, today());
        info!("Initial age computed: {}", age);

        let scheduler = JobScheduler::new().await?;

        let job_cell = cell.clone();
        // Cron expressions are UTC unless a timezone is given, and the age
        // follows the local calendar day
        let job = Job::new_async_tz(DAILY_AT_MIDNIGHT, Local, move |_uuid, _l| {
            let cell = job_cell.clone();
            Box::pin(async move {
                info!("⏰ Daily age refresh triggered");
                cell.refresh(birth_date, today());
            })
        })?;
        let job_id = scheduler.add(job).await?;

        scheduler.start().await?;
        info!("✓ Age refresher started (cron: {} local)", DAILY_AT_MIDNIGHT);

        Ok(Self {
            scheduler,
            job_id,
            cell,
        })
    }

    /// When the daily job fires next, in local time.
    pub async fn next_refresh(&mut self) -> Result<Option<DateTime<Local>>> {
        let next = self.scheduler.next_tick_for_job(self.job_id).await?;
        Ok(next.map(|tick| tick.with_timezone(&Local)))
    }

    pub fn cell(&self) -> &AgeCell {
        &self.cell
    }

    /// Cancel the daily job and stop the scheduler.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Err(e) = self.scheduler.shutdown().await {
            error!("Failed to stop age refresher: {}", e);
            return Err(e.into());
        }
        info!("✓ Age refresher stopped");
        Ok(())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
