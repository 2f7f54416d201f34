pub mod config;
pub mod context;
pub mod data;
pub mod review;
pub mod stats;

use chrono::{DateTime, Local};
use vocab_core::{Config, EpochMillis, Library, ReviewSession, SnapshotDb};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Wall clock in epoch milliseconds. The only place the CLI reads time.
pub fn now_millis() -> EpochMillis {
    chrono::Utc::now().timestamp_millis()
}

/// Local, human-readable rendering of an epoch-millis timestamp.
pub fn format_time(ms: EpochMillis) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ms.to_string())
}

/// Open database plus loaded configuration, shared by the data commands.
pub struct App {
    pub config: Config,
    pub db: SnapshotDb,
}

impl App {
    pub fn open(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let db = SnapshotDb::open(&config)?;
        Ok(Self { config, db })
    }

    /// Stored library, or an error telling the user to import first.
    pub fn library(&self) -> Result<Library, Box<dyn std::error::Error>> {
        self.db
            .load_library()?
            .ok_or_else(|| "no words imported yet; run `vocab-cli import <FILE>` first".into())
    }

    pub fn session(&self) -> Result<ReviewSession, Box<dyn std::error::Error>> {
        Ok(self.db.load_session()?)
    }

    pub fn save(&self, library: &Library, session: &ReviewSession) -> CliResult {
        self.db.save_library(library)?;
        self.db.save_session(session)?;
        Ok(())
    }
}
