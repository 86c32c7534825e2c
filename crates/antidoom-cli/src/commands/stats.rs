use antidoom_core::{Config, DailyStore, Database, SystemClock};
use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's counters and notes
    Today,
    /// Counters and notes for a given date
    Day {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = Database::open()?;
    let store = DailyStore::with_namespace(db, SystemClock, config.storage.namespace);

    let record = match action {
        StatsAction::Today => store.load(),
        StatsAction::Day { date } => store.load_for(date),
    };
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
