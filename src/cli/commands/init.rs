use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::store::TimecardStore;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// Creates the config directory and file (skipped in test mode), then the
/// database with all pending migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rTimecard…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", db_path);

    let store = SqliteStore::open(&db_path)?;

    if let Err(e) = store.record("init", &db_path, "database initialized") {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(format!("Database initialized at {}", db_path));
    Ok(())
}
