use crate::config::Config;
use crate::db::log;
use crate::db::pool::{FileStore, StoreProvider};
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and every table
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rFaithlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_path.display());

    let store = FileStore::new(&db_path);
    store.ensure_schema()?;

    println!("✅ Database initialized at {}", db_path.display());

    let conn = store.acquire()?;
    log::audit(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", db_path.display()),
    );

    println!("🎉 rFaithlog initialization completed!");
    Ok(())
}
