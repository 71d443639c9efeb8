use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::StoreProvider;
use crate::errors::AppResult;

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = open_store(cfg)?;
        let conn = store.acquire()?;
        LogLogic::print_log(&conn)?;
    }

    Ok(())
}
