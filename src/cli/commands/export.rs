use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::StoreProvider;
use crate::errors::AppResult;
use crate::export::ExportLogic;

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        what,
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let rows = ExportLogic::export(&store, *what, *format, file, *force)?;

        if rows > 0 {
            let conn = store.acquire()?;
            audit(
                &conn,
                "export",
                what.as_str(),
                &format!("{} rows exported as {} to {}", rows, format.as_str(), file),
            );
        }
    }

    Ok(())
}
