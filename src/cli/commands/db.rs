use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::StoreProvider;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let store = open_store(cfg)?;
        let conn = store.acquire()?;

        //
        // 1) INFO
        //
        if *info {
            stats::print_db_info(&conn, &cfg.database_path().to_string_lossy())?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Checking database integrity…{}", CYAN, RESET);
            let report = stats::integrity_check(&conn)?;
            if report.len() == 1 && report[0] == "ok" {
                println!("{}✔ Database integrity OK.{}\n", GREEN, RESET);
            } else {
                println!("{}✖ Integrity problems found:{}", RED, RESET);
                for line in report {
                    println!("   {}", line);
                }
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            stats::vacuum(&conn)?;
            audit(&conn, "vacuum", "", "Database optimized");
            println!("{}✔ Database optimized.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
