use crate::cli::parser::{BibleAction, Commands};
use crate::config::Config;
use crate::core::BibleLog;
use crate::core::bible::format_reading;
use crate::errors::AppResult;
use crate::ui::messages::{empty, header, success};

use super::{effective_limit, open_store};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bible { action } = cmd {
        let log = BibleLog::with_system_clock(open_store(cfg)?);

        match action {
            BibleAction::Add {
                book,
                chapter,
                start_verse,
                end_verse,
                notes,
            } => {
                let id = log.add(
                    book,
                    *chapter,
                    *start_verse,
                    *end_verse,
                    notes.as_deref(),
                )?;
                if let Some(reading) = log.get(id)? {
                    success(format!(
                        "Added reading #{}: {}",
                        id,
                        reading.reference()
                    ));
                }
            }

            BibleAction::List { limit } => {
                let limit = effective_limit(*limit, cfg);
                let readings = log.list(limit)?;

                header(
                    match limit {
                        Some(n) => format!("Latest {} Bible readings", n),
                        None => "All Bible readings".to_string(),
                    },
                    &cfg.separator_char,
                );

                if readings.is_empty() {
                    empty("No Bible readings found.");
                }
                for r in &readings {
                    println!("{}", format_reading(r));
                }
            }
        }
    }

    Ok(())
}
