use crate::cli::parser::{Commands, RosaryAction};
use crate::config::Config;
use crate::core::RosaryLog;
use crate::core::rosary::format_prayer;
use crate::errors::AppResult;
use crate::ui::messages::{empty, header, success};

use super::{effective_limit, open_store};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rosary { action } = cmd {
        let log = RosaryLog::with_system_clock(open_store(cfg)?);

        match action {
            RosaryAction::Log {
                date,
                mysteries,
                notes,
            } => {
                let id = log.log(date.as_deref(), mysteries.as_deref(), notes.as_deref())?;
                if let Some(prayer) = log.get(id)? {
                    success(format!(
                        "Logged Rosary prayer #{} for {}",
                        id, prayer.prayer_date
                    ));
                }
            }

            RosaryAction::History { limit } => {
                let limit = effective_limit(*limit, cfg);
                let prayers = log.history(limit)?;

                header("Rosary prayer history", &cfg.separator_char);

                if prayers.is_empty() {
                    empty("No Rosary prayers logged.");
                }
                for p in &prayers {
                    println!("{}", format_prayer(p));
                }
            }
        }
    }

    Ok(())
}
