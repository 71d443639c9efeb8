use crate::cli::parser::{Commands, SinsAction};
use crate::config::Config;
use crate::core::sins::format_sin;
use crate::core::{SinFilter, SinLog};
use crate::errors::{AppError, AppResult};
use crate::models::ConfessOutcome;
use crate::ui::messages::{empty, header, success};
use crate::utils::colors::{color_for_confessed, paint};

use super::{effective_limit, open_store};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sins { action } = cmd {
        let log = SinLog::with_system_clock(open_store(cfg)?);

        match action {
            SinsAction::Add {
                description,
                date,
                notes,
            } => {
                let id = log.add(description, date.as_deref(), notes.as_deref())?;
                success(format!("Added sin entry #{}: '{}'", id, description));
            }

            SinsAction::Confess { id, date } => match log.mark_confessed(*id, date.as_deref())? {
                ConfessOutcome::Confessed { date } => {
                    success(format!("Sin entry #{} marked as confessed on {}.", id, date));
                }
                ConfessOutcome::NotFound => {
                    return Err(AppError::NotFound(format!("Sin entry #{}", id)));
                }
                ConfessOutcome::AlreadyConfessed { on } => {
                    return Err(AppError::InvalidTransition(format!(
                        "sin entry #{} was already confessed on {}",
                        id,
                        on.as_deref().unwrap_or("an unknown date")
                    )));
                }
            },

            SinsAction::List {
                confessed,
                unconfessed,
                limit,
            } => {
                let filter = if *confessed {
                    SinFilter::Confessed
                } else if *unconfessed {
                    SinFilter::Unconfessed
                } else {
                    SinFilter::All
                };
                let entries = log.list(filter, effective_limit(*limit, cfg))?;

                let (title, none_msg) = match filter {
                    SinFilter::All => ("All sin entries", "No sin entries found."),
                    SinFilter::Confessed => {
                        ("Confessed sin entries", "No confessed sin entries found.")
                    }
                    SinFilter::Unconfessed => (
                        "Unconfessed sin entries",
                        "No unconfessed sin entries found.",
                    ),
                };
                header(title, &cfg.separator_char);

                if entries.is_empty() {
                    empty(none_msg);
                }
                for e in &entries {
                    println!("{}", paint(&format_sin(e), color_for_confessed(e.confessed)));
                }
            }
        }
    }

    Ok(())
}
