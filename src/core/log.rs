use crate::errors::AppResult;
use ansi_term::Colour;
use rusqlite::Connection;
use unicode_width::UnicodeWidthStr;

/// Longest `operation (target)` column before truncation.
const OP_MAX_WIDTH: usize = 30;
/// Messages wrap at this width; continuation lines are indented under the first.
const MESSAGE_WIDTH: usize = 60;

/// One row of the internal `log` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "confess" => Colour::Cyan,
        "vacuum" => Colour::Yellow,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(conn: &Connection) -> AppResult<Vec<LogRow>> {
        let mut stmt = conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get("date")?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(raw_date);

            Ok(LogRow {
                id: row.get("id")?,
                date,
                operation: row.get("operation")?,
                target: row.get::<_, Option<String>>("target")?.unwrap_or_default(),
                message: row.get("message")?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = Self::load(conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.width()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };

            // truncate on visible width, then color only the operation word
            let visible = if op_target.width() > OP_MAX_WIDTH {
                let mut s: String = op_target.chars().take(OP_MAX_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };
            let padding = " ".repeat(OP_MAX_WIDTH.saturating_sub(visible.width()));

            let color = color_for_operation(&e.operation);
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let indent = " ".repeat(id_w + 2 + date_w + 3 + OP_MAX_WIDTH + 4);
            let lines = textwrap::wrap(&e.message, MESSAGE_WIDTH);
            let separator = format!("\n{indent}");
            let message = lines.join(separator.as_str());

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
