use intimation_desk::schema::ids;
use intimation_desk::{Confirm, FileRecord};
use std::io::{self, BufRead, Write};

/// Asks on the terminal before a delete.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, record: &FileRecord) -> bool {
        let name = record.text(ids::DEATH_PERSON_NAME);
        print!(
            "Are you sure you want to delete file {} ({})? [y/N] ",
            record.id(),
            if name.is_empty() { "unnamed" } else { name }
        );
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
