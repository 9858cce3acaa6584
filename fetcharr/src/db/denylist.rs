use super::Database;
use anyhow::Result;

/// Content hashes we will never fetch again. Append-only; entries are
/// lowercase hex strings as reported by the download client.
impl Database {
    pub fn denylist_add(&self, hash: &str) -> Result<()> {
        self.db
            .insert(format!("denylist-{}", hash.to_lowercase()), &[][..])?;
        Ok(())
    }

    pub fn denylist_contains(&self, hash: &str) -> Result<bool> {
        Ok(self
            .db
            .contains_key(format!("denylist-{}", hash.to_lowercase()))?)
    }
}
