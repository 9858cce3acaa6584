use fetcharr_types::Want;

use super::Database;
use anyhow::Result;

impl Database {
    pub fn save_want(&self, want: &Want) -> Result<()> {
        let key = want.key();
        self.db.insert(
            format!("want-{key}"),
            serde_json::to_string(want)?.as_bytes(),
        )?;
        if let Some(torrent_id) = want.snatched_torrent_id() {
            self.db
                .insert(format!("active-{}", torrent_id), key.as_bytes())?;
        }
        Ok(())
    }

    pub fn delete_want(&self, key: &str) -> Result<()> {
        if let Some(want) = self.get_want(key)? {
            if let Some(torrent_id) = want.snatched_torrent_id() {
                self.db.remove(format!("active-{}", torrent_id))?;
            }
        }
        self.db.remove(format!("want-{key}"))?;
        Ok(())
    }

    /// Drops the torrent-id index entry; the caller saves the want with its
    /// new state afterwards.
    pub fn clear_active(&self, torrent_id: i64) -> Result<()> {
        self.db.remove(format!("active-{}", torrent_id))?;
        Ok(())
    }

    pub fn exists_want(&self, key: &str) -> Result<bool> {
        Ok(self.db.contains_key(format!("want-{key}"))?)
    }

    pub fn get_want(&self, key: &str) -> Result<Option<Want>> {
        self.get_serde("want", key)
    }

    pub fn get_want_from_torrent_id(&self, id: i64) -> Result<Option<Want>> {
        let key = match self.db.get(format!("active-{}", id))? {
            None => return Ok(None),
            Some(x) => String::from_utf8(x.to_vec())?,
        };
        self.get_want(&key)
    }

    pub fn list_want(&self) -> Result<Vec<Want>> {
        self.list_serde("want-")
    }
}
