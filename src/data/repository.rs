use {
    crate::models::{Record, RecordId},
    anyhow::Result,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Abstract interface for a page's record list.
/// The in-memory version never fails; a remote one would.
pub trait Repository<T: Record> {
    /// Records in insertion order.
    fn list(&self) -> Result<Vec<T>>;
    /// Appends one record built from `draft` and returns it.
    fn add(&mut self, draft: T::Draft) -> Result<T>;
}

/// Vec-backed repository. Lost when dropped.
#[derive(Debug, Clone)]
pub struct MemoryRepository<T> {
    items: Vec<T>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled by adding `drafts` in order.
    pub fn seeded(drafts: impl IntoIterator<Item = T::Draft>) -> Self {
        let mut repo = Self::new();
        for draft in drafts {
            repo.push(draft);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Next id is `len + 1`. Collides after a removal, but nothing removes.
    fn next_id(&self) -> RecordId {
        self.items.len() as RecordId + 1
    }

    fn push(&mut self, draft: T::Draft) -> &T {
        let record = T::from_draft(self.next_id(), draft);
        self.items.push(record);
        &self.items[self.items.len() - 1]
    }
}

impl<T: Record> Repository<T> for MemoryRepository<T> {
    fn list(&self) -> Result<Vec<T>> {
        Ok(self.items.clone())
    }

    fn add(&mut self, draft: T::Draft) -> Result<T> {
        let record = self.push(draft).clone();
        #[cfg(debug_assertions)]
        if DF.log_repository {
            log::info!(
                "Repository add: id {} ({} records now)",
                record.id(),
                self.items.len()
            );
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEMO;
    use crate::models::{Robot, RobotDraft};

    fn draft(name: &str) -> RobotDraft {
        RobotDraft {
            name: name.into(),
            description: "test".into(),
            download_link: None,
            version: "1.0".into(),
            monthly_price: 10,
        }
    }

    #[test]
    fn seeding_assigns_sequential_ids() {
        let repo: MemoryRepository<Robot> =
            MemoryRepository::seeded(DEMO.robots.iter().map(RobotDraft::from));
        let ids: Vec<_> = repo.list().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(repo.list().unwrap()[0].name, "Gold Trader Pro");
    }

    #[test]
    fn add_appends_exactly_one_record_at_the_end() {
        let mut repo: MemoryRepository<Robot> =
            MemoryRepository::seeded(DEMO.robots.iter().map(RobotDraft::from));
        let before = repo.len();
        let added = repo.add(draft("Breakout Bot")).unwrap();
        let list = repo.list().unwrap();
        assert_eq!(list.len(), before + 1);
        assert_eq!(added.id, 4);
        assert_eq!(list.last(), Some(&added));
    }

    #[test]
    fn empty_repository_starts_ids_at_one() {
        let mut repo: MemoryRepository<Robot> = MemoryRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.add(draft("First")).unwrap().id, 1);
    }

    #[test]
    fn usable_behind_a_trait_object() {
        let mut repo: Box<dyn Repository<Robot>> = Box::new(MemoryRepository::new());
        repo.add(draft("A")).unwrap();
        repo.add(draft("B")).unwrap();
        let names: Vec<_> = repo.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
