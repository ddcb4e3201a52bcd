//! Named templates over a store: list, look up, upsert and remove.

use crate::store::{StoreError, TemplateStore};
use crate::template::SavedTemplate;
use tracing::debug;

pub struct TemplateLibrary<S> {
    store: S,
}

impl<S: TemplateStore> TemplateLibrary<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list(&self) -> Result<Vec<SavedTemplate>, StoreError> {
        self.store.load()
    }

    pub fn get(&self, id: &str) -> Result<Option<SavedTemplate>, StoreError> {
        Ok(self.list()?.into_iter().find(|template| template.id == id))
    }

    /// Look up by id, then by exact name
    pub fn find(&self, key: &str) -> Result<Option<SavedTemplate>, StoreError> {
        let templates = self.list()?;
        let by_id = templates.iter().position(|template| template.id == key);
        let index = by_id.or_else(|| templates.iter().position(|template| template.name == key));

        Ok(index.map(|index| templates[index].clone()))
    }

    /// Insert, or replace the stored template with the same id. The last
    /// write wins.
    pub fn upsert(&self, template: SavedTemplate) -> Result<(), StoreError> {
        let mut templates = self.list()?;

        match templates.iter_mut().find(|existing| existing.id == template.id) {
            Some(existing) => {
                debug!(id = %template.id, "Replacing template");
                *existing = template;
            }
            None => {
                debug!(id = %template.id, "Adding template");
                templates.push(template);
            }
        }

        self.store.save(&templates)
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut templates = self.list()?;
        let before = templates.len();
        templates.retain(|template| template.id != id);

        if templates.len() == before {
            return Ok(false);
        }

        self.store.save(&templates)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use mailcraft_blocks::{Block, BlockType, GlobalSettings};

    fn library() -> TemplateLibrary<MemoryStore> {
        TemplateLibrary::new(MemoryStore::new())
    }

    #[test]
    fn test_upsert_adds_then_replaces() {
        let library = library();
        let template = SavedTemplate::new("حراج", Vec::new(), GlobalSettings::default());
        library.upsert(template.clone()).unwrap();

        let revised = template.revise(vec![Block::new(BlockType::Footer)], GlobalSettings::default());
        library.upsert(revised.clone()).unwrap();

        let templates = library.list().unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0], revised);
    }

    #[test]
    fn test_upsert_keeps_order() {
        let library = library();
        let first = SavedTemplate::new("اول", Vec::new(), GlobalSettings::default());
        let second = SavedTemplate::new("دوم", Vec::new(), GlobalSettings::default());
        library.upsert(first.clone()).unwrap();
        library.upsert(second.clone()).unwrap();

        library.upsert(first.revise(Vec::new(), GlobalSettings::default())).unwrap();

        let names: Vec<String> = library.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["اول", "دوم"]);
    }

    #[test]
    fn test_find_by_id_or_name() {
        let library = library();
        let template = SavedTemplate::new("خبرنامه", Vec::new(), GlobalSettings::default());
        library.upsert(template.clone()).unwrap();

        assert_eq!(library.find(&template.id).unwrap(), Some(template.clone()));
        assert_eq!(library.find("خبرنامه").unwrap(), Some(template.clone()));
        assert_eq!(library.get("خبرنامه").unwrap(), None);
        assert_eq!(library.find("missing").unwrap(), None);
    }

    #[test]
    fn test_remove() {
        let library = library();
        let template = SavedTemplate::new("موقت", Vec::new(), GlobalSettings::default());
        library.upsert(template.clone()).unwrap();

        assert!(library.remove(&template.id).unwrap());
        assert!(!library.remove(&template.id).unwrap());
        assert!(library.list().unwrap().is_empty());
    }
}
