//! Generic keyed in-memory store

use std::collections::HashMap;

use crate::domain::entities::Identifiable;

/// A keyed store for one entity type.
///
/// Deliberately dumb: upsert, lookup, removal, and predicate queries, with
/// no entity-specific logic. Iteration order is not guaranteed.
pub struct MemoryRepository<T: Identifiable> {
    items: HashMap<T::Id, T>,
}

impl<T: Identifiable> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identifiable> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Upsert by identifier; idempotent for an identical id.
    pub fn save(&mut self, entity: T) -> &T {
        let id = entity.id();
        self.items.insert(id, entity);
        &self.items[&id]
    }

    /// Absence is a normal outcome, not an error.
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    /// The single mutation door: there is exactly one canonical instance per
    /// identity, and callers edit it in place.
    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.get_mut(id)
    }

    /// Remove if present; reports whether anything was removed.
    pub fn delete(&mut self, id: &T::Id) -> bool {
        self.items.remove(id).is_some()
    }

    pub fn list(&self) -> Vec<&T> {
        self.items.values().collect()
    }

    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<&T> {
        self.items.values().filter(|item| predicate(item)).collect()
    }

    pub fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.values().find(|item| predicate(item))
    }

    /// First entity whose accessed field equals `value`. Multi-field
    /// conjunctions compose as ordinary predicates via `find_first`.
    pub fn find_by_field<V: PartialEq + ?Sized>(
        &self,
        accessor: impl Fn(&T) -> &V,
        value: &V,
    ) -> Option<&T> {
        self.find_first(|item| accessor(item) == value)
    }

    /// All entities whose accessed field equals `value`.
    pub fn filter_by_field<V: PartialEq + ?Sized>(
        &self,
        accessor: impl Fn(&T) -> &V,
        value: &V,
    ) -> Vec<&T> {
        self.filter(|item| accessor(item) == value)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.values_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Amenity;

    #[test]
    fn test_save_then_get() {
        let mut repo = MemoryRepository::new();
        let amenity = Amenity::new("Wifi").unwrap();
        let id = amenity.id;
        repo.save(amenity);

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(&id).map(|a| a.name.as_str()), Some("Wifi"));
    }

    #[test]
    fn test_save_upserts_same_id() {
        let mut repo = MemoryRepository::new();
        let amenity = Amenity::new("Wifi").unwrap();
        let id = amenity.id;
        repo.save(amenity.clone());

        let mut renamed = amenity;
        renamed.rename("Fast Wifi").unwrap();
        repo.save(renamed);

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(&id).map(|a| a.name.as_str()), Some("Fast Wifi"));
    }

    #[test]
    fn test_delete_reports_presence() {
        let mut repo = MemoryRepository::new();
        let amenity = Amenity::new("Pool").unwrap();
        let id = amenity.id;
        repo.save(amenity);

        assert!(repo.delete(&id));
        assert!(!repo.delete(&id));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_filter_and_find_first() {
        let mut repo = MemoryRepository::new();
        repo.save(Amenity::new("Wifi").unwrap());
        repo.save(Amenity::new("Pool").unwrap());
        repo.save(Amenity::new("Parking").unwrap());

        let with_p = repo.filter(|a| a.name.starts_with('P'));
        assert_eq!(with_p.len(), 2);
        assert!(repo.find_first(|a| a.name == "Wifi").is_some());
        assert!(repo.find_first(|a| a.name == "Sauna").is_none());
    }

    #[test]
    fn test_find_by_field() {
        let mut repo = MemoryRepository::new();
        repo.save(Amenity::new("Wifi").unwrap());

        let found = repo.find_by_field(|a: &Amenity| a.name.as_str(), "Wifi");
        assert!(found.is_some());
        assert!(repo
            .find_by_field(|a: &Amenity| a.name.as_str(), "Sauna")
            .is_none());
    }

    #[test]
    fn test_filter_by_field_collects_all_matches() {
        let mut repo = MemoryRepository::new();
        repo.save(Amenity::new("Wifi").unwrap());
        repo.save(Amenity::new("Wifi").unwrap());
        repo.save(Amenity::new("Pool").unwrap());

        let wifi = repo.filter_by_field(|a: &Amenity| a.name.as_str(), "Wifi");
        assert_eq!(wifi.len(), 2);
    }

    #[test]
    fn test_clear_empties_the_store() {
        let mut repo = MemoryRepository::new();
        repo.save(Amenity::new("Wifi").unwrap());
        repo.clear();
        assert!(repo.is_empty());
        assert!(repo.list().is_empty());
    }
}
