// Sort Resolver - maps a sort keyword to an ordering

use crate::domain::job::Job;
use std::cmp::Ordering;

/// Field a job listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Recognized sort keywords
///
/// NOTE: `latest` sorts by creation time descending and `newest` ascending.
/// Clients depend on this mapping; keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Latest,
    Newest,
    AToZ,
    ZToA,
}

impl SortKey {
    /// Resolve a raw keyword. Absent or unrecognized keywords yield `None`
    /// (store's natural order).
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw? {
            "latest" => Some(SortKey::Latest),
            "newest" => Some(SortKey::Newest),
            "a-z" => Some(SortKey::AToZ),
            "z-a" => Some(SortKey::ZToA),
            _ => None,
        }
    }

    pub fn order(self) -> SortOrder {
        use SortDirection::*;
        use SortField::*;

        match self {
            SortKey::Latest => SortOrder::new(CreatedAt, Descending),
            SortKey::Newest => SortOrder::new(CreatedAt, Ascending),
            SortKey::AToZ => SortOrder::new(Position, Ascending),
            SortKey::ZToA => SortOrder::new(Position, Descending),
        }
    }
}

/// Ordering key + direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Resolve a raw sort keyword straight to an ordering
    pub fn resolve(raw: Option<&str>) -> Option<Self> {
        SortKey::parse(raw).map(SortKey::order)
    }

    /// Compare two jobs; ties on the key fall back to the id in the same direction.
    pub fn compare(&self, a: &Job, b: &Job) -> Ordering {
        let ordering = match self.field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::Position => a.position.cmp(&b.position),
        }
        .then_with(|| a.id.cmp(&b.id));

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.position.as_str()).collect()
    }

    fn job(id: &str, position: &str, created_at: i64) -> Job {
        Job::new(id, "alice", "Acme", position, created_at).unwrap()
    }

    #[test]
    fn test_keyword_mapping() {
        assert_eq!(
            SortOrder::resolve(Some("latest")),
            Some(SortOrder::new(SortField::CreatedAt, SortDirection::Descending))
        );
        assert_eq!(
            SortOrder::resolve(Some("newest")),
            Some(SortOrder::new(SortField::CreatedAt, SortDirection::Ascending))
        );
        assert_eq!(
            SortOrder::resolve(Some("a-z")),
            Some(SortOrder::new(SortField::Position, SortDirection::Ascending))
        );
        assert_eq!(
            SortOrder::resolve(Some("z-a")),
            Some(SortOrder::new(SortField::Position, SortDirection::Descending))
        );
    }

    #[test]
    fn test_unrecognized_keyword_is_natural_order() {
        assert_eq!(SortOrder::resolve(None), None);
        assert_eq!(SortOrder::resolve(Some("oldest")), None);
        assert_eq!(SortOrder::resolve(Some("A-Z")), None);
    }

    #[test]
    fn test_position_ordering() {
        let mut jobs = vec![job("1", "Banana", 0), job("2", "Apple", 0)];

        let order = SortOrder::resolve(Some("a-z")).unwrap();
        jobs.sort_by(|a, b| order.compare(a, b));
        assert_eq!(positions(&jobs), vec!["Apple", "Banana"]);

        let order = SortOrder::resolve(Some("z-a")).unwrap();
        jobs.sort_by(|a, b| order.compare(a, b));
        assert_eq!(positions(&jobs), vec!["Banana", "Apple"]);
    }

    #[test]
    fn test_latest_is_most_recent_first() {
        let mut jobs = vec![job("1", "Old", 1000), job("2", "New", 3000), job("3", "Mid", 2000)];

        let order = SortOrder::resolve(Some("latest")).unwrap();
        jobs.sort_by(|a, b| order.compare(a, b));
        assert_eq!(positions(&jobs), vec!["New", "Mid", "Old"]);

        let order = SortOrder::resolve(Some("newest")).unwrap();
        jobs.sort_by(|a, b| order.compare(a, b));
        assert_eq!(positions(&jobs), vec!["Old", "Mid", "New"]);
    }
}
