use chrono::{DateTime, Utc};

use crate::pkg::internal::adaptors::jobs::spec::{JobCache, JobRecord};

pub struct JobSelector<'a> {
    cache: &'a JobCache,
}

impl<'a> JobSelector<'a> {
    pub fn new(cache: &'a JobCache) -> Self {
        JobSelector { cache }
    }

    pub fn get_by_id(&self, id: &str) -> Option<&'a JobRecord> {
        self.cache.jobs.iter().find(|job| job.id == id)
    }

    pub fn get_all(&self) -> &'a [JobRecord] {
        &self.cache.jobs
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.cache.last_updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::adaptors::jobs::mutators::JobMutator;

    #[test]
    fn lookups_follow_the_cache() {
        let mut cache = JobCache::default();
        assert!(JobSelector::new(&cache).last_updated().is_none());

        JobMutator::new(&mut cache).set_jobs(vec![
            JobRecord { id: "a".into(), title: "Backend".into(), ..Default::default() },
            JobRecord { id: "b".into(), title: "Frontend".into(), ..Default::default() },
        ]);

        let selector = JobSelector::new(&cache);
        assert_eq!(selector.get_by_id("b").map(|j| j.title.as_str()), Some("Frontend"));
        assert!(selector.get_by_id("c").is_none());
        assert_eq!(selector.get_all().len(), 2);
        assert!(selector.last_updated().is_some());
    }
}
