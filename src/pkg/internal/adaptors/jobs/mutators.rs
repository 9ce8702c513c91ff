use chrono::Utc;

use crate::pkg::internal::adaptors::jobs::spec::{JobCache, JobRecord};

pub struct JobMutator<'a> {
    cache: &'a mut JobCache,
}

impl<'a> JobMutator<'a> {
    pub fn new(cache: &'a mut JobCache) -> Self {
        JobMutator { cache }
    }

    pub fn set_jobs(&mut self, jobs: Vec<JobRecord>) {
        self.cache.jobs = jobs;
        self.cache.last_updated = Some(Utc::now());
    }

    /// Replaces the record with the same id in place, or appends it.
    pub fn upsert(&mut self, job: JobRecord) {
        match self.cache.jobs.iter_mut().find(|j| j.id == job.id) {
            Some(existing) => *existing = job,
            None => self.cache.jobs.push(job),
        }
        self.cache.last_updated = Some(Utc::now());
    }

    pub fn clear(&mut self) {
        self.cache.jobs.clear();
        self.cache.last_updated = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, title: &str) -> JobRecord {
        JobRecord { id: id.into(), title: title.into(), ..Default::default() }
    }

    #[test]
    fn upsert_replaces_in_place_or_appends() {
        let mut cache = JobCache::default();
        let mut mutator = JobMutator::new(&mut cache);
        mutator.set_jobs(vec![job("1", "Old"), job("2", "Other")]);
        mutator.upsert(job("1", "New"));
        mutator.upsert(job("3", "Third"));

        let titles: Vec<&str> = cache.jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Other", "Third"]);
    }

    #[test]
    fn clear_resets_the_timestamp() {
        let mut cache = JobCache::default();
        let mut mutator = JobMutator::new(&mut cache);
        mutator.set_jobs(vec![job("1", "Only")]);
        mutator.clear();
        assert!(cache.jobs.is_empty());
        assert!(cache.last_updated.is_none());
    }
}
