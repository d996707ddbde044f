use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::DirectoryError;
use crate::models::{Activity, ActivityMap};

/// In-memory activity directory shared by all request handlers.
///
/// Cloning is cheap and every clone sees the same directory. Mutations hold
/// the write lock across the membership check and the change, so two
/// concurrent signups of the same email cannot both be accepted.
#[derive(Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityMap>>,
}

impl ActivityStore {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Snapshot of the whole directory.
    pub fn list_activities(&self) -> ActivityMap {
        self.inner.read().clone()
    }

    pub fn get_activity(&self, name: &str) -> Option<Activity> {
        self.inner.read().get(name).cloned()
    }

    pub fn activity_names(&self) -> Vec<String> {
        self.inner.read().keys().cloned().collect()
    }

    /// Appends `email` to the roster. Returns the activity as it is after the
    /// change.
    pub fn add_participant(&self, name: &str, email: &str) -> Result<Activity, DirectoryError> {
        let mut activities = self.inner.write();
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| DirectoryError::ActivityNotFound {
                activity: name.to_string(),
            })?;

        if activity.is_registered(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(activity.clone())
    }

    /// Removes `email` from the roster, keeping the order of the others.
    pub fn remove_participant(&self, name: &str, email: &str) -> Result<Activity, DirectoryError> {
        let mut activities = self.inner.write();
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| DirectoryError::ActivityNotFound {
                activity: name.to_string(),
            })?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            });
        };

        activity.participants.remove(pos);
        Ok(activity.clone())
    }
}
