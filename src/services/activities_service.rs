use tracing::{info, warn};

use crate::database::activities_repo::ActivityStore;
use crate::error::DirectoryError;
use crate::models::ActivityMap;

pub fn list_activities(store: &ActivityStore) -> ActivityMap {
    store.list_activities()
}

/// Registers `email` for `activity_name` and returns the confirmation text.
///
/// Capacity is not enforced: a signup past `max_participants` is accepted and
/// only logged.
pub fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    let activity = store.add_participant(activity_name, email)?;

    info!(activity = %activity_name, email = %email, "participant signed up");
    if activity.is_over_capacity() {
        warn!(
            activity = %activity_name,
            participants = activity.participants_count(),
            max_participants = activity.max_participants,
            "activity is over capacity"
        );
    }

    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    store.remove_participant(activity_name, email)?;
    info!(activity = %activity_name, email = %email, "participant unregistered");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
