use std::collections::HashSet;
use std::path::Path;

use crate::error::SeedError;
use crate::models::{Activity, ActivityMap};

/// The Mergington High School catalogue the service starts with.
pub fn default_activities() -> ActivityMap {
    let mut activities = ActivityMap::new();
    let mut add = |name: &str, activity: Activity| {
        activities.insert(name.to_string(), activity);
    };

    add(
        "Chess Club",
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    add(
        "Programming Class",
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    add(
        "Gym Class",
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
    );
    add(
        "Soccer Team",
        Activity::new(
            "Train and compete in interscholastic soccer matches",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            22,
        )
        .with_participants(&["liam@mergington.edu", "noah@mergington.edu"]),
    );
    add(
        "Basketball Team",
        Activity::new(
            "Practice drills and play in the school basketball league",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
        )
        .with_participants(&["ava@mergington.edu", "mia@mergington.edu"]),
    );
    add(
        "Art Club",
        Activity::new(
            "Explore painting, drawing and mixed media",
            "Thursdays, 3:30 PM - 5:00 PM",
            18,
        )
        .with_participants(&["amelia@mergington.edu", "harper@mergington.edu"]),
    );
    add(
        "Drama Club",
        Activity::new(
            "Act, direct and produce school plays",
            "Wednesdays, 3:30 PM - 5:30 PM",
            20,
        )
        .with_participants(&["ella@mergington.edu", "scarlett@mergington.edu"]),
    );
    add(
        "Math Club",
        Activity::new(
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        )
        .with_participants(&["james@mergington.edu", "benjamin@mergington.edu"]),
    );
    add(
        "Debate Team",
        Activity::new(
            "Build public speaking skills and compete in debate tournaments",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        )
        .with_participants(&["charlotte@mergington.edu", "henry@mergington.edu"]),
    );

    activities
}

/// Reads a directory in the `GET /activities` JSON shape.
pub fn load_activities_file(path: &Path) -> Result<ActivityMap, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let activities: ActivityMap =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate(&activities)?;
    Ok(activities)
}

fn validate(activities: &ActivityMap) -> Result<(), SeedError> {
    for (name, activity) in activities {
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
    }
    Ok(())
}
