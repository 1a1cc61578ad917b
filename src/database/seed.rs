use crate::models::Activity;

// (name, description, schedule, max_participants, participants)
const SEED_ROWS: &[(&str, &str, &str, u32, [&str; 2])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        ["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        ["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Competitive basketball practice and games",
        "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
        15,
        ["james@mergington.edu", "lucas@mergington.edu"],
    ),
    (
        "Swimming Club",
        "Swimming techniques and competitive training",
        "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
        25,
        ["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Studio",
        "Explore painting, drawing, and mixed media art",
        "Wednesdays, 3:30 PM - 5:30 PM",
        15,
        ["isabella@mergington.edu", "charlotte@mergington.edu"],
    ),
    (
        "Theater Club",
        "Acting, improvisation, and stage performance",
        "Fridays, 4:00 PM - 6:00 PM",
        20,
        ["ethan@mergington.edu", "amelia@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop critical thinking and public speaking skills",
        "Thursdays, 3:30 PM - 5:00 PM",
        16,
        ["william@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Science Club",
        "Conduct experiments and explore scientific concepts",
        "Wednesdays, 3:30 PM - 4:30 PM",
        18,
        ["alexander@mergington.edu", "evelyn@mergington.edu"],
    ),
];

/// The fixed catalog every directory starts from, in display order.
pub fn seed_activities() -> Vec<(String, Activity)> {
    SEED_ROWS
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(description, schedule, *max, participants),
            )
        })
        .collect()
}
