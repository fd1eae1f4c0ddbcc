// Seed profiles shared by the integration tests and benches

#![allow(dead_code)]

use campus_match::models::Profile;

pub fn create_profile(
    id: &str,
    name: &str,
    major: &str,
    year: &str,
    tags: &[&str],
    bio: &str,
    looking_for: &[&str],
) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        major: major.to_string(),
        year: year.to_string(),
        tags: tags.iter().copied().collect(),
        bio: bio.to_string(),
        looking_for: looking_for.iter().copied().collect(),
    }
}

/// Requester used across tests: a CS junior into AI and hackathons
pub fn requester() -> Profile {
    create_profile(
        "me",
        "Sam Rivera",
        "Computer Science",
        "Junior",
        &["AI", "Hackathon", "Python"],
        "",
        &["Study friends"],
    )
}

/// Ten sample students covering every intent category
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        create_profile(
            "alex",
            "Alex Chen",
            "Computer Science",
            "Junior",
            &["AI", "Robotics", "React", "Python", "Hackathon", "Web Development"],
            "Passionate CS student looking for hackathon teammates. Experienced in React, Node.js, and Python.",
            &["Study friends", "Gaming buddies"],
        ),
        create_profile(
            "jordan",
            "Jordan Martinez",
            "Computer Science",
            "Sophomore",
            &["Embedded Systems", "AI", "Python", "Hackathon", "Project"],
            "CS major interested in hackathons and collaborative projects.",
            &["Study friends", "Hobby groups"],
        ),
        create_profile(
            "sam",
            "Sam Taylor",
            "Business",
            "Senior",
            &["Coffee", "Movies", "Reading"],
            "Business major with a passion for entrepreneurship.",
            &["Watch parties", "Deep conversation groups"],
        ),
        create_profile(
            "morgan",
            "Morgan Lee",
            "Engineering",
            "Junior",
            &["Gym", "Soccer", "Champions League", "F1"],
            "Engineering student who loves sports and fitness. Looking for gym buddies.",
            &["Sports fans", "Hobby groups"],
        ),
        create_profile(
            "riley",
            "Riley Johnson",
            "Psychology",
            "Sophomore",
            &["Philosophy", "Coffee", "Night Owl", "Reading"],
            "Psychology major interested in deep conversations and philosophy.",
            &["Deep conversation groups", "Study friends"],
        ),
        create_profile(
            "casey",
            "Casey Williams",
            "Music",
            "Senior",
            &["Metal", "Rammstein", "Classical", "Hip-Hop", "Jazz"],
            "Music major who loves all genres.",
            &["Hobby groups", "Watch parties"],
        ),
        create_profile(
            "taylor",
            "Taylor Brown",
            "Mathematics",
            "Junior",
            &["Valorant", "League of Legends", "AI", "Philosophy"],
            "Math major who enjoys gaming and coding in my free time.",
            &["Study friends", "Gaming buddies"],
        ),
        create_profile(
            "jamie",
            "Jamie Davis",
            "Biology",
            "Sophomore",
            &["Anime", "Movies", "Reading", "Coffee"],
            "Biology student who loves anime and movies.",
            &["Watch parties", "Hobby groups"],
        ),
        create_profile(
            "quinn",
            "Quinn Anderson",
            "Physics",
            "Senior",
            &["Robotics", "Embedded Systems", "AI", "Gym"],
            "Physics major interested in robotics and embedded systems.",
            &["Hobby groups", "Study friends"],
        ),
        create_profile(
            "avery",
            "Avery Wilson",
            "Economics",
            "Junior",
            &["NBA", "NFL", "Valorant", "Elden Ring", "Gym"],
            "Economics major who enjoys sports and gaming.",
            &["Sports fans", "Gaming buddies"],
        ),
    ]
}
