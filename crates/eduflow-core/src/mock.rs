//! Hardcoded demo dataset.
//!
//! Sign-in picks the first identity in [`directory`] whose role matches, so the
//! order of entries matters.

use crate::models::{Course, Identity, Role};

pub fn directory() -> Vec<Identity> {
    vec![
        Identity::new("s1", Role::Student, "Aisha Khan")
            .with_progress(0.35)
            .with_enrolled(["c1", "c2"]),
        Identity::new("t1", Role::Teacher, "Dana Rivera"),
        Identity::new("a1", Role::Admin, "Morgan Lee"),
        Identity::new("s2", Role::Student, "Ben Okafor")
            .with_progress(0.6)
            .with_enrolled(["c1", "c3"]),
        Identity::new("s3", Role::Student, "Chloe Martin")
            .with_progress(0.1)
            .with_enrolled(["c2"]),
    ]
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "c1".to_string(),
            title: "Algebra I".to_string(),
            description: "Linear equations, inequalities and functions.".to_string(),
            lesson_count: 12,
        },
        Course {
            id: "c2".to_string(),
            title: "Intro to Biology".to_string(),
            description: "Cells, genetics and ecosystems.".to_string(),
            lesson_count: 10,
        },
        Course {
            id: "c3".to_string(),
            title: "World History".to_string(),
            description: "Ancient civilizations to the modern era.".to_string(),
            lesson_count: 8,
        },
    ]
}

/// Students listed on the teacher's attendance sheet.
pub fn roster() -> Vec<Identity> {
    directory()
        .into_iter()
        .filter(|identity| identity.role == Role::Student)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_an_identity() {
        let directory = directory();
        for role in Role::ALL {
            assert!(directory.iter().any(|i| i.role == role), "missing {}", role);
        }
    }

    #[test]
    fn test_enrollments_reference_real_courses() {
        let courses = courses();
        for identity in directory() {
            for course_id in identity.enrolled.iter().flatten() {
                assert!(courses.iter().any(|c| &c.id == course_id));
            }
        }
    }

    #[test]
    fn test_roster_is_students_only() {
        let roster = roster();
        assert_eq!(roster.len(), 3);
        assert!(roster.iter().all(|i| i.role == Role::Student));
    }
}
