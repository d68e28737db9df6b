//! Shared test catalogs.

use crate::catalog::Catalog;
use crate::ga::Slot;
use crate::models::{Course, Professor, Room, Session, SessionId, StudentGroup};

/// Sample faculty: 7 rooms (4 theory, 3 lab), 4 groups of 19, 11 courses,
/// 13 professors, 20 sessions (ids 1..=20, inserted out of order).
pub fn faculty_catalog() -> Catalog {
    let professors = [
        "Bailke",
        "Kunekar",
        "Joglekar",
        "Cholke",
        "Amune",
        "Vayadande",
        "Sawant",
        "Dange",
        "Deshpande",
        "Joshi",
        "Jadhav",
        "Sultanpure",
        "Ghdadekar",
    ];
    let courses = [
        "DSA", "OS", "DAA", "MAM", "CC", "DBMS", "OOPS", "SP", "SDAM", "CN", "DT",
    ];

    let mut builder = Catalog::builder()
        .with_room(Room::theory(0, "R48", 24))
        .with_room(Room::theory(1, "R51", 60))
        .with_room(Room::theory(2, "R52", 60))
        .with_room(Room::theory(3, "R54", 60))
        .with_room(Room::lab(4, "R53", 60))
        .with_room(Room::lab(5, "R50", 60))
        .with_room(Room::lab(6, "R13", 60))
        .with_group(StudentGroup::new(1, "TY/1", 19))
        .with_group(StudentGroup::new(2, "TY/2", 19))
        .with_group(StudentGroup::new(3, "SY/3", 19))
        .with_group(StudentGroup::new(4, "SY/4", 19));

    for (i, name) in professors.iter().enumerate() {
        builder = builder.with_professor(Professor::new(i as u32 + 1, *name));
    }
    for (i, name) in courses.iter().enumerate() {
        builder = builder.with_course(Course::new(i as u32 + 1, *name));
    }

    // (id, group, course, professor, duration, lab)
    let sessions: [(u32, u32, u32, u32, usize, bool); 20] = [
        (1, 1, 6, 4, 2, true),
        (2, 1, 5, 3, 1, false),
        (3, 1, 5, 3, 1, false),
        (4, 1, 6, 4, 1, false),
        (5, 1, 6, 4, 1, false),
        (6, 2, 4, 4, 2, true),
        (7, 2, 2, 3, 1, false),
        (8, 2, 8, 10, 1, false),
        (9, 2, 8, 10, 2, true),
        (10, 3, 3, 3, 1, false),
        (11, 3, 3, 3, 1, false),
        (12, 3, 9, 7, 1, false),
        (13, 3, 9, 7, 1, false),
        (14, 3, 7, 5, 2, true),
        (15, 4, 1, 2, 1, false),
        (16, 4, 1, 2, 2, true),
        (17, 4, 10, 9, 1, false),
        (20, 4, 10, 9, 1, false),
        (18, 4, 11, 7, 1, false),
        (19, 4, 11, 7, 1, false),
    ];
    for (id, group, course, professor, duration, lab) in sessions {
        let session = Session::new(id, group, course, professor).with_duration(duration);
        builder = builder.with_session(if lab { session.lab() } else { session });
    }

    builder.build().expect("faculty fixture is valid")
}

/// A clash-free placement of [`faculty_catalog`]: each group on its own day.
pub fn feasible_faculty_slots() -> Vec<(SessionId, Slot)> {
    vec![
        // TY/1, Monday
        (1, Slot::new(0, 4, 0)),
        (2, Slot::new(0, 0, 2)),
        (3, Slot::new(0, 0, 3)),
        (4, Slot::new(0, 0, 5)),
        (5, Slot::new(0, 0, 6)),
        // TY/2, Tuesday
        (6, Slot::new(1, 4, 0)),
        (7, Slot::new(1, 0, 2)),
        (8, Slot::new(1, 0, 3)),
        (9, Slot::new(1, 5, 5)),
        // SY/3, Wednesday
        (10, Slot::new(2, 0, 0)),
        (11, Slot::new(2, 0, 1)),
        (12, Slot::new(2, 1, 2)),
        (13, Slot::new(2, 1, 3)),
        (14, Slot::new(2, 6, 5)),
        // SY/4, Thursday
        (15, Slot::new(3, 0, 0)),
        (16, Slot::new(3, 4, 1)),
        (17, Slot::new(3, 1, 3)),
        (20, Slot::new(3, 1, 5)),
        (18, Slot::new(3, 2, 6)),
        (19, Slot::new(3, 2, 7)),
    ]
}

/// Room 0 = lab, room 1 = theory, 30 seats each; one one-hour theory
/// session for a group of `group_size`.
pub fn two_room_catalog(group_size: u32) -> Catalog {
    Catalog::builder()
        .with_room(Room::lab(0, "L1", 30))
        .with_room(Room::theory(1, "T1", 30))
        .with_group(StudentGroup::new(1, "G1", group_size))
        .with_professor(Professor::new(1, "P1"))
        .with_course(Course::new(1, "C1"))
        .with_session(Session::new(1, 1, 1, 1))
        .build()
        .expect("two-room fixture is valid")
}

/// Two theory rooms; professor 1 teaches `n` one-hour sessions, session
/// `i` for group `i` and course `i`.
pub fn single_professor_catalog(n: u32) -> Catalog {
    let mut builder = Catalog::builder()
        .with_room(Room::theory(0, "T1", 60))
        .with_room(Room::theory(1, "T2", 60))
        .with_professor(Professor::new(1, "P1"));
    for i in 1..=n {
        builder = builder
            .with_group(StudentGroup::new(i, format!("G{i}"), 20))
            .with_course(Course::new(i, format!("C{i}")))
            .with_session(Session::new(i, i, i, 1));
    }
    builder.build().expect("single-professor fixture is valid")
}
