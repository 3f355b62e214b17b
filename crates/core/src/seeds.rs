//! Fixed fixture the board starts from unless an empty board is requested.

use crate::model::{Importance, Task};

#[derive(Clone, Copy)]
pub(crate) struct SeedTask {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) category: &'static str,
    pub(crate) importance: Importance,
    pub(crate) done: bool,
}

pub(crate) const SEED_TASKS: &[SeedTask] = &[
    SeedTask {
        id: "01HZX0SEED0000000000000001",
        title: "Buy groceries",
        category: "Home",
        importance: Importance::High,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000002",
        title: "Team meeting",
        category: "Work",
        importance: Importance::Normal,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000003",
        title: "Call the doctor",
        category: "Health",
        importance: Importance::High,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000004",
        title: "Exercise",
        category: "Health",
        importance: Importance::Normal,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000005",
        title: "Pay the bills",
        category: "Finance",
        importance: Importance::High,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000006",
        title: "Wash the car",
        category: "Home",
        importance: Importance::Low,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000007",
        title: "Research for the project",
        category: "Studies",
        importance: Importance::Normal,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000008",
        title: "Walk the dog",
        category: "Pets",
        importance: Importance::Low,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000009",
        title: "Cook dinner",
        category: "Home",
        importance: Importance::Normal,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000010",
        title: "Send the report",
        category: "Work",
        importance: Importance::High,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000011",
        title: "Make the bed",
        category: "Home",
        importance: Importance::Low,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000012",
        title: "Buy a birthday present",
        category: "Family",
        importance: Importance::Normal,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000013",
        title: "Check email",
        category: "Work",
        importance: Importance::High,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000014",
        title: "Take out the trash",
        category: "Home",
        importance: Importance::Low,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000015",
        title: "Read a book",
        category: "Leisure",
        importance: Importance::Normal,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000016",
        title: "Dentist appointment",
        category: "Health",
        importance: Importance::High,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000017",
        title: "Do the weekly shopping",
        category: "Home",
        importance: Importance::Normal,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000018",
        title: "Solve the crossword",
        category: "Leisure",
        importance: Importance::Low,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000019",
        title: "Send a birthday card",
        category: "Family",
        importance: Importance::Normal,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000020",
        title: "Catch up on social media",
        category: "Leisure",
        importance: Importance::Low,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000021",
        title: "Update the software",
        category: "Technology",
        importance: Importance::Normal,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000022",
        title: "Write a shopping list",
        category: "Home",
        importance: Importance::Low,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000023",
        title: "Prepare the presentation",
        category: "Work",
        importance: Importance::High,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000024",
        title: "Stroll through the park",
        category: "Leisure",
        importance: Importance::Low,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000025",
        title: "Visit the grandparents",
        category: "Family",
        importance: Importance::Normal,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000026",
        title: "Audit the website security",
        category: "Technology",
        importance: Importance::High,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000027",
        title: "Take a nap",
        category: "Health",
        importance: Importance::Normal,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000028",
        title: "Clean the garage",
        category: "Home",
        importance: Importance::Low,
        done: true,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000029",
        title: "Fix the programming bug",
        category: "Studies",
        importance: Importance::High,
        done: false,
    },
    SeedTask {
        id: "01HZX0SEED0000000000000030",
        title: "Watch a movie",
        category: "Leisure",
        importance: Importance::Normal,
        done: false,
    },
];

/// Owned copies of the fixture in display order.
pub fn seed_tasks() -> Vec<Task> {
    SEED_TASKS
        .iter()
        .map(|seed| Task {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            category: seed.category.to_string(),
            importance: seed.importance,
            done: seed.done,
        })
        .collect()
}
