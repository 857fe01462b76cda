//! `seed-subjects` command.

use campushub_core::config::AppConfig;
use campushub_core::error::AppError;
use campushub_database::{DatabasePool, store::Stores};
use campushub_entity::subject::Subject;

/// The default subject catalog.
const DEFAULT_SUBJECTS: &[(&str, &str, i32)] = &[
    ("Mathematics", "MATH101", 4),
    ("Physics", "PHY101", 4),
    ("Chemistry", "CHEM101", 4),
    ("Computer Science", "CS101", 3),
    ("English", "ENG101", 2),
];

/// Seed the default subjects, skipping any that already exist.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    let stores = Stores::postgres(pool.into_pool());

    let mut created = 0;
    for (name, code, credits) in DEFAULT_SUBJECTS {
        if stores.subjects.find_by_code(code).await?.is_some() {
            println!("{code} already exists, skipping.");
            continue;
        }
        stores
            .subjects
            .create(&Subject::new(*name, *code, *credits))
            .await?;
        println!("Created {code}: {name}");
        created += 1;
    }

    println!("Seeded {created} subject(s).");
    Ok(())
}
