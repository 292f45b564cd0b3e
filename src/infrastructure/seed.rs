use chrono::NaiveDate;
use sea_orm::*;

use crate::models::{author, book};

const DEMO_LIBRARY: &[(&str, &[(&str, Option<(i32, u32, u32)>)])] = &[
    (
        "J.R.R. Tolkien",
        &[
            ("The Hobbit", Some((1937, 9, 21))),
            ("The Fellowship of the Ring", Some((1954, 7, 29))),
        ],
    ),
    (
        "Isaac Asimov",
        &[("Foundation", Some((1951, 6, 1))), ("I, Robot", Some((1950, 12, 2)))],
    ),
    ("Frank Herbert", &[("Dune", Some((1965, 8, 1))), ("Dune Messiah", None)]),
];

/// Insert demo authors and books. Does nothing once any author exists.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if author::Entity::find().count(db).await? > 0 {
        tracing::info!("Authors already present, skipping demo seed");
        return Ok(());
    }

    let txn = db.begin().await?;

    for (name, books) in DEMO_LIBRARY {
        let author = author::ActiveModel {
            author_name: Set((*name).to_owned()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for (title, released) in books.iter() {
            book::ActiveModel {
                book_name: Set((*title).to_owned()),
                release_date: Set(released.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))),
                author_id: Set(author.author_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;
    Ok(())
}
