//! Integration tests for experiences and RPG stats.

use chrono::NaiveDate;
use folio_core::locale::Locale;
use folio_db::models::experience::{CreateExperience, ExperienceDto, UpdateExperience};
use folio_db::models::rpg_stat::{CreateRpgStat, RpgStatDto, UpdateRpgStat};
use folio_db::repositories::{ExperienceRepo, RpgStatRepo};
use sqlx::PgPool;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn experience_update_always_writes_end_date(pool: PgPool) {
    let dto = CreateExperience {
        title_en: "Backend Engineer".into(),
        title_pl: "Inżynier backendu".into(),
        company: "Acme".into(),
        end_date: Some(date(2023, 6, 30)),
        achievements_en: Some(vec!["Shipped v2".into()]),
        ..Default::default()
    };
    let created = ExperienceRepo::create(&pool, &dto, date(2021, 1, 1), 0)
        .await
        .unwrap();
    assert_eq!(created.end_date, Some(date(2023, 6, 30)));

    // Omitting endDate marks the position as current.
    let updated = ExperienceRepo::update(
        &pool,
        created.id,
        &UpdateExperience {
            company: Some("Acme Corp".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.company, "Acme Corp");
    assert_eq!(updated.start_date, date(2021, 1, 1));
    assert_eq!(updated.end_date, None);

    let view = ExperienceDto::localized(updated, Locale::Pl);
    assert!(view.current);
    assert_eq!(view.title, "Inżynier backendu");
    assert!(view.achievements.is_empty());
    assert_eq!(view.achievements_en, vec!["Shipped v2".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rpg_stat_defaults_and_skill_split(pool: PgPool) {
    let dto = CreateRpgStat {
        attr: "str".into(),
        label_en: "Strength".into(),
        label_pl: "Siła".into(),
        skills: Some(vec!["Rust".into(), " SQL ".into()]),
        ..Default::default()
    };
    let stat = RpgStatRepo::create(&pool, &dto, 0).await.unwrap();

    assert_eq!(stat.attr, "STR");
    assert_eq!(stat.level, 5);
    assert_eq!(stat.max_level, 10);
    assert_eq!(stat.skills.as_deref(), Some("Rust, SQL"));

    let updated = RpgStatRepo::update(
        &pool,
        stat.id,
        &UpdateRpgStat {
            level: Some(8),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    let view = RpgStatDto::localized(updated, Locale::En);
    assert_eq!(view.level, 8);
    assert_eq!(view.label, "Strength");
    assert_eq!(view.skills, vec!["Rust".to_string(), "SQL".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_reports_missing_rows(pool: PgPool) {
    assert!(!ExperienceRepo::delete(&pool, uuid::Uuid::new_v4()).await.unwrap());
    assert!(!RpgStatRepo::delete(&pool, uuid::Uuid::new_v4()).await.unwrap());
}
