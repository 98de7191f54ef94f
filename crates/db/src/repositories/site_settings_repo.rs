//! Repository for the singleton `site_settings` row.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::site_settings::{SiteSettings, UpdateSiteSettings};

const COLUMNS: &str = "\
    id, hero_title_en, hero_title_pl, hero_subtitle_en, hero_subtitle_pl, \
    about_text_en, about_text_pl, profile_image, email, phone, social_links, \
    meta_description_en, meta_description_pl, footer_title_en, footer_title_pl, \
    footer_tagline_en, footer_tagline_pl, owner_name, site_name, \
    rpg_class_title_en, rpg_class_title_pl, about_tags_en, about_tags_pl, \
    stats_items, theme, updated_at";

pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    /// Fetch the settings row, creating it with defaults on first access.
    pub async fn get(pool: &PgPool) -> Result<SiteSettings, sqlx::Error> {
        sqlx::query("INSERT INTO site_settings (id) VALUES (1) ON CONFLICT (id) DO NOTHING")
            .execute(pool)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE id = 1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update; absent fields keep their value.
    pub async fn update(
        pool: &PgPool,
        dto: &UpdateSiteSettings,
    ) -> Result<SiteSettings, sqlx::Error> {
        sqlx::query("INSERT INTO site_settings (id) VALUES (1) ON CONFLICT (id) DO NOTHING")
            .execute(pool)
            .await?;

        let query = format!(
            "UPDATE site_settings SET \
                 hero_title_en = COALESCE($1, hero_title_en), \
                 hero_title_pl = COALESCE($2, hero_title_pl), \
                 hero_subtitle_en = COALESCE($3, hero_subtitle_en), \
                 hero_subtitle_pl = COALESCE($4, hero_subtitle_pl), \
                 about_text_en = COALESCE($5, about_text_en), \
                 about_text_pl = COALESCE($6, about_text_pl), \
                 profile_image = COALESCE($7, profile_image), \
                 email = COALESCE($8, email), \
                 phone = COALESCE($9, phone), \
                 social_links = COALESCE($10, social_links), \
                 meta_description_en = COALESCE($11, meta_description_en), \
                 meta_description_pl = COALESCE($12, meta_description_pl), \
                 footer_title_en = COALESCE($13, footer_title_en), \
                 footer_title_pl = COALESCE($14, footer_title_pl), \
                 footer_tagline_en = COALESCE($15, footer_tagline_en), \
                 footer_tagline_pl = COALESCE($16, footer_tagline_pl), \
                 owner_name = COALESCE($17, owner_name), \
                 site_name = COALESCE($18, site_name), \
                 rpg_class_title_en = COALESCE($19, rpg_class_title_en), \
                 rpg_class_title_pl = COALESCE($20, rpg_class_title_pl), \
                 about_tags_en = COALESCE($21, about_tags_en), \
                 about_tags_pl = COALESCE($22, about_tags_pl), \
                 stats_items = COALESCE($23, stats_items), \
                 theme = COALESCE($24, theme) \
             WHERE id = 1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(&dto.hero_title_en)
            .bind(&dto.hero_title_pl)
            .bind(&dto.hero_subtitle_en)
            .bind(&dto.hero_subtitle_pl)
            .bind(&dto.about_text_en)
            .bind(&dto.about_text_pl)
            .bind(&dto.profile_image)
            .bind(&dto.email)
            .bind(&dto.phone)
            .bind(dto.social_links.as_ref().map(Json))
            .bind(&dto.meta_description_en)
            .bind(&dto.meta_description_pl)
            .bind(&dto.footer_title_en)
            .bind(&dto.footer_title_pl)
            .bind(&dto.footer_tagline_en)
            .bind(&dto.footer_tagline_pl)
            .bind(&dto.owner_name)
            .bind(&dto.site_name)
            .bind(&dto.rpg_class_title_en)
            .bind(&dto.rpg_class_title_pl)
            .bind(&dto.about_tags_en)
            .bind(&dto.about_tags_pl)
            .bind(dto.stats_items.as_ref().map(Json))
            .bind(&dto.theme)
            .fetch_one(pool)
            .await
    }

    /// Set only the theme preset name.
    pub async fn set_theme(pool: &PgPool, theme: &str) -> Result<SiteSettings, sqlx::Error> {
        Self::update(
            pool,
            &UpdateSiteSettings {
                theme: Some(theme.to_string()),
                ..Default::default()
            },
        )
        .await
    }
}
