//! Site-wide settings (singleton row, `id = 1`).

use std::collections::BTreeMap;

use folio_core::locale::Locale;
use folio_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// One entry of the "stats" strip on the home page (e.g. "8+ years").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatItem {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub label_en: String,
    #[serde(default)]
    pub label_pl: String,
}

/// The `site_settings` row.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub id: i16,
    pub hero_title_en: Option<String>,
    pub hero_title_pl: Option<String>,
    pub hero_subtitle_en: Option<String>,
    pub hero_subtitle_pl: Option<String>,
    pub about_text_en: Option<String>,
    pub about_text_pl: Option<String>,
    pub profile_image: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social_links: Json<BTreeMap<String, String>>,
    pub meta_description_en: Option<String>,
    pub meta_description_pl: Option<String>,
    pub footer_title_en: Option<String>,
    pub footer_title_pl: Option<String>,
    pub footer_tagline_en: Option<String>,
    pub footer_tagline_pl: Option<String>,
    pub owner_name: Option<String>,
    pub site_name: Option<String>,
    pub rpg_class_title_en: Option<String>,
    pub rpg_class_title_pl: Option<String>,
    pub about_tags_en: Vec<String>,
    pub about_tags_pl: Vec<String>,
    pub stats_items: Json<Vec<StatItem>>,
    pub theme: String,
    pub updated_at: Timestamp,
}

/// Partial update from the admin settings form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteSettings {
    pub hero_title_en: Option<String>,
    pub hero_title_pl: Option<String>,
    pub hero_subtitle_en: Option<String>,
    pub hero_subtitle_pl: Option<String>,
    pub about_text_en: Option<String>,
    pub about_text_pl: Option<String>,
    pub profile_image: Option<String>,
    #[validate(email(message = "A valid email address is required"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social_links: Option<BTreeMap<String, String>>,
    pub meta_description_en: Option<String>,
    pub meta_description_pl: Option<String>,
    pub footer_title_en: Option<String>,
    pub footer_title_pl: Option<String>,
    pub footer_tagline_en: Option<String>,
    pub footer_tagline_pl: Option<String>,
    pub owner_name: Option<String>,
    pub site_name: Option<String>,
    pub rpg_class_title_en: Option<String>,
    pub rpg_class_title_pl: Option<String>,
    pub about_tags_en: Option<Vec<String>>,
    pub about_tags_pl: Option<Vec<String>>,
    pub stats_items: Option<Vec<StatItem>>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatItemDto {
    pub icon: String,
    pub value: String,
    pub label: String,
    pub label_en: String,
    pub label_pl: String,
}

/// Settings as returned by the API, localized for one language.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsDto {
    pub hero_title: Option<String>,
    pub hero_title_en: Option<String>,
    pub hero_title_pl: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_subtitle_en: Option<String>,
    pub hero_subtitle_pl: Option<String>,
    pub about_text: Option<String>,
    pub about_text_en: Option<String>,
    pub about_text_pl: Option<String>,
    pub profile_image: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social_links: BTreeMap<String, String>,
    pub meta_description: Option<String>,
    pub meta_description_en: Option<String>,
    pub meta_description_pl: Option<String>,
    pub footer_title: Option<String>,
    pub footer_title_en: Option<String>,
    pub footer_title_pl: Option<String>,
    pub footer_tagline: Option<String>,
    pub footer_tagline_en: Option<String>,
    pub footer_tagline_pl: Option<String>,
    pub owner_name: Option<String>,
    pub site_name: Option<String>,
    pub rpg_class_title: Option<String>,
    pub rpg_class_title_en: Option<String>,
    pub rpg_class_title_pl: Option<String>,
    pub about_tags: Vec<String>,
    pub about_tags_en: Vec<String>,
    pub about_tags_pl: Vec<String>,
    pub stats_items: Vec<StatItemDto>,
    pub theme: String,
    pub updated_at: Timestamp,
}

impl SiteSettingsDto {
    pub fn localized(s: SiteSettings, locale: Locale) -> Self {
        let Json(social_links) = s.social_links;
        let Json(stats) = s.stats_items;
        let stats_items = stats
            .into_iter()
            .map(|item| StatItemDto {
                label: locale.pick(&item.label_en, &item.label_pl).clone(),
                icon: item.icon,
                value: item.value,
                label_en: item.label_en,
                label_pl: item.label_pl,
            })
            .collect();

        Self {
            hero_title: locale.pick_opt(&s.hero_title_en, &s.hero_title_pl),
            hero_subtitle: locale.pick_opt(&s.hero_subtitle_en, &s.hero_subtitle_pl),
            about_text: locale.pick_opt(&s.about_text_en, &s.about_text_pl),
            meta_description: locale.pick_opt(&s.meta_description_en, &s.meta_description_pl),
            footer_title: locale.pick_opt(&s.footer_title_en, &s.footer_title_pl),
            footer_tagline: locale.pick_opt(&s.footer_tagline_en, &s.footer_tagline_pl),
            rpg_class_title: locale.pick_opt(&s.rpg_class_title_en, &s.rpg_class_title_pl),
            about_tags: locale.pick(&s.about_tags_en, &s.about_tags_pl).clone(),
            hero_title_en: s.hero_title_en,
            hero_title_pl: s.hero_title_pl,
            hero_subtitle_en: s.hero_subtitle_en,
            hero_subtitle_pl: s.hero_subtitle_pl,
            about_text_en: s.about_text_en,
            about_text_pl: s.about_text_pl,
            profile_image: s.profile_image,
            email: s.email,
            phone: s.phone,
            social_links,
            meta_description_en: s.meta_description_en,
            meta_description_pl: s.meta_description_pl,
            footer_title_en: s.footer_title_en,
            footer_title_pl: s.footer_title_pl,
            footer_tagline_en: s.footer_tagline_en,
            footer_tagline_pl: s.footer_tagline_pl,
            owner_name: s.owner_name,
            site_name: s.site_name,
            rpg_class_title_en: s.rpg_class_title_en,
            rpg_class_title_pl: s.rpg_class_title_pl,
            about_tags_en: s.about_tags_en,
            about_tags_pl: s.about_tags_pl,
            stats_items,
            theme: s.theme,
            updated_at: s.updated_at,
        }
    }
}
