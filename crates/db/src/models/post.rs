//! Post models and DTOs.
//!
//! A post is a portfolio project entry with bilingual text, a rich-text body
//! per language, an optional case study and a media gallery.

use folio_core::category::Category;
use folio_core::locale::Locale;
use folio_core::rich_text;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::{not_blank, rich_text_doc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use validator::Validate;

use crate::models::media::{Media, MediaDto};

/// Length of excerpts derived from the body when none was entered.
pub const AUTO_EXCERPT_CHARS: usize = 200;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: DbId,
    pub category: String,
    pub title_en: String,
    pub title_pl: String,
    pub slug: String,
    pub excerpt_en: Option<String>,
    pub excerpt_pl: Option<String>,
    pub content_en: Value,
    pub content_pl: Value,
    pub featured_image: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub published: bool,
    pub display_order: i32,
    pub hashtags: Vec<String>,
    pub case_study_challenge_en: Option<String>,
    pub case_study_challenge_pl: Option<String>,
    pub case_study_solution_en: Option<String>,
    pub case_study_solution_pl: Option<String>,
    pub case_study_results_en: Option<String>,
    pub case_study_results_pl: Option<String>,
    pub case_study_testimonial_en: Option<String>,
    pub case_study_testimonial_pl: Option<String>,
    pub case_study_testimonial_author: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Post {
    /// A case study is shown when any English section has text.
    pub fn has_case_study(&self) -> bool {
        [
            &self.case_study_challenge_en,
            &self.case_study_solution_en,
            &self.case_study_results_en,
        ]
        .into_iter()
        .any(|field| field.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }

    pub fn category(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a post.
///
/// A missing `slug` is derived from `titleEn`; a missing `displayOrder`
/// appends the post to the end of its category.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    #[validate(required(message = "Category is required"))]
    pub category: Option<Category>,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "English title is required"))]
    pub title_en: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Polish title is required"))]
    pub title_pl: String,
    pub slug: Option<String>,
    pub excerpt_en: Option<String>,
    pub excerpt_pl: Option<String>,
    #[validate(custom(function = "rich_text_doc"))]
    pub content_en: Option<Value>,
    #[validate(custom(function = "rich_text_doc"))]
    pub content_pl: Option<Value>,
    pub featured_image: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub published: Option<bool>,
    pub display_order: Option<i32>,
    pub hashtags: Option<Vec<String>>,
    pub case_study_challenge_en: Option<String>,
    pub case_study_challenge_pl: Option<String>,
    pub case_study_solution_en: Option<String>,
    pub case_study_solution_pl: Option<String>,
    pub case_study_results_en: Option<String>,
    pub case_study_results_pl: Option<String>,
    pub case_study_testimonial_en: Option<String>,
    pub case_study_testimonial_pl: Option<String>,
    pub case_study_testimonial_author: Option<String>,
}

/// DTO for partially updating a post. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    pub category: Option<Category>,
    #[validate(custom(function = "not_blank", message = "English title is required"))]
    pub title_en: Option<String>,
    #[validate(custom(function = "not_blank", message = "Polish title is required"))]
    pub title_pl: Option<String>,
    pub slug: Option<String>,
    pub excerpt_en: Option<String>,
    pub excerpt_pl: Option<String>,
    #[validate(custom(function = "rich_text_doc"))]
    pub content_en: Option<Value>,
    #[validate(custom(function = "rich_text_doc"))]
    pub content_pl: Option<Value>,
    pub featured_image: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub published: Option<bool>,
    pub display_order: Option<i32>,
    pub hashtags: Option<Vec<String>>,
    pub case_study_challenge_en: Option<String>,
    pub case_study_challenge_pl: Option<String>,
    pub case_study_solution_en: Option<String>,
    pub case_study_solution_pl: Option<String>,
    pub case_study_results_en: Option<String>,
    pub case_study_results_pl: Option<String>,
    pub case_study_testimonial_en: Option<String>,
    pub case_study_testimonial_pl: Option<String>,
    pub case_study_testimonial_author: Option<String>,
}

// ---------------------------------------------------------------------------
// Localized view
// ---------------------------------------------------------------------------

/// A post as returned by the API.
///
/// List views leave `content*` and `media` out; the detail view fills them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: DbId,
    pub category: String,
    pub category_label: String,
    pub title: String,
    pub title_en: String,
    pub title_pl: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub excerpt_en: Option<String>,
    pub excerpt_pl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_en: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_pl: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,
    pub featured_image: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub published: bool,
    pub display_order: i32,
    pub hashtags: Vec<String>,
    pub has_case_study: bool,
    pub case_study_challenge: Option<String>,
    pub case_study_challenge_en: Option<String>,
    pub case_study_challenge_pl: Option<String>,
    pub case_study_solution: Option<String>,
    pub case_study_solution_en: Option<String>,
    pub case_study_solution_pl: Option<String>,
    pub case_study_results: Option<String>,
    pub case_study_results_en: Option<String>,
    pub case_study_results_pl: Option<String>,
    pub case_study_testimonial: Option<String>,
    pub case_study_testimonial_en: Option<String>,
    pub case_study_testimonial_pl: Option<String>,
    pub case_study_testimonial_author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<MediaDto>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PostDto {
    /// Summary view used by listings.
    pub fn summary(post: Post, locale: Locale) -> Self {
        let category_label = post
            .category()
            .map(|c| c.label(locale).to_string())
            .unwrap_or_default();

        let excerpt = locale
            .pick_opt(&post.excerpt_en, &post.excerpt_pl)
            .filter(|e| !e.trim().is_empty())
            .or_else(|| {
                rich_text::excerpt(locale.pick(&post.content_en, &post.content_pl), AUTO_EXCERPT_CHARS)
            });

        Self {
            id: post.id,
            has_case_study: post.has_case_study(),
            category_label,
            title: locale.pick(&post.title_en, &post.title_pl).clone(),
            excerpt,
            case_study_challenge: locale
                .pick_opt(&post.case_study_challenge_en, &post.case_study_challenge_pl),
            case_study_solution: locale
                .pick_opt(&post.case_study_solution_en, &post.case_study_solution_pl),
            case_study_results: locale
                .pick_opt(&post.case_study_results_en, &post.case_study_results_pl),
            case_study_testimonial: locale
                .pick_opt(&post.case_study_testimonial_en, &post.case_study_testimonial_pl),
            content: None,
            content_en: None,
            content_pl: None,
            content_html: None,
            media: None,
            category: post.category,
            title_en: post.title_en,
            title_pl: post.title_pl,
            slug: post.slug,
            excerpt_en: post.excerpt_en,
            excerpt_pl: post.excerpt_pl,
            featured_image: post.featured_image,
            github_url: post.github_url,
            live_url: post.live_url,
            published: post.published,
            display_order: post.display_order,
            hashtags: post.hashtags,
            case_study_challenge_en: post.case_study_challenge_en,
            case_study_challenge_pl: post.case_study_challenge_pl,
            case_study_solution_en: post.case_study_solution_en,
            case_study_solution_pl: post.case_study_solution_pl,
            case_study_results_en: post.case_study_results_en,
            case_study_results_pl: post.case_study_results_pl,
            case_study_testimonial_en: post.case_study_testimonial_en,
            case_study_testimonial_pl: post.case_study_testimonial_pl,
            case_study_testimonial_author: post.case_study_testimonial_author,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }

    /// Full view with both bodies, rendered HTML and the ordered gallery.
    pub fn detail(post: Post, mut media: Vec<Media>, locale: Locale) -> Self {
        let content_en = post.content_en.clone();
        let content_pl = post.content_pl.clone();
        let content = locale.pick(&content_en, &content_pl).clone();

        media.sort_by_key(|m| m.display_order);

        let mut dto = Self::summary(post, locale);
        dto.content_html = Some(rich_text::render_html(&content));
        dto.content = Some(content);
        dto.content_en = Some(content_en);
        dto.content_pl = Some(content_pl);
        dto.media = Some(
            media
                .into_iter()
                .map(|m| MediaDto::localized(m, locale))
                .collect(),
        );
        dto
    }
}

/// Published-post count for one category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub value: Category,
    pub label: String,
    pub label_en: String,
    pub label_pl: String,
    pub post_count: i64,
}

impl CategoryDto {
    pub fn new(category: Category, post_count: i64, locale: Locale) -> Self {
        Self {
            value: category,
            label: category.label(locale).to_string(),
            label_en: category.label_en().to_string(),
            label_pl: category.label_pl().to_string(),
            post_count,
        }
    }
}
