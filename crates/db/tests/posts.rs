//! Integration tests for the post and media repositories.

use folio_core::category::Category;
use folio_core::media::MediaKind;
use folio_db::models::media::CreateMedia;
use folio_db::models::post::{CreatePost, Post};
use folio_db::repositories::{MediaRepo, PostRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_post(title: &str, published: bool, hashtags: &[&str]) -> CreatePost {
    CreatePost {
        category: Some(Category::PersonalProject),
        title_en: title.to_string(),
        title_pl: format!("{title} (pl)"),
        published: Some(published),
        hashtags: Some(hashtags.iter().map(|t| t.to_string()).collect()),
        ..Default::default()
    }
}

async fn insert_post(pool: &PgPool, title: &str, published: bool, hashtags: &[&str]) -> Post {
    let dto = new_post(title, published, hashtags);
    let slug = PostRepo::available_slug(pool, title, None).await.unwrap();
    let order = PostRepo::next_display_order(pool, Category::PersonalProject)
        .await
        .unwrap();
    PostRepo::create(pool, &dto, Category::PersonalProject, &slug, order)
        .await
        .unwrap()
}

fn image_for(post_id: Option<uuid::Uuid>, name: &str) -> CreateMedia {
    CreateMedia {
        post_id,
        kind: MediaKind::Image,
        filename: Some(format!("images/{name}.png")),
        original_name: Some(format!("{name}.png")),
        mime_type: Some("image/png".into()),
        size: Some(128),
        url: format!("/api/media/images/{name}.png"),
        video_url: None,
        alt_text_en: None,
        alt_text_pl: None,
        display_order: None,
    }
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_defaults_to_unpublished(pool: PgPool) {
    let dto = CreatePost {
        category: Some(Category::ProfessionalProject),
        title_en: "Draft".into(),
        title_pl: "Szkic".into(),
        ..Default::default()
    };
    let post = PostRepo::create(&pool, &dto, Category::ProfessionalProject, "draft", 0)
        .await
        .unwrap();

    assert!(!post.published);
    assert_eq!(post.category, "PROFESSIONAL_PROJECT");
    assert!(PostRepo::find_published_by_slug(&pool, "draft")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn available_slug_skips_taken_values(pool: PgPool) {
    let first = insert_post(&pool, "Hello World", true, &[]).await;
    let second = insert_post(&pool, "Hello World", true, &[]).await;

    assert_eq!(first.slug, "hello-world");
    assert_eq!(second.slug, "hello-world-1");

    // A post keeps its own slug when it is excluded.
    let own = PostRepo::available_slug(&pool, "Hello World", Some(first.id))
        .await
        .unwrap();
    assert_eq!(own, "hello-world");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn public_listing_hides_unpublished(pool: PgPool) {
    insert_post(&pool, "Visible", true, &["rust"]).await;
    insert_post(&pool, "Hidden", false, &["rust"]).await;

    let posts = PostRepo::list_published(&pool, None, None).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title_en, "Visible");

    let (page, total) = PostRepo::list_published_paged(&pool, None, 10, 0)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(page.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hashtags_are_normalized_and_listed(pool: PgPool) {
    insert_post(&pool, "One", true, &["#Rust", "Axum", "Rust"]).await;
    insert_post(&pool, "Two", true, &["Axum"]).await;
    insert_post(&pool, "Draft", false, &["Secret"]).await;

    let tags = PostRepo::published_hashtags(&pool).await.unwrap();
    assert_eq!(tags, vec!["Axum".to_string(), "Rust".to_string()]);

    let tagged = PostRepo::list_published(&pool, None, Some("Rust")).await.unwrap();
    assert_eq!(tagged.len(), 1);
    assert_eq!(tagged[0].hashtags, vec!["Rust".to_string(), "Axum".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn toggle_published_flips_state(pool: PgPool) {
    let post = insert_post(&pool, "Toggle", false, &[]).await;

    let toggled = PostRepo::toggle_published(&pool, post.id).await.unwrap().unwrap();
    assert!(toggled.published);
    let toggled = PostRepo::toggle_published(&pool, post.id).await.unwrap().unwrap();
    assert!(!toggled.published);

    assert!(PostRepo::toggle_published(&pool, uuid::Uuid::new_v4())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_counts_only_published(pool: PgPool) {
    insert_post(&pool, "A", true, &[]).await;
    insert_post(&pool, "B", true, &[]).await;
    insert_post(&pool, "C", false, &[]).await;

    let counts = PostRepo::published_counts_by_category(&pool).await.unwrap();
    let personal = counts
        .iter()
        .find(|(category, _)| category == "PERSONAL_PROJECT")
        .map(|(_, count)| *count);
    assert_eq!(personal, Some(2));
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn media_append_per_post_and_cascade(pool: PgPool) {
    let post = insert_post(&pool, "Gallery", true, &[]).await;

    let first = MediaRepo::create(&pool, &image_for(Some(post.id), "a")).await.unwrap();
    let second = MediaRepo::create(&pool, &image_for(Some(post.id), "b")).await.unwrap();
    let loose = MediaRepo::create(&pool, &image_for(None, "c")).await.unwrap();

    assert_eq!(first.display_order, 0);
    assert_eq!(second.display_order, 1);
    assert_eq!(loose.display_order, 0);

    let (unassigned, total) = MediaRepo::list_unassigned_paged(&pool, 20, 0).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(unassigned[0].id, loose.id);

    assert!(PostRepo::delete(&pool, post.id).await.unwrap());
    assert!(MediaRepo::find_by_id(&pool, first.id).await.unwrap().is_none());
    assert!(MediaRepo::find_by_id(&pool, loose.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn media_paged_list_filters_by_kind(pool: PgPool) {
    MediaRepo::create(&pool, &image_for(None, "a")).await.unwrap();
    let mut video = image_for(None, "v");
    video.kind = MediaKind::Video;
    MediaRepo::create(&pool, &video).await.unwrap();

    let (items, total) = MediaRepo::list_paged(&pool, Some(MediaKind::Video), 20, 0)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].media_type, "VIDEO");

    let (_, all) = MediaRepo::list_paged(&pool, None, 20, 0).await.unwrap();
    assert_eq!(all, 2);
}
