pub mod achievement_repo;
pub mod experience_repo;
pub mod interest_repo;
pub mod media_repo;
pub mod post_repo;
pub mod rpg_stat_repo;
pub mod site_settings_repo;
pub mod skill_repo;
pub mod user_repo;

pub use achievement_repo::AchievementRepo;
pub use experience_repo::ExperienceRepo;
pub use interest_repo::InterestRepo;
pub use media_repo::MediaRepo;
pub use post_repo::PostRepo;
pub use rpg_stat_repo::RpgStatRepo;
pub use site_settings_repo::SiteSettingsRepo;
pub use skill_repo::{SkillCategoryRepo, SoftSkillRepo};
pub use user_repo::UserRepo;
