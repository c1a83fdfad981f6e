// === Endpoints ===
pub const POSTS_PATH: &str = "/api/posts";
pub const ADD_POST_PATH: &str = "/api/add-post";
pub const PROFILE_DETAILS_PATH: &str = "/api/profile-details";
pub const EDIT_PROFILE_PATH: &str = "/settings/edit-profile";
pub const PROFILES_PREFIX: &str = "/profiles";

// === Element ids ===
pub const POSTS_ID: &str = "posts";
pub const USER_POSTS_ID: &str = "user_posts";
pub const POST_INPUT_ID: &str = "post_input";
pub const ADD_POST_ID: &str = "add_post";
pub const PROFILE_DETAILS_ID: &str = "profile_details";
pub const FOLLOW_BUTTON_ID: &str = "follow_button";
pub const UNFOLLOW_BUTTON_ID: &str = "unfollow_button";
pub const EDIT_PROFILE_LINK_ID: &str = "edit_profile";
pub const EMAIL_ID: &str = "email";
pub const FIRST_NAME_ID: &str = "first_name";
pub const LAST_NAME_ID: &str = "last_name";
pub const CONFIRM_BUTTON_ID: &str = "confirm_button";

// === Card classes ===
pub const POST_BODY_CLASS: &str = "post_body";
pub const USER_POST_BODY_CLASS: &str = "user_post_body";

pub const AUTHOR_LINK_STYLE: &str = "text-decoration: none; color: black";

pub fn base_url() -> String {
    std::env::var("POSTBOARD_BASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "http://127.0.0.1:8000".to_string())
}

pub fn follow_rollback() -> bool {
    std::env::var("POSTBOARD_FOLLOW_ROLLBACK")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false)
}

pub fn user_posts_path(user_id: &str) -> String {
    format!("{}/{}", POSTS_PATH, urlencoding::encode(user_id))
}

pub fn follow_path(user_id: &str) -> String {
    format!("/api/users/{}/follow", urlencoding::encode(user_id))
}

pub fn unfollow_path(user_id: &str) -> String {
    format!("/api/users/{}/unfollow", urlencoding::encode(user_id))
}

pub fn profile_href(user_id: &str) -> String {
    format!("{}/{}", PROFILES_PREFIX, urlencoding::encode(user_id))
}
