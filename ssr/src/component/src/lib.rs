pub mod buttons;
pub mod drop_zone;
pub mod error_banner;
pub mod feature_card;
pub mod progress_bar;
pub mod video_player;
