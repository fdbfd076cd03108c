pub mod button;
pub mod score_bubble;
pub mod score_display;
