pub mod srt;
pub mod time;
pub mod vtt;
