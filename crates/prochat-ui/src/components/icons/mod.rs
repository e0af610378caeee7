//! Brand icons.

mod prochat_logo;

pub use prochat_logo::{ProChatLogo, ProChatLogoProps};
