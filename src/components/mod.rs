mod gif_viewer;
mod guestbook_view;
mod notice_banner;

pub use gif_viewer::GifViewer;
pub use guestbook_view::{HugList, MessageList};
pub use notice_banner::NoticeBanner;
