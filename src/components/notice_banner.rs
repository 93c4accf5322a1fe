use guestbook_core::{Notice, NoticeLevel};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notices: Vec<Notice>,
}

fn colors(level: NoticeLevel) -> (&'static str, &'static str, &'static str) {
    match level {
        NoticeLevel::Success => ("#d4edda", "#c3e6cb", "#155724"),
        NoticeLevel::Warning => ("#fff3cd", "#ffeeba", "#856404"),
        NoticeLevel::Error => ("#f8d7da", "#f5c6cb", "#721c24"),
    }
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    html! {
        <>
            { for props.notices.iter().map(|notice| {
                let (background, border, color) = colors(notice.level);
                html! {
                    <div style={format!(
                        "margin:0.5em 0; padding:0.8em 1em; background:{}; border:1px solid {}; border-radius:4px; color:{};",
                        background, border, color
                    )}>
                        { &notice.text }
                    </div>
                }
            })}
        </>
    }
}
