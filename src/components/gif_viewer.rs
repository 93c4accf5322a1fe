use guestbook_core::{GifFrame, Locale};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GifViewerProps {
    pub frame: Option<GifFrame>,
    pub locale: Locale,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(GifViewer)]
pub fn gif_viewer(props: &GifViewerProps) -> Html {
    let strings = props.locale.strings();
    let Some(frame) = &props.frame else {
        return html! {};
    };

    html! {
        <figure style="margin:1.5em 0; text-align:center;">
            <img src={frame.item.url.clone()} alt={frame.item.file_name.clone()} style="width:100%; border-radius:8px;" />
            <figcaption style="color:#666; margin-top:0.4em;">
                { format!("{}{}", strings.gif_caption, frame.item.file_name) }
            </figcaption>
            <button onclick={props.on_next.clone()} style="margin-top:0.6em; padding:0.5em 1.2em; cursor:pointer;">
                { strings.next_gif }
            </button>
        </figure>
    }
}
