use guestbook_core::{GuestbookBoard, Locale};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BoardProps {
    pub board: GuestbookBoard,
    pub locale: Locale,
}

/// Latest messages, newest first. Hidden until there is one.
#[function_component(MessageList)]
pub fn message_list(props: &BoardProps) -> Html {
    let strings = props.locale.strings();
    if props.board.recent_messages.is_empty() {
        return html! {};
    }

    html! {
        <div style="margin-top:1em;">
            <h3>{ strings.latest_msg }</h3>
            <ul style="list-style:none; padding-left:0;">
                { for props.board.recent_messages.iter().map(|message| html! {
                    <li style="margin:0.3em 0;" title={message.timestamp.clone()}>
                        { format!("💌 {}", message.text) }
                    </li>
                })}
            </ul>
        </div>
    }
}

#[function_component(HugList)]
pub fn hug_list(props: &BoardProps) -> Html {
    let strings = props.locale.strings();
    let board = &props.board;

    html! {
        <div style="margin-top:1em;">
            <h3>{ format!("{}{}", strings.total_hugs, board.total_hugs) }</h3>
            { if board.recent_hugs.is_empty() {
                html! {}
            } else {
                html! {
                    <>
                        <strong>{ strings.recent_hugs }</strong>
                        <ul style="list-style:none; padding-left:0;">
                            { for board.recent_hugs.iter().map(|hug| html! {
                                <li style="margin:0.3em 0;" title={hug.timestamp.clone()}>
                                    { format!("💜 {}", hug.name) }
                                </li>
                            })}
                        </ul>
                    </>
                }
            }}
        </div>
    }
}
