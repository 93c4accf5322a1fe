use guestbook_core::{GifRequest, HugRequest, Locale, MessageRequest, Notice};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{fetch_page, next_gif, submit_hug, submit_message};
use crate::components::{GifViewer, HugList, MessageList, NoticeBanner};
use crate::session::{remember_session_id, stored_session_id};
use crate::types::{LoadState, PageAction, PageData};

const PURPLE_OCEAN_CSS: &str = r#"
@keyframes oceanGlow {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
}
@keyframes scroll-left {
    0% { transform: translateX(100%); }
    100% { transform: translateX(-100%); }
}
"#;

const OCEAN_BACKGROUND: &str = "background: linear-gradient(270deg, #3a0ca3, #7209b7, #b5179e, #f72585); background-size: 800% 800%; animation: oceanGlow 15s ease infinite;";

#[function_component(App)]
pub fn app(_props: &()) -> Html {
    let locale = use_state(Locale::default);
    let purple_ocean = use_state(|| false);
    let session_id = use_state(stored_session_id);
    let page = use_reducer(PageData::default);
    let load_state = use_state(|| LoadState::Loading);
    let name = use_state(String::new);
    let message = use_state(String::new);

    // Reload the page whenever the language changes
    {
        let session_id = session_id.clone();
        let page = page.clone();
        let load_state = load_state.clone();
        use_effect_with(*locale, move |locale| {
            let locale = *locale;
            let current_session = (*session_id).clone();
            load_state.set(LoadState::Loading);
            spawn_local(async move {
                match fetch_page(current_session, locale).await {
                    Ok(view) => {
                        remember_session_id(&view.session_id);
                        session_id.set(Some(view.session_id.clone()));
                        page.dispatch(PageAction::Loaded(view));
                        load_state.set(LoadState::Ready);
                    }
                    Err(e) => {
                        let error_msg = format!("Error loading page: {:?}", e);
                        web_sys::console::log_1(&error_msg.clone().into());
                        load_state.set(LoadState::Error(error_msg));
                    }
                }
            });
            || ()
        });
    }

    let on_locale_change = {
        let locale = locale.clone();
        Callback::from(move |event: Event| {
            let target = event.target_unchecked_into::<HtmlSelectElement>();
            if let Ok(selected) = target.value().parse::<Locale>() {
                locale.set(selected);
            }
        })
    };

    let on_theme_toggle = {
        let purple_ocean = purple_ocean.clone();
        Callback::from(move |event: Event| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            purple_ocean.set(target.checked());
        })
    };

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            name.set(target.value());
        })
    };

    let on_message_input = {
        let message = message.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlTextAreaElement>();
            message.set(target.value());
        })
    };

    let on_hug = {
        let session_id = session_id.clone();
        let locale = locale.clone();
        let name = name.clone();
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(id) = (*session_id).clone() else {
                return;
            };
            let request = HugRequest {
                session_id: id,
                locale: *locale,
                name: (*name).clone(),
            };
            let page = page.clone();
            spawn_local(async move {
                match submit_hug(&request).await {
                    Ok(response) => page.dispatch(PageAction::Submitted(response)),
                    Err(e) => {
                        web_sys::console::log_1(&format!("Error sending hug: {:?}", e).into());
                        page.dispatch(PageAction::SubmitFailed(Notice::store_unavailable(
                            request.locale,
                        )));
                    }
                }
            });
        })
    };

    let on_message = {
        let session_id = session_id.clone();
        let locale = locale.clone();
        let message = message.clone();
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(id) = (*session_id).clone() else {
                return;
            };
            let request = MessageRequest {
                session_id: id,
                locale: *locale,
                text: (*message).clone(),
            };
            let page = page.clone();
            spawn_local(async move {
                match submit_message(&request).await {
                    Ok(response) => page.dispatch(PageAction::Submitted(response)),
                    Err(e) => {
                        web_sys::console::log_1(&format!("Error sending message: {:?}", e).into());
                        page.dispatch(PageAction::SubmitFailed(Notice::store_unavailable(
                            request.locale,
                        )));
                    }
                }
            });
        })
    };

    let on_next_gif = {
        let session_id = session_id.clone();
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(id) = (*session_id).clone() else {
                return;
            };
            let page = page.clone();
            spawn_local(async move {
                match next_gif(&GifRequest { session_id: id }).await {
                    Ok(frame) => page.dispatch(PageAction::GifMoved(frame)),
                    Err(e) => {
                        web_sys::console::log_1(&format!("Error loading next gif: {:?}", e).into());
                    }
                }
            });
        })
    };

    let strings = locale.strings();
    let view = page.view.clone();
    let root_style = format!(
        "min-height:100vh; font-family:Arial,sans-serif; {}",
        if *purple_ocean { OCEAN_BACKGROUND } else { "background:#faf7ff;" }
    );

    html! {
        <div style={root_style}>
            <style>{ PURPLE_OCEAN_CSS }</style>
            <div style="display:flex; flex-direction:row; min-height:100vh;">
                <div style="width:260px; min-width:220px; padding:1.5em; background:#f3eefc; border-right:1px solid #ddd; display:flex; flex-direction:column; gap:0.5em;">
                    <h2 style="margin:0 0 0.5em 0;">{ strings.choose_language }</h2>
                    <label style="font-weight:bold; color:#555;">{ strings.select_language }</label>
                    <select onchange={on_locale_change} style="width:100%; padding:0.5em; border:1px solid #ccc; border-radius:4px;">
                        { for Locale::ALL.iter().map(|option| html! {
                            <option value={option.code()} selected={*option == *locale}>{ option.label() }</option>
                        })}
                    </select>
                </div>

                <div style="flex:1; max-width:760px; margin:0 auto; padding:1.5em 2em;">
                    <label style="display:flex; align-items:center; gap:0.5em; cursor:pointer;">
                        <input type="checkbox" checked={*purple_ocean} onchange={on_theme_toggle} />
                        { strings.purple_ocean }
                    </label>

                    <h1 style="color:#6a1b9a;">{ strings.welcome }</h1>
                    <h2>{ strings.love_from_army }</h2>
                    <h3>{ strings.headline }</h3>

                    { match &*load_state {
                        LoadState::Loading => html! {
                            <div style="color:#6a1b9a; margin:0.5em 0;">{ "💜 ..." }</div>
                        },
                        LoadState::Error(msg) => html! {
                            <NoticeBanner notices={vec![Notice::error(msg.clone())]} />
                        },
                        LoadState::Ready => html! {},
                    }}

                    <NoticeBanner notices={page.notices.clone()} />

                    { if let Some(music) = view.as_ref().and_then(|v| v.music.clone()) {
                        html! { <audio controls=true src={music.url} style="width:100%; margin:1em 0;" /> }
                    } else {
                        html! {}
                    }}

                    <h3>{ strings.leave_msg }</h3>
                    <label style="display:block; color:#555; margin-bottom:0.3em;">{ strings.your_msg }</label>
                    <textarea
                        rows=4
                        value={(*message).clone()}
                        oninput={on_message_input}
                        style="width:100%; padding:0.5em; box-sizing:border-box; border:1px solid #ccc; border-radius:4px;"
                    />
                    <button onclick={on_message} style="margin-top:0.5em; padding:0.6em 1.2em; cursor:pointer;">
                        { strings.send_msg }
                    </button>
                    <MessageList board={page.board.clone()} locale={*locale} />

                    <GifViewer
                        frame={view.as_ref().and_then(|v| v.gif.clone())}
                        locale={*locale}
                        on_next={on_next_gif}
                    />

                    <h3>{ strings.send_hug }</h3>
                    <label style="display:block; color:#555; margin-bottom:0.3em;">{ strings.your_name }</label>
                    <input
                        type="text"
                        value={(*name).clone()}
                        oninput={on_name_input}
                        style="width:100%; padding:0.5em; box-sizing:border-box; border:1px solid #ccc; border-radius:4px;"
                    />
                    <button onclick={on_hug} style="margin-top:0.5em; padding:0.6em 1.2em; cursor:pointer;">
                        { strings.hug_button }
                    </button>
                    <HugList board={page.board.clone()} locale={*locale} />

                    { if let Some(image) = view.as_ref().and_then(|v| v.image.clone()) {
                        html! {
                            <figure style="margin:1.5em 0; text-align:center;">
                                <img src={image.url} alt={image.file_name} style="width:100%; border-radius:8px;" />
                                <figcaption style="color:#666;">{ strings.image_caption }</figcaption>
                            </figure>
                        }
                    } else {
                        html! {}
                    }}

                    <hr />
                    <div style="overflow:hidden; white-space:nowrap;">
                        <div style="display:inline-block; animation:scroll-left 12s linear infinite; font-size:20px; color:#a855f7; text-shadow:0 0 6px #9333ea;">
                            { strings.footer }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
