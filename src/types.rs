use std::rc::Rc;

use guestbook_core::{GifFrame, GuestbookBoard, Notice, PageView, SubmissionResponse};
use yew::functional::Reducible;

/// What the page shows while it talks to the backend.
#[derive(Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Error(String),
}

/// Page data held between interactions.
#[derive(Clone, PartialEq, Default)]
pub struct PageData {
    pub view: Option<PageView>,
    pub board: GuestbookBoard,
    pub notices: Vec<Notice>,
}

/// Backend replies. Each one only touches the fields it carries, so replies
/// arriving out of order do not undo each other.
pub enum PageAction {
    Loaded(PageView),
    Submitted(SubmissionResponse),
    SubmitFailed(Notice),
    GifMoved(Option<GifFrame>),
}

impl Reducible for PageData {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: PageAction) -> Rc<Self> {
        let mut data = (*self).clone();
        match action {
            PageAction::Loaded(view) => {
                data.board = view.board.clone();
                data.notices = view.notices.clone();
                data.view = Some(view);
            }
            PageAction::Submitted(response) => {
                data.notices = response.notices;
                data.board = response.board;
            }
            PageAction::SubmitFailed(notice) => data.notices = vec![notice],
            PageAction::GifMoved(frame) => {
                if let Some(view) = data.view.as_mut() {
                    view.gif = frame;
                }
            }
        }
        Rc::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guestbook_core::{Locale, MediaItem};

    fn view() -> PageView {
        PageView {
            session_id: "abc".to_string(),
            locale: Locale::En,
            notices: vec![],
            music: None,
            image: None,
            gif: None,
            board: GuestbookBoard::default(),
        }
    }

    fn frame(index: usize) -> GifFrame {
        GifFrame {
            index,
            total: 3,
            item: MediaItem {
                url: format!("/media/gif/gif{}.gif", index + 1),
                file_name: format!("gif{}.gif", index + 1),
            },
        }
    }

    #[test]
    fn test_gif_reply_survives_a_later_submission_reply() {
        let data = Rc::new(PageData::default()).reduce(PageAction::Loaded(view()));
        let data = data.reduce(PageAction::GifMoved(Some(frame(1))));
        let board = GuestbookBoard { total_hugs: 1, ..Default::default() };
        let data = data.reduce(PageAction::Submitted(SubmissionResponse {
            notices: vec![Notice::success("sent")],
            board: board.clone(),
        }));

        assert_eq!(data.view.as_ref().and_then(|v| v.gif.clone()), Some(frame(1)));
        assert_eq!(data.board, board);
        assert_eq!(data.notices, vec![Notice::success("sent")]);
    }

    #[test]
    fn test_failed_submission_keeps_the_board() {
        let board = GuestbookBoard { total_hugs: 4, ..Default::default() };
        let data = Rc::new(PageData { board: board.clone(), ..Default::default() });
        let data = data.reduce(PageAction::SubmitFailed(Notice::store_unavailable(Locale::Ko)));
        assert_eq!(data.board, board);
        assert_eq!(data.notices, vec![Notice::store_unavailable(Locale::Ko)]);
    }
}
