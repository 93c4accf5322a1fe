//! UI string table. Every locale fills in every field of [`UiStrings`], so a
//! missing key is a compile error rather than a runtime fallback.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serialized as its code; deserialized with the same aliases as `FromStr`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ko];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }

    /// Name shown in the language selector.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ko => "한국어",
        }
    }

    pub fn strings(&self) -> &'static UiStrings {
        match self {
            Locale::En => &ENGLISH,
            Locale::Ko => &KOREAN,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ko" | "korean" | "한국어" => Ok(Locale::Ko),
            other => Err(anyhow!("unsupported locale '{}'", other)),
        }
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UiStrings {
    pub welcome: &'static str,
    pub headline: &'static str,
    pub love_from_army: &'static str,
    pub purple_ocean: &'static str,
    pub choose_language: &'static str,
    pub select_language: &'static str,
    pub send_hug: &'static str,
    pub your_name: &'static str,
    pub hug_button: &'static str,
    pub hug_sent: &'static str,
    pub duplicate: &'static str,
    pub total_hugs: &'static str,
    pub recent_hugs: &'static str,
    pub leave_msg: &'static str,
    pub your_msg: &'static str,
    pub send_msg: &'static str,
    pub msg_sent: &'static str,
    pub latest_msg: &'static str,
    pub next_gif: &'static str,
    pub gif_caption: &'static str,
    pub image_caption: &'static str,
    pub footer: &'static str,
    pub store_unavailable: &'static str,
    pub board_unavailable: &'static str,
    pub setup_failed: &'static str,
}

impl UiStrings {
    /// (key, text) pairs, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("welcome", self.welcome),
            ("headline", self.headline),
            ("love_from_army", self.love_from_army),
            ("purple_ocean", self.purple_ocean),
            ("choose_language", self.choose_language),
            ("select_language", self.select_language),
            ("send_hug", self.send_hug),
            ("your_name", self.your_name),
            ("hug_button", self.hug_button),
            ("hug_sent", self.hug_sent),
            ("duplicate", self.duplicate),
            ("total_hugs", self.total_hugs),
            ("recent_hugs", self.recent_hugs),
            ("leave_msg", self.leave_msg),
            ("your_msg", self.your_msg),
            ("send_msg", self.send_msg),
            ("msg_sent", self.msg_sent),
            ("latest_msg", self.latest_msg),
            ("next_gif", self.next_gif),
            ("gif_caption", self.gif_caption),
            ("image_caption", self.image_caption),
            ("footer", self.footer),
            ("store_unavailable", self.store_unavailable),
            ("board_unavailable", self.board_unavailable),
            ("setup_failed", self.setup_failed),
        ]
    }
}

static ENGLISH: UiStrings = UiStrings {
    welcome: "💜 Welcome Back, Min Yoongi 💜",
    headline: "💜 Yoongi is back! Welcome home, Min Yoongi! 🎉",
    love_from_army: "💖 Love from ARMYs",
    purple_ocean: "🌊 Enable Purple Ocean Mode",
    choose_language: "🌐 Choose Language",
    select_language: "Select your language",
    send_hug: "🤗 Send a Hug to Yoongi",
    your_name: "Your Name (optional)",
    hug_button: "💜 Hug",
    hug_sent: "💜 Hug sent! Thank you ",
    duplicate: "⚠️ You already sent this hug. Try changing the name!",
    total_hugs: "🤗 Total Hugs Sent: ",
    recent_hugs: "🌍 Recent Hugs Sent By:",
    leave_msg: "💌 Leave a Message for Yoongi",
    your_msg: "Your Message to Yoongi 💜",
    send_msg: "📨 Send Message",
    msg_sent: "💜 Message sent to Yoongi! Thank you!",
    latest_msg: "📨 Latest Messages:",
    next_gif: "➡️ Next Gif",
    gif_caption: "💜 Yoongi - ",
    image_caption: "💜 Love from ARMY",
    footer: "💜 ARMY Forever 💜 Yoongi is home 💜 ARMY Forever 💜 Yoongi is home 💜",
    store_unavailable: "⚠️ The guestbook is unreachable right now. Your submission was not saved.",
    board_unavailable: "⚠️ The latest hugs and messages could not be loaded right now.",
    setup_failed: "❌ Google Sheets setup failed: ",
};

static KOREAN: UiStrings = UiStrings {
    welcome: "💜 민윤기, 돌아와줘서 고마워요 💜",
    headline: "💜 윤기가 돌아왔어요! 어서 와요, 민윤기! 🎉",
    love_from_army: "💖 아미의 사랑",
    purple_ocean: "🌊 퍼플 오션 모드 켜기",
    choose_language: "🌐 언어 선택",
    select_language: "언어를 선택하세요",
    send_hug: "🤗 윤기에게 포옹 보내기",
    your_name: "이름 (선택사항)",
    hug_button: "💜 포옹",
    hug_sent: "💜 포옹이 전송되었습니다! 감사합니다 ",
    duplicate: "⚠️ 이미 이 포옹을 보냈어요. 이름을 바꿔보세요!",
    total_hugs: "🤗 총 포옹 수: ",
    recent_hugs: "🌍 최근 포옹:",
    leave_msg: "💌 윤기에게 메시지 남기기",
    your_msg: "윤기에게 전하고 싶은 말 💜",
    send_msg: "📨 메시지 보내기",
    msg_sent: "💜 메시지가 전송되었습니다! 감사합니다!",
    latest_msg: "📨 최근 메시지:",
    next_gif: "➡️ 다음 GIF",
    gif_caption: "💜 윤기 - ",
    image_caption: "💜 아미의 사랑을 담아",
    footer: "💜 아미 포에버 💜 윤기가 돌아왔어요 💜 아미 포에버 💜 윤기가 돌아왔어요 💜",
    store_unavailable: "⚠️ 지금은 방명록에 연결할 수 없어요. 저장되지 않았습니다.",
    board_unavailable: "⚠️ 지금은 최근 포옹과 메시지를 불러올 수 없어요.",
    setup_failed: "❌ 구글 시트 설정 실패: ",
};
