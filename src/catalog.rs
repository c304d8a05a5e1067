//! User-facing text for generated plans.
//!
//! Generators never hard-code labels or goal sentences; they read them from a
//! [`TextCatalog`] so the same schedule structure can be produced in any
//! supported language.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en", alias = "english")]
    English,
    #[serde(rename = "ja", alias = "japanese")]
    Japanese,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Japanese => "ja",
        }
    }

    pub fn catalog(self) -> &'static TextCatalog {
        match self {
            Locale::English => &ENGLISH,
            Locale::Japanese => &JAPANESE,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ja" | "japanese" => Ok(Locale::Japanese),
            other => Err(format!("unknown locale '{other}' (expected en or ja)")),
        }
    }
}

/// Personalization axis for the adaptive plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusArea {
    #[default]
    Balanced,
    Conversation,
    Reading,
    Exam,
}

impl FocusArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusArea::Balanced => "balanced",
            FocusArea::Conversation => "conversation",
            FocusArea::Reading => "reading",
            FocusArea::Exam => "exam",
        }
    }

    /// Resolves a free-form label. Anything unrecognised is treated as
    /// `Balanced`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "conversation" => FocusArea::Conversation,
            "reading" => FocusArea::Reading,
            "exam" => FocusArea::Exam,
            _ => FocusArea::Balanced,
        }
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource table of every string a generated plan shows to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextCatalog {
    pub locale: Locale,
    pub on_demand_lesson: &'static str,
    pub quiz: &'static str,
    pub buffer_review: &'static str,
    pub level_up_test: &'static str,
    pub ai_review: &'static str,
    pub focus_practice: &'static str,
    pub integrated_check: &'static str,
    /// Appended to a lesson module id to mark the review session.
    pub review_suffix: &'static str,
    pub level_goals: [&'static str; 3],
    pub fallback_level_goal: &'static str,
    pub level_up_goal: &'static str,
    pub focus_goals: [&'static str; 4],
    pub fixed_title: &'static str,
    pub adaptive_title: &'static str,
}

impl TextCatalog {
    pub fn level_goal(&self, level: u32) -> &'static str {
        match level {
            1 => self.level_goals[0],
            2 => self.level_goals[1],
            3 => self.level_goals[2],
            _ => self.fallback_level_goal,
        }
    }

    pub fn focus_goal(&self, focus: FocusArea) -> &'static str {
        match focus {
            FocusArea::Balanced => self.focus_goals[0],
            FocusArea::Conversation => self.focus_goals[1],
            FocusArea::Reading => self.focus_goals[2],
            FocusArea::Exam => self.focus_goals[3],
        }
    }

    /// Focus sentence followed by the recommended daily pace.
    pub fn weekly_goal(&self, focus: FocusArea, daily_minutes: u32) -> String {
        let sentence = self.focus_goal(focus);
        match self.locale {
            Locale::English => {
                format!("{sentence} (recommended pace: {daily_minutes} min/day)")
            }
            Locale::Japanese => format!("{sentence}（推奨ペース: 1日{daily_minutes}分）"),
        }
    }
}

pub static ENGLISH: TextCatalog = TextCatalog {
    locale: Locale::English,
    on_demand_lesson: "On-demand lesson",
    quiz: "Quiz",
    buffer_review: "Buffer day / AI review",
    level_up_test: "Level-up test",
    ai_review: "AI review / refresh",
    focus_practice: "Focus practice",
    integrated_check: "Integrated check",
    review_suffix: " review",
    level_goals: [
        "Use AI tutor support to reach 90%+ accuracy on vocabulary and basic sentence patterns",
        "Stabilize short-sentence output with the help of voice input",
        "Confirm practical use through N4-level reading and listening",
    ],
    fallback_level_goal: "Strengthen the fundamentals needed for the next level",
    level_up_goal: "Confirm at least 80% mastery before moving on to the next level",
    focus_goals: [
        "Grow vocabulary, grammar and listening evenly",
        "Prioritize speaking practice and natural conversational responses",
        "Strengthen reading comprehension and kanji recognition",
        "Prepare for the proficiency exam with timed practice questions",
    ],
    fixed_title: "AI Auto-Generated Schedule (Mockup)",
    adaptive_title: "AI Personalized Schedule",
};

pub static JAPANESE: TextCatalog = TextCatalog {
    locale: Locale::Japanese,
    on_demand_lesson: "オンデマンド",
    quiz: "小テスト",
    buffer_review: "予備日 / AIレビュー",
    level_up_test: "レベルアップテスト",
    ai_review: "AIレビュー / 復習",
    focus_practice: "重点練習",
    integrated_check: "総合チェック",
    review_suffix: "復習",
    level_goals: [
        "AIの講師サポートを活用しながら、単語と基本文型を90%以上正答する",
        "音声入力を併用し、短文のアウトプットを安定させる",
        "N4レベルの読解・聴解を通じて実践運用を確認する",
    ],
    fallback_level_goal: "次のレベルに進むための基礎を固める",
    level_up_goal: "学習到達度80%以上を確認して次のレベルへ進む",
    focus_goals: [
        "語彙・文法・聴解をバランスよく伸ばす",
        "会話練習を優先し、自然な受け答えを身につける",
        "読解力と漢字の認識力を強化する",
        "時間を計った演習問題で検定試験に備える",
    ],
    fixed_title: "AIによる自動スケジュール案 (モックアップ)",
    adaptive_title: "AIパーソナライズ学習スケジュール",
};
