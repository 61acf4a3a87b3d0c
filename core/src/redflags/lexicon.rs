use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlagCategory {
    PAYMENT_DEMAND,
    NO_INTERVIEW,
    OFF_PLATFORM_CONTACT,
    URGENCY,
    IMPLAUSIBLE_EARNINGS,
    CLICK_BAIT,
    WORK_FROM_HOME,
}

/// Structural checks that need more than a substring test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Standalone `upi` token.
    UpiMention,
    /// Any `@handle` plus the word "telegram" anywhere in the text. The two
    /// do not have to be adjacent.
    TelegramHandle,
    /// A 10-digit numeral token.
    PhoneNumber,
    /// Rupee amount of 4+ digits alongside "per day" / "per week".
    HighEarningClaim,
}

impl PatternKind {
    /// `text` must already be normalized.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            PatternKind::UpiMention => upi_regex().is_match(text),
            PatternKind::TelegramHandle => {
                handle_regex().is_match(text) && text.contains("telegram")
            }
            PatternKind::PhoneNumber => phone_regex().is_match(text),
            PatternKind::HighEarningClaim => {
                rupee_amount_regex().is_match(text)
                    && (text.contains("per day") || text.contains("per week"))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Phrase(&'static str),
    Pattern(PatternKind),
}

impl Matcher {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Matcher::Phrase(p) => normalized.contains(p),
            Matcher::Pattern(kind) => kind.matches(normalized),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedFlagRule {
    pub label: &'static str,
    pub category: FlagCategory,
    pub matcher: Matcher,
}

const fn phrase(label: &'static str, category: FlagCategory) -> RedFlagRule {
    RedFlagRule {
        label,
        category,
        matcher: Matcher::Phrase(label),
    }
}

const fn pattern(label: &'static str, category: FlagCategory, kind: PatternKind) -> RedFlagRule {
    RedFlagRule {
        label,
        category,
        matcher: Matcher::Pattern(kind),
    }
}

use FlagCategory::*;

/// Evaluated top to bottom; output order follows this table.
pub static DEFAULT_RULES: &[RedFlagRule] = &[
    phrase("registration fee", PAYMENT_DEMAND),
    phrase("processing fee", PAYMENT_DEMAND),
    phrase("pay money", PAYMENT_DEMAND),
    phrase("payment required", PAYMENT_DEMAND),
    phrase("deposit", PAYMENT_DEMAND),
    phrase("fee required", PAYMENT_DEMAND),
    phrase("pay first", PAYMENT_DEMAND),
    phrase("pay to confirm", PAYMENT_DEMAND),
    phrase("security deposit", PAYMENT_DEMAND),
    phrase("no interview", NO_INTERVIEW),
    phrase("instant joining", NO_INTERVIEW),
    phrase("direct joining", NO_INTERVIEW),
    phrase("whatsapp", OFF_PLATFORM_CONTACT),
    phrase("telegram", OFF_PLATFORM_CONTACT),
    phrase("dm on telegram", OFF_PLATFORM_CONTACT),
    phrase("message on whatsapp", OFF_PLATFORM_CONTACT),
    phrase("limited seats", URGENCY),
    phrase("urgent hiring", URGENCY),
    phrase("apply immediately", URGENCY),
    phrase("hurry up", URGENCY),
    phrase("only today", URGENCY),
    phrase("limited offer", URGENCY),
    phrase("earn per day", IMPLAUSIBLE_EARNINGS),
    phrase("earn per week", IMPLAUSIBLE_EARNINGS),
    phrase("earn daily", IMPLAUSIBLE_EARNINGS),
    phrase("earn weekly", IMPLAUSIBLE_EARNINGS),
    phrase("high salary", IMPLAUSIBLE_EARNINGS),
    phrase("easy money", IMPLAUSIBLE_EARNINGS),
    phrase("click here", CLICK_BAIT),
    phrase("link below", CLICK_BAIT),
    // Not a scam signal alone, but it compounds with the others.
    phrase("work from home", WORK_FROM_HOME),
    phrase("part time work from home", WORK_FROM_HOME),
    pattern("upi mentioned", PAYMENT_DEMAND, PatternKind::UpiMention),
    pattern(
        "telegram username shared",
        OFF_PLATFORM_CONTACT,
        PatternKind::TelegramHandle,
    ),
    pattern(
        "phone number shared",
        OFF_PLATFORM_CONTACT,
        PatternKind::PhoneNumber,
    ),
    pattern(
        "suspicious high earning claim",
        IMPLAUSIBLE_EARNINGS,
        PatternKind::HighEarningClaim,
    ),
];

fn upi_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bupi\b").expect("static regex"))
}

fn handle_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@\w+").expect("static regex"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d{10}\b").expect("static regex"))
}

fn rupee_amount_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"₹\s?\d{4,}").expect("static regex"))
}
