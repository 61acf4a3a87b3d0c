use jobguard_core::redflags::detector::{detect_red_flags, RedFlagDetector};
use jobguard_core::redflags::lexicon::{Matcher, DEFAULT_RULES};

#[test]
fn phone_and_telegram_handle_are_both_reported() {
    let flags = detect_red_flags(
        "Marketing Intern BrightPath Message @scammer123 on Telegram or call 9876543210",
    );
    assert!(flags.contains("phone number shared"));
    assert!(flags.contains("telegram username shared"));
    assert!(flags.contains("telegram"));
}

#[test]
fn telegram_handle_does_not_need_adjacency() {
    let flags = detect_red_flags("Reach @hr_team for details. We also post updates on telegram.");
    assert!(flags.contains("telegram username shared"));
}

#[test]
fn three_lexicon_hits_in_table_order() {
    let flags = detect_red_flags(
        "URGENT HIRING: pay the registration fee, then ping us on WhatsApp",
    );
    assert_eq!(
        flags.as_slice(),
        ["registration fee", "whatsapp", "urgent hiring"]
    );
}

#[test]
fn patterns_follow_lexicon_hits() {
    let flags = detect_red_flags(
        "Security deposit via UPI. Earn ₹ 25000 per week. Call 9123456780.",
    );
    assert_eq!(
        flags.as_slice(),
        [
            "deposit",
            "security deposit",
            "upi mentioned",
            "phone number shared",
            "suspicious high earning claim",
        ]
    );
}

#[test]
fn blank_text_has_no_flags() {
    assert!(detect_red_flags("").is_empty());
    assert!(detect_red_flags(" \n\t ").is_empty());
}

#[test]
fn legitimate_posting_has_no_flags() {
    let flags = detect_red_flags(
        "Senior Backend Engineer at Acme. Design services in Rust; competitive pay and benefits.",
    );
    assert!(flags.is_empty(), "unexpected flags: {:?}", flags);
}

#[test]
fn detection_is_deterministic_and_duplicate_free() {
    let detector = RedFlagDetector::new();
    let text = "whatsapp WHATSAPP message on whatsapp deposit deposit telegram @x dm on telegram \
                work from home part time work from home upi upi 9876543210 9876543211";
    let first = detector.detect(text);
    for _ in 0..5 {
        assert_eq!(detector.detect(text), first);
    }
    let mut labels: Vec<&str> = first.iter().collect();
    let total = labels.len();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), total);
}

#[test]
fn every_phrase_rule_is_lowercase_and_trimmed() {
    for rule in DEFAULT_RULES {
        if let Matcher::Phrase(p) = rule.matcher {
            assert_eq!(p, p.trim());
            assert_eq!(p, p.to_lowercase());
        }
    }
}
