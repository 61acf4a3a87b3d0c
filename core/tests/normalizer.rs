use jobguard_core::text::{normalize, normalize_opt};

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "Hello",
    "  Data   Entry\tOperator \n\n Work From HOME ",
    "URGENT\r\nHIRING!!!",
    "Earn ₹5000 PER DAY\u{00A0}now",
    "İstanbul Office — ÇALIŞAN",
    "line1\u{2028}line2\u{3000}line3",
    "@Scammer123 on TELEGRAM",
];

#[test]
fn normalize_is_idempotent() {
    for s in SAMPLES {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
    }
}

#[test]
fn output_has_no_edge_or_repeated_whitespace() {
    for s in SAMPLES {
        let n = normalize(s);
        assert_eq!(n.trim(), n);
        assert!(!n.contains("  "));
        assert!(!n.contains('\n') && !n.contains('\t'));
    }
}

#[test]
fn none_is_empty() {
    assert_eq!(normalize_opt(None), "");
    assert_eq!(normalize_opt(Some("  A  B ")), "a b");
}
