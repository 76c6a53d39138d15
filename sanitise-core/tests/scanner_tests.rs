use std::collections::BTreeSet;

use sanitise_core::{get_lossy_characters, get_non_compatible_characters, CharacterProfile};

fn set(chars: &[char]) -> BTreeSet<char> {
    chars.iter().copied().collect()
}

#[test]
fn gsm_control_chars_and_euro_are_compatible() {
    let content = "line1\nline2\r€";
    assert_eq!(get_non_compatible_characters(content, CharacterProfile::Gsm), set(&[]));
    assert_eq!(
        get_non_compatible_characters(content, CharacterProfile::Ascii),
        set(&['\n', '\r', '€'])
    );
}

#[test]
fn emoji_are_reported_once_each() {
    assert_eq!(
        get_non_compatible_characters("more 🐮🔔🐮", CharacterProfile::Gsm),
        set(&['🐮', '🔔'])
    );
}

#[test]
fn plain_text_is_fully_compatible() {
    let text = "The quick brown fox jumps over the lazy dog";
    for profile in CharacterProfile::ALL {
        assert!(get_non_compatible_characters(text, profile).is_empty());
        assert!(get_lossy_characters(text, profile).is_empty());
    }
}

#[test]
fn substituted_and_decomposed_chars_count_as_non_compatible() {
    let content = "The “quick” brown fox has some downgradable characters\u{A0}";
    assert_eq!(
        get_non_compatible_characters(content, CharacterProfile::Gsm),
        set(&['“', '”', '\u{A0}'])
    );
    assert_eq!(
        get_non_compatible_characters("café", CharacterProfile::Ascii),
        set(&['é'])
    );
}

#[test]
fn welsh_is_native_to_gsm() {
    let content = "Ŵêlsh chârâctêrs ârê cômpâtîblê wîth SMS";
    assert!(get_non_compatible_characters(content, CharacterProfile::Gsm).is_empty());
    assert_eq!(
        get_non_compatible_characters(content, CharacterProfile::Ascii),
        set(&['Ŵ', 'ê', 'â', 'ô', 'î'])
    );
    assert!(get_lossy_characters(content, CharacterProfile::Ascii).is_empty());
}

#[test]
fn lossy_characters_ignore_substitutions() {
    let content = "The “quick” brown fox has some downgradable characters\u{A0}";
    assert!(get_lossy_characters(content, CharacterProfile::Gsm).is_empty());
    assert_eq!(
        get_lossy_characters("Need more 🐮🔔", CharacterProfile::Gsm),
        set(&['🐮', '🔔'])
    );
}

#[test]
fn lossy_characters_exclude_supported_scripts() {
    let supported = [
        "이것은 테스트입니다",
        "Αυτό είναι ένα τεστ",
        "Это проверка",
        "นี่คือการทดสอบ",
        "இது ஒரு சோதனை",
        "これはテストです",
        "Đây là một bài kiểm tra",
        "这是一次测试",
        "Bunda Türkçe karakterler var",
    ];
    for content in supported {
        assert!(
            get_lossy_characters(content, CharacterProfile::Gsm).is_empty(),
            "{content}"
        );
    }
    assert_eq!(
        get_lossy_characters("𐤓𐤓𐤓𐤈𐤆", CharacterProfile::Gsm),
        set(&['𐤆', '𐤈', '𐤓'])
    );
}

#[test]
fn non_compatible_reports_scripts_the_lossy_scan_excuses() {
    let content = "Это";
    assert_eq!(
        get_non_compatible_characters(content, CharacterProfile::Gsm),
        set(&['Э', 'т', 'о'])
    );
    assert!(get_lossy_characters(content, CharacterProfile::Gsm).is_empty());
}
