use livecap::{
    levenshtein_distance, normalize_url, replace_newlines, shorten_display_sentence, similarity,
};

#[test]
fn test_garbage_flood() {
    // Simulate a flood of hostile caption text through every transform
    let garbage = [
        "",
        " ",
        "\n",
        "\n\n\n",
        "asdfghjkl",
        "!!! @@@ ###",
        ",,,,,,",
        "你好，世界、こんにちは。안녕하세요",
        "https://////",
        "mixed 中文 and english text",
        "extremely long string that doesn't mean anything to the system at all but might cause buffer issues if we were in C but we are in Rust so it's just a long string",
    ];

    for text in garbage {
        let _ = shorten_display_sentence(text, 12);
        let _ = replace_newlines(text, 12);
        let _ = normalize_url(text);

        for other in garbage {
            let score = similarity(text, other);
            assert!(
                (0.0..=1.0).contains(&score),
                "similarity out of range for {text:?} vs {other:?}: {score}"
            );
            assert_eq!(
                levenshtein_distance(text, other),
                levenshtein_distance(other, text),
                "distance not symmetric for {text:?} vs {other:?}"
            );
        }
    }
}

#[test]
fn test_similarity_identity_holds() {
    let samples = ["", "play beethoven", "你好，世界", "  spaced  "];
    for x in samples {
        assert_eq!(similarity(x, x), 1.0);
        assert_eq!(levenshtein_distance(x, x), 0);
    }
}

#[test]
fn test_shorten_never_grows() {
    let texts = [
        "one, two, three, four, five, six, seven",
        "短句，这是一个比较长的句子，结尾",
        "no separators here at all",
    ];
    for text in texts {
        for max in [0, 1, 8, 24, 1000] {
            let once = shorten_display_sentence(text, max);
            assert!(once.len() <= text.len());
            // A second pass with the same budget changes nothing
            assert_eq!(shorten_display_sentence(&once, max), once);
        }
    }
}

#[test]
fn test_shorten_keeps_unseparated_text() {
    let text = "no separators here at all";
    assert_eq!(shorten_display_sentence(text, 4), text);
}
