/// Truncates display names on the teams and scoreboard tables. Counts
/// characters, not bytes, so multi-byte names do not split mid-glyph.
pub fn trunc(text: &str, length: usize) -> String {
    if text.chars().count() > length {
        let cut: String = text.chars().take(length - 1).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_pass_through() {
        assert_eq!(trunc("p4", 15), "p4");
        assert_eq!(trunc("exactly15chars!", 15), "exactly15chars!");
    }

    #[test]
    fn long_names_get_an_ellipsis() {
        assert_eq!(trunc("a-very-long-team-name", 15), "a-very-long-te...");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(trunc("zażółć gęślą jaźń", 10), "zażółć gę...");
    }
}
