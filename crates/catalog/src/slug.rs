/// URL-friendly form of a display name: lowercase ASCII alphanumerics with
/// every other run of characters collapsed into a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_and_spaces() {
        assert_eq!(slugify("Mystery & Thriller"), "mystery-thriller");
        assert_eq!(slugify("Dr. Patricia Martinez"), "dr-patricia-martinez");
        assert_eq!(slugify("Self-Help"), "self-help");
        assert_eq!(slugify("  Science   Fiction "), "science-fiction");
    }

    #[test]
    fn non_ascii_characters_act_as_separators() {
        assert_eq!(slugify("Café Stories"), "caf-stories");
        assert_eq!(slugify("Über"), "ber");
    }

    #[test]
    fn empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("&&"), "");
    }
}
