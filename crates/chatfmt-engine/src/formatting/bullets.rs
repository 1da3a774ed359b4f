use super::kinds::Bullet;

/// Rewrites every list marker to the bullet glyph, keeping indentation.
///
/// Runs after emphasis so no italic rewrite can see a `*` bullet.
pub fn normalize_bullets(text: &str) -> String {
    let replacement = format!("${{1}}{} ", Bullet::GLYPH);
    Bullet::pattern()
        .replace_all(text, replacement.as_str())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unifies_all_markers() {
        let text = "- dash\n+ plus\n* star\n1. one\n2) two";
        assert_eq!(
            normalize_bullets(text),
            "• dash\n• plus\n• star\n• one\n• two"
        );
    }

    #[test]
    fn keeps_indentation_and_collapses_gap() {
        assert_eq!(normalize_bullets("  -   nested"), "  • nested");
    }

    #[test]
    fn leaves_prose_alone() {
        let text = "Rates rose 1.5% - again.";
        assert_eq!(normalize_bullets(text), text);
    }
}
