use std::fmt::Display;
use std::fmt::Formatter;

/// Escapes text for use inside HTML/SVG element content and quoted
/// attribute values, the same way the page template escapes its fields.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    tinytemplate::escape(text, &mut escaped);
    escaped
}

/// A pixel coordinate, written with at most two decimals.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Px(pub f64);

impl Display for Px {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;

        // Avoid printing `-0`.
        if rounded == 0.0 {
            return f.write_str("0");
        }

        write!(f, "{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_markup_characters() {
        assert_eq!(
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot; O&#39;Neil&lt;/b&gt;",
            escape(r#"<b>Tom & "Jerry" O'Neil</b>"#)
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!("Marco Pantani: ITA", escape("Marco Pantani: ITA"));
    }

    #[test]
    fn pixels_are_rounded_to_two_decimals() {
        assert_eq!("266.67", Px(800.0 / 3.0).to_string());
        assert_eq!("400", Px(400.0).to_string());
        assert_eq!("0", Px(-0.001).to_string());
        assert_eq!("-6", Px(-6.0).to_string());
    }
}
