//! Tiny inline-markup helpers for dictionary strings.

/// A run of text, emphasized or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub strong: bool,
}

/// Split `text` on `**` markers into alternating plain / strong runs.
///
/// Empty runs are dropped. An unmatched trailing marker emphasizes up to the end.
pub fn emphasis_runs(text: &str) -> Vec<TextRun<'_>> {
    text.split("**")
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(index, part)| TextRun {
            text: part,
            strong: index % 2 == 1,
        })
        .collect()
}

/// `("ORDER", "THE FUTURE")` for `"ORDER THE FUTURE"`; headings style the halves differently.
pub fn split_first_word(text: &str) -> (&str, &str) {
    text.trim().split_once(' ').unwrap_or((text.trim(), ""))
}

/// `tel:` link target with the spacing of the display number removed.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(text: &str, strong: bool) -> TextRun<'_> {
        TextRun { text, strong }
    }

    #[test]
    fn plain_text_is_a_single_run() {
        assert_eq!(emphasis_runs("Smart Asian Comfort"), vec![run("Smart Asian Comfort", false)]);
    }

    #[test]
    fn markers_alternate_emphasis() {
        assert_eq!(
            emphasis_runs("We are **delivery-first** — quality, **cheap**."),
            vec![
                run("We are ", false),
                run("delivery-first", true),
                run(" — quality, ", false),
                run("cheap", true),
                run(".", false),
            ]
        );
    }

    #[test]
    fn leading_marker_and_unmatched_tail() {
        assert_eq!(
            emphasis_runs("**bold** then **rest"),
            vec![run("bold", true), run(" then ", false), run("rest", true)]
        );
    }

    #[test]
    fn first_word_split() {
        assert_eq!(split_first_word("ORDER THE FUTURE"), ("ORDER", "THE FUTURE"));
        assert_eq!(split_first_word("Dlaczego MESO?"), ("Dlaczego", "MESO?"));
        assert_eq!(split_first_word("Inwestycja"), ("Inwestycja", ""));
    }

    #[test]
    fn phone_links_drop_spaces() {
        assert_eq!(tel_href("+48 508 118 783"), "tel:+48508118783");
    }
}
