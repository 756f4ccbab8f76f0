//! Related-content rendering.
//!
//! Renders a "more like this" block for an item page: every other item of a
//! pre-built collection as a linked list, with the current page excluded.
//! When nothing else exists in the collection the block degrades to an HTML
//! comment instead of an empty `<ul>`.

use maud::{Markup, PreEscaped, html};

use crate::types::ContentItem;

/// Default CSS class for the related-content section.
pub const DEFAULT_CLASS: &str = "related";

/// Render a related-content section from `collection`, excluding the item
/// whose URL equals `current_url`.
///
/// The heading is emitted only when `title` is non-empty. Pass
/// [`DEFAULT_CLASS`] for the stock styling hook. Pure — inputs are not
/// mutated.
pub fn render_related(
    collection: &[&ContentItem],
    title: &str,
    current_url: &str,
    css_class: &str,
) -> Markup {
    let others: Vec<&&ContentItem> = collection
        .iter()
        .filter(|item| item.url != current_url)
        .collect();

    if others.is_empty() {
        let comment = format!(
            "<!-- No related content found for \"{}\" -->",
            title.replace("--", "__")
        );
        return PreEscaped(comment);
    }

    html! {
        section class=(css_class) {
            @if !title.is_empty() {
                h2 { (title) }
            }
            ul {
                @for item in others {
                    li {
                        a href=(item.url) { (item.title) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::item;

    #[test]
    fn excludes_current_url() {
        let a = item("/a", "A").with_tags(&["posts"]);
        let b = item("/b", "B").with_tags(&["posts"]);
        let collection = vec![&a, &b];
        let html = render_related(&collection, "More", "/a", DEFAULT_CLASS).into_string();

        assert!(html.contains(r#"<a href="/b">B</a>"#));
        assert!(!html.contains(r#"href="/a""#));
        assert!(html.contains("<h2>More</h2>"));
    }

    #[test]
    fn empty_collection_yields_placeholder_not_list() {
        let html = render_related(&[], "X", "/a/", DEFAULT_CLASS).into_string();
        assert!(!html.contains("<li>"));
        assert!(!html.contains("<ul>"));
        assert!(html.contains("<!--"));
        assert!(html.contains('X'));
    }

    #[test]
    fn collection_of_only_current_item_yields_placeholder() {
        let a = item("/a/", "A");
        let collection = vec![&a];
        let html = render_related(&collection, "More", "/a/", DEFAULT_CLASS).into_string();
        assert!(!html.contains("<li>"));
        assert!(html.contains("No related content"));
    }

    #[test]
    fn empty_title_omits_heading() {
        let a = item("/a", "A");
        let b = item("/b", "B");
        let collection = vec![&a, &b];
        let html = render_related(&collection, "", "/a", DEFAULT_CLASS).into_string();
        assert!(!html.contains("<h2>"));
        assert!(html.contains("<li>"));
    }

    #[test]
    fn custom_css_class() {
        let a = item("/a", "A");
        let b = item("/b", "B");
        let collection = vec![&a, &b];
        let html = render_related(&collection, "", "/a", "see-also").into_string();
        assert!(html.contains(r#"<section class="see-also">"#));
    }

    #[test]
    fn titles_are_escaped() {
        let a = item("/a", "A");
        let b = item("/b", "<script>alert('xss')</script>");
        let collection = vec![&a, &b];
        let html = render_related(&collection, "", "/a", DEFAULT_CLASS).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn comment_placeholder_cannot_break_out() {
        // "--" inside a comment would terminate it early
        let html = render_related(&[], "bad -- title", "/a/", DEFAULT_CLASS).into_string();
        assert!(!html.contains("--\""));
        assert!(html.contains("<!--"));
    }
}
