use anyhow::anyhow;
use kuchiki::traits::TendrilSink as _;

/// Structural invariants the emitted page must satisfy before it is written:
/// one active nav link, one active section, a recognized theme class on the
/// body, and each feed container holding items or a single fallback message.
pub fn assert_page_invariants(html: &str) -> anyhow::Result<()> {
    let doc = kuchiki::parse_html().one(html);

    let body = doc
        .select_first("body")
        .map_err(|_| anyhow!("page has no body"))?;
    let theme_class = body
        .attributes
        .borrow()
        .get("class")
        .map(|s| s.to_string())
        .unwrap_or_default();
    if theme_class != "light-mode" && theme_class != "dark-mode" {
        anyhow::bail!(
            "body carries theme class {:?}, expected light-mode or dark-mode",
            theme_class
        );
    }

    let active_links = count(&doc, ".nav-links a.active");
    if active_links != 1 {
        anyhow::bail!("expected exactly 1 active nav link, found {}", active_links);
    }

    let active_sections = count(&doc, ".section.active");
    if active_sections != 1 {
        anyhow::bail!(
            "expected exactly 1 active section, found {}",
            active_sections
        );
    }

    for id in ["blog-posts", "projects-list"] {
        let container = doc
            .select_first(&format!("#{id}"))
            .map_err(|_| anyhow!("feed container #{id} is missing"))?;
        let children = container
            .as_node()
            .children()
            .filter(|c| c.as_element().is_some())
            .count();
        let fallbacks = count(&doc, &format!("#{id} > .feed-fallback"));

        if children == 0 {
            anyhow::bail!("feed container #{id} is empty");
        }
        if fallbacks > 1 || (fallbacks == 1 && children != 1) {
            anyhow::bail!("feed container #{id} mixes items and fallback");
        }
    }

    Ok(())
}

fn count(doc: &kuchiki::NodeRef, selector: &str) -> usize {
    doc.select(selector).map(|m| m.count()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body_class: &str, sections: &str, blog: &str, projects: &str) -> String {
        format!(
            r##"<!doctype html><html><body class="{body_class}">
<nav><ul class="nav-links"><li><a class="active" href="#about">About</a></li></ul></nav>
{sections}
<div id="blog-posts">{blog}</div>
<div id="projects-list">{projects}</div>
</body></html>"##
        )
    }

    #[test]
    fn accepts_a_well_formed_page() {
        let html = page(
            "light-mode",
            r#"<section id="about" class="section active"></section>"#,
            r#"<article class="blog-post"></article>"#,
            r#"<p class="feed-fallback">later</p>"#,
        );
        assert_page_invariants(&html).unwrap();
    }

    #[test]
    fn rejects_two_active_sections() {
        let html = page(
            "light-mode",
            r#"<section id="a" class="section active"></section><section id="b" class="section active"></section>"#,
            r#"<article class="blog-post"></article>"#,
            r#"<article class="project-item"></article>"#,
        );
        let err = assert_page_invariants(&html).unwrap_err();
        assert!(err.to_string().contains("active section"));
    }

    #[test]
    fn rejects_an_empty_feed_container() {
        let html = page(
            "dark-mode",
            r#"<section id="about" class="section active"></section>"#,
            "",
            r#"<article class="project-item"></article>"#,
        );
        let err = assert_page_invariants(&html).unwrap_err();
        assert!(err.to_string().contains("blog-posts"));
    }

    #[test]
    fn rejects_items_mixed_with_fallback() {
        let html = page(
            "light-mode",
            r#"<section id="about" class="section active"></section>"#,
            r#"<article class="blog-post"></article><p class="feed-fallback">later</p>"#,
            r#"<article class="project-item"></article>"#,
        );
        let err = assert_page_invariants(&html).unwrap_err();
        assert!(err.to_string().contains("mixes"));
    }

    #[test]
    fn rejects_an_unrecognized_theme_class() {
        let html = page(
            "sepia-mode",
            r#"<section id="about" class="section active"></section>"#,
            r#"<article class="blog-post"></article>"#,
            r#"<article class="project-item"></article>"#,
        );
        let err = assert_page_invariants(&html).unwrap_err();
        assert!(err.to_string().contains("theme class"));
    }
}
