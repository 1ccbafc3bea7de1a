use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::builtin;
use crate::feed::{BlogPost, Project};
use crate::loader::ContainerContent;
use crate::nav::Section;
use crate::page::Page;
use crate::theme::ThemeStore;

pub fn render_blog_post(post: &BlogPost) -> Markup {
    html! {
        article class="blog-post" data-post-type="linkedin" {
            h3 class="post-title" { (post.name) }
            div class="post-meta" {
                span class="post-date" { (post.date) }
                span class="post-type" { "LinkedIn Post" }
            }
            div class="post-content" {
                p { (post.description) }
                div class="linkedin-link-container" {
                    a class="linkedin-link" href=(post.link) target="_blank" rel="noreferrer noopener" {
                        "View on LinkedIn"
                    }
                }
            }
        }
    }
}

pub fn render_project(project: &Project) -> Markup {
    html! {
        @if let Some(link) = project.link_url() {
            div class="project-item linked" data-link=(link) {
                (project_body(project))
            }
        } @else {
            div class="project-item" {
                (project_body(project))
            }
        }
    }
}

fn project_body(project: &Project) -> Markup {
    html! {
        div class="project-icon" { "⚙" }
        div class="project-info" {
            h3 { (project.name) }
            p { (project.description) }
        }
    }
}

pub fn render_page<S: ThemeStore>(page: &Page<S>, title: &str, year: i32) -> String {
    let theme_class = page.theme.current().class_name();
    let nav_class = if page.menu.is_open() {
        "nav-links active"
    } else {
        "nav-links"
    };

    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";
                title { (title) }
                style { (PreEscaped(builtin::BUILTIN_CSS)) }
            }
            body class=(theme_class) {
                header class="site-header" {
                    nav {
                        div class="brand" { (title) }
                        button type="button" class="mobile-menu-toggle" aria-label="Toggle navigation" { "☰" }
                        ul class=(nav_class) {
                            @for entry in page.router.entries() {
                                li {
                                    a.active[entry.is_active()] href={ "#" (entry.id) } {
                                        (entry.label)
                                    }
                                }
                            }
                        }
                        button type="button" id="theme-toggle" aria-label="Toggle theme" { "Theme" }
                    }
                }
                main {
                    @for section in page.router.sections() {
                        (render_section(section, page))
                    }
                }
                footer {
                    "© " span id="current-year" { (year) } " · " (title)
                }
                script { (PreEscaped(builtin::PAGE_JS)) }
            }
        }
    };
    markup.into_string()
}

fn render_section<S: ThemeStore>(section: &Section, page: &Page<S>) -> Markup {
    let body = match section.id.as_str() {
        "about" => about_body(),
        "blog" => html! {
            h2 { "Blog" }
            (feed_container("blog-posts", &page.blog))
        },
        "projects" => html! {
            h2 { "Projects" }
            (feed_container("projects-list", &page.projects))
        },
        "contact" => contact_body(),
        _ => html! {},
    };

    let class = if section.is_active() {
        "section active"
    } else {
        "section"
    };
    html! {
        section id=(section.id) class=(class) {
            (body)
        }
    }
}

fn feed_container(container_id: &str, content: &ContainerContent) -> Markup {
    html! {
        div id=(container_id) class="feed-list" {
            @match content {
                ContainerContent::Items(items) => {
                    @for item in items {
                        (PreEscaped(item.0.as_str()))
                    }
                }
                ContainerContent::Fallback(message) => {
                    p class="feed-fallback" { (*message) }
                }
            }
        }
    }
}

fn about_body() -> Markup {
    html! {
        h2 { "About" }
        p {
            "Engineer, writer, and occasional speaker. The sections above collect "
            "recent posts and selected projects."
        }
        a id="download-resume" href="assets/resume.pdf" download {
            "Download Resume"
        }
    }
}

fn contact_body() -> Markup {
    html! {
        h2 { "Contact" }
        p {
            "Reach out via the links on any post or project."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_post_text_is_escaped() {
        let post = BlogPost {
            name: "<script>alert(1)</script>".to_string(),
            date: "2026-01-01".to_string(),
            description: "a & b <i>c</i>".to_string(),
            link: "https://example.com/p/1".to_string(),
        };
        let out = render_blog_post(&post).into_string();
        assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(out.contains("a &amp; b &lt;i&gt;c&lt;/i&gt;"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn project_without_link_is_not_interactive() {
        let project = Project {
            name: "quiet".to_string(),
            description: "internal tool".to_string(),
            link: Some("   ".to_string()),
        };
        let out = render_project(&project).into_string();
        assert!(!out.contains("data-link"));
        assert!(!out.contains("linked"));
    }

    #[test]
    fn project_with_link_carries_the_target() {
        let project = Project {
            name: "loud".to_string(),
            description: "public tool".to_string(),
            link: Some("https://example.com/x".to_string()),
        };
        let out = render_project(&project).into_string();
        assert!(out.contains(r#"class="project-item linked""#));
        assert!(out.contains(r#"data-link="https://example.com/x""#));
    }
}
