//! Post renderer
//!
//! One post becomes a `div.post` with three regions: header (author and
//! publish time), container (metadata and content) and footer (actions).

use std::sync::Arc;

use crate::dom::Node;
use crate::domain::entities::{CurrentUser, Post};
use crate::domain::ports::{MarkdownRenderer, Sanitizer};
use crate::routes::Route;

use super::content::ContentRenderer;
use super::timestamp::TimestampFormat;

pub struct PostRenderer<S, M>
where
    S: Sanitizer,
    M: MarkdownRenderer,
{
    sanitizer: Arc<S>,
    content: ContentRenderer<S, M>,
    timestamps: TimestampFormat,
}

impl<S, M> PostRenderer<S, M>
where
    S: Sanitizer,
    M: MarkdownRenderer,
{
    pub fn new(sanitizer: Arc<S>, markdown: Arc<M>, timestamps: TimestampFormat) -> Self {
        Self {
            content: ContentRenderer::new(sanitizer.clone(), markdown),
            sanitizer,
            timestamps,
        }
    }

    pub fn timestamps(&self) -> &TimestampFormat {
        &self.timestamps
    }

    pub fn render_post(&self, post: &Post, current_user: &CurrentUser) -> Node {
        Node::new("div")
            .class("post")
            .child(self.render_header(post))
            .child(self.render_container(post))
            .child(render_footer(post, current_user))
    }

    fn render_header(&self, post: &Post) -> Node {
        let profile = Route::Profile(&post.author.uuid).href().unwrap_or_default();

        let left = Node::new("div").class("left").children([
            Node::new("a").attr("href", profile.clone()).child(
                icon("iconoir:profile-circled", 42),
            ),
            Node::new("a").attr("href", profile).child(
                Node::new("h3").raw(self.sanitizer.sanitize(&post.author.display_name)),
            ),
        ]);

        let right = Node::new("div")
            .class("post-header right")
            .child(Node::new("p").text(self.timestamps.format(&post.published)));

        Node::new("div").class("post-header").children([left, right])
    }

    fn render_container(&self, post: &Post) -> Node {
        let article = Route::Article(&post.uuid).href().unwrap_or_default();

        let tags: Vec<&str> = post.tags().collect();
        let tags = if tags.is_empty() {
            "N/A".to_string()
        } else {
            tags.join(", ")
        };

        let summary = Node::new("a").attr("href", article).children([
            Node::new("h2").class("post-title").text(post.title.clone()),
            Node::new("h4").class("post-publisher").raw(format!(
                "By: {}",
                self.sanitizer.sanitize(&post.author.display_name)
            )),
            Node::new("h4")
                .class("post-publisher")
                .text(format!("Tags: {}", tags)),
            Node::new("h4")
                .class("post-publisher")
                .text(format!("Visibility: {}", post.visibility)),
            Node::new("p").class("post-description").raw(format!(
                "Description: {}",
                self.sanitizer.sanitize(&post.description)
            )),
        ]);

        Node::new("div").class("post-container").children([
            summary,
            Node::new("hr"),
            self.content
                .render_content(&post.content_type, &post.content),
        ])
    }
}

fn render_footer(post: &Post, current_user: &CurrentUser) -> Node {
    let mut footer = Node::new("div").class("post-footer right");

    if current_user.owns(&post.author.uuid) {
        footer.append_child(action_label(Route::EditArticle(&post.uuid), "Edit"));
        footer.append_child(action_label(Route::DeleteArticle(&post.uuid), "Delete"));
    }

    let share = Route::ShareArticle(&post.uuid);
    footer.append_child(action_icon(share, "bi:share"));
    footer.append_child(action_label(share, "Share Post"));

    let like = Route::Like(&post.uuid);
    footer.append_child(action_icon(like, "ant-design:like-outlined"));
    footer.append_child(action_label(like, "Likes"));

    let article = Route::Article(&post.uuid);
    footer.append_child(action_icon(article, "ant-design:comment-outlined"));
    footer.append_child(action_label(article, &format!("{} Comment(s)", post.count)));

    footer
}

/// Anchor for a route. Unimplemented actions get no `href` and are marked
/// disabled.
fn action_link(route: Route<'_>) -> Node {
    match route.href() {
        Some(href) => Node::new("a").attr("href", href),
        None => Node::new("a")
            .attr("role", "button")
            .attr("aria-disabled", "true")
            .attr("data-action", action_name(route)),
    }
}

fn action_icon(route: Route<'_>, name: &str) -> Node {
    action_link(route).child(icon(name, 30))
}

fn action_label(route: Route<'_>, label: &str) -> Node {
    action_link(route).class("icon-text").text(label)
}

fn action_name(route: Route<'_>) -> &'static str {
    match route {
        Route::Like(_) => "like",
        _ => "navigate",
    }
}

fn icon(name: &str, size: u32) -> Node {
    Node::new("span").class("iconify").attrs([
        ("data-icon", name.to_string()),
        ("data-width", size.to_string()),
        ("data-height", size.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{AmmoniaSanitizer, PulldownMarkdown};
    use crate::domain::entities::{ContentType, ObjectId};
    use crate::test_utils::{test_post, EchoSanitizer};

    fn renderer() -> PostRenderer<AmmoniaSanitizer, PulldownMarkdown> {
        PostRenderer::new(
            Arc::new(AmmoniaSanitizer),
            Arc::new(PulldownMarkdown),
            TimestampFormat::default(),
        )
    }

    fn footer_labels(node: &Node) -> Vec<String> {
        node.descendants()
            .into_iter()
            .filter(|n| n.has_class("icon-text"))
            .map(|n| n.text_content())
            .collect()
    }

    #[test]
    fn owner_sees_edit_and_delete() {
        let mut post = test_post();
        post.author.uuid = ObjectId::from("a1");

        let node = renderer().render_post(&post, &CurrentUser::new("a1"));
        let labels = footer_labels(&node);

        assert_eq!(labels[0], "Edit");
        assert_eq!(labels[1], "Delete");
    }

    #[test]
    fn numeric_author_matches_string_user() {
        let mut post = test_post();
        post.author.uuid = serde_json::from_str("17").unwrap();

        let node = renderer().render_post(&post, &CurrentUser::new("17"));
        assert!(footer_labels(&node).contains(&"Edit".to_string()));

        let node = renderer().render_post(&post, &CurrentUser::new(17_u64));
        assert!(footer_labels(&node).contains(&"Delete".to_string()));
    }

    #[test]
    fn other_user_sees_no_owner_actions() {
        let mut post = test_post();
        post.author.uuid = ObjectId::from("a1");
        post.count = 4;

        let node = renderer().render_post(&post, &CurrentUser::new("b2"));

        assert_eq!(
            footer_labels(&node),
            vec!["Share Post", "Likes", "4 Comment(s)"]
        );
    }

    #[test]
    fn like_is_an_explicit_stub() {
        let post = test_post();
        let node = renderer().render_post(&post, &CurrentUser::new("viewer"));

        let likes: Vec<&Node> = node
            .descendants()
            .into_iter()
            .filter(|n| n.get_attr("data-action") == Some("like"))
            .collect();

        assert_eq!(likes.len(), 2);
        for like in likes {
            assert_eq!(like.get_attr("href"), None);
            assert_eq!(like.get_attr("aria-disabled"), Some("true"));
        }
    }

    #[test]
    fn footer_routes_point_at_post() {
        let mut post = test_post();
        post.uuid = ObjectId::from("p9");
        post.author.uuid = ObjectId::from("me");

        let node = renderer().render_post(&post, &CurrentUser::new("me"));
        let hrefs: Vec<&str> = node
            .descendants()
            .into_iter()
            .filter_map(|n| n.get_attr("href"))
            .collect();

        assert!(hrefs.contains(&"/article/edit/p9"));
        assert!(hrefs.contains(&"/article/p9/remove"));
        assert!(hrefs.contains(&"/article/p9/share"));
        assert!(hrefs.contains(&"/article/p9/"));
        assert!(hrefs.contains(&"/profile/me"));
    }

    #[test]
    fn empty_tags_render_na() {
        let mut post = test_post();
        post.categories = vec![];

        let html = renderer().render_post(&post, &CurrentUser::new("x")).to_html();
        assert!(html.contains("Tags: N/A"));
    }

    #[test]
    fn tags_are_comma_joined() {
        let mut post = test_post();
        post.categories = vec!["rust".to_string(), "web".to_string()];

        let html = renderer().render_post(&post, &CurrentUser::new("x")).to_html();
        assert!(html.contains("Tags: rust, web"));
    }

    #[test]
    fn header_and_body_are_sanitized() {
        let mut post = test_post();
        post.title = "<script>t()</script>Title".to_string();
        post.author.display_name = "<script>n()</script>Alice".to_string();
        post.description = "<img src=x onerror=d()>desc".to_string();

        let html = renderer().render_post(&post, &CurrentUser::new("x")).to_html();

        assert!(!html.contains("<script"));
        assert!(!html.contains("onerror"));
        assert!(html.contains("&lt;script&gt;t()&lt;/script&gt;Title"));
        assert!(html.contains("By: Alice"));
        assert!(html.contains("Description: <img src=\"x\">desc"));
    }

    #[test]
    fn body_ends_with_separator_then_content() {
        let mut post = test_post();
        post.content_type = ContentType::Plain;
        post.content = "body text".to_string();

        let node = renderer().render_post(&post, &CurrentUser::new("x"));
        let container = &node.child_nodes()[1];
        let parts = container.child_nodes();

        assert!(container.has_class("post-container"));
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].tag(), Some("hr"));
        assert_eq!(parts[2].text_content(), "body text");
    }

    #[test]
    fn metadata_is_escaped_independent_of_sanitizer() {
        let renderer = PostRenderer::new(
            Arc::new(EchoSanitizer),
            Arc::new(PulldownMarkdown),
            TimestampFormat::default(),
        );
        let mut post = test_post();
        post.title = "<u>title</u>".to_string();
        post.categories = vec!["<u>tag</u>".to_string()];

        let html = renderer.render_post(&post, &CurrentUser::new("x")).to_html();

        assert!(!html.contains("<u>"));
        assert!(html.contains("&lt;u&gt;title&lt;/u&gt;"));
        assert!(html.contains("Tags: &lt;u&gt;tag&lt;/u&gt;"));
    }

    #[test]
    fn header_shows_formatted_timestamp() {
        let mut post = test_post();
        post.published = "2024-02-01T08:30:00Z".parse().unwrap();

        let html = renderer().render_post(&post, &CurrentUser::new("x")).to_html();
        assert!(html.contains("<p>2/1/2024, 8:30:00 AM</p>"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let post = test_post();
        let user = CurrentUser::new(post.author.uuid.clone());

        let first = renderer().render_post(&post, &user);
        let second = renderer().render_post(&post, &user);

        assert_eq!(first, second);
    }
}
