//! Navigation targets
//!
//! Routes the rendered output links to. The core never invokes them; it
//! only turns them into `href` values.

use urlencoding::encode;

use crate::domain::entities::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Profile(&'a ObjectId),
    Article(&'a ObjectId),
    EditArticle(&'a ObjectId),
    DeleteArticle(&'a ObjectId),
    ShareArticle(&'a ObjectId),
    /// Relative to the article page; `host` lets a comment be submitted to
    /// the author's home node
    AddComment { location: &'a str, host: &'a str },
    /// Liking has no destination yet
    Like(&'a ObjectId),
}

impl Route<'_> {
    /// The link target, or `None` for actions that are not implemented
    pub fn href(&self) -> Option<String> {
        match self {
            Route::Profile(author) => Some(format!("/profile/{}", encode(author.as_str()))),
            Route::Article(post) => Some(format!("/article/{}/", encode(post.as_str()))),
            Route::EditArticle(post) => Some(format!("/article/edit/{}", encode(post.as_str()))),
            Route::DeleteArticle(post) => {
                Some(format!("/article/{}/remove", encode(post.as_str())))
            }
            Route::ShareArticle(post) => {
                Some(format!("/article/{}/share", encode(post.as_str())))
            }
            Route::AddComment { location, host } => Some(format!(
                "./comment/?location={}&host={}",
                encode(location),
                encode(host)
            )),
            Route::Like(_) => None,
        }
    }

    pub fn is_implemented(&self) -> bool {
        self.href().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_routes() {
        let post = ObjectId::from("p1");

        assert_eq!(Route::Article(&post).href().unwrap(), "/article/p1/");
        assert_eq!(Route::EditArticle(&post).href().unwrap(), "/article/edit/p1");
        assert_eq!(Route::DeleteArticle(&post).href().unwrap(), "/article/p1/remove");
        assert_eq!(Route::ShareArticle(&post).href().unwrap(), "/article/p1/share");
    }

    #[test]
    fn profile_route_encodes_id() {
        let author = ObjectId::from("a b/c");
        assert_eq!(Route::Profile(&author).href().unwrap(), "/profile/a%20b%2Fc");
    }

    #[test]
    fn add_comment_route_carries_location_and_host() {
        let route = Route::AddComment {
            location: "http://node.example/api/author/a1/posts/p1/comments",
            host: "http://node.example/",
        };

        assert_eq!(
            route.href().unwrap(),
            "./comment/?location=http%3A%2F%2Fnode.example%2Fapi%2Fauthor%2Fa1%2Fposts%2Fp1%2Fcomments&host=http%3A%2F%2Fnode.example%2F"
        );
    }

    #[test]
    fn like_is_unimplemented() {
        let post = ObjectId::from("p1");
        assert_eq!(Route::Like(&post).href(), None);
        assert!(!Route::Like(&post).is_implemented());
        assert!(Route::ShareArticle(&post).is_implemented());
    }
}
