//! Wall Renderer
//!
//! Turns decoded posts into one HTML string. Each kept post becomes a
//! `section.fb-post`; the branch for photo and video posts is chosen by
//! the post type.

pub mod autolink;
pub mod date;
pub mod html;
pub mod youtube;

use tracing::debug;

use crate::config::WallOptions;
use crate::domain::{Comment, Language, Post, PostType, Profile, WallError};
use crate::i18n::Labels;

use self::autolink::autolink;
use self::date::format_date;
use self::html::{count_label, escape};

/// Renders posts of one page with a fixed set of options
pub struct WallRenderer<'a> {
    page_id: &'a str,
    options: &'a WallOptions,
    labels: &'static Labels,
}

impl<'a> WallRenderer<'a> {
    pub fn new(page_id: &'a str, options: &'a WallOptions) -> Self {
        Self {
            page_id,
            options,
            labels: Labels::for_language(options.lang),
        }
    }

    /// Whether a post is shown at all
    pub fn is_visible(&self, post: &Post) -> bool {
        if post.message().is_none() {
            return false;
        }
        !self.options.just_own_posts || post.is_authored_by(self.page_id)
    }

    /// Render all visible posts, in feed order
    pub fn render(&self, posts: &[Post]) -> String {
        let mut html = String::new();
        let mut rendered = 0usize;

        for post in posts.iter().filter(|post| self.is_visible(post)) {
            html.push_str(&self.render_post(post));
            rendered += 1;
        }

        debug!(
            total = posts.len(),
            rendered,
            "Rendered wall posts"
        );
        html
    }

    /// Render one post regardless of visibility
    pub fn render_post(&self, post: &Post) -> String {
        let class = if self.options.hyphenate {
            "fb-post news-entry hyphenate"
        } else {
            "fb-post news-entry"
        };

        let mut html = format!(r#"<section class="{}">"#, class);

        match post.kind {
            PostType::Photo => html.push_str(&self.image(post)),
            PostType::Video => html.push_str(&self.video(post)),
            _ => {}
        }

        html.push_str(&self.message(post));

        if self.options.show_comments {
            html.push_str(&self.comments(post));
        }
        if self.options.show_likes {
            html.push_str(&self.likes(post));
        }

        html.push_str(&self.footer(post));
        html.push_str("</section>");
        html
    }

    fn image(&self, post: &Post) -> String {
        let Some(picture) = post.large_picture() else {
            return String::new();
        };

        format!(
            r#"<a href="{link}" title="{see_on} Facebook" target="_blank"><div class="news-image fancy-image left" style="background-image: url('{picture}')"></div></a>"#,
            link = escape(post.link.as_deref().unwrap_or_default()),
            see_on = escape(self.labels.see_on),
            picture = escape(&picture),
        )
    }

    fn video(&self, post: &Post) -> String {
        let Some(link) = post.link.as_deref() else {
            return String::new();
        };

        let mut html = format!(
            r#"<h2><a href="{link}" title="{title}" target="_blank">{name}</a></h2>"#,
            link = escape(link),
            title = escape(self.labels.youtube_link),
            name = escape(post.name.as_deref().unwrap_or(link)),
        );

        if let Some(video_id) = youtube::video_id(link) {
            html.push_str(&format!(
                r#"<iframe class="youtube" src="{}" allowfullscreen></iframe>"#,
                youtube::embed_url(&video_id, &self.options.youtube)
            ));
        }

        html
    }

    fn message(&self, post: &Post) -> String {
        let mut html = String::from("<p>");

        if post.has_recipients() {
            if let Some(from) = &post.from {
                html.push_str(&self.profile_link(from));
                html.push_str(": ");
            }
        }

        let message = autolink(post.message().unwrap_or_default(), self.labels.external_link);
        if self.options.quotes {
            html.push_str(&format!("“{}”", message));
        } else {
            html.push_str(&message);
        }

        html.push_str("</p>");
        html
    }

    fn visible_comments<'p>(&self, post: &'p Post) -> impl Iterator<Item = &'p Comment> {
        post.comments
            .data
            .iter()
            .filter(|comment| !comment.message.trim().is_empty())
            .take(self.options.comment_limit as usize)
    }

    fn comments(&self, post: &Post) -> String {
        let items: Vec<String> = self
            .visible_comments(post)
            .map(|comment| self.comment(comment))
            .collect();

        if items.is_empty() {
            return String::new();
        }

        format!(
            r#"<section class="comments" hidden><ul>{}</ul></section>"#,
            items.join("")
        )
    }

    fn comment(&self, comment: &Comment) -> String {
        let author = comment
            .from
            .as_ref()
            .map(|from| format!("{}: ", self.profile_link(from)))
            .unwrap_or_default();

        format!(
            r#"<li><div class="comment">{}“{}”</div></li>"#,
            author,
            escape(&comment.message)
        )
    }

    fn likes(&self, post: &Post) -> String {
        if post.likes.data.is_empty() {
            return String::new();
        }

        let items: String = post
            .likes
            .data
            .iter()
            .map(|profile| format!("<li>{}</li>", self.profile_link(profile)))
            .collect();

        format!(r#"<section class="likes" hidden><ul>{}</ul></section>"#, items)
    }

    fn footer(&self, post: &Post) -> String {
        let mut html = String::from("<footer>");

        if self.options.show_likes {
            let toggle = if post.likes.data.is_empty() {
                String::new()
            } else {
                format!(
                    r##" <a href="#" class="showLikes">{}</a>"##,
                    escape(self.labels.show_likes)
                )
            };
            html.push_str(&format!(
                r#"<span><span aria-hidden="true" class="icon-likes" title="{}"></span>{}{}</span>"#,
                escape(self.labels.likes),
                count_label(&post.likes, self.options.like_limit, self.options.max_count),
                toggle
            ));
        }

        if self.options.show_comments && !post.comments.is_empty() {
            let count =
                count_label(&post.comments, self.options.comment_limit, self.options.max_count);
            // Only link the toggle when there is a comment list to show
            if self.visible_comments(post).next().is_some() {
                html.push_str(&format!(
                    r##"<span><span aria-hidden="true" class="icon-comments"></span><a href="#" class="showComments">{}</a> ({})</span>"##,
                    escape(self.labels.show_comments),
                    count
                ));
            } else {
                html.push_str(&format!(
                    r#"<span><span aria-hidden="true" class="icon-comments"></span>{}</span>"#,
                    count
                ));
            }
        }

        if self.options.show_date {
            html.push_str(&self.post_date(post));
        }

        html.push_str("</footer>");
        html
    }

    fn post_date(&self, post: &Post) -> String {
        let permalink = format!(
            "https://www.facebook.com/{}/posts/{}",
            self.page_id,
            post.post_id()
        );
        let date = post
            .created_time
            .as_deref()
            .map(|time| format_date(time, self.options.lang))
            .unwrap_or_default();

        format!(
            r#"<a href="{link}" class="date" title="{title} Facebook" target="_blank"><span>{posted_on} {date}</span></a>"#,
            link = escape(&permalink),
            title = escape(self.labels.original_post),
            posted_on = escape(self.labels.posted_on),
            date = escape(&date),
        )
    }

    fn profile_link(&self, profile: &Profile) -> String {
        format!(
            r#"<a href="{}" target="_blank" title="Facebook {}">{}</a>"#,
            escape(&profile.url()),
            escape(self.labels.profile),
            escape(&profile.name)
        )
    }
}

/// User-visible replacement for a wall that failed to render
pub fn render_error(error: &WallError, lang: Language) -> String {
    let labels = Labels::for_language(lang);
    format!(
        r#"<p class="fb-wall-error"><strong>{}</strong> {}</p>"#,
        escape(labels.error),
        escape(&error.to_string())
    )
}
