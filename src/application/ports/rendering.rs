// src/application/ports/rendering.rs
use crate::domain::post::Post;

pub trait PostBodyRenderer: Send + Sync {
    /// HTML for the post body.
    fn render(&self, post: &Post) -> String;
}
