use crate::{
    application::ports::rendering::PostBodyRenderer,
    domain::post::{Post, PostFormat},
};
use pulldown_cmark::{Options, Parser, html};

/// Renders markdown bodies to HTML; HTML bodies are passed through.
#[derive(Default, Clone)]
pub struct MarkdownBodyRenderer;

impl PostBodyRenderer for MarkdownBodyRenderer {
    fn render(&self, post: &Post) -> String {
        match post.format() {
            PostFormat::Markdown => markdown(post.content()),
            PostFormat::Html => post.content().to_string(),
        }
    }
}

pub fn markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all());
    let mut buf = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut buf, parser);
    buf
}
