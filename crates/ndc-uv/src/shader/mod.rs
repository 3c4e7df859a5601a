//! WGSL rendition of the UV transform.
//!
//! WGSL has no include directive, so shader bodies that want `normalize_uv`
//! are prefixed with the helper snippets through [`compose`]. The arithmetic
//! is the same as [`crate::coords::normalize_uv`], step for step.
//!
//! Two snippets exist so a body can bring its own uniform block:
//! - [`VIEWPORT_UNIFORM_WGSL`]: `struct ViewportUniform`
//! - [`NORMALIZE_UV_WGSL`]: `fn normalize_uv`

mod uniform;

use std::borrow::Cow;

pub use uniform::ViewportUniform;

/// `struct ViewportUniform`, mirrored on the CPU by [`ViewportUniform`].
pub const VIEWPORT_UNIFORM_WGSL: &str = include_str!("shaders/viewport_uniform.wgsl");

/// `fn normalize_uv(position, size) -> vec2<f32>`.
pub const NORMALIZE_UV_WGSL: &str = include_str!("shaders/normalize_uv.wgsl");

/// Both snippets, in the order [`compose`] emits them.
pub const HELPERS_WGSL: &str = concat!(
    include_str!("shaders/viewport_uniform.wgsl"),
    "\n",
    include_str!("shaders/normalize_uv.wgsl"),
);

/// Helper snippets with the declaration each one introduces.
const SNIPPETS: [(&str, &str, &str); 2] = [
    ("struct", "ViewportUniform", VIEWPORT_UNIFORM_WGSL),
    ("fn", "normalize_uv", NORMALIZE_UV_WGSL),
];

/// Prefixes `body` with every helper snippet it does not declare itself.
///
/// Only real declarations count: a name that appears in a comment or at a
/// call site still gets its snippet. Composing twice is a no-op.
pub fn compose(body: &str) -> String {
    let mut out = String::new();

    for (keyword, name, snippet) in SNIPPETS {
        if declares(body, keyword, name) {
            log::debug!("compose: body declares {keyword} {name}; skipping snippet");
            continue;
        }
        out.push_str(snippet);
        out.push('\n');
    }

    if out.is_empty() {
        return body.to_owned();
    }

    log::debug!("compose: prepending {} bytes of helpers", out.len());
    out.push_str(body);
    out
}

/// Builds a WGSL module descriptor for `body` with the helpers prepended.
///
/// The label is borrowed; the source is owned. Creating the module (and
/// reporting validation errors) is up to the caller's device.
pub fn module_descriptor<'a>(label: &'a str, body: &str) -> wgpu::ShaderModuleDescriptor<'a> {
    wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(Cow::Owned(compose(body))),
    }
}

/// True when `src` contains the declaration `keyword name` outside comments.
fn declares(src: &str, keyword: &str, name: &str) -> bool {
    let code = strip_comments(src);
    let mut prev = "";
    for token in code
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
    {
        if prev == keyword && token == name {
            return true;
        }
        prev = token;
    }
    false
}

/// Replaces `//` line comments and (nested) `/* */` block comments with
/// whitespace.
fn strip_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.chars().peekable();
    let mut depth = 0usize;

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        if depth > 0 {
            match (c, next) {
                ('*', Some('/')) => {
                    chars.next();
                    depth -= 1;
                    out.push(' ');
                }
                ('/', Some('*')) => {
                    chars.next();
                    depth += 1;
                }
                ('\n', _) => out.push('\n'),
                _ => {}
            }
            continue;
        }

        match (c, next) {
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                depth = 1;
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}
