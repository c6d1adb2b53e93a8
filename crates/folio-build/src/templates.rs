//! Template environment assembly.
//!
//! One `minijinja` environment serves a whole build: the content template
//! is registered as the `content` partial, the outer page template as
//! `page`, and the compiled CSS as the pre-escaped `css` global. The
//! `section`, `subSection`, `math`, and `titleAuthor` functions are the
//! only code that constructs pre-escaped fragments, and each escapes the
//! caller text it embeds.

use std::collections::BTreeMap;
use std::sync::Arc;

use minijinja::value::Value;
use minijinja::{AutoEscape, Environment};

use crate::config::BuildConfig;
use crate::math::MathRenderer;
use crate::numbering::Numbering;

/// Fixed name of the outer page template, resolved in the working
/// directory.
pub const PAGE_TEMPLATE_FILE: &str = "template.html";

const CONTENT_TEMPLATE: &str = "content";
const PAGE_TEMPLATE: &str = "page";

/// Assemble the environment for one page build.
pub fn environment(
    config: &BuildConfig,
    math: MathRenderer,
    content_src: String,
    page_src: String,
    css: String,
) -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();

    // Escape ordinary expressions regardless of template name; fragments
    // opt out through safe strings.
    env.set_auto_escape_callback(|_| AutoEscape::Html);

    let numbering = Arc::new(Numbering::new());

    let counters = Arc::clone(&numbering);
    env.add_function("section", move |title: String| {
        let n = counters.next_section();
        fragment(format!("<h1>{}&nbsp;{}</h1>", n, html_escape(&title)))
    });

    let counters = Arc::clone(&numbering);
    env.add_function("subSection", move |title: String| {
        let (n, m) = counters.next_subsection();
        fragment(format!("<h2>{}.{}&nbsp;{}</h2>", n, m, html_escape(&title)))
    });

    env.add_function("math", move |src: String| fragment(math.render(&src)));

    let title = config.title.clone();
    let author = config.author.clone();
    env.add_function("titleAuthor", move || {
        fragment(format!(
            r#"<h1 class="title">{}</h1><p class="author">{}</p>"#,
            html_escape(&title),
            html_escape(&author),
        ))
    });

    env.add_template_owned(CONTENT_TEMPLATE.to_string(), content_src)?;
    env.add_template_owned(PAGE_TEMPLATE.to_string(), page_src)?;
    env.add_global("css", fragment(css));

    Ok(env)
}

/// Render the outer page template.
///
/// The content partial inherits the same context through `{% include %}`.
pub fn render_page(
    env: &Environment<'static>,
    config: &BuildConfig,
) -> Result<String, minijinja::Error> {
    let tmpl = env.get_template(PAGE_TEMPLATE)?;
    tmpl.render(page_context(config))
}

/// Descriptor data overlaid with the reserved `title_`/`language_` keys.
/// The reserved keys win on collision.
fn page_context(config: &BuildConfig) -> BTreeMap<String, Value> {
    let mut ctx = BTreeMap::new();

    for (key, value) in &config.data {
        if let Some(key) = key.as_str() {
            ctx.insert(key.to_string(), Value::from_serialize(value));
        }
    }

    ctx.insert("title_".to_string(), Value::from(config.title.as_str()));
    ctx.insert(
        "language_".to_string(),
        Value::from(config.language.as_str()),
    );

    ctx
}

/// Mark renderer-built markup as safe against re-escaping.
fn fragment(html: String) -> Value {
    Value::from_safe_string(html)
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
