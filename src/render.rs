//! Rendering clouds to markup.
//!
//! A [`Renderer`] formats a [`Cloud`] and makes no decisions of its own:
//! entries come out in the order the cloud holds them. [`HtmlPage`] wraps the
//! HTML fragments in a complete page and writes it to any `io::Write`.

use crate::config::CloudConfig;
use crate::error::CloudError;
use crate::types::{Cloud, CloudEntry};
use std::io::Write;

/// Formats a cloud as text.
pub trait Renderer {
  /// Renders the whole cloud.
  fn render(&self, cloud: &Cloud) -> Result<String, CloudError>;
}

/// Renders each entry as a `<span>` with a size class and a count tooltip.
///
/// ```rust
/// use tagcloud::prelude::*;
///
/// let entry = CloudEntry { word: "cat".into(), count: 2, font_size: 16 };
/// assert_eq!(
///     HtmlRenderer.render_entry(&entry),
///     "<span style=\"cursor:default\" class=\"f16\" title=\"count: 2\">cat</span>\n",
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
  /// The CSS class for a font size.
  pub fn size_class(font_size: u32) -> String {
    format!("f{font_size}")
  }

  /// Renders one entry, newline included.
  pub fn render_entry(&self, entry: &CloudEntry) -> String {
    format!(
      "<span style=\"cursor:default\" class=\"{}\" title=\"count: {}\">{}</span>\n",
      Self::size_class(entry.font_size),
      entry.count,
      escape_html(&entry.word)
    )
  }
}

impl Renderer for HtmlRenderer {
  fn render(&self, cloud: &Cloud) -> Result<String, CloudError> {
    Ok(cloud.entries.iter().map(|e| self.render_entry(e)).collect())
  }
}

/// Renders the cloud as pretty-printed JSON.
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[cfg(feature = "json")]
impl Renderer for JsonRenderer {
  fn render(&self, cloud: &Cloud) -> Result<String, CloudError> {
    let mut json = serde_json::to_string_pretty(cloud).map_err(CloudError::Serialize)?;
    json.push('\n');
    Ok(json)
  }
}

/// Escapes the characters that would break out of element text.
fn escape_html(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      _ => out.push(c),
    }
  }
  out
}

/// A full HTML page around the cloud's `<span>` entries.
#[derive(Debug, Clone)]
pub struct HtmlPage {
  /// Shown in the title and heading: "Top K words in NAME".
  pub name: String,
  /// Stylesheet hrefs linked from the head.
  pub stylesheets: Vec<String>,
}

impl HtmlPage {
  /// Creates a page with the given name and the default stylesheets.
  pub fn new(name: impl Into<String>) -> Self {
    Self::with_config(name, &CloudConfig::default())
  }

  /// Creates a page with the stylesheets from `config`.
  pub fn with_config(name: impl Into<String>, config: &CloudConfig) -> Self {
    Self {
      name: name.into(),
      stylesheets: config.stylesheets.clone(),
    }
  }

  /// Writes header, entries and footer.
  ///
  /// # Errors
  ///
  /// Returns [`CloudError::SinkWrite`] if the writer fails.
  pub fn write_to<W: Write>(&self, cloud: &Cloud, out: &mut W) -> Result<(), CloudError> {
    self.write_header(cloud.len(), out)?;
    out.write_all(HtmlRenderer.render(cloud)?.as_bytes())?;
    self.write_footer(out)?;
    out.flush()?;
    Ok(())
  }

  fn write_header<W: Write>(&self, shown: usize, out: &mut W) -> Result<(), CloudError> {
    let name = escape_html(&self.name);
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>Top {shown} words in {name}</title>")?;
    for href in &self.stylesheets {
      writeln!(
        out,
        "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
        escape_html(href)
      )?;
    }
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>Top {shown} words in {name}</h2>")?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<div class=\"cdiv\">")?;
    writeln!(out, "<p class=\"cbox\">")?;
    Ok(())
  }

  fn write_footer<W: Write>(&self, out: &mut W) -> Result<(), CloudError> {
    writeln!(out, "</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_escape_html() {
    assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    assert_eq!(escape_html("plain"), "plain");
  }

  #[test]
  fn test_entry_escapes_word() {
    let entry = CloudEntry {
      word: "<b>".into(),
      count: 3,
      font_size: 48,
    };
    assert_eq!(
      HtmlRenderer.render_entry(&entry),
      "<span style=\"cursor:default\" class=\"f48\" title=\"count: 3\">&lt;b&gt;</span>\n"
    );
  }

  #[test]
  fn test_empty_cloud_renders_nothing() {
    assert_eq!(HtmlRenderer.render(&Cloud::default()).unwrap(), "");
  }
}
