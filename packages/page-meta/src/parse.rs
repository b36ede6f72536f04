//! Markup to metadata extraction.
//!
//! Each field is derived from an ordered chain of extraction strategies.
//! Every helper returns `None` for a missing or empty value, so a chain of
//! `or_else` calls picks the first usable signal on the page.

use scraper::{Html, Selector};
use url::Url;

use crate::meta::PageMeta;

/// Extract display metadata from an HTML document.
///
/// Never fails: malformed markup yields whatever the parser can recover,
/// and fields with no signal on the page come back as `None`.
pub fn parse_meta(html: &str, url: &str) -> PageMeta {
    let document = Html::parse_document(html);

    let title = meta_content(&document, r#"meta[property="og:title"]"#)
        .or_else(|| element_text(&document, "title"));

    let description = meta_content(&document, r#"meta[name="description"]"#)
        .or_else(|| meta_content(&document, r#"meta[property="og:description"]"#));

    let image = meta_content(&document, r#"meta[property="og:image"]"#)
        .or_else(|| first_img_src(&document));

    PageMeta {
        title,
        description,
        image: image.map(|img| resolve_image(img, url)),
        url: url.to_string(),
    }
}

/// `content` attribute of the first element matching `selector`.
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::to_string)
        .filter(|v| !v.is_empty())
}

/// Text content of the first element matching `selector`.
fn element_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .filter(|v| !v.is_empty())
}

/// `src` of the first `<img>` in document order. A first image without a
/// `src` yields `None` rather than falling through to later images.
fn first_img_src(document: &Html) -> Option<String> {
    let selector = Selector::parse("img").ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("src"))
        .map(str::to_string)
        .filter(|v| !v.is_empty())
}

/// Rewrite a root-relative image path to an absolute URL on the page's
/// origin. Protocol-relative (`//cdn...`) and absolute values pass through
/// unchanged, as does anything when the page URL has no usable origin.
fn resolve_image(image: String, page_url: &str) -> String {
    if !image.starts_with('/') || image.starts_with("//") {
        return image;
    }
    match Url::parse(page_url) {
        Ok(base) if base.has_host() => {
            format!("{}{}", base.origin().ascii_serialization(), image)
        }
        _ => image,
    }
}
