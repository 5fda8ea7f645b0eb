use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site_name: String,
    pub base_url: String,
    /// Seconds before the browser reloads; 0 disables the reload.
    pub refresh_after_secs: u32,
    /// Pre-rendered catalog section.
    pub catalog_html: String,
}
