use crate::constants::NEW_TAB_TARGET;
use folio_core::{project_links, LinkChoice, PROJECT_CHOOSER_PROMPT};
use web_sys as web;

/// Ask whether to open the live demo (OK) or the source (Cancel) for
/// `project`, then open it in a new tab. Unknown projects are ignored.
pub fn show_project_links(project: &str) {
    let Some(links) = project_links(project) else {
        log::debug!("[projects] unknown project {project:?}");
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let confirmed = window
        .confirm_with_message(PROJECT_CHOOSER_PROMPT)
        .unwrap_or(false);
    let url = links.url_for(LinkChoice::from_confirm(confirmed));
    if let Err(e) = window.open_with_url_and_target(url, NEW_TAB_TARGET) {
        log::warn!("[projects] could not open {url}: {:?}", e);
    }
}
