//! Rendering of search hits into the text returned to the agent

use super::types::WebPage;

pub const NO_TITLE: &str = "无标题";
pub const NO_LINK: &str = "无链接";
pub const NO_SUMMARY: &str = "无摘要";

/// Summary text for a page: `summary` when non-empty, else `snippet`, else placeholder
fn page_summary(page: &WebPage) -> &str {
    match (page.summary.as_deref(), page.snippet.as_deref()) {
        (Some(summary), _) if !summary.is_empty() => summary,
        (_, Some(snippet)) => snippet,
        _ => NO_SUMMARY,
    }
}

/// Format a non-empty result list as a header plus one numbered block per page
pub fn format_results(query: &str, pages: &[WebPage]) -> String {
    let mut parts = Vec::with_capacity(pages.len() + 1);
    parts.push(format!("为您找到关于“{query}”的相关信息如下:\n"));

    for (i, page) in pages.iter().enumerate() {
        let title = page.name.as_deref().unwrap_or(NO_TITLE);
        let url = page.url.as_deref().unwrap_or(NO_LINK);
        parts.push(format!(
            "{}. {}\n   链接: {}\n   摘要: {}\n",
            i + 1,
            title,
            url,
            page_summary(page).trim()
        ));
    }

    parts.join("\n")
}
