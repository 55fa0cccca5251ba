//! Page and section navigation targets
//!
//! Full pages have ids `page-<name>`. Older nav links point at sections of
//! the home page instead, through a fixed alias table.

/// Legacy nav ids and the section they scroll to
const SECTION_ALIASES: [(&str, &str); 5] = [
    ("prediction-panel", "ai-prediction"),
    ("market-analysis", "market-insight"),
    ("estimator", "ai-estimator"),
    ("prices", "material-table"),
    ("home", "page-home"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Switch the active page; holds the page element id
    Page(String),
    /// Scroll to a section; holds the section element id
    Section(String),
}

pub fn page_element_id(page_id: &str) -> String {
    format!("page-{page_id}")
}

pub fn link_element_id(page_id: &str) -> String {
    format!("link-{page_id}")
}

/// Section id for a legacy nav id; unknown ids map to themselves
pub fn section_for(page_id: &str) -> &str {
    SECTION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == page_id)
        .map_or(page_id, |&(_, section)| section)
}

/// Decide where a nav click goes. `page_exists` reports whether an element
/// with the given id is present.
pub fn resolve<F>(page_id: &str, page_exists: F) -> NavTarget
where
    F: Fn(&str) -> bool,
{
    let page = page_element_id(page_id);
    if page_exists(&page) {
        NavTarget::Page(page)
    } else {
        NavTarget::Section(section_for(page_id).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_page_wins() {
        let target = resolve("home", |id| id == "page-home");
        assert_eq!(target, NavTarget::Page("page-home".into()));
    }

    #[test]
    fn test_legacy_section_aliases() {
        assert_eq!(
            resolve("estimator", |_| false),
            NavTarget::Section("ai-estimator".into())
        );
        assert_eq!(
            resolve("prices", |_| false),
            NavTarget::Section("material-table".into())
        );
        assert_eq!(
            resolve("contact", |_| false),
            NavTarget::Section("contact".into())
        );
    }

    #[test]
    fn test_ids() {
        assert_eq!(link_element_id("forecast"), "link-forecast");
        assert_eq!(page_element_id("home"), "page-home");
    }
}
