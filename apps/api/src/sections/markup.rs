//! Shared markup helpers for section renderers: the section wrapper, bullet
//! lists, and natural-key grouping.

/// Wraps rendered content in the section container. The `data-section`
/// attribute is the stable machine-readable id used for visibility tracking
/// and styling. Empty content produces an empty fragment.
pub fn section_wrapper(section_id: &str, label: &str, content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    format!(
        "<div class=\"section-wrapper\" data-section=\"{section_id}\">\n  \
         <div class=\"section-label\">{label}</div>\n  \
         <div class=\"section-content\">\n    {content}\n  </div>\n</div>"
    )
}

/// Renders a bullet list; empty input renders nothing.
pub fn render_bullets(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let lines: Vec<String> = items.iter().map(|b| format!("  <li>{b}</li>")).collect();
    format!("<ul>\n{}\n</ul>", lines.join("\n"))
}

/// Normalizes a grouping key from formatted strings like `"FORA · Freelance"`
/// or `"iCIMS, Inc."`: the substring before the first `·` or `,`, trimmed.
pub fn group_key(raw: &str) -> String {
    raw.split('·')
        .next()
        .unwrap_or("")
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Buckets entries by their normalized key, preserving first-seen order of
/// groups and of entries within a group. Entries without a key fall into an
/// unnamed group.
pub fn group_by_key<'a, T, F>(items: &'a [T], key_of: F) -> Vec<(String, Vec<&'a T>)>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut groups: Vec<(String, Vec<&'a T>)> = Vec::new();
    for item in items {
        let key = key_of(item).map(group_key).unwrap_or_default();
        match groups.iter_mut().find(|(name, _)| *name == key) {
            Some((_, members)) => members.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    groups
}

/// Standard group header used by company/organization/issuer groupings.
pub fn group_header(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    format!("<div class=\"company-header\">\n  <h3>{name}</h3>\n</div>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_suppressed_for_empty_content() {
        assert_eq!(section_wrapper("experience", "Experience", ""), "");
    }

    #[test]
    fn test_wrapper_carries_section_id() {
        let html = section_wrapper("honors-awards", "Honors & Awards", "<p>x</p>");
        assert!(html.contains("data-section=\"honors-awards\""));
        assert!(html.contains("Honors & Awards"));
    }

    #[test]
    fn test_group_key_normalization() {
        assert_eq!(group_key("FORA · Freelance"), "FORA");
        assert_eq!(group_key("iCIMS, Inc."), "iCIMS");
        assert_eq!(group_key("  Acme  "), "Acme");
    }

    #[test]
    fn test_group_by_key_first_seen_order() {
        let items = vec![
            ("Acme · Contract", 1),
            ("Globex", 2),
            ("Acme, Inc.", 3),
        ];
        let groups = group_by_key(&items, |(k, _)| Some(*k));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Acme");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Globex");
    }

    #[test]
    fn test_render_bullets_empty() {
        assert_eq!(render_bullets(&[]), "");
    }
}
