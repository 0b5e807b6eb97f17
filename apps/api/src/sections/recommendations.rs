//! Recommendations — received recommendations only, with their own coarser
//! density cutoff applied to each recommendation's priority. The whole
//! section disappears below the minimum density.

use crate::filters::config::{recommendation_cutoff, RECOMMENDATIONS_MIN_DENSITY};
use crate::filters::primitives::filter_by_indices;
use crate::filters::FilterConfig;
use crate::models::profile::{Profile, Recommendation};
use crate::sections::markup::section_wrapper;
use crate::sections::Fragment;

pub fn render(profile: &Profile, config: &FilterConfig) -> Fragment {
    let section = &profile.sections.recommendations;
    let total = section.received.len();

    if config.density < RECOMMENDATIONS_MIN_DENSITY {
        return Fragment::empty(total);
    }

    let filters = section.preset_filters.clone().unwrap_or_default();

    let selected: Vec<Recommendation> = match &filters.selected_indices {
        Some(indices) => filter_by_indices(&section.received, indices),
        None => {
            let cutoff = recommendation_cutoff(config.density);
            section
                .received
                .iter()
                .filter(|r| r.priority >= cutoff)
                .cloned()
                .collect()
        }
    };

    let content = selected
        .iter()
        .map(render_recommendation)
        .collect::<Vec<_>>()
        .join("\n");

    Fragment::new(
        section_wrapper("recommendations", "Recommend-<br/>ations", &content),
        total,
        selected.len(),
    )
}

fn render_recommendation(rec: &Recommendation) -> String {
    let quote = rec.text.as_deref().unwrap_or("");
    let name = rec.recommender_name.as_deref().unwrap_or("Unknown");
    let title = rec.recommender_title_company.as_deref().unwrap_or("");
    let (date, relationship) = split_date_field(rec.date.as_deref());

    let title_line = match (title.is_empty(), date.is_empty()) {
        (false, false) => format!("{title} • {date}"),
        (false, true) => title.to_string(),
        (true, _) => date,
    };

    let mut parts = vec![format!("<div class=\"recommendation-item\">\n  <h4>{name}</h4>")];
    if !title_line.is_empty() {
        parts.push(format!("  <p class=\"title-date\">{title_line}</p>"));
    }
    if !relationship.is_empty() {
        parts.push(format!("  <p class=\"relationship\">{relationship}</p>"));
    }
    parts.push(format!(
        "  <blockquote class=\"recommendation-quote\">\n    \"{quote}\"\n  </blockquote>\n</div>"
    ));
    parts.join("\n")
}

/// Splits the combined date field: the date is everything before the first
/// comma, the relationship note is the remainder.
fn split_date_field(raw: Option<&str>) -> (String, String) {
    let Some(raw) = raw else {
        return (String::new(), String::new());
    };
    match raw.split_once(',') {
        Some((date, rest)) => (date.trim().to_string(), rest.trim().to_string()),
        None => (raw.trim().to_string(), String::new()),
    }
}
