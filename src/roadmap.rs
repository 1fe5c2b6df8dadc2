//! Roadmap text templating.

use crate::form::FormData;

/// Advisory bullets appended to every roadmap, in display order
pub const ADVICE: [&str; 6] = [
    "Strengthen data structures and algorithms",
    "Learn system design basics",
    "Explore cloud platforms (AWS, GCP)",
    "Practice coding interviews and mock sessions",
    "Build portfolio projects showcasing relevant skills",
    "Network with professionals in your target role",
];

const BULLET: &str = "• ";

/// Split on commas, trim each segment, re-join with `", "`.
///
/// Empty segments are kept, so `"a,,b"` becomes `"a, , b"`.
pub fn normalize_skills(raw: &str) -> String {
    raw.split(',').map(str::trim).collect::<Vec<_>>().join(", ")
}

pub fn header_line(form: &FormData) -> String {
    format!(
        "Roadmap generated for a {}-year {} Developer targeting {}:",
        form.experience,
        normalize_skills(&form.skills),
        form.target_role
    )
}

/// Render the full roadmap text for a form snapshot.
///
/// Experience and target role are substituted raw; only skills are
/// normalized.
pub fn render_roadmap(form: &FormData) -> String {
    let mut out = header_line(form);
    out.push('\n');
    for item in ADVICE {
        out.push('\n');
        out.push_str(BULLET);
        out.push_str(item);
    }
    out
}
