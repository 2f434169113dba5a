//! Document rendering — emits the LaTeX source the external layout
//! collaborator compiles to a binary document. The section order is fixed by
//! the document model; layout and the PDF step live outside this service.

pub mod photo;

use crate::models::resume::ResumeDocument;

/// Download filename for a rendered résumé: lowercased name, spaces
/// underscored.
pub fn resume_filename(name: &str) -> String {
    format!("{}_resume.tex", name.to_lowercase().replace(' ', "_"))
}

/// Renders the document model to a complete LaTeX source file.
/// The photo reference is deliberately not embedded here: it is a data URI
/// for UI clients, and the layout collaborator sources the image separately.
pub fn render_latex(doc: &ResumeDocument) -> String {
    let mut out = String::new();
    out.push_str("\\documentclass[11pt]{article}\n");
    out.push_str("\\usepackage[margin=1in]{geometry}\n");
    out.push_str("\\pagestyle{empty}\n");
    out.push_str("\\begin{document}\n\n");

    out.push_str(&format!(
        "\\begin{{center}}{{\\LARGE \\textbf{{{}}}}}\\end{{center}}\n\n",
        escape_latex(&doc.name)
    ));

    section(&mut out, "Professional Summary", &escape_latex(&doc.summary));
    section(&mut out, "Education", &escape_latex(&doc.education));
    section(&mut out, "Experience", &escape_latex(&doc.experience));
    section(&mut out, "Skills", &escape_latex(&doc.skills.join(", ")));

    out.push_str("\\section*{Courses}\n");
    if doc.courses.is_empty() {
        out.push_str("None\n\n");
    } else {
        out.push_str("\\begin{itemize}\n");
        for course in &doc.courses {
            out.push_str(&format!(
                "  \\item {} - {} ({})\n",
                escape_latex(&course.course_name),
                escape_latex(&course.marks),
                escape_latex(&course.date)
            ));
        }
        out.push_str("\\end{itemize}\n\n");
    }

    section(&mut out, "Languages", &escape_latex(&doc.languages.join(", ")));

    out.push_str("\\end{document}\n");
    out
}

fn section(out: &mut String, title: &str, body: &str) {
    out.push_str(&format!("\\section*{{{title}}}\n{body}\n\n"));
}

/// Escapes the LaTeX special characters that can appear in free-text fields.
fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            '\\' => escaped.push_str("\\textbackslash{}"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
