/// Assembles the overlay page: the summary lines as a semi-transparent
/// monospace block, right-aligned, on a transparent page suitable as a
/// browser source. The page refreshes itself so a running scene picks up
/// newly written builds.
pub fn render_overlay(lines: &[&str]) -> String {
    let body = lines
        .iter()
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join("\n");

    page(&format!("<div class=\"build\">{}</div>", body))
}

/// The idle state shown while no game is active: just the transparent page,
/// no block at all.
pub fn render_idle_overlay() -> String {
    page("")
}

fn page(content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta http-equiv=\"refresh\" content=\"10\">\n\
         <style>\n\
         body {{ margin: 0; background: transparent; text-align: right; }}\n\
         .build {{\n\
           display: inline-block;\n\
           background: rgba(0, 0, 0, 0.55);\n\
           color: #fff;\n\
           font-family: monospace;\n\
           white-space: pre;\n\
           padding: 8px 12px;\n\
           border-radius: 4px;\n\
         }}\n\
         </style>\n\
         </head>\n\
         <body>{}</body>\n\
         </html>\n",
        content
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_contains_all_lines_in_order() {
        let html = render_overlay(&["  AD Reds", "MR Yellows", "     21/9/0"]);

        let reds = html.find("  AD Reds").unwrap();
        let yellows = html.find("MR Yellows").unwrap();
        let masteries = html.find("     21/9/0").unwrap();
        assert!(reds < yellows && yellows < masteries);
    }

    #[test]
    fn markup_characters_are_escaped() {
        let html = render_overlay(&["<AD> & co"]);
        assert!(html.contains("&lt;AD&gt; &amp; co"));
        assert!(!html.contains("<AD>"));
    }

    #[test]
    fn idle_overlay_has_no_build_block() {
        assert!(!render_idle_overlay().contains("class=\"build\""));
    }
}
