//! Static page rendering.
//!
//! The UI is one HTML page, rendered once at startup from an embedded tera
//! template: game instructions, the generate/reset triggers, and display
//! regions for the image, the chart, the checklist-card download link, and
//! the how-to-play video. All per-generation content arrives later as JSON
//! from `POST /generate`; nothing on the page itself changes between
//! triggers.

use tera::{Context, Tera};
use thiserror::Error;

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

/// Title shown at the top of the page.
pub const PAGE_TITLE: &str = "Which student will appear?";

/// Printable checklist cards used alongside the digital tool.
pub const DOWNLOAD_URL: &str =
    "https://drive.google.com/drive/folders/1G10VNydf2vMAKTOaBcFfGL4sG8OAKnp_?usp=drive_link";

/// How-to-play video.
pub const VIDEO_URL: &str = "https://www.youtube.com/embed/UgBUfd_x3UQ";

/// How the card game is played, one line per step.
const GAME_STEPS: [&str; 8] = [
    "Players: 2-6. You need the 20 lesson-design principle cards, the 17 AIDT cards, and a bell.",
    "Deal the principle cards evenly; stack any remainder in the middle.",
    "Spread all AIDT cards face up in the middle.",
    "Place one device in the middle of the group and press \"Generate persona\".",
    "When the image appears, study the student's traits together.",
    "Compare the student with the principle cards in your hand and judge whether the lesson suits them.",
    "Ring the bell, play a matching principle card, and give your verdict. Pick an AIDT card too if one would help improve the lesson.",
    "If the majority agrees, discard your card. First player out of cards wins.",
];

#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to render page template: {0}")]
    Template(#[from] tera::Error),
}

/// Render the single page.
///
/// Called once at startup; the result is served verbatim for every `GET /`.
pub fn render_page() -> Result<String, PageError> {
    let mut context = Context::new();
    context.insert("title", PAGE_TITLE);
    context.insert("steps", &GAME_STEPS);
    context.insert("download_url", DOWNLOAD_URL);
    context.insert("video_url", VIDEO_URL);

    Ok(Tera::one_off(PAGE_TEMPLATE, &context, false)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_renders_with_all_regions() {
        let html = render_page().unwrap();
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains(DOWNLOAD_URL));
        assert!(html.contains(VIDEO_URL));
        assert!(html.contains("id=\"generate\""));
        assert!(html.contains("id=\"reset\""));
        assert!(html.contains("id=\"persona\""));
    }

    #[test]
    fn test_page_lists_every_game_step() {
        let html = render_page().unwrap();
        for step in GAME_STEPS {
            assert!(html.contains(step), "missing step: {}", step);
        }
    }
}
