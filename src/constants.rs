/// Page wiring and timing constants for the web frontend.
///
/// Element ids and selectors must match the landing page markup.
// Particle overlay
pub const PARTICLE_CONTAINER_ID: &str = "particle-container";
pub const CANVAS_Z_INDEX: &str = "1";
pub const GLYPH_FONT_FAMILY: &str = "'Courier New', monospace";

// Heading scramble
pub const HEADING_ID: &str = "main-heading";
pub const HEADING_TEXT: &str = "CODE X";
pub const SCRAMBLE_DURATION_MS: u64 = 2000;
pub const SCRAMBLE_INTERVAL_MS: i32 = 50;
pub const SCRAMBLING_CLASS: &str = "scrambling";

// Tagline reveal starts once the heading has settled
pub const TAGLINE_WORD_SELECTOR: &str = ".tagline .word";
pub const TAGLINE_START_DELAY_MS: i32 = 2000;
pub const TAGLINE_DELAY_ATTR: &str = "data-delay";
pub const TAGLINE_ANIMATE_CLASS: &str = "animate";

// Waitlist form
pub const EMAIL_INPUT_ID: &str = "email-input";
pub const CTA_BUTTON_ID: &str = "cta-button";
pub const CTA_VISIBLE_CLASS: &str = "visible";
pub const CTA_SUBMITTED_BACKGROUND: &str = "rgba(0, 255, 255, 0.2)";
pub const CTA_IDLE_BACKGROUND: &str = "transparent";
pub const INPUT_ERROR_BORDER: &str = "#ff4444";
pub const INPUT_ERROR_SHADOW: &str = "0 0 10px rgba(255, 68, 68, 0.3)";
pub const INPUT_IDLE_BORDER: &str = "rgba(255, 255, 255, 0.3)";
