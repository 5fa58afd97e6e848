//! Colors, layout and breakpoints for the modal chrome, buttons and inputs.
//!
//! Pico.css provides the base look. Everything here sits on top of it and is
//! keyed by class name, so components only ever set `class`.

/// Widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 600;

/// Default bottom margin of descriptions and form fields.
pub const DEFAULT_MARGIN_BOTTOM: &str = "24px";

/// The palette, exposed to the stylesheet as CSS custom properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub bg_color: &'static str,
    pub title_color: &'static str,
    pub gen_color: &'static str,
    pub error_color: &'static str,
    pub accent_color: &'static str,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        bg_color: "#ffffff",
        title_color: "#0e103c",
        gen_color: "#7578b5",
        error_color: "red",
        accent_color: "#7b0a75",
    };

    pub const DARK: Theme = Theme {
        bg_color: "#1b1c30",
        title_color: "#ffffff",
        gen_color: "#a4a7d8",
        error_color: "#ff6b6b",
        accent_color: "#8a9ef5",
    };

    pub fn css_variables(&self) -> String {
        format!(
            ":root {{ --nft-bg-color: {}; --nft-title-color: {}; --nft-gen-color: {}; --nft-error-color: {}; --nft-accent-color: {}; }}",
            self.bg_color, self.title_color, self.gen_color, self.error_color, self.accent_color
        )
    }
}

/// Light palette, switched to the dark one when the OS prefers it.
pub fn theme_css() -> String {
    format!(
        "{}\n@media (prefers-color-scheme: dark) {{ {} }}",
        Theme::LIGHT.css_variables(),
        Theme::DARK.css_variables()
    )
}

/// Inline style for an element with a caller-chosen bottom margin.
pub fn margin_bottom(mb: Option<&str>) -> String {
    format!("margin-bottom: {};", mb.unwrap_or(DEFAULT_MARGIN_BOTTOM))
}

pub const MODAL_CSS: &str = r#"
    /* --- BACKDROP --- */
    .modal-background {
        z-index: 104;
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        background: rgba(0, 0, 0, 0.7);
        display: flex;
        justify-content: center;
        align-items: flex-start;
    }

    /* --- MODAL BOX --- */
    .modal-box {
        display: flex;
        width: 100%;
        max-width: calc(100% - 32px);
        height: calc(100% - 40px);
        max-height: 700px;
        flex-direction: column;
        justify-content: flex-start;
        margin: 30px auto 0 auto !important;
        padding: 20px;
        border-radius: 8px;
        box-shadow: 0 8px 8px -4px rgba(0, 0, 0, 0.1), 0 0 4px 0 rgba(0, 0, 0, 0.08);
        background-color: var(--nft-bg-color);
        overflow-y: auto;
    }

    @media (min-width: 600px) {
        .modal-box { width: 416px; }
    }

    .modal-section {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
    }

    .modal-close {
        cursor: pointer;
    }

    .modal-title {
        font-size: 24px;
        line-height: 1.2;
        color: var(--nft-title-color);
        margin-bottom: 10px;
        font-weight: normal;
    }

    .modal-description {
        font-size: 14px;
        line-height: 24px;
        color: var(--nft-gen-color);
    }

    .modal-error {
        display: block;
        font-size: 12px;
        line-height: 24px;
        color: var(--nft-error-color);
        margin-bottom: 20px;
    }

    .modal-column {
        display: flex;
        flex-direction: column;
    }

    /* --- FORM CONTROLS --- */
    .dropdown-menu {
        width: 100%;
        margin-bottom: 16px;
        border-radius: 8px;
        cursor: pointer;
    }

    .input-field input {
        width: 100%;
        margin-bottom: 0;
        border-radius: 8px;
        font-size: 16px;
        line-height: 1.5;
    }

    .half-button {
        display: flex;
        align-items: center;
        justify-content: center;
        min-width: 144px;
        align-self: flex-end;
        margin: 0;
        padding: 11px 16px 13px;
        background-color: var(--nft-accent-color);
        border-color: var(--nft-accent-color);
    }

    .half-button.full-width {
        width: 100%;
        align-self: stretch;
    }

    .half-button:disabled {
        pointer-events: none;
        opacity: 0.2;
    }

    .spinner-container {
        display: flex;
        justify-content: center;
        margin-bottom: 10px;
    }
"#;
