//! Page footer component

use maud::{Markup, html};

/// Renders the generator footer shown on every page
pub fn footer() -> Markup {
    html! {
        footer class="page-footer" {
            p {
                "Generated by Screener v" (env!("CARGO_PKG_VERSION"))
            }
        }
    }
}
