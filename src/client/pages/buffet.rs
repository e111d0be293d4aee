use dioxus::prelude::*;
use log::debug;

use crate::routes::View;

pub fn Buffet(cx: Scope) -> Element {
    debug!("rendering {}", View::Buffet);
    let title = View::Buffet.title();
    cx.render(rsx!(
        section {
            h2 { "{title}" }
            p {
                "Documents prepared here are sent to the prosecutor's office."
            }
        }
    ))
}
