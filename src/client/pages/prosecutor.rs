use dioxus::prelude::*;
use log::debug;

use crate::routes::View;

pub fn Prosecutor(cx: Scope) -> Element {
    debug!("rendering {}", View::Prosecutor);
    let title = View::Prosecutor.title();
    cx.render(rsx!(
        section {
            h2 { "{title}" }
            p {
                "Documents received from law firms are listed here."
            }
        }
    ))
}
