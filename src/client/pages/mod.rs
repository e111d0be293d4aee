#![allow(non_snake_case)]
use dioxus::prelude::*;
use log::error;

use crate::routes::{View, ROUTES};

mod buffet;
mod layout;
mod prosecutor;

pub fn app(cx: Scope) -> Element {
    let table = match &*ROUTES {
        Ok(table) => table,
        Err(err) => {
            error!("invalid route table: {err}");
            return cx.render(rsx!(
                div {
                    "Invalid route table: {err}"
                }
            ));
        }
    };

    let views = table.views().map(|route| {
        let outlet = match route.view {
            View::Buffet => rsx!(buffet::Buffet {}),
            View::Prosecutor => rsx!(prosecutor::Prosecutor {}),
        };
        rsx!(
            Route {
                key: "{route.name}",
                to: route.path,
                outlet
            }
        )
    });
    let redirects = table.redirects().filter_map(|redirect| {
        let target = table.redirect_target(redirect)?;
        Some(rsx!(
            Redirect {
                key: "{redirect.from}",
                from: redirect.from,
                to: target.path,
            }
        ))
    });

    cx.render(rsx! {
        Router {
            layout::Layout {
                table: table,
                views
                redirects
            }
        }
    })
}
