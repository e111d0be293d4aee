use dioxus::prelude::*;

use crate::routes::RouteTable;

#[inline_props]
pub fn Layout<'a>(cx: Scope<'a>, table: &'a RouteTable, children: Element<'a>) -> Element {
    let links = table.views().map(|route| {
        let title = route.view.title();
        rsx!(
            li {
                key: "{route.name}",
                Link {
                    to: route.path,
                    "{title}"
                }
            }
        )
    });
    cx.render(rsx! (
        header {
            class: "mx-auto text-center",
            h1 {
                class: "text-3xl p-6",
                "Document transmission"
            }
            nav {
                ul {
                    links
                }
            }
        }
        main {
            class: "text-center",
            children
        }
    ))
}
