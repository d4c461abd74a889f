use crate::components::donors::directory::DonorDirectory;
use crate::components::requests::board::RequestBoard;
use yew::{classes, html, Component, Context, Html};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum View {
    Requests,
    Donors,
}

pub enum Msg {
    SetView(View),
}

/// Application shell: a header with two tabs, each mounting one of the
/// live views. Switching tabs destroys the previous component, which
/// tears down its subscription before the next one can open its own.
pub struct App {
    view: View,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            view: View::Requests,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetView(view) => {
                if self.view == view {
                    false
                } else {
                    self.view = view;
                    true
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tab = |label: &str, view: View| {
            html! {
                <button
                    class={classes!("tab-btn", if self.view == view { "active" } else { "" })}
                    onclick={link.callback(move |_| Msg::SetView(view))}
                >
                    { label }
                </button>
            }
        };

        html! {
            <div class="app-root">
                <header class="app-header">
                    <h1>{ "BloodLink" }</h1>
                    <nav class="tab-bar">
                        { tab("Blood requests", View::Requests) }
                        { tab("Donors", View::Donors) }
                    </nav>
                </header>
                <main>
                    {
                        match self.view {
                            View::Requests => html! { <RequestBoard /> },
                            View::Donors => html! { <DonorDirectory /> },
                        }
                    }
                </main>
            </div>
        }
    }
}
