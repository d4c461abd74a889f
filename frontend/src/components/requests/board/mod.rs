//! Live request board: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view
//! rendering, and transport helpers.
//!
//! Responsibilities
//! - Open the live request subscription exactly once, on first render.
//! - Tear it down exactly once when the component leaves the tree, so a
//!   remount can never race two concurrent subscriptions.
//! - Load the session profile and hospital directory alongside it.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::RequestBoard;

impl Component for RequestBoard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        RequestBoard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.subscribed {
            self.subscribed = true;

            match helpers::subscribe_active_requests(ctx.link()) {
                Ok(guard) => self.subscription = Some(guard),
                Err(e) => ctx.link().send_message(Msg::StreamError(e)),
            }
            helpers::fetch_session(ctx.link());
            helpers::fetch_hospitals(ctx.link());
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}
