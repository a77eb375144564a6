use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Container for overlay content (confirmation dialogs). Hidden until the
/// `show` class is toggled on via `open_modal_sheet`.
pub struct ModalSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="modal-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

// The class toggle runs on a short timeout so the browser registers the
// initial state first and the CSS transition fires.

pub fn open_modal_sheet(sheet_ref: NodeRef) {
    toggle_sheet_class(sheet_ref, "add");
}

pub fn close_modal_sheet(sheet_ref: NodeRef) {
    toggle_sheet_class(sheet_ref, "remove");
}

fn toggle_sheet_class(sheet_ref: NodeRef, operation: &str) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            sheet.id(),
            operation
        ));
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50);
        }
    }
}
