use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectionNoticeProps {
    pub message: Option<String>,
}

#[function_component(SelectionNotice)]
pub fn selection_notice(props: &SelectionNoticeProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="selection-notice" role="status">
                <p>{message}</p>
            </div>
        },
        None => html! {},
    }
}
