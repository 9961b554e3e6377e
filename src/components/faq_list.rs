use yew::prelude::*;

use crate::faq::{FaqDisclosure, FAQ_ENTRIES};

#[function_component(FaqList)]
pub fn faq_list() -> Html {
    let disclosure = use_state(FaqDisclosure::default);

    html! {
        <div class="faq-list">
            { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| {
                let toggle = {
                    let disclosure = disclosure.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = *disclosure;
                        next.toggle(index);
                        disclosure.set(next);
                    })
                };
                let open = disclosure.is_open(index);
                html! {
                    <div class={classes!("faq-item", open.then(|| "active"))}>
                        <button class="faq-question" onclick={toggle} aria-expanded={open.to_string()}>
                            <span>{entry.question}</span>
                            <span class="faq-icon">{"+"}</span>
                        </button>
                        <div class="faq-answer">
                            <div>
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
