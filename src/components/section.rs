use yew::prelude::*;

/// Full-width page band with the shared max-width inner column. `darker`
/// bands alternate the background to break up the page.
#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub darker: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let classes = classes!(
        "section",
        props.darker.then_some("darker"),
        props.class.clone(),
    );
    html! {
        <section id={props.id.clone()} class={classes}>
            <div class="section-inner">
                { for props.children.iter() }
            </div>
        </section>
    }
}
