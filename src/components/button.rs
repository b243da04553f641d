use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::Icon;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> Option<&'static str> {
        match self {
            ButtonSize::Sm => Some("btn-sm"),
            ButtonSize::Md => None,
            ButtonSize::Lg => Some("btn-lg"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// Trailing icon, rendered after the label.
    #[prop_or_default]
    pub icon: Option<Icon>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = classes!(
        "btn",
        props.variant.class(),
        props.size.class(),
        props.class.clone(),
    );
    html! {
        <button class={classes} onclick={props.onclick.clone()}>
            { for props.children.iter() }
            if let Some(icon) = props.icon {
                { icon.render(18) }
            }
        </button>
    }
}
