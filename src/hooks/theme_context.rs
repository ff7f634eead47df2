use yew::prelude::*;

use crate::stores::theme_store::{apply_theme, initial_theme, Theme};

#[derive(Clone, PartialEq)]
pub struct UseThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeContextProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeContextProvider)]
pub fn theme_context_provider(props: &ThemeContextProviderProps) -> Html {
    let theme = use_state(initial_theme);

    {
        let current = *theme;
        use_effect_with(current, move |theme| {
            apply_theme(*theme);
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set((*theme).toggled()))
    };

    let handle = UseThemeHandle {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<UseThemeHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseThemeHandle>>
    }
}

#[hook]
pub fn use_theme() -> UseThemeHandle {
    use_context::<UseThemeHandle>().expect("ThemeContextProvider is missing from the tree")
}
