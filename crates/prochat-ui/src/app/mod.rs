//! Browser entry point: a small shell that hosts the logo and a locale picker.

use crate::attrs::HtmlAttributes;
use crate::components::icons::ProChatLogo;
use crate::i18n::{LocaleCode, TranslationBundle};
use preferences::{load_locale, persist_locale};
use yew::prelude::*;

mod preferences;

#[function_component(ProChatDemo)]
fn prochat_demo() -> Html {
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(locale, move |locale| TranslationBundle::new(*locale))
    };
    let dir = if bundle.rtl() { "rtl" } else { "ltr" };
    let logo_attrs = HtmlAttributes::new()
        .class("prochat-logo")
        .with("data-locale", locale.code());

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <main class="prochat-demo" dir={dir} lang={locale.code()}>
                <header class="flex items-center gap-2">
                    <ProChatLogo attrs={logo_attrs} />
                    <h1>{bundle.text("demo.title", "ProChat")}</h1>
                </header>
                <nav aria-label={bundle.text("demo.locale", "Language")}>
                    {for LocaleCode::all().iter().map(|lc| {
                        let next = *lc;
                        let locale = locale.clone();
                        let onclick = Callback::from(move |_| {
                            persist_locale(next);
                            locale.set(next);
                        });
                        html! {
                            <button type="button" lang={next.code()} onclick={onclick}>
                                {next.label()}
                            </button>
                        }
                    })}
                </nav>
            </main>
        </ContextProvider<TranslationBundle>>
    }
}

/// Mount the demo shell on `#root`, or on `<body>` when no root element exists.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ProChatDemo>::with_root(root).render();
    } else {
        yew::Renderer::<ProChatDemo>::new().render();
    }
}
