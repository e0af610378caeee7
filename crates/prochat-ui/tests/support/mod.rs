// Shared test harness for prochat-ui component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use prochat_ui::HtmlAttributes;
use prochat_ui::components::icons::ProChatLogo;
use prochat_ui::i18n::{LocaleCode, TranslationBundle};
use yew::platform::time::sleep;
use yew::prelude::*;

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo::utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo::utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

#[derive(Properties, PartialEq)]
pub struct LogoHarnessProps {
    pub attrs: HtmlAttributes,
    pub locale: Option<LocaleCode>,
}

/// Renders the logo, optionally inside a translation context.
#[function_component(LogoHarness)]
pub fn logo_harness(props: &LogoHarnessProps) -> Html {
    let logo = html! { <ProChatLogo attrs={props.attrs.clone()} /> };
    match props.locale {
        Some(locale) => html! {
            <ContextProvider<TranslationBundle> context={TranslationBundle::new(locale)}>
                {logo}
            </ContextProvider<TranslationBundle>>
        },
        None => logo,
    }
}

/// Mount the harness and wait one tick for the initial render to flush.
pub async fn mount_logo(attrs: HtmlAttributes, locale: Option<LocaleCode>) -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<LogoHarness>::with_root_and_props(
        mount.clone(),
        LogoHarnessProps { attrs, locale },
    )
    .render();
    sleep(Duration::ZERO).await;
    mount
}

/// Like [`mount_logo`], keeping the app handle so tests can push new props.
pub async fn mount_logo_with_handle(
    attrs: HtmlAttributes,
) -> (web_sys::Element, yew::AppHandle<LogoHarness>) {
    let mount = create_mount_point();
    let handle = yew::Renderer::<LogoHarness>::with_root_and_props(
        mount.clone(),
        LogoHarnessProps {
            attrs,
            locale: None,
        },
    )
    .render();
    sleep(Duration::ZERO).await;
    (mount, handle)
}

/// Push new wrapper attributes and wait for the re-render to flush.
pub async fn update_logo(handle: &mut yew::AppHandle<LogoHarness>, attrs: HtmlAttributes) {
    handle.update(LogoHarnessProps {
        attrs,
        locale: None,
    });
    sleep(Duration::ZERO).await;
}
