use crate::attrs::HtmlAttributes;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::markup::{
    LOGO_FILL, LOGO_POLYGONS, LOGO_TRANSFORM, LOGO_VIEW_BOX, SVG_NAMESPACE, SVG_VERSION,
    render_logo,
};
use yew::prelude::*;
use yew::virtual_dom::{Attributes, VTag};

/// Props for [`ProChatLogo`].
#[derive(Properties, PartialEq)]
pub struct ProChatLogoProps {
    /// Attributes forwarded verbatim onto the wrapping `<span>`.
    #[prop_or_default]
    pub attrs: HtmlAttributes,
}

/// Brand mark wrapped in a `<span>`, labelled from the [`TranslationBundle`] context.
#[function_component(ProChatLogo)]
pub fn prochat_logo(props: &ProChatLogoProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let markup = render_logo(props.attrs.clone(), &bundle);

    let mut wrapper = VTag::new("span");
    wrapper.set_attributes(Attributes::from(markup.wrapper_attributes()));
    wrapper.add_child(html! {
        <svg
            version={SVG_VERSION}
            viewBox={LOGO_VIEW_BOX}
            xmlns={SVG_NAMESPACE}
            role="img"
            aria-label={markup.label().to_string()}
        >
            <g transform={LOGO_TRANSFORM} fill={LOGO_FILL}>
                {for LOGO_POLYGONS.iter().map(|points| html! {
                    <polygon points={*points} fill={LOGO_FILL} />
                })}
            </g>
        </svg>
    });
    wrapper.into()
}
