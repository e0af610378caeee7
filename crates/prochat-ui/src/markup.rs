//! Static markup for the ProChat brand logo.
//!
//! # Design
//! - Geometry, fill and `viewBox` are fixed; only the wrapper attributes and the
//!   accessible label vary between renders.
//! - The label is resolved through [`FormatMessage`] so callers decide how
//!   localization happens; whatever it returns is used verbatim.
//! - The `ProChatLogo` component builds its virtual DOM from these constants;
//!   [`LogoMarkup::to_html`] serves the native renderer.
//! - Serialization escapes every attribute value and skips names that
//!   [`HtmlAttributes::writable`] rejects.

use crate::attrs::HtmlAttributes;
use crate::i18n::{FormatMessage, MessageDescriptor};
use html_escape::encode_double_quoted_attribute;

/// Message id for the logo's accessible label.
pub const LOGO_MESSAGE_ID: &str = "generic_icons.mattermost";
/// Label used when no catalog translates [`LOGO_MESSAGE_ID`].
pub const LOGO_DEFAULT_LABEL: &str = "ProChat Logo";
/// SVG coordinate system of the mark.
pub const LOGO_VIEW_BOX: &str = "0 0 112 112";
/// Offset applied to the polygon group.
pub const LOGO_TRANSFORM: &str = "translate(-34.843 -50)";
/// Brand orange.
pub const LOGO_FILL: &str = "#ff620d";
/// Point lists of the two halves of the mark.
pub const LOGO_POLYGONS: [&str; 2] = [
    "131.61 126.4 131.68 126.36 131.69 73.588 90.862 50.011 90.843 50 90.843 61.406 121.81 79.289 121.8 120.65 90.843 138.52 90.843 149.93",
    "59.883 132.06 59.878 90.692 90.843 72.81 90.843 61.403 90.824 61.414 50 84.992 50.006 137.76 50.075 137.8 90.843 161.33 90.843 149.92",
];

/// Namespace declared on the `<svg>` root.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
/// SVG version declared on the `<svg>` root.
pub const SVG_VERSION: &str = "1.1";

/// Descriptor used to localize the logo label.
#[must_use]
pub const fn logo_descriptor() -> MessageDescriptor<'static> {
    MessageDescriptor {
        id: LOGO_MESSAGE_ID,
        default_message: LOGO_DEFAULT_LABEL,
    }
}

/// One rendered logo: wrapper attributes plus the resolved label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoMarkup {
    wrapper: HtmlAttributes,
    label: String,
}

impl LogoMarkup {
    /// Attributes placed on the wrapping `<span>`.
    #[must_use]
    pub const fn wrapper_attributes(&self) -> &HtmlAttributes {
        &self.wrapper
    }

    /// Accessible label carried by the `<svg>`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Serialize the fragment as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(640);
        out.push_str("<span");
        for (name, value) in self.wrapper.writable() {
            push_attr(&mut out, name, value);
        }
        out.push_str("><svg");
        push_attr(&mut out, "version", SVG_VERSION);
        push_attr(&mut out, "viewBox", LOGO_VIEW_BOX);
        push_attr(&mut out, "xmlns", SVG_NAMESPACE);
        push_attr(&mut out, "role", "img");
        push_attr(&mut out, "aria-label", &self.label);
        out.push_str("><g");
        push_attr(&mut out, "transform", LOGO_TRANSFORM);
        push_attr(&mut out, "fill", LOGO_FILL);
        out.push('>');
        for points in LOGO_POLYGONS {
            out.push_str("<polygon");
            push_attr(&mut out, "points", points);
            push_attr(&mut out, "fill", LOGO_FILL);
            out.push_str("></polygon>");
        }
        out.push_str("</g></svg></span>");
        out
    }
}

/// Build the logo markup, forwarding `attrs` onto the wrapper untouched.
pub fn render_logo<F>(attrs: HtmlAttributes, formatter: &F) -> LogoMarkup
where
    F: FormatMessage + ?Sized,
{
    LogoMarkup {
        wrapper: attrs,
        label: formatter.format_message(&logo_descriptor()),
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}
